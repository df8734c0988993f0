//! CLI output: error mapping from domain errors to the CLI surface.

use crate::error::SinkError;

/// Map pipeline errors to a single line for CLI output.
pub fn map_error(e: &SinkError) -> String {
    match e {
        SinkError::Admin(admin) => format!("Admin service error: {}", admin),
        other => other.to_string(),
    }
}
