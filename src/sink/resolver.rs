//! Builtin-type resolver: turns a short sink type ("kafka") into a `builtin://` archive locator.

use crate::admin::ConnectorCatalog;
use crate::error::AdminError;
use crate::sink::model::BUILTIN_SCHEME;
use thiserror::Error;
use tracing::warn;

/// How a requested type name is matched against the catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MembershipPolicy {
    /// The name must equal one catalog entry.
    #[default]
    Exact,
    /// The name may appear anywhere in the space-joined list of catalog names.
    /// Kept for scripts written against the old matcher; "kaf" matches "kafka".
    Substring,
}

impl MembershipPolicy {
    /// `names` is in catalog order; the substring form joins them as listed.
    fn matches(self, names: &[String], requested: &str) -> bool {
        match self {
            MembershipPolicy::Exact => names.iter().any(|name| name == requested),
            MembershipPolicy::Substring => names.join(" ").contains(requested),
        }
    }
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Failed to fetch builtin sinks: {0}")]
    Catalog(#[source] AdminError),

    #[error("Invalid sink type [{requested}] -- available sinks are: {available:?}")]
    UnknownType {
        requested: String,
        available: Vec<String>,
    },
}

/// Resolve a sink type, reporting why resolution failed.
pub async fn try_resolve_builtin_archive(
    sink_type: &str,
    catalog: &dyn ConnectorCatalog,
    policy: MembershipPolicy,
) -> Result<String, ResolveError> {
    let definitions = catalog
        .builtin_sinks()
        .await
        .map_err(ResolveError::Catalog)?;
    let names: Vec<String> = definitions.into_iter().map(|d| d.name).collect();

    if sink_type.is_empty() || !policy.matches(&names, sink_type) {
        return Err(ResolveError::UnknownType {
            requested: sink_type.to_string(),
            available: names,
        });
    }

    Ok(format!("{}{}", BUILTIN_SCHEME, sink_type))
}

/// Resolve a sink type, returning an empty string when it cannot be resolved.
///
/// Callers store the result in `archive`, so a failed resolution surfaces later as
/// "Sink archive not specified". The reason is logged here.
pub async fn resolve_builtin_archive(
    sink_type: &str,
    catalog: &dyn ConnectorCatalog,
    policy: MembershipPolicy,
) -> String {
    match try_resolve_builtin_archive(sink_type, catalog, policy).await {
        Ok(archive) => archive,
        Err(e) => {
            warn!(sink_type, error = %e, "Could not resolve builtin sink type");
            String::new()
        }
    }
}
