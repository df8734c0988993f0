//! CLI domain: parse, route, output, and presentation only.
//! No sink semantics here; the route table dispatches to the sink pipeline.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands, SinkArgs, SinkCommands, SinkIdArgs};
pub use presentation::{format_builtin_json, format_builtin_text, format_sink_config};
pub use route::RunContext;
