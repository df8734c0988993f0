//! Sink configuration aggregation: load a document, merge overrides, resolve
//! builtin types, default the namespace and validate.

pub mod document;
pub mod merge;
pub mod model;
pub mod namespace;
pub mod overrides;
pub mod package;
pub mod pipeline;
pub mod resolver;
pub mod validate;

pub use document::load_document;
pub use merge::merge_overrides;
pub use model::{ProcessingGuarantees, Resources, SinkConfig, SubscriptionPosition};
pub use namespace::{apply_creation_defaults, apply_update_defaults, resolve_sink_ref, SinkRef};
pub use overrides::SinkOverrides;
pub use package::{is_package_url_supported, PackageSource};
pub use pipeline::SinkPipeline;
pub use resolver::{resolve_builtin_archive, try_resolve_builtin_archive, MembershipPolicy, ResolveError};
pub use validate::{
    validate_sink_config, ArchiveLocator, ArgumentInferrer, LocalFileSystem, StandardInference,
};
