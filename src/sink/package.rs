//! Archive locators and how they are shipped to the admin service.

use crate::sink::model::BUILTIN_SCHEME;
use std::path::PathBuf;

const HTTP: &str = "http";
const FILE: &str = "file";
const FUNCTION_PACKAGE: &str = "function://";
const SINK_PACKAGE: &str = "sink://";
const SOURCE_PACKAGE: &str = "source://";

/// True when the admin service can fetch the archive itself, so only the locator is sent.
pub fn is_package_url_supported(archive: &str) -> bool {
    !archive.is_empty()
        && (archive.starts_with(HTTP)
            || archive.starts_with(FILE)
            || archive.starts_with(FUNCTION_PACKAGE)
            || archive.starts_with(SINK_PACKAGE)
            || archive.starts_with(SOURCE_PACKAGE))
}

/// How the connector artifact accompanies a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageSource {
    /// Locator the service resolves on its side (package URLs and builtin references)
    Url(String),
    /// Local file uploaded with the request
    File(PathBuf),
}

impl PackageSource {
    /// Pick the transport for a validated archive. Returns `None` for an empty archive.
    pub fn for_archive(archive: &str) -> Option<Self> {
        if archive.is_empty() {
            None
        } else if is_package_url_supported(archive) || archive.starts_with(BUILTIN_SCHEME) {
            Some(PackageSource::Url(archive.to_string()))
        } else {
            Some(PackageSource::File(PathBuf::from(archive)))
        }
    }
}
