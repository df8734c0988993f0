//! Settings file sources, lowest precedence first.

pub mod explicit_file;
pub mod global_file;

pub use global_file::global_settings_path;
