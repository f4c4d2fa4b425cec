pub mod adapters;
#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};
pub use config::LibraryConfig;

pub use adapters::chooser::DirectoryChooser;
pub use crate::core::files::{Files, LINE_SEPARATOR};
pub use crate::core::numbers::values_from_words;
pub use crate::core::text::{
    find_words, replace_by_regular_expression, split_words, validate_by_regular_expression,
};
pub use domain::model::{FileType, Generic, Numeric};
pub use domain::ports::{ExtensionFilter, FileChooser};
pub use utils::error::{LibraryError, Result};
