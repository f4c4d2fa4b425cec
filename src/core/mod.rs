pub mod files;
pub mod numbers;
pub mod text;

pub use crate::domain::model::{FileType, Generic};
pub use crate::domain::ports::{ExtensionFilter, FileChooser};
pub use crate::utils::error::Result;
