use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Which files a [`FileChooser`] may return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionFilter {
    pub description: String,
    pub extension: String,
}

impl ExtensionFilter {
    pub fn new(extension: &str) -> Self {
        let extension = extension.trim_start_matches('.').to_string();
        Self {
            description: format!("{} files", extension),
            extension,
        }
    }

    pub fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(&self.extension))
    }
}

/// Picks a single file. `None` means the selection was declined.
#[async_trait]
pub trait FileChooser: Send + Sync {
    async fn choose(&self, filter: &ExtensionFilter) -> Result<Option<PathBuf>>;
}
