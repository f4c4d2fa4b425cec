use crate::domain::ports::{ExtensionFilter, FileChooser};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Non-interactive chooser: the first regular file in `dir`, by name,
/// that the filter accepts.
#[derive(Debug, Clone)]
pub struct DirectoryChooser {
    dir: PathBuf,
}

impl DirectoryChooser {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl FileChooser for DirectoryChooser {
    async fn choose(&self, filter: &ExtensionFilter) -> Result<Option<PathBuf>> {
        let mut entries = tokio::fs::read_dir(&self.dir).await?;
        let mut candidates = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if !filter.accepts(&path) {
                continue;
            }
            // Dangling symlinks are skipped.
            match tokio::fs::metadata(&path).await {
                Ok(metadata) if metadata.is_file() => candidates.push(path),
                Ok(_) => {}
                Err(e) if e.kind() == ErrorKind::NotFound => continue,
                Err(e) => return Err(e.into()),
            }
        }
        candidates.sort();
        tracing::debug!(
            "{} candidate(s) for {} in {}",
            candidates.len(),
            filter.description,
            self.dir.display()
        );
        Ok(candidates.into_iter().next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_picks_first_matching_file_by_name() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("b.txt"), "").unwrap();
        std::fs::write(temp_dir.path().join("a.txt"), "").unwrap();
        std::fs::write(temp_dir.path().join("0.csv"), "").unwrap();
        std::fs::create_dir(temp_dir.path().join("0.txt")).unwrap();

        let chooser = DirectoryChooser::new(temp_dir.path());
        let chosen = tokio_test::block_on(chooser.choose(&ExtensionFilter::new("txt"))).unwrap();
        assert_eq!(chosen, Some(temp_dir.path().join("a.txt")));
    }

    #[cfg(unix)]
    #[test]
    fn test_skips_dangling_symlink() {
        let temp_dir = TempDir::new().unwrap();
        std::os::unix::fs::symlink(
            temp_dir.path().join("missing-target.txt"),
            temp_dir.path().join("a.txt"),
        )
        .unwrap();
        std::fs::write(temp_dir.path().join("b.txt"), "").unwrap();

        let chooser = DirectoryChooser::new(temp_dir.path());
        let chosen = tokio_test::block_on(chooser.choose(&ExtensionFilter::new("txt"))).unwrap();
        assert_eq!(chosen, Some(temp_dir.path().join("b.txt")));
    }

    #[test]
    fn test_nothing_matches() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("notes.md"), "").unwrap();

        let chooser = DirectoryChooser::new(temp_dir.path());
        let chosen = tokio_test::block_on(chooser.choose(&ExtensionFilter::new("txt"))).unwrap();
        assert!(chosen.is_none());
    }
}
