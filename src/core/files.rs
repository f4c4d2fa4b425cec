use crate::domain::model::FileType;
use crate::domain::ports::{ExtensionFilter, FileChooser};
use crate::utils::error::Result;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

/// File and directory operations on one managed path.
///
/// The path does not need to exist; [`Files::create_file`] can create it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Files {
    path: PathBuf,
}

impl Files {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn file(&self) -> &Path {
        &self.path
    }

    pub fn set_file<P: Into<PathBuf>>(&mut self, path: P) {
        self.path = path.into();
    }

    /// Writes `text` followed by [`LINE_SEPARATOR`]. With `overwrite` the
    /// previous content is replaced, otherwise the line is appended.
    pub async fn write_file(&self, text: &str, overwrite: bool) -> Result<()> {
        let mut options = OpenOptions::new();
        options.create(true);
        if overwrite {
            options.write(true).truncate(true);
        } else {
            options.append(true);
        }

        let mut file = options.open(&self.path).await?;
        file.write_all(text.as_bytes()).await?;
        file.write_all(LINE_SEPARATOR.as_bytes()).await?;
        file.flush().await?;

        tracing::debug!(
            "Wrote {} bytes to {} (overwrite: {})",
            text.len(),
            self.path.display(),
            overwrite
        );
        Ok(())
    }

    /// Reads the whole file. Every line, the last one included, ends with
    /// [`LINE_SEPARATOR`] whatever the file used. Bytes that are not valid
    /// UTF-8 become U+FFFD.
    pub async fn read_file(&self) -> Result<String> {
        let file = fs::File::open(&self.path).await?;
        let mut reader = BufReader::new(file);
        let mut content = String::new();
        let mut line = Vec::new();
        loop {
            line.clear();
            if reader.read_until(b'\n', &mut line).await? == 0 {
                break;
            }
            if line.last() == Some(&b'\n') {
                line.pop();
                if line.last() == Some(&b'\r') {
                    line.pop();
                }
            }
            content.push_str(&String::from_utf8_lossy(&line));
            content.push_str(LINE_SEPARATOR);
        }
        Ok(content)
    }

    /// Returns `false` when something already exists at the path.
    pub async fn create_file(&self, file_type: FileType) -> Result<bool> {
        if fs::try_exists(&self.path).await? {
            tracing::debug!("{} already exists", self.path.display());
            return Ok(false);
        }

        match file_type {
            FileType::Directory => fs::create_dir_all(&self.path).await?,
            FileType::File => {
                match OpenOptions::new()
                    .write(true)
                    .create_new(true)
                    .open(&self.path)
                    .await
                {
                    Ok(_) => {}
                    Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(false),
                    Err(e) => return Err(e.into()),
                }
            }
        }

        tracing::info!("Created {} {}", file_type, self.path.display());
        Ok(true)
    }

    /// Entry names, sorted. Empty unless the path is a directory.
    pub async fn list_files(&self) -> Result<Vec<String>> {
        if !self.is_directory().await {
            return Ok(Vec::new());
        }

        let mut entries = fs::read_dir(&self.path).await?;
        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        Ok(names)
    }

    pub async fn list_files_on_directory(&self, file_type: FileType) -> Result<Vec<String>> {
        let mut matches = Vec::new();
        for name in self.list_files().await? {
            // Follows symlinks, so a link to a directory counts as a directory.
            let metadata = match fs::metadata(self.path.join(&name)).await {
                Ok(metadata) => metadata,
                Err(e) if e.kind() == ErrorKind::NotFound => continue,
                Err(e) => return Err(e.into()),
            };
            let is_match = match file_type {
                FileType::Directory => metadata.is_dir(),
                FileType::File => metadata.is_file(),
            };
            if is_match {
                matches.push(name);
            }
        }
        Ok(matches)
    }

    pub fn find_words(&self, text: &str, regex: &str) -> Result<Vec<String>> {
        crate::core::text::find_words(text, regex)
    }

    /// Asks `chooser` for a file with `extension` and manages it on success.
    pub async fn choose_file(&mut self, chooser: &dyn FileChooser, extension: &str) -> Result<bool> {
        let filter = ExtensionFilter::new(extension);
        match chooser.choose(&filter).await? {
            Some(path) => {
                tracing::info!("Selected {}", path.display());
                self.set_file(path);
                Ok(true)
            }
            None => {
                tracing::debug!("No {} selected", filter.description);
                Ok(false)
            }
        }
    }

    async fn is_directory(&self) -> bool {
        fs::metadata(&self.path)
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false)
    }
}
