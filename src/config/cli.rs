use crate::domain::model::FileType;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "generic-library")]
#[command(about = "File, directory and regular expression helpers", version)]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the content of a file
    Read { path: PathBuf },

    /// Write a line to a file, appending unless --overwrite is given
    Write {
        path: PathBuf,
        text: String,
        #[arg(long)]
        overwrite: bool,
    },

    /// Create a file or directory if nothing exists at the path
    Create {
        path: PathBuf,
        #[arg(long = "type", default_value = "file", value_parser = parse_file_type)]
        file_type: FileType,
    },

    /// List the entries of a directory
    List {
        path: PathBuf,
        #[arg(long = "type", value_parser = parse_file_type)]
        file_type: Option<FileType>,
    },

    /// Print the words of TEXT that fully match REGEX
    FindWords { text: String, regex: String },

    /// Check whether the whole of TEXT matches REGEX
    Validate { text: String, regex: String },

    /// Replace every match of REGEX in TEXT
    Replace {
        text: String,
        regex: String,
        replacement: String,
    },

    /// Parse delimited numbers
    Numbers {
        words: String,
        /// Delimiter regular expression; defaults to the configured one
        #[arg(short, long)]
        delimiter: Option<String>,
        /// Print only the integer part of the largest value
        #[arg(long)]
        max: bool,
    },

    /// Pick the first file with EXTENSION in DIR
    Choose { dir: PathBuf, extension: String },
}

fn parse_file_type(value: &str) -> std::result::Result<FileType, String> {
    value.parse().map_err(|e: crate::LibraryError| e.to_string())
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(config) = &self.config {
            validate_path("--config", &config.to_string_lossy())?;
        }
        match &self.command {
            Command::Numbers {
                delimiter: Some(delimiter),
                ..
            } => validate_non_empty_string("--delimiter", delimiter),
            Command::Choose { extension, .. } => validate_non_empty_string("extension", extension),
            _ => Ok(()),
        }
    }
}
