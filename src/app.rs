use crate::adapters::chooser::DirectoryChooser;
use crate::config::{Command, LibraryConfig};
use crate::core::files::Files;
use crate::core::numbers;
use crate::domain::model::Generic;
use crate::utils::error::{ErrorSeverity, Result};
use serde::Serialize;

/// Result of one CLI command, before rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Output {
    Text(String),
    Lines(Vec<String>),
    Flag(bool),
    Numbers(Vec<f64>),
    Integer(i64),
}

/// Runs `command`. Relative paths are resolved through `config`.
pub async fn run(command: &Command, config: &LibraryConfig) -> Result<Output> {
    let output = match command {
        Command::Read { path } => Output::Text(Files::new(config.resolve(path)).read_file().await?),
        Command::Write {
            path,
            text,
            overwrite,
        } => {
            let files = Files::new(config.resolve(path));
            files.write_file(text, *overwrite).await?;
            Output::Text(format!("Wrote {}", files.file().display()))
        }
        Command::Create { path, file_type } => {
            Output::Flag(Files::new(config.resolve(path)).create_file(*file_type).await?)
        }
        Command::List { path, file_type } => {
            let files = Files::new(config.resolve(path));
            match file_type {
                Some(file_type) => Output::Lines(files.list_files_on_directory(*file_type).await?),
                None => Output::Lines(files.list_files().await?),
            }
        }
        Command::FindWords { text, regex } => {
            Output::Lines(crate::core::text::find_words(text, regex)?)
        }
        Command::Validate { text, regex } => {
            Output::Flag(crate::core::text::validate_by_regular_expression(text, regex)?)
        }
        Command::Replace {
            text,
            regex,
            replacement,
        } => Output::Text(crate::core::text::replace_by_regular_expression(
            text,
            regex,
            replacement,
        )?),
        Command::Numbers {
            words,
            delimiter,
            max,
        } => {
            let delimiter = delimiter.as_deref().unwrap_or(config.default_delimiter());
            let values = numbers::values_from_words(words, delimiter)?;
            if *max {
                let mut holder: Generic<f64, ()> = Generic::new();
                holder.set_array(values);
                Output::Integer(holder.number_max(&holder)?)
            } else {
                Output::Numbers(values)
            }
        }
        Command::Choose { dir, extension } => {
            let dir = config.resolve(dir);
            let mut files = Files::new(&dir);
            let chooser = DirectoryChooser::new(&dir);
            if files.choose_file(&chooser, extension).await? {
                Output::Text(files.file().display().to_string())
            } else {
                Output::Flag(false)
            }
        }
    };
    Ok(output)
}

/// What the CLI prints to stdout, newline-terminated.
pub fn render(output: &Output, json: bool) -> Result<String> {
    if json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(output)?));
    }

    let rendered = match output {
        Output::Text(text) if text.ends_with('\n') => text.clone(),
        Output::Text(text) => format!("{}\n", text),
        Output::Lines(lines) => lines.iter().map(|line| format!("{}\n", line)).collect(),
        Output::Flag(flag) => format!("{}\n", flag),
        Output::Numbers(values) => values.iter().map(|value| format!("{}\n", value)).collect(),
        Output::Integer(value) => format!("{}\n", value),
    };
    Ok(rendered)
}

pub fn exit_code(severity: ErrorSeverity) -> i32 {
    match severity {
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}
