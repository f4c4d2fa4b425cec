use crate::utils::error::{LibraryError, Result};
use regex::Regex;
use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

/// Runs of spaces, or a single `,` `.` `;`.
pub const WORD_SEPARATORS: &str = r"( +|[,.;])";

const CACHE_CAPACITY: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Anchoring {
    Unanchored,
    Whole,
}

type PatternCache = Mutex<HashMap<(Anchoring, String), Regex>>;

fn cache() -> &'static PatternCache {
    static CACHE: OnceLock<PatternCache> = OnceLock::new();
    CACHE.get_or_init(|| Mutex::new(HashMap::new()))
}

fn cached<F>(anchoring: Anchoring, pattern: &str, build: F) -> Result<Regex>
where
    F: FnOnce() -> Result<Regex>,
{
    let key = (anchoring, pattern.to_string());
    if let Ok(cached) = cache().lock() {
        if let Some(re) = cached.get(&key) {
            return Ok(re.clone());
        }
    }

    let re = build()?;
    tracing::trace!("Compiled pattern {} ({:?})", pattern, anchoring);

    if let Ok(mut cached) = cache().lock() {
        if cached.len() >= CACHE_CAPACITY {
            cached.clear();
        }
        cached.insert(key, re.clone());
    }
    Ok(re)
}

pub(crate) fn compile(pattern: &str) -> Result<Regex> {
    cached(Anchoring::Unanchored, pattern, || {
        Regex::new(pattern).map_err(|e| LibraryError::regex(pattern, e))
    })
}

/// Like [`compile`], but the pattern has to cover the whole input.
pub(crate) fn compile_full(pattern: &str) -> Result<Regex> {
    cached(Anchoring::Whole, pattern, || {
        // Errors point at what the caller wrote, not at the wrapped form.
        Regex::new(pattern).map_err(|e| LibraryError::regex(pattern, e))?;
        // Under `(?x)` a trailing `# comment` swallows the closing group;
        // a newline ends the comment and is ignored in that mode.
        Regex::new(&format!("^(?:{})$", pattern))
            .or_else(|_| Regex::new(&format!("^(?:{}\n)$", pattern)))
            .map_err(|e| LibraryError::regex(pattern, e))
    })
}

/// Splits `text` with `separator`. Empty input gives one empty piece, a
/// zero-width match at the start adds no leading piece, and trailing empty
/// pieces are dropped.
pub(crate) fn split_trimmed<'a>(text: &'a str, separator: &Regex) -> Vec<&'a str> {
    if text.is_empty() {
        return vec![text];
    }

    let mut pieces: Vec<&str> = separator.split(text).collect();
    let zero_width_at_start = separator
        .find(text)
        .is_some_and(|m| m.start() == 0 && m.end() == 0);
    if zero_width_at_start && pieces.first().is_some_and(|p| p.is_empty()) {
        pieces.remove(0);
    }
    while pieces.last().is_some_and(|p| p.is_empty()) {
        pieces.pop();
    }
    pieces
}

/// Whether the whole of `text` matches `regex`.
pub fn validate_by_regular_expression(text: &str, regex: &str) -> Result<bool> {
    Ok(compile_full(regex)?.is_match(text))
}

/// Replaces every match of `regex` in `text`. `$1` and `${name}` in
/// `replacement` refer to capture groups.
pub fn replace_by_regular_expression(text: &str, regex: &str, replacement: &str) -> Result<String> {
    Ok(compile(regex)?.replace_all(text, replacement).into_owned())
}

pub fn split_words(text: &str) -> Vec<String> {
    match compile(WORD_SEPARATORS) {
        Ok(separator) => split_trimmed(text, &separator)
            .into_iter()
            .map(str::to_string)
            .collect(),
        // WORD_SEPARATORS is a valid constant pattern.
        Err(_) => text.split_whitespace().map(str::to_string).collect(),
    }
}

/// Words of `text` that fully match `regex`, in order of appearance.
pub fn find_words(text: &str, regex: &str) -> Result<Vec<String>> {
    let re = compile_full(regex)?;
    Ok(split_words(text)
        .into_iter()
        .filter(|word| re.is_match(word))
        .collect())
}
