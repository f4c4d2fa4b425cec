use crate::utils::error::{LibraryError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FileType {
    Directory,
    File,
}

impl FileType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::Directory => "DIRECTORY",
            FileType::File => "FILE",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FileType {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "file" => Ok(FileType::File),
            "directory" | "dir" => Ok(FileType::Directory),
            _ => Err(LibraryError::InvalidConfigValueError {
                field: "file_type".to_string(),
                value: s.to_string(),
                reason: "Expected 'file' or 'directory'".to_string(),
            }),
        }
    }
}

/// Numbers that `Generic` can compare and rank, widened to `f64`.
pub trait Numeric: Copy {
    fn to_f64(self) -> f64;
}

macro_rules! impl_numeric {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_numeric!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

/// Holds two values of `T`, two values of `S`, an optional array of `T`
/// and growable lists of both.
///
/// Every slot starts empty; the constructors fill them left to right.
#[derive(Debug, Clone, PartialEq)]
pub struct Generic<T, S> {
    t1: Option<T>,
    t2: Option<T>,
    s1: Option<S>,
    s2: Option<S>,
    array: Option<Vec<T>>,
    t_list: Vec<T>,
    s_list: Vec<S>,
}

impl<T, S> Default for Generic<T, S> {
    fn default() -> Self {
        Self {
            t1: None,
            t2: None,
            s1: None,
            s2: None,
            array: None,
            t_list: Vec::new(),
            s_list: Vec::new(),
        }
    }
}

impl<T, S> Generic<T, S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_t(t1: T) -> Self {
        Self {
            t1: Some(t1),
            ..Self::default()
        }
    }

    pub fn with_t_s(t1: T, s1: S) -> Self {
        Self {
            t1: Some(t1),
            s1: Some(s1),
            ..Self::default()
        }
    }

    pub fn with_t_t_s(t1: T, t2: T, s1: S) -> Self {
        Self {
            t1: Some(t1),
            t2: Some(t2),
            s1: Some(s1),
            ..Self::default()
        }
    }

    pub fn with_all(t1: T, t2: T, s1: S, s2: S) -> Self {
        Self {
            t1: Some(t1),
            t2: Some(t2),
            s1: Some(s1),
            s2: Some(s2),
            ..Self::default()
        }
    }

    pub fn with_t_and_s_values(t1: T, values: Vec<S>) -> Self {
        Self {
            t1: Some(t1),
            s_list: values,
            ..Self::default()
        }
    }

    pub fn t1(&self) -> Option<&T> {
        self.t1.as_ref()
    }

    pub fn t2(&self) -> Option<&T> {
        self.t2.as_ref()
    }

    pub fn s1(&self) -> Option<&S> {
        self.s1.as_ref()
    }

    pub fn s2(&self) -> Option<&S> {
        self.s2.as_ref()
    }

    pub fn array(&self) -> Option<&[T]> {
        self.array.as_deref()
    }

    pub fn t_list(&self) -> &[T] {
        &self.t_list
    }

    pub fn s_list(&self) -> &[S] {
        &self.s_list
    }

    pub fn set_t1(&mut self, value: T) {
        self.t1 = Some(value);
    }

    pub fn set_t2(&mut self, value: T) {
        self.t2 = Some(value);
    }

    pub fn set_s1(&mut self, value: S) {
        self.s1 = Some(value);
    }

    pub fn set_s2(&mut self, value: S) {
        self.s2 = Some(value);
    }

    pub fn set_array(&mut self, values: Vec<T>) {
        self.array = Some(values);
    }

    pub fn push_t(&mut self, value: T) {
        self.t_list.push(value);
    }

    pub fn push_s(&mut self, value: S) {
        self.s_list.push(value);
    }

    /// True when the string forms of `t1` and `t2` of `values` are equal.
    pub fn validate_word<A: fmt::Display, B>(&self, values: &Generic<A, B>) -> Result<bool> {
        let (first, second) = values.required_pair()?;
        Ok(first.to_string() == second.to_string())
    }

    /// True when `t1` and `t2` of `values` are numerically equal as `f64`.
    pub fn validate_number<A: Numeric, B>(&self, values: &Generic<A, B>) -> Result<bool> {
        let (first, second) = values.required_pair()?;
        Ok(first.to_f64() == second.to_f64())
    }

    /// Largest element of the array of `values`, truncated to an integer.
    pub fn number_max<A: Numeric, B>(&self, values: &Generic<A, B>) -> Result<i64> {
        let array = values.array().ok_or(LibraryError::MissingArrayError)?;
        array
            .iter()
            .map(|v| v.to_f64())
            .max_by(|a, b| a.total_cmp(b))
            .map(|max| max as i64)
            .ok_or(LibraryError::EmptyInputError)
    }

    pub fn values_from_words(&self, words: &str, delimiter: &str) -> Result<Vec<f64>> {
        crate::core::numbers::values_from_words(words, delimiter)
    }

    fn required_pair(&self) -> Result<(&T, &T)> {
        let first = crate::utils::validation::validate_required_field("t1", &self.t1)?;
        let second = crate::utils::validation::validate_required_field("t2", &self.t2)?;
        Ok((first, second))
    }
}

impl<T: fmt::Debug, S: fmt::Debug> fmt::Display for Generic<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Generic(t1={:?}, t2={:?}, s1={:?}, s2={:?}, array={:?}, t_list={:?}, s_list={:?})",
            self.t1, self.t2, self.s1, self.s2, self.array, self.t_list, self.s_list
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_type_parsing() {
        assert_eq!("FILE".parse::<FileType>().unwrap(), FileType::File);
        assert_eq!("dir".parse::<FileType>().unwrap(), FileType::Directory);
        assert!("socket".parse::<FileType>().is_err());
        assert_eq!(FileType::Directory.to_string(), "DIRECTORY");
    }

    #[test]
    fn test_file_type_serializes_upper_case() {
        let json = serde_json::to_string(&FileType::File).unwrap();
        assert_eq!(json, "\"FILE\"");
    }

    #[test]
    fn test_constructors_fill_slots_in_order() {
        let g: Generic<&str, i32> = Generic::with_t_t_s("a", "b", 7);
        assert_eq!(g.t1(), Some(&"a"));
        assert_eq!(g.t2(), Some(&"b"));
        assert_eq!(g.s1(), Some(&7));
        assert_eq!(g.s2(), None);
        assert!(g.array().is_none());

        let g: Generic<&str, i32> = Generic::with_t_and_s_values("a", vec![1, 2]);
        assert_eq!(g.s_list(), &[1, 2]);
    }

    #[test]
    fn test_validate_word() {
        let checker: Generic<String, ()> = Generic::new();
        let same: Generic<i32, ()> = Generic::with_all(12, 12, (), ());
        let different: Generic<&str, ()> = Generic::with_all("abc", "abd", (), ());
        assert!(checker.validate_word(&same).unwrap());
        assert!(!checker.validate_word(&different).unwrap());

        let missing: Generic<&str, ()> = Generic::with_t("abc");
        assert!(matches!(
            checker.validate_word(&missing),
            Err(LibraryError::MissingValueError { .. })
        ));
    }

    #[test]
    fn test_validate_number_compares_as_f64() {
        let checker: Generic<String, ()> = Generic::new();
        let ints: Generic<i32, ()> = Generic::with_all(5, 5, (), ());
        let floats: Generic<f32, ()> = Generic::with_all(1.5, 2.5, (), ());
        let longs: Generic<u64, ()> = Generic::with_all(1 << 40, 1 << 40, (), ());
        assert!(checker.validate_number(&longs).unwrap());
        assert!(checker.validate_number(&ints).unwrap());
        assert!(!checker.validate_number(&floats).unwrap());
    }

    #[test]
    fn test_number_max() {
        let checker: Generic<String, ()> = Generic::new();

        let mut values: Generic<f64, ()> = Generic::new();
        values.set_array(vec![3.2, 9.9, -4.0]);
        assert_eq!(checker.number_max(&values).unwrap(), 9);

        let mut negative: Generic<i32, ()> = Generic::new();
        negative.set_array(vec![-7, -3, -12]);
        assert_eq!(checker.number_max(&negative).unwrap(), -3);

        let mut longs: Generic<i64, ()> = Generic::new();
        longs.set_array(vec![5_000_000_000, 12, -1]);
        assert_eq!(checker.number_max(&longs).unwrap(), 5_000_000_000);

        let mut sizes: Generic<usize, ()> = Generic::new();
        sizes.set_array(vec![3, 8, 1]);
        assert_eq!(checker.number_max(&sizes).unwrap(), 8);

        let no_array: Generic<i32, ()> = Generic::new();
        assert!(matches!(
            checker.number_max(&no_array),
            Err(LibraryError::MissingArrayError)
        ));

        let mut empty: Generic<i32, ()> = Generic::new();
        empty.set_array(vec![]);
        assert!(matches!(
            checker.number_max(&empty),
            Err(LibraryError::EmptyInputError)
        ));
    }

    #[test]
    fn test_display_lists_every_slot() {
        let mut g: Generic<i32, &str> = Generic::with_t_s(1, "x");
        g.push_t(4);
        let rendered = g.to_string();
        assert!(rendered.contains("t1=Some(1)"));
        assert!(rendered.contains("s1=Some(\"x\")"));
        assert!(rendered.contains("t_list=[4]"));
    }
}
