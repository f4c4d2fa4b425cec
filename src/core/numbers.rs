use crate::core::text::{compile, split_trimmed};
use crate::utils::error::{LibraryError, Result};

/// Parses `words` into numbers, using the regular expression `delimiter`
/// between values. Whitespace around each value is ignored.
///
/// Trailing empty pieces are dropped before parsing, so `"1,2,"` gives two
/// values and `","` gives [`LibraryError::EmptyInputError`]. An empty piece
/// between two delimiters is not a number. A delimiter that matches the
/// empty string splits between every character.
pub fn values_from_words(words: &str, delimiter: &str) -> Result<Vec<f64>> {
    let separator = compile(delimiter)?;
    let pieces = split_trimmed(words, &separator);

    if pieces.iter().all(|p| p.trim().is_empty()) {
        return Err(LibraryError::EmptyInputError);
    }

    pieces
        .into_iter()
        .map(str::trim)
        .map(|piece| {
            piece
                .parse::<f64>()
                .map_err(|_| LibraryError::InvalidNumberError {
                    value: piece.to_string(),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_from_words_with_valid_input() {
        let values = values_from_words("123.45, 67.89, 10.0", ",").unwrap();
        assert_eq!(values, vec![123.45, 67.89, 10.0]);
    }

    #[test]
    fn test_values_from_words_with_whitespace_handling() {
        let values = values_from_words(" 15.5 |  20.0 |30.25 ", r"\|").unwrap();
        assert_eq!(values, vec![15.5, 20.0, 30.25]);
    }

    #[test]
    fn test_values_from_words_with_invalid_number_format() {
        let err = values_from_words("123.45, abc, 67.89", ",").unwrap_err();
        assert_eq!(err.to_string(), "Invalid number format: abc");
    }

    #[test]
    fn test_values_from_words_with_empty_input() {
        for input in ["", ",", "   ", ",,,"] {
            let err = values_from_words(input, ",").unwrap_err();
            assert!(matches!(err, LibraryError::EmptyInputError), "input {:?}", input);
            assert_eq!(err.to_string(), "Array is empty");
        }
    }

    #[test]
    fn test_values_from_words_with_non_standard_delimiter() {
        let values = values_from_words("10#20#30.5#40", "#").unwrap();
        assert_eq!(values, vec![10.0, 20.0, 30.5, 40.0]);
    }

    #[test]
    fn test_interior_gap_is_not_a_number() {
        let err = values_from_words("1,,2", ",").unwrap_err();
        assert!(matches!(err, LibraryError::InvalidNumberError { ref value } if value.is_empty()));
    }

    #[test]
    fn test_empty_delimiter_splits_every_character() {
        let values = values_from_words("12", "").unwrap();
        assert_eq!(values, vec![1.0, 2.0]);
    }

    #[test]
    fn test_invalid_delimiter_pattern() {
        assert!(matches!(
            values_from_words("1,2", "("),
            Err(LibraryError::RegexError { .. })
        ));
    }
}
