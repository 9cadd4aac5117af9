//! Comma-separated textual form of a coordinate list, e.g. `"1.5, -2, 0.333"`

use crate::{CoordinatesError, Result};

/// Separator written between formatted coordinates
pub const SEPARATOR: &str = ", ";

/// Parses a comma-separated list of numbers
///
/// Whitespace around each token is ignored. Empty (or blank) text is the
/// empty list. A token that is empty, not a number, or NaN is an error.
///
/// # Examples
///
/// ```rust
/// use ctk_coordinates::coordinates::text::parse_coordinates;
///
/// assert_eq!(parse_coordinates("0,0.0, 0.").unwrap(), vec![0.0, 0.0, 0.0]);
/// assert!(parse_coordinates("1,2,x").is_err());
/// ```
pub fn parse_coordinates(text: &str) -> Result<Vec<f64>> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    text.split(',')
        .map(|token| {
            let token = token.trim();
            let value = token
                .parse::<f64>()
                .map_err(|err| CoordinatesError::ParseError {
                    token: token.to_string(),
                    reason: err.to_string(),
                })?;
            if value.is_nan() {
                return Err(CoordinatesError::ParseError {
                    token: token.to_string(),
                    reason: "NaN is not a coordinate".to_string(),
                });
            }
            Ok(value)
        })
        .collect()
}

/// Formats coordinates so that [`parse_coordinates`] yields the same values
pub fn format_coordinates(values: &[f64]) -> String {
    values
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1.5, -2, 0.333", vec![1.5, -2.0, 0.333])]
    #[case("  4 ,5,  6  ", vec![4.0, 5.0, 6.0])]
    #[case("1e3,-0.5", vec![1000.0, -0.5])]
    #[case("", vec![])]
    #[case("   ", vec![])]
    fn test_parse(#[case] text: &str, #[case] expected: Vec<f64>) {
        assert_eq!(parse_coordinates(text).unwrap(), expected);
    }

    #[rstest]
    #[case("1,2,x", "x")]
    #[case("1,,3", "")]
    #[case("1,2,", "")]
    #[case("NaN,1", "NaN")]
    fn test_parse_errors(#[case] text: &str, #[case] bad_token: &str) {
        match parse_coordinates(text) {
            Err(CoordinatesError::ParseError { token, .. }) => assert_eq!(token, bad_token),
            other => panic!("expected a parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_format_round_trip() {
        let values = vec![1.0 / 3.0, -2.0, 1e-7, 123456.789];
        let text = format_coordinates(&values);
        assert_eq!(parse_coordinates(&text).unwrap(), values);
    }

    #[test]
    fn test_format() {
        assert_eq!(format_coordinates(&[1.5, -2.0, 0.0]), "1.5, -2, 0");
        assert_eq!(format_coordinates(&[]), "");
    }
}
