//! Error Handling - Result, custom error enums, and ?

use std::fmt;

#[derive(Debug, PartialEq)]
pub enum ParseError {
    EmptyLine,
    NotANumber(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::EmptyLine => write!(f, "empty line"),
            ParseError::NotANumber(s) => write!(f, "not a number: '{}'", s),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse one line into a number.
pub fn parse_line(line: &str) -> Result<i64, ParseError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyLine);
    }
    trimmed
        .parse()
        .map_err(|_| ParseError::NotANumber(trimmed.to_string()))
}

/// Sum every parsable line, skipping empty ones. A malformed number
/// still fails the whole sum - note how ? propagates it.
pub fn sum_lines(input: &str) -> Result<i64, ParseError> {
    let mut total = 0;
    for line in input.lines() {
        match parse_line(line) {
            Ok(n) => total += n,
            Err(ParseError::EmptyLine) => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_number() {
        assert_eq!(parse_line(" 42 "), Ok(42));
        assert_eq!(parse_line("-7"), Ok(-7));
    }

    #[test]
    fn empty_line_is_its_own_error() {
        assert_eq!(parse_line("   "), Err(ParseError::EmptyLine));
    }

    #[test]
    fn garbage_reports_the_offending_text() {
        let err = parse_line("forty-two").unwrap_err();
        assert_eq!(err, ParseError::NotANumber("forty-two".to_string()));
        assert_eq!(err.to_string(), "not a number: 'forty-two'");
    }

    #[test]
    fn sums_skipping_blanks() {
        assert_eq!(sum_lines("1\n\n2\n  \n3"), Ok(6));
    }

    #[test]
    fn one_bad_line_fails_the_sum() {
        let err = sum_lines("1\noops\n3").unwrap_err();
        assert!(matches!(err, ParseError::NotANumber(_)));
    }
}
