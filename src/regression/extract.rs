//! Extracts training pairs from free-form text.

use std::str::FromStr;

use crate::prelude::*;

/// Checks whether the character may be a part of a number.
/// Comma is accepted as a decimal separator too.
#[inline]
fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '-' | '.' | ',')
}

/// Extracts the numbers from the line and returns them as an `(input, output)` pair
/// if there are exactly two of them.
///
/// Tokens that fail to convert are logged and skipped, they do not count.
#[must_use]
pub fn extract_pair(line: &str) -> Option<(f64, f64)> {
    let mut numbers = Vec::new();
    for token in line.split(|c: char| !is_number_char(c)).filter(|token| !token.is_empty()) {
        match parse_number(token) {
            Ok(number) => numbers.push(number),
            Err(error) => tracing::warn!(token, "{:#}", error),
        }
    }
    match numbers[..] {
        [input, output] => Some((input, output)),
        _ => None,
    }
}

/// Converts the token to a number.
///
/// Only the leading `-?digits[.digits]` part is taken into account, the rest of the token
/// is ignored: `5-` gives `5` and `1.2.3` gives `1.2`.
pub fn parse_number(token: &str) -> Result<f64> {
    let normalized = token.replace(',', ".");
    let prefix = leading_number(&normalized)
        .ok_or_else(|| anyhow!("failed to convert `{}` to a number", token))?;
    let number = f64::from_str(prefix)
        .with_context(|| format!("failed to convert `{}` to a number", token))?;
    match number.is_finite() {
        true => Ok(number),
        false => Err(anyhow!("`{}` is out of range", token)),
    }
}

/// Returns the longest prefix in the form of `-?digits[.digits]` with at least one digit.
fn leading_number(token: &str) -> Option<&str> {
    let bytes = token.as_bytes();
    let is_digit_at = |index: usize| bytes.get(index).map_or(false, u8::is_ascii_digit);

    let mut end = usize::from(bytes.first() == Some(&b'-'));
    let mut n_digits = 0;
    while is_digit_at(end) {
        end += 1;
        n_digits += 1;
    }
    if bytes.get(end) == Some(&b'.') {
        end += 1;
        while is_digit_at(end) {
            end += 1;
            n_digits += 1;
        }
    }

    (n_digits != 0).then(|| &token[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_pair_ok() {
        assert_eq!(extract_pair("1 2"), Some((1.0, 2.0)));
        assert_eq!(extract_pair("-3.5\t7"), Some((-3.5, 7.0)));
        assert_eq!(extract_pair("x = 1,5; y = -2.25\r"), Some((1.5, -2.25)));
        assert_eq!(extract_pair("input:10output:20"), Some((10.0, 20.0)));
    }

    #[test]
    fn extract_pair_wrong_count_ok() {
        assert_eq!(extract_pair(""), None);
        assert_eq!(extract_pair("no numbers here"), None);
        assert_eq!(extract_pair("42"), None);
        assert_eq!(extract_pair("1 2 3"), None);
    }

    #[test]
    fn extract_pair_skips_invalid_tokens_ok() {
        assert_eq!(extract_pair("-- 1 . 2 -"), Some((1.0, 2.0)));
        assert_eq!(extract_pair("-- 1"), None);
    }

    #[test]
    fn parse_number_ok() -> Result {
        assert_eq!(parse_number("0")?, 0.0);
        assert_eq!(parse_number("-12")?, -12.0);
        assert_eq!(parse_number("3,25")?, 3.25);
        assert_eq!(parse_number(".5")?, 0.5);
        assert_eq!(parse_number("-.5")?, -0.5);
        assert_eq!(parse_number("7.")?, 7.0);
        Ok(())
    }

    #[test]
    fn parse_number_prefix_ok() -> Result {
        assert_eq!(parse_number("5-")?, 5.0);
        assert_eq!(parse_number("1.2.3")?, 1.2);
        assert_eq!(parse_number("1,2,3")?, 1.2);
        assert_eq!(parse_number("2019-05-01")?, 2019.0);
        Ok(())
    }

    #[test]
    fn parse_number_invalid_ok() {
        for token in ["", "-", "--", ".", ",", "-.", "--5", ".-1"] {
            assert!(parse_number(token).is_err(), "`{}` must not convert", token);
        }
        assert!(parse_number(&"9".repeat(400)).is_err());
    }
}
