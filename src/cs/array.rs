use std::io::BufRead;

use crate::error::{Error, Result};

/// Parses every token as a base-10 signed integer.
///
/// Surrounding whitespace is ignored. The first malformed token aborts the
/// parse and is reported in [`Error::Parse`].
///
/// # Examples
///
/// ```
/// use maxsub::cs::array::parse;
///
/// assert_eq!(parse(&["3", "-4", " 5 "]).unwrap(), vec![3, -4, 5]);
/// assert!(parse(&["3", "four"]).is_err());
/// ```
pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<i64>> {
    tokens.iter().map(|t| parse_token(t.as_ref())).collect()
}

/// Reads one integer per line until end of input. Blank lines are skipped.
pub fn parse_lines<R: BufRead>(reader: R) -> Result<Vec<i64>> {
    let mut values = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        values.push(parse_token(&line)?);
    }
    Ok(values)
}

fn parse_token(token: &str) -> Result<i64> {
    token.trim().parse::<i64>().map_err(|source| Error::Parse {
        token: token.to_string(),
        source,
    })
}

/// Sum of `array[start..end]`, or [`Error::Overflow`] if it leaves the `i64`
/// range.
///
/// # Panics
///
/// Panics if `start > end` or `end > array.len()`.
pub fn sum(array: &[i64], start: usize, end: usize) -> Result<i64> {
    array[start..end]
        .iter()
        .try_fold(0i64, |acc, &v| acc.checked_add(v).ok_or(Error::Overflow))
}

/// Renders `array[start..end]` as `[a, b, c]`.
///
/// # Panics
///
/// Panics if `start > end` or `end > array.len()`.
pub fn format_range(array: &[i64], start: usize, end: usize) -> String {
    let items: Vec<String> = array[start..end].iter().map(|v| v.to_string()).collect();
    format!("[{}]", items.join(", "))
}
