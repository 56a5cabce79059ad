//! Small text helpers shared by the solvers.

use std::path::Path;

use crate::error::{Error, Result};

/// Read an input file, tagging failures as [`ErrorKind::Io`](crate::ErrorKind::Io)
/// with the offending path.
pub fn read_input(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|e| {
        Error::new(
            crate::ErrorKind::Io,
            format!("cannot open file <{}>: {e}", path.display()),
        )
    })
}

/// Lines of `input` with surrounding whitespace trimmed and blank lines
/// dropped.
pub fn non_empty_lines(input: &str) -> impl Iterator<Item = &str> {
    input.lines().map(str::trim).filter(|l| !l.is_empty())
}

/// Split `line` at the first `sep` into exactly two trimmed, non-empty parts.
pub fn split_pair<'a>(line: &'a str, sep: &str) -> Result<(&'a str, &'a str)> {
    match line.split_once(sep) {
        Some((a, b)) if !a.trim().is_empty() && !b.trim().is_empty() => Ok((a.trim(), b.trim())),
        _ => Err(Error::parse(format!("expected two parts for line {line:?}"))),
    }
}

/// Every (optionally negative) integer in `line`, in order.
pub fn parse_numbers(line: &str) -> Vec<i64> {
    let mut out = Vec::new();
    let mut cur: Option<i64> = None;
    let mut negative = false;
    let mut prev = ' ';
    for ch in line.chars() {
        match ch.to_digit(10) {
            Some(d) => {
                if cur.is_none() {
                    negative = prev == '-';
                }
                cur = Some(cur.unwrap_or(0).saturating_mul(10).saturating_add(i64::from(d)));
            }
            None => {
                if let Some(v) = cur.take() {
                    out.push(if negative { -v } else { v });
                }
            }
        }
        prev = ch;
    }
    if let Some(v) = cur {
        out.push(if negative { -v } else { v });
    }
    out
}
