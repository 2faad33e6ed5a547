//! The flat ordered sequence every view starts from.

use std::fmt;
use std::num::IntErrorKind;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, instrument, warn};

static TOKEN_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\s,;]+").unwrap());

/// Ordered list of values, mutated in place only by heap construction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sequence<T> {
    values: Vec<T>,
}

impl<T> Sequence<T> {
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.values
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }

    /// `(index, value)` pairs, the cells of an array view.
    pub fn cells(&self) -> impl Iterator<Item = (usize, &T)> {
        self.values.iter().enumerate()
    }

    pub fn into_inner(self) -> Vec<T> {
        self.values
    }
}

impl Sequence<i64> {
    /// Parses free text into integers.
    ///
    /// Tokens are separated by whitespace, commas or semicolons. Tokens that
    /// are not integers are dropped without error, and so are the empty
    /// tokens produced by repeated separators. Integers outside the `i64`
    /// range are dropped too, and logged as out of range rather than as
    /// non-numeric.
    #[instrument(level = "debug")]
    pub fn parse(text: &str) -> Self {
        let mut skipped = 0usize;
        let mut out_of_range = 0usize;
        let values: Vec<i64> = TOKEN_SEPARATOR
            .split(text)
            .filter(|token| !token.is_empty())
            .filter_map(|token| match token.parse::<i64>() {
                Ok(v) => Some(v),
                Err(e) => {
                    match e.kind() {
                        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                            warn!(token, "integer out of range, dropped");
                            out_of_range += 1;
                        }
                        _ => skipped += 1,
                    }
                    None
                }
            })
            .collect();
        if skipped > 0 {
            debug!(skipped, "dropped non-numeric tokens");
        }
        if out_of_range > 0 {
            debug!(out_of_range, "dropped out-of-range integers");
        }
        Self { values }
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(values: Vec<T>) -> Self {
        Self { values }
    }
}

impl<T> AsRef<[T]> for Sequence<T> {
    fn as_ref(&self) -> &[T] {
        &self.values
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}
