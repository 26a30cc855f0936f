//! Byte ranges into an analyzed buffer.

use std::ops::Range;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A half-open byte range `[start, end)` into the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Span {
    /// First byte of the range.
    pub start: usize,
    /// One past the last byte of the range.
    pub end: usize,
}

impl Span {
    /// Create a span from raw offsets. No validation is performed.
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length of the span in bytes.
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns `true` if the span covers no bytes.
    pub const fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Returns `true` if the span is non-empty, lies inside `text`, and both
    /// ends fall on UTF-8 character boundaries.
    pub fn fits(&self, text: &str) -> bool {
        self.start < self.end
            && self.end <= text.len()
            && text.is_char_boundary(self.start)
            && text.is_char_boundary(self.end)
    }

    /// The covered slice of `text`, or `None` if the span does not fit.
    pub fn slice<'a>(&self, text: &'a str) -> Option<&'a str> {
        if self.fits(text) {
            text.get(self.start..self.end)
        } else {
            None
        }
    }

    /// The span as a byte range.
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Convert to a range of `char` indices, for consumers that index text
    /// by scalar value rather than by byte.
    ///
    /// Returns `None` if the span does not fit `text`.
    pub fn char_range(&self, text: &str) -> Option<Range<usize>> {
        if !self.fits(text) {
            return None;
        }
        let start = text[..self.start].chars().count();
        let len = text[self.start..self.end].chars().count();
        Some(start..start + len)
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
