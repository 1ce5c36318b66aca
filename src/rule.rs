//! A single `destination source length` line of an almanac stage.

use serde::{Deserialize, Serialize};

use crate::AlmanacError;

/// Affine remapping of `[source_start, source_start + range_length)` onto
/// `[destination_start, destination_start + range_length)`. A length of
/// zero or less is an empty range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingRule {
    pub destination_start: i64,
    pub source_start: i64,
    pub range_length: i64,
}

impl MappingRule {
    pub fn new(destination_start: i64, source_start: i64, range_length: i64) -> Self {
        Self {
            destination_start,
            source_start,
            range_length,
        }
    }

    /// Parse a rule line of exactly three whitespace separated integers.
    /// `line` is only used for error reporting.
    pub fn parse(text: &str, line: usize) -> Result<Self, AlmanacError> {
        let mut fields = [0i64; 3];
        let mut tokens = text.split_whitespace();
        for (i, slot) in fields.iter_mut().enumerate() {
            let token = tokens.next().ok_or_else(|| {
                AlmanacError::parse(line, format!("expected 3 integers, found {i}"))
            })?;
            *slot = parse_int(token, line)?;
        }
        if tokens.next().is_some() {
            return Err(AlmanacError::parse(line, "expected 3 integers, found more"));
        }
        Ok(Self::new(fields[0], fields[1], fields[2]))
    }

    /// Destination of `value` under this rule, `None` when it falls outside
    /// the source range. Fails only when a matching value's destination
    /// leaves the i64 domain.
    pub fn map(&self, value: i64) -> Result<Option<i64>, AlmanacError> {
        // A failed subtraction means the distance exceeds any valid length.
        let Some(offset) = value.checked_sub(self.source_start) else {
            return Ok(None);
        };
        if !(0..self.range_length).contains(&offset) {
            return Ok(None);
        }
        self.destination_start
            .checked_add(offset)
            .map(Some)
            .ok_or(AlmanacError::Overflow {
                value,
                destination_start: self.destination_start,
            })
    }
}

pub(crate) fn parse_int(token: &str, line: usize) -> Result<i64, AlmanacError> {
    token
        .parse::<i64>()
        .map_err(|e| AlmanacError::parse(line, format!("invalid integer '{token}': {e}")))
}
