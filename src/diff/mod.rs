//! Diff configuration: search strategy selection, byte mask/range parsing,
//! and validation shared by the pairing engine and the `compare` predicate.

pub mod compare;
pub mod pairing;

use crate::timestamp::Timestamp;
use thiserror::Error;

/// Which pairing strategy to use (spec §4.4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SearchMethod {
    Timestamp,
    Full,
    Location,
}

/// A parsed `[X:Y]` byte range: `start` is the inclusive start offset, `end`
/// is the raw signed end value exactly as written. `end <= 0` means "length
/// of the packet plus `end`" (so `[:]`/`end == 0` means "to the end", and a
/// negative `end` trims bytes off the tail); `end > 0` means an absolute
/// end offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    pub start: usize,
    pub end: i64,
}

/// A parsed `0`/`1` byte mask: `true` means "this byte position must match
/// exactly", `false` means "ignore this byte position".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask(Vec<bool>);

impl Mask {
    pub fn bits(&self) -> &[bool] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DiffConfigError {
    #[error("mask string may only contain '0' and '1' characters")]
    InvalidMaskChar,
    #[error(
        "range format must be '[X:Y]', '[X:]', '[:Y]', or '[:]'. Only Y can be negative: {0}"
    )]
    InvalidRangeFormat(String),
    #[error("integer in {0} is out of range")]
    RangeIntegerOutOfRange(String),
    #[error("invalid byte range. With range [X:Y] X must be less than Y: {0}")]
    RangeStartNotBeforeEnd(String),
    #[error("specified byte ranges have different lengths. No packets will ever match")]
    RangeLengthMismatch,
}

/// Fully parsed and validated diff configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffConfig {
    pub search_method: SearchMethod,
    pub mask: Mask,
    pub range_a: ByteRange,
    pub range_b: ByteRange,
    pub time_range_neg: Timestamp,
    pub time_range_pos: Timestamp,
}

impl DiffConfig {
    pub fn new(
        search_method: SearchMethod,
        mask_str: &str,
        range_a_str: &str,
        range_b_str: &str,
        time_range_neg: Timestamp,
        time_range_pos: Timestamp,
    ) -> Result<Self, DiffConfigError> {
        let mask = parse_mask(mask_str)?;
        let range_a = parse_range(range_a_str)?;
        let range_b = parse_range(range_b_str)?;

        if range_a.end > 0 && range_b.end > 0 {
            let end_a = range_a.end as usize;
            let end_b = range_b.end as usize;
            if end_a <= range_a.start {
                return Err(DiffConfigError::RangeStartNotBeforeEnd(range_a_str.to_string()));
            }
            if end_b <= range_b.start {
                return Err(DiffConfigError::RangeStartNotBeforeEnd(range_b_str.to_string()));
            }
            if (end_a - range_a.start) != (end_b - range_b.start) {
                return Err(DiffConfigError::RangeLengthMismatch);
            }
        }

        Ok(Self {
            search_method,
            mask,
            range_a,
            range_b,
            time_range_neg,
            time_range_pos,
        })
    }
}

fn parse_mask(mask_str: &str) -> Result<Mask, DiffConfigError> {
    let mut bits = Vec::with_capacity(mask_str.len());
    for c in mask_str.chars() {
        match c {
            '0' => bits.push(false),
            '1' => bits.push(true),
            _ => return Err(DiffConfigError::InvalidMaskChar),
        }
    }
    Ok(Mask(bits))
}

/// Hand-written parser for the `[X:Y]` grammar (`X` digits, optional;
/// `Y` optionally `-`-prefixed digits, optional). No `regex` dependency is
/// used anywhere in this crate's corpus, so a small state walk over the
/// literal brackets/colon stands in for the original's `std::regex`.
fn parse_range(range_str: &str) -> Result<ByteRange, DiffConfigError> {
    let err = || DiffConfigError::InvalidRangeFormat(range_str.to_string());

    let inner = range_str
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .ok_or_else(err)?;

    let (start_str, end_str) = inner.split_once(':').ok_or_else(err)?;

    if !start_str.chars().all(|c| c.is_ascii_digit()) {
        return Err(err());
    }
    let valid_end = end_str.is_empty()
        || (end_str.starts_with('-') && end_str[1..].chars().all(|c| c.is_ascii_digit()) && end_str.len() > 1)
        || end_str.chars().all(|c| c.is_ascii_digit());
    if !valid_end {
        return Err(err());
    }

    let start: usize = if start_str.is_empty() {
        0
    } else {
        start_str
            .parse()
            .map_err(|_| DiffConfigError::RangeIntegerOutOfRange(range_str.to_string()))?
    };
    let end: i64 = if end_str.is_empty() {
        0
    } else {
        end_str
            .parse()
            .map_err(|_| DiffConfigError::RangeIntegerOutOfRange(range_str.to_string()))?
    };

    Ok(ByteRange { start, end })
}
