//! Validated recursion depth
//!
//! Construction itself accepts any `u32`; this type is the boundary where raw user input
//! is checked against the configured cap before it reaches the geometry.

use crate::io::configuration::LEVEL_CEILING;
use crate::io::error::{Result, invalid_parameter};
use std::fmt;
use std::num::{IntErrorKind, ParseIntError};

/// A recursion level known to lie within `0..=max`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecursionLevel(u32);

impl RecursionLevel {
    /// Level zero: the plain triangle
    pub const ZERO: Self = Self(0);

    /// Validate a signed level against an inclusive upper bound
    ///
    /// # Errors
    ///
    /// Returns an error if `level` is negative, exceeds `max`, or if `max` itself is above
    /// the hard ceiling
    pub fn new(level: i64, max: u32) -> Result<Self> {
        check_cap(max)?;

        if level < 0 {
            return Err(invalid_parameter("level", &level, &"must not be negative"));
        }

        match u32::try_from(level) {
            Ok(value) if value <= max => Ok(Self(value)),
            _ => Err(invalid_parameter(
                "level",
                &level,
                &format!("must be between 0 and {max}"),
            )),
        }
    }

    /// Parse and validate a level typed by the user
    ///
    /// Surrounding whitespace is ignored. Integers too large for `i64` are reported as out
    /// of range rather than as malformed.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not an integer or fails [`RecursionLevel::new`]
    pub fn parse(input: &str, max: u32) -> Result<Self> {
        let trimmed = input.trim();
        let level: i64 = trimmed.parse().map_err(|err: ParseIntError| {
            let reason = match err.kind() {
                IntErrorKind::PosOverflow => format!("must be between 0 and {max}"),
                IntErrorKind::NegOverflow => "must not be negative".to_owned(),
                _ => format!("must be an integer ({err})"),
            };
            invalid_parameter("level", &trimmed, &reason)
        })?;
        Self::new(level, max)
    }

    /// The level as a plain integer
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for RecursionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<RecursionLevel> for u32 {
    fn from(level: RecursionLevel) -> Self {
        level.0
    }
}

/// Check a configured level cap against the hard ceiling
///
/// # Errors
///
/// Returns an error if `max` exceeds [`LEVEL_CEILING`]
pub fn check_cap(max: u32) -> Result<()> {
    if max > LEVEL_CEILING {
        return Err(invalid_parameter(
            "max-level",
            &max,
            &format!("must not exceed {LEVEL_CEILING}"),
        ));
    }
    Ok(())
}
