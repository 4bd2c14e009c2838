//! Numeric context and number kinds.
//!
//! Every formula is compiled against a [`NumericContext`]: the number of
//! significant digits kept after each arithmetic step and the rounding mode
//! used to get there. The context is a small `Copy` value and is never
//! mutated once a formula has been compiled.
//!
//! Values are carried as [`rust_decimal::Decimal`], which holds up to
//! [`MAX_PRECISION`] significant digits.
//!
//! # Example
//!
//! ```
//! use reckon_core::numeric::{NumericContext, RoundingMode};
//! use rust_decimal::Decimal;
//!
//! let ctx = NumericContext::new(5, RoundingMode::HalfUp).unwrap();
//! let third = Decimal::ONE / Decimal::from(3);
//! assert_eq!(ctx.round(third).unwrap().to_string(), "0.33333");
//! ```


use core::fmt;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest number of significant digits a [`Decimal`] can represent.
pub const MAX_PRECISION: u32 = 28;

/// How a value is rounded when it has more significant digits than the
/// context allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoundingMode {
    /// Away from zero.
    Up,
    /// Toward zero.
    Down,
    /// Toward positive infinity.
    Ceiling,
    /// Toward negative infinity.
    Floor,
    /// To nearest, ties away from zero.
    HalfUp,
    /// To nearest, ties toward zero.
    HalfDown,
    /// To nearest, ties to the even neighbour.
    #[default]
    HalfEven,
    /// Rounding is not allowed: any value that needs it is an error.
    Unnecessary,
}

impl RoundingMode {
    /// The `rust_decimal` strategy implementing this mode, or `None` for
    /// [`RoundingMode::Unnecessary`].
    pub fn strategy(self) -> Option<RoundingStrategy> {
        match self {
            RoundingMode::Up => Some(RoundingStrategy::AwayFromZero),
            RoundingMode::Down => Some(RoundingStrategy::ToZero),
            RoundingMode::Ceiling => Some(RoundingStrategy::ToPositiveInfinity),
            RoundingMode::Floor => Some(RoundingStrategy::ToNegativeInfinity),
            RoundingMode::HalfUp => Some(RoundingStrategy::MidpointAwayFromZero),
            RoundingMode::HalfDown => Some(RoundingStrategy::MidpointTowardZero),
            RoundingMode::HalfEven => Some(RoundingStrategy::MidpointNearestEven),
            RoundingMode::Unnecessary => None,
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RoundingMode::Up => "UP",
            RoundingMode::Down => "DOWN",
            RoundingMode::Ceiling => "CEILING",
            RoundingMode::Floor => "FLOOR",
            RoundingMode::HalfUp => "HALF_UP",
            RoundingMode::HalfDown => "HALF_DOWN",
            RoundingMode::HalfEven => "HALF_EVEN",
            RoundingMode::Unnecessary => "UNNECESSARY",
        };
        f.write_str(name)
    }
}

/// Rejected numeric context configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContextError {
    #[error("precision must be between 1 and {max}, got {precision}")]
    PrecisionOutOfRange { precision: u32, max: u32 },
}

/// Failure of a decimal operation under a [`NumericContext`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("result does not fit in a decimal")]
    Overflow,

    /// A non-zero result too small for the 28 fractional digits a decimal
    /// can hold.
    #[error("result is too small to be represented and would be zero")]
    Underflow,

    #[error("rounding necessary: {value} has more than {precision} significant digits")]
    RoundingNecessary { value: Decimal, precision: u32 },
}

/// Precision and rounding mode governing all arithmetic of a formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawContext")]
pub struct NumericContext {
    precision: u32,
    rounding: RoundingMode,
}

#[derive(Deserialize)]
struct RawContext {
    precision: u32,
    #[serde(default)]
    rounding: RoundingMode,
}

impl TryFrom<RawContext> for NumericContext {
    type Error = ContextError;

    fn try_from(raw: RawContext) -> Result<Self, Self::Error> {
        NumericContext::new(raw.precision, raw.rounding)
    }
}

impl NumericContext {
    /// Create a context, validating that `precision` is within
    /// `1..=MAX_PRECISION`.
    pub fn new(precision: u32, rounding: RoundingMode) -> Result<Self, ContextError> {
        if precision == 0 || precision > MAX_PRECISION {
            return Err(ContextError::PrecisionOutOfRange {
                precision,
                max: MAX_PRECISION,
            });
        }
        Ok(Self {
            precision,
            rounding,
        })
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    pub fn rounding(&self) -> RoundingMode {
        self.rounding
    }

    /// Round `value` to this context's number of significant digits.
    ///
    /// Values that already fit are returned unchanged, including their
    /// scale (`2.50` stays `2.50`).
    pub fn round(&self, value: Decimal) -> Result<Decimal, ArithmeticError> {
        // `round_sf_with_strategy` rescales upward when the value has fewer
        // digits than requested, so only call it when digits must go.
        if significant_digits(value) <= self.precision {
            return Ok(value);
        }
        match self.rounding.strategy() {
            Some(strategy) => value
                .round_sf_with_strategy(self.precision, strategy)
                .ok_or(ArithmeticError::Overflow),
            None => {
                let truncated = value
                    .round_sf_with_strategy(self.precision, RoundingStrategy::ToZero)
                    .ok_or(ArithmeticError::Overflow)?;
                if truncated == value {
                    Ok(value)
                } else {
                    Err(ArithmeticError::RoundingNecessary {
                        value,
                        precision: self.precision,
                    })
                }
            }
        }
    }
}

/// Number of digits in the mantissa, trailing zeros included (`2.50` has 3).
fn significant_digits(value: Decimal) -> u32 {
    value
        .mantissa()
        .unsigned_abs()
        .checked_ilog10()
        .map_or(0, |log| log + 1)
}

impl Default for NumericContext {
    fn default() -> Self {
        Self {
            precision: MAX_PRECISION,
            rounding: RoundingMode::HalfEven,
        }
    }
}

impl fmt::Display for NumericContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "precision={} rounding={}", self.precision, self.rounding)
    }
}

/// Declared numeric kind of an operand, operation or formula result.
///
/// Kinds only affect reporting and the final conversion done by
/// [`NumberKind::convert`]; all intermediate arithmetic is decimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberKind {
    Integer,
    Double,
    #[default]
    Decimal,
}

impl NumberKind {
    /// Kind of a numeric literal as written in a formula.
    pub fn of_literal(text: &str) -> Self {
        if text.contains('.') {
            NumberKind::Decimal
        } else {
            NumberKind::Integer
        }
    }

    /// Convert a decimal result into this kind. Integers are truncated.
    pub fn convert(self, value: Decimal) -> Result<Number, ArithmeticError> {
        match self {
            NumberKind::Integer => value
                .trunc()
                .to_i64()
                .map(Number::Integer)
                .ok_or(ArithmeticError::Overflow),
            NumberKind::Double => value
                .to_f64()
                .map(Number::Double)
                .ok_or(ArithmeticError::Overflow),
            NumberKind::Decimal => Ok(Number::Decimal(value)),
        }
    }
}

impl fmt::Display for NumberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberKind::Integer => write!(f, "integer"),
            NumberKind::Double => write!(f, "double"),
            NumberKind::Decimal => write!(f, "decimal"),
        }
    }
}

/// A formula result converted to its declared kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integer(i64),
    Double(f64),
    Decimal(Decimal),
}

impl Number {
    pub fn kind(&self) -> NumberKind {
        match self {
            Number::Integer(_) => NumberKind::Integer,
            Number::Double(_) => NumberKind::Double,
            Number::Decimal(_) => NumberKind::Decimal,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(v) => write!(f, "{}", v),
            Number::Double(v) => write!(f, "{}", v),
            Number::Decimal(v) => write!(f, "{}", v),
        }
    }
}
