//! Built-in functions of the `core` catalog.
//!
//! Trigonometry and angle conversion go through `f64`, so their results
//! carry roughly 15 significant digits whatever the context precision.
//! `sqrt`, `pow` and `factorial` stay in decimal.

use std::sync::Arc;

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, MathematicalOps};

use crate::catalog::{Function, FunctionError, require_arguments};
use crate::numeric::{ArithmeticError, NumericContext};

pub(super) fn core_functions() -> Vec<Arc<dyn Function>> {
    vec![
        Arc::new(Pow),
        Arc::new(Factorial),
        Arc::new(Sqrt),
        Arc::new(Transcendental::new("sin", f64::sin)),
        Arc::new(Transcendental::new("cos", f64::cos)),
        Arc::new(Transcendental::new("tan", f64::tan)),
        Arc::new(Transcendental::new("asin", f64::asin)),
        Arc::new(Transcendental::new("acos", f64::acos)),
        Arc::new(Transcendental::new("atan", f64::atan)),
        Arc::new(Transcendental::new("toRadians", f64::to_radians)),
        Arc::new(Transcendental::new("toDegrees", f64::to_degrees)),
    ]
}

/// A unary function computed with an `f64` routine.
#[derive(Debug, Clone, Copy)]
pub struct Transcendental {
    name: &'static str,
    op: fn(f64) -> f64,
}

impl Transcendental {
    pub const fn new(name: &'static str, op: fn(f64) -> f64) -> Self {
        Self { name, op }
    }
}

impl Function for Transcendental {
    fn name(&self) -> &str {
        self.name
    }

    fn arity(&self) -> usize {
        1
    }

    fn perform(
        &self,
        context: &NumericContext,
        args: &[Option<Decimal>],
    ) -> Result<Decimal, FunctionError> {
        let [x] = require_arguments::<1>(args)?;
        let input = x.to_f64().ok_or(ArithmeticError::Overflow)?;
        let output = (self.op)(input);
        if !output.is_finite() {
            return Err(FunctionError::OutOfDomain {
                value: x,
                reason: "result is not a finite number",
            });
        }
        let result = Decimal::from_f64(output).ok_or(ArithmeticError::Overflow)?;
        Ok(context.round(result)?)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Sqrt;

impl Function for Sqrt {
    fn name(&self) -> &str {
        "sqrt"
    }

    fn arity(&self) -> usize {
        1
    }

    fn perform(
        &self,
        context: &NumericContext,
        args: &[Option<Decimal>],
    ) -> Result<Decimal, FunctionError> {
        let [x] = require_arguments::<1>(args)?;
        if x.is_sign_negative() && !x.is_zero() {
            return Err(FunctionError::OutOfDomain {
                value: x,
                reason: "square root of a negative number",
            });
        }
        let result = x.sqrt().ok_or(ArithmeticError::Overflow)?;
        Ok(context.round(result)?)
    }
}

/// `n!` for a non-negative integer `n`, computed exactly.
#[derive(Debug, Clone, Copy)]
pub struct Factorial;

impl Function for Factorial {
    fn name(&self) -> &str {
        "factorial"
    }

    fn arity(&self) -> usize {
        1
    }

    fn perform(
        &self,
        context: &NumericContext,
        args: &[Option<Decimal>],
    ) -> Result<Decimal, FunctionError> {
        let [x] = require_arguments::<1>(args)?;
        if !x.fract().is_zero() || (x.is_sign_negative() && !x.is_zero()) {
            return Err(FunctionError::OutOfDomain {
                value: x,
                reason: "factorial needs a non-negative integer",
            });
        }
        let n = x.to_u64().ok_or(ArithmeticError::Overflow)?;
        let mut result = Decimal::ONE;
        for i in 2..=n {
            result = result
                .checked_mul(Decimal::from(i))
                .ok_or(ArithmeticError::Overflow)?;
        }
        Ok(context.round(result)?)
    }
}

/// `pow(base, exponent)`.
///
/// Integer exponents are exact repeated multiplication; fractional
/// exponents go through the decimal exponential and need a non-negative
/// base.
#[derive(Debug, Clone, Copy)]
pub struct Pow;

impl Function for Pow {
    fn name(&self) -> &str {
        "pow"
    }

    fn arity(&self) -> usize {
        2
    }

    fn perform(
        &self,
        context: &NumericContext,
        args: &[Option<Decimal>],
    ) -> Result<Decimal, FunctionError> {
        let [base, exponent] = require_arguments::<2>(args)?;

        let result = if exponent.fract().is_zero() {
            let magnitude = exponent.abs().to_u64().ok_or(ArithmeticError::Overflow)?;
            let power = base
                .checked_powu(magnitude)
                .ok_or(ArithmeticError::Overflow)?;
            if exponent.is_sign_negative() && !exponent.is_zero() {
                if power.is_zero() {
                    return Err(ArithmeticError::DivisionByZero.into());
                }
                Decimal::ONE
                    .checked_div(power)
                    .ok_or(ArithmeticError::Overflow)?
            } else {
                power
            }
        } else {
            if base.is_sign_negative() && !base.is_zero() {
                return Err(FunctionError::OutOfDomain {
                    value: base,
                    reason: "fractional power of a negative number",
                });
            }
            if base.is_zero() {
                if exponent.is_sign_negative() {
                    return Err(ArithmeticError::DivisionByZero.into());
                }
                Decimal::ZERO
            } else {
                base.checked_powd(exponent)
                    .ok_or(ArithmeticError::Overflow)?
            }
        };

        Ok(context.round(result)?)
    }
}
