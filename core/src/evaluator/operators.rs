//! Binary operator implementations.

use rust_decimal::Decimal;

use crate::numeric::{ArithmeticError, NumericContext, RoundingMode};
use crate::parser::BinaryOp;

/// Apply `op` and round the result under `context`.
///
/// Overflow, underflow to zero and division by zero are errors. Under
/// [`RoundingMode::Unnecessary`] a quotient that does not terminate is an
/// error too, even when it fits in the available digits.
pub fn apply_binary(
    op: BinaryOp,
    left: Decimal,
    right: Decimal,
    context: &NumericContext,
) -> Result<Decimal, ArithmeticError> {
    let raw = match op {
        BinaryOp::Add => left.checked_add(right),
        BinaryOp::Sub => left.checked_sub(right),
        BinaryOp::Mul => left.checked_mul(right),
        BinaryOp::Div => {
            if right.is_zero() {
                return Err(ArithmeticError::DivisionByZero);
            }
            let quotient = left.checked_div(right).ok_or(ArithmeticError::Overflow)?;
            if context.rounding() == RoundingMode::Unnecessary
                && quotient.checked_mul(right) != Some(left)
            {
                return Err(ArithmeticError::RoundingNecessary {
                    value: quotient,
                    precision: context.precision(),
                });
            }
            Some(quotient)
        }
    }
    .ok_or(ArithmeticError::Overflow)?;

    // A zero product or quotient of non-zero operands fell below the
    // smallest decimal step.
    if raw.is_zero()
        && matches!(op, BinaryOp::Mul | BinaryOp::Div)
        && !left.is_zero()
        && !right.is_zero()
    {
        return Err(ArithmeticError::Underflow);
    }

    context.round(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn ctx(precision: u32, rounding: RoundingMode) -> NumericContext {
        NumericContext::new(precision, rounding).unwrap()
    }

    #[test]
    fn test_basic_operations() {
        let c = NumericContext::default();
        assert_eq!(apply_binary(BinaryOp::Add, dec("45"), dec("70"), &c).unwrap(), dec("115"));
        assert_eq!(apply_binary(BinaryOp::Sub, dec("5"), dec("1"), &c).unwrap(), dec("4"));
        assert_eq!(apply_binary(BinaryOp::Mul, dec("2.5"), dec("4"), &c).unwrap(), dec("10"));
        assert_eq!(apply_binary(BinaryOp::Div, dec("1"), dec("4"), &c).unwrap(), dec("0.25"));
    }

    #[test]
    fn test_division_is_rounded() {
        let c = ctx(5, RoundingMode::HalfUp);
        assert_eq!(
            apply_binary(BinaryOp::Div, dec("1"), dec("3"), &c).unwrap().to_string(),
            "0.33333"
        );
        assert_eq!(
            apply_binary(BinaryOp::Div, dec("2"), dec("3"), &c).unwrap().to_string(),
            "0.66667"
        );
        let c = ctx(5, RoundingMode::Down);
        assert_eq!(
            apply_binary(BinaryOp::Div, dec("2"), dec("3"), &c).unwrap().to_string(),
            "0.66666"
        );
    }

    #[test]
    fn test_division_by_zero() {
        let c = NumericContext::default();
        assert_eq!(
            apply_binary(BinaryOp::Div, dec("1"), Decimal::ZERO, &c),
            Err(ArithmeticError::DivisionByZero)
        );
    }

    #[test]
    fn test_overflow() {
        let c = NumericContext::default();
        assert_eq!(
            apply_binary(BinaryOp::Mul, Decimal::MAX, dec("2"), &c),
            Err(ArithmeticError::Overflow)
        );
        assert_eq!(
            apply_binary(BinaryOp::Add, Decimal::MAX, Decimal::ONE, &c),
            Err(ArithmeticError::Overflow)
        );
    }

    #[test]
    fn test_underflow() {
        let c = NumericContext::default();
        let tiny = dec("0.0000000000000001");
        assert_eq!(
            apply_binary(BinaryOp::Mul, tiny, tiny, &c),
            Err(ArithmeticError::Underflow)
        );
        assert!(apply_binary(BinaryOp::Div, tiny, dec("1000000000000000"), &c).is_err());
        assert_eq!(
            apply_binary(BinaryOp::Mul, Decimal::ZERO, tiny, &c).unwrap(),
            Decimal::ZERO
        );
        assert_eq!(
            apply_binary(BinaryOp::Mul, tiny, Decimal::ZERO, &c).unwrap(),
            Decimal::ZERO
        );
        assert_eq!(
            apply_binary(BinaryOp::Sub, tiny, tiny, &c).unwrap(),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_unnecessary_rounding() {
        let c = ctx(28, RoundingMode::Unnecessary);
        assert_eq!(apply_binary(BinaryOp::Div, dec("1"), dec("4"), &c).unwrap(), dec("0.25"));
        assert!(matches!(
            apply_binary(BinaryOp::Div, dec("1"), dec("3"), &c),
            Err(ArithmeticError::RoundingNecessary { .. })
        ));

        let c = ctx(2, RoundingMode::Unnecessary);
        assert_eq!(apply_binary(BinaryOp::Mul, dec("1.5"), dec("3"), &c).unwrap(), dec("4.5"));
        assert!(matches!(
            apply_binary(BinaryOp::Mul, dec("1.5"), dec("1.5"), &c),
            Err(ArithmeticError::RoundingNecessary { .. })
        ));
    }
}
