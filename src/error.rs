//! Arithmetic failure conditions
//!
//! Overflow and borrow are reported through the flag of the returned
//! [`Pair`](crate::Pair), so the only operation that can fail is division
//! (and the remainder it yields) by a zero divisor.

pub type Result<T> = std::result::Result<T, ArithmeticError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ArithmeticError {
    #[error("division by zero")]
    DivisionByZero,
}
