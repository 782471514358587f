use thiserror::Error;

use crate::checks::PreconditionViolation;
use crate::parse::ParseError;
use crate::quantity::QuantityError;
use crate::rational::ArithmeticError;

/// Any error raised by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Precondition(#[from] PreconditionViolation),
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
    #[error(transparent)]
    Quantity(#[from] QuantityError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
