use thiserror::Error;

use crate::values::ValueKind;

// Evaluation failures are ordinary results: they short-circuit every
// recursive call site and surface unchanged as the program's outcome.
// There is no separate unwind mechanism.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("identifier not found: {0}")]
    IdentifierNotFound(String),

    #[error("type mismatch: {left} {operator} {right}")]
    TypeMismatch {
        left: ValueKind,
        operator: String,
        right: ValueKind,
    },

    #[error("unknown operator: {operator}{right}")]
    UnknownUnaryOperator { operator: String, right: ValueKind },

    #[error("unknown operator: {left} {operator} {right}")]
    UnknownBinaryOperator {
        left: ValueKind,
        operator: String,
        right: ValueKind,
    },

    #[error("not a function: {0}")]
    NotAFunction(ValueKind),

    #[error("division by zero")]
    DivisionByZero,

    // Precondition violation, never produced by a parsed program with a
    // non-empty statement list
    #[error("empty statement sequence")]
    EmptyStatementSequence,
}
