use thiserror::Error;

/// Errors raised while building or decoding predicate descriptors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PredicateError {
    #[error("Invalid arity for {predicate}: expected {expected}, got {got}")]
    InvalidArity {
        predicate: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("Unsupported operand type for {predicate}: expected {expected}, got {got}")]
    UnsupportedOperandType {
        predicate: &'static str,
        expected: &'static str,
        got: &'static str,
    },
    /// Raised by operand conversion outside any builder.
    #[error("Unsupported operand type: expected {expected}, got {got}")]
    UnsupportedOperand {
        expected: &'static str,
        got: &'static str,
    },
    #[error("Invalid index structure: {0}")]
    InvalidIndexStructure(String),
    #[error("Invalid index data type tag: {0}")]
    InvalidDataType(i64),
    #[error("Invalid argument '{argument}' for {predicate}: expected {expected}, got {got}")]
    InvalidArgument {
        predicate: &'static str,
        argument: &'static str,
        expected: &'static str,
        got: &'static str,
    },
    #[error("Unknown predicate: {0}")]
    UnknownPredicate(String),
    #[error("Malformed predicate descriptor: {0}")]
    MalformedDescriptor(String),
}
