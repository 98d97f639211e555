//! Boundary values accepted by the predicate builders.

use std::fmt;

use crate::error::PredicateError;

/// Loosely-typed value handed over by callers.
///
/// Only [`Value::Integer`] and [`Value::Text`] can become predicate operands;
/// the remaining variants exist so the dynamic surface can report what it was
/// given instead of guessing.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Absent value; also the placeholder slot in encoded descriptors.
    Nil,
    /// Boolean.
    Bool(bool),
    /// Signed 64-bit integer.
    Integer(i64),
    /// 64-bit floating point.
    Float(f64),
    /// UTF-8 string.
    Text(String),
    /// Raw bytes.
    Bytes(Vec<u8>),
    /// Ordered collection.
    List(Vec<Value>),
}

impl Value {
    /// Stable name of the variant, used in error messages.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "bool",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::Text(_) => "string",
            Value::Bytes(_) => "bytes",
            Value::List(_) => "list",
        }
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(v) => Some(v),
            _ => None,
        }
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Integer(i64::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Value::Bytes(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::List(value)
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Nil, Into::into)
    }
}

/// Operand stored inside a predicate descriptor.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Operand {
    /// Compared against a numeric index.
    Integer(i64),
    /// Compared against a string index.
    Text(String),
}

impl Operand {
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Operand::Integer(_) => "integer",
            Operand::Text(_) => "string",
        }
    }
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Operand::Integer(value)
    }
}

impl From<&str> for Operand {
    fn from(value: &str) -> Self {
        Operand::Text(value.to_owned())
    }
}

impl From<String> for Operand {
    fn from(value: String) -> Self {
        Operand::Text(value)
    }
}

impl From<Operand> for Value {
    fn from(value: Operand) -> Self {
        match value {
            Operand::Integer(v) => Value::Integer(v),
            Operand::Text(v) => Value::Text(v),
        }
    }
}

impl TryFrom<Value> for Operand {
    type Error = PredicateError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Integer(v) => Ok(Operand::Integer(v)),
            Value::Text(v) => Ok(Operand::Text(v)),
            other => Err(PredicateError::UnsupportedOperand {
                expected: "integer or string",
                got: other.type_name(),
            }),
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Integer(v) => write!(f, "{v}"),
            Operand::Text(v) => write!(f, "{v:?}"),
        }
    }
}
