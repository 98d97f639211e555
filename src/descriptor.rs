//! Predicate descriptors and their fixed-shape encoding.

use std::{fmt, sync::Arc};

use crate::{
    error::PredicateError,
    kind::{IndexDataType, IndexStructure, PredicateKind},
    value::{Operand, Value},
};

/// Operands carried by a descriptor.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Operands {
    /// Equality against one value.
    Single(Operand),
    /// Inclusive integer range. `min > max` is kept as given.
    Range {
        /// Lower bound.
        min: i64,
        /// Upper bound.
        max: i64,
    },
}

/// Secondary-index filter handed to the query component.
///
/// The operator and index data type are derived from the stored operands, so
/// a descriptor can never declare a numeric index over a string operand or
/// the other way around.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PredicateDescriptor {
    bin: Arc<str>,
    operands: Operands,
    index_structure: Option<IndexStructure>,
}

impl PredicateDescriptor {
    pub(crate) fn equal(
        bin: Arc<str>,
        operand: Operand,
        index_structure: Option<IndexStructure>,
    ) -> Self {
        Self {
            bin,
            operands: Operands::Single(operand),
            index_structure,
        }
    }

    pub(crate) fn range(
        bin: Arc<str>,
        min: i64,
        max: i64,
        index_structure: Option<IndexStructure>,
    ) -> Self {
        Self {
            bin,
            operands: Operands::Range { min, max },
            index_structure,
        }
    }

    #[must_use]
    pub fn kind(&self) -> PredicateKind {
        match self.operands {
            Operands::Single(_) => PredicateKind::Equal,
            Operands::Range { .. } => PredicateKind::Range,
        }
    }

    #[must_use]
    pub fn data_type(&self) -> IndexDataType {
        match &self.operands {
            Operands::Single(Operand::Text(_)) => IndexDataType::String,
            Operands::Single(Operand::Integer(_)) | Operands::Range { .. } => {
                IndexDataType::Numeric
            }
        }
    }

    #[must_use]
    pub fn bin(&self) -> &str {
        &self.bin
    }

    #[must_use]
    pub fn operands(&self) -> &Operands {
        &self.operands
    }

    /// Present only for predicates over collection bins.
    #[must_use]
    pub fn index_structure(&self) -> Option<IndexStructure> {
        self.index_structure
    }

    /// Number of fields produced by [`encode`](Self::encode).
    #[must_use]
    pub fn encoded_len(&self) -> usize {
        match (&self.operands, self.index_structure) {
            (Operands::Single(_), None) => 4,
            (Operands::Range { .. }, None) => 5,
            (_, Some(_)) => 6,
        }
    }

    /// Encodes the descriptor as the ordered record the query component reads.
    ///
    /// Scalar predicates yield `(kind, type, bin, value)` or
    /// `(kind, type, bin, min, max)`. Collection predicates always yield six
    /// fields with the structure name last; equality pads the fifth slot with
    /// [`Value::Nil`].
    #[must_use]
    pub fn encode(&self) -> Vec<Value> {
        let mut fields = Vec::with_capacity(self.encoded_len());
        fields.push(Value::Integer(self.kind().code()));
        fields.push(Value::Integer(self.data_type().code()));
        fields.push(Value::Text(self.bin.to_string()));
        match &self.operands {
            Operands::Single(operand) => {
                fields.push(operand.clone().into());
                if self.index_structure.is_some() {
                    fields.push(Value::Nil);
                }
            }
            Operands::Range { min, max } => {
                fields.push(Value::Integer(*min));
                fields.push(Value::Integer(*max));
            }
        }
        if let Some(structure) = self.index_structure {
            fields.push(Value::Text(structure.as_str().to_owned()));
        }
        fields
    }

    /// Parses a record produced by [`encode`](Self::encode).
    pub fn decode(fields: &[Value]) -> Result<Self, PredicateError> {
        let [kind, data_type, bin, rest @ ..] = fields else {
            return Err(malformed(format!(
                "expected at least 4 fields, got {}",
                fields.len()
            )));
        };
        let kind = kind
            .as_integer()
            .and_then(PredicateKind::from_code)
            .ok_or_else(|| malformed(format!("unknown operator {kind:?}")))?;
        let data_type = data_type
            .as_integer()
            .and_then(|tag| IndexDataType::from_tag(tag).ok())
            .ok_or_else(|| malformed(format!("unknown index data type {data_type:?}")))?;
        let bin: Arc<str> = bin
            .as_text()
            .ok_or_else(|| malformed(format!("bin must be a string, got {}", bin.type_name())))?
            .into();

        let descriptor = match (kind, rest) {
            (PredicateKind::Equal, [value]) => Self::equal(bin, decode_operand(value)?, None),
            (PredicateKind::Equal, [value, Value::Nil, Value::Text(structure)]) => Self::equal(
                bin,
                decode_operand(value)?,
                Some(IndexStructure::parse(structure)?),
            ),
            (PredicateKind::Range, [Value::Integer(min), Value::Integer(max)]) => {
                Self::range(bin, *min, *max, None)
            }
            (
                PredicateKind::Range,
                [Value::Integer(min), Value::Integer(max), Value::Text(structure)],
            ) => Self::range(bin, *min, *max, Some(IndexStructure::parse(structure)?)),
            _ => {
                return Err(malformed(format!(
                    "unexpected {kind} layout with {} fields",
                    fields.len()
                )))
            }
        };

        if descriptor.data_type() != data_type {
            return Err(malformed(format!(
                "declared {data_type} index does not match {} operands",
                descriptor.data_type()
            )));
        }
        Ok(descriptor)
    }
}

fn decode_operand(value: &Value) -> Result<Operand, PredicateError> {
    Operand::try_from(value.clone())
        .map_err(|_| malformed(format!("unsupported operand {}", value.type_name())))
}

fn malformed(reason: String) -> PredicateError {
    PredicateError::MalformedDescriptor(reason)
}

impl fmt::Display for PredicateDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.operands {
            Operands::Single(operand) => write!(f, "{} = {}", self.bin, operand)?,
            Operands::Range { min, max } => {
                write!(f, "{} BETWEEN {} AND {}", self.bin, min, max)?
            }
        }
        if let Some(structure) = self.index_structure {
            write!(f, " IN {structure}")?;
        }
        Ok(())
    }
}
