//! Builders for secondary-index predicate descriptors.

use std::sync::Arc;

use log::Level;
use once_cell::sync::Lazy;

use crate::{
    descriptor::PredicateDescriptor,
    error::PredicateError,
    kind::{IndexDataType, IndexStructure},
    logging::predicate_log,
    option::PredicateOptions,
    value::{Operand, Value},
};

pub(crate) const EQUALS: &str = "equals";
pub(crate) const BETWEEN: &str = "between";
pub(crate) const CONTAINS: &str = "contains";
pub(crate) const RANGE_CONTAINS: &str = "range_contains";

static DEFAULT_BUILDER: Lazy<PredicateBuilder> = Lazy::new(PredicateBuilder::default);

/// Validates operands and assembles [`PredicateDescriptor`]s.
///
/// The builder holds no state besides its options; identical inputs always
/// yield equal descriptors.
#[derive(Debug, Clone, Default)]
pub struct PredicateBuilder {
    options: PredicateOptions,
}

impl PredicateBuilder {
    #[must_use]
    pub fn new(options: PredicateOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub fn options(&self) -> &PredicateOptions {
        &self.options
    }

    /// Equality over a scalar bin. Integers target a numeric index, strings a
    /// string index.
    pub fn equals<V>(&self, bin: &str, value: V) -> Result<PredicateDescriptor, PredicateError>
    where
        V: Into<Value>,
    {
        let bin: Arc<str> = Arc::from(bin);
        let operand = match value.into() {
            Value::Integer(v) => Operand::Integer(v),
            Value::Text(v) => Operand::Text(v),
            other => return Err(unsupported(EQUALS, "integer or string", other.type_name())),
        };
        Ok(built(EQUALS, PredicateDescriptor::equal(bin, operand, None)))
    }

    /// Inclusive integer range over a scalar bin.
    pub fn between<L, H>(
        &self,
        bin: &str,
        min: L,
        max: H,
    ) -> Result<PredicateDescriptor, PredicateError>
    where
        L: Into<Value>,
        H: Into<Value>,
    {
        let bin: Arc<str> = Arc::from(bin);
        let (min, max) = integer_bounds(BETWEEN, min.into(), max.into())?;
        Ok(built(BETWEEN, PredicateDescriptor::range(bin, min, max, None)))
    }

    /// Equality over the elements, keys or values of a collection bin.
    ///
    /// `index_structure` is case-folded before it is matched, so `"mapkeys"`
    /// and `"MapKeys"` both select [`IndexStructure::MapKeys`]. The value must
    /// agree with `data_type`.
    pub fn contains<V>(
        &self,
        bin: &str,
        index_structure: &str,
        data_type: IndexDataType,
        value: V,
    ) -> Result<PredicateDescriptor, PredicateError>
    where
        V: Into<Value>,
    {
        let bin: Arc<str> = Arc::from(bin);
        let structure = index_structure_for(CONTAINS, index_structure)?;
        let operand = match (data_type, value.into()) {
            (IndexDataType::Numeric, Value::Integer(v)) => Operand::Integer(v),
            (IndexDataType::String, Value::Text(v)) => Operand::Text(v),
            (data_type, other) => {
                return Err(unsupported(
                    CONTAINS,
                    data_type.operand_type_name(),
                    other.type_name(),
                ))
            }
        };
        Ok(built(
            CONTAINS,
            PredicateDescriptor::equal(bin, operand, Some(structure)),
        ))
    }

    /// Inclusive integer range over a collection bin. String ranges are not
    /// supported, so `data_type` must be [`IndexDataType::Numeric`].
    pub fn range_contains<L, H>(
        &self,
        bin: &str,
        index_structure: &str,
        data_type: IndexDataType,
        min: L,
        max: H,
    ) -> Result<PredicateDescriptor, PredicateError>
    where
        L: Into<Value>,
        H: Into<Value>,
    {
        let bin: Arc<str> = Arc::from(bin);
        let structure = index_structure_for(RANGE_CONTAINS, index_structure)?;
        if data_type != IndexDataType::Numeric {
            return Err(unsupported(
                RANGE_CONTAINS,
                IndexDataType::Numeric.operand_type_name(),
                data_type.operand_type_name(),
            ));
        }
        let (min, max) = integer_bounds(RANGE_CONTAINS, min.into(), max.into())?;
        Ok(built(
            RANGE_CONTAINS,
            PredicateDescriptor::range(bin, min, max, Some(structure)),
        ))
    }
}

/// Builds an equality predicate with default options.
pub fn equals<V>(bin: &str, value: V) -> Result<PredicateDescriptor, PredicateError>
where
    V: Into<Value>,
{
    DEFAULT_BUILDER.equals(bin, value)
}

/// Builds a scalar range predicate with default options.
pub fn between<L, H>(bin: &str, min: L, max: H) -> Result<PredicateDescriptor, PredicateError>
where
    L: Into<Value>,
    H: Into<Value>,
{
    DEFAULT_BUILDER.between(bin, min, max)
}

/// Builds a collection equality predicate with default options.
pub fn contains<V>(
    bin: &str,
    index_structure: &str,
    data_type: IndexDataType,
    value: V,
) -> Result<PredicateDescriptor, PredicateError>
where
    V: Into<Value>,
{
    DEFAULT_BUILDER.contains(bin, index_structure, data_type, value)
}

/// Builds a collection range predicate with default options.
pub fn range_contains<L, H>(
    bin: &str,
    index_structure: &str,
    data_type: IndexDataType,
    min: L,
    max: H,
) -> Result<PredicateDescriptor, PredicateError>
where
    L: Into<Value>,
    H: Into<Value>,
{
    DEFAULT_BUILDER.range_contains(bin, index_structure, data_type, min, max)
}

fn integer_bounds(
    predicate: &'static str,
    min: Value,
    max: Value,
) -> Result<(i64, i64), PredicateError> {
    match (min, max) {
        (Value::Integer(min), Value::Integer(max)) => Ok((min, max)),
        (Value::Integer(_), other) | (other, _) => {
            Err(unsupported(predicate, "integer", other.type_name()))
        }
    }
}

fn index_structure_for(
    predicate: &'static str,
    name: &str,
) -> Result<IndexStructure, PredicateError> {
    IndexStructure::parse(name).map_err(|err| {
        predicate_log!(
            Level::Debug,
            "predicate_rejected",
            "predicate={} index_structure={:?}",
            predicate,
            name
        );
        err
    })
}

fn unsupported(
    predicate: &'static str,
    expected: &'static str,
    got: &'static str,
) -> PredicateError {
    predicate_log!(
        Level::Debug,
        "predicate_rejected",
        "predicate={} expected={} got={}",
        predicate,
        expected,
        got
    );
    PredicateError::UnsupportedOperandType {
        predicate,
        expected,
        got,
    }
}

fn built(predicate: &'static str, descriptor: PredicateDescriptor) -> PredicateDescriptor {
    predicate_log!(
        Level::Debug,
        "predicate_built",
        "predicate={} kind={} data_type={} bin={:?} arity={}",
        predicate,
        descriptor.kind(),
        descriptor.data_type(),
        descriptor.bin(),
        descriptor.encoded_len()
    );
    descriptor
}
