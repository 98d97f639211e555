//! Operator and index constants shared with the native query client.
//!
//! The discriminants below are the values the query component expects in an
//! encoded descriptor and must not be renumbered.

use std::fmt;

use crate::error::PredicateError;

/// Predicate operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i64)]
pub enum PredicateKind {
    /// Exact match.
    Equal = 0,
    /// Inclusive integer range.
    Range = 1,
}

impl PredicateKind {
    #[must_use]
    pub fn code(self) -> i64 {
        self as i64
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(PredicateKind::Equal),
            1 => Some(PredicateKind::Range),
            _ => None,
        }
    }
}

impl fmt::Display for PredicateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PredicateKind::Equal => "EQUAL",
            PredicateKind::Range => "RANGE",
        })
    }
}

/// Value type an index is built over.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i64)]
pub enum IndexDataType {
    /// String index.
    String = 0,
    /// Numeric index.
    Numeric = 1,
}

impl IndexDataType {
    #[must_use]
    pub fn code(self) -> i64 {
        self as i64
    }

    /// Validates a caller-supplied data type tag (`0` string, `1` numeric).
    pub fn from_tag(tag: i64) -> Result<Self, PredicateError> {
        match tag {
            0 => Ok(IndexDataType::String),
            1 => Ok(IndexDataType::Numeric),
            other => Err(PredicateError::InvalidDataType(other)),
        }
    }

    /// Name of the operand type this index accepts.
    #[must_use]
    pub fn operand_type_name(self) -> &'static str {
        match self {
            IndexDataType::String => "string",
            IndexDataType::Numeric => "integer",
        }
    }
}

impl TryFrom<i64> for IndexDataType {
    type Error = PredicateError;

    fn try_from(tag: i64) -> Result<Self, Self::Error> {
        IndexDataType::from_tag(tag)
    }
}

impl fmt::Display for IndexDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            IndexDataType::String => "STRING",
            IndexDataType::Numeric => "NUMERIC",
        })
    }
}

/// Part of a collection bin covered by the index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IndexStructure {
    /// List elements.
    List,
    /// Map keys.
    MapKeys,
    /// Map values.
    MapValues,
}

impl IndexStructure {
    pub const ALL: [IndexStructure; 3] = [
        IndexStructure::List,
        IndexStructure::MapKeys,
        IndexStructure::MapValues,
    ];

    /// Upper-case name carried in encoded descriptors.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            IndexStructure::List => "LIST",
            IndexStructure::MapKeys => "MAPKEYS",
            IndexStructure::MapValues => "MAPVALUES",
        }
    }

    /// Folds ASCII lower-case letters to upper case and matches the result
    /// against the known structures.
    pub fn parse(name: &str) -> Result<Self, PredicateError> {
        let folded = name.to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|structure| structure.as_str() == folded)
            .ok_or(PredicateError::InvalidIndexStructure(folded))
    }
}

impl std::str::FromStr for IndexStructure {
    type Err = PredicateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IndexStructure::parse(s)
    }
}

impl fmt::Display for IndexStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
