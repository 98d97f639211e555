//! Secondary-index query predicates for a distributed key-value store client.
//!
//! Each builder takes a bin name plus operands and returns a
//! [`PredicateDescriptor`]: operator, index data type, bin, operand(s) and,
//! for collection bins, the index structure. The query component consumes
//! the descriptor, usually through its [`encode`](PredicateDescriptor::encode)d
//! tuple form. Malformed input is reported as a [`PredicateError`]; nothing is
//! silently dropped.
//!
//! ```
//! use sindex_predicates::{contains, equals, IndexDataType, IndexStructure};
//!
//! let by_age = equals("age", 30).unwrap();
//! assert_eq!(by_age.bin(), "age");
//!
//! let by_tag = contains("tags", "list", IndexDataType::String, "red").unwrap();
//! assert_eq!(by_tag.index_structure(), Some(IndexStructure::List));
//! ```

mod builder;
mod descriptor;
mod error;
mod kind;
mod logging;
mod namespace;
mod option;
mod value;

pub use builder::{between, contains, equals, range_contains, PredicateBuilder};
pub use descriptor::{Operands, PredicateDescriptor};
pub use error::PredicateError;
pub use kind::{IndexDataType, IndexStructure, PredicateKind};
pub use namespace::{predicates, Namespace};
pub use option::{PredicateOptions, DEFAULT_NAMESPACE};
pub use value::{Operand, Value};
