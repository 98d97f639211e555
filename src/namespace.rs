//! Name-based registration of the predicate builders.
//!
//! The namespace is the dynamic surface: callers pass the predicate name and
//! positional [`Value`] arguments, and the namespace checks arity and argument
//! kinds before handing off to [`PredicateBuilder`].

use std::collections::BTreeMap;

use log::Level;
use once_cell::sync::Lazy;

use crate::{
    builder::{PredicateBuilder, BETWEEN, CONTAINS, EQUALS, RANGE_CONTAINS},
    descriptor::PredicateDescriptor,
    error::PredicateError,
    kind::IndexDataType,
    logging::predicate_log,
    option::PredicateOptions,
    value::Value,
};

type Invoke = fn(&PredicateBuilder, &[Value]) -> Result<PredicateDescriptor, PredicateError>;

static PREDICATES: Lazy<Namespace> = Lazy::new(Namespace::default);

/// Process-wide namespace built with default options.
pub fn predicates() -> &'static Namespace {
    &PREDICATES
}

#[derive(Clone, Copy)]
struct Entry {
    arity: usize,
    doc: &'static str,
    invoke: Invoke,
}

/// The four predicate builders grouped under one name.
#[derive(Clone)]
pub struct Namespace {
    builder: PredicateBuilder,
    entries: BTreeMap<&'static str, Entry>,
}

impl Default for Namespace {
    fn default() -> Self {
        Self::new(PredicateOptions::default())
    }
}

impl std::fmt::Debug for Namespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Namespace")
            .field("name", &self.name())
            .field("predicates", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Namespace {
    #[must_use]
    pub fn new(options: PredicateOptions) -> Self {
        let mut namespace = Self {
            builder: PredicateBuilder::new(options),
            entries: BTreeMap::new(),
        };
        namespace.register(
            EQUALS,
            2,
            "Tests whether a bin's value equals the specified value.",
            invoke_equals,
        );
        namespace.register(
            BETWEEN,
            3,
            "Tests whether a bin's value is within the specified range.",
            invoke_between,
        );
        namespace.register(
            CONTAINS,
            4,
            "Tests whether a bin's value equals the specified value in a complex data type.",
            invoke_contains,
        );
        namespace.register(
            RANGE_CONTAINS,
            5,
            "Tests whether a bin's value is within the specified range in a complex data type.",
            invoke_range_contains,
        );
        predicate_log!(
            Level::Debug,
            "namespace_registered",
            "namespace={} predicates={}",
            namespace.name(),
            namespace.entries.len()
        );
        namespace
    }

    fn register(&mut self, name: &'static str, arity: usize, doc: &'static str, invoke: Invoke) {
        self.entries.insert(name, Entry { arity, doc, invoke });
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.builder.options().namespace_name()
    }

    #[must_use]
    pub fn builder(&self) -> &PredicateBuilder {
        &self.builder
    }

    /// Registered predicate names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    #[must_use]
    pub fn doc(&self, name: &str) -> Option<&'static str> {
        self.entries.get(name).map(|entry| entry.doc)
    }

    #[must_use]
    pub fn arity(&self, name: &str) -> Option<usize> {
        self.entries.get(name).map(|entry| entry.arity)
    }

    /// Invokes the predicate registered under `name` with positional arguments.
    pub fn call(&self, name: &str, args: &[Value]) -> Result<PredicateDescriptor, PredicateError> {
        let Some((&predicate, entry)) = self.entries.get_key_value(name) else {
            predicate_log!(
                Level::Debug,
                "predicate_unknown",
                "namespace={} predicate={:?}",
                self.name(),
                name
            );
            return Err(PredicateError::UnknownPredicate(name.to_owned()));
        };
        if args.len() != entry.arity {
            predicate_log!(
                Level::Debug,
                "predicate_rejected",
                "namespace={} predicate={} expected_args={} got_args={}",
                self.name(),
                predicate,
                entry.arity,
                args.len()
            );
            return Err(PredicateError::InvalidArity {
                predicate,
                expected: entry.arity,
                got: args.len(),
            });
        }
        (entry.invoke)(&self.builder, args)
    }
}

fn invoke_equals(
    builder: &PredicateBuilder,
    args: &[Value],
) -> Result<PredicateDescriptor, PredicateError> {
    let [bin, value] = args else {
        return Err(arity_mismatch(EQUALS, 2, args));
    };
    let bin = text_arg(EQUALS, "bin", bin)?;
    builder.equals(bin, value.clone())
}

fn invoke_between(
    builder: &PredicateBuilder,
    args: &[Value],
) -> Result<PredicateDescriptor, PredicateError> {
    let [bin, min, max] = args else {
        return Err(arity_mismatch(BETWEEN, 3, args));
    };
    let bin = text_arg(BETWEEN, "bin", bin)?;
    builder.between(bin, min.clone(), max.clone())
}

fn invoke_contains(
    builder: &PredicateBuilder,
    args: &[Value],
) -> Result<PredicateDescriptor, PredicateError> {
    let [bin, index_structure, data_type, value] = args else {
        return Err(arity_mismatch(CONTAINS, 4, args));
    };
    let bin = text_arg(CONTAINS, "bin", bin)?;
    let index_structure = text_arg(CONTAINS, "index_structure", index_structure)?;
    let data_type = data_type_arg(CONTAINS, data_type)?;
    builder.contains(bin, index_structure, data_type, value.clone())
}

fn invoke_range_contains(
    builder: &PredicateBuilder,
    args: &[Value],
) -> Result<PredicateDescriptor, PredicateError> {
    let [bin, index_structure, data_type, min, max] = args else {
        return Err(arity_mismatch(RANGE_CONTAINS, 5, args));
    };
    let bin = text_arg(RANGE_CONTAINS, "bin", bin)?;
    let index_structure = text_arg(RANGE_CONTAINS, "index_structure", index_structure)?;
    let data_type = data_type_arg(RANGE_CONTAINS, data_type)?;
    builder.range_contains(bin, index_structure, data_type, min.clone(), max.clone())
}

fn arity_mismatch(predicate: &'static str, expected: usize, args: &[Value]) -> PredicateError {
    PredicateError::InvalidArity {
        predicate,
        expected,
        got: args.len(),
    }
}

fn text_arg<'a>(
    predicate: &'static str,
    argument: &'static str,
    value: &'a Value,
) -> Result<&'a str, PredicateError> {
    value.as_text().ok_or(PredicateError::InvalidArgument {
        predicate,
        argument,
        expected: "string",
        got: value.type_name(),
    })
}

fn data_type_arg(predicate: &'static str, value: &Value) -> Result<IndexDataType, PredicateError> {
    let tag = value.as_integer().ok_or(PredicateError::InvalidArgument {
        predicate,
        argument: "data_type",
        expected: "integer",
        got: value.type_name(),
    })?;
    IndexDataType::from_tag(tag)
}
