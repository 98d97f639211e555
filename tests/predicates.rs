use sindex_predicates::{
    between, contains, equals, predicates, range_contains, IndexDataType, IndexStructure,
    PredicateDescriptor, PredicateError, PredicateKind, Value,
};

const ROUNDS: usize = 256;

fn random_bin(rng: &mut fastrand::Rng) -> String {
    let len = rng.usize(0..=96);
    std::iter::repeat_with(|| rng.alphanumeric()).take(len).collect()
}

#[test]
fn equals_integer_encodes_numeric_tuple() {
    let mut rng = fastrand::Rng::with_seed(7);
    for _ in 0..ROUNDS {
        let bin = random_bin(&mut rng);
        let v = rng.i64(..);
        let d = equals(&bin, v).expect("equals");
        assert_eq!(
            d.encode(),
            vec![
                Value::Integer(0),
                Value::Integer(1),
                Value::Text(bin.clone()),
                Value::Integer(v),
            ]
        );
    }
}

#[test]
fn equals_string_encodes_string_tuple() {
    let mut rng = fastrand::Rng::with_seed(11);
    for _ in 0..ROUNDS {
        let bin = random_bin(&mut rng);
        let v = random_bin(&mut rng);
        let d = equals(&bin, v.as_str()).expect("equals");
        assert_eq!(
            d.encode(),
            vec![
                Value::Integer(0),
                Value::Integer(0),
                Value::Text(bin.clone()),
                Value::Text(v),
            ]
        );
    }
}

#[test]
fn between_keeps_bounds_as_given() {
    let mut rng = fastrand::Rng::with_seed(13);
    for _ in 0..ROUNDS {
        let lo = rng.i64(..);
        let hi = rng.i64(..);
        let d = between("b", lo, hi).expect("between");
        assert_eq!(
            d.encode(),
            vec![
                Value::Integer(1),
                Value::Integer(1),
                Value::from("b"),
                Value::Integer(lo),
                Value::Integer(hi),
            ]
        );
    }

    let inverted = between("b", 10, 1).expect("inverted bounds");
    assert_eq!(inverted.encode()[3..], [Value::Integer(10), Value::Integer(1)]);
}

#[test]
fn contains_numeric_list() {
    let d = contains("b", "list", IndexDataType::Numeric, 5).expect("contains");
    assert_eq!(
        d.encode(),
        vec![
            Value::Integer(0),
            Value::Integer(1),
            Value::from("b"),
            Value::Integer(5),
            Value::Nil,
            Value::from("LIST"),
        ]
    );
}

#[test]
fn contains_folds_structure_case() {
    let d = contains("b", "MapKeys", IndexDataType::String, "x").expect("contains");
    assert_eq!(d.index_structure(), Some(IndexStructure::MapKeys));
    assert_eq!(
        d.encode(),
        vec![
            Value::Integer(0),
            Value::Integer(0),
            Value::from("b"),
            Value::from("x"),
            Value::Nil,
            Value::from("MAPKEYS"),
        ]
    );
}

#[test]
fn range_contains_map_values() {
    let d = range_contains("b", "mapvalues", IndexDataType::Numeric, 1, 10).expect("range");
    assert_eq!(
        d.encode(),
        vec![
            Value::Integer(1),
            Value::Integer(1),
            Value::from("b"),
            Value::Integer(1),
            Value::Integer(10),
            Value::from("MAPVALUES"),
        ]
    );
}

#[test]
fn mismatched_tag_is_an_error() {
    let err = predicates()
        .call(
            "contains",
            &[Value::from("b"), "list".into(), 1.into(), "x".into()],
        )
        .expect_err("string value under numeric tag");
    assert_eq!(
        err,
        PredicateError::UnsupportedOperandType {
            predicate: "contains",
            expected: "integer",
            got: "string",
        }
    );

    let err = predicates()
        .call(
            "range_contains",
            &[Value::from("b"), "list".into(), 0.into(), 1.into(), 2.into()],
        )
        .expect_err("string range");
    assert!(matches!(err, PredicateError::UnsupportedOperandType { .. }));

    assert_eq!(
        contains("b", "set", IndexDataType::Numeric, 1),
        Err(PredicateError::InvalidIndexStructure("SET".into()))
    );
    assert_eq!(
        predicates().call(
            "contains",
            &[Value::from("b"), "list".into(), 7.into(), 1.into()]
        ),
        Err(PredicateError::InvalidDataType(7))
    );
}

#[test]
fn namespace_matches_free_functions() {
    let ns = predicates();
    assert_eq!(
        ns.call("equals", &[Value::from("age"), 3.into()]),
        equals("age", 3)
    );
    assert_eq!(
        ns.call("between", &[Value::from("age"), 1.into(), 9.into()]),
        between("age", 1, 9)
    );
    assert_eq!(
        ns.call(
            "contains",
            &[Value::from("tags"), "LIST".into(), 0.into(), "red".into()]
        ),
        contains("tags", "list", IndexDataType::String, "red")
    );
    assert_eq!(
        ns.call(
            "range_contains",
            &[Value::from("m"), "mapkeys".into(), 1.into(), 0.into(), 5.into()]
        ),
        range_contains("m", "MAPKEYS", IndexDataType::Numeric, 0, 5)
    );
    assert!(matches!(
        ns.call("equals", &[Value::from("age")]),
        Err(PredicateError::InvalidArity { .. })
    ));
}

#[test]
fn builders_are_idempotent() {
    let mut rng = fastrand::Rng::with_seed(17);
    for _ in 0..ROUNDS {
        let bin = random_bin(&mut rng);
        let text = random_bin(&mut rng);
        let (lo, hi) = (rng.i64(..), rng.i64(..));

        let pairs = [
            (equals(&bin, lo), equals(&bin, lo)),
            (equals(&bin, text.as_str()), equals(&bin, text.as_str())),
            (between(&bin, lo, hi), between(&bin, lo, hi)),
            (
                contains(&bin, "list", IndexDataType::String, text.as_str()),
                contains(&bin, "list", IndexDataType::String, text.as_str()),
            ),
            (
                range_contains(&bin, "mapkeys", IndexDataType::Numeric, lo, hi),
                range_contains(&bin, "mapkeys", IndexDataType::Numeric, lo, hi),
            ),
        ];
        for (first, second) in pairs {
            let first = first.expect("first build");
            let second = second.expect("second build");
            assert_eq!(first.encode(), second.encode());
            assert_eq!(first, second);
        }
    }
}

#[test]
fn long_bin_names_pass_through() {
    let bin = "customer_lifetime_value";
    assert_eq!(equals(bin, 7).expect("equals").bin(), bin);
    let d = predicates()
        .call(
            "between",
            &[Value::from("sixteen_chars_xx"), 1.into(), 2.into()],
        )
        .expect("between");
    assert_eq!(d.encode()[2], Value::from("sixteen_chars_xx"));
}

#[test]
fn encoded_descriptors_decode_back() {
    let descriptors = [
        equals("a", 1).expect("equals"),
        equals("a", "x").expect("equals"),
        between("a", 5, -5).expect("between"),
        contains("a", "mapkeys", IndexDataType::String, "k").expect("contains"),
        range_contains("a", "list", IndexDataType::Numeric, 0, 3).expect("range_contains"),
    ];
    for d in descriptors {
        let fields = d.encode();
        assert_eq!(fields.len(), d.encoded_len());
        assert_eq!(PredicateDescriptor::decode(&fields), Ok(d));
    }
}

#[test]
fn descriptor_kind_reflects_builder() {
    assert_eq!(equals("a", 1).map(|d| d.kind()), Ok(PredicateKind::Equal));
    assert_eq!(between("a", 1, 2).map(|d| d.kind()), Ok(PredicateKind::Range));
}
