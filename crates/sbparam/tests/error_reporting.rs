use sbparam::{ErrorKind, Map, Param, ParamError, Value, unmarshal, unmarshal_opt};

fn decode<T: Param + Default>(params: &Map) -> Result<T, ParamError> {
    T::unmarshal_from(params)
}

#[derive(Debug, Default, Param)]
struct UntaggedString {
    str_field: String,
}

#[derive(Debug, Default, Param)]
struct EmptyTagString {
    #[sbparam("")]
    str_field: String,
}

#[derive(Debug, Default, Param)]
#[sbparam(rename_all = "PascalCase")]
struct KeyedString {
    #[sbparam("str_field")]
    str_field: String,
}

#[test]
fn required_string_errors() {
    let empty = Map::new();

    let err = decode::<UntaggedString>(&empty).unwrap_err();
    assert_eq!(err.kind, ErrorKind::MissingRequired);
    assert_eq!(err.field_name.as_deref(), Some("str_field"));

    let err = decode::<EmptyTagString>(&empty).unwrap_err();
    assert_eq!(err.kind, ErrorKind::MissingRequired);

    let err = decode::<KeyedString>(&empty).unwrap_err();
    assert_eq!(err.kind, ErrorKind::MissingRequired);
    assert_eq!(err.key.as_deref(), Some("str_field"));

    // Renaming applies to the declared name only, never to an explicit key.
    let err = decode::<KeyedString>(&Map::from([("StrField", "x")])).unwrap_err();
    assert_eq!(err.kind, ErrorKind::MissingRequired);

    let mismatched = Map::from([("str_field", Value::Int(1))]);
    let err = decode::<UntaggedString>(&mismatched).unwrap_err();
    assert_eq!(
        err.kind,
        ErrorKind::TypeMismatch {
            expected: "string",
            actual: "int"
        }
    );
}

#[derive(Debug, Default, Param)]
struct RequiredWithDefault {
    #[sbparam("count,required,5")]
    count: i64,
}

#[test]
fn default_text_makes_a_field_optional() {
    // A third component always wins over the modifier.
    let decoded = decode::<RequiredWithDefault>(&Map::new()).unwrap();
    assert_eq!(decoded.count, 5);
}

#[derive(Debug, Default, Param)]
struct Int {
    int_field: i64,
}

#[derive(Debug, Default, Param)]
struct BadIntDefault {
    #[sbparam(",,a")]
    int_field: isize,
}

#[derive(Debug, Default, Param)]
struct Int8 {
    int_field: i8,
}

#[derive(Debug, Default, Param)]
struct Int16 {
    int_field: i16,
}

#[derive(Debug, Default, Param)]
struct Int32 {
    int_field: i32,
}

#[test]
fn signed_integer_errors() {
    let err = decode::<Int>(&Map::from([("int_field", "error")])).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::TypeMismatch { expected: "int", .. }));

    let err = decode::<BadIntDefault>(&Map::new()).unwrap_err();
    match err.kind {
        ErrorKind::InvalidDefault {
            expected, value, ..
        } => {
            assert_eq!(expected, "int");
            assert_eq!(value, "a");
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let err = decode::<Int8>(&Map::from([("int_field", Value::Int(i8::MAX as i64 + 1))]))
        .unwrap_err();
    assert_eq!(
        err.kind,
        ErrorKind::Overflow {
            target: "int8",
            value: "128".into()
        }
    );
    let message = err.to_string();
    assert!(message.contains("int_field"), "{message}");
    assert!(message.contains("int8"), "{message}");
    assert!(message.contains("128"), "{message}");

    let err = decode::<Int16>(&Map::from([("int_field", Value::Int(i16::MIN as i64 - 1))]))
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Overflow { target: "int16", .. }));

    let err = decode::<Int32>(&Map::from([("int_field", Value::Int(i32::MAX as i64 + 1))]))
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Overflow { target: "int32", .. }));
}

#[derive(Debug, Default, Param)]
struct Uint {
    uint_field: usize,
}

#[derive(Debug, Default, Param)]
struct OptionalUint {
    #[sbparam(",,1")]
    uint_field: u32,
}

#[derive(Debug, Default, Param)]
struct Uint8 {
    uint_field: u8,
}

#[test]
fn unsigned_integer_errors() {
    let err = decode::<Uint>(&Map::from([("uint_field", Value::Int(-1))])).unwrap_err();
    assert_eq!(err.kind, ErrorKind::NegativeUnsigned { value: -1 });

    // Rejected even though a valid default would otherwise apply.
    let err = decode::<OptionalUint>(&Map::from([("uint_field", Value::Int(-1))])).unwrap_err();
    assert_eq!(err.kind, ErrorKind::NegativeUnsigned { value: -1 });

    let decoded = decode::<OptionalUint>(&Map::from([("uint_field", "x")])).unwrap();
    assert_eq!(decoded.uint_field, 1);

    let err = decode::<Uint>(&Map::from([("uint_field", "x")])).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::TypeMismatch { expected: "uint", .. }));

    let err = decode::<Uint8>(&Map::from([("uint_field", Value::Int(256))])).unwrap_err();
    assert_eq!(
        err.kind,
        ErrorKind::Overflow {
            target: "uint8",
            value: "256".into()
        }
    );
}

#[derive(Debug, Default, Param)]
struct Float32 {
    value: f32,
}

#[derive(Debug, Default, Param)]
struct BadFloatDefault {
    #[sbparam(",omitempty")]
    value: f64,
}

#[derive(Debug, Default, Param)]
struct BadBoolDefault {
    #[sbparam(",,yes")]
    flag: bool,
}

#[test]
fn float_and_bool_errors() {
    let err = decode::<Float32>(&Map::from([("value", Value::Float(f64::MAX))])).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Overflow { target: "float32", .. }));

    let err = decode::<Float32>(&Map::from([("value", "1.0")])).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::TypeMismatch { expected: "float", .. }));

    // Integers are not widened into float fields.
    let err = decode::<Float32>(&Map::from([("value", Value::Int(7))])).unwrap_err();
    assert_eq!(
        err.kind,
        ErrorKind::TypeMismatch {
            expected: "float",
            actual: "int"
        }
    );

    // `omitempty` alone leaves an empty default, which is not a float.
    let err = decode::<BadFloatDefault>(&Map::new()).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidDefault { expected: "float", .. }));

    let err = decode::<BadBoolDefault>(&Map::new()).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidDefault { expected: "bool", .. }));
}

#[derive(Debug, Default, Param)]
struct BadPath {
    #[sbparam("a..b,omitempty")]
    value: String,
}

#[test]
fn invalid_key_syntax_fails_even_for_optional_fields() {
    let err = decode::<BadPath>(&Map::new()).unwrap_err();
    match &err.kind {
        ErrorKind::InvalidPath(path_err) => assert_eq!(path_err.path, "a..b"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().contains("cannot compile 'a..b' as path"));
    assert!(std::error::Error::source(&err).is_some());
}

#[derive(Debug, Default, PartialEq, Param)]
struct Partial {
    first: String,
    second: i8,
    third: String,
}

#[test]
fn decoding_stops_at_first_error_without_rollback() {
    let mut record = Partial {
        first: "old".into(),
        second: 1,
        third: "old".into(),
    };
    let params = Map::from([
        ("first", Value::from("new")),
        ("second", Value::Int(1000)),
        ("third", Value::from("new")),
    ]);

    let err = unmarshal(&params, &mut record).unwrap_err();
    assert_eq!(err.field_name.as_deref(), Some("second"));
    assert_eq!(
        record,
        Partial {
            first: "new".into(),
            second: 1,
            third: "old".into(),
        }
    );
}

#[test]
fn missing_destination_is_unsupported() {
    let err = unmarshal_opt::<Partial>(&Map::from([("first", "x")]), None).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnsupportedType { .. }));
    assert!(err.to_string().contains("type is not supported"));

    let mut record = Partial::default();
    let params = Map::from([
        ("first", Value::from("a")),
        ("second", Value::Int(2)),
        ("third", Value::from("c")),
    ]);
    unmarshal_opt(&params, Some(&mut record)).unwrap();
    assert_eq!(record.second, 2);
}
