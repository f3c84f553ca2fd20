use test_case::test_case;

use crate::value::Value;

fn from_json(s: &str) -> Value {
    serde_json::from_str(s).unwrap()
}

#[test]
fn test_null() {
    assert_eq!(from_json("null"), Value::Null);
}

#[test]
fn test_integer() {
    assert_eq!(from_json("42"), Value::Int(42));
    assert_eq!(from_json("-10"), Value::Int(-10));
    assert_eq!(from_json("18446744073709551615"), Value::UInt(u64::MAX));
}

#[test]
fn test_float() {
    assert_eq!(from_json("3.17"), Value::Float(3.17));
}

#[test]
fn test_array() {
    assert_eq!(
        from_json(r#"[1, "a", [true]]"#),
        Value::Array(vec![
            Value::Int(1),
            Value::String("a".to_string()),
            Value::Array(vec![Value::Bool(true)]),
        ])
    );
}

#[test]
fn test_objects_are_rejected() {
    assert!(serde_json::from_str::<Value>(r#"{"a": 1}"#).is_err());
}

#[test]
fn test_numbers_compare_across_variants() {
    assert_eq!(Value::Int(3), Value::Float(3.0));
    assert_eq!(Value::UInt(3), Value::Int(3));
    assert!(Value::Int(-1) < Value::UInt(0));
    assert!(Value::Float(2.5) < Value::Int(3));
}

#[test]
fn test_numbers_sort_before_strings() {
    let values = [Value::from("a"), Value::Int(100), Value::Float(7.5)];
    assert_eq!(values.iter().max(), Some(&Value::from("a")));
}

#[test_case(Value::Int(3) => Some(3))]
#[test_case(Value::Int(-4) => Some(-4))]
#[test_case(Value::UInt(u64::MAX) => Some(i64::MAX))]
#[test_case(Value::Float(2.5) => Some(3))]
#[test_case(Value::Float(-2.5) => Some(-2))]
#[test_case(Value::Float(4.0) => Some(4))]
#[test_case(Value::from("3") => None)]
#[test_case(Value::Null => None)]
#[test_case(Value::from(vec![1]) => None)]
fn ceil_i64(value: Value) -> Option<i64> {
    value.ceil_i64()
}

#[test]
fn test_display() {
    assert_eq!(
        Value::from(vec![Value::Int(1), Value::from("x"), Value::Float(0.5)]).to_string(),
        r#"[1, "x", 0.5]"#
    );
}
