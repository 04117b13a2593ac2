use pretty_assertions::assert_eq;

use super::*;
use crate::{NativeFunction, Value};

fn native() -> Value {
    Value::Callable(Rc::new(NativeFunction::new("zero", 0, |_| Ok(Value::Number(0.0)))))
}

#[test]
fn truthiness() {
    assert!(!Value::Nil.is_truthy());
    assert!(!Value::Bool(false).is_truthy());
    assert!(Value::Bool(true).is_truthy());
    assert!(Value::Number(0.0).is_truthy());
    assert!(Value::string("").is_truthy());
    assert!(native().is_truthy());
}

#[test]
fn equality_is_strict_about_types() {
    assert_eq!(Value::Nil, Value::Nil);
    assert_ne!(Value::Nil, Value::Bool(false));
    assert_ne!(Value::Number(0.0), Value::Bool(false));
    assert_ne!(Value::string("1"), Value::Number(1.0));
    assert_eq!(Value::string("ab"), Value::string(String::from("a") + "b"));
}

#[test]
fn nan_is_not_equal_to_itself() {
    let nan = Value::Number(f64::NAN);
    assert_ne!(nan, nan.clone());
}

#[test]
fn callables_compare_by_identity() {
    let f = native();
    let g = native();
    assert_eq!(f, f.clone());
    assert_ne!(f, g);
}

#[test]
fn number_display() {
    let shown: Vec<String> = [
        3.0,
        2.5,
        -0.0,
        1.0 / 3.0,
        f64::INFINITY,
        f64::NEG_INFINITY,
        f64::NAN,
        1e21,
    ]
        .into_iter()
        .map(|n| Value::Number(n).to_string())
        .collect();
    assert_eq!(
        shown,
        vec![
            "3",
            "2.5",
            "-0",
            "0.3333333333333333",
            "Infinity",
            "-Infinity",
            "NaN",
            "1000000000000000000000",
        ]
    );
}

#[test]
fn other_display() {
    assert_eq!(Value::Nil.to_string(), "nil");
    assert_eq!(Value::Bool(true).to_string(), "true");
    assert_eq!(Value::string("hi there").to_string(), "hi there");
    assert_eq!(native().to_string(), "<native fn>");
}

#[test]
fn from_literal() {
    assert_eq!(Value::from(&Literal::Number(1.5)), Value::Number(1.5));
    assert_eq!(Value::from(&Literal::Str("s".into())), Value::string("s"));
    assert_eq!(Value::from(&Literal::Nil), Value::Nil);
    assert_eq!(Value::from(&Literal::Bool(false)), Value::Bool(false));
}
