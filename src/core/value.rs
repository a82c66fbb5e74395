//! Purpose: Abstract decoded-JSON value model shared by decoder, binder, and encoder.
//! Exports: `Value`, `Num`, `ABSENT_INT`.
//! Role: Single in-memory currency between the JSON surface and native arguments.
//! Invariants: `Fields` preserves insertion order; keys are unique per object.
//! Invariants: Integral numbers stay exact through the full `i64` range.
use std::fmt;

/// Reserved stand-in for "absent element" in flattened tree arrays. Inherited
/// from the original harness convention; collides with a legitimate value
/// equal to `i64::MIN`, which no real test input uses.
pub const ABSENT_INT: i64 = i64::MIN;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Num {
    Int(i64),
    Float(f64),
}

impl Num {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Num::Int(n) => Some(*n),
            Num::Float(_) => None,
        }
    }

    pub fn as_f64(&self) -> f64 {
        match self {
            Num::Int(n) => *n as f64,
            Num::Float(n) => *n,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Num(Num),
    Text(String),
    Bool(bool),
    Seq(Vec<Value>),
    Fields(Vec<(String, Value)>),
}

impl Value {
    pub fn int(n: i64) -> Self {
        Value::Num(Num::Int(n))
    }

    pub fn float(n: f64) -> Self {
        Value::Num(Num::Float(n))
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Num(_) => "number",
            Value::Text(_) => "string",
            Value::Bool(_) => "bool",
            Value::Seq(_) => "sequence",
            Value::Fields(_) => "object",
        }
    }

    /// Looks up a field by name in a `Fields` value. Returns `None` for
    /// non-object values as well as for absent keys.
    pub fn field(&self, name: &str) -> Option<&Value> {
        match self {
            Value::Fields(fields) => fields
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value),
            _ => None,
        }
    }
}

// Compact single-line JSON emission. Result strings are written without
// internal escaping (inherited envelope limitation); the stderr diagnostic
// path goes through serde_json instead and escapes fully.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Num(Num::Int(n)) => write!(f, "{n}"),
            Value::Num(Num::Float(n)) => write!(f, "{n}"),
            Value::Text(s) => write!(f, "\"{s}\""),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Seq(items) => {
                write!(f, "[")?;
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Fields(fields) => {
                write!(f, "{{")?;
                for (idx, (key, value)) in fields.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "\"{key}\": {value}")?;
                }
                write!(f, "}}")
            }
        }
    }
}
