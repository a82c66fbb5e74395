//! Purpose: Type-directed conversion of decoded `Value` trees into native arguments.
//! Exports: `bind`.
//! Role: The schema-driven replacement for the per-problem extraction helpers.
//! Invariants: Arguments come back in schema order, one per declared parameter.
//! Invariants: Pure; no I/O and no global state.
//! Invariants: `Null` elements in integer sequences become `ABSENT_INT`.
use crate::core::error::{Error, ErrorKind};
use crate::core::list::LinkedList;
use crate::core::native::NativeValue;
use crate::core::schema::{Problem, TypeTag};
use crate::core::tree::Tree;
use crate::core::value::{Num, Value, ABSENT_INT};

/// Binds each `(name, type)` of the schema against the decoded input object.
pub fn bind(root: &Value, problem: &Problem) -> Result<Vec<NativeValue>, Error> {
    if !matches!(root, Value::Fields(_)) {
        return Err(Error::new(ErrorKind::TypeMismatch)
            .with_message("test-case input is not an object")
            .with_expected("object"));
    }
    let mut args = Vec::with_capacity(problem.params().len());
    for param in problem.params() {
        let field = root.field(&param.name);
        args.push(bind_param(field, &param.name, param.tag)?);
    }
    Ok(args)
}

fn bind_param(field: Option<&Value>, name: &str, tag: TypeTag) -> Result<NativeValue, Error> {
    // List and tree parameters are nullable: an absent or null field is an
    // empty structure, matching the original harness behavior.
    let value = match field {
        Some(value) => value,
        None => {
            return match tag {
                TypeTag::LinkedList => Ok(NativeValue::List(LinkedList::empty())),
                TypeTag::BinaryTree => Ok(NativeValue::Tree(Tree::empty())),
                _ => Err(Error::new(ErrorKind::MissingField)
                    .with_message("required parameter absent from input")
                    .with_field(name)),
            };
        }
    };

    match tag {
        TypeTag::Int => match value {
            Value::Num(Num::Int(n)) => Ok(NativeValue::Int(*n)),
            other => Err(mismatch(name, "integer", other)),
        },
        TypeTag::Float => match value {
            Value::Num(num) => Ok(NativeValue::Float(num.as_f64())),
            other => Err(mismatch(name, "number", other)),
        },
        TypeTag::Bool => match value {
            Value::Bool(b) => Ok(NativeValue::Bool(*b)),
            other => Err(mismatch(name, "bool", other)),
        },
        TypeTag::Str => match value {
            Value::Text(s) => Ok(NativeValue::Str(s.clone())),
            other => Err(mismatch(name, "string", other)),
        },
        TypeTag::IntSeq => int_seq(value, name).map(NativeValue::IntSeq),
        TypeTag::StrSeq => match value {
            Value::Seq(items) => {
                let mut out = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        Value::Text(s) => out.push(s.clone()),
                        other => return Err(mismatch(name, "string element", other)),
                    }
                }
                Ok(NativeValue::StrSeq(out))
            }
            other => Err(mismatch(name, "string sequence", other)),
        },
        TypeTag::Matrix => match value {
            Value::Seq(rows) => {
                let mut out = Vec::with_capacity(rows.len());
                for row in rows {
                    match row {
                        Value::Seq(_) => out.push(int_seq(row, name)?),
                        other => return Err(mismatch(name, "row sequence", other)),
                    }
                }
                Ok(NativeValue::Matrix(out))
            }
            other => Err(mismatch(name, "matrix", other)),
        },
        TypeTag::LinkedList => match value {
            Value::Null => Ok(NativeValue::List(LinkedList::empty())),
            _ => {
                let values = int_seq(value, name)?;
                Ok(NativeValue::List(LinkedList::from_values(&values)))
            }
        },
        TypeTag::BinaryTree => match value {
            Value::Null => Ok(NativeValue::Tree(Tree::empty())),
            _ => {
                let slots = int_seq(value, name)?;
                Ok(NativeValue::Tree(Tree::from_level_order(&slots)))
            }
        },
    }
}

fn int_seq(value: &Value, name: &str) -> Result<Vec<i64>, Error> {
    match value {
        Value::Seq(items) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::Num(Num::Int(n)) => out.push(*n),
                    Value::Null => out.push(ABSENT_INT),
                    other => return Err(mismatch(name, "integer element", other)),
                }
            }
            Ok(out)
        }
        other => Err(mismatch(name, "integer sequence", other)),
    }
}

fn mismatch(name: &str, expected: &str, found: &Value) -> Error {
    Error::new(ErrorKind::TypeMismatch)
        .with_message(format!("found {}", found.kind_name()))
        .with_field(name)
        .with_expected(expected)
}
