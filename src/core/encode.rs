//! Purpose: Convert native results back into `Value` trees, mirroring the binder.
//! Exports: `encode`, `encode_return`, `encode_param`.
//! Role: The reverse leg of the marshaling pipeline, including list/tree flattening.
//! Invariants: `ABSENT_INT` maps back to `null` wherever integers are emitted,
//! so bind followed by encode is symmetric.
//! Invariants: A value that does not match its declared tag is an `Encoding`
//! fault (internal inconsistency, not a user input problem).
use crate::core::error::{Error, ErrorKind};
use crate::core::native::NativeValue;
use crate::core::schema::{Problem, ReturnType, TypeTag};
use crate::core::value::{Value, ABSENT_INT};

pub fn encode(value: &NativeValue, tag: TypeTag) -> Result<Value, Error> {
    match (tag, value) {
        (TypeTag::Int, NativeValue::Int(n)) => Ok(Value::int(*n)),
        (TypeTag::Float, NativeValue::Float(n)) => Ok(Value::float(*n)),
        (TypeTag::Bool, NativeValue::Bool(b)) => Ok(Value::Bool(*b)),
        (TypeTag::Str, NativeValue::Str(s)) => Ok(Value::Text(s.clone())),
        (TypeTag::IntSeq, NativeValue::IntSeq(items)) => Ok(int_seq_value(items)),
        (TypeTag::StrSeq, NativeValue::StrSeq(items)) => Ok(Value::Seq(
            items.iter().map(|s| Value::Text(s.clone())).collect(),
        )),
        (TypeTag::Matrix, NativeValue::Matrix(rows)) => Ok(Value::Seq(
            rows.iter().map(|row| int_seq_value(row)).collect(),
        )),
        (TypeTag::LinkedList, NativeValue::List(list)) => Ok(int_seq_value(&list.values())),
        (TypeTag::BinaryTree, NativeValue::Tree(tree)) => {
            Ok(int_seq_value(&tree.to_level_order()))
        }
        (tag, value) => Err(Error::new(ErrorKind::Encoding)
            .with_message(format!(
                "return value is {}, declared {tag:?}",
                value.kind_name()
            ))
            .with_expected(format!("{tag:?}"))),
    }
}

/// Encodes the declared return. `Void` encodes to `Null`; in-place problems
/// follow up with `encode_param` for the designated mutated argument.
pub fn encode_return(value: &NativeValue, returns: ReturnType) -> Result<Value, Error> {
    match returns {
        ReturnType::Value(tag) => encode(value, tag),
        ReturnType::Void => Ok(Value::Null),
    }
}

/// Secondary encode for in-place mutation problems: re-encodes one named input
/// argument after the routine ran.
pub fn encode_param(args: &[NativeValue], problem: &Problem, name: &str) -> Result<Value, Error> {
    let index = problem.param_index(name).ok_or_else(|| {
        Error::new(ErrorKind::Encoding)
            .with_message("designated mutated parameter is not in the schema")
            .with_field(name)
    })?;
    encode(&args[index], problem.params()[index].tag)
}

fn int_seq_value(items: &[i64]) -> Value {
    Value::Seq(
        items
            .iter()
            .map(|&n| {
                if n == ABSENT_INT {
                    Value::Null
                } else {
                    Value::int(n)
                }
            })
            .collect(),
    )
}
