// Native argument/result currency: one variant per schema type tag, owned data
// throughout so routines can mutate arguments in place.
use crate::core::list::LinkedList;
use crate::core::tree::Tree;

#[derive(Clone, Debug, PartialEq)]
pub enum NativeValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
    IntSeq(Vec<i64>),
    StrSeq(Vec<String>),
    Matrix(Vec<Vec<i64>>),
    List(LinkedList),
    Tree(Tree),
    /// The result of a `Void` routine.
    Unit,
}

impl NativeValue {
    pub fn kind_name(&self) -> &'static str {
        match self {
            NativeValue::Int(_) => "int",
            NativeValue::Float(_) => "float",
            NativeValue::Bool(_) => "bool",
            NativeValue::Str(_) => "string",
            NativeValue::IntSeq(_) => "int sequence",
            NativeValue::StrSeq(_) => "string sequence",
            NativeValue::Matrix(_) => "matrix",
            NativeValue::List(_) => "linked list",
            NativeValue::Tree(_) => "binary tree",
            NativeValue::Unit => "unit",
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            NativeValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            NativeValue::Float(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            NativeValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            NativeValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int_seq(&self) -> Option<&[i64]> {
        match self {
            NativeValue::IntSeq(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_str_seq(&self) -> Option<&[String]> {
        match self {
            NativeValue::StrSeq(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_matrix(&self) -> Option<&Vec<Vec<i64>>> {
        match self {
            NativeValue::Matrix(rows) => Some(rows),
            _ => None,
        }
    }

    pub fn as_matrix_mut(&mut self) -> Option<&mut Vec<Vec<i64>>> {
        match self {
            NativeValue::Matrix(rows) => Some(rows),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&LinkedList> {
        match self {
            NativeValue::List(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_tree(&self) -> Option<&Tree> {
        match self {
            NativeValue::Tree(tree) => Some(tree),
            _ => None,
        }
    }

    pub fn as_tree_mut(&mut self) -> Option<&mut Tree> {
        match self {
            NativeValue::Tree(tree) => Some(tree),
            _ => None,
        }
    }
}
