//! Purpose: Declarative per-problem schemas: parameter names/types and return type.
//! Exports: `TypeTag`, `ReturnType`, `Param`, `Problem`, `Registry`.
//! Role: The only place a new problem touches; decoding/binding/encoding stay generic.
//! Invariants: The type vocabulary is closed; extending it means new binder and
//! encoder cases, never per-problem parsing code.
//! Invariants: Parameter order in a schema is the routine's argument order.
use serde::Serialize;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum TypeTag {
    Int,
    Float,
    Bool,
    Str,
    IntSeq,
    StrSeq,
    Matrix,
    LinkedList,
    BinaryTree,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ReturnType {
    Value(TypeTag),
    /// In-place mutation problems return nothing; the envelope carries the
    /// designated mutated argument instead.
    Void,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Param {
    pub name: String,
    #[serde(rename = "type")]
    pub tag: TypeTag,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Problem {
    name: String,
    params: Vec<Param>,
    returns: ReturnType,
    mutated_param: Option<String>,
}

impl Problem {
    pub fn new(name: impl Into<String>, returns: ReturnType) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            returns,
            mutated_param: None,
        }
    }

    pub fn with_param(mut self, name: impl Into<String>, tag: TypeTag) -> Self {
        self.params.push(Param {
            name: name.into(),
            tag,
        });
        self
    }

    /// Names the input argument to encode after a `Void` invocation.
    pub fn with_mutated_param(mut self, name: impl Into<String>) -> Self {
        self.mutated_param = Some(name.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn params(&self) -> &[Param] {
        &self.params
    }

    pub fn returns(&self) -> ReturnType {
        self.returns
    }

    pub fn mutated_param(&self) -> Option<&str> {
        self.mutated_param.as_deref()
    }

    /// Position of a parameter in binding order.
    pub fn param_index(&self, name: &str) -> Option<usize> {
        self.params.iter().position(|param| param.name == name)
    }
}

pub struct Registry {
    problems: Vec<Problem>,
}

impl Registry {
    /// The problems recovered from the original harness corpus. Each entry is
    /// one schema line; no problem carries parsing code of its own.
    pub fn builtin() -> Self {
        use ReturnType::{Value, Void};
        use TypeTag::*;
        let problems = vec![
            Problem::new("two-sum", Value(IntSeq))
                .with_param("nums", IntSeq)
                .with_param("target", Int),
            Problem::new("coin-change", Value(Int))
                .with_param("coins", IntSeq)
                .with_param("amount", Int),
            Problem::new("sliding-window-maximum", Value(IntSeq))
                .with_param("nums", IntSeq)
                .with_param("k", Int),
            Problem::new("house-robber", Value(Int)).with_param("nums", IntSeq),
            Problem::new("edit-distance", Value(Int))
                .with_param("word1", Str)
                .with_param("word2", Str),
            Problem::new("word-break", Value(Bool))
                .with_param("s", Str)
                .with_param("wordDict", StrSeq),
            Problem::new("find-all-anagrams-in-a-string", Value(IntSeq))
                .with_param("s", Str)
                .with_param("p", Str),
            Problem::new("fizzbuzz", Value(StrSeq)).with_param("n", Int),
            Problem::new("spiral-matrix", Value(IntSeq)).with_param("matrix", Matrix),
            Problem::new("rotate-image", Void)
                .with_param("matrix", Matrix)
                .with_mutated_param("matrix"),
            Problem::new("merge-two-sorted-lists", Value(LinkedList))
                .with_param("list1", LinkedList)
                .with_param("list2", LinkedList),
            Problem::new("add-two-numbers", Value(LinkedList))
                .with_param("l1", LinkedList)
                .with_param("l2", LinkedList),
            Problem::new("invert-binary-tree", Value(BinaryTree)).with_param("root", BinaryTree),
            Problem::new("maximum-depth-of-binary-tree", Value(Int)).with_param("root", BinaryTree),
        ];
        Self { problems }
    }

    pub fn find(&self, name: &str) -> Option<&Problem> {
        self.problems.iter().find(|problem| problem.name() == name)
    }

    pub fn problems(&self) -> &[Problem] {
        &self.problems
    }
}
