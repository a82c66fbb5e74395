//! Purpose: Build the fixed two-field output envelope consumed by the outer judge.
//! Exports: `Envelope`.
//! Role: Last stage of the pipeline; everything upstream folds into this shape.
//! Invariants: Exactly `result` then `execution_time`, one line, no pretty print.
//! Invariants: Failure text rides in `result` as a string; the envelope itself
//! is always well-formed, never a raw crash.
use crate::core::value::Value;

#[derive(Clone, Debug, PartialEq)]
pub struct Envelope {
    result: Value,
    execution_time_ms: u64,
}

impl Envelope {
    pub fn success(result: Value, execution_time_ms: u64) -> Self {
        Self {
            result,
            execution_time_ms,
        }
    }

    /// Failure envelope: the message becomes the `result` string. Elapsed is
    /// zero for faults raised before invocation.
    pub fn failure(message: impl Into<String>, execution_time_ms: u64) -> Self {
        Self {
            result: Value::Text(message.into()),
            execution_time_ms,
        }
    }

    pub fn result(&self) -> &Value {
        &self.result
    }

    pub fn execution_time_ms(&self) -> u64 {
        self.execution_time_ms
    }

    pub fn render(&self) -> String {
        format!(
            "{{\"result\": {}, \"execution_time\": {}}}",
            self.result, self.execution_time_ms
        )
    }
}
