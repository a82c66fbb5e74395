//! Purpose: Orchestrate one test case: decode, bind, invoke, encode, envelope.
//! Exports: `run_case`.
//! Role: Top-level engine entry; every error class folds into the envelope here.
//! Invariants: Pre-invocation faults report `execution_time` 0; routine and
//! encoding faults report time measured up to the failure point.
//! Invariants: Any syntactically JSON-shaped input yields a well-formed
//! envelope; the caller never sees a crash from this path.
use crate::core::bind::bind;
use crate::core::decode::decode_case_input;
use crate::core::encode::{encode_param, encode_return};
use crate::core::envelope::Envelope;
use crate::core::error::Error;
use crate::core::invoke::{invoke, Invocation, Routine};
use crate::core::schema::{Problem, ReturnType};

pub fn run_case(problem: &Problem, routine: &dyn Routine, raw: &str) -> Envelope {
    match pipeline(problem, routine, raw) {
        Ok(envelope) => envelope,
        Err(fault) => Envelope::failure(fault.error.envelope_text(), fault.elapsed_ms),
    }
}

struct Fault {
    error: Error,
    elapsed_ms: u64,
}

impl Fault {
    fn before_invocation(error: Error) -> Self {
        Self {
            error,
            elapsed_ms: 0,
        }
    }
}

fn pipeline(problem: &Problem, routine: &dyn Routine, raw: &str) -> Result<Envelope, Fault> {
    let root = decode_case_input(raw).map_err(Fault::before_invocation)?;
    let mut args = bind(&root, problem).map_err(Fault::before_invocation)?;

    let Invocation {
        outcome,
        elapsed_ms,
    } = invoke(routine, &mut args);
    let result = outcome.map_err(|error| Fault { error, elapsed_ms })?;

    let encoded = match (problem.returns(), problem.mutated_param()) {
        (ReturnType::Void, Some(name)) => encode_param(&args, problem, name),
        (returns, _) => encode_return(&result, returns),
    }
    .map_err(|error| Fault { error, elapsed_ms })?;

    Ok(Envelope::success(encoded, elapsed_ms))
}

#[cfg(test)]
mod tests {
    use super::run_case;
    use crate::core::error::{Error, ErrorKind};
    use crate::core::native::NativeValue;
    use crate::core::schema::{Problem, ReturnType, TypeTag};
    use crate::core::value::Value;

    fn sum_schema() -> Problem {
        Problem::new("sum", ReturnType::Value(TypeTag::Int))
            .with_param("nums", TypeTag::IntSeq)
    }

    fn sum_routine(args: &mut [NativeValue]) -> Result<NativeValue, Error> {
        let nums = args[0].as_int_seq().unwrap_or(&[]);
        Ok(NativeValue::Int(nums.iter().sum()))
    }

    #[test]
    fn successful_case_produces_result_and_timing() {
        let envelope = run_case(&sum_schema(), &sum_routine, r#"{"nums":[1,2,3]}"#);
        assert_eq!(envelope.result(), &Value::int(6));
    }

    #[test]
    fn syntax_fault_reports_zero_elapsed() {
        let envelope = run_case(&sum_schema(), &sum_routine, r#"{"nums":[1,"#);
        assert_eq!(envelope.execution_time_ms(), 0);
        match envelope.result() {
            Value::Text(text) => assert!(text.starts_with("Syntax")),
            other => panic!("expected error text, got {other:?}"),
        }
    }

    #[test]
    fn bind_fault_reports_zero_elapsed() {
        let envelope = run_case(&sum_schema(), &sum_routine, r#"{"k":1}"#);
        assert_eq!(envelope.execution_time_ms(), 0);
        match envelope.result() {
            Value::Text(text) => assert!(text.contains("nums")),
            other => panic!("expected error text, got {other:?}"),
        }
    }

    #[test]
    fn routine_fault_carries_its_message() {
        let failing = |_args: &mut [NativeValue]| -> Result<NativeValue, Error> {
            Err(Error::new(ErrorKind::Routine).with_message("overflow at step 3"))
        };
        let envelope = run_case(&sum_schema(), &failing, r#"{"nums":[1]}"#);
        assert_eq!(
            envelope.result(),
            &Value::Text("overflow at step 3".to_string())
        );
    }

    #[test]
    fn void_problem_encodes_the_mutated_argument() {
        let problem = Problem::new("reverse-rows", ReturnType::Void)
            .with_param("matrix", TypeTag::Matrix)
            .with_mutated_param("matrix");
        let routine = |args: &mut [NativeValue]| -> Result<NativeValue, Error> {
            if let Some(rows) = args[0].as_matrix_mut() {
                for row in rows.iter_mut() {
                    row.reverse();
                }
            }
            Ok(NativeValue::Unit)
        };
        let envelope = run_case(&problem, &routine, r#"{"matrix":[[1,2],[3,4]]}"#);
        assert_eq!(envelope.result().to_string(), "[[2,1],[4,3]]");
    }

    #[test]
    fn wrapped_input_runs_identically_to_bare() {
        let bare = run_case(&sum_schema(), &sum_routine, r#"{"nums":[1,2,3]}"#);
        let wrapped = run_case(
            &sum_schema(),
            &sum_routine,
            r#"{"input": "{\"nums\":[1,2,3]}"}"#,
        );
        assert_eq!(bare.result(), wrapped.result());
    }
}
