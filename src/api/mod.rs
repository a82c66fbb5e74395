//! Purpose: Define the stable public Rust API boundary for Marshalite.
//! Exports: Engine types and operations needed by the CLI and embedders.
//! Role: Public, additive-only surface; hides internal module layout.
//! Invariants: This module is the only public path embedders should use.

pub use crate::core::bind::bind;
pub use crate::core::decode::{decode, decode_case_input};
pub use crate::core::encode::{encode, encode_param, encode_return};
pub use crate::core::envelope::Envelope;
#[doc(hidden)]
pub use crate::core::error::to_exit_code;
pub use crate::core::error::{Error, ErrorKind};
pub use crate::core::invoke::{invoke, Invocation, Routine};
pub use crate::core::list::{LinkedList, ListNode};
pub use crate::core::native::NativeValue;
pub use crate::core::run::run_case;
pub use crate::core::schema::{Param, Problem, Registry, ReturnType, TypeTag};
pub use crate::core::tree::{NodeId, Tree, TreeNode};
pub use crate::core::value::{Num, Value, ABSENT_INT};
