//! Typed bindings for the two example contracts the integration tests target.
//! Each change method exposes the full triple: the decoded-result form, the
//! raw-outcome form, and the unsigned-action form.

pub mod callback_results;
pub mod fixed_value;

pub use callback_results::{CallAllArgs, CallbackResultsContract, CALL_ALL};
pub use fixed_value::{FixedValueContract, GetEightArgs, GET_EIGHT};
