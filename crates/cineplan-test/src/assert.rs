//! Plan assertions.

use cineplan_core::{Plan, ProblemModel};

/// Panics with the first violation if `plan` is not valid for `model`.
#[track_caller]
pub fn assert_valid_plan(model: &ProblemModel, plan: &Plan) {
    if let Err(err) = plan.validate(model) {
        panic!("invalid plan {:?}: {err}", plan.days());
    }
}
