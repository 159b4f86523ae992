//! Integration tests for termination conditions.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use cineplan_core::Plan;

use super::*;
use crate::clock::ManualClock;
use crate::sink::NoOpSink;

#[test]
fn test_never_terminate() {
    let mut sink = NoOpSink;
    let scope = SolverScope::new(&mut sink);
    assert!(!NeverTerminate.is_terminated(&scope));
}

#[test]
fn test_step_count_termination() {
    let mut sink = NoOpSink;
    let mut scope = SolverScope::new(&mut sink);
    let term = StepCountTermination::new(3);

    assert!(!term.is_terminated(&scope));
    scope.increment_step_count();
    scope.increment_step_count();
    assert!(!term.is_terminated(&scope));
    scope.increment_step_count();
    assert!(term.is_terminated(&scope));
}

#[test]
fn test_cycle_count_termination() {
    let mut sink = NoOpSink;
    let mut scope = SolverScope::new(&mut sink);
    let term = CycleCountTermination::new(1);

    assert!(!term.is_terminated(&scope));
    scope.increment_cycle_count();
    assert!(term.is_terminated(&scope));
}

#[test]
fn test_best_days_termination() {
    let mut sink = NoOpSink;
    let mut scope = SolverScope::new(&mut sink);
    let term = BestDaysTermination::new(2);

    assert!(!term.is_terminated(&scope));
    scope.update_best(Plan::from_days([vec![0], vec![1], vec![2]]));
    assert!(!term.is_terminated(&scope));
    scope.update_best(Plan::from_days([vec![0, 1], vec![2]]));
    assert!(term.is_terminated(&scope));
}

#[test]
fn test_external_termination() {
    let flag = Arc::new(AtomicBool::new(false));
    let term = ExternalTermination::new(flag.clone());
    let mut sink = NoOpSink;
    let scope = SolverScope::new(&mut sink);

    assert!(!term.is_terminated(&scope));
    flag.store(true, Ordering::SeqCst);
    assert!(term.is_terminated(&scope));
}

#[test]
fn test_time_termination() {
    let clock = Arc::new(ManualClock::new());
    let mut sink = NoOpSink;
    let scope = SolverScope::new(&mut sink).with_clock(clock.clone());
    let term = TimeTermination::millis(250);

    assert!(!term.is_terminated(&scope));
    clock.set(Duration::from_millis(249));
    assert!(!term.is_terminated(&scope));
    clock.set(Duration::from_millis(250));
    assert!(term.is_terminated(&scope));
}

#[test]
fn test_or_termination() {
    let mut sink = NoOpSink;
    let mut scope = SolverScope::new(&mut sink);
    let mut term = OrTermination::default();
    term.push(Box::new(StepCountTermination::new(10)));
    term.push(Box::new(CycleCountTermination::new(2)));

    assert!(!term.is_terminated(&scope));
    scope.increment_cycle_count();
    scope.increment_cycle_count();
    assert!(term.is_terminated(&scope));

    assert!(!OrTermination::default().is_terminated(&scope));
}
