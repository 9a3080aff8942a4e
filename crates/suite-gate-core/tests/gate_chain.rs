//! Gate chain composition tests for suite-gate-core.
// crates/suite-gate-core/tests/gate_chain.rs
// =============================================================================
// Module: Gate Chain Tests
// Description: Validate ordered composition and short-circuit semantics.
// Purpose: Ensure the most restrictive decision wins and Run is neutral.
// =============================================================================

use std::sync::Arc;
use std::sync::Mutex;

use suite_gate_core::GateChain;
use suite_gate_core::GateError;
use suite_gate_core::InvocationContext;
use suite_gate_core::RunGate;
use suite_gate_core::RunStrategy;

type TestResult = Result<(), String>;

/// Gate returning a fixed decision and counting evaluations.
struct FixedGate {
    decision: RunStrategy,
    calls: Arc<Mutex<u64>>,
}

impl FixedGate {
    fn new(decision: RunStrategy) -> (Self, Arc<Mutex<u64>>) {
        let calls = Arc::new(Mutex::new(0));
        (
            Self {
                decision,
                calls: Arc::clone(&calls),
            },
            calls,
        )
    }
}

impl RunGate for FixedGate {
    fn decide(&self, _ctx: &InvocationContext) -> Result<RunStrategy, GateError> {
        if let Ok(mut guard) = self.calls.lock() {
            *guard = guard.saturating_add(1);
        }
        Ok(self.decision)
    }
}

fn count(calls: &Arc<Mutex<u64>>) -> u64 {
    calls.lock().map_or(0, |guard| *guard)
}

#[test]
fn empty_chain_decides_run() -> TestResult {
    let chain = GateChain::new();
    let ctx = InvocationContext::new();
    match chain.evaluate(&ctx) {
        Ok(RunStrategy::Run) => Ok(()),
        other => Err(format!("expected run from empty chain, got {other:?}")),
    }
}

#[test]
fn any_bypass_suppresses_run() -> TestResult {
    let mut chain = GateChain::new();
    let (run_gate, _) = FixedGate::new(RunStrategy::Run);
    let (bypass_gate, _) = FixedGate::new(RunStrategy::FullModuleBypass);
    chain.push(run_gate);
    chain.push(bypass_gate);

    let ctx = InvocationContext::new();
    match chain.evaluate(&ctx) {
        Ok(RunStrategy::FullModuleBypass) => Ok(()),
        other => Err(format!("expected bypass to win, got {other:?}")),
    }
}

#[test]
fn full_bypass_short_circuits_later_gates() -> TestResult {
    let mut chain = GateChain::new();
    let (first, _) = FixedGate::new(RunStrategy::FullModuleBypass);
    let (second, second_calls) = FixedGate::new(RunStrategy::Run);
    chain.push(first);
    chain.push(second);

    let ctx = InvocationContext::new();
    chain.evaluate(&ctx).map_err(|err| err.to_string())?;
    if count(&second_calls) != 0 {
        return Err("later gate was evaluated after a full bypass".to_string());
    }
    Ok(())
}

#[test]
fn partial_bypass_does_not_short_circuit() -> TestResult {
    let mut chain = GateChain::new();
    let (first, _) = FixedGate::new(RunStrategy::PartialModuleBypass);
    let (second, second_calls) = FixedGate::new(RunStrategy::FullModuleBypass);
    chain.push(first);
    chain.push(second);

    let ctx = InvocationContext::new();
    match chain.evaluate(&ctx) {
        Ok(RunStrategy::FullModuleBypass) => {}
        other => return Err(format!("expected escalation to full bypass, got {other:?}")),
    }
    if count(&second_calls) != 1 {
        return Err("second gate should have been evaluated once".to_string());
    }
    Ok(())
}

#[test]
fn partial_bypass_survives_later_run() -> TestResult {
    let mut chain = GateChain::new();
    let (first, _) = FixedGate::new(RunStrategy::PartialModuleBypass);
    let (second, _) = FixedGate::new(RunStrategy::Run);
    chain.push(first);
    chain.push(second);

    let ctx = InvocationContext::new();
    match chain.evaluate(&ctx) {
        Ok(RunStrategy::PartialModuleBypass) => Ok(()),
        other => Err(format!("expected partial bypass to stick, got {other:?}")),
    }
}

#[test]
fn chains_nest_as_gates() -> TestResult {
    let mut inner = GateChain::new();
    let (gate, _) = FixedGate::new(RunStrategy::FullModuleBypass);
    inner.push(gate);

    let mut outer = GateChain::new();
    outer.push(inner);

    let ctx = InvocationContext::new();
    match outer.evaluate(&ctx) {
        Ok(RunStrategy::FullModuleBypass) => Ok(()),
        other => Err(format!("expected nested chain decision, got {other:?}")),
    }
}
