// suite-gate-core/src/runtime/gate.rs
// ============================================================================
// Module: Suite Gate Chain Evaluation
// Description: Ordered composition of run-strategy gates.
// Purpose: Combine gate decisions deterministically, most restrictive wins.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! A [`GateChain`] holds an explicitly registered, ordered list of gates.
//! Evaluation folds decisions in configuration order with
//! [`RunStrategy::combine`]; `Run` is the neutral element and evaluation
//! stops early once a full bypass is reached, since no later gate can make
//! the outcome more restrictive.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::InvocationContext;
use crate::core::RunStrategy;
use crate::interfaces::GateError;
use crate::interfaces::RunGate;

// ============================================================================
// SECTION: Gate Chain
// ============================================================================

/// Boxed gate stored in a chain.
pub type BoxedGate = Box<dyn RunGate + Send + Sync>;

/// Ordered chain of run-strategy gates for one module.
#[derive(Default)]
pub struct GateChain {
    /// Gates in configuration order.
    gates: Vec<BoxedGate>,
}

impl GateChain {
    /// Creates an empty chain. An empty chain decides `Run`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            gates: Vec::new(),
        }
    }

    /// Creates a chain from an ordered gate list.
    #[must_use]
    pub fn with_gates(gates: Vec<BoxedGate>) -> Self {
        Self {
            gates,
        }
    }

    /// Appends a gate at the end of the chain.
    pub fn push(&mut self, gate: impl RunGate + Send + Sync + 'static) {
        self.gates.push(Box::new(gate));
    }

    /// Returns the number of registered gates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// Returns true when no gate is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Evaluates the chain against the context.
    ///
    /// # Errors
    ///
    /// Returns [`GateError`] when a gate finds required module metadata
    /// missing; remaining gates are not evaluated.
    pub fn evaluate(&self, ctx: &InvocationContext) -> Result<RunStrategy, GateError> {
        let mut decision = RunStrategy::Run;
        for gate in &self.gates {
            decision = decision.combine(gate.decide(ctx)?);
            if decision == RunStrategy::FullModuleBypass {
                break;
            }
        }
        Ok(decision)
    }
}

impl RunGate for GateChain {
    fn decide(&self, ctx: &InvocationContext) -> Result<RunStrategy, GateError> {
        self.evaluate(ctx)
    }
}
