// suite-gate-core/src/core/report.rs
// ============================================================================
// Module: Suite Gate Invocation Report
// Description: Per-module outcomes for one driven invocation.
// Purpose: Report skips and failures distinctly for suite results.
// Dependencies: crate::core, serde
// ============================================================================

//! ## Overview
//! The invocation report captures what happened to every scheduled module: it
//! ran and produced a result, it was skipped by a gate decision, or its
//! gating could not be evaluated. A bypass is reported as a skip, never as a
//! failure.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::module::ModuleDescriptor;
use crate::core::strategy::RunStrategy;

// ============================================================================
// SECTION: Module Results
// ============================================================================

/// Result of executing one module's tests through the dispatcher seam.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleResult {
    /// Number of test cases that passed.
    pub passed: u64,
    /// Number of test cases that failed.
    pub failed: u64,
    /// Number of test cases skipped inside the module.
    pub skipped: u64,
}

impl ModuleResult {
    /// Returns true when no test case failed.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.failed == 0
    }
}

/// Terminal outcome recorded for one scheduled module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ModuleOutcome {
    /// The module ran; the dispatcher produced a result.
    Executed {
        /// Dispatcher-reported test counts.
        result: ModuleResult,
    },
    /// A gate decision bypassed the module. Reported as a skip.
    Skipped {
        /// The bypass strategy that suppressed execution.
        strategy: RunStrategy,
    },
    /// Gating or dispatch failed for this module.
    Errored {
        /// Failure rendered as a message.
        reason: String,
    },
}

/// Record binding a module identity to its outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleRecord {
    /// Module the outcome belongs to.
    pub module: ModuleDescriptor,
    /// What happened to the module.
    pub outcome: ModuleOutcome,
}

// ============================================================================
// SECTION: Invocation Report
// ============================================================================

/// Ordered per-module outcomes for one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationReport {
    /// Module records in scheduling order.
    pub modules: Vec<ModuleRecord>,
}

impl InvocationReport {
    /// Creates an empty report.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            modules: Vec::new(),
        }
    }

    /// Appends a module record.
    pub fn push(&mut self, record: ModuleRecord) {
        self.modules.push(record);
    }

    /// Returns the number of modules that executed.
    #[must_use]
    pub fn executed_count(&self) -> usize {
        self.modules
            .iter()
            .filter(|record| matches!(record.outcome, ModuleOutcome::Executed { .. }))
            .count()
    }

    /// Returns the number of modules skipped by gate decisions.
    #[must_use]
    pub fn skipped_count(&self) -> usize {
        self.modules
            .iter()
            .filter(|record| matches!(record.outcome, ModuleOutcome::Skipped { .. }))
            .count()
    }
}
