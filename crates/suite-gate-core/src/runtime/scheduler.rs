// suite-gate-core/src/runtime/scheduler.rs
// ============================================================================
// Module: Suite Gate Invocation Driver
// Description: Sequential setup, per-module gating, and dispatch.
// Purpose: Drive one invocation deterministically in configuration order.
// Dependencies: crate::{core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! The invocation driver is the single execution path for one suite
//! invocation: it applies preparers in configured order (fail-fast), then
//! asks each scheduled module's gate chain for a decision before handing the
//! module to the dispatcher. Everything runs single-threaded; device I/O
//! blocking is bounded by the transport behind the device handles.
//!
//! A module whose gating cannot be evaluated is never silently run: it is
//! recorded as errored and treated like a full bypass.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::InvocationContext;
use crate::core::InvocationEvent;
use crate::core::InvocationReport;
use crate::core::ModuleDescriptor;
use crate::core::ModuleOutcome;
use crate::core::ModuleRecord;
use crate::interfaces::ModuleDispatcher;
use crate::interfaces::SetupError;
use crate::interfaces::TargetPreparer;
use crate::runtime::gate::GateChain;
use crate::runtime::sink::SharedSink;
use crate::runtime::sink::null_sink;

// ============================================================================
// SECTION: Scheduled Module
// ============================================================================

/// A module queued for one invocation, with its configured gate chain.
pub struct ScheduledModule {
    /// Module identity.
    pub descriptor: ModuleDescriptor,
    /// Gates applied to the module, in configuration order.
    pub gates: GateChain,
}

impl ScheduledModule {
    /// Creates a scheduled module with its gate chain.
    #[must_use]
    pub const fn new(descriptor: ModuleDescriptor, gates: GateChain) -> Self {
        Self {
            descriptor,
            gates,
        }
    }

    /// Creates a scheduled module with no gates; it always runs.
    #[must_use]
    pub const fn ungated(descriptor: ModuleDescriptor) -> Self {
        Self {
            descriptor,
            gates: GateChain::new(),
        }
    }
}

// ============================================================================
// SECTION: Boxed Preparer
// ============================================================================

/// Boxed preparer stored by the driver.
pub type BoxedPreparer = Box<dyn TargetPreparer + Send + Sync>;

// ============================================================================
// SECTION: Invocation Driver
// ============================================================================

/// Sequential driver for one suite invocation.
pub struct InvocationDriver {
    /// Setup preparers in configuration order.
    preparers: Vec<BoxedPreparer>,
    /// Sink receiving decision and setup records.
    sink: SharedSink,
}

impl InvocationDriver {
    /// Creates a driver with no preparers and a discarding sink.
    #[must_use]
    pub fn new() -> Self {
        Self {
            preparers: Vec::new(),
            sink: null_sink(),
        }
    }

    /// Replaces the event sink.
    #[must_use]
    pub fn with_sink(mut self, sink: SharedSink) -> Self {
        self.sink = sink;
        self
    }

    /// Appends a setup preparer at the end of the setup order.
    pub fn add_preparer(&mut self, preparer: impl TargetPreparer + Send + Sync + 'static) {
        self.preparers.push(Box::new(preparer));
    }

    /// Runs all preparers over the context, in order, fail-fast.
    ///
    /// # Errors
    ///
    /// Returns the first [`SetupError`]; later preparers do not run and the
    /// invocation must abort. The context may be left with earlier merges
    /// applied; no rollback is performed.
    pub fn run_setup(&self, ctx: &mut InvocationContext) -> Result<(), SetupError> {
        for preparer in &self.preparers {
            if let Err(error) = preparer.set_up(ctx) {
                let _ = self.sink.record(&InvocationEvent::SetupFailed {
                    reason: error.to_string(),
                });
                return Err(error);
            }
        }
        Ok(())
    }

    /// Gates and dispatches each scheduled module, in order.
    ///
    /// Gate decisions are recorded per module; a bypass becomes a skipped
    /// record, a gating failure becomes an errored record and the module is
    /// not dispatched.
    pub fn run_modules<D: ModuleDispatcher>(
        &self,
        ctx: &mut InvocationContext,
        modules: &[ScheduledModule],
        dispatcher: &D,
    ) -> InvocationReport {
        let mut report = InvocationReport::new();
        for scheduled in modules {
            let outcome = self.drive_module(ctx, scheduled, dispatcher);
            report.push(ModuleRecord {
                module: scheduled.descriptor.clone(),
                outcome,
            });
        }
        report
    }

    /// Applies setup and then drives all modules.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError`] when setup aborts; no module is gated or
    /// dispatched in that case.
    pub fn run<D: ModuleDispatcher>(
        &self,
        ctx: &mut InvocationContext,
        modules: &[ScheduledModule],
        dispatcher: &D,
    ) -> Result<InvocationReport, SetupError> {
        self.run_setup(ctx)?;
        Ok(self.run_modules(ctx, modules, dispatcher))
    }

    /// Decides and, when permitted, dispatches one module.
    fn drive_module<D: ModuleDispatcher>(
        &self,
        ctx: &mut InvocationContext,
        scheduled: &ScheduledModule,
        dispatcher: &D,
    ) -> ModuleOutcome {
        scheduled.descriptor.install(ctx);

        let strategy = match scheduled.gates.evaluate(ctx) {
            Ok(strategy) => strategy,
            Err(error) => {
                // Misconfigured module metadata: bypass, never silently run.
                return ModuleOutcome::Errored {
                    reason: error.to_string(),
                };
            }
        };
        let _ = self.sink.record(&InvocationEvent::ModuleDecision {
            module_id: scheduled.descriptor.module_id(),
            strategy,
        });

        if strategy.is_bypass() {
            return ModuleOutcome::Skipped {
                strategy,
            };
        }

        match dispatcher.dispatch(ctx, &scheduled.descriptor) {
            Ok(result) => ModuleOutcome::Executed {
                result,
            },
            Err(error) => ModuleOutcome::Errored {
                reason: error.to_string(),
            },
        }
    }
}

impl Default for InvocationDriver {
    fn default() -> Self {
        Self::new()
    }
}
