// suite-gate-core/src/interfaces/mod.rs
// ============================================================================
// Module: Suite Gate Interfaces
// Description: Backend-agnostic interfaces for devices, gating, and dispatch.
// Purpose: Define the contract surfaces used by the Suite Gate runtime.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! Interfaces define how Suite Gate integrates with device transports and
//! test execution backends without embedding backend-specific details.
//! Structural failures surface as typed errors; transient device conditions
//! are recoverable at the component boundary.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::Abi;
use crate::core::ContextError;
use crate::core::InvocationContext;
use crate::core::InvocationEvent;
use crate::core::ModuleDescriptor;
use crate::core::ModuleResult;
use crate::core::RunStrategy;

// ============================================================================
// SECTION: Device Handle
// ============================================================================

/// Device communication errors.
#[derive(Debug, Error)]
pub enum DeviceError {
    /// The device did not answer a query.
    #[error("device command failed: {0}")]
    CommandFailed(String),
    /// No physical or emulated device backs this handle.
    #[error("no device behind handle: {0}")]
    NoDevice(String),
}

/// Capability handle for one allocated target device.
///
/// Queries are synchronous and may block on device I/O; timeouts belong to
/// the transport behind the implementation, not to this trait.
pub trait DeviceHandle {
    /// Returns the device serial, or a placeholder for stub handles.
    fn serial(&self) -> &str;

    /// Returns true when this handle is a stub with no device behind it.
    /// Components must skip real-device-only actions on stubs.
    fn is_stub(&self) -> bool;

    /// Reads a system property. `Ok(None)` means the property is unset.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError`] when the device cannot be queried.
    fn get_property(&self, name: &str) -> Result<Option<String>, DeviceError>;

    /// Returns the device's primary ABI.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError`] when the device cannot be queried.
    fn primary_abi(&self) -> Result<Abi, DeviceError>;
}

// ============================================================================
// SECTION: Run Gate
// ============================================================================

/// Gate evaluation errors.
#[derive(Debug, Error)]
pub enum GateError {
    /// Required invocation metadata is missing; the suite is misconfigured.
    #[error(transparent)]
    Context(#[from] ContextError),
}

/// Run-strategy gate deciding whether a module executes.
///
/// Gates never mutate the context; given an unmutated context, repeated
/// evaluation yields the same decision. Read-only device queries may fail
/// per device and are handled inside the gate.
pub trait RunGate {
    /// Decides the run strategy for the module described by the context.
    ///
    /// # Errors
    ///
    /// Returns [`GateError`] when required module metadata is absent from
    /// the context attributes.
    fn decide(&self, ctx: &InvocationContext) -> Result<RunStrategy, GateError>;
}

// ============================================================================
// SECTION: Target Preparer
// ============================================================================

/// Setup errors. Fatal to the invocation: setup aborts on the first error.
#[derive(Debug, Error)]
pub enum SetupError {
    /// A preparer referenced context state that does not exist, such as an
    /// unallocated device slot.
    #[error("target setup failed: {0}")]
    Context(#[from] ContextError),
}

/// Setup step applied to the invocation context before any module runs.
pub trait TargetPreparer {
    /// Applies the preparation step, mutating the context in place.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError`] on a structural failure; the surrounding
    /// setup phase aborts without running later preparers.
    fn set_up(&self, ctx: &mut InvocationContext) -> Result<(), SetupError>;
}

// ============================================================================
// SECTION: Module Dispatcher
// ============================================================================

/// Dispatch errors for module execution.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The execution backend reported an error.
    #[error("module dispatch failed: {0}")]
    DispatchFailed(String),
}

/// Execution backend that runs a module's tests on the allocated devices.
pub trait ModuleDispatcher {
    /// Runs the module and reports its test counts.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError`] when execution fails before producing a
    /// result.
    fn dispatch(
        &self,
        ctx: &InvocationContext,
        module: &ModuleDescriptor,
    ) -> Result<ModuleResult, DispatchError>;
}

// ============================================================================
// SECTION: Event Sink
// ============================================================================

/// Event sink errors.
#[derive(Debug, Error)]
pub enum SinkError {
    /// Writing the event record failed.
    #[error("event record write failed: {0}")]
    WriteFailed(String),
}

/// Sink receiving typed invocation events.
///
/// Recording is best-effort at call sites: a sink failure never changes a
/// gating or merge outcome.
pub trait EventSink {
    /// Records one event.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError`] when the record cannot be written.
    fn record(&self, event: &InvocationEvent) -> Result<(), SinkError>;
}
