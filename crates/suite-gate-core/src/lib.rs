// suite-gate-core/src/lib.rs
// ============================================================================
// Module: Suite Gate Core Library
// Description: Public API surface for the Suite Gate core.
// Purpose: Expose core types, interfaces, and runtime helpers.
// Dependencies: crate::{core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! Suite Gate core provides run-strategy gating and build-artifact
//! coordination for multi-device test-suite invocations. It is
//! transport-agnostic and integrates with device and dispatch backends
//! through explicit interfaces rather than embedding into any harness.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use self::core::*;

pub use interfaces::DeviceError;
pub use interfaces::DeviceHandle;
pub use interfaces::DispatchError;
pub use interfaces::EventSink;
pub use interfaces::GateError;
pub use interfaces::ModuleDispatcher;
pub use interfaces::RunGate;
pub use interfaces::SetupError;
pub use interfaces::SinkError;
pub use interfaces::TargetPreparer;
pub use runtime::ArtifactMerge;
pub use runtime::GateChain;
pub use runtime::InvocationDriver;
pub use runtime::JsonLineSink;
pub use runtime::NativeBridgeGate;
pub use runtime::NullSink;
pub use runtime::ScheduledModule;
pub use runtime::SharedSink;
pub use runtime::null_sink;
