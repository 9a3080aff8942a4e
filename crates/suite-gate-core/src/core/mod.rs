// suite-gate-core/src/core/mod.rs
// ============================================================================
// Module: Suite Gate Core Types
// Description: Canonical invocation, build, and strategy structures.
// Purpose: Provide stable, serializable types for suite invocations and logs.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Core types define the invocation context, per-device build records,
//! module descriptors, run strategies, and event records. These types are
//! the canonical source of truth for any harness integrating the scheduler.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod abi;
pub mod build;
pub mod context;
pub mod events;
pub mod identifiers;
pub mod module;
pub mod report;
pub mod strategy;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use abi::Abi;
pub use build::BuildInfo;
pub use build::VersionedFile;
pub use context::ATTR_MODULE_ABI;
pub use context::ATTR_MODULE_NAME;
pub use context::ContextError;
pub use context::InvocationContext;
pub use context::SharedDevice;
pub use events::InvocationEvent;
pub use identifiers::ArtifactKey;
pub use identifiers::ModuleName;
pub use identifiers::SlotName;
pub use module::ModuleDescriptor;
pub use report::InvocationReport;
pub use report::ModuleOutcome;
pub use report::ModuleRecord;
pub use report::ModuleResult;
pub use strategy::RunStrategy;
