// suite-gate-core/src/core/events.rs
// ============================================================================
// Module: Suite Gate Invocation Events
// Description: Typed event records emitted during setup and gating.
// Purpose: Make recoverable conditions auditable without a logging framework.
// Dependencies: crate::core, serde
// ============================================================================

//! ## Overview
//! Recoverable conditions (a failed device property read, a merge that found
//! its destination occupied) are recorded as typed events through an event
//! sink rather than printed. Events serialize as tagged JSON records so a
//! surrounding harness can route them into its own log stream.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::ArtifactKey;
use crate::core::identifiers::SlotName;
use crate::core::strategy::RunStrategy;

// ============================================================================
// SECTION: Invocation Events
// ============================================================================

/// Event record emitted during invocation setup and module gating.
///
/// # Invariants
/// - Variants are stable for serialization and log consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum InvocationEvent {
    /// A device property read failed; the gate continued to the next device.
    PropertyReadFailed {
        /// Slot whose device could not be read.
        slot: SlotName,
        /// Property that was being read.
        property: String,
        /// Device error rendered as a message.
        reason: String,
    },
    /// An artifact merge copied an entry into the destination build record.
    MergeApplied {
        /// Source slot the artifact was read from.
        source: SlotName,
        /// Destination slot the artifact was copied into.
        dest: SlotName,
        /// Artifact key that was merged.
        key: ArtifactKey,
        /// Version string carried over verbatim.
        version: String,
    },
    /// An artifact merge was a no-op because the source lacks the key.
    MergeSkippedMissingSource {
        /// Source slot that was inspected.
        source: SlotName,
        /// Artifact key that was absent.
        key: ArtifactKey,
    },
    /// An artifact merge was a no-op because the destination already holds
    /// the key; the existing entry wins.
    MergeSkippedExistingDest {
        /// Destination slot that already holds the key.
        dest: SlotName,
        /// Artifact key that collided.
        key: ArtifactKey,
    },
    /// A module's gate chain produced its decision.
    ModuleDecision {
        /// Suite-wide module identifier.
        module_id: String,
        /// Decided run strategy.
        strategy: RunStrategy,
    },
    /// A setup preparer failed; the invocation aborts.
    SetupFailed {
        /// Failure rendered as a message.
        reason: String,
    },
}
