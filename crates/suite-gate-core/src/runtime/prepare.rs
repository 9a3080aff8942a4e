// suite-gate-core/src/runtime/prepare.rs
// ============================================================================
// Module: Artifact Merge Preparer
// Description: One-way, collision-safe build-artifact copy between slots.
// Purpose: Share a named artifact across per-device build records in setup.
// Dependencies: crate::{core, interfaces, runtime::sink}
// ============================================================================

//! ## Overview
//! [`ArtifactMerge`] copies a single named artifact entry from a source
//! slot's build record into a destination slot's record, version string
//! carried verbatim. A missing slot is fatal to the invocation. A missing
//! source key or an occupied destination key is a silent no-op: optional
//! artifacts across differently configured modules must not fail runs.
//!
//! Each setup call is one atomic check-then-copy with three terminal
//! outcomes; there are no retries and no rollback.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::ArtifactKey;
use crate::core::InvocationContext;
use crate::core::InvocationEvent;
use crate::core::SlotName;
use crate::interfaces::SetupError;
use crate::interfaces::TargetPreparer;
use crate::runtime::sink::SharedSink;
use crate::runtime::sink::null_sink;

// ============================================================================
// SECTION: Artifact Merge
// ============================================================================

/// Setup step merging one artifact entry between two device slots.
pub struct ArtifactMerge {
    /// Slot whose build record provides the artifact.
    source_slot: SlotName,
    /// Slot whose build record receives the artifact.
    dest_slot: SlotName,
    /// Artifact key to merge.
    key: ArtifactKey,
    /// Sink receiving merge outcome records.
    sink: SharedSink,
}

impl ArtifactMerge {
    /// Creates a merge step for the given slots and key.
    #[must_use]
    pub fn new(
        source_slot: impl Into<SlotName>,
        dest_slot: impl Into<SlotName>,
        key: impl Into<ArtifactKey>,
    ) -> Self {
        Self {
            source_slot: source_slot.into(),
            dest_slot: dest_slot.into(),
            key: key.into(),
            sink: null_sink(),
        }
    }

    /// Replaces the event sink.
    #[must_use]
    pub fn with_sink(mut self, sink: SharedSink) -> Self {
        self.sink = sink;
        self
    }

    /// Records a merge outcome. Sink failures never change the outcome.
    fn note(&self, event: InvocationEvent) {
        let _ = self.sink.record(&event);
    }
}

impl TargetPreparer for ArtifactMerge {
    fn set_up(&self, ctx: &mut InvocationContext) -> Result<(), SetupError> {
        // Both slots must exist before any copy is attempted; a missing slot
        // is fatal even when the merge would otherwise be a no-op.
        ctx.device(&self.source_slot)?;
        ctx.device(&self.dest_slot)?;

        let source = ctx.build_info(&self.source_slot)?;
        let Some(file) = source.get_file(&self.key).cloned() else {
            self.note(InvocationEvent::MergeSkippedMissingSource {
                source: self.source_slot.clone(),
                key: self.key.clone(),
            });
            return Ok(());
        };

        let dest = ctx.build_info_mut(&self.dest_slot)?;
        let version = file.version.clone();
        if dest.set_file(self.key.clone(), file) {
            self.note(InvocationEvent::MergeApplied {
                source: self.source_slot.clone(),
                dest: self.dest_slot.clone(),
                key: self.key.clone(),
                version,
            });
        } else {
            // Existing destination entry wins; the run proceeds.
            self.note(InvocationEvent::MergeSkippedExistingDest {
                dest: self.dest_slot.clone(),
                key: self.key.clone(),
            });
        }
        Ok(())
    }
}
