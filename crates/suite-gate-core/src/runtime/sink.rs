// suite-gate-core/src/runtime/sink.rs
// ============================================================================
// Module: Suite Gate Event Sinks
// Description: JSON-line and discarding sinks for invocation events.
// Purpose: Persist typed event records without a logging framework.
// Dependencies: crate::{core, interfaces}, serde_json
// ============================================================================

//! ## Overview
//! [`JsonLineSink`] writes one JSON record per event to any writer and is the
//! default way to surface recoverable conditions to a harness log stream.
//! [`NullSink`] discards events for callers that do not collect them.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::sync::Arc;
use std::sync::Mutex;

use crate::core::InvocationEvent;
use crate::interfaces::EventSink;
use crate::interfaces::SinkError;

// ============================================================================
// SECTION: Shared Sink
// ============================================================================

/// Shared event sink handle passed to runtime components.
pub type SharedSink = Arc<dyn EventSink + Send + Sync>;

/// Returns a shared handle to a sink that discards all events.
#[must_use]
pub fn null_sink() -> SharedSink {
    Arc::new(NullSink)
}

// ============================================================================
// SECTION: JSON Line Sink
// ============================================================================

/// Event sink writing one JSON record per line.
pub struct JsonLineSink<W: Write + Send> {
    /// Output writer for event records.
    writer: Mutex<W>,
}

impl<W: Write + Send> JsonLineSink<W> {
    /// Creates a JSON-line sink over the writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }
}

impl<W: Write + Send> EventSink for JsonLineSink<W> {
    fn record(&self, event: &InvocationEvent) -> Result<(), SinkError> {
        let mut guard = self
            .writer
            .lock()
            .map_err(|_| SinkError::WriteFailed("event writer mutex poisoned".to_string()))?;
        serde_json::to_writer(&mut *guard, event)
            .map_err(|err| SinkError::WriteFailed(err.to_string()))?;
        guard.write_all(b"\n").map_err(|err| SinkError::WriteFailed(err.to_string()))?;
        drop(guard);
        Ok(())
    }
}

// ============================================================================
// SECTION: Null Sink
// ============================================================================

/// Event sink that discards every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn record(&self, _event: &InvocationEvent) -> Result<(), SinkError> {
        Ok(())
    }
}
