// suite-gate-config/src/registry.rs
// ============================================================================
// Module: Gate Registry
// Description: Registry for built-in and external run-strategy gates.
// Purpose: Materialize configured gate names into ordered gate chains.
// Dependencies: suite-gate-core
// ============================================================================

//! ## Overview
//! The gate registry maps statically enumerated gate names to constructors.
//! Suite configuration refers to gates by name only; the registry turns a
//! name list into an ordered [`GateChain`]. Unknown names fail closed rather
//! than being skipped, so a typo cannot silently un-gate a module.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use suite_gate_core::GateChain;
use suite_gate_core::NativeBridgeGate;
use suite_gate_core::RunGate;
use suite_gate_core::SharedSink;
use suite_gate_core::null_sink;

use crate::config::ConfigError;

// ============================================================================
// SECTION: Gate Registry
// ============================================================================

/// Built-in gate name for the native-bridge gate.
pub const GATE_NATIVE_BRIDGE: &str = "native-bridge";

/// Constructor producing a boxed gate wired to the registry's sink.
pub type GateFactory =
    Box<dyn Fn(&SharedSink) -> Box<dyn RunGate + Send + Sync> + Send + Sync>;

/// Registry of gate constructors keyed by configured name.
pub struct GateRegistry {
    /// Gate constructors keyed by gate name.
    factories: BTreeMap<String, GateFactory>,
    /// Sink handed to constructed gates.
    sink: SharedSink,
}

impl GateRegistry {
    /// Creates an empty registry with a discarding sink.
    #[must_use]
    pub fn new() -> Self {
        Self {
            factories: BTreeMap::new(),
            sink: null_sink(),
        }
    }

    /// Creates a registry with the built-in gates registered.
    #[must_use]
    pub fn with_builtin_gates() -> Self {
        let mut registry = Self::new();
        registry.register_gate(GATE_NATIVE_BRIDGE, |sink: &SharedSink| {
            Box::new(NativeBridgeGate::with_sink(sink.clone()))
        });
        registry
    }

    /// Replaces the sink handed to constructed gates.
    #[must_use]
    pub fn with_sink(mut self, sink: SharedSink) -> Self {
        self.sink = sink;
        self
    }

    /// Registers a gate constructor under a name, replacing any previous one.
    pub fn register_gate<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn(&SharedSink) -> Box<dyn RunGate + Send + Sync> + Send + Sync + 'static,
    {
        self.factories.insert(name.into(), Box::new(factory));
    }

    /// Returns true when a gate name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Returns registered gate names in stable order.
    pub fn gate_names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    /// Builds an ordered gate chain from configured gate names.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownGate`] naming the first unregistered
    /// gate; no partial chain is produced.
    pub fn build_chain(&self, names: &[String]) -> Result<GateChain, ConfigError> {
        let mut gates = Vec::with_capacity(names.len());
        for name in names {
            let factory = self
                .factories
                .get(name)
                .ok_or_else(|| ConfigError::UnknownGate(name.clone()))?;
            gates.push(factory(&self.sink));
        }
        Ok(GateChain::with_gates(gates))
    }
}

impl Default for GateRegistry {
    fn default() -> Self {
        Self::with_builtin_gates()
    }
}
