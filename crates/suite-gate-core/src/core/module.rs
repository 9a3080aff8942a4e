// suite-gate-core/src/core/module.rs
// ============================================================================
// Module: Suite Gate Module Descriptor
// Description: Identity of the test module under decision.
// Purpose: Derive module name and ABI from invocation attributes.
// Dependencies: crate::core, serde
// ============================================================================

//! ## Overview
//! A module descriptor identifies the test module whose run strategy is being
//! decided: its declared name and target ABI. The descriptor is carried
//! through the invocation context's attribute map so gates stay decoupled
//! from suite configuration plumbing.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::core::abi::Abi;
use crate::core::context::ATTR_MODULE_ABI;
use crate::core::context::ATTR_MODULE_NAME;
use crate::core::context::ContextError;
use crate::core::context::InvocationContext;
use crate::core::identifiers::ModuleName;

// ============================================================================
// SECTION: Module Descriptor
// ============================================================================

/// Identity of a test module scheduled for execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDescriptor {
    /// Module name as declared by the suite configuration.
    pub name: ModuleName,
    /// ABI the module's tests were built for.
    pub abi: Abi,
}

impl ModuleDescriptor {
    /// Creates a new module descriptor.
    #[must_use]
    pub fn new(name: impl Into<ModuleName>, abi: impl Into<Abi>) -> Self {
        Self {
            name: name.into(),
            abi: abi.into(),
        }
    }

    /// Reads the descriptor from the context's well-known attributes.
    ///
    /// # Errors
    ///
    /// Returns [`ContextError::MissingAttribute`] when the module name or ABI
    /// attribute is absent, signaling a misconfigured suite.
    pub fn from_attributes(ctx: &InvocationContext) -> Result<Self, ContextError> {
        let name = ctx.require_attribute(ATTR_MODULE_NAME)?;
        let abi = ctx.require_attribute(ATTR_MODULE_ABI)?;
        Ok(Self::new(name, abi))
    }

    /// Installs the descriptor into the context's well-known attributes,
    /// replacing any previous module identity.
    pub fn install(&self, ctx: &mut InvocationContext) {
        ctx.clear_attribute(ATTR_MODULE_NAME);
        ctx.clear_attribute(ATTR_MODULE_ABI);
        ctx.add_attribute(ATTR_MODULE_NAME, self.name.as_str());
        ctx.add_attribute(ATTR_MODULE_ABI, self.abi.as_str());
    }

    /// Returns the suite-wide module identifier, `"<abi> <name>"`.
    #[must_use]
    pub fn module_id(&self) -> String {
        format!("{} {}", self.abi, self.name)
    }
}

impl fmt::Display for ModuleDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.abi, self.name)
    }
}
