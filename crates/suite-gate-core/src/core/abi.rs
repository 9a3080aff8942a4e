// suite-gate-core/src/core/abi.rs
// ============================================================================
// Module: Suite Gate ABI
// Description: ABI names and base-architecture derivation.
// Purpose: Compare module and device architectures for gating decisions.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! An [`Abi`] wraps an ABI name as reported by a device or declared by a
//! module. Gating compares *base architectures*: two ABIs of the same family
//! (for example `armeabi-v7a` and `arm64-v8a`) share a base architecture even
//! though their bitness differs.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: ABI Type
// ============================================================================

/// ABI name with architecture-family derivation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Abi(String);

impl Abi {
    /// Creates a new ABI from its canonical name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the ABI name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the base architecture shared by all bitness variants of this
    /// ABI family, or `None` for an unrecognized name.
    #[must_use]
    pub fn base_arch(&self) -> Option<&'static str> {
        match self.0.as_str() {
            "armeabi" | "armeabi-v7a" | "arm64-v8a" => Some("arm"),
            "x86" | "x86_64" => Some("x86"),
            "mips" | "mips64" => Some("mips"),
            "riscv64" => Some("riscv64"),
            _ => None,
        }
    }

    /// Returns the pointer width of this ABI in bits, or `None` for an
    /// unrecognized name.
    #[must_use]
    pub fn bitness(&self) -> Option<u8> {
        match self.0.as_str() {
            "armeabi" | "armeabi-v7a" | "x86" | "mips" => Some(32),
            "arm64-v8a" | "x86_64" | "mips64" | "riscv64" => Some(64),
            _ => None,
        }
    }

    /// Returns true when both ABIs resolve to the same known base
    /// architecture. Unrecognized ABIs never match.
    #[must_use]
    pub fn same_base_arch(&self, other: &Self) -> bool {
        match (self.base_arch(), other.base_arch()) {
            (Some(left), Some(right)) => left == right,
            _ => false,
        }
    }
}

impl fmt::Display for Abi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for Abi {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Abi {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::Abi;

    #[test]
    fn arm_family_shares_base_arch() {
        let device = Abi::new("arm64-v8a");
        let module = Abi::new("armeabi-v7a");
        assert!(device.same_base_arch(&module));
    }

    #[test]
    fn cross_family_differs() {
        let device = Abi::new("arm64-v8a");
        let module = Abi::new("x86");
        assert!(!device.same_base_arch(&module));
    }

    #[test]
    fn unknown_abi_never_matches() {
        let unknown = Abi::new("sparc");
        assert!(unknown.base_arch().is_none());
        assert!(!unknown.same_base_arch(&unknown));
    }

    #[test]
    fn bitness_by_family() {
        assert_eq!(Abi::new("x86").bitness(), Some(32));
        assert_eq!(Abi::new("riscv64").bitness(), Some(64));
        assert_eq!(Abi::new("sparc").bitness(), None);
    }
}
