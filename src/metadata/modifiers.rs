//! Access and property flags for JVM classes, fields and methods.
//!
//! The bit values match the `access_flags` items of the class file format, so modifiers read
//! from a bytecode front end can be passed through unchanged. Only a subset of the bits
//! participates in the structural fingerprint; the masks below select them.
//!
//! # Key Types
//! - [`Modifiers`]: The full modifier set of a class or member
//! - [`CLASS_SIGNATURE_MASK`], [`METHOD_SIGNATURE_MASK`]: Bits that take part in the fingerprint

use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    /// Modifier set of a class, field, method or constructor
    pub struct Modifiers: u32 {
        /// Accessible from everywhere
        const PUBLIC = 0x0001;
        /// Accessible only by the declaring class
        const PRIVATE = 0x0002;
        /// Accessible by sub-classes and the package
        const PROTECTED = 0x0004;
        /// Defined on the class, else per instance
        const STATIC = 0x0008;
        /// Cannot be overridden, sub-classed or reassigned
        const FINAL = 0x0010;
        /// Invocation is wrapped by a monitor
        const SYNCHRONIZED = 0x0020;
        /// Field cannot be cached
        const VOLATILE = 0x0040;
        /// Field is not part of the persistent state
        const TRANSIENT = 0x0080;
        /// Method is implemented in native code
        const NATIVE = 0x0100;
        /// Type is an interface
        const INTERFACE = 0x0200;
        /// Type or method provides no implementation
        const ABSTRACT = 0x0400;
        /// Floating point mode is strict
        const STRICT = 0x0800;
    }
}

/// Class modifier bits written into the canonical encoding
pub const CLASS_SIGNATURE_MASK: Modifiers = Modifiers::PUBLIC
    .union(Modifiers::FINAL)
    .union(Modifiers::INTERFACE)
    .union(Modifiers::ABSTRACT);

/// Method and constructor modifier bits written into the canonical encoding
pub const METHOD_SIGNATURE_MASK: Modifiers = Modifiers::PUBLIC
    .union(Modifiers::PRIVATE)
    .union(Modifiers::PROTECTED)
    .union(Modifiers::STATIC)
    .union(Modifiers::FINAL)
    .union(Modifiers::SYNCHRONIZED)
    .union(Modifiers::NATIVE)
    .union(Modifiers::ABSTRACT)
    .union(Modifiers::STRICT);

impl Modifiers {
    /// Class modifiers restricted to the bits that take part in the fingerprint
    #[must_use]
    pub fn class_signature_bits(self) -> u32 {
        (self & CLASS_SIGNATURE_MASK).bits()
    }

    /// Method modifiers restricted to the bits that take part in the fingerprint
    #[must_use]
    pub fn method_signature_bits(self) -> u32 {
        (self & METHOD_SIGNATURE_MASK).bits()
    }

    /// Returns true if both `PRIVATE` and `STATIC` are set
    #[must_use]
    pub fn is_private_static(self) -> bool {
        self.contains(Modifiers::PRIVATE | Modifiers::STATIC)
    }
}
