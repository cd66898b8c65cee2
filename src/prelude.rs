//! # svuid Prelude
//!
//! This module provides a convenient prelude for the most commonly used types of the svuid
//! library. Import this module to get quick access to everything needed to describe a class
//! and compute or check its `serialVersionUID`.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all svuid operations
pub use crate::Error;

/// The result type used throughout svuid
pub use crate::Result;

// ================================================================================================
// Computation
// ================================================================================================

/// Service computing default and generated identifiers
pub use crate::generator::{SerialVersionUidService, DEFAULT_SERIAL_VERSION_UID};

/// Digest primitives available to the computation
pub use crate::generator::digest::DigestAlgorithm;

// ================================================================================================
// Class Models
// ================================================================================================

/// Front-end class declarations
pub use crate::metadata::class::{ClassDecl, ClassKind, FieldDecl, MethodDecl, NestingKind};

/// Resolved structural descriptors
pub use crate::metadata::descriptor::{
    FieldDescriptor, MethodDescriptor, TypeDescriptor, CONSTRUCTOR_NAME, STATIC_INITIALIZER_NAME,
};

/// Modifier flags
pub use crate::metadata::modifiers::Modifiers;

/// Type references
pub use crate::metadata::signature::JavaType;

// ================================================================================================
// Inspection
// ================================================================================================

/// Inspection entry points and results
pub use crate::inspection::{
    needs_serial_version_uid, Finding, FindingKind, InspectionConfig, Inspector,
    SerialVersionUidDecl, SvuidKind,
};
