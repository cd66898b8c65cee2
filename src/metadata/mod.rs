//! Class structure models.
//!
//! - [`class`] - Front-end view of a declared class, possibly unresolved
//! - [`descriptor`] - Resolved structural descriptors consumed by the computation
//! - [`modifiers`] - JVM access and property flags
//! - [`signature`] - Type references and erased signature strings

pub mod class;
pub mod descriptor;
pub mod modifiers;
pub mod signature;
