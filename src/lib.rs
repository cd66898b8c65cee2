// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # svuid
//!
//! Default `serialVersionUID` computation for serializable JVM classes.
//!
//! A class that implements `java.io.Serializable` without declaring a `serialVersionUID` gets
//! one assigned by the serialization runtime, derived from the shape of the class. Any
//! structural change then silently changes the identifier and breaks previously persisted
//! data. `svuid` computes that structural fingerprint from a plain description of the class,
//! independent of any compiler or IDE, and provides the checks an inspection needs to flag
//! classes without an explicit identifier.
//!
//! ## Quick Start
//!
//! ### Using the Prelude
//!
//! ```rust
//! use svuid::prelude::*;
//!
//! let class = ClassDecl::new("com.example.Foo")
//!     .modifiers(Modifiers::PUBLIC)
//!     .interface(JavaType::class("java.io.Serializable"))
//!     .field(FieldDecl::new("count", JavaType::Int))
//!     .constructor(MethodDecl::constructor().modifiers(Modifiers::PUBLIC));
//!
//! let service = SerialVersionUidService::default();
//! let uid = service.generate_for(&class)?;
//! println!("private static final long serialVersionUID = {uid}L;");
//! # Ok::<(), svuid::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`metadata`] - Class models: front-end declarations, resolved descriptors, modifiers and
//!   type signatures
//! - [`generator`] - The identifier computation: collector, canonical encoder, digest reducer
//!   and the [`SerialVersionUidService`] tying them together
//! - [`inspection`] - Deciding when a class needs an identifier and which fixes to offer
//! - [`Error`] and [`Result`] - Error handling
//!
//! ### The Computation
//!
//! The computation runs strictly linearly, every intermediate is local to the call:
//!
//! 1. **Collect** - resolve the declared class into a [`TypeDescriptor`], keeping only the
//!    members that take part in the fingerprint
//! 2. **Encode** - write name, masked modifiers, sorted interfaces, sorted fields, the static
//!    initializer marker and sorted methods as UTF-8 text lines
//! 3. **Digest** - hash the text with SHA-1 and read the first eight bytes big-endian as an
//!    `i64`
//!
//! Either stage may fail, in which case no value is produced at all. Callers must not fall
//! back to the default value `1` on their own.
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T, Error>`](Result):
//!
//! ```rust
//! use svuid::{Error, prelude::*};
//!
//! match SerialVersionUidService::with_algorithm_name("SHA-3") {
//!     Ok(service) => println!("using {}", service.algorithm()),
//!     Err(Error::DigestUnavailable(name)) => println!("no digest named {name}"),
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```
#[macro_use]
pub(crate) mod error;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use svuid::prelude::*;
///
/// let service = SerialVersionUidService::default();
/// assert_eq!(service.default_value(), 1);
/// ```
pub mod prelude;

/// Class structure models: declarations, descriptors, modifiers and signatures.
pub mod metadata;

/// The default `serialVersionUID` computation.
pub mod generator;

/// Candidate detection, value checks and fixes.
pub mod inspection;

/// `svuid` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
/// This is used consistently throughout the crate for all fallible operations.
pub type Result<T> = std::result::Result<T, Error>;

/// `svuid` Error type
///
/// The main error type for all operations in this crate. Its variants describe the individual
/// failure modes.
pub use error::Error;

/// Main entry point of the computation.
///
/// See [`generator::SerialVersionUidService`].
pub use generator::SerialVersionUidService;

/// Resolved class structure consumed by the computation.
pub use metadata::descriptor::TypeDescriptor;
