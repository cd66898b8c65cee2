//! Default `serialVersionUID` computation.
//!
//! The computation is a linear pipeline over the structure of one class:
//!
//! 1. [`collector`] - resolve a [`ClassDecl`] into a [`TypeDescriptor`], dropping members that
//!    do not take part in the fingerprint
//! 2. [`encoder`] - write the descriptor as a sorted, textual byte stream
//! 3. [`digest`] - hash the stream and fold the digest into a signed 64-bit integer
//!
//! [`SerialVersionUidService`] ties the stages together. It holds no mutable state, so one
//! instance can be shared freely and used from any number of threads; the caller constructs
//! it and passes it to whatever needs it.
//!
//! # Examples
//!
//! ```rust
//! use svuid::prelude::*;
//!
//! let descriptor = TypeDescriptor::builder("com.example.Foo")
//!     .modifiers(Modifiers::PUBLIC)
//!     .field(FieldDescriptor::new("count", "I", Modifiers::empty()))
//!     .method(MethodDescriptor::constructor(Vec::<String>::new(), Modifiers::PUBLIC))
//!     .build();
//!
//! let service = SerialVersionUidService::default();
//! assert_eq!(service.generate(&descriptor)?, -5682077327615057230);
//! assert_eq!(service.default_value(), 1);
//! # Ok::<(), svuid::Error>(())
//! ```

pub mod collector;
pub mod digest;
pub mod encoder;

use rayon::prelude::*;

use crate::{
    generator::digest::DigestAlgorithm,
    metadata::{class::ClassDecl, descriptor::TypeDescriptor},
    Result,
};

/// The identifier offered when no computed value is requested
pub const DEFAULT_SERIAL_VERSION_UID: i64 = 1;

/// Computes default serial version identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SerialVersionUidService {
    algorithm: DigestAlgorithm,
}

impl SerialVersionUidService {
    /// Creates a service using SHA-1
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a service using the given digest algorithm
    #[must_use]
    pub fn with_algorithm(algorithm: DigestAlgorithm) -> Self {
        SerialVersionUidService { algorithm }
    }

    /// Creates a service using the digest algorithm with the given name.
    ///
    /// # Errors
    /// Returns [`crate::Error::DigestUnavailable`] if the algorithm is not available.
    pub fn with_algorithm_name(name: &str) -> Result<Self> {
        Ok(Self::with_algorithm(DigestAlgorithm::from_name(name)?))
    }

    /// The configured digest algorithm
    #[must_use]
    pub fn algorithm(&self) -> DigestAlgorithm {
        self.algorithm
    }

    /// The canonical byte stream that [`Self::generate`] hashes
    #[must_use]
    pub fn encode(&self, descriptor: &TypeDescriptor) -> Vec<u8> {
        encoder::encode(descriptor)
    }

    /// Computes the identifier of a resolved class structure.
    ///
    /// The result depends only on the content of `descriptor`, not on the order in which its
    /// interfaces and members were declared.
    ///
    /// # Errors
    /// Returns [`crate::Error::DigestUnavailable`] if the digest primitive cannot be used.
    pub fn generate(&self, descriptor: &TypeDescriptor) -> Result<i64> {
        let encoded = self.encode(descriptor);
        let uid = self.algorithm.reduce(&encoded);

        log::debug!(
            "{}: {} encoded bytes, {} -> {}L",
            descriptor.name(),
            encoded.len(),
            self.algorithm,
            uid
        );

        Ok(uid)
    }

    /// Collects `class` and computes its identifier.
    ///
    /// # Errors
    /// Returns [`crate::Error::Resolution`] if the class is not fully resolved, or
    /// [`crate::Error::DigestUnavailable`] as for [`Self::generate`].
    pub fn generate_for(&self, class: &ClassDecl) -> Result<i64> {
        let descriptor = collector::collect(class)?;
        self.generate(&descriptor)
    }

    /// Computes identifiers for many classes in parallel; results keep the input order
    #[must_use]
    pub fn generate_all(&self, descriptors: &[TypeDescriptor]) -> Vec<Result<i64>> {
        descriptors
            .par_iter()
            .map(|descriptor| self.generate(descriptor))
            .collect()
    }

    /// The fixed default identifier, `1`
    #[must_use]
    pub fn default_value(&self) -> i64 {
        DEFAULT_SERIAL_VERSION_UID
    }
}
