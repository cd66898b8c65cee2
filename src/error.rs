use thiserror::Error;

macro_rules! resolution_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Resolution {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Resolution {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// The identifier computation itself only knows two failure modes: the class structure could
/// not be resolved, or the requested digest primitive is not available. Both are fatal for the
/// computation at hand; a caller must treat any error as "cannot compute, do not insert a
/// generated value" and must never fall back to the default value `1` on its own.
///
/// # Error Categories
///
/// ## Computation Errors
/// - [`Error::Resolution`] - The class or one of its member types is unresolved
/// - [`Error::DigestUnavailable`] - The configured hash primitive cannot be constructed
///
/// ## Integration Errors
/// - [`Error::InvalidSetting`] - An inspection preference could not be parsed
///
/// # Examples
///
/// ```rust
/// use svuid::{Error, prelude::*};
///
/// let class = ClassDecl::new("com.example.Broken")
///     .serializable()
///     .field(FieldDecl::new("peer", JavaType::unresolved("Missing")));
///
/// match SerialVersionUidService::default().generate_for(&class) {
///     Ok(uid) => println!("serialVersionUID = {uid}L"),
///     Err(Error::Resolution { message, .. }) => eprintln!("unresolved: {message}"),
///     Err(e) => eprintln!("other error: {e}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The class structure could not be fully resolved.
    ///
    /// Resolution is a precondition of the computation, not a transient fault, so this error
    /// is never retried. The error includes the source location where the unresolved
    /// reference was detected for debugging purposes.
    ///
    /// # Fields
    ///
    /// * `message` - Description of the unresolved reference
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Unresolved - {file}:{line}: {message}")]
    Resolution {
        /// The message to be printed for the Resolution error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// The requested digest primitive is not available.
    ///
    /// This is a configuration error: it is surfaced immediately and never silently replaced
    /// by a default identifier. The associated value is the algorithm name that was requested.
    #[error("Digest algorithm is not available - {0}")]
    DigestUnavailable(String),

    /// An inspection setting carried a value that could not be parsed.
    #[error("Invalid value for setting '{key}' - {value}")]
    InvalidSetting {
        /// The preference key
        key: String,
        /// The raw value that was rejected
        value: String,
    },
}
