//! Serial version inspection.
//!
//! The inspection looks at one declared class at a time and reports one of two findings:
//!
//! - [`FindingKind::Missing`] - a serializable class declares no `serialVersionUID`. Two fixes
//!   are offered: insert the default value `1`, or insert the computed value.
//! - [`FindingKind::Incorrect`] - the class declares a constant `serialVersionUID` that differs
//!   from the computed value. Only reported when
//!   [`InspectionConfig::warn_for_incorrect_value`] is set and the declared value is not one of
//!   the [`InspectionConfig::ignored_values`].
//!
//! Applying a fix yields a [`SerialVersionUidDecl`], the declaration a source rewriter has to
//! insert: `private static final long serialVersionUID = <value>L;`.
//!
//! # Examples
//!
//! ```rust
//! use svuid::prelude::*;
//!
//! let class = ClassDecl::new("com.example.Foo")
//!     .modifiers(Modifiers::PUBLIC)
//!     .interface(JavaType::class("java.io.Serializable"))
//!     .field(FieldDecl::new("count", JavaType::Int));
//!
//! let inspector = Inspector::new(SerialVersionUidService::default(), InspectionConfig::default());
//! let finding = inspector.inspect(&class)?.expect("serializable class without uid");
//! assert_eq!(finding.kind, FindingKind::Missing);
//!
//! let decl = inspector.fix(&class, SvuidKind::Default)?;
//! assert_eq!(decl.value, 1);
//! assert_eq!(decl.literal(), "1L");
//! # Ok::<(), svuid::Error>(())
//! ```

pub mod config;

use std::fmt;

use strum::{Display, EnumIter, EnumString};

use crate::{
    generator::SerialVersionUidService,
    metadata::{
        class::{ClassDecl, ClassKind},
        modifiers::Modifiers,
        signature::JavaType,
    },
    Result,
};

pub use config::InspectionConfig;

/// Name of the version identifier field
pub const SERIAL_VERSION_UID_FIELD: &str = "serialVersionUID";

/// `@SuppressWarnings` key that silences the inspection
pub const SUPPRESS_WARNING_SERIAL: &str = "serial";

/// Which value a fix inserts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum SvuidKind {
    /// The constant default value `1`
    Default,
    /// The structural fingerprint of the class
    Generated,
}

/// What the inspection found wrong with a class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindingKind {
    /// No `serialVersionUID` is declared
    Missing,
    /// The declared value differs from the computed one
    Incorrect {
        /// Value found in the declaration
        declared: i64,
        /// Value computed from the class structure
        computed: i64,
    },
}

/// A reported problem and the fixes that resolve it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// Qualified name of the inspected class
    pub class_name: String,
    /// The problem
    pub kind: FindingKind,
    /// Applicable fixes, in the order they should be offered
    pub fixes: Vec<SvuidKind>,
}

/// The `serialVersionUID` declaration produced by a fix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SerialVersionUidDecl {
    /// The identifier value
    pub value: i64,
}

impl SerialVersionUidDecl {
    /// Modifiers of the declaration, `private static final`
    pub const MODIFIERS: Modifiers = Modifiers::PRIVATE
        .union(Modifiers::STATIC)
        .union(Modifiers::FINAL);

    /// Field name of the declaration
    #[must_use]
    pub fn name(&self) -> &'static str {
        SERIAL_VERSION_UID_FIELD
    }

    /// Declared type of the field, `long`
    #[must_use]
    pub fn field_type(&self) -> JavaType {
        JavaType::Long
    }

    /// The value as a `long` literal, e.g. `-5682077327615057230L`
    #[must_use]
    pub fn literal(&self) -> String {
        format!("{}L", self.value)
    }
}

impl fmt::Display for SerialVersionUidDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.name(), self.literal())
    }
}

/// Returns true if `class` should declare a `serialVersionUID` but does not.
///
/// Enums, records, interfaces and annotations are exempt, as is any class that suppresses the
/// `"serial"` warning. Abstract and anonymous classes are not exempt.
#[must_use]
pub fn needs_serial_version_uid(class: &ClassDecl) -> bool {
    is_candidate(class) && class.find_field(SERIAL_VERSION_UID_FIELD).is_none()
}

fn is_candidate(class: &ClassDecl) -> bool {
    class.is_serializable()
        && class.class_kind() == ClassKind::Class
        && !class.class_modifiers().contains(Modifiers::INTERFACE)
        && !class.suppresses(SUPPRESS_WARNING_SERIAL)
}

/// Runs the serial version inspection with an injected generator service
#[derive(Debug, Clone)]
pub struct Inspector {
    service: SerialVersionUidService,
    config: InspectionConfig,
}

impl Inspector {
    /// Creates an inspector
    #[must_use]
    pub fn new(service: SerialVersionUidService, config: InspectionConfig) -> Self {
        Inspector { service, config }
    }

    /// The active configuration
    #[must_use]
    pub fn config(&self) -> &InspectionConfig {
        &self.config
    }

    /// Inspects one class.
    ///
    /// Returns `Ok(None)` when there is nothing to report.
    ///
    /// # Errors
    /// Only the incorrect-value check computes an identifier; it fails with the errors of
    /// [`SerialVersionUidService::generate_for`].
    pub fn inspect(&self, class: &ClassDecl) -> Result<Option<Finding>> {
        if !is_candidate(class) {
            return Ok(None);
        }

        let Some(field) = class.find_field(SERIAL_VERSION_UID_FIELD) else {
            log::debug!("{}: missing {}", class.name(), SERIAL_VERSION_UID_FIELD);

            return Ok(Some(Finding {
                class_name: class.name().to_string(),
                kind: FindingKind::Missing,
                fixes: vec![SvuidKind::Default, SvuidKind::Generated],
            }));
        };

        if !self.config.warn_for_incorrect_value {
            return Ok(None);
        }

        let Some(declared) = field.constant else {
            return Ok(None);
        };

        if self.config.is_ignored(declared) {
            return Ok(None);
        }

        let computed = self.service.generate_for(class)?;
        if computed == declared {
            return Ok(None);
        }

        log::debug!(
            "{}: declared {}L, computed {}L",
            class.name(),
            declared,
            computed
        );

        Ok(Some(Finding {
            class_name: class.name().to_string(),
            kind: FindingKind::Incorrect { declared, computed },
            fixes: vec![SvuidKind::Generated],
        }))
    }

    /// Computes the declaration a fix of the given kind inserts into `class`.
    ///
    /// # Errors
    /// For [`SvuidKind::Generated`], the errors of [`SerialVersionUidService::generate_for`].
    /// A failed computation is never replaced by the default value.
    pub fn fix(&self, class: &ClassDecl, kind: SvuidKind) -> Result<SerialVersionUidDecl> {
        let value = match kind {
            SvuidKind::Default => self.service.default_value(),
            SvuidKind::Generated => self.service.generate_for(class)?,
        };

        Ok(SerialVersionUidDecl { value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        metadata::class::{FieldDecl, MethodDecl, NestingKind},
        Error,
    };
    use strum::IntoEnumIterator;

    const BASELINE_UID: i64 = -5682077327615057230;

    fn baseline() -> ClassDecl {
        ClassDecl::new("com.example.Foo")
            .modifiers(Modifiers::PUBLIC)
            .serializable()
            .field(FieldDecl::new("count", JavaType::Int))
            .constructor(MethodDecl::constructor().modifiers(Modifiers::PUBLIC))
    }

    fn with_uid(value: i64) -> ClassDecl {
        baseline().field(
            FieldDecl::new(SERIAL_VERSION_UID_FIELD, JavaType::Long)
                .modifiers(SerialVersionUidDecl::MODIFIERS)
                .constant(value),
        )
    }

    fn inspector(config: InspectionConfig) -> Inspector {
        Inspector::new(SerialVersionUidService::new(), config)
    }

    #[test]
    fn test_needs_serial_version_uid() {
        assert!(needs_serial_version_uid(&baseline()));
        assert!(needs_serial_version_uid(
            &baseline().modifiers(Modifiers::PUBLIC | Modifiers::ABSTRACT)
        ));
        assert!(needs_serial_version_uid(
            &baseline().nesting(NestingKind::Anonymous)
        ));

        assert!(!needs_serial_version_uid(&ClassDecl::new("com.example.Plain")));
        assert!(!needs_serial_version_uid(&baseline().kind(ClassKind::Enum)));
        assert!(!needs_serial_version_uid(&baseline().kind(ClassKind::Record)));
        assert!(!needs_serial_version_uid(
            &baseline().modifiers(Modifiers::PUBLIC | Modifiers::INTERFACE | Modifiers::ABSTRACT)
        ));
        assert!(!needs_serial_version_uid(
            &baseline().suppress_warning(SUPPRESS_WARNING_SERIAL)
        ));
        assert!(!needs_serial_version_uid(&with_uid(7)));
    }

    #[test]
    fn test_inspect_missing() {
        let finding = inspector(InspectionConfig::default())
            .inspect(&baseline())
            .unwrap()
            .unwrap();

        assert_eq!(finding.class_name, "com.example.Foo");
        assert_eq!(finding.kind, FindingKind::Missing);
        assert_eq!(finding.fixes, SvuidKind::iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_inspect_missing_does_not_resolve() {
        // The missing-uid report never computes, so unresolved classes are still flagged
        let class = baseline().unresolved();
        let finding = inspector(InspectionConfig::default()).inspect(&class).unwrap();
        assert_eq!(finding.unwrap().kind, FindingKind::Missing);
    }

    #[test]
    fn test_inspect_incorrect_value() {
        let finding = inspector(InspectionConfig::checked())
            .inspect(&with_uid(42))
            .unwrap()
            .unwrap();

        match finding.kind {
            FindingKind::Incorrect { declared, computed } => {
                assert_eq!(declared, 42);
                // The private static final uid field itself is excluded from the fingerprint
                assert_eq!(computed, BASELINE_UID);
            }
            FindingKind::Missing => panic!("Expected Incorrect finding"),
        }
        assert_eq!(finding.fixes, [SvuidKind::Generated]);
    }

    #[test]
    fn test_inspect_incorrect_value_options() {
        // Disabled by default
        assert!(inspector(InspectionConfig::default())
            .inspect(&with_uid(42))
            .unwrap()
            .is_none());

        // Ignored placeholders
        assert!(inspector(InspectionConfig::checked())
            .inspect(&with_uid(1))
            .unwrap()
            .is_none());
        assert!(inspector(InspectionConfig::strict())
            .inspect(&with_uid(1))
            .unwrap()
            .is_some());

        // Matching value
        assert!(inspector(InspectionConfig::strict())
            .inspect(&with_uid(BASELINE_UID))
            .unwrap()
            .is_none());

        // Non-constant initializer
        let computed = baseline().field(
            FieldDecl::new(SERIAL_VERSION_UID_FIELD, JavaType::Long)
                .modifiers(SerialVersionUidDecl::MODIFIERS),
        );
        assert!(inspector(InspectionConfig::strict())
            .inspect(&computed)
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_inspect_incorrect_value_unresolved() {
        let result = inspector(InspectionConfig::strict()).inspect(&with_uid(42).unresolved());
        assert!(matches!(result, Err(Error::Resolution { .. })));
    }

    #[test]
    fn test_fix() {
        let inspector = inspector(InspectionConfig::default());

        let default = inspector.fix(&baseline(), SvuidKind::Default).unwrap();
        assert_eq!(default.value, 1);

        let generated = inspector.fix(&baseline(), SvuidKind::Generated).unwrap();
        assert_eq!(generated.value, BASELINE_UID);
        assert_eq!(generated.name(), "serialVersionUID");
        assert_eq!(generated.field_type(), JavaType::Long);
        assert_eq!(
            SerialVersionUidDecl::MODIFIERS,
            Modifiers::PRIVATE | Modifiers::STATIC | Modifiers::FINAL
        );
        assert_eq!(generated.literal(), "-5682077327615057230L");
        assert_eq!(
            generated.to_string(),
            "serialVersionUID = -5682077327615057230L"
        );
    }

    #[test]
    fn test_fix_never_falls_back_to_default() {
        let inspector = inspector(InspectionConfig::default());
        let unresolved = baseline().unresolved();

        assert!(inspector.fix(&unresolved, SvuidKind::Default).is_ok());
        assert!(matches!(
            inspector.fix(&unresolved, SvuidKind::Generated),
            Err(Error::Resolution { .. })
        ));
    }

    #[test]
    fn test_svuid_kind_names() {
        assert_eq!(SvuidKind::Generated.to_string(), "generated");
        assert_eq!("default".parse::<SvuidKind>().unwrap(), SvuidKind::Default);
    }
}
