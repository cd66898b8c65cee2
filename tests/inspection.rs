//! Integration tests for the serial version inspection.
//!
//! These tests run the inspection the way an editor integration does: find the candidates in
//! a set of declared classes, report findings, and apply the offered fixes.

use svuid::{
    inspection::config::{IGNORED_VALUES_KEY, WARN_FOR_INCORRECT_VALUE_KEY},
    prelude::*,
    Result,
};

fn serializable(name: &str) -> ClassDecl {
    ClassDecl::new(name)
        .modifiers(Modifiers::PUBLIC)
        .interface(JavaType::class("java.io.Serializable"))
        .field(FieldDecl::new("id", JavaType::Long).modifiers(Modifiers::PRIVATE))
        .constructor(MethodDecl::constructor().modifiers(Modifiers::PUBLIC))
}

fn with_uid(class: ClassDecl, value: i64) -> ClassDecl {
    class.field(
        FieldDecl::new("serialVersionUID", JavaType::Long)
            .modifiers(SerialVersionUidDecl::MODIFIERS)
            .constant(value),
    )
}

/// Simulates a compilation unit with a mix of candidates and non-candidates.
#[test]
fn test_inspect_compilation_unit() -> Result<()> {
    let unit = vec![
        serializable("com.example.Order"),
        serializable("com.example.Order$Line").nesting(NestingKind::Member),
        serializable("com.example.Status").kind(ClassKind::Enum),
        serializable("com.example.Legacy").suppress_warning("serial"),
        with_uid(serializable("com.example.Invoice"), 1),
        ClassDecl::new("com.example.Util"),
    ];

    let inspector = Inspector::new(SerialVersionUidService::new(), InspectionConfig::default());

    let mut flagged = Vec::new();
    for class in &unit {
        if let Some(finding) = inspector.inspect(class)? {
            assert_eq!(finding.kind, FindingKind::Missing);
            assert!(needs_serial_version_uid(class));
            flagged.push(finding.class_name);
        } else {
            assert!(!needs_serial_version_uid(class));
        }
    }

    assert_eq!(flagged, ["com.example.Order", "com.example.Order$Line"]);

    Ok(())
}

/// Applies the generated fix and checks that the class is clean afterwards, even with the
/// incorrect-value check enabled.
#[test]
fn test_generated_fix_resolves_finding() -> Result<()> {
    let inspector = Inspector::new(SerialVersionUidService::new(), InspectionConfig::strict());
    let class = serializable("com.example.Order");

    let finding = inspector.inspect(&class)?.expect("missing uid should be reported");
    assert!(finding.fixes.contains(&SvuidKind::Generated));

    let decl = inspector.fix(&class, SvuidKind::Generated)?;
    assert_eq!(decl.name(), "serialVersionUID");
    assert_eq!(decl.value, SerialVersionUidService::new().generate_for(&class)?);

    let fixed = with_uid(class, decl.value);
    assert!(inspector.inspect(&fixed)?.is_none());

    Ok(())
}

/// The default fix inserts `1`, which the default configuration never reports.
#[test]
fn test_default_fix_is_ignored_value() -> Result<()> {
    let config = InspectionConfig::from_preferences([
        (WARN_FOR_INCORRECT_VALUE_KEY, "true"),
        (IGNORED_VALUES_KEY, "0L,1L"),
    ])?;
    let inspector = Inspector::new(SerialVersionUidService::new(), config);
    let class = serializable("com.example.Order");

    let decl = inspector.fix(&class, SvuidKind::Default)?;
    assert_eq!(decl.literal(), "1L");

    let fixed = with_uid(class, decl.value);
    assert!(inspector.inspect(&fixed)?.is_none());

    Ok(())
}

/// A stale identifier is reported once the class structure drifts.
#[test]
fn test_structural_drift_is_reported() -> Result<()> {
    let inspector = Inspector::new(SerialVersionUidService::new(), InspectionConfig::checked());
    let original = serializable("com.example.Order");
    let uid = inspector.fix(&original, SvuidKind::Generated)?.value;

    let drifted = with_uid(
        original.field(FieldDecl::new("note", JavaType::class("java.lang.String"))),
        uid,
    );

    match inspector.inspect(&drifted)? {
        Some(Finding {
            kind: FindingKind::Incorrect { declared, computed },
            fixes,
            ..
        }) => {
            assert_eq!(declared, uid);
            assert_ne!(computed, uid);
            assert_eq!(fixes, [SvuidKind::Generated]);
        }
        other => panic!("Expected Incorrect finding, got {other:?}"),
    }

    Ok(())
}

/// A failed computation surfaces as an error instead of a fallback value.
#[test]
fn test_unresolved_class_cannot_be_fixed_with_generated_value() {
    let inspector = Inspector::new(SerialVersionUidService::new(), InspectionConfig::default());
    let class = serializable("com.example.Order").unresolved();

    assert!(matches!(
        inspector.fix(&class, SvuidKind::Generated),
        Err(Error::Resolution { .. })
    ));
}
