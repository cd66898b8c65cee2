//! Structural collection: [`ClassDecl`] to [`TypeDescriptor`].
//!
//! The collector resolves every type reference of a declared class into its erased signature
//! and keeps only the members that take part in the fingerprint:
//!
//! - a field is dropped if and only if it is both `private` and `static`; `transient` alone
//!   never drops a field
//! - an ordinary method is dropped if and only if it is both `private` and `static`
//! - constructors are always kept, `private` ones included, under the name `<init>`
//! - any number of static initializer blocks collapses into the single
//!   `has_static_initializer` marker
//!
//! The class must be fully resolved: an unresolved class, interface or member type fails the
//! collection with [`crate::Error::Resolution`] and nothing is handed to the encoder.

use crate::{
    metadata::{
        class::{ClassDecl, MethodDecl},
        descriptor::{FieldDescriptor, MethodDescriptor, TypeDescriptor, CONSTRUCTOR_NAME},
        signature::JavaType,
    },
    Result,
};

/// Returns true if `field` takes part in the fingerprint
#[must_use]
pub fn includes_field(field: &FieldDescriptor) -> bool {
    !field.modifiers.is_private_static()
}

/// Returns true if `method` takes part in the fingerprint as a regular method entry.
///
/// Static initializer entries are never regular entries; they are represented by
/// [`TypeDescriptor::has_static_initializer`].
#[must_use]
pub fn includes_method(method: &MethodDescriptor) -> bool {
    if method.is_static_initializer() {
        return false;
    }

    method.is_constructor() || !method.modifiers.is_private_static()
}

/// Collects the structural facts of `class` into a [`TypeDescriptor`].
///
/// # Errors
/// Returns [`crate::Error::Resolution`] if the class is not resolved or if any interface,
/// field, parameter or return type is unresolved.
pub fn collect(class: &ClassDecl) -> Result<TypeDescriptor> {
    if !class.is_resolved() {
        return Err(resolution_error!(
            "class '{}' has not been resolved",
            class.name()
        ));
    }

    let mut builder = TypeDescriptor::builder(class.name()).modifiers(class.class_modifiers());

    for interface in class.interfaces() {
        builder = builder.interface(interface_name(class, interface)?);
    }

    for field in class.fields() {
        let descriptor = FieldDescriptor::new(
            field.name.as_str(),
            member_signature(class, &field.name, &field.ty)?,
            field.modifiers,
        );

        if includes_field(&descriptor) {
            builder = builder.field(descriptor);
        }
    }

    for constructor in class.constructors() {
        let parameters = parameter_signatures(class, CONSTRUCTOR_NAME, constructor)?;
        builder = builder.method(MethodDescriptor::constructor(parameters, constructor.modifiers));
    }

    let mut has_static_initializer = class.static_initializer_count() > 0;
    for method in class.methods() {
        let descriptor = MethodDescriptor::new(
            method.name.as_str(),
            parameter_signatures(class, &method.name, method)?,
            member_signature(class, &method.name, &method.return_type)?,
            method.modifiers,
        );

        if descriptor.is_static_initializer() {
            has_static_initializer = true;
        } else if includes_method(&descriptor) {
            builder = builder.method(descriptor);
        }
    }

    let descriptor = builder.static_initializer(has_static_initializer).build();

    log::debug!(
        "collected {}: {} interfaces, {} of {} fields, {} methods, static initializer: {}",
        descriptor.name(),
        descriptor.interfaces().len(),
        descriptor.fields().len(),
        class.fields().len(),
        descriptor.methods().len(),
        descriptor.has_static_initializer()
    );

    Ok(descriptor)
}

fn interface_name(class: &ClassDecl, interface: &JavaType) -> Result<String> {
    match interface {
        JavaType::Class(name) => Ok(name.clone()),
        JavaType::Unresolved(name) => Err(resolution_error!(
            "interface '{}' of '{}' could not be resolved",
            name,
            class.name()
        )),
        other => Err(resolution_error!(
            "'{}' implemented by '{}' is not an interface type",
            other,
            class.name()
        )),
    }
}

fn member_signature(class: &ClassDecl, member: &str, ty: &JavaType) -> Result<String> {
    if ty.is_unresolved() {
        return Err(resolution_error!(
            "type '{}' of member '{}.{}' could not be resolved",
            ty,
            class.name(),
            member
        ));
    }

    ty.signature()
}

fn parameter_signatures(
    class: &ClassDecl,
    member: &str,
    method: &MethodDecl,
) -> Result<Vec<String>> {
    method
        .parameters
        .iter()
        .map(|parameter| member_signature(class, member, parameter))
        .collect()
}
