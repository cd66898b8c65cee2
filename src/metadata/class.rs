//! Front-end view of a declared class.
//!
//! [`ClassDecl`] is what a parser, a symbol table or a bytecode reader fills in for one class.
//! Unlike [`crate::metadata::descriptor::TypeDescriptor`] it may still contain unresolved type
//! references, keeps every member exactly as declared and carries the extra facts the
//! inspection needs (serializability, nesting, suppressed warnings, constant initializers).
//!
//! ```rust
//! use svuid::prelude::*;
//!
//! let class = ClassDecl::new("com.example.Account")
//!     .modifiers(Modifiers::PUBLIC)
//!     .serializable()
//!     .field(FieldDecl::new("balance", JavaType::Long).modifiers(Modifiers::PRIVATE))
//!     .constructor(MethodDecl::constructor().modifiers(Modifiers::PUBLIC))
//!     .method(
//!         MethodDecl::new("deposit")
//!             .modifiers(Modifiers::PUBLIC)
//!             .parameter(JavaType::Long),
//!     );
//!
//! assert!(class.is_serializable());
//! assert_eq!(class.fields().len(), 1);
//! ```

use strum::{Display, EnumString};

use crate::metadata::{modifiers::Modifiers, signature::JavaType};

/// What kind of type a [`ClassDecl`] declares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ClassKind {
    /// A regular class
    #[default]
    Class,
    /// An interface
    Interface,
    /// An annotation interface
    Annotation,
    /// An enum
    Enum,
    /// A record
    Record,
}

/// Where a [`ClassDecl`] is declared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum NestingKind {
    /// Declared directly in a compilation unit
    #[default]
    TopLevel,
    /// Declared as a member of another type
    Member,
    /// Declared inside a method body
    Local,
    /// Declared by an instance creation expression
    Anonymous,
}

/// A declared field
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDecl {
    /// Simple field name
    pub name: String,
    /// Declared type
    pub ty: JavaType,
    /// Declared modifiers
    pub modifiers: Modifiers,
    /// Integer constant initializer, when the initializer folds to one
    pub constant: Option<i64>,
}

impl FieldDecl {
    /// Creates a package-private field without initializer
    pub fn new(name: impl Into<String>, ty: JavaType) -> Self {
        FieldDecl {
            name: name.into(),
            ty,
            modifiers: Modifiers::empty(),
            constant: None,
        }
    }

    /// Sets the modifiers
    #[must_use]
    pub fn modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Sets the constant initializer value
    #[must_use]
    pub fn constant(mut self, value: i64) -> Self {
        self.constant = Some(value);
        self
    }
}

/// A declared method or constructor
#[derive(Debug, Clone, PartialEq)]
pub struct MethodDecl {
    /// Simple method name, empty for constructors
    pub name: String,
    /// Declared parameter types in order
    pub parameters: Vec<JavaType>,
    /// Declared return type, [`JavaType::Void`] for constructors
    pub return_type: JavaType,
    /// Declared modifiers
    pub modifiers: Modifiers,
}

impl MethodDecl {
    /// Creates a package-private `void` method without parameters
    pub fn new(name: impl Into<String>) -> Self {
        MethodDecl {
            name: name.into(),
            parameters: Vec::new(),
            return_type: JavaType::Void,
            modifiers: Modifiers::empty(),
        }
    }

    /// Creates a package-private constructor without parameters
    #[must_use]
    pub fn constructor() -> Self {
        MethodDecl::new("")
    }

    /// Appends a parameter
    #[must_use]
    pub fn parameter(mut self, ty: JavaType) -> Self {
        self.parameters.push(ty);
        self
    }

    /// Sets the return type
    #[must_use]
    pub fn returns(mut self, ty: JavaType) -> Self {
        self.return_type = ty;
        self
    }

    /// Sets the modifiers
    #[must_use]
    pub fn modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// A class as declared in source or bytecode
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDecl {
    name: String,
    kind: ClassKind,
    nesting: NestingKind,
    modifiers: Modifiers,
    resolved: bool,
    serializable: bool,
    interfaces: Vec<JavaType>,
    fields: Vec<FieldDecl>,
    constructors: Vec<MethodDecl>,
    methods: Vec<MethodDecl>,
    static_initializers: usize,
    suppressed_warnings: Vec<String>,
}

impl ClassDecl {
    /// Creates an empty, resolved, top-level class with the given qualified name
    pub fn new(name: impl Into<String>) -> Self {
        ClassDecl {
            name: name.into(),
            kind: ClassKind::Class,
            nesting: NestingKind::TopLevel,
            modifiers: Modifiers::empty(),
            resolved: true,
            serializable: false,
            interfaces: Vec::new(),
            fields: Vec::new(),
            constructors: Vec::new(),
            methods: Vec::new(),
            static_initializers: 0,
            suppressed_warnings: Vec::new(),
        }
    }

    /// Sets the class kind
    #[must_use]
    pub fn kind(mut self, kind: ClassKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the nesting kind
    #[must_use]
    pub fn nesting(mut self, nesting: NestingKind) -> Self {
        self.nesting = nesting;
        self
    }

    /// Sets the class modifiers
    #[must_use]
    pub fn modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Marks the class as unresolved, e.g. because its compilation unit failed attribution
    #[must_use]
    pub fn unresolved(mut self) -> Self {
        self.resolved = false;
        self
    }

    /// Marks the class as (transitively) implementing `java.io.Serializable`
    #[must_use]
    pub fn serializable(mut self) -> Self {
        self.serializable = true;
        self
    }

    /// Adds a directly implemented interface
    #[must_use]
    pub fn interface(mut self, ty: JavaType) -> Self {
        if ty == JavaType::class("java.io.Serializable") {
            self.serializable = true;
        }
        self.interfaces.push(ty);
        self
    }

    /// Adds a field
    #[must_use]
    pub fn field(mut self, field: FieldDecl) -> Self {
        self.fields.push(field);
        self
    }

    /// Adds a constructor
    #[must_use]
    pub fn constructor(mut self, constructor: MethodDecl) -> Self {
        self.constructors.push(constructor);
        self
    }

    /// Adds a method
    #[must_use]
    pub fn method(mut self, method: MethodDecl) -> Self {
        self.methods.push(method);
        self
    }

    /// Adds a `static { ... }` block
    #[must_use]
    pub fn static_initializer(mut self) -> Self {
        self.static_initializers += 1;
        self
    }

    /// Adds a `@SuppressWarnings` key
    #[must_use]
    pub fn suppress_warning(mut self, key: impl Into<String>) -> Self {
        self.suppressed_warnings.push(key.into());
        self
    }

    /// Qualified class name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared class kind
    #[must_use]
    pub fn class_kind(&self) -> ClassKind {
        self.kind
    }

    /// Declared nesting kind
    #[must_use]
    pub fn nesting_kind(&self) -> NestingKind {
        self.nesting
    }

    /// Declared class modifiers
    #[must_use]
    pub fn class_modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Whether the front end fully resolved this class
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    /// Whether the class is serializable
    #[must_use]
    pub fn is_serializable(&self) -> bool {
        self.serializable
    }

    /// Directly implemented interfaces
    #[must_use]
    pub fn interfaces(&self) -> &[JavaType] {
        &self.interfaces
    }

    /// Declared fields
    #[must_use]
    pub fn fields(&self) -> &[FieldDecl] {
        &self.fields
    }

    /// Declared constructors
    #[must_use]
    pub fn constructors(&self) -> &[MethodDecl] {
        &self.constructors
    }

    /// Declared methods
    #[must_use]
    pub fn methods(&self) -> &[MethodDecl] {
        &self.methods
    }

    /// Number of `static { ... }` blocks
    #[must_use]
    pub fn static_initializer_count(&self) -> usize {
        self.static_initializers
    }

    /// Returns true if `@SuppressWarnings` on this class lists `key`
    #[must_use]
    pub fn suppresses(&self, key: &str) -> bool {
        self.suppressed_warnings.iter().any(|k| k == key)
    }

    /// Looks up a declared field by name
    #[must_use]
    pub fn find_field(&self, name: &str) -> Option<&FieldDecl> {
        self.fields.iter().find(|f| f.name == name)
    }
}
