//! Structural descriptors consumed by the identifier computation.
//!
//! A [`TypeDescriptor`] is the complete, already resolved description of one class: its name,
//! modifiers, interfaces, fields, constructors, methods and whether it carries a static
//! initializer. All type information is held as erased signature strings, so the descriptor
//! is independent of any particular compiler front end. Descriptors own their members by
//! value and are immutable once built.
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
//! assert_eq!(descriptor.fields().len(), 1);
//! assert!(descriptor.methods()[0].is_constructor());
//! ```

use crate::metadata::{modifiers::Modifiers, signature::method_descriptor};

/// Name under which constructors appear in the method list
pub const CONSTRUCTOR_NAME: &str = "<init>";

/// Name of the synthetic static initializer entry
pub const STATIC_INITIALIZER_NAME: &str = "<clinit>";

/// A field of a [`TypeDescriptor`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldDescriptor {
    /// Simple field name
    pub name: String,
    /// Erased type signature (`I`, `Ljava/lang/String;`, `[B`, ...)
    pub signature: String,
    /// Declared modifiers
    pub modifiers: Modifiers,
}

impl FieldDescriptor {
    /// Creates a new field descriptor
    pub fn new(
        name: impl Into<String>,
        signature: impl Into<String>,
        modifiers: Modifiers,
    ) -> Self {
        FieldDescriptor {
            name: name.into(),
            signature: signature.into(),
            modifiers,
        }
    }
}

/// A method or constructor of a [`TypeDescriptor`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodDescriptor {
    /// Method name, [`CONSTRUCTOR_NAME`] for constructors
    pub name: String,
    /// Erased parameter signatures in declaration order
    pub parameters: Vec<String>,
    /// Erased return signature, `V` for constructors
    pub return_type: String,
    /// Declared modifiers
    pub modifiers: Modifiers,
}

impl MethodDescriptor {
    /// Creates a new method descriptor
    pub fn new(
        name: impl Into<String>,
        parameters: Vec<String>,
        return_type: impl Into<String>,
        modifiers: Modifiers,
    ) -> Self {
        MethodDescriptor {
            name: name.into(),
            parameters,
            return_type: return_type.into(),
            modifiers,
        }
    }

    /// Creates a constructor descriptor (`<init>`, returning `V`)
    pub fn constructor<S: Into<String>>(parameters: Vec<S>, modifiers: Modifiers) -> Self {
        MethodDescriptor {
            name: CONSTRUCTOR_NAME.to_string(),
            parameters: parameters.into_iter().map(Into::into).collect(),
            return_type: "V".to_string(),
            modifiers,
        }
    }

    /// Returns true if this entry describes a constructor
    #[must_use]
    pub fn is_constructor(&self) -> bool {
        self.name == CONSTRUCTOR_NAME
    }

    /// Returns true if this entry describes a static initializer
    #[must_use]
    pub fn is_static_initializer(&self) -> bool {
        self.name == STATIC_INITIALIZER_NAME
    }

    /// The JVM method descriptor, e.g. `(ILjava/lang/String;)V`
    #[must_use]
    pub fn descriptor(&self) -> String {
        method_descriptor(&self.parameters, &self.return_type)
    }
}

/// The resolved structure of one class
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeDescriptor {
    name: String,
    modifiers: Modifiers,
    interfaces: Vec<String>,
    fields: Vec<FieldDescriptor>,
    methods: Vec<MethodDescriptor>,
    has_static_initializer: bool,
}

impl TypeDescriptor {
    /// Starts building a descriptor for the class with the given qualified name
    pub fn builder(name: impl Into<String>) -> TypeDescriptorBuilder {
        TypeDescriptorBuilder {
            descriptor: TypeDescriptor {
                name: name.into(),
                modifiers: Modifiers::empty(),
                interfaces: Vec::new(),
                fields: Vec::new(),
                methods: Vec::new(),
                has_static_initializer: false,
            },
        }
    }

    /// Qualified class name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Class modifiers
    #[must_use]
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Qualified names of the directly implemented interfaces
    #[must_use]
    pub fn interfaces(&self) -> &[String] {
        &self.interfaces
    }

    /// Declared fields, in declaration order
    #[must_use]
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Declared constructors and methods, in declaration order
    #[must_use]
    pub fn methods(&self) -> &[MethodDescriptor] {
        &self.methods
    }

    /// Whether the class declares at least one static initializer
    #[must_use]
    pub fn has_static_initializer(&self) -> bool {
        self.has_static_initializer
    }
}

/// Builder for [`TypeDescriptor`]
#[derive(Debug, Clone)]
pub struct TypeDescriptorBuilder {
    descriptor: TypeDescriptor,
}

impl TypeDescriptorBuilder {
    /// Sets the class modifiers
    #[must_use]
    pub fn modifiers(mut self, modifiers: Modifiers) -> Self {
        self.descriptor.modifiers = modifiers;
        self
    }

    /// Adds an implemented interface by qualified name
    #[must_use]
    pub fn interface(mut self, name: impl Into<String>) -> Self {
        self.descriptor.interfaces.push(name.into());
        self
    }

    /// Adds a field
    #[must_use]
    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.descriptor.fields.push(field);
        self
    }

    /// Adds a method or constructor
    #[must_use]
    pub fn method(mut self, method: MethodDescriptor) -> Self {
        self.descriptor.methods.push(method);
        self
    }

    /// Marks the presence of a static initializer
    #[must_use]
    pub fn static_initializer(mut self, present: bool) -> Self {
        self.descriptor.has_static_initializer = present;
        self
    }

    /// Finishes the descriptor
    #[must_use]
    pub fn build(self) -> TypeDescriptor {
        self.descriptor
    }
}
