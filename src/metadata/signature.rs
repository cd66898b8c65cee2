//! Type references and their erased signature strings.
//!
//! Front ends describe field, parameter and return types with [`JavaType`]. The collector
//! renders them into the qualified (erased) signature form used by the canonical encoding:
//!
//! | Type                 | Signature              |
//! |----------------------|------------------------|
//! | `int`                | `I`                    |
//! | `void`               | `V`                    |
//! | `java.lang.String`   | `Ljava/lang/String;`   |
//! | `int[][]`            | `[[I`                  |
//!
//! Generic type arguments are erased by the front end before a [`JavaType`] is built; a
//! reference that the front end could not resolve is kept as [`JavaType::Unresolved`] and
//! makes signature rendering fail.

use std::fmt;

use crate::Result;

/// A type reference as seen by a front end
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum JavaType {
    /// `boolean`
    Boolean,
    /// `byte`
    Byte,
    /// `char`
    Char,
    /// `short`
    Short,
    /// `int`
    Int,
    /// `long`
    Long,
    /// `float`
    Float,
    /// `double`
    Double,
    /// `void`, only valid as a return type
    Void,
    /// A resolved class or interface, by its dotted binary name (`java.util.Map$Entry`)
    Class(String),
    /// An array of the element type
    Array(Box<JavaType>),
    /// A reference the front end could not resolve
    Unresolved(String),
}

impl JavaType {
    /// Creates a resolved class reference
    pub fn class(name: impl Into<String>) -> Self {
        JavaType::Class(name.into())
    }

    /// Creates an array type with `self` as element type
    #[must_use]
    pub fn array_of(self) -> Self {
        JavaType::Array(Box::new(self))
    }

    /// Creates an unresolved reference
    pub fn unresolved(name: impl Into<String>) -> Self {
        JavaType::Unresolved(name.into())
    }

    /// Returns true if this type, or the element type of an array, is unresolved
    #[must_use]
    pub fn is_unresolved(&self) -> bool {
        match self {
            JavaType::Unresolved(_) => true,
            JavaType::Array(element) => element.is_unresolved(),
            _ => false,
        }
    }

    /// Renders the erased signature string of this type.
    ///
    /// # Errors
    /// Returns [`crate::Error::Resolution`] if this type or its array element is unresolved.
    pub fn signature(&self) -> Result<String> {
        let mut out = String::new();
        self.write_signature(&mut out)?;
        Ok(out)
    }

    fn write_signature(&self, out: &mut String) -> Result<()> {
        match self {
            JavaType::Boolean => out.push('Z'),
            JavaType::Byte => out.push('B'),
            JavaType::Char => out.push('C'),
            JavaType::Short => out.push('S'),
            JavaType::Int => out.push('I'),
            JavaType::Long => out.push('J'),
            JavaType::Float => out.push('F'),
            JavaType::Double => out.push('D'),
            JavaType::Void => out.push('V'),
            JavaType::Class(name) => {
                out.push('L');
                out.extend(name.chars().map(|c| if c == '.' { '/' } else { c }));
                out.push(';');
            }
            JavaType::Array(element) => {
                out.push('[');
                element.write_signature(out)?;
            }
            JavaType::Unresolved(name) => {
                return Err(resolution_error!("type '{}' could not be resolved", name));
            }
        }

        Ok(())
    }
}

impl fmt::Display for JavaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JavaType::Boolean => write!(f, "boolean"),
            JavaType::Byte => write!(f, "byte"),
            JavaType::Char => write!(f, "char"),
            JavaType::Short => write!(f, "short"),
            JavaType::Int => write!(f, "int"),
            JavaType::Long => write!(f, "long"),
            JavaType::Float => write!(f, "float"),
            JavaType::Double => write!(f, "double"),
            JavaType::Void => write!(f, "void"),
            JavaType::Class(name) | JavaType::Unresolved(name) => write!(f, "{name}"),
            JavaType::Array(element) => write!(f, "{element}[]"),
        }
    }
}

/// Builds a JVM method descriptor, `(` parameters `)` return
#[must_use]
pub fn method_descriptor<S: AsRef<str>>(parameters: &[S], return_type: &str) -> String {
    let mut out = String::with_capacity(
        2 + return_type.len() + parameters.iter().map(|p| p.as_ref().len()).sum::<usize>(),
    );
    out.push('(');
    for parameter in parameters {
        out.push_str(parameter.as_ref());
    }
    out.push(')');
    out.push_str(return_type);
    out
}
