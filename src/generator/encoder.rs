//! Canonical encoding of a [`TypeDescriptor`].
//!
//! The encoding is UTF-8 text, one fact per line, every line terminated by `\n` and every
//! integer written in decimal:
//!
//! ```text
//! com.example.Foo                 qualified class name
//! 1                               class modifiers & (PUBLIC | FINAL | INTERFACE | ABSTRACT)
//! java.io.Serializable            interfaces, sorted
//! count I                         fields: name signature, sorted by name
//! <clinit> 8                      only if a static initializer is present
//! <init> 1 ()V                    methods: name modifiers descriptor, sorted
//! ```
//!
//! The ordering rules are the compatibility contract of every identifier ever produced: any
//! change to the sort keys or to the set of included members changes all fingerprints.

use std::cmp::Ordering;

use crate::{
    generator::collector::{includes_field, includes_method},
    metadata::{
        descriptor::{FieldDescriptor, MethodDescriptor, TypeDescriptor, STATIC_INITIALIZER_NAME},
        modifiers::Modifiers,
    },
};

/// Produces the canonical byte stream for `descriptor`.
///
/// Members excluded from the fingerprint are skipped here as well, so hand-built
/// descriptors follow the same rules as collected ones.
#[must_use]
pub fn encode(descriptor: &TypeDescriptor) -> Vec<u8> {
    let mut out = LineWriter::default();

    out.text(descriptor.name()).end();
    out.number(descriptor.modifiers().class_signature_bits()).end();

    let mut interfaces: Vec<&str> = descriptor.interfaces().iter().map(String::as_str).collect();
    interfaces.sort_unstable();
    for interface in interfaces {
        out.text(interface).end();
    }

    let mut fields: Vec<&FieldDescriptor> = descriptor
        .fields()
        .iter()
        .filter(|field| includes_field(field))
        .collect();
    fields.sort_by(|a, b| compare_fields(a, b));
    for field in fields {
        out.text(&field.name).space().text(&field.signature).end();
    }

    let has_static_initializer = descriptor.has_static_initializer()
        || descriptor
            .methods()
            .iter()
            .any(MethodDescriptor::is_static_initializer);
    if has_static_initializer {
        out.text(STATIC_INITIALIZER_NAME)
            .space()
            .number(Modifiers::STATIC.method_signature_bits())
            .end();
    }

    let mut methods: Vec<(&MethodDescriptor, String)> = descriptor
        .methods()
        .iter()
        .filter(|method| includes_method(method))
        .map(|method| (method, method.descriptor()))
        .collect();
    methods.sort_by(|(a, a_desc), (b, b_desc)| {
        a.name
            .cmp(&b.name)
            .then_with(|| a_desc.cmp(b_desc))
            .then_with(|| {
                a.modifiers
                    .method_signature_bits()
                    .cmp(&b.modifiers.method_signature_bits())
            })
    });
    for (method, method_desc) in methods {
        out.text(&method.name)
            .space()
            .number(method.modifiers.method_signature_bits())
            .space()
            .text(&method_desc)
            .end();
    }

    out.finish()
}

fn compare_fields(a: &FieldDescriptor, b: &FieldDescriptor) -> Ordering {
    a.name
        .cmp(&b.name)
        .then_with(|| a.signature.cmp(&b.signature))
}

#[derive(Default)]
struct LineWriter {
    buffer: Vec<u8>,
}

impl LineWriter {
    fn text(&mut self, text: &str) -> &mut Self {
        self.buffer.extend_from_slice(text.as_bytes());
        self
    }

    fn number(&mut self, value: u32) -> &mut Self {
        self.text(&value.to_string())
    }

    fn space(&mut self) -> &mut Self {
        self.buffer.push(b' ');
        self
    }

    fn end(&mut self) -> &mut Self {
        self.buffer.push(b'\n');
        self
    }

    fn finish(self) -> Vec<u8> {
        self.buffer
    }
}
