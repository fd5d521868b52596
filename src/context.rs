use crate::{attribute::Attribute, identifier, native, proto, r#type::Types, scope::NameScope};

/// TypeContext names the protocol buffer types of one lowered graph.
/// References are qualified with the context package when it is not empty.
#[derive(Debug, Clone, Copy)]
pub struct TypeContext<'a> {
    types: &'a Types,
    scope: &'a NameScope,
    package: &'a str,
}

impl<'a> TypeContext<'a> {
    /// Context for references made from within the protocol buffer package
    pub fn new(types: &'a Types, scope: &'a NameScope) -> Self {
        Self::with_package(types, scope, "")
    }

    /// Context for references made from another package
    pub fn with_package(types: &'a Types, scope: &'a NameScope, package: &'a str) -> Self {
        Self {
            types,
            scope,
            package,
        }
    }

    /// The native type name
    pub fn name(&self, attr: &Attribute) -> String {
        native::full_type_name(self.types, attr, self.package, self.scope)
    }

    /// The native type reference
    pub fn reference(&self, attr: &Attribute) -> String {
        native::full_type_ref(self.types, attr, self.package, self.scope)
    }

    /// The field name as generated by the protocol buffer compiler
    pub fn field(&self, attr: &Attribute, name: &str, first_upper: bool) -> String {
        identifier::field_name(attr, name, first_upper)
    }

    /// The message name, qualified with the package
    pub fn message_name(&self, attr: &Attribute) -> String {
        proto::full_message_name(self.types, attr, self.package, self.scope)
    }

    pub fn types(&self) -> &'a Types {
        self.types
    }

    pub fn scope(&self) -> &'a NameScope {
        self.scope
    }

    pub fn package(&self) -> &'a str {
        self.package
    }
}
