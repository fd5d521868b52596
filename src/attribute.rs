use crate::{
    metadata::{Meta, FIELD_NAME_KEY, RPC_TAG_KEY},
    r#type::Type,
};

/// Attribute is a typed and optionally documented node of the type model
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    /// The data type
    pub ty: Type,

    /// Optional description, rendered as a comment
    pub description: Option<String>,

    /// Metadata attached to this attribute
    pub meta: Meta,
}

impl Attribute {
    pub fn new<T: Into<Type>>(ty: T) -> Self {
        Self {
            ty: ty.into(),
            description: None,
            meta: Meta::new(),
        }
    }

    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_meta<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.meta.insert(key, vec![value.into()]);
        self
    }

    /// Set the protocol buffer field number
    pub fn with_tag(self, tag: u64) -> Self {
        self.with_meta(RPC_TAG_KEY, tag.to_string())
    }

    /// Override the field name
    pub fn with_field_name<S: Into<String>>(self, name: S) -> Self {
        self.with_meta(FIELD_NAME_KEY, name)
    }
}

/// NamedAttribute is a field of an [`crate::Object`]
#[derive(Debug, Clone, PartialEq)]
pub struct NamedAttribute {
    pub name: String,
    pub attribute: Attribute,
}

impl NamedAttribute {
    pub fn new<S: Into<String>>(name: S, attribute: Attribute) -> Self {
        Self {
            name: name.into(),
            attribute,
        }
    }
}
