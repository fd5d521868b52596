//! Native type references of the compiled protocol buffer bindings
//!
//! The names match the ones generated by the protocol buffer compiler so that
//! glue code can convert between the bindings and the attribute types:
//!
//! | attribute              | proto                   | native             |
//! |------------------------|-------------------------|--------------------|
//! | `Int`, `Int32`         | `sint32`                | `int32`            |
//! | `Array<Bottle>`        | `repeated Bottle`       | `[]*Bottle`        |
//! | `Map<String, Float64>` | `map<string, double>`   | `map[string]float64` |
//! | `Bottle`               | `Bottle`                | `*Bottle`          |
mod constants;

use self::constants::TYPE_MAPPING;
use crate::{
    attribute::Attribute,
    error::{bug, Bug},
    identifier::field_name,
    proto::full_message_name,
    r#type::{Primitive, Type, Types},
    scope::NameScope,
};
use std::fmt::Write;

impl Primitive {
    /// The native type generated for this primitive
    pub fn native_name(self) -> &'static str {
        let proto = self.proto_name();
        match TYPE_MAPPING.get(proto) {
            Some(name) => *name,
            None => bug(Bug::UnknownScalar(proto.to_string())),
        }
    }
}

/// Returns the native type name of the attribute
pub fn type_name(types: &Types, attr: &Attribute, scope: &NameScope) -> String {
    full_type_name(types, attr, "", scope)
}

/// Returns the native type name of the attribute, message names are qualified
/// with the package name if not empty.
pub fn full_type_name(types: &Types, attr: &Attribute, pkg: &str, scope: &NameScope) -> String {
    match &attr.ty {
        Type::User(_) => full_message_name(types, attr, pkg, scope),
        Type::Primitive(p) => p.native_name().to_string(),
        Type::Array(elem) => format!("[]{}", full_type_ref(types, elem, pkg, scope)),
        Type::Map { key, elem } => format!(
            "map[{}]{}",
            full_type_ref(types, key, pkg, scope),
            full_type_ref(types, elem, pkg, scope)
        ),
        Type::Object(_) => type_def(types, attr, pkg, scope),
    }
}

/// Returns the native code referring to the attribute type: messages are
/// referenced through pointers, other types by value.
pub fn type_ref(types: &Types, attr: &Attribute, scope: &NameScope) -> String {
    full_type_ref(types, attr, "", scope)
}

/// Same as [`type_ref`] with message names qualified with the package name
pub fn full_type_ref(types: &Types, attr: &Attribute, pkg: &str, scope: &NameScope) -> String {
    let name = full_type_name(types, attr, pkg, scope);
    if types.is_object(&attr.ty) {
        format!("*{}", name)
    } else {
        name
    }
}

/// Returns the native struct definition of an inline object
pub fn type_def(types: &Types, attr: &Attribute, pkg: &str, scope: &NameScope) -> String {
    let obj = match &attr.ty {
        Type::Object(obj) => obj,
        Type::User(id) => match &types.get(*id).attribute.ty {
            Type::Object(obj) => obj,
            other => bug(Bug::NotMessage(other.kind())),
        },
        other => bug(Bug::NotMessage(other.kind())),
    };

    let mut def = String::from("struct {\n");
    for nat in obj.iter() {
        writeln!(
            def,
            "\t{} {}",
            field_name(&nat.attribute, &nat.name, true),
            full_type_ref(types, &nat.attribute, pkg, scope)
        )
        .expect("Not written");
    }
    def.push('}');
    def
}
