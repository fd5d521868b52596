//! Render lowered attributes as proto3 definitions
//!
//! # Example:
//! Given a `Bottle` user type with an `id` string field (tag 1) and a `rating`
//! int field (tag 2), the definition is:
//!
//! ```proto
//! message Bottle {
//! 	string id = 1;
//! 	sint32 rating = 2;
//! }
//! ```
mod printer;

pub use printer::Printer;

use crate::{
    attribute::Attribute,
    error::{bug, Bug},
    identifier::sanitize,
    message::Message,
    r#type::{Type, Types},
    scope::NameScope,
};

/// Returns the message name of the given user type attribute
pub fn message_name(types: &Types, attr: &Attribute, scope: &NameScope) -> String {
    full_message_name(types, attr, "", scope)
}

/// Returns the message name of the given user type attribute qualified with
/// the package name if not empty
pub fn full_message_name(types: &Types, attr: &Attribute, pkg: &str, scope: &NameScope) -> String {
    match &attr.ty {
        Type::User(id) => {
            let ut = types.get(*id);
            let name = scope.hashed_unique(&ut.key, &sanitize(&ut.name, true), "");
            match pkg {
                "" => name,
                pkg => format!("{}.{}", pkg, name),
            }
        }
        other => bug(Bug::NotUserType(other.kind())),
    }
}

/// Print the definitions of every message of the lowered graph, root first
pub fn print_messages(message: &Message, scope: &NameScope) -> String {
    let mut printer = Printer::new(&message.types, scope);
    printer.write_messages(message.messages());
    printer.into_string()
}

/// Returns the proto code describing the attribute type as used in a field
/// declaration, objects are rendered as message bodies.
pub fn message_def(types: &Types, attr: &Attribute, scope: &NameScope) -> String {
    match &attr.ty {
        Type::Primitive(p) => p.proto_name().to_string(),
        Type::Array(elem) => format!("repeated {}", message_def(types, elem, scope)),
        Type::Map { key, elem } => format!(
            "map<{}, {}>",
            message_def(types, key, scope),
            message_def(types, elem, scope)
        ),
        Type::User(_) => message_name(types, attr, scope),
        Type::Object(obj) => {
            let mut printer = Printer::new(types, scope);
            printer.write_body(obj);
            printer.into_string()
        }
    }
}

/// Returns the message body of the given user type or object: the part that
/// comes after `message Foo`, from " {" to "}".
pub fn message_definition(types: &Types, attr: &Attribute, scope: &NameScope) -> String {
    match &attr.ty {
        Type::User(id) => match &types.get(*id).attribute.ty {
            Type::Object(_) => message_def(types, &types.get(*id).attribute, scope),
            other => bug(Bug::NotMessage(other.kind())),
        },
        Type::Object(_) => message_def(types, attr, scope),
        other => bug(Bug::NotMessage(other.kind())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        r#type::{Object, Primitive},
        test_util::string_field,
    };
    use pretty_assertions::assert_eq;

    #[test]
    fn test_scalar_types() {
        let types = Types::new();
        let scope = NameScope::new();
        let cases = [
            (Primitive::Boolean, "bool"),
            (Primitive::Int, "sint32"),
            (Primitive::Int32, "sint32"),
            (Primitive::Int64, "sint64"),
            (Primitive::UInt, "uint32"),
            (Primitive::UInt32, "uint32"),
            (Primitive::UInt64, "uint64"),
            (Primitive::Float32, "float"),
            (Primitive::Float64, "double"),
            (Primitive::String, "string"),
            (Primitive::Bytes, "bytes"),
        ];

        for (p, expected) in cases.iter() {
            assert_eq!(message_def(&types, &Attribute::new(*p), &scope), *expected);
        }
    }

    #[test]
    fn test_collections() {
        let mut types = Types::new();
        let scope = NameScope::new();
        let bottle = types.declare("bottle", Attribute::new(Object::new()));

        let array = Attribute::new(Type::array(Attribute::new(bottle)));
        assert_eq!(message_def(&types, &array, &scope), "repeated Bottle");

        let map = Attribute::new(Type::map(
            Attribute::new(Primitive::String),
            Attribute::new(Primitive::Int64),
        ));
        assert_eq!(message_def(&types, &map, &scope), "map<string, sint64>");
    }

    #[test]
    fn test_message_definition() {
        let mut types = Types::new();
        let scope = NameScope::new();
        let user = types.declare(
            "User",
            Attribute::new(
                Object::new()
                    .with("Id", string_field(1))
                    .with("user-name", string_field(2).with_field_name("Name")),
            ),
        );

        assert_eq!(
            message_definition(&types, &Attribute::new(user), &scope),
            " {\n\tstring id = 1;\n\tstring name = 2;\n}"
        );
    }

    #[test]
    fn test_message_definition_with_description() {
        let types = Types::new();
        let scope = NameScope::new();
        let obj = Attribute::new(
            Object::new()
                .with("id", string_field(1).with_description("The bottle ID"))
                .with("tags", Attribute::new(Type::array(Attribute::new(Primitive::String))).with_tag(2)),
        );

        assert_eq!(
            message_definition(&types, &obj, &scope),
            [
                " {",
                "\t// The bottle ID",
                "\tstring id = 1;",
                "\trepeated string tags = 2;",
                "}",
            ]
            .join("\n")
        );
    }

    #[test]
    fn test_empty_message_definition() {
        let types = Types::new();
        let scope = NameScope::new();
        assert_eq!(
            message_definition(&types, &Attribute::new(Object::new()), &scope),
            " {\n}"
        );
    }

    #[test]
    fn test_full_message_name() {
        let mut types = Types::new();
        let scope = NameScope::new();
        let bottle = Attribute::new(types.declare("bottle-view", Attribute::new(Object::new())));
        assert_eq!(message_name(&types, &bottle, &scope), "BottleView");
        assert_eq!(full_message_name(&types, &bottle, "cellar", &scope), "cellar.BottleView");
    }

    #[test]
    fn test_distinct_types_with_same_name() {
        let mut types = Types::new();
        let scope = NameScope::new();
        let a = Attribute::new(types.declare("bottle", Attribute::new(Object::new())));
        let b = Attribute::new(types.declare("Bottle", Attribute::new(Object::new())));
        assert_eq!(message_name(&types, &a, &scope), "Bottle");
        assert_eq!(message_name(&types, &b, &scope), "Bottle2");
        assert_eq!(message_name(&types, &a, &scope), "Bottle");
    }

    #[test]
    #[should_panic(expected = "data type is not a user type: received type primitive string")]
    fn test_message_name_of_primitive() {
        message_name(&Types::new(), &Attribute::new(Primitive::String), &NameScope::new());
    }

    #[test]
    #[should_panic(expected = "data type is not a message: received type array")]
    fn test_message_definition_of_array() {
        let attr = Attribute::new(Type::array(Attribute::new(Primitive::String)));
        message_definition(&Types::new(), &attr, &NameScope::new());
    }
}
