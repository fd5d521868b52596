use crate::{
    attribute::Attribute,
    r#type::{Primitive, Type, Types, UserTypeId},
};
use std::collections::HashSet;

/// A field of the given primitive type and tag
pub fn field(p: Primitive, tag: u64) -> Attribute {
    Attribute::new(p).with_tag(tag)
}

pub fn string_field(tag: u64) -> Attribute {
    field(Primitive::String, tag)
}

/// Assert that no collection reachable from attr holds another collection
pub fn assert_flat(types: &Types, attr: &Attribute) {
    fn walk(types: &Types, attr: &Attribute, seen: &mut HashSet<UserTypeId>) {
        match &attr.ty {
            Type::Primitive(_) => {}
            Type::Array(elem) => {
                assert!(!elem.ty.is_collection(), "nested collection in array: {:?}", elem.ty);
                walk(types, elem, seen);
            }
            Type::Map { key, elem } => {
                assert!(!key.ty.is_collection(), "collection map key: {:?}", key.ty);
                assert!(!elem.ty.is_collection(), "nested collection in map: {:?}", elem.ty);
                walk(types, elem, seen);
            }
            Type::Object(obj) => {
                for nat in obj.iter() {
                    walk(types, &nat.attribute, seen);
                }
            }
            Type::User(id) => {
                if seen.insert(*id) {
                    walk(types, &types.get(*id).attribute, seen);
                }
            }
        }
    }

    walk(types, attr, &mut HashSet::new());
}
