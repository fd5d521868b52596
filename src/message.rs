//! Turn arbitrary attributes into valid protocol buffer messages.
//!
//! Protocol buffer only accepts messages at the top level and does not support
//! nested collections (`repeated repeated`, `map<K, map<..>>`...).
//! [`make_message`] works on a private copy of the type graph and:
//!
//! - wraps primitives, arrays, maps and result collections into a message
//!   with a single field named `field` (tag 1),
//! - wraps inner arrays and maps of nested collections into intermediate
//!   messages (`ArrayOfX`, `MapOfKV`).
use crate::{
    attribute::Attribute,
    error::{bug, Bug},
    identifier::{sanitize, WRAPPER_FIELD},
    proto::{full_message_name, message_def, message_definition},
    r#type::{Object, Type, TypeKey, Types, UserTypeId},
    scope::NameScope,
};
use std::{collections::HashSet, mem};
use tracing::{debug, trace};

/// Message is a lowered attribute together with its own copy of the type
/// graph. The attribute type is always a user type.
#[derive(Debug, Clone)]
pub struct Message {
    pub types: Types,
    pub attribute: Attribute,
}

impl Message {
    /// The user type defining the message
    pub fn id(&self) -> UserTypeId {
        match &self.attribute.ty {
            Type::User(id) => *id,
            other => bug(Bug::NotUserType(other.kind())),
        }
    }

    pub fn name(&self, scope: &NameScope) -> String {
        self.full_name("", scope)
    }

    pub fn full_name(&self, pkg: &str, scope: &NameScope) -> String {
        full_message_name(&self.types, &self.attribute, pkg, scope)
    }

    /// The message body, see [`crate::proto::message_definition`]
    pub fn definition(&self, scope: &NameScope) -> String {
        message_definition(&self.types, &self.attribute, scope)
    }

    /// Returns every message reachable from the root, root first. Each type
    /// identity is listed once.
    pub fn messages(&self) -> Vec<UserTypeId> {
        let mut collector = Collector {
            types: &self.types,
            seen: HashSet::new(),
            keys: HashSet::new(),
            messages: Vec::new(),
        };
        collector.collect(&self.attribute);
        collector.messages
    }
}

/// Lower the attribute into a message named `name`, see the module docs
pub fn make_message(types: &Types, attr: &Attribute, name: &str, scope: &NameScope) -> Message {
    let mut message = materialize(types, attr, name);
    flatten(&mut message, "", scope);
    message
}

/// Returns a copy of the attribute whose type is a user type defined as an
/// object. The caller's graph is left untouched.
pub fn materialize(types: &Types, attr: &Attribute, name: &str) -> Message {
    let mut types = types.clone();
    let mut attr = attr.clone();

    match &attr.ty {
        Type::Primitive(_) | Type::Array(_) | Type::Map { .. } => {
            wrap_attr(&mut types, &mut attr, name);
        }
        Type::User(id) => {
            let id = *id;
            let ut = types.get(id);
            if ut.is_empty() {
                // empty payloads still get their own message definition
                let id = types.synthesize(name.to_string(), Attribute::new(Object::new()));
                attr.ty = Type::User(id);
            } else if ut.is_result_collection() {
                wrap_attr(&mut types, &mut attr, name);
            }
        }
        Type::Object(_) => {
            let id = types.synthesize(name.to_string(), attr.clone());
            attr.ty = Type::User(id);
        }
    }

    debug!(type_name = name, kind = %attr.ty.kind(), "materialized message");
    Message {
        types,
        attribute: attr,
    }
}

/// Wrap the nested arrays and maps of the message into intermediate
/// messages. Wrapper names embed name_hint: `ArrayOf{hint}...`, `{hint}MapOf...`.
pub fn flatten(message: &mut Message, name_hint: &str, scope: &NameScope) {
    let Message { types, attribute } = message;
    let mut flattener = Flattener {
        types,
        scope,
        name_hint,
        seen: HashSet::new(),
    };
    flattener.flatten(attribute);
}

/// Returns the attribute held by the `field` field of a wrapper message, or
/// the attribute itself if it is not a wrapper.
pub fn unwrap_attr<'a>(types: &'a Types, attr: &'a Attribute) -> &'a Attribute {
    let obj = match &attr.ty {
        Type::Object(obj) => Some(obj),
        Type::User(id) => match &types.get(*id).attribute.ty {
            Type::Object(obj) => Some(obj),
            _ => None,
        },
        _ => None,
    };

    obj.and_then(|obj| obj.find(WRAPPER_FIELD)).unwrap_or(attr)
}

/// Make the attribute type a user type with a single field named "field"
/// holding the current type. User types are wrapped in place.
fn wrap_attr(types: &mut Types, attr: &mut Attribute, name: &str) {
    match attr.ty {
        Type::User(id) => wrap_user(types, id),
        _ => {
            let ty = mem::replace(&mut attr.ty, Type::Object(Object::new()));
            let id = types.synthesize(name.to_string(), Attribute::new(wrapper(ty)));
            attr.ty = Type::User(id);
        }
    }
}

fn wrap_user(types: &mut Types, id: UserTypeId) {
    let ut = types.get_mut(id);
    let ty = mem::replace(&mut ut.attribute.ty, Type::Object(Object::new()));
    ut.attribute.ty = Type::Object(wrapper(ty));
}

fn wrapper(ty: Type) -> Object {
    Object::new().with(WRAPPER_FIELD, Attribute::new(ty).with_tag(1))
}

/// Flattener walks the graph once, each user type is visited at most once
struct Flattener<'a> {
    types: &'a mut Types,
    scope: &'a NameScope,
    name_hint: &'a str,
    seen: HashSet<UserTypeId>,
}

impl<'a> Flattener<'a> {
    fn flatten(&mut self, attr: &mut Attribute) {
        match &mut attr.ty {
            Type::Primitive(_) => {}
            Type::User(id) => {
                let id = *id;
                if !self.seen.insert(id) {
                    trace!(%id, "user type already visited");
                    return;
                }

                if self.types.get(id).is_result_collection() {
                    wrap_user(self.types, id);
                }

                // the user type attribute is detached while its children are
                // visited, revisits stop at the seen check
                let detached = Attribute::new(Object::new());
                let mut inner = mem::replace(&mut self.types.get_mut(id).attribute, detached);
                self.flatten(&mut inner);
                self.types.get_mut(id).attribute = inner;
            }
            Type::Array(elem) => {
                self.flatten(elem);
                self.wrap_nested(elem);
            }
            Type::Map { elem, .. } => {
                // map keys are always primitives
                self.flatten(elem);
                self.wrap_nested(elem);
            }
            Type::Object(obj) => {
                for nat in obj.iter_mut() {
                    self.flatten(&mut nat.attribute);
                }
            }
        }
    }

    /// Wrap the collection element if it is itself a collection. The element
    /// children are already flattened so the wrapper name embeds their final
    /// names.
    fn wrap_nested(&mut self, elem: &mut Attribute) {
        let name = match &elem.ty {
            Type::Array(inner) => format!(
                "ArrayOf{}{}",
                self.name_hint,
                sanitize(&message_def(self.types, inner, self.scope), true)
            ),
            Type::Map { key, elem } => format!(
                "{}MapOf{}{}",
                self.name_hint,
                sanitize(&message_def(self.types, key, self.scope), true),
                sanitize(&message_def(self.types, elem, self.scope), true)
            ),
            _ => return,
        };

        trace!(%name, "wrapping nested collection");
        wrap_attr(self.types, elem, &name);
    }
}

/// Collector gathers the user types that define a message
struct Collector<'a> {
    types: &'a Types,
    seen: HashSet<UserTypeId>,
    keys: HashSet<TypeKey>,
    messages: Vec<UserTypeId>,
}

impl<'a> Collector<'a> {
    fn collect(&mut self, attr: &'a Attribute) {
        match &attr.ty {
            Type::Primitive(_) => {}
            Type::Array(elem) => self.collect(elem),
            Type::Map { key, elem } => {
                self.collect(key);
                self.collect(elem);
            }
            Type::Object(obj) => {
                for nat in obj.iter() {
                    self.collect(&nat.attribute);
                }
            }
            Type::User(id) => {
                if !self.seen.insert(*id) {
                    return;
                }

                let types = self.types;
                let ut = types.get(*id);
                if matches!(ut.attribute.ty, Type::Object(_)) && self.keys.insert(ut.key.clone()) {
                    self.messages.push(*id);
                }
                self.collect(&ut.attribute);
            }
        }
    }
}
