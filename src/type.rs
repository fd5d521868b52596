use crate::{
    attribute::{Attribute, NamedAttribute},
    error::{bug, Bug},
};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Primitive represents the scalar kinds of the attribute model
#[derive(Display, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Primitive {
    #[display(fmt = "boolean")]
    Boolean,

    #[display(fmt = "int")]
    Int,

    #[display(fmt = "int32")]
    Int32,

    #[display(fmt = "int64")]
    Int64,

    #[display(fmt = "uint")]
    UInt,

    #[display(fmt = "uint32")]
    UInt32,

    #[display(fmt = "uint64")]
    UInt64,

    #[display(fmt = "float32")]
    Float32,

    #[display(fmt = "float64")]
    Float64,

    #[display(fmt = "string")]
    String,

    #[display(fmt = "bytes")]
    Bytes,
}

/// The kind of a [`Type`], used to report unexpected types
#[derive(Display, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    #[display(fmt = "primitive {}", _0)]
    Primitive(Primitive),

    #[display(fmt = "array")]
    Array,

    #[display(fmt = "map")]
    Map,

    #[display(fmt = "object")]
    Object,

    #[display(fmt = "user type")]
    User,
}

/// Type is the data type of an attribute
#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    Primitive(Primitive),

    /// Ordered homogeneous collection
    Array(Box<Attribute>),

    /// Key => value collection. Keys are always primitives.
    Map {
        key: Box<Attribute>,
        elem: Box<Attribute>,
    },

    /// Anonymous composite with named fields
    Object(Object),

    /// Reference to a user type defined in a [`Types`] arena
    User(UserTypeId),
}

impl Type {
    pub fn array(elem: Attribute) -> Self {
        Type::Array(Box::new(elem))
    }

    pub fn map(key: Attribute, elem: Attribute) -> Self {
        Type::Map {
            key: Box::new(key),
            elem: Box::new(elem),
        }
    }

    pub fn kind(&self) -> Kind {
        match self {
            Type::Primitive(p) => Kind::Primitive(*p),
            Type::Array(_) => Kind::Array,
            Type::Map { .. } => Kind::Map,
            Type::Object(_) => Kind::Object,
            Type::User(_) => Kind::User,
        }
    }

    pub fn is_collection(&self) -> bool {
        matches!(self, Type::Array(_) | Type::Map { .. })
    }
}

impl From<Primitive> for Type {
    fn from(p: Primitive) -> Self {
        Type::Primitive(p)
    }
}

impl From<Object> for Type {
    fn from(obj: Object) -> Self {
        Type::Object(obj)
    }
}

impl From<UserTypeId> for Type {
    fn from(id: UserTypeId) -> Self {
        Type::User(id)
    }
}

/// Object is an ordered list of named attributes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Object(pub Vec<NamedAttribute>);

impl Object {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a field
    pub fn with<S: Into<String>>(mut self, name: S, attribute: Attribute) -> Self {
        self.0.push(NamedAttribute::new(name, attribute));
        self
    }

    /// Get the field attribute with the given name
    pub fn find(&self, name: &str) -> Option<&Attribute> {
        self.0
            .iter()
            .find(|nat| nat.name == name)
            .map(|nat| &nat.attribute)
    }

    pub fn iter(&self) -> impl Iterator<Item = &NamedAttribute> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut NamedAttribute> {
        self.0.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

static NEXT_KEY: AtomicU64 = AtomicU64::new(1);

/// TypeKey is the identity of a user type, independent of its name
#[derive(Display, Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeKey {
    /// A type declared in the source graph
    #[display(fmt = "#{}", _0)]
    Declared(u64),

    /// A wrapper synthesized while lowering. Wrappers with the same name
    /// have the same shape and share their identity.
    #[display(fmt = "synthetic:{}", _0)]
    Synthetic(String),
}

impl TypeKey {
    fn declared() -> Self {
        TypeKey::Declared(NEXT_KEY.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserKind {
    Type,

    /// A result type, may be a collection of results
    ResultType,

    /// The explicit empty placeholder type
    Empty,
}

/// A handle on a user type stored in a [`Types`] arena
#[derive(Display, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[display(fmt = "${}", _0)]
pub struct UserTypeId(usize);

/// UserType is a named, identity bearing composite type
#[derive(Debug, Clone, PartialEq)]
pub struct UserType {
    pub name: String,
    pub key: TypeKey,
    pub kind: UserKind,
    pub attribute: Attribute,
}

impl UserType {
    /// A result type whose attribute is an array
    pub fn is_result_collection(&self) -> bool {
        self.kind == UserKind::ResultType && matches!(self.attribute.ty, Type::Array(_))
    }

    pub fn is_empty(&self) -> bool {
        self.kind == UserKind::Empty
    }
}

/// Types owns every user type of a type graph.
/// Cloning the arena duplicates the whole graph, identities included.
#[derive(Debug, Clone, Default)]
pub struct Types {
    user_types: Vec<UserType>,
}

impl Types {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a new user type
    pub fn declare<S: Into<String>>(&mut self, name: S, attribute: Attribute) -> UserTypeId {
        self.insert(name.into(), TypeKey::declared(), UserKind::Type, attribute)
    }

    /// Declare a new result type
    pub fn declare_result<S: Into<String>>(&mut self, name: S, attribute: Attribute) -> UserTypeId {
        self.insert(name.into(), TypeKey::declared(), UserKind::ResultType, attribute)
    }

    /// Declare a user type without its attribute, so that it can be
    /// referenced from its own definition. See [`Types::set_attribute`].
    pub fn forward<S: Into<String>>(&mut self, name: S) -> UserTypeId {
        self.declare(name, Attribute::new(Object::new()))
    }

    /// Declare the empty placeholder type
    pub fn empty(&mut self) -> UserTypeId {
        self.insert(
            "Empty".to_string(),
            TypeKey::declared(),
            UserKind::Empty,
            Attribute::new(Object::new()),
        )
    }

    /// Add a type synthesized by the lowering
    pub(crate) fn synthesize(&mut self, name: String, attribute: Attribute) -> UserTypeId {
        let key = TypeKey::Synthetic(name.clone());
        self.insert(name, key, UserKind::Type, attribute)
    }

    /// Replace the attribute of the given user type
    pub fn set_attribute(&mut self, id: UserTypeId, attribute: Attribute) {
        self.get_mut(id).attribute = attribute;
    }

    pub fn get(&self, id: UserTypeId) -> &UserType {
        self.user_types
            .get(id.0)
            .unwrap_or_else(|| bug(Bug::UnknownUserType(id)))
    }

    pub fn get_mut(&mut self, id: UserTypeId) -> &mut UserType {
        self.user_types
            .get_mut(id.0)
            .unwrap_or_else(|| bug(Bug::UnknownUserType(id)))
    }

    /// Returns true if the type is an object or a user type defined as an object
    pub fn is_object(&self, ty: &Type) -> bool {
        match ty {
            Type::Object(_) => true,
            Type::User(id) => matches!(self.get(*id).attribute.ty, Type::Object(_)),
            _ => false,
        }
    }

    pub fn len(&self) -> usize {
        self.user_types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.user_types.is_empty()
    }

    fn insert(
        &mut self,
        name: String,
        key: TypeKey,
        kind: UserKind,
        attribute: Attribute,
    ) -> UserTypeId {
        let id = UserTypeId(self.user_types.len());
        self.user_types.push(UserType {
            name,
            key,
            kind,
            attribute,
        });
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_names_round_trip_through_serde() {
        let json = r#"["boolean","int","uint64","float32","bytes"]"#;
        let primitives: Vec<Primitive> = serde_json::from_str(json).unwrap();

        assert_eq!(
            primitives,
            vec![
                Primitive::Boolean,
                Primitive::Int,
                Primitive::UInt64,
                Primitive::Float32,
                Primitive::Bytes,
            ]
        );
        for p in primitives {
            assert_eq!(serde_json::to_string(&p).unwrap(), format!("\"{}\"", p));
        }
    }

    #[test]
    fn test_clone_preserves_identity() {
        let mut types = Types::new();
        let id = types.declare("Bottle", Attribute::new(Object::new()));
        let dup = types.clone();
        assert_eq!(types.get(id).key, dup.get(id).key);
    }

    #[test]
    fn test_declared_types_have_distinct_keys() {
        let mut types = Types::new();
        let a = types.declare("Bottle", Attribute::new(Object::new()));
        let b = types.declare("Bottle", Attribute::new(Object::new()));
        assert_ne!(types.get(a).key, types.get(b).key);
    }

    #[test]
    fn test_result_collection() {
        let mut types = Types::new();
        let elem = types.declare("Bottle", Attribute::new(Object::new()));
        let rt = types.declare_result("BottleCollection", Attribute::new(Type::array(Attribute::new(elem))));
        let single = types.declare_result("BottleView", Attribute::new(Object::new()));
        assert!(types.get(rt).is_result_collection());
        assert!(!types.get(single).is_result_collection());
        assert!(!types.get(elem).is_result_collection());
    }

    #[test]
    #[should_panic(expected = "user type $3 is not defined in this graph")]
    fn test_unknown_user_type() {
        let _ = Types::new().get(UserTypeId(3));
    }

    #[test]
    fn test_forward_declaration() {
        let mut types = Types::new();
        let node = types.forward("Node");
        types.set_attribute(
            node,
            Attribute::new(Object::new().with("next", Attribute::new(node).with_tag(1))),
        );

        match &types.get(node).attribute.ty {
            Type::Object(obj) => assert_eq!(obj.find("next").map(|a| &a.ty), Some(&Type::User(node))),
            other => panic!("unexpected type {:?}", other),
        }
    }
}
