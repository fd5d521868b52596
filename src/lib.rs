//! Lower an attribute type model into Protocol Buffer messages.
//!
//! The lowering runs in two steps: [`message::make_message`] turns any
//! attribute into a message-shaped graph (wrapping primitives, collections and
//! nested collections into synthesized messages), then the [`proto`] and
//! [`native`] emitters render the same graph as `.proto` text and as the native
//! type references exposed by the compiled bindings.

pub mod attribute;
pub mod case;
pub mod comment;
pub mod context;
pub mod error;
pub mod identifier;
pub mod message;
pub mod metadata;
pub mod native;
pub mod proto;
mod scalar;
pub mod scope;
pub mod r#type;

#[cfg(test)]
pub(crate) mod test_util;

pub use attribute::{Attribute, NamedAttribute};
pub use context::TypeContext;
pub use message::{make_message, Message};
pub use metadata::Meta;
pub use r#type::{Object, Primitive, Type, TypeKey, Types, UserKind, UserType, UserTypeId};
pub use scope::NameScope;
