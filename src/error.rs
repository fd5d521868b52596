use crate::r#type::{Kind, UserTypeId};
use std::num::ParseIntError;
use thiserror::Error;

/// Bug describes a broken invariant: either the upstream validation let an
/// invalid graph through or the lowering itself is wrong. None of these are
/// recoverable, they are reported through [`bug`].
#[derive(Error, Debug, PartialEq)]
pub enum Bug {
    #[error("data type is not a user type: received type {0}")]
    NotUserType(Kind),

    #[error("data type is not a message: received type {0}")]
    NotMessage(Kind),

    #[error("user type {0} is not defined in this graph")]
    UnknownUserType(UserTypeId),

    #[error("cannot compute native protocol buffer type for {0}")]
    UnknownScalar(String),

    #[error("missing rpc:tag on field {0}")]
    MissingTag(String),

    #[error("invalid rpc:tag \"{value}\": {source}")]
    InvalidTag {
        value: String,
        source: ParseIntError,
    },
}

/// Abort with the given invariant violation
pub fn bug(error: Bug) -> ! {
    panic!("{}", error)
}
