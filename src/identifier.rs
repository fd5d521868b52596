//! Protocol buffer identifiers.
//!
//! Every message and field name goes through [`sanitize`] so that the `.proto`
//! file and the native bindings agree on identifiers.
use crate::{
    attribute::Attribute,
    case::{camel_case, snake_case},
    scalar::RESERVED,
};
use lazy_static::lazy_static;
use regex::Regex;

/// Name of the single field of synthesized wrapper messages
pub const WRAPPER_FIELD: &str = "field";

/// Make a valid protocol buffer identifier out of any string.
///
/// Any transport specific suffix (`name:alias`) is dropped, non letter and non
/// digit characters are removed and the result is CamelCase, with a leading
/// uppercase letter if first_upper is true. Reserved words get a trailing
/// underscore.
pub fn sanitize(raw: &str, first_upper: bool) -> String {
    if raw.is_empty() {
        return String::new();
    }

    lazy_static! {
        static ref INVALID_CHARS: Regex = Regex::new(r"[^\p{L}\p{N}]+").unwrap();
    }

    let raw = match raw.find(':') {
        Some(idx) if idx > 0 => &raw[..idx],
        _ => raw,
    };

    let words = INVALID_CHARS.replace_all(raw, " ");
    let ident = camel_case(words.trim(), first_upper);
    if ident.is_empty() {
        return match first_upper {
            true => "Val".to_string(),
            false => "val".to_string(),
        };
    }

    fix_reserved(ident)
}

/// Append an underscore to reserved protocol buffer words
fn fix_reserved(mut ident: String) -> String {
    if RESERVED.contains(ident.to_lowercase().as_str()) {
        ident.push('_');
    }
    ident
}

/// Returns the field name generated by the protocol buffer compiler for the
/// native bindings, honoring any `struct:field:name` override.
/// The name goes through snake_case first so that `APIKey` yields `ApiKey`.
pub fn field_name(attr: &Attribute, raw: &str, first_upper: bool) -> String {
    let raw = snake_case(attr.meta.field_name().unwrap_or(raw));
    sanitize(&raw, first_upper)
}

/// Returns the lower snake_case field name used in the `.proto` file
pub fn schema_field_name(attr: &Attribute, raw: &str) -> String {
    let ident = field_name(attr, raw, false);
    // keep the reserved word suffix, snake_case would drop it
    match ident.strip_suffix('_') {
        Some(reserved) => format!("{}_", snake_case(reserved)),
        None => snake_case(&ident),
    }
}
