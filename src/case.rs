//! Case conversion helpers.
//!
//! Acronyms are never preserved: `api_key` becomes `ApiKey`, not `APIKey`,
//! which is what the protocol buffer compiler generates.
use convert_case::{Boundary, Case, Casing, Converter};

/// Convert to snake_case. Digits stay attached to the preceding word so that
/// `field1` is not turned into `field_1`.
pub fn snake_case(s: &str) -> String {
    Converter::new()
        .to_case(Case::Snake)
        .remove_boundaries(&Boundary::digits())
        .convert(s)
}

/// Convert to CamelCase if first_upper is true, camelCase otherwise
pub fn camel_case(s: &str, first_upper: bool) -> String {
    if first_upper {
        s.to_case(Case::Pascal)
    } else {
        s.to_case(Case::Camel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake_case() {
        assert_eq!(snake_case("userName"), "user_name");
        assert_eq!(snake_case("Id"), "id");
        assert_eq!(snake_case("user name"), "user_name");
        assert_eq!(snake_case("APIKey"), "api_key");
    }

    #[test]
    fn test_snake_case_keeps_digits() {
        assert_eq!(snake_case("field1"), "field1");
        assert_eq!(snake_case("sint32Value"), "sint32_value");
        assert_eq!(snake_case("v2_result"), "v2_result");
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case("user_name", true), "UserName");
        assert_eq!(camel_case("user_name", false), "userName");
        assert_eq!(camel_case("api", true), "Api");
    }
}
