use crate::r#type::Primitive;
use phf::phf_set;

/// Reserved protocol buffer keywords and [scalar value types], lowercase
/// [scalar value types] https://developers.google.com/protocol-buffers/docs/overview#scalar
pub static RESERVED: phf::Set<&'static str> = phf_set! {
    // types
    "double", "float",
    "int32", "int64", "uint32", "uint64", "sint32", "sint64",
    "fixed32", "fixed64", "sfixed32", "sfixed64",
    "bool", "string", "bytes",

    // keywords
    "enum", "import", "map", "message", "oneof", "option", "package",
    "public", "repeated", "reserved", "returns", "rpc", "service", "syntax"
};

impl Primitive {
    /// The protocol buffer scalar type used for this primitive
    pub fn proto_name(self) -> &'static str {
        match self {
            Primitive::Boolean => "bool",
            Primitive::Int | Primitive::Int32 => "sint32",
            Primitive::Int64 => "sint64",
            Primitive::UInt | Primitive::UInt32 => "uint32",
            Primitive::UInt64 => "uint64",
            Primitive::Float32 => "float",
            Primitive::Float64 => "double",
            Primitive::String => "string",
            Primitive::Bytes => "bytes",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_scalar_is_reserved() {
        let primitives = [
            Primitive::Boolean,
            Primitive::Int,
            Primitive::Int32,
            Primitive::Int64,
            Primitive::UInt,
            Primitive::UInt32,
            Primitive::UInt64,
            Primitive::Float32,
            Primitive::Float64,
            Primitive::String,
            Primitive::Bytes,
        ];

        for p in primitives.iter() {
            assert!(RESERVED.contains(p.proto_name()), "{} is not reserved", p);
        }
    }
}
