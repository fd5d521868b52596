use phf::phf_map;

/// Protocol buffer scalar type => type generated by the protocol buffer
/// compiler in the native bindings
pub static TYPE_MAPPING: phf::Map<&'static str, &'static str> = phf_map! {
    "bool" => "bool",
    "sint32" => "int32",
    "sint64" => "int64",
    "uint32" => "uint32",
    "uint64" => "uint64",
    "float" => "float32",
    "double" => "float64",
    "string" => "string",
    "bytes" => "[]byte",
};
