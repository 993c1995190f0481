//! Protobuf scalar value types.

use std::fmt;

/// One of the built-in protobuf scalar types.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ScalarType {
    Double,
    Float,
    Int32,
    Int64,
    Uint32,
    Uint64,
    Sint32,
    Sint64,
    Fixed32,
    Fixed64,
    Sfixed32,
    Sfixed64,
    Bool,
    String,
    Bytes,
}

impl ScalarType {
    /// All scalar types, in declaration order.
    pub const ALL: [ScalarType; 15] = [
        ScalarType::Double,
        ScalarType::Float,
        ScalarType::Int32,
        ScalarType::Int64,
        ScalarType::Uint32,
        ScalarType::Uint64,
        ScalarType::Sint32,
        ScalarType::Sint64,
        ScalarType::Fixed32,
        ScalarType::Fixed64,
        ScalarType::Sfixed32,
        ScalarType::Sfixed64,
        ScalarType::Bool,
        ScalarType::String,
        ScalarType::Bytes,
    ];

    /// The type name as written in a `.proto` source.
    pub fn proto_type(&self) -> &'static str {
        match self {
            ScalarType::Double => "double",
            ScalarType::Float => "float",
            ScalarType::Int32 => "int32",
            ScalarType::Int64 => "int64",
            ScalarType::Uint32 => "uint32",
            ScalarType::Uint64 => "uint64",
            ScalarType::Sint32 => "sint32",
            ScalarType::Sint64 => "sint64",
            ScalarType::Fixed32 => "fixed32",
            ScalarType::Fixed64 => "fixed64",
            ScalarType::Sfixed32 => "sfixed32",
            ScalarType::Sfixed64 => "sfixed64",
            ScalarType::Bool => "bool",
            ScalarType::String => "string",
            ScalarType::Bytes => "bytes",
        }
    }

    /// Parse a scalar type name. Returns `None` for anything that is not a scalar.
    pub fn parse(name: &str) -> Option<ScalarType> {
        Self::ALL.into_iter().find(|st| st.proto_type() == name)
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.proto_type())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_scalars() {
        assert_eq!(ScalarType::parse("string"), Some(ScalarType::String));
        assert_eq!(ScalarType::parse("sfixed64"), Some(ScalarType::Sfixed64));
        assert_eq!(ScalarType::parse("bytes"), Some(ScalarType::Bytes));
    }

    #[test]
    fn test_parse_rejects_message_names() {
        assert_eq!(ScalarType::parse("String"), None);
        assert_eq!(ScalarType::parse("google.protobuf.StringValue"), None);
        assert_eq!(ScalarType::parse(""), None);
    }

    #[test]
    fn test_proto_type_is_parse_inverse() {
        for st in ScalarType::ALL {
            assert_eq!(ScalarType::parse(st.proto_type()), Some(st));
        }
    }
}
