//! Word classification.
//!
//! NDF keywords and built-in type names are matched case-insensitively
//! (`EXPORT`, `Template`, `MAP` are all recognized), while every other
//! identifier keeps its exact spelling. Classification never alters the
//! stored text of a word; it only tags it.

use std::fmt;

/// Reserved words of the language.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Keyword {
    /// `export`
    Export,
    /// `unnamed`
    Unnamed,
    /// `private`
    Private,
    /// `public`
    Public,
    /// `template`
    Template,
    /// `is`
    Is,
    /// `nil`
    Nil,
    /// `div`
    Div,
    /// `guid`
    Guid,
    /// `true`
    True,
    /// `false`
    False,
}

/// Built-in scalar type names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BuiltinType {
    /// `bool`
    Bool,
    /// `string`
    String,
    /// `tguid`
    TGuid,
    /// `int`
    Int,
    /// `float`
    Float,
}

/// Built-in vector-like type names. These may open a vector literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BuiltinVectorType {
    /// `int2`
    Int2,
    /// `int3`
    Int3,
    /// `int4`
    Int4,
    /// `float2`
    Float2,
    /// `float3`
    Float3,
    /// `float4`
    Float4,
    /// `rgba`
    Rgba,
    /// `vector`
    Vector,
    /// `ifte`
    Ifte,
    /// `pair`
    Pair,
    /// `map`, which opens a map literal rather than a vector.
    Map,
}

/// Classification of an identifier-shaped word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WordClass {
    /// A reserved keyword.
    Keyword(Keyword),
    /// A built-in scalar type name.
    Type(BuiltinType),
    /// A built-in vector type name.
    VectorType(BuiltinVectorType),
    /// Any other identifier. Case-sensitive.
    Name,
}

const WORDS: &[(&str, WordClass)] = &[
    ("export", WordClass::Keyword(Keyword::Export)),
    ("unnamed", WordClass::Keyword(Keyword::Unnamed)),
    ("private", WordClass::Keyword(Keyword::Private)),
    ("public", WordClass::Keyword(Keyword::Public)),
    ("template", WordClass::Keyword(Keyword::Template)),
    ("is", WordClass::Keyword(Keyword::Is)),
    ("nil", WordClass::Keyword(Keyword::Nil)),
    ("div", WordClass::Keyword(Keyword::Div)),
    ("guid", WordClass::Keyword(Keyword::Guid)),
    ("true", WordClass::Keyword(Keyword::True)),
    ("false", WordClass::Keyword(Keyword::False)),
    ("bool", WordClass::Type(BuiltinType::Bool)),
    ("string", WordClass::Type(BuiltinType::String)),
    ("tguid", WordClass::Type(BuiltinType::TGuid)),
    ("int", WordClass::Type(BuiltinType::Int)),
    ("float", WordClass::Type(BuiltinType::Float)),
    ("int2", WordClass::VectorType(BuiltinVectorType::Int2)),
    ("int3", WordClass::VectorType(BuiltinVectorType::Int3)),
    ("int4", WordClass::VectorType(BuiltinVectorType::Int4)),
    ("float2", WordClass::VectorType(BuiltinVectorType::Float2)),
    ("float3", WordClass::VectorType(BuiltinVectorType::Float3)),
    ("float4", WordClass::VectorType(BuiltinVectorType::Float4)),
    ("rgba", WordClass::VectorType(BuiltinVectorType::Rgba)),
    ("vector", WordClass::VectorType(BuiltinVectorType::Vector)),
    ("ifte", WordClass::VectorType(BuiltinVectorType::Ifte)),
    ("pair", WordClass::VectorType(BuiltinVectorType::Pair)),
    ("map", WordClass::VectorType(BuiltinVectorType::Map)),
];

/// Classifies a word by case-insensitive lookup, defaulting to [`WordClass::Name`].
#[must_use]
pub fn classify_word(text: &str) -> WordClass {
    // Longest reserved word is "template" at 8 bytes.
    if text.len() > 8 {
        return WordClass::Name;
    }
    WORDS
        .iter()
        .find(|(word, _)| word.eq_ignore_ascii_case(text))
        .map_or(WordClass::Name, |(_, class)| *class)
}

impl WordClass {
    /// Returns the keyword, if this word is one.
    #[must_use]
    pub const fn keyword(self) -> Option<Keyword> {
        match self {
            Self::Keyword(kw) => Some(kw),
            _ => None,
        }
    }

    /// Returns true for plain, case-sensitive names.
    #[must_use]
    pub const fn is_name(self) -> bool {
        matches!(self, Self::Name)
    }
}

impl Keyword {
    /// Canonical lower-case spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Export => "export",
            Self::Unnamed => "unnamed",
            Self::Private => "private",
            Self::Public => "public",
            Self::Template => "template",
            Self::Is => "is",
            Self::Nil => "nil",
            Self::Div => "div",
            Self::Guid => "guid",
            Self::True => "true",
            Self::False => "false",
        }
    }
}

impl BuiltinVectorType {
    /// Canonical spelling used by the pretty-printer.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Int2 => "int2",
            Self::Int3 => "int3",
            Self::Int4 => "int4",
            Self::Float2 => "float2",
            Self::Float3 => "float3",
            Self::Float4 => "float4",
            Self::Rgba => "RGBA",
            Self::Vector => "Vector",
            Self::Ifte => "ifte",
            Self::Pair => "pair",
            Self::Map => "MAP",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
