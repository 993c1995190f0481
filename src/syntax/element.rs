//! Elements of a parsed file: messages, enums, fields and oneofs.

use std::fmt;

use smol_str::SmolStr;

/// Index of an element inside its [`ProtoFile`](super::ProtoFile) arena.
///
/// Ids are only meaningful together with the file that issued them.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct ElementId(pub u32);

impl ElementId {
    /// Create a new ElementId from a raw index.
    #[inline]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw index.
    #[inline]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ElementId({})", self.0)
    }
}

/// A node in the element tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    /// The enclosing element. `None` for top-level elements, whose
    /// container is the file itself.
    pub parent: Option<ElementId>,
    /// Nested elements in declaration order.
    pub children: Vec<ElementId>,
    /// What this element declares.
    pub kind: ElementKind,
}

/// The closed set of element kinds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ElementKind {
    /// `message Name { ... }` or `extend Name { ... }`.
    Message(MessageElement),
    /// `enum Name { ... }`.
    Enum(EnumElement),
    /// `[repeated] Type name = N;`
    Field(FieldElement),
    /// `map<Key, Type> name = N;`
    MapField(MapFieldElement),
    /// `oneof name { ... }`; the member fields are its children.
    OneOf(OneOfElement),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageElement {
    pub name: SmolStr,
    /// Set for `extend` blocks. The name is then the extended type as written.
    pub is_extend: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumElement {
    pub name: SmolStr,
    pub constants: Vec<SmolStr>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldElement {
    pub name: SmolStr,
    pub type_name: SmolStr,
    pub repeated: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapFieldElement {
    pub name: SmolStr,
    pub key_type: SmolStr,
    pub type_name: SmolStr,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OneOfElement {
    pub name: SmolStr,
}

impl Element {
    /// The declared name of the element.
    pub fn name(&self) -> &str {
        match &self.kind {
            ElementKind::Message(m) => &m.name,
            ElementKind::Enum(e) => &e.name,
            ElementKind::Field(f) => &f.name,
            ElementKind::MapField(f) => &f.name,
            ElementKind::OneOf(o) => &o.name,
        }
    }

    /// Upper-case label of the element kind, e.g. `MESSAGE`.
    pub fn element_type_name(&self) -> &'static str {
        match &self.kind {
            ElementKind::Message(m) if m.is_extend => "EXTEND",
            ElementKind::Message(_) => "MESSAGE",
            ElementKind::Enum(_) => "ENUM",
            ElementKind::Field(_) => "FIELD",
            ElementKind::MapField(_) => "MAP_FIELD",
            ElementKind::OneOf(_) => "ONEOF",
        }
    }

    /// Check if this element declares a named type (a message or an enum,
    /// but not an `extend` block).
    pub fn is_type_declaration(&self) -> bool {
        match &self.kind {
            ElementKind::Message(m) => !m.is_extend,
            ElementKind::Enum(_) => true,
            _ => false,
        }
    }

    /// Check if this is a plain message (not an `extend` block).
    pub fn is_message(&self) -> bool {
        matches!(&self.kind, ElementKind::Message(m) if !m.is_extend)
    }

    /// Check if this is an `extend` block.
    pub fn is_extend(&self) -> bool {
        matches!(&self.kind, ElementKind::Message(m) if m.is_extend)
    }

    /// Check if this is a field of any shape (plain, map or oneof).
    pub fn is_field(&self) -> bool {
        matches!(
            self.kind,
            ElementKind::Field(_) | ElementKind::MapField(_) | ElementKind::OneOf(_)
        )
    }

    /// Check if other elements can be nested under this one.
    pub fn is_container(&self) -> bool {
        matches!(self.kind, ElementKind::Message(_) | ElementKind::OneOf(_))
    }
}
