//! The root of a parsed file.

use smol_str::SmolStr;
use thiserror::Error;

use super::element::{
    Element, ElementId, ElementKind, EnumElement, FieldElement, MapFieldElement, MessageElement,
    OneOfElement,
};

/// Errors raised while assembling a [`ProtoFile`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("unknown element {0:?}")]
    UnknownElement(ElementId),

    #[error("element '{parent}' cannot contain a {child}")]
    NotAContainer { parent: SmolStr, child: &'static str },
}

/// A file-level `option name = value;`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionElement {
    pub name: SmolStr,
    pub value: SmolStr,
}

/// A parsed `.proto` file.
///
/// Elements live in a flat arena; tree structure is carried by the
/// `parent`/`children` links of each [`Element`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProtoFile {
    /// The declared `package`, empty if none.
    pub package_name: SmolStr,
    /// Every imported path (public ones included), in declaration order.
    pub dependencies: Vec<SmolStr>,
    /// The subset of `dependencies` imported with `import public`.
    pub public_dependencies: Vec<SmolStr>,
    /// File-level options.
    pub options: Vec<OptionElement>,
    elements: Vec<Element>,
    roots: Vec<ElementId>,
}

impl ProtoFile {
    /// Create an empty file declaring `package`.
    pub fn new(package: impl Into<SmolStr>) -> Self {
        Self {
            package_name: package.into(),
            ..Self::default()
        }
    }

    /// Add a plain `import`.
    pub fn with_import(mut self, path: impl Into<SmolStr>) -> Self {
        self.dependencies.push(path.into());
        self
    }

    /// Add an `import public`.
    pub fn with_public_import(mut self, path: impl Into<SmolStr>) -> Self {
        let path = path.into();
        self.dependencies.push(path.clone());
        self.public_dependencies.push(path);
        self
    }

    /// Add a file-level option.
    pub fn with_option(mut self, name: impl Into<SmolStr>, value: impl Into<SmolStr>) -> Self {
        self.options.push(OptionElement {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Look up the value of a file-level option.
    pub fn option(&self, name: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.name.as_str() == name)
            .map(|o| o.value.as_str())
    }

    /// Declare a message, top-level when `parent` is `None`.
    pub fn add_message(
        &mut self,
        parent: Option<ElementId>,
        name: impl Into<SmolStr>,
    ) -> Result<ElementId, SyntaxError> {
        let kind = ElementKind::Message(MessageElement {
            name: name.into(),
            is_extend: false,
        });
        self.attach(parent, kind)
    }

    /// Declare a top-level `extend` block for `target`.
    pub fn add_extend(&mut self, target: &str) -> ElementId {
        let kind = ElementKind::Message(MessageElement {
            name: target.trim_start_matches('.').into(),
            is_extend: true,
        });
        self.push(None, kind)
    }

    /// Declare an enum with its constants.
    pub fn add_enum<I, S>(
        &mut self,
        parent: Option<ElementId>,
        name: impl Into<SmolStr>,
        constants: I,
    ) -> Result<ElementId, SyntaxError>
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        let kind = ElementKind::Enum(EnumElement {
            name: name.into(),
            constants: constants.into_iter().map(Into::into).collect(),
        });
        self.attach(parent, kind)
    }

    /// Declare a singular field.
    pub fn add_field(
        &mut self,
        parent: ElementId,
        name: impl Into<SmolStr>,
        type_name: impl Into<SmolStr>,
    ) -> Result<ElementId, SyntaxError> {
        let kind = ElementKind::Field(FieldElement {
            name: name.into(),
            type_name: type_name.into(),
            repeated: false,
        });
        self.attach(Some(parent), kind)
    }

    /// Declare a `repeated` field.
    pub fn add_repeated_field(
        &mut self,
        parent: ElementId,
        name: impl Into<SmolStr>,
        type_name: impl Into<SmolStr>,
    ) -> Result<ElementId, SyntaxError> {
        let kind = ElementKind::Field(FieldElement {
            name: name.into(),
            type_name: type_name.into(),
            repeated: true,
        });
        self.attach(Some(parent), kind)
    }

    /// Declare a `map<key, value>` field.
    pub fn add_map_field(
        &mut self,
        parent: ElementId,
        name: impl Into<SmolStr>,
        key_type: impl Into<SmolStr>,
        type_name: impl Into<SmolStr>,
    ) -> Result<ElementId, SyntaxError> {
        let kind = ElementKind::MapField(MapFieldElement {
            name: name.into(),
            key_type: key_type.into(),
            type_name: type_name.into(),
        });
        self.attach(Some(parent), kind)
    }

    /// Declare a `oneof` group; add its members with [`add_field`](Self::add_field).
    pub fn add_oneof(
        &mut self,
        parent: ElementId,
        name: impl Into<SmolStr>,
    ) -> Result<ElementId, SyntaxError> {
        let kind = ElementKind::OneOf(OneOfElement { name: name.into() });
        self.attach(Some(parent), kind)
    }

    /// Get an element by id.
    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.0 as usize)
    }

    /// Top-level elements in declaration order.
    pub fn roots(&self) -> &[ElementId] {
        &self.roots
    }

    /// Iterate over every element with its id.
    pub fn elements(&self) -> impl Iterator<Item = (ElementId, &Element)> {
        self.elements
            .iter()
            .enumerate()
            .map(|(idx, el)| (ElementId(idx as u32), el))
    }

    /// The elements directly under `parent`, or the top-level ones for `None`.
    pub fn children_of(&self, parent: Option<ElementId>) -> &[ElementId] {
        match parent {
            None => &self.roots,
            Some(id) => self.element(id).map_or(&[][..], |el| el.children.as_slice()),
        }
    }

    /// Dotted name of an element relative to the package, e.g. `SendMail.Body`.
    pub fn scoped_name(&self, id: ElementId) -> Option<String> {
        let mut parts = Vec::new();
        let mut current = Some(id);
        while let Some(cur) = current {
            let el = self.element(cur)?;
            parts.push(el.name());
            current = el.parent;
        }
        parts.reverse();
        Some(parts.join("."))
    }

    fn attach(
        &mut self,
        parent: Option<ElementId>,
        kind: ElementKind,
    ) -> Result<ElementId, SyntaxError> {
        if let Some(pid) = parent {
            let parent_el = self.element(pid).ok_or(SyntaxError::UnknownElement(pid))?;
            let allowed = match &parent_el.kind {
                ElementKind::Message(_) => true,
                // oneof members are plain fields only
                ElementKind::OneOf(_) => matches!(kind, ElementKind::Field(_)),
                _ => false,
            };
            if !allowed {
                return Err(SyntaxError::NotAContainer {
                    parent: parent_el.name().into(),
                    child: kind_label(&kind),
                });
            }
        }
        Ok(self.push(parent, kind))
    }

    fn push(&mut self, parent: Option<ElementId>, kind: ElementKind) -> ElementId {
        let id = ElementId(self.elements.len() as u32);
        self.elements.push(Element {
            parent,
            children: Vec::new(),
            kind,
        });
        match parent.and_then(|pid| self.elements.get_mut(pid.0 as usize)) {
            Some(parent_el) => parent_el.children.push(id),
            None => self.roots.push(id),
        }
        id
    }
}

fn kind_label(kind: &ElementKind) -> &'static str {
    match kind {
        ElementKind::Message(_) => "message",
        ElementKind::Enum(_) => "enum",
        ElementKind::Field(_) => "field",
        ElementKind::MapField(_) => "map field",
        ElementKind::OneOf(_) => "oneof",
    }
}
