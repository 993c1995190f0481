//! Type handles: one resolved type, seen from a requesting file.
//!
//! A [`DepType`] is minted fresh by every lookup and never cached. Two
//! handles for the same declaration may differ in their contextual alias,
//! so compare them with [`DepType::is_same`], not `==` on fields.

use super::diagnostics::{DepError, Result};
use super::file::DepFile;
use crate::syntax::{Element, ElementId, ElementKind, ScalarType};

/// What a handle points at.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TypeKind {
    /// A built-in scalar. Scalar handles have no file.
    Scalar(ScalarType),
    /// A message, enum, extend block or field of the owning file.
    Element(ElementId),
    /// A `oneof` group of the owning file. Name and aliases are blank.
    OneOf(ElementId),
}

/// A resolved type.
#[derive(Clone, Debug)]
pub struct DepType<'a> {
    /// The defining file. `None` for scalars.
    file: Option<DepFile<'a>>,
    /// Package qualifier as seen from the requesting file; empty when the
    /// type is declared in that same file.
    alias: String,
    /// Package of the defining file, independent of the requester.
    original_alias: String,
    /// Dotted name relative to the package, e.g. `SendMail.Body`.
    name: String,
    kind: TypeKind,
}

impl<'a> DepType<'a> {
    /// Create a handle for an element of `file`.
    pub fn new(
        file: DepFile<'a>,
        alias: &str,
        original_alias: &str,
        name: impl Into<String>,
        item: ElementId,
    ) -> Self {
        Self {
            file: Some(file),
            alias: alias.to_string(),
            original_alias: original_alias.to_string(),
            name: name.into(),
            kind: TypeKind::Element(item),
        }
    }

    /// Create a handle for a scalar type. Its name is the scalar's proto name.
    pub fn scalar(scalar: ScalarType) -> Self {
        Self {
            file: None,
            alias: String::new(),
            original_alias: String::new(),
            name: scalar.proto_type().to_string(),
            kind: TypeKind::Scalar(scalar),
        }
    }

    /// Create a handle for a `oneof` group.
    pub fn one_of(file: DepFile<'a>, item: ElementId) -> Self {
        Self {
            file: Some(file),
            alias: String::new(),
            original_alias: String::new(),
            name: String::new(),
            kind: TypeKind::OneOf(item),
        }
    }

    /// Wrap any element of `file`, aliased with the file's package.
    ///
    /// Returns `None` if the file has no parsed tree or no such element.
    pub fn from_element(file: DepFile<'a>, element: ElementId) -> Option<Self> {
        let proto = file.proto_file()?;
        let el = proto.element(element)?;
        if matches!(el.kind, ElementKind::OneOf(_)) {
            return Some(Self::one_of(file, element));
        }
        let package = proto.package_name.as_str();
        Some(Self::new(
            file,
            package,
            package,
            proto.scoped_name(element)?,
            element,
        ))
    }

    /// The defining file. `None` for scalars.
    pub fn file(&self) -> Option<DepFile<'a>> {
        self.file
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    pub fn original_alias(&self) -> &str {
        &self.original_alias
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    /// The scalar type, for scalar handles.
    pub fn scalar_type(&self) -> Option<ScalarType> {
        match self.kind {
            TypeKind::Scalar(st) => Some(st),
            _ => None,
        }
    }

    /// The id of the underlying element, for non-scalar handles.
    pub fn item_id(&self) -> Option<ElementId> {
        match self.kind {
            TypeKind::Element(id) | TypeKind::OneOf(id) => Some(id),
            TypeKind::Scalar(_) => None,
        }
    }

    /// The underlying element, for non-scalar handles.
    pub fn item(&self) -> Option<&'a Element> {
        let id = self.item_id()?;
        self.file?.proto_file()?.element(id)
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self.kind, TypeKind::Scalar(_))
    }

    pub fn is_one_of(&self) -> bool {
        matches!(self.kind, TypeKind::OneOf(_))
    }

    /// Whether fields of this type are held by reference (message types only).
    pub fn is_pointer(&self) -> bool {
        self.item().is_some_and(Element::is_message)
    }

    /// Whether fields of this type could be held by reference. `bytes` cannot.
    pub fn can_pointer(&self) -> bool {
        self.scalar_type() != Some(ScalarType::Bytes)
    }

    /// `{alias}.{name}`, or just the name when the alias is empty.
    pub fn full_name(&self) -> String {
        qualify(&self.alias, &self.name)
    }

    /// `{original_alias}.{name}`, or just the name when it has no package.
    pub fn full_original_name(&self) -> String {
        qualify(&self.original_alias, &self.name)
    }

    /// A human-readable description: the full original name when there is
    /// one, otherwise the scalar name or `oneof (name: ...)`.
    pub fn type_description(&self) -> String {
        let ret = self.full_original_name();
        if !ret.is_empty() {
            return ret;
        }
        match self.kind {
            TypeKind::Scalar(st) => st.proto_type().to_string(),
            TypeKind::OneOf(_) => {
                let field_name = self.item().map(Element::name).unwrap_or_default();
                format!("oneof (name: {field_name})")
            }
            TypeKind::Element(_) => ret,
        }
    }

    /// Check if `other` denotes the same type.
    ///
    /// Scalars match on the scalar type. Everything else matches on the
    /// defining file's path, the original alias and the name; the contextual
    /// alias does not take part.
    pub fn is_same(&self, other: &DepType<'_>) -> bool {
        match (self.kind, other.kind) {
            (TypeKind::Scalar(a), TypeKind::Scalar(b)) => a == b,
            (TypeKind::Scalar(_), _) | (_, TypeKind::Scalar(_)) => false,
            _ => match (self.file, other.file) {
                (Some(a), Some(b)) => {
                    a.path() == b.path()
                        && self.original_alias == other.original_alias
                        && self.name == other.name
                }
                _ => false,
            },
        }
    }

    /// The handle of the enclosing element, if any. Top-level types have none.
    pub fn parent(&self) -> Option<DepType<'a>> {
        let file = self.file?;
        let parent = self.item()?.parent?;
        DepType::from_element(file, parent)
    }

    /// Walk up to `n` enclosing elements.
    ///
    /// Stops at the top-level element; the file itself is never returned.
    /// Returns the element reached and how many levels were climbed.
    pub fn skip_parents(&self, n: usize) -> (Option<DepType<'a>>, usize) {
        let (Some(file), Some(mut cur)) = (self.file, self.item_id()) else {
            return (None, 0);
        };
        let Some(proto) = file.proto_file() else {
            return (None, 0);
        };

        let mut count = 0;
        while count < n {
            match proto.element(cur).and_then(|el| el.parent) {
                Some(parent) => {
                    cur = parent;
                    count += 1;
                }
                None => break,
            }
        }

        (DepType::from_element(file, cur), count)
    }

    /// Resolve `name` to a single type relative to this one.
    pub fn find_type(&self, name: &str) -> Result<Option<DepType<'a>>> {
        pick_single(name, self.get_types(name)?)
    }

    /// Like [`find_type`](Self::find_type), but a missing type is an error.
    pub fn get_type(&self, name: &str) -> Result<DepType<'a>> {
        self.find_type(name)?
            .ok_or_else(|| DepError::not_found_in(name, self.full_original_name()))
    }

    /// All types `name` may denote relative to this type.
    ///
    /// Tries, in order, stopping at the first non-empty result:
    /// 1. the owning file's [`get_types`](DepFile::get_types);
    /// 2. `name` under each shorter prefix of this type's name, longest
    ///    first (`Outer.Inner` tries `Outer.{name}`, then `.{name}`);
    /// 3. `name` as a direct child, `{own name}.{name}`.
    #[tracing::instrument(level = "trace", skip_all, fields(context = %self.name, name = %name))]
    pub fn get_types(&self, name: &str) -> Result<Vec<DepType<'a>>> {
        let Some(file) = self.file else {
            return Ok(Vec::new());
        };

        let found = file.get_types(name)?;
        if !found.is_empty() {
            return Ok(found);
        }

        if !self.name.is_empty() {
            let scopes: Vec<&str> = self.name.split('.').collect();
            for si in (0..scopes.len()).rev() {
                let scoped = format!("{}.{}", scopes[..si].join("."), name);
                tracing::trace!(candidate = %scoped, "narrowing to enclosing scope");
                let found = file.get_types(&scoped)?;
                if !found.is_empty() {
                    return Ok(found);
                }
            }
        }

        file.get_types(&format!("{}.{}", self.name, name))
    }

    /// The declared field called `name` directly under this type's element.
    pub fn field(&self, name: &str) -> Option<ElementId> {
        let file = self.file?;
        let proto = file.proto_file()?;
        proto.children_of(self.item_id()).iter().copied().find(|&id| {
            proto
                .element(id)
                .is_some_and(|el| el.is_field() && el.name() == name)
        })
    }
}

fn qualify(alias: &str, name: &str) -> String {
    if alias.is_empty() {
        name.to_string()
    } else {
        format!("{alias}.{name}")
    }
}

/// Append `candidate` unless an equivalent handle is already present.
pub(crate) fn push_distinct<'a>(found: &mut Vec<DepType<'a>>, candidate: DepType<'a>) {
    if !found.iter().any(|t| t.is_same(&candidate)) {
        found.push(candidate);
    }
}

/// Reduce a candidate list to at most one type.
///
/// Structurally equal candidates count once; two or more distinct ones are
/// [`DepError::Ambiguous`].
pub(crate) fn pick_single<'a>(name: &str, candidates: Vec<DepType<'a>>) -> Result<Option<DepType<'a>>> {
    let mut distinct: Vec<DepType<'a>> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        push_distinct(&mut distinct, candidate);
    }
    if distinct.len() > 1 {
        tracing::debug!(name, count = distinct.len(), "ambiguous type reference");
        return Err(DepError::ambiguous(name));
    }
    Ok(distinct.pop())
}
