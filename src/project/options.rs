//! Custom option lookup.
//!
//! A custom option such as `(validate.field)` is a field of an `extend`
//! block targeting one of the `google.protobuf.*Options` messages. Looking
//! it up means finding the options message, the package extending it, and
//! the extension field itself.

use super::lookup::strip_package;
use super::registry::Project;
use crate::hir::{DepFile, DepType, Result};
use crate::syntax::{Element, ElementId, ElementKind};

/// Where an option is attached, which fixes the options message it extends.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OptionKind {
    File,
    Message,
    Field,
    Enum,
    EnumValue,
    Service,
    Method,
    OneOf,
}

impl OptionKind {
    /// Full name of the built-in options message, e.g. `google.protobuf.FieldOptions`.
    pub fn message_name(&self) -> &'static str {
        match self {
            OptionKind::File => "google.protobuf.FileOptions",
            OptionKind::Message => "google.protobuf.MessageOptions",
            OptionKind::Field => "google.protobuf.FieldOptions",
            OptionKind::Enum => "google.protobuf.EnumOptions",
            OptionKind::EnumValue => "google.protobuf.EnumValueOptions",
            OptionKind::Service => "google.protobuf.ServiceOptions",
            OptionKind::Method => "google.protobuf.MethodOptions",
            OptionKind::OneOf => "google.protobuf.OneofOptions",
        }
    }
}

/// A field element together with the file declaring it.
#[derive(Copy, Clone, Debug)]
pub struct OptionField<'a> {
    file: DepFile<'a>,
    id: ElementId,
}

impl<'a> OptionField<'a> {
    pub fn file(&self) -> DepFile<'a> {
        self.file
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    /// The field element.
    pub fn element(&self) -> Option<&'a Element> {
        self.file.proto_file()?.element(self.id)
    }

    /// The message or extend block declaring the field, skipping any
    /// enclosing `oneof`. Resolve the field's type names relative to it.
    pub fn parent_type(&self) -> Option<DepType<'a>> {
        let proto = self.file.proto_file()?;
        let mut parent = self.element()?.parent?;
        while let ElementKind::OneOf(_) = proto.element(parent)?.kind {
            parent = proto.element(parent)?.parent?;
        }
        DepType::from_element(self.file, parent)
    }
}

/// The result of [`Project::get_option`].
#[derive(Clone, Debug)]
pub struct OptionType<'a> {
    /// The option as requested, e.g. `validate.field`.
    pub option_name: String,
    /// The built-in options message, e.g. `google.protobuf.FieldOptions`.
    pub source_option: DepType<'a>,
    /// The extend block declaring the option; `None` for built-in options.
    pub option: Option<DepType<'a>>,
    /// The option's field name, without the package.
    pub name: String,
    /// The field declaring the option, if it exists.
    pub field_item: Option<OptionField<'a>>,
}

impl<'a> OptionType<'a> {
    /// Handle of the element declaring [`field_item`](Self::field_item).
    pub fn field_parent(&self) -> Option<DepType<'a>> {
        self.field_item.as_ref()?.parent_type()
    }
}

impl Project {
    /// Resolve a custom option name like `validate.field`.
    ///
    /// The options message for `kind` must be loaded (usually from
    /// `google/protobuf/descriptor.proto`), otherwise this fails with
    /// [`DepError::NotFound`](crate::hir::DepError::NotFound). Names that no
    /// extending package prefixes are looked up among the options message's
    /// own fields.
    pub fn get_option(&self, kind: OptionKind, option_name: &str) -> Result<OptionType<'_>> {
        let source_option = self.get_type(kind.message_name())?;

        // longest package first, so `a.b.opt` prefers package `a.b` over `a`
        let mut packages = source_option.extension_packages();
        packages.sort_by_key(|p| std::cmp::Reverse(p.len()));

        for package in packages {
            let Some(rest) = strip_package(option_name, &package) else {
                continue;
            };
            let Some(option) = source_option.get_type_extension(&package)? else {
                continue;
            };
            let field_item = field_of(&option, rest);
            tracing::debug!(option_name, package = %package, found = field_item.is_some(), "custom option");
            return Ok(OptionType {
                option_name: option_name.to_string(),
                source_option,
                option: Some(option),
                name: rest.to_string(),
                field_item,
            });
        }

        let field_item = field_of(&source_option, option_name);
        Ok(OptionType {
            option_name: option_name.to_string(),
            source_option,
            option: None,
            name: option_name.to_string(),
            field_item,
        })
    }
}

fn field_of<'a>(owner: &DepType<'a>, name: &str) -> Option<OptionField<'a>> {
    let file = owner.file()?;
    let id = owner.field(name)?;
    Some(OptionField { file, id })
}
