//! Syntax: the parsed shape of a `.proto` file.
//!
//! Parsing itself happens elsewhere. A parser hands the project a
//! [`ProtoFile`]: the package, imports, file options and an arena of
//! [`Element`]s linked to their parents by [`ElementId`].
//!
//! The same construction API the parser uses is what tests use to build
//! fixtures by hand.

mod element;
mod file;
mod scalar;

pub use element::{
    Element, ElementId, ElementKind, EnumElement, FieldElement, MapFieldElement, MessageElement,
    OneOfElement,
};
pub use file::{OptionElement, ProtoFile, SyntaxError};
pub use scalar::ScalarType;
