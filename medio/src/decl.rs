//! Declarations and the documentation entities registered alongside them.

use crate::{Expr, Name};
use alloc::collections::BTreeSet;
use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// Syntactic category of a declaration.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum DeclKind {
    Definition,
    Theorem,
    Axiom,
    Constant,
}

impl DeclKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Definition => "definition",
            Self::Theorem => "theorem",
            Self::Axiom => "axiom",
            Self::Constant => "constant",
        }
    }
}

/// Position in a source file.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SourcePos {
    pub file: String,
    pub line: usize,
}

/// Entry of the declaration table.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Declaration {
    pub name: Name,
    pub kind: DeclKind,
    pub ty: Expr,
    /// Value of definitions and theorems.
    #[serde(default)]
    pub value: Option<Expr>,
    /// Position of the declaration; absent for virtual sources.
    #[serde(default)]
    pub pos: Option<SourcePos>,
    /// Was the name produced by the elaborator rather than the user?
    #[serde(default)]
    pub auto: bool,
    #[serde(default)]
    pub protected: bool,
    /// Name of the axiom or constant that makes this noncomputable.
    #[serde(default)]
    pub noncomputable: Option<Name>,
}

impl Declaration {
    pub fn new(name: impl Into<Name>, kind: DeclKind, ty: Expr) -> Self {
        Self {
            name: name.into(),
            kind,
            ty,
            value: None,
            pos: None,
            auto: false,
            protected: false,
            noncomputable: None,
        }
    }

    pub fn with_value(self, value: Expr) -> Self {
        Self { value: Some(value), ..self }
    }

    /// Place the declaration in a source file.
    pub fn at(self, file: impl Into<String>, line: usize) -> Self {
        let pos = Some(SourcePos { file: file.into(), line });
        Self { pos, ..self }
    }
}

/// Data registered for a structure.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StructureInfo {
    /// Number of leading parameters shared by the structure and its projections.
    pub num_params: usize,
    /// Projection names and unopened projection types, in field order.
    pub fields: Vec<(Name, Expr)>,
}

/// Data registered for an inductive type that is not a structure.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InductiveInfo {
    pub num_params: usize,
    /// Constructor names and unopened constructor types, in order.
    pub ctors: Vec<(Name, Expr)>,
}

/// Category of a tactic documentation entry.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum DocCategory {
    Tactic,
    Command,
    HoleCommand,
    Attribute,
}

impl DocCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tactic => "tactic",
            Self::Command => "command",
            Self::HoleCommand => "hole_command",
            Self::Attribute => "attribute",
        }
    }
}

/// Documentation registered for a tactic, command, hole command, or attribute.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TacticDoc {
    pub name: String,
    pub category: DocCategory,
    /// Declarations implementing the documented entity.
    #[serde(default)]
    pub decl_names: Vec<Name>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub description: String,
}

/// Named piece of standalone library documentation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Note {
    pub name: String,
    pub content: String,
}

/// Documentation attached to a file rather than a declaration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ModuleDoc {
    pub file: String,
    pub line: usize,
    pub doc: String,
}

/// Declarations reachable from a common set of imports,
/// with the label shown for entities defined there.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ImportTier {
    pub label: String,
    pub members: BTreeSet<Name>,
}

impl ImportTier {
    pub fn new(label: impl Into<String>, members: impl IntoIterator<Item = Name>) -> Self {
        let label = label.into();
        let members = members.into_iter().collect();
        Self { label, members }
    }
}
