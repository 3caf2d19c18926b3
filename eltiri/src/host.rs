//! Access to a compiled library.

use crate::error::Error;
use alloc::boxed::Box;
use medio::{Declaration, Expr, Format, ImportTier, InductiveInfo, ModuleDoc};
use medio::{Name, Note, StructureInfo, TacticDoc};

/// Everything the extraction needs to know about a compiled library.
///
/// [`medio::Environment`] implements this for snapshots loaded from disk;
/// a live elaborator session could implement it just as well.
pub trait Host {
    /// All declarations, in the order the library enumerates them.
    fn decls(&self) -> Box<dyn Iterator<Item = &Declaration> + '_>;

    /// Declaration registered under the given name.
    fn get(&self, name: &Name) -> Option<&Declaration>;

    /// Doc comment attached to the declaration, if any.
    fn doc_string(&self, name: &Name) -> Option<&str>;

    /// Does the declaration carry the given attribute?
    fn has_attr(&self, attr: &str, name: &Name) -> bool;

    fn structure_info(&self, name: &Name) -> Option<&StructureInfo>;

    fn inductive_info(&self, name: &Name) -> Option<&InductiveInfo>;

    /// Equation lemma statements of the declaration.
    fn equations(&self, name: &Name) -> &[Expr];

    /// Names of all registered instances.
    fn instances(&self) -> Box<dyn Iterator<Item = &Name> + '_>;

    fn tactic_docs(&self) -> &[TacticDoc];

    fn notes(&self) -> &[Note];

    fn mod_docs(&self) -> &[ModuleDoc];

    /// Import tiers, most common first.
    fn tiers(&self) -> &[ImportTier];

    /// Render an expression to a layout tree.
    fn pp(&self, e: &Expr) -> Result<Format, Error>;

    /// Does the expression denote a proposition?
    fn is_prop(&self, e: &Expr) -> bool;

    /// Does the expression denote a type or a proposition?
    fn is_type_or_prop(&self, e: &Expr) -> bool;
}

impl Host for medio::Environment {
    fn decls(&self) -> Box<dyn Iterator<Item = &Declaration> + '_> {
        Box::new(medio::Environment::decls(self))
    }

    fn get(&self, name: &Name) -> Option<&Declaration> {
        medio::Environment::get(self, name)
    }

    fn doc_string(&self, name: &Name) -> Option<&str> {
        self.doc(name)
    }

    fn has_attr(&self, attr: &str, name: &Name) -> bool {
        medio::Environment::has_attr(self, attr, name)
    }

    fn structure_info(&self, name: &Name) -> Option<&StructureInfo> {
        self.structure(name)
    }

    fn inductive_info(&self, name: &Name) -> Option<&InductiveInfo> {
        self.inductive(name)
    }

    fn equations(&self, name: &Name) -> &[Expr] {
        medio::Environment::equations(self, name)
    }

    fn instances(&self) -> Box<dyn Iterator<Item = &Name> + '_> {
        Box::new(medio::Environment::instances(self))
    }

    fn tactic_docs(&self) -> &[TacticDoc] {
        medio::Environment::tactic_docs(self)
    }

    fn notes(&self) -> &[Note] {
        medio::Environment::notes(self)
    }

    fn mod_docs(&self) -> &[ModuleDoc] {
        medio::Environment::mod_docs(self)
    }

    fn tiers(&self) -> &[ImportTier] {
        medio::Environment::tiers(self)
    }

    fn pp(&self, e: &Expr) -> Result<Format, Error> {
        Ok(medio::pp(e))
    }

    fn is_prop(&self, e: &Expr) -> bool {
        medio::Environment::is_prop(self, e)
    }

    fn is_type_or_prop(&self, e: &Expr) -> bool {
        medio::Environment::is_type_or_prop(self, e)
    }
}
