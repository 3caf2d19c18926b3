//! Declaration table and registries of a compiled library.

use crate::decl::{ImportTier, InductiveInfo, ModuleDoc, Note, StructureInfo, TacticDoc};
use crate::{Declaration, Expr, Name};
use alloc::collections::{BTreeMap, BTreeSet};
use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// Failure when building an environment.
#[derive(Debug)]
pub enum Error {
    /// The name was already introduced.
    Reintroduction(Name),
}

/// Everything a host records about a compiled library.
///
/// The environment keeps declarations in their original order and
/// can be serialized as a whole, so that
/// a host can hand a library to other processes as a snapshot.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(from = "Tables")]
pub struct Environment {
    decls: Vec<Declaration>,
    docs: BTreeMap<Name, String>,
    /// Attribute name to the set of names carrying it.
    attrs: BTreeMap<String, BTreeSet<Name>>,
    /// Equation lemma statements per name.
    eqns: BTreeMap<Name, Vec<Expr>>,
    structures: BTreeMap<Name, StructureInfo>,
    inductives: BTreeMap<Name, InductiveInfo>,
    /// Instances in registration order.
    instances: Vec<Name>,
    tactic_docs: Vec<TacticDoc>,
    notes: Vec<Note>,
    mod_docs: Vec<ModuleDoc>,
    tiers: Vec<ImportTier>,
    #[serde(skip)]
    index: BTreeMap<Name, usize>,
}

/// Serialized form of the environment.
#[derive(Default, Deserialize)]
#[serde(default)]
struct Tables {
    decls: Vec<Declaration>,
    docs: BTreeMap<Name, String>,
    attrs: BTreeMap<String, BTreeSet<Name>>,
    eqns: BTreeMap<Name, Vec<Expr>>,
    structures: BTreeMap<Name, StructureInfo>,
    inductives: BTreeMap<Name, InductiveInfo>,
    instances: Vec<Name>,
    tactic_docs: Vec<TacticDoc>,
    notes: Vec<Note>,
    mod_docs: Vec<ModuleDoc>,
    tiers: Vec<ImportTier>,
}

impl From<Tables> for Environment {
    fn from(t: Tables) -> Self {
        let names = t.decls.iter().map(|d| d.name.clone());
        let index = names.enumerate().map(|(i, n)| (n, i)).collect();
        Self {
            decls: t.decls,
            docs: t.docs,
            attrs: t.attrs,
            eqns: t.eqns,
            structures: t.structures,
            inductives: t.inductives,
            instances: t.instances,
            tactic_docs: t.tactic_docs,
            notes: t.notes,
            mod_docs: t.mod_docs,
            tiers: t.tiers,
            index,
        }
    }
}

/// Conclusion of a type: what remains after all leading products.
fn conclusion(ty: &Expr) -> &Expr {
    match ty {
        Expr::Pi(_, body) => conclusion(body),
        _ => ty,
    }
}

impl Environment {
    /// Construct an empty environment.
    ///
    /// ~~~
    /// # use medio::Environment;
    /// let env = Environment::new();
    /// assert_eq!(env.decls().count(), 0);
    /// ~~~
    pub fn new() -> Self {
        Self::default()
    }

    /// Introduce a new declaration.
    ///
    /// ~~~
    /// # use medio::{DeclKind, Declaration, Environment, Expr};
    /// let mut env = Environment::new();
    /// env.declare(Declaration::new("nat", DeclKind::Constant, Expr::typ()))?;
    /// assert!(env.get(&"nat".into()).is_some());
    ///
    /// // introducing a name twice is an error
    /// let again = Declaration::new("nat", DeclKind::Constant, Expr::typ());
    /// assert!(env.declare(again).is_err());
    /// # Ok::<_, medio::Error>(())
    /// ~~~
    pub fn declare(&mut self, decl: Declaration) -> Result<(), Error> {
        if self.index.contains_key(&decl.name) {
            return Err(Error::Reintroduction(decl.name));
        }
        self.index.insert(decl.name.clone(), self.decls.len());
        self.decls.push(decl);
        Ok(())
    }

    /// Attach a doc string to a name.
    pub fn document(&mut self, name: Name, doc: impl Into<String>) {
        self.docs.insert(name, doc.into());
    }

    /// Record that a name carries an attribute.
    pub fn set_attr(&mut self, attr: impl Into<String>, name: Name) {
        self.attrs.entry(attr.into()).or_default().insert(name);
    }

    /// Append an equation lemma statement for a name.
    pub fn add_equation(&mut self, name: Name, eqn: Expr) {
        self.eqns.entry(name).or_default().push(eqn);
    }

    pub fn register_structure(&mut self, name: Name, info: StructureInfo) {
        self.structures.insert(name, info);
    }

    pub fn register_inductive(&mut self, name: Name, info: InductiveInfo) {
        self.inductives.insert(name, info);
    }

    /// Register a name as a type-class instance.
    pub fn register_instance(&mut self, name: Name) {
        self.instances.push(name);
    }

    pub fn add_tactic_doc(&mut self, doc: TacticDoc) {
        self.tactic_docs.push(doc);
    }

    pub fn add_note(&mut self, note: Note) {
        self.notes.push(note);
    }

    pub fn add_mod_doc(&mut self, doc: ModuleDoc) {
        self.mod_docs.push(doc);
    }

    /// Append an import tier; tiers are consulted smallest first.
    pub fn add_tier(&mut self, tier: ImportTier) {
        self.tiers.push(tier);
    }

    /// Declarations in their original order.
    pub fn decls(&self) -> impl Iterator<Item = &Declaration> {
        self.decls.iter()
    }

    /// Look up a declaration by name.
    pub fn get(&self, name: &Name) -> Option<&Declaration> {
        self.decls.get(*self.index.get(name)?)
    }

    /// Doc string attached to a name.
    pub fn doc(&self, name: &Name) -> Option<&str> {
        self.docs.get(name).map(String::as_str)
    }

    pub fn has_attr(&self, attr: &str, name: &Name) -> bool {
        self.attrs.get(attr).map_or(false, |names| names.contains(name))
    }

    /// Equation lemma statements of a name.
    pub fn equations(&self, name: &Name) -> &[Expr] {
        self.eqns.get(name).map_or(&[], Vec::as_slice)
    }

    pub fn structure(&self, name: &Name) -> Option<&StructureInfo> {
        self.structures.get(name)
    }

    pub fn inductive(&self, name: &Name) -> Option<&InductiveInfo> {
        self.inductives.get(name)
    }

    /// Instance names in registration order.
    pub fn instances(&self) -> impl Iterator<Item = &Name> {
        self.instances.iter()
    }

    pub fn tactic_docs(&self) -> &[TacticDoc] {
        &self.tactic_docs
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn mod_docs(&self) -> &[ModuleDoc] {
        &self.mod_docs
    }

    /// Import tiers, smallest first.
    pub fn tiers(&self) -> &[ImportTier] {
        &self.tiers
    }

    /// Is the type a proposition?
    ///
    /// Judged structurally: the conclusion must be headed by a constant
    /// whose own type concludes in `Prop`.
    /// A host with an elaborator would answer by type inference instead.
    ///
    /// ~~~
    /// # use medio::{Binder, DeclKind, Declaration, Environment, Expr};
    /// let mut env = Environment::new();
    /// let eq_ty = Expr::pi(Binder::new("α", Expr::typ()), Expr::prop());
    /// env.declare(Declaration::new("eq", DeclKind::Constant, eq_ty))?;
    ///
    /// let stmt = Expr::Const("eq".into()).apply(vec![Expr::Const("x".into())]);
    /// assert!(env.is_prop(&stmt));
    /// assert!(!env.is_prop(&Expr::typ()));
    /// # Ok::<_, medio::Error>(())
    /// ~~~
    pub fn is_prop(&self, ty: &Expr) -> bool {
        match conclusion(ty).head() {
            Expr::Const(c) => match self.get(c) {
                Some(d) => matches!(conclusion(&d.ty), Expr::Sort(l) if l.is_zero()),
                None => false,
            },
            _ => false,
        }
    }

    /// Is the expression a type, a proposition, or a function into either?
    pub fn is_type_or_prop(&self, e: &Expr) -> bool {
        match conclusion(e).head() {
            Expr::Sort(_) => true,
            Expr::Const(c) => match self.get(c) {
                Some(d) => matches!(conclusion(&d.ty), Expr::Sort(_)),
                None => false,
            },
            _ => false,
        }
    }
}

#[test]
fn snapshot_round_trip() {
    use crate::{Binder, DeclKind};

    let nat = || Expr::Const("nat".into());
    let mut env = Environment::new();
    let ty = Declaration::new("nat", DeclKind::Constant, Expr::typ());
    env.declare(ty.at("data/nat.ln", 4)).unwrap();
    let succ = Expr::pi(Binder::new("n", nat()), nat());
    let succ = Declaration::new("nat.succ", DeclKind::Constant, succ);
    env.declare(succ.at("data/nat.ln", 9)).unwrap();
    env.document("nat".into(), "The natural numbers.");
    env.set_attr("simp", "nat.succ".into());
    env.add_equation("nat.succ".into(), Expr::Const("nat.succ.eq_1".into()));
    env.register_instance("nat".into());

    let json = serde_json::to_string(&env).unwrap();
    let back: Environment = serde_json::from_str(&json).unwrap();

    let names = |e: &Environment| e.decls().map(|d| d.name.clone()).collect::<Vec<_>>();
    assert_eq!(names(&back), names(&env));
    // the name index is skipped by serde and rebuilt from the declaration order
    let line = |d: &Declaration| d.pos.as_ref().map(|p| p.line);
    assert_eq!(back.get(&"nat.succ".into()).and_then(line), Some(9));
    assert_eq!(back.doc(&"nat".into()), Some("The natural numbers."));
    assert!(back.has_attr("simp", &"nat.succ".into()));
    assert_eq!(back.equations(&"nat.succ".into()).len(), 1);
    assert_eq!(back.instances().count(), 1);
}
