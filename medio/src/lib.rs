#![no_std]
#![forbid(unsafe_code)]

//! Data model for compiled proof library snapshots.
//!
//! This is the library underlying the Eldok documentation exporter.
//!
//! # Usage
//!
//! The central type of this crate is the [`Environment`]:
//! the declarations of a compiled library in their original order,
//! together with the registries that a host keeps next to them
//! (doc strings, attributes, equation lemmas, structure and inductive data,
//! instances, tactic documentation, library notes, and import tiers).
//! A host fills the environment via its registration functions and
//! either hands it over in memory or
//! serializes it as a whole to obtain a snapshot.
//!
//! Expressions are kept in spine form
//! ([`Expr::Appl`] applies a head to all its arguments at once)
//! and use de Bruijn indices for bound variables.
//! The pretty printer [`pp`] renders an expression to a [`Format`] tree,
//! which keeps nesting and name tags, so that
//! consumers can lay out and hyperlink the output.
//!
//! ~~~
//! # use medio::{Binder, DeclKind, Declaration, Environment, Expr, pp};
//! let nat = || Expr::Const("nat".into());
//!
//! let mut env = Environment::new();
//! env.declare(Declaration::new("nat", DeclKind::Constant, Expr::typ()))?;
//! env.declare(Declaration::new("nat.zero", DeclKind::Constant, nat()))?;
//!
//! // nat.id (n : nat) : nat := n
//! let ty = Expr::pi(Binder::new("n", nat()), nat());
//! let value = Expr::lam(Binder::new("n", nat()), Expr::BVar(0));
//! let id = Declaration::new("nat.id", DeclKind::Definition, ty).with_value(value);
//! env.declare(id.at("data/nat.ln", 42))?;
//! env.document("nat.id".into(), "The identity on `nat`.");
//!
//! let id = env.get(&"nat.id".into()).unwrap();
//! assert_eq!(pp(&id.ty).flatten(), "Π (n : nat), nat");
//! assert_eq!(env.doc(&id.name), Some("The identity on `nat`."));
//! # Ok::<_, medio::Error>(())
//! ~~~
//!
//! # Organisation
//!
//! * The [`expr`](Expr) and [`level`](Level) types model the core language,
//! * [`Format`] and [`pp`] cover rendering,
//! * [`Declaration`] and its companions model what hosts register, and
//! * [`Environment`] ties all tables together.

extern crate alloc;

mod decl;
mod env;
mod expr;
mod format;
mod level;
mod name;
mod pp;

pub use decl::{DeclKind, Declaration, DocCategory, ImportTier, InductiveInfo};
pub use decl::{ModuleDoc, Note, SourcePos, StructureInfo, TacticDoc};
pub use env::{Environment, Error};
pub use expr::{Binder, BinderKind, DeBruijn, Expr};
pub use format::Format;
pub use level::Level;
pub use name::Name;
pub use pp::pp;
