//! Declaration extraction for proof library documentation.
//!
//! This crate walks a compiled proof library and collects everything a
//! documentation generator needs into a single [`Export`] document:
//! declaration signatures with rendered argument lists, doc comments,
//! attributes, defining equations, structure fields and constructors,
//! module documentation, library notes, tactic documentation and
//! the type-class instance indexes.
//!
//! The library is accessed through the [`Host`] trait,
//! so the extraction can be tested against a small in-memory
//! [`medio::Environment`] instead of a live proof assistant:
//!
//! ~~~
//! use medio::{Binder, DeclKind, Declaration, Environment, Expr};
//! let nat = || Expr::Const("nat".into());
//!
//! let mut env = Environment::new();
//! env.declare(Declaration::new("nat", DeclKind::Constant, Expr::typ()).at("data/nat.ln", 1))?;
//!
//! // nat.double (n : nat) : nat
//! let double = Declaration::new(
//!     "nat.double",
//!     DeclKind::Definition,
//!     Expr::pi(Binder::new("n", nat()), nat()),
//! );
//! env.declare(double.at("data/nat.ln", 4))?;
//! env.document("nat.double".into(), "Twice the input.");
//!
//! let out = eltiri::export(&env);
//! assert_eq!(out.decls.len(), 2);
//! assert_eq!(out.decls[1].doc_string, "Twice the input.");
//! assert_eq!(out.decls[1].args[0].arg.flatten(), "n : nat");
//! assert_eq!(out.decls[1].ty.flatten(), "nat");
//! # Ok::<_, medio::Error>(())
//! ~~~
//!
//! Failures are confined to single declarations:
//! a declaration that cannot be rendered is logged and dropped,
//! and the rest of the library is exported regardless.

#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

#[macro_use]
extern crate log;

mod attr;
mod decl;
mod efmt;
pub mod error;
mod export;
mod host;
mod instances;
mod signature;
mod simplify;
mod tactic;

pub use decl::{extract, DeclInfo};
pub use efmt::Efmt;
pub use error::Error;
pub use export::{export, Export, ModDocEntry};
pub use host::Host;
pub use instances::{index, Diagnostic, Index, Reason};
pub use signature::{open_signature, render_type, DeclArg};
pub use simplify::simplify;
pub use tactic::TacticEntry;
