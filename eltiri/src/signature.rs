//! Argument lists and return types of declarations.

use crate::efmt::Efmt;
use crate::error::Error;
use crate::host::Host;
use crate::simplify::simplify;
use alloc::string::String;
use alloc::vec::Vec;
use medio::{Binder, BinderKind, Expr, Format};
use serde::Serialize;

/// Rendered argument of a declaration.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct DeclArg {
    pub arg: Efmt,
    pub implicit: bool,
}

/// Consume leading binders,
/// replacing each bound variable by a local of the binder's name.
///
/// Anonymous binders are named `self`,
/// so that projections out of a structure read naturally.
fn suppress(ty: Expr, skip: usize) -> Expr {
    let mut tm = ty;
    for _ in 0..skip {
        match tm {
            Expr::Pi(bind, body) => {
                let id = match bind.id.is_empty() {
                    true => String::from("self"),
                    false => bind.id,
                };
                tm = body.instantiate(&Expr::Local(id));
            }
            other => return other,
        }
    }
    tm
}

/// Render one binder group.
///
/// Explicit arguments appear bare and all other kinds keep their brackets;
/// instance arguments with a placeholder name collapse to just their type.
fn arg<H: Host + ?Sized>(host: &H, bind: &Binder) -> Result<DeclArg, Error> {
    let implicit = bind.kind != BinderKind::Default;
    let ty = host.pp(&bind.ty)?;
    let (open, close) = bind.kind.delimiters();
    let fmt = if bind.kind == BinderKind::InstImplicit && bind.is_placeholder() {
        Format::text(open).then(ty).then(Format::text(close))
    } else {
        let named = Format::text(bind.id.as_str())
            .then(Format::text(" : "))
            .then(ty);
        match bind.kind {
            BinderKind::Default => named,
            _ => Format::text(open).then(named).then(Format::text(close)),
        }
    };
    Ok(DeclArg { arg: simplify(fmt), implicit })
}

/// Split a type into rendered arguments and a rendered return type.
///
/// The first `skip` binders are consumed without being rendered.
/// The walk stops at the first anonymous explicit binder,
/// so plain hypothesis arrows remain part of the returned type.
pub fn open_signature<H: Host + ?Sized>(
    host: &H,
    ty: Expr,
    skip: usize,
) -> Result<(Vec<DeclArg>, Efmt), Error> {
    let mut tm = suppress(ty, skip);
    let mut args = Vec::new();
    loop {
        match tm {
            Expr::Pi(bind, body) if !(bind.kind == BinderKind::Default && bind.id.is_empty()) => {
                args.push(arg(host, &bind)?);
                tm = body.instantiate(&Expr::Local(bind.id));
            }
            other => return Ok((args, simplify(host.pp(&other)?))),
        }
    }
}

/// Render a type after consuming `skip` leading binders.
///
/// Structure fields and constructors are rendered this way,
/// so their types read as if applied to the parent's parameters.
pub fn render_type<H: Host + ?Sized>(host: &H, ty: Expr, skip: usize) -> Result<Efmt, Error> {
    Ok(simplify(host.pp(&suppress(ty, skip))?))
}

#[test]
fn example_args() -> Result<(), Error> {
    use medio::Environment;
    let env = Environment::new();
    let nat = || Expr::Const("Nat".into());
    let deceq = Expr::Const("DecidableEq".into()).apply(alloc::vec![nat()]);
    let inst = Binder::new("_inst_1", deceq).kind(BinderKind::InstImplicit);
    let ty = Expr::pi(Binder::new("n", nat()), Expr::pi(inst, nat()));

    let (args, ret) = open_signature(&env, ty, 0)?;
    assert_eq!(args.len(), 2);
    assert_eq!(args[0].arg, Efmt::text("n : Nat"));
    assert!(!args[0].implicit);
    assert_eq!(args[1].arg, Efmt::text("[DecidableEq Nat]"));
    assert!(args[1].implicit);
    assert_eq!(ret, Efmt::text("Nat"));
    Ok(())
}

#[test]
fn arrows_stop_the_walk() -> Result<(), Error> {
    use medio::Environment;
    let env = Environment::new();
    let nat = || Expr::Const("nat".into());
    let ty = Expr::arrow(nat(), Expr::pi(Binder::new("n", nat()), nat()));
    let (args, ret) = open_signature(&env, ty, 0)?;
    assert!(args.is_empty());
    assert_eq!(ret.flatten(), "nat → Π (n : nat), nat");
    Ok(())
}

#[test]
fn binder_kinds_keep_brackets() -> Result<(), Error> {
    use medio::Environment;
    let env = Environment::new();
    let ty = Expr::pi(
        Binder::new("α", Expr::typ()).kind(BinderKind::Implicit),
        Expr::pi(
            Binder::new("h", Expr::Const("dec".into())).kind(BinderKind::InstImplicit),
            Expr::pi(
                Binder::new("x", Expr::Local("α".into())).kind(BinderKind::StrictImplicit),
                Expr::Local("α".into()),
            ),
        ),
    );
    let (args, _) = open_signature(&env, ty, 0)?;
    let flat: Vec<_> = args.iter().map(|a| a.arg.flatten()).collect();
    assert_eq!(flat, ["{α : Type}", "[h : dec]", "⦃x : α⦄"]);
    assert!(args.iter().all(|a| a.implicit));
    Ok(())
}

#[test]
fn suppressed_parameters() -> Result<(), Error> {
    use medio::Environment;
    let env = Environment::new();
    // fst : Π {α : Type}, pair α → α, read as a projection of `self`
    let pair = Expr::Const("pair".into()).apply(alloc::vec![Expr::BVar(0)]);
    let proj = Expr::pi(
        Binder::new("α", Expr::typ()).kind(BinderKind::Implicit),
        Expr::pi(Binder::new("", pair), Expr::BVar(1)),
    );
    assert_eq!(render_type(&env, proj, 2)?, Efmt::text("α"));
    Ok(())
}
