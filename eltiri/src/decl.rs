//! Extraction of single declarations.

use crate::signature::{open_signature, render_type, DeclArg};
use crate::simplify::simplify;
use crate::{attr, Efmt, Error, Host};
use alloc::string::String;
use alloc::vec::Vec;
use medio::{DeclKind, Declaration, Expr, Name};
use serde::Serialize;

/// One row of the declaration table.
#[derive(Debug, Serialize)]
pub struct DeclInfo {
    pub name: Name,
    pub args: Vec<DeclArg>,
    #[serde(rename = "type")]
    pub ty: Efmt,
    /// Doc comment, empty when undocumented.
    pub doc_string: String,
    pub filename: String,
    pub line: usize,
    pub attributes: Vec<String>,
    pub equations: Vec<Efmt>,
    pub kind: &'static str,
    pub structure_fields: Vec<(Name, Efmt)>,
    pub constructors: Vec<(Name, Efmt)>,
    pub noncomputable_reason: Option<Name>,
    pub sorried: bool,
}

/// Output kind of a declaration.
///
/// Constants registered as structures or inductives are reclassified.
fn kind<H: Host + ?Sized>(host: &H, decl: &Declaration) -> &'static str {
    match decl.kind {
        DeclKind::Constant if host.structure_info(&decl.name).is_some() => "structure",
        DeclKind::Constant if host.inductive_info(&decl.name).is_some() => "inductive",
        k => k.as_str(),
    }
}

/// Field types of a structure, read as projections of `self`.
fn fields<H: Host + ?Sized>(host: &H, name: &Name) -> Result<Vec<(Name, Efmt)>, Error> {
    let info = match host.structure_info(name) {
        Some(info) => info,
        None => return Ok(Vec::new()),
    };
    let field = |(n, ty): &(Name, Expr)| {
        let ty = render_type(host, ty.clone(), info.num_params + 1)?;
        Ok((n.clone(), ty))
    };
    info.fields.iter().map(field).collect()
}

/// Constructor types of an inductive, minus its parameters.
fn ctors<H: Host + ?Sized>(host: &H, name: &Name) -> Result<Vec<(Name, Efmt)>, Error> {
    let info = match host.inductive_info(name) {
        Some(info) => info,
        None => return Ok(Vec::new()),
    };
    let ctor = |(n, ty): &(Name, Expr)| {
        let ty = render_type(host, ty.clone(), info.num_params)?;
        Ok((n.clone(), ty))
    };
    info.ctors.iter().map(ctor).collect()
}

/// Extract the output row of a single declaration.
///
/// Returns `None` for declarations that are skipped on purpose:
/// machine-generated ones and those without a source position.
pub fn extract<H: Host + ?Sized>(host: &H, decl: &Declaration) -> Result<Option<DeclInfo>, Error> {
    if decl.name.is_internal() || decl.auto {
        return Ok(None);
    }
    let pos = match &decl.pos {
        Some(pos) => pos,
        None => return Ok(None),
    };

    let kind = kind(host, decl);
    let (args, ty) = open_signature(host, decl.ty.clone(), 0)?;

    // equation lemmas make sense for computational definitions only
    let mut equations = Vec::new();
    if decl.kind == DeclKind::Definition && !host.is_prop(&decl.ty) {
        for eqn in host.equations(&decl.name) {
            equations.push(simplify(host.pp(eqn)?));
        }
    }

    let structure_fields = match kind {
        "structure" => fields(host, &decl.name)?,
        _ => Vec::new(),
    };
    let constructors = match kind {
        "inductive" => ctors(host, &decl.name)?,
        _ => Vec::new(),
    };

    let in_value = decl.value.as_ref().map_or(false, Expr::contains_sorry);
    Ok(Some(DeclInfo {
        name: decl.name.clone(),
        args,
        ty,
        doc_string: host.doc_string(&decl.name).unwrap_or("").into(),
        filename: pos.file.clone(),
        line: pos.line,
        attributes: attr::gather(host, decl),
        equations,
        kind,
        structure_fields,
        constructors,
        noncomputable_reason: decl.noncomputable.clone(),
        sorried: in_value || decl.ty.contains_sorry(),
    }))
}

#[cfg(test)]
fn nat() -> Expr {
    Expr::Const("nat".into())
}

#[cfg(test)]
fn env() -> medio::Environment {
    let mut env = medio::Environment::new();
    let nat = Declaration::new("nat", DeclKind::Constant, Expr::typ()).at("data/nat.ln", 1);
    env.declare(nat).unwrap();
    env
}

#[test]
fn skips() -> Result<(), Error> {
    let env = env();
    let no_pos = Declaration::new("foo", DeclKind::Definition, nat());
    assert!(extract(&env, &no_pos)?.is_none());

    let internal = Declaration::new("foo._match_1", DeclKind::Definition, nat()).at("f.ln", 1);
    assert!(extract(&env, &internal)?.is_none());

    let mut auto = Declaration::new("bar", DeclKind::Definition, nat()).at("f.ln", 1);
    auto.auto = true;
    assert!(extract(&env, &auto)?.is_none());
    Ok(())
}

#[test]
fn doc_string_empty_when_undocumented() -> Result<(), Error> {
    let mut env = env();
    let d = Declaration::new("plain", DeclKind::Axiom, nat()).at("f.ln", 3);
    env.declare(d.clone()).unwrap();
    let info = extract(&env, &d)?.unwrap();
    assert_eq!(info.doc_string, "");
    assert_eq!(info.kind, "axiom");
    assert_eq!(info.filename, "f.ln");
    assert_eq!(info.line, 3);

    env.document("plain".into(), "Stated, not proved.");
    let info = extract(&env, &d)?.unwrap();
    assert_eq!(info.doc_string, "Stated, not proved.");
    Ok(())
}

#[test]
fn structures_have_no_constructors() -> Result<(), Error> {
    use medio::{Binder, BinderKind, InductiveInfo, StructureInfo};
    let mut env = env();
    let pair_ty = Expr::pi(Binder::new("α", Expr::typ()), Expr::typ());
    let pair = Declaration::new("pair", DeclKind::Constant, pair_ty).at("data/pair.ln", 1);
    env.declare(pair.clone()).unwrap();

    let fst = Expr::pi(
        Binder::new("α", Expr::typ()).kind(BinderKind::Implicit),
        Expr::pi(
            Binder::new("", Expr::Const("pair".into()).apply(alloc::vec![Expr::BVar(0)])),
            Expr::BVar(1),
        ),
    );
    let fields = alloc::vec![("pair.fst".into(), fst)];
    env.register_structure("pair".into(), StructureInfo { num_params: 1, fields });

    // structures are inductives to the host; the structure registration wins
    let ctors = alloc::vec![("pair.mk".into(), Expr::Const("pair".into()))];
    env.register_inductive("pair".into(), InductiveInfo { num_params: 1, ctors });

    let info = extract(&env, &pair)?.unwrap();
    assert_eq!(info.kind, "structure");
    assert!(info.constructors.is_empty());
    assert_eq!(info.structure_fields.len(), 1);
    assert_eq!(info.structure_fields[0].0.as_str(), "pair.fst");
    assert_eq!(info.structure_fields[0].1, Efmt::text("α"));
    Ok(())
}

#[test]
fn inductives_have_no_fields() -> Result<(), Error> {
    use medio::{Binder, InductiveInfo};
    let mut env = env();
    let list_ty = Expr::pi(Binder::new("α", Expr::typ()), Expr::typ());
    let list = Declaration::new("list", DeclKind::Constant, list_ty).at("data/list.ln", 1);
    env.declare(list.clone()).unwrap();

    let list_of = |v| Expr::Const("list".into()).apply(alloc::vec![Expr::BVar(v)]);
    let cons = Expr::pi(
        Binder::new("α", Expr::typ()),
        Expr::pi(
            Binder::new("hd", Expr::BVar(0)),
            Expr::pi(Binder::new("tl", list_of(1)), list_of(2)),
        ),
    );
    let ctors = alloc::vec![("list.cons".into(), cons)];
    env.register_inductive("list".into(), InductiveInfo { num_params: 1, ctors });

    let info = extract(&env, &list)?.unwrap();
    assert_eq!(info.kind, "inductive");
    assert!(info.structure_fields.is_empty());
    assert_eq!(info.constructors.len(), 1);
    let rendered = info.constructors[0].1.flatten();
    assert_eq!(rendered, "Π (hd : α), Π (tl : list α), list α");
    Ok(())
}

#[test]
fn equations_for_computational_definitions_only() -> Result<(), Error> {
    use medio::Binder;
    let mut env = env();
    let p = Declaration::new("p", DeclKind::Constant, Expr::prop()).at("f.ln", 1);
    env.declare(p).unwrap();

    let double_ty = Expr::pi(Binder::new("n", nat()), nat());
    let double = Declaration::new("double", DeclKind::Definition, double_ty)
        .with_value(Expr::lam(Binder::new("n", nat()), Expr::BVar(0)))
        .at("f.ln", 4);
    env.declare(double.clone()).unwrap();
    env.add_equation("double".into(), Expr::Const("double.eq_1".into()));
    let info = extract(&env, &double)?.unwrap();
    assert_eq!(info.equations, [Efmt::text("double.eq_1")]);

    // theorems never carry equations
    let thm = Declaration::new("thm", DeclKind::Theorem, Expr::Const("p".into())).at("f.ln", 9);
    env.declare(thm.clone()).unwrap();
    env.add_equation("thm".into(), Expr::Const("thm.eq_1".into()));
    assert!(extract(&env, &thm)?.unwrap().equations.is_empty());

    // neither do definitions of propositions
    let pdef = Declaration::new("pdef", DeclKind::Definition, Expr::Const("p".into()))
        .with_value(Expr::Const("thm".into()))
        .at("f.ln", 12);
    env.declare(pdef.clone()).unwrap();
    env.add_equation("pdef".into(), Expr::Const("pdef.eq_1".into()));
    assert!(extract(&env, &pdef)?.unwrap().equations.is_empty());
    Ok(())
}

#[test]
fn sorried_and_noncomputable() -> Result<(), Error> {
    let mut env = env();
    let mut d = Declaration::new("cheat", DeclKind::Theorem, Expr::prop())
        .with_value(Expr::sorry())
        .at("f.ln", 2);
    d.noncomputable = Some("cheat.aux".into());
    env.declare(d.clone()).unwrap();

    let info = extract(&env, &d)?.unwrap();
    assert!(info.sorried);
    assert_eq!(info.noncomputable_reason, Some("cheat.aux".into()));
    Ok(())
}
