//! Instance indexes.

use crate::host::Host;
use alloc::collections::{BTreeMap, BTreeSet};
use alloc::vec::Vec;
use core::fmt::{self, Display};
use medio::{BinderKind, Expr, Level, Name};

/// The two instance indexes.
#[derive(Debug, Default)]
pub struct Index {
    /// class name → instances of the class
    pub instances: BTreeMap<Name, Vec<Name>>,
    /// argument type name → instances taking an argument of the type
    pub instances_for: BTreeMap<Name, Vec<Name>>,
}

/// Why an instance or one of its arguments could not be indexed.
#[derive(Debug)]
pub enum Reason {
    /// The instance name is not declared.
    Undeclared,
    /// The conclusion's head is not a constant.
    NoClass,
    /// An argument's head falls outside the index vocabulary.
    Arg(&'static str),
}

/// Diagnostic recorded against a single instance.
#[derive(Debug)]
pub struct Diagnostic {
    pub instance: Name,
    pub reason: Reason,
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "instance {}: ", self.instance)?;
        match &self.reason {
            Reason::Undeclared => write!(f, "not declared"),
            Reason::NoClass => write!(f, "conclusion head is not a class"),
            Reason::Arg(shape) => write!(f, "argument headed by {}", shape),
        }
    }
}

/// Classify an argument head into the index vocabulary.
///
/// `Ok(None)` stands for heads that are deliberately not indexed,
/// namely local variables and unexpanded macros.
fn key(head: &Expr) -> Result<Option<Name>, &'static str> {
    match head {
        Expr::Const(c) => Ok(Some(c.clone())),
        Expr::Pi(..) => Ok(Some("pi".into())),
        Expr::Sort(l) if l.is_zero() => Ok(Some("Prop".into())),
        Expr::Sort(Level::Succ(_)) => Ok(Some("Type".into())),
        Expr::Sort(_) => Ok(Some("Sort".into())),
        Expr::Local(_) | Expr::Macro(..) => Ok(None),
        Expr::BVar(_) => Err("a bound variable"),
        Expr::Appl(..) => Err("an application"),
        Expr::Lam(..) => Err("a lambda"),
        Expr::Let(..) => Err("a let-expression"),
        Expr::Meta(_) => Err("a metavariable"),
    }
}

/// Build both instance indexes.
///
/// Classification failures are returned as diagnostics;
/// an instance with a diagnosed argument still appears under its class.
pub fn index<H: Host + ?Sized>(host: &H) -> (Index, Vec<Diagnostic>) {
    let mut idx = Index::default();
    let mut diags = Vec::new();
    for inst in host.instances() {
        let diag = |reason| Diagnostic { instance: inst.clone(), reason };
        let decl = match host.get(inst) {
            Some(decl) => decl,
            None => {
                diags.push(diag(Reason::Undeclared));
                continue;
            }
        };
        let (_, concl) = decl.ty.clone().open_pis();
        let class = match concl.head() {
            Expr::Const(c) => c.clone(),
            _ => {
                diags.push(diag(Reason::NoClass));
                continue;
            }
        };
        idx.instances.entry(class.clone()).or_default().push(inst.clone());

        // explicitness of argument positions is read off the class itself
        let class_binders = match host.get(&class) {
            Some(c) => c.ty.clone().open_pis().0,
            None => Vec::new(),
        };
        if let Expr::Appl(_, args) = &concl {
            // one listing per argument type, even when a type recurs
            let mut keys = BTreeSet::new();
            for (k, arg) in args.iter().enumerate() {
                let explicit = class_binders
                    .get(k)
                    .map_or(true, |b| b.kind == BinderKind::Default);
                if !explicit || !host.is_type_or_prop(arg) {
                    continue;
                }
                match key(arg.head()) {
                    Ok(Some(t)) => {
                        keys.insert(t);
                    }
                    Ok(None) => (),
                    Err(shape) => diags.push(diag(Reason::Arg(shape))),
                }
            }
            for t in keys {
                idx.instances_for.entry(t).or_default().push(inst.clone());
            }
        }
    }
    (idx, diags)
}

#[cfg(test)]
fn declare(env: &mut medio::Environment, name: &str, ty: Expr) {
    use medio::{DeclKind, Declaration};
    let d = Declaration::new(name, DeclKind::Constant, ty).at("f.ln", 1);
    env.declare(d).unwrap();
}

#[test]
fn class_and_argument_indexes() {
    use medio::Binder;
    let mut env = medio::Environment::new();
    declare(&mut env, "nat", Expr::typ());
    let deq_ty = Expr::pi(Binder::new("α", Expr::typ()), Expr::typ());
    declare(&mut env, "decidable_eq", deq_ty);

    let deq = |a| Expr::Const("decidable_eq".into()).apply(alloc::vec![a]);
    declare(&mut env, "nat.deq", deq(Expr::Const("nat".into())));
    let arrow = Expr::arrow(Expr::Const("nat".into()), Expr::Const("nat".into()));
    declare(&mut env, "fun.deq", deq(arrow));
    declare(&mut env, "prop.deq", deq(Expr::prop()));
    for inst in ["nat.deq", "fun.deq", "prop.deq"] {
        env.register_instance(inst.into());
    }

    let (idx, diags) = index(&env);
    assert!(diags.is_empty());
    let of_class: Vec<_> = idx.instances[&Name::from("decidable_eq")]
        .iter()
        .map(Name::as_str)
        .collect();
    assert_eq!(of_class, ["nat.deq", "fun.deq", "prop.deq"]);

    let keys: Vec<_> = idx.instances_for.keys().map(Name::as_str).collect();
    assert_eq!(keys, ["Prop", "nat", "pi"]);
    let for_nat: Vec<_> = idx.instances_for[&Name::from("nat")].iter().map(Name::as_str).collect();
    assert_eq!(for_nat, ["nat.deq"]);
}

#[test]
fn repeated_argument_types_listed_once() {
    use medio::Binder;
    let mut env = medio::Environment::new();
    declare(&mut env, "nat", Expr::typ());
    let hom_ty = Expr::pi(
        Binder::new("α", Expr::typ()),
        Expr::pi(Binder::new("β", Expr::typ()), Expr::typ()),
    );
    declare(&mut env, "hom", hom_ty);
    let args = alloc::vec![Expr::Const("nat".into()), Expr::Const("nat".into())];
    declare(&mut env, "nat.hom", Expr::Const("hom".into()).apply(args));
    env.register_instance("nat.hom".into());

    let (idx, diags) = index(&env);
    assert!(diags.is_empty());
    let for_nat: Vec<_> = idx.instances_for[&Name::from("nat")].iter().map(Name::as_str).collect();
    assert_eq!(for_nat, ["nat.hom"]);
}

#[test]
fn implicit_class_arguments_not_indexed() {
    use medio::Binder;
    let mut env = medio::Environment::new();
    declare(&mut env, "nat", Expr::typ());
    let cls = Expr::pi(Binder::new("α", Expr::typ()).kind(BinderKind::Implicit), Expr::typ());
    declare(&mut env, "phantom", cls);
    let inst_ty = Expr::Const("phantom".into()).apply(alloc::vec![Expr::Const("nat".into())]);
    declare(&mut env, "phantom.nat", inst_ty);
    env.register_instance("phantom.nat".into());

    let (idx, diags) = index(&env);
    assert!(diags.is_empty());
    assert_eq!(idx.instances.len(), 1);
    assert!(idx.instances_for.is_empty());
}

#[test]
fn diagnostics_are_not_fatal() {
    use medio::Binder;
    let mut env = medio::Environment::new();
    declare(&mut env, "nat", Expr::typ());
    declare(&mut env, "deq", Expr::pi(Binder::new("α", Expr::typ()), Expr::typ()));
    let inst_ty = Expr::Const("deq".into()).apply(alloc::vec![Expr::Const("nat".into())]);
    declare(&mut env, "nat.deq", inst_ty);
    declare(&mut env, "classless", Expr::typ());

    env.register_instance("ghost".into());
    env.register_instance("classless".into());
    env.register_instance("nat.deq".into());

    let (idx, diags) = index(&env);
    assert_eq!(diags.len(), 2);
    assert_eq!(idx.instances.len(), 1);
    let for_nat: Vec<_> = idx.instances_for[&Name::from("nat")].iter().map(Name::as_str).collect();
    assert_eq!(for_nat, ["nat.deq"]);
}
