//! Attributes as they appear in the output.

use crate::host::Host;
use alloc::string::String;
use alloc::vec::Vec;
use medio::Declaration;

/// Attributes the output records, in output order.
const CHECKLIST: [&str; 10] = [
    "simp",
    "instance",
    "class",
    "ext",
    "norm_cast",
    "mono",
    "refl",
    "symm",
    "trans",
    "congr",
];

/// Attribute names carried by the declaration,
/// including the `protected` pseudo-attribute.
pub fn gather<H: Host + ?Sized>(host: &H, decl: &Declaration) -> Vec<String> {
    let checklist = CHECKLIST.iter();
    let mut attrs: Vec<_> = checklist
        .filter(|attr| host.has_attr(attr, &decl.name))
        .map(|attr| String::from(*attr))
        .collect();
    if decl.protected {
        attrs.push(String::from("protected"));
    }
    attrs
}

#[test]
fn checklist_and_protected() {
    use medio::{DeclKind, Environment, Expr};
    let mut env = Environment::new();
    let mut decl = medio::Declaration::new("a.b", DeclKind::Definition, Expr::typ());
    decl.protected = true;
    env.declare(decl.clone()).unwrap();
    env.set_attr("simp", "a.b".into());
    env.set_attr("elab_as_eliminator", "a.b".into());

    assert_eq!(gather(&env, &decl), ["simp", "protected"]);
}
