//! Tactic documentation entries.

use crate::host::Host;
use alloc::string::String;
use alloc::vec::Vec;
use medio::{Name, TacticDoc};
use serde::Serialize;

/// Classification for tactics reachable from none of the import tiers.
const UNIMPORTED: &str = "not commonly imported";

/// Tactic documentation entry as it appears in the output.
#[derive(Debug, Serialize)]
pub struct TacticEntry {
    pub name: String,
    pub category: &'static str,
    pub decl_names: Vec<Name>,
    pub tags: Vec<String>,
    pub description: String,
    /// Smallest import tier from which the tactic is reachable.
    pub imported: String,
}

/// How commonly is the first related declaration reachable?
///
/// The tiers grow progressively larger and the first match wins.
fn imported<H: Host + ?Sized>(host: &H, doc: &TacticDoc) -> String {
    let first = match doc.decl_names.first() {
        Some(first) => first,
        None => return String::from(UNIMPORTED),
    };
    let tier = host.tiers().iter().find(|t| t.members.contains(first));
    match tier {
        Some(tier) => tier.label.clone(),
        None => String::from(UNIMPORTED),
    }
}

/// All tactic documentation entries, in registration order.
pub fn entries<H: Host + ?Sized>(host: &H) -> Vec<TacticEntry> {
    let entry = |doc: &TacticDoc| TacticEntry {
        name: doc.name.clone(),
        category: doc.category.as_str(),
        decl_names: doc.decl_names.clone(),
        tags: doc.tags.clone(),
        description: doc.description.clone(),
        imported: imported(host, doc),
    };
    host.tactic_docs().iter().map(entry).collect()
}

#[cfg(test)]
fn doc(name: &str, decl_names: Vec<Name>) -> TacticDoc {
    TacticDoc {
        name: name.into(),
        category: medio::DocCategory::Tactic,
        decl_names,
        tags: alloc::vec![String::from("core")],
        description: String::from("..."),
    }
}

#[test]
fn first_tier_wins() {
    use medio::{Environment, ImportTier};
    let mut env = Environment::new();
    env.add_tier(ImportTier::new("in default", ["tac.a".into()]));
    env.add_tier(ImportTier::new("in common", ["tac.a".into(), "tac.b".into()]));
    env.add_tier(ImportTier::new("in rare", ["tac.c".into()]));

    env.add_tactic_doc(doc("a", alloc::vec!["tac.a".into()]));
    env.add_tactic_doc(doc("b", alloc::vec!["tac.b".into(), "tac.a".into()]));
    env.add_tactic_doc(doc("c", alloc::vec!["tac.c".into()]));
    env.add_tactic_doc(doc("d", alloc::vec!["tac.d".into()]));
    env.add_tactic_doc(doc("e", alloc::vec![]));

    let imported: Vec<_> = entries(&env).into_iter().map(|e| e.imported).collect();
    let expected = ["in default", "in common", "in rare", UNIMPORTED, UNIMPORTED];
    assert_eq!(imported, expected);
}
