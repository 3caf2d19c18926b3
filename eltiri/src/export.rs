//! Assembly of the export document.

use crate::tactic::{self, TacticEntry};
use crate::{decl, instances, DeclInfo, Host};
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use medio::Name;
use serde::Serialize;

/// Module documentation entry of a single file.
#[derive(Debug, Serialize)]
pub struct ModDocEntry {
    pub line: usize,
    pub doc: String,
}

/// The complete document handed to the documentation generator.
#[derive(Debug, Serialize)]
pub struct Export {
    pub decls: Vec<DeclInfo>,
    pub mod_docs: BTreeMap<String, Vec<ModDocEntry>>,
    /// Library notes as (name, content) pairs.
    pub notes: Vec<(String, String)>,
    pub tactic_docs: Vec<TacticEntry>,
    pub instances: BTreeMap<Name, Vec<Name>>,
    pub instances_for: BTreeMap<Name, Vec<Name>>,
}

/// Walk the whole library and collect the export document.
///
/// Failures of single declarations or instances are logged and dropped;
/// the remaining entries are emitted regardless.
pub fn export<H: Host + ?Sized>(host: &H) -> Export {
    let mut decls = Vec::new();
    let mut skipped: usize = 0;
    let mut file_rank: BTreeMap<String, usize> = BTreeMap::new();
    for d in host.decls() {
        match decl::extract(host, d) {
            Ok(Some(info)) => {
                let next = file_rank.len();
                file_rank.entry(info.filename.clone()).or_insert(next);
                decls.push(info);
            }
            Ok(None) => skipped += 1,
            Err(e) => {
                skipped += 1;
                warn!("dropping {}: {}", d.name, e)
            }
        }
    }
    // files keep their first-seen order, declarations of a file their line order
    decls.sort_by_key(|i| (file_rank.get(&i.filename).copied(), i.line));

    let mut mod_docs: BTreeMap<String, Vec<ModDocEntry>> = BTreeMap::new();
    for md in host.mod_docs() {
        let entry = ModDocEntry { line: md.line, doc: md.doc.clone() };
        mod_docs.entry(md.file.clone()).or_default().push(entry);
    }
    mod_docs.values_mut().for_each(|v| v.sort_by_key(|e| e.line));

    let notes = host.notes().iter();
    let notes = notes.map(|n| (n.name.clone(), n.content.clone())).collect();

    let (index, diags) = instances::index(host);
    for diag in &diags {
        warn!("{}", diag);
    }
    info!(
        "extracted {} declarations ({} skipped), {} instance diagnostics",
        decls.len(),
        skipped,
        diags.len()
    );

    Export {
        decls,
        mod_docs,
        notes,
        tactic_docs: tactic::entries(host),
        instances: index.instances,
        instances_for: index.instances_for,
    }
}

#[test]
fn line_order_within_files() {
    use medio::{DeclKind, Declaration, Environment, Expr};
    let mut env = Environment::new();
    let decls = [
        ("a.one", "data/a.ln", 5),
        ("b.one", "data/b.ln", 1),
        ("a.two", "data/a.ln", 2),
        ("hidden", "data/a.ln", 9),
    ];
    for (name, file, line) in decls {
        let mut d = Declaration::new(name, DeclKind::Constant, Expr::typ()).at(file, line);
        d.auto = name == "hidden";
        env.declare(d).unwrap();
    }

    let out = export(&env);
    let names: Vec<_> = out.decls.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, ["a.two", "a.one", "b.one"]);
}

#[test]
fn document_shape() {
    use medio::{DeclKind, Declaration, DocCategory, Environment, Expr};
    use medio::{ImportTier, ModuleDoc, Note, TacticDoc};
    let mut env = Environment::new();
    let nat = Declaration::new("nat", DeclKind::Constant, Expr::typ()).at("data/nat.ln", 1);
    env.declare(nat).unwrap();
    env.document("nat".into(), "The natural numbers.");
    env.add_mod_doc(ModuleDoc {
        file: "data/nat.ln".into(),
        line: 1,
        doc: "Basics.".into(),
    });
    env.add_note(Note { name: "simp-normal".into(), content: "Keep sums right.".into() });
    env.add_tactic_doc(TacticDoc {
        name: "ring".into(),
        category: DocCategory::Tactic,
        decl_names: alloc::vec!["tactic.ring".into()],
        tags: alloc::vec!["arith".into()],
        description: "Solve ring equalities.".into(),
    });
    env.add_tier(ImportTier::new("in default", ["tactic.ring".into()]));

    let v = serde_json::to_value(export(&env)).unwrap();
    let expected = serde_json::json!({
        "decls": [{
            "name": "nat",
            "args": [],
            "type": "Type",
            "doc_string": "The natural numbers.",
            "filename": "data/nat.ln",
            "line": 1,
            "attributes": [],
            "equations": [],
            "kind": "constant",
            "structure_fields": [],
            "constructors": [],
            "noncomputable_reason": null,
            "sorried": false,
        }],
        "mod_docs": { "data/nat.ln": [{ "line": 1, "doc": "Basics." }] },
        "notes": [["simp-normal", "Keep sums right."]],
        "tactic_docs": [{
            "name": "ring",
            "category": "tactic",
            "decl_names": ["tactic.ring"],
            "tags": ["arith"],
            "description": "Solve ring equalities.",
            "imported": "in default",
        }],
        "instances": {},
        "instances_for": {},
    });
    assert_eq!(v, expected);
}
