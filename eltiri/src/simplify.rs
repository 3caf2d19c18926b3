//! Simplification of layout trees.
//!
//! The host pretty printer produces heavily fragmented trees;
//! this module rewrites them into equivalent minimal [`Efmt`] trees.
//! The rendered characters are preserved exactly.

use crate::efmt::Efmt;
use alloc::boxed::Box;
use alloc::string::String;
use medio::Format;

/// Does the text consist only of opening bracket characters?
fn is_open(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| matches!(c, '(' | '[' | '{'))
}

/// Does the text consist only of closing bracket characters?
fn is_close(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| matches!(c, ')' | ']' | '}'))
}

fn cc(a: Efmt, b: Efmt) -> Efmt {
    Efmt::Concat(Box::new(a), Box::new(b))
}

/// Strip tags and highlights, turning tag wrappers into nesting markers.
fn detag(f: Format) -> Efmt {
    match f {
        Format::Text(s) => Efmt::Text(s),
        Format::Concat(a, b) => cc(detag(*a), detag(*b)),
        Format::Nest(i, f) => Efmt::Nest(i, Box::new(detag(*f))),
        Format::Tag(_, f) => Efmt::Nest(0, Box::new(detag(*f))),
        Format::Highlight(f) => detag(*f),
    }
}

/// Collapse nested nesting and drop nesting around break-free leaves.
fn renest(i: isize, f: Efmt) -> Efmt {
    if i == 0 {
        return f;
    }
    match f {
        Efmt::Nest(j, g) => renest(i + j, *g),
        Efmt::Text(s) if !s.contains(char::is_whitespace) => Efmt::Text(s),
        f => Efmt::Nest(i, Box::new(f)),
    }
}

/// Concatenate two simplified trees,
/// re-associating to the right and merging brackets at the seam.
fn concat(a: Efmt, b: Efmt) -> Efmt {
    match a {
        Efmt::Concat(a1, a2) => concat(*a1, concat(*a2, b)),
        Efmt::Text(s) => fuse(s, b),
        a => match b {
            Efmt::Text(t) if is_close(&t) => absorb(a, t),
            Efmt::Concat(b1, b2) => match (*b1, b2) {
                (Efmt::Text(t), b2) if is_close(&t) => concat(absorb(a, t), *b2),
                (b1, b2) => cc(a, cc(b1, *b2)),
            },
            b => cc(a, b),
        },
    }
}

/// Attach a text leaf to the left of a simplified tree.
fn fuse(mut s: String, b: Efmt) -> Efmt {
    match b {
        Efmt::Text(t) => {
            s.push_str(&t);
            Efmt::Text(s)
        }
        Efmt::Nest(i, g) if is_open(&s) => renest(i, prepend(s, *g)),
        Efmt::Concat(b1, b2) => {
            if can_fuse(&s, &b1) {
                concat(fuse(s, *b1), *b2)
            } else {
                cc(Efmt::Text(s), Efmt::Concat(b1, b2))
            }
        }
        b => cc(Efmt::Text(s), b),
    }
}

/// Would `fuse(s, b)` merge anything?
fn can_fuse(s: &str, b: &Efmt) -> bool {
    match b {
        Efmt::Text(_) => true,
        Efmt::Nest(..) => is_open(s),
        Efmt::Concat(..) => false,
    }
}

/// Push opening brackets onto the leftmost leaf.
fn prepend(mut s: String, f: Efmt) -> Efmt {
    match f {
        Efmt::Text(t) => {
            s.push_str(&t);
            Efmt::Text(s)
        }
        Efmt::Nest(i, g) => renest(i, prepend(s, *g)),
        Efmt::Concat(a, b) => concat(prepend(s, *a), *b),
    }
}

/// Push closing brackets onto the rightmost leaf.
fn absorb(a: Efmt, t: String) -> Efmt {
    match a {
        Efmt::Text(mut s) => {
            s.push_str(&t);
            Efmt::Text(s)
        }
        Efmt::Nest(i, g) => renest(i, absorb(*g, t)),
        Efmt::Concat(a1, a2) => concat(*a1, absorb(*a2, t)),
    }
}

/// Children first, then the node itself.
fn simp(f: Efmt) -> Efmt {
    match f {
        Efmt::Text(s) => Efmt::Text(s),
        Efmt::Concat(a, b) => concat(simp(*a), simp(*b)),
        Efmt::Nest(i, f) => renest(i, simp(*f)),
    }
}

/// Rewrite a layout tree into an equivalent minimal one.
///
/// Every rewrite step reduces the tree size or grows a leaf,
/// so simplification always terminates; its result is a fixpoint.
///
/// ~~~
/// # use medio::Format;
/// let f = Format::text("(").then(Format::text("x").then(Format::text(")")));
/// assert_eq!(eltiri::simplify(f).flatten(), "(x)");
/// ~~~
pub fn simplify(f: Format) -> Efmt {
    simp(detag(f))
}

#[cfg(test)]
fn sample(seed: &mut u64, depth: usize) -> Format {
    const LEAVES: [&str; 8] = ["x", "( ", "(", ")", "[", "]", "a b", " "];
    *seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    let pick = (*seed >> 33) % if depth == 0 { 2 } else { 6 };
    match pick {
        0 | 1 => Format::text(LEAVES[(*seed >> 13) as usize % LEAVES.len()]),
        2 => Format::Concat(
            Box::new(sample(seed, depth - 1)),
            Box::new(sample(seed, depth - 1)),
        ),
        3 => Format::Nest(
            ((*seed >> 7) % 5) as isize - 1,
            Box::new(sample(seed, depth - 1)),
        ),
        4 => Format::Tag("t".into(), Box::new(sample(seed, depth - 1))),
        _ => Format::Highlight(Box::new(sample(seed, depth - 1))),
    }
}

#[cfg(test)]
fn embed(e: &Efmt) -> Format {
    match e {
        Efmt::Text(s) => Format::text(s.clone()),
        Efmt::Concat(a, b) => Format::Concat(Box::new(embed(a)), Box::new(embed(b))),
        Efmt::Nest(i, f) => Format::Nest(*i, Box::new(embed(f))),
    }
}

#[cfg(test)]
fn size(e: &Efmt) -> usize {
    match e {
        Efmt::Text(_) => 1,
        Efmt::Concat(a, b) => 1 + size(a) + size(b),
        Efmt::Nest(_, f) => 1 + size(f),
    }
}

#[cfg(test)]
fn format_size(f: &Format) -> usize {
    match f {
        Format::Text(_) => 1,
        Format::Concat(a, b) => 1 + format_size(a) + format_size(b),
        Format::Nest(_, f) | Format::Tag(_, f) | Format::Highlight(f) => 1 + format_size(f),
    }
}

#[test]
fn preserves_characters_and_idempotent() {
    let mut seed = 42;
    for _ in 0..2000 {
        let f = sample(&mut seed, 6);
        let flat = f.flatten();
        let nodes = format_size(&f);
        let e = simplify(f);
        assert_eq!(e.flatten(), flat);
        // simplification may only shrink the tree
        assert!(size(&e) <= nodes);
        assert_eq!(simplify(embed(&e)), e);
    }
}

#[test]
fn merges_brackets() {
    let f = Format::text("(").then(Format::text("x").then(Format::text(")")));
    assert_eq!(simplify(f), Efmt::text("(x)"));

    let f = Format::text("(")
        .then(Format::text("x y").nest(2))
        .then(Format::text(")"));
    assert_eq!(simplify(f), Efmt::Nest(2, Box::new(Efmt::text("(x y)"))));
}

#[test]
fn collapses_nesting() {
    let f = Format::text("a b").nest(2).nest(1);
    assert_eq!(simplify(f), Efmt::Nest(3, Box::new(Efmt::text("a b"))));

    let f = Format::text("abc").nest(4);
    assert_eq!(simplify(f), Efmt::text("abc"));

    let f = Format::Tag("t".into(), Box::new(Format::text("a b")));
    assert_eq!(simplify(f), Efmt::text("a b"));
}
