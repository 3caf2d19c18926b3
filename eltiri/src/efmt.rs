//! Layout trees as they are serialised.

use alloc::boxed::Box;
use alloc::string::String;
use serde::ser::{Serialize, SerializeSeq, Serializer};

/// Layout tree of rendered code.
///
/// This is [`medio::Format`] after simplification:
/// tags are gone and every nesting carries a relative indentation.
///
/// Leaves serialise as plain strings,
/// concatenation as `["c", a, b]` and nesting as `["n", n, f]`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Efmt {
    Text(String),
    Concat(Box<Efmt>, Box<Efmt>),
    Nest(isize, Box<Efmt>),
}

impl Efmt {
    /// Leaf from anything string-like.
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// Print without line breaks, dropping all nesting.
    ///
    /// ~~~
    /// # use eltiri::Efmt;
    /// let f = Efmt::Concat(
    ///     Box::new(Efmt::text("a ")),
    ///     Box::new(Efmt::Nest(2, Box::new(Efmt::text("b")))),
    /// );
    /// assert_eq!(f.flatten(), "a b");
    /// ~~~
    pub fn flatten(&self) -> String {
        let mut s = String::new();
        self.write_flat(&mut s);
        s
    }

    fn write_flat(&self, out: &mut String) {
        match self {
            Self::Text(s) => out.push_str(s),
            Self::Concat(a, b) => {
                a.write_flat(out);
                b.write_flat(out);
            }
            Self::Nest(_, f) => f.write_flat(out),
        }
    }
}

impl Serialize for Efmt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(s) => serializer.serialize_str(s),
            Self::Concat(a, b) => {
                let mut seq = serializer.serialize_seq(Some(3))?;
                seq.serialize_element("c")?;
                seq.serialize_element(a)?;
                seq.serialize_element(b)?;
                seq.end()
            }
            Self::Nest(n, f) => {
                let mut seq = serializer.serialize_seq(Some(3))?;
                seq.serialize_element("n")?;
                seq.serialize_element(n)?;
                seq.serialize_element(f)?;
                seq.end()
            }
        }
    }
}

#[test]
fn serialised_shape() {
    let f = Efmt::Concat(
        Box::new(Efmt::text("a")),
        Box::new(Efmt::Nest(2, Box::new(Efmt::text("b")))),
    );
    let v = serde_json::to_value(&f).unwrap();
    assert_eq!(v, serde_json::json!(["c", "a", ["n", 2, "b"]]));
    assert_eq!(f.flatten(), "ab");
}
