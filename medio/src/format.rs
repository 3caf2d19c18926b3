//! Output trees of the pretty printer.

use crate::Name;
use alloc::boxed::Box;
use alloc::string::String;

/// Rendered text with layout structure and semantic markers.
///
/// Rendering an expression yields text interspersed with
/// nesting information (how far to indent upon a line break) and
/// markers that tie text back to declared names.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Format {
    Text(String),
    Concat(Box<Format>, Box<Format>),
    /// Indent the contents by the given offset.
    Nest(isize, Box<Format>),
    /// Mark the contents as referring to a declared name.
    Tag(Name, Box<Format>),
    /// Mark the contents for emphasis.
    Highlight(Box<Format>),
}

impl Format {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// Compose two trees left to right.
    pub fn then(self, other: Self) -> Self {
        Self::Concat(Box::new(self), Box::new(other))
    }

    pub fn nest(self, i: isize) -> Self {
        Self::Nest(i, Box::new(self))
    }

    /// Concatenation of all leaf texts, disregarding structure.
    ///
    /// ~~~
    /// # use medio::Format;
    /// let f = Format::text("a").then(Format::text("b").nest(2));
    /// assert_eq!(f.flatten(), "ab");
    /// ~~~
    pub fn flatten(&self) -> String {
        let mut out = String::new();
        self.write_flat(&mut out);
        out
    }

    fn write_flat(&self, out: &mut String) {
        match self {
            Self::Text(s) => out.push_str(s),
            Self::Concat(a, b) => {
                a.write_flat(out);
                b.write_flat(out);
            }
            Self::Nest(_, f) | Self::Tag(_, f) | Self::Highlight(f) => f.write_flat(out),
        }
    }
}
