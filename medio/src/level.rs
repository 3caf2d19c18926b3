//! Universe levels.

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt::{self, Display};
use serde::{Deserialize, Serialize};

/// Universe level of a sort.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Level {
    Zero,
    Succ(Box<Level>),
    Param(String),
}

impl Level {
    /// Successor of the level.
    pub fn succ(self) -> Self {
        Self::Succ(Box::new(self))
    }

    pub fn is_zero(&self) -> bool {
        matches!(self, Self::Zero)
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Zero => write!(f, "0"),
            Self::Succ(l) => write!(f, "{}+1", l),
            Self::Param(p) => p.fmt(f),
        }
    }
}
