//! Hierarchical names.

use alloc::string::String;
use core::fmt::{self, Display};
use serde::{Deserialize, Serialize};

/// Dotted hierarchical name, such as `nat.succ`.
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    /// Components of the name, from root to leaf.
    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }

    /// Does any component start with an underscore?
    ///
    /// Hosts use such names for machine-generated declarations.
    ///
    /// ~~~
    /// # use medio::Name;
    /// assert!(Name::from("foo._aux.bar").is_internal());
    /// assert!(!Name::from("char.le").is_internal());
    /// ~~~
    pub fn is_internal(&self) -> bool {
        self.components().any(|c| c.starts_with('_'))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Name {
    fn from(s: &str) -> Self {
        Self(String::from(s))
    }
}

impl From<String> for Name {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}
