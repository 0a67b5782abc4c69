//! Journal models - how a stream's log files are rotated.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Symbol naming a stream's rotation policy.
///
/// Backed by a plain string so that symbols this crate doesn't know about
/// survive a decode/encode cycle untouched. Checking a symbol against the
/// supported policies is left to whoever applies the policy.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JournalModel(Cow<'static, str>);

impl JournalModel {
    /// Log files are rotated in place (`Rotation`).
    pub const ROTATION: JournalModel = JournalModel(Cow::Borrowed("Rotation"));

    pub const fn from_static(s: &'static str) -> Self {
        JournalModel(Cow::Borrowed(s))
    }

    pub fn new(s: impl Into<String>) -> Self {
        JournalModel(Cow::Owned(s.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for the unset model, as produced by decoding a record without a
    /// `journal-model` entry.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_rotation(&self) -> bool {
        self == &Self::ROTATION
    }
}

impl fmt::Display for JournalModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for JournalModel {
    fn from(s: &'static str) -> Self {
        JournalModel(Cow::Borrowed(s))
    }
}

impl From<String> for JournalModel {
    fn from(s: String) -> Self {
        JournalModel(Cow::Owned(s))
    }
}

impl AsRef<str> for JournalModel {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
