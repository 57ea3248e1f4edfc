//! Player roles and the label-based role classifier.
//!
//! Rules never inspect player ids. A [`Role`] is assigned once, when a
//! [`Formation`](super::Formation) is built, either from an explicit
//! `role` in the input or by looking the id up in a [`RoleClassifier`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The personnel role a player occupies in a formation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Interior offensive line: center, guards, tackles.
    Lineman,
    /// Wide receivers, tight ends and flex receivers.
    Receiver,
    /// Running backs and fullbacks.
    Backfield,
    Quarterback,
    /// Anything the classifier does not recognise.
    Other,
}

impl Role {
    pub fn is_lineman(self) -> bool {
        matches!(self, Role::Lineman)
    }

    pub fn is_receiver(self) -> bool {
        matches!(self, Role::Receiver)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Lineman => write!(f, "lineman"),
            Role::Receiver => write!(f, "receiver"),
            Role::Backfield => write!(f, "backfield"),
            Role::Quarterback => write!(f, "quarterback"),
            Role::Other => write!(f, "other"),
        }
    }
}

const LINEMAN_LABELS: &[&str] = &["C", "LG", "RG", "LT", "RT", "OL"];
const RECEIVER_LABELS: &[&str] = &[
    "WR", "TE", "X", "Y", "Z", "H", "F", "S", "W", "SE", "FL", "SL",
];
const BACKFIELD_LABELS: &[&str] = &["RB", "HB", "TB", "FB"];
const QUARTERBACK_LABELS: &[&str] = &["QB"];

/// Maps position labels to roles.
///
/// Label sets are plain data so other personnel vocabularies can be plugged
/// in from the ruleset config without touching rule code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleClassifier {
    lineman: BTreeSet<String>,
    receiver: BTreeSet<String>,
    backfield: BTreeSet<String>,
    quarterback: BTreeSet<String>,
}

impl Default for RoleClassifier {
    fn default() -> Self {
        Self::new(
            LINEMAN_LABELS.iter().copied(),
            RECEIVER_LABELS.iter().copied(),
            BACKFIELD_LABELS.iter().copied(),
            QUARTERBACK_LABELS.iter().copied(),
        )
    }
}

impl RoleClassifier {
    /// Create a classifier from explicit label sets.
    ///
    /// Labels are matched case-insensitively.
    pub fn new<L, R, B, Q>(lineman: L, receiver: R, backfield: B, quarterback: Q) -> Self
    where
        L: IntoIterator,
        L::Item: AsRef<str>,
        R: IntoIterator,
        R::Item: AsRef<str>,
        B: IntoIterator,
        B::Item: AsRef<str>,
        Q: IntoIterator,
        Q::Item: AsRef<str>,
    {
        Self {
            lineman: label_set(lineman),
            receiver: label_set(receiver),
            backfield: label_set(backfield),
            quarterback: label_set(quarterback),
        }
    }

    /// Configured labels for a role, sorted.
    pub fn labels(&self, role: Role) -> Vec<&str> {
        let set = match role {
            Role::Lineman => &self.lineman,
            Role::Receiver => &self.receiver,
            Role::Backfield => &self.backfield,
            Role::Quarterback => &self.quarterback,
            Role::Other => return Vec::new(),
        };
        set.iter().map(String::as_str).collect()
    }

    /// Classify a player id.
    ///
    /// The id is upper-cased and a trailing numeric suffix is dropped
    /// (`WR2` and `wr_2` both become `WR`) before an exact label lookup.
    pub fn classify(&self, id: &str) -> Role {
        let label = base_label(id);
        if label.is_empty() {
            return Role::Other;
        }

        if self.lineman.contains(&label) {
            Role::Lineman
        } else if self.receiver.contains(&label) {
            Role::Receiver
        } else if self.quarterback.contains(&label) {
            Role::Quarterback
        } else if self.backfield.contains(&label) {
            Role::Backfield
        } else {
            Role::Other
        }
    }

    /// Labels that appear in more than one role set.
    pub fn overlapping_labels(&self) -> Vec<String> {
        let sets = [
            &self.lineman,
            &self.receiver,
            &self.backfield,
            &self.quarterback,
        ];
        let mut seen = BTreeSet::new();
        let mut overlap = BTreeSet::new();
        for set in sets {
            for label in set {
                if !seen.insert(label) {
                    overlap.insert(label.clone());
                }
            }
        }
        overlap.into_iter().collect()
    }
}

fn label_set<I>(labels: I) -> BTreeSet<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    labels
        .into_iter()
        .map(|l| l.as_ref().trim().to_uppercase())
        .filter(|l| !l.is_empty())
        .collect()
}

fn base_label(id: &str) -> String {
    id.trim()
        .to_uppercase()
        .trim_end_matches(|c: char| c.is_ascii_digit())
        .trim_end_matches(['_', '-'])
        .to_string()
}
