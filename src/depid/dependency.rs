use std::fmt;

use serde::{Deserialize, Serialize};

use crate::annotation::TokenRef;

/// Dependency labels that express a proposition (spaCy/ClearNLP scheme).
pub const PROPOSITION_DEPENDENCIES: &[&str] = &[
    "advcl", "advmod", "amod", "appos", "cc", "csubj", "csubjpass", "det", "neg", "npadvmod", "nsubj", "nsubjpass",
    "nummod", "poss", "predet", "preconj", "prep", "quantmod", "tmod", "vmod",
];

pub(crate) fn is_proposition_label(label: &str) -> bool {
    PROPOSITION_DEPENDENCIES.contains(&label)
}

/// One counted dependency: `(token, label, head)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Dependency {
    pub token: String,
    pub label: String,
    pub head: String,
}

impl Dependency {
    pub(crate) fn of(token: TokenRef<'_>) -> Self {
        Self { token: token.text().to_string(), label: token.dep().to_string(), head: token.head().text.clone() }
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.token, self.label, self.head)
    }
}

/// What makes two dependencies "the same" for DEPID-R.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DedupKey {
    /// Surface `(token, label, head)`, case-sensitive.
    #[default]
    Triple,
    /// `(token, label, head)` compared lowercase.
    LowercaseTriple,
    /// Lemmas of token and head, plus the label.
    LemmaTriple,
    /// Label and head only; the dependent is ignored.
    LabelHead,
}

impl DedupKey {
    pub(crate) fn key(self, token: TokenRef<'_>) -> (String, String, String) {
        let label = token.dep().to_string();
        let head = token.head();
        match self {
            DedupKey::Triple => (token.text().to_string(), label, head.text.clone()),
            DedupKey::LowercaseTriple => (token.lower().to_string(), label, head.lower.clone()),
            DedupKey::LemmaTriple => (token.token.lemma.clone(), label, head.lemma.clone()),
            DedupKey::LabelHead => (String::new(), label, head.text.clone()),
        }
    }
}
