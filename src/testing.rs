//! Hand-annotated fixtures, so tests need no tagger or parser.

use crate::annotation::{AnnotatedToken, Document};

/// Build a document from `(text, tag)` pairs, one slice per sentence.
pub(crate) fn tagged(sentences: &[&[(&str, &str)]]) -> Document {
    Document::from_sentences(
        sentences.iter().map(|tokens| tokens.iter().map(|&(text, tag)| AnnotatedToken::new(text, tag)).collect::<Vec<_>>()),
    )
}

/// Parse `"The/DT dog/NN barks/VBZ ./."`. A token tagged `.` ends its sentence.
pub(crate) fn tagged_text(text: &str) -> Document {
    let mut sentences = vec![Vec::new()];
    for item in text.split_whitespace() {
        let (word, tag) = item.rsplit_once('/').unwrap_or((item, ""));
        if let Some(current) = sentences.last_mut() {
            current.push(AnnotatedToken::new(word, tag));
        }
        if tag == "." {
            sentences.push(Vec::new());
        }
    }
    sentences.retain(|s| !s.is_empty());
    Document::from_sentences(sentences)
}

/// `(text, pos, tag, dep, head)` rows, one slice per sentence.
pub(crate) type ParsedRow<'a> = (&'a str, &'a str, &'a str, &'a str, usize);

pub(crate) fn parsed(sentences: &[&[ParsedRow<'_>]]) -> Document {
    Document::from_sentences(sentences.iter().map(|rows| {
        rows.iter()
            .map(|&(text, pos, tag, dep, head)| AnnotatedToken::new(text, tag).with_pos(pos).with_dep(dep, head))
            .collect::<Vec<_>>()
    }))
}

pub(crate) const I_RUN: &[ParsedRow<'static>] =
    &[("I", "PRON", "PRP", "nsubj", 1), ("run", "VERB", "VBP", "ROOT", 1), (".", "PUNCT", ".", "punct", 1)];

pub(crate) const QUICK_FOX: &[ParsedRow<'static>] = &[
    ("The", "DET", "DT", "det", 3),
    ("quick", "ADJ", "JJ", "amod", 3),
    ("brown", "ADJ", "JJ", "amod", 3),
    ("fox", "NOUN", "NN", "nsubj", 4),
    ("jumps", "VERB", "VBZ", "ROOT", 4),
    ("over", "ADP", "IN", "prep", 4),
    ("the", "DET", "DT", "det", 8),
    ("lazy", "ADJ", "JJ", "amod", 8),
    ("dog", "NOUN", "NN", "pobj", 5),
    (".", "PUNCT", ".", "punct", 4),
];

pub(crate) const DEPID_R_TEST: &[ParsedRow<'static>] = &[
    ("This", "PRON", "DT", "nsubj", 1),
    ("is", "AUX", "VBZ", "ROOT", 1),
    ("a", "DET", "DT", "det", 3),
    ("test", "NOUN", "NN", "attr", 1),
    ("of", "ADP", "IN", "prep", 3),
    ("DEPID-R", "PROPN", "NNP", "pobj", 4),
    (".", "PUNCT", ".", "punct", 1),
];
