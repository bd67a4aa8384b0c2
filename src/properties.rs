//! Invariants that hold for any tagged or parsed input.

use proptest::prelude::*;

use crate::annotation::{AnnotatedToken, Document};
use crate::api::{CpidrOptions, DepidOptions, score_cpidr, score_depid};
use crate::depid::FilterSet;

/// Words and tags that between them reach every CPIDR rule.
const TAGGED_POOL: &[(&str, &str)] = &[
    ("the", "DT"),
    ("a", "DT"),
    ("this", "DT"),
    ("dog", "NN"),
    ("dogs", "NNS"),
    ("John", "NNP"),
    ("I", "PRP"),
    ("you", "PRP"),
    ("it", "PRP"),
    ("runs", "VBZ"),
    ("ran", "VBD"),
    ("going", "VBG"),
    ("know", "VBP"),
    ("is", "VBZ"),
    ("seems", "VBZ"),
    ("made", "VBD"),
    ("did", "VBD"),
    ("have", "VBP"),
    ("can", "MD"),
    ("will", "MD"),
    ("not", "RB"),
    ("n't", "RB"),
    ("never", "RB"),
    ("very", "RB"),
    ("then", "RB"),
    ("yet", "RB"),
    ("ever", "RB"),
    ("quickly", "RB"),
    ("big", "JJ"),
    ("red", "JJ"),
    ("to", "TO"),
    ("for", "IN"),
    ("in", "IN"),
    ("if", "IN"),
    ("unless", "IN"),
    ("and", "CC"),
    ("or", "CC"),
    ("either", "CC"),
    ("each", "DT"),
    ("other", "JJ"),
    ("how", "WRB"),
    ("come", "VB"),
    ("what", "WP"),
    ("like", "IN"),
    ("um", "UH"),
    ("well", "UH"),
    ("3", "CD"),
    ("1941", "CD"),
    ("'s", "POS"),
    ("&", "CC"),
    ("go-", "VB"),
    ("^", "SYM"),
    (",", ","),
    ("?", "."),
    (".", "."),
];

const PARSED_POOL: &[(&str, &str, &str, &str)] = &[
    ("the", "DET", "DT", "det"),
    ("this", "DET", "DT", "det"),
    ("dog", "NOUN", "NN", "nsubj"),
    ("cat", "NOUN", "NN", "dobj"),
    ("I", "PRON", "PRP", "nsubj"),
    ("it", "PRON", "PRP", "nsubj"),
    ("runs", "VERB", "VBZ", "ROOT"),
    ("big", "ADJ", "JJ", "amod"),
    ("very", "ADV", "RB", "advmod"),
    ("not", "PART", "RB", "neg"),
    ("in", "ADP", "IN", "prep"),
    ("house", "NOUN", "NN", "pobj"),
    ("and", "CCONJ", "CC", "cc"),
    ("ran", "VERB", "VBD", "conj"),
    ("'s", "PART", "POS", "case"),
    (" ", "SPACE", "_SP", ""),
    (",", "PUNCT", ",", "punct"),
    (".", "PUNCT", ".", "punct"),
];

fn tagged_document() -> impl Strategy<Value = Document> {
    let token = prop::sample::select(TAGGED_POOL).prop_map(|(text, tag)| AnnotatedToken::new(text, tag));
    prop::collection::vec(prop::collection::vec(token, 0..12), 0..5).prop_map(Document::from_sentences)
}

fn parsed_document() -> impl Strategy<Value = Document> {
    let token = (prop::sample::select(PARSED_POOL), 0..12usize).prop_map(|((text, pos, tag, dep), head)| {
        AnnotatedToken::new(text, tag).with_pos(pos).with_dep(dep, head)
    });
    prop::collection::vec(prop::collection::vec(token, 0..12), 0..5).prop_map(Document::from_sentences)
}

proptest! {
    #[test]
    fn cpidr_counts_are_consistent(doc in tagged_document(), speech_mode in any::<bool>()) {
        let res = score_cpidr(&doc, &CpidrOptions { speech_mode });

        prop_assert_eq!(res.word_list.len(), doc.token_count());
        prop_assert_eq!(res.word_count, res.word_list.word_count());
        prop_assert_eq!(res.proposition_count, res.word_list.proposition_count());
        prop_assert!(res.proposition_count <= res.word_count);
        prop_assert!((0.0..=1.0).contains(&res.density));
        if res.word_count == 0 {
            prop_assert_eq!(res.density, 0.0);
        }
        for record in &res.word_list {
            prop_assert!(!record.is_proposition() || record.is_word(), "{:?}", record);
        }
        for (token, record) in doc.tokens().zip(&res.word_list) {
            if matches!(token.token.tag.as_str(), "." | "," | ":") || token.text() == "^" {
                prop_assert!(!record.is_word(), "{:?}", record);
            }
        }
    }

    #[test]
    fn cpidr_keeps_input_order(doc in tagged_document()) {
        let res = score_cpidr(&doc, &CpidrOptions::default());
        let tokens: Vec<&str> = res.word_list.iter().map(|w| w.token()).collect();
        let input: Vec<&str> = doc.tokens().map(|t| t.text()).collect();
        prop_assert_eq!(tokens, input);
    }

    #[test]
    fn cpidr_is_deterministic(doc in tagged_document(), speech_mode in any::<bool>()) {
        let options = CpidrOptions { speech_mode };
        prop_assert_eq!(score_cpidr(&doc, &options), score_cpidr(&doc, &options));
    }

    #[test]
    fn speech_fillers_never_count(doc in tagged_document()) {
        let res = score_cpidr(&doc, &CpidrOptions::speech());
        for record in res.word_list.iter().filter(|w| w.is_filler()) {
            prop_assert!(record.is_word() && !record.is_proposition(), "{:?}", record);
        }

        let plain = score_cpidr(&doc, &CpidrOptions::default());
        prop_assert!(plain.word_list.iter().all(|w| !w.is_filler()));
    }

    #[test]
    fn depid_r_never_exceeds_depid(doc in parsed_document()) {
        let plain = score_depid(&doc, &DepidOptions::default()).unwrap();
        let distinct = score_depid(&doc, &DepidOptions::depid_r()).unwrap();

        prop_assert!(distinct.proposition_count <= plain.proposition_count);
        prop_assert!(plain.proposition_count <= plain.word_count);
        prop_assert_eq!(plain.word_count, distinct.word_count);
        prop_assert_eq!(plain.proposition_count, plain.dependencies.len());
    }

    #[test]
    fn filters_only_remove(doc in parsed_document()) {
        let unfiltered = score_depid(&doc, &DepidOptions::default().with_filters(FilterSet::new())).unwrap();
        let filtered = score_depid(&doc, &DepidOptions::default()).unwrap();

        prop_assert!(filtered.proposition_count <= unfiltered.proposition_count);
        prop_assert!(filtered.dependencies.iter().all(|d| unfiltered.dependencies.contains(d)));
    }
}

#[test]
fn scores_a_json_document() {
    let json = r#"[[
        {"text": "The", "pos": "DET", "tag": "DT", "dep": "det", "head": 1},
        {"text": "dog", "pos": "NOUN", "tag": "NN", "dep": "nsubj", "head": 2},
        {"text": "barks", "pos": "VERB", "tag": "VBZ", "dep": "ROOT"},
        {"text": "loudly", "pos": "ADV", "tag": "RB", "dep": "advmod", "head": 2},
        {"text": ".", "pos": "PUNCT", "tag": ".", "dep": "punct", "head": 2}
    ]]"#;
    let doc: Document = serde_json::from_str(json).unwrap();
    assert_eq!(doc.sentences()[0].tokens()[1].lower, "dog");
    assert_eq!(doc.sentences()[0].tokens()[4].index, 4);

    let cpidr = score_cpidr(&doc, &CpidrOptions::default());
    assert_eq!((cpidr.word_count, cpidr.proposition_count), (4, 2));

    let depid = score_depid(&doc, &DepidOptions::default()).unwrap();
    let tokens: Vec<&str> = depid.dependencies.iter().map(|d| d.token.as_str()).collect();
    assert_eq!(tokens, vec!["dog", "loudly"]);
    assert_eq!(depid.dependencies[0].head, "barks");

    let out = serde_json::to_value(&cpidr).unwrap();
    assert_eq!(out["word_list"][2]["rule"], 200);
    assert_eq!(out["word_list"][0]["rule"], 201);
}
