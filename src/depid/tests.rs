use pretty_assertions::assert_eq;

use super::{
    DedupKey, FilterSet, SentenceFilter, TokenFilter, no_i_you_root_subject, not_coordinating_conjunction,
    not_excluded_determiner, not_excluded_nsubj, select, summarize,
};
use crate::annotation::Document;
use crate::error::FilterScope;
use crate::testing::{DEPID_R_TEST, I_RUN, ParsedRow, QUICK_FOX, parsed};

fn one(row: ParsedRow<'_>) -> Document {
    parsed(&[&[row, ("word", "NOUN", "NN", "ROOT", 1)]])
}

fn kept_tokens(document: &Document, filters: &FilterSet) -> Vec<String> {
    select(document, filters).unwrap().iter().map(|t| t.text().to_string()).collect()
}

#[test]
fn i_you_subject_filter() {
    // (keeps sentence, rows)
    let cases: [(bool, &[ParsedRow<'_>]); 5] = [
        (false, &[("I", "PRON", "PRP", "nsubj", 1), ("run", "VERB", "VBP", "ROOT", 1)]),
        (false, &[("You", "PRON", "PRP", "nsubj", 1), ("run", "VERB", "VBP", "ROOT", 1)]),
        (true, &[("He", "PRON", "PRP", "nsubj", 1), ("runs", "VERB", "VBZ", "ROOT", 1)]),
        (true, &[("Help", "VERB", "VB", "ROOT", 0), ("me", "PRON", "PRP", "dobj", 0), ("I", "PRON", "PRP", "dobj", 0)]),
        (
            true,
            &[
                ("He", "PRON", "PRP", "nsubj", 1),
                ("said", "VERB", "VBD", "ROOT", 1),
                ("I", "PRON", "PRP", "nsubj", 3),
                ("left", "VERB", "VBD", "ccomp", 1),
            ],
        ),
    ];

    for (keeps, rows) in cases {
        let doc = parsed(&[rows]);
        assert_eq!(no_i_you_root_subject(&doc.sentences()[0]), keeps, "{rows:?}");
    }
}

#[test]
fn token_filters() {
    let keeps_det = |text: &str, dep: &str| {
        let doc = one((text, "DET", "DT", dep, 1));
        not_excluded_determiner(doc.sentences()[0].token(0).unwrap())
    };
    assert!(!keeps_det("the", "det"));
    assert!(!keeps_det("The", "det"));
    assert!(!keeps_det("an", "det"));
    assert!(keeps_det("this", "det"));
    assert!(keeps_det("the", "nsubj"));

    let keeps_subject = |text: &str, dep: &str| {
        let doc = one((text, "PRON", "PRP", dep, 1));
        not_excluded_nsubj(doc.sentences()[0].token(0).unwrap())
    };
    assert!(!keeps_subject("it", "nsubj"));
    assert!(!keeps_subject("This", "nsubj"));
    assert!(keeps_subject("he", "nsubj"));
    assert!(keeps_subject("it", "dobj"));

    let doc = one(("and", "CCONJ", "CC", "cc", 1));
    assert!(!not_coordinating_conjunction(doc.sentences()[0].token(0).unwrap()));
}

#[test]
fn unfiltered_selection_keeps_only_proposition_labels() {
    let doc = parsed(&[QUICK_FOX]);
    assert_eq!(kept_tokens(&doc, &FilterSet::new()), vec!["The", "quick", "brown", "fox", "over", "the", "lazy"]);
}

#[test]
fn sirts_default_keeps_i_you_sentences() {
    let doc = parsed(&[I_RUN, QUICK_FOX]);
    assert_eq!(kept_tokens(&doc, &FilterSet::sirts_default()), vec!["I", "quick", "brown", "fox", "over", "lazy"]);
}

#[test]
fn filter_order_does_not_change_the_result() {
    let doc = parsed(&[I_RUN, QUICK_FOX, DEPID_R_TEST]);
    let forward = FilterSet::new().with_excluded_determiner_filter().with_excluded_nsubj_filter().with_cc_filter();
    let backward = FilterSet::new().with_cc_filter().with_excluded_nsubj_filter().with_excluded_determiner_filter();
    assert_eq!(kept_tokens(&doc, &forward), kept_tokens(&doc, &backward));
}

#[test]
fn rejected_sentences_skip_token_filters() {
    let filters = FilterSet::new()
        .with_sentence_filter(SentenceFilter::new("never", |_| false))
        .with_token_filter(TokenFilter::fallible("explodes", |_| Err("unreachable".into())));
    let doc = parsed(&[QUICK_FOX]);
    assert!(select(&doc, &filters).unwrap().is_empty());
}

#[test]
fn failing_filters_surface_as_caller_errors() {
    let doc = parsed(&[QUICK_FOX, I_RUN]);

    let filters = FilterSet::new().with_sentence_filter(SentenceFilter::fallible("short", |s| {
        if s.len() < 5 { Err("too short to judge".into()) } else { Ok(true) }
    }));
    let err = select(&doc, &filters).unwrap_err();
    assert_eq!((err.filter.as_str(), err.scope, err.sentence, err.token), ("short", FilterScope::Sentence, 1, None));
    assert_eq!(err.source.to_string(), "too short to judge");

    let filters = FilterSet::new().with_token_filter(TokenFilter::fallible("no-lazy", |t| {
        if t.lower() == "lazy" { Err("lazy".into()) } else { Ok(true) }
    }));
    let err = select(&doc, &filters).unwrap_err();
    assert_eq!((err.scope, err.sentence, err.token), (FilterScope::Token, 0, Some(7)));
}

#[test]
fn dedup_keys() {
    let repeated: &[ParsedRow<'_>] = &[
        ("Big", "ADJ", "JJ", "amod", 1),
        ("dogs", "NOUN", "NNS", "nsubj", 2),
        ("bark", "VERB", "VBP", "ROOT", 2),
    ];
    let varied: &[ParsedRow<'_>] = &[
        ("big", "ADJ", "JJ", "amod", 1),
        ("Dogs", "NOUN", "NNS", "nsubj", 2),
        ("bark", "VERB", "VBP", "ROOT", 2),
    ];
    let doc = parsed(&[repeated, varied]);
    let count = |key: DedupKey| {
        let kept = select(&doc, &FilterSet::new()).unwrap();
        summarize(&doc, kept, true, key).proposition_count
    };

    assert_eq!(count(DedupKey::Triple), 4);
    assert_eq!(count(DedupKey::LowercaseTriple), 2);
    assert_eq!(count(DedupKey::LemmaTriple), 2);
    assert_eq!(count(DedupKey::LabelHead), 3);

    let kept = select(&doc, &FilterSet::new()).unwrap();
    assert_eq!(summarize(&doc, kept, false, DedupKey::Triple).proposition_count, 4);
}

#[test]
fn depid_r_keeps_first_occurrence_order() {
    let doc = parsed(&[QUICK_FOX, QUICK_FOX]);
    let kept = select(&doc, &FilterSet::default()).unwrap();
    let res = summarize(&doc, kept, true, DedupKey::Triple);
    let tokens: Vec<&str> = res.dependencies.iter().map(|d| d.token.as_str()).collect();
    assert_eq!(tokens, vec!["quick", "brown", "fox", "over", "lazy"]);
    assert_eq!(res.word_count, 18);
}
