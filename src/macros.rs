macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// Build a CPIDR [`Rule`](crate::cpidr::rules::Rule) from a guard and an action.
///
/// Both bodies see the tape and the record id of the current token:
///
/// ```ignore
/// rule! {
///     number: RuleNumber::ARTICLE,
///     name: "article",
///     when: |tape, at| ARTICLES.contains(tape.word(at).lower()),
///     then: |tape, at| tape.word_mut(at).suppress(RuleNumber::ARTICLE),
/// }
/// ```
macro_rules! rule {
    (
        number: $number:expr,
        name: $name:expr,
        when: |$t:ident, $at:ident| $when:expr,
        then: |$mt:ident, $mat:ident| $then:expr
        $(,)?
    ) => {{
        #[allow(unused_variables)]
        fn when($t: &$crate::cpidr::tape::Tape, $at: usize) -> bool {
            $when
        }
        #[allow(unused_variables)]
        fn then($mt: &mut $crate::cpidr::tape::Tape, $mat: usize) {
            $then;
        }
        $crate::cpidr::rules::Rule { number: $number, name: $name, when, then }
    }};
}
