use serde::{Deserialize, Serialize};

/// One token as delivered by the external annotator.
///
/// `head` is the index of the syntactic head inside the same sentence; the
/// root of a sentence points to itself (or carries `None`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedToken {
    /// Surface text.
    pub text: String,
    /// Lowercased surface text. Filled from `text` when the annotator leaves it empty.
    #[serde(default)]
    pub lower: String,
    #[serde(default)]
    pub lemma: String,
    /// Coarse part-of-speech tag (`VERB`, `PUNCT`, ...).
    #[serde(default)]
    pub pos: String,
    /// Fine-grained Penn Treebank tag (`VBZ`, `NN`, ...).
    pub tag: String,
    /// Dependency label (`nsubj`, `ROOT`, ...).
    #[serde(default)]
    pub dep: String,
    #[serde(default)]
    pub head: Option<usize>,
    /// Position inside the sentence. Renumbered when the document is built.
    #[serde(default)]
    pub index: usize,
}

impl AnnotatedToken {
    /// A token carrying only its text and fine tag, enough for CPIDR.
    pub fn new(text: impl Into<String>, tag: impl Into<String>) -> Self {
        let text = text.into();
        let lower = text.to_lowercase();
        Self {
            lemma: lower.clone(),
            lower,
            text,
            pos: String::new(),
            tag: tag.into(),
            dep: String::new(),
            head: None,
            index: 0,
        }
    }

    /// Set the coarse part-of-speech tag.
    pub fn with_pos(mut self, pos: impl Into<String>) -> Self {
        self.pos = pos.into();
        self
    }

    /// Set the lemma, used by [`DedupKey::LemmaTriple`](crate::DedupKey::LemmaTriple).
    pub fn with_lemma(mut self, lemma: impl Into<String>) -> Self {
        self.lemma = lemma.into();
        self
    }

    /// Attach a dependency arc pointing at `head` (an index in the same sentence).
    pub fn with_dep(mut self, dep: impl Into<String>, head: usize) -> Self {
        self.dep = dep.into();
        self.head = Some(head);
        self
    }

    /// Punctuation by coarse tag, or by surface form when no coarse tag was given.
    pub fn is_punct(&self) -> bool {
        if !self.pos.is_empty() {
            return self.pos == "PUNCT";
        }
        !self.text.is_empty() && self.text.chars().all(|c| !c.is_alphanumeric() && !c.is_whitespace())
    }

    pub fn is_space(&self) -> bool {
        self.pos == "SPACE" || (!self.text.is_empty() && self.text.trim().is_empty())
    }

    fn normalize(&mut self, index: usize) {
        self.index = index;
        if self.lower.is_empty() {
            self.lower = self.text.to_lowercase();
        }
        if self.lemma.is_empty() {
            self.lemma = self.lower.clone();
        }
    }
}

/// An ordered run of tokens plus its position in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sentence {
    index: usize,
    tokens: Vec<AnnotatedToken>,
}

impl Sentence {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn tokens(&self) -> &[AnnotatedToken] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The head of `token`. Roots and out-of-range heads resolve to the token itself.
    pub fn head_of<'a>(&'a self, token: &'a AnnotatedToken) -> &'a AnnotatedToken {
        token.head.and_then(|head| self.tokens.get(head)).unwrap_or(token)
    }

    /// Borrow the token at `index` together with this sentence.
    pub fn token(&self, index: usize) -> Option<TokenRef<'_>> {
        self.tokens.get(index).map(|token| TokenRef { sentence: self, token })
    }

    pub fn iter(&self) -> impl Iterator<Item = TokenRef<'_>> {
        self.tokens.iter().map(move |token| TokenRef { sentence: self, token })
    }
}

/// A token borrowed together with the sentence it belongs to.
#[derive(Debug, Clone, Copy)]
pub struct TokenRef<'a> {
    pub sentence: &'a Sentence,
    pub token: &'a AnnotatedToken,
}

impl<'a> TokenRef<'a> {
    pub fn head(&self) -> &'a AnnotatedToken {
        self.sentence.head_of(self.token)
    }

    pub fn text(&self) -> &'a str {
        &self.token.text
    }

    pub fn lower(&self) -> &'a str {
        &self.token.lower
    }

    pub fn dep(&self) -> &'a str {
        &self.token.dep
    }
}

/// A fully annotated document: sentences of tokens, in reading order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Vec<AnnotatedToken>>", into = "Vec<Vec<AnnotatedToken>>")]
pub struct Document {
    sentences: Vec<Sentence>,
}

impl Document {
    /// Build a document, renumbering sentence and token indices and filling
    /// in missing lowercase forms and lemmas.
    pub fn from_sentences<I, S>(sentences: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: IntoIterator<Item = AnnotatedToken>,
    {
        let sentences = sentences
            .into_iter()
            .enumerate()
            .map(|(index, tokens)| {
                let tokens = tokens
                    .into_iter()
                    .enumerate()
                    .map(|(i, mut token)| {
                        token.normalize(i);
                        token
                    })
                    .collect();
                Sentence { index, tokens }
            })
            .collect();
        Self { sentences }
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// All tokens in document order.
    pub fn tokens(&self) -> impl Iterator<Item = TokenRef<'_>> {
        self.sentences.iter().flat_map(Sentence::iter)
    }

    pub fn token_count(&self) -> usize {
        self.sentences.iter().map(Sentence::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.token_count() == 0
    }
}

impl From<Vec<Vec<AnnotatedToken>>> for Document {
    fn from(sentences: Vec<Vec<AnnotatedToken>>) -> Self {
        Self::from_sentences(sentences)
    }
}

impl From<Document> for Vec<Vec<AnnotatedToken>> {
    fn from(document: Document) -> Self {
        document.sentences.into_iter().map(|s| s.tokens).collect()
    }
}

/// The seam to an external tagger/parser.
///
/// The crate never tokenizes, tags or parses on its own; callers plug in
/// whatever pipeline produces an annotated [`Document`].
pub trait Annotator {
    type Error: std::error::Error + Send + Sync + 'static;

    fn annotate(&self, text: &str) -> Result<Document, Self::Error>;
}
