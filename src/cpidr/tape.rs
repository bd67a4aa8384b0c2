use super::tags::TagClass;
use super::word::{WordList, WordRecord};
use crate::annotation::Document;

/// How far backward searches look.
pub(crate) const MAX_LOOKBACK: usize = 10;
/// How far the cardinal rule looks for a noun.
pub(crate) const MAX_LOOKAHEAD: usize = 5;

#[derive(Debug, Clone, Copy, Default)]
struct Link {
    prev: Option<usize>,
    next: Option<usize>,
}

/// Word records in input order plus the reading order rules walk.
///
/// Positions handed to rules are record ids. The reading order is a linked
/// list over the arena so merges and the aux move are O(1); neighbour
/// lookups never leave the current sentence.
#[derive(Debug)]
pub(crate) struct Tape {
    records: Vec<WordRecord>,
    links: Vec<Link>,
    first: Option<usize>,
}

impl Tape {
    pub(crate) fn new(document: &Document) -> Self {
        let records: Vec<WordRecord> = document
            .sentences()
            .iter()
            .flat_map(|s| s.tokens().iter().map(move |t| WordRecord::prepare(t, s.index())))
            .collect();
        let n = records.len();
        let links = (0..n)
            .map(|id| Link { prev: id.checked_sub(1), next: (id + 1 < n).then_some(id + 1) })
            .collect();
        Self { records, links, first: (n > 0).then_some(0) }
    }

    pub(crate) fn first(&self) -> Option<usize> {
        self.first
    }

    /// Successor in reading order, across sentences.
    pub(crate) fn following(&self, at: usize) -> Option<usize> {
        self.links[at].next
    }

    pub(crate) fn word(&self, at: usize) -> &WordRecord {
        &self.records[at]
    }

    pub(crate) fn word_mut(&mut self, at: usize) -> &mut WordRecord {
        &mut self.records[at]
    }

    /// The id `k` steps before `at` in reading order, if still in the same sentence.
    pub(crate) fn back(&self, at: usize, k: usize) -> Option<usize> {
        let mut pos = at;
        for _ in 0..k {
            pos = self.links[pos].prev?;
        }
        (self.records[pos].sentence() == self.records[at].sentence()).then_some(pos)
    }

    /// The id `k` steps after `at` in reading order, if still in the same sentence.
    pub(crate) fn ahead(&self, at: usize, k: usize) -> Option<usize> {
        let mut pos = at;
        for _ in 0..k {
            pos = self.links[pos].next?;
        }
        (self.records[pos].sentence() == self.records[at].sentence()).then_some(pos)
    }

    pub(crate) fn prev(&self, at: usize, k: usize) -> Option<&WordRecord> {
        self.back(at, k).map(|id| &self.records[id])
    }

    pub(crate) fn next(&self, at: usize, k: usize) -> Option<&WordRecord> {
        self.ahead(at, k).map(|id| &self.records[id])
    }

    /// Lowercase form `k` tokens back, or "" at the sentence start.
    pub(crate) fn prev_lower(&self, at: usize, k: usize) -> &str {
        self.prev(at, k).map_or("", WordRecord::lower)
    }

    pub(crate) fn prev_tag(&self, at: usize, k: usize) -> &str {
        self.prev(at, k).map_or("", WordRecord::tag)
    }

    pub(crate) fn prev_class(&self, at: usize, k: usize) -> TagClass {
        self.prev(at, k).map_or(TagClass::empty(), WordRecord::class)
    }

    /// Nearest earlier token matching `pred`, at most [`MAX_LOOKBACK`] back and
    /// never past a sentence end.
    pub(crate) fn search_back(&self, at: usize, pred: impl Fn(&WordRecord) -> bool) -> Option<usize> {
        for k in 1..=MAX_LOOKBACK {
            let id = self.back(at, k)?;
            let word = &self.records[id];
            if word.class().contains(TagClass::SENTENCE_END) {
                return None;
            }
            if pred(word) {
                return Some(id);
            }
        }
        None
    }

    /// True when nothing but a sentence end follows `at` in its sentence.
    pub(crate) fn closes_sentence(&self, at: usize) -> bool {
        self.next(at, 1).is_none_or(|w| w.class().contains(TagClass::SENTENCE_END))
    }

    /// First token of the sentence holding `at`, as annotated.
    pub(crate) fn sentence_opener(&self, at: usize) -> usize {
        let sentence = self.records[at].sentence();
        let mut id = at;
        while id > 0 && self.records[id - 1].sentence() == sentence {
            id -= 1;
        }
        id
    }

    /// Take `at` out of the reading order.
    pub(crate) fn unlink(&mut self, at: usize) {
        let Link { prev, next } = self.links[at];
        match prev {
            Some(p) => self.links[p].next = next,
            None => self.first = next,
        }
        if let Some(n) = next {
            self.links[n].prev = prev;
        }
        self.links[at] = Link::default();
    }

    /// Move `at` to sit directly before `target`.
    pub(crate) fn move_before(&mut self, at: usize, target: usize) {
        self.unlink(at);
        let prev = self.links[target].prev;
        self.links[at] = Link { prev, next: Some(target) };
        self.links[target].prev = Some(at);
        match prev {
            Some(p) => self.links[p].next = Some(at),
            None => self.first = Some(at),
        }
    }

    /// Move `at` to sit directly after `anchor`.
    pub(crate) fn move_after(&mut self, at: usize, anchor: usize) {
        self.unlink(at);
        let next = self.links[anchor].next;
        self.links[at] = Link { prev: Some(anchor), next };
        self.links[anchor].next = Some(at);
        if let Some(n) = next {
            self.links[n].prev = Some(at);
        }
    }

    /// Ids in the current reading order.
    #[cfg(test)]
    pub(crate) fn reading_order(&self) -> Vec<usize> {
        std::iter::successors(self.first, |&id| self.links[id].next).collect()
    }

    pub(crate) fn into_word_list(self) -> WordList {
        WordList::new(self.records)
    }
}

/// Whether `second` repeats `first`. `first` may be a hyphenated fragment of
/// `second` ("hesi-" before "hesitation").
pub(crate) fn is_repetition(first: &str, second: &str) -> bool {
    if first.is_empty() || second.is_empty() {
        return false;
    }
    if first == second {
        return true;
    }
    match first.strip_suffix('-') {
        Some(stem) => {
            !stem.is_empty() && stem != "a" && stem != "an" && second.chars().count() > 3 && second.starts_with(stem)
        }
        None => false,
    }
}
