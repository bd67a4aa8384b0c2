use super::word::WordList;
use crate::api::CpidrResult;
use crate::density::density_or_zero;

pub(crate) fn summarize(word_list: WordList) -> CpidrResult {
    let word_count = word_list.word_count();
    let proposition_count = word_list.proposition_count();
    let density = density_or_zero(proposition_count, word_count);
    CpidrResult { word_count, proposition_count, density, word_list }
}
