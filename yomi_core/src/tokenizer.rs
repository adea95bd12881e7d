//! `tokenizer`：把短语切分为同类字符的最大连续段（piece）。
//!
//! 目前提供一个默认实现 `ReadingSetTokenizer`：
//! - 分类规则是“字符是否出现在读音的字符集里”
//! - 任何字符都能分类，切分不存在失败情形

use std::collections::HashSet;

use crate::model::Tokenization;

/// Tokenizer：把 (短语, 读音) 切分为 piece 序列。
///
/// 读音只用于决定每个字符的分类；不同实现可以采用不同的分类规则
/// （例如按字符集归属、按文字系统归属）。
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, phrase: &str, reading: &str) -> Tokenization;
}

impl<T> Tokenizer for Box<T>
where
    T: Tokenizer + ?Sized,
{
    fn tokenize(&self, phrase: &str, reading: &str) -> Tokenization {
        (**self).tokenize(phrase, reading)
    }
}

/// 默认 tokenizer：字符只要出现在读音里就视为透明（表音）字符。
///
/// 这正是注音标注需要的规则：读音覆盖不到的字符（汉字）自然落入
/// 不透明类，由对齐搜索去吸收任意长度的读音。
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadingSetTokenizer;

impl Tokenizer for ReadingSetTokenizer {
    fn tokenize(&self, phrase: &str, reading: &str) -> Tokenization {
        let reading_set: HashSet<char> = reading.chars().collect();
        tokenize_by(phrase, |ch| reading_set.contains(&ch))
    }
}

/// 按给定分类谓词做切分：同类相邻字符合并，分类变化时开新段。
///
/// 空短语返回零个 piece（退化情形；对齐搜索的基例会正确处理）。
pub fn tokenize_by(phrase: &str, is_transparent: impl Fn(char) -> bool) -> Tokenization {
    let mut out = Tokenization::empty();
    for ch in phrase.chars() {
        let transparent = is_transparent(ch);
        if out.transparent.last() == Some(&transparent) {
            // 两个序列平行：transparent 非空则 pieces 非空
            out.pieces.last_mut().unwrap().push(ch);
        } else {
            out.pieces.push(ch.to_string());
            out.transparent.push(transparent);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(phrase: &str, reading: &str) -> Tokenization {
        ReadingSetTokenizer.tokenize(phrase, reading)
    }

    #[test]
    fn merges_runs_and_alternates() {
        let t = tokenize("雲も無い", "くももない");
        assert_eq!(t.pieces, vec!["雲", "も", "無", "い"]);
        assert_eq!(t.transparent, vec![false, true, false, true]);
    }

    #[test]
    fn adjacent_same_class_chars_merge() {
        let t = tokenize("小鳥たち", "ことりたち");
        assert_eq!(t.pieces, vec!["小鳥", "たち"]);
        assert_eq!(t.transparent, vec![false, true]);
    }

    #[test]
    fn partition_reconstructs_phrase() {
        let phrase = "今日はいい天気だ";
        let t = tokenize(phrase, "きょうはいいてんきだ");
        assert_eq!(t.pieces.concat(), phrase);
        assert_eq!(t.pieces.len(), t.transparent.len());
        assert!(t.pieces.iter().all(|p| !p.is_empty()));
        for w in t.transparent.windows(2) {
            assert_ne!(w[0], w[1]);
        }
    }

    #[test]
    fn empty_phrase_yields_zero_pieces() {
        let t = tokenize("", "くも");
        assert_eq!(t, Tokenization::empty());
    }

    #[test]
    fn reading_disjoint_phrase_is_one_opaque_piece() {
        let t = tokenize("雲無", "くもない");
        assert_eq!(t.pieces, vec!["雲無"]);
        assert_eq!(t.transparent, vec![false]);
    }
}
