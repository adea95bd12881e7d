//! 假名（kana）相关：按文字系统分类与读音规整。
//!
//! `yomi_core` 的默认分类规则是“字符是否出现在读音的字符集里”；
//! 本 crate 提供两个补充能力：
//! - `KanaTokenizer`：按文字系统（是否假名）分类的切分实现
//! - 读音辅助：整串假名判断、片假名 -> 平假名规整

use wana_kana::{ConvertJapanese, IsJapaneseStr};
use yomi_core::model::Tokenization;
use yomi_core::tokenizer::{Tokenizer, tokenize_by};

/// 按文字系统分类的 tokenizer：字符是假名即视为透明。
///
/// 与 `ReadingSetTokenizer` 的差别：读音覆盖不到的假名
/// （口语缩略、送り仮名变体等）仍归为透明段，不会被不透明段吸收。
#[derive(Debug, Clone, Copy, Default)]
pub struct KanaTokenizer;

impl Tokenizer for KanaTokenizer {
    fn tokenize(&self, phrase: &str, _reading: &str) -> Tokenization {
        tokenize_by(phrase, is_kana_char)
    }
}

/// 单个字符是否假名。
pub fn is_kana_char(ch: char) -> bool {
    ch.to_string().as_str().is_kana()
}

/// 读音是否整串假名（注音标注期望读音完全落在表音文字里）。
pub fn is_kana_reading(reading: &str) -> bool {
    !reading.is_empty() && reading.is_kana()
}

/// 读音规整：片假名折叠为平假名，便于与平假名词形比较。
pub fn normalize_reading(reading: &str) -> String {
    reading.to_hiragana()
}

#[cfg(test)]
mod tests {
    use super::*;
    use yomi_core::labeler::{Labeler, label};

    #[test]
    fn classifies_by_script_not_reading() {
        // 读音故意不含「い」：按字符集分类会把「い」当不透明，
        // 按文字系统分类仍然是透明段。
        let t = KanaTokenizer.tokenize("無い", "な");
        assert_eq!(t.pieces, vec!["無", "い"]);
        assert_eq!(t.transparent, vec![false, true]);
    }

    #[test]
    fn kana_tokenizer_agrees_on_covered_input() {
        let labeler = Labeler::new(KanaTokenizer);
        assert_eq!(
            labeler.label("雲も無い", "くももない"),
            label("雲も無い", "くももない")
        );
    }

    #[test]
    fn reading_checks() {
        assert!(is_kana_reading("くももない"));
        assert!(is_kana_reading("クモ"));
        assert!(!is_kana_reading("雲も"));
        assert!(!is_kana_reading(""));
        assert!(is_kana_char('も'));
        assert!(!is_kana_char('雲'));
    }

    #[test]
    fn normalizes_katakana_reading() {
        assert_eq!(normalize_reading("クモ"), "くも");
        assert_eq!(normalize_reading("くも"), "くも");
    }
}
