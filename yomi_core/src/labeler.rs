//! `labeler`：枚举短语与读音之间所有结构上合法的对应（标注）。
//!
//! 算法概要：
//! - 先把短语切分为透明/不透明交替的 piece 序列（见 `tokenizer`）
//! - 再对 `(piece 前缀长度, 读音前缀长度)` 状态做记忆化递归搜索：
//!   - **直接匹配**：不透明 piece 可领取任意一个读音字符；
//!     透明 piece 必须与当前读音字符完全相等（恰好单字符）
//!   - **吸收**：只有不透明 piece 能把后续字符并入自己最后的读音分组
//! - 结果即 `labelings(|pieces|, |reading|)`：所有完整标注
//!
//! 歧义输入的标注数量可能随输入长度指数增长，这是问题本身固有的；
//! 因此本实现只适合很短的输入（几个字符的短语）。

use std::collections::HashMap;

use crate::model::{Labeling, Tokenization};
use crate::tokenizer::{ReadingSetTokenizer, Tokenizer};

/// Labeler：编排“切分 + 对齐搜索”，tokenizer 可替换。
pub struct Labeler<T> {
    /// 切分器（决定字符分类规则）
    tokenizer: T,
}

impl<T> Labeler<T>
where
    T: Tokenizer,
{
    pub fn new(tokenizer: T) -> Self {
        Self { tokenizer }
    }

    /// 切分短语（不做对齐搜索）。
    pub fn tokenize(&self, phrase: &str, reading: &str) -> Tokenization {
        self.tokenizer.tokenize(phrase, reading)
    }

    /// 枚举 (phrase, reading) 的所有完整标注。
    ///
    /// - 结果恰好一个元素 ⇔ 标注无歧义
    /// - 结果为空 ⇔ 不存在合法对应（这是数据结果，不是错误）
    pub fn label(&self, phrase: &str, reading: &str) -> Vec<Labeling> {
        let tokenization = self.tokenize(phrase, reading);
        label_pieces(&tokenization, reading)
    }
}

impl Default for Labeler<ReadingSetTokenizer> {
    fn default() -> Self {
        Self::new(ReadingSetTokenizer)
    }
}

/// 快捷入口：用默认 tokenizer（读音字符集分类）直接标注。
pub fn label(phrase: &str, reading: &str) -> Vec<Labeling> {
    Labeler::new(ReadingSetTokenizer).label(phrase, reading)
}

/// 对已切分好的 piece 序列做对齐搜索。
///
/// 单独暴露这一层，方便调用方/测试直接驱动搜索
/// （例如手工构造的 piece 序列，不经过 tokenizer）。
pub fn label_pieces(tokenization: &Tokenization, reading: &str) -> Vec<Labeling> {
    let reading: Vec<char> = reading.chars().collect();
    let mut search = Search {
        pieces: &tokenization.pieces,
        transparent: &tokenization.transparent,
        reading: &reading,
        memo: HashMap::new(),
    };
    search.labelings(tokenization.pieces.len(), reading.len())
}

/// 一次标注调用的搜索状态；`memo` 只属于本次调用，调用结束即释放。
struct Search<'a> {
    pieces: &'a [String],
    transparent: &'a [bool],
    reading: &'a [char],
    /// (i, j) -> 该状态的全部前缀标注（每个状态最多计算一次）
    memo: HashMap<(usize, usize), Vec<Labeling>>,
}

impl Search<'_> {
    /// `labelings(i, j)`：恰好消费前 `i` 个 piece 与前 `j` 个读音字符的前缀标注集合。
    fn labelings(&mut self, i: usize, j: usize) -> Vec<Labeling> {
        if let Some(hit) = self.memo.get(&(i, j)) {
            return hit.clone();
        }
        let out = self.compute(i, j);
        self.memo.insert((i, j), out.clone());
        out
    }

    /// 每次递归严格减小 `i + j`，基例为 `(0, 0)`，必然终止。
    fn compute(&mut self, i: usize, j: usize) -> Vec<Labeling> {
        let mut out: Vec<Labeling> = Vec::new();
        if i == 0 && j == 0 {
            out.push(Labeling::default());
            return out;
        }
        // i == 0 而 j > 0：读音无 piece 可归属；
        // j < i：剩余读音不足以给每个 piece 至少分一个字符。
        if i == 0 || j < i {
            return out;
        }

        let piece = self.pieces[i - 1].clone();
        let transparent = self.transparent[i - 1];
        let ch = self.reading[j - 1];

        // 直接匹配：piece 领取 ch 作为新的单字符读音分组。
        if !transparent || piece_matches_char(&piece, ch) {
            for prefix in self.labelings(i - 1, j - 1) {
                let mut labeling = prefix;
                labeling.pieces.push(piece.clone());
                labeling.readings.push(ch.to_string());
                out.push(labeling);
            }
        }
        // 吸收：piece 已被消费，把 ch 并入最后一个读音分组（分组加长一个字符）。
        if !transparent {
            for prefix in self.labelings(i, j - 1) {
                let mut labeling = prefix;
                // (i, j-1) 且 i > 0 的前缀标注必有分组：每个已消费 piece 至少占一个字符
                labeling.readings.last_mut().unwrap().push(ch);
                out.push(labeling);
            }
        }
        out
    }
}

/// 透明 piece 的匹配条件：文本恰好等于单个读音字符。
fn piece_matches_char(piece: &str, ch: char) -> bool {
    let mut chars = piece.chars();
    chars.next() == Some(ch) && chars.next().is_none()
}
