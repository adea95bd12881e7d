/// 切分结果（piece 序列 + 每段的分类）。
///
/// 注意：`pieces` 与 `transparent` 是**等长的平行序列**：
/// `transparent[k]` 为 true 表示 `pieces[k]` 由“读音字符集内”的字符组成
/// （假名等表音字符），false 表示该段是不透明字符（汉字等表意字符）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokenization {
    /// 同类字符的最大连续段，按原文顺序排列；拼接后恰好还原整个短语
    pub pieces: Vec<String>,
    /// 每段的分类；相邻两段的分类必然交替
    pub transparent: Vec<bool>,
}

impl Tokenization {
    /// 空切分（空短语的退化情形：零个 piece）。
    pub fn empty() -> Self {
        Self {
            pieces: Vec::new(),
            transparent: Vec::new(),
        }
    }
}

/// 一个完整标注：piece 序列与读音分组的一一对应。
///
/// 约定：
/// - `pieces` 与 `readings` 等长，且每个元素非空
/// - `pieces` 拼接后等于原短语，`readings` 拼接后等于原读音
/// - `readings[k]` 是分配给 `pieces[k]` 的连续读音子串
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Labeling {
    /// 短语切分出的 piece（按原文顺序）
    pub pieces: Vec<String>,
    /// 与 piece 平行的读音分组
    pub readings: Vec<String>,
}
