//! `yomi_core`：纯逻辑层（std-only），不做任何 I/O。
//!
//! 设计目标：
//! - **核心可复用**：CLI/GUI/服务端都能复用同一套标注逻辑
//! - **分层清晰**：labeler（编排） -> tokenizer（切分） -> 对齐搜索 -> 输出（`Labeling` 列表）
//! - **正确优先**：穷举所有合法标注（完整性优先于效率），只适合短语级别的小输入
pub mod labeler;
pub mod model;
pub mod tokenizer;
