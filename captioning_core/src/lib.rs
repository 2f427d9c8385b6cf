//! # Captioning Core: 字幕格式处理器的共享契约
//!
//! 该 crate 定义了各种字幕格式处理器之间共享的最小契约：
//! 带时间的字幕单元（Cue）、有序 Cue 集合，以及通用的
//! `小时:分钟:秒,毫秒` 时间码语法。
//!
//! 具体格式（如 TTML）的解析与生成不在本 crate 范围内，
//! 它们在各自的 crate 中实现并消费这里的契约。

pub mod cue;
pub mod error;
pub mod file;
pub mod timecode;

pub use cue::*;
pub use error::*;
pub use file::*;
pub use timecode::*;
