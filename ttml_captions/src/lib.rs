//! # TTML Captions: TTML 字幕文档的解析、合并与生成
//!
//! 该 crate 围绕 [`TtmlDocument`] 提供三类能力：
//!
//! - [`parse_ttml`]：把 TTML 文本解析为结构化文档（时间基准、
//!   样式/区域目录、平铺的 Cue 集合）。
//! - [`TtmlDocument::add_cues`]：把任意数量的单语言字幕源
//!   （任何实现了 `captioning_core` 契约的格式）合并为一个
//!   多语言文档。
//! - [`TtmlDocument::build_part`]：把文档重新序列化为 TTML 文本，
//!   每个已合并的语言得到一个独立的 `<div xml:lang>` 容器。
//!
//! ## 示例
//!
//! 把一个单语言字幕源合并进空文档，然后构建多语言 TTML 输出：
//!
//! ```rust
//! use captioning_core::{Cue, PlainCaptionFile};
//! use ttml_captions::{BuildOptions, TtmlDocument};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut source = PlainCaptionFile::new();
//!     source.add_cue(Cue::from_ms(0, 1000, "Hi"));
//!
//!     let mut document = TtmlDocument::new();
//!     document.add_cues(&source, "en")?;
//!
//!     let options = BuildOptions {
//!         copyright_year: 2024,
//!         format: true,
//!     };
//!     let xml = document.build_part(0, 0, &options)?;
//!
//!     assert!(xml.contains(r#"<div xml:lang="en">"#));
//!     assert!(xml.contains(r#"begin="0.000s""#));
//!     assert!(xml.contains(r#"end="1.000s""#));
//!     assert!(xml.contains("Hi"));
//!
//!     Ok(())
//! }
//! ```

pub mod cue;
pub mod document;
pub mod error;
pub mod generator;
pub mod parser;
pub mod time;

pub use cue::TtmlCue;
pub use document::{AttributeMap, TimeBase, TtmlDocument};
pub use error::TtmlError;
pub use generator::BuildOptions;
pub use parser::parse_ttml;
