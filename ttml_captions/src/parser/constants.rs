//! # TTML 解析器 - 常量定义
//!
//! 解析 TTML 文档时用到的 XML 标签与属性名。

pub(super) const TAG_TT: &[u8] = b"tt";
pub(super) const TAG_STYLING: &[u8] = b"styling";
pub(super) const TAG_LAYOUT: &[u8] = b"layout";
pub(super) const TAG_STYLE: &[u8] = b"style";
pub(super) const TAG_REGION: &[u8] = b"region";
pub(super) const TAG_BODY: &[u8] = b"body";
pub(super) const TAG_DIV: &[u8] = b"div";
pub(super) const TAG_P: &[u8] = b"p";

pub(super) const ATTR_TIME_BASE: &[u8] = b"ttp:timeBase";
pub(super) const ATTR_TICK_RATE: &[u8] = b"ttp:tickRate";
pub(super) const ATTR_XML_ID: &[u8] = b"xml:id";
pub(super) const ATTR_BEGIN: &[u8] = b"begin";
pub(super) const ATTR_END: &[u8] = b"end";
pub(super) const ATTR_STYLE: &[u8] = b"style";
pub(super) const ATTR_REGION: &[u8] = b"region";

/// 样式命名空间前缀。样式与区域的呈现属性都挂在这个前缀下。
pub(super) const STYLE_NS_PREFIX: &[u8] = b"tts:";
