use std::io;

use quick_xml::{
    Error as QuickXmlError, encoding::EncodingError, events::attributes::AttrError,
};
use thiserror::Error;

use captioning_core::CaptioningError;

/// 定义 TTML 文档解析、构建和编辑过程中可能发生的各种错误。
#[derive(Error, Debug)]
pub enum TtmlError {
    /// 输入文本无法作为 XML 解析。
    #[error("文档格式错误: {0}")]
    MalformedDocument(#[from] QuickXmlError),
    /// XML 属性解析错误，来自 `quick-xml` 库。
    #[error("XML 属性错误: {0}")]
    Attribute(#[from] AttrError),
    /// XML 文本编码或解码错误。
    #[error("文本编码或解码错误: {0}")]
    Encoding(#[from] EncodingError),
    /// 无法识别的 timeBase 标记。
    #[error(
        "无效的 timeBase (给定: '{0}')。提示: <tt xmlns:ttp=\"http://www.w3.org/ns/ttml#parameter\" ttp:timeBase=\"media\">"
    )]
    InvalidTimebase(String),
    /// Cue 引用了样式目录中不存在的样式标识符。
    #[error("无效的 Cue 样式 \"{0}\"")]
    InvalidStyleReference(String),
    /// Cue 引用了区域目录中不存在的区域标识符。
    #[error("无效的 Cue 区域 \"{0}\"")]
    InvalidRegionReference(String),
    /// 文本时间码不符合任何已知语法。
    #[error("无法解析时间码 '{0}'")]
    MalformedTimecode(String),
    /// tick 换算所需的 tickRate 缺失或无效。
    #[error("tickRate 配置无效: {0}")]
    InvalidTimebaseConfiguration(String),
    /// 直接查询了目录中不存在的标识符。
    #[error("目录中不存在标识符 \"{0}\"")]
    UnknownCatalogId(String),
    /// 从字节序列转换为 UTF-8 字符串失败。
    #[error("UTF-8 转换错误: {0}")]
    FromUtf8(#[from] std::string::FromUtf8Error),
    /// 文件读写等 IO 错误。
    #[error("IO 错误: {0}")]
    Io(#[from] io::Error),
}

impl From<TtmlError> for io::Error {
    fn from(err: TtmlError) -> Self {
        Self::other(err)
    }
}

impl From<CaptioningError> for TtmlError {
    fn from(err: CaptioningError) -> Self {
        match err {
            CaptioningError::MalformedTimecode(text) => Self::MalformedTimecode(text),
        }
    }
}
