//! # 通用字幕 Cue 契约
//!
//! 一个 Cue 是一条带开始/结束时间的字幕文本。契约同时暴露文本形式与
//! 毫秒形式的时间，因为不同格式的转换器各自依赖其中一种。

use serde::{Deserialize, Serialize};

use crate::error::CaptioningError;
use crate::timecode::{format_generic_timecode, parse_generic_timecode};

/// Cue 携带的呈现元数据（样式、区域、语言）的借用视图。
///
/// 只有具备呈现能力的 Cue 类型（如 TTML Cue）才会提供该视图，
/// 通用 Cue 不携带这些信息，相关逻辑分支自然被跳过。
#[derive(Debug, Clone, Copy, Default)]
pub struct PresentationHints<'a> {
    /// 样式标识符。
    pub style: Option<&'a str>,
    /// 区域标识符。
    pub region: Option<&'a str>,
    /// ISO 639-1 两位语言代码。
    pub language: Option<&'a str>,
}

/// 带时间的字幕单元契约。
pub trait TimedCue {
    /// 文本形式的开始时间。
    fn start_text(&self) -> &str;
    /// 文本形式的结束时间。
    fn stop_text(&self) -> &str;
    /// 毫秒形式的开始时间。
    fn start_ms(&self) -> u64;
    /// 毫秒形式的结束时间。
    fn stop_ms(&self) -> u64;
    /// 字幕文本。
    fn text(&self) -> &str;

    /// 呈现元数据能力钩子。默认实现返回 `None`，
    /// 表示该 Cue 类型不携带样式/区域/语言信息。
    fn presentation(&self) -> Option<PresentationHints<'_>> {
        None
    }
}

/// 最简单的具体 Cue：时间加自由文本，不携带任何呈现元数据。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cue {
    /// 文本形式的开始时间。
    pub start: String,
    /// 文本形式的结束时间。
    pub stop: String,
    /// 毫秒形式的开始时间。
    pub start_ms: u64,
    /// 毫秒形式的结束时间。
    pub stop_ms: u64,
    /// 字幕文本。
    pub text: String,
}

impl Cue {
    /// 从文本时间码构造 Cue，毫秒值由通用时间码语法解析得出。
    ///
    /// # Errors
    ///
    /// 开始或结束时间不符合 `HH:MM:SS,mmm` 语法时返回
    /// [`CaptioningError::MalformedTimecode`]。
    pub fn new(
        start: impl Into<String>,
        stop: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<Self, CaptioningError> {
        let start = start.into();
        let stop = stop.into();
        let start_ms = parse_generic_timecode(&start)?;
        let stop_ms = parse_generic_timecode(&stop)?;
        Ok(Self {
            start,
            stop,
            start_ms,
            stop_ms,
            text: text.into(),
        })
    }

    /// 从毫秒值构造 Cue，文本时间码由通用语法格式化得出。
    #[must_use]
    pub fn from_ms(start_ms: u64, stop_ms: u64, text: impl Into<String>) -> Self {
        Self {
            start: format_generic_timecode(start_ms),
            stop: format_generic_timecode(stop_ms),
            start_ms,
            stop_ms,
            text: text.into(),
        }
    }
}

impl TimedCue for Cue {
    fn start_text(&self) -> &str {
        &self.start
    }

    fn stop_text(&self) -> &str {
        &self.stop
    }

    fn start_ms(&self) -> u64 {
        self.start_ms
    }

    fn stop_ms(&self) -> u64 {
        self.stop_ms
    }

    fn text(&self) -> &str {
        &self.text
    }
}
