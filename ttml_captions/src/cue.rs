//! # TTML Cue
//!
//! 在通用 Cue 契约的基础上增加 TTML 特有的呈现元数据：
//! 样式引用、区域引用、语言标签和元素标识符。

use serde::{Deserialize, Serialize};

use captioning_core::{PresentationHints, TimedCue};

/// 一条 TTML 字幕：时间、文本，外加可选的样式/区域/语言元数据。
///
/// 样式与区域标识符的有效性不在这里校验，而是在插入文档时
/// 对照文档级目录检查（见 [`crate::TtmlDocument::add_cue`]）。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TtmlCue {
    /// 文本形式的开始时间，保留源文档中的原始写法（如 `"1000t"`）。
    pub start: String,
    /// 文本形式的结束时间。
    pub stop: String,
    /// 毫秒形式的开始时间。非 media 时间基准的文档解析后保持为零。
    pub start_ms: u64,
    /// 毫秒形式的结束时间。
    pub stop_ms: u64,
    /// 字幕文本。解析时保留 `<p>` 元素的内部标记原文。
    pub text: String,
    /// 元素标识符（`xml:id`）。
    pub id: Option<String>,
    /// 样式目录中的标识符。
    pub style: Option<String>,
    /// 区域目录中的标识符。
    pub region: Option<String>,
    /// ISO 639-1 两位语言代码。
    pub lang: Option<String>,
}

impl TtmlCue {
    /// 以文本时间与字幕文本构造 Cue，其余字段为默认值。
    #[must_use]
    pub fn new(
        start: impl Into<String>,
        stop: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            start: start.into(),
            stop: stop.into(),
            text: text.into(),
            ..Self::default()
        }
    }
}

impl TimedCue for TtmlCue {
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

    fn presentation(&self) -> Option<PresentationHints<'_>> {
        Some(PresentationHints {
            style: self.style.as_deref(),
            region: self.region.as_deref(),
            language: self.lang.as_deref(),
        })
    }
}
