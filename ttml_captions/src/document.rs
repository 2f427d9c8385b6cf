//! # TTML 文档模型
//!
//! 一个文档持有时间基准、tickRate、样式/区域目录、默认语言、
//! 标题与版权信息、已合并的语言列表，以及有序的 Cue 集合。
//! 目录在解析阶段建立，在插入 Cue 时用于引用校验，构建阶段不使用。

use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use captioning_core::{CaptionFile, TimedCue};

use crate::cue::TtmlCue;
use crate::error::TtmlError;
use crate::generator::{self, BuildOptions};
use crate::time::format_timecode;

/// 样式或区域条目：属性名到属性值的扁平映射。
pub type AttributeMap = HashMap<String, String>;

/// TTML 文档的时间基准，决定时间值的编码方式和换算公式。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display,
)]
#[strum(serialize_all = "lowercase")]
pub enum TimeBase {
    /// media：tick 计数，配合 `ttp:tickRate` 换算。
    Media,
    /// smpte：帧计数。
    Smpte,
    /// clock：钟面时间。
    Clock,
}

/// 一个 TTML 字幕文档。
///
/// 通过 [`crate::parse_ttml`] 从 XML 文本构造，或从空文档开始，
/// 用 [`Self::add_cues`] 把任意数量的单语言字幕源合并进来，
/// 最后用 [`Self::build`] / [`Self::build_part`] 重新序列化为
/// 按语言分组的 TTML 文本。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TtmlDocument {
    time_base: Option<TimeBase>,
    /// `ttp:tickRate` 原样存储，换算时才校验。
    tick_rate: Option<String>,
    styles: HashMap<String, AttributeMap>,
    regions: HashMap<String, AttributeMap>,
    default_lang: String,
    title: String,
    copyright: String,
    /// 已合并语言，按合并顺序排列，允许重复。
    languages: Vec<String>,
    cues: Vec<TtmlCue>,
    /// 最近一次解析的输入或构建的输出。
    content: String,
}

impl Default for TtmlDocument {
    fn default() -> Self {
        Self {
            time_base: None,
            tick_rate: None,
            styles: HashMap::new(),
            regions: HashMap::new(),
            default_lang: "en".to_string(),
            title: String::new(),
            copyright: String::new(),
            languages: Vec::new(),
            cues: Vec::new(),
            content: String::new(),
        }
    }
}

impl TtmlDocument {
    /// 创建一个空文档，默认语言为 `"en"`。
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前时间基准；未设置时为 `None`。
    #[must_use]
    pub const fn time_base(&self) -> Option<TimeBase> {
        self.time_base
    }

    /// 直接设置时间基准。
    pub fn set_time_base(&mut self, time_base: TimeBase) {
        self.time_base = Some(time_base);
    }

    /// 从 `ttp:timeBase` 属性的标记字符串设置时间基准。
    ///
    /// # Errors
    ///
    /// 标记不是 `media`、`smpte`、`clock` 之一时返回
    /// [`TtmlError::InvalidTimebase`]，错误信息包含给定的值。
    pub fn set_time_base_str(&mut self, token: &str) -> Result<(), TtmlError> {
        let time_base = TimeBase::from_str(token)
            .map_err(|_| TtmlError::InvalidTimebase(token.to_string()))?;
        self.time_base = Some(time_base);
        Ok(())
    }

    /// `ttp:tickRate` 的原始文本。
    #[must_use]
    pub fn tick_rate(&self) -> Option<&str> {
        self.tick_rate.as_deref()
    }

    /// 原样存储 tickRate，不做校验；校验推迟到换算发生的地方。
    pub fn set_tick_rate(&mut self, tick_rate: impl Into<String>) {
        self.tick_rate = Some(tick_rate.into());
    }

    /// 默认语言。Cue 没有语言标签时在构建阶段回退到这里。
    #[must_use]
    pub fn default_lang(&self) -> &str {
        &self.default_lang
    }

    /// 设置默认语言。
    pub fn set_default_lang(&mut self, lang: impl Into<String>) {
        self.default_lang = lang.into();
    }

    /// 文档标题，写入输出的 `<ttm:title>`。
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// 设置文档标题。
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// 版权信息，写入输出的 `<ttm:copyright>`。
    #[must_use]
    pub fn copyright(&self) -> &str {
        &self.copyright
    }

    /// 设置版权信息。留空时构建阶段会填入 `Copyright {年份}`。
    pub fn set_copyright(&mut self, copyright: impl Into<String>) {
        self.copyright = copyright.into();
    }

    /// 已合并的语言列表，按合并顺序排列。
    #[must_use]
    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    /// 最近一次解析的输入或构建的输出文本。
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    pub(crate) fn set_content(&mut self, content: String) {
        self.content = content;
    }

    /// 全部样式条目。
    #[must_use]
    pub const fn styles(&self) -> &HashMap<String, AttributeMap> {
        &self.styles
    }

    /// 按标识符查询样式条目。
    ///
    /// # Errors
    ///
    /// 标识符不存在时返回 [`TtmlError::UnknownCatalogId`]。
    pub fn style(&self, id: &str) -> Result<&AttributeMap, TtmlError> {
        self.styles
            .get(id)
            .ok_or_else(|| TtmlError::UnknownCatalogId(id.to_string()))
    }

    /// 全部区域条目。
    #[must_use]
    pub const fn regions(&self) -> &HashMap<String, AttributeMap> {
        &self.regions
    }

    /// 按标识符查询区域条目。
    ///
    /// # Errors
    ///
    /// 标识符不存在时返回 [`TtmlError::UnknownCatalogId`]。
    pub fn region(&self, id: &str) -> Result<&AttributeMap, TtmlError> {
        self.regions
            .get(id)
            .ok_or_else(|| TtmlError::UnknownCatalogId(id.to_string()))
    }

    /// 注册一个样式条目。同名条目被覆盖。
    pub fn add_style(&mut self, id: impl Into<String>, attributes: AttributeMap) {
        self.styles.insert(id.into(), attributes);
    }

    /// 注册一个区域条目。同名条目被覆盖。
    pub fn add_region(&mut self, id: impl Into<String>, attributes: AttributeMap) {
        self.regions.insert(id.into(), attributes);
    }

    /// 把区域内嵌 `<style>` 的属性并入区域条目，键冲突时后者覆盖前者。
    pub(crate) fn merge_region_attributes(&mut self, id: &str, attributes: AttributeMap) {
        if let Some(entry) = self.regions.get_mut(id) {
            entry.extend(attributes);
        }
    }

    /// 校验并追加一个 Cue。
    ///
    /// Cue 引用的样式/区域标识符必须已经存在于对应目录中；
    /// 这一检查只在插入时进行，不会回溯。校验失败时 Cue 集合不变。
    ///
    /// # Errors
    ///
    /// * [`TtmlError::InvalidStyleReference`] - 样式标识符不在样式目录中。
    /// * [`TtmlError::InvalidRegionReference`] - 区域标识符不在区域目录中。
    pub fn add_cue(&mut self, cue: TtmlCue) -> Result<(), TtmlError> {
        if let Some(style) = cue.style.as_deref()
            && !self.styles.contains_key(style)
        {
            return Err(TtmlError::InvalidStyleReference(style.to_string()));
        }
        if let Some(region) = cue.region.as_deref()
            && !self.regions.contains_key(region)
        {
            return Err(TtmlError::InvalidRegionReference(region.to_string()));
        }
        self.cues.push(cue);
        Ok(())
    }

    /// 把一个外部格式的 Cue 转换后追加进来。
    ///
    /// 时间与文本总是携带；样式/区域只在源 Cue 具备呈现能力时
    /// 才会带过来（通用 Cue 没有这些字段，自然跳过目录校验）。
    ///
    /// # Errors
    ///
    /// 携带过来的样式/区域引用无效时与 [`Self::add_cue`] 相同。
    pub fn add_foreign_cue<C: TimedCue + ?Sized>(&mut self, cue: &C) -> Result<(), TtmlError> {
        let converted = Self::cue_from_contract(cue, None);
        self.add_cue(converted)
    }

    /// 把一个单语言字幕源的全部 Cue 以指定语言合并进来。
    ///
    /// 语言会追加到文档的语言列表（不去重）；每条 Cue 的时间取
    /// 源 Cue 的毫秒值，文本时间码重新以钟面秒形式生成。
    ///
    /// # Errors
    ///
    /// 某条 Cue 携带的样式/区域引用无效时与 [`Self::add_cue`] 相同，
    /// 此时之前已合并的 Cue 保留。
    pub fn add_cues<F: CaptionFile>(
        &mut self,
        source: &F,
        language: &str,
    ) -> Result<(), TtmlError> {
        self.languages.push(language.to_string());
        for cue in source.cues() {
            let converted = Self::cue_from_contract(cue, Some(language));
            self.add_cue(converted)?;
        }
        Ok(())
    }

    fn cue_from_contract<C: TimedCue + ?Sized>(cue: &C, language: Option<&str>) -> TtmlCue {
        let mut converted = TtmlCue {
            start: format_timecode(cue.start_ms()),
            stop: format_timecode(cue.stop_ms()),
            start_ms: cue.start_ms(),
            stop_ms: cue.stop_ms(),
            text: cue.text().to_string(),
            lang: language.map(str::to_string),
            ..TtmlCue::default()
        };
        if let Some(hints) = cue.presentation() {
            converted.style = hints.style.map(str::to_string);
            converted.region = hints.region.map(str::to_string);
        }
        converted
    }

    /// 返回一个只含指定语言 Cue 的文档副本，源文档不变。
    ///
    /// 目录、标题等结构信息原样保留。匹配是 `Option` 上的精确相等：
    /// 传 `None` 只匹配没有语言标签的 Cue。
    #[must_use]
    pub fn language_cues_as_document(&self, language: Option<&str>) -> Self {
        let mut filtered = self.clone();
        filtered.cues = self
            .cues
            .iter()
            .filter(|cue| cue.lang.as_deref() == language)
            .cloned()
            .collect();
        filtered
    }

    /// 按插入顺序返回全部 Cue。
    #[must_use]
    pub fn cues(&self) -> &[TtmlCue] {
        &self.cues
    }

    /// 按索引取单个 Cue。
    #[must_use]
    pub fn cue(&self, index: usize) -> Option<&TtmlCue> {
        self.cues.get(index)
    }

    /// Cue 总数。
    #[must_use]
    pub fn cue_count(&self) -> usize {
        self.cues.len()
    }

    /// 按开始时间（毫秒）对 Cue 做稳定排序。
    pub fn sort_cues_by_start(&mut self) {
        self.cues.sort_by_key(|cue| cue.start_ms);
    }

    /// 构建整个文档，相当于 `build_part(0, -1, options)`。
    ///
    /// # Errors
    ///
    /// 见 [`Self::build_part`]。
    pub fn build(&mut self, options: &BuildOptions) -> Result<&str, TtmlError> {
        self.build_part(0, -1, options)
    }

    /// 把 `[from, to]`（含两端）索引范围内的 Cue 构建为 TTML 文本。
    ///
    /// 构建前先对全部 Cue 按开始时间稳定排序，索引针对排序后的顺序。
    /// 越界的索引静默收缩到有效范围（`from` 回到 0，`to` 回到末尾），
    /// 不报错。语言没有对应 `<div>` 的 Cue 被静默丢弃。
    /// 结果写入文档的 `content`，替换之前的内容。
    ///
    /// # Errors
    ///
    /// XML 写出或 UTF-8 转换失败时返回相应错误。
    pub fn build_part(
        &mut self,
        from: isize,
        to: isize,
        options: &BuildOptions,
    ) -> Result<&str, TtmlError> {
        self.sort_cues_by_start();
        let xml = generator::render(self, from, to, options)?;
        self.content = xml;
        Ok(&self.content)
    }
}

impl CaptionFile for TtmlDocument {
    type Cue = TtmlCue;

    fn cues(&self) -> &[TtmlCue] {
        &self.cues
    }

    fn sort_cues_by_start(&mut self) {
        self.cues.sort_by_key(|cue| cue.start_ms);
    }
}
