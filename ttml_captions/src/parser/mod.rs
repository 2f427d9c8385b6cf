//! # TTML 解析器
//!
//! 对 TTML 文档做单次前向遍历：读取根元素上的时间基准配置，
//! 建立样式/区域目录，然后按文档顺序收集所有 `<div>` 下的
//! `<p>` 元素为 Cue。解析是严格的：无效文档立即失败，
//! 不保留部分解析结果。

mod constants;
mod utils;

use quick_xml::{Reader, events::{BytesStart, Event}};
use tracing::warn;

use crate::cue::TtmlCue;
use crate::document::{TimeBase, TtmlDocument};
use crate::error::TtmlError;
use crate::time;

use self::constants::{
    ATTR_BEGIN, ATTR_END, ATTR_REGION, ATTR_STYLE, ATTR_TICK_RATE, ATTR_TIME_BASE, ATTR_XML_ID,
    TAG_BODY, TAG_DIV, TAG_LAYOUT, TAG_P, TAG_REGION, TAG_STYLE, TAG_STYLING, TAG_TT,
};
use self::utils::{collect_presentation_attributes, get_string_attribute};

/// 解析状态：记录当前位于文档结构的哪一段。
#[derive(Debug, Default)]
struct TtmlParserState {
    in_styling: bool,
    in_layout: bool,
    in_body: bool,
    in_div: bool,
    /// 当前打开的 `<region>` 的标识符，用于合并内嵌样式。
    current_region: Option<String>,
}

/// 解析 TTML 格式的字幕文档。
///
/// # 返回
///
/// * `Ok(TtmlDocument)` - 包含时间基准、样式/区域目录和全部 Cue 的文档。
///   Cue 按文档顺序平铺收集，`<div>` 的语言分组不会在解析时重建。
/// * `Err(TtmlError)` - 解析失败时的具体错误。
///
/// # Errors
///
/// * [`TtmlError::MalformedDocument`] - 输入不是合法的 XML。
/// * [`TtmlError::InvalidTimebase`] - 根元素缺少 `ttp:timeBase`
///   属性或其值不是合法标记。
/// * [`TtmlError::InvalidStyleReference`] / [`TtmlError::InvalidRegionReference`] -
///   某个 `<p>` 引用了目录中不存在的样式/区域，解析中止。
/// * [`TtmlError::MalformedTimecode`] / [`TtmlError::InvalidTimebaseConfiguration`] -
///   media 时间基准下的 tick 时间值无法换算。
pub fn parse_ttml(content: &str) -> Result<TtmlDocument, TtmlError> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(false);

    let mut doc = TtmlDocument::new();
    let mut state = TtmlParserState::default();

    loop {
        match reader.read_event()? {
            Event::Start(e) => handle_element(&e, &mut reader, &mut doc, &mut state, false)?,
            Event::Empty(e) => handle_element(&e, &mut reader, &mut doc, &mut state, true)?,
            Event::End(e) => match e.local_name().as_ref() {
                TAG_STYLING => state.in_styling = false,
                TAG_LAYOUT => state.in_layout = false,
                TAG_REGION => state.current_region = None,
                TAG_BODY => state.in_body = false,
                TAG_DIV => state.in_div = false,
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    if doc.time_base().is_none() {
        // 从未遇到根元素（或根本不是 TTML 文档）
        return Err(TtmlError::InvalidTimebase(String::new()));
    }

    doc.set_content(content.to_string());
    Ok(doc)
}

fn handle_element(
    e: &BytesStart<'_>,
    reader: &mut Reader<&[u8]>,
    doc: &mut TtmlDocument,
    state: &mut TtmlParserState,
    is_empty: bool,
) -> Result<(), TtmlError> {
    match e.local_name().as_ref() {
        TAG_TT => {
            let time_base = get_string_attribute(e, reader, ATTR_TIME_BASE)?.unwrap_or_default();
            doc.set_time_base_str(&time_base)?;
            if let Some(tick_rate) = get_string_attribute(e, reader, ATTR_TICK_RATE)? {
                doc.set_tick_rate(tick_rate);
            }
        }
        TAG_STYLING if !is_empty => state.in_styling = true,
        TAG_LAYOUT if !is_empty => state.in_layout = true,
        TAG_STYLE => handle_style(e, reader, doc, state)?,
        TAG_REGION if state.in_layout => {
            let attributes = collect_presentation_attributes(e, reader)?;
            if let Some(id) = attributes.get("id").cloned() {
                doc.add_region(id.clone(), attributes);
                if !is_empty {
                    state.current_region = Some(id);
                }
            } else {
                warn!("忽略一个没有 xml:id 的 <region> 元素");
            }
        }
        TAG_BODY if !is_empty => state.in_body = true,
        TAG_DIV if state.in_body && !is_empty => state.in_div = true,
        TAG_P if state.in_div => handle_p(e, reader, doc, is_empty)?,
        _ => {}
    }
    Ok(())
}

/// `<style>` 元素有两种角色：`<styling>` 下的目录条目，
/// 以及 `<region>` 内部的属性覆盖。
fn handle_style(
    e: &BytesStart<'_>,
    reader: &mut Reader<&[u8]>,
    doc: &mut TtmlDocument,
    state: &TtmlParserState,
) -> Result<(), TtmlError> {
    let attributes = collect_presentation_attributes(e, reader)?;

    if let Some(region_id) = state.current_region.as_deref() {
        // 内嵌样式的属性并入区域条目，冲突时覆盖
        doc.merge_region_attributes(region_id, attributes);
    } else if state.in_styling {
        if let Some(id) = attributes.get("id").cloned() {
            doc.add_style(id, attributes);
        } else {
            warn!("忽略一个没有 xml:id 的 <style> 元素");
        }
    }
    Ok(())
}

fn handle_p(
    e: &BytesStart<'_>,
    reader: &mut Reader<&[u8]>,
    doc: &mut TtmlDocument,
    is_empty: bool,
) -> Result<(), TtmlError> {
    let start = get_string_attribute(e, reader, ATTR_BEGIN)?.unwrap_or_default();
    let stop = get_string_attribute(e, reader, ATTR_END)?.unwrap_or_default();
    let id = get_string_attribute(e, reader, ATTR_XML_ID)?;
    let style = get_string_attribute(e, reader, ATTR_STYLE)?;
    let region = get_string_attribute(e, reader, ATTR_REGION)?;

    // 保留内部标记原文作为字幕文本
    let text = if is_empty {
        String::new()
    } else {
        reader.read_text(e.name())?.into_owned()
    };

    // 只有 media 时间基准定义了 tick 换算；其它时间基准的毫秒值保持为零
    let (start_ms, stop_ms) = if doc.time_base() == Some(TimeBase::Media) {
        (
            resolve_tick_time(&start, doc)?,
            resolve_tick_time(&stop, doc)?,
        )
    } else {
        (0, 0)
    };

    doc.add_cue(TtmlCue {
        start,
        stop,
        start_ms,
        stop_ms,
        text,
        id,
        style,
        region,
        lang: None,
    })
}

fn resolve_tick_time(text: &str, doc: &TtmlDocument) -> Result<u64, TtmlError> {
    if text.is_empty() {
        return Ok(0);
    }
    time::ticks_to_ms(text, doc.tick_rate())
}
