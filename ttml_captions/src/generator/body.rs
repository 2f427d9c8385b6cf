//! # TTML 生成器 - Body 部分
//!
//! 每个已合并的语言得到一个 `<div xml:lang>` 容器；选定范围内的
//! Cue 按小写语言标签路由到对应的 div，语言没有容器的 Cue 被
//! 静默丢弃。流式写出要求先分组再写，因此这里先把 Cue 按 div
//! 分桶，再依次写出。

use std::collections::HashMap;

use quick_xml::{Writer, events::BytesText};
use tracing::debug;

use crate::cue::TtmlCue;
use crate::document::TtmlDocument;
use crate::error::TtmlError;
use crate::time::format_timecode;

pub(super) fn write_body<W: std::io::Write>(
    writer: &mut Writer<W>,
    doc: &TtmlDocument,
    range: Option<(usize, usize)>,
) -> Result<(), TtmlError> {
    let languages = doc.languages();

    // 小写语言标签到 div 序号；重复的语言条目后者覆盖前者
    let mut div_for_lang: HashMap<String, usize> = HashMap::new();
    for (index, language) in languages.iter().enumerate() {
        div_for_lang.insert(language.to_lowercase(), index);
    }

    let mut buckets: Vec<Vec<(usize, String, &TtmlCue)>> = vec![Vec::new(); languages.len()];
    if let Some((from, to)) = range {
        for index in from..=to {
            let cue = &doc.cues()[index];
            let lang = cue
                .lang
                .clone()
                .unwrap_or_else(|| doc.default_lang().to_string());
            if let Some(&div_index) = div_for_lang.get(&lang.to_lowercase()) {
                buckets[div_index].push((index, lang, cue));
            } else {
                debug!("Cue #{index} 的语言 '{lang}' 没有对应的 <div>，不会出现在输出中");
            }
        }
    }

    let body_builder = writer.create_element("body");
    if languages.is_empty() {
        body_builder.write_empty()?;
        return Ok(());
    }

    body_builder.write_inner_content(|writer| {
        for (div_index, language) in languages.iter().enumerate() {
            writer
                .create_element("div")
                .with_attribute(("xml:lang", language.as_str()))
                .write_inner_content(|writer| {
                    write_title_placeholder(writer, doc, language)?;
                    for (index, lang, cue) in &buckets[div_index] {
                        write_cue(writer, *index, lang, cue)?;
                    }
                    Ok(())
                })?;
        }
        Ok(())
    })?;
    Ok(())
}

/// 每个语言 div 以一条标题占位行开头。
fn write_title_placeholder<W: std::io::Write>(
    writer: &mut Writer<W>,
    doc: &TtmlDocument,
    language: &str,
) -> Result<(), TtmlError> {
    writer
        .create_element("p")
        .with_attribute(("begin", "0.000s"))
        .with_attribute(("id", language))
        .with_attribute(("end", "1.000s"))
        .write_text_content(BytesText::new(doc.title()))?;
    Ok(())
}

fn write_cue<W: std::io::Write>(
    writer: &mut Writer<W>,
    index: usize,
    lang: &str,
    cue: &TtmlCue,
) -> Result<(), TtmlError> {
    let text = collapse_line_breaks(&cue.text);
    writer
        .create_element("p")
        .with_attribute(("begin", format_timecode(cue.start_ms).as_str()))
        .with_attribute(("id", format!("{lang}{index}").as_str()))
        .with_attribute(("end", format_timecode(cue.stop_ms).as_str()))
        .write_text_content(BytesText::new(&text))?;
    Ok(())
}

/// 把换行符的连续串折叠成单个空格。
fn collapse_line_breaks(text: &str) -> String {
    let mut collapsed = String::with_capacity(text.len());
    let mut in_break = false;
    for ch in text.chars() {
        if ch == '\r' || ch == '\n' {
            if !in_break {
                collapsed.push(' ');
                in_break = true;
            }
        } else {
            collapsed.push(ch);
            in_break = false;
        }
    }
    collapsed
}
