//! # TTML 生成器
//!
//! 从零构建 TTML 骨架：带命名空间的根元素、标题/版权元数据块，
//! 然后把选定范围内的 Cue 按语言分进各自的 `<div>` 容器。
//! 样式/区域目录目前不回写到输出中。

mod body;
mod head;

use std::io::Cursor;

use chrono::Datelike;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, Event};

use crate::document::TtmlDocument;
use crate::error::TtmlError;

/// TTML 构建选项。
///
/// 版权年份作为显式参数注入而不是在构建时读墙上时钟，
/// 保证构建过程可复现、可测试。
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// 版权信息留空时填入 `Copyright {copyright_year}`。
    pub copyright_year: i32,
    /// 是否输出带缩进的格式化 XML。
    pub format: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            copyright_year: chrono::Utc::now().year(),
            format: true,
        }
    }
}

/// 把文档按 `[from, to]` 范围渲染为 TTML 文本。
///
/// 调用方（[`TtmlDocument::build_part`]）负责先排序 Cue；
/// 这里只做范围收缩、分组和写出。
pub(crate) fn render(
    doc: &TtmlDocument,
    from: isize,
    to: isize,
    options: &BuildOptions,
) -> Result<String, TtmlError> {
    let range = clamp_range(from, to, doc.cue_count());

    let mut buffer = Vec::new();
    let result = if options.format {
        let mut writer = Writer::new_with_indent(Cursor::new(&mut buffer), b' ', 2);
        render_inner(&mut writer, doc, range, options)
    } else {
        let mut writer = Writer::new(Cursor::new(&mut buffer));
        render_inner(&mut writer, doc, range, options)
    };
    result?;

    String::from_utf8(buffer).map_err(TtmlError::FromUtf8)
}

/// 把越界的索引静默收缩到 `[0, count - 1]`：`from` 越界回到 0，
/// `to` 越界回到末尾。空文档返回 `None`。
fn clamp_range(from: isize, to: isize, count: usize) -> Option<(usize, usize)> {
    if count == 0 {
        return None;
    }
    let last = count - 1;
    let from = usize::try_from(from).ok().filter(|f| *f <= last).unwrap_or(0);
    let to = usize::try_from(to).ok().filter(|t| *t <= last).unwrap_or(last);
    Some((from, to))
}

fn render_inner<W: std::io::Write>(
    writer: &mut Writer<W>,
    doc: &TtmlDocument,
    range: Option<(usize, usize)>,
    options: &BuildOptions,
) -> Result<(), TtmlError> {
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

    writer
        .create_element("tt")
        .with_attribute(("xmlns", "http://www.w3.org/ns/ttml"))
        .with_attribute(("xmlns:ttp", "http://www.w3.org/ns/ttml#parameter"))
        .with_attribute(("ttp:timeBase", "media"))
        .with_attribute(("xmlns:tts", "http://www.w3.org/ns/ttml#style"))
        .with_attribute(("xml:lang", doc.default_lang()))
        .with_attribute(("xmlns:ttm", "http://www.w3.org/ns/ttml#metadata"))
        .write_inner_content(|writer| {
            head::write_head(writer, doc, options)?;
            body::write_body(writer, doc, range)?;
            Ok(())
        })?;

    Ok(())
}
