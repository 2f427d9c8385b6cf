//! # TTML 生成器 - Head 部分
//!
//! 写出 `<head>`：标题与版权的元数据块，以及一个空的样式块。

use quick_xml::{Writer, events::BytesText};

use crate::document::TtmlDocument;
use crate::error::TtmlError;

use super::BuildOptions;

pub(super) fn write_head<W: std::io::Write>(
    writer: &mut Writer<W>,
    doc: &TtmlDocument,
    options: &BuildOptions,
) -> Result<(), TtmlError> {
    let copyright = if doc.copyright().is_empty() {
        format!("Copyright {}", options.copyright_year)
    } else {
        doc.copyright().to_string()
    };

    writer
        .create_element("head")
        .write_inner_content(|writer| {
            writer
                .create_element("metadata")
                .write_inner_content(|writer| {
                    writer
                        .create_element("ttm:title")
                        .write_text_content(BytesText::new(doc.title()))?;
                    writer
                        .create_element("ttm:copyright")
                        .write_text_content(BytesText::new(&copyright))?;
                    Ok(())
                })?;
            writer.create_element("styling").write_empty()?;
            Ok(())
        })?;
    Ok(())
}
