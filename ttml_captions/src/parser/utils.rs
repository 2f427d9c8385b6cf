//! # TTML 解析器的工具函数
//!
//! 属性提取辅助：取单个属性值，以及把一个元素上的呈现属性
//! （`tts:*` 加 `xml:id`）收集成扁平映射。

use quick_xml::{Reader, events::BytesStart};

use crate::document::AttributeMap;
use crate::error::TtmlError;

use super::constants::{ATTR_XML_ID, STYLE_NS_PREFIX};

/// 获取字符串类型的属性值。属性不存在时返回 `None`。
pub(super) fn get_string_attribute(
    e: &BytesStart,
    reader: &Reader<&[u8]>,
    attr_name: &[u8],
) -> Result<Option<String>, TtmlError> {
    e.try_get_attribute(attr_name)?
        .map(|attr| {
            let decoded = attr.decode_and_unescape_value(reader.decoder())?;
            Ok(decoded.into_owned())
        })
        .transpose()
}

/// 收集一个元素上的呈现属性集：所有 `tts:` 前缀的属性按局部名
/// 存入映射，另从 `xml:id` 提取标识符存为 `"id"` 键。
pub(super) fn collect_presentation_attributes(
    e: &BytesStart,
    reader: &Reader<&[u8]>,
) -> Result<AttributeMap, TtmlError> {
    let mut attributes = AttributeMap::new();

    for attr in e.attributes() {
        let attr = attr?;
        if let Some(local) = attr.key.as_ref().strip_prefix(STYLE_NS_PREFIX) {
            let name = reader.decoder().decode(local)?.into_owned();
            let value = attr.decode_and_unescape_value(reader.decoder())?.into_owned();
            attributes.insert(name, value);
        }
    }

    if let Some(id) = get_string_attribute(e, reader, ATTR_XML_ID)? {
        attributes.insert("id".to_string(), id);
    }

    Ok(attributes)
}
