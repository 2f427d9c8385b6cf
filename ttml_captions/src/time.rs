//! # TTML 时间码换算
//!
//! TTML 文档中的时间值有三种编码：钟面秒（`12.345s`）、通用
//! `HH:MM:SS,mmm` 时间码，以及 media 时间基准下的 tick 计数
//! （`1000t`，需要配合 `ttp:tickRate` 换算）。

use captioning_core::parse_generic_timecode;

use crate::error::TtmlError;

/// 解析文本时间码到毫秒。
///
/// 优先尝试钟面秒形式（`12.345s`，四舍五入到毫秒）；不匹配时
/// 委托给通用的 `HH:MM:SS,mmm` 语法。
///
/// # Errors
///
/// 两种语法都不匹配时返回 [`TtmlError::MalformedTimecode`]。
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn parse_timecode(text: &str) -> Result<u64, TtmlError> {
    if let Some(stripped) = text.strip_suffix('s')
        && !stripped.is_empty()
        && stripped.chars().all(|c| c.is_ascii_digit() || c == '.')
        && let Ok(seconds) = stripped.parse::<f64>()
    {
        return Ok((seconds * 1000.0).round() as u64);
    }

    parse_generic_timecode(text).map_err(|_| TtmlError::MalformedTimecode(text.to_string()))
}

/// 将毫秒值格式化为钟面秒形式，固定三位小数。
/// 例如：1000ms -> `"1.000s"`。
#[must_use]
pub fn format_timecode(ms: u64) -> String {
    #[allow(clippy::cast_precision_loss)]
    let seconds = ms as f64 / 1000.0;
    format!("{seconds:.3}s")
}

/// 将 tick 计数文本（可带 `t` 后缀）按 tickRate 换算为毫秒，向下取整。
///
/// 仅在 media 时间基准下有意义；tickRate 在文档上原样存储，
/// 到这里才做校验。
///
/// # Errors
///
/// * [`TtmlError::InvalidTimebaseConfiguration`] - tickRate 缺失、非正数或无法解析。
/// * [`TtmlError::MalformedTimecode`] - tick 计数不是非负整数。
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn ticks_to_ms(text: &str, tick_rate: Option<&str>) -> Result<u64, TtmlError> {
    let rate_text = tick_rate.ok_or_else(|| {
        TtmlError::InvalidTimebaseConfiguration("缺少 ttp:tickRate".to_string())
    })?;
    let rate: f64 = rate_text.trim().parse().map_err(|_| {
        TtmlError::InvalidTimebaseConfiguration(format!("ttp:tickRate '{rate_text}' 不是数字"))
    })?;
    if !rate.is_finite() || rate <= 0.0 {
        return Err(TtmlError::InvalidTimebaseConfiguration(format!(
            "ttp:tickRate '{rate_text}' 必须为正数"
        )));
    }

    let ticks_text = text.strip_suffix('t').unwrap_or(text);
    let ticks = ticks_text
        .parse::<u64>()
        .map_err(|_| TtmlError::MalformedTimecode(text.to_string()))?;

    Ok((ticks as f64 / rate * 1000.0).floor() as u64)
}
