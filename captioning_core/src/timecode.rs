//! # 通用时间码语法
//!
//! 实现 `小时:分钟:秒,毫秒` 形式的通用字幕时间码的解析与格式化。
//! 毫秒分隔符同时接受 `,` 和 `.`，因为真实字幕文件中两者混用。

use crate::error::CaptioningError;

/// 解析 `HH:MM:SS,mmm` 形式的时间码，返回毫秒值。
///
/// 毫秒部分允许 1 到 3 位数字（`,5` 表示 500 毫秒）。
///
/// # Errors
///
/// 输入不符合该语法（部分数量不对、分钟或秒超出 60、毫秒位数过多等）时
/// 返回 [`CaptioningError::MalformedTimecode`]。
pub fn parse_generic_timecode(text: &str) -> Result<u64, CaptioningError> {
    let malformed = || CaptioningError::MalformedTimecode(text.to_string());

    let (clock_part, ms_part) = text.split_once([',', '.']).ok_or_else(malformed)?;

    if ms_part.is_empty() || ms_part.len() > 3 || !ms_part.chars().all(|c| c.is_ascii_digit()) {
        return Err(malformed());
    }
    let ms_scale = 10u64.pow(3 - u32::try_from(ms_part.len()).unwrap_or(3));
    let milliseconds = ms_part.parse::<u64>().map_err(|_| malformed())? * ms_scale;

    let mut parts = clock_part.split(':');
    let hours = parts
        .next()
        .filter(|p| !p.is_empty())
        .ok_or_else(malformed)?
        .parse::<u64>()
        .map_err(|_| malformed())?;
    let minutes = parts
        .next()
        .ok_or_else(malformed)?
        .parse::<u64>()
        .map_err(|_| malformed())?;
    let seconds = parts
        .next()
        .ok_or_else(malformed)?
        .parse::<u64>()
        .map_err(|_| malformed())?;

    if parts.next().is_some() || minutes >= 60 || seconds >= 60 {
        return Err(malformed());
    }

    Ok(hours * 3_600_000 + minutes * 60_000 + seconds * 1000 + milliseconds)
}

/// 将毫秒值格式化为 `HH:MM:SS,mmm` 形式的时间码。
#[must_use]
pub fn format_generic_timecode(ms: u64) -> String {
    let hours = ms / 3_600_000;
    let minutes = (ms % 3_600_000) / 60_000;
    let seconds = (ms % 60_000) / 1000;
    let millis = ms % 1000;
    format!("{hours:02}:{minutes:02}:{seconds:02},{millis:03}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_generic_timecode() {
        assert_eq!(parse_generic_timecode("00:00:01,500").unwrap(), 1500);
        assert_eq!(parse_generic_timecode("01:02:03,456").unwrap(), 3_723_456);
        assert_eq!(parse_generic_timecode("00:00:00,000").unwrap(), 0);
        assert_eq!(parse_generic_timecode("10:59:59,999").unwrap(), 39_599_999);
        assert_eq!(parse_generic_timecode("00:00:01.500").unwrap(), 1500);
        assert_eq!(parse_generic_timecode("00:00:01,5").unwrap(), 1500);
        assert_eq!(parse_generic_timecode("00:00:01,50").unwrap(), 1500);

        assert!(matches!(
            parse_generic_timecode("abc"),
            Err(CaptioningError::MalformedTimecode(_))
        ));
        assert!(matches!(
            parse_generic_timecode("00:01,500"),
            Err(CaptioningError::MalformedTimecode(_))
        ));
        assert!(matches!(
            parse_generic_timecode("00:00:00:01,500"),
            Err(CaptioningError::MalformedTimecode(_))
        ));
        assert!(matches!(
            parse_generic_timecode("00:60:00,000"),
            Err(CaptioningError::MalformedTimecode(_))
        ));
        assert!(matches!(
            parse_generic_timecode("00:00:60,000"),
            Err(CaptioningError::MalformedTimecode(_))
        ));
        assert!(matches!(
            parse_generic_timecode("00:00:01,1234"),
            Err(CaptioningError::MalformedTimecode(_))
        ));
        assert!(matches!(
            parse_generic_timecode("00:00:01"),
            Err(CaptioningError::MalformedTimecode(_))
        ));
        assert!(matches!(
            parse_generic_timecode(""),
            Err(CaptioningError::MalformedTimecode(_))
        ));
    }

    #[test]
    fn test_format_generic_timecode() {
        assert_eq!(format_generic_timecode(0), "00:00:00,000");
        assert_eq!(format_generic_timecode(1500), "00:00:01,500");
        assert_eq!(format_generic_timecode(3_723_456), "01:02:03,456");
    }

    #[test]
    fn test_roundtrip() {
        for ms in [0, 999, 1000, 59_999, 3_600_000, 86_399_999] {
            assert_eq!(parse_generic_timecode(&format_generic_timecode(ms)).unwrap(), ms);
        }
    }
}
