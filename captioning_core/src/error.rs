use thiserror::Error;

/// 定义通用字幕契约层可能发生的错误。
#[derive(Error, Debug)]
pub enum CaptioningError {
    /// 无效的时间码字符串。
    #[error("无法解析时间码 '{0}'")]
    MalformedTimecode(String),
}
