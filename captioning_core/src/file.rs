//! # 有序 Cue 集合契约
//!
//! 字幕文件本质上是一个有序的 Cue 集合。该契约只约定读取侧与排序：
//! 插入是各格式自己的事情（例如 TTML 在插入时校验样式/区域引用），
//! 因此留给具体类型的固有方法。

use serde::{Deserialize, Serialize};

use crate::cue::{Cue, TimedCue};

/// 有序 Cue 集合的契约。实现了该契约的文档可以被其它格式的
/// 转换器消费（例如合并进一个多语言 TTML 文档）。
pub trait CaptionFile {
    /// 该文件使用的具体 Cue 类型。
    type Cue: TimedCue;

    /// 按插入顺序返回全部 Cue。
    fn cues(&self) -> &[Self::Cue];

    /// 按索引取单个 Cue。
    fn cue(&self, index: usize) -> Option<&Self::Cue> {
        self.cues().get(index)
    }

    /// Cue 总数。
    fn cue_count(&self) -> usize {
        self.cues().len()
    }

    /// 按开始时间对 Cue 做稳定排序。
    fn sort_cues_by_start(&mut self);
}

/// 最小的具体字幕文件：一个通用 Cue 的有序集合。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlainCaptionFile {
    cues: Vec<Cue>,
}

impl PlainCaptionFile {
    /// 创建空集合。
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// 在末尾追加一个 Cue。
    pub fn add_cue(&mut self, cue: Cue) {
        self.cues.push(cue);
    }
}

impl CaptionFile for PlainCaptionFile {
    type Cue = Cue;

    fn cues(&self) -> &[Cue] {
        &self.cues
    }

    fn sort_cues_by_start(&mut self) {
        self.cues.sort_by_key(|cue| cue.start_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_is_kept() {
        let mut file = PlainCaptionFile::new();
        file.add_cue(Cue::from_ms(2000, 3000, "second"));
        file.add_cue(Cue::from_ms(0, 1000, "first"));

        assert_eq!(file.cue_count(), 2);
        assert_eq!(file.cue(0).unwrap().text, "second");
    }

    #[test]
    fn test_sort_by_start_is_stable() {
        let mut file = PlainCaptionFile::new();
        file.add_cue(Cue::from_ms(2000, 3000, "b"));
        file.add_cue(Cue::from_ms(0, 1000, "a"));
        file.add_cue(Cue::from_ms(2000, 4000, "c"));

        file.sort_cues_by_start();

        let texts: Vec<&str> = file.cues().iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, ["a", "b", "c"]);
    }
}
