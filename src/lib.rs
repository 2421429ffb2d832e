pub mod config;
pub mod pinyin;
pub mod routine;

pub use pinyin::{PinyinTranscriber, SyllableTable};
pub use routine::{build_routine, select_excluding_recent, RoutineCounts, RoutinePlan};
