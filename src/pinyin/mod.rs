//! 병음 -> 한글 발음 표기
//!
//! 중국어 병음(성조 부호 포함 가능)을 한국어 학습자를 위한
//! 한글 발음 힌트로 변환합니다.
//!
//! # 사용 예시
//!
//! ```
//! use koyin::pinyin::{PinyinTranscriber, SyllableTable};
//!
//! // 내장 테이블
//! let t = PinyinTranscriber::builtin();
//! assert_eq!(t.syllables_to_korean(&["fàng", "xīn"]), "팡 신");
//! assert_eq!(t.free_text_to_korean("Zhè dǐng màozi hěn hǎokàn."), "저 딩 마오 쯔 헌 하오 칸.");
//!
//! // 사용자 테이블
//! let table = SyllableTable::from_json(r#"{ "ma": "마" }"#).unwrap();
//! let t = PinyinTranscriber::new(table);
//! assert_eq!(t.syllable_to_korean("mǎ"), "마");
//! ```

mod normalize;
mod table;
mod transcriber;

pub use normalize::{normalize_syllable, strip_tone};
pub use table::{SyllableTable, TableError, MAX_SYLLABLE_LEN};
pub use transcriber::PinyinTranscriber;
