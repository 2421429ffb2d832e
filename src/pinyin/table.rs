//! 병음 음절 -> 한글 발음 조회 테이블
//!
//! JSON 형식의 테이블 파일을 로드합니다. 한 번 로드한 뒤에는 읽기 전용입니다.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::sync::Arc;

use lazy_static::lazy_static;

use super::normalize::normalize_syllable;

/// 병음 음절의 최대 길이 ("zhuang")
pub const MAX_SYLLABLE_LEN: usize = 6;

/// 기본 내장 테이블 (표준 병음 음절 + v 표기 별칭)
const BUILTIN_TABLE_JSON: &str = include_str!("../../data/pinyin_korean.json");

lazy_static! {
    static ref BUILTIN_TABLE: Arc<SyllableTable> = Arc::new(
        SyllableTable::from_json(BUILTIN_TABLE_JSON).unwrap_or_else(|e| {
            log::error!("내장 음절 테이블 파싱 실패: {}", e);
            SyllableTable::empty()
        })
    );
}

/// 테이블 로드/파싱 에러
#[derive(Debug)]
pub enum TableError {
    /// 파일 읽기 실패
    Io(std::io::Error),
    /// JSON 파싱 실패
    Parse(String),
    /// 테이블 형식 오류
    Format(String),
}

impl std::fmt::Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableError::Io(e) => write!(f, "파일 읽기 오류: {}", e),
            TableError::Parse(s) => write!(f, "JSON 파싱 오류: {}", s),
            TableError::Format(s) => write!(f, "테이블 형식 오류: {}", s),
        }
    }
}

impl std::error::Error for TableError {}

impl From<std::io::Error> for TableError {
    fn from(e: std::io::Error) -> Self {
        TableError::Io(e)
    }
}

/// 정규화된 병음 음절 -> 한글 발음
#[derive(Debug, Clone, Default)]
pub struct SyllableTable {
    entries: HashMap<String, String>,
    /// 가장 긴 키의 문자 수
    max_key_len: usize,
}

impl SyllableTable {
    /// JSON 파일에서 테이블 로드
    ///
    /// # 파일 형식
    /// ```json
    /// { "ma": "마", "zhuang": "좡" }
    /// ```
    pub fn load(path: &str) -> Result<Self, TableError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let value: serde_json::Value =
            serde_json::from_reader(reader).map_err(|e| TableError::Parse(e.to_string()))?;

        let table = Self::from_json_value(&value)?;
        log::debug!("음절 테이블 로드: {} ({}개)", path, table.len());
        Ok(table)
    }

    /// JSON 문자열에서 테이블 로드
    pub fn from_json(json_str: &str) -> Result<Self, TableError> {
        let value: serde_json::Value =
            serde_json::from_str(json_str).map_err(|e| TableError::Parse(e.to_string()))?;

        Self::from_json_value(&value)
    }

    fn from_json_value(value: &serde_json::Value) -> Result<Self, TableError> {
        let obj = value
            .as_object()
            .ok_or_else(|| TableError::Format("최상위 값이 객체가 아닙니다".into()))?;

        let mut pairs = Vec::with_capacity(obj.len());
        for (key, val) in obj {
            let korean = val.as_str().ok_or_else(|| {
                TableError::Format(format!("유효하지 않은 발음 값: {}", key))
            })?;
            if normalize_syllable(key).is_empty() {
                return Err(TableError::Format(format!("빈 음절 키: {:?}", key)));
            }
            pairs.push((key.as_str(), korean));
        }

        Ok(Self::from_pairs(pairs))
    }

    /// (음절, 발음) 쌍에서 생성. 키는 정규화되고, 정규화 후 빈 키는 무시됨
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut entries = HashMap::new();
        let mut max_key_len = 0;

        for (key, korean) in pairs {
            let key = normalize_syllable(key.as_ref());
            if key.is_empty() {
                continue;
            }
            max_key_len = max_key_len.max(key.chars().count());
            entries.insert(key, korean.into());
        }

        Self {
            entries,
            max_key_len,
        }
    }

    /// 빈 테이블
    pub fn empty() -> Self {
        Self::default()
    }

    /// 내장 테이블 (프로세스당 한 번만 파싱)
    pub fn builtin() -> Arc<SyllableTable> {
        Arc::clone(&BUILTIN_TABLE)
    }

    /// 정규화된 음절의 발음 조회
    pub fn get(&self, normalized: &str) -> Option<&str> {
        self.entries.get(normalized).map(String::as_str)
    }

    pub fn contains(&self, normalized: &str) -> bool {
        self.entries.contains_key(normalized)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_key_len(&self) -> usize {
        self.max_key_len
    }
}
