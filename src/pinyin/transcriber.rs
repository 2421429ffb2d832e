//! 병음 -> 한글 발음 변환기
//!
//! 두 가지 입력을 처리합니다:
//! 1. 이미 음절 단위로 나뉜 목록 (단어의 발음 표기)
//! 2. 공백/문장부호가 섞인 자유 텍스트 (문장 전체의 병음)
//!
//! 자유 텍스트는 "màozi"처럼 음절이 붙어 쓰이므로
//! 테이블 키를 기준으로 최장 일치 분절을 수행합니다.

use std::sync::Arc;

use super::normalize::normalize_syllable;
use super::table::{SyllableTable, MAX_SYLLABLE_LEN};

/// 병음 -> 한글 발음 변환기
///
/// 읽기 전용 테이블을 공유하므로 여러 스레드에서 복제해 사용해도 됨
#[derive(Debug, Clone)]
pub struct PinyinTranscriber {
    table: Arc<SyllableTable>,
}

impl Default for PinyinTranscriber {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PinyinTranscriber {
    /// 테이블을 소유하는 변환기 생성
    pub fn new(table: SyllableTable) -> Self {
        Self {
            table: Arc::new(table),
        }
    }

    /// 공유 테이블로 변환기 생성
    pub fn with_table(table: Arc<SyllableTable>) -> Self {
        Self { table }
    }

    /// 내장 테이블 사용
    pub fn builtin() -> Self {
        Self::with_table(SyllableTable::builtin())
    }

    /// 음절 하나를 한글 발음으로 변환
    ///
    /// 테이블에 없으면 입력을 정규화하지 않은 원본 그대로 반환
    pub fn syllable_to_korean(&self, syllable: &str) -> String {
        match self.table.get(&normalize_syllable(syllable)) {
            Some(korean) => korean.to_string(),
            None => syllable.to_string(),
        }
    }

    /// 음절 목록을 변환 후 공백 하나로 연결
    ///
    /// # Examples
    /// ```
    /// use koyin::pinyin::PinyinTranscriber;
    /// let t = PinyinTranscriber::builtin();
    /// assert_eq!(t.syllables_to_korean(&["fàng", "xīn"]), "팡 신");
    /// ```
    pub fn syllables_to_korean<S: AsRef<str>>(&self, syllables: &[S]) -> String {
        syllables
            .iter()
            .map(|s| self.syllable_to_korean(s.as_ref()))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// 자유 텍스트 병음을 한글 발음으로 변환
    ///
    /// 1. 공백 기준으로 토큰 분리
    /// 2. 토큰 = 앞쪽 글자 구간 + 뒤쪽 꼬리(문장부호)
    /// 3. 글자 구간을 정규화 후 최장 일치로 음절 분절
    /// 4. 음절별 변환 결과를 공백으로 연결하고 꼬리를 다시 붙임
    ///
    /// 글자 구간이 없는 토큰은 그대로 유지
    ///
    /// # Examples
    /// ```
    /// use koyin::pinyin::PinyinTranscriber;
    /// let t = PinyinTranscriber::builtin();
    /// assert_eq!(t.free_text_to_korean("hǎokàn."), "하오 칸.");
    /// ```
    pub fn free_text_to_korean(&self, text: &str) -> String {
        text.split_whitespace()
            .map(|token| self.token_to_korean(token))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn token_to_korean(&self, token: &str) -> String {
        let (letters, tail) = split_letters_run(token);
        if letters.is_empty() {
            return token.to_string();
        }

        let normalized = normalize_syllable(letters);
        let mut converted = self
            .segment(&normalized)
            .iter()
            .map(|unit| self.syllable_to_korean(unit))
            .collect::<Vec<_>>()
            .join(" ");
        converted.push_str(tail);
        converted
    }

    /// 정규화된 문자열을 최장 일치로 음절 분절
    ///
    /// 각 위치에서 가장 긴 테이블 키를 소비하고, 일치가 없으면 한 글자를 소비.
    /// 매 단계 최소 한 글자를 소비하므로 입력 길이에 비례해 종료됨.
    pub fn segment(&self, normalized: &str) -> Vec<String> {
        let chars: Vec<char> = normalized.chars().collect();
        let max_len = MAX_SYLLABLE_LEN.min(self.table.max_key_len()).max(1);

        let mut units = Vec::new();
        let mut pos = 0;

        while pos < chars.len() {
            let longest = max_len.min(chars.len() - pos);
            let matched = (1..=longest).rev().find_map(|len| {
                let candidate: String = chars[pos..pos + len].iter().collect();
                self.table.contains(&candidate).then_some((candidate, len))
            });

            match matched {
                Some((syllable, len)) => {
                    units.push(syllable);
                    pos += len;
                }
                None => {
                    units.push(chars[pos].to_string());
                    pos += 1;
                }
            }
        }

        units
    }
}

/// 병음 글자 구간에 포함되는 문자 (문자, 숫자, 결합 부호)
fn is_letter_like(c: char) -> bool {
    c.is_alphabetic() || c.is_ascii_digit() || ('\u{0300}'..='\u{036F}').contains(&c)
}

/// 토큰을 (앞쪽 글자 구간, 나머지 꼬리)로 분리
fn split_letters_run(token: &str) -> (&str, &str) {
    let end = token
        .char_indices()
        .find(|(_, c)| !is_letter_like(*c))
        .map(|(i, _)| i)
        .unwrap_or(token.len());
    token.split_at(end)
}
