//! 병음 음절 정규화 (성조 기호/숫자 제거)

/// 성조 부호가 붙은 모음 -> 기본 모음
///
/// 경성은 부호가 없으므로 표에 없음
const TONE_VOWELS: [(char, char); 24] = [
    ('ā', 'a'), ('á', 'a'), ('ǎ', 'a'), ('à', 'a'),
    ('ē', 'e'), ('é', 'e'), ('ě', 'e'), ('è', 'e'),
    ('ī', 'i'), ('í', 'i'), ('ǐ', 'i'), ('ì', 'i'),
    ('ō', 'o'), ('ó', 'o'), ('ǒ', 'o'), ('ò', 'o'),
    ('ū', 'u'), ('ú', 'u'), ('ǔ', 'u'), ('ù', 'u'),
    ('ǖ', 'ü'), ('ǘ', 'ü'), ('ǚ', 'ü'), ('ǜ', 'ü'),
];

/// 결합형 분음 부호 (u + U+0308 = ü)
const COMBINING_DIAERESIS: char = '\u{0308}';

/// 결합형 성조 부호 (grave, acute, macron, caron)
fn is_combining_tone_mark(c: char) -> bool {
    matches!(c, '\u{0300}' | '\u{0301}' | '\u{0304}' | '\u{030C}')
}

/// 성조 모음이면 기본 모음 반환
pub fn strip_tone(c: char) -> Option<char> {
    TONE_VOWELS
        .iter()
        .find(|(marked, _)| *marked == c)
        .map(|(_, base)| *base)
}

/// 병음 음절 하나를 정규화
///
/// 소문자화, ASCII 숫자 제거, 성조 모음 -> 기본 모음.
/// 그 외 문자는 그대로 유지하며 실패하지 않음.
///
/// # Examples
/// ```
/// use koyin::pinyin::normalize_syllable;
/// assert_eq!(normalize_syllable("Mǎ"), "ma");
/// assert_eq!(normalize_syllable("lv4"), "lv");
/// assert_eq!(normalize_syllable("nǚ"), "nü");
/// ```
pub fn normalize_syllable(raw: &str) -> String {
    let mut result = String::with_capacity(raw.len());

    for c in raw.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_digit() || is_combining_tone_mark(c) {
            continue;
        }
        // 분해형 ü (u + U+0308)
        if c == COMBINING_DIAERESIS && result.ends_with('u') {
            result.pop();
            result.push('ü');
            continue;
        }
        result.push(strip_tone(c).unwrap_or(c));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_marks() {
        assert_eq!(normalize_syllable("fàng"), "fang");
        assert_eq!(normalize_syllable("xīn"), "xin");
        assert_eq!(normalize_syllable("hǎokàn"), "haokan");
        assert_eq!(normalize_syllable("lǜ"), "lü");
    }

    #[test]
    fn test_uppercase() {
        assert_eq!(normalize_syllable("Zhè"), "zhe");
        assert_eq!(normalize_syllable("ZHUANG"), "zhuang");
        assert_eq!(normalize_syllable("Ǎ"), "a");
        assert_eq!(normalize_syllable("Ü"), "ü");
    }

    #[test]
    fn test_tone_digits() {
        assert_eq!(normalize_syllable("ma3"), "ma");
        assert_eq!(normalize_syllable("xyz123"), "xyz");
        assert_eq!(normalize_syllable("123"), "");
    }

    #[test]
    fn test_combining_marks() {
        // 분해형 입력 (a + U+030C)
        assert_eq!(normalize_syllable("ha\u{030C}o"), "hao");
        assert_eq!(normalize_syllable("ma\u{0300}"), "ma");
        // 분해형 ǚ (u + U+0308 + U+030C), 부호 순서 무관
        assert_eq!(normalize_syllable("lu\u{0308}\u{030C}"), "lü");
        assert_eq!(normalize_syllable("lu\u{030C}\u{0308}"), "lü");
        assert_eq!(normalize_syllable("LU\u{0308}E"), "lüe");
        // u가 아닌 문자 뒤의 분음 부호는 유지
        assert_eq!(normalize_syllable("a\u{0308}"), "a\u{0308}");
    }

    #[test]
    fn test_other_characters_kept() {
        assert_eq!(normalize_syllable("hǎo."), "hao.");
        assert_eq!(normalize_syllable(""), "");
        assert_eq!(normalize_syllable("안녕"), "안녕");
    }

    #[test]
    fn test_idempotent() {
        for s in ["Zhè", "màozi", "lǘ3", "nu\u{0308}\u{0301}", "xyz123", "ha\u{0301}o", "ÀÉÌ", "nǚ!", ""] {
            let once = normalize_syllable(s);
            assert_eq!(normalize_syllable(&once), once, "입력 '{}'", s);
        }
    }

    #[test]
    fn test_strip_tone() {
        assert_eq!(strip_tone('ǒ'), Some('o'));
        assert_eq!(strip_tone('ǜ'), Some('ü'));
        assert_eq!(strip_tone('o'), None);
        assert_eq!(strip_tone('ü'), None);
    }
}
