//! 문자 단위 스크립트 분류

use serde::Serialize;

/// 문자 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CharClass {
    /// 히라가나, 가타카나, 한자
    Japanese,
    /// 한글 음절, 자모, 호환용 자모
    Korean,
    /// ASCII 영문
    #[serde(rename = "english")]
    Latin,
    /// ASCII 숫자
    Numeric,
    /// 그 외 (공백, 기호 등)
    Other,
}

impl CharClass {
    /// 적재 대상에서 쓰는 타입 태그
    pub fn as_str(&self) -> &'static str {
        match self {
            CharClass::Japanese => "japanese",
            CharClass::Korean => "korean",
            CharClass::Latin => "english",
            CharClass::Numeric => "numeric",
            CharClass::Other => "other",
        }
    }
}

impl std::fmt::Display for CharClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 일본어 문자인지 확인
pub fn is_japanese_char(c: char) -> bool {
    let cp = c as u32;
    (0x3040..=0x309F).contains(&cp) // 히라가나
        || (0x30A0..=0x30FF).contains(&cp) // 가타카나
        || (0x4E00..=0x9FFF).contains(&cp) // 한자
}

/// 한국어 문자인지 확인
pub fn is_korean_char(c: char) -> bool {
    let cp = c as u32;
    (0xAC00..=0xD7A3).contains(&cp) // 한글 음절
        || (0x1100..=0x11FF).contains(&cp) // 한글 자모
        || (0x3130..=0x318F).contains(&cp) // 호환용 자모
}

pub fn is_latin_char(c: char) -> bool {
    c.is_ascii_alphabetic()
}

pub fn is_numeric_char(c: char) -> bool {
    c.is_ascii_digit()
}

/// 문자 하나의 종류를 판정 (일본어 -> 한국어 -> 영문 -> 숫자 -> 기타 순)
pub fn classify(c: char) -> CharClass {
    if is_japanese_char(c) {
        CharClass::Japanese
    } else if is_korean_char(c) {
        CharClass::Korean
    } else if is_latin_char(c) {
        CharClass::Latin
    } else if is_numeric_char(c) {
        CharClass::Numeric
    } else {
        CharClass::Other
    }
}

/// 텍스트에 일본어 문자가 하나라도 있는지 확인
pub fn has_japanese(text: &str) -> bool {
    text.chars().any(is_japanese_char)
}
