//! 초성(첫 자음) 검색 키 추출

use crate::core::unicode::{choseong_to_jamo_char, decompose_syllable};

/// 검색 키용 초성 변환
///
/// - 완성형 한글 음절 -> 초성 자모
/// - 영문 -> 소문자
/// - 그 외 -> 그대로
pub fn lead_consonant(text: &str) -> String {
    text.chars()
        .map(|c| match syllable_choseong(c) {
            Some(jamo) => jamo,
            None => c.to_ascii_lowercase(),
        })
        .collect()
}

/// 한글 음절만 초성으로 바꾸고 나머지(영문 포함)는 그대로 둠
pub fn korean_chosung(text: &str) -> String {
    text.chars()
        .map(|c| syllable_choseong(c).unwrap_or(c))
        .collect()
}

fn syllable_choseong(c: char) -> Option<char> {
    let (cho, _, _) = decompose_syllable(c)?;
    choseong_to_jamo_char(cho)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hangul_to_chosung() {
        assert_eq!(lead_consonant("겐키"), "ㄱㅋ");
        assert_eq!(lead_consonant("안녕하세요"), "ㅇㄴㅎㅅㅇ");
        assert_eq!(lead_consonant("까치"), "ㄲㅊ");
    }

    #[test]
    fn test_latin_lowercased() {
        assert_eq!(lead_consonant("BTS"), "bts");
        assert_eq!(lead_consonant("BTS 방탄"), "bts ㅂㅌ");
    }

    #[test]
    fn test_other_passthrough() {
        assert_eq!(lead_consonant("123!ㄱ"), "123!ㄱ");
        assert_eq!(lead_consonant("東京"), "東京");
        assert_eq!(lead_consonant(""), "");
    }

    #[test]
    fn test_length_preserved_for_syllables() {
        let text = "세상에하나뿐인꽃";
        assert_eq!(
            lead_consonant(text).chars().count(),
            text.chars().count()
        );
    }

    #[test]
    fn test_korean_chosung_keeps_latin() {
        assert_eq!(korean_chosung("방탄BTS"), "ㅂㅌBTS");
    }
}
