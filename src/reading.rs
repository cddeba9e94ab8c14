//! 일본어 읽기(로마자) 제공자
//!
//! 엔진은 읽기 사전을 직접 갖지 않는다. 일본어 구간을 로마자로 바꿔주는
//! 제공자를 주입받고, 제공자가 실패하면 원문을 그대로 쓴다.

use wana_kana::ConvertJapanese;

use crate::core::romaji::to_korean_phonetic;
use crate::core::script::{has_japanese, CharClass};
use crate::core::segment::segment;

/// 일본어 구간 -> 소문자 헵번식 로마자
pub trait ReadingProvider {
    /// 읽기를 모르면 `None`
    fn read(&self, run: &str) -> Option<String>;
}

impl<F> ReadingProvider for F
where
    F: Fn(&str) -> Option<String>,
{
    fn read(&self, run: &str) -> Option<String> {
        self(run)
    }
}

/// 가나 전용 읽기 제공자
///
/// 가타카나는 히라가나로 바꾼 뒤(장음 부호 포함) 로마자로 변환한다.
/// 한자가 섞인 구간은 읽을 수 없으므로 `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct KanaReader;

impl ReadingProvider for KanaReader {
    fn read(&self, run: &str) -> Option<String> {
        if run.chars().any(wana_kana::utils::is_char_kanji) {
            log::debug!("한자 포함 구간은 읽기 불가: '{}'", run);
            return None;
        }

        let hiragana = run.to_hiragana();
        let romaji: String = hiragana
            .as_str()
            .to_romaji()
            .to_lowercase()
            .chars()
            .filter(|&c| c != '\'')
            .collect();

        if romaji.is_empty() {
            None
        } else {
            Some(romaji)
        }
    }
}

/// 항상 실패하는 제공자 (일본어를 원문 그대로 둠)
#[derive(Debug, Clone, Copy, Default)]
pub struct NoReading;

impl ReadingProvider for NoReading {
    fn read(&self, _run: &str) -> Option<String> {
        None
    }
}

/// 제공자 결과를 정리: 빈 결과는 실패로 간주, 대문자는 소문자로
pub(crate) fn read_lowercase<R: ReadingProvider + ?Sized>(provider: &R, run: &str) -> Option<String> {
    match provider.read(run) {
        Some(reading) if !reading.trim().is_empty() => Some(reading.to_lowercase()),
        _ => {
            log::debug!("읽기 실패, 원문 유지: '{}'", run);
            None
        }
    }
}

/// 일본어 구간만 로마자로 바꾸고 나머지는 그대로 둔 문자열
/// 일본어가 없으면 `None`. 읽기 실패 구간은 원문 유지.
pub fn romanize<R: ReadingProvider + ?Sized>(provider: &R, text: &str) -> Option<String> {
    if !has_japanese(text) {
        return None;
    }

    let romanized = segment(text)
        .into_iter()
        .map(|seg| match seg.class {
            CharClass::Japanese => read_lowercase(provider, &seg.text).unwrap_or(seg.text),
            _ => seg.text,
        })
        .collect();
    Some(romanized)
}

/// 일본어 발음 변환 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JapanesePronunciation {
    pub original: String,
    pub romaji: String,
    pub korean: String,
}

/// 텍스트의 로마자 읽기와 한국어 발음을 함께 계산
/// 일본어가 없으면 `None`
pub fn japanese_pronunciation<R: ReadingProvider + ?Sized>(
    provider: &R,
    text: &str,
) -> Option<JapanesePronunciation> {
    let romaji = romanize(provider, text)?;
    let korean = to_korean_phonetic(&romaji);
    Some(JapanesePronunciation {
        original: text.to_string(),
        romaji,
        korean,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stub(run: &str) -> Option<String> {
        match run {
            "こんにちは" => Some("konnichiha".to_string()),
            "東京" => Some("TOUKYOU".to_string()),
            "空" => Some("   ".to_string()),
            _ => None,
        }
    }

    #[test]
    fn test_kana_reader() {
        assert_eq!(KanaReader.read("さくら"), Some("sakura".to_string()));
        assert_eq!(KanaReader.read("サクラ"), Some("sakura".to_string()));
    }

    #[test]
    fn test_kana_reader_long_vowel_mark() {
        assert_eq!(KanaReader.read("ラーメン"), Some("raamen".to_string()));
        assert_eq!(to_korean_phonetic("raamen"), "라멘");
    }

    #[test]
    fn test_kana_reader_rejects_kanji() {
        assert_eq!(KanaReader.read("東京"), None);
        assert_eq!(KanaReader.read("君の名は"), None);
    }

    #[test]
    fn test_no_reading() {
        assert_eq!(NoReading.read("さくら"), None);
    }

    #[test]
    fn test_closure_provider() {
        assert_eq!(stub.read("こんにちは"), Some("konnichiha".to_string()));
        assert_eq!(read_lowercase(&stub, "東京"), Some("toukyou".to_string()));
        // 공백뿐인 결과는 실패 취급
        assert_eq!(read_lowercase(&stub, "空"), None);
    }

    #[test]
    fn test_romanize_mixed() {
        assert_eq!(
            romanize(&stub, "東京TOKYO"),
            Some("toukyouTOKYO".to_string())
        );
        // 읽기 실패 구간은 원문
        assert_eq!(
            romanize(&stub, "こんにちは、世界"),
            Some("konnichiha、世界".to_string())
        );
        assert_eq!(romanize(&stub, "Hello 안녕"), None);
    }

    #[test]
    fn test_japanese_pronunciation() {
        let result = japanese_pronunciation(&stub, "こんにちは").unwrap();
        assert_eq!(result.original, "こんにちは");
        assert_eq!(result.romaji, "konnichiha");
        assert_eq!(result.korean, "콘니치하");

        assert!(japanese_pronunciation(&stub, "BTS").is_none());
    }
}
