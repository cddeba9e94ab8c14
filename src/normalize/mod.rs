//! 다국어 제목/가수 정규화
//!
//! 텍스트를 문자 종류별 세그먼트로 나눈 뒤 종류마다 변환한다.
//!
//! | 종류 | 발음 | 검색 키 |
//! |------|------|---------|
//! | 일본어 | 읽기 -> 한국어 발음 | 한국어 발음의 초성 |
//! | 한국어 | 그대로 | 초성 |
//! | 영문 | 소문자 | 소문자 |
//! | 숫자/기타 | 그대로 | 그대로 |
//!
//! 세그먼트 순서는 절대 바뀌지 않으며 결과는 세그먼트별 결과를 이어 붙인 것이다.
//!
//! ```
//! use karaoke_pron::Normalizer;
//!
//! let normalizer = Normalizer::new();
//! let result = normalizer.convert("BTS 방탄소년단");
//! assert_eq!(result.pronunciation, "bts 방탄소년단");
//! assert_eq!(result.search_key, "bts ㅂㅌㅅㄴㄷ");
//! ```

mod result;

pub use result::{ConversionResult, SegmentExtras, SegmentInfo, SongRecord};

use crate::config::NormalizerConfig;
use crate::core::chosung::{korean_chosung, lead_consonant};
use crate::core::romaji::to_korean_phonetic;
use crate::core::script::CharClass;
use crate::core::segment::{segment, Segment};
use crate::reading::{read_lowercase, KanaReader, ReadingProvider};

/// 정규화기
///
/// 읽기 제공자와 설정 외에는 상태가 없으므로 여러 스레드에서 공유해도 된다.
#[derive(Debug, Clone)]
pub struct Normalizer<R = KanaReader> {
    reader: R,
    config: NormalizerConfig,
}

impl Normalizer<KanaReader> {
    /// 내장 가나 읽기 제공자를 쓰는 정규화기
    pub fn new() -> Self {
        Self::with_reader(KanaReader)
    }
}

impl Default for Normalizer<KanaReader> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: ReadingProvider> Normalizer<R> {
    pub fn with_reader(reader: R) -> Self {
        Self {
            reader,
            config: NormalizerConfig::default(),
        }
    }

    pub fn with_config(mut self, config: NormalizerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// 텍스트 하나를 발음/검색 키로 변환
    pub fn convert(&self, text: &str) -> ConversionResult {
        if text.is_empty() {
            return ConversionResult::empty();
        }

        let segments: Vec<SegmentInfo> = segment(text)
            .into_iter()
            .map(|seg| self.convert_segment(seg))
            .collect();

        let mut result = ConversionResult {
            original: text.to_string(),
            ..ConversionResult::default()
        };

        for info in &segments {
            result.pronunciation.push_str(&info.converted);
            result.search_key.push_str(&info.key);
            match info.class {
                CharClass::Korean => {
                    result.simplified.push_str(&korean_chosung(&info.text));
                    result.contains_korean = true;
                }
                CharClass::Japanese => {
                    result.simplified.push_str(&info.converted);
                    result.contains_japanese = true;
                }
                CharClass::Latin => {
                    result.simplified.push_str(&info.converted);
                    result.contains_latin = true;
                }
                CharClass::Numeric | CharClass::Other => {
                    result.simplified.push_str(&info.converted);
                }
            }
        }

        result.segments = segments;
        result
    }

    /// 필드 값 변환
    ///
    /// `None`은 빈 입력, 없음 표시 문자열은 원문만 남기고 발음/검색 키를 비운다.
    pub fn convert_field(&self, value: Option<&str>) -> ConversionResult {
        match value {
            None => ConversionResult::empty(),
            Some(text) if self.config.is_missing(text) => {
                log::debug!("없음 표시 값, 변환 생략: '{}'", text);
                ConversionResult::blank(text)
            }
            Some(text) => self.convert(text),
        }
    }

    /// 발음 문자열만 필요할 때
    pub fn convert_mixed_text(&self, text: &str) -> String {
        self.convert(text).pronunciation
    }

    /// 제목/가수 쌍을 적재용 레코드로 변환
    pub fn song_record(&self, title: Option<&str>, singer: Option<&str>) -> SongRecord {
        SongRecord::from_results(self.convert_field(title), self.convert_field(singer))
    }

    fn convert_segment(&self, seg: Segment) -> SegmentInfo {
        let mut extras = SegmentExtras::default();

        let (converted, key) = match seg.class {
            CharClass::Japanese => match read_lowercase(&self.reader, &seg.text) {
                Some(romaji) => {
                    let korean = to_korean_phonetic(&romaji);
                    let key = lead_consonant(&korean);
                    extras.romaji = Some(romaji);
                    (korean, key)
                }
                None => (seg.text.clone(), lead_consonant(&seg.text)),
            },
            CharClass::Korean => {
                let chosung = lead_consonant(&seg.text);
                extras.chosung = Some(chosung.clone());
                (seg.text.clone(), chosung)
            }
            CharClass::Latin => {
                let lowered = seg.text.to_ascii_lowercase();
                (lowered.clone(), lowered)
            }
            CharClass::Numeric | CharClass::Other => (seg.text.clone(), seg.text.clone()),
        };

        SegmentInfo {
            text: seg.text,
            class: seg.class,
            start: seg.start,
            end: seg.end,
            converted,
            key,
            extras: if extras.is_empty() { None } else { Some(extras) },
        }
    }
}
