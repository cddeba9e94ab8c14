//! 변환 결과 레코드

use serde::Serialize;

use crate::core::script::CharClass;

/// 세그먼트별 부가 정보
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SegmentExtras {
    /// 일본어 세그먼트의 로마자 읽기
    #[serde(skip_serializing_if = "Option::is_none")]
    pub romaji: Option<String>,
    /// 한국어 세그먼트의 초성
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chosung: Option<String>,
}

impl SegmentExtras {
    pub fn is_empty(&self) -> bool {
        self.romaji.is_none() && self.chosung.is_none()
    }
}

/// 세그먼트 하나의 변환 결과
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SegmentInfo {
    pub text: String,
    #[serde(rename = "type")]
    pub class: CharClass,
    pub start: usize,
    pub end: usize,
    /// 발음 표기
    pub converted: String,
    /// 검색 키 (초성)
    #[serde(skip)]
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extras: Option<SegmentExtras>,
}

/// 필드 하나의 변환 결과
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversionResult {
    pub original: String,
    /// 발음 (일본어 -> 한국어 발음, 영문 -> 소문자)
    pub pronunciation: String,
    /// 초성 검색 키
    pub search_key: String,
    /// 한국어만 초성으로 줄이고 나머지는 발음 표기
    pub simplified: String,
    pub segments: Vec<SegmentInfo>,
    pub contains_japanese: bool,
    pub contains_korean: bool,
    #[serde(rename = "contains_english")]
    pub contains_latin: bool,
}

impl ConversionResult {
    /// 빈 입력에 대한 결과
    pub fn empty() -> Self {
        Self::default()
    }

    /// 원문만 남기고 발음/검색 키는 비운 결과 (정보 없음 표시 등)
    pub fn blank(original: &str) -> Self {
        Self {
            original: original.to_string(),
            ..Self::default()
        }
    }
}

/// 제목/가수 한 쌍의 적재용 레코드
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SongRecord {
    pub title: String,
    pub title_pron: String,
    pub title_chosung: String,
    pub singer: String,
    pub singer_pron: String,
    pub singer_chosung: String,
}

impl SongRecord {
    pub fn from_results(title: ConversionResult, singer: ConversionResult) -> Self {
        Self {
            title: title.original,
            title_pron: title.pronunciation,
            title_chosung: title.search_key,
            singer: singer.original,
            singer_pron: singer.pronunciation,
            singer_chosung: singer.search_key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result_json() {
        let json = serde_json::to_value(ConversionResult::empty()).unwrap();
        assert_eq!(json["pronunciation"], "");
        assert_eq!(json["search_key"], "");
        assert_eq!(json["segments"], serde_json::json!([]));
        assert_eq!(json["contains_english"], false);
    }

    #[test]
    fn test_segment_json_shape() {
        let info = SegmentInfo {
            text: "방탄".to_string(),
            class: CharClass::Korean,
            start: 0,
            end: 1,
            converted: "방탄".to_string(),
            key: "ㅂㅌ".to_string(),
            extras: Some(SegmentExtras {
                romaji: None,
                chosung: Some("ㅂㅌ".to_string()),
            }),
        };
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["type"], "korean");
        assert_eq!(json["extras"]["chosung"], "ㅂㅌ");
        assert!(json["extras"].get("romaji").is_none());
        assert!(json.get("key").is_none());
    }

    #[test]
    fn test_song_record_from_results() {
        let title = ConversionResult {
            original: "BTS".to_string(),
            pronunciation: "bts".to_string(),
            search_key: "bts".to_string(),
            ..ConversionResult::default()
        };
        let record = SongRecord::from_results(title, ConversionResult::blank("정보 없음"));
        assert_eq!(record.title, "BTS");
        assert_eq!(record.title_chosung, "bts");
        assert_eq!(record.singer, "정보 없음");
        assert_eq!(record.singer_pron, "");
    }
}
