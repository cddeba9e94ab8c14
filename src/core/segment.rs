//! 같은 종류의 연속 문자를 하나의 세그먼트로 묶는 분리기

use serde::Serialize;

use crate::core::script::{classify, CharClass};

/// 원문 안에서 같은 종류 문자가 이어진 최대 구간
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub text: String,
    #[serde(rename = "type")]
    pub class: CharClass,
    /// 시작 위치 (문자 단위, 포함)
    pub start: usize,
    /// 끝 위치 (문자 단위, 포함)
    pub end: usize,
}

impl Segment {
    /// 문자 수 (항상 1 이상)
    pub fn char_len(&self) -> usize {
        self.end - self.start + 1
    }
}

/// 텍스트를 문자 종류별 세그먼트로 분리
///
/// 세그먼트를 순서대로 이어 붙이면 원문이 그대로 복원된다.
/// 빈 문자열이면 빈 목록.
pub fn segment(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut current: Option<Segment> = None;

    for (idx, c) in text.chars().enumerate() {
        let class = classify(c);
        match current.as_mut() {
            Some(seg) if seg.class == class => {
                seg.text.push(c);
                seg.end = idx;
            }
            _ => {
                if let Some(done) = current.take() {
                    segments.push(done);
                }
                current = Some(Segment {
                    text: c.to_string(),
                    class,
                    start: idx,
                    end: idx,
                });
            }
        }
    }

    if let Some(done) = current {
        segments.push(done);
    }

    segments
}

/// 위치 정보 없이 (텍스트, 종류) 쌍만 돌려주는 간단 버전
pub fn separate(text: &str) -> Vec<(String, CharClass)> {
    segment(text)
        .into_iter()
        .map(|seg| (seg.text, seg.class))
        .collect()
}
