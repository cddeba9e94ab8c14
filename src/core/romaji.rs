//! 로마자(헵번식) -> 한국어 발음 변환기
//!
//! 일본어 읽기를 한글 발음 표기로 근사한다. 언어학적 표준 표기가 아니라
//! 노래방 검색용 휴리스틱이며, 매핑 테이블과 규칙 순서 자체가 동작 정의다.
//!
//! 처리 순서:
//! 1. 장음 축약 (`ou` -> `o`, `ei` -> `e`, ...)
//! 2. 촉음(`kk`, `ss`, `tt`, `pp`, `mm`)은 그대로 두어 촉음 매핑이 받게 함
//! 3. 받침 `n` 표시 (자음 앞이나 끝의 `n` -> `N`)
//! 4. 우선순위 패턴 치환 (확정 토큰으로 고정)
//! 5. 나머지 구간 3/2/1글자 최장 일치
//! 6. 남은 영문자 제거
//! 7. 받침 자모를 앞 음절에 합성

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::core::composer::fuse_codas;

/// 받침 ㄴ으로 처리할 `n` 표시
const NASAL_CODA: char = 'N';

/// 장음 축약 패턴 (적용 순서대로)
const LONG_VOWELS: [(&str, &str); 7] = [
    ("ou", "o"),
    ("ei", "e"),
    ("aa", "a"),
    ("ii", "i"),
    ("uu", "u"),
    ("ee", "e"),
    ("oo", "o"),
];

/// 뒤에 오면 앞의 `n`을 받침으로 만드는 자음
const CODA_TRIGGERS: &str = "kgsztdhbpmrjn";

/// 일반 매칭보다 먼저 치환하는 패턴 (순서 유지)
pub const PRIORITY_PATTERNS: [&str; 16] = [
    "sha", "shu", "sho", "she", "cha", "chu", "cho", "che", "kya", "kyu", "kyo", "kye", "tsu",
    "ttsu", "shi", "chi",
];

/// 로마자 -> 한글 매핑 테이블
pub static ROMAJI_TABLE: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    #[rustfmt::skip]
    let entries: [(&str, &str); 148] = [
        // 모음
        ("a", "아"), ("i", "이"), ("u", "우"), ("e", "에"), ("o", "오"),
        ("ya", "야"), ("yu", "유"), ("yo", "요"),
        // 자음+모음
        ("ka", "카"), ("ki", "키"), ("ku", "쿠"), ("ke", "케"), ("ko", "코"),
        ("ga", "가"), ("gi", "기"), ("gu", "구"), ("ge", "게"), ("go", "고"),
        ("sa", "사"), ("shi", "시"), ("su", "스"), ("se", "세"), ("so", "소"),
        ("za", "자"), ("zi", "지"), ("zu", "즈"), ("ze", "제"), ("zo", "조"),
        ("ta", "타"), ("chi", "치"), ("tsu", "츠"), ("te", "테"), ("to", "토"),
        ("da", "다"), ("di", "디"), ("du", "두"), ("de", "데"), ("do", "도"),
        ("na", "나"), ("ni", "니"), ("nu", "누"), ("ne", "네"), ("no", "노"),
        ("ha", "하"), ("hi", "히"), ("fu", "후"), ("he", "헤"), ("ho", "호"),
        ("ba", "바"), ("bi", "비"), ("bu", "부"), ("be", "베"), ("bo", "보"),
        ("pa", "파"), ("pi", "피"), ("pu", "푸"), ("pe", "페"), ("po", "포"),
        ("ma", "마"), ("mi", "미"), ("mu", "무"), ("me", "메"), ("mo", "모"),
        ("ra", "라"), ("ri", "리"), ("ru", "루"), ("re", "레"), ("ro", "로"),
        ("wa", "와"), ("wi", "위"), ("we", "웨"), ("wo", "워"),
        // 추가 패턴
        ("ji", "지"), ("ja", "자"), ("ju", "주"), ("jo", "조"), ("je", "제"),
        ("tsa", "차"), ("tsi", "치"), ("tse", "체"), ("tso", "초"),
        ("cha", "차"), ("chu", "추"), ("cho", "초"), ("che", "체"),
        ("sha", "샤"), ("shu", "슈"), ("sho", "쇼"), ("she", "셰"),
        ("si", "시"),
        // 요음
        ("kya", "캬"), ("kyu", "큐"), ("kyo", "쿄"), ("kye", "켸"),
        ("gya", "갸"), ("gyu", "규"), ("gyo", "교"), ("gye", "계"),
        ("nya", "냐"), ("nyu", "뉴"), ("nyo", "뇨"), ("nye", "녜"),
        ("hya", "햐"), ("hyu", "휴"), ("hyo", "효"), ("hye", "혜"),
        ("bya", "뱌"), ("byu", "뷰"), ("byo", "뵤"), ("bye", "볘"),
        ("pya", "퍄"), ("pyu", "퓨"), ("pyo", "표"), ("pye", "폐"),
        ("mya", "먀"), ("myu", "뮤"), ("myo", "묘"), ("mye", "며"),
        ("rya", "랴"), ("ryu", "류"), ("ryo", "료"), ("rye", "례"),
        // 특수 자음
        ("ts", "츠"), ("ch", "치"), ("sh", "시"), ("th", "스"),
        // 촉음
        ("kka", "까"), ("kki", "끼"), ("kku", "꾸"), ("kke", "께"), ("kko", "꼬"),
        ("ssa", "싸"), ("sshi", "씨"), ("ssu", "쓰"), ("sse", "쎄"), ("sso", "쏘"),
        ("tta", "따"), ("cchi", "찌"), ("ttsu", "쯔"), ("tte", "떼"), ("tto", "또"),
        ("ppa", "빠"), ("ppi", "삐"), ("ppu", "뿌"), ("ppe", "뻬"), ("ppo", "뽀"),
        // 특수 발음
        ("n", "은"),
        ("N", "ㄴ"),
    ];
    entries.into_iter().collect()
});

/// 변환 중인 구간
#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    /// 아직 매칭되지 않은 로마자
    Raw(String),
    /// 우선순위 패턴으로 확정된 한글
    Resolved(&'static str),
}

/// 로마자 읽기를 한국어 발음 표기로 변환
///
/// 어떤 입력에도 실패하지 않으며 결과에는 영문자가 남지 않는다.
pub fn to_korean_phonetic(romaji: &str) -> String {
    if romaji.is_empty() {
        return String::new();
    }

    let contracted = contract_long_vowels(&romaji.to_lowercase());
    let marked = mark_nasal_coda(&contracted);
    let tokens = resolve_priority(&marked);

    let mut korean = String::with_capacity(marked.len() * 3);
    for token in &tokens {
        match token {
            Token::Resolved(hangul) => korean.push_str(hangul),
            Token::Raw(raw) => korean.push_str(&greedy_map(raw)),
        }
    }

    korean.retain(|c| !c.is_ascii_alphabetic());
    fuse_codas(&korean)
}

/// 장음 축약
fn contract_long_vowels(romaji: &str) -> String {
    LONG_VOWELS
        .iter()
        .fold(romaji.to_string(), |acc, &(long, short)| acc.replace(long, short))
}

/// 자음 앞 또는 끝의 `n`을 받침 표시로 교체
fn mark_nasal_coda(romaji: &str) -> String {
    let chars: Vec<char> = romaji.chars().collect();
    let mut marked = String::with_capacity(romaji.len());
    let mut i = 0;

    while i < chars.len() {
        if chars[i] == 'n' {
            if let Some(&next) = chars.get(i + 1) {
                if CODA_TRIGGERS.contains(next) {
                    marked.push(NASAL_CODA);
                    marked.push(next);
                    i += 2;
                    continue;
                }
            }
        }
        marked.push(chars[i]);
        i += 1;
    }

    if marked.ends_with('n') {
        marked.pop();
        marked.push(NASAL_CODA);
    }
    marked
}

/// 우선순위 패턴을 순서대로 적용해 확정 토큰으로 분리
fn resolve_priority(romaji: &str) -> Vec<Token> {
    let mut tokens = vec![Token::Raw(romaji.to_string())];

    for pattern in PRIORITY_PATTERNS {
        let Some(&hangul) = ROMAJI_TABLE.get(pattern) else {
            continue;
        };
        tokens = tokens
            .into_iter()
            .flat_map(|token| match token {
                Token::Raw(raw) => split_on_pattern(&raw, pattern, hangul),
                resolved => vec![resolved],
            })
            .collect();
    }

    tokens
}

/// `raw` 안의 `pattern`을 모두 확정 토큰으로 바꿈 (왼쪽부터, 겹치지 않게)
fn split_on_pattern(raw: &str, pattern: &str, hangul: &'static str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut rest = raw;

    while let Some(pos) = rest.find(pattern) {
        if pos > 0 {
            tokens.push(Token::Raw(rest[..pos].to_string()));
        }
        tokens.push(Token::Resolved(hangul));
        rest = &rest[pos + pattern.len()..];
    }
    if !rest.is_empty() {
        tokens.push(Token::Raw(rest.to_string()));
    }

    tokens
}

/// 3 -> 2 -> 1글자 순으로 테이블을 찾는 최장 일치 변환
/// 매핑 없는 문자는 그대로 남김
fn greedy_map(raw: &str) -> String {
    let chars: Vec<char> = raw.chars().collect();
    let mut output = String::new();
    let mut i = 0;

    'scan: while i < chars.len() {
        for width in (1..=3).rev() {
            if i + width > chars.len() {
                continue;
            }
            let window: String = chars[i..i + width].iter().collect();
            if let Some(hangul) = ROMAJI_TABLE.get(window.as_str()) {
                output.push_str(hangul);
                i += width;
                continue 'scan;
            }
        }
        output.push(chars[i]);
        i += 1;
    }

    output
}
