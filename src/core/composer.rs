//! 분리된 받침 자모를 앞 음절에 합치는 조합기
//!
//! 로마자 변환 결과에는 `콘` 대신 `코ㄴ`처럼 받침이 낱자모로 남는 경우가 있다.
//! 앞 글자가 완성형 음절이면 종성 자리를 코드포인트 산술로 교체한다.

use crate::core::unicode::{coda_index, compose_syllable, decompose_syllable};

/// 합성 대상 홑받침 (적용 순서)
pub const CODA_JAMO: [char; 14] = [
    'ㄱ', 'ㄴ', 'ㄷ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅅ', 'ㅇ', 'ㅈ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// 음절 바로 뒤에 붙은 받침 자모 `coda`를 그 음절의 종성으로 합침
///
/// 왼쪽부터 겹치지 않게 스캔하며, 한 번 합쳐진 음절은 다시 받침을 받지 않는다
/// (`가ㄴㄴ` -> `간ㄴ`). 기존 종성이 있으면 교체된다.
/// 앞 글자가 음절이 아니거나 `coda`가 홑받침이 아니면 입력을 그대로 돌려준다.
pub fn fuse_coda(text: &str, coda: char) -> String {
    let Some(jong) = coda_index(coda) else {
        return text.to_string();
    };

    let chars: Vec<char> = text.chars().collect();
    let mut output = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        let current = chars[i];
        if chars.get(i + 1) == Some(&coda) {
            if let Some(fused) = with_jongseong(current, jong) {
                output.push(fused);
                i += 2;
                continue;
            }
        }
        output.push(current);
        i += 1;
    }

    output
}

/// 14개 홑받침 전체에 대해 순서대로 `fuse_coda` 적용
pub fn fuse_codas(text: &str) -> String {
    CODA_JAMO
        .iter()
        .fold(text.to_string(), |acc, &coda| fuse_coda(&acc, coda))
}

/// 음절의 종성을 `jong`으로 교체한 새 음절
fn with_jongseong(syllable: char, jong: u32) -> Option<char> {
    let (cho, jung, _) = decompose_syllable(syllable)?;
    compose_syllable(cho, jung, jong)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuse_nasal_coda() {
        assert_eq!(fuse_coda("코ㄴ니치하", 'ㄴ'), "콘니치하");
        assert_eq!(fuse_coda("게ㄴ키", 'ㄴ'), "겐키");
    }

    #[test]
    fn test_fuse_all_simple_codas() {
        let expected = [
            '각', '간', '갇', '갈', '감', '갑', '갓', '강', '갖', '갗', '갘', '같', '갚', '갛',
        ];
        for (coda, fused) in CODA_JAMO.iter().zip(expected) {
            let input = format!("가{}", coda);
            assert_eq!(fuse_coda(&input, *coda), fused.to_string());
        }
    }

    #[test]
    fn test_existing_coda_replaced() {
        // 기존 종성 ㄱ을 떼고 ㄴ으로 교체
        assert_eq!(fuse_coda("각ㄴ", 'ㄴ'), "간");
    }

    #[test]
    fn test_non_syllable_base_left_alone() {
        assert_eq!(fuse_coda("ㄴ", 'ㄴ'), "ㄴ");
        assert_eq!(fuse_coda("aㄴ", 'ㄴ'), "aㄴ");
        assert_eq!(fuse_coda("ㅋㄴ", 'ㄴ'), "ㅋㄴ");
        assert_eq!(fuse_coda("", 'ㄴ'), "");
    }

    #[test]
    fn test_unknown_coda_is_noop() {
        assert_eq!(fuse_coda("가ㄲ", 'ㄲ'), "가ㄲ");
        assert_eq!(fuse_coda("가N", 'N'), "가N");
    }

    #[test]
    fn test_fused_syllable_not_reused() {
        assert_eq!(fuse_coda("가ㄴㄴ", 'ㄴ'), "간ㄴ");
        assert_eq!(fuse_codas("가ㄴㄴ"), "간ㄴ");
    }

    #[test]
    fn test_fuse_codas_mixed() {
        assert_eq!(fuse_codas("사ㄴ포 도ㅇ"), "산포 동");
    }
}
