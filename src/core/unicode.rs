//! 유니코드 한글 음절 산술 유틸리티

/// 한글 음절 시작 코드포인트 (가)
pub const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// 한글 음절 마지막 코드포인트 (힣)
pub const HANGUL_SYLLABLE_LAST: u32 = 0xD7A3;

/// 초성 개수
const CHOSEONG_COUNT: u32 = 19;
/// 중성 개수
const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
const JONGSEONG_COUNT: u32 = 28;

/// 완성형 한글 음절(가-힣)인지 확인
pub fn is_hangul_syllable(c: char) -> bool {
    (HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&(c as u32))
}

/// 초성/중성/종성 인덱스로 완성된 한글 유니코드 생성
/// - choseong: 초성 인덱스 (0~18)
/// - jungseong: 중성 인덱스 (0~20)
/// - jongseong: 종성 인덱스 (0~27, 0 = 종성 없음)
pub fn compose_syllable(choseong: u32, jungseong: u32, jongseong: u32) -> Option<char> {
    if choseong >= CHOSEONG_COUNT || jungseong >= JUNGSEONG_COUNT || jongseong >= JONGSEONG_COUNT {
        return None;
    }
    let code = HANGUL_SYLLABLE_BASE
        + (choseong * JUNGSEONG_COUNT + jungseong) * JONGSEONG_COUNT
        + jongseong;
    char::from_u32(code)
}

/// 완성형 한글을 초성/중성/종성 인덱스로 분해
/// 반환: (초성 인덱스, 중성 인덱스, 종성 인덱스)
pub fn decompose_syllable(c: char) -> Option<(u32, u32, u32)> {
    if !is_hangul_syllable(c) {
        return None;
    }
    let offset = c as u32 - HANGUL_SYLLABLE_BASE;
    let jongseong = offset % JONGSEONG_COUNT;
    let jungseong = (offset / JONGSEONG_COUNT) % JUNGSEONG_COUNT;
    let choseong = offset / (JUNGSEONG_COUNT * JONGSEONG_COUNT);
    Some((choseong, jungseong, jongseong))
}

/// 받침 자모(호환용 자모)를 종성 인덱스로 변환
/// 겹받침/쌍받침은 다루지 않음 (홑받침 14개만)
pub fn coda_index(jamo: char) -> Option<u32> {
    // 종성 인덱스: 없음(0) ㄱ(1) ㄲ(2) ㄳ(3) ㄴ(4) ㄵ(5) ㄶ(6) ㄷ(7) ㄹ(8) ㄺ(9)
    // ㄻ(10) ㄼ(11) ㄽ(12) ㄾ(13) ㄿ(14) ㅀ(15) ㅁ(16) ㅂ(17) ㅄ(18) ㅅ(19)
    // ㅆ(20) ㅇ(21) ㅈ(22) ㅊ(23) ㅋ(24) ㅌ(25) ㅍ(26) ㅎ(27)
    match jamo {
        'ㄱ' => Some(1),
        'ㄴ' => Some(4),
        'ㄷ' => Some(7),
        'ㄹ' => Some(8),
        'ㅁ' => Some(16),
        'ㅂ' => Some(17),
        'ㅅ' => Some(19),
        'ㅇ' => Some(21),
        'ㅈ' => Some(22),
        'ㅊ' => Some(23),
        'ㅋ' => Some(24),
        'ㅌ' => Some(25),
        'ㅍ' => Some(26),
        'ㅎ' => Some(27),
        _ => None,
    }
}

/// 초성 인덱스에 해당하는 자모 문자 반환 (호환용 자모)
pub fn choseong_to_jamo_char(cho: u32) -> Option<char> {
    if cho < CHOSEONG_COUNT {
        // 호환용 자모: 초성 순서와 다르므로 직접 매핑
        #[rustfmt::skip]
        let jamo_codes: [u32; 19] = [
            0x3131, // ㄱ
            0x3132, // ㄲ
            0x3134, // ㄴ
            0x3137, // ㄷ
            0x3138, // ㄸ
            0x3139, // ㄹ
            0x3141, // ㅁ
            0x3142, // ㅂ
            0x3143, // ㅃ
            0x3145, // ㅅ
            0x3146, // ㅆ
            0x3147, // ㅇ
            0x3148, // ㅈ
            0x3149, // ㅉ
            0x314A, // ㅊ
            0x314B, // ㅋ
            0x314C, // ㅌ
            0x314D, // ㅍ
            0x314E, // ㅎ
        ];
        char::from_u32(jamo_codes[cho as usize])
    } else {
        None
    }
}
