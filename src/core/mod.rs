//! 문자 분류, 세그먼트 분리, 로마자 변환, 한글 음절 산술

pub mod chosung;
pub mod composer;
pub mod romaji;
pub mod script;
pub mod segment;
pub mod unicode;
