pub mod config;
pub mod core;
pub mod normalize;
pub mod reading;

pub use config::NormalizerConfig;
pub use crate::core::chosung::{korean_chosung, lead_consonant};
pub use crate::core::composer::{fuse_coda, fuse_codas};
pub use crate::core::romaji::to_korean_phonetic;
pub use crate::core::script::{classify, CharClass};
pub use crate::core::segment::{segment, separate, Segment};
pub use normalize::{ConversionResult, Normalizer, SegmentExtras, SegmentInfo, SongRecord};
pub use reading::{japanese_pronunciation, romanize, KanaReader, NoReading, ReadingProvider};
