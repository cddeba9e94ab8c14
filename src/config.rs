//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 설정 파일 경로를 덮어쓰는 환경 변수
pub const CONFIG_ENV: &str = "KARAOKE_PRON_CONFIG";

/// 설정 로드/저장 에러
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 읽기/쓰기 실패
    IoError(std::io::Error),
    /// JSON 파싱/직렬화 실패
    ParseError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "설정 파일 입출력 오류: {}", e),
            ConfigError::ParseError(s) => write!(f, "설정 JSON 오류: {}", s),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::ParseError(e.to_string())
    }
}

/// 정규화 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct NormalizerConfig {
    /// 값이 없음을 나타내는 표시 문자열 (발음/초성을 만들지 않음)
    #[serde(default = "default_missing_markers")]
    pub missing_markers: Vec<String>,
    /// 내장 가나 읽기 제공자 사용 여부
    #[serde(default = "default_kana_reader")]
    pub kana_reader: bool,
}

fn default_missing_markers() -> Vec<String> {
    Vec::new()
}

fn default_kana_reader() -> bool {
    true
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            missing_markers: default_missing_markers(),
            kana_reader: default_kana_reader(),
        }
    }
}

impl NormalizerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// 없음 표시 문자열 설정
    pub fn with_missing_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.missing_markers = markers.into_iter().map(Into::into).collect();
        self
    }

    /// 가나 읽기 제공자 사용 여부 설정
    pub fn with_kana_reader(mut self, enabled: bool) -> Self {
        self.kana_reader = enabled;
        self
    }

    /// 값이 없음 표시인지 확인 (앞뒤 공백 무시)
    pub fn is_missing(&self, value: &str) -> bool {
        let trimmed = value.trim();
        self.missing_markers.iter().any(|m| m == trimmed)
    }
}

/// 설정 파일 경로: $KARAOKE_PRON_CONFIG 또는 ~/.config/karaoke-pron/config.json
pub fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return PathBuf::from(path);
    }
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| PathBuf::from("/var/tmp"));
    home.join(".config").join("karaoke-pron").join("config.json")
}

/// 기본 경로에서 설정 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> NormalizerConfig {
    let path = config_path();
    match load_config_from(&path) {
        Ok(config) => config,
        Err(ConfigError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            NormalizerConfig::default()
        }
        Err(e) => {
            log::warn!("설정 로드 실패, 기본값 사용 ({}): {}", path.display(), e);
            NormalizerConfig::default()
        }
    }
}

/// 지정 경로에서 설정 로드
pub fn load_config_from(path: &Path) -> Result<NormalizerConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// 지정 경로에 설정 저장
pub fn save_config_to(path: &Path, config: &NormalizerConfig) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}
