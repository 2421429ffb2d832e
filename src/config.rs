//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::routine::{HistoryPolicy, RoutineCounts};

/// Koyin 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct KoyinConfig {
    /// 분류별 하루 목표 개수
    #[serde(default)]
    pub routine: RoutineCounts,
    /// 최근 학습으로 볼 기간 (일)
    #[serde(default = "default_lookback_days")]
    pub lookback_days: u32,
    /// 아는 항목도 새 선택에서 제외
    #[serde(default = "default_exclude_known")]
    pub exclude_known: bool,
    /// 사용자 음절 테이블 경로 (없으면 내장 테이블)
    #[serde(default)]
    pub table_path: Option<String>,
}

fn default_lookback_days() -> u32 {
    7
}

fn default_exclude_known() -> bool {
    true
}

impl Default for KoyinConfig {
    fn default() -> Self {
        Self {
            routine: RoutineCounts::default(),
            lookback_days: default_lookback_days(),
            exclude_known: default_exclude_known(),
            table_path: None,
        }
    }
}

impl KoyinConfig {
    pub fn history_policy(&self) -> HistoryPolicy {
        HistoryPolicy {
            lookback_days: self.lookback_days,
            exclude_known: self.exclude_known,
        }
    }
}

/// 설정 파일 경로: ~/.config/koyin/config.json
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| PathBuf::from("/var/tmp"));
    home.join(".config").join("koyin").join("config.json")
}

/// 기본 경로에서 설정 로드
pub fn load_config() -> KoyinConfig {
    load_config_from(&config_path())
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config_from(path: &Path) -> KoyinConfig {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("설정 파일 파싱 실패 ({}): {}", path.display(), e);
            KoyinConfig::default()
        }),
        Err(_) => KoyinConfig::default(),
    }
}

/// 기본 경로에 설정 저장
pub fn save_config(config: &KoyinConfig) -> Result<(), String> {
    save_config_to(config, &config_path())
}

/// 설정 파일 저장
pub fn save_config_to(config: &KoyinConfig, path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("설정 디렉토리 생성 실패: {}", e))?;
    }
    let json = serde_json::to_string_pretty(config).map_err(|e| format!("직렬화 실패: {}", e))?;
    fs::write(path, json).map_err(|e| format!("설정 파일 저장 실패: {}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = KoyinConfig::default();
        assert_eq!(config.routine, RoutineCounts::new(6, 3, 1, 1));
        assert_eq!(config.lookback_days, 7);
        assert!(config.exclude_known);
        assert!(config.table_path.is_none());
    }

    #[test]
    fn test_serialize_deserialize() {
        let config = KoyinConfig {
            routine: RoutineCounts::new(9, 9, 2, 1),
            lookback_days: 14,
            exclude_known: false,
            table_path: Some("/tmp/table.json".into()),
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: KoyinConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_backward_compat_missing_field() {
        // 이전 설정 파일에 routine이 없는 경우 기본값 사용
        let json = r#"{"lookback_days": 3}"#;
        let config: KoyinConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.lookback_days, 3);
        assert_eq!(config.routine, RoutineCounts::default());
        assert!(config.exclude_known);
    }

    #[test]
    fn test_save_and_load() {
        let dir = std::env::temp_dir().join(format!("koyin-config-{}", std::process::id()));
        let path = dir.join("config.json");
        let config = KoyinConfig {
            lookback_days: 10,
            ..KoyinConfig::default()
        };

        save_config_to(&config, &path).unwrap();
        assert_eq!(load_config_from(&path), config);

        fs::write(&path, "{ broken").unwrap();
        assert_eq!(load_config_from(&path), KoyinConfig::default());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_file_defaults() {
        let config = load_config_from(Path::new("/nonexistent/koyin/config.json"));
        assert_eq!(config, KoyinConfig::default());
    }

    #[test]
    fn test_history_policy() {
        let config = KoyinConfig {
            lookback_days: 3,
            exclude_known: false,
            ..KoyinConfig::default()
        };
        let policy = config.history_policy();
        assert_eq!(policy.lookback_days, 3);
        assert!(!policy.exclude_known);
    }
}
