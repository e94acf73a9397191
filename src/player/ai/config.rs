use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

static AI_CONFIG: Lazy<AIConfig> = Lazy::new(AIConfig::load_or_default);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AIConfig {
    pub version: String,
    pub search: SearchConfig,
    pub play: PlayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Easy で最善手を指す確率 (残りは空きマスから一様ランダム)
    pub easy_optimal_rate: f64,
    pub memo_enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayConfig {
    /// AIの思考ウェイト (演出用、探索自体は一瞬で終わる)
    pub think_wait_ms: u64,
}

impl AIConfig {
    pub fn load() -> anyhow::Result<Self> {
        let config_path = "ai_config.json";
        let config_str = std::fs::read_to_string(config_path)?;
        let config: AIConfig = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|_| Self::default())
    }

    /// 起動時に一度だけ読み込んだ設定
    pub fn get() -> &'static AIConfig {
        &AI_CONFIG
    }
}

impl Default for AIConfig {
    fn default() -> Self {
        AIConfig {
            version: "1.0".to_string(),
            search: SearchConfig {
                easy_optimal_rate: 0.3,
                memo_enabled: true,
            },
            play: PlayConfig { think_wait_ms: 600 },
        }
    }
}
