use crate::error::ConfigError;

use std::path::Path;

use serde::Deserialize;
use tokio::fs::read_to_string;

/// Telegram bot token を与える環境変数。
pub const ENV_TELEGRAM_BOT_TOKEN: &str = "TELEGRAM_BOT_TOKEN";

/// DeepSeek API key を与える環境変数。
pub const ENV_DEEPSEEK_API_KEY: &str = "DEEPSEEK_API_KEY";

/// 設定ファイルを読み込む。パスが与えられなければすべて既定値になる。
pub async fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let Some(path) = path else {
        return Ok(AppConfig::default());
    };

    let config_str = read_to_string(path).await.map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    AppConfig::from_toml(&config_str)
}

/// config.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub telegram: AppConfigTelegram,
    pub llm: AppConfigLlm,
    pub liveness: AppConfigLiveness,
}

impl AppConfig {
    pub fn from_toml(config_str: &str) -> Result<AppConfig, ConfigError> {
        Ok(toml::from_str(config_str)?)
    }

    /// 必須の認証情報がそろっているか確認する。
    pub fn ensure_credentials(&self) -> Result<(), ConfigError> {
        if self.telegram.token.is_empty() {
            return Err(ConfigError::MissingCredential(ENV_TELEGRAM_BOT_TOKEN));
        }
        if self.llm.token.is_empty() {
            return Err(ConfigError::MissingCredential(ENV_DEEPSEEK_API_KEY));
        }
        Ok(())
    }
}

/// [telegram]
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfigTelegram {
    pub token: String,

    /// 1 メッセージあたりの最大長 (UTF-16 コードユニット数)。
    pub max_length: usize,
}

impl Default for AppConfigTelegram {
    fn default() -> Self {
        AppConfigTelegram {
            token: String::new(),
            max_length: 4096,
        }
    }
}

/// [llm]
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfigLlm {
    pub endpoint: String,
    pub token: String,
    pub model: String,
    pub temperature: f64,
    pub timeout_secs: u64,
}

impl Default for AppConfigLlm {
    fn default() -> Self {
        AppConfigLlm {
            endpoint: "https://api.deepseek.com/chat/completions".into(),
            token: String::new(),
            model: "deepseek-chat".into(),
            temperature: 0.7,
            timeout_secs: 30,
        }
    }
}

/// [liveness]
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfigLiveness {
    pub enabled: bool,
    pub port: u16,
}

impl Default for AppConfigLiveness {
    fn default() -> Self {
        AppConfigLiveness {
            enabled: true,
            port: 10000,
        }
    }
}
