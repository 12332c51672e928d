use std::path::PathBuf;

use clap::Parser;
use dsr_core::{
    config::{AppConfig, ENV_DEEPSEEK_API_KEY, ENV_TELEGRAM_BOT_TOKEN, load_config},
    error::ConfigError,
};

#[derive(Debug, Clone, Parser)]
#[clap(author, version)]
pub struct Arguments {
    /// Specify path for config file.
    #[clap(short, long)]
    pub config: Option<PathBuf>,

    /// Telegram bot token.
    #[clap(long, env = ENV_TELEGRAM_BOT_TOKEN, hide_env_values = true)]
    pub telegram_bot_token: Option<String>,

    /// DeepSeek API key.
    #[clap(long, env = ENV_DEEPSEEK_API_KEY, hide_env_values = true)]
    pub deepseek_api_key: Option<String>,

    /// Port for liveness endpoint.
    #[clap(long, env = "PORT")]
    pub port: Option<u16>,

    /// Do not start liveness endpoint.
    #[clap(long, env = "DISABLE_LIVENESS")]
    pub disable_liveness: bool,
}

impl Arguments {
    /// コマンドライン・環境変数の値で設定を上書きする。
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(token) = &self.telegram_bot_token {
            config.telegram.token = token.clone();
        }
        if let Some(token) = &self.deepseek_api_key {
            config.llm.token = token.clone();
        }
        if let Some(port) = self.port {
            config.liveness.port = port;
        }
        if self.disable_liveness {
            config.liveness.enabled = false;
        }
    }
}

/// 設定ファイル・環境変数・コマンドラインから最終的な設定を組み立てる。
/// 認証情報が欠けている場合はここで失敗する。
pub async fn assemble_config(args: &Arguments) -> Result<AppConfig, ConfigError> {
    let mut config = load_config(args.config.as_deref()).await?;
    args.apply(&mut config);
    config.ensure_credentials()?;
    Ok(config)
}
