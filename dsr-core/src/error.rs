use std::{error::Error as StdError, io::Error as IoError, path::PathBuf};

use thiserror::Error as ThisError;

/// 設定読み込み時のエラー。起動前に検出され、致命的に扱われる。
#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: IoError,
    },

    #[error("failed to parse config file: {0}")]
    Parse(
        #[source]
        #[from]
        toml::de::Error,
    ),

    /// 必須の認証情報が与えられていない。
    #[error("missing required credential: {0}")]
    MissingCredential(&'static str),
}

/// RelayClient のエラー。
/// Relay 側の失敗は文字列として配送されるため、ここに現れるのは配送経路の失敗のみ。
#[derive(Debug, ThisError)]
pub enum ClientError {
    /// 通信関連のエラー。
    #[error("communication failed: {0}")]
    Communication(#[source] Box<dyn StdError + Send + Sync + 'static>),
}

/// RelayServer のエラー。
#[derive(Debug, ThisError)]
pub enum ServerError {
    #[error("LLM error: {0}")]
    Llm(
        #[source]
        #[from]
        LlmError,
    ),
}

/// LLM 層のエラー。
#[derive(Debug, ThisError)]
pub enum LlmError {
    #[error("communication failed: {0}")]
    Communication(#[source] Box<dyn StdError + Send + Sync + 'static>),

    /// 応答が制限時間内に返ってこなかった。
    #[error("request timed out: {0}")]
    Timeout(#[source] Box<dyn StdError + Send + Sync + 'static>),

    /// 2xx 以外のステータスが返された。
    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    /// LLM が有効なレスポンスを生成しなかった。
    #[error("no choice returned")]
    NoChoice,

    /// JSON の復元ができない。
    #[error("invalid response format: {0}")]
    ResponseFormat(#[source] Box<dyn StdError + Send + Sync + 'static>),
}
