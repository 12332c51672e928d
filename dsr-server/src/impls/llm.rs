mod deepseek;

pub use self::deepseek::DeepseekBackend;

use dsr_core::{config::AppConfigLlm, error::LlmError, interface::llm::Llm};
use reqwest::Error as ReqwestError;
use serde_json::Error as SerdeJsonError;

pub fn create_llm(config: &AppConfigLlm) -> Result<Box<dyn Llm + 'static>, LlmError> {
    Ok(Box::new(DeepseekBackend::new(config)?))
}

/// 外部クレートのエラーを `LlmError` に寄せるためのラッパー。
#[derive(Debug)]
pub struct WrappedLlmError(LlmError);

impl From<WrappedLlmError> for LlmError {
    fn from(value: WrappedLlmError) -> Self {
        value.0
    }
}

impl From<LlmError> for WrappedLlmError {
    fn from(value: LlmError) -> Self {
        Self(value)
    }
}

impl From<ReqwestError> for WrappedLlmError {
    fn from(value: ReqwestError) -> Self {
        if value.is_timeout() {
            Self(LlmError::Timeout(value.into()))
        } else {
            Self(LlmError::Communication(value.into()))
        }
    }
}

impl From<SerdeJsonError> for WrappedLlmError {
    fn from(value: SerdeJsonError) -> Self {
        Self(LlmError::ResponseFormat(value.into()))
    }
}
