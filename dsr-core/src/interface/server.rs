use crate::{
    error::ServerError,
    model::message::{AssistantReply, UserMessage},
};

use futures::{FutureExt, future::BoxFuture};
use tracing::error;

/// 表示用に変換されたエラーの接頭辞。
pub const ERROR_REPLY_PREFIX: &str = "Error: ";

pub trait RelayServer: Send + Sync + 'static {
    /// ユーザーの発言を転送し、応答を得る。
    fn process(&self, user_message: UserMessage) -> BoxFuture<'_, Result<AssistantReply, ServerError>>;

    /// `process()` の結果をそのままチャットに流せる文字列にする。
    /// 呼び出し側はエラーを区別する必要がない。
    fn relay(&self, user_message: UserMessage) -> BoxFuture<'_, String> {
        async move { into_display_text(self.process(user_message).await) }.boxed()
    }
}

/// 失敗はここでログに残し、`"Error: ..."` の形の文字列にする。
pub fn into_display_text(result: Result<AssistantReply, ServerError>) -> String {
    match result {
        Ok(reply) => reply.text,
        Err(err) => {
            error!("relay failed: {err}");
            format!("{ERROR_REPLY_PREFIX}{err}")
        }
    }
}
