use crate::{
    error::LlmError,
    model::message::{AssistantReply, UserMessage},
};

use std::fmt::Debug;

use futures::future::BoxFuture;

pub trait Llm: Send + Sync + Debug {
    /// `UserMessage` を 1 件だけ送信し、最初の応答を得る。
    fn send_message<'a>(&'a self, user_message: &'a UserMessage) -> BoxFuture<'a, Result<AssistantReply, LlmError>>;
}
