use crate::{
    error::WrappedClientError,
    text::{InboundMessage, split_for_telegram},
};

use dsr_core::{interface::server::RelayServer, model::message::UserMessage};
use futures::{FutureExt, future::BoxFuture};
use teloxide::{
    RequestError,
    payloads::SendMessageSetters,
    prelude::*,
    types::{ChatAction, MessageId, ReplyParameters},
};
use tracing::{info, warn};

/// 返信の送り先。Bot API への送信をまとめたもの。
pub trait ReplyOutlet: Send + Sync {
    fn send_typing(&self, chat_id: ChatId) -> BoxFuture<'_, Result<(), RequestError>>;

    /// `reply_to` が与えられたらそのメッセージへの返信として送る。
    fn send_text(
        &self,
        chat_id: ChatId,
        text: String,
        reply_to: Option<MessageId>,
    ) -> BoxFuture<'_, Result<(), RequestError>>;
}

impl ReplyOutlet for Bot {
    fn send_typing(&self, chat_id: ChatId) -> BoxFuture<'_, Result<(), RequestError>> {
        let request = self.send_chat_action(chat_id, ChatAction::Typing);
        async move { request.await.map(|_| ()) }.boxed()
    }

    fn send_text(
        &self,
        chat_id: ChatId,
        text: String,
        reply_to: Option<MessageId>,
    ) -> BoxFuture<'_, Result<(), RequestError>> {
        let mut request = self.send_message(chat_id, text);
        if let Some(message_id) = reply_to {
            request = request.reply_parameters(ReplyParameters::new(message_id));
        }
        async move { request.await.map(|_| ()) }.boxed()
    }
}

/// 入力中表示、中継、分割送信を順に行う。
/// 入力中表示の失敗は無視し、本文の送信に失敗したらそこで打ち切る。
pub async fn deliver_reply<O: ReplyOutlet, S: RelayServer>(
    outlet: &O,
    relay: &S,
    inbound: InboundMessage,
    max_length: usize,
) -> Result<(), WrappedClientError> {
    info!("[{}] {}: {}", inbound.message_id, inbound.chat_id.0, inbound.text);

    if let Err(err) = outlet.send_typing(inbound.chat_id).await {
        warn!("failed to send typing action to {}: {err}", inbound.chat_id.0);
    }

    let reply = relay.relay(UserMessage::new(inbound.text)).await;
    info!(
        "[{}] reply: {} character(s)",
        inbound.message_id,
        reply.chars().count()
    );

    // 引用は先頭のチャンクだけ
    let mut reply_to = inbound.quote_reply.then_some(MessageId(inbound.message_id));
    for chunk in split_for_telegram(&reply, max_length) {
        outlet.send_text(inbound.chat_id, chunk, reply_to.take()).await?;
    }
    Ok(())
}
