use crate::{delivery::deliver_reply, error::WrappedClientError, text::InboundMessage};

use std::sync::Arc;

use dsr_core::{config::AppConfigTelegram, error::ClientError, interface::server::RelayServer};
use teloxide::prelude::*;
use tracing::error;

#[derive(Debug)]
pub struct TelegramRelayClientInner<S> {
    bot: Bot,
    max_length: usize,
    relay: S,
}

impl<S: RelayServer> TelegramRelayClientInner<S> {
    pub fn new(config_telegram: &AppConfigTelegram, relay: S) -> TelegramRelayClientInner<S> {
        TelegramRelayClientInner {
            bot: Bot::new(&config_telegram.token),
            max_length: config_telegram.max_length,
            relay,
        }
    }

    /// long polling で更新を受け取り続ける。
    /// 異なるチャットの更新は並行に、同じチャットの更新は順に処理される。
    pub async fn execute(self: Arc<Self>) {
        let handler = Update::filter_message()
            .filter_map(|message: Message| InboundMessage::from_message(&message))
            .endpoint(on_inbound_message::<S>);

        Dispatcher::builder(self.bot.clone(), handler)
            .dependencies(dptree::deps![self.clone()])
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;
    }

    async fn on_inbound_message(&self, inbound: InboundMessage) -> Result<(), WrappedClientError> {
        deliver_reply(&self.bot, &self.relay, inbound, self.max_length).await
    }
}

async fn on_inbound_message<S: RelayServer>(
    inner: Arc<TelegramRelayClientInner<S>>,
    inbound: InboundMessage,
) -> Result<(), ClientError> {
    match inner.on_inbound_message(inbound).await {
        Ok(()) => (),
        Err(err) => {
            let err: ClientError = err.into();
            error!("Telegram update process reported error: {err}");
        }
    }
    Ok(())
}
