mod delivery;
mod error;
mod inner;
mod text;

use crate::inner::TelegramRelayClientInner;

use std::sync::Arc;

use dsr_core::{
    config::AppConfigTelegram,
    error::ClientError,
    interface::{client::RelayClient, server::RelayServer},
};
use futures::{future::BoxFuture, prelude::*};

/// Telegram の新着テキストメッセージを RelayServer に中継するクライアント。
#[derive(Debug)]
pub struct TelegramRelayClient<S>(Arc<TelegramRelayClientInner<S>>);

impl<S: RelayServer> TelegramRelayClient<S> {
    pub fn new(config_telegram: &AppConfigTelegram, relay: S) -> TelegramRelayClient<S> {
        TelegramRelayClient(Arc::new(TelegramRelayClientInner::new(config_telegram, relay)))
    }
}

impl<S: RelayServer> RelayClient for TelegramRelayClient<S> {
    fn execute(&self) -> BoxFuture<'static, Result<(), ClientError>> {
        let cloned_inner = self.0.clone();
        async {
            cloned_inner.execute().await;
            Ok(())
        }
        .boxed()
    }
}
