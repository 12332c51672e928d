//! ホスティング先のヘルスチェックに応答するだけの HTTP エンドポイント。
//! どのパスに GET されても同じ内容を返す。リクエストのログは出さない。

use std::{
    io::Error as IoError,
    net::{Ipv4Addr, SocketAddr},
};

use axum::{Router, http::header::CONTENT_TYPE, response::IntoResponse, routing::get};
use dsr_core::config::AppConfigLiveness;
use tokio::net::TcpListener;
use tracing::info;

pub const LIVENESS_BODY: &str = "Bot is running!";

/// 設定されたポートで待ち受け、終了まで応答し続ける。
pub async fn run_liveness(config: &AppConfigLiveness) -> Result<(), IoError> {
    let address = SocketAddr::from((Ipv4Addr::UNSPECIFIED, config.port));
    let listener = TcpListener::bind(address).await?;
    info!("liveness responder listening on {address}");
    serve_liveness(listener).await
}

pub async fn serve_liveness(listener: TcpListener) -> Result<(), IoError> {
    axum::serve(listener, liveness_router()).await
}

pub fn liveness_router() -> Router {
    Router::new()
        .route("/", get(respond_alive))
        .route("/*path", get(respond_alive))
}

async fn respond_alive() -> impl IntoResponse {
    ([(CONTENT_TYPE, "text/plain")], LIVENESS_BODY)
}
