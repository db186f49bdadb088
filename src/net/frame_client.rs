//! WebSocket frame client for the game push channel.
//!
//! Manages the websocket lifecycle: connection, reconnection with
//! exponential backoff, and inbound frame dispatch. Each successful
//! connection publishes a fresh `GameSocket` into context, so subscribers
//! can detect the identity change and move their listeners across.
//!
//! All WebSocket logic is gated behind `#[cfg(feature = "hydrate")]` since it
//! requires a browser environment.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures and undecodable frames are logged and absorbed; the
//! reconnect loop is the recovery path.

#[cfg(test)]
#[path = "frame_client_test.rs"]
mod frame_client_test;

#[cfg(feature = "hydrate")]
use leptos::prelude::Set;

#[cfg(feature = "hydrate")]
use crate::config::BoardConfig;
#[cfg(feature = "hydrate")]
use crate::net::socket::GameSocket;
#[cfg(feature = "hydrate")]
use crate::net::types::decode_frame;
#[cfg(feature = "hydrate")]
use crate::state::game::ConnectionStatus;

/// Websocket URL for `path` on `host`, secure when the page is served over https.
#[must_use]
pub fn ws_url(page_href: &str, host: &str, path: &str) -> String {
    let proto = if page_href.starts_with("https") { "wss" } else { "ws" };
    let path = path.trim_start_matches('/');
    format!("{proto}://{host}/{path}")
}

/// Next reconnect delay: double the current one, capped at `max_ms`.
#[must_use]
pub fn next_backoff_ms(current_ms: u32, max_ms: u32) -> u32 {
    current_ms.saturating_mul(2).min(max_ms)
}

/// Spawn the websocket lifecycle as a local async task.
///
/// `socket` holds the live connection's handle (or `None` between
/// connections) and `connection` mirrors the transport state.
#[cfg(feature = "hydrate")]
pub fn spawn_frame_client(
    config: BoardConfig,
    socket: leptos::prelude::RwSignal<Option<GameSocket>>,
    connection: leptos::prelude::RwSignal<ConnectionStatus>,
) {
    leptos::task::spawn_local(frame_client_loop(config, socket, connection));
}

/// Main connection loop with reconnect logic.
#[cfg(feature = "hydrate")]
async fn frame_client_loop(
    config: BoardConfig,
    socket: leptos::prelude::RwSignal<Option<GameSocket>>,
    connection: leptos::prelude::RwSignal<ConnectionStatus>,
) {
    let mut backoff_ms = config.reconnect_initial_ms;

    loop {
        connection.set(ConnectionStatus::Connecting);

        let (href, host) = page_location();
        let url = ws_url(&href, &host, &config.ws_path);

        match connect_and_run(&url, socket, connection).await {
            Ok(()) => {
                leptos::logging::log!("WS disconnected cleanly");
                backoff_ms = config.reconnect_initial_ms;
            }
            Err(e) => {
                leptos::logging::warn!("WS error: {e}");
            }
        }

        socket.set(None);
        connection.set(ConnectionStatus::Disconnected);

        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(backoff_ms))).await;
        backoff_ms = next_backoff_ms(backoff_ms, config.reconnect_max_ms);
    }
}

/// Current page href and host, with a localhost fallback.
#[cfg(feature = "hydrate")]
fn page_location() -> (String, String) {
    const FALLBACK_HOST: &str = "localhost:3000";
    let Some(location) = web_sys::window().map(|w| w.location()) else {
        return (String::new(), FALLBACK_HOST.to_owned());
    };
    let href = location.href().unwrap_or_default();
    let host = location.host().unwrap_or_else(|_| FALLBACK_HOST.to_owned());
    (href, host)
}

/// Connect, publish a fresh socket handle, and pump frames until disconnect.
#[cfg(feature = "hydrate")]
async fn connect_and_run(
    url: &str,
    socket_signal: leptos::prelude::RwSignal<Option<GameSocket>>,
    connection: leptos::prelude::RwSignal<ConnectionStatus>,
) -> Result<(), String> {
    use futures::channel::mpsc;
    use futures::{SinkExt, StreamExt};
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;

    let ws = WebSocket::open(url).map_err(|e| e.to_string())?;
    let (mut ws_write, mut ws_read) = ws.split();

    let (tx, mut rx) = mpsc::unbounded::<String>();
    let socket = GameSocket::new(tx);
    socket_signal.set(Some(socket.clone()));
    connection.set(ConnectionStatus::Connected);

    // Forward queued outbound frames to the websocket.
    let send_task = async {
        while let Some(text) = rx.next().await {
            if ws_write.send(Message::Text(text)).await.is_err() {
                break;
            }
        }
    };

    // Receive loop: decode and dispatch to socket listeners.
    let recv_task = async {
        while let Some(msg) = ws_read.next().await {
            match msg {
                Ok(Message::Text(text)) => match decode_frame(&text) {
                    Ok(frame) => {
                        socket.dispatch(&frame);
                    }
                    Err(e) => leptos::logging::warn!("dropping undecodable frame: {e}"),
                },
                Ok(Message::Bytes(_)) => {}
                Err(e) => {
                    leptos::logging::warn!("WS recv error: {e}");
                    break;
                }
            }
        }
    };

    futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await;

    Ok(())
}
