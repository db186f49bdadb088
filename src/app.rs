//! Context providers for hosting the board.
//!
//! SYSTEM CONTEXT
//! ==============
//! A host page calls `provide_board_context` once, above any `ChessBoard`.
//! It installs the board configuration, the connection-scoped socket slot,
//! and the transport status, and in the browser starts the frame client
//! that fills them.

use leptos::prelude::*;

use crate::config::BoardConfig;
use crate::net::socket::GameSocket;
use crate::state::game::ConnectionStatus;

/// Handles to the shared board context.
#[derive(Clone, Copy, Debug)]
pub struct BoardContext {
    /// Live socket for the current connection, `None` between connections.
    pub socket: RwSignal<Option<GameSocket>>,
    /// Transport status, suitable for the board's `connection` prop.
    pub connection: RwSignal<ConnectionStatus>,
}

/// Provide configuration, socket and connection status to descendants.
pub fn provide_board_context(config: BoardConfig) -> BoardContext {
    let socket = RwSignal::new(None::<GameSocket>);
    let connection = RwSignal::new(ConnectionStatus::default());

    provide_context(config.clone());
    provide_context(socket);
    provide_context(connection);

    #[cfg(feature = "hydrate")]
    crate::net::frame_client::spawn_frame_client(config, socket, connection);
    #[cfg(not(feature = "hydrate"))]
    drop(config);

    BoardContext { socket, connection }
}
