//! Networking modules for the game push channel.
//!
//! SYSTEM CONTEXT
//! ==============
//! `frame_client` manages the websocket lifecycle, `socket` is the
//! connection-scoped listener/emit handle components talk to, and `types`
//! defines the wire schema.

pub mod frame_client;
pub mod socket;
pub mod types;
