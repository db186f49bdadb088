//! Query interface to the external rules engine.
//!
//! The engine is owned by the caller (for example a JS chess library bound
//! through `wasm-bindgen`, or a native move generator). This crate only asks
//! it for the legal moves from one square and never decides legality itself.

#[cfg(test)]
#[path = "rules_test.rs"]
mod rules_test;

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::square::Square;

/// Error returned by a rules-engine query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RulesError {
    /// The engine has no position loaded yet.
    #[error("rules engine is not ready")]
    NotReady,
    /// The engine rejected the origin square.
    #[error("invalid square: {0}")]
    InvalidSquare(String),
    /// Any other engine-side failure.
    #[error("rules engine failure: {0}")]
    Engine(String),
}

/// One legal move as reported by the engine.
///
/// Only the destination is read; other fields of a verbose engine move
/// (`san`, `flags`, `captured`, ...) are ignored on deserialize.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveDescriptor {
    pub to: Square,
}

impl MoveDescriptor {
    /// Descriptor for a move ending on `to`.
    #[must_use]
    pub fn to(to: Square) -> Self {
        Self { to }
    }
}

/// Legal-move query contract.
pub trait RulesEngine {
    /// Legal moves starting on `square`. `verbose` asks for full descriptors.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError`] when the engine cannot answer for this square.
    fn moves(&self, square: Square, verbose: bool) -> Result<Vec<MoveDescriptor>, RulesError>;
}

/// Shared handle to the caller's engine, passed to the board as a prop.
#[derive(Clone)]
pub struct RulesHandle(Arc<dyn RulesEngine + Send + Sync>);

impl RulesHandle {
    pub fn new(engine: impl RulesEngine + Send + Sync + 'static) -> Self {
        Self(Arc::new(engine))
    }

    #[must_use]
    pub fn engine(&self) -> &(dyn RulesEngine + Send + Sync) {
        self.0.as_ref()
    }
}

impl fmt::Debug for RulesHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RulesHandle(..)")
    }
}

/// Handles compare by identity so a memo only re-runs when the engine is swapped.
impl PartialEq for RulesHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}
