//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Storage (LocalStorage on web, in-memory elsewhere)
//! - Input events (keyboard/pointer normalized to a single jump trigger)

pub mod input;
pub mod storage;

pub use input::{InputEvent, is_jump};
pub use storage::{MemoryStore, SettingsStore, StoreError};
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStore;
