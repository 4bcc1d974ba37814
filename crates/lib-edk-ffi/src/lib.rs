//! # lib-edk-ffi
//!
//! Safe FFI binding to the Emotiv EPOC EmoEngine (`edk`).
//!
//! This crate loads the vendor's closed-source engine library at runtime
//! and wraps its C surface in owned Rust types. It handles:
//!
//! - Dynamic library loading with `libloading`, resolving every export up
//!   front
//! - Connection lifecycle against a headset, the Control Panel, or the
//!   EmoComposer emulator
//! - Event polling and EmoState snapshot reads across the Expressiv,
//!   Affectiv, and Cognitiv suites
//! - Profile transfer, training control, and detection optimization
//! - Handle ownership so engine allocations are freed exactly once
//!
//! # Safety
//!
//! The engine is a trusted but opaque vendor binary with no internal
//! locking. The binding keeps the unsafety at the edges:
//!
//! 1. **Typed exports**: every symbol is resolved into a typed function
//!    pointer at load time; a missing export fails the load, not the
//!    first call
//! 2. **Owned handles**: engine allocations live inside [`EventHandle`],
//!    [`StateHandle`], and [`OptimizationParams`], each freed on drop
//! 3. **Thread confinement**: [`EngineSession`] and the handles are
//!    `!Sync`, matching the engine's single-caller contract
//! 4. **Status mapping**: every native status code is checked and mapped
//!    onto [`EngineError`] before a result reaches the caller

pub mod abi;
pub mod error;
pub mod handles;
pub mod loader;
pub mod session;
pub mod state;

#[cfg(test)]
mod mock;

pub use error::{EngineError, EngineResult};
pub use handles::{EventHandle, OptimizationParams, StateHandle};
pub use loader::{default_library_name, EdkLibrary};
pub use session::{
    ConnectTarget, EngineSession, CONTROL_PANEL_PORT, DIAGNOSTICS_LOG_PATH, EMOCOMPOSER_PORT,
};
