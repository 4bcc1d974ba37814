//! Owned engine handles.
//!
//! The engine allocates three kinds of opaque storage: event handles,
//! EmoState handles, and optimization parameter blocks. Each wrapper here
//! owns exactly one allocation and releases it in `Drop`, so a handle is
//! freed exactly once and can never be used after the free.
//!
//! All three types hold a raw engine pointer and are therefore neither
//! `Send` nor `Sync`: the engine API is not thread-safe, and a handle
//! stays with the thread that created it.

use crate::error::{EngineError, EngineResult};
use crate::loader::EdkLibrary;
use std::ffi::c_void;
use std::sync::Arc;

/// Reusable storage for polled engine events.
///
/// Created through [`crate::session::EngineSession::create_event_handle`];
/// each successful poll rewrites the contents in place.
#[derive(Debug)]
pub struct EventHandle {
    pub(crate) raw: *mut c_void,
    pub(crate) library: Arc<EdkLibrary>,
}

impl EventHandle {
    pub(crate) fn create(library: Arc<EdkLibrary>) -> EngineResult<Self> {
        let raw = unsafe { (library.api().event_create)() };
        if raw.is_null() {
            return Err(EngineError::NullHandle { kind: "event" });
        }
        Ok(EventHandle { raw, library })
    }

    /// Allocate through the profile-specific constructor. The vendor
    /// recommends a dedicated handle for profile transfers.
    pub(crate) fn create_for_profile(library: Arc<EdkLibrary>) -> EngineResult<Self> {
        let raw = unsafe { (library.api().profile_event_create)() };
        if raw.is_null() {
            return Err(EngineError::NullHandle { kind: "profile event" });
        }
        Ok(EventHandle { raw, library })
    }

    /// Release the handle now. Dropping it does the same; this form just
    /// makes the release point explicit.
    pub fn free(self) {}
}

impl Drop for EventHandle {
    fn drop(&mut self) {
        unsafe { (self.library.api().event_free)(self.raw) };
        tracing::trace!(handle = ?self.raw, "Freed engine event handle");
    }
}

/// Owned EmoState snapshot storage.
///
/// A fresh handle reads as the engine's neutral state; field accessors
/// live in [`crate::state`].
#[derive(Debug)]
pub struct StateHandle {
    pub(crate) raw: *mut c_void,
    pub(crate) library: Arc<EdkLibrary>,
}

impl StateHandle {
    pub(crate) fn create(library: Arc<EdkLibrary>) -> EngineResult<Self> {
        let raw = unsafe { (library.api().state_create)() };
        if raw.is_null() {
            return Err(EngineError::NullHandle { kind: "state" });
        }
        // Start from the engine's neutral state rather than whatever the
        // allocator left behind.
        unsafe { (library.api().state_init)(raw) };
        Ok(StateHandle { raw, library })
    }

    /// Release the handle now. Dropping it does the same; this form just
    /// makes the release point explicit.
    pub fn free(self) {}
}

impl Drop for StateHandle {
    fn drop(&mut self) {
        unsafe { (self.library.api().state_free)(self.raw) };
        tracing::trace!(handle = ?self.raw, "Freed engine state handle");
    }
}

/// Owned optimization parameter block.
///
/// Carries the per-suite vital-algorithm selection handed to
/// [`crate::session::EngineSession::enable_optimization`].
#[derive(Debug)]
pub struct OptimizationParams {
    pub(crate) raw: *mut c_void,
    pub(crate) library: Arc<EdkLibrary>,
}

impl OptimizationParams {
    pub(crate) fn create(library: Arc<EdkLibrary>) -> EngineResult<Self> {
        let raw = unsafe { (library.api().optimization_param_create)() };
        if raw.is_null() {
            return Err(EngineError::NullHandle {
                kind: "optimization parameter",
            });
        }
        Ok(OptimizationParams { raw, library })
    }

    /// Release the handle now. Dropping it does the same; this form just
    /// makes the release point explicit.
    pub fn free(self) {}
}

impl Drop for OptimizationParams {
    fn drop(&mut self) {
        unsafe { (self.library.api().optimization_param_free)(self.raw) };
        tracing::trace!(handle = ?self.raw, "Freed optimization parameter handle");
    }
}
