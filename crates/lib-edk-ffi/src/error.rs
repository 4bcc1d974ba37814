//! Error types for EmoEngine operations.

use lib_edk_types::status;
use thiserror::Error;

/// Errors that can occur while loading or driving the EmoEngine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Failed to load the vendor shared library.
    #[error("Failed to load engine library '{path}': {source}")]
    LoadError {
        path: String,
        #[source]
        source: libloading::Error,
    },

    /// A required export was missing from the vendor library.
    #[error("Symbol '{symbol}' not found in engine library")]
    SymbolNotFound { symbol: String },

    /// The engine allocated no storage for a handle.
    #[error("Engine returned a null {kind} handle")]
    NullHandle { kind: &'static str },

    /// No engine endpoint was reachable, or the connect was refused.
    #[error("Engine unavailable at {target} ({code:#06x})")]
    EngineUnavailable { target: String, code: i32 },

    /// A second connect was attempted on a live session.
    #[error("Session is already connected")]
    AlreadyConnected,

    /// No event was waiting in the engine queue.
    #[error("No engine event pending")]
    NoEventPending,

    /// The engine rejected a parameter, or a value could not cross the C
    /// boundary.
    #[error("Invalid parameter: {reason}")]
    InvalidParameter { reason: String },

    /// A buffer was smaller than the engine required.
    #[error("Buffer too small for engine reply")]
    BufferTooSmall,

    /// An engine call was made before a successful connect.
    #[error("Engine is not initialized; connect first")]
    EngineUninitialized,

    /// The connection to the engine was lost.
    #[error("Engine connection lost")]
    EngineDisconnected,

    /// The engine does not know the given user id.
    #[error("Engine rejected the user id")]
    InvalidUser,

    /// The gyro was queried before hardware calibration.
    #[error("Headset hardware is not calibrated")]
    HardwareNotCalibrated,

    /// The engine replied with a value outside its own enumeration.
    #[error("Engine reply out of range for {what}: {raw}")]
    UnexpectedReply { what: &'static str, raw: i64 },

    /// An export this binding deliberately refuses to drive.
    #[error("Operation '{operation}' is not implemented by this binding")]
    NotImplemented { operation: &'static str },

    /// Any native status code without a dedicated variant.
    #[error("Engine returned {}", format_code(.code))]
    UnknownEngineError { code: i32 },
}

fn format_code(code: &i32) -> String {
    match status::status_name(*code) {
        Some(name) => format!("{name} ({code:#06x})"),
        None => format!("unexpected code {code:#06x}"),
    }
}

impl EngineError {
    pub(crate) fn load_error(path: &str, source: libloading::Error) -> Self {
        EngineError::LoadError {
            path: path.to_string(),
            source,
        }
    }

    pub(crate) fn symbol_not_found(symbol: &str) -> Self {
        EngineError::SymbolNotFound {
            symbol: symbol.to_string(),
        }
    }

    pub(crate) fn engine_unavailable(target: impl Into<String>, code: i32) -> Self {
        EngineError::EngineUnavailable {
            target: target.into(),
            code,
        }
    }

    pub(crate) fn invalid_parameter(reason: impl Into<String>) -> Self {
        EngineError::InvalidParameter {
            reason: reason.into(),
        }
    }

    pub(crate) fn not_implemented(operation: &'static str) -> Self {
        EngineError::NotImplemented { operation }
    }

    /// Map a native status code onto an error. `EDK_OK` maps to `None`.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            status::EDK_OK => None,
            status::EDK_NO_EVENT => Some(EngineError::NoEventPending),
            status::EDK_BUFFER_TOO_SMALL => Some(EngineError::BufferTooSmall),
            status::EDK_INVALID_PARAMETER | status::EDK_OUT_OF_RANGE => {
                Some(EngineError::invalid_parameter(
                    status::status_name(code).unwrap_or("rejected by the engine"),
                ))
            }
            status::EDK_INVALID_USER_ID => Some(EngineError::InvalidUser),
            status::EDK_EMOENGINE_UNINITIALIZED => Some(EngineError::EngineUninitialized),
            status::EDK_EMOENGINE_DISCONNECTED => Some(EngineError::EngineDisconnected),
            status::EDK_GYRO_NOT_CALIBRATED => Some(EngineError::HardwareNotCalibrated),
            other => Some(EngineError::UnknownEngineError { code: other }),
        }
    }

    /// Whether the session stays usable after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            EngineError::NoEventPending
                | EngineError::BufferTooSmall
                | EngineError::InvalidParameter { .. }
                | EngineError::InvalidUser
                | EngineError::HardwareNotCalibrated
        )
    }

    /// Whether the session must reconnect (or reload) before continuing.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            EngineError::LoadError { .. }
                | EngineError::SymbolNotFound { .. }
                | EngineError::EngineUnavailable { .. }
                | EngineError::EngineUninitialized
                | EngineError::EngineDisconnected
        )
    }
}

/// Result alias used throughout the crate.
pub type EngineResult<T> = Result<T, EngineError>;

/// Convert a native status code into a result.
pub fn check(code: i32) -> EngineResult<()> {
    match EngineError::from_code(code) {
        None => Ok(()),
        Some(err) => Err(err),
    }
}
