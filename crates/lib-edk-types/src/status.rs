//! Native status codes.
//!
//! Every EmoEngine call reports its outcome as one of these codes. The
//! values mirror the vendor's `edkErrorCode.h` and must stay bit-exact;
//! `lib-edk-ffi` maps them onto a typed error enum at the boundary.

/// Operation completed successfully.
pub const EDK_OK: i32 = 0x0000;

/// Internal engine failure with no further detail.
pub const EDK_UNKNOWN_ERROR: i32 = 0x0001;

/// A supplied profile archive could not be parsed.
pub const EDK_INVALID_PROFILE_ARCHIVE: i32 = 0x0101;

/// No user is attached to the base profile.
pub const EDK_NO_USER_FOR_BASEPROFILE: i32 = 0x0102;

/// The engine could not acquire data from the headset.
pub const EDK_CANNOT_ACQUIRE_DATA: i32 = 0x0200;

/// A caller-supplied buffer was too small for the reply.
pub const EDK_BUFFER_TOO_SMALL: i32 = 0x0300;

/// A parameter was outside its accepted range.
pub const EDK_OUT_OF_RANGE: i32 = 0x0301;

/// A parameter was rejected outright.
pub const EDK_INVALID_PARAMETER: i32 = 0x0302;

/// The parameter is currently locked and cannot be changed.
pub const EDK_PARAMETER_LOCKED: i32 = 0x0303;

/// The requested Cognitiv action is not a valid training target.
pub const EDK_COG_INVALID_TRAINING_ACTION: i32 = 0x0304;

/// The requested Cognitiv training control is invalid right now.
pub const EDK_COG_INVALID_TRAINING_CONTROL: i32 = 0x0305;

/// An action in the active-action set is invalid.
pub const EDK_COG_INVALID_ACTIVE_ACTION: i32 = 0x0306;

/// The active-action set exceeds the engine's maximum.
pub const EDK_COG_EXCESS_MAX_ACTIONS: i32 = 0x0307;

/// No trained Expressiv signature is available.
pub const EDK_EXP_NO_SIG_AVAILABLE: i32 = 0x0308;

/// A filesystem operation failed inside the engine.
pub const EDK_FILESYSTEM_ERROR: i32 = 0x0309;

/// The given user id is not known to the engine.
pub const EDK_INVALID_USER_ID: i32 = 0x0400;

/// The engine has not been initialized by a connect.
pub const EDK_EMOENGINE_UNINITIALIZED: i32 = 0x0500;

/// The connection to the engine was lost.
pub const EDK_EMOENGINE_DISCONNECTED: i32 = 0x0501;

/// The engine proxy reported a communication failure.
pub const EDK_EMOENGINE_PROXY_ERROR: i32 = 0x0502;

/// No event was waiting in the queue.
pub const EDK_NO_EVENT: i32 = 0x0600;

/// The gyro has not been calibrated yet.
pub const EDK_GYRO_NOT_CALIBRATED: i32 = 0x0700;

/// The operation is unavailable while detection optimization is on.
pub const EDK_OPTIMIZATION_IS_ON: i32 = 0x0800;

/// Reserved by the vendor.
pub const EDK_RESERVED1: i32 = 0x0900;

/// Every known status code paired with its vendor name.
pub const STATUS_CODES: [(i32, &str); 23] = [
    (EDK_OK, "EDK_OK"),
    (EDK_UNKNOWN_ERROR, "EDK_UNKNOWN_ERROR"),
    (EDK_INVALID_PROFILE_ARCHIVE, "EDK_INVALID_PROFILE_ARCHIVE"),
    (EDK_NO_USER_FOR_BASEPROFILE, "EDK_NO_USER_FOR_BASEPROFILE"),
    (EDK_CANNOT_ACQUIRE_DATA, "EDK_CANNOT_ACQUIRE_DATA"),
    (EDK_BUFFER_TOO_SMALL, "EDK_BUFFER_TOO_SMALL"),
    (EDK_OUT_OF_RANGE, "EDK_OUT_OF_RANGE"),
    (EDK_INVALID_PARAMETER, "EDK_INVALID_PARAMETER"),
    (EDK_PARAMETER_LOCKED, "EDK_PARAMETER_LOCKED"),
    (EDK_COG_INVALID_TRAINING_ACTION, "EDK_COG_INVALID_TRAINING_ACTION"),
    (EDK_COG_INVALID_TRAINING_CONTROL, "EDK_COG_INVALID_TRAINING_CONTROL"),
    (EDK_COG_INVALID_ACTIVE_ACTION, "EDK_COG_INVALID_ACTIVE_ACTION"),
    (EDK_COG_EXCESS_MAX_ACTIONS, "EDK_COG_EXCESS_MAX_ACTIONS"),
    (EDK_EXP_NO_SIG_AVAILABLE, "EDK_EXP_NO_SIG_AVAILABLE"),
    (EDK_FILESYSTEM_ERROR, "EDK_FILESYSTEM_ERROR"),
    (EDK_INVALID_USER_ID, "EDK_INVALID_USER_ID"),
    (EDK_EMOENGINE_UNINITIALIZED, "EDK_EMOENGINE_UNINITIALIZED"),
    (EDK_EMOENGINE_DISCONNECTED, "EDK_EMOENGINE_DISCONNECTED"),
    (EDK_EMOENGINE_PROXY_ERROR, "EDK_EMOENGINE_PROXY_ERROR"),
    (EDK_NO_EVENT, "EDK_NO_EVENT"),
    (EDK_GYRO_NOT_CALIBRATED, "EDK_GYRO_NOT_CALIBRATED"),
    (EDK_OPTIMIZATION_IS_ON, "EDK_OPTIMIZATION_IS_ON"),
    (EDK_RESERVED1, "EDK_RESERVED1"),
];

/// Vendor name of a status code, if the code is known.
pub fn status_name(code: i32) -> Option<&'static str> {
    STATUS_CODES
        .iter()
        .find(|(value, _)| *value == code)
        .map(|(_, name)| *name)
}
