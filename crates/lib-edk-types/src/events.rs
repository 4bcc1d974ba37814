//! Engine event vocabulary.
//!
//! The engine communicates asynchronously through a polled event queue.
//! Top-level events carry a kind from [`EventKind`]; training progress for
//! the Expressiv and Cognitiv suites arrives as sub-events queried off the
//! same handle.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one of the users (headsets) the engine tracks.
///
/// The engine assigns ids when it reports [`EventKind::UserAdded`]; a
/// single-headset setup always sees user 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(pub u32);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Top-level engine event kinds (`EE_Event_enum`).
///
/// The values are bit flags so the queue-clearing call can name several
/// kinds at once. A handle that has never been populated by a poll reads
/// back as [`EventKind::Unknown`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// No event, or a handle no poll has populated yet.
    Unknown = 0x0000,
    /// The EmoComposer emulator reported an error.
    EmulatorError = 0x0001,
    /// Reserved by the vendor.
    Reserved = 0x0002,
    /// A user was connected.
    UserAdded = 0x0010,
    /// A user was disconnected.
    UserRemoved = 0x0020,
    /// A fresh emotional-state snapshot is available.
    EmoStateUpdated = 0x0040,
    /// A profile operation completed; the event carries the profile bytes.
    ProfileEvent = 0x0080,
    /// Cognitiv-suite training progress; see [`CognitivEvent`].
    CognitivEvent = 0x0100,
    /// Expressiv-suite training progress; see [`ExpressivEvent`].
    ExpressivEvent = 0x0200,
    /// The engine's internal state changed.
    InternalStateChanged = 0x0400,
}

impl EventKind {
    /// Every kind the engine can deliver, in vendor order.
    pub const ALL: [EventKind; 10] = [
        EventKind::Unknown,
        EventKind::EmulatorError,
        EventKind::Reserved,
        EventKind::UserAdded,
        EventKind::UserRemoved,
        EventKind::EmoStateUpdated,
        EventKind::ProfileEvent,
        EventKind::CognitivEvent,
        EventKind::ExpressivEvent,
        EventKind::InternalStateChanged,
    ];

    /// Native representation.
    pub fn as_raw(self) -> i32 {
        self as i32
    }

    /// Decode a native value. Anything outside the vendor table reads as
    /// [`EventKind::Unknown`].
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            0x0001 => EventKind::EmulatorError,
            0x0002 => EventKind::Reserved,
            0x0010 => EventKind::UserAdded,
            0x0020 => EventKind::UserRemoved,
            0x0040 => EventKind::EmoStateUpdated,
            0x0080 => EventKind::ProfileEvent,
            0x0100 => EventKind::CognitivEvent,
            0x0200 => EventKind::ExpressivEvent,
            0x0400 => EventKind::InternalStateChanged,
            _ => EventKind::Unknown,
        }
    }
}

/// Expressiv training sub-events (`EE_ExpressivEvent_enum`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpressivEvent {
    /// No Expressiv sub-event is attached.
    NoEvent = 0,
    /// A training run started.
    TrainingStarted = 1,
    /// The training run captured a usable sample.
    TrainingSucceeded = 2,
    /// The training run failed to capture a sample.
    TrainingFailed = 3,
    /// The captured sample was accepted into the signature.
    TrainingCompleted = 4,
    /// Training data for the action was erased.
    TrainingDataErased = 5,
    /// The captured sample was rejected.
    TrainingRejected = 6,
    /// The action's training was reset.
    TrainingReset = 7,
}

impl ExpressivEvent {
    pub fn as_raw(self) -> i32 {
        self as i32
    }

    /// Decode a native value; out-of-table values read as
    /// [`ExpressivEvent::NoEvent`].
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            1 => ExpressivEvent::TrainingStarted,
            2 => ExpressivEvent::TrainingSucceeded,
            3 => ExpressivEvent::TrainingFailed,
            4 => ExpressivEvent::TrainingCompleted,
            5 => ExpressivEvent::TrainingDataErased,
            6 => ExpressivEvent::TrainingRejected,
            7 => ExpressivEvent::TrainingReset,
            _ => ExpressivEvent::NoEvent,
        }
    }
}

/// Cognitiv training sub-events (`EE_CognitivEvent_enum`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CognitivEvent {
    /// No Cognitiv sub-event is attached.
    NoEvent = 0,
    /// A training run started.
    TrainingStarted = 1,
    /// The training run captured a usable sample.
    TrainingSucceeded = 2,
    /// The training run failed to capture a sample.
    TrainingFailed = 3,
    /// The captured sample was accepted into the signature.
    TrainingCompleted = 4,
    /// Training data for the action was erased.
    TrainingDataErased = 5,
    /// The captured sample was rejected.
    TrainingRejected = 6,
    /// The action's training was reset.
    TrainingReset = 7,
    /// Automatic neutral sampling finished.
    AutoSamplingNeutralCompleted = 8,
    /// The trained signature was rebuilt.
    SignatureUpdated = 9,
}

impl CognitivEvent {
    pub fn as_raw(self) -> i32 {
        self as i32
    }

    /// Decode a native value; out-of-table values read as
    /// [`CognitivEvent::NoEvent`].
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            1 => CognitivEvent::TrainingStarted,
            2 => CognitivEvent::TrainingSucceeded,
            3 => CognitivEvent::TrainingFailed,
            4 => CognitivEvent::TrainingCompleted,
            5 => CognitivEvent::TrainingDataErased,
            6 => CognitivEvent::TrainingRejected,
            7 => CognitivEvent::TrainingReset,
            8 => CognitivEvent::AutoSamplingNeutralCompleted,
            9 => CognitivEvent::SignatureUpdated,
            _ => CognitivEvent::NoEvent,
        }
    }
}
