//! # lib-edk-types
//!
//! Core type definitions shared across the EmoEngine binding workspace.
//!
//! The EmoEngine is a closed-source C library that reports everything
//! through integer codes, enum values, and bit vectors. This crate keeps
//! the vendor's numeric vocabulary in one place and gives each piece a
//! typed Rust counterpart:
//!
//! - [`status`]: native status codes returned by every engine call
//! - [`events`]: engine event kinds and per-suite training events
//! - [`detection`]: detection suites, their action flags, and training
//!   controls
//! - [`headset`]: channels, contact quality, versions, and battery state
//!
//! Raw values cross the FFI boundary in `lib-edk-ffi`; everything above
//! that boundary uses the types defined here.

pub mod detection;
pub mod events;
pub mod headset;
pub mod status;

pub use detection::{
    AffectivChannel, AffectivChannelSet, CognitivAction, CognitivActionSet,
    CognitivTrainingControl, ExpressivAction, ExpressivActionSet, ExpressivSignature,
    ExpressivThreshold, ExpressivTrainingControl, Suite, SuiteAlgorithms,
};
pub use events::{CognitivEvent, EventKind, ExpressivEvent, UserId};
pub use headset::{
    BatteryCharge, ContactQuality, HardwareVersion, InputChannel, SensorDescriptor,
    SoftwareVersion, WirelessSignal,
};
