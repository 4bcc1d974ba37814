//! Headset-facing value types.
//!
//! Everything here describes the physical device: electrode channels and
//! their contact quality, the wireless link to the dongle, battery state,
//! and hardware and software revisions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Radio link quality between headset and USB dongle
/// (`EE_SignalStrength_enum`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WirelessSignal {
    NoSignal = 0,
    Bad = 1,
    Good = 2,
}

impl WirelessSignal {
    pub fn as_raw(self) -> i32 {
        self as i32
    }

    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(WirelessSignal::NoSignal),
            1 => Some(WirelessSignal::Bad),
            2 => Some(WirelessSignal::Good),
            _ => None,
        }
    }
}

/// Electrode contact quality (`EE_EEG_ContactQuality_enum`).
///
/// Distinct from [`WirelessSignal`]: this grades the skin contact of one
/// electrode, not the radio link. The vendor header skips the value 2.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContactQuality {
    NoSignal = 0,
    VeryBad = 1,
    Poor = 3,
    Fair = 4,
    Good = 5,
}

impl ContactQuality {
    pub fn as_raw(self) -> i32 {
        self as i32
    }

    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(ContactQuality::NoSignal),
            1 => Some(ContactQuality::VeryBad),
            3 => Some(ContactQuality::Poor),
            4 => Some(ContactQuality::Fair),
            5 => Some(ContactQuality::Good),
            _ => None,
        }
    }
}

/// Headset input channels (`EE_InputChannels_enum`).
///
/// The first two entries are the reference and driven-right-leg
/// electrodes; the rest follow the 10-20 electrode naming.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputChannel {
    Cms = 0,
    Drl = 1,
    Fp1 = 2,
    Af3 = 3,
    F7 = 4,
    F3 = 5,
    Fc5 = 6,
    T7 = 7,
    P7 = 8,
    O1 = 9,
    O2 = 10,
    P8 = 11,
    T8 = 12,
    Fc6 = 13,
    F4 = 14,
    F8 = 15,
    Af4 = 16,
    Fp2 = 17,
}

impl InputChannel {
    /// Every channel, in vendor index order.
    pub const ALL: [InputChannel; 18] = [
        InputChannel::Cms,
        InputChannel::Drl,
        InputChannel::Fp1,
        InputChannel::Af3,
        InputChannel::F7,
        InputChannel::F3,
        InputChannel::Fc5,
        InputChannel::T7,
        InputChannel::P7,
        InputChannel::O1,
        InputChannel::O2,
        InputChannel::P8,
        InputChannel::T8,
        InputChannel::Fc6,
        InputChannel::F4,
        InputChannel::F8,
        InputChannel::Af4,
        InputChannel::Fp2,
    ];

    /// Native representation.
    pub fn as_raw(self) -> i32 {
        self as i32
    }

    /// Decode a native value.
    pub fn from_raw(raw: i32) -> Option<Self> {
        Self::ALL.get(usize::try_from(raw).ok()?).copied()
    }

    /// Conventional electrode label.
    pub fn label(self) -> &'static str {
        match self {
            InputChannel::Cms => "CMS",
            InputChannel::Drl => "DRL",
            InputChannel::Fp1 => "FP1",
            InputChannel::Af3 => "AF3",
            InputChannel::F7 => "F7",
            InputChannel::F3 => "F3",
            InputChannel::Fc5 => "FC5",
            InputChannel::T7 => "T7",
            InputChannel::P7 => "P7",
            InputChannel::O1 => "O1",
            InputChannel::O2 => "O2",
            InputChannel::P8 => "P8",
            InputChannel::T8 => "T8",
            InputChannel::Fc6 => "FC6",
            InputChannel::F4 => "F4",
            InputChannel::F8 => "F8",
            InputChannel::Af4 => "AF4",
            InputChannel::Fp2 => "FP2",
        }
    }
}

impl fmt::Display for InputChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Physical placement of one input sensor.
///
/// Built from the engine's `InputSensorDescriptor_t`; the label is copied
/// out of engine memory at query time so the value owns all its data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SensorDescriptor {
    /// Channel the descriptor belongs to.
    pub channel: InputChannel,

    /// Whether the sensor exists on this headset model.
    pub exists: bool,

    /// Electrode label as reported by the engine.
    pub label: String,

    /// X coordinate, from the center of the head towards the nose.
    pub x: f64,

    /// Y coordinate, from the center of the head towards the left ear.
    pub y: f64,

    /// Z coordinate, from the center of the head towards the top of the
    /// skull.
    pub z: f64,
}

/// Headset and dongle hardware revisions.
///
/// The engine packs both into one 32-bit value: headset in the high word,
/// dongle in the low word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HardwareVersion {
    pub headset: u16,
    pub dongle: u16,
}

impl HardwareVersion {
    /// Unpack the engine's combined representation.
    pub fn from_packed(raw: u32) -> Self {
        HardwareVersion {
            headset: (raw >> 16) as u16,
            dongle: raw as u16,
        }
    }
}

impl fmt::Display for HardwareVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "headset {:#06x}, dongle {:#06x}",
            self.headset, self.dongle
        )
    }
}

/// Engine software version.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoftwareVersion {
    /// Dotted version string, at most 15 characters.
    pub version: String,

    /// Build number.
    pub build: u32,
}

impl fmt::Display for SoftwareVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} build {}", self.version, self.build)
    }
}

/// Battery charge reading from an emotional-state snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatteryCharge {
    /// Current charge level.
    pub level: i32,

    /// Maximum level this hardware reports.
    pub max_level: i32,
}
