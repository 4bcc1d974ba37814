//! Detection suites, action flags, and training vocabulary.
//!
//! The engine groups its detections into three suites and describes
//! per-suite selections as bit vectors. The `*Set` types here keep those
//! vectors typed on the Rust side; they pack to the native representation
//! with `bits` and unpack with `from_bits`, which silently drops any bit
//! the vendor table does not define.

use serde::{Deserialize, Serialize};

/// Detection suites (`EE_EmotivSuite_enum`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suite {
    /// Facial expression detections.
    Expressiv = 0,
    /// Emotional state detections.
    Affectiv = 1,
    /// Trained mental commands.
    Cognitiv = 2,
}

impl Suite {
    pub const ALL: [Suite; 3] = [Suite::Expressiv, Suite::Affectiv, Suite::Cognitiv];

    /// Native representation.
    pub fn as_raw(self) -> i32 {
        self as i32
    }

    /// Decode a native value.
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(Suite::Expressiv),
            1 => Some(Suite::Affectiv),
            2 => Some(Suite::Cognitiv),
            _ => None,
        }
    }
}

/// Facial expression detections (`EE_ExpressivAlgo_enum`).
///
/// The values are bit flags; several can be combined in an
/// [`ExpressivActionSet`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpressivAction {
    Neutral = 0x0001,
    Blink = 0x0002,
    WinkLeft = 0x0004,
    WinkRight = 0x0008,
    HorizontalEyeMovement = 0x0010,
    EyebrowRaised = 0x0020,
    FurrowedBrow = 0x0040,
    Smile = 0x0080,
    Clench = 0x0100,
    Laugh = 0x0200,
    SmirkLeft = 0x0400,
    SmirkRight = 0x0800,
}

impl ExpressivAction {
    pub const ALL: [ExpressivAction; 12] = [
        ExpressivAction::Neutral,
        ExpressivAction::Blink,
        ExpressivAction::WinkLeft,
        ExpressivAction::WinkRight,
        ExpressivAction::HorizontalEyeMovement,
        ExpressivAction::EyebrowRaised,
        ExpressivAction::FurrowedBrow,
        ExpressivAction::Smile,
        ExpressivAction::Clench,
        ExpressivAction::Laugh,
        ExpressivAction::SmirkLeft,
        ExpressivAction::SmirkRight,
    ];

    /// Native bit flag.
    pub fn as_raw(self) -> u32 {
        self as u32
    }

    /// Decode a single native flag.
    pub fn from_raw(raw: u32) -> Option<Self> {
        Self::ALL.iter().copied().find(|action| action.as_raw() == raw)
    }
}

/// Set of [`ExpressivAction`] flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpressivActionSet(u32);

impl ExpressivActionSet {
    const MASK: u32 = 0x0FFF;

    /// The empty set.
    pub const EMPTY: ExpressivActionSet = ExpressivActionSet(0);

    /// Set containing every Expressiv action.
    pub const ALL: ExpressivActionSet = ExpressivActionSet(Self::MASK);

    pub fn new() -> Self {
        Self::EMPTY
    }

    pub fn insert(&mut self, action: ExpressivAction) {
        self.0 |= action.as_raw();
    }

    pub fn remove(&mut self, action: ExpressivAction) {
        self.0 &= !action.as_raw();
    }

    pub fn contains(&self, action: ExpressivAction) -> bool {
        self.0 & action.as_raw() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Actions in the set, in vendor flag order.
    pub fn iter(&self) -> impl Iterator<Item = ExpressivAction> + '_ {
        ExpressivAction::ALL
            .iter()
            .copied()
            .filter(move |action| self.contains(*action))
    }

    /// Native bit vector.
    pub fn bits(&self) -> u32 {
        self.0
    }

    /// Decode a native bit vector, dropping undefined bits.
    pub fn from_bits(bits: u32) -> Self {
        ExpressivActionSet(bits & Self::MASK)
    }
}

impl FromIterator<ExpressivAction> for ExpressivActionSet {
    fn from_iter<I: IntoIterator<Item = ExpressivAction>>(iter: I) -> Self {
        let mut set = ExpressivActionSet::EMPTY;
        for action in iter {
            set.insert(action);
        }
        set
    }
}

/// Emotional state detections (`EE_AffectivAlgo_enum`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AffectivChannel {
    Excitement = 0x0001,
    Meditation = 0x0002,
    Frustration = 0x0004,
    EngagementBoredom = 0x0008,
}

impl AffectivChannel {
    pub const ALL: [AffectivChannel; 4] = [
        AffectivChannel::Excitement,
        AffectivChannel::Meditation,
        AffectivChannel::Frustration,
        AffectivChannel::EngagementBoredom,
    ];

    /// Native bit flag.
    pub fn as_raw(self) -> u32 {
        self as u32
    }

    /// Decode a single native flag.
    pub fn from_raw(raw: u32) -> Option<Self> {
        Self::ALL.iter().copied().find(|channel| channel.as_raw() == raw)
    }
}

/// Set of [`AffectivChannel`] flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffectivChannelSet(u32);

impl AffectivChannelSet {
    const MASK: u32 = 0x000F;

    /// The empty set.
    pub const EMPTY: AffectivChannelSet = AffectivChannelSet(0);

    /// Set containing every Affectiv channel.
    pub const ALL: AffectivChannelSet = AffectivChannelSet(Self::MASK);

    pub fn new() -> Self {
        Self::EMPTY
    }

    pub fn insert(&mut self, channel: AffectivChannel) {
        self.0 |= channel.as_raw();
    }

    pub fn remove(&mut self, channel: AffectivChannel) {
        self.0 &= !channel.as_raw();
    }

    pub fn contains(&self, channel: AffectivChannel) -> bool {
        self.0 & channel.as_raw() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = AffectivChannel> + '_ {
        AffectivChannel::ALL
            .iter()
            .copied()
            .filter(move |channel| self.contains(*channel))
    }

    /// Native bit vector.
    pub fn bits(&self) -> u32 {
        self.0
    }

    /// Decode a native bit vector, dropping undefined bits.
    pub fn from_bits(bits: u32) -> Self {
        AffectivChannelSet(bits & Self::MASK)
    }
}

impl FromIterator<AffectivChannel> for AffectivChannelSet {
    fn from_iter<I: IntoIterator<Item = AffectivChannel>>(iter: I) -> Self {
        let mut set = AffectivChannelSet::EMPTY;
        for channel in iter {
            set.insert(channel);
        }
        set
    }
}

/// Trained mental commands (`EE_CognitivAction_enum`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CognitivAction {
    Neutral = 0x0001,
    Push = 0x0002,
    Pull = 0x0004,
    Lift = 0x0008,
    Drop = 0x0010,
    Left = 0x0020,
    Right = 0x0040,
    RotateLeft = 0x0080,
    RotateRight = 0x0100,
    RotateClockwise = 0x0200,
    RotateCounterClockwise = 0x0400,
    RotateForwards = 0x0800,
    RotateReverse = 0x1000,
    Disappear = 0x2000,
}

impl CognitivAction {
    pub const ALL: [CognitivAction; 14] = [
        CognitivAction::Neutral,
        CognitivAction::Push,
        CognitivAction::Pull,
        CognitivAction::Lift,
        CognitivAction::Drop,
        CognitivAction::Left,
        CognitivAction::Right,
        CognitivAction::RotateLeft,
        CognitivAction::RotateRight,
        CognitivAction::RotateClockwise,
        CognitivAction::RotateCounterClockwise,
        CognitivAction::RotateForwards,
        CognitivAction::RotateReverse,
        CognitivAction::Disappear,
    ];

    /// Native bit flag.
    pub fn as_raw(self) -> u32 {
        self as u32
    }

    /// Decode a single native flag.
    pub fn from_raw(raw: u32) -> Option<Self> {
        Self::ALL.iter().copied().find(|action| action.as_raw() == raw)
    }
}

/// Set of [`CognitivAction`] flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CognitivActionSet(u32);

impl CognitivActionSet {
    const MASK: u32 = 0x3FFF;

    /// The empty set.
    pub const EMPTY: CognitivActionSet = CognitivActionSet(0);

    /// Set containing every Cognitiv action.
    pub const ALL: CognitivActionSet = CognitivActionSet(Self::MASK);

    pub fn new() -> Self {
        Self::EMPTY
    }

    pub fn insert(&mut self, action: CognitivAction) {
        self.0 |= action.as_raw();
    }

    pub fn remove(&mut self, action: CognitivAction) {
        self.0 &= !action.as_raw();
    }

    pub fn contains(&self, action: CognitivAction) -> bool {
        self.0 & action.as_raw() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = CognitivAction> + '_ {
        CognitivAction::ALL
            .iter()
            .copied()
            .filter(move |action| self.contains(*action))
    }

    /// Native bit vector.
    pub fn bits(&self) -> u32 {
        self.0
    }

    /// Decode a native bit vector, dropping undefined bits.
    pub fn from_bits(bits: u32) -> Self {
        CognitivActionSet(bits & Self::MASK)
    }
}

impl FromIterator<CognitivAction> for CognitivActionSet {
    fn from_iter<I: IntoIterator<Item = CognitivAction>>(iter: I) -> Self {
        let mut set = CognitivActionSet::EMPTY;
        for action in iter {
            set.insert(action);
        }
        set
    }
}

/// A per-suite detection selection.
///
/// The engine's optimization and reset calls take a `(suite, bits)` pair;
/// this type carries the pair with the bits already typed to the suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuiteAlgorithms {
    Expressiv(ExpressivActionSet),
    Affectiv(AffectivChannelSet),
    Cognitiv(CognitivActionSet),
}

impl SuiteAlgorithms {
    /// The suite the selection belongs to.
    pub fn suite(&self) -> Suite {
        match self {
            SuiteAlgorithms::Expressiv(_) => Suite::Expressiv,
            SuiteAlgorithms::Affectiv(_) => Suite::Affectiv,
            SuiteAlgorithms::Cognitiv(_) => Suite::Cognitiv,
        }
    }

    /// Native bit vector.
    pub fn bits(&self) -> u32 {
        match self {
            SuiteAlgorithms::Expressiv(set) => set.bits(),
            SuiteAlgorithms::Affectiv(set) => set.bits(),
            SuiteAlgorithms::Cognitiv(set) => set.bits(),
        }
    }

    /// Decode a native `(suite, bits)` pair.
    pub fn from_bits(suite: Suite, bits: u32) -> Self {
        match suite {
            Suite::Expressiv => SuiteAlgorithms::Expressiv(ExpressivActionSet::from_bits(bits)),
            Suite::Affectiv => SuiteAlgorithms::Affectiv(AffectivChannelSet::from_bits(bits)),
            Suite::Cognitiv => SuiteAlgorithms::Cognitiv(CognitivActionSet::from_bits(bits)),
        }
    }
}

/// Expressiv training controls (`EE_ExpressivTrainingControl_enum`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpressivTrainingControl {
    None = 0,
    /// Begin capturing a training sample.
    Start = 1,
    /// Accept the captured sample into the signature.
    Accept = 2,
    /// Discard the captured sample.
    Reject = 3,
    /// Erase the action's training data.
    Erase = 4,
    /// Reset the action's training state.
    Reset = 5,
}

impl ExpressivTrainingControl {
    pub fn as_raw(self) -> i32 {
        self as i32
    }
}

/// Cognitiv training controls (`EE_CognitivTrainingControl_enum`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CognitivTrainingControl {
    None = 0,
    /// Begin capturing a training sample.
    Start = 1,
    /// Accept the captured sample into the signature.
    Accept = 2,
    /// Discard the captured sample.
    Reject = 3,
    /// Erase the action's training data.
    Erase = 4,
    /// Reset the action's training state.
    Reset = 5,
}

impl CognitivTrainingControl {
    pub fn as_raw(self) -> i32 {
        self as i32
    }
}

/// Expressiv signature selection (`EE_ExpressivSignature_enum`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpressivSignature {
    /// The built-in signature that works without training.
    Universal = 0,
    /// A signature trained for the current user.
    Trained = 1,
}

impl ExpressivSignature {
    pub fn as_raw(self) -> i32 {
        self as i32
    }

    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(ExpressivSignature::Universal),
            1 => Some(ExpressivSignature::Trained),
            _ => None,
        }
    }
}

/// Tunable Expressiv thresholds (`EE_ExpressivThreshold_enum`).
///
/// The vendor header defines a single member; the engine call still takes
/// it as a parameter so new thresholds can appear without an ABI break.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpressivThreshold {
    Sensitivity = 0,
}

impl ExpressivThreshold {
    pub fn as_raw(self) -> i32 {
        self as i32
    }
}
