//! EmoState field accessors.
//!
//! An EmoState is an opaque snapshot of everything the engine detected at
//! one instant: headset health, the three detection suites, and the
//! capture timestamp. The accessors here read single fields out of a
//! [`StateHandle`]; a freshly created handle reads as the engine's
//! neutral state until [`crate::session::EngineSession::copy_state_from_event`]
//! overwrites it.
//!
//! Enumerations with no idle value (wireless signal, contact quality)
//! decode strictly: an out-of-table reply surfaces as an error instead of
//! being misread. The detection-suite actions fall back to their
//! `Neutral` variant, so an unknown reply reads as idle. Plain numeric
//! and boolean fields read infallibly, matching the native calls.

use crate::abi::EdkApi;
use crate::error::{EngineError, EngineResult};
use crate::handles::StateHandle;
use lib_edk_types::{
    AffectivChannel, BatteryCharge, CognitivAction, ContactQuality, ExpressivAction, InputChannel,
    WirelessSignal,
};
use std::ffi::{c_float, c_int};

impl StateHandle {
    fn api(&self) -> &EdkApi {
        self.library.api()
    }

    // ---- engine-level fields ----

    /// Seconds since the engine session started, at capture time.
    pub fn time_from_start(&self) -> f32 {
        unsafe { (self.api().get_time_from_start)(self.raw) }
    }

    /// Whether the headset was on the user's head.
    pub fn headset_on(&self) -> bool {
        unsafe { (self.api().get_headset_on)(self.raw) != 0 }
    }

    /// Radio link quality between headset and dongle.
    pub fn wireless_signal(&self) -> EngineResult<WirelessSignal> {
        let raw = unsafe { (self.api().get_wireless_signal_status)(self.raw) };
        WirelessSignal::from_raw(raw).ok_or(EngineError::UnexpectedReply {
            what: "wireless signal",
            raw: raw as i64,
        })
    }

    /// Battery level and the maximum the hardware reports.
    pub fn battery_charge(&self) -> BatteryCharge {
        let mut level: c_int = 0;
        let mut max_level: c_int = 0;
        unsafe { (self.api().get_battery_charge_level)(self.raw, &mut level, &mut max_level) };
        BatteryCharge { level, max_level }
    }

    /// Number of electrodes with contact quality readings.
    pub fn contact_quality_channel_count(&self) -> usize {
        let count = unsafe { (self.api().get_num_contact_quality_channels)(self.raw) };
        count.max(0) as usize
    }

    /// Electrode contact quality on one channel.
    pub fn contact_quality(&self, channel: InputChannel) -> EngineResult<ContactQuality> {
        let raw = unsafe { (self.api().get_contact_quality)(self.raw, channel.as_raw()) };
        ContactQuality::from_raw(raw).ok_or(EngineError::UnexpectedReply {
            what: "contact quality",
            raw: raw as i64,
        })
    }

    /// Contact quality for every channel at once.
    ///
    /// The vendor export for bulk readout takes an output array whose
    /// allocation contract the header never documents, so the binding
    /// refuses to guess and reports [`EngineError::NotImplemented`]. The
    /// native library is not called. Query channels one at a time with
    /// [`contact_quality`](Self::contact_quality) instead.
    pub fn contact_quality_all(&self) -> EngineResult<Vec<ContactQuality>> {
        Err(EngineError::NotImplemented {
            operation: "ES_GetContactQualityFromAllChannels",
        })
    }

    // ---- Expressiv suite ----

    /// Whether a blink was detected in this snapshot.
    pub fn blink(&self) -> bool {
        unsafe { (self.api().expressiv_is_blink)(self.raw) != 0 }
    }

    pub fn left_wink(&self) -> bool {
        unsafe { (self.api().expressiv_is_left_wink)(self.raw) != 0 }
    }

    pub fn right_wink(&self) -> bool {
        unsafe { (self.api().expressiv_is_right_wink)(self.raw) != 0 }
    }

    pub fn eyes_open(&self) -> bool {
        unsafe { (self.api().expressiv_is_eyes_open)(self.raw) != 0 }
    }

    pub fn looking_up(&self) -> bool {
        unsafe { (self.api().expressiv_is_looking_up)(self.raw) != 0 }
    }

    pub fn looking_down(&self) -> bool {
        unsafe { (self.api().expressiv_is_looking_down)(self.raw) != 0 }
    }

    pub fn looking_left(&self) -> bool {
        unsafe { (self.api().expressiv_is_looking_left)(self.raw) != 0 }
    }

    pub fn looking_right(&self) -> bool {
        unsafe { (self.api().expressiv_is_looking_right)(self.raw) != 0 }
    }

    /// Eyelid openness as `(left, right)`, each 0.0 closed to 1.0 open.
    pub fn eyelid_state(&self) -> (f32, f32) {
        let mut left: c_float = 0.0;
        let mut right: c_float = 0.0;
        unsafe { (self.api().expressiv_get_eyelid_state)(self.raw, &mut left, &mut right) };
        (left, right)
    }

    /// Eye position as `(x, y)` relative to looking straight ahead.
    pub fn eye_location(&self) -> (f32, f32) {
        let mut x: c_float = 0.0;
        let mut y: c_float = 0.0;
        unsafe { (self.api().expressiv_get_eye_location)(self.raw, &mut x, &mut y) };
        (x, y)
    }

    /// Detected upper-face action. An idle face reads as
    /// [`ExpressivAction::Neutral`].
    pub fn upper_face_action(&self) -> ExpressivAction {
        let raw = unsafe { (self.api().expressiv_get_upper_face_action)(self.raw) };
        ExpressivAction::from_raw(raw as u32).unwrap_or(ExpressivAction::Neutral)
    }

    /// Strength of the upper-face action, 0.0 to 1.0.
    pub fn upper_face_action_power(&self) -> f32 {
        unsafe { (self.api().expressiv_get_upper_face_action_power)(self.raw) }
    }

    /// Detected lower-face action. An idle face reads as
    /// [`ExpressivAction::Neutral`].
    pub fn lower_face_action(&self) -> ExpressivAction {
        let raw = unsafe { (self.api().expressiv_get_lower_face_action)(self.raw) };
        ExpressivAction::from_raw(raw as u32).unwrap_or(ExpressivAction::Neutral)
    }

    /// Strength of the lower-face action, 0.0 to 1.0.
    pub fn lower_face_action_power(&self) -> f32 {
        unsafe { (self.api().expressiv_get_lower_face_action_power)(self.raw) }
    }

    /// Whether one specific Expressiv detection fired in this snapshot.
    pub fn expressiv_active(&self, action: ExpressivAction) -> bool {
        unsafe { (self.api().expressiv_is_active)(self.raw, action.as_raw() as c_int) != 0 }
    }

    /// Eyebrow raise extent. Kept for older engine builds; newer builds
    /// report the same information through
    /// [`upper_face_action_power`](Self::upper_face_action_power).
    pub fn eyebrow_extent(&self) -> f32 {
        unsafe { (self.api().expressiv_get_eyebrow_extent)(self.raw) }
    }

    /// Smile extent. See [`eyebrow_extent`](Self::eyebrow_extent).
    pub fn smile_extent(&self) -> f32 {
        unsafe { (self.api().expressiv_get_smile_extent)(self.raw) }
    }

    /// Clench extent. See [`eyebrow_extent`](Self::eyebrow_extent).
    pub fn clench_extent(&self) -> f32 {
        unsafe { (self.api().expressiv_get_clench_extent)(self.raw) }
    }

    // ---- Affectiv suite ----

    /// Short-term excitement score, 0.0 to 1.0.
    pub fn excitement_short_term(&self) -> f32 {
        unsafe { (self.api().affectiv_get_excitement_short_term_score)(self.raw) }
    }

    /// Long-term excitement score, 0.0 to 1.0.
    pub fn excitement_long_term(&self) -> f32 {
        unsafe { (self.api().affectiv_get_excitement_long_term_score)(self.raw) }
    }

    /// Meditation score, 0.0 to 1.0.
    pub fn meditation(&self) -> f32 {
        unsafe { (self.api().affectiv_get_meditation_score)(self.raw) }
    }

    /// Frustration score, 0.0 to 1.0.
    pub fn frustration(&self) -> f32 {
        unsafe { (self.api().affectiv_get_frustration_score)(self.raw) }
    }

    /// Engagement/boredom score, 0.0 to 1.0.
    pub fn engagement_boredom(&self) -> f32 {
        unsafe { (self.api().affectiv_get_engagement_boredom_score)(self.raw) }
    }

    /// Whether one Affectiv channel produced a reading in this snapshot.
    pub fn affectiv_active(&self, channel: AffectivChannel) -> bool {
        unsafe { (self.api().affectiv_is_active)(self.raw, channel.as_raw() as c_int) != 0 }
    }

    // ---- Cognitiv suite ----

    /// Mental command detected in this snapshot. Idle reads as
    /// [`CognitivAction::Neutral`].
    pub fn cognitiv_action(&self) -> CognitivAction {
        let raw = unsafe { (self.api().cognitiv_get_current_action)(self.raw) };
        CognitivAction::from_raw(raw as u32).unwrap_or(CognitivAction::Neutral)
    }

    /// Strength of the detected mental command, 0.0 to 1.0.
    pub fn cognitiv_power(&self) -> f32 {
        unsafe { (self.api().cognitiv_get_current_action_power)(self.raw) }
    }

    /// Whether the Cognitiv suite produced a detection in this snapshot.
    pub fn cognitiv_active(&self) -> bool {
        unsafe { (self.api().cognitiv_is_active)(self.raw) != 0 }
    }

    // ---- lifecycle and comparison ----

    /// Reset this snapshot to the engine's neutral state.
    pub fn reset(&mut self) {
        unsafe { (self.api().state_init)(self.raw) };
    }

    /// Copy this snapshot into `dest`.
    pub fn copy_to(&self, dest: &mut StateHandle) {
        unsafe { (self.api().state_copy)(dest.raw, self.raw) };
    }

    /// Whether two snapshots agree on everything.
    pub fn equal(&self, other: &StateHandle) -> bool {
        unsafe { (self.api().state_equal)(self.raw, other.raw) != 0 }
    }

    /// Whether two snapshots agree on engine-level fields: signal,
    /// battery, headset placement, and capture time.
    pub fn engine_equal(&self, other: &StateHandle) -> bool {
        unsafe { (self.api().emoengine_equal)(self.raw, other.raw) != 0 }
    }

    /// Whether two snapshots agree on every Affectiv field.
    pub fn affectiv_equal(&self, other: &StateHandle) -> bool {
        unsafe { (self.api().affectiv_equal)(self.raw, other.raw) != 0 }
    }

    /// Whether two snapshots agree on every Expressiv field.
    pub fn expressiv_equal(&self, other: &StateHandle) -> bool {
        unsafe { (self.api().expressiv_equal)(self.raw, other.raw) != 0 }
    }

    /// Whether two snapshots agree on every Cognitiv field.
    pub fn cognitiv_equal(&self, other: &StateHandle) -> bool {
        unsafe { (self.api().cognitiv_equal)(self.raw, other.raw) != 0 }
    }
}
