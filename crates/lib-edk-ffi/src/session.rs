//! EmoEngine session facade.
//!
//! One [`EngineSession`] owns one logical connection to the engine plus
//! every configuration call made through it. The vendor API is a
//! process-global C surface with no internal locking, so the session is
//! deliberately `Send + !Sync`: it may move between threads but only one
//! thread can drive it at a time, and calls that change engine state take
//! `&mut self`.

use crate::abi::{EdkApi, RawSensorDescriptor};
use crate::error::{check, EngineError, EngineResult};
use crate::handles::{EventHandle, OptimizationParams, StateHandle};
use crate::loader::EdkLibrary;
use lib_edk_types::{
    status, CognitivAction, CognitivActionSet, CognitivEvent, CognitivTrainingControl, EventKind,
    ExpressivAction, ExpressivActionSet, ExpressivEvent, ExpressivSignature, ExpressivThreshold,
    ExpressivTrainingControl, HardwareVersion, InputChannel, SensorDescriptor, SoftwareVersion,
    Suite, SuiteAlgorithms, UserId,
};
use std::cell::Cell;
use std::ffi::{c_char, c_int, c_uint, c_ulong, CString};
use std::fmt;
use std::marker::PhantomData;
use std::path::Path;
use std::sync::Arc;

/// Port the Emotiv Control Panel listens on for remote connections.
pub const CONTROL_PANEL_PORT: u16 = 3008;

/// Port the EmoComposer emulator listens on for remote connections.
pub const EMOCOMPOSER_PORT: u16 = 1726;

/// Log file the engine writes when diagnostics are enabled.
///
/// The engine ignores caller-supplied file names while enabling, so the
/// binding always passes this fixed relative path on enable.
pub const DIAGNOSTICS_LOG_PATH: &str = "logs/emotiv.log";

/// Buffer length `EE_SoftwareGetVersion` expects, including the NUL.
const SOFTWARE_VERSION_LEN: usize = 16;

/// Where a session connects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConnectTarget {
    /// The local engine, talking to a physical headset.
    Headset,
    /// A remote endpoint: Control Panel or the EmoComposer emulator.
    Remote { host: String, port: u16 },
}

impl fmt::Display for ConnectTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectTarget::Headset => f.write_str("headset"),
            ConnectTarget::Remote { host, port } => write!(f, "{host}:{port}"),
        }
    }
}

/// A session against a loaded EmoEngine library.
///
/// Dropping a connected session disconnects it best-effort.
pub struct EngineSession {
    library: Arc<EdkLibrary>,
    connected: bool,
    target: Option<ConnectTarget>,
    // The engine serializes nothing internally; one thread at a time may
    // drive a session, so the type opts out of Sync.
    _not_sync: PhantomData<Cell<()>>,
}

impl EngineSession {
    /// Create a session over a loaded library. Nothing talks to the
    /// engine until [`connect`](Self::connect) or
    /// [`connect_remote`](Self::connect_remote).
    pub fn new(library: Arc<EdkLibrary>) -> Self {
        EngineSession {
            library,
            connected: false,
            target: None,
            _not_sync: PhantomData,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Endpoint the session is connected to, if any.
    pub fn target(&self) -> Option<&ConnectTarget> {
        self.target.as_ref()
    }

    fn api(&self) -> &EdkApi {
        self.library.api()
    }

    // ---- connection lifecycle ----

    /// Connect to the local engine and the physical headset.
    ///
    /// Any failure reports [`EngineError::EngineUnavailable`]; connecting
    /// an already-connected session reports
    /// [`EngineError::AlreadyConnected`] without touching the engine.
    pub fn connect(&mut self) -> EngineResult<()> {
        if self.connected {
            return Err(EngineError::AlreadyConnected);
        }
        let code = unsafe { (self.api().engine_connect)() };
        if code != status::EDK_OK {
            return Err(EngineError::engine_unavailable("headset", code));
        }
        self.connected = true;
        self.target = Some(ConnectTarget::Headset);
        tracing::info!("Connected to EmoEngine (headset)");
        Ok(())
    }

    /// Connect to a remote engine endpoint.
    ///
    /// Use [`EMOCOMPOSER_PORT`] for the EmoComposer emulator and
    /// [`CONTROL_PANEL_PORT`] for the Control Panel.
    pub fn connect_remote(&mut self, host: &str, port: u16) -> EngineResult<()> {
        if self.connected {
            return Err(EngineError::AlreadyConnected);
        }
        let host_c = CString::new(host)
            .map_err(|_| EngineError::invalid_parameter("host contains an interior NUL"))?;
        let code = unsafe { (self.api().engine_remote_connect)(host_c.as_ptr(), port) };
        if code != status::EDK_OK {
            return Err(EngineError::engine_unavailable(format!("{host}:{port}"), code));
        }
        self.connected = true;
        self.target = Some(ConnectTarget::Remote {
            host: host.to_string(),
            port,
        });
        tracing::info!(host, port, "Connected to remote EmoEngine endpoint");
        Ok(())
    }

    /// Disconnect from the engine.
    ///
    /// The native status code passes through unchanged, so disconnecting
    /// a session that never connected surfaces the engine's uninitialized
    /// status as an error rather than crashing.
    pub fn disconnect(&mut self) -> EngineResult<()> {
        let code = unsafe { (self.api().engine_disconnect)() };
        if self.connected {
            tracing::info!("Disconnected from EmoEngine");
        }
        self.connected = false;
        self.target = None;
        check(code)
    }

    /// Toggle the engine's internal diagnostics log.
    ///
    /// The engine honors only its own default file while enabling, so the
    /// enable path substitutes [`DIAGNOSTICS_LOG_PATH`] for whatever the
    /// caller passed; `path` is used verbatim when disabling.
    pub fn enable_diagnostics(&mut self, enable: bool, path: &str) -> EngineResult<()> {
        let effective = if enable { DIAGNOSTICS_LOG_PATH } else { path };
        let path_c = CString::new(effective)
            .map_err(|_| EngineError::invalid_parameter("log path contains an interior NUL"))?;
        let code =
            unsafe { (self.api().enable_diagnostics)(path_c.as_ptr(), c_int::from(enable)) };
        tracing::debug!(enable, path = effective, "Toggled engine diagnostics");
        check(code)
    }

    // ---- handle factories ----

    /// Allocate a reusable event handle.
    pub fn create_event_handle(&self) -> EngineResult<EventHandle> {
        EventHandle::create(self.library.clone())
    }

    /// Allocate an event handle earmarked for profile transfers.
    pub fn create_profile_event_handle(&self) -> EngineResult<EventHandle> {
        EventHandle::create_for_profile(self.library.clone())
    }

    /// Allocate an EmoState handle initialized to the neutral state.
    pub fn create_state_handle(&self) -> EngineResult<StateHandle> {
        StateHandle::create(self.library.clone())
    }

    /// Allocate an optimization parameter block.
    pub fn create_optimization_params(&self) -> EngineResult<OptimizationParams> {
        OptimizationParams::create(self.library.clone())
    }

    // ---- event queue ----

    /// Fetch the next queued engine event into `event`, if one is
    /// waiting.
    ///
    /// Returns `Ok(Some(kind))` when an event was delivered and
    /// `Ok(None)` when the queue was empty. Never blocks; an empty poll
    /// leaves the handle's previous contents untouched, so the last
    /// delivered event stays readable.
    pub fn poll_next_event(&self, event: &mut EventHandle) -> EngineResult<Option<EventKind>> {
        let code = unsafe { (self.api().get_next_event)(event.raw) };
        match code {
            status::EDK_OK => {
                let kind = self.event_kind(event);
                tracing::trace!(kind = ?kind, "Engine event delivered");
                Ok(Some(kind))
            }
            status::EDK_NO_EVENT => Ok(None),
            other => check(other).map(|_| None),
        }
    }

    /// Kind of the event currently held by `event`.
    ///
    /// A handle no poll has populated reads as [`EventKind::Unknown`].
    pub fn event_kind(&self, event: &EventHandle) -> EventKind {
        EventKind::from_raw(unsafe { (self.api().event_get_type)(event.raw) })
    }

    /// User the current event belongs to.
    pub fn event_user(&self, event: &EventHandle) -> EngineResult<UserId> {
        let mut user: c_uint = 0;
        check(unsafe { (self.api().event_get_user)(event.raw, &mut user) })?;
        Ok(UserId(user))
    }

    /// Expressiv training detail of the current event.
    ///
    /// Sensible only when [`event_kind`](Self::event_kind) reported
    /// [`EventKind::ExpressivEvent`]; anything else reads as
    /// [`ExpressivEvent::NoEvent`].
    pub fn expressiv_event_kind(&self, event: &EventHandle) -> ExpressivEvent {
        ExpressivEvent::from_raw(unsafe { (self.api().expressiv_event_get_type)(event.raw) })
    }

    /// Cognitiv training detail of the current event.
    pub fn cognitiv_event_kind(&self, event: &EventHandle) -> CognitivEvent {
        CognitivEvent::from_raw(unsafe { (self.api().cognitiv_event_get_type)(event.raw) })
    }

    /// Copy the snapshot carried by an `EmoStateUpdated` event into
    /// `state`. The engine's status code passes through unchanged for
    /// events of any other kind.
    pub fn copy_state_from_event(
        &self,
        event: &EventHandle,
        state: &mut StateHandle,
    ) -> EngineResult<()> {
        check(unsafe { (self.api().event_get_state)(event.raw, state.raw) })
    }

    /// Drop queued events of the given kinds without delivering them.
    pub fn clear_event_queue(&mut self, kinds: &[EventKind]) -> EngineResult<()> {
        let mask = kinds.iter().fold(0, |mask, kind| mask | kind.as_raw());
        check(unsafe { (self.api().clear_event_queue)(mask) })
    }

    // ---- users ----

    /// Number of users the engine currently tracks.
    pub fn user_count(&self) -> EngineResult<u32> {
        let mut count: c_uint = 0;
        check(unsafe { (self.api().get_user_count)(&mut count) })?;
        Ok(count)
    }

    /// Map a user to a numbered player display on the hardware.
    pub fn set_hardware_player_display(&mut self, user: UserId, display: u32) -> EngineResult<()> {
        check(unsafe { (self.api().set_player_display)(user.0, display) })
    }

    // ---- profiles ----

    /// Overwrite `user`'s profile from serialized bytes.
    pub fn set_user_profile(&mut self, user: UserId, profile: &[u8]) -> EngineResult<()> {
        let code = unsafe {
            (self.api().set_user_profile)(user.0, profile.as_ptr(), profile.len() as c_uint)
        };
        check(code)
    }

    /// Snapshot `user`'s profile into `event` for later
    /// [`profile_bytes`](Self::profile_bytes).
    pub fn request_user_profile(&self, user: UserId, event: &mut EventHandle) -> EngineResult<()> {
        check(unsafe { (self.api().get_user_profile)(user.0, event.raw) })
    }

    /// Snapshot the factory base profile into `event`.
    pub fn request_base_profile(&self, event: &mut EventHandle) -> EngineResult<()> {
        check(unsafe { (self.api().get_base_profile)(event.raw) })
    }

    /// Byte length of the profile held by `event`.
    pub fn profile_size(&self, event: &EventHandle) -> EngineResult<usize> {
        let mut size: c_uint = 0;
        check(unsafe { (self.api().get_profile_size)(event.raw, &mut size) })?;
        Ok(size as usize)
    }

    /// Serialized profile bytes held by `event`.
    ///
    /// The engine requires the destination to be pre-sized, so the size
    /// query always precedes the copy; the two-step dance never leaks
    /// into the caller.
    pub fn profile_bytes(&self, event: &EventHandle) -> EngineResult<Vec<u8>> {
        let size = self.profile_size(event)?;
        let mut buffer = vec![0u8; size];
        let code = unsafe {
            (self.api().get_profile_bytes)(event.raw, buffer.as_mut_ptr(), size as c_uint)
        };
        check(code)?;
        Ok(buffer)
    }

    /// Load a profile file into `user`.
    pub fn load_user_profile(&mut self, user: UserId, path: &Path) -> EngineResult<()> {
        let path_c = path_cstring(path)?;
        let code = unsafe { (self.api().load_user_profile)(user.0, path_c.as_ptr()) };
        tracing::debug!(user = %user, path = %path.display(), "Loaded user profile");
        check(code)
    }

    /// Save `user`'s profile to a file.
    pub fn save_user_profile(&mut self, user: UserId, path: &Path) -> EngineResult<()> {
        let path_c = path_cstring(path)?;
        let code = unsafe { (self.api().save_user_profile)(user.0, path_c.as_ptr()) };
        tracing::debug!(user = %user, path = %path.display(), "Saved user profile");
        check(code)
    }

    // ---- Expressiv suite configuration ----

    /// Set one Expressiv threshold for one action.
    pub fn set_expressiv_threshold(
        &mut self,
        user: UserId,
        action: ExpressivAction,
        threshold: ExpressivThreshold,
        value: i32,
    ) -> EngineResult<()> {
        let code = unsafe {
            (self.api().expressiv_set_threshold)(
                user.0,
                action.as_raw() as c_int,
                threshold.as_raw(),
                value,
            )
        };
        check(code)
    }

    /// Current value of one Expressiv threshold.
    pub fn expressiv_threshold(
        &self,
        user: UserId,
        action: ExpressivAction,
        threshold: ExpressivThreshold,
    ) -> EngineResult<i32> {
        let mut value: c_int = 0;
        let code = unsafe {
            (self.api().expressiv_get_threshold)(
                user.0,
                action.as_raw() as c_int,
                threshold.as_raw(),
                &mut value,
            )
        };
        check(code)?;
        Ok(value)
    }

    /// Select the action the next Expressiv training run records.
    pub fn set_expressiv_training_action(
        &mut self,
        user: UserId,
        action: ExpressivAction,
    ) -> EngineResult<()> {
        check(unsafe {
            (self.api().expressiv_set_training_action)(user.0, action.as_raw() as c_int)
        })
    }

    /// Action the next Expressiv training run will record.
    pub fn expressiv_training_action(&self, user: UserId) -> EngineResult<ExpressivAction> {
        let mut raw: c_uint = 0;
        check(unsafe { (self.api().expressiv_get_training_action)(user.0, &mut raw) })?;
        decode("expressiv action", raw as i64, ExpressivAction::from_raw(raw))
    }

    /// Drive the Expressiv training state machine. Progress arrives as
    /// [`EventKind::ExpressivEvent`] queue events.
    pub fn set_expressiv_training_control(
        &mut self,
        user: UserId,
        control: ExpressivTrainingControl,
    ) -> EngineResult<()> {
        tracing::debug!(user = %user, control = ?control, "Expressiv training control");
        check(unsafe { (self.api().expressiv_set_training_control)(user.0, control.as_raw()) })
    }

    /// Duration of one Expressiv training run, in milliseconds.
    pub fn expressiv_training_time(&self, user: UserId) -> EngineResult<u32> {
        let mut time: c_uint = 0;
        check(unsafe { (self.api().expressiv_get_training_time)(user.0, &mut time) })?;
        Ok(time)
    }

    /// Switch between the universal and the trained Expressiv signature.
    pub fn set_expressiv_signature_type(
        &mut self,
        user: UserId,
        signature: ExpressivSignature,
    ) -> EngineResult<()> {
        check(unsafe { (self.api().expressiv_set_signature_type)(user.0, signature.as_raw()) })
    }

    /// Signature the Expressiv suite currently uses.
    pub fn expressiv_signature_type(&self, user: UserId) -> EngineResult<ExpressivSignature> {
        let mut raw: c_int = 0;
        check(unsafe { (self.api().expressiv_get_signature_type)(user.0, &mut raw) })?;
        decode(
            "expressiv signature",
            raw as i64,
            ExpressivSignature::from_raw(raw),
        )
    }

    /// Whether a trained Expressiv signature exists for `user`.
    pub fn expressiv_trained_signature_available(&self, user: UserId) -> EngineResult<bool> {
        let mut available: c_int = 0;
        check(unsafe {
            (self.api().expressiv_get_trained_signature_available)(user.0, &mut available)
        })?;
        Ok(available != 0)
    }

    /// Actions covered by the trained Expressiv signature.
    pub fn expressiv_trained_signature_actions(
        &self,
        user: UserId,
    ) -> EngineResult<ExpressivActionSet> {
        let mut bits: c_ulong = 0;
        check(unsafe {
            (self.api().expressiv_get_trained_signature_actions)(user.0, &mut bits)
        })?;
        Ok(ExpressivActionSet::from_bits(bits as u32))
    }

    // ---- Cognitiv suite configuration ----

    /// Actions the Cognitiv suite currently detects.
    pub fn cognitiv_active_actions(&self, user: UserId) -> EngineResult<CognitivActionSet> {
        let mut bits: c_ulong = 0;
        check(unsafe { (self.api().cognitiv_get_active_actions)(user.0, &mut bits) })?;
        Ok(CognitivActionSet::from_bits(bits as u32))
    }

    /// Replace the Cognitiv active-action set.
    ///
    /// The vendor never documented the bit-vector marshalling for this
    /// export, so the binding refuses to guess and reports
    /// [`EngineError::NotImplemented`]. The native library is not called.
    pub fn set_cognitiv_active_actions(
        &mut self,
        _user: UserId,
        _actions: CognitivActionSet,
    ) -> EngineResult<()> {
        Err(EngineError::not_implemented("EE_CognitivSetActiveActions"))
    }

    /// Select the action the next Cognitiv training run records.
    pub fn set_cognitiv_training_action(
        &mut self,
        user: UserId,
        action: CognitivAction,
    ) -> EngineResult<()> {
        check(unsafe {
            (self.api().cognitiv_set_training_action)(user.0, action.as_raw() as c_int)
        })
    }

    /// Action the next Cognitiv training run will record.
    pub fn cognitiv_training_action(&self, user: UserId) -> EngineResult<CognitivAction> {
        let mut raw: c_uint = 0;
        check(unsafe { (self.api().cognitiv_get_training_action)(user.0, &mut raw) })?;
        decode("cognitiv action", raw as i64, CognitivAction::from_raw(raw))
    }

    /// Drive the Cognitiv training state machine. Progress arrives as
    /// [`EventKind::CognitivEvent`] queue events.
    pub fn set_cognitiv_training_control(
        &mut self,
        user: UserId,
        control: CognitivTrainingControl,
    ) -> EngineResult<()> {
        tracing::debug!(user = %user, control = ?control, "Cognitiv training control");
        check(unsafe { (self.api().cognitiv_set_training_control)(user.0, control.as_raw()) })
    }

    /// Duration of one Cognitiv training run, in milliseconds.
    pub fn cognitiv_training_time(&self, user: UserId) -> EngineResult<u32> {
        let mut time: c_uint = 0;
        check(unsafe { (self.api().cognitiv_get_training_time)(user.0, &mut time) })?;
        Ok(time)
    }

    /// Set the Cognitiv activation level, 1 (relaxed) through 7
    /// (aggressive). The engine rejects values outside that range.
    pub fn set_cognitiv_activation_level(&mut self, user: UserId, level: i32) -> EngineResult<()> {
        check(unsafe { (self.api().cognitiv_set_activation_level)(user.0, level) })
    }

    /// Current Cognitiv activation level.
    pub fn cognitiv_activation_level(&self, user: UserId) -> EngineResult<i32> {
        let mut level: c_int = 0;
        check(unsafe { (self.api().cognitiv_get_activation_level)(user.0, &mut level) })?;
        Ok(level)
    }

    /// Set the four Cognitiv action sensitivity lanes.
    pub fn set_cognitiv_action_sensitivity(
        &mut self,
        user: UserId,
        levels: [i32; 4],
    ) -> EngineResult<()> {
        let [s1, s2, s3, s4] = levels;
        check(unsafe { (self.api().cognitiv_set_action_sensitivity)(user.0, s1, s2, s3, s4) })
    }

    /// Current values of the four Cognitiv sensitivity lanes.
    pub fn cognitiv_action_sensitivity(&self, user: UserId) -> EngineResult<[i32; 4]> {
        let mut s1: c_int = 0;
        let mut s2: c_int = 0;
        let mut s3: c_int = 0;
        let mut s4: c_int = 0;
        check(unsafe {
            (self.api().cognitiv_get_action_sensitivity)(user.0, &mut s1, &mut s2, &mut s3, &mut s4)
        })?;
        Ok([s1, s2, s3, s4])
    }

    /// Begin background sampling of the neutral state.
    pub fn start_cognitiv_sampling_neutral(&mut self, user: UserId) -> EngineResult<()> {
        check(unsafe { (self.api().cognitiv_start_sampling_neutral)(user.0) })
    }

    /// Stop background sampling of the neutral state.
    pub fn stop_cognitiv_sampling_neutral(&mut self, user: UserId) -> EngineResult<()> {
        check(unsafe { (self.api().cognitiv_stop_sampling_neutral)(user.0) })
    }

    /// Toggle caching of Cognitiv signature computations.
    pub fn set_cognitiv_signature_caching(
        &mut self,
        user: UserId,
        enabled: bool,
    ) -> EngineResult<()> {
        check(unsafe {
            (self.api().cognitiv_set_signature_caching)(user.0, c_uint::from(enabled))
        })
    }

    /// Whether Cognitiv signature caching is on.
    pub fn cognitiv_signature_caching(&self, user: UserId) -> EngineResult<bool> {
        let mut enabled: c_uint = 0;
        check(unsafe { (self.api().cognitiv_get_signature_caching)(user.0, &mut enabled) })?;
        Ok(enabled != 0)
    }

    /// Set the Cognitiv signature cache size; zero means unlimited.
    pub fn set_cognitiv_signature_cache_size(
        &mut self,
        user: UserId,
        size: u32,
    ) -> EngineResult<()> {
        check(unsafe { (self.api().cognitiv_set_signature_cache_size)(user.0, size) })
    }

    /// Current Cognitiv signature cache size.
    pub fn cognitiv_signature_cache_size(&self, user: UserId) -> EngineResult<u32> {
        let mut size: c_uint = 0;
        check(unsafe { (self.api().cognitiv_get_signature_cache_size)(user.0, &mut size) })?;
        Ok(size)
    }

    /// Actions covered by the trained Cognitiv signature.
    pub fn cognitiv_trained_signature_actions(
        &self,
        user: UserId,
    ) -> EngineResult<CognitivActionSet> {
        let mut bits: c_ulong = 0;
        check(unsafe {
            (self.api().cognitiv_get_trained_signature_actions)(user.0, &mut bits)
        })?;
        Ok(CognitivActionSet::from_bits(bits as u32))
    }

    /// Overall Cognitiv skill rating for `user`.
    pub fn cognitiv_overall_skill_rating(&self, user: UserId) -> EngineResult<f32> {
        let mut rating: f32 = 0.0;
        check(unsafe { (self.api().cognitiv_get_overall_skill_rating)(user.0, &mut rating) })?;
        Ok(rating)
    }

    /// Skill rating for one trained Cognitiv action.
    pub fn cognitiv_action_skill_rating(
        &self,
        user: UserId,
        action: CognitivAction,
    ) -> EngineResult<f32> {
        let mut rating: f32 = 0.0;
        let code = unsafe {
            (self.api().cognitiv_get_action_skill_rating)(
                user.0,
                action.as_raw() as c_int,
                &mut rating,
            )
        };
        check(code)?;
        Ok(rating)
    }

    // ---- headset hardware ----

    /// Physical placement of one input sensor.
    ///
    /// The engine writes a descriptor whose label points into engine
    /// memory; the label is copied out before this call returns, so the
    /// result owns all its data.
    pub fn sensor_details(&self, channel: InputChannel) -> EngineResult<SensorDescriptor> {
        let mut raw = RawSensorDescriptor::default();
        check(unsafe { (self.api().headset_get_sensor_details)(channel.as_raw(), &mut raw) })?;
        let label = unsafe { read_c_string(raw.label) }.unwrap_or_default();
        Ok(SensorDescriptor {
            channel,
            exists: raw.exists != 0,
            label,
            x: raw.x_loc,
            y: raw.y_loc,
            z: raw.z_loc,
        })
    }

    /// Hardware revisions of `user`'s headset and dongle.
    pub fn hardware_version(&self, user: UserId) -> EngineResult<HardwareVersion> {
        let mut packed: c_ulong = 0;
        check(unsafe { (self.api().hardware_get_version)(user.0, &mut packed) })?;
        Ok(HardwareVersion::from_packed(packed as u32))
    }

    /// Version of the engine software itself.
    pub fn software_version(&self) -> EngineResult<SoftwareVersion> {
        let mut buffer = [0u8; SOFTWARE_VERSION_LEN];
        let mut build: c_ulong = 0;
        let code = unsafe {
            (self.api().software_get_version)(
                buffer.as_mut_ptr() as *mut c_char,
                buffer.len() as c_uint,
                &mut build,
            )
        };
        check(code)?;
        let end = buffer.iter().position(|&b| b == 0).unwrap_or(buffer.len());
        Ok(SoftwareVersion {
            version: String::from_utf8_lossy(&buffer[..end]).into_owned(),
            build: build as u32,
        })
    }

    /// Gyro movement since the previous call, as `(x, y)` counts.
    ///
    /// Reading drains the engine's accumulator, hence `&mut self`.
    pub fn gyro_delta(&mut self, user: UserId) -> EngineResult<(i32, i32)> {
        let mut x: c_int = 0;
        let mut y: c_int = 0;
        check(unsafe { (self.api().headset_get_gyro_delta)(user.0, &mut x, &mut y) })?;
        Ok((x, y))
    }

    /// Re-zero the gyro at its current position.
    pub fn gyro_rezero(&mut self, user: UserId) -> EngineResult<()> {
        check(unsafe { (self.api().headset_gyro_rezero)(user.0) })
    }

    // ---- detection optimization ----

    /// Restrict the engine to the detections marked vital in `params`,
    /// freeing CPU for everything else.
    pub fn enable_optimization(&mut self, params: &OptimizationParams) -> EngineResult<()> {
        tracing::debug!("Enabling detection optimization");
        check(unsafe { (self.api().optimization_enable)(params.raw) })
    }

    /// Return the engine to running every detection.
    pub fn disable_optimization(&mut self) -> EngineResult<()> {
        tracing::debug!("Disabling detection optimization");
        check(unsafe { (self.api().optimization_disable)() })
    }

    /// Whether detection optimization is currently on.
    pub fn optimization_enabled(&self) -> EngineResult<bool> {
        let mut enabled = false;
        check(unsafe { (self.api().optimization_is_enabled)(&mut enabled) })?;
        Ok(enabled)
    }

    /// Refresh `params` with the engine's current optimization settings.
    pub fn read_optimization_params(&self, params: &mut OptimizationParams) -> EngineResult<()> {
        check(unsafe { (self.api().optimization_get_param)(params.raw) })
    }

    /// Detections marked vital for `suite` in `params`.
    pub fn vital_algorithms(
        &self,
        params: &OptimizationParams,
        suite: Suite,
    ) -> EngineResult<SuiteAlgorithms> {
        let mut bits: c_uint = 0;
        check(unsafe {
            (self.api().optimization_get_vital_algorithm)(params.raw, suite.as_raw(), &mut bits)
        })?;
        Ok(SuiteAlgorithms::from_bits(suite, bits))
    }

    /// Mark a per-suite selection as vital in `params`.
    pub fn set_vital_algorithms(
        &mut self,
        params: &mut OptimizationParams,
        algorithms: SuiteAlgorithms,
    ) -> EngineResult<()> {
        check(unsafe {
            (self.api().optimization_set_vital_algorithm)(
                params.raw,
                algorithms.suite().as_raw(),
                algorithms.bits(),
            )
        })
    }

    /// Reset every detection in `suite` to factory state.
    pub fn reset_suite_detections(&mut self, user: UserId, suite: Suite) -> EngineResult<()> {
        tracing::debug!(user = %user, suite = ?suite, "Resetting all suite detections");
        check(unsafe { (self.api().reset_detection)(user.0, suite.as_raw(), 0) })
    }

    /// Reset only the selected detections to factory state.
    pub fn reset_detections(
        &mut self,
        user: UserId,
        detections: SuiteAlgorithms,
    ) -> EngineResult<()> {
        tracing::debug!(user = %user, suite = ?detections.suite(), "Resetting selected detections");
        check(unsafe {
            (self.api().reset_detection)(
                user.0,
                detections.suite().as_raw(),
                detections.bits(),
            )
        })
    }
}

impl Drop for EngineSession {
    fn drop(&mut self) {
        if self.connected {
            if let Err(e) = self.disconnect() {
                tracing::warn!(error = %e, "Error disconnecting engine session");
            }
        }
    }
}

fn path_cstring(path: &Path) -> EngineResult<CString> {
    let text = path
        .to_str()
        .ok_or_else(|| EngineError::invalid_parameter("path is not valid UTF-8"))?;
    CString::new(text).map_err(|_| EngineError::invalid_parameter("path contains an interior NUL"))
}

fn decode<T>(what: &'static str, raw: i64, value: Option<T>) -> EngineResult<T> {
    value.ok_or(EngineError::UnexpectedReply { what, raw })
}

/// Copy a NUL-terminated string out of engine memory.
///
/// # Safety
///
/// `ptr` must be null or point at a NUL-terminated string that stays
/// valid for the duration of the call.
pub(crate) unsafe fn read_c_string(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    Some(
        unsafe { std::ffi::CStr::from_ptr(ptr) }
            .to_string_lossy()
            .into_owned(),
    )
}
