//! In-process engine double for tests.
//!
//! Builds an [`EdkApi`] table out of Rust `extern "C"` functions backed by
//! a thread-local registry, so every test exercises the real FFI plumbing
//! (pointer marshalling, status mapping, handle ownership) without the
//! vendor binary. Thread-local state keeps parallel tests isolated; each
//! test calls [`reset`] before building a session.
//!
//! Handles are cookie values starting at 1, never real pointers, so a
//! use-after-free in the wrappers would show up as a missing map entry
//! rather than corrupting memory.

use crate::abi::{EdkApi, RawHandle, RawSensorDescriptor};
use crate::loader::EdkLibrary;
use lib_edk_types::{status, CognitivEvent, EventKind, ExpressivEvent};
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::ffi::{c_char, c_float, c_int, c_uchar, c_uint, c_ulong, c_ushort, CStr};
use std::sync::Arc;

/// Milliseconds the double reports for one Expressiv training run.
pub const EXPRESSIV_TRAINING_MS: u32 = 8000;

/// Milliseconds the double reports for one Cognitiv training run.
pub const COGNITIV_TRAINING_MS: u32 = 8000;

/// Scripted contents of one emotional-state snapshot.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MockState {
    pub time_from_start: f32,
    pub headset_on: bool,
    pub wireless: i32,
    pub battery_level: i32,
    pub battery_max: i32,
    pub contact_quality_channels: i32,
    pub contact_quality: [i32; 18],
    pub blink: bool,
    pub left_wink: bool,
    pub right_wink: bool,
    pub eyes_open: bool,
    pub looking_up: bool,
    pub looking_down: bool,
    pub looking_left: bool,
    pub looking_right: bool,
    pub eyelid: (f32, f32),
    pub eye_location: (f32, f32),
    pub upper_face_action: u32,
    pub upper_face_power: f32,
    pub lower_face_action: u32,
    pub lower_face_power: f32,
    pub active_expressiv: u32,
    pub eyebrow_extent: f32,
    pub smile_extent: f32,
    pub clench_extent: f32,
    pub excitement_short: f32,
    pub excitement_long: f32,
    pub meditation: f32,
    pub frustration: f32,
    pub engagement: f32,
    pub active_affectiv: u32,
    pub cognitiv_action: u32,
    pub cognitiv_power: f32,
    pub cognitiv_active: bool,
}

// Scripted snapshots are cloned around verbatim, so plain float equality
// is exact here.
fn engine_eq(a: &MockState, b: &MockState) -> bool {
    a.time_from_start == b.time_from_start
        && a.headset_on == b.headset_on
        && a.wireless == b.wireless
        && a.battery_level == b.battery_level
        && a.battery_max == b.battery_max
        && a.contact_quality_channels == b.contact_quality_channels
        && a.contact_quality == b.contact_quality
}

fn expressiv_eq(a: &MockState, b: &MockState) -> bool {
    a.blink == b.blink
        && a.left_wink == b.left_wink
        && a.right_wink == b.right_wink
        && a.eyes_open == b.eyes_open
        && a.looking_up == b.looking_up
        && a.looking_down == b.looking_down
        && a.looking_left == b.looking_left
        && a.looking_right == b.looking_right
        && a.eyelid == b.eyelid
        && a.eye_location == b.eye_location
        && a.upper_face_action == b.upper_face_action
        && a.upper_face_power == b.upper_face_power
        && a.lower_face_action == b.lower_face_action
        && a.lower_face_power == b.lower_face_power
        && a.active_expressiv == b.active_expressiv
        && a.eyebrow_extent == b.eyebrow_extent
        && a.smile_extent == b.smile_extent
        && a.clench_extent == b.clench_extent
}

fn affectiv_eq(a: &MockState, b: &MockState) -> bool {
    a.excitement_short == b.excitement_short
        && a.excitement_long == b.excitement_long
        && a.meditation == b.meditation
        && a.frustration == b.frustration
        && a.engagement == b.engagement
        && a.active_affectiv == b.active_affectiv
}

fn cognitiv_eq(a: &MockState, b: &MockState) -> bool {
    a.cognitiv_action == b.cognitiv_action
        && a.cognitiv_power == b.cognitiv_power
        && a.cognitiv_active == b.cognitiv_active
}

/// One scripted queue entry.
#[derive(Clone, Debug)]
pub struct MockEvent {
    pub kind: EventKind,
    pub user: u32,
    pub expressiv_detail: ExpressivEvent,
    pub cognitiv_detail: CognitivEvent,
    pub state: Option<MockState>,
}

impl MockEvent {
    /// An event with no suite detail and no snapshot attached.
    pub fn plain(kind: EventKind, user: u32) -> Self {
        MockEvent {
            kind,
            user,
            expressiv_detail: ExpressivEvent::NoEvent,
            cognitiv_detail: CognitivEvent::NoEvent,
            state: None,
        }
    }
}

/// Allocation and release tallies per handle kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HandleCounters {
    pub events_created: usize,
    pub events_freed: usize,
    pub states_created: usize,
    pub states_freed: usize,
    pub params_created: usize,
    pub params_freed: usize,
}

impl HandleCounters {
    /// Whether every allocation has been released exactly once.
    pub fn balanced(&self) -> bool {
        self.events_created == self.events_freed
            && self.states_created == self.states_freed
            && self.params_created == self.params_freed
    }
}

#[derive(Clone, Debug, Default)]
struct EventSlot {
    kind: i32,
    user: u32,
    expressiv_detail: i32,
    cognitiv_detail: i32,
    state: Option<MockState>,
    profile: Option<Vec<u8>>,
}

#[derive(Clone, Debug, Default)]
struct ParamSlot {
    vital: [u32; 3],
}

#[derive(Default)]
struct Registry {
    connected: bool,
    refuse_connect: bool,
    remote_target: Option<(String, u16)>,
    user_count: u32,
    queue: VecDeque<MockEvent>,
    events: HashMap<usize, EventSlot>,
    states: HashMap<usize, MockState>,
    params: HashMap<usize, ParamSlot>,
    next_handle: usize,
    counters: HandleCounters,
    fail_allocations: bool,
    profiles: HashMap<u32, Vec<u8>>,
    base_profile: Vec<u8>,
    diagnostics: Option<(String, bool)>,
    player_display: HashMap<u32, u32>,
    thresholds: HashMap<(u32, u32, i32), i32>,
    exp_training_action: HashMap<u32, u32>,
    cog_training_action: HashMap<u32, u32>,
    exp_signature_type: HashMap<u32, i32>,
    exp_signature_available: HashMap<u32, i32>,
    exp_trained_actions: HashMap<u32, u32>,
    cog_trained_actions: HashMap<u32, u32>,
    cog_active_actions: HashMap<u32, u32>,
    activation_level: HashMap<u32, i32>,
    sensitivity: HashMap<u32, [i32; 4]>,
    sampling_neutral: HashMap<u32, bool>,
    caching: HashMap<u32, u32>,
    cache_size: HashMap<u32, u32>,
    skill_overall: HashMap<u32, f32>,
    skill_action: HashMap<(u32, u32), f32>,
    gyro: (i32, i32),
    gyro_calibrated: bool,
    hardware_version: u32,
    software_version: (String, u32),
    optimization_on: bool,
    current_vital: [u32; 3],
    last_reset: Option<(u32, i32, u32)>,
}

impl Registry {
    fn fresh() -> Self {
        Registry {
            gyro_calibrated: true,
            software_version: ("1.0.0.5".to_string(), 89),
            ..Registry::default()
        }
    }

    fn alloc(&mut self) -> usize {
        self.next_handle += 1;
        self.next_handle
    }
}

thread_local! {
    static REGISTRY: RefCell<Registry> = RefCell::new(Registry::fresh());
}

fn with<R>(f: impl FnOnce(&mut Registry) -> R) -> R {
    REGISTRY.with(|registry| f(&mut registry.borrow_mut()))
}

// ---- scripting surface ----

/// Reset this thread's engine double to a blank, disconnected state.
pub fn reset() {
    with(|r| *r = Registry::fresh());
}

/// Queue an event for the next polls.
pub fn push_event(event: MockEvent) {
    with(|r| r.queue.push_back(event));
}

/// Queue an `EmoStateUpdated` event carrying `state`.
pub fn push_state_update(user: u32, state: MockState) {
    push_event(MockEvent {
        state: Some(state),
        ..MockEvent::plain(EventKind::EmoStateUpdated, user)
    });
}

/// Refuse upcoming connect attempts with a disconnected status.
pub fn refuse_connections(refuse: bool) {
    with(|r| r.refuse_connect = refuse);
}

/// Make upcoming handle allocations return null.
pub fn fail_allocations(fail: bool) {
    with(|r| r.fail_allocations = fail);
}

/// Set how many users the engine knows. User ids below this count are
/// valid; everything else reports `EDK_INVALID_USER_ID`.
pub fn set_user_count(count: u32) {
    with(|r| r.user_count = count);
}

pub fn connected() -> bool {
    with(|r| r.connected)
}

pub fn remote_target() -> Option<(String, u16)> {
    with(|r| r.remote_target.clone())
}

pub fn counters() -> HandleCounters {
    with(|r| r.counters)
}

/// Path and flag of the last diagnostics toggle.
pub fn diagnostics_record() -> Option<(String, bool)> {
    with(|r| r.diagnostics.clone())
}

pub fn set_base_profile(bytes: Vec<u8>) {
    with(|r| r.base_profile = bytes);
}

/// Profile bytes currently stored for `user`.
pub fn profile(user: u32) -> Option<Vec<u8>> {
    with(|r| r.profiles.get(&user).cloned())
}

/// Player display last assigned to `user`, if any.
pub fn player_display(user: u32) -> Option<u32> {
    with(|r| r.player_display.get(&user).copied())
}

pub fn set_trained_expressiv_actions(user: u32, bits: u32) {
    with(|r| {
        r.exp_trained_actions.insert(user, bits);
        r.exp_signature_available.insert(user, i32::from(bits != 0));
    });
}

pub fn set_active_cognitiv_actions(user: u32, bits: u32) {
    with(|r| {
        r.cog_active_actions.insert(user, bits);
    });
}

pub fn set_trained_cognitiv_actions(user: u32, bits: u32) {
    with(|r| {
        r.cog_trained_actions.insert(user, bits);
    });
}

pub fn set_skill_ratings(user: u32, overall: f32, per_action: &[(u32, f32)]) {
    with(|r| {
        r.skill_overall.insert(user, overall);
        for (action, rating) in per_action {
            r.skill_action.insert((user, *action), *rating);
        }
    });
}

pub fn set_gyro(x: i32, y: i32) {
    with(|r| r.gyro = (x, y));
}

pub fn set_gyro_calibrated(calibrated: bool) {
    with(|r| r.gyro_calibrated = calibrated);
}

pub fn set_hardware_version(packed: u32) {
    with(|r| r.hardware_version = packed);
}

pub fn set_software_version(version: &str, build: u32) {
    with(|r| r.software_version = (version.to_string(), build));
}

/// `(user, suite, bits)` of the last detection reset, if any.
pub fn last_reset() -> Option<(u32, i32, u32)> {
    with(|r| r.last_reset)
}

pub fn sampling_neutral(user: u32) -> bool {
    with(|r| r.sampling_neutral.get(&user).copied().unwrap_or(false))
}

/// Build an [`EdkLibrary`] whose calls land in this thread's registry.
pub fn mock_library() -> Arc<EdkLibrary> {
    EdkLibrary::from_api(mock_api(), "mock://edk")
}

// ---- extern plumbing ----

fn read_str(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    Some(unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned())
}

fn require_user(r: &Registry, user: c_uint) -> Option<c_int> {
    if user >= r.user_count {
        Some(status::EDK_INVALID_USER_ID)
    } else {
        None
    }
}

fn write_out<T>(ptr: *mut T, value: T) {
    if !ptr.is_null() {
        unsafe { *ptr = value };
    }
}

fn state_field<R: Default>(handle: RawHandle, read: impl FnOnce(&MockState) -> R) -> R {
    with(|r| r.states.get(&(handle as usize)).map(read).unwrap_or_default())
}

extern "C" fn ee_engine_connect() -> c_int {
    with(|r| {
        if r.refuse_connect {
            return status::EDK_EMOENGINE_DISCONNECTED;
        }
        r.connected = true;
        status::EDK_OK
    })
}

extern "C" fn ee_engine_remote_connect(host: *const c_char, port: c_ushort) -> c_int {
    let host = match read_str(host) {
        Some(h) => h,
        None => return status::EDK_INVALID_PARAMETER,
    };
    with(|r| {
        if r.refuse_connect {
            return status::EDK_EMOENGINE_DISCONNECTED;
        }
        r.connected = true;
        r.remote_target = Some((host, port));
        status::EDK_OK
    })
}

extern "C" fn ee_engine_disconnect() -> c_int {
    with(|r| {
        if !r.connected {
            return status::EDK_EMOENGINE_UNINITIALIZED;
        }
        r.connected = false;
        status::EDK_OK
    })
}

extern "C" fn ee_enable_diagnostics(path: *const c_char, enable: c_int) -> c_int {
    let path = match read_str(path) {
        Some(p) => p,
        None => return status::EDK_INVALID_PARAMETER,
    };
    with(|r| {
        r.diagnostics = Some((path, enable != 0));
        status::EDK_OK
    })
}

extern "C" fn ee_event_create() -> RawHandle {
    with(|r| {
        if r.fail_allocations {
            return std::ptr::null_mut();
        }
        let id = r.alloc();
        r.events.insert(id, EventSlot::default());
        r.counters.events_created += 1;
        id as RawHandle
    })
}

extern "C" fn ee_event_free(handle: RawHandle) {
    with(|r| {
        if r.events.remove(&(handle as usize)).is_some() {
            r.counters.events_freed += 1;
        }
    });
}

extern "C" fn ee_state_create() -> RawHandle {
    with(|r| {
        if r.fail_allocations {
            return std::ptr::null_mut();
        }
        let id = r.alloc();
        r.states.insert(id, MockState::default());
        r.counters.states_created += 1;
        id as RawHandle
    })
}

extern "C" fn ee_state_free(handle: RawHandle) {
    with(|r| {
        if r.states.remove(&(handle as usize)).is_some() {
            r.counters.states_freed += 1;
        }
    });
}

extern "C" fn ee_event_get_type(handle: RawHandle) -> c_int {
    with(|r| {
        r.events
            .get(&(handle as usize))
            .map(|slot| slot.kind)
            .unwrap_or(0)
    })
}

extern "C" fn ee_expressiv_event_get_type(handle: RawHandle) -> c_int {
    with(|r| {
        r.events
            .get(&(handle as usize))
            .map(|slot| slot.expressiv_detail)
            .unwrap_or(0)
    })
}

extern "C" fn ee_cognitiv_event_get_type(handle: RawHandle) -> c_int {
    with(|r| {
        r.events
            .get(&(handle as usize))
            .map(|slot| slot.cognitiv_detail)
            .unwrap_or(0)
    })
}

extern "C" fn ee_event_get_user(event: RawHandle, user_out: *mut c_uint) -> c_int {
    with(|r| match r.events.get(&(event as usize)) {
        Some(slot) => {
            write_out(user_out, slot.user);
            status::EDK_OK
        }
        None => status::EDK_INVALID_PARAMETER,
    })
}

extern "C" fn ee_event_get_state(event: RawHandle, state: RawHandle) -> c_int {
    with(|r| {
        let snapshot = match r.events.get(&(event as usize)) {
            Some(slot) if slot.kind == EventKind::EmoStateUpdated.as_raw() => match &slot.state {
                Some(state) => state.clone(),
                None => return status::EDK_INVALID_PARAMETER,
            },
            Some(_) | None => return status::EDK_INVALID_PARAMETER,
        };
        match r.states.get_mut(&(state as usize)) {
            Some(dest) => {
                *dest = snapshot;
                status::EDK_OK
            }
            None => status::EDK_INVALID_PARAMETER,
        }
    })
}

extern "C" fn ee_get_next_event(handle: RawHandle) -> c_int {
    with(|r| {
        if !r.connected {
            return status::EDK_EMOENGINE_UNINITIALIZED;
        }
        let event = match r.queue.pop_front() {
            Some(event) => event,
            None => return status::EDK_NO_EVENT,
        };
        match r.events.get_mut(&(handle as usize)) {
            Some(slot) => {
                *slot = EventSlot {
                    kind: event.kind.as_raw(),
                    user: event.user,
                    expressiv_detail: event.expressiv_detail.as_raw(),
                    cognitiv_detail: event.cognitiv_detail.as_raw(),
                    state: event.state,
                    profile: None,
                };
                status::EDK_OK
            }
            None => status::EDK_INVALID_PARAMETER,
        }
    })
}

extern "C" fn ee_clear_event_queue(event_types: c_int) -> c_int {
    with(|r| {
        r.queue
            .retain(|event| event.kind.as_raw() & event_types == 0);
        status::EDK_OK
    })
}

extern "C" fn ee_get_user_count(count_out: *mut c_uint) -> c_int {
    with(|r| {
        if !r.connected {
            return status::EDK_EMOENGINE_UNINITIALIZED;
        }
        write_out(count_out, r.user_count);
        status::EDK_OK
    })
}

extern "C" fn ee_set_player_display(user: c_uint, display: c_uint) -> c_int {
    with(|r| {
        if let Some(code) = require_user(r, user) {
            return code;
        }
        r.player_display.insert(user, display);
        status::EDK_OK
    })
}

extern "C" fn ee_set_user_profile(user: c_uint, buffer: *const c_uchar, length: c_uint) -> c_int {
    if buffer.is_null() {
        return status::EDK_INVALID_PARAMETER;
    }
    let bytes = unsafe { std::slice::from_raw_parts(buffer, length as usize) }.to_vec();
    with(|r| {
        if let Some(code) = require_user(r, user) {
            return code;
        }
        r.profiles.insert(user, bytes);
        status::EDK_OK
    })
}

extern "C" fn ee_get_user_profile(user: c_uint, event: RawHandle) -> c_int {
    with(|r| {
        if let Some(code) = require_user(r, user) {
            return code;
        }
        let bytes = r.profiles.get(&user).cloned().unwrap_or_default();
        match r.events.get_mut(&(event as usize)) {
            Some(slot) => {
                slot.kind = EventKind::ProfileEvent.as_raw();
                slot.user = user;
                slot.profile = Some(bytes);
                status::EDK_OK
            }
            None => status::EDK_INVALID_PARAMETER,
        }
    })
}

extern "C" fn ee_get_base_profile(event: RawHandle) -> c_int {
    with(|r| {
        let bytes = r.base_profile.clone();
        match r.events.get_mut(&(event as usize)) {
            Some(slot) => {
                slot.kind = EventKind::ProfileEvent.as_raw();
                slot.profile = Some(bytes);
                status::EDK_OK
            }
            None => status::EDK_INVALID_PARAMETER,
        }
    })
}

extern "C" fn ee_get_profile_size(event: RawHandle, size_out: *mut c_uint) -> c_int {
    with(|r| match r.events.get(&(event as usize)) {
        Some(slot) => match &slot.profile {
            Some(bytes) => {
                write_out(size_out, bytes.len() as c_uint);
                status::EDK_OK
            }
            None => status::EDK_INVALID_PARAMETER,
        },
        None => status::EDK_INVALID_PARAMETER,
    })
}

extern "C" fn ee_get_profile_bytes(event: RawHandle, dest: *mut c_uchar, length: c_uint) -> c_int {
    if dest.is_null() {
        return status::EDK_INVALID_PARAMETER;
    }
    with(|r| match r.events.get(&(event as usize)) {
        Some(slot) => match &slot.profile {
            Some(bytes) => {
                if (length as usize) < bytes.len() {
                    return status::EDK_BUFFER_TOO_SMALL;
                }
                unsafe { std::ptr::copy_nonoverlapping(bytes.as_ptr(), dest, bytes.len()) };
                status::EDK_OK
            }
            None => status::EDK_INVALID_PARAMETER,
        },
        None => status::EDK_INVALID_PARAMETER,
    })
}

extern "C" fn ee_load_user_profile(user: c_uint, path: *const c_char) -> c_int {
    let path = match read_str(path) {
        Some(p) => p,
        None => return status::EDK_INVALID_PARAMETER,
    };
    let bytes = match std::fs::read(&path) {
        Ok(bytes) => bytes,
        Err(_) => return status::EDK_FILESYSTEM_ERROR,
    };
    with(|r| {
        if let Some(code) = require_user(r, user) {
            return code;
        }
        r.profiles.insert(user, bytes);
        status::EDK_OK
    })
}

extern "C" fn ee_save_user_profile(user: c_uint, path: *const c_char) -> c_int {
    let path = match read_str(path) {
        Some(p) => p,
        None => return status::EDK_INVALID_PARAMETER,
    };
    with(|r| {
        if let Some(code) = require_user(r, user) {
            return code;
        }
        let bytes = r.profiles.get(&user).cloned().unwrap_or_default();
        match std::fs::write(&path, bytes) {
            Ok(()) => status::EDK_OK,
            Err(_) => status::EDK_FILESYSTEM_ERROR,
        }
    })
}

extern "C" fn ee_expressiv_set_threshold(
    user: c_uint,
    action: c_int,
    threshold: c_int,
    value: c_int,
) -> c_int {
    with(|r| {
        if let Some(code) = require_user(r, user) {
            return code;
        }
        r.thresholds.insert((user, action as u32, threshold), value);
        status::EDK_OK
    })
}

extern "C" fn ee_expressiv_get_threshold(
    user: c_uint,
    action: c_int,
    threshold: c_int,
    value_out: *mut c_int,
) -> c_int {
    with(|r| {
        if let Some(code) = require_user(r, user) {
            return code;
        }
        let value = r
            .thresholds
            .get(&(user, action as u32, threshold))
            .copied()
            .unwrap_or(0);
        write_out(value_out, value);
        status::EDK_OK
    })
}

extern "C" fn ee_expressiv_set_training_action(user: c_uint, action: c_int) -> c_int {
    with(|r| {
        if let Some(code) = require_user(r, user) {
            return code;
        }
        r.exp_training_action.insert(user, action as u32);
        status::EDK_OK
    })
}

extern "C" fn ee_expressiv_get_training_action(user: c_uint, action_out: *mut c_uint) -> c_int {
    with(|r| {
        if let Some(code) = require_user(r, user) {
            return code;
        }
        let action = r.exp_training_action.get(&user).copied().unwrap_or(0x0001);
        write_out(action_out, action);
        status::EDK_OK
    })
}

extern "C" fn ee_expressiv_set_training_control(user: c_uint, control: c_int) -> c_int {
    with(|r| {
        if let Some(code) = require_user(r, user) {
            return code;
        }
        let detail = match control {
            1 => ExpressivEvent::TrainingStarted,
            2 => ExpressivEvent::TrainingCompleted,
            3 => ExpressivEvent::TrainingRejected,
            4 => ExpressivEvent::TrainingDataErased,
            5 => ExpressivEvent::TrainingReset,
            0 => return status::EDK_OK,
            _ => return status::EDK_INVALID_PARAMETER,
        };
        r.queue.push_back(MockEvent {
            expressiv_detail: detail,
            ..MockEvent::plain(EventKind::ExpressivEvent, user)
        });
        status::EDK_OK
    })
}

extern "C" fn ee_expressiv_get_training_time(user: c_uint, time_out: *mut c_uint) -> c_int {
    with(|r| {
        if let Some(code) = require_user(r, user) {
            return code;
        }
        write_out(time_out, EXPRESSIV_TRAINING_MS);
        status::EDK_OK
    })
}

extern "C" fn ee_expressiv_set_signature_type(user: c_uint, signature: c_int) -> c_int {
    with(|r| {
        if let Some(code) = require_user(r, user) {
            return code;
        }
        if signature != 0 && signature != 1 {
            return status::EDK_INVALID_PARAMETER;
        }
        if signature == 1 && r.exp_signature_available.get(&user).copied().unwrap_or(0) == 0 {
            return status::EDK_EXP_NO_SIG_AVAILABLE;
        }
        r.exp_signature_type.insert(user, signature);
        status::EDK_OK
    })
}

extern "C" fn ee_expressiv_get_signature_type(user: c_uint, signature_out: *mut c_int) -> c_int {
    with(|r| {
        if let Some(code) = require_user(r, user) {
            return code;
        }
        let signature = r.exp_signature_type.get(&user).copied().unwrap_or(0);
        write_out(signature_out, signature);
        status::EDK_OK
    })
}

extern "C" fn ee_expressiv_get_trained_signature_available(
    user: c_uint,
    available_out: *mut c_int,
) -> c_int {
    with(|r| {
        if let Some(code) = require_user(r, user) {
            return code;
        }
        let available = r.exp_signature_available.get(&user).copied().unwrap_or(0);
        write_out(available_out, available);
        status::EDK_OK
    })
}

extern "C" fn ee_expressiv_get_trained_signature_actions(
    user: c_uint,
    bits_out: *mut c_ulong,
) -> c_int {
    with(|r| {
        if let Some(code) = require_user(r, user) {
            return code;
        }
        let bits = r.exp_trained_actions.get(&user).copied().unwrap_or(0);
        write_out(bits_out, bits as c_ulong);
        status::EDK_OK
    })
}

extern "C" fn ee_cognitiv_get_active_actions(user: c_uint, bits_out: *mut c_ulong) -> c_int {
    with(|r| {
        if let Some(code) = require_user(r, user) {
            return code;
        }
        let bits = r.cog_active_actions.get(&user).copied().unwrap_or(0x0001);
        write_out(bits_out, bits as c_ulong);
        status::EDK_OK
    })
}

extern "C" fn ee_cognitiv_set_training_action(user: c_uint, action: c_int) -> c_int {
    with(|r| {
        if let Some(code) = require_user(r, user) {
            return code;
        }
        r.cog_training_action.insert(user, action as u32);
        status::EDK_OK
    })
}

extern "C" fn ee_cognitiv_get_training_action(user: c_uint, action_out: *mut c_uint) -> c_int {
    with(|r| {
        if let Some(code) = require_user(r, user) {
            return code;
        }
        let action = r.cog_training_action.get(&user).copied().unwrap_or(0x0001);
        write_out(action_out, action);
        status::EDK_OK
    })
}

extern "C" fn ee_cognitiv_set_training_control(user: c_uint, control: c_int) -> c_int {
    with(|r| {
        if let Some(code) = require_user(r, user) {
            return code;
        }
        let detail = match control {
            1 => CognitivEvent::TrainingStarted,
            2 => CognitivEvent::TrainingCompleted,
            3 => CognitivEvent::TrainingRejected,
            4 => CognitivEvent::TrainingDataErased,
            5 => CognitivEvent::TrainingReset,
            0 => return status::EDK_OK,
            _ => return status::EDK_COG_INVALID_TRAINING_CONTROL,
        };
        r.queue.push_back(MockEvent {
            cognitiv_detail: detail,
            ..MockEvent::plain(EventKind::CognitivEvent, user)
        });
        status::EDK_OK
    })
}

extern "C" fn ee_cognitiv_get_training_time(user: c_uint, time_out: *mut c_uint) -> c_int {
    with(|r| {
        if let Some(code) = require_user(r, user) {
            return code;
        }
        write_out(time_out, COGNITIV_TRAINING_MS);
        status::EDK_OK
    })
}

extern "C" fn ee_cognitiv_set_activation_level(user: c_uint, level: c_int) -> c_int {
    with(|r| {
        if let Some(code) = require_user(r, user) {
            return code;
        }
        if !(1..=7).contains(&level) {
            return status::EDK_OUT_OF_RANGE;
        }
        r.activation_level.insert(user, level);
        status::EDK_OK
    })
}

extern "C" fn ee_cognitiv_get_activation_level(user: c_uint, level_out: *mut c_int) -> c_int {
    with(|r| {
        if let Some(code) = require_user(r, user) {
            return code;
        }
        let level = r.activation_level.get(&user).copied().unwrap_or(5);
        write_out(level_out, level);
        status::EDK_OK
    })
}

extern "C" fn ee_cognitiv_set_action_sensitivity(
    user: c_uint,
    s1: c_int,
    s2: c_int,
    s3: c_int,
    s4: c_int,
) -> c_int {
    with(|r| {
        if let Some(code) = require_user(r, user) {
            return code;
        }
        r.sensitivity.insert(user, [s1, s2, s3, s4]);
        status::EDK_OK
    })
}

extern "C" fn ee_cognitiv_get_action_sensitivity(
    user: c_uint,
    s1: *mut c_int,
    s2: *mut c_int,
    s3: *mut c_int,
    s4: *mut c_int,
) -> c_int {
    with(|r| {
        if let Some(code) = require_user(r, user) {
            return code;
        }
        let [v1, v2, v3, v4] = r.sensitivity.get(&user).copied().unwrap_or([5, 5, 5, 5]);
        write_out(s1, v1);
        write_out(s2, v2);
        write_out(s3, v3);
        write_out(s4, v4);
        status::EDK_OK
    })
}

extern "C" fn ee_cognitiv_start_sampling_neutral(user: c_uint) -> c_int {
    with(|r| {
        if let Some(code) = require_user(r, user) {
            return code;
        }
        r.sampling_neutral.insert(user, true);
        status::EDK_OK
    })
}

extern "C" fn ee_cognitiv_stop_sampling_neutral(user: c_uint) -> c_int {
    with(|r| {
        if let Some(code) = require_user(r, user) {
            return code;
        }
        r.sampling_neutral.insert(user, false);
        r.queue.push_back(MockEvent {
            cognitiv_detail: CognitivEvent::AutoSamplingNeutralCompleted,
            ..MockEvent::plain(EventKind::CognitivEvent, user)
        });
        status::EDK_OK
    })
}

extern "C" fn ee_cognitiv_set_signature_caching(user: c_uint, enabled: c_uint) -> c_int {
    with(|r| {
        if let Some(code) = require_user(r, user) {
            return code;
        }
        r.caching.insert(user, enabled);
        status::EDK_OK
    })
}

extern "C" fn ee_cognitiv_get_signature_caching(user: c_uint, enabled_out: *mut c_uint) -> c_int {
    with(|r| {
        if let Some(code) = require_user(r, user) {
            return code;
        }
        let enabled = r.caching.get(&user).copied().unwrap_or(1);
        write_out(enabled_out, enabled);
        status::EDK_OK
    })
}

extern "C" fn ee_cognitiv_set_signature_cache_size(user: c_uint, size: c_uint) -> c_int {
    with(|r| {
        if let Some(code) = require_user(r, user) {
            return code;
        }
        r.cache_size.insert(user, size);
        status::EDK_OK
    })
}

extern "C" fn ee_cognitiv_get_signature_cache_size(user: c_uint, size_out: *mut c_uint) -> c_int {
    with(|r| {
        if let Some(code) = require_user(r, user) {
            return code;
        }
        let size = r.cache_size.get(&user).copied().unwrap_or(0);
        write_out(size_out, size);
        status::EDK_OK
    })
}

extern "C" fn ee_cognitiv_get_trained_signature_actions(
    user: c_uint,
    bits_out: *mut c_ulong,
) -> c_int {
    with(|r| {
        if let Some(code) = require_user(r, user) {
            return code;
        }
        let bits = r.cog_trained_actions.get(&user).copied().unwrap_or(0);
        write_out(bits_out, bits as c_ulong);
        status::EDK_OK
    })
}

extern "C" fn ee_cognitiv_get_overall_skill_rating(
    user: c_uint,
    rating_out: *mut c_float,
) -> c_int {
    with(|r| {
        if let Some(code) = require_user(r, user) {
            return code;
        }
        let rating = r.skill_overall.get(&user).copied().unwrap_or(0.0);
        write_out(rating_out, rating);
        status::EDK_OK
    })
}

extern "C" fn ee_cognitiv_get_action_skill_rating(
    user: c_uint,
    action: c_int,
    rating_out: *mut c_float,
) -> c_int {
    with(|r| {
        if let Some(code) = require_user(r, user) {
            return code;
        }
        let rating = r
            .skill_action
            .get(&(user, action as u32))
            .copied()
            .unwrap_or(0.0);
        write_out(rating_out, rating);
        status::EDK_OK
    })
}

static SENSOR_LABELS: [&[u8]; 18] = [
    b"CMS\0", b"DRL\0", b"FP1\0", b"AF3\0", b"F7\0", b"F3\0", b"FC5\0", b"T7\0", b"P7\0",
    b"O1\0", b"O2\0", b"P8\0", b"T8\0", b"FC6\0", b"F4\0", b"F8\0", b"AF4\0", b"FP2\0",
];

extern "C" fn ee_headset_get_sensor_details(
    channel: c_int,
    descriptor_out: *mut RawSensorDescriptor,
) -> c_int {
    if descriptor_out.is_null() || !(0..18).contains(&channel) {
        return status::EDK_INVALID_PARAMETER;
    }
    let descriptor = RawSensorDescriptor {
        channel_id: channel,
        exists: 1,
        label: SENSOR_LABELS[channel as usize].as_ptr() as *const c_char,
        x_loc: 0.0,
        y_loc: 0.0,
        z_loc: 0.0,
    };
    unsafe { *descriptor_out = descriptor };
    status::EDK_OK
}

extern "C" fn ee_hardware_get_version(user: c_uint, version_out: *mut c_ulong) -> c_int {
    with(|r| {
        if let Some(code) = require_user(r, user) {
            return code;
        }
        write_out(version_out, r.hardware_version as c_ulong);
        status::EDK_OK
    })
}

extern "C" fn ee_software_get_version(
    version_out: *mut c_char,
    version_len: c_uint,
    build_out: *mut c_ulong,
) -> c_int {
    if version_out.is_null() {
        return status::EDK_INVALID_PARAMETER;
    }
    with(|r| {
        let (version, build) = r.software_version.clone();
        let bytes = version.as_bytes();
        if (version_len as usize) < bytes.len() + 1 {
            return status::EDK_BUFFER_TOO_SMALL;
        }
        unsafe {
            std::ptr::copy_nonoverlapping(bytes.as_ptr() as *const c_char, version_out, bytes.len());
            *version_out.add(bytes.len()) = 0;
        }
        write_out(build_out, build as c_ulong);
        status::EDK_OK
    })
}

extern "C" fn ee_headset_get_gyro_delta(user: c_uint, x_out: *mut c_int, y_out: *mut c_int) -> c_int {
    with(|r| {
        if let Some(code) = require_user(r, user) {
            return code;
        }
        if !r.gyro_calibrated {
            return status::EDK_GYRO_NOT_CALIBRATED;
        }
        let (x, y) = r.gyro;
        r.gyro = (0, 0);
        write_out(x_out, x);
        write_out(y_out, y);
        status::EDK_OK
    })
}

extern "C" fn ee_headset_gyro_rezero(user: c_uint) -> c_int {
    with(|r| {
        if let Some(code) = require_user(r, user) {
            return code;
        }
        r.gyro = (0, 0);
        r.gyro_calibrated = true;
        status::EDK_OK
    })
}

extern "C" fn ee_optimization_param_create() -> RawHandle {
    with(|r| {
        if r.fail_allocations {
            return std::ptr::null_mut();
        }
        let id = r.alloc();
        r.params.insert(id, ParamSlot::default());
        r.counters.params_created += 1;
        id as RawHandle
    })
}

extern "C" fn ee_optimization_param_free(handle: RawHandle) {
    with(|r| {
        if r.params.remove(&(handle as usize)).is_some() {
            r.counters.params_freed += 1;
        }
    });
}

extern "C" fn ee_optimization_enable(handle: RawHandle) -> c_int {
    with(|r| match r.params.get(&(handle as usize)) {
        Some(slot) => {
            r.current_vital = slot.vital;
            r.optimization_on = true;
            status::EDK_OK
        }
        None => status::EDK_INVALID_PARAMETER,
    })
}

extern "C" fn ee_optimization_is_enabled(enabled_out: *mut bool) -> c_int {
    with(|r| {
        write_out(enabled_out, r.optimization_on);
        status::EDK_OK
    })
}

extern "C" fn ee_optimization_disable() -> c_int {
    with(|r| {
        r.optimization_on = false;
        status::EDK_OK
    })
}

extern "C" fn ee_optimization_get_param(handle: RawHandle) -> c_int {
    with(|r| {
        let vital = r.current_vital;
        match r.params.get_mut(&(handle as usize)) {
            Some(slot) => {
                slot.vital = vital;
                status::EDK_OK
            }
            None => status::EDK_INVALID_PARAMETER,
        }
    })
}

extern "C" fn ee_optimization_get_vital_algorithm(
    handle: RawHandle,
    suite: c_int,
    bits_out: *mut c_uint,
) -> c_int {
    if !(0..3).contains(&suite) {
        return status::EDK_INVALID_PARAMETER;
    }
    with(|r| match r.params.get(&(handle as usize)) {
        Some(slot) => {
            write_out(bits_out, slot.vital[suite as usize]);
            status::EDK_OK
        }
        None => status::EDK_INVALID_PARAMETER,
    })
}

extern "C" fn ee_optimization_set_vital_algorithm(
    handle: RawHandle,
    suite: c_int,
    bits: c_uint,
) -> c_int {
    if !(0..3).contains(&suite) {
        return status::EDK_INVALID_PARAMETER;
    }
    with(|r| match r.params.get_mut(&(handle as usize)) {
        Some(slot) => {
            slot.vital[suite as usize] = bits;
            status::EDK_OK
        }
        None => status::EDK_INVALID_PARAMETER,
    })
}

extern "C" fn ee_reset_detection(user: c_uint, suite: c_int, detections: c_uint) -> c_int {
    with(|r| {
        if let Some(code) = require_user(r, user) {
            return code;
        }
        if !(0..3).contains(&suite) {
            return status::EDK_INVALID_PARAMETER;
        }
        r.last_reset = Some((user, suite, detections));
        status::EDK_OK
    })
}

extern "C" fn es_init(state: RawHandle) {
    with(|r| {
        if let Some(slot) = r.states.get_mut(&(state as usize)) {
            *slot = MockState::default();
        }
    });
}

extern "C" fn es_copy(dest: RawHandle, src: RawHandle) {
    with(|r| {
        let snapshot = match r.states.get(&(src as usize)) {
            Some(state) => state.clone(),
            None => return,
        };
        if let Some(slot) = r.states.get_mut(&(dest as usize)) {
            *slot = snapshot;
        }
    });
}

extern "C" fn es_get_time_from_start(state: RawHandle) -> c_float {
    state_field(state, |s| s.time_from_start)
}

extern "C" fn es_get_headset_on(state: RawHandle) -> c_int {
    state_field(state, |s| c_int::from(s.headset_on))
}

extern "C" fn es_get_num_contact_quality_channels(state: RawHandle) -> c_int {
    state_field(state, |s| s.contact_quality_channels)
}

extern "C" fn es_get_contact_quality(state: RawHandle, channel: c_int) -> c_int {
    state_field(state, |s| match usize::try_from(channel) {
        Ok(index) => s.contact_quality.get(index).copied().unwrap_or(0),
        Err(_) => 0,
    })
}

extern "C" fn es_get_wireless_signal_status(state: RawHandle) -> c_int {
    state_field(state, |s| s.wireless)
}

extern "C" fn es_get_battery_charge_level(
    state: RawHandle,
    level_out: *mut c_int,
    max_out: *mut c_int,
) {
    let (level, max) = state_field(state, |s| (s.battery_level, s.battery_max));
    write_out(level_out, level);
    write_out(max_out, max);
}

extern "C" fn es_expressiv_is_blink(state: RawHandle) -> c_int {
    state_field(state, |s| c_int::from(s.blink))
}

extern "C" fn es_expressiv_is_left_wink(state: RawHandle) -> c_int {
    state_field(state, |s| c_int::from(s.left_wink))
}

extern "C" fn es_expressiv_is_right_wink(state: RawHandle) -> c_int {
    state_field(state, |s| c_int::from(s.right_wink))
}

extern "C" fn es_expressiv_is_eyes_open(state: RawHandle) -> c_int {
    state_field(state, |s| c_int::from(s.eyes_open))
}

extern "C" fn es_expressiv_is_looking_up(state: RawHandle) -> c_int {
    state_field(state, |s| c_int::from(s.looking_up))
}

extern "C" fn es_expressiv_is_looking_down(state: RawHandle) -> c_int {
    state_field(state, |s| c_int::from(s.looking_down))
}

extern "C" fn es_expressiv_is_looking_left(state: RawHandle) -> c_int {
    state_field(state, |s| c_int::from(s.looking_left))
}

extern "C" fn es_expressiv_is_looking_right(state: RawHandle) -> c_int {
    state_field(state, |s| c_int::from(s.looking_right))
}

extern "C" fn es_expressiv_get_eyelid_state(
    state: RawHandle,
    left_out: *mut c_float,
    right_out: *mut c_float,
) {
    let (left, right) = state_field(state, |s| s.eyelid);
    write_out(left_out, left);
    write_out(right_out, right);
}

extern "C" fn es_expressiv_get_eye_location(
    state: RawHandle,
    x_out: *mut c_float,
    y_out: *mut c_float,
) {
    let (x, y) = state_field(state, |s| s.eye_location);
    write_out(x_out, x);
    write_out(y_out, y);
}

extern "C" fn es_expressiv_get_upper_face_action(state: RawHandle) -> c_int {
    state_field(state, |s| s.upper_face_action as c_int)
}

extern "C" fn es_expressiv_get_upper_face_action_power(state: RawHandle) -> c_float {
    state_field(state, |s| s.upper_face_power)
}

extern "C" fn es_expressiv_get_lower_face_action(state: RawHandle) -> c_int {
    state_field(state, |s| s.lower_face_action as c_int)
}

extern "C" fn es_expressiv_get_lower_face_action_power(state: RawHandle) -> c_float {
    state_field(state, |s| s.lower_face_power)
}

extern "C" fn es_expressiv_is_active(state: RawHandle, flag: c_int) -> c_int {
    state_field(state, |s| {
        c_int::from(s.active_expressiv & flag as u32 != 0)
    })
}

extern "C" fn es_expressiv_get_eyebrow_extent(state: RawHandle) -> c_float {
    state_field(state, |s| s.eyebrow_extent)
}

extern "C" fn es_expressiv_get_smile_extent(state: RawHandle) -> c_float {
    state_field(state, |s| s.smile_extent)
}

extern "C" fn es_expressiv_get_clench_extent(state: RawHandle) -> c_float {
    state_field(state, |s| s.clench_extent)
}

extern "C" fn es_affectiv_get_excitement_short(state: RawHandle) -> c_float {
    state_field(state, |s| s.excitement_short)
}

extern "C" fn es_affectiv_get_excitement_long(state: RawHandle) -> c_float {
    state_field(state, |s| s.excitement_long)
}

extern "C" fn es_affectiv_get_meditation(state: RawHandle) -> c_float {
    state_field(state, |s| s.meditation)
}

extern "C" fn es_affectiv_get_frustration(state: RawHandle) -> c_float {
    state_field(state, |s| s.frustration)
}

extern "C" fn es_affectiv_get_engagement(state: RawHandle) -> c_float {
    state_field(state, |s| s.engagement)
}

extern "C" fn es_affectiv_is_active(state: RawHandle, flag: c_int) -> c_int {
    state_field(state, |s| c_int::from(s.active_affectiv & flag as u32 != 0))
}

extern "C" fn es_cognitiv_get_current_action(state: RawHandle) -> c_int {
    state_field(state, |s| s.cognitiv_action as c_int)
}

extern "C" fn es_cognitiv_get_current_action_power(state: RawHandle) -> c_float {
    state_field(state, |s| s.cognitiv_power)
}

extern "C" fn es_cognitiv_is_active(state: RawHandle) -> c_int {
    state_field(state, |s| c_int::from(s.cognitiv_active))
}

fn compare_states(a: RawHandle, b: RawHandle, eq: impl Fn(&MockState, &MockState) -> bool) -> c_int {
    with(|r| {
        let a = r.states.get(&(a as usize));
        let b = r.states.get(&(b as usize));
        match (a, b) {
            (Some(a), Some(b)) => c_int::from(eq(a, b)),
            _ => 0,
        }
    })
}

extern "C" fn es_affectiv_equal(a: RawHandle, b: RawHandle) -> c_int {
    compare_states(a, b, affectiv_eq)
}

extern "C" fn es_expressiv_equal(a: RawHandle, b: RawHandle) -> c_int {
    compare_states(a, b, expressiv_eq)
}

extern "C" fn es_cognitiv_equal(a: RawHandle, b: RawHandle) -> c_int {
    compare_states(a, b, cognitiv_eq)
}

extern "C" fn es_emoengine_equal(a: RawHandle, b: RawHandle) -> c_int {
    compare_states(a, b, engine_eq)
}

extern "C" fn es_equal(a: RawHandle, b: RawHandle) -> c_int {
    compare_states(a, b, |x, y| x == y)
}

fn mock_api() -> EdkApi {
    EdkApi {
        engine_connect: ee_engine_connect,
        engine_remote_connect: ee_engine_remote_connect,
        engine_disconnect: ee_engine_disconnect,
        enable_diagnostics: ee_enable_diagnostics,
        event_create: ee_event_create,
        profile_event_create: ee_event_create,
        event_free: ee_event_free,
        state_create: ee_state_create,
        state_free: ee_state_free,
        event_get_type: ee_event_get_type,
        expressiv_event_get_type: ee_expressiv_event_get_type,
        cognitiv_event_get_type: ee_cognitiv_event_get_type,
        event_get_user: ee_event_get_user,
        event_get_state: ee_event_get_state,
        get_next_event: ee_get_next_event,
        clear_event_queue: ee_clear_event_queue,
        get_user_count: ee_get_user_count,
        set_player_display: ee_set_player_display,
        set_user_profile: ee_set_user_profile,
        get_user_profile: ee_get_user_profile,
        get_base_profile: ee_get_base_profile,
        get_profile_size: ee_get_profile_size,
        get_profile_bytes: ee_get_profile_bytes,
        load_user_profile: ee_load_user_profile,
        save_user_profile: ee_save_user_profile,
        expressiv_set_threshold: ee_expressiv_set_threshold,
        expressiv_get_threshold: ee_expressiv_get_threshold,
        expressiv_set_training_action: ee_expressiv_set_training_action,
        expressiv_get_training_action: ee_expressiv_get_training_action,
        expressiv_set_training_control: ee_expressiv_set_training_control,
        expressiv_get_training_time: ee_expressiv_get_training_time,
        expressiv_set_signature_type: ee_expressiv_set_signature_type,
        expressiv_get_signature_type: ee_expressiv_get_signature_type,
        expressiv_get_trained_signature_available: ee_expressiv_get_trained_signature_available,
        expressiv_get_trained_signature_actions: ee_expressiv_get_trained_signature_actions,
        cognitiv_get_active_actions: ee_cognitiv_get_active_actions,
        cognitiv_set_training_action: ee_cognitiv_set_training_action,
        cognitiv_get_training_action: ee_cognitiv_get_training_action,
        cognitiv_set_training_control: ee_cognitiv_set_training_control,
        cognitiv_get_training_time: ee_cognitiv_get_training_time,
        cognitiv_set_activation_level: ee_cognitiv_set_activation_level,
        cognitiv_get_activation_level: ee_cognitiv_get_activation_level,
        cognitiv_set_action_sensitivity: ee_cognitiv_set_action_sensitivity,
        cognitiv_get_action_sensitivity: ee_cognitiv_get_action_sensitivity,
        cognitiv_start_sampling_neutral: ee_cognitiv_start_sampling_neutral,
        cognitiv_stop_sampling_neutral: ee_cognitiv_stop_sampling_neutral,
        cognitiv_set_signature_caching: ee_cognitiv_set_signature_caching,
        cognitiv_get_signature_caching: ee_cognitiv_get_signature_caching,
        cognitiv_set_signature_cache_size: ee_cognitiv_set_signature_cache_size,
        cognitiv_get_signature_cache_size: ee_cognitiv_get_signature_cache_size,
        cognitiv_get_trained_signature_actions: ee_cognitiv_get_trained_signature_actions,
        cognitiv_get_overall_skill_rating: ee_cognitiv_get_overall_skill_rating,
        cognitiv_get_action_skill_rating: ee_cognitiv_get_action_skill_rating,
        headset_get_sensor_details: ee_headset_get_sensor_details,
        hardware_get_version: ee_hardware_get_version,
        software_get_version: ee_software_get_version,
        headset_get_gyro_delta: ee_headset_get_gyro_delta,
        headset_gyro_rezero: ee_headset_gyro_rezero,
        optimization_param_create: ee_optimization_param_create,
        optimization_param_free: ee_optimization_param_free,
        optimization_enable: ee_optimization_enable,
        optimization_is_enabled: ee_optimization_is_enabled,
        optimization_disable: ee_optimization_disable,
        optimization_get_param: ee_optimization_get_param,
        optimization_get_vital_algorithm: ee_optimization_get_vital_algorithm,
        optimization_set_vital_algorithm: ee_optimization_set_vital_algorithm,
        reset_detection: ee_reset_detection,
        state_init: es_init,
        state_copy: es_copy,
        get_time_from_start: es_get_time_from_start,
        get_headset_on: es_get_headset_on,
        get_num_contact_quality_channels: es_get_num_contact_quality_channels,
        get_contact_quality: es_get_contact_quality,
        get_wireless_signal_status: es_get_wireless_signal_status,
        get_battery_charge_level: es_get_battery_charge_level,
        expressiv_is_blink: es_expressiv_is_blink,
        expressiv_is_left_wink: es_expressiv_is_left_wink,
        expressiv_is_right_wink: es_expressiv_is_right_wink,
        expressiv_is_eyes_open: es_expressiv_is_eyes_open,
        expressiv_is_looking_up: es_expressiv_is_looking_up,
        expressiv_is_looking_down: es_expressiv_is_looking_down,
        expressiv_is_looking_left: es_expressiv_is_looking_left,
        expressiv_is_looking_right: es_expressiv_is_looking_right,
        expressiv_get_eyelid_state: es_expressiv_get_eyelid_state,
        expressiv_get_eye_location: es_expressiv_get_eye_location,
        expressiv_get_upper_face_action: es_expressiv_get_upper_face_action,
        expressiv_get_upper_face_action_power: es_expressiv_get_upper_face_action_power,
        expressiv_get_lower_face_action: es_expressiv_get_lower_face_action,
        expressiv_get_lower_face_action_power: es_expressiv_get_lower_face_action_power,
        expressiv_is_active: es_expressiv_is_active,
        expressiv_get_eyebrow_extent: es_expressiv_get_eyebrow_extent,
        expressiv_get_smile_extent: es_expressiv_get_smile_extent,
        expressiv_get_clench_extent: es_expressiv_get_clench_extent,
        affectiv_get_excitement_short_term_score: es_affectiv_get_excitement_short,
        affectiv_get_excitement_long_term_score: es_affectiv_get_excitement_long,
        affectiv_get_meditation_score: es_affectiv_get_meditation,
        affectiv_get_frustration_score: es_affectiv_get_frustration,
        affectiv_get_engagement_boredom_score: es_affectiv_get_engagement,
        affectiv_is_active: es_affectiv_is_active,
        cognitiv_get_current_action: es_cognitiv_get_current_action,
        cognitiv_get_current_action_power: es_cognitiv_get_current_action_power,
        cognitiv_is_active: es_cognitiv_is_active,
        affectiv_equal: es_affectiv_equal,
        expressiv_equal: es_expressiv_equal,
        cognitiv_equal: es_cognitiv_equal,
        emoengine_equal: es_emoengine_equal,
        state_equal: es_equal,
    }
}
