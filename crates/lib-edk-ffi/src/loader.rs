//! Runtime loading of the EmoEngine shared library.
//!
//! The vendor never ships import libraries for every toolchain, so the
//! binding loads `edk` at runtime and resolves every export up front. A
//! library missing any export fails the load; nothing can fail symbol
//! resolution later at call time.

use crate::abi::EdkApi;
use crate::error::{EngineError, EngineResult};
use libloading::Library;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// Platform file name of the vendor library.
#[cfg(target_os = "windows")]
pub fn default_library_name() -> &'static str {
    "edk.dll"
}

/// Platform file name of the vendor library.
#[cfg(target_os = "macos")]
pub fn default_library_name() -> &'static str {
    "libedk.dylib"
}

/// Platform file name of the vendor library.
#[cfg(not(any(target_os = "windows", target_os = "macos")))]
pub fn default_library_name() -> &'static str {
    "libedk.so"
}

/// A loaded EmoEngine library with its full export table resolved.
///
/// Shared behind an [`Arc`] by every session and handle created from it,
/// so the mapping outlives anything still pointing into it.
pub struct EdkLibrary {
    /// Keeps the shared library mapped for as long as the table is alive.
    #[allow(dead_code)]
    library: Option<Library>,
    /// Where the library was loaded from.
    pub path: String,
    api: EdkApi,
}

// The export table is immutable after load and the mapping itself holds no
// Rust-visible state. Thread confinement of actual engine calls is
// enforced by the session and handle types, not here.
unsafe impl Send for EdkLibrary {}
unsafe impl Sync for EdkLibrary {}

// The export table is a hundred-odd function pointers; the source path is
// what identifies a mapping.
impl fmt::Debug for EdkLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EdkLibrary")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl EdkLibrary {
    /// Load the vendor library from `path` and resolve every export.
    pub fn load(path: &Path) -> EngineResult<Arc<Self>> {
        let path_str = path.display().to_string();
        let library =
            unsafe { Library::new(path) }.map_err(|e| EngineError::load_error(&path_str, e))?;

        let api = EdkApi {
            engine_connect: resolve(&library, b"EE_EngineConnect\0")?,
            engine_remote_connect: resolve(&library, b"EE_EngineRemoteConnect\0")?,
            engine_disconnect: resolve(&library, b"EE_EngineDisconnect\0")?,
            enable_diagnostics: resolve(&library, b"EE_EnableDiagnostics\0")?,
            event_create: resolve(&library, b"EE_EmoEngineEventCreate\0")?,
            profile_event_create: resolve(&library, b"EE_ProfileEventCreate\0")?,
            event_free: resolve(&library, b"EE_EmoEngineEventFree\0")?,
            state_create: resolve(&library, b"EE_EmoStateCreate\0")?,
            state_free: resolve(&library, b"EE_EmoStateFree\0")?,
            event_get_type: resolve(&library, b"EE_EmoEngineEventGetType\0")?,
            expressiv_event_get_type: resolve(&library, b"EE_ExpressivEventGetType\0")?,
            cognitiv_event_get_type: resolve(&library, b"EE_CognitivEventGetType\0")?,
            event_get_user: resolve(&library, b"EE_EmoEngineEventGetUserId\0")?,
            event_get_state: resolve(&library, b"EE_EmoEngineEventGetEmoState\0")?,
            get_next_event: resolve(&library, b"EE_EngineGetNextEvent\0")?,
            clear_event_queue: resolve(&library, b"EE_EngineClearEventQueue\0")?,
            get_user_count: resolve(&library, b"EE_EngineGetNumUser\0")?,
            set_player_display: resolve(&library, b"EE_SetHardwarePlayerDisplay\0")?,
            set_user_profile: resolve(&library, b"EE_SetUserProfile\0")?,
            get_user_profile: resolve(&library, b"EE_GetUserProfile\0")?,
            get_base_profile: resolve(&library, b"EE_GetBaseProfile\0")?,
            get_profile_size: resolve(&library, b"EE_GetUserProfileSize\0")?,
            get_profile_bytes: resolve(&library, b"EE_GetUserProfileBytes\0")?,
            load_user_profile: resolve(&library, b"EE_LoadUserProfile\0")?,
            save_user_profile: resolve(&library, b"EE_SaveUserProfile\0")?,
            expressiv_set_threshold: resolve(&library, b"EE_ExpressivSetThreshold\0")?,
            expressiv_get_threshold: resolve(&library, b"EE_ExpressivGetThreshold\0")?,
            expressiv_set_training_action: resolve(&library, b"EE_ExpressivSetTrainingAction\0")?,
            expressiv_get_training_action: resolve(&library, b"EE_ExpressivGetTrainingAction\0")?,
            expressiv_set_training_control: resolve(&library, b"EE_ExpressivSetTrainingControl\0")?,
            expressiv_get_training_time: resolve(&library, b"EE_ExpressivGetTrainingTime\0")?,
            expressiv_set_signature_type: resolve(&library, b"EE_ExpressivSetSignatureType\0")?,
            expressiv_get_signature_type: resolve(&library, b"EE_ExpressivGetSignatureType\0")?,
            expressiv_get_trained_signature_available: resolve(
                &library,
                b"EE_ExpressivGetTrainedSignatureAvailable\0",
            )?,
            expressiv_get_trained_signature_actions: resolve(
                &library,
                b"EE_ExpressivGetTrainedSignatureActions\0",
            )?,
            cognitiv_get_active_actions: resolve(&library, b"EE_CognitivGetActiveActions\0")?,
            cognitiv_set_training_action: resolve(&library, b"EE_CognitivSetTrainingAction\0")?,
            cognitiv_get_training_action: resolve(&library, b"EE_CognitivGetTrainingAction\0")?,
            cognitiv_set_training_control: resolve(&library, b"EE_CognitivSetTrainingControl\0")?,
            cognitiv_get_training_time: resolve(&library, b"EE_CognitivGetTrainingTime\0")?,
            cognitiv_set_activation_level: resolve(&library, b"EE_CognitivSetActivationLevel\0")?,
            cognitiv_get_activation_level: resolve(&library, b"EE_CognitivGetActivationLevel\0")?,
            cognitiv_set_action_sensitivity: resolve(
                &library,
                b"EE_CognitivSetActionSensitivity\0",
            )?,
            cognitiv_get_action_sensitivity: resolve(
                &library,
                b"EE_CognitivGetActionSensitivity\0",
            )?,
            cognitiv_start_sampling_neutral: resolve(
                &library,
                b"EE_CognitivStartSamplingNeutral\0",
            )?,
            cognitiv_stop_sampling_neutral: resolve(&library, b"EE_CognitivStopSamplingNeutral\0")?,
            cognitiv_set_signature_caching: resolve(&library, b"EE_CognitivSetSignatureCaching\0")?,
            cognitiv_get_signature_caching: resolve(&library, b"EE_CognitivGetSignatureCaching\0")?,
            cognitiv_set_signature_cache_size: resolve(
                &library,
                b"EE_CognitivSetSignatureCacheSize\0",
            )?,
            cognitiv_get_signature_cache_size: resolve(
                &library,
                b"EE_CognitivGetSignatureCacheSize\0",
            )?,
            cognitiv_get_trained_signature_actions: resolve(
                &library,
                b"EE_CognitivGetTrainedSignatureActions\0",
            )?,
            cognitiv_get_overall_skill_rating: resolve(
                &library,
                b"EE_CognitivGetOverallSkillRating\0",
            )?,
            cognitiv_get_action_skill_rating: resolve(
                &library,
                b"EE_CognitivGetActionSkillRating\0",
            )?,
            headset_get_sensor_details: resolve(&library, b"EE_HeadsetGetSensorDetails\0")?,
            hardware_get_version: resolve(&library, b"EE_HardwareGetVersion\0")?,
            software_get_version: resolve(&library, b"EE_SoftwareGetVersion\0")?,
            headset_get_gyro_delta: resolve(&library, b"EE_HeadsetGetGyroDelta\0")?,
            headset_gyro_rezero: resolve(&library, b"EE_HeadsetGyroRezero\0")?,
            optimization_param_create: resolve(&library, b"EE_OptimizationParamCreate\0")?,
            optimization_param_free: resolve(&library, b"EE_OptimizationParamFree\0")?,
            optimization_enable: resolve(&library, b"EE_OptimizationEnable\0")?,
            optimization_is_enabled: resolve(&library, b"EE_OptimizationIsEnabled\0")?,
            optimization_disable: resolve(&library, b"EE_OptimizationDisable\0")?,
            optimization_get_param: resolve(&library, b"EE_OptimizationGetParam\0")?,
            optimization_get_vital_algorithm: resolve(
                &library,
                b"EE_OptimizationGetVitalAlgorithm\0",
            )?,
            optimization_set_vital_algorithm: resolve(
                &library,
                b"EE_OptimizationSetVitalAlgorithm\0",
            )?,
            reset_detection: resolve(&library, b"EE_ResetDetection\0")?,
            state_init: resolve(&library, b"ES_Init\0")?,
            state_copy: resolve(&library, b"ES_Copy\0")?,
            get_time_from_start: resolve(&library, b"ES_GetTimeFromStart\0")?,
            get_headset_on: resolve(&library, b"ES_GetHeadsetOn\0")?,
            get_num_contact_quality_channels: resolve(
                &library,
                b"ES_GetNumContactQualityChannels\0",
            )?,
            get_contact_quality: resolve(&library, b"ES_GetContactQuality\0")?,
            get_wireless_signal_status: resolve(&library, b"ES_GetWirelessSignalStatus\0")?,
            get_battery_charge_level: resolve(&library, b"ES_GetBatteryChargeLevel\0")?,
            expressiv_is_blink: resolve(&library, b"ES_ExpressivIsBlink\0")?,
            expressiv_is_left_wink: resolve(&library, b"ES_ExpressivIsLeftWink\0")?,
            expressiv_is_right_wink: resolve(&library, b"ES_ExpressivIsRightWink\0")?,
            expressiv_is_eyes_open: resolve(&library, b"ES_ExpressivIsEyesOpen\0")?,
            expressiv_is_looking_up: resolve(&library, b"ES_ExpressivIsLookingUp\0")?,
            expressiv_is_looking_down: resolve(&library, b"ES_ExpressivIsLookingDown\0")?,
            expressiv_is_looking_left: resolve(&library, b"ES_ExpressivIsLookingLeft\0")?,
            expressiv_is_looking_right: resolve(&library, b"ES_ExpressivIsLookingRight\0")?,
            expressiv_get_eyelid_state: resolve(&library, b"ES_ExpressivGetEyelidState\0")?,
            expressiv_get_eye_location: resolve(&library, b"ES_ExpressivGetEyeLocation\0")?,
            expressiv_get_upper_face_action: resolve(
                &library,
                b"ES_ExpressivGetUpperFaceAction\0",
            )?,
            expressiv_get_upper_face_action_power: resolve(
                &library,
                b"ES_ExpressivGetUpperFaceActionPower\0",
            )?,
            expressiv_get_lower_face_action: resolve(
                &library,
                b"ES_ExpressivGetLowerFaceAction\0",
            )?,
            expressiv_get_lower_face_action_power: resolve(
                &library,
                b"ES_ExpressivGetLowerFaceActionPower\0",
            )?,
            expressiv_is_active: resolve(&library, b"ES_ExpressivIsActive\0")?,
            expressiv_get_eyebrow_extent: resolve(&library, b"ES_ExpressivGetEyebrowExtent\0")?,
            expressiv_get_smile_extent: resolve(&library, b"ES_ExpressivGetSmileExtent\0")?,
            expressiv_get_clench_extent: resolve(&library, b"ES_ExpressivGetClenchExtent\0")?,
            affectiv_get_excitement_short_term_score: resolve(
                &library,
                b"ES_AffectivGetExcitementShortTermScore\0",
            )?,
            affectiv_get_excitement_long_term_score: resolve(
                &library,
                b"ES_AffectivGetExcitementLongTermScore\0",
            )?,
            affectiv_get_meditation_score: resolve(&library, b"ES_AffectivGetMeditationScore\0")?,
            affectiv_get_frustration_score: resolve(&library, b"ES_AffectivGetFrustrationScore\0")?,
            affectiv_get_engagement_boredom_score: resolve(
                &library,
                b"ES_AffectivGetEngagementBoredomScore\0",
            )?,
            affectiv_is_active: resolve(&library, b"ES_AffectivIsActive\0")?,
            cognitiv_get_current_action: resolve(&library, b"ES_CognitivGetCurrentAction\0")?,
            cognitiv_get_current_action_power: resolve(
                &library,
                b"ES_CognitivGetCurrentActionPower\0",
            )?,
            cognitiv_is_active: resolve(&library, b"ES_CognitivIsActive\0")?,
            affectiv_equal: resolve(&library, b"ES_AffectivEqual\0")?,
            expressiv_equal: resolve(&library, b"ES_ExpressivEqual\0")?,
            cognitiv_equal: resolve(&library, b"ES_CognitivEqual\0")?,
            emoengine_equal: resolve(&library, b"ES_EmoEngineEqual\0")?,
            state_equal: resolve(&library, b"ES_Equal\0")?,
        };

        tracing::info!(path = %path_str, "Loaded EmoEngine library");
        Ok(Arc::new(EdkLibrary {
            library: Some(library),
            path: path_str,
            api,
        }))
    }

    /// Build a library around an already-resolved table. Test doubles use
    /// this to stand in for the vendor binary.
    #[cfg(test)]
    pub(crate) fn from_api(api: EdkApi, label: &str) -> Arc<Self> {
        Arc::new(EdkLibrary {
            library: None,
            path: label.to_string(),
            api,
        })
    }

    pub(crate) fn api(&self) -> &EdkApi {
        &self.api
    }
}

fn resolve<T: Copy>(library: &Library, symbol: &'static [u8]) -> EngineResult<T> {
    let name = std::str::from_utf8(&symbol[..symbol.len() - 1]).unwrap_or("<non-utf8>");
    let pointer = unsafe { library.get::<T>(symbol) }
        .map_err(|_| EngineError::symbol_not_found(name))?;
    Ok(*pointer)
}
