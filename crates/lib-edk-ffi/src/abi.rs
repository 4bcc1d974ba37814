//! Raw ABI of the EmoEngine shared library.
//!
//! The vendor ships `edk` as a closed-source C library; this module
//! declares its calling convention and nothing else. All exports use the
//! platform C convention (`extern "C"`). Signatures follow the vendor's
//! `edk.h` and `EmoStateDLL.h` headers, including the `unsigned long`
//! out-parameters whose width differs across platforms.
//!
//! Many exports share a shape, so the typedefs below are grouped by shape
//! and each [`EdkApi`] field names the exact export it was resolved from.

use std::ffi::{c_char, c_double, c_float, c_int, c_uchar, c_uint, c_ulong, c_ushort, c_void};

/// Opaque engine-allocated handle.
///
/// Events, EmoStates, and optimization parameter blocks are all allocated
/// by the engine and referenced through one of these. The pointee layout
/// is never visible to the binding.
pub type RawHandle = *mut c_void;

/// Signature shared by argumentless status calls.
///
/// ```c
/// int EE_EngineConnect();
/// ```
pub type StatusFn = unsafe extern "C" fn() -> c_int;

/// Function signature for EE_EngineRemoteConnect.
///
/// ```c
/// int EE_EngineRemoteConnect(const char *szHost, unsigned short port);
/// ```
pub type RemoteConnectFn = unsafe extern "C" fn(host: *const c_char, port: c_ushort) -> c_int;

/// Function signature for EE_EnableDiagnostics.
///
/// ```c
/// int EE_EnableDiagnostics(const char *szFilename, int fEnable);
/// ```
pub type DiagnosticsFn = unsafe extern "C" fn(path: *const c_char, enable: c_int) -> c_int;

/// Signature shared by handle allocators.
///
/// ```c
/// EmoEngineEventHandle EE_EmoEngineEventCreate();
/// ```
pub type HandleCreateFn = unsafe extern "C" fn() -> RawHandle;

/// Signature shared by handle deallocators.
///
/// ```c
/// void EE_EmoEngineEventFree(EmoEngineEventHandle hEvent);
/// ```
pub type HandleFreeFn = unsafe extern "C" fn(handle: RawHandle);

/// Signature shared by calls taking one handle and returning a status or
/// enum value.
///
/// ```c
/// int EE_EngineGetNextEvent(EmoEngineEventHandle hEvent);
/// ```
pub type HandleStatusFn = unsafe extern "C" fn(handle: RawHandle) -> c_int;

/// Function signature for EE_EmoEngineEventGetUserId.
///
/// ```c
/// int EE_EmoEngineEventGetUserId(EmoEngineEventHandle hEvent,
///                                unsigned int *pUserIdOut);
/// ```
pub type EventUserFn = unsafe extern "C" fn(event: RawHandle, user_out: *mut c_uint) -> c_int;

/// Function signature for EE_EmoEngineEventGetEmoState.
///
/// ```c
/// int EE_EmoEngineEventGetEmoState(EmoEngineEventHandle hEvent,
///                                  EmoStateHandle hEmoState);
/// ```
pub type EventStateFn = unsafe extern "C" fn(event: RawHandle, state: RawHandle) -> c_int;

/// Function signature for EE_EngineClearEventQueue.
///
/// ```c
/// int EE_EngineClearEventQueue(int eventTypes);
/// ```
pub type ClearQueueFn = unsafe extern "C" fn(event_types: c_int) -> c_int;

/// Function signature for EE_EngineGetNumUser.
///
/// ```c
/// int EE_EngineGetNumUser(unsigned int *pNumUserOut);
/// ```
pub type UserCountFn = unsafe extern "C" fn(count_out: *mut c_uint) -> c_int;

/// Signature shared by per-user calls with no further arguments.
///
/// ```c
/// int EE_HeadsetGyroRezero(unsigned int userId);
/// ```
pub type UserStatusFn = unsafe extern "C" fn(user: c_uint) -> c_int;

/// Signature shared by per-user setters of an unsigned value.
///
/// ```c
/// int EE_SetHardwarePlayerDisplay(unsigned int userId, unsigned int playerNum);
/// ```
pub type UserU32Fn = unsafe extern "C" fn(user: c_uint, value: c_uint) -> c_int;

/// Signature shared by per-user setters of an enum value.
///
/// ```c
/// int EE_ExpressivSetTrainingAction(unsigned int userId,
///                                   EE_ExpressivAlgo_t action);
/// ```
pub type UserI32Fn = unsafe extern "C" fn(user: c_uint, value: c_int) -> c_int;

/// Signature shared by per-user getters of an unsigned value.
///
/// ```c
/// int EE_ExpressivGetTrainingTime(unsigned int userId, unsigned int *pTimeOut);
/// ```
pub type UserU32OutFn = unsafe extern "C" fn(user: c_uint, value_out: *mut c_uint) -> c_int;

/// Signature shared by per-user getters of an enum value.
///
/// ```c
/// int EE_CognitivGetActivationLevel(unsigned int userId, int *pLevelOut);
/// ```
pub type UserI32OutFn = unsafe extern "C" fn(user: c_uint, value_out: *mut c_int) -> c_int;

/// Signature shared by per-user getters of a packed bit vector.
///
/// ```c
/// int EE_CognitivGetActiveActions(unsigned int userId,
///                                 unsigned long *pActiveActionsOut);
/// ```
pub type UserUlongOutFn = unsafe extern "C" fn(user: c_uint, value_out: *mut c_ulong) -> c_int;

/// Signature shared by per-user getters of a float score.
///
/// ```c
/// int EE_CognitivGetOverallSkillRating(unsigned int userId,
///                                      float *pOverallSkillRatingOut);
/// ```
pub type UserF32OutFn = unsafe extern "C" fn(user: c_uint, value_out: *mut c_float) -> c_int;

/// Function signature for EE_CognitivGetActionSkillRating.
///
/// ```c
/// int EE_CognitivGetActionSkillRating(unsigned int userId,
///                                     EE_CognitivAction_t action,
///                                     float *pActionSkillRatingOut);
/// ```
pub type ActionSkillFn =
    unsafe extern "C" fn(user: c_uint, action: c_int, value_out: *mut c_float) -> c_int;

/// Function signature for EE_ExpressivSetThreshold.
///
/// ```c
/// int EE_ExpressivSetThreshold(unsigned int userId, EE_ExpressivAlgo_t algoName,
///                              EE_ExpressivThreshold_t thresholdName, int value);
/// ```
pub type ThresholdSetFn =
    unsafe extern "C" fn(user: c_uint, action: c_int, threshold: c_int, value: c_int) -> c_int;

/// Function signature for EE_ExpressivGetThreshold.
///
/// ```c
/// int EE_ExpressivGetThreshold(unsigned int userId, EE_ExpressivAlgo_t algoName,
///                              EE_ExpressivThreshold_t thresholdName, int *pValueOut);
/// ```
pub type ThresholdGetFn = unsafe extern "C" fn(
    user: c_uint,
    action: c_int,
    threshold: c_int,
    value_out: *mut c_int,
) -> c_int;

/// Function signature for EE_CognitivSetActionSensitivity.
///
/// ```c
/// int EE_CognitivSetActionSensitivity(unsigned int userId,
///                                     int action1Sensitivity, int action2Sensitivity,
///                                     int action3Sensitivity, int action4Sensitivity);
/// ```
pub type SensitivitySetFn =
    unsafe extern "C" fn(user: c_uint, s1: c_int, s2: c_int, s3: c_int, s4: c_int) -> c_int;

/// Function signature for EE_CognitivGetActionSensitivity.
///
/// ```c
/// int EE_CognitivGetActionSensitivity(unsigned int userId,
///                                     int *pAction1SensitivityOut, int *pAction2SensitivityOut,
///                                     int *pAction3SensitivityOut, int *pAction4SensitivityOut);
/// ```
pub type SensitivityGetFn = unsafe extern "C" fn(
    user: c_uint,
    s1: *mut c_int,
    s2: *mut c_int,
    s3: *mut c_int,
    s4: *mut c_int,
) -> c_int;

/// Function signature for EE_SetUserProfile.
///
/// ```c
/// int EE_SetUserProfile(unsigned int userId, const unsigned char *pProfileBuffer,
///                       unsigned int length);
/// ```
pub type ProfileSetFn =
    unsafe extern "C" fn(user: c_uint, buffer: *const c_uchar, length: c_uint) -> c_int;

/// Signature shared by per-user calls filling an event handle.
///
/// ```c
/// int EE_GetUserProfile(unsigned int userId, EmoEngineEventHandle hEvent);
/// ```
pub type UserEventFn = unsafe extern "C" fn(user: c_uint, event: RawHandle) -> c_int;

/// Function signature for EE_GetUserProfileSize.
///
/// ```c
/// int EE_GetUserProfileSize(EmoEngineEventHandle hEvt, unsigned int *pProfileSizeOut);
/// ```
pub type ProfileSizeFn = unsafe extern "C" fn(event: RawHandle, size_out: *mut c_uint) -> c_int;

/// Function signature for EE_GetUserProfileBytes.
///
/// ```c
/// int EE_GetUserProfileBytes(EmoEngineEventHandle hEvt, unsigned char *destBuffer,
///                            unsigned int length);
/// ```
pub type ProfileBytesFn =
    unsafe extern "C" fn(event: RawHandle, dest: *mut c_uchar, length: c_uint) -> c_int;

/// Signature shared by profile file transfer calls.
///
/// ```c
/// int EE_LoadUserProfile(unsigned int userID, const char *szInputFilename);
/// ```
pub type ProfileFileFn = unsafe extern "C" fn(user: c_uint, path: *const c_char) -> c_int;

/// Function signature for EE_HeadsetGetSensorDetails.
///
/// ```c
/// int EE_HeadsetGetSensorDetails(EE_InputChannels_t channelId,
///                                InputSensorDescriptor_t *pDescriptorOut);
/// ```
pub type SensorDetailsFn =
    unsafe extern "C" fn(channel: c_int, descriptor_out: *mut RawSensorDescriptor) -> c_int;

/// Function signature for EE_SoftwareGetVersion.
///
/// ```c
/// int EE_SoftwareGetVersion(char *pszVersionOut, unsigned int nVersionChars,
///                           unsigned long *pBuildNumOut);
/// ```
pub type SoftwareVersionFn = unsafe extern "C" fn(
    version_out: *mut c_char,
    version_len: c_uint,
    build_out: *mut c_ulong,
) -> c_int;

/// Function signature for EE_HeadsetGetGyroDelta.
///
/// ```c
/// int EE_HeadsetGetGyroDelta(unsigned int userId, int *pXOut, int *pYOut);
/// ```
pub type GyroDeltaFn =
    unsafe extern "C" fn(user: c_uint, x_out: *mut c_int, y_out: *mut c_int) -> c_int;

/// Function signature for EE_OptimizationIsEnabled.
///
/// ```c
/// int EE_OptimizationIsEnabled(bool *pEnabledOut);
/// ```
pub type OptimizationEnabledFn = unsafe extern "C" fn(enabled_out: *mut bool) -> c_int;

/// Function signature for EE_OptimizationGetVitalAlgorithm.
///
/// ```c
/// int EE_OptimizationGetVitalAlgorithm(OptimizationParamHandle hParam,
///                                      EE_EmotivSuite_t suite,
///                                      unsigned int *pVitalAlgorithmBitVectorOut);
/// ```
pub type VitalAlgorithmGetFn =
    unsafe extern "C" fn(param: RawHandle, suite: c_int, bits_out: *mut c_uint) -> c_int;

/// Function signature for EE_OptimizationSetVitalAlgorithm.
///
/// ```c
/// int EE_OptimizationSetVitalAlgorithm(OptimizationParamHandle hParam,
///                                      EE_EmotivSuite_t suite,
///                                      unsigned int vitalAlgorithmBitVector);
/// ```
pub type VitalAlgorithmSetFn =
    unsafe extern "C" fn(param: RawHandle, suite: c_int, bits: c_uint) -> c_int;

/// Function signature for EE_ResetDetection.
///
/// ```c
/// int EE_ResetDetection(unsigned int userId, EE_EmotivSuite_t suite,
///                       unsigned int detectionBitVector);
/// ```
pub type ResetDetectionFn =
    unsafe extern "C" fn(user: c_uint, suite: c_int, detections: c_uint) -> c_int;

/// Function signature for ES_Init.
///
/// ```c
/// void ES_Init(EmoStateHandle state);
/// ```
pub type StateInitFn = unsafe extern "C" fn(state: RawHandle);

/// Function signature for ES_Copy.
///
/// ```c
/// void ES_Copy(EmoStateHandle a, EmoStateHandle b);
/// ```
///
/// The destination comes first, the source second.
pub type StateCopyFn = unsafe extern "C" fn(dest: RawHandle, src: RawHandle);

/// Signature shared by EmoState queries returning an int or enum value.
///
/// ```c
/// int ES_GetHeadsetOn(EmoStateHandle state);
/// ```
pub type StateQueryFn = unsafe extern "C" fn(state: RawHandle) -> c_int;

/// Signature shared by EmoState queries returning a float score.
///
/// ```c
/// float ES_AffectivGetMeditationScore(EmoStateHandle state);
/// ```
///
/// The float return is load-bearing: reading these through an int-typed
/// call site yields garbage, not a rounded value.
pub type StateScoreFn = unsafe extern "C" fn(state: RawHandle) -> c_float;

/// Signature shared by per-detection activity queries.
///
/// ```c
/// int ES_ExpressivIsActive(EmoStateHandle state, EE_ExpressivAlgo_t type);
/// ```
pub type StateFlagQueryFn = unsafe extern "C" fn(state: RawHandle, flag: c_int) -> c_int;

/// Signature shared by EmoState queries filling two floats.
///
/// ```c
/// void ES_ExpressivGetEyelidState(EmoStateHandle state, float *leftEye, float *rightEye);
/// ```
pub type StatePairOutFn =
    unsafe extern "C" fn(state: RawHandle, a_out: *mut c_float, b_out: *mut c_float);

/// Function signature for ES_GetBatteryChargeLevel.
///
/// ```c
/// void ES_GetBatteryChargeLevel(EmoStateHandle state, int *pChargeLevelOut,
///                               int *pMaxChargeLevelOut);
/// ```
pub type BatteryFn =
    unsafe extern "C" fn(state: RawHandle, level_out: *mut c_int, max_out: *mut c_int);

/// Function signature for ES_GetContactQuality.
///
/// ```c
/// int ES_GetContactQuality(EmoStateHandle state, int electroIdx);
/// ```
pub type ContactQualityFn = unsafe extern "C" fn(state: RawHandle, channel: c_int) -> c_int;

/// Signature shared by EmoState equality tests.
///
/// ```c
/// int ES_Equal(EmoStateHandle a, EmoStateHandle b);
/// ```
pub type StateEqualFn = unsafe extern "C" fn(a: RawHandle, b: RawHandle) -> c_int;

/// `InputSensorDescriptor_t` from the vendor header.
///
/// Filled by `EE_HeadsetGetSensorDetails`; the label points into engine
/// memory and must be copied out before the descriptor is dropped.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct RawSensorDescriptor {
    /// `EE_InputChannels_t` value of the channel.
    pub channel_id: c_int,
    /// Nonzero when the sensor exists on this headset model.
    pub exists: c_int,
    /// Electrode label, NUL-terminated, owned by the engine.
    pub label: *const c_char,
    /// X coordinate, towards the nose.
    pub x_loc: c_double,
    /// Y coordinate, towards the left ear.
    pub y_loc: c_double,
    /// Z coordinate, towards the top of the skull.
    pub z_loc: c_double,
}

impl Default for RawSensorDescriptor {
    fn default() -> Self {
        RawSensorDescriptor {
            channel_id: 0,
            exists: 0,
            label: std::ptr::null(),
            x_loc: 0.0,
            y_loc: 0.0,
            z_loc: 0.0,
        }
    }
}

/// Every export the binding drives, resolved to typed function pointers.
///
/// Built once at load time by [`crate::loader::EdkLibrary`]; a missing
/// export fails the load instead of failing the first call.
#[derive(Clone, Copy)]
pub struct EdkApi {
    // Engine lifecycle and event plumbing.
    /// `EE_EngineConnect`
    pub(crate) engine_connect: StatusFn,
    /// `EE_EngineRemoteConnect`
    pub(crate) engine_remote_connect: RemoteConnectFn,
    /// `EE_EngineDisconnect`
    pub(crate) engine_disconnect: StatusFn,
    /// `EE_EnableDiagnostics`
    pub(crate) enable_diagnostics: DiagnosticsFn,
    /// `EE_EmoEngineEventCreate`
    pub(crate) event_create: HandleCreateFn,
    /// `EE_ProfileEventCreate`
    pub(crate) profile_event_create: HandleCreateFn,
    /// `EE_EmoEngineEventFree`
    pub(crate) event_free: HandleFreeFn,
    /// `EE_EmoStateCreate`
    pub(crate) state_create: HandleCreateFn,
    /// `EE_EmoStateFree`
    pub(crate) state_free: HandleFreeFn,
    /// `EE_EmoEngineEventGetType`
    pub(crate) event_get_type: HandleStatusFn,
    /// `EE_ExpressivEventGetType`
    pub(crate) expressiv_event_get_type: HandleStatusFn,
    /// `EE_CognitivEventGetType`
    pub(crate) cognitiv_event_get_type: HandleStatusFn,
    /// `EE_EmoEngineEventGetUserId`
    pub(crate) event_get_user: EventUserFn,
    /// `EE_EmoEngineEventGetEmoState`
    pub(crate) event_get_state: EventStateFn,
    /// `EE_EngineGetNextEvent`
    pub(crate) get_next_event: HandleStatusFn,
    /// `EE_EngineClearEventQueue`
    pub(crate) clear_event_queue: ClearQueueFn,
    /// `EE_EngineGetNumUser`
    pub(crate) get_user_count: UserCountFn,
    /// `EE_SetHardwarePlayerDisplay`
    pub(crate) set_player_display: UserU32Fn,

    // Profile transfer.
    /// `EE_SetUserProfile`
    pub(crate) set_user_profile: ProfileSetFn,
    /// `EE_GetUserProfile`
    pub(crate) get_user_profile: UserEventFn,
    /// `EE_GetBaseProfile`
    pub(crate) get_base_profile: HandleStatusFn,
    /// `EE_GetUserProfileSize`
    pub(crate) get_profile_size: ProfileSizeFn,
    /// `EE_GetUserProfileBytes`
    pub(crate) get_profile_bytes: ProfileBytesFn,
    /// `EE_LoadUserProfile`
    pub(crate) load_user_profile: ProfileFileFn,
    /// `EE_SaveUserProfile`
    pub(crate) save_user_profile: ProfileFileFn,

    // Expressiv suite configuration.
    /// `EE_ExpressivSetThreshold`
    pub(crate) expressiv_set_threshold: ThresholdSetFn,
    /// `EE_ExpressivGetThreshold`
    pub(crate) expressiv_get_threshold: ThresholdGetFn,
    /// `EE_ExpressivSetTrainingAction`
    pub(crate) expressiv_set_training_action: UserI32Fn,
    /// `EE_ExpressivGetTrainingAction`
    pub(crate) expressiv_get_training_action: UserU32OutFn,
    /// `EE_ExpressivSetTrainingControl`
    pub(crate) expressiv_set_training_control: UserI32Fn,
    /// `EE_ExpressivGetTrainingTime`
    pub(crate) expressiv_get_training_time: UserU32OutFn,
    /// `EE_ExpressivSetSignatureType`
    pub(crate) expressiv_set_signature_type: UserI32Fn,
    /// `EE_ExpressivGetSignatureType`
    pub(crate) expressiv_get_signature_type: UserI32OutFn,
    /// `EE_ExpressivGetTrainedSignatureAvailable`
    pub(crate) expressiv_get_trained_signature_available: UserI32OutFn,
    /// `EE_ExpressivGetTrainedSignatureActions`
    pub(crate) expressiv_get_trained_signature_actions: UserUlongOutFn,

    // Cognitiv suite configuration.
    /// `EE_CognitivGetActiveActions`
    pub(crate) cognitiv_get_active_actions: UserUlongOutFn,
    /// `EE_CognitivSetTrainingAction`
    pub(crate) cognitiv_set_training_action: UserI32Fn,
    /// `EE_CognitivGetTrainingAction`
    pub(crate) cognitiv_get_training_action: UserU32OutFn,
    /// `EE_CognitivSetTrainingControl`
    pub(crate) cognitiv_set_training_control: UserI32Fn,
    /// `EE_CognitivGetTrainingTime`
    pub(crate) cognitiv_get_training_time: UserU32OutFn,
    /// `EE_CognitivSetActivationLevel`
    pub(crate) cognitiv_set_activation_level: UserI32Fn,
    /// `EE_CognitivGetActivationLevel`
    pub(crate) cognitiv_get_activation_level: UserI32OutFn,
    /// `EE_CognitivSetActionSensitivity`
    pub(crate) cognitiv_set_action_sensitivity: SensitivitySetFn,
    /// `EE_CognitivGetActionSensitivity`
    pub(crate) cognitiv_get_action_sensitivity: SensitivityGetFn,
    /// `EE_CognitivStartSamplingNeutral`
    pub(crate) cognitiv_start_sampling_neutral: UserStatusFn,
    /// `EE_CognitivStopSamplingNeutral`
    pub(crate) cognitiv_stop_sampling_neutral: UserStatusFn,
    /// `EE_CognitivSetSignatureCaching`
    pub(crate) cognitiv_set_signature_caching: UserU32Fn,
    /// `EE_CognitivGetSignatureCaching`
    pub(crate) cognitiv_get_signature_caching: UserU32OutFn,
    /// `EE_CognitivSetSignatureCacheSize`
    pub(crate) cognitiv_set_signature_cache_size: UserU32Fn,
    /// `EE_CognitivGetSignatureCacheSize`
    pub(crate) cognitiv_get_signature_cache_size: UserU32OutFn,
    /// `EE_CognitivGetTrainedSignatureActions`
    pub(crate) cognitiv_get_trained_signature_actions: UserUlongOutFn,
    /// `EE_CognitivGetOverallSkillRating`
    pub(crate) cognitiv_get_overall_skill_rating: UserF32OutFn,
    /// `EE_CognitivGetActionSkillRating`
    pub(crate) cognitiv_get_action_skill_rating: ActionSkillFn,

    // Headset hardware.
    /// `EE_HeadsetGetSensorDetails`
    pub(crate) headset_get_sensor_details: SensorDetailsFn,
    /// `EE_HardwareGetVersion`
    pub(crate) hardware_get_version: UserUlongOutFn,
    /// `EE_SoftwareGetVersion`
    pub(crate) software_get_version: SoftwareVersionFn,
    /// `EE_HeadsetGetGyroDelta`
    pub(crate) headset_get_gyro_delta: GyroDeltaFn,
    /// `EE_HeadsetGyroRezero`
    pub(crate) headset_gyro_rezero: UserStatusFn,

    // Detection optimization.
    /// `EE_OptimizationParamCreate`
    pub(crate) optimization_param_create: HandleCreateFn,
    /// `EE_OptimizationParamFree`
    pub(crate) optimization_param_free: HandleFreeFn,
    /// `EE_OptimizationEnable`
    pub(crate) optimization_enable: HandleStatusFn,
    /// `EE_OptimizationIsEnabled`
    pub(crate) optimization_is_enabled: OptimizationEnabledFn,
    /// `EE_OptimizationDisable`
    pub(crate) optimization_disable: StatusFn,
    /// `EE_OptimizationGetParam`
    pub(crate) optimization_get_param: HandleStatusFn,
    /// `EE_OptimizationGetVitalAlgorithm`
    pub(crate) optimization_get_vital_algorithm: VitalAlgorithmGetFn,
    /// `EE_OptimizationSetVitalAlgorithm`
    pub(crate) optimization_set_vital_algorithm: VitalAlgorithmSetFn,
    /// `EE_ResetDetection`
    pub(crate) reset_detection: ResetDetectionFn,

    // EmoState lifecycle and general queries.
    /// `ES_Init`
    pub(crate) state_init: StateInitFn,
    /// `ES_Copy`
    pub(crate) state_copy: StateCopyFn,
    /// `ES_GetTimeFromStart`
    pub(crate) get_time_from_start: StateScoreFn,
    /// `ES_GetHeadsetOn`
    pub(crate) get_headset_on: StateQueryFn,
    /// `ES_GetNumContactQualityChannels`
    pub(crate) get_num_contact_quality_channels: StateQueryFn,
    /// `ES_GetContactQuality`
    pub(crate) get_contact_quality: ContactQualityFn,
    /// `ES_GetWirelessSignalStatus`
    pub(crate) get_wireless_signal_status: StateQueryFn,
    /// `ES_GetBatteryChargeLevel`
    pub(crate) get_battery_charge_level: BatteryFn,

    // EmoState, Expressiv suite.
    /// `ES_ExpressivIsBlink`
    pub(crate) expressiv_is_blink: StateQueryFn,
    /// `ES_ExpressivIsLeftWink`
    pub(crate) expressiv_is_left_wink: StateQueryFn,
    /// `ES_ExpressivIsRightWink`
    pub(crate) expressiv_is_right_wink: StateQueryFn,
    /// `ES_ExpressivIsEyesOpen`
    pub(crate) expressiv_is_eyes_open: StateQueryFn,
    /// `ES_ExpressivIsLookingUp`
    pub(crate) expressiv_is_looking_up: StateQueryFn,
    /// `ES_ExpressivIsLookingDown`
    pub(crate) expressiv_is_looking_down: StateQueryFn,
    /// `ES_ExpressivIsLookingLeft`
    pub(crate) expressiv_is_looking_left: StateQueryFn,
    /// `ES_ExpressivIsLookingRight`
    pub(crate) expressiv_is_looking_right: StateQueryFn,
    /// `ES_ExpressivGetEyelidState`
    pub(crate) expressiv_get_eyelid_state: StatePairOutFn,
    /// `ES_ExpressivGetEyeLocation`
    pub(crate) expressiv_get_eye_location: StatePairOutFn,
    /// `ES_ExpressivGetUpperFaceAction`
    pub(crate) expressiv_get_upper_face_action: StateQueryFn,
    /// `ES_ExpressivGetUpperFaceActionPower`
    pub(crate) expressiv_get_upper_face_action_power: StateScoreFn,
    /// `ES_ExpressivGetLowerFaceAction`
    pub(crate) expressiv_get_lower_face_action: StateQueryFn,
    /// `ES_ExpressivGetLowerFaceActionPower`
    pub(crate) expressiv_get_lower_face_action_power: StateScoreFn,
    /// `ES_ExpressivIsActive`
    pub(crate) expressiv_is_active: StateFlagQueryFn,
    /// `ES_ExpressivGetEyebrowExtent`
    pub(crate) expressiv_get_eyebrow_extent: StateScoreFn,
    /// `ES_ExpressivGetSmileExtent`
    pub(crate) expressiv_get_smile_extent: StateScoreFn,
    /// `ES_ExpressivGetClenchExtent`
    pub(crate) expressiv_get_clench_extent: StateScoreFn,

    // EmoState, Affectiv suite.
    /// `ES_AffectivGetExcitementShortTermScore`
    pub(crate) affectiv_get_excitement_short_term_score: StateScoreFn,
    /// `ES_AffectivGetExcitementLongTermScore`
    pub(crate) affectiv_get_excitement_long_term_score: StateScoreFn,
    /// `ES_AffectivGetMeditationScore`
    pub(crate) affectiv_get_meditation_score: StateScoreFn,
    /// `ES_AffectivGetFrustrationScore`
    pub(crate) affectiv_get_frustration_score: StateScoreFn,
    /// `ES_AffectivGetEngagementBoredomScore`
    pub(crate) affectiv_get_engagement_boredom_score: StateScoreFn,
    /// `ES_AffectivIsActive`
    pub(crate) affectiv_is_active: StateFlagQueryFn,

    // EmoState, Cognitiv suite.
    /// `ES_CognitivGetCurrentAction`
    pub(crate) cognitiv_get_current_action: StateQueryFn,
    /// `ES_CognitivGetCurrentActionPower`
    pub(crate) cognitiv_get_current_action_power: StateScoreFn,
    /// `ES_CognitivIsActive`
    pub(crate) cognitiv_is_active: StateQueryFn,

    // EmoState equality.
    /// `ES_AffectivEqual`
    pub(crate) affectiv_equal: StateEqualFn,
    /// `ES_ExpressivEqual`
    pub(crate) expressiv_equal: StateEqualFn,
    /// `ES_CognitivEqual`
    pub(crate) cognitiv_equal: StateEqualFn,
    /// `ES_EmoEngineEqual`
    pub(crate) emoengine_equal: StateEqualFn,
    /// `ES_Equal`
    pub(crate) state_equal: StateEqualFn,
}
