//
// Copyright 2025 Signal Messenger, LLC
// SPDX-License-Identifier: AGPL-3.0-only
//

//! The main Quality Manager object definitions.

use std::fmt;

use crate::common::units::DataRate;
use crate::common::{CallParameters, Result};
use crate::core::platform::{CallController, CaptureSource, MediaEngine};
use crate::core::quality_profile::QualityProfile;
use crate::core::video_size::{max_supported_size, VideoSize};

/// Cap applied to audio when the profile leaves no room for video.
const AUDIO_ONLY_MAX_AUDIO_RATE: DataRate = DataRate::from_kbps(40);

/// Selects the active quality profile from the user-imposed data
/// restriction and applies the derived settings to the media engine, the
/// active call, or the parameters of the next call.
pub struct QualityManager<E, C, S>
where
    E: MediaEngine,
    C: CallController,
    S: CaptureSource,
{
    /// The media engine bandwidth caps and the preferred video size are
    /// pushed to.
    engine: E,
    /// Signaling interface used to renegotiate an active call.
    call_controller: C,
    /// The camera the outgoing video is captured from.
    capture: S,
    /// User-imposed data limitation flag.
    user_restriction: bool,
    /// The profile currently in effect.
    current_profile: QualityProfile,
}

impl<E, C, S> fmt::Display for QualityManager<E, C, S>
where
    E: MediaEngine,
    C: CallController,
    S: CaptureSource,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "user_restriction: {}, current_profile: {}",
            self.user_restriction, self.current_profile
        )
    }
}

impl<E, C, S> fmt::Debug for QualityManager<E, C, S>
where
    E: MediaEngine,
    C: CallController,
    S: CaptureSource,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl<E, C, S> QualityManager<E, C, S>
where
    E: MediaEngine,
    C: CallController,
    S: CaptureSource,
{
    /// Creates a new QualityManager over the given collaborators, with no
    /// restriction in effect.
    pub fn new(engine: E, call_controller: C, capture: S) -> Self {
        Self {
            engine,
            call_controller,
            capture,
            user_restriction: false,
            current_profile: QualityProfile::HighResolution,
        }
    }

    pub fn current_profile(&self) -> QualityProfile {
        self.current_profile
    }

    pub fn is_user_restriction(&self) -> bool {
        self.user_restriction
    }

    /// Return whether the current profile leaves enough bandwidth for
    /// video.
    pub fn is_video_possible(&self) -> bool {
        self.current_profile.supports_video()
    }

    /// Set the user-imposed limitation flag and recompute the profile.
    pub fn set_user_restriction(&mut self, limit: bool) -> Result<()> {
        info!("set_user_restriction(): limit: {}", limit);

        self.user_restriction = limit;
        self.compute_new_profile()
    }

    /// The restriction flag is the only input considered here; nothing
    /// ever transitions into LowBandwidth on its own.
    fn compute_new_profile(&mut self) -> Result<()> {
        let new_profile = if self.user_restriction {
            QualityProfile::LowResolution
        } else {
            QualityProfile::HighResolution
        };
        if new_profile != self.current_profile {
            self.current_profile = new_profile;
            self.on_profile_changed(new_profile)?;
        }
        Ok(())
    }

    fn on_profile_changed(&mut self, new_profile: QualityProfile) -> Result<()> {
        info!("on_profile_changed(): {}", new_profile);

        self.engine
            .set_upload_bandwidth(new_profile.upload_bandwidth());
        self.engine
            .set_download_bandwidth(new_profile.download_bandwidth());

        if self.engine.is_in_call() {
            // The active call picks up the new caps via a re-invite.
            self.call_controller.request_renegotiation()
        } else {
            self.update_with_profile_settings(None)
        }
    }

    /// Apply the current profile to the engine's preferred video size and,
    /// when an in-progress call is being configured, to its parameters.
    pub fn update_with_profile_settings(
        &mut self,
        call_params: Option<&mut CallParameters>,
    ) -> Result<()> {
        let video_ok = self.is_video_possible();

        if video_ok {
            let portrait = self.capture.is_capture_portrait();
            let ceiling = self.current_profile.max_video_size(portrait)?;
            let supported = self.capture.supported_sizes();
            let target = max_supported_size(portrait, ceiling, &supported);

            self.engine.set_preferred_video_size(target);
            let actual = self.engine.preferred_video_size();
            if actual != target {
                // The engine rejected or rounded the target; re-assert the
                // universally supported fallback in the same orientation.
                warn!(
                    "Engine accepted {} instead of {}, falling back to QCIF",
                    actual, target
                );
                self.engine
                    .set_preferred_video_size(VideoSize::QCIF.oriented(target.is_portrait()));
            }
        }

        if let Some(params) = call_params {
            // An in-progress call is being configured.
            if !video_ok {
                params.set_video_enabled(false);
                params.set_audio_bandwidth_cap(AUDIO_ONLY_MAX_AUDIO_RATE);
            } else {
                params.set_video_enabled(true);
                // A zero rate disables the limitation.
                params.set_audio_bandwidth_cap(DataRate::default());
                params.set_preferred_video_size(self.engine.preferred_video_size());
            }
        }

        Ok(())
    }
}
