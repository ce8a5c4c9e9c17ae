//
// Copyright 2025 Signal Messenger, LLC
// SPDX-License-Identifier: AGPL-3.0-only
//

//! Common types used throughout the library.

pub mod units;

use crate::common::units::DataRate;
use crate::core::video_size::VideoSize;

/// Common Result type, using `anyhow::Error` for Error.
pub type Result<T> = std::result::Result<T, anyhow::Error>;

/// A grouping of parameters associated with a call being configured.
///
/// The client application owns these; this crate only writes to them while
/// applying the settings of the active quality profile.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CallParameters {
    /// If true, the call sends and receives video.
    video_enabled: bool,
    /// Cap on the audio bandwidth. A zero rate disables the limitation.
    audio_bandwidth_cap: DataRate,
    /// The video size to prefer for the call, once video is enabled.
    preferred_video_size: Option<VideoSize>,
}

impl CallParameters {
    pub fn new(video_enabled: bool, audio_bandwidth_cap: DataRate) -> Self {
        Self {
            video_enabled,
            audio_bandwidth_cap,
            preferred_video_size: None,
        }
    }

    pub fn video_enabled(&self) -> bool {
        self.video_enabled
    }

    pub fn set_video_enabled(&mut self, enabled: bool) {
        self.video_enabled = enabled;
    }

    pub fn audio_bandwidth_cap(&self) -> DataRate {
        self.audio_bandwidth_cap
    }

    pub fn set_audio_bandwidth_cap(&mut self, cap: DataRate) {
        self.audio_bandwidth_cap = cap;
    }

    pub fn preferred_video_size(&self) -> Option<VideoSize> {
        self.preferred_video_size
    }

    pub fn set_preferred_video_size(&mut self, size: VideoSize) {
        self.preferred_video_size = Some(size);
    }
}
