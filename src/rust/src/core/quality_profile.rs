//
// Copyright 2025 Signal Messenger, LLC
// SPDX-License-Identifier: AGPL-3.0-only
//

//! Quality profiles used when working in different bandwidth environments.

use std::fmt;

use static_assertions::const_assert;

use crate::common::units::DataRate;
use crate::core::video_size::VideoSize;
use crate::error::CallQualityError;

// Lowering the profile must never raise the resolution ceiling.
const_assert!(VideoSize::QCIF.width <= VideoSize::QVGA.width);
const_assert!(VideoSize::QCIF.height <= VideoSize::QVGA.height);

#[repr(i32)]
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub enum QualityProfile {
    /// (Default) Full resolution video with a relatively high bitrate
    /// to ensure good quality.
    HighResolution = 0,
    /// Reduced video resolution. Useful to reduce bandwidth costs,
    /// especially on mobile networks.
    LowResolution,
    /// Intended for audio-only, to help ensure reliable audio over
    /// severely constrained networks.
    LowBandwidth,
}

impl fmt::Display for QualityProfile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl QualityProfile {
    pub fn from_i32(value: i32) -> Self {
        match value {
            0 => QualityProfile::HighResolution,
            1 => QualityProfile::LowResolution,
            2 => QualityProfile::LowBandwidth,
            _ => {
                // Log but otherwise assume high resolution if not valid.
                warn!("Invalid quality_profile: {}", value);
                QualityProfile::HighResolution
            }
        }
    }

    /// Return the maximum upload bandwidth (for all media) allowed for
    /// the profile.
    pub fn upload_bandwidth(&self) -> DataRate {
        match self {
            QualityProfile::HighResolution => DataRate::from_kbps(256),
            QualityProfile::LowResolution => DataRate::from_kbps(128),
            QualityProfile::LowBandwidth => DataRate::from_kbps(80),
        }
    }

    /// Return the maximum download bandwidth (for all media) allowed for
    /// the profile.
    pub fn download_bandwidth(&self) -> DataRate {
        match self {
            QualityProfile::HighResolution => DataRate::from_kbps(256),
            QualityProfile::LowResolution => DataRate::from_kbps(128),
            QualityProfile::LowBandwidth => DataRate::from_kbps(80),
        }
    }

    /// Return whether or not the profile leaves enough bandwidth for video.
    pub fn supports_video(&self) -> bool {
        *self != QualityProfile::LowBandwidth
    }

    /// Return the resolution ceiling for the profile in the given capture
    /// orientation. No ceiling is meaningful for a profile that cannot
    /// carry video.
    pub fn max_video_size(
        &self,
        portrait: bool,
    ) -> std::result::Result<VideoSize, CallQualityError> {
        match self {
            QualityProfile::HighResolution => Ok(VideoSize::QVGA.oriented(portrait)),
            QualityProfile::LowResolution => Ok(VideoSize::QCIF.oriented(portrait)),
            QualityProfile::LowBandwidth => Err(CallQualityError::UnmanagedProfile(*self)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_i32_round_trips_known_values() {
        for profile in [
            QualityProfile::HighResolution,
            QualityProfile::LowResolution,
            QualityProfile::LowBandwidth,
        ] {
            assert_eq!(QualityProfile::from_i32(profile as i32), profile);
        }
    }

    #[test]
    fn from_i32_assumes_high_resolution_for_invalid_values() {
        assert_eq!(
            QualityProfile::from_i32(-1),
            QualityProfile::HighResolution
        );
        assert_eq!(QualityProfile::from_i32(3), QualityProfile::HighResolution);
    }

    #[test]
    fn bandwidth_caps_match_the_profile_table() {
        let table = [
            (QualityProfile::HighResolution, 256),
            (QualityProfile::LowResolution, 128),
            (QualityProfile::LowBandwidth, 80),
        ];
        for (profile, kbps) in table {
            assert_eq!(profile.upload_bandwidth(), DataRate::from_kbps(kbps));
            assert_eq!(profile.download_bandwidth(), DataRate::from_kbps(kbps));
        }
    }

    #[test]
    fn only_low_bandwidth_rules_out_video() {
        assert!(QualityProfile::HighResolution.supports_video());
        assert!(QualityProfile::LowResolution.supports_video());
        assert!(!QualityProfile::LowBandwidth.supports_video());
    }

    #[test]
    fn max_video_size_follows_orientation() {
        assert_eq!(
            QualityProfile::HighResolution.max_video_size(false).unwrap(),
            VideoSize::QVGA
        );
        assert_eq!(
            QualityProfile::HighResolution.max_video_size(true).unwrap(),
            VideoSize::portrait(240, 320)
        );
        assert_eq!(
            QualityProfile::LowResolution.max_video_size(false).unwrap(),
            VideoSize::QCIF
        );
        assert_eq!(
            QualityProfile::LowResolution.max_video_size(true).unwrap(),
            VideoSize::portrait(144, 176)
        );
    }

    #[test]
    fn low_bandwidth_has_no_video_size_mapping() {
        assert!(matches!(
            QualityProfile::LowBandwidth.max_video_size(false),
            Err(CallQualityError::UnmanagedProfile(
                QualityProfile::LowBandwidth
            ))
        ));
    }
}
