//
// Copyright 2025 Signal Messenger, LLC
// SPDX-License-Identifier: AGPL-3.0-only
//

//! Traits describing the interfaces the media stack must implement for
/// quality profile selection.
use crate::common::units::DataRate;
use crate::common::Result;
use crate::core::video_size::VideoSize;

/// A trait describing the media engine interface profile settings are
/// applied to.
pub trait MediaEngine {
    /// Cap the upload bandwidth used for all media.
    fn set_upload_bandwidth(&mut self, rate: DataRate);

    /// Cap the download bandwidth used for all media.
    fn set_download_bandwidth(&mut self, rate: DataRate);

    /// Return whether a call is currently in progress.
    fn is_in_call(&self) -> bool;

    /// Set the video size to prefer when negotiating outgoing video.
    fn set_preferred_video_size(&mut self, size: VideoSize);

    /// Return the preferred video size the engine actually accepted.
    fn preferred_video_size(&self) -> VideoSize;
}

/// A trait describing the signaling interface of the active call.
pub trait CallController {
    /// Re-invite the remote party so the active call picks up updated
    /// parameters.
    fn request_renegotiation(&mut self) -> Result<()>;
}

/// A trait describing the camera capture interface.
pub trait CaptureSource {
    /// Return whether frames are captured in portrait orientation.
    fn is_capture_portrait(&self) -> bool;

    /// Return the capture sizes the camera supports.
    fn supported_sizes(&self) -> Vec<VideoSize>;
}
