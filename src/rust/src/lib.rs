//
// Copyright 2025 Signal Messenger, LLC
// SPDX-License-Identifier: AGPL-3.0-only
//

//! # CallQuality -- Quality Profile Selection for VoIP Calls
//!
//! This crate maps a user-imposed data restriction to a call quality
//! profile (bandwidth caps and a preferred video resolution) and applies
//! the derived settings to the media engine, an active call, or the
//! parameters of the next call.

#[macro_use]
extern crate log;

pub mod common;

pub mod error;

/// Core, platform independent functionality.
pub mod core {
    pub mod call_mutex;
    pub mod platform;
    pub mod quality_manager;
    pub mod quality_profile;
    pub mod video_size;
}

#[cfg(any(test, feature = "sim"))]
pub mod sim {
    pub mod sim_platform;
}
