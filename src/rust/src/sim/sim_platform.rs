//
// Copyright 2025 Signal Messenger, LLC
// SPDX-License-Identifier: AGPL-3.0-only
//

//! Simulation implementations of the platform interfaces.

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::anyhow;

use crate::common::units::DataRate;
use crate::common::Result;
use crate::core::platform::{CallController, CaptureSource, MediaEngine};
use crate::core::video_size::VideoSize;

/// Simulation implementation of core::platform::MediaEngine.
///
/// Clones share state, so a test can hand one handle to the manager and
/// inspect the engine through another.
#[derive(Clone)]
pub struct SimMediaEngine {
    state: Arc<Mutex<SimMediaEngineState>>,
}

struct SimMediaEngineState {
    /// Last upload cap pushed by the manager
    upload_bandwidth: Option<DataRate>,
    /// Last download cap pushed by the manager
    download_bandwidth: Option<DataRate>,
    /// True while a call is in progress
    in_call: bool,
    /// The preferred video size the engine currently reports
    preferred_video_size: VideoSize,
    /// If set, the next set_preferred_video_size() stores this size
    /// instead, simulating engine-level rejection or rounding
    deviate_next_set: Option<VideoSize>,
    /// Every size handed to set_preferred_video_size(), in order
    sizes_set: Vec<VideoSize>,
}

impl Default for SimMediaEngine {
    fn default() -> Self {
        Self {
            state: Arc::new(Mutex::new(SimMediaEngineState {
                upload_bandwidth: None,
                download_bandwidth: None,
                in_call: false,
                preferred_video_size: VideoSize::QCIF,
                deviate_next_set: None,
                sizes_set: Vec::new(),
            })),
        }
    }
}

impl fmt::Display for SimMediaEngine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let state = self.state.lock().unwrap();
        write!(
            f,
            "in_call: {}, preferred_video_size: {}",
            state.in_call, state.preferred_video_size
        )
    }
}

impl fmt::Debug for SimMediaEngine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl SimMediaEngine {
    pub fn set_in_call(&self, in_call: bool) {
        self.state.lock().unwrap().in_call = in_call;
    }

    pub fn upload_bandwidth(&self) -> Option<DataRate> {
        self.state.lock().unwrap().upload_bandwidth
    }

    pub fn download_bandwidth(&self) -> Option<DataRate> {
        self.state.lock().unwrap().download_bandwidth
    }

    /// Make the next set_preferred_video_size() come back with `size`.
    pub fn deviate_next_set(&self, size: VideoSize) {
        self.state.lock().unwrap().deviate_next_set = Some(size);
    }

    pub fn sizes_set(&self) -> Vec<VideoSize> {
        self.state.lock().unwrap().sizes_set.clone()
    }

    pub fn preferred_video_size_now(&self) -> VideoSize {
        self.state.lock().unwrap().preferred_video_size
    }
}

impl MediaEngine for SimMediaEngine {
    fn set_upload_bandwidth(&mut self, rate: DataRate) {
        info!("SimMediaEngine: set_upload_bandwidth(): {} kbps", rate.as_kbps());
        self.state.lock().unwrap().upload_bandwidth = Some(rate);
    }

    fn set_download_bandwidth(&mut self, rate: DataRate) {
        info!(
            "SimMediaEngine: set_download_bandwidth(): {} kbps",
            rate.as_kbps()
        );
        self.state.lock().unwrap().download_bandwidth = Some(rate);
    }

    fn is_in_call(&self) -> bool {
        self.state.lock().unwrap().in_call
    }

    fn set_preferred_video_size(&mut self, size: VideoSize) {
        info!("SimMediaEngine: set_preferred_video_size(): {}", size);
        let mut state = self.state.lock().unwrap();
        state.sizes_set.push(size);
        state.preferred_video_size = state.deviate_next_set.take().unwrap_or(size);
    }

    fn preferred_video_size(&self) -> VideoSize {
        self.state.lock().unwrap().preferred_video_size
    }
}

/// Simulation implementation of core::platform::CallController.
#[derive(Clone, Default)]
pub struct SimCallController {
    /// Number of re-invites requested
    renegotiations: Arc<AtomicUsize>,
    /// True if the platform functions should fail
    should_fail: Arc<AtomicBool>,
}

impl SimCallController {
    pub fn should_fail(&self, enable: bool) {
        self.should_fail.store(enable, Ordering::Release);
    }

    pub fn renegotiations_requested(&self) -> usize {
        self.renegotiations.load(Ordering::Acquire)
    }
}

impl CallController for SimCallController {
    fn request_renegotiation(&mut self) -> Result<()> {
        info!("SimCallController: request_renegotiation():");
        if self.should_fail.load(Ordering::Acquire) {
            return Err(anyhow!("SimCallController renegotiation failed"));
        }
        let _ = self.renegotiations.fetch_add(1, Ordering::AcqRel);
        Ok(())
    }
}

/// Simulation implementation of core::platform::CaptureSource.
#[derive(Clone)]
pub struct SimCaptureSource {
    state: Arc<Mutex<SimCaptureState>>,
}

struct SimCaptureState {
    /// True if frames are captured in portrait orientation
    portrait: bool,
    /// The capture sizes the camera supports
    sizes: Vec<VideoSize>,
}

impl Default for SimCaptureSource {
    /// A landscape camera with the usual small sensor modes.
    fn default() -> Self {
        Self::new(
            false,
            vec![
                VideoSize::landscape(176, 144),
                VideoSize::landscape(320, 240),
                VideoSize::landscape(640, 480),
            ],
        )
    }
}

impl SimCaptureSource {
    pub fn new(portrait: bool, sizes: Vec<VideoSize>) -> Self {
        Self {
            state: Arc::new(Mutex::new(SimCaptureState { portrait, sizes })),
        }
    }

    pub fn set_portrait(&self, portrait: bool) {
        self.state.lock().unwrap().portrait = portrait;
    }

    pub fn set_sizes(&self, sizes: Vec<VideoSize>) {
        self.state.lock().unwrap().sizes = sizes;
    }
}

impl CaptureSource for SimCaptureSource {
    fn is_capture_portrait(&self) -> bool {
        self.state.lock().unwrap().portrait
    }

    fn supported_sizes(&self) -> Vec<VideoSize> {
        self.state.lock().unwrap().sizes.clone()
    }
}
