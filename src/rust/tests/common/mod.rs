//
// Copyright 2025 Signal Messenger, LLC
// SPDX-License-Identifier: AGPL-3.0-only
//

//! Common test utilities

// Requires the 'sim' feature

use callquality::core::quality_manager::QualityManager;
use callquality::sim::sim_platform::{SimCallController, SimCaptureSource, SimMediaEngine};

pub type SimQualityManager = QualityManager<SimMediaEngine, SimCallController, SimCaptureSource>;

pub fn test_init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A QualityManager over the sim platform, with the sim handles kept
/// around so tests can steer and inspect the collaborators.
pub struct TestContext {
    pub engine: SimMediaEngine,
    pub call_controller: SimCallController,
    pub capture: SimCaptureSource,
    pub manager: SimQualityManager,
}

impl TestContext {
    pub fn new() -> Self {
        test_init();

        let engine = SimMediaEngine::default();
        let call_controller = SimCallController::default();
        let capture = SimCaptureSource::default();
        let manager =
            QualityManager::new(engine.clone(), call_controller.clone(), capture.clone());
        Self {
            engine,
            call_controller,
            capture,
            manager,
        }
    }
}
