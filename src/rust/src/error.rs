//
// Copyright 2025 Signal Messenger, LLC
// SPDX-License-Identifier: AGPL-3.0-only
//

//! Common error codes.

use thiserror::Error;

use crate::core::quality_profile::QualityProfile;

/// Platform independent error conditions.
#[derive(Error, Debug)]
pub enum CallQualityError {
    #[error("Mutex poisoned: {0}")]
    MutexPoisoned(String),
    /// The profile has no video size mapping, so no preferred video size
    /// can be derived from it.
    #[error("Profile not managed: {0}")]
    UnmanagedProfile(QualityProfile),
}
