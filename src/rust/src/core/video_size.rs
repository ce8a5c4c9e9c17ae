//
// Copyright 2025 Signal Messenger, LLC
// SPDX-License-Identifier: AGPL-3.0-only
//

//! Video sizes and the selection of the best supported capture size.

use std::fmt;

/// A video resolution with an orientation tag.
///
/// The orientation records how the size was measured; it is not implied by
/// the relative magnitude of width and height.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VideoSize {
    pub width: u16,
    pub height: u16,
    portrait: bool,
}

impl fmt::Display for VideoSize {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}x{} ({})",
            self.width,
            self.height,
            if self.portrait {
                "portrait"
            } else {
                "landscape"
            }
        )
    }
}

impl VideoSize {
    /// QCIF, the universally supported fallback size.
    pub const QCIF: VideoSize = VideoSize::landscape(176, 144);
    /// QVGA, the largest size sent at full quality.
    pub const QVGA: VideoSize = VideoSize::landscape(320, 240);

    pub const fn new(width: u16, height: u16, portrait: bool) -> Self {
        Self {
            width,
            height,
            portrait,
        }
    }

    pub const fn landscape(width: u16, height: u16) -> Self {
        Self::new(width, height, false)
    }

    pub const fn portrait(width: u16, height: u16) -> Self {
        Self::new(width, height, true)
    }

    pub fn is_portrait(&self) -> bool {
        self.portrait
    }

    /// The same physical size expressed in the given orientation.
    #[must_use]
    pub fn oriented(self, portrait: bool) -> Self {
        if self.portrait == portrait {
            self
        } else {
            Self::new(self.height, self.width, portrait)
        }
    }
}

/// Picks the largest supported capture size that fits under `ceiling`.
///
/// Candidates are scanned in input order and compared in the requested
/// orientation (a candidate tagged with the other orientation has its
/// dimensions swapped for the comparison, without re-tagging the candidate
/// itself). A candidate replaces the current selection only when it is
/// strictly larger in both dimensions, so the outcome can depend on
/// candidate order. Starts from QCIF, which every capture source supports.
pub fn max_supported_size(
    portrait: bool,
    ceiling: VideoSize,
    supported: &[VideoSize],
) -> VideoSize {
    debug!(
        "Searching for the maximum {} video size under {}",
        if portrait { "portrait" } else { "landscape" },
        ceiling
    );
    let mut selected = VideoSize::QCIF.oriented(portrait);
    for size in supported {
        let mut width = size.width;
        let mut height = size.height;
        if size.is_portrait() != portrait {
            std::mem::swap(&mut width, &mut height);
        }
        if width > ceiling.width || height > ceiling.height {
            continue;
        }
        if selected.width < width && selected.height < height {
            selected = VideoSize::new(width, height, portrait);
            debug!("A better video size has been found: {}", selected);
        }
    }
    selected
}
