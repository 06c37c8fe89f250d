// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// How a [`crate::Visor`] fits its region onto the screen.
///
/// Both modes share the same fit scale (see
/// [`crate::Visor::scaling_factor`]). They differ only in what happens to
/// the leftover screen space on the axis that did not limit the scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum VisorMode {
    /// Show exactly the region and fill the leftover space with bars.
    ///
    /// Screen positions inside the bars have no world position, so
    /// [`crate::Visor::screen_to_world`] returns `None` for them.
    #[default]
    RegionLetterbox,
    /// Grow the visible area on the non‑limiting axis to cover the whole screen.
    ///
    /// The bounding box stays centered on the region's center. There are
    /// no bars.
    RegionExpand,
}

impl VisorMode {
    /// Returns `true` if this mode leaves bars around the rendered content.
    #[must_use]
    pub fn has_bars(self) -> bool {
        matches!(self, Self::RegionLetterbox)
    }
}
