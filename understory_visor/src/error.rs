// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::{Rect, Size};

/// Error returned when a [`crate::Visor`] would be given degenerate geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum VisorError {
    /// The screen size has a non‑finite or non‑positive component.
    InvalidScreenSize(Size),
    /// The region has a non‑finite or non‑positive width or height.
    InvalidRegion(Rect),
}

impl fmt::Display for VisorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidScreenSize(size) => write!(
                f,
                "screen size must be finite and positive, got {}x{}",
                size.width, size.height
            ),
            Self::InvalidRegion(rect) => write!(
                f,
                "region must have a finite, positive size, got {}x{} at ({}, {})",
                rect.width(),
                rect.height(),
                rect.x0,
                rect.y0
            ),
        }
    }
}

impl core::error::Error for VisorError {}

pub(crate) fn check_screen_size(size: Size) -> Result<Size, VisorError> {
    if is_positive(size.width) && is_positive(size.height) {
        Ok(size)
    } else {
        Err(VisorError::InvalidScreenSize(size))
    }
}

pub(crate) fn check_region(rect: Rect) -> Result<Rect, VisorError> {
    let finite_edges = rect.x0.is_finite() && rect.y0.is_finite();
    if finite_edges && is_positive(rect.width()) && is_positive(rect.height()) {
        Ok(rect)
    } else {
        Err(VisorError::InvalidRegion(rect))
    }
}

fn is_positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}
