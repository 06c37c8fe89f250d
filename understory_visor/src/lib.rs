// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_visor --heading-base-level=0

//! Understory Visor: a screen‑fitting 2D camera.
//!
//! A [`Visor`] frames a rectangular **region** of a world and fits it onto a
//! screen of fixed pixel size. It provides:
//! - The fit scale (pixels per world unit) shared by every projection mode.
//! - The world‑space bounding box that is actually visible.
//! - The screen‑space area covered by content (letterbox bars excluded).
//! - Conversion of positions between world and screen space.
//! - Panning to a world point and zooming about an anchor, with optional
//!   world‑space limits.
//!
//! It does **not** render anything or handle input. Callers are expected to:
//! - Feed pointer positions through [`Visor::screen_to_world`] for picking.
//! - Use [`Visor::bounding_box`] for culling and
//!   [`Visor::world_to_screen_transform`] to draw.
//! - Translate their own input events into [`Visor::move_to`] and
//!   [`Visor::scale_by_at`] calls.
//!
//! ## Projection modes
//!
//! Both modes use the same scale: the largest one at which the whole region
//! fits on the screen. They differ on the axis that has space left over.
//!
//! - [`VisorMode::RegionLetterbox`] shows exactly the region and leaves bars.
//!   Positions inside the bars have no world position.
//! - [`VisorMode::RegionExpand`] shows more of the world instead of bars,
//!   growing the visible area symmetrically around the region's center.
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use understory_visor::{Visor, VisorMode};
//!
//! let screen = Size::new(1920.0, 1080.0);
//! let region = Rect::new(0.0, 0.0, 400.0, 300.0);
//!
//! let letterbox = Visor::new(VisorMode::RegionLetterbox, screen, region);
//! assert_eq!(letterbox.scaling_factor(), 3.6);
//! // The left bar is 240 pixels wide.
//! assert_eq!(letterbox.screen_to_world(Point::new(60.0, 0.0)), None);
//!
//! let expand = Visor::new(VisorMode::RegionExpand, screen, region);
//! // The same pixel now shows world content left of the region.
//! let world = expand.screen_to_world(Point::new(60.0, 0.0)).unwrap();
//! assert!((world.x + 50.0).abs() < 1e-9);
//! ```
//!
//! ## Panning, zooming and limits
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use understory_visor::{Visor, VisorMode};
//!
//! let mut visor = Visor::new(
//!     VisorMode::RegionLetterbox,
//!     Size::new(800.0, 600.0),
//!     Rect::new(0.0, 0.0, 100.0, 100.0),
//! )
//! .with_limits(Rect::new(-200.0, -200.0, 200.0, 200.0));
//!
//! // Zoom out around the world origin: it stays at the region's corner.
//! visor.scale_by_at(2.0, Some(Point::ORIGIN));
//! assert_eq!(visor.region(), Rect::new(0.0, 0.0, 200.0, 200.0));
//!
//! // Panning re‑centers the region, but never past the limits.
//! visor.move_to(Point::new(500.0, 0.0));
//! assert_eq!(visor.region(), Rect::new(0.0, -100.0, 200.0, 100.0));
//! ```
//!
//! Zooming does not apply limits by itself; call [`Visor::clamp_to_limits`]
//! after [`Visor::scale_by_at`] if the zoomed view should respect them.
//!
//! ## Design notes
//!
//! - Geometry uses [`kurbo`] types in `f64`. Nothing is rounded to pixels.
//! - Derived quantities are recomputed on every call; nothing is cached.
//! - Degenerate geometry (zero, negative or non‑finite sizes) is rejected at
//!   construction with [`VisorError`], or by a panic from the non‑`try`
//!   constructors.
//! - Rotation and multiple composited cameras are out of scope.
//!
//! This crate is `no_std`.

#![no_std]

mod error;
mod mode;
mod visor;

pub use error::VisorError;
pub use mode::VisorMode;
pub use visor::{Visor, VisorDebugInfo};
