// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::error::{VisorError, check_region, check_screen_size};
use crate::mode::VisorMode;

/// Camera that frames a world‑space region on a fixed‑size screen.
///
/// `Visor` holds the region of the world the camera is looking at, the pixel
/// size of the screen and a [`VisorMode`]. Everything else (scale, visible
/// bounding box, active screen area, coordinate mappings) is derived on
/// demand, so a visor may be queried every frame without any bookkeeping.
///
/// The region is owned by the visor and only ever replaced wholesale;
/// [`Visor::region`] hands out a copy.
#[derive(Clone, Debug, PartialEq)]
pub struct Visor {
    mode: VisorMode,
    screen_size: Size,
    region: Rect,
    limits: Option<Rect>,
}

impl Visor {
    /// Creates a visor showing `region` on a screen of `screen_size` pixels.
    ///
    /// No limits are configured; see [`Visor::with_limits`].
    ///
    /// # Panics
    ///
    /// Panics if `screen_size` or the size of `region` is non‑finite or not
    /// strictly positive. Use [`Visor::try_new`] to handle this at runtime.
    #[must_use]
    pub fn new(mode: VisorMode, screen_size: Size, region: Rect) -> Self {
        match Self::try_new(mode, screen_size, region) {
            Ok(visor) => visor,
            Err(err) => panic!("invalid visor geometry: {err}"),
        }
    }

    /// Fallible version of [`Visor::new`].
    pub fn try_new(mode: VisorMode, screen_size: Size, region: Rect) -> Result<Self, VisorError> {
        Ok(Self {
            mode,
            screen_size: check_screen_size(screen_size)?,
            region: check_region(region)?,
            limits: None,
        })
    }

    /// Attaches world‑space limits and clamps the current placement to them.
    ///
    /// `limits` is normalized, so its edges may be given in any order.
    #[must_use]
    pub fn with_limits(mut self, limits: Rect) -> Self {
        self.set_limits(Some(limits));
        self
    }

    /// Returns the projection mode.
    #[must_use]
    pub fn mode(&self) -> VisorMode {
        self.mode
    }

    /// Returns the screen size in pixels.
    #[must_use]
    pub fn screen_size(&self) -> Size {
        self.screen_size
    }

    /// Sets the screen size in pixels, for example after a window resize.
    ///
    /// Limits, if any, are re‑applied since the visible area may have changed.
    ///
    /// # Panics
    ///
    /// Panics on a non‑finite or non‑positive size.
    pub fn set_screen_size(&mut self, size: Size) {
        if let Err(err) = self.try_set_screen_size(size) {
            panic!("invalid visor geometry: {err}");
        }
    }

    /// Fallible version of [`Visor::set_screen_size`].
    ///
    /// On error the visor is left unchanged.
    pub fn try_set_screen_size(&mut self, size: Size) -> Result<(), VisorError> {
        let size = check_screen_size(size)?;
        if self.screen_size != size {
            self.screen_size = size;
            self.clamp_to_limits();
        }
        Ok(())
    }

    /// Returns the world‑space region currently framed by the camera.
    #[must_use]
    pub fn region(&self) -> Rect {
        self.region
    }

    /// Replaces the region without applying limits.
    ///
    /// # Panics
    ///
    /// Panics if the region does not have a finite, positive size.
    pub fn set_region(&mut self, region: Rect) {
        if let Err(err) = self.try_set_region(region) {
            panic!("invalid visor geometry: {err}");
        }
    }

    /// Fallible version of [`Visor::set_region`].
    pub fn try_set_region(&mut self, region: Rect) -> Result<(), VisorError> {
        self.region = check_region(region)?;
        Ok(())
    }

    /// Returns the world‑space limits, if any.
    #[must_use]
    pub fn limits(&self) -> Option<Rect> {
        self.limits
    }

    /// Sets or clears the world‑space limits.
    ///
    /// New limits are applied to the current placement right away.
    pub fn set_limits(&mut self, limits: Option<Rect>) {
        self.limits = limits.map(|r| r.abs());
        self.clamp_to_limits();
    }

    /// Returns the fit scale in pixels per world unit.
    ///
    /// This is the largest magnification at which the whole region fits on
    /// the screen: `min(screen_w / region_w, screen_h / region_h)`. It is the
    /// same for every [`VisorMode`].
    #[must_use]
    pub fn scaling_factor(&self) -> f64 {
        let sx = self.screen_size.width / self.region.width();
        let sy = self.screen_size.height / self.region.height();
        sx.min(sy)
    }

    /// Returns the world‑space rectangle that is visible on screen.
    ///
    /// - [`VisorMode::RegionLetterbox`]: the region itself.
    /// - [`VisorMode::RegionExpand`]: the screen size divided by the scale,
    ///   centered on the region's center. Along the axis that limits the
    ///   scale this matches the region; along the other it is larger.
    #[must_use]
    pub fn bounding_box(&self) -> Rect {
        match self.mode {
            VisorMode::RegionLetterbox => self.region,
            VisorMode::RegionExpand => {
                let scale = self.scaling_factor();
                let size = Size::new(
                    self.screen_size.width / scale,
                    self.screen_size.height / scale,
                );
                Rect::from_center_size(self.region.center(), size)
            }
        }
    }

    /// Returns the full screen rectangle, `(0, 0)` to the screen size.
    #[must_use]
    pub fn screen_rect(&self) -> Rect {
        Rect::from_origin_size(Point::ORIGIN, self.screen_size)
    }

    /// Returns the screen‑space rectangle covered by rendered content.
    ///
    /// In [`VisorMode::RegionLetterbox`] this is the scaled region centered
    /// on the screen; everything outside of it is bars. In
    /// [`VisorMode::RegionExpand`] there are no bars and this is the whole
    /// [`Visor::screen_rect`].
    #[must_use]
    pub fn active_screen_area(&self) -> Rect {
        match self.mode {
            VisorMode::RegionLetterbox => {
                let scale = self.scaling_factor();
                let screen = self.screen_size;
                let (x0, width) = letterbox_axis(screen.width, self.region.width(), scale);
                let (y0, height) = letterbox_axis(screen.height, self.region.height(), scale);
                Rect::from_origin_size((x0, y0), (width, height))
            }
            VisorMode::RegionExpand => self.screen_rect(),
        }
    }

    /// Converts a screen position into world space.
    ///
    /// In [`VisorMode::RegionLetterbox`] this returns `None` for positions in
    /// the bars. The active area includes its left and top edges and
    /// excludes its right and bottom edges, so a position exactly on the far
    /// edge is `None`.
    ///
    /// In [`VisorMode::RegionExpand`] every position maps. Positions outside
    /// the screen are extrapolated.
    #[must_use]
    pub fn screen_to_world(&self, screen_pt: Point) -> Option<Point> {
        let active = self.active_screen_area();
        if self.mode.has_bars() && !contains_half_open(active, screen_pt) {
            return None;
        }
        Some(self.unclipped_screen_to_world(active, screen_pt))
    }

    /// Converts a world position into screen space.
    ///
    /// This never fails; world positions outside the bounding box map to
    /// positions outside the active screen area.
    #[must_use]
    pub fn world_to_screen(&self, world_pt: Point) -> Point {
        let active = self.active_screen_area();
        let world_origin = self.bounding_box().origin();
        active.origin() + (world_pt - world_origin) * self.scaling_factor()
    }

    /// Converts a world‑space rectangle into screen space.
    #[must_use]
    pub fn world_to_screen_rect(&self, rect: Rect) -> Rect {
        Rect::from_points(
            self.world_to_screen(rect.origin()),
            self.world_to_screen(Point::new(rect.x1, rect.y1)),
        )
    }

    /// Converts a screen‑space rectangle into world space.
    ///
    /// Unlike [`Visor::screen_to_world`] this does not reject the letterbox
    /// bars; the rectangle is mapped as is.
    #[must_use]
    pub fn screen_to_world_rect(&self, rect: Rect) -> Rect {
        let active = self.active_screen_area();
        Rect::from_points(
            self.unclipped_screen_to_world(active, rect.origin()),
            self.unclipped_screen_to_world(active, Point::new(rect.x1, rect.y1)),
        )
    }

    /// Returns the affine transform from world space to screen space.
    ///
    /// This is the same mapping as [`Visor::world_to_screen`] and can be
    /// handed to a renderer as a scene transform.
    #[must_use]
    pub fn world_to_screen_transform(&self) -> Affine {
        let screen_origin = self.active_screen_area().origin().to_vec2();
        let world_origin = self.bounding_box().origin().to_vec2();
        Affine::translate(screen_origin)
            * Affine::scale(self.scaling_factor())
            * Affine::translate(-world_origin)
    }

    /// Centers the region on `world_pt`, keeping its size.
    ///
    /// If limits are set, the result is then clamped with
    /// [`Visor::clamp_to_limits`].
    pub fn move_to(&mut self, world_pt: Point) {
        self.region = Rect::from_center_size(world_pt, self.region.size());
        self.clamp_to_limits();
    }

    /// Scales the region size by `factor` while keeping `anchor` in place.
    ///
    /// A factor above `1.0` zooms out (more world is visible), below `1.0`
    /// zooms in. The anchor defaults to the region's center and keeps the
    /// same relative position inside the region before and after.
    ///
    /// Limits are not applied; call [`Visor::clamp_to_limits`] afterwards if
    /// the zoomed view should respect them. A non‑finite or non‑positive
    /// `factor`, or one that would produce a degenerate region, is ignored.
    pub fn scale_by_at(&mut self, factor: f64, anchor: Option<Point>) {
        if !(factor.is_finite() && factor > 0.0) {
            log::debug!("ignoring zoom with invalid factor {factor}");
            return;
        }
        let anchor = anchor.unwrap_or_else(|| self.region.center());
        let origin = self.region.origin();
        let size = self.region.size();
        let fraction = Vec2::new(
            (anchor.x - origin.x) / size.width,
            (anchor.y - origin.y) / size.height,
        );
        let new_size = size * factor;
        let new_origin = Point::new(
            anchor.x - fraction.x * new_size.width,
            anchor.y - fraction.y * new_size.height,
        );
        match check_region(Rect::from_origin_size(new_origin, new_size)) {
            Ok(region) => self.region = region,
            Err(err) => log::debug!("ignoring zoom by {factor}: {err}"),
        }
    }

    /// Translates the region so that the bounding box sits inside the limits.
    ///
    /// Each axis is handled on its own. When the bounding box fits inside
    /// the limits on an axis, it is moved just far enough that neither edge
    /// crosses the matching limit edge. When it is larger, it is centered on
    /// the limits along that axis. The region size never changes.
    ///
    /// This is a no‑op when no limits are set.
    pub fn clamp_to_limits(&mut self) {
        let Some(limits) = self.limits else {
            return;
        };
        let bbox = self.bounding_box();
        let delta = Vec2::new(
            clamp_axis(bbox.x0, bbox.x1, limits.x0, limits.x1),
            clamp_axis(bbox.y0, bbox.y1, limits.y0, limits.y1),
        );
        if delta != Vec2::ZERO {
            self.region = self.region + delta;
            log::trace!(
                "clamped visor by {delta:?} to limits {limits:?}, region is now {:?}",
                self.region
            );
        }
    }

    /// Snapshot of the current state and derived quantities.
    #[must_use]
    pub fn debug_info(&self) -> VisorDebugInfo {
        VisorDebugInfo {
            mode: self.mode,
            screen_size: self.screen_size,
            region: self.region,
            limits: self.limits,
            scaling_factor: self.scaling_factor(),
            bounding_box: self.bounding_box(),
            active_screen_area: self.active_screen_area(),
        }
    }

    fn unclipped_screen_to_world(&self, active: Rect, screen_pt: Point) -> Point {
        let world_origin = self.bounding_box().origin();
        world_origin + (screen_pt - active.origin()) / self.scaling_factor()
    }
}

/// Debug snapshot of a [`Visor`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisorDebugInfo {
    /// Projection mode.
    pub mode: VisorMode,
    /// Screen size in pixels.
    pub screen_size: Size,
    /// World‑space region framed by the camera.
    pub region: Rect,
    /// Optional world‑space limits.
    pub limits: Option<Rect>,
    /// Pixels per world unit.
    pub scaling_factor: f64,
    /// World‑space rectangle visible on screen.
    pub bounding_box: Rect,
    /// Screen‑space rectangle covered by content.
    pub active_screen_area: Rect,
}

/// Offset and extent of the content along one screen axis.
///
/// The limiting axis spans the whole screen exactly, so rounding in
/// `region * scale` can never open a sliver of bar at pixel 0.
fn letterbox_axis(screen: f64, region: f64, scale: f64) -> (f64, f64) {
    if screen / region == scale {
        return (0.0, screen);
    }
    let extent = (region * scale).min(screen);
    ((screen - extent) * 0.5, extent)
}

// Near edges inclusive, far edges exclusive.
fn contains_half_open(rect: Rect, pt: Point) -> bool {
    pt.x >= rect.x0 && pt.x < rect.x1 && pt.y >= rect.y0 && pt.y < rect.y1
}

/// Offset that moves `[min, max]` into `[lo, hi]`, or centers it there if it
/// does not fit.
fn clamp_axis(min: f64, max: f64, lo: f64, hi: f64) -> f64 {
    if max - min > hi - lo {
        (lo + hi) * 0.5 - (min + max) * 0.5
    } else if min < lo {
        lo - min
    } else if max > hi {
        hi - max
    } else {
        0.0
    }
}
