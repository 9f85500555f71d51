//! Affine maps from model units into a drawing surface.
//!
//! The surface uses screen conventions: x grows to the right and y grows downwards, so the y
//! map is inverted and larger model values land closer to the top edge.

use crate::bounds::{Bounds, Extent};

/// A rectangle on the drawing surface, in pixel-like units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Surface {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Blank space kept between the surface edges and the plotted extents.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Padding {
    pub fn uniform(value: f64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}

/// A labelled position along an axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub pixel: f64,
}

/// Maps a pair of model extents into the padded area of a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    x: Extent,
    y: Extent,
    // Pixel ranges: x0 is where x.min lands, y0 is where y.min lands (the bottom edge).
    x0: f64,
    x1: f64,
    y0: f64,
    y1: f64,
}

impl CoordinateMapper {
    /// Creates a new `CoordinateMapper`.
    ///
    /// # Arguments
    /// * `x` - The model extent spread along the horizontal axis.
    /// * `y` - The model extent spread along the vertical axis.
    /// * `surface` - The target rectangle.
    /// * `padding` - Space left inside `surface` on every side.
    pub fn new(x: Extent, y: Extent, surface: Surface, padding: Padding) -> Self {
        let x0 = surface.left + padding.left;
        let x1 = (surface.right() - padding.right).max(x0);
        let y1 = surface.top + padding.top;
        let y0 = (surface.bottom() - padding.bottom).max(y1);

        Self {
            x,
            y,
            x0,
            x1,
            y0,
            y1,
        }
    }

    /// A mapper for the parameter space, `theta0` horizontally and `theta1` vertically.
    pub fn for_bounds(bounds: &Bounds, surface: Surface, padding: Padding) -> Self {
        Self::new(bounds.theta0(), bounds.theta1(), surface, padding)
    }

    pub fn x_extent(&self) -> Extent {
        self.x
    }

    pub fn y_extent(&self) -> Extent {
        self.y
    }

    pub fn to_x(&self, value: f64) -> f64 {
        lerp(self.x, self.x0, self.x1, value)
    }

    pub fn to_y(&self, value: f64) -> f64 {
        lerp(self.y, self.y0, self.y1, value)
    }

    pub fn to_point(&self, x: f64, y: f64) -> (f64, f64) {
        (self.to_x(x), self.to_y(y))
    }

    /// Inverse of `to_x`. A zero width extent maps every pixel back onto its single value.
    pub fn from_x(&self, pixel: f64) -> f64 {
        unlerp(self.x, self.x0, self.x1, pixel)
    }

    /// Inverse of `to_y`.
    pub fn from_y(&self, pixel: f64) -> f64 {
        unlerp(self.y, self.y0, self.y1, pixel)
    }

    /// Round-valued ticks along the horizontal axis.
    pub fn x_ticks(&self, count: usize) -> Vec<Tick> {
        nice_ticks(self.x, count)
            .into_iter()
            .map(|value| Tick {
                value,
                pixel: self.to_x(value),
            })
            .collect()
    }

    /// Round-valued ticks along the vertical axis.
    pub fn y_ticks(&self, count: usize) -> Vec<Tick> {
        nice_ticks(self.y, count)
            .into_iter()
            .map(|value| Tick {
                value,
                pixel: self.to_y(value),
            })
            .collect()
    }
}

fn lerp(extent: Extent, p0: f64, p1: f64, value: f64) -> f64 {
    let span = extent.span();
    if span == 0.0 || !span.is_finite() {
        return (p0 + p1) / 2.0;
    }

    p0 + (value - extent.min) / span * (p1 - p0)
}

fn unlerp(extent: Extent, p0: f64, p1: f64, pixel: f64) -> f64 {
    let width = p1 - p0;
    if width == 0.0 || extent.span() == 0.0 {
        return extent.min;
    }

    extent.min + (pixel - p0) / width * extent.span()
}

/// Picks about `count` values inside `extent` stepped by 1, 2 or 5 times a power of ten.
pub fn nice_ticks(extent: Extent, count: usize) -> Vec<f64> {
    if count == 0 || !extent.min.is_finite() || !extent.max.is_finite() {
        return Vec::new();
    }

    let span = extent.span();
    if span == 0.0 {
        return vec![extent.min];
    }

    let step = nice_step(span / count as f64);
    let first = (extent.min / step).ceil() as i64;
    let last = (extent.max / step).floor() as i64;

    (first..=last)
        .map(|i| {
            let v = i as f64 * step;
            // Keeps -0.0 and float dust out of the labels.
            if v.abs() < step * 1e-9 { 0.0 } else { v }
        })
        .collect()
}

fn nice_step(raw: f64) -> f64 {
    let magnitude = 10f64.powi(raw.log10().floor() as i32);
    let normalized = raw / magnitude;

    let nice = if normalized < 1.5 {
        1.0
    } else if normalized < 3.0 {
        2.0
    } else if normalized < 7.0 {
        5.0
    } else {
        10.0
    };

    nice * magnitude
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nice_step_rounds_to_1_2_5() {
        assert_eq!(nice_step(0.9), 1.0);
        assert_eq!(nice_step(2.4), 2.0);
        assert_eq!(nice_step(43.0), 50.0);
        assert_eq!(nice_step(8.0), 10.0);
    }

    #[test]
    fn ticks_stay_inside_the_extent() {
        let ticks = nice_ticks(Extent::new(-3.7, 12.2), 5);
        assert_eq!(ticks, vec![0.0, 5.0, 10.0]);

        let ticks = nice_ticks(Extent::new(0.0, 10.0), 4);
        assert_eq!(ticks, vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
    }

    #[test]
    fn degenerate_ticks() {
        assert!(nice_ticks(Extent::new(0.0, 1.0), 0).is_empty());
        assert_eq!(nice_ticks(Extent::new(2.0, 2.0), 5), vec![2.0]);
    }
}
