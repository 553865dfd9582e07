#![forbid(unsafe_code)]

//! Planar geometry primitives shared by the selkie crates.

use serde::{Deserialize, Serialize};

pub type Unit = euclid::UnknownUnit;

pub type Point = euclid::Point2D<f64, Unit>;
pub type Vector = euclid::Vector2D<f64, Unit>;

pub fn point(x: f64, y: f64) -> Point {
    euclid::point2(x, y)
}

pub fn vector(x: f64, y: f64) -> Vector {
    euclid::vec2(x, y)
}

/// Quarter turn counter-clockwise in a y-down frame: `(x, y) -> (-y, x)`.
pub fn rot90(v: Vector) -> Vector {
    vector(-v.y, v.x)
}

/// A directed segment. Portals use this with `from -> to` oriented so that
/// [`Line::normal`] points into the cell the portal enters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub from: Point,
    pub to: Point,
}

impl Line {
    pub fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }

    pub fn reversed(&self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }

    pub fn delta(&self) -> Vector {
        self.to - self.from
    }

    pub fn midpoint(&self) -> Point {
        self.from.lerp(self.to, 0.5)
    }

    pub fn length(&self) -> f64 {
        self.delta().length()
    }

    /// Unnormalized normal, `rot90(to - from)`.
    pub fn normal(&self) -> Vector {
        rot90(self.delta())
    }
}

pub fn line(from: (f64, f64), to: (f64, f64)) -> Line {
    Line::new(point(from.0, from.1), point(to.0, to.1))
}

/// Axis-aligned rectangle as a polygon, corners in `(min, min)`, `(max, min)`,
/// `(max, max)`, `(min, max)` order.
pub fn rect_polygon(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Vec<Point> {
    vec![
        point(min_x, min_y),
        point(max_x, min_y),
        point(max_x, max_y),
        point(min_x, max_y),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_points_to_the_left_of_travel_in_screen_space() {
        let l = line((3.0, 2.0), (3.0, 0.0));
        assert_eq!(l.normal(), vector(2.0, 0.0));
        assert_eq!(l.reversed().normal(), vector(-2.0, 0.0));
    }

    #[test]
    fn midpoint_and_length() {
        let l = line((1.0, 4.0), (3.0, 4.0));
        assert_eq!(l.midpoint(), point(2.0, 4.0));
        assert_eq!(l.length(), 2.0);
    }
}
