pub mod aabb;
pub mod grid;

pub use glam::{dvec2, DVec2};
pub use aabb::Aabb2;
pub use grid::{linspace, Linspace};

pub type Point2 = DVec2;

/// Whether both coordinates of `p` are finite (neither NaN nor infinite).
pub fn is_finite_point(p: Point2) -> bool {
    p.x.is_finite() && p.y.is_finite()
}
