use std::sync::Arc;

use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

/// Open polyline draw payload.
///
/// `points` is shared: commands cloned from the same `Arc` are uploaded once
/// by the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct PolylineCmd {
    /// Vertices in scene units.
    pub points: Arc<[[f32; 3]]>,
    /// Translation applied to every vertex (scene units).
    pub offset: Vec2,
    pub color: Color,
}

impl PolylineCmd {
    #[inline]
    pub fn new(points: Arc<[[f32; 3]]>, offset: Vec2, color: Color) -> Self {
        Self { points, offset, color }
    }

    /// Fewer than two points draws nothing.
    #[inline]
    pub fn is_drawable(&self) -> bool {
        self.points.len() >= 2 && self.offset.is_finite() && self.color.is_finite()
    }
}

impl DrawList {
    /// Records a polyline draw command.
    #[inline]
    pub fn push_polyline(&mut self, points: Arc<[[f32; 3]]>, offset: Vec2, color: Color) {
        self.push(DrawCmd::Polyline(PolylineCmd::new(points, offset, color)));
    }
}
