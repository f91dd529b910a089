use std::sync::Arc;

use wavelines_engine::coords::Vec2;
use wavelines_engine::paint::Color;
use wavelines_engine::scene::DrawList;
use wavelines_geom::Vec3;

/// One coloured polyline at a fixed offset.
#[derive(Debug, Clone, PartialEq)]
pub struct LineShape {
    points: Arc<[[f32; 3]]>,
    offset: Vec2,
    color: Color,
}

impl LineShape {
    /// Empty shape; it draws nothing until points are assigned.
    pub fn new(offset: Vec2, color: Color) -> Self {
        Self { points: Arc::from(Vec::<[f32; 3]>::new()), offset, color }
    }

    pub fn points(&self) -> &Arc<[[f32; 3]]> {
        &self.points
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn color(&self) -> Color {
        self.color
    }

    fn set_points(&mut self, points: Arc<[[f32; 3]]>) {
        self.points = points;
    }
}

/// The scene's line shapes. Every shape always holds the same points.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSet {
    shapes: Vec<LineShape>,
}

impl LineSet {
    /// One shape per offset, all in `color`.
    pub fn new(offsets: &[Vec2], color: Color) -> Self {
        Self {
            shapes: offsets.iter().map(|&o| LineShape::new(o, color)).collect(),
        }
    }

    pub fn shapes(&self) -> &[LineShape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Replaces the points of every shape with `polyline`.
    ///
    /// The f32 copy is made once and shared, so the renderer uploads it once.
    pub fn assign(&mut self, polyline: &[Vec3]) {
        let points: Arc<[[f32; 3]]> = polyline.iter().map(|p| p.to_f32_array()).collect();
        for shape in &mut self.shapes {
            shape.set_points(points.clone());
        }
    }

    /// Pushes one polyline command per shape, in shape order.
    pub fn record(&self, list: &mut DrawList) {
        for shape in &self.shapes {
            list.push_polyline(shape.points.clone(), shape.offset, shape.color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wavelines_engine::scene::DrawCmd;

    fn polyline() -> Vec<Vec3> {
        vec![Vec3::new(-1.0, 0.0, 0.0), Vec3::new(0.5, 2.0, 0.0), Vec3::new(3.0, -1.0, 0.0)]
    }

    #[test]
    fn new_shapes_are_empty() {
        let set = LineSet::new(&[Vec2::zero(); 4], Color::BLACK);
        assert_eq!(set.len(), 4);
        assert!(set.shapes().iter().all(|s| s.points().is_empty()));
    }

    #[test]
    fn assign_shares_one_buffer() {
        let mut set = LineSet::new(&[Vec2::zero(), Vec2::new(5.0, 0.0)], Color::BLACK);
        set.assign(&polyline());

        let [a, b] = set.shapes() else { panic!("expected two shapes") };
        assert!(Arc::ptr_eq(a.points(), b.points()));
        assert_eq!(&a.points()[1], &[0.5, 2.0, 0.0]);
        assert_eq!(b.offset(), Vec2::new(5.0, 0.0));
    }

    #[test]
    fn reassign_replaces_previous_points() {
        let mut set = LineSet::new(&[Vec2::zero(); 2], Color::BLACK);
        set.assign(&polyline());
        set.assign(&polyline()[..2]);
        assert!(set.shapes().iter().all(|s| s.points().len() == 2));
    }

    #[test]
    fn record_emits_one_command_per_shape() {
        let color = Color::from_hex(0x888888);
        let mut set = LineSet::new(&[Vec2::zero(); 4], color);
        set.assign(&polyline());

        let mut list = DrawList::new();
        set.record(&mut list);

        assert_eq!(list.len(), 4);
        for item in list.items() {
            let DrawCmd::Polyline(cmd) = item;
            assert_eq!(cmd.points.len(), 3);
            assert_eq!(cmd.color, color);
            assert_eq!(cmd.offset, Vec2::zero());
        }
    }

    #[test]
    fn record_follows_shape_order() {
        let offsets = [Vec2::new(2.0, 0.0), Vec2::zero(), Vec2::new(-1.0, 3.0)];
        let mut set = LineSet::new(&offsets, Color::BLACK);
        set.assign(&polyline());

        let mut list = DrawList::new();
        set.record(&mut list);

        let recorded: Vec<Vec2> = list
            .items()
            .iter()
            .map(|item| {
                let DrawCmd::Polyline(cmd) = item;
                cmd.offset
            })
            .collect();
        assert_eq!(recorded, offsets);
    }
}
