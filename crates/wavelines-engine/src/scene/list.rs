use super::shapes::polyline::PolylineCmd;

/// Draw command consumed by the renderers.
///
/// Each variant's payload and push helper live in `scene::shapes`; the
/// matching renderer lives in `render::shapes`.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Polyline(PolylineCmd),
}

/// Recorded draw stream. Commands paint in push order, later over earlier.
///
/// Clearing keeps the allocation for the next recording.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Commands in paint order.
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(cmd);
    }
}
