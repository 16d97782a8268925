/// Drag gesture state shared by mouse and touch input.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        /// Pointer x (client px) at drag start.
        start: f32,
    },
}

impl DragState {
    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }
}

/// Scroll target for a drag that began at `start` from scroll `position`.
///
/// Dragging right moves the content left, hence `start - x`.
#[inline]
pub fn drag_target(position: f64, start: f32, x: f32, factor: f32) -> f64 {
    position + (f64::from(start) - f64::from(x)) * f64::from(factor)
}
