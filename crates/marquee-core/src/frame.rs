use crate::distortion::ClipSkew;
use crate::preview::PreviewUpdate;

/// Per-item view writes for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ItemFrame {
    /// Horizontal translation to write, `None` when the transform is left untouched.
    pub translate_x: Option<f32>,
    pub skew: ClipSkew,
}

/// Everything the view needs to apply after a tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    pub items: Vec<ItemFrame>,
    pub preview: Option<PreviewUpdate>,
}

impl Frame {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            items: Vec::with_capacity(n),
            preview: None,
        }
    }

    pub fn has_translations(&self) -> bool {
        self.items.iter().any(|i| i.translate_x.is_some())
    }
}
