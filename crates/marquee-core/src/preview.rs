use crate::constants::PREVIEW_LABEL_DIGITS;

/// What the preview panel should show for the focal item.
#[derive(Clone, Debug, PartialEq)]
pub struct PreviewUpdate {
    /// 0-based item index.
    pub index: usize,
    pub label: String,
}

/// 1-based, zero-padded index readout ("001", "002", ...).
pub fn preview_label(index: usize) -> String {
    format!("{:0width$}", index + 1, width = PREVIEW_LABEL_DIGITS)
}

/// Vertical offset of the index readout inside the preview panel.
///
/// `container_height` is the usable height (panel height minus the inset).
pub fn preview_offset(index: usize, container_height: f32, label_height: f32, count: usize) -> f32 {
    if count == 0 {
        return 0.0;
    }
    let step = (container_height - label_height) / count as f32 + 1.0;
    step * index as f32
}

impl PreviewUpdate {
    pub fn for_index(index: usize) -> Self {
        Self {
            index,
            label: preview_label(index),
        }
    }
}
