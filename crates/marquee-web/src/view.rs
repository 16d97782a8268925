use crate::elements::GalleryElements;
use crate::style;
use marquee_core::{preview_offset, ClipSkew, Frame, PreviewUpdate};
use web_sys as web;

/// Writes one frame's transforms, skews and preview to the DOM.
pub fn apply_frame(elements: &GalleryElements, frame: &Frame, preview_inset: f32) {
    for (el, item) in elements.items.iter().zip(&frame.items) {
        let css = el.style();
        write_skew(&css, item.skew);
        if let Some(x) = item.translate_x {
            _ = css.set_property(style::TRANSFORM, &style::translate3d(x));
        }
    }
    if let Some(preview) = &frame.preview {
        apply_preview(elements, preview, preview_inset);
    }
}

pub fn reset_transforms(elements: &GalleryElements) {
    for el in &elements.items {
        _ = el.style().set_property(style::TRANSFORM, &style::translate3d(0.0));
    }
}

fn write_skew(css: &web::CssStyleDeclaration, skew: ClipSkew) {
    for (name, value) in style::skew_properties(skew.top, skew.bottom) {
        _ = css.set_property(name, &value);
    }
}

pub fn apply_preview(elements: &GalleryElements, preview: &PreviewUpdate, preview_inset: f32) {
    if let (Some(main), Some(src)) = (&elements.main, elements.item_image_src(preview.index)) {
        if main.src() != src {
            main.set_src(&src);
        }
    }

    let (Some(panel), Some(index_el)) = (&elements.preview, &elements.preview_index) else {
        return;
    };
    index_el.set_text_content(Some(&preview.label));

    let container_height = panel.get_bounding_client_rect().height() as f32 - preview_inset;
    let label_height = index_el.get_bounding_client_rect().height() as f32;
    let y = preview_offset(
        preview.index,
        container_height,
        label_height,
        elements.items.len(),
    );
    _ = index_el
        .style()
        .set_property(style::TRANSFORM, &style::translate_y(y));
}
