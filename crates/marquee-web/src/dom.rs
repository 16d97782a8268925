use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn query_one<T: JsCast>(root: &web::Document, selector: &str) -> anyhow::Result<T> {
    root.query_selector(selector)
        .map_err(|e| anyhow::anyhow!("bad selector {}: {:?}", selector, e))?
        .ok_or_else(|| anyhow::anyhow!("missing {}", selector))?
        .dyn_into::<T>()
        .map_err(|e| anyhow::anyhow!("{} has unexpected type: {:?}", selector, e))
}

pub fn query_optional<T: JsCast>(root: &web::Document, selector: &str) -> Option<T> {
    match query_one::<T>(root, selector) {
        Ok(el) => Some(el),
        Err(e) => {
            log::warn!("[dom] {}", e);
            None
        }
    }
}

pub fn query_all(root: &web::Document, selector: &str) -> anyhow::Result<Vec<web::HtmlElement>> {
    let list = root
        .query_selector_all(selector)
        .map_err(|e| anyhow::anyhow!("bad selector {}: {:?}", selector, e))?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect())
}

/// Layout box of an element in client px: (left, width, height).
#[inline]
pub fn offset(el: &web::Element) -> (f32, f32, f32) {
    let rect = el.get_bounding_client_rect();
    (rect.left() as f32, rect.width() as f32, rect.height() as f32)
}

/// Resolves on the next `requestAnimationFrame`, once layout has been computed.
pub async fn next_animation_frame() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        _ = window.request_animation_frame(&resolve);
    });
    JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}
