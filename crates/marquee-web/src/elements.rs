use crate::constants::*;
use crate::dom;
use crate::settings;
use marquee_core::{ItemGeometry, MarqueeConfig};
use wasm_bindgen::JsCast;
use web_sys as web;

/// The gallery's DOM nodes, looked up once at mount.
pub struct GalleryElements {
    pub root: web::Element,
    pub list: web::HtmlElement,
    pub items: Vec<web::HtmlElement>,
    pub main: Option<web::HtmlImageElement>,
    pub preview: Option<web::HtmlElement>,
    pub preview_index: Option<web::HtmlElement>,
}

impl GalleryElements {
    pub fn query(document: &web::Document) -> anyhow::Result<Self> {
        let root = dom::query_one::<web::Element>(document, GALLERY_SELECTOR)?;
        let list = dom::query_one::<web::HtmlElement>(document, LIST_SELECTOR)?;
        let items = dom::query_all(document, ITEM_SELECTOR)?;
        if items.is_empty() {
            anyhow::bail!("no {} elements", ITEM_SELECTOR);
        }
        Ok(Self {
            root,
            list,
            items,
            main: dom::query_optional(document, MAIN_IMAGE_SELECTOR),
            preview: dom::query_optional(document, PREVIEW_SELECTOR),
            preview_index: dom::query_optional(document, PREVIEW_INDEX_SELECTOR),
        })
    }

    /// The gallery only autoplays while it is the active view.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.root.class_list().contains(ACTIVE_CLASS)
    }

    /// Item boxes and the strip width, as currently laid out.
    pub fn measure(&self) -> (Vec<ItemGeometry>, f32) {
        let geometry = self
            .items
            .iter()
            .map(|el| {
                let (left, width, _) = dom::offset(el);
                ItemGeometry { left, width }
            })
            .collect();
        let (_, total_width, _) = dom::offset(&self.list);
        (geometry, total_width)
    }

    pub fn item_image_src(&self, index: usize) -> Option<String> {
        let item = self.items.get(index)?;
        let img = item.query_selector(ITEM_IMAGE_SELECTOR).ok()??;
        img.dyn_into::<web::HtmlImageElement>().ok().map(|i| i.src())
    }

    pub fn read_config(&self) -> MarqueeConfig {
        let mut config = MarqueeConfig::default();
        for name in settings::CONFIG_ATTRIBUTES {
            if let Some(raw) = self.root.get_attribute(name) {
                if let Err(e) = settings::apply_validated(&mut config, name, &raw) {
                    log::warn!("[config] ignoring {}: {}", name, e);
                }
            }
        }
        config
    }
}
