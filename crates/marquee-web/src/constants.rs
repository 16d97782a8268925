// DOM hooks used by the gallery markup.

// Element selectors
pub const GALLERY_SELECTOR: &str = "[data-gallery]";
pub const LIST_SELECTOR: &str = "[data-gallery-list]";
pub const ITEM_SELECTOR: &str = "[data-gallery-image]";
pub const MAIN_IMAGE_SELECTOR: &str = "[data-gallery-main]";
pub const PREVIEW_SELECTOR: &str = "[data-gallery-preview]";
pub const PREVIEW_INDEX_SELECTOR: &str = "[data-gallery-preview-index]";
pub const ITEM_IMAGE_SELECTOR: &str = "img";

// Classes
pub const ACTIVE_CLASS: &str = "active"; // on the gallery root while it is the current view
pub const DRAGGING_CLASS: &str = "dragging"; // on the list between pointer down and up
