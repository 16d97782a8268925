//! The marquee state machine.
//!
//! A [`Marquee`] is driven by its host: gesture and wheel callbacks mutate the
//! scroll target, and [`Marquee::update`] is called once per display frame to
//! integrate motion, wrap items around the strip and ease the distortion
//! field. The returned [`Frame`] lists the style writes for the view layer.
//! Nothing here touches a platform API, so the whole model runs host-side.

use smallvec::SmallVec;

use crate::config::MarqueeConfig;
use crate::distortion::{distortion_target, ClipSkew};
use crate::error::MarqueeError;
use crate::frame::{Frame, ItemFrame};
use crate::input::{drag_target, DragState};
use crate::item::{Item, ItemGeometry};
use crate::preview::PreviewUpdate;
use crate::scroll::{Direction, ScrollState};
use crate::wheel::{normalize_wheel, DeltaMode};

pub type Items = SmallVec<[Item; 16]>;

pub struct Marquee {
    pub config: MarqueeConfig,
    pub scroll: ScrollState,
    pub items: Items,
    total_width: f64,
    item_width: f32,
    velocity: f32,
    direction: Direction,
    enabled: bool,
    hovered: bool,
    drag: DragState,
}

impl Marquee {
    /// Builds a disabled marquee from layout-time measurements.
    ///
    /// `total_width` is the width of the list container; items are expected
    /// to tile it.
    pub fn new(
        config: MarqueeConfig,
        geometry: &[ItemGeometry],
        total_width: f32,
    ) -> Result<Self, MarqueeError> {
        config.validate()?;
        validate_geometry(geometry, total_width)?;

        let items = geometry
            .iter()
            .map(|g| Item::new(*g, config.distortion_ease))
            .collect::<Items>();

        Ok(Self {
            scroll: ScrollState::new(config.scroll_ease),
            velocity: config.velocity,
            config,
            items,
            total_width: f64::from(total_width),
            item_width: geometry[0].width,
            direction: Direction::Up,
            enabled: false,
            hovered: false,
            drag: DragState::Idle,
        })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total_width(&self) -> f64 {
        self.total_width
    }

    pub fn item_width(&self) -> f32 {
        self.item_width
    }

    /// Idle velocity that the next tick will add to the target.
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn drag(&self) -> DragState {
        self.drag
    }

    // ---------------- Enable / disable ----------------

    pub fn enable(&mut self) {
        if !self.enabled {
            log::debug!("[marquee] enabled ({} items)", self.items.len());
        }
        self.enabled = true;
    }

    /// Freezes the view: every item is pinned back to translation 0.
    ///
    /// Scroll state is left as is, so re-enabling resumes where it stopped.
    pub fn disable(&mut self) -> Frame {
        if self.enabled {
            log::debug!("[marquee] disabled at scroll {:.1}", self.scroll.current);
        }
        self.enabled = false;

        let mut frame = Frame::with_capacity(self.items.len());
        for item in self.items.iter_mut() {
            item.presented_x = 0.0;
            frame.items.push(ItemFrame {
                translate_x: Some(0.0),
                skew: ClipSkew::from_distortion(item.distortion.current),
            });
        }
        frame
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    // ---------------- Gestures ----------------

    pub fn pointer_down(&mut self, x: f32) {
        if !self.enabled {
            return;
        }
        self.scroll.position = self.scroll.current;
        self.drag = DragState::Dragging { start: x };
    }

    pub fn pointer_move(&mut self, x: f32) {
        if !self.enabled {
            return;
        }
        if let DragState::Dragging { start } = self.drag {
            self.scroll.target =
                drag_target(self.scroll.position, start, x, self.config.drag_factor);
        }
    }

    pub fn pointer_up(&mut self) {
        if !self.enabled {
            return;
        }
        self.drag = DragState::Idle;
    }

    pub fn wheel(&mut self, delta_y: f32, mode: DeltaMode) {
        if !self.enabled || !self.config.wheel_enabled {
            return;
        }
        let pixel_y = normalize_wheel(delta_y, mode);
        self.scroll.target += f64::from(pixel_y * self.config.wheel_factor);
    }

    // ---------------- Distortion field ----------------

    /// Retargets every item's distortion from the pointer's client x.
    pub fn pointer_over(&mut self, x: f32) {
        let range = self.config.distortion_range;
        let max = self.config.distortion_max;
        for item in self.items.iter_mut() {
            let dx = x - item.rendered_center();
            item.distortion.target = distortion_target(dx, range, max);
        }
    }

    pub fn pointer_leave(&mut self) {
        for item in self.items.iter_mut() {
            item.distortion.target = 0.0;
        }
    }

    // ---------------- Preview ----------------

    /// Explicit selection (click). Out of range indices are ignored.
    pub fn select(&self, index: usize) -> Option<PreviewUpdate> {
        (index < self.items.len()).then(|| PreviewUpdate::for_index(index))
    }

    // ---------------- Frame loop ----------------

    /// Per-frame entry point. Returns `None` while disabled.
    pub fn update(&mut self, locked: bool) -> Option<Frame> {
        if !self.enabled {
            return None;
        }
        Some(self.tick(locked))
    }

    /// Advances the model by one tick regardless of the enabled flag.
    ///
    /// While disabled the returned frame carries no translations, so the
    /// frozen view is never disturbed.
    pub fn tick(&mut self, locked: bool) -> Frame {
        self.scroll.target += f64::from(self.velocity);
        self.scroll.ease_towards_target();

        let suppressed = self.hovered || locked;
        let scroll_clamp = (self.scroll.current % self.total_width).round();

        self.direction = self.scroll.direction();
        self.velocity = match (suppressed, self.direction) {
            (true, _) => 0.0,
            (false, Direction::Up) => self.config.velocity,
            (false, Direction::Down) => -self.config.velocity,
        };

        let write = self.enabled && !self.scroll.is_settled();
        let threshold = self.config.preview_threshold;
        let mut focal = None;
        let mut frame = Frame::with_capacity(self.items.len());

        for (i, item) in self.items.iter_mut().enumerate() {
            if item.layout(self.scroll.current, self.direction, self.total_width) {
                log::trace!("[wrap] item {} extra={}", i, item.extra);
            }

            let skew = ClipSkew::from_distortion(item.distortion.step());

            let translate_x = if write {
                let x = item.position.floor() as f32;
                item.presented_x = x;
                if item.rendered_left() < threshold {
                    focal = Some(i);
                }
                Some(x)
            } else {
                None
            };

            frame.items.push(ItemFrame { translate_x, skew });
        }

        self.scroll.last = self.scroll.current;
        self.scroll.clamp = scroll_clamp;
        frame.preview = focal.map(PreviewUpdate::for_index);
        frame
    }

    // ---------------- Resize ----------------

    /// Takes fresh measurements and resets the scroll model.
    ///
    /// The caller must have cleared item transforms before measuring.
    pub fn resize(&mut self, geometry: &[ItemGeometry], total_width: f32) -> Result<(), MarqueeError> {
        validate_geometry(geometry, total_width)?;

        if geometry.len() == self.items.len() {
            for (item, g) in self.items.iter_mut().zip(geometry) {
                item.remeasure(*g);
            }
        } else {
            log::warn!(
                "[marquee] item count changed on resize ({} -> {}); rebuilding",
                self.items.len(),
                geometry.len()
            );
            self.items = geometry
                .iter()
                .map(|g| Item::new(*g, self.config.distortion_ease))
                .collect();
        }

        self.item_width = geometry[0].width;
        self.total_width = f64::from(total_width);
        self.scroll = ScrollState::new(self.config.scroll_ease);
        self.direction = Direction::Up;
        log::debug!(
            "[marquee] resized: {} items, strip width {:.1}",
            self.items.len(),
            total_width
        );
        Ok(())
    }
}

fn validate_geometry(geometry: &[ItemGeometry], total_width: f32) -> Result<(), MarqueeError> {
    if geometry.is_empty() {
        return Err(MarqueeError::NoItems);
    }
    if !total_width.is_finite() || total_width <= 0.0 {
        return Err(MarqueeError::InvalidStripWidth(total_width));
    }
    for (index, g) in geometry.iter().enumerate() {
        if !g.width.is_finite() || g.width < 0.0 || !g.left.is_finite() {
            return Err(MarqueeError::InvalidGeometry { index });
        }
    }
    Ok(())
}
