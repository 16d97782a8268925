use crate::math::lerp;
use crate::scroll::Direction;

/// Layout-time measurement of one strip entry (page coordinates, px).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ItemGeometry {
    pub left: f32,
    pub width: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Distortion {
    pub current: f32,
    pub target: f32,
    pub ease: f32,
}

impl Distortion {
    pub fn new(ease: f32) -> Self {
        Self {
            current: 0.0,
            target: 0.0,
            ease,
        }
    }

    #[inline]
    pub fn step(&mut self) -> f32 {
        self.current = lerp(self.current, self.target, self.ease);
        self.current
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    pub width: f32,
    pub offset: f32,
    pub position: f64,
    /// Accumulated wrap shift; always a whole multiple of the strip width.
    pub extra: f64,
    pub is_before: bool,
    pub is_after: bool,
    pub distortion: Distortion,
    /// Translation last handed to the view (0 while frozen).
    pub presented_x: f32,
}

impl Item {
    pub fn new(geometry: ItemGeometry, distortion_ease: f32) -> Self {
        Self {
            width: geometry.width,
            offset: geometry.left,
            position: 0.0,
            extra: 0.0,
            is_before: false,
            is_after: false,
            distortion: Distortion::new(distortion_ease),
            presented_x: 0.0,
        }
    }

    /// Forget wrap/position state and take new measurements. Distortion is kept.
    pub fn remeasure(&mut self, geometry: ItemGeometry) {
        self.width = geometry.width;
        self.offset = geometry.left;
        self.position = 0.0;
        self.extra = 0.0;
        self.is_before = false;
        self.is_after = false;
        self.presented_x = 0.0;
    }

    /// Right edge of the item relative to the strip origin after scrolling.
    #[inline]
    pub fn edge_offset(&self) -> f64 {
        self.position + f64::from(self.offset) + f64::from(self.width)
    }

    /// Left edge as currently rendered.
    #[inline]
    pub fn rendered_left(&self) -> f32 {
        self.offset + self.presented_x
    }

    #[inline]
    pub fn rendered_center(&self) -> f32 {
        self.rendered_left() + self.width / 2.0
    }

    /// Recompute `position` for scroll value `current`, then wrap at most once.
    ///
    /// Returns true when the item was moved to the opposite end of the strip.
    pub fn layout(&mut self, current: f64, direction: Direction, total_width: f64) -> bool {
        self.position = -current - self.extra;

        let edge = self.edge_offset();
        self.is_before = edge < 0.0;
        self.is_after = edge > total_width;

        let wrapped = match direction {
            Direction::Up if self.is_before => {
                self.extra -= total_width;
                true
            }
            Direction::Down if self.is_after => {
                self.extra += total_width;
                true
            }
            _ => false,
        };
        if wrapped {
            self.is_before = false;
            self.is_after = false;
        }
        wrapped
    }
}
