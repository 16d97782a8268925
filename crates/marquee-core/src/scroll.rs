/// Scroll direction in the wrap sense: `Up` while `current` grows, `Down` while it shrinks.
///
/// The names follow the scroll value, not the visual motion of the strip.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Up,
    Down,
}

/// Scalar scroll model shared by every gesture family.
///
/// Kept in `f64`: the values grow without bound during autoplay and must keep
/// sub-pixel steps at any magnitude.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollState {
    pub ease: f64,
    /// Snapshot of `current` taken when a drag starts.
    pub position: f64,
    pub current: f64,
    pub target: f64,
    pub last: f64,
    /// `round(current % total_width)`, refreshed every tick.
    pub clamp: f64,
}

impl ScrollState {
    pub fn new(ease: f32) -> Self {
        Self {
            ease: f64::from(ease),
            position: 0.0,
            current: 0.0,
            target: 0.0,
            last: 0.0,
            clamp: 0.0,
        }
    }

    #[inline]
    pub fn ease_towards_target(&mut self) {
        self.current += (self.target - self.current) * self.ease;
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        if self.current < self.last {
            Direction::Down
        } else {
            Direction::Up
        }
    }

    /// True when the scroll moved by less than a whole pixel since the last tick.
    #[inline]
    pub fn is_settled(&self) -> bool {
        self.current.round() == self.last.round()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_follows_sign_of_change() {
        let mut s = ScrollState::new(0.1);
        s.last = 10.0;
        s.current = 9.0;
        assert_eq!(s.direction(), Direction::Down);
        s.current = 11.0;
        assert_eq!(s.direction(), Direction::Up);
        s.current = 10.0;
        assert_eq!(s.direction(), Direction::Up);
    }

    #[test]
    fn settled_compares_rounded_pixels() {
        let mut s = ScrollState::new(0.1);
        s.last = 10.2;
        s.current = 10.4;
        assert!(s.is_settled());
        s.current = 10.6;
        assert!(!s.is_settled());
    }
}
