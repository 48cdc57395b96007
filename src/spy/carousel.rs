pub const AUTO_ADVANCE_MS: u64 = 5000;

/// Slide index for an auto-advancing gallery that holds still while hovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
    hovered: bool,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            index: 0,
            hovered: false,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_paused(&self) -> bool {
        self.hovered || self.len < 2
    }

    /// Timer callback.
    pub fn tick(&mut self) {
        if !self.is_paused() {
            self.next();
        }
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_wraps() {
        let mut c = Carousel::new(3);
        c.tick();
        c.tick();
        assert_eq!(c.index(), 2);
        c.tick();
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn test_hover_pauses() {
        let mut c = Carousel::new(3);
        c.set_hovered(true);
        c.tick();
        assert_eq!(c.index(), 0);
        // manual navigation still works while hovered
        c.next();
        assert_eq!(c.index(), 1);
        c.set_hovered(false);
        c.tick();
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn test_prev_and_select() {
        let mut c = Carousel::new(4);
        c.prev();
        assert_eq!(c.index(), 3);
        c.select(1);
        assert_eq!(c.index(), 1);
        c.select(9);
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn test_degenerate_lengths() {
        let mut empty = Carousel::new(0);
        empty.tick();
        empty.next();
        empty.prev();
        assert_eq!(empty.index(), 0);
        assert!(empty.is_paused());

        let mut single = Carousel::new(1);
        single.tick();
        assert_eq!(single.index(), 0);
    }
}
