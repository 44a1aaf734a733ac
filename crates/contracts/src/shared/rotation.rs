//! Index bookkeeping for the testimonial carousel.

/// Current slide of a fixed-length carousel.
///
/// `epoch` changes on every manual selection so the driver can restart its
/// auto-advance timer from zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation {
    index: usize,
    len: usize,
    epoch: u64,
}

impl Rotation {
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len,
            epoch: 0,
        }
    }

    pub fn current(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Automatic step, wraps after the last slide
    pub fn advance(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    /// Manual jump. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.index = index;
        self.epoch = self.epoch.wrapping_add(1);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_is_n_mod_len() {
        for len in 1..7 {
            let mut rotation = Rotation::new(len);
            for n in 0..25 {
                assert_eq!(rotation.current(), n % len);
                rotation.advance();
            }
        }
    }

    #[test]
    fn test_select_overrides_position() {
        let mut rotation = Rotation::new(5);
        for _ in 0..7 {
            rotation.advance();
        }
        assert!(rotation.select(4));
        assert_eq!(rotation.current(), 4);
        assert_eq!(rotation.epoch(), 1);

        rotation.advance();
        assert_eq!(rotation.current(), 0);
    }

    #[test]
    fn test_select_out_of_range_is_ignored() {
        let mut rotation = Rotation::new(3);
        rotation.advance();
        assert!(!rotation.select(3));
        assert_eq!(rotation.current(), 1);
        assert_eq!(rotation.epoch(), 0);
    }

    #[test]
    fn test_empty_rotation_does_not_panic() {
        let mut rotation = Rotation::new(0);
        rotation.advance();
        assert!(rotation.is_empty());
        assert_eq!(rotation.current(), 0);
    }
}
