/// Gallery index controller
///
/// Cycles an index over a project's artwork. The state lives inside the
/// screen that owns it and is dropped with the screen, so a stale timer can
/// never reach a torn-down gallery. Timer delivery itself is an iced
/// subscription owned by the application shell.

use std::time::Duration;

/// Fixed autoplay cadence.
pub const AUTOPLAY_INTERVAL: Duration = Duration::from_secs(3);

/// Per-screen gallery state: a wrapping index plus an autoplay flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryState {
    index: usize,
    autoplay: bool,
    image_count: usize,
}

impl GalleryState {
    /// A gallery over `image_count` images, starting at the first image
    /// with autoplay off. The count is clamped to at least 1 so the index
    /// arithmetic can never divide by zero.
    pub fn new(image_count: usize) -> Self {
        GalleryState {
            index: 0,
            autoplay: false,
            image_count: image_count.max(1),
        }
    }

    /// Same as [`GalleryState::new`] with the autoplay flag preset; the
    /// opening value differs per screen.
    pub fn with_autoplay(image_count: usize, autoplay: bool) -> Self {
        GalleryState {
            autoplay,
            ..GalleryState::new(image_count)
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn autoplay(&self) -> bool {
        self.autoplay
    }

    pub fn image_count(&self) -> usize {
        self.image_count
    }

    /// Advance to the next image, wrapping at the end.
    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.image_count;
    }

    /// Step back to the previous image, wrapping at the start.
    pub fn prev(&mut self) {
        self.index = (self.index + self.image_count - 1) % self.image_count;
    }

    /// Jump straight to image `k`. Out-of-range requests leave the state
    /// unchanged rather than panicking.
    pub fn jump_to(&mut self, k: usize) {
        if k < self.image_count {
            self.index = k;
        }
    }

    pub fn toggle_autoplay(&mut self) {
        self.autoplay = !self.autoplay;
    }

    /// One timer tick: advances only while autoplay is on.
    pub fn tick(&mut self) {
        if self.autoplay {
            self.next();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_images_wrap_around() {
        let mut gallery = GalleryState::new(3);
        assert_eq!(gallery.index(), 0);
        gallery.next();
        assert_eq!(gallery.index(), 1);
        gallery.next();
        assert_eq!(gallery.index(), 2);
        gallery.next();
        assert_eq!(gallery.index(), 0);
    }

    #[test]
    fn prev_wraps_backwards() {
        let mut gallery = GalleryState::new(3);
        gallery.prev();
        assert_eq!(gallery.index(), 2);
    }

    #[test]
    fn next_then_prev_round_trips_for_any_count() {
        for count in 1..=7 {
            let mut gallery = GalleryState::new(count);
            gallery.jump_to(count / 2);
            let start = gallery.index();
            for _ in 0..count {
                gallery.next();
            }
            for _ in 0..count {
                gallery.prev();
            }
            assert_eq!(gallery.index(), start, "count = {count}");
        }
    }

    #[test]
    fn single_image_galleries_stay_put() {
        let mut gallery = GalleryState::new(1);
        gallery.next();
        gallery.prev();
        gallery.tick();
        assert_eq!(gallery.index(), 0);
    }

    #[test]
    fn jump_to_in_range_sets_exactly() {
        let mut gallery = GalleryState::new(4);
        gallery.jump_to(2);
        assert_eq!(gallery.index(), 2);
        gallery.jump_to(0);
        assert_eq!(gallery.index(), 0);
    }

    #[test]
    fn jump_to_out_of_range_is_a_no_op() {
        let mut gallery = GalleryState::new(4);
        gallery.jump_to(3);
        let before = gallery.clone();
        gallery.jump_to(4);
        assert_eq!(gallery, before);
        gallery.jump_to(usize::MAX);
        assert_eq!(gallery, before);
    }

    #[test]
    fn tick_advances_only_while_autoplaying() {
        let mut gallery = GalleryState::new(3);
        gallery.tick();
        assert_eq!(gallery.index(), 0);

        gallery.toggle_autoplay();
        assert!(gallery.autoplay());
        gallery.tick();
        assert_eq!(gallery.index(), 1);

        gallery.toggle_autoplay();
        assert!(!gallery.autoplay());
        gallery.tick();
        assert_eq!(gallery.index(), 1);
    }

    #[test]
    fn zero_count_is_clamped() {
        let mut gallery = GalleryState::new(0);
        assert_eq!(gallery.image_count(), 1);
        gallery.next();
        assert_eq!(gallery.index(), 0);
    }

    #[test]
    fn with_autoplay_presets_the_flag() {
        assert!(GalleryState::with_autoplay(3, true).autoplay());
        assert!(!GalleryState::with_autoplay(3, false).autoplay());
        assert_eq!(GalleryState::with_autoplay(3, true).index(), 0);
    }
}
