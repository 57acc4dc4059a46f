//! Carousel State Machine
//!
//! Index into a bounded list of cards with clamped or wrapping navigation,
//! auto-advance, pause-on-hover and a debounced resize. Timers are modelled
//! as deadlines in Unix milliseconds and advanced by [`CarouselState::tick`],
//! so the owner decides where time comes from.

// == Constants ==
/// Default auto-advance interval
pub const DEFAULT_AUTOPLAY_MS: u64 = 5000;
/// Length of one slide transition
pub const TRANSITION_MS: u64 = 500;
/// Quiet period before a resize is applied
pub const RESIZE_DEBOUNCE_MS: u64 = 250;
/// Widths up to this many pixels show two cards per page
pub const DESKTOP_BREAKPOINT: u32 = 1024;

/// Cards per page for a viewport width.
pub fn items_per_page_for_width(width: u32) -> usize {
    if width <= DESKTOP_BREAKPOINT {
        2
    } else {
        3
    }
}

// == Options ==
/// What `next`/`prev` do at the ends of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overflow {
    /// Stay on the boundary
    #[default]
    Clamp,
    /// Jump to the other end
    Wrap,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselOptions {
    pub overflow: Overflow,
    /// Auto-advance interval, `None` disables autoplay
    pub autoplay_interval_ms: Option<u64>,
    pub transition_ms: u64,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            overflow: Overflow::Clamp,
            autoplay_interval_ms: Some(DEFAULT_AUTOPLAY_MS),
            transition_ms: TRANSITION_MS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingResize {
    width: u32,
    apply_at: u64,
}

// == Carousel State ==
/// Paginated view over `items`.
///
/// `current_index` always stays within `0..=max_index()`.
#[derive(Debug, Clone)]
pub struct CarouselState<T> {
    items: Vec<T>,
    current_index: usize,
    items_per_page: usize,
    options: CarouselOptions,
    next_advance_at: Option<u64>,
    animating_until: Option<u64>,
    pending_resize: Option<PendingResize>,
    hovered: bool,
    /// Set by `start_autoplay`, cleared by `stop`
    autoplay_enabled: bool,
}

impl<T> CarouselState<T> {
    // == Constructor ==
    /// Creates a carousel at index 0. Autoplay is not running until
    /// [`start_autoplay`](Self::start_autoplay) is called.
    pub fn new(items: Vec<T>, items_per_page: usize, options: CarouselOptions) -> Self {
        Self {
            items,
            current_index: 0,
            items_per_page: items_per_page.max(1),
            options,
            next_advance_at: None,
            animating_until: None,
            pending_resize: None,
            hovered: false,
            autoplay_enabled: false,
        }
    }

    // == Accessors ==
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    /// Last index that still fills a page.
    pub fn max_index(&self) -> usize {
        self.items.len().saturating_sub(self.items_per_page)
    }

    /// Cards currently on screen.
    pub fn visible(&self) -> &[T] {
        let end = (self.current_index + self.items_per_page).min(self.items.len());
        &self.items[self.current_index.min(end)..end]
    }

    /// One flag per reachable position, true for the current one.
    pub fn indicators(&self) -> Vec<bool> {
        if self.items.is_empty() {
            return Vec::new();
        }
        (0..=self.max_index())
            .map(|i| i == self.current_index)
            .collect()
    }

    pub fn can_go_prev(&self) -> bool {
        match self.options.overflow {
            Overflow::Clamp => self.current_index > 0,
            Overflow::Wrap => self.max_index() > 0,
        }
    }

    pub fn can_go_next(&self) -> bool {
        match self.options.overflow {
            Overflow::Clamp => self.current_index < self.max_index(),
            Overflow::Wrap => self.max_index() > 0,
        }
    }

    pub fn is_animating(&self, now: u64) -> bool {
        self.animating_until.is_some_and(|until| now < until)
    }

    pub fn is_autoplaying(&self) -> bool {
        self.next_advance_at.is_some()
    }

    /// When the next auto-advance is due, if autoplay is running.
    pub fn next_advance_at(&self) -> Option<u64> {
        self.next_advance_at
    }

    /// Index `next` would move to.
    pub fn next_target(&self) -> usize {
        let max = self.max_index();
        if self.current_index < max {
            self.current_index + 1
        } else {
            match self.options.overflow {
                Overflow::Clamp => max,
                Overflow::Wrap => 0,
            }
        }
    }

    /// Index `prev` would move to.
    pub fn prev_target(&self) -> usize {
        if self.current_index > 0 {
            self.current_index - 1
        } else {
            match self.options.overflow {
                Overflow::Clamp => 0,
                Overflow::Wrap => self.max_index(),
            }
        }
    }

    // == Navigation ==
    /// Moves one card forward. Returns false if nothing moved.
    pub fn next(&mut self, now: u64) -> bool {
        let target = self.next_target();
        self.transition_to(target, now)
    }

    /// Moves one card back. Returns false if nothing moved.
    pub fn prev(&mut self, now: u64) -> bool {
        let target = self.prev_target();
        self.transition_to(target, now)
    }

    /// Jumps to `index`, clamped to the last full page.
    pub fn go_to(&mut self, index: usize, now: u64) -> bool {
        let target = index.min(self.max_index());
        self.transition_to(target, now)
    }

    fn transition_to(&mut self, target: usize, now: u64) -> bool {
        if self.is_animating(now) || target == self.current_index {
            return false;
        }
        self.current_index = target;
        self.begin_transition(now);
        true
    }

    fn begin_transition(&mut self, now: u64) {
        self.animating_until = Some(now + self.options.transition_ms);
        if self.next_advance_at.is_some() {
            self.schedule_advance(now);
        }
    }

    // == Resize ==
    /// Applies a viewport width immediately: recomputes cards per page and
    /// returns to the first card.
    pub fn resize(&mut self, width: u32, now: u64) -> bool {
        let per_page = items_per_page_for_width(width);
        let changed = per_page != self.items_per_page || self.current_index != 0;
        self.items_per_page = per_page;
        self.current_index = 0;
        self.begin_transition(now);
        changed
    }

    /// Records a viewport width to apply once resizing settles.
    pub fn request_resize(&mut self, width: u32, now: u64) {
        self.pending_resize = Some(PendingResize {
            width,
            apply_at: now + RESIZE_DEBOUNCE_MS,
        });
    }

    // == Autoplay ==
    /// Starts auto-advance. Has no effect when autoplay is disabled; while
    /// the pointer is over the carousel it waits for `hover_leave`.
    pub fn start_autoplay(&mut self, now: u64) {
        self.autoplay_enabled = true;
        if !self.hovered {
            self.schedule_advance(now);
        }
    }

    pub fn pause_autoplay(&mut self) {
        self.next_advance_at = None;
    }

    pub fn hover_enter(&mut self) {
        self.hovered = true;
        self.pause_autoplay();
    }

    /// Resumes autoplay if it was started and not stopped since.
    pub fn hover_leave(&mut self, now: u64) {
        self.hovered = false;
        if self.autoplay_enabled && self.next_advance_at.is_none() {
            self.start_autoplay(now);
        }
    }

    fn schedule_advance(&mut self, now: u64) {
        self.next_advance_at = self
            .options
            .autoplay_interval_ms
            .map(|interval| now + interval);
    }

    /// Cancels every pending timer. Autoplay stays off until started again.
    pub fn stop(&mut self) {
        self.autoplay_enabled = false;
        self.next_advance_at = None;
        self.pending_resize = None;
        self.animating_until = None;
    }

    // == Tick ==
    /// Fires whatever timers are due at `now`. Returns true if the view
    /// changed.
    pub fn tick(&mut self, now: u64) -> bool {
        let mut changed = false;

        if let Some(pending) = self.pending_resize {
            if now >= pending.apply_at {
                self.pending_resize = None;
                changed |= self.resize(pending.width, now);
            }
        }

        if let Some(deadline) = self.next_advance_at {
            if now >= deadline {
                let moved = self.next(now);
                if !moved {
                    self.schedule_advance(now);
                }
                changed |= moved;
            }
        }

        changed
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn carousel(len: usize, per_page: usize, overflow: Overflow) -> CarouselState<usize> {
        CarouselState::new(
            (0..len).collect(),
            per_page,
            CarouselOptions {
                overflow,
                ..CarouselOptions::default()
            },
        )
    }

    #[test]
    fn test_items_per_page_breakpoints() {
        assert_eq!(items_per_page_for_width(375), 2);
        assert_eq!(items_per_page_for_width(1024), 2);
        assert_eq!(items_per_page_for_width(1025), 3);
        assert_eq!(items_per_page_for_width(1920), 3);
    }

    #[test]
    fn test_max_index() {
        assert_eq!(carousel(7, 3, Overflow::Clamp).max_index(), 4);
        assert_eq!(carousel(2, 3, Overflow::Clamp).max_index(), 0);
        assert_eq!(carousel(0, 3, Overflow::Clamp).max_index(), 0);
    }

    #[test]
    fn test_next_saturates_when_clamped() {
        let mut c = carousel(4, 3, Overflow::Clamp);

        assert!(c.next(0));
        assert_eq!(c.current_index(), 1);
        assert!(!c.next(1000));
        assert_eq!(c.current_index(), 1);
        assert!(!c.can_go_next());
    }

    #[test]
    fn test_prev_stops_at_zero_when_clamped() {
        let mut c = carousel(5, 2, Overflow::Clamp);

        assert!(!c.prev(0));
        assert_eq!(c.current_index(), 0);
        assert!(!c.can_go_prev());
    }

    #[test]
    fn test_wrap_policy() {
        let mut c = carousel(4, 2, Overflow::Wrap);

        assert!(c.prev(0));
        assert_eq!(c.current_index(), 2);
        assert!(c.next(1000));
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn test_targets_match_navigation() {
        let mut c = carousel(5, 3, Overflow::Clamp);
        assert_eq!(c.prev_target(), 0);
        assert_eq!(c.next_target(), 1);

        c.go_to(2, 0);
        assert_eq!(c.next_target(), 2);
        assert_eq!(c.prev_target(), 1);

        let w = carousel(5, 3, Overflow::Wrap);
        assert_eq!(w.prev_target(), 2);
    }

    #[test]
    fn test_go_to_clamps() {
        let mut c = carousel(6, 3, Overflow::Clamp);

        assert!(c.go_to(10, 0));
        assert_eq!(c.current_index(), 3);
        assert_eq!(c.visible(), &[3, 4, 5]);
    }

    #[test]
    fn test_transitions_ignored_while_animating() {
        let mut c = carousel(10, 2, Overflow::Clamp);

        assert!(c.next(0));
        assert!(c.is_animating(100));
        assert!(!c.next(100));
        assert!(!c.go_to(5, 499));
        assert_eq!(c.current_index(), 1);

        assert!(c.next(500));
        assert_eq!(c.current_index(), 2);
    }

    #[test]
    fn test_autoplay_advances_on_tick() {
        let mut c = carousel(5, 2, Overflow::Clamp);
        c.start_autoplay(0);

        assert!(!c.tick(4999));
        assert!(c.tick(5000));
        assert_eq!(c.current_index(), 1);
        assert_eq!(c.next_advance_at(), Some(10_000));
    }

    #[test]
    fn test_manual_navigation_resets_autoplay() {
        let mut c = carousel(5, 2, Overflow::Clamp);
        c.start_autoplay(0);

        assert!(c.next(3000));
        assert_eq!(c.next_advance_at(), Some(8000));
        assert!(!c.tick(5000));
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn test_autoplay_saturates_at_end_when_clamped() {
        let mut c = carousel(3, 2, Overflow::Clamp);
        c.start_autoplay(0);

        assert!(c.tick(5000));
        assert!(!c.tick(10_000));
        assert_eq!(c.current_index(), 1);
        // Timer keeps running
        assert_eq!(c.next_advance_at(), Some(15_000));
    }

    #[test]
    fn test_hover_pauses_and_resumes() {
        let mut c = carousel(5, 2, Overflow::Wrap);
        c.start_autoplay(0);

        c.hover_enter();
        assert!(!c.is_autoplaying());
        assert!(!c.tick(20_000));

        // Starting while hovered does nothing
        c.start_autoplay(20_000);
        assert!(!c.is_autoplaying());

        c.hover_leave(21_000);
        assert_eq!(c.next_advance_at(), Some(26_000));
    }

    #[test]
    fn test_autoplay_disabled() {
        let mut c = CarouselState::new(
            vec![1, 2, 3],
            1,
            CarouselOptions {
                autoplay_interval_ms: None,
                ..CarouselOptions::default()
            },
        );
        c.start_autoplay(0);

        assert!(!c.is_autoplaying());
        assert!(!c.tick(60_000));
    }

    #[test]
    fn test_resize_resets_index() {
        let mut c = carousel(8, 3, Overflow::Clamp);
        c.go_to(4, 0);

        assert!(c.resize(800, 1000));
        assert_eq!(c.items_per_page(), 2);
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn test_resize_is_debounced() {
        let mut c = carousel(8, 3, Overflow::Clamp);
        c.go_to(2, 0);

        c.request_resize(900, 1000);
        c.request_resize(600, 1100);
        assert!(!c.tick(1300));
        assert_eq!(c.items_per_page(), 3);

        assert!(c.tick(1350));
        assert_eq!(c.items_per_page(), 2);
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn test_stop_cancels_timers() {
        let mut c = carousel(5, 2, Overflow::Clamp);
        c.start_autoplay(0);
        c.request_resize(1800, 0);
        c.stop();

        assert!(!c.tick(100_000));
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.items_per_page(), 2);
    }

    #[test]
    fn test_hover_after_stop_does_not_resume() {
        let mut c = carousel(5, 2, Overflow::Clamp);
        c.start_autoplay(0);
        c.stop();

        c.hover_enter();
        c.hover_leave(1000);
        assert!(!c.is_autoplaying());
        assert!(!c.tick(6000));
        assert_eq!(c.current_index(), 0);

        c.start_autoplay(7000);
        assert_eq!(c.next_advance_at(), Some(12_000));
    }

    #[test]
    fn test_hover_without_autoplay_stays_idle() {
        let mut c = carousel(5, 2, Overflow::Clamp);

        c.hover_enter();
        c.hover_leave(0);
        assert!(!c.is_autoplaying());
        assert!(!c.tick(10_000));
    }

    #[test]
    fn test_indicators() {
        let mut c = carousel(5, 3, Overflow::Clamp);
        c.go_to(1, 0);

        assert_eq!(c.indicators(), vec![false, true, false]);
        assert!(carousel(0, 3, Overflow::Clamp).indicators().is_empty());
    }

    #[test]
    fn test_visible_short_list() {
        let c = carousel(2, 3, Overflow::Clamp);
        assert_eq!(c.visible(), &[0, 1]);
        assert!(!c.can_go_next());
        assert!(!c.can_go_prev());
    }
}
