//! Property-Based Tests for the UI state machines
//!
//! Random operation sequences must never push an index out of its bounds.

use proptest::prelude::*;

use crate::ui::{CarouselOptions, CarouselState, GalleryState, Overflow};

#[derive(Debug, Clone)]
enum CarouselOp {
    Next,
    Prev,
    GoTo(usize),
    Resize(u32),
    RequestResize(u32),
    HoverEnter,
    HoverLeave,
    StartAutoplay,
    Stop,
    Tick,
}

fn carousel_op_strategy() -> impl Strategy<Value = CarouselOp> {
    prop_oneof![
        Just(CarouselOp::Next),
        Just(CarouselOp::Prev),
        (0usize..40).prop_map(CarouselOp::GoTo),
        (320u32..2560).prop_map(CarouselOp::Resize),
        (320u32..2560).prop_map(CarouselOp::RequestResize),
        Just(CarouselOp::HoverEnter),
        Just(CarouselOp::HoverLeave),
        Just(CarouselOp::StartAutoplay),
        Just(CarouselOp::Stop),
        Just(CarouselOp::Tick),
    ]
}

fn overflow_strategy() -> impl Strategy<Value = Overflow> {
    prop_oneof![Just(Overflow::Clamp), Just(Overflow::Wrap)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // *For any* list length, page size, overflow policy and sequence of
    // operations, the carousel index stays within [0, max_index], and autoplay
    // only runs between a start and the next stop.
    #[test]
    fn prop_carousel_index_in_bounds(
        len in 0usize..20,
        per_page in 1usize..5,
        overflow in overflow_strategy(),
        ops in prop::collection::vec((carousel_op_strategy(), 0u64..3000), 1..60),
    ) {
        let options = CarouselOptions { overflow, ..CarouselOptions::default() };
        let mut carousel = CarouselState::new((0..len).collect::<Vec<_>>(), per_page, options);
        let mut now = 0u64;
        carousel.start_autoplay(now);
        let mut started = true;

        for (op, step) in ops {
            now += step;
            match op {
                CarouselOp::Next => { carousel.next(now); }
                CarouselOp::Prev => { carousel.prev(now); }
                CarouselOp::GoTo(i) => { carousel.go_to(i, now); }
                CarouselOp::Resize(w) => { carousel.resize(w, now); }
                CarouselOp::RequestResize(w) => carousel.request_resize(w, now),
                CarouselOp::HoverEnter => carousel.hover_enter(),
                CarouselOp::HoverLeave => carousel.hover_leave(now),
                CarouselOp::StartAutoplay => {
                    carousel.start_autoplay(now);
                    started = true;
                }
                CarouselOp::Stop => {
                    carousel.stop();
                    started = false;
                }
                CarouselOp::Tick => { carousel.tick(now); }
            }

            if !started {
                prop_assert!(!carousel.is_autoplaying());
            }

            prop_assert!(carousel.current_index() <= carousel.max_index());
            prop_assert!(carousel.visible().len() <= carousel.items_per_page());
        }
    }

    // *For any* clamped carousel, `next` at the last position and `prev` at
    // the first position leave the index unchanged.
    #[test]
    fn prop_clamped_boundaries_hold(len in 0usize..20, per_page in 1usize..5) {
        let options = CarouselOptions { overflow: Overflow::Clamp, ..CarouselOptions::default() };
        let mut carousel = CarouselState::new((0..len).collect::<Vec<_>>(), per_page, options);

        prop_assert!(!carousel.prev(0));
        prop_assert_eq!(carousel.current_index(), 0);

        let max = carousel.max_index();
        carousel.go_to(max, 0);
        prop_assert!(!carousel.next(10_000));
        prop_assert_eq!(carousel.current_index(), max);
    }

    // *For any* gallery size and number of steps, `next` lands on
    // (start + steps) mod len and `prev` undoes it.
    #[test]
    fn prop_gallery_wraps_modulo(len in 1usize..12, start in 0usize..12, steps in 0usize..50) {
        let mut gallery = GalleryState::new((0..len).map(|i| format!("/{}.jpg", i)).collect());
        gallery.show_image(start % len);
        let origin = gallery.current_index();

        for _ in 0..steps {
            gallery.next();
        }
        prop_assert_eq!(gallery.current_index(), (origin + steps) % len);

        for _ in 0..steps {
            gallery.prev();
        }
        prop_assert_eq!(gallery.current_index(), origin);
    }
}
