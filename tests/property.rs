//! Property-based tests for the formatting pipeline.
//!
//! Uses proptest to find edge cases automatically through randomized testing.

use proptest::prelude::*;
use psline::expand::expand;
use psline::segment::coalesce;
use psline::wrap::wrap;
use psline::{CharCell, Config, DiffStatus, LineBuffer, Renderer, Style};

fn style_strategy() -> impl Strategy<Value = Style> {
    prop_oneof![
        Just(Style::Normal),
        Just(Style::Italic),
        Just(Style::Bold),
        Just(Style::Underline),
    ]
}

fn status_strategy() -> impl Strategy<Value = DiffStatus> {
    prop_oneof![
        Just(DiffStatus::Insert),
        Just(DiffStatus::Delete),
        Just(DiffStatus::Normal),
    ]
}

/// Printable ASCII with an occasional tab thrown in.
fn char_strategy() -> impl Strategy<Value = char> {
    prop_oneof![
        9 => proptest::char::range(' ', '~'),
        1 => Just('\t'),
    ]
}

fn cell_strategy() -> impl Strategy<Value = CharCell> {
    (char_strategy(), style_strategy(), status_strategy()).prop_map(|(ch, style, status)| {
        CharCell::new(ch).with_style(style).with_status(status)
    })
}

fn cells_strategy() -> impl Strategy<Value = Vec<CharCell>> {
    proptest::collection::vec(cell_strategy(), 0..200)
}

proptest! {
    /// Concatenating all emitted segment ranges reconstructs the expanded
    /// line exactly: no gaps, no overlaps, original order.
    #[test]
    fn segments_cover_every_character(
        cells in cells_strategy(),
        width in 10u16..100,
        min_line_length in 5u16..=10,
        clever_wrap in any::<bool>(),
        tab_size in 1u16..=20,
    ) {
        let config = Config { width, min_line_length, clever_wrap, tab_size, ..Config::default() };
        let expanded = expand(&cells, config.tab_size);
        let ranges = wrap(&expanded, &config);

        let mut reconstructed = Vec::new();
        for range in &ranges {
            let sub = &expanded.cells()[range.clone()];
            for seg in coalesce(sub) {
                reconstructed.extend_from_slice(&sub[seg.start..seg.end()]);
            }
        }
        prop_assert_eq!(reconstructed.as_slice(), expanded.cells());
    }

    /// Every sub-line fits the column budget, and (with ASCII input) every
    /// non-final sub-line in intelligent mode is at least the minimum length.
    #[test]
    fn wrap_respects_budget_and_minimum(
        cells in cells_strategy(),
        width in 10u16..100,
        min_line_length in 5u16..=10,
        clever_wrap in any::<bool>(),
    ) {
        let config = Config { width, min_line_length, clever_wrap, ..Config::default() };
        let expanded = expand(&cells, config.tab_size);
        let ranges = wrap(&expanded, &config);

        for (i, range) in ranges.iter().enumerate() {
            let span = expanded.span_width(range.start, range.end);
            prop_assert!(span <= usize::from(width));
            if clever_wrap && i + 1 < ranges.len() {
                prop_assert!(span >= usize::from(min_line_length));
            }
        }
    }

    /// The wrap ranges partition the cell indices in order.
    #[test]
    fn wrap_ranges_partition_the_line(
        cells in cells_strategy(),
        width in 10u16..100,
        clever_wrap in any::<bool>(),
    ) {
        let config = Config { width, clever_wrap, ..Config::default() };
        let expanded = expand(&cells, config.tab_size);
        let ranges = wrap(&expanded, &config);

        prop_assert!(!ranges.is_empty());
        let mut next = 0;
        for range in &ranges {
            prop_assert_eq!(range.start, next);
            next = range.end;
        }
        prop_assert_eq!(next, expanded.len());
    }

    /// Expanding tab-free input is a no-op, so expansion is idempotent.
    #[test]
    fn tab_expansion_is_idempotent(
        cells in cells_strategy(),
        tab_size in 1u16..=20,
    ) {
        let once = expand(&cells, tab_size);
        let twice = expand(once.cells(), tab_size);
        prop_assert_eq!(once.cells(), twice.cells());
        prop_assert_eq!(once.columns(), twice.columns());
        prop_assert_eq!(once.width(), twice.width());
    }

    /// No two adjacent segments share both style and status.
    #[test]
    fn coalescing_is_minimal(cells in cells_strategy()) {
        let segments = coalesce(&cells);
        for pair in segments.windows(2) {
            prop_assert!(
                pair[0].style != pair[1].style || pair[0].status != pair[1].status
            );
        }
    }

    /// The global page counter matches the sub-line count against capacity,
    /// and the line counter never exceeds capacity.
    #[test]
    fn page_count_matches_sub_line_count(
        texts in proptest::collection::vec("[ -~]{0,120}", 0..30),
        page_length in 1u16..10,
    ) {
        let config = Config { page_length, ..Config::default() };

        let mut total_sub_lines = 0usize;
        for text in &texts {
            let line = LineBuffer::from_plain(text);
            let expanded = expand(line.cells(), config.tab_size);
            total_sub_lines += wrap(&expanded, &config).len();
        }

        let mut renderer = Renderer::new(Vec::new(), config.clone()).expect("valid config");
        for text in &texts {
            renderer.print_line(&LineBuffer::from_plain(text)).expect("render");
            prop_assert!(renderer.line_number() <= u32::from(page_length));
        }

        let capacity = usize::from(page_length);
        let expected_pages = (total_sub_lines + capacity - 1) / capacity;
        prop_assert_eq!(renderer.page_number() as usize, expected_pages);
    }
}
