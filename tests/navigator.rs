use emufront::ui::mvi::Reducer;
use emufront::ui::nav::{NavIntent, NavReducer, NavState, WINDOW_ROWS};

fn advance(state: NavState, delta: i32, item_count: usize) -> NavState {
    NavReducer::reduce(state, NavIntent::Advance { delta, item_count })
}

fn assert_in_bounds(state: NavState, item_count: usize) {
    let max_scroll = item_count.saturating_sub(WINDOW_ROWS);
    if item_count == 0 {
        assert_eq!(state, NavState::default());
        return;
    }
    assert!(state.cursor < item_count, "{:?} for {} items", state, item_count);
    assert!(state.scroll <= max_scroll, "{:?} for {} items", state, item_count);
    assert!(state.cursor >= state.scroll, "{:?}", state);
    assert!(state.cursor < state.scroll + WINDOW_ROWS, "{:?}", state);
}

/// Delta sequences mixing every step size, long runs and direction changes.
fn sequences() -> Vec<Vec<i32>> {
    let mut all = vec![
        vec![1; 200],
        vec![5; 80],
        vec![-1; 10],
        [vec![5; 40], vec![-1; 70], vec![1; 3]].concat(),
        [vec![1; 100], vec![-5; 30], vec![5; 30]].concat(),
    ];
    let steps = [1, -1, 5, -5];
    for seed in 0..16usize {
        all.push(
            (0..300)
                .map(|i| steps[(i * 7 + seed * 3 + i / 11) % steps.len()])
                .collect(),
        );
    }
    all
}

#[test]
fn cursor_and_scroll_stay_in_bounds() {
    for item_count in [0, 1, 2, 5, 59, 60, 61, 64, 150] {
        for sequence in sequences() {
            let mut state = NavState::default();
            for delta in sequence {
                state = advance(state, delta, item_count);
                assert_in_bounds(state, item_count);
            }
        }
    }
}

#[test]
fn down_moves_one_row() {
    let state = advance(NavState::default(), 1, 4);
    assert_eq!(state, NavState { cursor: 1, scroll: 0 });
}

#[test]
fn no_wrap_at_either_end() {
    let top = advance(NavState::default(), -1, 4);
    assert_eq!(top, NavState::default());

    let bottom = advance(NavState { cursor: 3, scroll: 0 }, 1, 4);
    assert_eq!(bottom.cursor, 3);
}

#[test]
fn fast_scroll_clamps_to_last_item() {
    let state = advance(NavState { cursor: 1, scroll: 0 }, 5, 4);
    assert_eq!(state, NavState { cursor: 3, scroll: 0 });

    let back = advance(state, -5, 4);
    assert_eq!(back, NavState::default());
}

#[test]
fn scroll_follows_cursor_past_window() {
    let mut state = NavState::default();
    for _ in 0..WINDOW_ROWS {
        state = advance(state, 1, 100);
    }
    assert_eq!(state, NavState { cursor: 60, scroll: 1 });

    for _ in 0..WINDOW_ROWS {
        state = advance(state, -1, 100);
    }
    assert_eq!(state, NavState { cursor: 0, scroll: 0 });
}

#[test]
fn scrolling_up_inside_window_keeps_scroll() {
    let state = NavState { cursor: 70, scroll: 20 };
    let state = advance(state, -5, 100);
    assert_eq!(state, NavState { cursor: 65, scroll: 20 });
}

#[test]
fn empty_list_stays_at_top() {
    let state = advance(NavState { cursor: 3, scroll: 1 }, 1, 0);
    assert_eq!(state, NavState::default());
}

#[test]
fn shrunk_list_clamps_stale_cursor() {
    let state = advance(NavState { cursor: 10, scroll: 5 }, 0, 4);
    assert_in_bounds(state, 4);
    assert_eq!(state.cursor, 3);
}

#[test]
fn reset_returns_to_top() {
    let state = NavReducer::reduce(NavState { cursor: 80, scroll: 30 }, NavIntent::Reset);
    assert_eq!(state, NavState::default());
}

#[test]
fn jump_scrolls_minimally() {
    let state = NavState { cursor: 80, scroll: 30 };
    let up = NavReducer::reduce(state, NavIntent::Jump { index: 0, item_count: 100 });
    assert_eq!(up, NavState::default());

    let down = NavReducer::reduce(NavState::default(), NavIntent::Jump { index: 99, item_count: 100 });
    assert_eq!(down, NavState { cursor: 99, scroll: 40 });

    let inside = NavReducer::reduce(state, NavIntent::Jump { index: 50, item_count: 100 });
    assert_eq!(inside, NavState { cursor: 50, scroll: 30 });
}

#[test]
fn visible_range_is_the_window() {
    let state = NavState { cursor: 65, scroll: 10 };
    assert_eq!(state.visible_range(100), 10..70);
    assert!(state.visible_range(100).contains(&state.cursor));
}
