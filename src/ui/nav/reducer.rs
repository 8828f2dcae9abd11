use crate::ui::mvi::Reducer;
use crate::ui::nav::intent::NavIntent;
use crate::ui::nav::state::{NavState, WINDOW_ROWS};

pub struct NavReducer;

impl Reducer for NavReducer {
    type State = NavState;
    type Intent = NavIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            NavIntent::Reset => NavState::default(),
            NavIntent::Advance { delta, item_count } => advance(state, delta, item_count),
            NavIntent::Jump { index, item_count } => {
                if item_count == 0 {
                    return NavState::default();
                }
                let cursor = index.min(item_count - 1);
                let scroll = if cursor < state.scroll {
                    cursor
                } else if cursor >= state.scroll + WINDOW_ROWS {
                    cursor + 1 - WINDOW_ROWS
                } else {
                    state.scroll
                };
                NavState {
                    cursor,
                    scroll: scroll.min(max_scroll(item_count)),
                }
            }
        }
    }
}

fn advance(state: NavState, delta: i32, item_count: usize) -> NavState {
    if item_count == 0 {
        return NavState::default();
    }

    let NavState {
        mut cursor,
        mut scroll,
    } = state;

    // A list that shrank since the last frame.
    if cursor >= item_count {
        cursor = item_count - 1;
        scroll = scroll.min(max_scroll(item_count));
    }

    for _ in 0..delta.unsigned_abs() {
        if delta > 0 {
            if cursor + 1 >= item_count {
                break;
            }
            cursor += 1;
            if cursor - scroll >= WINDOW_ROWS {
                scroll += 1;
            }
        } else {
            if cursor == 0 {
                break;
            }
            cursor -= 1;
            if cursor < scroll {
                scroll -= 1;
            }
        }
    }

    NavState { cursor, scroll }
}

/// Largest scroll that still fills the window.
fn max_scroll(item_count: usize) -> usize {
    item_count.saturating_sub(WINDOW_ROWS)
}
