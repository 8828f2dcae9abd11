use crate::ui::mvi::Reducer;
use crate::ui::stack::intent::StackIntent;
use crate::ui::stack::state::ScreenStack;

pub struct StackReducer;

impl Reducer for StackReducer {
    type State = ScreenStack;
    type Intent = StackIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            StackIntent::Push(_) if state.is_full() => state,
            StackIntent::Push(screen) => state.with_pushed(screen),
            StackIntent::Pop => state.with_popped(),
        }
    }
}
