mod intent;
mod reducer;
mod state;

pub use intent::StackIntent;
pub use reducer::StackReducer;
pub use state::{Screen, ScreenStack, MAX_DEPTH};
