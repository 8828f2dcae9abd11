pub mod frontend;
pub mod layout;
pub mod mvi;
pub mod nav;
pub mod result;
pub mod stack;
pub mod theme;
pub mod toast;
