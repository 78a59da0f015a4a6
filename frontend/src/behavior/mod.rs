pub mod counter;
pub mod navigation;
pub mod scroll;
pub mod ui_flags;
pub mod visibility;
