//! Command implementations

pub mod define;
pub mod play;
pub mod sort;
pub mod validate;

pub use define::run_define;
pub use play::run_play;
pub use sort::{SortOutcome, run_sort};
pub use validate::{ValidationRun, run_validate};
