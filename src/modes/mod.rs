pub mod headless;
pub mod human;

pub use headless::{HeadlessMode, NoPacer, Pacer, RunSummary, ThreadPacer};
pub use human::HumanMode;
