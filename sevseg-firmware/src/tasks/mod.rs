//! Embassy async tasks
//!
//! Each task runs independently and communicates via the statics in
//! `channels`.

pub mod console;
pub mod control;
pub mod refresh;

pub use console::console_task;
pub use control::control_task;
pub use refresh::refresh_task;
