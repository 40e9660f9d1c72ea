//! Browser history navigation commands
//!
//! Commands for navigating a tab's history:
//! - BACKWARD: Go back in history
//! - FORWARD: Go forward in history
//! - PRINT_HISTORY: Show a tab's full history

pub mod back;
pub mod forward;
pub mod print;
