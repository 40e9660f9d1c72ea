//! Tab management commands
//!
//! Commands for managing the tab ring:
//! - NEW_TAB: Append a tab on the home page
//! - OPEN: Switch to a tab by id
//! - NEXT / PREV: Move around the ring
//! - CLOSE: Close the current tab
//! - PRINT: List tabs starting at the current one

pub mod close;
pub mod list;
pub mod new;
pub mod next;
pub mod open;
pub mod prev;
