//! TUI view components
//!
//! Each component renders one part of the interface.

mod footer;
mod header;
mod switcher;

pub use footer::*;
pub use header::*;
pub use switcher::*;
