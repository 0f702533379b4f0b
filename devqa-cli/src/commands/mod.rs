//! Command implementations for the devqa CLI

pub mod ask;
pub mod list;
pub mod show;

pub use ask::*;
pub use list::*;
pub use show::*;
