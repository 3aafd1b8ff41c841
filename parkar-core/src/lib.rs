//! Presentation logic of the Parkar demo page.
//!
//! Everything in here is independent of the UI framework:
//! the components only hold these values in signals and render them.

pub mod display;
pub mod map;
pub mod search;

mod error;

pub use self::error::Error;

pub type Result<T> = std::result::Result<T, Error>;

pub mod entities {
    pub use parkar_entities::{canvas::*, id::*, sample::*, spot::*, zoom::*};
}
