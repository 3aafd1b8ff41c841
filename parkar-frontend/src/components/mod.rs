mod hero;
mod map;
mod map_section;
mod search_bar;

pub use self::{hero::*, map::*, map_section::*, search_bar::*};
