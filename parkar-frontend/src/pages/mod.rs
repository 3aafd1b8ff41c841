mod index;

#[derive(Debug, Clone, Copy)]
pub enum Page {
    Index,
}

impl Page {
    pub const fn path(self) -> &'static str {
        match self {
            Self::Index => "/",
        }
    }
}

pub use self::index::*;
