use std::fmt;

/// Identifier of a parking spot, unique within the sample set.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SpotId(&'static str);

impl SpotId {
    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }

    pub fn is_valid(&self) -> bool {
        !self.0.is_empty()
    }

    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl PartialEq<&str> for SpotId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for SpotId {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.write_str(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_id_is_invalid() {
        assert!(!SpotId::new("").is_valid());
        assert!(SpotId::new("1").is_valid());
    }

    #[test]
    fn compare_with_str() {
        let id = SpotId::new("4");
        assert_eq!(id, "4");
        assert_ne!(id, "40");
        assert_eq!(id.to_string(), "4");
    }
}
