/// Text of the location search input.
///
/// The value is handed to the search callback verbatim:
/// neither trimmed nor validated.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SearchInput {
    value: String,
}

impl SearchInput {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Location requested by an explicit form submission.
    #[must_use]
    pub fn submit(&self) -> String {
        self.value.clone()
    }

    /// Quick select shortcuts bypass the form:
    /// the input shows the city and the returned
    /// location is searched immediately.
    #[must_use]
    pub fn quick_select(&mut self, city: &str) -> String {
        self.set_value(city);
        city.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_echoes_input() {
        let mut input = SearchInput::default();
        input.set_value("Berlin");
        assert_eq!(input.submit(), "Berlin");
    }

    #[test]
    fn submit_does_not_transform_input() {
        let mut input = SearchInput::default();
        input.set_value("  new york ");
        assert_eq!(input.submit(), "  new york ");
        assert_eq!(input.value(), "  new york ");
    }

    #[test]
    fn submit_empty_input() {
        assert_eq!(SearchInput::default().submit(), "");
    }

    #[test]
    fn quick_select_sets_value_and_returns_city() {
        let mut input = SearchInput::default();
        input.set_value("Lon");
        let location = input.quick_select("Paris");
        assert_eq!(input.value(), "Paris");
        assert_eq!(location, "Paris");
    }
}
