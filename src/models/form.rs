/// Raw text read from the entry form. Neither field is validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub name: String,
    pub calories: String,
}

impl FormInput {
    pub fn new(name: impl Into<String>, calories: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            calories: calories.into(),
        }
    }

    /// True when either required field is blank.
    pub fn has_empty_field(&self) -> bool {
        self.name.is_empty() || self.calories.is_empty()
    }
}
