use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullName {
    pub first_name: String,
    pub last_name: String,
}

impl FullName {
    pub fn new(first_name: String, last_name: String) -> Self {
        FullName {
            first_name,
            last_name,
        }
    }

    /// Short display form used on player tokens, e.g. "J. Smith"
    pub fn short(&self) -> String {
        match self.first_name.chars().next() {
            Some(initial) => format!("{}. {}", initial, self.last_name),
            None => self.last_name.clone(),
        }
    }
}

impl Display for FullName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_form_uses_first_initial() {
        let name = FullName::new("Jamie".to_string(), "Carter".to_string());
        assert_eq!(name.short(), "J. Carter");
        assert_eq!(name.to_string(), "Jamie Carter");
    }

    #[test]
    fn short_form_without_first_name_falls_back_to_last_name() {
        let name = FullName::new(String::new(), "Carter".to_string());
        assert_eq!(name.short(), "Carter");
    }
}
