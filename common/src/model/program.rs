use serde::{Deserialize, Serialize};

/// Option value meaning "do nothing" when selected.
pub const SENTINEL_VALUE: &str = "none";

/// Index of the slot that stands for user-supplied (or blank) content.
pub const USER_SUPPLIED_INDEX: usize = 0;

/// One entry of the program dropdown.
///
/// `value` is the path the program text is fetched from, or
/// [`SENTINEL_VALUE`] for entries that must not trigger a load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramOption {
    /// Text shown in the dropdown.
    pub label: String,
    /// Path of the program text, or the sentinel.
    pub value: String,
}

impl ProgramOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// The slot-0 entry representing content typed by the user.
    pub fn user_supplied(label: impl Into<String>) -> Self {
        Self::new(label, SENTINEL_VALUE)
    }

    pub fn is_sentinel(&self) -> bool {
        self.value == SENTINEL_VALUE
    }
}

/// Body of `GET /api/examples`.
///
/// Lists the example programs the backend can serve, in display order. The
/// user-supplied slot is not part of the catalogue; the frontend adds it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramCatalog {
    pub programs: Vec<ProgramOption>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_supplied_option_is_the_sentinel() {
        let option = ProgramOption::user_supplied("Your own program");
        assert!(option.is_sentinel());
        assert_eq!(option.value, "none");
    }

    #[test]
    fn path_options_are_not_sentinels() {
        assert!(!ProgramOption::new("A", "/examples/a.txt").is_sentinel());
        // Only the exact value counts.
        assert!(!ProgramOption::new("None", "None").is_sentinel());
    }

    #[test]
    fn catalog_json_shape() {
        let catalog = ProgramCatalog {
            programs: vec![ProgramOption::new("hello", "/examples/hello.txt")],
        };
        let json = serde_json::to_value(&catalog).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "programs": [{ "label": "hello", "value": "/examples/hello.txt" }]
            })
        );
    }
}
