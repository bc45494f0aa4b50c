use std::fmt;

/// How item labels are compared when scoping overlap checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemMatching {
    /// "Car" and "car" are different items
    #[default]
    Exact,
    /// "Car" and "car" are the same item
    CaseInsensitive,
}

impl ItemMatching {
    pub fn matches(&self, a: &str, b: &str) -> bool {
        match self {
            ItemMatching::Exact => a == b,
            ItemMatching::CaseInsensitive => a.to_lowercase() == b.to_lowercase(),
        }
    }
}

/// Validate a user-supplied item label and return it trimmed.
/// A label must not be blank and must not contain any digit.
pub fn validate_item(input: &str) -> Result<&str, ItemError> {
    let item = input.trim();
    if item.is_empty() {
        return Err(ItemError::Empty);
    }
    if item.chars().any(char::is_numeric) {
        return Err(ItemError::ContainsDigit);
    }
    Ok(item)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemError {
    Empty,
    ContainsDigit,
}

impl fmt::Display for ItemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemError::Empty => write!(f, "the item cannot be empty"),
            ItemError::ContainsDigit => write!(f, "the item cannot contain digits"),
        }
    }
}

impl std::error::Error for ItemError {}
