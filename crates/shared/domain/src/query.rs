//! Listing rules: name filter, sort order and pagination.

use crate::constants::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, DEFAULT_SORT_FIELD};
use crate::user::User;

/// Field a user listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Name,
    Email,
}

impl SortField {
    /// Parse a sort key. Unknown keys yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "id" => Some(SortField::Id),
            "name" => Some(SortField::Name),
            "email" => Some(SortField::Email),
            _ => None,
        }
    }

    fn sort(self, users: &mut [User]) {
        // `sort_by` is stable, ties keep registry order
        match self {
            SortField::Id => users.sort_by_key(|u| u.id),
            SortField::Name => users.sort_by(|a, b| a.name.cmp(&b.name)),
            SortField::Email => users.sort_by(|a, b| a.email.cmp(&b.email)),
        }
    }
}

/// Parameters of a user listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserQuery {
    /// One-based page number
    pub page: u64,
    /// Records per page
    pub per_page: u64,
    /// Case-insensitive substring that names must contain
    pub name: Option<String>,
    /// Sort key; unknown keys leave registry order untouched
    pub sort_by: Option<String>,
}

impl Default for UserQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE_NUMBER,
            per_page: DEFAULT_PAGE_SIZE,
            name: None,
            sort_by: Some(DEFAULT_SORT_FIELD.to_string()),
        }
    }
}

impl UserQuery {
    /// Zero-based index of the first record on the page.
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.per_page)
    }

    /// Filter, sort and slice `users`, which must be in registry order.
    pub fn apply(&self, mut users: Vec<User>) -> Vec<User> {
        if let Some(needle) = self.name.as_deref().filter(|n| !n.is_empty()) {
            let needle = needle.to_lowercase();
            users.retain(|u| u.name.to_lowercase().contains(&needle));
        }

        if let Some(field) = self.sort_by.as_deref().and_then(SortField::parse) {
            field.sort(&mut users);
        }

        let start = usize::try_from(self.offset()).unwrap_or(usize::MAX);
        let len = usize::try_from(self.per_page).unwrap_or(usize::MAX);
        users.into_iter().skip(start).take(len).collect()
    }
}
