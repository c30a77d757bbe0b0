use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::ownership::Owned;
use crate::domain::task::errors::TaskDescriptionError;
use crate::domain::task::errors::TaskIdError;
use crate::domain::task::errors::TaskTitleError;
use crate::domain::user::models::UserId;

/// Task aggregate entity.
///
/// Every task has exactly one owner; nothing below the ownership guard hands
/// a task to a caller whose id differs from `owner_id`.
#[derive(Debug, Clone)]
pub struct Task {
    pub id: TaskId,
    pub owner_id: UserId,
    pub title: TaskTitle,
    pub description: Option<TaskDescription>,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Owned for Task {
    fn owner_id(&self) -> UserId {
        self.owner_id
    }
}

/// Task unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub Uuid);

impl TaskId {
    /// Generate a new random task ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a task ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, TaskIdError> {
        Uuid::parse_str(s)
            .map(TaskId)
            .map_err(|e| TaskIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Task title value type
///
/// Ensures the title is non-blank and at most 200 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskTitle(String);

impl TaskTitle {
    const MAX_LENGTH: usize = 200;

    /// Create a new valid task title.
    ///
    /// # Errors
    /// * `Empty` - Title is empty or whitespace only
    /// * `TooLong` - Title longer than 200 characters
    pub fn new(title: String) -> Result<Self, TaskTitleError> {
        if title.trim().is_empty() {
            return Err(TaskTitleError::Empty);
        }

        let length = title.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(TaskTitleError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        Ok(Self(title))
    }

    /// Get title as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Task description value type
///
/// Ensures the description is at most 1000 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDescription(String);

impl TaskDescription {
    const MAX_LENGTH: usize = 1000;

    /// Create a new valid task description.
    ///
    /// # Errors
    /// * `TooLong` - Description longer than 1000 characters
    pub fn new(description: String) -> Result<Self, TaskDescriptionError> {
        let length = description.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(TaskDescriptionError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        Ok(Self(description))
    }

    /// Get description as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Command to create a new task with domain types.
///
/// The owner is never part of the command; it comes from the resolved
/// identity of the caller.
#[derive(Debug)]
pub struct CreateTaskCommand {
    pub title: TaskTitle,
    pub description: Option<TaskDescription>,
}

/// Command to update an existing task with optional validated fields.
///
/// All fields are optional to support partial updates.
/// Only provided fields will be updated.
#[derive(Debug)]
pub struct UpdateTaskCommand {
    pub title: Option<TaskTitle>,
    pub description: Option<TaskDescription>,
    pub is_completed: Option<bool>,
}

/// Pagination window for task listings.
#[derive(Debug, Clone, Copy)]
pub struct TaskPage {
    pub offset: i64,
    pub limit: i64,
}

impl TaskPage {
    pub const DEFAULT_LIMIT: i64 = 100;
    pub const MAX_LIMIT: i64 = 100;

    /// Build a page from raw query values, clamping to sane bounds.
    pub fn new(offset: Option<i64>, limit: Option<i64>) -> Self {
        Self {
            offset: offset.unwrap_or(0).max(0),
            limit: limit
                .unwrap_or(Self::DEFAULT_LIMIT)
                .clamp(1, Self::MAX_LIMIT),
        }
    }
}

impl Default for TaskPage {
    fn default() -> Self {
        Self::new(None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_validation() {
        assert!(TaskTitle::new("buy milk".to_string()).is_ok());
        assert_eq!(
            TaskTitle::new("".to_string()),
            Err(TaskTitleError::Empty)
        );
        assert_eq!(
            TaskTitle::new("   ".to_string()),
            Err(TaskTitleError::Empty)
        );
        assert!(TaskTitle::new("x".repeat(200)).is_ok());
        assert!(TaskTitle::new("x".repeat(201)).is_err());
    }

    #[test]
    fn test_description_validation() {
        assert!(TaskDescription::new("details".to_string()).is_ok());
        assert!(TaskDescription::new("x".repeat(1000)).is_ok());
        assert!(TaskDescription::new("x".repeat(1001)).is_err());
    }

    #[test]
    fn test_page_clamps_bounds() {
        let page = TaskPage::new(Some(-5), Some(1000));
        assert_eq!(page.offset, 0);
        assert_eq!(page.limit, TaskPage::MAX_LIMIT);

        let page = TaskPage::default();
        assert_eq!(page.offset, 0);
        assert_eq!(page.limit, TaskPage::DEFAULT_LIMIT);
    }
}
