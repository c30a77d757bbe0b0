use async_trait::async_trait;

use crate::domain::task::errors::TaskError;
use crate::domain::task::models::CreateTaskCommand;
use crate::domain::task::models::Task;
use crate::domain::task::models::TaskId;
use crate::domain::task::models::TaskPage;
use crate::domain::task::models::UpdateTaskCommand;
use crate::domain::user::models::UserId;

/// Port for task domain service operations.
///
/// Every method that addresses a task by id takes the caller's resolved
/// identity and answers `NotFound` for tasks the caller does not own.
#[async_trait]
pub trait TaskServicePort: Send + Sync + 'static {
    /// Create a new task owned by the caller.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_task(
        &self,
        caller: UserId,
        command: CreateTaskCommand,
    ) -> Result<Task, TaskError>;

    /// Retrieve one of the caller's tasks.
    ///
    /// # Errors
    /// * `NotFound` - Task does not exist or belongs to another user
    /// * `DatabaseError` - Database operation failed
    async fn get_task(&self, caller: UserId, id: &TaskId) -> Result<Task, TaskError>;

    /// List the caller's tasks, newest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_tasks(&self, caller: UserId, page: TaskPage) -> Result<Vec<Task>, TaskError>;

    /// Update one of the caller's tasks with optional fields.
    ///
    /// # Errors
    /// * `NotFound` - Task does not exist or belongs to another user
    /// * `DatabaseError` - Database operation failed
    async fn update_task(
        &self,
        caller: UserId,
        id: &TaskId,
        command: UpdateTaskCommand,
    ) -> Result<Task, TaskError>;

    /// Flip the completion flag on one of the caller's tasks.
    ///
    /// # Errors
    /// * `NotFound` - Task does not exist or belongs to another user
    /// * `DatabaseError` - Database operation failed
    async fn toggle_task(&self, caller: UserId, id: &TaskId) -> Result<Task, TaskError>;

    /// Delete one of the caller's tasks.
    ///
    /// # Errors
    /// * `NotFound` - Task does not exist or belongs to another user
    /// * `DatabaseError` - Database operation failed
    async fn delete_task(&self, caller: UserId, id: &TaskId) -> Result<(), TaskError>;
}

/// Persistence operations for the task aggregate.
///
/// Lookup by id is owner-agnostic; ownership is enforced above this port so
/// the guard has one place to live.
#[async_trait]
pub trait TaskRepository: Send + Sync + 'static {
    /// Persist new task to storage.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, task: Task) -> Result<Task, TaskError>;

    /// Retrieve task by identifier.
    ///
    /// # Returns
    /// Optional task entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>, TaskError>;

    /// Retrieve a page of tasks belonging to an owner, newest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_by_owner(&self, owner: UserId, page: TaskPage) -> Result<Vec<Task>, TaskError>;

    /// Update existing task in storage.
    ///
    /// # Errors
    /// * `NotFound` - Task does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, task: Task) -> Result<Task, TaskError>;

    /// Remove task from storage.
    ///
    /// # Errors
    /// * `NotFound` - Task does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: &TaskId) -> Result<(), TaskError>;
}
