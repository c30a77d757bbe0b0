use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use super::errors::TaskError;
use super::models::CreateTaskCommand;
use super::models::Task;
use super::models::TaskId;
use super::models::TaskPage;
use super::models::UpdateTaskCommand;
use super::ports::TaskRepository;
use super::ports::TaskServicePort;
use crate::domain::ownership;
use crate::domain::user::models::UserId;

/// Domain service implementation for task operations.
///
/// Every by-id operation goes through the ownership guard before touching
/// the task, so a task owned by another user is reported exactly like a task
/// that does not exist.
pub struct TaskService<TR>
where
    TR: TaskRepository,
{
    repository: Arc<TR>,
}

impl<TR> TaskService<TR>
where
    TR: TaskRepository,
{
    pub fn new(repository: Arc<TR>) -> Self {
        Self { repository }
    }

    async fn load_owned(&self, caller: UserId, id: &TaskId) -> Result<Task, TaskError> {
        ownership::enforce(caller, self.repository.find_by_id(id))
            .await?
            .ok_or(TaskError::NotFound(*id))
    }
}

#[async_trait]
impl<TR> TaskServicePort for TaskService<TR>
where
    TR: TaskRepository,
{
    async fn create_task(
        &self,
        caller: UserId,
        command: CreateTaskCommand,
    ) -> Result<Task, TaskError> {
        let now = Utc::now();
        let task = Task {
            id: TaskId::new(),
            owner_id: caller,
            title: command.title,
            description: command.description,
            is_completed: false,
            created_at: now,
            updated_at: now,
        };

        let task = self.repository.create(task).await?;
        tracing::info!(task_id = %task.id, owner_id = %caller, "task created");
        Ok(task)
    }

    async fn get_task(&self, caller: UserId, id: &TaskId) -> Result<Task, TaskError> {
        self.load_owned(caller, id).await
    }

    async fn list_tasks(&self, caller: UserId, page: TaskPage) -> Result<Vec<Task>, TaskError> {
        self.repository.list_by_owner(caller, page).await
    }

    async fn update_task(
        &self,
        caller: UserId,
        id: &TaskId,
        command: UpdateTaskCommand,
    ) -> Result<Task, TaskError> {
        let mut task = self.load_owned(caller, id).await?;

        if let Some(new_title) = command.title {
            task.title = new_title;
        }

        if let Some(new_description) = command.description {
            task.description = Some(new_description);
        }

        if let Some(is_completed) = command.is_completed {
            task.is_completed = is_completed;
        }

        task.updated_at = Utc::now();

        self.repository.update(task).await
    }

    async fn toggle_task(&self, caller: UserId, id: &TaskId) -> Result<Task, TaskError> {
        let mut task = self.load_owned(caller, id).await?;

        task.is_completed = !task.is_completed;
        task.updated_at = Utc::now();

        self.repository.update(task).await
    }

    async fn delete_task(&self, caller: UserId, id: &TaskId) -> Result<(), TaskError> {
        let task = self.load_owned(caller, id).await?;

        self.repository.delete(&task.id).await?;
        tracing::info!(task_id = %task.id, owner_id = %caller, "task deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::task::models::TaskDescription;
    use crate::domain::task::models::TaskTitle;

    mock! {
        pub TestTaskRepository {}

        #[async_trait]
        impl TaskRepository for TestTaskRepository {
            async fn create(&self, task: Task) -> Result<Task, TaskError>;
            async fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>, TaskError>;
            async fn list_by_owner(&self, owner: UserId, page: TaskPage) -> Result<Vec<Task>, TaskError>;
            async fn update(&self, task: Task) -> Result<Task, TaskError>;
            async fn delete(&self, id: &TaskId) -> Result<(), TaskError>;
        }
    }

    fn test_task(owner_id: UserId) -> Task {
        let now = Utc::now();
        Task {
            id: TaskId::new(),
            owner_id,
            title: TaskTitle::new("buy milk".to_string()).unwrap(),
            description: None,
            is_completed: false,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_create_task_sets_owner_from_caller() {
        let caller = UserId::new();

        let mut repository = MockTestTaskRepository::new();
        repository
            .expect_create()
            .withf(move |task| {
                task.owner_id == caller && task.title.as_str() == "buy milk" && !task.is_completed
            })
            .times(1)
            .returning(|task| Ok(task));

        let service = TaskService::new(Arc::new(repository));

        let command = CreateTaskCommand {
            title: TaskTitle::new("buy milk".to_string()).unwrap(),
            description: None,
        };

        let task = service.create_task(caller, command).await.unwrap();
        assert_eq!(task.owner_id, caller);
    }

    #[tokio::test]
    async fn test_get_task_success() {
        let caller = UserId::new();
        let task = test_task(caller);
        let task_id = task.id;

        let mut repository = MockTestTaskRepository::new();
        let returned_task = task.clone();
        repository
            .expect_find_by_id()
            .withf(move |id| *id == task_id)
            .times(1)
            .returning(move |_| Ok(Some(returned_task.clone())));

        let service = TaskService::new(Arc::new(repository));

        let found = service.get_task(caller, &task_id).await.unwrap();
        assert_eq!(found.id, task_id);
    }

    #[tokio::test]
    async fn test_get_task_foreign_owner_is_not_found() {
        let owner = UserId::new();
        let stranger = UserId::new();
        let task = test_task(owner);
        let task_id = task.id;

        let mut repository = MockTestTaskRepository::new();
        let returned_task = task.clone();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(returned_task.clone())));

        let service = TaskService::new(Arc::new(repository));

        let result = service.get_task(stranger, &task_id).await;
        assert!(matches!(result, Err(TaskError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_get_task_absent_is_not_found() {
        let caller = UserId::new();

        let mut repository = MockTestTaskRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = TaskService::new(Arc::new(repository));

        let result = service.get_task(caller, &TaskId::new()).await;
        assert!(matches!(result, Err(TaskError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_foreign_and_absent_rejections_are_identical() {
        let owner = UserId::new();
        let stranger = UserId::new();
        let task = test_task(owner);
        let task_id = task.id;

        let mut repository = MockTestTaskRepository::new();
        let returned_task = task.clone();
        repository
            .expect_find_by_id()
            .times(2)
            .returning(move |id| {
                if *id == task_id {
                    Ok(Some(returned_task.clone()))
                } else {
                    Ok(None)
                }
            });

        let service = TaskService::new(Arc::new(repository));

        let foreign = service.get_task(stranger, &task_id).await.unwrap_err();
        let absent = service.get_task(stranger, &TaskId::new()).await.unwrap_err();

        assert!(matches!(foreign, TaskError::NotFound(_)));
        assert!(matches!(absent, TaskError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_task_partial_fields() {
        let caller = UserId::new();
        let task = test_task(caller);
        let task_id = task.id;

        let mut repository = MockTestTaskRepository::new();
        let returned_task = task.clone();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(returned_task.clone())));

        repository
            .expect_update()
            .withf(|task| {
                task.title.as_str() == "buy milk"
                    && task.description.as_ref().map(|d| d.as_str()) == Some("2 liters")
                    && task.is_completed
            })
            .times(1)
            .returning(|task| Ok(task));

        let service = TaskService::new(Arc::new(repository));

        let command = UpdateTaskCommand {
            title: None,
            description: Some(TaskDescription::new("2 liters".to_string()).unwrap()),
            is_completed: Some(true),
        };

        let updated = service.update_task(caller, &task_id, command).await.unwrap();
        assert!(updated.is_completed);
    }

    #[tokio::test]
    async fn test_update_task_foreign_owner_never_touches_store() {
        let owner = UserId::new();
        let stranger = UserId::new();
        let task = test_task(owner);
        let task_id = task.id;

        let mut repository = MockTestTaskRepository::new();
        let returned_task = task.clone();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(returned_task.clone())));

        repository.expect_update().times(0);

        let service = TaskService::new(Arc::new(repository));

        let command = UpdateTaskCommand {
            title: Some(TaskTitle::new("hijacked".to_string()).unwrap()),
            description: None,
            is_completed: None,
        };

        let result = service.update_task(stranger, &task_id, command).await;
        assert!(matches!(result, Err(TaskError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_toggle_task_flips_completion() {
        let caller = UserId::new();
        let task = test_task(caller);
        let task_id = task.id;

        let mut repository = MockTestTaskRepository::new();
        let returned_task = task.clone();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(returned_task.clone())));

        repository
            .expect_update()
            .withf(|task| task.is_completed)
            .times(1)
            .returning(|task| Ok(task));

        let service = TaskService::new(Arc::new(repository));

        let toggled = service.toggle_task(caller, &task_id).await.unwrap();
        assert!(toggled.is_completed);
    }

    #[tokio::test]
    async fn test_delete_task_foreign_owner_never_touches_store() {
        let owner = UserId::new();
        let stranger = UserId::new();
        let task = test_task(owner);
        let task_id = task.id;

        let mut repository = MockTestTaskRepository::new();
        let returned_task = task.clone();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(returned_task.clone())));

        repository.expect_delete().times(0);

        let service = TaskService::new(Arc::new(repository));

        let result = service.delete_task(stranger, &task_id).await;
        assert!(matches!(result, Err(TaskError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_task_success() {
        let caller = UserId::new();
        let task = test_task(caller);
        let task_id = task.id;

        let mut repository = MockTestTaskRepository::new();
        let returned_task = task.clone();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(returned_task.clone())));

        repository
            .expect_delete()
            .withf(move |id| *id == task_id)
            .times(1)
            .returning(|_| Ok(()));

        let service = TaskService::new(Arc::new(repository));

        assert!(service.delete_task(caller, &task_id).await.is_ok());
    }

    #[tokio::test]
    async fn test_list_tasks_scoped_to_caller() {
        let caller = UserId::new();

        let mut repository = MockTestTaskRepository::new();
        let tasks = vec![test_task(caller), test_task(caller)];
        let returned_tasks = tasks.clone();
        repository
            .expect_list_by_owner()
            .withf(move |owner, _| *owner == caller)
            .times(1)
            .returning(move |_, _| Ok(returned_tasks.clone()));

        let service = TaskService::new(Arc::new(repository));

        let listed = service.list_tasks(caller, TaskPage::default()).await.unwrap();
        assert_eq!(listed.len(), 2);
        assert!(listed.iter().all(|t| t.owner_id == caller));
    }
}
