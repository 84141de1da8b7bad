//! Follow-up task board.

use super::change_status;
use crate::entities::{RecordId, Task};
use crate::error::CrmResult;
use crate::listing::{filter_by, has_status};
use crate::repositories::{InMemoryRepository, Repository};
use crate::status::TaskStatus;

#[derive(Debug, Default)]
pub struct TaskBoard {
    tasks: InMemoryRepository<Task>,
}

impl TaskBoard {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            tasks: InMemoryRepository::with_records(tasks),
        }
    }

    pub fn tasks(&self) -> &[Task] {
        self.tasks.list()
    }

    pub fn pending(&self) -> Vec<&Task> {
        filter_by(self.tasks.list(), has_status::<Task>(Some(TaskStatus::Pending)))
    }

    pub fn completed(&self) -> Vec<&Task> {
        filter_by(self.tasks.list(), has_status::<Task>(Some(TaskStatus::Completed)))
    }

    /// Mark a pending task completed. Completed tasks cannot be completed again.
    pub fn mark_complete(&mut self, id: &RecordId) -> CrmResult<&Task> {
        change_status(&mut self.tasks, id, TaskStatus::Completed)
    }
}
