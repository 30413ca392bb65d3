mod crud_task;
mod advanced_query_task;
mod aggregation_task;
mod indexing_task;

use std::sync::Arc;
use async_trait::async_trait;
use crate::console::Console;
use crate::store::BookStore;
use crate::Result;

pub use crud_task::CrudTask;
pub use advanced_query_task::AdvancedQueryTask;
pub use aggregation_task::AggregationTask;
pub use indexing_task::IndexingTask;

pub struct TaskContext<'a> {
    pub store:   &'a BookStore,
    pub console: &'a mut Console,
}

#[async_trait]
pub trait Task: Send + Sync {

    /// Printed as `=== <title> ===` before the task runs.
    fn title(&self) -> &'static str;

    async fn run(&self, ctx: &mut TaskContext<'_>) -> Result<()>;

}

/// The walkthrough, in the order it is printed.
pub fn make_tasks() -> Vec<Arc<dyn Task>> {
    vec![
        CrudTask::new(),
        AdvancedQueryTask::new(),
        AggregationTask::new(),
        IndexingTask::new(),
    ]
}

#[cfg(test)]
mod tests {
    use super::make_tasks;

    #[test]
    fn test_task_order() {
        let titles: Vec<&str> = make_tasks().iter().map(|task| task.title()).collect();
        assert_eq!(titles, vec![
            "TASK 2: Basic CRUD Operations",
            "TASK 3: Advanced Queries",
            "TASK 4: Aggregation Pipeline",
            "TASK 5: Indexing",
        ]);
    }

}
