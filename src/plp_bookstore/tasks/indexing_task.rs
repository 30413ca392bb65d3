// Copyright 2024 Vincent Chan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//	http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::sync::Arc;
use async_trait::async_trait;
use log::info;
use crate::console::Console;
use crate::explain::ExplainReport;
use crate::tasks::{Task, TaskContext};
use crate::{indexes, queries, Result};

pub const LONGER_THAN_PAGES: i32 = 300;

pub struct IndexingTask {}

impl IndexingTask {

    pub fn new() -> Arc<dyn Task> {
        Arc::new(IndexingTask {})
    }

    fn print_report(console: &mut Console, report: &ExplainReport) -> Result<()> {
        console.line(format!("Execution time: {}ms", report.stats.execution_time_millis))?;
        console.line(format!("Documents examined: {}", report.stats.total_docs_examined))?;
        console.line(format!("Keys examined: {}", report.stats.total_keys_examined))?;
        console.line(format!(
            "Plan: {} (index used: {})\n",
            report.stages.join(" -> "),
            if report.used_index() { "yes" } else { "no" },
        ))?;
        Ok(())
    }

}

#[async_trait]
impl Task for IndexingTask {

    fn title(&self) -> &'static str {
        "TASK 5: Indexing"
    }

    async fn run(&self, ctx: &mut TaskContext<'_>) -> Result<()> {
        let store = ctx.store;
        let console = &mut *ctx.console;

        console.line("1. Creating index on title field...")?;
        store.create_index(indexes::title()).await?;
        console.line("Index created on title\n")?;

        console.line("2. Creating compound index on author and published_year...")?;
        store.create_index(indexes::author_published_year()).await?;
        console.line("Compound index created\n")?;

        console.line("3. Performance comparison - Query WITHOUT index optimization:")?;
        let before = store.explain_find(queries::longer_than(LONGER_THAN_PAGES)).await?;
        IndexingTask::print_report(console, &before)?;

        let name = store.create_index(indexes::pages()).await?;
        info!("created {} for the comparison", name);

        console.line("Performance comparison - Query WITH index:")?;
        let after = store.explain_find(queries::longer_than(LONGER_THAN_PAGES)).await?;
        IndexingTask::print_report(console, &after)?;

        console.line("All indexes on books collection:")?;
        let all = store.list_indexes().await?;
        console.json(&all)?;

        Ok(())
    }

}
