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
use crate::pipelines::{self, AuthorBooks, DecadeBooks, GenreAveragePrice};
use crate::tasks::{Task, TaskContext};
use crate::Result;

pub struct AggregationTask {}

impl AggregationTask {

    pub fn new() -> Arc<dyn Task> {
        Arc::new(AggregationTask {})
    }

}

#[async_trait]
impl Task for AggregationTask {

    fn title(&self) -> &'static str {
        "TASK 4: Aggregation Pipeline"
    }

    async fn run(&self, ctx: &mut TaskContext<'_>) -> Result<()> {
        let store = ctx.store;
        let console = &mut *ctx.console;

        console.line("1. Average price by genre:")?;
        let by_genre: Vec<GenreAveragePrice> = store.aggregate(pipelines::average_price_by_genre()).await?;
        console.json(&by_genre)?;
        console.blank()?;

        console.line("2. Author with the most books:")?;
        let top: Vec<AuthorBooks> = store.aggregate(pipelines::top_author()).await?;
        console.json(&top)?;
        console.blank()?;

        console.line("3. Books grouped by publication decade:")?;
        let by_decade: Vec<DecadeBooks> = store.aggregate(pipelines::books_by_decade()).await?;
        console.json(&by_decade)?;
        console.blank()?;

        Ok(())
    }

}
