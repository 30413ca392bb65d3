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
use crate::book;
use crate::queries::{self, Page, SortOrder};
use crate::tasks::{Task, TaskContext};
use crate::Result;

pub const IN_STOCK_PUBLISHED_AFTER: i32 = 2010;
pub const PAGE_SIZE: u64 = 5;

pub struct AdvancedQueryTask {}

impl AdvancedQueryTask {

    pub fn new() -> Arc<dyn Task> {
        Arc::new(AdvancedQueryTask {})
    }

}

#[async_trait]
impl Task for AdvancedQueryTask {

    fn title(&self) -> &'static str {
        "TASK 3: Advanced Queries"
    }

    async fn run(&self, ctx: &mut TaskContext<'_>) -> Result<()> {
        let store = ctx.store;
        let console = &mut *ctx.console;

        console.line(format!("1. Books in stock AND published after {}:", IN_STOCK_PUBLISHED_AFTER))?;
        let in_stock = store.find(queries::in_stock_published_after(IN_STOCK_PUBLISHED_AFTER)).await?;
        console.json(&in_stock)?;
        console.blank()?;

        console.line("2. Books with only title, author, and price (projection):")?;
        let projected = store.find_projected(queries::all(), queries::title_author_price()).await?;
        console.json(&projected)?;
        console.blank()?;

        console.line("3a. Books sorted by price (ascending):")?;
        let ascending = store.find_sorted(queries::all(), queries::by_price(SortOrder::Ascending)).await?;
        console.list(ascending.iter().map(book::price_line))?;
        console.blank()?;

        console.line("3b. Books sorted by price (descending):")?;
        let descending = store.find_sorted(queries::all(), queries::by_price(SortOrder::Descending)).await?;
        console.list(descending.iter().map(book::price_line))?;
        console.blank()?;

        let first = Page::first(PAGE_SIZE);
        console.line(format!("4. Pagination - Page 1 ({} books per page):", PAGE_SIZE))?;
        let page = store.find_page(queries::all(), first).await?;
        console.list(page.iter().map(book::title_line))?;
        console.blank()?;

        console.line("Pagination - Page 2:")?;
        let page = store.find_page(queries::all(), first.next()).await?;
        console.list(page.iter().map(book::title_line))?;
        console.blank()?;

        Ok(())
    }

}
