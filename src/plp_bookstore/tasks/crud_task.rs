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
use log::warn;
use crate::book::FieldText;
use crate::queries;
use crate::tasks::{Task, TaskContext};
use crate::Result;

pub const FICTION: &str = "Fiction";
pub const PUBLISHED_AFTER: i32 = 1950;
pub const ORWELL: &str = "George Orwell";
pub const REPRICED_TITLE: &str = "1984";
pub const NEW_PRICE: f64 = 13.99;
pub const DELETED_TITLE: &str = "Animal Farm";

pub struct CrudTask {}

impl CrudTask {

    pub fn new() -> Arc<dyn Task> {
        Arc::new(CrudTask {})
    }

}

#[async_trait]
impl Task for CrudTask {

    fn title(&self) -> &'static str {
        "TASK 2: Basic CRUD Operations"
    }

    async fn run(&self, ctx: &mut TaskContext<'_>) -> Result<()> {
        let store = ctx.store;
        let console = &mut *ctx.console;

        console.line(format!("1. Find all books in {} genre:", FICTION))?;
        let fiction = store.find(queries::by_genre(FICTION)).await?;
        console.json(&fiction)?;
        console.blank()?;

        console.line(format!("2. Find books published after {}:", PUBLISHED_AFTER))?;
        let recent = store.find(queries::published_after(PUBLISHED_AFTER)).await?;
        console.json(&recent)?;
        console.blank()?;

        console.line(format!("3. Find books by {}:", ORWELL))?;
        let orwell = store.find(queries::by_author(ORWELL)).await?;
        console.json(&orwell)?;
        console.blank()?;

        console.line(format!("4. Update price of \"{}\" to ${}:", REPRICED_TITLE, NEW_PRICE))?;
        let modified = store.update_price(REPRICED_TITLE, NEW_PRICE).await?;
        console.line(format!("Modified {} document(s)", modified))?;
        match store.find_by_title(REPRICED_TITLE).await? {
            Some(book) => console.line(format!("New price: ${}\n", FieldText(book.get("price"))))?,
            None => {
                warn!("no book titled {:?}", REPRICED_TITLE);
                console.line(format!("\"{}\" not found\n", REPRICED_TITLE))?;
            }
        }

        console.line(format!("5. Delete \"{}\":", DELETED_TITLE))?;
        let deleted = store.delete_by_title(DELETED_TITLE).await?;
        console.line(format!("Deleted {} document(s)\n", deleted))?;

        Ok(())
    }

}
