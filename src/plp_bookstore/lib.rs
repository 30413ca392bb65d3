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

//! A walkthrough of the MongoDB query surface against a `books` collection.
//!
//! [`run_queries`] connects, runs every [`tasks::Task`] in order and prints each
//! result: CRUD, compound filters, projection, sorting, pagination, aggregation
//! pipelines and index creation with `explain` comparisons.
//!
//! ```no_run
//! use plp_bookstore::{run_queries, Config, Console};
//!
//! # async fn example() -> plp_bookstore::Result<()> {
//! let mut console = Console::stdio();
//! run_queries(&Config::default(), &mut console).await?;
//! # Ok(())
//! # }
//! ```

pub mod book;
pub mod config;
pub mod connection;
pub mod console;
pub mod explain;
pub mod indexes;
pub mod pipelines;
pub mod queries;
pub mod store;
pub mod tasks;
mod errors;

use log::error;

pub use book::Book;
pub use config::Config;
pub use connection::Connection;
pub use console::Console;
pub use errors::{Error, Result};
pub use store::BookStore;

use crate::tasks::{make_tasks, TaskContext};

/// Runs the whole walkthrough. The connection is closed whether or not a step fails,
/// and the first failure is returned after it has been printed.
pub async fn run_queries(config: &Config, console: &mut Console) -> Result<()> {
    let connection = Connection::open(config).await?;

    let result = run_tasks(connection.store(), console).await;
    let reported = match &result {
        Ok(()) => Ok(()),
        Err(err) => {
            error!("walkthrough aborted: {:?}", err);
            console.error(err)
        }
    };

    connection.close().await;
    let closed = console
        .line("\nConnection closed")
        .and_then(|_| console.flush());

    result.and(reported).and(closed)
}

async fn run_tasks(store: &BookStore, console: &mut Console) -> Result<()> {
    store.ping().await?;
    console.line("Connected to MongoDB\n")?;

    let mut ctx = TaskContext { store, console };
    for task in make_tasks() {
        ctx.console.line(format!("=== {} ===\n", task.title()))?;
        task.run(&mut ctx).await?;
    }

    Ok(())
}
