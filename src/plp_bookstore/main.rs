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

//! Runs the bookstore walkthrough against `mongodb://localhost:27017`,
//! database `plp_bookstore`, collection `books`.
//!
//! The collection is expected to be populated already. Set `RUST_LOG=plp_bookstore=debug`
//! to see every command the walkthrough sends.

use anyhow::Result;
use plp_bookstore::{run_queries, Config, Console};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let config = Config::default();
    let mut console = Console::stdio();
    run_queries(&config, &mut console).await?;

    Ok(())
}
