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

use log::info;
use mongodb::Client;
use crate::config::Config;
use crate::store::BookStore;
use crate::Result;

/// The single client of a run. [`Connection::close`] consumes it, so it is released once.
pub struct Connection {
    client: Client,
    store:  BookStore,
}

impl Connection {

    /// Parses the URI and builds the client. The driver connects lazily, so an
    /// unreachable server is only reported by the first operation.
    pub async fn open(config: &Config) -> Result<Connection> {
        let client = Client::with_uri_str(&config.uri).await?;
        let store = BookStore::new(client.database(&config.database), &config.collection);
        info!("client created for {}/{}.{}", config.uri, config.database, config.collection);
        Ok(Connection { client, store })
    }

    #[inline]
    pub fn store(&self) -> &BookStore {
        &self.store
    }

    pub async fn close(self) {
        self.client.shutdown().await;
        info!("client shut down");
    }

}
