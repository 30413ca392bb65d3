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

use futures::TryStreamExt;
use log::debug;
use mongodb::bson::{self, doc, Document};
use mongodb::{Collection, Database, IndexModel};
use serde::de::DeserializeOwned;
use crate::book::Book;
use crate::explain::{self, ExplainReport};
use crate::indexes::{self, IndexInfo};
use crate::queries::{self, Page};
use crate::Result;

/// The `books` collection. Reads return raw documents so that whatever the server
/// stores is printed as is; [`Book`] is only the write-side shape.
#[derive(Clone)]
pub struct BookStore {
    db:    Database,
    books: Collection<Book>,
    raw:   Collection<Document>,
}

impl BookStore {

    pub fn new(db: Database, collection_name: &str) -> BookStore {
        let books = db.collection::<Book>(collection_name);
        let raw = books.clone_with_type::<Document>();
        BookStore { db, books, raw }
    }

    #[inline]
    pub fn collection(&self) -> &Collection<Book> {
        &self.books
    }

    pub async fn ping(&self) -> Result<()> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    pub async fn find(&self, filter: Document) -> Result<Vec<Document>> {
        debug!("find {}: {:?}", self.raw.name(), filter);
        let cursor = self.raw.find(filter).await?;
        let docs: Vec<Document> = cursor.try_collect().await?;
        Ok(docs)
    }

    pub async fn find_projected(&self, filter: Document, projection: Document) -> Result<Vec<Document>> {
        debug!("find {}: {:?}, projection: {:?}", self.raw.name(), filter, projection);
        let cursor = self.raw.find(filter).projection(projection).await?;
        let docs: Vec<Document> = cursor.try_collect().await?;
        Ok(docs)
    }

    pub async fn find_sorted(&self, filter: Document, sort: Document) -> Result<Vec<Document>> {
        debug!("find {}: {:?}, sort: {:?}", self.raw.name(), filter, sort);
        let cursor = self.raw.find(filter).sort(sort).await?;
        let docs: Vec<Document> = cursor.try_collect().await?;
        Ok(docs)
    }

    /// Natural order; pages are only stable while the collection is not modified.
    pub async fn find_page(&self, filter: Document, page: Page) -> Result<Vec<Document>> {
        debug!("find {}: {:?}, skip: {}, limit: {}", self.raw.name(), filter, page.skip(), page.limit());
        let cursor = self.raw
            .find(filter)
            .skip(page.skip())
            .limit(page.limit())
            .await?;
        let docs: Vec<Document> = cursor.try_collect().await?;
        Ok(docs)
    }

    pub async fn find_by_title(&self, title: &str) -> Result<Option<Document>> {
        Ok(self.raw.find_one(queries::by_title(title)).await?)
    }

    /// Returns the number of modified documents: 0 when no title matches
    /// or the price already had this value.
    pub async fn update_price(&self, title: &str, price: f64) -> Result<u64> {
        let result = self.books
            .update_one(queries::by_title(title), queries::set_price(price))
            .await?;
        debug!("update {:?}: matched {}, modified {}", title, result.matched_count, result.modified_count);
        Ok(result.modified_count)
    }

    pub async fn delete_by_title(&self, title: &str) -> Result<u64> {
        let result = self.books.delete_one(queries::by_title(title)).await?;
        debug!("delete {:?}: deleted {}", title, result.deleted_count);
        Ok(result.deleted_count)
    }

    pub async fn aggregate<T: DeserializeOwned>(&self, pipeline: Vec<Document>) -> Result<Vec<T>> {
        debug!("aggregate {}: {:?}", self.raw.name(), pipeline);
        let cursor = self.raw.aggregate(pipeline).await?;
        let docs: Vec<Document> = cursor.try_collect().await?;
        let mut rows = Vec::with_capacity(docs.len());
        for doc in docs {
            rows.push(bson::from_document(doc)?);
        }
        Ok(rows)
    }

    /// Returns the index name. Creating an index that already exists is a no-op.
    pub async fn create_index(&self, model: IndexModel) -> Result<String> {
        let result = self.books.create_index(model).await?;
        debug!("created index {}", result.index_name);
        Ok(result.index_name)
    }

    /// The specs exactly as the server reports them, `v` and every option included.
    /// A collection holds at most 64 indexes, so the first batch has them all.
    pub async fn list_indexes(&self) -> Result<Vec<IndexInfo>> {
        let command = indexes::list_command(self.raw.name());
        let reply = self.db.run_command(command).await?;
        IndexInfo::from_reply(reply)
    }

    pub async fn explain_find(&self, filter: Document) -> Result<ExplainReport> {
        let command = explain::find_command(self.books.name(), filter);
        debug!("explain: {:?}", command);
        let reply = self.db.run_command(command).await?;
        ExplainReport::from_reply(reply)
    }

}
