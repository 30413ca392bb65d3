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

use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use anyhow::Result;
use async_trait::async_trait;
use mongodb::bson::Document;
use mongodb::Client;
use plp_bookstore::book;
use plp_bookstore::config::DEFAULT_COLLECTION;
use plp_bookstore::{Book, BookStore, Config};

/// Live tests only run when this points at a MongoDB server.
pub const TEST_URI_VAR: &str = "PLP_BOOKSTORE_TEST_URI";

#[async_trait]
pub trait Runner: Send + Sync {
    async fn run(&self, config: Config, store: BookStore) -> Result<()>;
}

pub fn test_config(name: &str) -> Option<Config> {
    let uri = match std::env::var(TEST_URI_VAR) {
        Ok(uri) => uri,
        Err(_) => {
            eprintln!("{} is not set, skipping {}", TEST_URI_VAR, name);
            return None;
        }
    };
    Some(Config {
        uri,
        database: format!("plp_bookstore_test_{}", name),
        collection: DEFAULT_COLLECTION.to_string(),
    })
}

/// Seeds a database of its own with [`sample_books`], runs `runner`, then drops it.
pub async fn with_seeded_store(name: &str, runner: Box<dyn Runner>) -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();

    let config = match test_config(name) {
        Some(config) => config,
        None => return Ok(()),
    };

    let client = Client::with_uri_str(&config.uri).await?;
    let database = client.database(&config.database);
    database.drop().await?;

    let store = BookStore::new(database.clone(), &config.collection);
    store.collection().insert_many(sample_books()).await?;

    let result = runner.run(config, store).await;

    database.drop().await?;
    client.shutdown().await;
    result
}

/// Prices are pairwise distinct so that price orderings are total.
pub fn sample_books() -> Vec<Book> {
    vec![
        Book::new("To Kill a Mockingbird", "Harper Lee", "Fiction", 1960, 12.99, 336, true),
        Book::new("1984", "George Orwell", "Dystopian", 1949, 10.99, 328, true),
        Book::new("The Great Gatsby", "F. Scott Fitzgerald", "Fiction", 1925, 9.99, 180, true),
        Book::new("Brave New World", "Aldous Huxley", "Dystopian", 1932, 11.50, 311, false),
        Book::new("The Hobbit", "J.R.R. Tolkien", "Fantasy", 1937, 14.99, 310, true),
        Book::new("The Catcher in the Rye", "J.D. Salinger", "Fiction", 1951, 8.99, 224, true),
        Book::new("Pride and Prejudice", "Jane Austen", "Romance", 1813, 7.99, 432, true),
        Book::new("The Lord of the Rings", "J.R.R. Tolkien", "Fantasy", 1954, 19.99, 1178, true),
        Book::new("Animal Farm", "George Orwell", "Political Satire", 1945, 8.50, 112, false),
        Book::new("The Alchemist", "Paulo Coelho", "Fiction", 1988, 10.50, 197, true),
        Book::new("Moby Dick", "Herman Melville", "Adventure", 1851, 12.50, 635, false),
        Book::new("Wuthering Heights", "Emily Bronte", "Gothic Fiction", 1847, 9.50, 342, true),
        Book::new("I, Robot", "Isaac Asimov", "Science Fiction", 1950, 11.99, 253, true),
        Book::new("The Martian", "Andy Weir", "Science Fiction", 2011, 15.99, 369, true),
        Book::new("The Silmarillion", "J.R.R. Tolkien", "Fantasy", 1977, 13.49, 365, false),
    ]
}

pub fn titles(docs: &[Document]) -> Vec<String> {
    docs.iter().map(book::title_line).collect()
}

#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {

    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

}

impl Write for SharedBuffer {

    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }

}
