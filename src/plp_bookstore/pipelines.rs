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

//! Aggregation pipelines and the rows they produce.
//!
//! Reference: https://www.mongodb.com/docs/manual/reference/operator/aggregation/

use mongodb::bson::{doc, Bson, Document};
use serde::{Deserialize, Serialize};
use crate::book::number_as_f64;

/// Average price and book count per genre, most expensive genre first.
pub fn average_price_by_genre() -> Vec<Document> {
    vec![
        doc! {
            "$group": {
                "_id": "$genre",
                "averagePrice": { "$avg": "$price" },
                "count": { "$sum": 1 },
            },
        },
        doc! { "$sort": { "averagePrice": -1 } },
    ]
}

/// The author with the most books, with their titles.
pub fn top_author() -> Vec<Document> {
    vec![
        doc! {
            "$group": {
                "_id": "$author",
                "bookCount": { "$sum": 1 },
                "books": { "$push": "$title" },
            },
        },
        doc! { "$sort": { "bookCount": -1 } },
        doc! { "$limit": 1 },
    ]
}

/// Books grouped by `floor(published_year / 10) * 10`, oldest decade first.
pub fn books_by_decade() -> Vec<Document> {
    vec![
        doc! {
            "$addFields": {
                "decade": {
                    "$multiply": [
                        { "$floor": { "$divide": ["$published_year", 10] } },
                        10
                    ],
                },
            },
        },
        doc! {
            "$group": {
                "_id": "$decade",
                "count": { "$sum": 1 },
                "books": { "$push": "$title" },
            },
        },
        doc! { "$sort": { "_id": 1 } },
    ]
}

/// Group keys and averages keep the BSON type the server produced: `$avg` over
/// `Decimal128` prices yields a `Decimal128`, a missing group field yields `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenreAveragePrice {
    #[serde(rename = "_id", default)]
    pub genre: Bson,
    #[serde(rename = "averagePrice", default)]
    pub average_price: Bson,
    pub count: i64,
}

impl GenreAveragePrice {

    pub fn genre(&self) -> Option<&str> {
        self.genre.as_str()
    }

    pub fn average_price(&self) -> Option<f64> {
        number_as_f64(&self.average_price)
    }

}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorBooks {
    #[serde(rename = "_id", default)]
    pub author: Bson,
    #[serde(rename = "bookCount")]
    pub book_count: i64,
    #[serde(default)]
    pub books: Vec<Bson>,
}

impl AuthorBooks {

    pub fn author(&self) -> Option<&str> {
        self.author.as_str()
    }

    pub fn titles(&self) -> Vec<&str> {
        self.books.iter().filter_map(Bson::as_str).collect()
    }

}

/// The server computes the decade with `$multiply`/`$floor`, so it usually arrives as a double.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecadeBooks {
    #[serde(rename = "_id", default)]
    pub decade: Bson,
    pub count: i64,
    #[serde(default)]
    pub books: Vec<Bson>,
}

impl DecadeBooks {

    pub fn decade(&self) -> Option<i32> {
        number_as_f64(&self.decade).map(|d| d as i32)
    }

    pub fn titles(&self) -> Vec<&str> {
        self.books.iter().filter_map(Bson::as_str).collect()
    }

}
