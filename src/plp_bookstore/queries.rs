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

//! Filter, projection and sort documents for the `books` collection.

use mongodb::bson::{doc, Document};

pub fn all() -> Document {
    doc! {}
}

pub fn by_genre(genre: &str) -> Document {
    doc! { "genre": genre }
}

pub fn by_author(author: &str) -> Document {
    doc! { "author": author }
}

pub fn by_title(title: &str) -> Document {
    doc! { "title": title }
}

/// Strictly after `year`; a book published in `year` does not match.
pub fn published_after(year: i32) -> Document {
    doc! {
        "published_year": {
            "$gt": year,
        },
    }
}

pub fn longer_than(pages: i32) -> Document {
    doc! {
        "pages": {
            "$gt": pages,
        },
    }
}

/// `in_stock == true AND published_year > year`
pub fn in_stock_published_after(year: i32) -> Document {
    doc! {
        "in_stock": true,
        "published_year": {
            "$gt": year,
        },
    }
}

pub fn set_price(price: f64) -> Document {
    doc! {
        "$set": {
            "price": price,
        },
    }
}

/// Keeps `title`, `author` and `price`, drops `_id`.
pub fn title_author_price() -> Document {
    doc! {
        "title": 1,
        "author": 1,
        "price": 1,
        "_id": 0,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {

    #[inline]
    pub fn direction(self) -> i32 {
        match self {
            SortOrder::Ascending => 1,
            SortOrder::Descending => -1,
        }
    }

}

pub fn by_price(order: SortOrder) -> Document {
    doc! { "price": order.direction() }
}

/// A fixed-size window over a result set, counted from zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub index: u64,
    pub size:  u64,
}

impl Page {

    pub fn first(size: u64) -> Page {
        Page { index: 0, size }
    }

    pub fn next(self) -> Page {
        Page { index: self.index + 1, size: self.size }
    }

    #[inline]
    pub fn skip(&self) -> u64 {
        self.index * self.size
    }

    #[inline]
    pub fn limit(&self) -> i64 {
        self.size as i64
    }

}
