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

use std::fmt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Bson, Document};
use serde::{Deserialize, Serialize};

/// The shape the walkthrough expects of a `books` document.
///
/// Only used to write documents. Reads go through raw documents and the lenient
/// accessors below, since stored books may carry extra fields, miss some, or store
/// `price` as `Decimal128`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub published_year: i32,
    pub price: f64,
    pub pages: i32,
    pub in_stock: bool,
}

impl Book {

    pub fn new(
        title: impl ToString,
        author: impl ToString,
        genre: impl ToString,
        published_year: i32,
        price: f64,
        pages: i32,
        in_stock: bool,
    ) -> Self {
        Book {
            id: None,
            title: title.to_string(),
            author: author.to_string(),
            genre: genre.to_string(),
            published_year,
            price,
            pages,
            in_stock,
        }
    }

    #[inline]
    pub fn decade(&self) -> i32 {
        decade_of(self.published_year)
    }

}

/// `floor(year / 10) * 10`, rounding toward negative infinity like `$floor`.
pub fn decade_of(year: i32) -> i32 {
    year.div_euclid(10) * 10
}

pub fn title_of(doc: &Document) -> Option<&str> {
    doc.get("title").and_then(Bson::as_str)
}

/// `price` as a number, whichever numeric BSON type holds it.
pub fn price_of(doc: &Document) -> Option<f64> {
    doc.get("price").and_then(number_as_f64)
}

pub fn number_as_f64(value: &Bson) -> Option<f64> {
    match value {
        Bson::Double(v) => Some(*v),
        Bson::Int32(v) => Some(*v as f64),
        Bson::Int64(v) => Some(*v as f64),
        Bson::Decimal128(v) => v.to_string().parse().ok(),
        _ => None,
    }
}

/// A field value the way the listings print it: numbers and strings bare,
/// `undefined` when absent, anything else as relaxed Extended JSON.
pub struct FieldText<'a>(pub Option<&'a Bson>);

impl fmt::Display for FieldText<'_> {

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            None => write!(f, "undefined"),
            Some(Bson::String(s)) => write!(f, "{}", s),
            Some(Bson::Double(v)) => write!(f, "{}", v),
            Some(Bson::Int32(v)) => write!(f, "{}", v),
            Some(Bson::Int64(v)) => write!(f, "{}", v),
            Some(Bson::Decimal128(v)) => write!(f, "{}", v),
            Some(other) => write!(f, "{}", other.clone().into_relaxed_extjson()),
        }
    }

}

/// `"<title> - $<price>"`, the line printed by the price sort listings.
pub fn price_line(doc: &Document) -> String {
    format!("{} - ${}", FieldText(doc.get("title")), FieldText(doc.get("price")))
}

pub fn title_line(doc: &Document) -> String {
    FieldText(doc.get("title")).to_string()
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;
    use mongodb::bson::{self, doc, Decimal128};
    use super::*;

    #[test]
    fn test_decade_of() {
        assert_eq!(decade_of(1949), 1940);
        assert_eq!(decade_of(1950), 1950);
        assert_eq!(decade_of(2019), 2010);
        assert_eq!(decade_of(-5), -10);
    }

    #[test]
    fn test_price_line() {
        let book = doc! { "title": "1984", "price": 13.99 };
        assert_eq!(price_line(&book), "1984 - $13.99");

        let round = doc! { "title": "Emma", "price": 10 };
        assert_eq!(price_line(&round), "Emma - $10");

        let untitled = doc! { "price": 7.5 };
        assert_eq!(price_line(&untitled), "undefined - $7.5");
    }

    #[test]
    fn test_decimal_price() {
        let decimal = Decimal128::from_str("13.99").unwrap();
        let book = doc! { "title": "1984", "price": decimal };
        assert_eq!(price_of(&book), Some(13.99));
        assert_eq!(price_line(&book), "1984 - $13.99");
    }

    #[test]
    fn test_lenient_reads() {
        let book = doc! { "title": 1984, "price": "cheap" };
        assert_eq!(title_of(&book), None);
        assert_eq!(price_of(&book), None);
        assert_eq!(title_line(&book), "1984");
        assert_eq!(price_of(&doc! { "price": 14_i64 }), Some(14.0));
    }

    #[test]
    fn test_encode_skips_missing_id() {
        let book = Book::new("Emma", "Jane Austen", "Romance", 1815, 10.0, 474, true);
        let doc = bson::to_document(&book).unwrap();
        assert!(!doc.contains_key("_id"));
        assert_eq!(doc.get_str("title").unwrap(), "Emma");
        assert_eq!(book.decade(), 1810);
    }

}
