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

use mongodb::bson::{doc, Bson, Document};
use mongodb::IndexModel;
use serde::Serialize;
use crate::{Error, Result};

pub fn title() -> IndexModel {
    IndexModel::builder()
        .keys(doc! { "title": 1 })
        .build()
}

/// Author ascending, newest publication first within an author.
pub fn author_published_year() -> IndexModel {
    IndexModel::builder()
        .keys(doc! { "author": 1, "published_year": -1 })
        .build()
}

pub fn pages() -> IndexModel {
    IndexModel::builder()
        .keys(doc! { "pages": 1 })
        .build()
}

/// The name the server derives for a key pattern, e.g. `author_1_published_year_-1`.
pub fn default_name(keys: &Document) -> String {
    keys.iter()
        .map(|(field, direction)| format!("{}_{}", field, direction))
        .collect::<Vec<String>>()
        .join("_")
}

pub fn list_command(collection: &str) -> Document {
    doc! {
        "listIndexes": collection,
        "cursor": { "batchSize": 1000 },
    }
}

/// One index spec as `listIndexes` returns it. Printed unchanged.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct IndexInfo {
    spec: Document,
}

impl IndexInfo {

    pub fn new(spec: Document) -> IndexInfo {
        IndexInfo { spec }
    }

    /// Decodes the `cursor.firstBatch` of a `listIndexes` reply.
    pub fn from_reply(reply: Document) -> Result<Vec<IndexInfo>> {
        let batch = reply
            .get_document("cursor")
            .and_then(|cursor| cursor.get_array("firstBatch"))
            .map_err(|err| Error::ReplyFormat(format!("listIndexes: {}", err)))?;

        let mut result = Vec::with_capacity(batch.len());
        for item in batch {
            match item {
                Bson::Document(spec) => result.push(IndexInfo::new(spec.clone())),
                other => {
                    return Err(Error::ReplyFormat(format!(
                        "listIndexes: index spec is {:?}, expected a document", other.element_type(),
                    )));
                }
            }
        }
        Ok(result)
    }

    pub fn name(&self) -> String {
        match self.spec.get_str("name") {
            Ok(name) => name.to_string(),
            Err(_) => self.key().map(default_name).unwrap_or_default(),
        }
    }

    pub fn key(&self) -> Option<&Document> {
        self.spec.get_document("key").ok()
    }

    #[inline]
    pub fn spec(&self) -> &Document {
        &self.spec
    }

}

#[cfg(test)]
mod tests {
    use mongodb::bson::doc;
    use super::*;

    #[test]
    fn test_default_names() {
        assert_eq!(default_name(&title().keys), "title_1");
        assert_eq!(default_name(&author_published_year().keys), "author_1_published_year_-1");
        assert_eq!(default_name(&pages().keys), "pages_1");
    }

    #[test]
    fn test_reply_keeps_every_option() {
        let reply = doc! {
            "cursor": {
                "id": 0_i64,
                "ns": "plp_bookstore.books",
                "firstBatch": [
                    { "v": 2, "key": { "_id": 1 }, "name": "_id_" },
                    { "v": 2, "key": { "pages": 1 }, "name": "pages_1", "sparse": true },
                ],
            },
            "ok": 1.0,
        };
        let infos = IndexInfo::from_reply(reply).unwrap();
        assert_eq!(infos.len(), 2);
        assert_eq!(infos[0].name(), "_id_");
        assert_eq!(infos[1].key(), Some(&doc! { "pages": 1 }));
        assert_eq!(infos[1].spec().get_i32("v").unwrap(), 2);
        assert!(infos[1].spec().get_bool("sparse").unwrap());

        let rendered = mongodb::bson::to_bson(&infos[1]).unwrap();
        assert_eq!(rendered, Bson::Document(infos[1].spec().clone()));
    }

    #[test]
    fn test_name_falls_back_to_key() {
        let info = IndexInfo::new(doc! { "v": 2, "key": { "author": 1, "published_year": -1 } });
        assert_eq!(info.name(), "author_1_published_year_-1");
    }

    #[test]
    fn test_malformed_reply() {
        let err = IndexInfo::from_reply(doc! { "ok": 1.0 }).unwrap_err();
        assert!(matches!(err, Error::ReplyFormat(_)));
    }

}
