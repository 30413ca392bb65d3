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

//! Decoding of `explain` replies run with `executionStats` verbosity.

use mongodb::bson::{self, doc, Bson, Document};
use serde::Deserialize;
use crate::{Error, Result};

pub const INDEX_SCAN_STAGE: &str = "IXSCAN";

/// Wraps a `find` on `collection` into an `explain` command.
pub fn find_command(collection: &str, filter: Document) -> Document {
    doc! {
        "explain": {
            "find": collection,
            "filter": filter,
        },
        "verbosity": "executionStats",
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionStats {
    pub execution_time_millis: i64,
    pub total_docs_examined: i64,
    #[serde(default)]
    pub total_keys_examined: i64,
    #[serde(default)]
    pub n_returned: i64,
    #[serde(default)]
    pub execution_stages: Option<Document>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExplainReport {
    pub stats: ExecutionStats,
    /// Outermost stage first, e.g. `["FETCH", "IXSCAN"]`.
    pub stages: Vec<String>,
}

impl ExplainReport {

    pub fn from_reply(mut reply: Document) -> Result<ExplainReport> {
        let stats = match reply.remove("executionStats") {
            Some(Bson::Document(stats)) => stats,
            Some(other) => {
                return Err(Error::ExplainFormat(format!(
                    "executionStats is {:?}, expected a document", other.element_type(),
                )));
            }
            None => return Err(Error::ExplainFormat("missing executionStats".to_string())),
        };
        let stats: ExecutionStats = bson::from_document(stats)?;
        let stages = stats.execution_stages
            .as_ref()
            .map(stage_chain)
            .unwrap_or_default();
        Ok(ExplainReport { stats, stages })
    }

    pub fn used_index(&self) -> bool {
        self.stages.iter().any(|stage| stage == INDEX_SCAN_STAGE)
    }

}

/// Follows `inputStage` links down from the root stage.
fn stage_chain(root: &Document) -> Vec<String> {
    let mut result = Vec::new();
    let mut current = Some(root);
    while let Some(stage) = current {
        if let Ok(name) = stage.get_str("stage") {
            result.push(name.to_string());
        }
        current = stage.get_document("inputStage").ok();
    }
    result
}

#[cfg(test)]
mod tests {
    use mongodb::bson::doc;
    use super::*;

    #[test]
    fn test_find_command() {
        let cmd = find_command("books", doc! { "pages": { "$gt": 300 } });
        assert_eq!(cmd.get_str("verbosity").unwrap(), "executionStats");
        let inner = cmd.get_document("explain").unwrap();
        assert_eq!(inner.get_str("find").unwrap(), "books");
    }

    #[test]
    fn test_collection_scan() {
        let reply = doc! {
            "queryPlanner": { "namespace": "plp_bookstore.books" },
            "executionStats": {
                "executionSuccess": true,
                "nReturned": 7,
                "executionTimeMillis": 0,
                "totalKeysExamined": 0,
                "totalDocsExamined": 12,
                "executionStages": { "stage": "COLLSCAN" },
            },
            "ok": 1.0,
        };
        let report = ExplainReport::from_reply(reply).unwrap();
        assert_eq!(report.stats.total_docs_examined, 12);
        assert_eq!(report.stats.n_returned, 7);
        assert_eq!(report.stages, vec!["COLLSCAN".to_string()]);
        assert!(!report.used_index());
    }

    #[test]
    fn test_index_scan() {
        let reply = doc! {
            "executionStats": {
                "nReturned": 7,
                "executionTimeMillis": 1_i64,
                "totalKeysExamined": 7,
                "totalDocsExamined": 7,
                "executionStages": {
                    "stage": "FETCH",
                    "inputStage": {
                        "stage": "IXSCAN",
                        "indexName": "pages_1",
                    },
                },
            },
        };
        let report = ExplainReport::from_reply(reply).unwrap();
        assert_eq!(report.stats.execution_time_millis, 1);
        assert_eq!(report.stages, vec!["FETCH".to_string(), "IXSCAN".to_string()]);
        assert!(report.used_index());
    }

    #[test]
    fn test_missing_stats() {
        let err = ExplainReport::from_reply(doc! { "ok": 1.0 }).unwrap_err();
        assert!(matches!(err, Error::ExplainFormat(_)));
    }

}
