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

use std::io;
use mongodb::bson;
use thiserror::Error;

/// Every failure is an "operation failed"; the variants only record which layer raised it.
#[derive(Error, Debug)]
pub enum Error {
    #[error("database error: {0}")]
    Database(Box<mongodb::error::Error>),
    #[error("bson de error: {0}")]
    BsonDe(#[from] bson::de::Error),
    #[error("bson ser error: {0}")]
    BsonSer(#[from] bson::ser::Error),
    #[error("unexpected explain output: {0}")]
    ExplainFormat(String),
    #[error("unexpected command reply: {0}")]
    ReplyFormat(String),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

impl From<mongodb::error::Error> for Error {
    fn from(value: mongodb::error::Error) -> Self {
        Error::Database(Box::new(value))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn test_explain_format_message() {
        let err = Error::ExplainFormat("missing executionStats".to_string());
        assert_eq!(err.to_string(), "unexpected explain output: missing executionStats");
    }

}
