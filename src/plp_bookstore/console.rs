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

use std::fmt::Display;
use std::io::{self, Write};
use mongodb::bson;
use serde::Serialize;
use crate::Result;

pub type Output = Box<dyn Write + Send>;

/// Human-readable step output. Values are rendered as relaxed Extended JSON.
pub struct Console {
    out: Output,
    err: Output,
}

impl Console {

    pub fn new(out: Output, err: Output) -> Console {
        Console { out, err }
    }

    pub fn stdio() -> Console {
        Console::new(Box::new(io::stdout()), Box::new(io::stderr()))
    }

    pub fn line(&mut self, text: impl Display) -> Result<()> {
        writeln!(self.out, "{}", text)?;
        Ok(())
    }

    pub fn blank(&mut self) -> Result<()> {
        writeln!(self.out)?;
        Ok(())
    }

    pub fn json<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        let value = bson::to_bson(value)?.into_relaxed_extjson();
        let text = serde_json::to_string_pretty(&value)?;
        writeln!(self.out, "{}", text)?;
        Ok(())
    }

    /// One item per line, each indented under the step label.
    pub fn list<I>(&mut self, items: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Display,
    {
        for item in items {
            writeln!(self.out, "  {}", item)?;
        }
        Ok(())
    }

    pub fn error(&mut self, err: impl Display) -> Result<()> {
        writeln!(self.err, "Error: {}", err)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        self.err.flush()?;
        Ok(())
    }

}
