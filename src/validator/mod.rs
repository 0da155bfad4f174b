/*
 * Licensed to the Apache Software Foundation (ASF) under one or more
 * contributor license agreements.  See the NOTICE file distributed with
 * this work for additional information regarding copyright ownership.
 * The ASF licenses this file to You under the Apache License, Version 2.0
 * (the "License"); you may not use this file except in compliance with
 * the License.  You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

mod counter_test;

use crate::model::parse::Method;
use anyhow::{Context, Result};
use serde_yaml::{Mapping, Value};
use std::str::FromStr;

/// Root-level keys every document must carry, in check order. The first
/// missing key is the one reported.
const REQUIRED_ROOT_KEYS: [&str; 4] = ["openapi", "info", "paths", "components"];

/// Outcome of a structural check: a pass/fail flag plus one diagnostic
/// message. Validation never raises; callers decide what to do with a
/// failed verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub ok: bool,
    pub message: String,
}

impl Validation {
    fn pass(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }

    fn fail(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }
}

/// Checks the top-level structure of a parsed document: required root
/// keys, a 3.x version string, `title`/`version` under `info`, and
/// mapping-shaped `paths`, `components` and `securitySchemes` sections.
/// Nothing below those levels is inspected.
pub fn validate(doc: &Mapping) -> Validation {
    match validate_structure(doc) {
        Ok(verdict) => verdict,
        Err(e) => Validation::fail(format!("validation error: {e}")),
    }
}

fn validate_structure(doc: &Mapping) -> Result<Validation> {
    for key in REQUIRED_ROOT_KEYS {
        if doc.get(key).is_none() {
            return Ok(Validation::fail(format!(
                "missing required root-level key: {key}"
            )));
        }
    }

    let version = doc.get("openapi").and_then(Value::as_str).unwrap_or("");
    if !version.starts_with("3.") {
        return Ok(Validation::fail("unsupported OpenAPI version"));
    }

    let info = doc
        .get("info")
        .and_then(Value::as_mapping)
        .context("info is not a mapping")?;
    if info.get("title").is_none() || info.get("version").is_none() {
        return Ok(Validation::fail("info section missing title or version"));
    }

    if doc.get("paths").and_then(Value::as_mapping).is_none() {
        return Ok(Validation::fail("paths must be an object"));
    }

    let components = match doc.get("components").and_then(Value::as_mapping) {
        Some(components) => components,
        None => return Ok(Validation::fail("components must be an object")),
    };

    // securitySchemes defaults to an empty mapping when absent.
    if let Some(schemes) = components.get("securitySchemes") {
        if schemes.as_mapping().is_none() {
            return Ok(Validation::fail("securitySchemes must be an object"));
        }
    }

    Ok(Validation::pass("validation passed"))
}

/// Counts operations under a `paths` mapping whose method name, compared
/// case-insensitively, is one of GET, POST, PUT, DELETE or PATCH. Unknown
/// inner keys and non-mapping path items are skipped.
pub fn count_endpoints(paths: &Mapping) -> usize {
    paths
        .values()
        .filter_map(Value::as_mapping)
        .flat_map(Mapping::keys)
        .filter_map(Value::as_str)
        .filter_map(|name| Method::from_str(name).ok())
        .filter(Method::is_endpoint)
        .count()
}
