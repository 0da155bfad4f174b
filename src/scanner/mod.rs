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


use serde::Serialize;

/// Flat summary produced by [`scan`]. The scanner has no concept of
/// nesting, so a `title:` or `version:` at any depth lands here and later
/// occurrences overwrite earlier ones.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct FlatScanResult {
    pub openapi: Option<String>,
    pub title: Option<String>,
    pub version: Option<String>,
    /// Number of `/` characters anywhere in the raw text. A crude proxy
    /// for path count, not a count of OpenAPI path templates.
    pub path_count: usize,
}

/// Scans raw text line by line without parsing YAML. Captures the values
/// of `openapi`, `title` and `version` from `key: value` lines, skipping
/// blank lines, `#` comments and lines without a `:`.
pub fn scan(raw: &str) -> FlatScanResult {
    let mut result = FlatScanResult {
        path_count: raw.matches('/').count(),
        ..FlatScanResult::default()
    };

    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        // Split on the first ':' only; "title: a: b" keeps "a: b" whole.
        if let Some((key, value)) = line.split_once(':') {
            let value = value.trim();
            match key.trim() {
                "openapi" => result.openapi = Some(value.to_string()),
                "title" => result.title = Some(value.to_string()),
                "version" => result.version = Some(value.to_string()),
                _ => {}
            }
        }
    }

    result
}
