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

use serde::{Deserialize, Serialize};
use serde_yaml::Mapping;
use std::str::FromStr;

/// Loads a document into an untyped root mapping. The structural checks
/// only look at presence and shape of top-level sections, so no typed
/// OpenAPI model is needed here.
pub fn yaml(contents: &str) -> Result<Mapping, serde_yaml::Error> {
    serde_yaml::from_str(contents)
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "lowercase"))]
pub enum Method {
    Get,
    Head,
    Post,
    Put,
    Delete,
    Connect,
    Patch,
    Options,
    Trace,
}

impl Method {
    /// The methods counted as endpoints: GET, POST, PUT, DELETE and PATCH.
    /// HEAD, OPTIONS and the rest are recognized but not counted.
    pub fn is_endpoint(&self) -> bool {
        matches!(
            self,
            Method::Get | Method::Post | Method::Put | Method::Delete | Method::Patch
        )
    }
}

impl FromStr for Method {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "GET" => Ok(Method::Get),
            "HEAD" => Ok(Method::Head),
            "POST" => Ok(Method::Post),
            "PUT" => Ok(Method::Put),
            "DELETE" => Ok(Method::Delete),
            "CONNECT" => Ok(Method::Connect),
            "PATCH" => Ok(Method::Patch),
            "OPTIONS" => Ok(Method::Options),
            "TRACE" => Ok(Method::Trace),
            _ => Err(format!("Invalid method: {}", s)),
        }
    }
}
