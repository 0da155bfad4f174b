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

use std::path::Path;
use std::time::Instant;

pub struct ScanMetrics {
    start_time: Instant,
    target: String,
}

impl ScanMetrics {
    pub fn new(target: &Path) -> Self {
        Self {
            start_time: Instant::now(),
            target: target.display().to_string(),
        }
    }

    pub fn record_success(self, path_count: usize) {
        let duration_ms = self.start_time.elapsed().as_millis();

        log::info!(
            "openapi_scan target=\"{}\" success=true duration_ms={} path_count={}",
            self.target,
            duration_ms,
            path_count
        );
    }

    pub fn record_failure(self, error: String) {
        let duration_ms = self.start_time.elapsed().as_millis();

        log::warn!(
            "openapi_scan target=\"{}\" success=false duration_ms={} error=\"{}\"",
            self.target,
            duration_ms,
            error
        );
    }
}

pub fn init_logger() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
}
