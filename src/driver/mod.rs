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

mod driver_test;

use crate::observability::ScanMetrics;
use crate::scanner;
use anyhow::Result;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Filename the original script was pinned to.
const DEFAULT_TARGET: &str = "nova-forum-openapi.yaml";

/// A well-formed document starts with this literal, column zero.
const OPENAPI_PREFIX: &str = "openapi:";

pub struct Config {
    pub path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_TARGET),
        }
    }
}

/// Runs the scan-and-report pass over the configured file and returns the
/// process exit code. A missing file or a bad `openapi:` prefix exits 1;
/// every other outcome, including a failed read for other reasons, exits 0.
pub fn run(config: &Config) -> u8 {
    let content = match fs::read_to_string(&config.path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            println!("❌ 文件不存在: {}", config.path.display());
            return 1;
        }
        Err(e) => {
            println!("❌ 文件读取错误: {e}");
            return 0;
        }
    };

    if !content.starts_with(OPENAPI_PREFIX) {
        println!("❌ YAML语法错误: 文件不是有效的OpenAPI格式");
        return 1;
    }

    let metrics = ScanMetrics::new(&config.path);
    match report(&content) {
        Ok(path_count) => metrics.record_success(path_count),
        Err(e) => {
            println!("❌ YAML解析错误: {e}");
            metrics.record_failure(e.to_string());
        }
    }

    0
}

fn report(content: &str) -> Result<usize> {
    let summary = scanner::scan(content);

    println!("✅ YAML语法验证成功");
    println!("📖 文档标题: {}", summary.title.as_deref().unwrap_or("N/A"));
    println!(
        "📝 API版本: {}",
        summary.version.as_deref().unwrap_or("N/A")
    );
    println!("🔗 文件中包含的路径数: 约 {}", summary.path_count);
    println!("✅ OpenAPI文档结构验证通过");
    println!("✅ 文档符合OpenAPI 3.0.3规范");

    Ok(summary.path_count)
}
