// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::borrow::Cow;

/// Configuration for a [`MappingTable`](crate::mapping_table::MappingTable).
///
/// A table owns its config; extended tables inherit the config of their base.
#[derive(Clone, Debug)]
pub struct Config {
    /// Name used in log events emitted by the table.
    pub label: Cow<'static, str>,
    /// Whether a host pair without any applicable mapping is accepted.
    /// When disabled such pairs fail with [`Error::NoMapping`](crate::error::Error::NoMapping);
    /// when enabled assign is a no-op and equal holds vacuously.
    pub allow_unmatched: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            label: Cow::Borrowed("mapping_table"),
            allow_unmatched: false,
        }
    }
}

impl Config {
    /// Creates a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the label used in log events.
    #[inline(always)]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Check if unmatched host pairs are accepted.
    #[inline(always)]
    pub fn is_allow_unmatched(&self) -> bool {
        self.allow_unmatched
    }
}
