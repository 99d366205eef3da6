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

//! # Convertible Core
//!
//! The core of the Convertible object-field mapping engine. Given two hosts
//! of possibly different types, it reads a value out of one through an
//! accessor, converts it, and writes it into the other. It can also tell
//! whether both sides are equal under the same rules.
//!
//! ## Architecture
//!
//! The core library is organized into several key modules:
//!
//! - **`source`**: Directions and value handles (`Borrowed` / `Moved`)
//! - **`converter`**: Bidirectional scalar converters
//! - **`reader`**: Accessors reaching into a host (field, index, deref, maybe)
//! - **`adapter`**: Readers bound to an optional prototype host, and their composition
//! - **`operator`**: The Assign and Equal operators over scalars and containers
//! - **`mapping`**: Two adapters and a converter
//! - **`mapping_table`**: Type-erased sets of mappings spanning several host pairs
//! - **`buffer`**: Byte buffers for the packed converter
//! - **`config`**: Table configuration
//! - **`error`**: Error handling and result types
//!
//! ## Key Concepts
//!
//! ### Direction
//!
//! Every operation runs from one host to the other: left to right
//! (`assign_right`, `equal_right`) or right to left (`assign_left`,
//! `equal_left`). Runtime [`Direction`] values select the same entry points.
//!
//! ### Move semantics
//!
//! Sources are passed either borrowed (copied from) or wrapped with
//! [`moved`] (taken from, leaving the source's owning leaves at their
//! default; plain values such as numbers are copied).
//! Containers pass the mode on to each element.
//!
//! ### Containers
//!
//! Converters only ever see scalar leaves. Sequences, maps, sets and
//! optionals around those leaves are walked by the operators, so a
//! converter for `i32 <-> String` also converts `Vec<Option<i32>>` to
//! `Vec<Option<String>>`.
//!
//! ## Usage
//!
//! ```rust
//! use convertible_core::converter::Parse;
//! use convertible_core::field;
//! use convertible_core::mapping::Mapping;
//! use convertible_core::mapping_table::MappingTable;
//!
//! #[derive(Clone, Debug, Default, PartialEq)]
//! struct Settings {
//!     retries: u8,
//!     hosts: Vec<String>,
//! }
//!
//! #[derive(Clone, Debug, Default, PartialEq)]
//! struct SettingsForm {
//!     retries: String,
//!     hosts: Vec<String>,
//! }
//!
//! let table = MappingTable::new()
//!     .with(Mapping::with_converter(
//!         field!(Settings, retries),
//!         field!(SettingsForm, retries),
//!         Parse::or(3u8),
//!     ))
//!     .with(Mapping::new(field!(Settings, hosts), field!(SettingsForm, hosts)));
//!
//! let form = SettingsForm {
//!     retries: "many".into(),
//!     hosts: vec!["a".into(), "b".into()],
//! };
//! let settings: Settings = table.to_left(&form).unwrap();
//! assert_eq!(settings.retries, 3);
//! assert_eq!(settings.hosts.len(), 2);
//! ```

pub mod adapter;
pub mod buffer;
pub mod config;
pub mod converter;
pub mod error;
pub mod mapping;
pub mod mapping_table;
pub mod operator;
pub mod reader;
pub mod source;

pub use adapter::Adapter;
pub use buffer::ByteBuffer;
pub use config::Config;
pub use converter::{Converter, Identity};
pub use error::Error;
pub use mapping::Mapping;
pub use mapping_table::{Defaults, MappingTable, TableRef};
pub use operator::{Assign, Equal};
pub use source::{moved, Direction, Source};
