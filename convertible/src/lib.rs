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

//! # Convertible
//!
//! Convertible is a bidirectional object-field mapping engine. A mapping
//! pairs an accessor into a left host with an accessor into a right host
//! and a converter between the two values; it can copy or move the value
//! in either direction and tell whether both sides agree.
//!
//! ## Key Features
//!
//! - **Direction-aware**: every assign and equal runs left to right or right to left
//! - **Move semantics**: sources are borrowed or moved, element by element
//! - **Container recursion**: converters only handle scalars, the operators
//!   walk `Vec`, arrays, `VecDeque`, maps, sets, `Option`, `Box`, `Rc`, `Arc`
//!   and tuples around them
//! - **Mapping tables**: many mappings over several host-type pairs, usable
//!   as converters themselves, including self-referential schemas
//! - **Type safety**: accessor composition and mapping capabilities are
//!   checked at compile time
//!
//! ## Accessors
//!
//! Adapters reach a target value inside a host. They are built from
//! readers and composed right to left, like functions:
//!
//! ```rust
//! use convertible::adapter::{index, maybe};
//! use convertible::{compose, field};
//!
//! #[derive(Clone, Default)]
//! struct Inventory {
//!     shelves: Vec<Option<String>>,
//! }
//!
//! let second = compose!(maybe(), index(1usize), field!(Inventory, shelves));
//! let mut inventory = Inventory::default();
//! *second.write(&mut inventory).unwrap() = "bolts".to_string();
//! assert_eq!(inventory.shelves, vec![None, Some("bolts".to_string())]);
//! ```
//!
//! ## Mappings
//!
//! ```rust
//! use convertible::converter::Parse;
//! use convertible::{field, Direction, Mapping};
//!
//! #[derive(Clone, Debug, Default, PartialEq)]
//! struct Order {
//!     quantities: Vec<u32>,
//! }
//!
//! #[derive(Clone, Debug, Default, PartialEq)]
//! struct OrderForm {
//!     quantities: Vec<String>,
//! }
//!
//! # fn main() -> Result<(), convertible::Error> {
//! let map = Mapping::with_converter(
//!     field!(Order, quantities),
//!     field!(OrderForm, quantities),
//!     Parse::<u32>::strict(),
//! );
//!
//! let mut order = Order { quantities: vec![1, 20] };
//! let mut form = OrderForm::default();
//! map.assign(Direction::LeftToRight, &mut order, &mut form)?;
//! assert_eq!(form.quantities, vec!["1", "20"]);
//! assert!(map.equal(Direction::LeftToRight, &order, &form)?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Recursive Tables
//!
//! A table can refer to itself through the handle passed to
//! [`MappingTable::recursive`]. Host types that a table converts as a whole
//! are marked with `#[derive(Scalar)]`.
//!
//! ```rust
//! use convertible::converter::Parse;
//! use convertible::{field, Mapping, MappingTable, Scalar};
//!
//! #[derive(Scalar, Clone, Debug, Default, PartialEq)]
//! struct Node {
//!     value: i32,
//!     next: Option<Box<Node>>,
//! }
//!
//! #[derive(Scalar, Clone, Debug, Default, PartialEq)]
//! struct Item {
//!     value: String,
//!     next: Option<Box<Item>>,
//! }
//!
//! # fn main() -> Result<(), convertible::Error> {
//! let table = MappingTable::new().recursive(|this, table| {
//!     table
//!         .with(Mapping::with_converter(
//!             field!(Node, value),
//!             field!(Item, value),
//!             Parse::<i32>::strict(),
//!         ))
//!         .with(Mapping::with_converter(field!(Node, next), field!(Item, next), this))
//! });
//!
//! let list = Node {
//!     value: 1,
//!     next: Some(Box::new(Node { value: 2, next: None })),
//! };
//! let items: Item = table.to_right(&list)?;
//! assert_eq!(items.value, "1");
//! assert_eq!(items.next.as_ref().map(|n| n.value.as_str()), Some("2"));
//! assert!(table.equal_right(&list, &items)?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Operations return `Result<_, Error>`. Length mismatches, absent optionals
//! and partial key overlap are policy, not errors; errors come from
//! converters (parse failures, checked casts), byte-range overflows, index
//! writes past fixed arrays, and tables asked for host pairs they do not map.

pub use convertible_core::{
    adapter, bail, buffer, compose, config, converter, ensure, error, field, impl_scalar, mapping,
    mapping_table, operator, reader, source,
};
pub use convertible_core::{
    moved, Adapter, Assign, ByteBuffer, Config, Converter, Defaults, Direction, Equal, Error,
    Identity, Mapping, MappingTable, Source, TableRef,
};
pub use convertible_derive::Scalar;
