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

//! # Convertible Derive Macros
//!
//! This crate provides procedural macros for the Convertible mapping engine.
//!
//! ## Available Macros
//!
//! ### `#[derive(Scalar)]`
//!
//! Marks a type as a scalar leaf of the Assign and Equal operators: when a
//! value of this type is assigned or compared, it is handed to the converter
//! as a whole instead of being walked like a container.
//!
//! Use it on every user type that a converter (a custom converter, a
//! `Mapping` or a `MappingTable`) should receive directly, in particular
//! the hosts of nested and recursive mappings.
//!
//! **Example:**
//! ```rust
//! use convertible_core::converter::Identity;
//! use convertible_core::operator::assign_right;
//! use convertible_derive::Scalar;
//!
//! #[derive(Scalar, Clone, Debug, Default, PartialEq)]
//! struct Meters(u32);
//!
//! #[derive(Scalar, Clone, Debug, Default, PartialEq)]
//! struct Tagged<T> {
//!     tag: T,
//! }
//!
//! let mut dst = vec![Meters(0)];
//! assign_right(&vec![Meters(4), Meters(2)], &mut dst, &Identity).unwrap();
//! assert_eq!(dst, vec![Meters(4), Meters(2)]);
//!
//! let mut tagged = Tagged { tag: 0u8 };
//! assign_right(&Tagged { tag: 9u8 }, &mut tagged, &Identity).unwrap();
//! assert_eq!(tagged.tag, 9);
//! ```
//!
//! ## Generated Code
//!
//! For a type `T<G>` the macro generates
//! `impl<G, Src, C, D> Assign<Src, C, D> for T<G> where C: Convert<T<G>, Src, D>`
//! and the matching `Equal` impl, keeping the type's own bounds.

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod scalar;

/// Derive macro marking a type as a scalar leaf.
///
/// # Example
///
/// ```rust
/// use convertible_derive::Scalar;
///
/// #[derive(Scalar, Clone, Default, PartialEq)]
/// struct Celsius(i16);
/// ```
#[proc_macro_derive(Scalar)]
pub fn proc_macro_derive_scalar(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    scalar::derive_scalar(&input).into()
}
