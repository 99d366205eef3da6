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

//! A mapping binds a left adapter, a right adapter and a converter.
//!
//! ```rust
//! use convertible_core::converter::Parse;
//! use convertible_core::field;
//! use convertible_core::mapping::Mapping;
//!
//! #[derive(Clone, Debug, Default, PartialEq)]
//! struct Row {
//!     id: i64,
//! }
//!
//! #[derive(Clone, Debug, Default, PartialEq)]
//! struct Form {
//!     id: String,
//! }
//!
//! let map = Mapping::with_converter(field!(Row, id), field!(Form, id), Parse::or(-1i64));
//! let form = map.to_right(&Row { id: 7 }).unwrap();
//! assert_eq!(form.id, "7");
//! let row = map.to_left(&Form { id: "oops".into() }).unwrap();
//! assert_eq!(row.id, -1);
//! ```

use std::any::type_name;
use std::fmt;

use crate::adapter::Adapter;
use crate::converter::{Converter, Identity};
use crate::error::Error;
use crate::operator::{Assign, Equal};
use crate::reader::Reader;
use crate::source::{Direction, Source, ToLeft, ToRight};

pub struct Mapping<LR: Reader, RR: Reader, C = Identity> {
    lhs: Adapter<LR>,
    rhs: Adapter<RR>,
    converter: C,
}

impl<LR: Reader, RR: Reader> Mapping<LR, RR, Identity> {
    pub fn new(lhs: Adapter<LR>, rhs: Adapter<RR>) -> Self {
        Self::with_converter(lhs, rhs, Identity)
    }
}

impl<LR: Reader, RR: Reader, C> Mapping<LR, RR, C> {
    pub fn with_converter(lhs: Adapter<LR>, rhs: Adapter<RR>, converter: C) -> Self {
        Mapping {
            lhs,
            rhs,
            converter,
        }
    }

    #[inline(always)]
    pub fn lhs(&self) -> &Adapter<LR> {
        &self.lhs
    }

    #[inline(always)]
    pub fn rhs(&self) -> &Adapter<RR> {
        &self.rhs
    }

    #[inline(always)]
    pub fn converter(&self) -> &C {
        &self.converter
    }

    /// Copies (or moves) the left target into the right one. Skipped when
    /// the left target is absent; the right target is created if needed.
    pub fn assign_right<'a>(
        &self,
        lhs: impl Into<Source<'a, LR::Host>>,
        rhs: &mut RR::Host,
    ) -> Result<(), Error>
    where
        LR::Host: 'a,
        RR::Target: Assign<LR::Target, C, ToRight>,
    {
        let Some(src) = self.lhs.view(lhs.into()) else {
            tracing::debug!(
                host = type_name::<LR::Host>(),
                direction = %Direction::LeftToRight,
                "source disabled, assign skipped"
            );
            return Ok(());
        };
        self.rhs.write(rhs)?.assign_from(src, &self.converter)
    }

    /// Copies (or moves) the right target into the left one.
    pub fn assign_left<'a>(
        &self,
        lhs: &mut LR::Host,
        rhs: impl Into<Source<'a, RR::Host>>,
    ) -> Result<(), Error>
    where
        RR::Host: 'a,
        LR::Target: Assign<RR::Target, C, ToLeft>,
    {
        let Some(src) = self.rhs.view(rhs.into()) else {
            tracing::debug!(
                host = type_name::<RR::Host>(),
                direction = %Direction::RightToLeft,
                "source disabled, assign skipped"
            );
            return Ok(());
        };
        self.lhs.write(lhs)?.assign_from(src, &self.converter)
    }

    pub fn assign(
        &self,
        direction: Direction,
        lhs: &mut LR::Host,
        rhs: &mut RR::Host,
    ) -> Result<(), Error>
    where
        RR::Target: Assign<LR::Target, C, ToRight>,
        LR::Target: Assign<RR::Target, C, ToLeft>,
    {
        match direction {
            Direction::LeftToRight => self.assign_right(&*lhs, rhs),
            Direction::RightToLeft => self.assign_left(lhs, &*rhs),
        }
    }

    /// Whether the right target equals the converted left target.
    ///
    /// Two absent targets are equal, one absent target never is.
    pub fn equal_right(&self, lhs: &LR::Host, rhs: &RR::Host) -> Result<bool, Error>
    where
        RR::Target: Equal<LR::Target, C, ToRight>,
    {
        match (self.lhs.get(lhs), self.rhs.get(rhs)) {
            (Some(l), Some(r)) => r.equal_to(l, &self.converter),
            (None, None) => Ok(true),
            _ => Ok(false),
        }
    }

    /// Whether the left target equals the converted right target.
    pub fn equal_left(&self, lhs: &LR::Host, rhs: &RR::Host) -> Result<bool, Error>
    where
        LR::Target: Equal<RR::Target, C, ToLeft>,
    {
        match (self.lhs.get(lhs), self.rhs.get(rhs)) {
            (Some(l), Some(r)) => l.equal_to(r, &self.converter),
            (None, None) => Ok(true),
            _ => Ok(false),
        }
    }

    pub fn equal(&self, direction: Direction, lhs: &LR::Host, rhs: &RR::Host) -> Result<bool, Error>
    where
        RR::Target: Equal<LR::Target, C, ToRight>,
        LR::Target: Equal<RR::Target, C, ToLeft>,
    {
        match direction {
            Direction::LeftToRight => self.equal_right(lhs, rhs),
            Direction::RightToLeft => self.equal_left(lhs, rhs),
        }
    }

    /// A fresh right host filled from `lhs`.
    pub fn to_right<'a>(&self, lhs: impl Into<Source<'a, LR::Host>>) -> Result<RR::Host, Error>
    where
        LR::Host: 'a,
        RR::Host: Clone + Default,
        RR::Target: Assign<LR::Target, C, ToRight>,
    {
        let mut rhs = self.defaulted_rhs();
        self.assign_right(lhs, &mut rhs)?;
        Ok(rhs)
    }

    /// A fresh left host filled from `rhs`.
    pub fn to_left<'a>(&self, rhs: impl Into<Source<'a, RR::Host>>) -> Result<LR::Host, Error>
    where
        RR::Host: 'a,
        LR::Host: Clone + Default,
        LR::Target: Assign<RR::Target, C, ToLeft>,
    {
        let mut lhs = self.defaulted_lhs();
        self.assign_left(&mut lhs, rhs)?;
        Ok(lhs)
    }

    #[inline(always)]
    pub fn defaulted_lhs(&self) -> LR::Host
    where
        LR::Host: Clone + Default,
    {
        self.lhs.defaulted()
    }

    #[inline(always)]
    pub fn defaulted_rhs(&self) -> RR::Host
    where
        RR::Host: Clone + Default,
    {
        self.rhs.defaulted()
    }
}

/// A mapping converts whole hosts, which lets it serve as the converter of
/// another mapping one level up.
impl<LR, RR, C> Converter<LR::Host, RR::Host> for Mapping<LR, RR, C>
where
    LR: Reader,
    RR: Reader,
    RR::Target: Assign<LR::Target, C, ToRight> + Equal<LR::Target, C, ToRight>,
    LR::Target: Assign<RR::Target, C, ToLeft> + Equal<RR::Target, C, ToLeft>,
{
    #[inline(always)]
    fn assign_to_right(&self, src: Source<'_, LR::Host>, dst: &mut RR::Host) -> Result<(), Error> {
        self.assign_right(src, dst)
    }

    #[inline(always)]
    fn assign_to_left(&self, src: Source<'_, RR::Host>, dst: &mut LR::Host) -> Result<(), Error> {
        self.assign_left(dst, src)
    }

    #[inline(always)]
    fn equal_to_right(&self, src: &LR::Host, dst: &RR::Host) -> Result<bool, Error> {
        self.equal_right(src, dst)
    }

    #[inline(always)]
    fn equal_to_left(&self, src: &RR::Host, dst: &LR::Host) -> Result<bool, Error> {
        self.equal_left(dst, src)
    }
}

impl<LR, RR, C> Clone for Mapping<LR, RR, C>
where
    LR: Reader + Clone,
    RR: Reader + Clone,
    LR::Host: Clone,
    RR::Host: Clone,
    C: Clone,
{
    fn clone(&self) -> Self {
        Mapping {
            lhs: self.lhs.clone(),
            rhs: self.rhs.clone(),
            converter: self.converter.clone(),
        }
    }
}

impl<LR, RR, C> fmt::Debug for Mapping<LR, RR, C>
where
    LR: Reader + fmt::Debug,
    RR: Reader + fmt::Debug,
    C: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mapping")
            .field("lhs", &self.lhs)
            .field("rhs", &self.rhs)
            .field("converter", &self.converter)
            .finish()
    }
}
