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

use std::any::{type_name, Any, TypeId};

use crate::error::Error;
use crate::mapping::Mapping;
use crate::operator::{Assign, Equal};
use crate::reader::Reader;
use crate::source::{Source, ToLeft, ToRight};

/// A mapping with its host types erased, as stored by a
/// [`MappingTable`](super::MappingTable).
///
/// Implemented for every [`Mapping`] whose targets can be assigned and
/// compared in both directions and whose parts are thread-safe. A mapping
/// that lacks any of these capabilities is rejected when it is added to a
/// table, at compile time.
pub trait ErasedMapping: Send + Sync {
    fn lhs_type(&self) -> TypeId;

    fn rhs_type(&self) -> TypeId;

    fn lhs_type_name(&self) -> &'static str;

    fn rhs_type_name(&self) -> &'static str;

    fn dyn_assign_right(&self, lhs: Source<'_, dyn Any>, rhs: &mut dyn Any) -> Result<(), Error>;

    fn dyn_assign_left(&self, lhs: &mut dyn Any, rhs: Source<'_, dyn Any>) -> Result<(), Error>;

    fn dyn_equal_right(&self, lhs: &dyn Any, rhs: &dyn Any) -> Result<bool, Error>;

    fn dyn_equal_left(&self, lhs: &dyn Any, rhs: &dyn Any) -> Result<bool, Error>;

    fn dyn_defaulted_lhs(&self) -> Box<dyn Any>;

    fn dyn_defaulted_rhs(&self) -> Box<dyn Any>;
}

impl<LR, RR, C> Mapping<LR, RR, C>
where
    LR: Reader,
    RR: Reader,
{
    #[cold]
    fn mismatch(&self) -> Error {
        Error::no_mapping(type_name::<LR::Host>(), type_name::<RR::Host>())
    }
}

impl<LR, RR, C> ErasedMapping for Mapping<LR, RR, C>
where
    LR: Reader + Send + Sync + 'static,
    RR: Reader + Send + Sync + 'static,
    LR::Host: Clone + Default + Send + Sync + 'static,
    RR::Host: Clone + Default + Send + Sync + 'static,
    C: Send + Sync + 'static,
    RR::Target: Assign<LR::Target, C, ToRight> + Equal<LR::Target, C, ToRight>,
    LR::Target: Assign<RR::Target, C, ToLeft> + Equal<RR::Target, C, ToLeft>,
{
    #[inline(always)]
    fn lhs_type(&self) -> TypeId {
        TypeId::of::<LR::Host>()
    }

    #[inline(always)]
    fn rhs_type(&self) -> TypeId {
        TypeId::of::<RR::Host>()
    }

    fn lhs_type_name(&self) -> &'static str {
        type_name::<LR::Host>()
    }

    fn rhs_type_name(&self) -> &'static str {
        type_name::<RR::Host>()
    }

    fn dyn_assign_right(&self, lhs: Source<'_, dyn Any>, rhs: &mut dyn Any) -> Result<(), Error> {
        match (lhs.downcast::<LR::Host>(), rhs.downcast_mut::<RR::Host>()) {
            (Some(lhs), Some(rhs)) => self.assign_right(lhs, rhs),
            _ => Err(self.mismatch()),
        }
    }

    fn dyn_assign_left(&self, lhs: &mut dyn Any, rhs: Source<'_, dyn Any>) -> Result<(), Error> {
        match (lhs.downcast_mut::<LR::Host>(), rhs.downcast::<RR::Host>()) {
            (Some(lhs), Some(rhs)) => self.assign_left(lhs, rhs),
            _ => Err(self.mismatch()),
        }
    }

    fn dyn_equal_right(&self, lhs: &dyn Any, rhs: &dyn Any) -> Result<bool, Error> {
        match (lhs.downcast_ref::<LR::Host>(), rhs.downcast_ref::<RR::Host>()) {
            (Some(lhs), Some(rhs)) => self.equal_right(lhs, rhs),
            _ => Err(self.mismatch()),
        }
    }

    fn dyn_equal_left(&self, lhs: &dyn Any, rhs: &dyn Any) -> Result<bool, Error> {
        match (lhs.downcast_ref::<LR::Host>(), rhs.downcast_ref::<RR::Host>()) {
            (Some(lhs), Some(rhs)) => self.equal_left(lhs, rhs),
            _ => Err(self.mismatch()),
        }
    }

    fn dyn_defaulted_lhs(&self) -> Box<dyn Any> {
        Box::new(self.defaulted_lhs())
    }

    fn dyn_defaulted_rhs(&self) -> Box<dyn Any> {
        Box::new(self.defaulted_rhs())
    }
}
