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

//! Accessors: how to reach a target value inside a host.
//!
//! A [`Reader`] never copies. It hands out a shared view for reads and
//! comparisons, a mutable view for moves, and on writes it may materialize
//! a target that does not exist yet (a missing optional, an index past the
//! end of a vector, a null pointer). A read that finds nothing marks the
//! adapter as disabled for that host.

use crate::error::Error;

mod deref;
mod field;
mod identity;
mod index;
mod maybe;

pub use deref::{Deref, Pointer};
pub use field::Field;
pub use identity::Identity;
pub use index::{Index, Indexed};
pub use maybe::Maybe;

pub trait Reader {
    type Host;
    type Target;

    /// Shared view of the target, `None` when it is absent.
    fn get<'a>(&self, host: &'a Self::Host) -> Option<&'a Self::Target>;

    /// Mutable view of the target, `None` when it is absent.
    fn get_mut<'a>(&self, host: &'a mut Self::Host) -> Option<&'a mut Self::Target>;

    /// Mutable view of the target, creating it first when absent.
    fn write<'a>(&self, host: &'a mut Self::Host) -> Result<&'a mut Self::Target, Error>;
}

/// Applies `A`, then `B` on the result of `A`.
///
/// The intermediate target must own its data: borrows handed out by `A`
/// only live as long as the outer host.
#[derive(Clone, Copy, Debug, Default)]
pub struct Compose<A, B>(pub A, pub B);

impl<A, B> Reader for Compose<A, B>
where
    A: Reader,
    A::Target: 'static,
    B: Reader<Host = A::Target>,
{
    type Host = A::Host;
    type Target = B::Target;

    #[inline(always)]
    fn get<'a>(&self, host: &'a Self::Host) -> Option<&'a Self::Target> {
        self.0.get(host).and_then(|inner| self.1.get(inner))
    }

    #[inline(always)]
    fn get_mut<'a>(&self, host: &'a mut Self::Host) -> Option<&'a mut Self::Target> {
        self.0.get_mut(host).and_then(|inner| self.1.get_mut(inner))
    }

    #[inline(always)]
    fn write<'a>(&self, host: &'a mut Self::Host) -> Result<&'a mut Self::Target, Error> {
        self.1.write(self.0.write(host)?)
    }
}
