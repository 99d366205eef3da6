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

use std::fmt;

use crate::error::Error;
use crate::reader::Reader;

/// A member of a host struct, reached through a pair of projections.
///
/// Usually built with the [`field!`](crate::field) macro; any pair of
/// non-capturing projections works, which also covers computed paths.
pub struct Field<H, T> {
    name: &'static str,
    get: fn(&H) -> &T,
    get_mut: fn(&mut H) -> &mut T,
}

impl<H, T> Field<H, T> {
    pub fn new(name: &'static str, get: fn(&H) -> &T, get_mut: fn(&mut H) -> &mut T) -> Self {
        Field { name, get, get_mut }
    }

    #[inline(always)]
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<H, T> Clone for Field<H, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H, T> Copy for Field<H, T> {}

impl<H, T> fmt::Debug for Field<H, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", std::any::type_name::<H>(), self.name)
    }
}

impl<H, T> Reader for Field<H, T> {
    type Host = H;
    type Target = T;

    #[inline(always)]
    fn get<'a>(&self, host: &'a H) -> Option<&'a T> {
        Some((self.get)(host))
    }

    #[inline(always)]
    fn get_mut<'a>(&self, host: &'a mut H) -> Option<&'a mut T> {
        Some((self.get_mut)(host))
    }

    #[inline(always)]
    fn write<'a>(&self, host: &'a mut H) -> Result<&'a mut T, Error> {
        Ok((self.get_mut)(host))
    }
}
