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
use std::marker::PhantomData;

use crate::error::Error;
use crate::reader::Reader;

/// The value inside an `Option`; absent when the option is `None`.
///
/// Writing into `None` inserts `T::default()` first.
pub struct Maybe<T>(PhantomData<fn() -> T>);

impl<T> Maybe<T> {
    pub fn new() -> Self {
        Maybe(PhantomData)
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Maybe<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Maybe<T> {}

impl<T> fmt::Debug for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Maybe<{}>", std::any::type_name::<T>())
    }
}

impl<T: Default> Reader for Maybe<T> {
    type Host = Option<T>;
    type Target = T;

    #[inline(always)]
    fn get<'a>(&self, host: &'a Option<T>) -> Option<&'a T> {
        host.as_ref()
    }

    #[inline(always)]
    fn get_mut<'a>(&self, host: &'a mut Option<T>) -> Option<&'a mut T> {
        host.as_mut()
    }

    #[inline(always)]
    fn write<'a>(&self, host: &'a mut Option<T>) -> Result<&'a mut T, Error> {
        Ok(host.get_or_insert_with(T::default))
    }
}
