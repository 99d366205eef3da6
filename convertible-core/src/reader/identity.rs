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

/// The host itself.
pub struct Identity<T>(PhantomData<fn() -> T>);

impl<T> Identity<T> {
    pub fn new() -> Self {
        Identity(PhantomData)
    }
}

impl<T> Default for Identity<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Identity<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Identity<T> {}

impl<T> fmt::Debug for Identity<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Identity<{}>", std::any::type_name::<T>())
    }
}

impl<T> Reader for Identity<T> {
    type Host = T;
    type Target = T;

    #[inline(always)]
    fn get<'a>(&self, host: &'a T) -> Option<&'a T> {
        Some(host)
    }

    #[inline(always)]
    fn get_mut<'a>(&self, host: &'a mut T) -> Option<&'a mut T> {
        Some(host)
    }

    #[inline(always)]
    fn write<'a>(&self, host: &'a mut T) -> Result<&'a mut T, Error> {
        Ok(host)
    }
}
