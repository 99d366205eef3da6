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

use crate::error::Error;
use crate::operator::{Assign, Equal};
use crate::source::Source;

/// `None` clears the destination; `Some` fills it, starting from `Default`
/// when the destination was empty.
impl<T, U, C, D> Assign<Option<U>, C, D> for Option<T>
where
    T: Assign<U, C, D> + Default,
{
    fn assign_from(&mut self, src: Source<'_, Option<U>>, converter: &C) -> Result<(), Error> {
        match src.try_map(Option::as_ref, Option::as_mut) {
            Some(inner) => self
                .get_or_insert_with(T::default)
                .assign_from(inner, converter),
            None => {
                *self = None;
                Ok(())
            }
        }
    }
}

impl<T, U, C, D> Equal<Option<U>, C, D> for Option<T>
where
    T: Equal<U, C, D>,
{
    fn equal_to(&self, src: &Option<U>, converter: &C) -> Result<bool, Error> {
        match (self, src) {
            (Some(dst), Some(src)) => dst.equal_to(src, converter),
            (None, None) => Ok(true),
            _ => Ok(false),
        }
    }
}
