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

use std::collections::VecDeque;

use crate::error::Error;
use crate::operator::{assign_sequence, equal_sequence, Assign, Equal, Sequence};
use crate::source::Source;

impl<T> Sequence for Vec<T> {
    type Item = T;
    const RESIZABLE: bool = true;

    #[inline(always)]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline(always)]
    fn item(&self, index: usize) -> Option<&T> {
        self.get(index)
    }

    #[inline(always)]
    fn item_mut(&mut self, index: usize) -> Option<&mut T> {
        self.get_mut(index)
    }
}

impl<T> Sequence for VecDeque<T> {
    type Item = T;
    const RESIZABLE: bool = true;

    #[inline(always)]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline(always)]
    fn item(&self, index: usize) -> Option<&T> {
        self.get(index)
    }

    #[inline(always)]
    fn item_mut(&mut self, index: usize) -> Option<&mut T> {
        self.get_mut(index)
    }
}

/// Takes the source's length, then assigns element by element. Existing
/// elements are reused, new ones start from `Default`.
impl<T, S, C, D> Assign<S, C, D> for Vec<T>
where
    S: Sequence,
    T: Assign<S::Item, C, D> + Default,
{
    fn assign_from(&mut self, src: Source<'_, S>, converter: &C) -> Result<(), Error> {
        self.resize_with(src.get().len(), T::default);
        assign_sequence(self, src, converter)
    }
}

impl<T, S, C, D> Equal<S, C, D> for Vec<T>
where
    S: Sequence,
    T: Equal<S::Item, C, D>,
{
    #[inline(always)]
    fn equal_to(&self, src: &S, converter: &C) -> Result<bool, Error> {
        equal_sequence(self, src, converter)
    }
}

impl<T, S, C, D> Assign<S, C, D> for VecDeque<T>
where
    S: Sequence,
    T: Assign<S::Item, C, D> + Default,
{
    fn assign_from(&mut self, src: Source<'_, S>, converter: &C) -> Result<(), Error> {
        self.resize_with(src.get().len(), T::default);
        assign_sequence(self, src, converter)
    }
}

impl<T, S, C, D> Equal<S, C, D> for VecDeque<T>
where
    S: Sequence,
    T: Equal<S::Item, C, D>,
{
    #[inline(always)]
    fn equal_to(&self, src: &S, converter: &C) -> Result<bool, Error> {
        equal_sequence(self, src, converter)
    }
}
