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

use std::collections::{BTreeSet, HashSet};
use std::hash::{BuildHasher, Hash};
use std::mem;

use crate::error::Error;
use crate::operator::{Assign, Equal, Set};
use crate::source::Source;

impl<T, S> Set for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher + Default,
{
    type Item = T;

    #[inline(always)]
    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }

    fn take_items(&mut self) -> impl Iterator<Item = T> {
        mem::take(self).into_iter()
    }
}

impl<T: Ord> Set for BTreeSet<T> {
    type Item = T;

    #[inline(always)]
    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }

    fn take_items(&mut self) -> impl Iterator<Item = T> {
        mem::take(self).into_iter()
    }
}

/// Converts every source item into a fresh `T`; a moved source is emptied.
fn converted<T, Src, C, D>(
    src: Source<'_, Src>,
    converter: &C,
    mut insert: impl FnMut(T),
) -> Result<(), Error>
where
    Src: Set,
    T: Assign<Src::Item, C, D> + Default,
{
    match src {
        Source::Borrowed(src) => {
            for item in src.items() {
                let mut value = T::default();
                value.assign_from(Source::Borrowed(item), converter)?;
                insert(value);
            }
        }
        Source::Moved(src) => {
            for mut item in src.take_items() {
                let mut value = T::default();
                value.assign_from(Source::Moved(&mut item), converter)?;
                insert(value);
            }
        }
    }
    Ok(())
}

/// Sizes must agree and every converted source item must be contained. An
/// item the converter rejects cannot be contained.
fn contains_all<T, Src, C, D>(
    len: usize,
    src: &Src,
    converter: &C,
    contains: impl Fn(&T) -> bool,
) -> Result<bool, Error>
where
    Src: Set,
    T: Assign<Src::Item, C, D> + Default,
{
    if len != src.len() {
        return Ok(false);
    }
    for item in src.items() {
        let mut value = T::default();
        if value.assign_from(Source::Borrowed(item), converter).is_err() || !contains(&value) {
            return Ok(false);
        }
    }
    Ok(true)
}

impl<T, S, Src, C, D> Assign<Src, C, D> for HashSet<T, S>
where
    Src: Set,
    T: Assign<Src::Item, C, D> + Default + Eq + Hash,
    S: BuildHasher,
{
    fn assign_from(&mut self, src: Source<'_, Src>, converter: &C) -> Result<(), Error> {
        self.clear();
        converted(src, converter, |value| {
            self.insert(value);
        })
    }
}

/// Items are compared after conversion into the destination domain.
impl<T, S, Src, C, D> Equal<Src, C, D> for HashSet<T, S>
where
    Src: Set,
    T: Assign<Src::Item, C, D> + Default + Eq + Hash,
    S: BuildHasher,
{
    fn equal_to(&self, src: &Src, converter: &C) -> Result<bool, Error> {
        contains_all(self.len(), src, converter, |value: &T| self.contains(value))
    }
}

impl<T, Src, C, D> Assign<Src, C, D> for BTreeSet<T>
where
    Src: Set,
    T: Assign<Src::Item, C, D> + Default + Ord,
{
    fn assign_from(&mut self, src: Source<'_, Src>, converter: &C) -> Result<(), Error> {
        self.clear();
        converted(src, converter, |value| {
            self.insert(value);
        })
    }
}

impl<T, Src, C, D> Equal<Src, C, D> for BTreeSet<T>
where
    Src: Set,
    T: Assign<Src::Item, C, D> + Default + Ord,
{
    fn equal_to(&self, src: &Src, converter: &C) -> Result<bool, Error> {
        contains_all(self.len(), src, converter, |value: &T| self.contains(value))
    }
}
