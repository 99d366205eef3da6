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

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use crate::error::Error;
use crate::operator::{Assign, Associative, Equal};
use crate::source::Source;

impl<K, V, S> Associative for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    type Key = K;
    type Value = V;

    #[inline(always)]
    fn len(&self) -> usize {
        HashMap::len(self)
    }

    #[inline(always)]
    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }

    fn entries_mut(&mut self) -> impl Iterator<Item = (&K, &mut V)> {
        self.iter_mut()
    }
}

impl<K: Ord, V> Associative for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    #[inline(always)]
    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    #[inline(always)]
    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }

    fn entries_mut(&mut self) -> impl Iterator<Item = (&K, &mut V)> {
        self.iter_mut()
    }
}

/// Destination side of an associative assign.
trait Slots<K, V> {
    /// The value stored under `key`, inserting a default one if absent.
    fn slot(&mut self, key: &K) -> &mut V;
}

impl<K, V, S> Slots<K, V> for HashMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Default,
    S: BuildHasher,
{
    #[inline(always)]
    fn slot(&mut self, key: &K) -> &mut V {
        self.entry(key.clone()).or_default()
    }
}

impl<K: Ord + Clone, V: Default> Slots<K, V> for BTreeMap<K, V> {
    #[inline(always)]
    fn slot(&mut self, key: &K) -> &mut V {
        self.entry(key.clone()).or_default()
    }
}

/// Assigns every source entry into the slot of the same key, passing moved
/// values on as moved.
fn fill_from<Dst, M, C, D, V>(dst: &mut Dst, src: Source<'_, M>, converter: &C) -> Result<(), Error>
where
    Dst: Slots<M::Key, V>,
    M: Associative,
    V: Assign<M::Value, C, D>,
{
    match src {
        Source::Borrowed(src) => {
            for (key, value) in src.entries() {
                dst.slot(key).assign_from(Source::Borrowed(value), converter)?;
            }
        }
        Source::Moved(src) => {
            for (key, value) in src.entries_mut() {
                dst.slot(key).assign_from(Source::Moved(value), converter)?;
            }
        }
    }
    Ok(())
}

/// Every source key must be present on the destination side and map to an
/// equal value; sizes must agree.
fn equal_entries<Dst, M, C, D>(dst: &Dst, src: &M, converter: &C) -> Result<bool, Error>
where
    Dst: Associative<Key = M::Key>,
    M: Associative,
    Dst::Value: Equal<M::Value, C, D>,
{
    if dst.len() != src.len() {
        return Ok(false);
    }
    for (key, value) in src.entries() {
        match dst.lookup(key) {
            Some(slot) => {
                if !slot.equal_to(value, converter)? {
                    return Ok(false);
                }
            }
            None => return Ok(false),
        }
    }
    Ok(true)
}

/// Cleared, then one entry per source key. Keys are copied as they are;
/// only values go through the converter.
impl<K, V, S, M, C, D> Assign<M, C, D> for HashMap<K, V, S>
where
    M: Associative<Key = K>,
    K: Eq + Hash + Clone,
    V: Assign<M::Value, C, D> + Default,
    S: BuildHasher,
{
    fn assign_from(&mut self, src: Source<'_, M>, converter: &C) -> Result<(), Error> {
        self.clear();
        fill_from(self, src, converter)
    }
}

impl<K, V, S, M, C, D> Equal<M, C, D> for HashMap<K, V, S>
where
    M: Associative<Key = K>,
    K: Eq + Hash,
    V: Equal<M::Value, C, D>,
    S: BuildHasher,
{
    fn equal_to(&self, src: &M, converter: &C) -> Result<bool, Error> {
        equal_entries(self, src, converter)
    }
}

impl<K, V, M, C, D> Assign<M, C, D> for BTreeMap<K, V>
where
    M: Associative<Key = K>,
    K: Ord + Clone,
    V: Assign<M::Value, C, D> + Default,
{
    fn assign_from(&mut self, src: Source<'_, M>, converter: &C) -> Result<(), Error> {
        self.clear();
        fill_from(self, src, converter)
    }
}

impl<K, V, M, C, D> Equal<M, C, D> for BTreeMap<K, V>
where
    M: Associative<Key = K>,
    K: Ord,
    V: Equal<M::Value, C, D>,
{
    fn equal_to(&self, src: &M, converter: &C) -> Result<bool, Error> {
        equal_entries(self, src, converter)
    }
}
