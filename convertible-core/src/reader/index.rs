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

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::marker::PhantomData;

use crate::error::Error;
use crate::reader::Reader;

/// Containers addressable by a key.
pub trait Indexed<K> {
    type Output;

    fn at(&self, key: &K) -> Option<&Self::Output>;

    fn at_mut(&mut self, key: &K) -> Option<&mut Self::Output>;

    /// The slot for `key`, created when the container can grow to hold it.
    fn at_or_insert(&mut self, key: &K) -> Result<&mut Self::Output, Error>;
}

impl<T: Default> Indexed<usize> for Vec<T> {
    type Output = T;

    #[inline(always)]
    fn at(&self, key: &usize) -> Option<&T> {
        self.get(*key)
    }

    #[inline(always)]
    fn at_mut(&mut self, key: &usize) -> Option<&mut T> {
        self.get_mut(*key)
    }

    fn at_or_insert(&mut self, key: &usize) -> Result<&mut T, Error> {
        let len = self.len();
        if *key >= len {
            let new_len = key
                .checked_add(1)
                .ok_or_else(|| Error::index_out_of_bounds(*key, len))?;
            self.try_reserve(new_len - len)
                .map_err(|_| Error::index_out_of_bounds(*key, len))?;
            self.resize_with(new_len, T::default);
        }
        let len = self.len();
        self.get_mut(*key)
            .ok_or_else(|| Error::index_out_of_bounds(*key, len))
    }
}

impl<T: Default> Indexed<usize> for VecDeque<T> {
    type Output = T;

    #[inline(always)]
    fn at(&self, key: &usize) -> Option<&T> {
        self.get(*key)
    }

    #[inline(always)]
    fn at_mut(&mut self, key: &usize) -> Option<&mut T> {
        self.get_mut(*key)
    }

    fn at_or_insert(&mut self, key: &usize) -> Result<&mut T, Error> {
        let len = self.len();
        if *key >= len {
            let new_len = key
                .checked_add(1)
                .ok_or_else(|| Error::index_out_of_bounds(*key, len))?;
            self.try_reserve(new_len - len)
                .map_err(|_| Error::index_out_of_bounds(*key, len))?;
            self.resize_with(new_len, T::default);
        }
        let len = self.len();
        self.get_mut(*key)
            .ok_or_else(|| Error::index_out_of_bounds(*key, len))
    }
}

impl<T, const N: usize> Indexed<usize> for [T; N] {
    type Output = T;

    #[inline(always)]
    fn at(&self, key: &usize) -> Option<&T> {
        self.get(*key)
    }

    #[inline(always)]
    fn at_mut(&mut self, key: &usize) -> Option<&mut T> {
        self.get_mut(*key)
    }

    fn at_or_insert(&mut self, key: &usize) -> Result<&mut T, Error> {
        self.get_mut(*key)
            .ok_or_else(|| Error::index_out_of_bounds(*key, N))
    }
}

impl<K, V, S> Indexed<K> for HashMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Default,
    S: BuildHasher,
{
    type Output = V;

    #[inline(always)]
    fn at(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    #[inline(always)]
    fn at_mut(&mut self, key: &K) -> Option<&mut V> {
        self.get_mut(key)
    }

    fn at_or_insert(&mut self, key: &K) -> Result<&mut V, Error> {
        Ok(self.entry(key.clone()).or_default())
    }
}

impl<K, V> Indexed<K> for BTreeMap<K, V>
where
    K: Ord + Clone,
    V: Default,
{
    type Output = V;

    #[inline(always)]
    fn at(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    #[inline(always)]
    fn at_mut(&mut self, key: &K) -> Option<&mut V> {
        self.get_mut(key)
    }

    fn at_or_insert(&mut self, key: &K) -> Result<&mut V, Error> {
        Ok(self.entry(key.clone()).or_default())
    }
}

/// The element of an [`Indexed`] container at a fixed key.
pub struct Index<C, K> {
    key: K,
    _container: PhantomData<fn() -> C>,
}

impl<C, K> Index<C, K> {
    pub fn new(key: K) -> Self {
        Index {
            key,
            _container: PhantomData,
        }
    }

    #[inline(always)]
    pub fn key(&self) -> &K {
        &self.key
    }
}

impl<C, K: Clone> Clone for Index<C, K> {
    fn clone(&self) -> Self {
        Index::new(self.key.clone())
    }
}

impl<C, K: fmt::Debug> fmt::Debug for Index<C, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{:?}]", std::any::type_name::<C>(), self.key)
    }
}

impl<C, K> Reader for Index<C, K>
where
    C: Indexed<K>,
{
    type Host = C;
    type Target = C::Output;

    #[inline(always)]
    fn get<'a>(&self, host: &'a C) -> Option<&'a C::Output> {
        host.at(&self.key)
    }

    #[inline(always)]
    fn get_mut<'a>(&self, host: &'a mut C) -> Option<&'a mut C::Output> {
        host.at_mut(&self.key)
    }

    #[inline(always)]
    fn write<'a>(&self, host: &'a mut C) -> Result<&'a mut C::Output, Error> {
        host.at_or_insert(&self.key)
    }
}
