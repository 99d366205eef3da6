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

//! Mapping tables: many mappings over several host-type pairs.
//!
//! A table stores its mappings type-erased and indexes them by the pair of
//! concrete host types when it is built. An operation on `(L, R)` applies
//! every mapping registered for exactly that pair, in declaration order.
//! A pair without mappings is rejected with
//! [`Error::NoMapping`](crate::error::Error::NoMapping) before any host is
//! touched, unless the table was configured to accept it.
//!
//! Tables are converters themselves. A mapping of a child field can use a
//! table as its converter: the base table when the schema is built with
//! [`MappingTable::extend`], or the table under construction through
//! [`MappingTable::recursive`].
//!
//! ```rust
//! use convertible_core::field;
//! use convertible_core::mapping::Mapping;
//! use convertible_core::mapping_table::MappingTable;
//!
//! #[derive(Clone, Debug, Default, PartialEq)]
//! struct User { name: String, age: u8 }
//! #[derive(Clone, Debug, Default, PartialEq)]
//! struct UserRow { name: String, age: u8 }
//!
//! let table = MappingTable::new()
//!     .with(Mapping::new(field!(User, name), field!(UserRow, name)))
//!     .with(Mapping::new(field!(User, age), field!(UserRow, age)));
//!
//! let user = User { name: "ada".into(), age: 36 };
//! let row: UserRow = table.to_right(&user).unwrap();
//! assert_eq!(row, UserRow { name: "ada".into(), age: 36 });
//! assert!(table.equal_right(&user, &row).unwrap());
//! ```

use std::any::{type_name, Any, TypeId};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Weak};

use crate::config::Config;
use crate::converter::Converter;
use crate::error::Error;
use crate::source::{Direction, Source};

mod defaults;
mod erased;

pub use defaults::Defaults;
pub use erased::ErasedMapping;

type Builder = dyn Fn(TableRef, MappingTable) -> MappingTable + Send + Sync;

struct TableInner {
    mappings: Vec<Arc<dyn ErasedMapping>>,
    index: HashMap<(TypeId, TypeId), Vec<usize>>,
    config: Config,
    recursion: Option<Recursion>,
}

/// How a recursive table was built, so that every table derived from it is
/// rebuilt around its own allocation.
#[derive(Clone)]
struct Recursion {
    base: MappingTable,
    build: Arc<Builder>,
    /// Mappings added after `build` ran.
    appended: Vec<Arc<dyn ErasedMapping>>,
    /// The table `build` returned. Nested recursive tables point into it.
    _scope: MappingTable,
}

impl TableInner {
    fn new(
        mappings: Vec<Arc<dyn ErasedMapping>>,
        config: Config,
        recursion: Option<Recursion>,
    ) -> Self {
        let mut index: HashMap<(TypeId, TypeId), Vec<usize>> = HashMap::new();
        for (i, mapping) in mappings.iter().enumerate() {
            index
                .entry((mapping.lhs_type(), mapping.rhs_type()))
                .or_default()
                .push(i);
        }
        TableInner {
            mappings,
            index,
            config,
            recursion,
        }
    }

    /// Mappings registered for `(L, R)`, in declaration order.
    fn select<L: Any, R: Any>(&self) -> Result<impl Iterator<Item = &dyn ErasedMapping>, Error> {
        let found: &[usize] = match self.index.get(&(TypeId::of::<L>(), TypeId::of::<R>())) {
            Some(found) => found,
            None if self.config.is_allow_unmatched() => &[],
            None => {
                tracing::debug!(
                    table = %self.config.label(),
                    lhs = type_name::<L>(),
                    rhs = type_name::<R>(),
                    "no mapping for host pair"
                );
                return Err(Error::no_mapping(type_name::<L>(), type_name::<R>()));
            }
        };
        Ok(found.iter().map(|&i| &*self.mappings[i]))
    }

    fn assign_right<L: Any, R: Any>(&self, mut lhs: Source<'_, L>, rhs: &mut R) -> Result<(), Error> {
        for mapping in self.select::<L, R>()? {
            self.trace(mapping, Direction::LeftToRight);
            mapping.dyn_assign_right(lhs.reborrow().erase(), rhs)?;
        }
        Ok(())
    }

    fn assign_left<L: Any, R: Any>(&self, lhs: &mut L, mut rhs: Source<'_, R>) -> Result<(), Error> {
        for mapping in self.select::<L, R>()? {
            self.trace(mapping, Direction::RightToLeft);
            mapping.dyn_assign_left(lhs, rhs.reborrow().erase())?;
        }
        Ok(())
    }

    fn equal_right<L: Any, R: Any>(&self, lhs: &L, rhs: &R) -> Result<bool, Error> {
        for mapping in self.select::<L, R>()? {
            if !mapping.dyn_equal_right(lhs, rhs)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn equal_left<L: Any, R: Any>(&self, lhs: &L, rhs: &R) -> Result<bool, Error> {
        for mapping in self.select::<L, R>()? {
            if !mapping.dyn_equal_left(lhs, rhs)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    #[inline(always)]
    fn trace(&self, mapping: &dyn ErasedMapping, direction: Direction) {
        tracing::trace!(
            table = %self.config.label(),
            lhs = mapping.lhs_type_name(),
            rhs = mapping.rhs_type_name(),
            %direction,
            "applying mapping"
        );
    }
}

/// An ordered, immutable set of mappings. Cloning is cheap and clones share
/// their mappings.
#[derive(Clone)]
pub struct MappingTable {
    inner: Arc<TableInner>,
}

impl Default for MappingTable {
    fn default() -> Self {
        Self::with_config(Config::default())
    }
}

impl MappingTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: Config) -> Self {
        MappingTable {
            inner: Arc::new(TableInner::new(Vec::new(), config, None)),
        }
    }

    /// A table with `config` and the mappings of `self` followed by `extra`.
    /// A recursive table is rebuilt from its recipe so that its mappings
    /// recurse into the new table.
    fn derive(&self, extra: Option<Arc<dyn ErasedMapping>>, config: Config) -> Self {
        match &self.inner.recursion {
            None => {
                let mut mappings = self.inner.mappings.clone();
                mappings.extend(extra);
                MappingTable {
                    inner: Arc::new(TableInner::new(mappings, config, None)),
                }
            }
            Some(recursion) => {
                let mut appended = recursion.appended.clone();
                appended.extend(extra);
                Self::build_recursive(
                    recursion.base.clone(),
                    recursion.build.clone(),
                    appended,
                    Some(config),
                )
            }
        }
    }

    /// Runs `build` against a fresh allocation. `config` replaces the
    /// config of the built table when given.
    fn build_recursive(
        base: MappingTable,
        build: Arc<Builder>,
        appended: Vec<Arc<dyn ErasedMapping>>,
        config: Option<Config>,
    ) -> Self {
        let label = config
            .as_ref()
            .map_or_else(|| base.inner.config.label.clone(), |c| c.label.clone());
        let inner = Arc::new_cyclic(|weak| {
            let this = TableRef {
                inner: weak.clone(),
                label,
            };
            let scope = build(this, base.clone());
            let mut mappings = scope.inner.mappings.clone();
            mappings.extend(appended.iter().cloned());
            let config = config.unwrap_or_else(|| scope.inner.config.clone());
            TableInner::new(
                mappings,
                config,
                Some(Recursion {
                    base,
                    build,
                    appended,
                    _scope: scope,
                }),
            )
        });
        MappingTable { inner }
    }

    /// Sets the name used in log events.
    pub fn label(self, label: impl Into<Cow<'static, str>>) -> Self {
        let mut config = self.inner.config.clone();
        config.label = label.into();
        self.derive(None, config)
    }

    /// Accept host pairs without mappings: assign does nothing and equal
    /// holds.
    pub fn allow_unmatched(self, allow: bool) -> Self {
        let mut config = self.inner.config.clone();
        config.allow_unmatched = allow;
        self.derive(None, config)
    }

    /// Appends a mapping.
    pub fn with<M: ErasedMapping + 'static>(self, mapping: M) -> Self {
        self.extend(mapping)
    }

    /// A new table holding the mappings of `self` followed by `mapping`;
    /// `self` is left as it was and can serve as the converter of the new
    /// mapping.
    pub fn extend<M: ErasedMapping + 'static>(&self, mapping: M) -> Self {
        self.derive(Some(Arc::new(mapping)), self.inner.config.clone())
    }

    /// Builds a self-referential table. `build` receives a handle to the
    /// table under construction, usable as the converter of mappings that
    /// recurse into child hosts, and the current table to extend.
    ///
    /// Recursion is bounded by the data: it stops at the first absent child.
    /// Tables derived from the result (`label`, `with`, `extend`, ...) run
    /// `build` again, so their mappings recurse into the derived table.
    pub fn recursive<F>(self, build: F) -> Self
    where
        F: Fn(TableRef, MappingTable) -> MappingTable + Send + Sync + 'static,
    {
        Self::build_recursive(self, Arc::new(build), Vec::new(), None)
    }

    #[inline(always)]
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.inner.mappings.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.inner.mappings.is_empty()
    }

    /// Whether any mapping is registered for the pair `(L, R)`.
    pub fn maps<L: Any, R: Any>(&self) -> bool {
        self.inner
            .index
            .contains_key(&(TypeId::of::<L>(), TypeId::of::<R>()))
    }

    pub fn assign_right<'a, L: Any, R: Any>(
        &self,
        lhs: impl Into<Source<'a, L>>,
        rhs: &mut R,
    ) -> Result<(), Error> {
        self.inner.assign_right(lhs.into(), rhs)
    }

    pub fn assign_left<'a, L: Any, R: Any>(
        &self,
        lhs: &mut L,
        rhs: impl Into<Source<'a, R>>,
    ) -> Result<(), Error> {
        self.inner.assign_left(lhs, rhs.into())
    }

    pub fn assign<L: Any, R: Any>(
        &self,
        direction: Direction,
        lhs: &mut L,
        rhs: &mut R,
    ) -> Result<(), Error> {
        match direction {
            Direction::LeftToRight => self.inner.assign_right(Source::Borrowed(&*lhs), rhs),
            Direction::RightToLeft => self.inner.assign_left(lhs, Source::Borrowed(&*rhs)),
        }
    }

    /// Logical AND over every applicable mapping, stopping at the first
    /// `false`.
    pub fn equal_right<L: Any, R: Any>(&self, lhs: &L, rhs: &R) -> Result<bool, Error> {
        self.inner.equal_right(lhs, rhs)
    }

    pub fn equal_left<L: Any, R: Any>(&self, lhs: &L, rhs: &R) -> Result<bool, Error> {
        self.inner.equal_left(lhs, rhs)
    }

    pub fn equal<L: Any, R: Any>(
        &self,
        direction: Direction,
        lhs: &L,
        rhs: &R,
    ) -> Result<bool, Error> {
        match direction {
            Direction::LeftToRight => self.inner.equal_right(lhs, rhs),
            Direction::RightToLeft => self.inner.equal_left(lhs, rhs),
        }
    }

    /// A fresh `R` filled from `lhs`. The fresh host is the defaulted right
    /// host of the first mapping declaring `R`.
    pub fn to_right<'a, L: Any, R: Any>(&self, lhs: impl Into<Source<'a, L>>) -> Result<R, Error> {
        let mut rhs = self
            .defaulted::<R>(|m| m.rhs_type(), |m| m.dyn_defaulted_rhs())
            .ok_or_else(|| Error::no_mapping(type_name::<L>(), type_name::<R>()))?;
        self.inner.assign_right(lhs.into(), &mut rhs)?;
        Ok(rhs)
    }

    /// A fresh `L` filled from `rhs`.
    pub fn to_left<'a, L: Any, R: Any>(&self, rhs: impl Into<Source<'a, R>>) -> Result<L, Error> {
        let mut lhs = self
            .defaulted::<L>(|m| m.lhs_type(), |m| m.dyn_defaulted_lhs())
            .ok_or_else(|| Error::no_mapping(type_name::<L>(), type_name::<R>()))?;
        self.inner.assign_left(&mut lhs, rhs.into())?;
        Ok(lhs)
    }

    /// Every right host type of the table, defaulted, then filled from
    /// `lhs` where a mapping pairs it with `L`.
    pub fn to_right_all<L: Any>(&self, lhs: &L) -> Result<Defaults, Error> {
        let mut all = self.defaulted_rhs();
        for rhs in all.iter_mut() {
            let rhs: &mut dyn Any = &mut **rhs;
            let key = (TypeId::of::<L>(), (*rhs).type_id());
            for &i in self.inner.index.get(&key).into_iter().flatten() {
                let mapping = &*self.inner.mappings[i];
                self.inner.trace(mapping, Direction::LeftToRight);
                mapping.dyn_assign_right(Source::Borrowed(lhs as &dyn Any), rhs)?;
            }
        }
        Ok(all)
    }

    /// Every left host type of the table, defaulted, then filled from
    /// `rhs` where a mapping pairs it with `R`.
    pub fn to_left_all<R: Any>(&self, rhs: &R) -> Result<Defaults, Error> {
        let mut all = self.defaulted_lhs();
        for lhs in all.iter_mut() {
            let lhs: &mut dyn Any = &mut **lhs;
            let key = ((*lhs).type_id(), TypeId::of::<R>());
            for &i in self.inner.index.get(&key).into_iter().flatten() {
                let mapping = &*self.inner.mappings[i];
                self.inner.trace(mapping, Direction::RightToLeft);
                mapping.dyn_assign_left(lhs, Source::Borrowed(rhs as &dyn Any))?;
            }
        }
        Ok(all)
    }

    /// One defaulted left host per distinct left host type.
    pub fn defaulted_lhs(&self) -> Defaults {
        self.collect_defaults(|m| (m.lhs_type(), m.lhs_type_name()), |m| m.dyn_defaulted_lhs())
    }

    /// One defaulted right host per distinct right host type.
    pub fn defaulted_rhs(&self) -> Defaults {
        self.collect_defaults(|m| (m.rhs_type(), m.rhs_type_name()), |m| m.dyn_defaulted_rhs())
    }

    fn collect_defaults(
        &self,
        side: impl Fn(&dyn ErasedMapping) -> (TypeId, &'static str),
        make: impl Fn(&dyn ErasedMapping) -> Box<dyn Any>,
    ) -> Defaults {
        let mut defaults = Defaults::default();
        for mapping in &self.inner.mappings {
            let (ty, name) = side(&**mapping);
            if !defaults.contains_type(ty) {
                defaults.push(name, make(&**mapping));
            }
        }
        defaults
    }

    fn defaulted<T: Any>(
        &self,
        side: impl Fn(&dyn ErasedMapping) -> TypeId,
        make: impl Fn(&dyn ErasedMapping) -> Box<dyn Any>,
    ) -> Option<T> {
        self.inner
            .mappings
            .iter()
            .find(|m| side(&***m) == TypeId::of::<T>())
            .and_then(|m| make(&**m).downcast::<T>().ok())
            .map(|boxed| *boxed)
    }
}

impl fmt::Debug for MappingTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MappingTable")
            .field("label", &self.inner.config.label())
            .field("mappings", &self.inner.mappings.len())
            .finish()
    }
}

impl<L: Any, R: Any> Converter<L, R> for MappingTable {
    #[inline(always)]
    fn assign_to_right(&self, src: Source<'_, L>, dst: &mut R) -> Result<(), Error> {
        self.inner.assign_right(src, dst)
    }

    #[inline(always)]
    fn assign_to_left(&self, src: Source<'_, R>, dst: &mut L) -> Result<(), Error> {
        self.inner.assign_left(dst, src)
    }

    #[inline(always)]
    fn equal_to_right(&self, src: &L, dst: &R) -> Result<bool, Error> {
        self.inner.equal_right(src, dst)
    }

    #[inline(always)]
    fn equal_to_left(&self, src: &R, dst: &L) -> Result<bool, Error> {
        self.inner.equal_left(dst, src)
    }
}

/// A weak handle to a table under construction, handed out by
/// [`MappingTable::recursive`].
#[derive(Clone)]
pub struct TableRef {
    inner: Weak<TableInner>,
    label: Cow<'static, str>,
}

impl TableRef {
    fn upgrade(&self) -> Result<Arc<TableInner>, Error> {
        self.inner
            .upgrade()
            .ok_or_else(|| Error::table_dropped(self.label.clone()))
    }
}

impl fmt::Debug for TableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableRef")
            .field("label", &self.label)
            .field("alive", &(self.inner.strong_count() > 0))
            .finish()
    }
}

impl<L: Any, R: Any> Converter<L, R> for TableRef {
    fn assign_to_right(&self, src: Source<'_, L>, dst: &mut R) -> Result<(), Error> {
        self.upgrade()?.assign_right(src, dst)
    }

    fn assign_to_left(&self, src: Source<'_, R>, dst: &mut L) -> Result<(), Error> {
        self.upgrade()?.assign_left(dst, src)
    }

    fn equal_to_right(&self, src: &L, dst: &R) -> Result<bool, Error> {
        self.upgrade()?.equal_right(src, dst)
    }

    fn equal_to_left(&self, src: &R, dst: &L) -> Result<bool, Error> {
        self.upgrade()?.equal_left(dst, src)
    }
}
