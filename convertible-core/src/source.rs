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

//! Directions and source handles.
//!
//! Every assign is parameterized by a [`Direction`]: the runtime value is
//! used by the `assign`/`equal` entry points of mappings and tables, the
//! marker types [`ToRight`] and [`ToLeft`] carry the same choice at type
//! level so that the operators can pick the matching converter half.
//!
//! A [`Source`] pairs a value with its ownership mode. A `Borrowed` source is
//! copied from and left untouched; a `Moved` source is taken from and left at
//! its `Default`. Values without drop glue (numbers, `bool`, `char`, plain
//! `Copy` structs) own nothing, so moving them copies them.

use std::any::Any;
use std::fmt;
use std::mem;

/// Which host is the source and which is the destination of one operation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    LeftToRight,
    RightToLeft,
}

impl Direction {
    #[inline(always)]
    pub fn reverse(self) -> Self {
        match self {
            Direction::LeftToRight => Direction::RightToLeft,
            Direction::RightToLeft => Direction::LeftToRight,
        }
    }

    #[inline(always)]
    pub fn is_left_to_right(self) -> bool {
        matches!(self, Direction::LeftToRight)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::LeftToRight => f.write_str("lhs -> rhs"),
            Direction::RightToLeft => f.write_str("lhs <- rhs"),
        }
    }
}

/// Type-level [`Direction`].
pub trait Orientation: 'static {
    const DIRECTION: Direction;
}

/// Left host is the source, right host the destination.
#[derive(Clone, Copy, Debug, Default)]
pub struct ToRight;

/// Right host is the source, left host the destination.
#[derive(Clone, Copy, Debug, Default)]
pub struct ToLeft;

impl Orientation for ToRight {
    const DIRECTION: Direction = Direction::LeftToRight;
}

impl Orientation for ToLeft {
    const DIRECTION: Direction = Direction::RightToLeft;
}

/// A value handed to an assign together with its ownership mode.
#[derive(Debug)]
pub enum Source<'a, T: ?Sized> {
    Borrowed(&'a T),
    Moved(&'a mut T),
}

/// Marks `value` as moved from: assigning it leaves the owned leaves of
/// `value` at their default.
#[inline(always)]
pub fn moved<T: ?Sized>(value: &mut T) -> Source<'_, T> {
    Source::Moved(value)
}

impl<'a, T: ?Sized> From<&'a T> for Source<'a, T> {
    #[inline(always)]
    fn from(value: &'a T) -> Self {
        Source::Borrowed(value)
    }
}

impl<'a, T: ?Sized> Source<'a, T> {
    #[inline(always)]
    pub fn get(&self) -> &T {
        match self {
            Source::Borrowed(v) => *v,
            Source::Moved(v) => &**v,
        }
    }

    #[inline(always)]
    pub fn is_moved(&self) -> bool {
        matches!(self, Source::Moved(_))
    }

    /// Shortens the handle so that it can be passed on without giving it up.
    #[inline(always)]
    pub fn reborrow(&mut self) -> Source<'_, T> {
        match self {
            Source::Borrowed(v) => Source::Borrowed(*v),
            Source::Moved(v) => Source::Moved(&mut **v),
        }
    }

    /// Projects onto a part of the value, keeping the ownership mode.
    #[inline(always)]
    pub fn map<U: ?Sized>(
        self,
        shared: impl FnOnce(&'a T) -> &'a U,
        exclusive: impl FnOnce(&'a mut T) -> &'a mut U,
    ) -> Source<'a, U> {
        match self {
            Source::Borrowed(v) => Source::Borrowed(shared(v)),
            Source::Moved(v) => Source::Moved(exclusive(v)),
        }
    }

    /// Like [`Source::map`] for projections that may find nothing.
    #[inline(always)]
    pub fn try_map<U: ?Sized>(
        self,
        shared: impl FnOnce(&'a T) -> Option<&'a U>,
        exclusive: impl FnOnce(&'a mut T) -> Option<&'a mut U>,
    ) -> Option<Source<'a, U>> {
        match self {
            Source::Borrowed(v) => shared(v).map(Source::Borrowed),
            Source::Moved(v) => exclusive(v).map(Source::Moved),
        }
    }

    /// Degrades the handle to a plain shared reference.
    #[inline(always)]
    pub fn into_ref(self) -> &'a T {
        match self {
            Source::Borrowed(v) => v,
            Source::Moved(v) => &*v,
        }
    }

    /// Clones a borrowed value, takes a moved one. A moved value without
    /// drop glue is copied and keeps its value.
    #[inline(always)]
    pub fn into_owned(self) -> T
    where
        T: Clone + Default,
    {
        match self {
            Source::Borrowed(v) => v.clone(),
            Source::Moved(v) if !mem::needs_drop::<T>() => v.clone(),
            Source::Moved(v) => mem::take(v),
        }
    }
}

impl<'a, T: Any> Source<'a, T> {
    #[inline(always)]
    pub fn erase(self) -> Source<'a, dyn Any> {
        match self {
            Source::Borrowed(v) => {
                let v: &'a (dyn Any + 'static) = v;
                Source::Borrowed(v)
            }
            Source::Moved(v) => {
                let v: &'a mut (dyn Any + 'static) = v;
                Source::Moved(v)
            }
        }
    }
}

impl<'a> Source<'a, dyn Any> {
    /// Recovers the concrete type; `None` when `T` is not the erased type.
    #[inline(always)]
    pub fn downcast<T: Any>(self) -> Option<Source<'a, T>> {
        match self {
            Source::Borrowed(v) => v.downcast_ref::<T>().map(Source::Borrowed),
            Source::Moved(v) => v.downcast_mut::<T>().map(Source::Moved),
        }
    }
}
