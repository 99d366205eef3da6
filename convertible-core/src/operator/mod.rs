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

//! The Assign and Equal operators.
//!
//! Both traits are implemented on the *destination* type and are generic
//! over the source type, the converter and the orientation. The shape of
//! the destination selects the strategy:
//!
//! - scalar leaves (numbers, strings, [`ByteBuffer`](crate::buffer::ByteBuffer),
//!   user types marked with `#[derive(Scalar)]` or [`impl_scalar!`](crate::impl_scalar))
//!   hand the value to the converter;
//! - sequences (`Vec`, `VecDeque`, arrays) walk both sides index by index;
//! - associative containers (`HashMap`, `BTreeMap`) are cleared and
//!   rebuilt from the source's keys;
//! - sets (`HashSet`, `BTreeSet`) are rebuilt from converted elements;
//! - `Option`, `Box`, `Rc`, `Arc` and tuples recurse into their contents.
//!
//! Containers always recurse through the same traits, so a converter for a
//! scalar pair automatically serves any nesting of containers around it.

use crate::error::Error;
use crate::source::{Direction, Source, ToLeft, ToRight};

mod arc;
mod array;
mod box_;
mod list;
mod map;
mod option;
mod rc;
mod scalar;
mod set;
mod tuple;

/// Writes the converted source into `self`.
///
/// A failed assign is not rolled back. A sequence keeps its new length and
/// the elements assigned before the failing one. A map or set stays cleared
/// and keeps the entries filled before the failure; the slot of the failing
/// key holds its default. A moved source may have been partly taken.
pub trait Assign<Src, C, D> {
    fn assign_from(&mut self, src: Source<'_, Src>, converter: &C) -> Result<(), Error>;
}

/// Whether `self` equals the converted source.
pub trait Equal<Src, C, D> {
    fn equal_to(&self, src: &Src, converter: &C) -> Result<bool, Error>;
}

/// Ordered, sized containers.
pub trait Sequence {
    type Item;

    /// Whether the container can change its length.
    const RESIZABLE: bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn item(&self, index: usize) -> Option<&Self::Item>;

    fn item_mut(&mut self, index: usize) -> Option<&mut Self::Item>;
}

/// Key-value containers.
pub trait Associative {
    type Key;
    type Value;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lookup(&self, key: &Self::Key) -> Option<&Self::Value>;

    fn entries(&self) -> impl Iterator<Item = (&Self::Key, &Self::Value)>;

    fn entries_mut(&mut self) -> impl Iterator<Item = (&Self::Key, &mut Self::Value)>;
}

/// Containers of bare, unordered values.
pub trait Set {
    type Item;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn items(&self) -> impl Iterator<Item = &Self::Item>;

    /// Empties the set, yielding its items by value.
    fn take_items(&mut self) -> impl Iterator<Item = Self::Item>;
}

/// Assigns element by element over the shorter of both lengths.
///
/// Resizable destinations are resized by their own impl before calling
/// this; trailing elements of the longer side are left untouched.
pub(crate) fn assign_sequence<Dst, S, C, D>(
    dst: &mut Dst,
    src: Source<'_, S>,
    converter: &C,
) -> Result<(), Error>
where
    Dst: Sequence + ?Sized,
    S: Sequence,
    Dst::Item: Assign<S::Item, C, D>,
{
    let len = dst.len().min(src.get().len());
    match src {
        Source::Borrowed(src) => {
            for i in 0..len {
                if let (Some(d), Some(s)) = (dst.item_mut(i), src.item(i)) {
                    d.assign_from(Source::Borrowed(s), converter)?;
                }
            }
        }
        Source::Moved(src) => {
            for i in 0..len {
                if let (Some(d), Some(s)) = (dst.item_mut(i), src.item_mut(i)) {
                    d.assign_from(Source::Moved(s), converter)?;
                }
            }
        }
    }
    Ok(())
}

/// Two resizable sequences must have equal lengths; when one side is fixed
/// its length must not exceed the resizable side's. Elements are then
/// compared over the shorter length.
pub(crate) fn equal_sequence<Dst, S, C, D>(dst: &Dst, src: &S, converter: &C) -> Result<bool, Error>
where
    Dst: Sequence + ?Sized,
    S: Sequence,
    Dst::Item: Equal<S::Item, C, D>,
{
    let (dst_len, src_len) = (dst.len(), src.len());
    let comparable = match (Dst::RESIZABLE, S::RESIZABLE) {
        (true, true) => dst_len == src_len,
        (false, true) => dst_len <= src_len,
        (true, false) => src_len <= dst_len,
        (false, false) => true,
    };
    if !comparable {
        return Ok(false);
    }
    for i in 0..dst_len.min(src_len) {
        match (dst.item(i), src.item(i)) {
            (Some(d), Some(s)) => {
                if !d.equal_to(s, converter)? {
                    return Ok(false);
                }
            }
            _ => return Ok(false),
        }
    }
    Ok(true)
}

/// `rhs = to_right(lhs)`.
#[inline(always)]
pub fn assign_right<'a, L: 'a, R, C>(
    lhs: impl Into<Source<'a, L>>,
    rhs: &mut R,
    converter: &C,
) -> Result<(), Error>
where
    R: Assign<L, C, ToRight>,
{
    rhs.assign_from(lhs.into(), converter)
}

/// `lhs = to_left(rhs)`.
#[inline(always)]
pub fn assign_left<'a, L, R: 'a, C>(
    lhs: &mut L,
    rhs: impl Into<Source<'a, R>>,
    converter: &C,
) -> Result<(), Error>
where
    L: Assign<R, C, ToLeft>,
{
    lhs.assign_from(rhs.into(), converter)
}

/// Copies from the source host of `direction` into the other one.
pub fn assign<L, R, C>(direction: Direction, lhs: &mut L, rhs: &mut R, converter: &C) -> Result<(), Error>
where
    L: Assign<R, C, ToLeft>,
    R: Assign<L, C, ToRight>,
{
    match direction {
        Direction::LeftToRight => rhs.assign_from(Source::Borrowed(&*lhs), converter),
        Direction::RightToLeft => lhs.assign_from(Source::Borrowed(&*rhs), converter),
    }
}

/// `rhs == to_right(lhs)`.
#[inline(always)]
pub fn equal_right<L, R, C>(lhs: &L, rhs: &R, converter: &C) -> Result<bool, Error>
where
    R: Equal<L, C, ToRight>,
{
    rhs.equal_to(lhs, converter)
}

/// `lhs == to_left(rhs)`.
#[inline(always)]
pub fn equal_left<L, R, C>(lhs: &L, rhs: &R, converter: &C) -> Result<bool, Error>
where
    L: Equal<R, C, ToLeft>,
{
    lhs.equal_to(rhs, converter)
}

pub fn equal<L, R, C>(direction: Direction, lhs: &L, rhs: &R, converter: &C) -> Result<bool, Error>
where
    L: Equal<R, C, ToLeft>,
    R: Equal<L, C, ToRight>,
{
    match direction {
        Direction::LeftToRight => rhs.equal_to(lhs, converter),
        Direction::RightToLeft => lhs.equal_to(rhs, converter),
    }
}
