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

//! Bidirectional converters between two value domains.
//!
//! A converter is only ever applied to scalar leaves. Containers of
//! convertible values are handled by the operators, which walk both
//! containers and call the converter once per leaf.

use crate::error::Error;
use crate::source::{Source, ToLeft, ToRight};

mod cast;
mod packed;
mod parse;

pub use cast::Cast;
pub use packed::Packed;
pub use parse::Parse;

/// A pure transform between a left domain `L` and a right domain `R`.
///
/// `assign_*` write the converted source into an existing destination;
/// `equal_*` report whether the destination equals the converted source.
pub trait Converter<L, R> {
    fn assign_to_right(&self, src: Source<'_, L>, dst: &mut R) -> Result<(), Error>;

    fn assign_to_left(&self, src: Source<'_, R>, dst: &mut L) -> Result<(), Error>;

    fn equal_to_right(&self, src: &L, dst: &R) -> Result<bool, Error>;

    fn equal_to_left(&self, src: &R, dst: &L) -> Result<bool, Error>;
}

/// A converter seen from one [`Orientation`](crate::source::Orientation):
/// converts `Src` into `Dst`.
///
/// Implemented for every [`Converter`]; the operators only ever name this
/// trait so that one leaf impl serves both directions.
pub trait Convert<Dst, Src, D> {
    fn convert(&self, src: Source<'_, Src>, dst: &mut Dst) -> Result<(), Error>;

    fn compare(&self, src: &Src, dst: &Dst) -> Result<bool, Error>;
}

impl<C, L, R> Convert<R, L, ToRight> for C
where
    C: Converter<L, R> + ?Sized,
{
    #[inline(always)]
    fn convert(&self, src: Source<'_, L>, dst: &mut R) -> Result<(), Error> {
        self.assign_to_right(src, dst)
    }

    #[inline(always)]
    fn compare(&self, src: &L, dst: &R) -> Result<bool, Error> {
        self.equal_to_right(src, dst)
    }
}

impl<C, L, R> Convert<L, R, ToLeft> for C
where
    C: Converter<L, R> + ?Sized,
{
    #[inline(always)]
    fn convert(&self, src: Source<'_, R>, dst: &mut L) -> Result<(), Error> {
        self.assign_to_left(src, dst)
    }

    #[inline(always)]
    fn compare(&self, src: &R, dst: &L) -> Result<bool, Error> {
        self.equal_to_left(src, dst)
    }
}

/// Plain assignment and `==` between mutually convertible types.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Identity;

impl<L, R> Converter<L, R> for Identity
where
    L: Clone + Default + Into<R> + PartialEq<R>,
    R: Clone + Default + Into<L> + PartialEq<L>,
{
    #[inline(always)]
    fn assign_to_right(&self, src: Source<'_, L>, dst: &mut R) -> Result<(), Error> {
        *dst = src.into_owned().into();
        Ok(())
    }

    #[inline(always)]
    fn assign_to_left(&self, src: Source<'_, R>, dst: &mut L) -> Result<(), Error> {
        *dst = src.into_owned().into();
        Ok(())
    }

    #[inline(always)]
    fn equal_to_right(&self, src: &L, dst: &R) -> Result<bool, Error> {
        Ok(*dst == *src)
    }

    #[inline(always)]
    fn equal_to_left(&self, src: &R, dst: &L) -> Result<bool, Error> {
        Ok(*dst == *src)
    }
}

/// A converter built from two functions.
///
/// ```rust
/// use convertible_core::converter::{functions, Converter};
/// use convertible_core::source::Source;
///
/// let millis = functions(|m: i64| m * 1000, |mm: i64| mm / 1000);
/// let mut mm = 0;
/// millis.assign_to_right(Source::from(&3), &mut mm).unwrap();
/// assert_eq!(mm, 3000);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Functions<F, G> {
    to_right: F,
    to_left: G,
}

pub fn functions<F, G>(to_right: F, to_left: G) -> Functions<F, G> {
    Functions { to_right, to_left }
}

impl<L, R, F, G> Converter<L, R> for Functions<F, G>
where
    F: Fn(L) -> R,
    G: Fn(R) -> L,
    L: Clone + Default + PartialEq,
    R: Clone + Default + PartialEq,
{
    fn assign_to_right(&self, src: Source<'_, L>, dst: &mut R) -> Result<(), Error> {
        *dst = (self.to_right)(src.into_owned());
        Ok(())
    }

    fn assign_to_left(&self, src: Source<'_, R>, dst: &mut L) -> Result<(), Error> {
        *dst = (self.to_left)(src.into_owned());
        Ok(())
    }

    fn equal_to_right(&self, src: &L, dst: &R) -> Result<bool, Error> {
        Ok(*dst == (self.to_right)(src.clone()))
    }

    fn equal_to_left(&self, src: &R, dst: &L) -> Result<bool, Error> {
        Ok(*dst == (self.to_left)(src.clone()))
    }
}

/// Swaps the sides of a converter: a `Converter<R, L>` becomes a
/// `Converter<L, R>`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Flip<C>(pub C);

impl<L, R, C> Converter<L, R> for Flip<C>
where
    C: Converter<R, L>,
{
    #[inline(always)]
    fn assign_to_right(&self, src: Source<'_, L>, dst: &mut R) -> Result<(), Error> {
        self.0.assign_to_left(src, dst)
    }

    #[inline(always)]
    fn assign_to_left(&self, src: Source<'_, R>, dst: &mut L) -> Result<(), Error> {
        self.0.assign_to_right(src, dst)
    }

    #[inline(always)]
    fn equal_to_right(&self, src: &L, dst: &R) -> Result<bool, Error> {
        self.0.equal_to_left(src, dst)
    }

    #[inline(always)]
    fn equal_to_left(&self, src: &R, dst: &L) -> Result<bool, Error> {
        self.0.equal_to_right(src, dst)
    }
}
