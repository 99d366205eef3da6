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

use std::fmt::Display;

use crate::converter::Converter;
use crate::error::Error;
use crate::source::Source;

/// Checked numeric conversion through `TryFrom` in both directions.
///
/// A value that does not fit fails with [`Error::Conversion`] on assign and
/// compares unequal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cast;

#[inline(always)]
fn cast<S, D>(value: S) -> Result<D, Error>
where
    S: Display + Copy,
    D: TryFrom<S> + 'static,
    <D as TryFrom<S>>::Error: Display,
{
    D::try_from(value).map_err(|err| {
        Error::enhance_conversion_error::<D>(Error::conversion(format!(
            "cannot cast {}: {}",
            value, err
        )))
    })
}

impl<L, R> Converter<L, R> for Cast
where
    L: TryFrom<R> + Display + Copy + PartialEq + 'static,
    R: TryFrom<L> + Display + Copy + PartialEq + 'static,
    <L as TryFrom<R>>::Error: Display,
    <R as TryFrom<L>>::Error: Display,
{
    fn assign_to_right(&self, src: Source<'_, L>, dst: &mut R) -> Result<(), Error> {
        *dst = cast(*src.get())?;
        Ok(())
    }

    fn assign_to_left(&self, src: Source<'_, R>, dst: &mut L) -> Result<(), Error> {
        *dst = cast(*src.get())?;
        Ok(())
    }

    fn equal_to_right(&self, src: &L, dst: &R) -> Result<bool, Error> {
        Ok(R::try_from(*src).map_or(false, |v| v == *dst))
    }

    fn equal_to_left(&self, src: &R, dst: &L) -> Result<bool, Error> {
        Ok(L::try_from(*src).map_or(false, |v| v == *dst))
    }
}
