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

use crate::buffer::{ByteBuffer, Primitive};
use crate::converter::Converter;
use crate::error::Error;
use crate::source::Source;

/// Packs a primitive number into a [`ByteBuffer`] at byte `OFFSET`,
/// little-endian.
///
/// Writing grows a growable buffer and fails with
/// [`Error::BufferOverflow`] on a fixed one that is too small; reading
/// or comparing past the end of the buffer fails the same way.
///
/// ```rust
/// use convertible_core::buffer::ByteBuffer;
/// use convertible_core::converter::{Converter, Packed};
/// use convertible_core::source::Source;
///
/// let mut frame = ByteBuffer::new();
/// Packed::<4>.assign_to_right(Source::from(&0xABu32), &mut frame).unwrap();
/// assert_eq!(frame.as_slice(), &[0, 0, 0, 0, 0xAB, 0, 0, 0]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Packed<const OFFSET: usize>;

impl<T: Primitive, const OFFSET: usize> Converter<T, ByteBuffer> for Packed<OFFSET> {
    #[inline(always)]
    fn assign_to_right(&self, src: Source<'_, T>, dst: &mut ByteBuffer) -> Result<(), Error> {
        dst.write(OFFSET, *src.get())
    }

    #[inline(always)]
    fn assign_to_left(&self, src: Source<'_, ByteBuffer>, dst: &mut T) -> Result<(), Error> {
        *dst = src.get().read::<T>(OFFSET)?;
        Ok(())
    }

    #[inline(always)]
    fn equal_to_right(&self, src: &T, dst: &ByteBuffer) -> Result<bool, Error> {
        Ok(dst.read::<T>(OFFSET)? == *src)
    }

    #[inline(always)]
    fn equal_to_left(&self, src: &ByteBuffer, dst: &T) -> Result<bool, Error> {
        Ok(src.read::<T>(OFFSET)? == *dst)
    }
}
