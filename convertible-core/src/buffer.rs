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

//! Byte storage addressed by fixed offsets.
//!
//! A [`ByteBuffer`] is either growable, in which case writes past the end
//! extend it with zeroes, or fixed, in which case they fail with
//! [`Error::BufferOverflow`]. Values are always encoded little-endian.

use byteorder::{ByteOrder, LittleEndian};

use crate::error::Error;

/// Plain numbers with a fixed little-endian encoding.
pub trait Primitive: Copy + Default + PartialEq + 'static {
    const SIZE: usize;

    fn write_le(self, buf: &mut [u8]);

    fn read_le(buf: &[u8]) -> Self;
}

impl Primitive for u8 {
    const SIZE: usize = 1;

    #[inline(always)]
    fn write_le(self, buf: &mut [u8]) {
        buf[0] = self;
    }

    #[inline(always)]
    fn read_le(buf: &[u8]) -> Self {
        buf[0]
    }
}

impl Primitive for i8 {
    const SIZE: usize = 1;

    #[inline(always)]
    fn write_le(self, buf: &mut [u8]) {
        buf[0] = self as u8;
    }

    #[inline(always)]
    fn read_le(buf: &[u8]) -> Self {
        buf[0] as i8
    }
}

macro_rules! impl_primitive {
    ($($ty:ty => $size:expr, $write:ident, $read:ident);* $(;)?) => {
        $(
            impl Primitive for $ty {
                const SIZE: usize = $size;

                #[inline(always)]
                fn write_le(self, buf: &mut [u8]) {
                    LittleEndian::$write(buf, self);
                }

                #[inline(always)]
                fn read_le(buf: &[u8]) -> Self {
                    LittleEndian::$read(buf)
                }
            }
        )*
    };
}

impl_primitive! {
    u16 => 2, write_u16, read_u16;
    i16 => 2, write_i16, read_i16;
    u32 => 4, write_u32, read_u32;
    i32 => 4, write_i32, read_i32;
    u64 => 8, write_u64, read_u64;
    i64 => 8, write_i64, read_i64;
    u128 => 16, write_u128, read_u128;
    i128 => 16, write_i128, read_i128;
    f32 => 4, write_f32, read_f32;
    f64 => 8, write_f64, read_f64;
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ByteBuffer {
    bf: Vec<u8>,
    capacity: Option<usize>,
}

impl ByteBuffer {
    /// An empty buffer that grows on demand.
    pub fn new() -> Self {
        Self::default()
    }

    /// A zero-filled buffer of exactly `capacity` bytes that never grows.
    pub fn fixed(capacity: usize) -> Self {
        ByteBuffer {
            bf: vec![0; capacity],
            capacity: Some(capacity),
        }
    }

    /// Wraps existing bytes; the result grows on demand.
    pub fn from_vec(bf: Vec<u8>) -> Self {
        ByteBuffer { bf, capacity: None }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.bf.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.bf.is_empty()
    }

    /// `None` for growable buffers.
    #[inline(always)]
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[u8] {
        &self.bf
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.bf
    }

    /// Shortens the buffer; reads past the new end fail afterwards.
    pub fn truncate(&mut self, len: usize) {
        self.bf.truncate(len);
    }

    /// Bytes `offset..offset + len`, growing the buffer when allowed.
    pub fn window_mut(&mut self, offset: usize, len: usize) -> Result<&mut [u8], Error> {
        let limit = self.capacity.unwrap_or(self.bf.len());
        let end = offset
            .checked_add(len)
            .ok_or_else(|| Error::buffer_overflow(usize::MAX, limit))?;
        if end > self.bf.len() {
            match self.capacity {
                Some(capacity) if end > capacity => {
                    return Err(Error::buffer_overflow(end, capacity));
                }
                Some(_) | None => {
                    self.bf
                        .try_reserve(end - self.bf.len())
                        .map_err(|_| Error::buffer_overflow(end, limit))?;
                    self.bf.resize(end, 0);
                }
            }
        }
        Ok(&mut self.bf[offset..end])
    }

    /// Bytes `offset..offset + len`; never grows.
    pub fn window(&self, offset: usize, len: usize) -> Result<&[u8], Error> {
        let end = offset
            .checked_add(len)
            .ok_or_else(|| Error::buffer_overflow(usize::MAX, self.bf.len()))?;
        self.bf
            .get(offset..end)
            .ok_or_else(|| Error::buffer_overflow(end, self.bf.len()))
    }

    #[inline(always)]
    pub fn write<T: Primitive>(&mut self, offset: usize, value: T) -> Result<(), Error> {
        value.write_le(self.window_mut(offset, T::SIZE)?);
        Ok(())
    }

    #[inline(always)]
    pub fn read<T: Primitive>(&self, offset: usize) -> Result<T, Error> {
        Ok(T::read_le(self.window(offset, T::SIZE)?))
    }
}

impl From<Vec<u8>> for ByteBuffer {
    fn from(bf: Vec<u8>) -> Self {
        ByteBuffer::from_vec(bf)
    }
}
