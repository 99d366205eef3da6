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

use crate::buffer::ByteBuffer;

/// Marks types as scalar leaves: assigning or comparing them hands the
/// value straight to the converter.
///
/// ```rust
/// use convertible_core::converter::Identity;
/// use convertible_core::impl_scalar;
/// use convertible_core::operator::assign_right;
///
/// #[derive(Clone, Debug, Default, PartialEq)]
/// struct Celsius(i32);
///
/// impl_scalar!(Celsius);
///
/// let mut out = Celsius(0);
/// assign_right(&Celsius(21), &mut out, &Identity).unwrap();
/// assert_eq!(out, Celsius(21));
/// ```
///
/// Generic types are covered by `#[derive(Scalar)]`.
#[macro_export]
macro_rules! impl_scalar {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl<__Src, __C, __D> $crate::operator::Assign<__Src, __C, __D> for $ty
            where
                __C: $crate::converter::Convert<$ty, __Src, __D>,
            {
                #[inline(always)]
                fn assign_from(
                    &mut self,
                    src: $crate::source::Source<'_, __Src>,
                    converter: &__C,
                ) -> ::std::result::Result<(), $crate::error::Error> {
                    converter.convert(src, self)
                }
            }

            impl<__Src, __C, __D> $crate::operator::Equal<__Src, __C, __D> for $ty
            where
                __C: $crate::converter::Convert<$ty, __Src, __D>,
            {
                #[inline(always)]
                fn equal_to(
                    &self,
                    src: &__Src,
                    converter: &__C,
                ) -> ::std::result::Result<bool, $crate::error::Error> {
                    converter.compare(src, self)
                }
            }
        )+
    };
}

impl_scalar!(bool, char, String, ByteBuffer);
impl_scalar!(i8, i16, i32, i64, i128, isize);
impl_scalar!(u8, u16, u32, u64, u128, usize);
impl_scalar!(f32, f64);
