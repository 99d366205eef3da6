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

use crate::error::Error;
use crate::operator::{Assign, Equal};
use crate::source::Source;

/// Element-wise impls for tuples of equal arity.
macro_rules! impl_tuple {
    ($(($T:ident, $U:ident, $idx:tt)),+) => {
        impl<$($T,)+ $($U,)+ C, D> Assign<($($U,)+), C, D> for ($($T,)+)
        where
            $($T: Assign<$U, C, D>,)+
        {
            fn assign_from(&mut self, src: Source<'_, ($($U,)+)>, converter: &C) -> Result<(), Error> {
                match src {
                    Source::Borrowed(src) => {
                        $(self.$idx.assign_from(Source::Borrowed(&src.$idx), converter)?;)+
                    }
                    Source::Moved(src) => {
                        $(self.$idx.assign_from(Source::Moved(&mut src.$idx), converter)?;)+
                    }
                }
                Ok(())
            }
        }

        impl<$($T,)+ $($U,)+ C, D> Equal<($($U,)+), C, D> for ($($T,)+)
        where
            $($T: Equal<$U, C, D>,)+
        {
            fn equal_to(&self, src: &($($U,)+), converter: &C) -> Result<bool, Error> {
                $(
                    if !self.$idx.equal_to(&src.$idx, converter)? {
                        return Ok(false);
                    }
                )+
                Ok(true)
            }
        }
    };
}

impl_tuple!((T0, U0, 0));
impl_tuple!((T0, U0, 0), (T1, U1, 1));
impl_tuple!((T0, U0, 0), (T1, U1, 1), (T2, U2, 2));
impl_tuple!((T0, U0, 0), (T1, U1, 1), (T2, U2, 2), (T3, U3, 3));
