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

use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;
use std::sync::Arc;

use crate::error::Error;
use crate::reader::Reader;

/// Owning and shared pointers.
///
/// Shared pointers are written copy-on-write, so a write through one
/// handle never shows through another.
pub trait Pointer {
    type Pointee;

    fn pointee(&self) -> Option<&Self::Pointee>;

    fn pointee_mut(&mut self) -> Option<&mut Self::Pointee>;

    fn pointee_or_insert(&mut self) -> Result<&mut Self::Pointee, Error>;
}

impl<T> Pointer for Box<T> {
    type Pointee = T;

    #[inline(always)]
    fn pointee(&self) -> Option<&T> {
        Some(&**self)
    }

    #[inline(always)]
    fn pointee_mut(&mut self) -> Option<&mut T> {
        Some(&mut **self)
    }

    #[inline(always)]
    fn pointee_or_insert(&mut self) -> Result<&mut T, Error> {
        Ok(&mut **self)
    }
}

impl<T: Clone> Pointer for Rc<T> {
    type Pointee = T;

    #[inline(always)]
    fn pointee(&self) -> Option<&T> {
        Some(&**self)
    }

    #[inline(always)]
    fn pointee_mut(&mut self) -> Option<&mut T> {
        Some(Rc::make_mut(self))
    }

    #[inline(always)]
    fn pointee_or_insert(&mut self) -> Result<&mut T, Error> {
        Ok(Rc::make_mut(self))
    }
}

impl<T: Clone> Pointer for Arc<T> {
    type Pointee = T;

    #[inline(always)]
    fn pointee(&self) -> Option<&T> {
        Some(&**self)
    }

    #[inline(always)]
    fn pointee_mut(&mut self) -> Option<&mut T> {
        Some(Arc::make_mut(self))
    }

    #[inline(always)]
    fn pointee_or_insert(&mut self) -> Result<&mut T, Error> {
        Ok(Arc::make_mut(self))
    }
}

/// A nullable pointer: `None` is absent, writing allocates a default.
impl<P: Pointer + Default> Pointer for Option<P> {
    type Pointee = P::Pointee;

    #[inline(always)]
    fn pointee(&self) -> Option<&P::Pointee> {
        self.as_ref().and_then(P::pointee)
    }

    #[inline(always)]
    fn pointee_mut(&mut self) -> Option<&mut P::Pointee> {
        self.as_mut().and_then(P::pointee_mut)
    }

    #[inline(always)]
    fn pointee_or_insert(&mut self) -> Result<&mut P::Pointee, Error> {
        self.get_or_insert_with(P::default).pointee_or_insert()
    }
}

/// Dereferences a [`Pointer`].
pub struct Deref<P>(PhantomData<fn() -> P>);

impl<P> Deref<P> {
    pub fn new() -> Self {
        Deref(PhantomData)
    }
}

impl<P> Default for Deref<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Clone for Deref<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for Deref<P> {}

impl<P> fmt::Debug for Deref<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "*{}", std::any::type_name::<P>())
    }
}

impl<P: Pointer> Reader for Deref<P> {
    type Host = P;
    type Target = P::Pointee;

    #[inline(always)]
    fn get<'a>(&self, host: &'a P) -> Option<&'a P::Pointee> {
        host.pointee()
    }

    #[inline(always)]
    fn get_mut<'a>(&self, host: &'a mut P) -> Option<&'a mut P::Pointee> {
        host.pointee_mut()
    }

    #[inline(always)]
    fn write<'a>(&self, host: &'a mut P) -> Result<&'a mut P::Pointee, Error> {
        host.pointee_or_insert()
    }
}
