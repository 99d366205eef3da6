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

//! Adapters: a [`Reader`] plus an optional prototype host.
//!
//! The prototype is the "defaulted adaptee": an independently constructed
//! host that mappings clone when they need a fresh instance of a side
//! without a live host (see [`Mapping::to_right`](crate::mapping::Mapping::to_right)).
//!
//! Adapters compose with [`Adapter::then`], which reads in application
//! order, or with [`compose!`](crate::compose), which reads like nested
//! function calls.
//! Composition is checked by the compiler: the next adapter must accept the
//! target of the previous one as its host.
//!
//! ```rust
//! use convertible_core::adapter::{deref, maybe};
//! use convertible_core::field;
//!
//! #[derive(Clone, Default)]
//! struct Node {
//!     next: Option<Box<Node>>,
//!     label: Option<String>,
//! }
//!
//! let next_label = field!(Node, next).then(deref()).then(field!(Node, label)).then(maybe());
//! let node = Node {
//!     next: Some(Box::new(Node { next: None, label: Some("tail".into()) })),
//!     label: None,
//! };
//! assert_eq!(next_label.get(&node).map(String::as_str), Some("tail"));
//! ```

use std::fmt;

use crate::error::Error;
use crate::reader::{Compose, Deref, Identity, Index, Indexed, Maybe, Pointer, Reader};
use crate::source::Source;

pub struct Adapter<R: Reader> {
    reader: R,
    prototype: Option<R::Host>,
}

impl<R: Reader> Adapter<R> {
    pub fn new(reader: R) -> Self {
        Adapter {
            reader,
            prototype: None,
        }
    }

    /// An adapter pre-attached to a prototype host.
    pub fn bound(reader: R, prototype: R::Host) -> Self {
        Adapter {
            reader,
            prototype: Some(prototype),
        }
    }

    pub fn with_prototype(mut self, prototype: R::Host) -> Self {
        self.prototype = Some(prototype);
        self
    }

    #[inline(always)]
    pub fn reader(&self) -> &R {
        &self.reader
    }

    #[inline(always)]
    pub fn prototype(&self) -> Option<&R::Host> {
        self.prototype.as_ref()
    }

    /// A fresh host: the prototype when one is bound, `Default` otherwise.
    pub fn defaulted(&self) -> R::Host
    where
        R::Host: Clone + Default,
    {
        self.prototype.clone().unwrap_or_default()
    }

    #[inline(always)]
    pub fn get<'a>(&self, host: &'a R::Host) -> Option<&'a R::Target> {
        self.reader.get(host)
    }

    #[inline(always)]
    pub fn get_mut<'a>(&self, host: &'a mut R::Host) -> Option<&'a mut R::Target> {
        self.reader.get_mut(host)
    }

    #[inline(always)]
    pub fn write<'a>(&self, host: &'a mut R::Host) -> Result<&'a mut R::Target, Error> {
        self.reader.write(host)
    }

    /// Whether the target is present in `host`.
    #[inline(always)]
    pub fn enabled(&self, host: &R::Host) -> bool {
        self.reader.get(host).is_some()
    }

    /// Projects a host handle onto the target, keeping its ownership mode.
    #[inline(always)]
    pub fn view<'a>(&self, host: Source<'a, R::Host>) -> Option<Source<'a, R::Target>> {
        host.try_map(|h| self.reader.get(h), |h| self.reader.get_mut(h))
    }

    /// Chains `next` after this adapter. The prototype of `self` is kept.
    pub fn then<N>(self, next: Adapter<N>) -> Adapter<Compose<R, N>>
    where
        R::Target: 'static,
        N: Reader<Host = R::Target>,
    {
        Adapter {
            reader: Compose(self.reader, next.reader),
            prototype: self.prototype,
        }
    }
}

impl<R> Clone for Adapter<R>
where
    R: Reader + Clone,
    R::Host: Clone,
{
    fn clone(&self) -> Self {
        Adapter {
            reader: self.reader.clone(),
            prototype: self.prototype.clone(),
        }
    }
}

impl<R> fmt::Debug for Adapter<R>
where
    R: Reader + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Adapter")
            .field("reader", &self.reader)
            .field("bound", &self.prototype.is_some())
            .finish()
    }
}

/// The host itself.
pub fn identity<T>() -> Adapter<Identity<T>> {
    Adapter::new(Identity::new())
}

/// The element at `key`.
pub fn index<C, K>(key: K) -> Adapter<Index<C, K>>
where
    C: Indexed<K>,
{
    Adapter::new(Index::new(key))
}

/// The pointee of a box, shared pointer or nullable pointer.
pub fn deref<P: Pointer>() -> Adapter<Deref<P>> {
    Adapter::new(Deref::new())
}

/// The value of an `Option`; disabled when `None`.
pub fn maybe<T: Default>() -> Adapter<Maybe<T>> {
    Adapter::new(Maybe::new())
}

/// Wraps any reader.
pub fn adapter<R: Reader>(reader: R) -> Adapter<R> {
    Adapter::new(reader)
}

/// Adapter onto a struct member, `field!(Host, a.b)`.
#[macro_export]
macro_rules! field {
    ($host:ty, $($field:tt).+) => {
        $crate::adapter::Adapter::new($crate::reader::Field::new(
            stringify!($($field).+),
            |host: &$host| &host.$($field).+,
            |host: &mut $host| &mut host.$($field).+,
        ))
    };
}

/// Composes adapters like functions, right to left: `compose!(a, b, c)`
/// applies `c` to the host, then `b` to its target, then `a`. It is the
/// same adapter as `c.then(b).then(a)`.
#[macro_export]
macro_rules! compose {
    ($last:expr $(,)?) => {
        $last
    };
    ($outer:expr, $($inner:expr),+ $(,)?) => {
        $crate::compose!($($inner),+).then($outer)
    };
}
