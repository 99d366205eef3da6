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

//! Error type shared by every operation of the engine.
//!
//! Length mismatches, absent optional values and partial key overlap are
//! policy branches of the operators and never surface here. Errors are
//! confined to accessor and converter failures (byte-range overflow, parse
//! failures, checked casts) and to mapping tables asked for a host pair
//! they have no mapping for.

use std::borrow::Cow;

use thiserror::Error;

/// Set `CONVERTIBLE_PANIC_ON_ERROR` at compile time to panic where an error
/// is created instead of returning it.
pub const PANIC_ON_ERROR: bool = option_env!("CONVERTIBLE_PANIC_ON_ERROR").is_some();

#[inline(always)]
pub const fn should_panic_on_error() -> bool {
    PANIC_ON_ERROR
}

/// Error type for assign and equal operations.
///
/// Always build errors with the static constructor functions
/// ([`Error::buffer_overflow`], [`Error::parse`], [`Error::no_mapping`], ...)
/// rather than the variants directly, so that `CONVERTIBLE_PANIC_ON_ERROR`
/// can point at the creation site.
///
/// ```rust
/// use convertible_core::error::Error;
///
/// let err = Error::buffer_overflow(8, 4);
/// assert_eq!(err.to_string(), "Buffer overflow: 8 bytes required, capacity is 4");
/// ```
///
/// ## Debug Mode: CONVERTIBLE_PANIC_ON_ERROR
///
/// ```bash
/// RUST_BACKTRACE=1 CONVERTIBLE_PANIC_ON_ERROR=1 cargo test
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A byte range does not fit into fixed-capacity storage.
    ///
    /// Do not construct this variant directly; use [`Error::buffer_overflow`] instead.
    #[error("Buffer overflow: {required} bytes required, capacity is {capacity}")]
    BufferOverflow { required: usize, capacity: usize },

    /// A parsing converter rejected its input.
    ///
    /// Do not construct this variant directly; use [`Error::parse`] instead.
    #[error("{0}")]
    Parse(Cow<'static, str>),

    /// A checked cast between two value domains failed.
    ///
    /// Do not construct this variant directly; use [`Error::conversion`] instead.
    #[error("{0}")]
    Conversion(Cow<'static, str>),

    /// An index accessor tried to write past a non-resizable container.
    ///
    /// Do not construct this variant directly; use [`Error::index_out_of_bounds`] instead.
    #[error("Index out of bounds: index {index}, length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// A mapping table holds no mapping for the given host pair.
    ///
    /// Do not construct this variant directly; use [`Error::no_mapping`] instead.
    #[error("No mapping between `{lhs}` and `{rhs}`")]
    NoMapping {
        lhs: Cow<'static, str>,
        rhs: Cow<'static, str>,
    },

    /// A recursive table reference was used after its table was dropped.
    ///
    /// Do not construct this variant directly; use [`Error::table_dropped`] instead.
    #[error("Mapping table `{0}` was dropped while still referenced")]
    TableDropped(Cow<'static, str>),

    /// Generic unknown error.
    ///
    /// Do not construct this variant directly; use [`Error::unknown`] instead.
    #[error("{0}")]
    Unknown(Cow<'static, str>),
}

impl Error {
    /// Creates a new [`Error::BufferOverflow`].
    ///
    /// If `CONVERTIBLE_PANIC_ON_ERROR` is set, this will panic with the error message.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn buffer_overflow(required: usize, capacity: usize) -> Self {
        let err = Error::BufferOverflow { required, capacity };
        if PANIC_ON_ERROR {
            panic!("CONVERTIBLE_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::Parse`] from a string or static message.
    ///
    /// ```
    /// use convertible_core::error::Error;
    ///
    /// let err = Error::parse(format!("`{}` is not a number", "abc"));
    /// ```
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn parse<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::Parse(s.into());
        if PANIC_ON_ERROR {
            panic!("CONVERTIBLE_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::Conversion`] from a string or static message.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn conversion<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::Conversion(s.into());
        if PANIC_ON_ERROR {
            panic!("CONVERTIBLE_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::IndexOutOfBounds`].
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn index_out_of_bounds(index: usize, len: usize) -> Self {
        let err = Error::IndexOutOfBounds { index, len };
        if PANIC_ON_ERROR {
            panic!("CONVERTIBLE_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::NoMapping`] naming both host types.
    ///
    /// ```
    /// use convertible_core::error::Error;
    ///
    /// let err = Error::no_mapping(std::any::type_name::<i32>(), std::any::type_name::<String>());
    /// assert!(matches!(err, Error::NoMapping { .. }));
    /// ```
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn no_mapping<L, R>(lhs: L, rhs: R) -> Self
    where
        L: Into<Cow<'static, str>>,
        R: Into<Cow<'static, str>>,
    {
        let err = Error::NoMapping {
            lhs: lhs.into(),
            rhs: rhs.into(),
        };
        if PANIC_ON_ERROR {
            panic!("CONVERTIBLE_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::TableDropped`] for the table with the given label.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn table_dropped<S: Into<Cow<'static, str>>>(label: S) -> Self {
        let err = Error::TableDropped(label.into());
        if PANIC_ON_ERROR {
            panic!("CONVERTIBLE_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::Unknown`] from a string or static message.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn unknown<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::Unknown(s.into());
        if PANIC_ON_ERROR {
            panic!("CONVERTIBLE_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Appends the destination type to a [`Error::Parse`] or
    /// [`Error::Conversion`] message.
    #[inline(never)]
    pub fn enhance_conversion_error<T: ?Sized + 'static>(err: Error) -> Error {
        match err {
            Error::Parse(s) => {
                Error::parse(format!("{} (type: {})", s, std::any::type_name::<T>()))
            }
            Error::Conversion(s) => {
                Error::conversion(format!("{} (type: {})", s, std::any::type_name::<T>()))
            }
            other => other,
        }
    }
}

/// Ensures a condition is true; otherwise returns an [`enum@Error`].
///
/// # Examples
/// ```
/// use convertible_core::ensure;
/// use convertible_core::error::Error;
///
/// fn check_len(n: usize) -> Result<(), Error> {
///     ensure!(n > 0, "length must be positive");
///     ensure!(n <= 8, Error::buffer_overflow(n, 8));
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $msg:literal) => {
        if !$cond {
            return Err($crate::error::Error::unknown($msg));
        }
    };
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err);
        }
    };
    ($cond:expr, $fmt:expr, $($arg:tt)*) => {
        if !$cond {
            return Err($crate::error::Error::unknown(format!($fmt, $($arg)*)));
        }
    };
}

/// Returns early with an [`enum@Error`].
///
/// # Examples
/// ```
/// use convertible_core::bail;
/// use convertible_core::error::Error;
///
/// fn fail_fast() -> Result<(), Error> {
///     bail!("something went wrong");
/// }
/// ```
#[macro_export]
macro_rules! bail {
    ($err:expr) => {
        return Err($crate::error::Error::unknown($err))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::error::Error::unknown(format!($fmt, $($arg)*)))
    };
}
