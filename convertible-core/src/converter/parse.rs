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
use std::str::FromStr;

use crate::converter::Converter;
use crate::error::Error;
use crate::source::Source;

/// Converts between a number (or any `FromStr + Display` value) on the left
/// and its text form on the right.
///
/// A strict converter fails with [`Error::Parse`] on malformed text; one
/// built with [`Parse::or`] substitutes the fallback instead. Malformed text
/// never equals a value.
///
/// ```rust
/// use convertible_core::converter::{Converter, Parse};
/// use convertible_core::source::Source;
///
/// let lenient = Parse::or(0i32);
/// let mut n = 5;
/// lenient.assign_to_left(Source::from(&"not a number".to_string()), &mut n).unwrap();
/// assert_eq!(n, 0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Parse<T> {
    fallback: Option<T>,
}

impl<T> Parse<T> {
    pub fn strict() -> Self {
        Parse { fallback: None }
    }

    pub fn or(fallback: T) -> Self {
        Parse {
            fallback: Some(fallback),
        }
    }
}

impl<T: Default> Parse<T> {
    pub fn or_default() -> Self {
        Self::or(T::default())
    }
}

impl<T> Parse<T>
where
    T: FromStr + Clone + 'static,
    T::Err: Display,
{
    fn parse(&self, text: &str) -> Result<T, Error> {
        match text.trim().parse::<T>() {
            Ok(value) => Ok(value),
            Err(err) => match &self.fallback {
                Some(fallback) => Ok(fallback.clone()),
                None => Err(Error::enhance_conversion_error::<T>(Error::parse(format!(
                    "cannot parse `{}`: {}",
                    text, err
                )))),
            },
        }
    }
}

impl<T> Converter<T, String> for Parse<T>
where
    T: FromStr + Display + Clone + PartialEq + 'static,
    T::Err: Display,
{
    fn assign_to_right(&self, src: Source<'_, T>, dst: &mut String) -> Result<(), Error> {
        *dst = src.get().to_string();
        Ok(())
    }

    fn assign_to_left(&self, src: Source<'_, String>, dst: &mut T) -> Result<(), Error> {
        let text = match src {
            Source::Borrowed(text) => self.parse(text)?,
            Source::Moved(text) => {
                let value = self.parse(text)?;
                text.clear();
                value
            }
        };
        *dst = text;
        Ok(())
    }

    fn equal_to_right(&self, src: &T, dst: &String) -> Result<bool, Error> {
        Ok(*dst == src.to_string())
    }

    /// Text that does not parse compares unequal.
    fn equal_to_left(&self, src: &String, dst: &T) -> Result<bool, Error> {
        Ok(self.parse(src).map_or(false, |value| *dst == value))
    }
}
