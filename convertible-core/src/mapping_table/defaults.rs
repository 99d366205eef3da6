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

use std::any::{Any, TypeId};
use std::fmt;

/// One defaulted host per distinct type, in the order the types first
/// appear in the table.
#[derive(Default)]
pub struct Defaults {
    values: Vec<(&'static str, Box<dyn Any>)>,
}

impl Defaults {
    pub(crate) fn push(&mut self, name: &'static str, value: Box<dyn Any>) {
        self.values.push((name, value));
    }

    pub(crate) fn contains_type(&self, ty: TypeId) -> bool {
        self.values.iter().any(|(_, v)| (**v).type_id() == ty)
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Box<dyn Any>> {
        self.values.iter_mut().map(|(_, v)| v)
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get<T: Any>(&self) -> Option<&T> {
        self.values.iter().find_map(|(_, v)| v.downcast_ref::<T>())
    }

    pub fn get_mut<T: Any>(&mut self) -> Option<&mut T> {
        self.values.iter_mut().find_map(|(_, v)| v.downcast_mut::<T>())
    }

    /// Removes and returns the value of type `T`.
    pub fn take<T: Any>(&mut self) -> Option<T> {
        let pos = self.values.iter().position(|(_, v)| v.is::<T>())?;
        let (_, value) = self.values.remove(pos);
        value.downcast::<T>().ok().map(|v| *v)
    }

    pub fn type_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.values.iter().map(|(name, _)| *name)
    }
}

impl fmt::Debug for Defaults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.type_names()).finish()
    }
}
