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

use std::sync::Arc;

use crate::error::Error;
use crate::operator::{Assign, Equal};
use crate::source::Source;

/// Same copy-on-write policy as the `Rc` impl.
impl<T, U, C, D> Assign<Arc<U>, C, D> for Arc<T>
where
    T: Assign<U, C, D> + Clone,
    U: Clone,
{
    fn assign_from(&mut self, src: Source<'_, Arc<U>>, converter: &C) -> Result<(), Error> {
        let src = src.map(|arc| &**arc, |arc| Arc::make_mut(arc));
        Arc::make_mut(self).assign_from(src, converter)
    }
}

impl<T, U, C, D> Equal<Arc<U>, C, D> for Arc<T>
where
    T: Equal<U, C, D>,
{
    #[inline(always)]
    fn equal_to(&self, src: &Arc<U>, converter: &C) -> Result<bool, Error> {
        (**self).equal_to(&**src, converter)
    }
}
