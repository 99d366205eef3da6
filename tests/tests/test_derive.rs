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

use std::collections::{BTreeMap, HashMap};

use convertible::converter::{Converter, Parse};
use convertible::operator::{assign_left, assign_right, equal_left, equal_right};
use convertible::{
    field, impl_scalar, moved, Error, Identity, Mapping, MappingTable, Scalar, Source,
};

mod test_helpers;
use test_helpers::strings;

#[derive(Scalar, Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Status {
    #[default]
    Active,
    Blocked,
}

/// Status names as stored in text columns.
#[derive(Clone, Copy, Debug, Default)]
struct StatusText;

impl StatusText {
    fn parse(text: &str) -> Result<Status, Error> {
        match text {
            "active" => Ok(Status::Active),
            "blocked" => Ok(Status::Blocked),
            other => Err(Error::parse(format!("unknown status `{other}`"))),
        }
    }

    fn name(status: Status) -> &'static str {
        match status {
            Status::Active => "active",
            Status::Blocked => "blocked",
        }
    }
}

impl Converter<Status, String> for StatusText {
    fn assign_to_right(&self, src: Source<'_, Status>, dst: &mut String) -> Result<(), Error> {
        *dst = Self::name(*src.get()).to_string();
        Ok(())
    }

    fn assign_to_left(&self, src: Source<'_, String>, dst: &mut Status) -> Result<(), Error> {
        *dst = Self::parse(src.get())?;
        Ok(())
    }

    fn equal_to_right(&self, src: &Status, dst: &String) -> Result<bool, Error> {
        Ok(dst == Self::name(*src))
    }

    fn equal_to_left(&self, src: &String, dst: &Status) -> Result<bool, Error> {
        Ok(Self::parse(src).map_or(false, |status| status == *dst))
    }
}

#[test]
fn test_derived_enum_leaf() {
    let mut statuses = vec![Status::Active; 1];
    assign_left(&mut statuses, &strings(&["blocked", "active"]), &StatusText).unwrap();
    assert_eq!(statuses, vec![Status::Blocked, Status::Active]);
    assert!(equal_left(&statuses, &strings(&["blocked", "active"]), &StatusText).unwrap());

    let mut names: Vec<String> = Vec::new();
    assign_right(&statuses, &mut names, &StatusText).unwrap();
    assert_eq!(names, strings(&["blocked", "active"]));

    let err = assign_left(&mut statuses, &strings(&["gone"]), &StatusText).unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
}

#[derive(Scalar, Clone, Debug, Default, PartialEq)]
struct Tagged<T> {
    tag: String,
    value: T,
}

#[derive(Scalar, Clone, Debug, Default, PartialEq)]
struct TaggedRow {
    tag: String,
    value: String,
}

#[test]
fn test_derived_generic_host_inside_map_values() {
    let table = MappingTable::new()
        .with(Mapping::new(field!(Tagged<i32>, tag), field!(TaggedRow, tag)))
        .with(Mapping::with_converter(
            field!(Tagged<i32>, value),
            field!(TaggedRow, value),
            Parse::<i32>::strict(),
        ));

    let mut src: HashMap<u8, Tagged<i32>> = HashMap::new();
    src.insert(1, Tagged { tag: "x".into(), value: 10 });
    src.insert(2, Tagged { tag: "y".into(), value: -3 });
    let mut dst: BTreeMap<u8, TaggedRow> = BTreeMap::from([(9, TaggedRow::default())]);

    assign_right(moved(&mut src), &mut dst, &table).unwrap();
    assert_eq!(dst.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(dst[&2], TaggedRow { tag: "y".into(), value: "-3".into() });
    assert_eq!(src[&1].tag, "");

    for (key, tagged) in src.iter_mut() {
        tagged.tag = dst[key].tag.clone();
    }
    assert!(equal_right(&src, &dst, &table).unwrap());
}

#[derive(Clone, Debug, Default, PartialEq)]
struct Percent(u8);

impl_scalar!(Percent);

impl From<u8> for Percent {
    fn from(value: u8) -> Self {
        Percent(value.min(100))
    }
}

impl From<Percent> for u8 {
    fn from(value: Percent) -> Self {
        value.0
    }
}

impl PartialEq<u8> for Percent {
    fn eq(&self, other: &u8) -> bool {
        self.0 == *other
    }
}

impl PartialEq<Percent> for u8 {
    fn eq(&self, other: &Percent) -> bool {
        *self == other.0
    }
}

#[test]
fn test_macro_declared_leaf_with_identity() {
    let raw = [40u8, 250];
    let mut clamped: Vec<Percent> = Vec::new();
    assign_right(&raw, &mut clamped, &Identity).unwrap();
    assert_eq!(clamped, vec![Percent(40), Percent(100)]);
    assert!(!equal_right(&raw, &clamped, &Identity).unwrap());
    assert!(equal_right(&[40u8], &vec![Percent(40)], &Identity).unwrap());
}
