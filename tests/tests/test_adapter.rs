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
use std::rc::Rc;
use std::sync::Arc;

use convertible::adapter::{adapter, deref, identity, index, maybe};
use convertible::reader::Reader;
use convertible::{compose, field, moved, Adapter, Error, Mapping, Source};

#[derive(Clone, Debug, Default, PartialEq)]
struct Settings {
    values: HashMap<String, Vec<Option<i32>>>,
    shared: Rc<Vec<String>>,
    parent: Option<Box<Settings>>,
    name: String,
}

#[test]
fn test_compose_applies_innermost_first() {
    let second_limit = compose!(
        maybe(),
        index(1usize),
        index("limits".to_string()),
        field!(Settings, values)
    );
    let mut settings = Settings::default();
    assert!(!second_limit.enabled(&settings));
    *second_limit.write(&mut settings).unwrap() = 30;
    assert_eq!(settings.values["limits"], vec![None, Some(30)]);
    assert_eq!(second_limit.get(&settings), Some(&30));
}

#[test]
fn test_then_matches_compose() {
    let chained = field!(Settings, parent)
        .then(deref())
        .then(field!(Settings, name));
    let composed = compose!(field!(Settings, name), deref(), field!(Settings, parent));

    let mut settings = Settings::default();
    assert!(chained.get(&settings).is_none());
    chained.write(&mut settings).unwrap().push_str("root");
    assert_eq!(composed.get(&settings).map(String::as_str), Some("root"));
    assert!(settings.parent.is_some());
}

#[test]
fn test_shared_pointer_writes_detach() {
    let first = compose!(index(0usize), deref(), field!(Settings, shared));
    let mut settings = Settings::default();
    let other = settings.clone();
    *first.write(&mut settings).unwrap() = "own".to_string();
    assert_eq!(*settings.shared, vec!["own".to_string()]);
    assert!(other.shared.is_empty());

    let arc_adapter = identity::<Arc<String>>().then(deref());
    let mut value = Arc::new(String::from("a"));
    let alias = Arc::clone(&value);
    arc_adapter.write(&mut value).unwrap().push('b');
    assert_eq!(*value, "ab");
    assert_eq!(*alias, "a");
}

#[test]
fn test_fixed_and_keyed_indexes() {
    let third: Adapter<_> = index::<[u8; 2], usize>(2);
    let mut pair = [1u8, 2];
    assert!(third.get(&pair).is_none());
    assert_eq!(third.write(&mut pair).unwrap_err(), Error::index_out_of_bounds(2, 2));

    let keyed = index::<BTreeMap<&str, u8>, &str>("k");
    let mut map = BTreeMap::new();
    *keyed.write(&mut map).unwrap() += 4;
    assert_eq!(map.get("k"), Some(&4));
}

#[test]
fn test_view_keeps_ownership_mode() {
    let name = field!(Settings, name);
    let mut settings = Settings {
        name: "cfg".into(),
        ..Default::default()
    };
    let borrowed = name.view(Source::from(&settings)).unwrap();
    assert!(!borrowed.is_moved());

    let taken = name.view(moved(&mut settings)).unwrap().into_owned();
    assert_eq!(taken, "cfg");
    assert_eq!(settings.name, "");
}

#[test]
fn test_prototype_survives_composition() {
    let proto = Settings {
        name: "proto".into(),
        ..Default::default()
    };
    let named = field!(Settings, name).with_prototype(proto.clone());
    assert_eq!(named.defaulted(), proto);
    let deeper = named.then(identity());
    assert_eq!(deeper.prototype(), Some(&proto));
    assert_eq!(field!(Settings, name).defaulted(), Settings::default());
}

#[derive(Clone, Debug, Default, PartialEq)]
struct Switch {
    on: bool,
    value: String,
}

/// The value of a switch, present only while the switch is on.
#[derive(Clone, Copy, Debug, Default)]
struct WhenOn;

impl Reader for WhenOn {
    type Host = Switch;
    type Target = String;

    fn get<'a>(&self, host: &'a Switch) -> Option<&'a String> {
        host.on.then_some(&host.value)
    }

    fn get_mut<'a>(&self, host: &'a mut Switch) -> Option<&'a mut String> {
        if host.on {
            Some(&mut host.value)
        } else {
            None
        }
    }

    fn write<'a>(&self, host: &'a mut Switch) -> Result<&'a mut String, Error> {
        host.on = true;
        Ok(&mut host.value)
    }
}

#[test]
fn test_user_reader_gates_mapping() {
    let map = Mapping::new(adapter(WhenOn), adapter(WhenOn));
    let off = Switch {
        on: false,
        value: "hidden".into(),
    };
    let mut target = Switch::default();
    map.assign_right(&off, &mut target).unwrap();
    assert_eq!(target, Switch::default());
    assert!(!map.equal_right(&off, &Switch { on: true, ..Default::default() }).unwrap());

    let on = Switch {
        on: true,
        value: "shown".into(),
    };
    map.assign_right(&on, &mut target).unwrap();
    assert_eq!(target, on);
    assert!(map.equal_right(&on, &target).unwrap());
}
