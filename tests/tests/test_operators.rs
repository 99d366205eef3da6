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

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

use convertible::converter::{Cast, Parse};
use convertible::operator::{assign, assign_left, assign_right, equal, equal_left, equal_right};
use convertible::{moved, Direction, Error, Identity};

mod test_helpers;
use test_helpers::strings;

#[test]
fn test_resizable_destination_takes_source_length() {
    let conv = Parse::<i32>::strict();
    let lhs = vec![1, 2];
    let mut rhs = strings(&["x"]);
    assign_right(&lhs, &mut rhs, &conv).unwrap();
    assert_eq!(rhs, strings(&["1", "2"]));
    assert!(equal_right(&lhs, &rhs, &conv).unwrap());

    let mut longer = strings(&["7", "8", "9"]);
    assign_right(&lhs, &mut longer, &conv).unwrap();
    assert_eq!(longer, strings(&["1", "2"]));
}

#[test]
fn test_fixed_destination_keeps_its_length() {
    let src = strings(&["a", "b"]);
    let mut one = [String::from("x")];
    assign_right(&src, &mut one, &Identity).unwrap();
    assert_eq!(one, ["a".to_string()]);
    assert!(equal_right(&src, &one, &Identity).unwrap());

    let mut three = [String::new(), String::new(), String::from("tail")];
    assign_right(&src, &mut three, &Identity).unwrap();
    assert_eq!(three, ["a", "b", "tail"].map(String::from));
    assert!(!equal_right(&src, &three, &Identity).unwrap());
}

#[test]
fn test_sequence_equality_bounds() {
    let conv = Parse::<u8>::strict();
    let resizable = strings(&["1", "2", "3"]);
    assert!(!equal_left(&vec![1u8, 2], &resizable, &conv).unwrap());
    assert!(equal_left(&[1u8, 2], &resizable, &conv).unwrap());
    assert!(!equal_left(&[1u8, 2, 3, 4], &resizable, &conv).unwrap());
    assert!(!equal_left(&[1u8, 5], &resizable, &conv).unwrap());
}

#[test]
fn test_moved_sequence_leaves_sources_empty() {
    let mut src = strings(&["a", "b"]);
    let mut dst: VecDeque<String> = VecDeque::new();
    assign_right(moved(&mut src), &mut dst, &Identity).unwrap();
    assert_eq!(dst, VecDeque::from(strings(&["a", "b"])));
    assert_eq!(src, strings(&["", ""]));
    assert!(!equal_right(&src, &dst, &Identity).unwrap());
}

#[test]
fn test_map_is_cleared_before_fill() {
    let conv = Parse::<i32>::strict();
    let src = BTreeMap::from([(1, "1".to_string())]);
    let mut dst = HashMap::from([(7, 7), (1, 0)]);
    assign_left(&mut dst, &src, &conv).unwrap();
    assert_eq!(dst, HashMap::from([(1, 1)]));
    assert!(equal_left(&dst, &src, &conv).unwrap());
    assert!(equal_right(&dst, &src, &conv).unwrap());
}

#[test]
fn test_lenient_map_assign_is_exact() {
    let conv = Parse::or(1i32);
    let text = BTreeMap::from([(1, "a".to_string())]);
    let mut numbers: HashMap<i32, i32> = HashMap::new();
    assign_left(&mut numbers, &text, &conv).unwrap();
    assert_eq!(numbers, HashMap::from([(1, 1)]));
    assert!(equal_left(&numbers, &text, &conv).unwrap());

    let mut back: BTreeMap<i32, String> = BTreeMap::from([(5, "5".to_string())]);
    assign_right(&numbers, &mut back, &conv).unwrap();
    assert_eq!(back, BTreeMap::from([(1, "1".to_string())]));
}

#[test]
fn test_failed_assign_keeps_partial_state() {
    let conv = Parse::<i32>::strict();

    let mut numbers = vec![7, 7, 7, 7];
    let err = assign_left(&mut numbers, &strings(&["1", "x", "3"]), &conv).unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
    assert_eq!(numbers, vec![1, 7, 7]);

    let text = BTreeMap::from([
        (1u8, "1".to_string()),
        (2u8, "x".to_string()),
        (3u8, "3".to_string()),
    ]);
    let mut table = BTreeMap::from([(9u8, 9)]);
    assert!(assign_left(&mut table, &text, &conv).is_err());
    assert_eq!(table, BTreeMap::from([(1, 1), (2, 0)]));
}

#[test]
fn test_map_equality_needs_same_keys() {
    let conv = Parse::<i32>::strict();
    let text = HashMap::from([("a", "1".to_string()), ("b", "2".to_string())]);
    let same = BTreeMap::from([("a", 1), ("b", 2)]);
    let fewer = BTreeMap::from([("a", 1)]);
    let other = BTreeMap::from([("a", 1), ("c", 2)]);
    assert!(equal_right(&same, &text, &conv).unwrap());
    assert!(!equal_right(&fewer, &text, &conv).unwrap());
    assert!(!equal_right(&other, &text, &conv).unwrap());
}

#[test]
fn test_map_of_vectors() {
    let conv = Parse::<i64>::strict();
    let mut src: HashMap<String, Vec<i64>> = HashMap::new();
    src.insert("odd".into(), vec![1, 3]);
    src.insert("even".into(), vec![2]);
    let mut dst: BTreeMap<String, Vec<String>> = BTreeMap::new();
    assign_right(moved(&mut src), &mut dst, &conv).unwrap();
    assert_eq!(dst["odd"], strings(&["1", "3"]));
    assert_eq!(dst["even"], strings(&["2"]));
    assert_eq!(src.len(), 2);
}

#[test]
fn test_set_conversion() {
    let conv = Parse::<u32>::strict();
    let numbers = BTreeSet::from([10u32, 20]);
    let mut text: HashSet<String> = HashSet::from(["stale".to_string()]);
    assign_right(&numbers, &mut text, &conv).unwrap();
    assert_eq!(text, HashSet::from(["10".to_string(), "20".to_string()]));
    assert!(equal_right(&numbers, &text, &conv).unwrap());
    assert!(equal_left(&numbers, &text, &conv).unwrap());

    let mut drained = numbers.clone();
    let mut again: HashSet<String> = HashSet::new();
    assign_right(moved(&mut drained), &mut again, &conv).unwrap();
    assert!(drained.is_empty());
    assert_eq!(again, text);
}

#[test]
fn test_option_recursion() {
    let conv = Parse::<i32>::or(0);
    let mut dst: Option<i32> = Some(5);
    assign_left(&mut dst, &None::<String>, &conv).unwrap();
    assert_eq!(dst, None);

    assign_left(&mut dst, &Some("n/a".to_string()), &conv).unwrap();
    assert_eq!(dst, Some(0));

    assert!(equal_right(&None::<i32>, &None::<String>, &conv).unwrap());
    assert!(!equal_right(&Some(1), &None::<String>, &conv).unwrap());
}

#[test]
fn test_shared_pointers_detach() {
    let original = Rc::new(vec![1u16, 2]);
    let mut copy = Rc::clone(&original);
    assign_left(&mut copy, &Rc::new(strings(&["3"])), &Parse::<u16>::strict()).unwrap();
    assert_eq!(*original, vec![1, 2]);
    assert_eq!(*copy, vec![3]);

    let mut narrow = Arc::new(0u8);
    assign_right(&Arc::new(200i64), &mut narrow, &Cast).unwrap();
    assert_eq!(*narrow, 200);
    let err = assign_right(&Arc::new(-1i64), &mut narrow, &Cast).unwrap_err();
    assert!(matches!(err, Error::Conversion(_)));
    assert_eq!(*narrow, 200);

    let mut boxed = Box::new(String::new());
    assign_right(&Box::new(-3i64), &mut boxed, &Parse::<i64>::strict()).unwrap();
    assert_eq!(*boxed, "-3");
}

#[test]
fn test_tuples_convert_per_element() {
    let mut lhs = (1i32, strings(&["x"]));
    let mut rhs = (0i32, Vec::<String>::new());
    assign(Direction::LeftToRight, &mut lhs, &mut rhs, &Identity).unwrap();
    assert_eq!(rhs, (1, strings(&["x"])));
    assert!(equal(Direction::RightToLeft, &lhs, &rhs, &Identity).unwrap());
}
