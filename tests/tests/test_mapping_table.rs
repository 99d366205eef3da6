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

use std::thread;

use convertible::converter::{Cast, Parse};
use convertible::{field, moved, Direction, Error, Mapping, MappingTable, Scalar};

mod test_helpers;
use test_helpers::init_tracing;

#[derive(Clone, Debug, Default, PartialEq)]
struct A {
    v: i32,
}

#[derive(Clone, Debug, Default, PartialEq)]
struct B {
    v: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
struct C {
    v: i64,
}

#[derive(Clone, Debug, Default, PartialEq)]
struct Tag {
    name: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
struct TagRow {
    name: String,
}

fn abc() -> MappingTable {
    MappingTable::new()
        .label("abc")
        .with(Mapping::with_converter(
            field!(A, v),
            field!(B, v),
            Parse::<i32>::strict(),
        ))
        .with(Mapping::with_converter(field!(A, v), field!(C, v), Cast))
        .with(Mapping::new(field!(Tag, name), field!(TagRow, name)))
}

#[test]
fn test_table_applies_only_mappings_of_the_pair() {
    init_tracing();
    let table = abc();
    let a = A { v: 5 };
    let mut b = B::default();
    let mut c = C { v: -1 };

    table.assign_right(&a, &mut b).unwrap();
    assert_eq!(b.v, "5");
    assert_eq!(c.v, -1);
    assert!(!table.equal_right(&a, &c).unwrap());

    table.assign(Direction::LeftToRight, &mut A { v: 6 }, &mut c).unwrap();
    assert_eq!(c.v, 6);
    assert_eq!(b.v, "5");
    assert!(table.equal(Direction::RightToLeft, &A { v: 6 }, &c).unwrap());
}

#[test]
fn test_defaulted_sides_hold_one_host_per_type() {
    let table = abc();
    let rhs = table.defaulted_rhs();
    assert_eq!(rhs.len(), 3);
    assert_eq!(rhs.get::<B>(), Some(&B::default()));
    assert_eq!(rhs.get::<C>(), Some(&C::default()));
    assert!(rhs.get::<A>().is_none());

    let lhs = table.defaulted_lhs();
    assert_eq!(lhs.len(), 2);
    let names: Vec<_> = lhs.type_names().collect();
    assert!(names[0].ends_with("::A"));
    assert!(names[1].ends_with("::Tag"));
}

#[test]
fn test_to_right_all_fills_paired_types() {
    let table = abc();
    let mut all = table.to_right_all(&A { v: 12 }).unwrap();
    assert_eq!(all.take::<B>(), Some(B { v: "12".into() }));
    assert_eq!(all.take::<C>(), Some(C { v: 12 }));
    assert_eq!(all.take::<TagRow>(), Some(TagRow::default()));
    assert!(all.is_empty());

    let back = table.to_left_all(&B { v: "3".into() }).unwrap();
    assert_eq!(back.get::<A>(), Some(&A { v: 3 }));
    assert_eq!(back.get::<Tag>(), Some(&Tag::default()));
}

#[test]
fn test_functional_form_and_missing_pairs() {
    let table = abc();
    let c: C = table.to_right(&A { v: 9 }).unwrap();
    assert_eq!(c, C { v: 9 });
    let a: A = table.to_left(&B { v: "4".into() }).unwrap();
    assert_eq!(a, A { v: 4 });

    let err = table.equal_right(&B::default(), &A::default()).unwrap_err();
    assert_eq!(
        err,
        Error::no_mapping(std::any::type_name::<B>(), std::any::type_name::<A>())
    );
    assert!(table.to_right::<A, Tag>(&A::default()).is_err());

    let narrow = table.assign_left(&mut A::default(), &C { v: i64::MAX });
    assert!(matches!(narrow, Err(Error::Conversion(_))));
}

#[test]
fn test_unconvertible_values_compare_unequal() {
    let table = abc();
    let words = B { v: "four".into() };
    assert!(matches!(
        table.assign_left(&mut A::default(), &words),
        Err(Error::Parse(_))
    ));
    assert!(!table.equal_left(&A { v: 4 }, &words).unwrap());
    assert!(!table.equal_right(&A { v: 4 }, &words).unwrap());
    assert!(!table.equal_left(&A { v: 1 }, &C { v: i64::MAX }).unwrap());
}

#[test]
fn test_moved_host_through_table() {
    let table = abc();
    let mut tag = Tag {
        name: "urgent".into(),
    };
    let mut row = TagRow::default();
    table.assign_right(moved(&mut tag), &mut row).unwrap();
    assert_eq!(row.name, "urgent");
    assert_eq!(tag.name, "");
    assert!(!table.equal_right(&tag, &row).unwrap());
    assert!(!table.equal_left(&tag, &row).unwrap());
}

#[derive(Scalar, Clone, Debug, Default, PartialEq)]
struct Node {
    value: i32,
    next: Option<Box<Node>>,
}

#[derive(Scalar, Clone, Debug, Default, PartialEq)]
struct NodeDto {
    value: String,
    next: Option<Box<NodeDto>>,
}

fn list(values: &[i32]) -> Option<Box<Node>> {
    values.iter().rev().fold(None, |next, &value| {
        Some(Box::new(Node { value, next }))
    })
}

fn depth(mut node: Option<&NodeDto>) -> usize {
    let mut levels = 0;
    while let Some(current) = node {
        levels += 1;
        node = current.next.as_deref();
    }
    levels
}

#[test]
fn test_recursive_table_stops_at_the_last_node() {
    init_tracing();
    let table = MappingTable::new().label("nodes").recursive(|this, table| {
        table
            .with(Mapping::with_converter(
                field!(Node, value),
                field!(NodeDto, value),
                Parse::<i32>::strict(),
            ))
            .with(Mapping::with_converter(
                field!(Node, next),
                field!(NodeDto, next),
                this,
            ))
    });

    let head = list(&[1, 2, 3]).map(|b| *b).unwrap_or_default();
    let dto: NodeDto = table.to_right(&head).unwrap();
    assert_eq!(depth(Some(&dto)), 3);
    assert_eq!(dto.value, "1");
    assert_eq!(dto.next.as_ref().map(|n| n.value.as_str()), Some("2"));
    assert!(table.equal_right(&head, &dto).unwrap());

    let back: Node = table.to_left(&dto).unwrap();
    assert_eq!(back, head);
}

#[test]
fn test_recursive_table_survives_later_configuration() {
    init_tracing();
    let links = MappingTable::new().recursive(|this, table| {
        table.with(Mapping::with_converter(
            field!(Node, next),
            field!(NodeDto, next),
            this,
        ))
    });
    let table = links
        .clone()
        .label("nodes")
        .allow_unmatched(true)
        .with(Mapping::with_converter(
            field!(Node, value),
            field!(NodeDto, value),
            Parse::<i32>::strict(),
        ));
    assert_eq!(table.config().label(), "nodes");
    assert_eq!(table.len(), 2);
    assert_eq!(links.len(), 1);

    let head = list(&[1, 2, 3]).map(|b| *b).unwrap_or_default();
    let dto: NodeDto = table.to_right(&head).unwrap();
    assert_eq!(depth(Some(&dto)), 3);
    let tail = dto.next.as_ref().and_then(|n| n.next.as_ref());
    assert_eq!(tail.map(|n| n.value.as_str()), Some("3"));
    assert!(table.equal_right(&head, &dto).unwrap());
    assert_eq!(table.to_left::<Node, NodeDto>(&dto).unwrap(), head);

    // the unconfigured table still recurses into itself
    let bare: NodeDto = links.to_right(&head).unwrap();
    assert_eq!(depth(Some(&bare)), 3);
    assert_eq!(bare.value, "");

    let extended = links.extend(Mapping::with_converter(
        field!(Node, value),
        field!(NodeDto, value),
        Parse::<i32>::strict(),
    ));
    drop(links);
    let dto: NodeDto = extended.to_right(&head).unwrap();
    assert_eq!(dto.next.as_ref().map(|n| n.value.as_str()), Some("2"));
}

#[test]
fn test_self_pair_recursion_copies_every_level() {
    let table = MappingTable::new().recursive(|this, table| {
        table
            .with(Mapping::new(field!(Node, value), field!(Node, value)))
            .with(Mapping::with_converter(
                field!(Node, next),
                field!(Node, next),
                this,
            ))
    });

    let mut head = list(&[7, 8, 9]).map(|b| *b).unwrap_or_default();
    let mut copy = Node {
        value: 0,
        next: list(&[1, 2, 3, 4, 5]),
    };
    table.assign_right(&head, &mut copy).unwrap();
    assert_eq!(copy, head);

    let mut taken = Node::default();
    table.assign_right(moved(&mut head), &mut taken).unwrap();
    assert_eq!(taken, copy);
    // plain numbers are copied out of a moved host
    assert_eq!(head.value, 7);
    assert!(table.equal_right(&head, &taken).unwrap());
}

#[test]
fn test_extended_table_recurses_one_level() {
    let base = MappingTable::new().with(Mapping::with_converter(
        field!(Node, value),
        field!(NodeDto, value),
        Parse::<i32>::strict(),
    ));
    let table = base.extend(Mapping::with_converter(
        field!(Node, next),
        field!(NodeDto, next),
        base.clone(),
    ));
    assert_eq!(base.len(), 1);
    assert_eq!(table.len(), 2);

    let head = list(&[1, 2, 3]).map(|b| *b).unwrap_or_default();
    let dto: NodeDto = table.to_right(&head).unwrap();
    assert_eq!(depth(Some(&dto)), 2);
    assert_eq!(dto.next.as_ref().map(|n| n.value.as_str()), Some("2"));
}

#[test]
fn test_table_is_shared_across_threads() {
    let table = abc();
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let table = table.clone();
            thread::spawn(move || table.to_right::<A, B>(&A { v: i }))
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        let b = handle.join().unwrap().unwrap();
        assert_eq!(b.v, i.to_string());
    }
}
