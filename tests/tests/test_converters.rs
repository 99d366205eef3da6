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

use convertible::converter::{functions, Cast, Converter, Flip, Packed, Parse};
use convertible::operator::{assign_left, assign_right, equal_right};
use convertible::{field, moved, ByteBuffer, Error, Identity, Mapping, Source};

mod test_helpers;
use test_helpers::strings;

#[test]
fn test_parse_fallback_and_strict() {
    let lenient = Parse::<u16>::or(80);
    let strict = Parse::<u16>::strict();
    let text = strings(&["8080", "http", " 443 "]);

    let mut ports: Vec<u16> = Vec::new();
    assign_left(&mut ports, &text, &lenient).unwrap();
    assert_eq!(ports, vec![8080, 80, 443]);

    let err = assign_left(&mut ports, &text, &strict).unwrap_err();
    match err {
        Error::Parse(msg) => {
            assert!(msg.contains("http"));
            assert!(msg.contains("u16"));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(ports[0], 8080);
}

#[test]
fn test_parse_defaulted_fallback() {
    let conv = Parse::<f64>::or_default();
    let mut value = 1.5f64;
    conv.assign_to_left(Source::from(&"?".to_string()), &mut value)
        .unwrap();
    assert_eq!(value, 0.0);
    assert!(conv.equal_to_left(&"?".to_string(), &0.0).unwrap());
}

#[test]
fn test_cast_range_checks() {
    let mut narrow = vec![0u8; 3];
    assign_right(&vec![1i64, 255, 7], &mut narrow, &Cast).unwrap();
    assert_eq!(narrow, vec![1, 255, 7]);
    assert!(assign_right(&vec![256i64], &mut narrow, &Cast).is_err());
    assert!(!equal_right(&vec![-1i64], &vec![255u8], &Cast).unwrap());
}

#[derive(Clone, Debug, Default, PartialEq)]
struct Price {
    cents: i64,
}

#[derive(Clone, Debug, Default, PartialEq)]
struct PriceDto {
    dollars: f64,
}

#[test]
fn test_function_pair_converter() {
    let map = Mapping::with_converter(
        field!(Price, cents),
        field!(PriceDto, dollars),
        functions(
            |cents: i64| cents as f64 / 100.0,
            |dollars: f64| (dollars * 100.0).round() as i64,
        ),
    );
    let dto = map.to_right(&Price { cents: 1999 }).unwrap();
    assert_eq!(dto.dollars, 19.99);
    let price = map.to_left(&PriceDto { dollars: 0.5 }).unwrap();
    assert_eq!(price.cents, 50);
    assert!(map.equal_left(&price, &PriceDto { dollars: 0.5 }).unwrap());
}

/// Upper case on the right, lower case on the left.
struct Case;

impl Converter<String, String> for Case {
    fn assign_to_right(&self, src: Source<'_, String>, dst: &mut String) -> Result<(), Error> {
        *dst = src.get().to_uppercase();
        Ok(())
    }

    fn assign_to_left(&self, src: Source<'_, String>, dst: &mut String) -> Result<(), Error> {
        *dst = src.get().to_lowercase();
        Ok(())
    }

    fn equal_to_right(&self, src: &String, dst: &String) -> Result<bool, Error> {
        Ok(*dst == src.to_uppercase())
    }

    fn equal_to_left(&self, src: &String, dst: &String) -> Result<bool, Error> {
        Ok(*dst == src.to_lowercase())
    }
}

#[test]
fn test_user_converter_reaches_every_leaf() {
    let words = strings(&["alpha", "Beta"]);
    let mut shouted: [String; 2] = Default::default();
    assign_right(&words, &mut shouted, &Case).unwrap();
    assert_eq!(shouted, ["ALPHA", "BETA"].map(String::from));
    assert!(equal_right(&strings(&["ALPHA", "beta"]), &shouted, &Case).unwrap());

    let mut lower: Vec<String> = Vec::new();
    assign_right(&shouted, &mut lower, &Flip(Case)).unwrap();
    assert_eq!(lower, strings(&["alpha", "beta"]));
}

#[test]
fn test_packed_growable_buffer() {
    let mut frame = ByteBuffer::new();
    assign_right(&0x0A0Bu16, &mut frame, &Packed::<3>).unwrap();
    assert_eq!(frame.as_slice(), &[0, 0, 0, 0x0B, 0x0A]);
    assert!(equal_right(&0x0A0Bu16, &frame, &Packed::<3>).unwrap());

    let mut word = 0u32;
    let err = assign_left(&mut word, &frame, &Packed::<3>).unwrap_err();
    assert_eq!(err, Error::buffer_overflow(7, 5));
}

#[test]
fn test_identity_moves_strings() {
    let mut src = strings(&["x", "y"]);
    let mut dst: Vec<String> = Vec::new();
    assign_right(moved(&mut src), &mut dst, &Identity).unwrap();
    assert_eq!(dst, strings(&["x", "y"]));
    assert_eq!(src, strings(&["", ""]));
}
