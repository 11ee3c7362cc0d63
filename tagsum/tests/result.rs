//
// Copyright (c) 2023 ZettaScale Technology
//
// This program and the accompanying materials are made available under the
// terms of the Eclipse Public License 2.0 which is available at
// http://www.eclipse.org/legal/epl-2.0, or the Apache License, Version 2.0
// which is available at https://www.apache.org/licenses/LICENSE-2.0.
//
// SPDX-License-Identifier: EPL-2.0 OR Apache-2.0
//
// Contributors:
//   Pierre Avital, <pierre.avital@me.com>
//

use core::cell::Cell;

use tagsum::prelude::*;

fn positive(x: i32) -> Result<i32, String> {
    if x > 0 {
        Result::Ok(x)
    } else {
        Result::Err("neg".into())
    }
}

#[test]
fn construction() {
    let ok: Result<i32, String> = Result::Ok(5);
    assert!(ok.has_value());
    assert_eq!(*ok.value(), 5);
    let err: Result<i32, String> = Result::Err("x".into());
    assert!(!err.has_value());
    assert_eq!(err.error(), "x");
    let void: Result<(), u8> = Result::Ok(());
    assert!(void.is_ok());
    let from_std: Result<u8, ()> = core::result::Result::<u8, ()>::Ok(1).into();
    assert_eq!(from_std, Result::Ok(1));
    let back: core::result::Result<u8, ()> = from_std.into();
    assert_eq!(back, Ok(1));
}

#[test]
#[should_panic(expected = "Result::error called on Ok variant")]
fn error_of_ok_panics() {
    let ok: Result<i32, String> = Result::Ok(5);
    ok.error();
}

#[test]
fn map() {
    let calls = Cell::new(0);
    let times_ten = |x: i32| {
        calls.set(calls.get() + 1);
        x * 10
    };
    let ok: Result<i32, String> = Result::Ok(2);
    assert_eq!(ok.map(times_ten), Result::Ok(20));
    let err: Result<i32, String> = Result::Err("e".into());
    assert_eq!(err.map(times_ten), Result::Err("e".into()));
    assert_eq!(calls.get(), 1);

    let unit: Result<(), String> = Result::<i32, String>::Ok(2).map(|_| ());
    assert_eq!(unit, Result::Ok(()));
}

#[test]
fn and_then() {
    let calls = Cell::new(0);
    let counted = |x| {
        calls.set(calls.get() + 1);
        positive(x)
    };
    assert_eq!(Result::Ok(5).and_then(counted), Result::Ok(5));
    assert_eq!(Result::Ok(-1).and_then(counted), Result::Err("neg".into()));
    assert_eq!(calls.get(), 2);
    assert_eq!(
        Result::Err("x".to_string()).and_then(counted),
        Result::Err("x".into())
    );
    assert_eq!(calls.get(), 2);
}

#[test]
fn chains_short_circuit_left_to_right() {
    let steps = Cell::new(0u32);
    let counter = &steps;
    let step = move |expected: u32| {
        move |x: i32| {
            assert_eq!(counter.get(), expected);
            counter.set(expected + 1);
            positive(x - 1)
        }
    };
    let out = Result::<i32, String>::Ok(2)
        .and_then(step(0))
        .and_then(step(1))
        .and_then(step(2))
        .map(|x| x * 100);
    assert_eq!(out, Failure::new("neg".to_string()));
    assert_eq!(steps.get(), 2);
}

#[test]
fn map_error() {
    let err: Result<u8, &str> = Result::Err("boom");
    assert_eq!(err.map_error(str::len), Result::Err(4));
    let ok: Result<u8, &str> = Result::Ok(3);
    assert_eq!(ok.map_error(|_| -> usize { unreachable!() }), Result::Ok(3));
    let logged = Cell::new(None);
    let unit: Result<u8, ()> = err.map_error(|e| logged.set(Some(e)));
    assert_eq!(unit, Result::Err(()));
    assert_eq!(logged.get(), Some("boom"));
}

#[test]
fn or_else() {
    let succeed = |_: i32| Result::<i32, i32>::Ok(42);
    let fail = |_: i32| Result::<i32, i32>::Err(17);

    let ok: Result<i32, i32> = Result::Ok(21);
    assert_eq!(ok.or_else(succeed), Result::Ok(21));
    assert_eq!(ok.or_else(fail), Result::Ok(21));
    assert_eq!(ok.or_else(|_| ()), Result::Ok(21));

    let err: Result<i32, i32> = Result::Err(21);
    assert_eq!(err.or_else(succeed), Result::Ok(42));
    assert_eq!(err.or_else(fail), Result::Err(17));
    assert_eq!(err.or_else(|_| ()), Result::Err(()));
    assert_eq!(
        err.or_else(|e| core::result::Result::<i32, String>::Err(e.to_string())),
        Result::Err("21".to_string())
    );

    let boxed: Result<i32, Box<i32>> = Result::Err(Box::new(0));
    let recovered = boxed.or_else(|mut e| {
        *e = 17;
        Result::<i32, Box<i32>>::Err(e)
    });
    assert_eq!(**recovered.error(), 17);
}

#[test]
fn value_or() {
    let ok: Result<String, u8> = Result::Ok("held".into());
    assert_eq!(ok.value_or("default"), "held");
    let err: Result<String, u8> = Result::Err(1);
    assert_eq!(err.value_or("default"), "default");
    let err: Result<i64, u8> = Result::Err(2);
    assert_eq!(err.value_or_else(|e| e as i64 * 3), 6);
    assert_eq!(Result::<i64, u8>::Ok(-1).value_or(0i32), -1);
}

#[test]
fn equality_is_an_equivalence() {
    let values: [Result<i32, i32>; 4] = [
        Result::Ok(1),
        Result::Ok(2),
        Result::Err(1),
        Result::Err(2),
    ];
    for (i, a) in values.iter().enumerate() {
        assert_eq!(a, a);
        for (j, b) in values.iter().enumerate() {
            assert_eq!(a == b, i == j);
            assert_eq!(a == b, b == a);
            for c in &values {
                if a == b && b == c {
                    assert_eq!(a, c);
                }
            }
        }
    }
    assert_ne!(Result::<i32, i32>::Ok(1), Failure::new(1));
    assert_eq!(Result::<i32, i32>::Err(1), Failure::new(1));
    assert_eq!(Failure::new(1), Result::<i32, i32>::Err(1));
    assert_ne!(Failure::new(1), Result::<i32, i32>::Ok(1));
    assert_ne!(Failure::new(2), Result::<i32, i32>::Err(1));
}

#[test]
fn conversions() {
    let narrow: Result<u8, &str> = Result::Ok(200);
    let wide: Result<u32, String> = narrow.convert();
    assert!(wide.contains(&200u32));
    assert_eq!(Result::<u8, &str>::Err("e").ok(), Nothing);
    assert_eq!(Result::<u8, &str>::Err("e").err(), Optional::Some("e"));
    assert_eq!(Result::<u8, &str>::Ok(9).ok().into_value(), 9);
}

#[test]
fn emplace_switches_to_ok() {
    let mut r: Result<Vec<u8>, String> = Result::Err("e".into());
    r.emplace(vec![1]).push(2);
    assert_eq!(r.value(), &[1, 2]);
    r.emplace(Vec::new());
    assert!(r.value().is_empty());
    r.set_error("again".into());
    assert_eq!(r, Failure::new("again".to_string()));
}
