// This file is part of dyn-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Property tests for `DynArray`, checked against `Vec` as a model.

use crate::vec::DynArray;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Push(i32),
    Pop,
    Insert(usize, i32),
    Erase(usize),
    Resize(usize),
    Reserve(usize),
    Truncate(usize),
    SwapRemove(usize),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<i32>().prop_map(Op::Push),
        1 => Just(Op::Pop),
        2 => (any::<usize>(), any::<i32>()).prop_map(|(i, x)| Op::Insert(i, x)),
        2 => any::<usize>().prop_map(Op::Erase),
        1 => (0usize..64).prop_map(Op::Resize),
        1 => (0usize..128).prop_map(Op::Reserve),
        1 => (0usize..64).prop_map(Op::Truncate),
        1 => any::<usize>().prop_map(Op::SwapRemove),
    ]
}

proptest! {
    #[test]
    fn pushes_keep_order_and_count(xs in prop::collection::vec(any::<i32>(), 0..300)) {
        let mut v = DynArray::new();
        for &x in &xs {
            v.push(x);
        }
        prop_assert_eq!(v.len(), xs.len());
        prop_assert!(v.capacity() >= v.len());
        prop_assert_eq!(v.as_slice(), xs.as_slice());
    }

    #[test]
    fn pushes_reallocate_logarithmically(n in 1usize..2000) {
        let mut v: DynArray<u64> = DynArray::new();
        let mut reallocations = 0u32;
        for i in 0..n {
            let before = v.capacity();
            v.push(i as u64);
            if v.capacity() != before {
                reallocations += 1;
                prop_assert_eq!(v.capacity(), (2 * before).max(1));
            }
        }
        // capacities visited are 1, 2, 4, ..., the first power of two >= n
        prop_assert_eq!(reallocations, n.next_power_of_two().trailing_zeros() + 1);
    }

    #[test]
    fn with_len_is_all_defaults(n in 0usize..200) {
        let v: DynArray<u16> = DynArray::with_len(n);
        prop_assert_eq!(v.len(), n);
        prop_assert_eq!(v.capacity(), n);
        prop_assert!(v.iter().all(|&x| x == 0));
    }

    #[test]
    fn clone_is_equal_and_independent(xs in prop::collection::vec(any::<i32>(), 0..100)) {
        let original: DynArray<i32> = DynArray::from(xs.as_slice());
        let mut copy = original.clone();
        prop_assert_eq!(&copy, &original);
        prop_assert_eq!(copy.capacity(), original.len());

        copy.push(1);
        if let Some(first) = copy.first_mut() {
            *first = first.wrapping_add(1);
        }
        prop_assert_eq!(original.as_slice(), xs.as_slice());
    }

    #[test]
    fn clone_from_matches_source(
        dst in prop::collection::vec(any::<i32>(), 0..50),
        src in prop::collection::vec(any::<i32>(), 0..50),
    ) {
        let mut a: DynArray<i32> = DynArray::from(dst.as_slice());
        let cap_before = a.capacity();
        let b: DynArray<i32> = DynArray::from(src.as_slice());
        a.clone_from(&b);
        prop_assert_eq!(&a, &b);
        if src.len() <= cap_before {
            prop_assert_eq!(a.capacity(), cap_before);
        } else {
            prop_assert_eq!(a.capacity(), src.len());
        }
    }

    #[test]
    fn take_empties_source(xs in prop::collection::vec(any::<i32>(), 0..100)) {
        let mut src: DynArray<i32> = DynArray::from(xs.as_slice());
        let dst = src.take();
        prop_assert!(src.is_empty());
        prop_assert_eq!(src.capacity(), 0);
        prop_assert_eq!(dst.as_slice(), xs.as_slice());
    }

    #[test]
    fn reserve_never_shrinks(
        xs in prop::collection::vec(any::<i32>(), 0..50),
        want in 0usize..200,
    ) {
        let mut v: DynArray<i32> = DynArray::from(xs.as_slice());
        let before = v.capacity();
        v.reserve(want);
        prop_assert_eq!(v.capacity(), before.max(want));
        prop_assert_eq!(v.as_slice(), xs.as_slice());
    }

    #[test]
    fn resize_grows_with_defaults_and_shrinks_to_prefix(
        xs in prop::collection::vec(any::<i32>(), 0..50),
        n in 0usize..100,
    ) {
        let mut v: DynArray<i32> = DynArray::from(xs.as_slice());
        v.resize(n);
        prop_assert_eq!(v.len(), n);
        let kept = n.min(xs.len());
        prop_assert_eq!(&v[..kept], &xs[..kept]);
        prop_assert!(v[kept..].iter().all(|&x| x == 0));
    }

    #[test]
    fn insert_then_erase_restores(
        xs in prop::collection::vec(any::<i32>(), 0..50),
        at in any::<prop::sample::Index>(),
        x in any::<i32>(),
    ) {
        let mut v: DynArray<i32> = DynArray::from(xs.as_slice());
        let i = at.index(xs.len() + 1);
        prop_assert_eq!(*v.insert(i, x), x);
        prop_assert_eq!(v[i], x);
        prop_assert_eq!(v.erase(i), i);
        prop_assert_eq!(v.as_slice(), xs.as_slice());
    }

    #[test]
    fn behaves_like_vec(ops in prop::collection::vec(arb_op(), 0..200)) {
        let mut v: DynArray<i32> = DynArray::new();
        let mut model: Vec<i32> = Vec::new();
        for op in ops {
            match op {
                Op::Push(x) => {
                    v.push(x);
                    model.push(x);
                }
                Op::Pop => {
                    prop_assert_eq!(v.pop(), model.pop());
                }
                Op::Insert(i, x) => {
                    let i = i % (model.len() + 1);
                    v.insert(i, x);
                    model.insert(i, x);
                }
                Op::Erase(i) if !model.is_empty() => {
                    let i = i % model.len();
                    v.erase(i);
                    model.remove(i);
                }
                Op::SwapRemove(i) if !model.is_empty() => {
                    let i = i % model.len();
                    prop_assert_eq!(v.swap_remove(i), model.swap_remove(i));
                }
                Op::Erase(_) | Op::SwapRemove(_) => {}
                Op::Resize(n) => {
                    v.resize(n);
                    model.resize(n, 0);
                }
                Op::Reserve(n) => v.reserve(n),
                Op::Truncate(n) => {
                    v.truncate(n);
                    model.truncate(n);
                }
            }
            prop_assert!(v.len() <= v.capacity());
            prop_assert_eq!(v.as_slice(), model.as_slice());
        }
    }
}
