use fixed_uint::{Pair, UInt8};

#[test]
fn pair_accessors() {
    let pair = Pair::new(true, UInt8::ONE);

    assert!(pair.fst());
    assert_eq!(pair.snd(), UInt8::ONE);
    assert_eq!(pair.into_inner(), (true, UInt8::ONE));
}

#[test]
fn pair_as_ref_borrows() {
    let pair = Pair::new(String::from("quotient"), String::from("remainder"));
    let borrowed = pair.as_ref();

    assert_eq!(borrowed.fst(), "quotient");
    assert_eq!(borrowed.snd(), "remainder");
    assert_eq!(pair.fst(), "quotient");
}

#[test]
fn pair_map_keeps_other_element() {
    let pair = Pair::new(3, "three");

    assert_eq!(pair.map_fst(|n| n * 2), Pair::new(6, "three"));
    assert_eq!(pair.map_snd(str::len), Pair::new(3, 5));
    assert_eq!(pair.map(|n| n + 1, |s| s.to_uppercase()), Pair::new(4, String::from("THREE")));
}

#[test]
fn pair_and_then_maps_whole_pair() {
    let swapped = Pair::new(1u8, 'a').and_then(|fst, snd| Pair::new(snd, fst));

    assert_eq!(swapped, Pair::new('a', 1u8));
}

#[test]
fn pair_tuple_conversions() {
    let pair: Pair<u8, bool> = (7, false).into();
    let tuple: (u8, bool) = pair.into();

    assert_eq!(pair, Pair::new(7, false));
    assert_eq!(tuple, (7, false));
}

#[test]
fn pair_chains_carry_flags() {
    let sum = UInt8::MAX.plus_one().map_fst(|carry| u8::from(carry));

    assert_eq!(sum, Pair::new(1u8, UInt8::ZERO));
}
