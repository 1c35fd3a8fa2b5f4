use fixed_uint::{ArithmeticError, Pair, UInt8, UInt32, UInt64};

fn u64v(value: u64) -> UInt64 {
    UInt64::from(value)
}

#[test]
fn uint64_factory_and_cache() {
    assert!(std::ptr::eq(
        UInt64::cached(255).unwrap(),
        UInt64::cached(255).unwrap()
    ));
    assert!(UInt64::cached(256).is_none());
    assert!(UInt64::cached(i64::MIN).is_none());
    assert_eq!(UInt64::as_unsigned(-1), UInt64::MAX);
    assert_eq!(UInt64::as_unsigned(i64::MIN).bits(), i64::MIN);
}

#[test]
fn uint64_limbs_round_trip() {
    let v = u64v(0x0123_4567_89AB_CDEF);
    let (high, low) = v.limbs();

    assert_eq!(high, UInt32::from(0x0123_4567u32));
    assert_eq!(low, UInt32::from(0x89AB_CDEFu32));
    assert_eq!(UInt64::from_limbs(high, low), v);
}

#[test]
fn uint64_conversions() {
    let v = u64v(0xFFFF_FFFF_8000_00FF);

    assert_eq!(v.byte_value(), -1);
    assert_eq!(v.short_value(), 0x00FF);
    assert_eq!(v.int_value(), i32::MIN + 0xFF);
    assert_eq!(v.long_value(), 0xFFFF_FFFF_8000_00FFu64 as i64);
    assert_eq!(UInt64::MAX.double_value(), 18_446_744_073_709_551_616.0);
    assert_eq!(u64v(1 << 63).double_value(), 9_223_372_036_854_775_808.0);
    assert_eq!(u64v(1 << 40).float_value(), 1_099_511_627_776.0);
}

#[test]
fn uint64_times_max_by_two() {
    assert_eq!(
        UInt64::MAX.times(u64v(2)),
        Pair::new(UInt64::ONE, u64v(0xFFFF_FFFF_FFFF_FFFE))
    );
}

#[test]
fn uint64_times_max_by_max() {
    // (2^64 - 1)^2 = 2^128 - 2^65 + 1
    assert_eq!(
        UInt64::MAX.times(UInt64::MAX),
        Pair::new(u64v(0xFFFF_FFFF_FFFF_FFFE), UInt64::ONE)
    );
}

#[test]
fn uint64_times_matches_native_widening() {
    let cases = [
        (0x0123_4567_89AB_CDEFu64, 0xFEDC_BA98_7654_3210u64),
        (0xFFFF_FFFF, 0xFFFF_FFFF_0000_0001),
        (0x8000_0000_0000_0000, 0x8000_0000_0000_0000),
        (0x1_0000_0001, 0xFFFF_FFFF),
    ];

    for (a, b) in cases {
        let product = u128::from(a) * u128::from(b);
        let expected = Pair::new(u64v((product >> 64) as u64), u64v(product as u64));

        assert_eq!(u64v(a).times(u64v(b)), expected, "{a:#x} * {b:#x}");
    }
}

#[test]
fn uint64_plus_carries_in_upper_half() {
    let top = u64v(1 << 63);

    assert_eq!(top.plus(top), Pair::new(true, UInt64::ZERO));
    assert_eq!(UInt64::MAX.plus(UInt64::MAX), Pair::new(true, u64v(u64::MAX - 1)));
    assert_eq!(top.plus(u64v(5)), Pair::new(false, u64v((1 << 63) + 5)));
}

#[test]
fn uint64_minus() {
    assert_eq!(UInt64::ZERO.minus(UInt64::ONE), Pair::new(true, UInt64::MAX));
    assert_eq!(u64v(1 << 63).minus(UInt64::ONE), Pair::new(false, u64v(i64::MAX as u64)));
}

#[test]
fn uint64_div_mod() {
    assert_eq!(
        UInt64::MAX.div_mod(u64v(3)),
        Ok(Pair::new(u64v(0x5555_5555_5555_5555), UInt64::ZERO))
    );
    assert_eq!(
        u64v((1 << 63) + 5).div_mod(u64v(1 << 62)),
        Ok(Pair::new(u64v(2), u64v(5)))
    );
    assert_eq!(
        u64v(10).div_mod(UInt64::MAX),
        Ok(Pair::new(UInt64::ZERO, u64v(10)))
    );
    assert_eq!(
        UInt64::MAX.div_mod(UInt64::ONE),
        Ok(Pair::new(UInt64::MAX, UInt64::ZERO))
    );
    assert_eq!(
        UInt64::MAX.div_mod(UInt64::ZERO),
        Err(ArithmeticError::DivisionByZero)
    );
}

#[test]
fn uint64_shifts() {
    let v = u64v(0x8000_0000_0000_0001);

    assert_eq!(v.shift_right(UInt8::ONE), u64v(0x4000_0000_0000_0000));
    assert_eq!(v.shift_left(UInt8::ONE), u64v(2));
    assert_eq!(v.shift_right(UInt8::from(63u8)), UInt64::ONE);
    assert_eq!(v.shift_left(UInt64::WIDTH), UInt64::ZERO);
    assert_eq!(v.shift_right(UInt8::MAX), UInt64::ZERO);
}

#[test]
fn uint64_formatting() {
    assert_eq!(UInt64::MAX.to_string(), "18446744073709551615");
    assert_eq!(format!("{:x}", u64v(0xDEAD_BEEF)), "deadbeef");
}
