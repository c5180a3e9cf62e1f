use shop_common::money::*;

#[test]
fn whole_amount_has_no_fraction() {
    assert_eq!(format_price(1500.0), "1\u{a0}500\u{a0}\u{20b4}");
}

#[test]
fn small_amount_is_not_grouped() {
    assert_eq!(format_price(999.0), "999\u{a0}\u{20b4}");
}

#[test]
fn zero() {
    assert_eq!(format_price(0.0), "0\u{a0}\u{20b4}");
}

#[test]
fn millions_group_every_three_digits() {
    assert_eq!(format_price(1_234_567.0), "1\u{a0}234\u{a0}567\u{a0}\u{20b4}");
}

#[test]
fn fraction_keeps_significant_digits_only() {
    assert_eq!(format_price(1234.5), "1\u{a0}234,5\u{a0}\u{20b4}");
    assert_eq!(format_price(19.99), "19,99\u{a0}\u{20b4}");
}

#[test]
fn fraction_rounds_to_two_digits() {
    assert_eq!(format_price(10.005_1), "10,01\u{a0}\u{20b4}");
    assert_eq!(format_price(10.999), "11\u{a0}\u{20b4}");
}

#[test]
fn negative_amount() {
    assert_eq!(format_price(-2500.0), "-2\u{a0}500\u{a0}\u{20b4}");
}

#[test]
fn negative_rounding_to_zero_keeps_sign() {
    assert_eq!(format_price(-0.001), "-0\u{a0}\u{20b4}");
    assert_eq!(format_price(-0.0), "-0\u{a0}\u{20b4}");
    assert_eq!(format_price(0.001), "0\u{a0}\u{20b4}");
}

#[test]
fn nan_renders_like_the_browser() {
    assert_eq!(format_price(f64::NAN), "NaN\u{a0}\u{20b4}");
}

#[test]
fn custom_format_with_leading_symbol() {
    let fmt = PriceFormat {
        group_separator: ",".into(),
        decimal_separator: ".".into(),
        symbol: "$".into(),
        symbol_separator: String::new(),
        symbol_after: false,
        min_fraction_digits: 2,
        max_fraction_digits: 2,
    };
    assert_eq!(fmt.format(1500.0), "$1,500.00");
    assert_eq!(fmt.format(3.5), "$3.50");
}

#[test]
fn zero_fraction_digits_rounds_to_whole() {
    let fmt = PriceFormat {
        max_fraction_digits: 0,
        ..PriceFormat::uah()
    };
    assert_eq!(fmt.format(1499.6), "1\u{a0}500\u{a0}\u{20b4}");
}
