// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use ledgerlens::utils::{fmt_money, percent_change, round_percent, round_whole};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn halves_round_up() {
    assert_eq!(round_whole(dec!(2.5)), dec!(3));
    assert_eq!(round_whole(dec!(-2.5)), dec!(-2));
    assert_eq!(round_whole(dec!(-2.51)), dec!(-3));
    assert_eq!(round_whole(dec!(-0.5)), Decimal::ZERO);
    assert_eq!(round_percent(dec!(-2.5)), -2);
    assert_eq!(fmt_money(&dec!(1249.5), "LKR"), "LKR 1250");
}

#[test]
fn percent_change_stays_finite() {
    assert_eq!(percent_change(dec!(150), dec!(100)), dec!(50));
    assert_eq!(percent_change(dec!(5), Decimal::ZERO), Decimal::ZERO);
    assert_eq!(percent_change(Decimal::MAX, dec!(0.0000001)), Decimal::ZERO);
}
