// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::analytics::monthly::MonthlyAggregate;
use crate::utils::percent_change;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendDeltas {
    pub income_delta_percent: Decimal,
    pub expense_delta_percent: Decimal,
    pub turnover_now: Decimal,
    pub turnover_previous: Decimal,
    pub turnover_delta_percent: Decimal,
}

pub fn turnover(m: &MonthlyAggregate) -> Decimal {
    m.net().max(Decimal::ZERO)
}

/// Month-over-month deltas between the last two entries of a series. A single
/// entry is compared with itself.
pub fn trend_deltas(series: &[MonthlyAggregate]) -> TrendDeltas {
    let zero = MonthlyAggregate::empty(0, 1);
    let last = series.last().unwrap_or(&zero);
    let prev = series
        .len()
        .checked_sub(2)
        .and_then(|i| series.get(i))
        .unwrap_or(last);

    let turnover_now = turnover(last);
    let turnover_previous = turnover(prev);
    TrendDeltas {
        income_delta_percent: percent_change(last.income, prev.income),
        expense_delta_percent: percent_change(last.expenses, prev.expenses),
        turnover_now,
        turnover_previous,
        turnover_delta_percent: percent_change(turnover_now, turnover_previous),
    }
}
