// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod breakdown;
pub mod category;
pub mod envelopes;
pub mod monthly;
pub mod outlook;
pub mod recap;
pub mod suggest;
pub mod trends;
pub mod weekly;

pub use breakdown::{CategoryTotal, by_category, percentage_of};
pub use envelopes::{BudgetSummary, EnvelopeStatus, budget_envelopes};
pub use monthly::{MonthlyAggregate, available_monthly_series, monthly_series};
pub use recap::{Recap, recap};
pub use trends::{TrendDeltas, trend_deltas};
pub use weekly::{WeekSpend, week_spend};

pub const DASHBOARD_MONTHS: u32 = 6;
