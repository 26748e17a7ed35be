// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rust_decimal::Decimal;

use crate::commands::Session;
use crate::store::StoreError;
use crate::utils::pretty_table;

pub fn check(session: &Session) -> Result<Vec<(String, String)>> {
    let mut issues = Vec::new();
    let s = session.settings()?;

    if s.salary_plan.is_empty() {
        issues.push(("empty_plan".into(), "salary plan has no envelopes".into()));
    } else if s.plan_total() != Decimal::ONE {
        issues.push((
            "plan_not_100".into(),
            format!(
                "envelopes add up to {}%",
                (s.plan_total() * Decimal::ONE_HUNDRED).normalize()
            ),
        ));
    }
    for (category, envelope) in &s.bucket_overrides {
        if !s.salary_plan.iter().any(|e| &e.id == envelope) {
            issues.push((
                "orphan_bucket".into(),
                format!("{} -> {}", category, envelope),
            ));
        }
    }
    for env in &s.salary_plan {
        if env.percentage < Decimal::ZERO {
            issues.push(("negative_share".into(), env.id.clone()));
        }
    }

    match session.snapshot() {
        Ok(_) => {}
        Err(e) if matches!(e.downcast_ref::<StoreError>(), Some(StoreError::Unauthorized(_))) => {
            issues.push(("unknown_user".into(), session.user.clone()));
        }
        Err(e) => return Err(e),
    }
    Ok(issues)
}

pub fn handle(session: &Session) -> Result<()> {
    let rows: Vec<Vec<String>> = check(session)?
        .into_iter()
        .map(|(issue, detail)| vec![issue, detail])
        .collect();
    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
