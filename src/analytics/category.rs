// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::utils::capitalize;

static SYNONYMS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("groceries", "food"),
        ("grocery", "food"),
        ("restaurant", "food"),
        ("dining", "food"),
        ("takeaway", "food"),
        ("gas", "transport"),
        ("fuel", "transport"),
        ("transportation", "transport"),
        ("electricity", "utilities"),
        ("water", "utilities"),
        ("internet", "utilities"),
        ("phone", "utilities"),
        ("doctor", "healthcare"),
        ("medical", "healthcare"),
        ("paycheck", "salary"),
        ("wage", "salary"),
        ("bonus", "salary"),
    ])
});

static COLORS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("food", "#ef4444"),
        ("rent", "#f97316"),
        ("transport", "#3b82f6"),
        ("utilities", "#6b7280"),
        ("entertainment", "#a855f7"),
        ("healthcare", "#10b981"),
        ("salary", "#0ea5e9"),
        ("freelance", "#22c55e"),
        ("education", "#6366f1"),
        ("shopping", "#fb7185"),
        ("insurance", "#f59e0b"),
        ("travel", "#06b6d4"),
        ("other", "#14b8a6"),
    ])
});

pub const FALLBACK_PALETTE: [&str; 10] = [
    "#34D399", "#10B981", "#059669", "#6EE7B7", "#A7F3D0", "#99F6E4", "#5EEAD4", "#2DD4BF",
    "#14B8A6", "#0D9488",
];

// Keyed by canonical category; `dining` is unreachable since it normalizes to `food`.
static BUCKETS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("rent", "needs"),
        ("utilities", "needs"),
        ("food", "needs"),
        ("healthcare", "needs"),
        ("transport", "needs"),
        ("insurance", "needs"),
        ("education", "education"),
        ("investment", "investments"),
        ("investments", "investments"),
        ("entertainment", "fun"),
        ("shopping", "fun"),
        ("travel", "fun"),
        ("dining", "fun"),
        ("giving", "giving"),
        ("donation", "giving"),
    ])
});

pub const DEFAULT_BUCKET: &str = "needs";

static SALARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)salary").expect("static regex"));
static SALARY_WORDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)salary|paycheck|wage|bonus").expect("static regex"));

pub fn normalize(raw: &str) -> String {
    let key = raw.trim().to_lowercase();
    match SYNONYMS.get(key.as_str()) {
        Some(canonical) => canonical.to_string(),
        None => key,
    }
}

pub fn color_for(category: &str, fallback_index: usize) -> &'static str {
    match COLORS.get(normalize(category).as_str()) {
        Some(c) => c,
        None => FALLBACK_PALETTE[fallback_index % FALLBACK_PALETTE.len()],
    }
}

pub fn bucket_for(category: &str) -> &'static str {
    BUCKETS
        .get(normalize(category).as_str())
        .copied()
        .unwrap_or(DEFAULT_BUCKET)
}

pub fn is_salary(category: &str) -> bool {
    SALARY.is_match(&normalize(category))
}

pub fn looks_like_income(category: &str) -> bool {
    SALARY_WORDS.is_match(category)
}

pub fn display_name(category: &str) -> String {
    capitalize(&normalize(category))
}
