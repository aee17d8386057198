// Copyright (c) Tallybook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Category;
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

/// One keyword rule: a case-insensitive pattern and the category it assigns.
pub struct Rule {
    pub pattern: Regex,
    pub category: Category,
}

impl Rule {
    pub fn new(pattern: &str, category: Category) -> Rule {
        // Patterns are literal keyword alternations, compiled once; a bad
        // entry in the built-in table is a programming error.
        let pattern = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .unwrap_or_else(|e| panic!("invalid rule pattern '{}': {}", pattern, e));
        Rule { pattern, category }
    }
}

/// The built-in rule table, evaluated top-down. Order matters: the first
/// matching rule wins, so broader keywords belong later in the table.
pub fn default_rules() -> Vec<Rule> {
    vec![
        Rule::new("grocery|restaurant", Category::FoodAndDining),
        Rule::new("rent|mortgage", Category::Housing),
        Rule::new("fuel|gas", Category::Transportation),
        Rule::new("electricity|water", Category::Utilities),
        Rule::new("amazon|ebay", Category::Shopping),
        Rule::new("salary|paycheck", Category::Income),
        Rule::new("netflix|hulu", Category::Entertainment),
    ]
}

static RULES: Lazy<Vec<Rule>> = Lazy::new(default_rules);

/// Map a free-text description to a category using the built-in table.
pub fn categorize(description: &str) -> Category {
    match_rules(&RULES, description)
}

/// The matching engine, separate from any particular rule table.
pub fn match_rules(rules: &[Rule], description: &str) -> Category {
    rules
        .iter()
        .find(|r| r.pattern.is_match(description))
        .map(|r| r.category)
        .unwrap_or(Category::Other)
}
