// Copyright (c) Tallybook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use tallybook::categorize::{categorize, match_rules, Rule};
use tallybook::models::Category;

#[test]
fn keyword_rules_assign_expected_categories() {
    assert_eq!(
        categorize("Monthly Netflix subscription"),
        Category::Entertainment
    );
    assert_eq!(categorize("Grocery run at Market"), Category::FoodAndDining);
    assert_eq!(categorize("Unknown vendor xyz"), Category::Other);
    assert_eq!(categorize("March rent payment"), Category::Housing);
    assert_eq!(categorize("Shell fuel stop"), Category::Transportation);
    assert_eq!(categorize("electricity bill"), Category::Utilities);
    assert_eq!(categorize("AMAZON.COM order"), Category::Shopping);
    assert_eq!(categorize("April salary"), Category::Income);
}

#[test]
fn matching_ignores_case() {
    assert_eq!(categorize("NETFLIX"), Category::Entertainment);
    assert_eq!(categorize("ReStAuRaNt"), Category::FoodAndDining);
}

#[test]
fn first_matching_rule_wins() {
    // 'restaurant' (rule 1) and 'gas' (rule 3) both match; rule order decides.
    assert_eq!(
        categorize("restaurant near the gas station"),
        Category::FoodAndDining
    );
    // 'water' (rule 4) and 'ebay' (rule 5) both match.
    assert_eq!(categorize("ebay water filter"), Category::Utilities);
}

#[test]
fn engine_works_against_a_custom_table() {
    let rules = vec![
        Rule::new("gym|fitness", Category::Healthcare),
        Rule::new("hostel|airbnb", Category::Travel),
    ];
    assert_eq!(match_rules(&rules, "Fitness club dues"), Category::Healthcare);
    assert_eq!(match_rules(&rules, "AIRBNB stay"), Category::Travel);
    assert_eq!(match_rules(&rules, "anything else"), Category::Other);
    assert_eq!(match_rules(&[], "netflix"), Category::Other);
}
