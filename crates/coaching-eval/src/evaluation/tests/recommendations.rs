use super::common::*;
use crate::evaluation::{derive_recommendations, RatingSet};

#[test]
fn excellent_band_flags_only_weak_selling_skills() {
    let recommendations = derive_recommendations(&breakdown(90.0, 40.0, 15.0, 10.0));

    assert_eq!(recommendations, vec!["تحسين دقيق لمهارات البيع".to_string()]);
}

#[test]
fn low_total_short_circuits_subtotal_checks() {
    let recommendations = derive_recommendations(&breakdown(50.0, 100.0, 0.0, 0.0));

    assert_eq!(recommendations, vec!["تدريب مبيعات / منتجات".to_string()]);
}

#[test]
fn total_of_exactly_fifty_five_short_circuits() {
    let recommendations = derive_recommendations(&breakdown(55.0, 0.0, 0.0, 0.0));

    assert_eq!(recommendations, vec!["تدريب مبيعات / منتجات".to_string()]);
}

#[test]
fn empty_ratings_recommend_sales_product_training() {
    let outcome = engine().evaluate(&RatingSet::new());

    assert_eq!(outcome.label, "تدريب مبيعات / منتجات");
    assert_eq!(
        outcome.recommendations,
        vec!["تدريب مبيعات / منتجات".to_string()]
    );
}

#[test]
fn failed_checks_are_ordered_selling_planning_knowledge() {
    let recommendations = derive_recommendations(&breakdown(80.0, 39.0, 11.5, 10.0));

    assert_eq!(
        recommendations,
        vec![
            "تطوير مهارات البيع".to_string(),
            "تطوير مهارات التخطيط للزيارة".to_string(),
            "تطوير المعرفة بالمنتج والسوق".to_string(),
        ]
    );
}

#[test]
fn thresholds_are_strictly_below() {
    // every subtotal sits exactly on its threshold for the > 65 band
    let recommendations = derive_recommendations(&breakdown(70.0, 40.0, 11.0, 10.0));

    assert!(recommendations.is_empty());
}

#[test]
fn action_plan_band_uses_its_own_thresholds() {
    let recommendations = derive_recommendations(&breakdown(60.0, 36.0, 10.5, 8.0));

    assert_eq!(
        recommendations,
        vec!["خطة عمل لتحسين التخطيط".to_string()]
    );
}

#[test]
fn needs_development_knowledge_check_fires_even_at_full_knowledge() {
    // knowledge tops out at 10, below this band's floor of 11
    let recommendations = derive_recommendations(&breakdown(80.0, 45.0, 15.0, 10.0));

    assert_eq!(
        recommendations,
        vec!["تطوير المعرفة بالمنتج والسوق".to_string()]
    );
}

#[test]
fn perfect_visit_has_no_recommendations() {
    let outcome = engine().evaluate(&perfect_ratings());

    assert!(outcome.recommendations.is_empty());
}
