use serde::{Deserialize, Serialize};

use super::rules::ScoreBreakdown;

/// Performance band a coaching visit falls into, keyed by the grand total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceBand {
    Excellent,
    NeedsDevelopment,
    NeedsTraining,
    ActionPlan,
    SalesProductTraining,
}

impl PerformanceBand {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "ممتاز",
            Self::NeedsDevelopment => "يحتاج إلى تطوير",
            Self::NeedsTraining => "يحتاج إلى تدريب",
            Self::ActionPlan => "خطة عمل",
            Self::SalesProductTraining => SALES_PRODUCT_TRAINING,
        }
    }

    pub const fn severity(self) -> Severity {
        match self {
            Self::Excellent => Severity::Success,
            Self::NeedsDevelopment => Severity::Info,
            Self::NeedsTraining => Severity::Warning,
            Self::ActionPlan => Severity::Alert,
            Self::SalesProductTraining => Severity::Critical,
        }
    }

    const fn thresholds(self) -> Option<BandThresholds> {
        match self {
            Self::Excellent => Some(BandThresholds {
                selling_skills: 45.0,
                planning: 12.0,
                knowledge: 8.0,
                messages: [
                    "تحسين دقيق لمهارات البيع",
                    "تحسين دقيق لمهارات التخطيط",
                    "تحسين دقيق للمعرفة بالمنتج",
                ],
            }),
            Self::NeedsDevelopment => Some(BandThresholds {
                selling_skills: 40.0,
                planning: 12.0,
                knowledge: 11.0,
                messages: [
                    "تطوير مهارات البيع",
                    "تطوير مهارات التخطيط للزيارة",
                    "تطوير المعرفة بالمنتج والسوق",
                ],
            }),
            Self::NeedsTraining => Some(BandThresholds {
                selling_skills: 40.0,
                planning: 11.0,
                knowledge: 10.0,
                messages: [
                    "تدريب على مهارات البيع",
                    "تدريب على التخطيط للزيارة",
                    "تدريب على المعرفة بالمنتج",
                ],
            }),
            Self::ActionPlan => Some(BandThresholds {
                selling_skills: 35.0,
                planning: 11.0,
                knowledge: 8.0,
                messages: [
                    "خطة عمل لتحسين مهارات البيع",
                    "خطة عمل لتحسين التخطيط",
                    "خطة عمل لتحسين المعرفة بالمنتج",
                ],
            }),
            Self::SalesProductTraining => None,
        }
    }
}

/// Color indicator shown next to the band label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Success,
    Info,
    Warning,
    Alert,
    Critical,
}

impl Severity {
    pub const fn color(self) -> &'static str {
        match self {
            Self::Success => "#16a34a",
            Self::Info => "#2563eb",
            Self::Warning => "#d97706",
            Self::Alert => "#ea580c",
            Self::Critical => "#dc2626",
        }
    }
}

const SALES_PRODUCT_TRAINING: &str = "تدريب مبيعات / منتجات";

/// Subtotal floors for one band; messages are ordered selling, planning, knowledge.
#[derive(Debug, Clone, Copy)]
struct BandThresholds {
    selling_skills: f32,
    planning: f32,
    knowledge: f32,
    messages: [&'static str; 3],
}

/// Maps a grand total onto its band. Lower bounds are exclusive, so a total of
/// exactly 85 lands in `NeedsDevelopment`.
pub fn classify(total: f32) -> PerformanceBand {
    if total > 85.0 {
        PerformanceBand::Excellent
    } else if total > 75.0 {
        PerformanceBand::NeedsDevelopment
    } else if total > 65.0 {
        PerformanceBand::NeedsTraining
    } else if total > 55.0 {
        PerformanceBand::ActionPlan
    } else {
        PerformanceBand::SalesProductTraining
    }
}

pub fn derive_recommendations(breakdown: &ScoreBreakdown) -> Vec<String> {
    let band = classify(breakdown.total);
    let Some(thresholds) = band.thresholds() else {
        return vec![SALES_PRODUCT_TRAINING.to_string()];
    };

    let checks = [
        breakdown.selling_skills < thresholds.selling_skills,
        breakdown.planning < thresholds.planning,
        breakdown.knowledge < thresholds.knowledge,
    ];

    checks
        .iter()
        .zip(thresholds.messages)
        .filter(|(failed, _)| **failed)
        .map(|(_, message)| message.to_string())
        .collect()
}
