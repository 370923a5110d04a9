use serde::{Deserialize, Serialize};

/// Grouping bucket used to subtotal coaching criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Planning,
    PersonalTrait,
    Knowledge,
    SellingSkills,
}

impl Category {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Planning,
            Self::PersonalTrait,
            Self::Knowledge,
            Self::SellingSkills,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Planning => "التخطيط",
            Self::PersonalTrait => "الصفات الشخصية",
            Self::Knowledge => "المعرفة",
            Self::SellingSkills => "مهارات البيع",
        }
    }
}

/// One scored line item of the coaching form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EvaluationCriterion {
    pub id: &'static str,
    pub title: &'static str,
    pub category: Category,
    pub max_score: u8,
}

const fn criterion(
    id: &'static str,
    title: &'static str,
    category: Category,
    max_score: u8,
) -> EvaluationCriterion {
    EvaluationCriterion {
        id,
        title,
        category,
        max_score,
    }
}

static CRITERIA: [EvaluationCriterion; 19] = [
    criterion(
        "previous_followup",
        "متابعة نتائج الزيارة السابقة",
        Category::Planning,
        5,
    ),
    criterion(
        "call_objectives",
        "تحديد أهداف واضحة وقابلة للقياس للزيارة",
        Category::Planning,
        5,
    ),
    criterion(
        "call_preparation",
        "تجهيز المواد الترويجية والعينات قبل الزيارة",
        Category::Planning,
        5,
    ),
    criterion(
        "appearance",
        "المظهر العام والالتزام بالزي",
        Category::PersonalTrait,
        5,
    ),
    criterion(
        "communication",
        "مهارات التواصل ولغة الجسد",
        Category::PersonalTrait,
        5,
    ),
    criterion("confidence", "الثقة بالنفس", Category::PersonalTrait, 5),
    criterion(
        "time_management",
        "إدارة الوقت والالتزام بالمواعيد",
        Category::PersonalTrait,
        5,
    ),
    criterion(
        "product_knowledge",
        "المعرفة العلمية بالمنتج",
        Category::Knowledge,
        5,
    ),
    criterion(
        "market_knowledge",
        "المعرفة بالسوق والمنافسين",
        Category::Knowledge,
        5,
    ),
    criterion(
        "opening",
        "وضوح الافتتاحية وجذب انتباه الطبيب",
        Category::SellingSkills,
        5,
    ),
    criterion(
        "probing",
        "طرح الأسئلة لاكتشاف احتياجات العميل",
        Category::SellingSkills,
        5,
    ),
    criterion("listening", "الإنصات الفعال", Category::SellingSkills, 5),
    criterion(
        "product_presentation",
        "عرض المنتج وربط المزايا بالفوائد",
        Category::SellingSkills,
        10,
    ),
    criterion(
        "visual_aid_usage",
        "استخدام الوسائل المساعدة بفعالية",
        Category::SellingSkills,
        5,
    ),
    criterion(
        "objection_handling",
        "التعامل مع الاعتراضات",
        Category::SellingSkills,
        5,
    ),
    criterion(
        "summarizing",
        "تلخيص الرسائل الرئيسية",
        Category::SellingSkills,
        5,
    ),
    criterion(
        "gaining_commitment",
        "الحصول على التزام الطبيب بالوصف",
        Category::SellingSkills,
        5,
    ),
    criterion(
        "closing",
        "إنهاء الزيارة بشكل احترافي",
        Category::SellingSkills,
        5,
    ),
    criterion(
        "relationship_building",
        "بناء علاقة طويلة الأمد مع العميل",
        Category::SellingSkills,
        5,
    ),
];

/// Fixed catalog of the nineteen coaching criteria.
pub fn catalog() -> &'static [EvaluationCriterion] {
    &CRITERIA
}

pub fn find(id: &str) -> Option<&'static EvaluationCriterion> {
    CRITERIA.iter().find(|criterion| criterion.id == id)
}

/// Highest subtotal a category can reach.
pub fn category_capacity(category: Category) -> u32 {
    CRITERIA
        .iter()
        .filter(|criterion| criterion.category == category)
        .map(|criterion| criterion.max_score as u32)
        .sum()
}

pub fn criteria_in(category: Category) -> impl Iterator<Item = &'static EvaluationCriterion> {
    CRITERIA
        .iter()
        .filter(move |criterion| criterion.category == category)
}
