use crate::quiz::review::Tier;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierStyle {
    pub background: &'static str,
    pub text: &'static str,
}

const EXCELLENT: TierStyle = TierStyle {
    background: "bg-green-100",
    text: "text-green-800",
};
const GOOD: TierStyle = TierStyle {
    background: "bg-blue-100",
    text: "text-blue-800",
};
const BORDERLINE: TierStyle = TierStyle {
    background: "bg-yellow-100",
    text: "text-yellow-800",
};
const POOR: TierStyle = TierStyle {
    background: "bg-orange-100",
    text: "text-orange-800",
};
const FAILING: TierStyle = TierStyle {
    background: "bg-red-100",
    text: "text-red-800",
};

impl Tier {
    pub fn style(&self) -> TierStyle {
        match self {
            Tier::Excellent => EXCELLENT,
            Tier::Good => GOOD,
            Tier::Borderline => BORDERLINE,
            Tier::Poor => POOR,
            Tier::Failing => FAILING,
        }
    }
}
