//! Topic classification ids

use serde::{Deserialize, Serialize};

use crate::core::error::DomainError;

/// The topic bucket a free-text prompt is routed to
///
/// Variants are listed in the priority order of the built-in campus table,
/// but priority itself lives in the [`RuleTable`](crate::routing::rule::RuleTable)
/// entry order — the enum carries no ordering semantics of its own.
///
/// `Fallback` is the total-function guarantee: classification always
/// resolves to it when no trigger matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Topic {
    FinancialAid,
    NewStudentOrientation,
    AcademicPlanning,
    CampusEvents,
    TutoringSupport,
    HealthAndCounseling,
    Housing,
    CareerServices,
    FoodAssistance,
    Safety,
    TechnologySupport,
    Fallback,
}

impl Topic {
    /// Stable kebab-case id, used in transcripts and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::FinancialAid => "financial-aid",
            Topic::NewStudentOrientation => "new-student-orientation",
            Topic::AcademicPlanning => "academic-planning",
            Topic::CampusEvents => "campus-events",
            Topic::TutoringSupport => "tutoring-support",
            Topic::HealthAndCounseling => "health-and-counseling",
            Topic::Housing => "housing",
            Topic::CareerServices => "career-services",
            Topic::FoodAssistance => "food-assistance",
            Topic::Safety => "safety",
            Topic::TechnologySupport => "technology-support",
            Topic::Fallback => "fallback",
        }
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Topic {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "financial-aid" => Ok(Topic::FinancialAid),
            "new-student-orientation" => Ok(Topic::NewStudentOrientation),
            "academic-planning" => Ok(Topic::AcademicPlanning),
            "campus-events" => Ok(Topic::CampusEvents),
            "tutoring-support" => Ok(Topic::TutoringSupport),
            "health-and-counseling" => Ok(Topic::HealthAndCounseling),
            "housing" => Ok(Topic::Housing),
            "career-services" => Ok(Topic::CareerServices),
            "food-assistance" => Ok(Topic::FoodAssistance),
            "safety" => Ok(Topic::Safety),
            "technology-support" => Ok(Topic::TechnologySupport),
            "fallback" => Ok(Topic::Fallback),
            _ => Err(DomainError::UnknownTopic(s.to_string())),
        }
    }
}
