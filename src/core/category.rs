use serde::{Deserialize, Serialize};

/// Closed set of category tags a habit can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HabitCategory {
    Exercise,
    Steps,
    Skills,
    Savings,
    Sleep,
    Prayer,
    Meditation,
    Stress,
    Custom,
}

impl HabitCategory {
    pub const ALL: [Self; 9] = [
        Self::Exercise,
        Self::Steps,
        Self::Skills,
        Self::Savings,
        Self::Sleep,
        Self::Prayer,
        Self::Meditation,
        Self::Stress,
        Self::Custom,
    ];

    pub fn as_keyword(&self) -> &'static str {
        match self {
            Self::Exercise => "exercise",
            Self::Steps => "steps",
            Self::Skills => "skills",
            Self::Savings => "savings",
            Self::Sleep => "sleep",
            Self::Prayer => "prayer",
            Self::Meditation => "meditation",
            Self::Stress => "stress",
            Self::Custom => "custom",
        }
    }

    pub fn from_keyword(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "exercise" => Some(Self::Exercise),
            "steps" => Some(Self::Steps),
            "skills" => Some(Self::Skills),
            "savings" => Some(Self::Savings),
            "sleep" => Some(Self::Sleep),
            "prayer" => Some(Self::Prayer),
            "meditation" => Some(Self::Meditation),
            "stress" => Some(Self::Stress),
            "custom" => Some(Self::Custom),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Exercise => "Exercise",
            Self::Steps => "Walking Steps",
            Self::Skills => "Skills Learning",
            Self::Savings => "Savings",
            Self::Sleep => "Sleep",
            Self::Prayer => "Prayer",
            Self::Meditation => "Meditation",
            Self::Stress => "Stress Level",
            Self::Custom => "Custom Habit",
        }
    }

    /// Unit filled in when the habit draft leaves it blank.
    pub fn default_unit(&self) -> &'static str {
        match self {
            Self::Exercise => "minutes",
            Self::Steps => "steps",
            Self::Skills => "hours",
            Self::Savings => "$",
            Self::Sleep => "hours",
            Self::Prayer => "times",
            Self::Meditation => "minutes",
            Self::Stress => "level",
            Self::Custom => "times",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Exercise => "Dumbbell",
            Self::Steps => "Footprints",
            Self::Skills => "GraduationCap",
            Self::Savings => "PiggyBank",
            Self::Sleep => "Moon",
            Self::Prayer => "Sparkles",
            Self::Meditation => "Brain",
            Self::Stress => "Heart",
            Self::Custom => "Target",
        }
    }

    /// Presentation color slot; matches the category keyword.
    pub fn color(&self) -> &'static str {
        self.as_keyword()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_roundtrip() {
        for category in HabitCategory::ALL {
            assert_eq!(
                HabitCategory::from_keyword(category.as_keyword()),
                Some(category)
            );
        }
    }

    #[test]
    fn from_keyword_is_case_insensitive() {
        assert_eq!(
            HabitCategory::from_keyword("Sleep"),
            Some(HabitCategory::Sleep)
        );
        assert_eq!(HabitCategory::from_keyword("gardening"), None);
    }
}
