use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Status {
    #[sea_orm(string_value = "UP")]
    #[serde(rename = "UP")]
    Up,

    #[sea_orm(string_value = "UP WITH ISSUES")]
    #[serde(rename = "UP WITH ISSUES")]
    UpWithIssues,

    #[sea_orm(string_value = "MAINTENANCE")]
    #[serde(rename = "MAINTENANCE")]
    Maintenance,

    #[default]
    #[sea_orm(string_value = "DOWN")]
    #[serde(rename = "DOWN")]
    Down,
}

impl Status {
    pub const ALL: [Self; 4] = [Self::Up, Self::UpWithIssues, Self::Maintenance, Self::Down];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "UP",
            Self::UpWithIssues => "UP WITH ISSUES",
            Self::Maintenance => "MAINTENANCE",
            Self::Down => "DOWN",
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Area {
    #[sea_orm(string_value = "Lithography")]
    Lithography,

    #[sea_orm(string_value = "Etching")]
    Etching,

    #[sea_orm(string_value = "Deposition")]
    Deposition,

    #[sea_orm(string_value = "Metrology")]
    Metrology,
}

impl Area {
    pub const ALL: [Self; 4] = [
        Self::Lithography,
        Self::Etching,
        Self::Deposition,
        Self::Metrology,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lithography => "Lithography",
            Self::Etching => "Etching",
            Self::Deposition => "Deposition",
            Self::Metrology => "Metrology",
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Criticality {
    #[sea_orm(string_value = "Critical")]
    Critical,

    #[sea_orm(string_value = "High")]
    High,

    #[default]
    #[sea_orm(string_value = "Medium")]
    Medium,

    #[sea_orm(string_value = "Low")]
    Low,
}

impl Criticality {
    pub const ALL: [Self; 4] = [Self::Critical, Self::High, Self::Medium, Self::Low];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

/// Error for strings outside an enumerated set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind}: '{value}'")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

macro_rules! str_enum_impls {
    ($ty:ty, $kind:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .into_iter()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| ParseEnumError {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }
    };
}

str_enum_impls!(Status, "status");
str_enum_impls!(Area, "area");
str_enum_impls!(Criticality, "criticality");

/// A monitored fabrication tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Equipment {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub area: Area,
    pub bay: String,
    pub status: Status,
    pub criticality: Criticality,
    pub updated_by: Option<String>,
    pub last_comment: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Insert payload used by seeding.
#[derive(Debug, Clone)]
pub struct NewEquipment {
    pub name: String,
    pub description: String,
    pub area: Area,
    pub bay: String,
    pub status: Status,
    pub criticality: Criticality,
}

/// Optional list constraints. Empty strings mean "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EquipmentFilter {
    pub status: Option<String>,
    pub area: Option<String>,
    pub search: Option<String>,
}

impl EquipmentFilter {
    /// Drops empty and whitespace-only values.
    #[must_use]
    pub fn normalized(self) -> Self {
        fn keep(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.trim().is_empty())
        }

        Self {
            status: keep(self.status),
            area: keep(self.area),
            search: keep(self.search),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_strings() {
        for status in Status::ALL {
            assert_eq!(status.as_str().parse::<Status>().unwrap(), status);
        }
        assert_eq!(
            "UP WITH ISSUES".parse::<Status>().unwrap(),
            Status::UpWithIssues
        );
    }

    #[test]
    fn parsing_is_exact() {
        assert!("up".parse::<Status>().is_err());
        assert!("BROKEN".parse::<Status>().is_err());
        assert!("lithography".parse::<Area>().is_err());
        assert_eq!("Low".parse::<Criticality>().unwrap(), Criticality::Low);
    }

    #[test]
    fn defaults_match_store_defaults() {
        assert_eq!(Status::default(), Status::Down);
        assert_eq!(Criticality::default(), Criticality::Medium);
    }

    #[test]
    fn serde_uses_display_spelling() {
        let json = serde_json::to_string(&Status::UpWithIssues).unwrap();
        assert_eq!(json, "\"UP WITH ISSUES\"");
        let area: Area = serde_json::from_str("\"Etching\"").unwrap();
        assert_eq!(area, Area::Etching);
    }

    #[test]
    fn filter_normalization_drops_blanks() {
        let filter = EquipmentFilter {
            status: Some(String::new()),
            area: Some("  ".to_string()),
            search: Some("prober".to_string()),
        }
        .normalized();

        assert_eq!(filter.status, None);
        assert_eq!(filter.area, None);
        assert_eq!(filter.search.as_deref(), Some("prober"));
    }
}
