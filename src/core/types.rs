use serde::{Deserialize, Serialize};
use std::fmt;

/// Externally supplied logical timestamp (block height).
pub type BlockHeight = u64;

/// 1-based per-project report sequence number.
pub type ReportId = u64;

/// Opaque project identifier. Equality and hashing only; no structural
/// constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub u64);

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Caller identity, supplied as ambient context by the embedding
/// environment on every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Principal(pub String);

impl Principal {
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Cumulative/latest-value impact summary maintained per project.
///
/// Carbon accumulates across reports; the three scores always hold the
/// values of the most recent report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectImpact {
    pub total_carbon_sequestered: i64,
    pub biodiversity_score: i64,
    pub water_impact_score: i64,
    pub social_impact_score: i64,
    pub last_updated: BlockHeight,
}

impl ProjectImpact {
    /// All-zero baseline. Used both for explicit initialization and as the
    /// implicit starting point when a report arrives before any init call.
    pub fn zeroed(last_updated: BlockHeight) -> Self {
        Self {
            total_carbon_sequestered: 0,
            biodiversity_score: 0,
            water_impact_score: 0,
            social_impact_score: 0,
            last_updated,
        }
    }

    /// Fold one report into the aggregate: carbon is additive, the three
    /// scores are replaced, `last_updated` takes the report's date.
    pub fn apply(&self, report: &ImpactReport) -> Self {
        Self {
            total_carbon_sequestered: self.total_carbon_sequestered + report.carbon_update,
            biodiversity_score: report.biodiversity_update,
            water_impact_score: report.water_impact_update,
            social_impact_score: report.social_impact_update,
            last_updated: report.report_date,
        }
    }
}

/// Immutable, sequence-numbered impact report. Once recorded it is never
/// modified; later reports only change the aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactReport {
    pub reporter: Principal,
    pub report_date: BlockHeight,
    pub carbon_update: i64,
    pub biodiversity_update: i64,
    pub water_impact_update: i64,
    pub social_impact_update: i64,
    pub notes: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(carbon: i64, bio: i64, water: i64, social: i64, date: BlockHeight) -> ImpactReport {
        ImpactReport {
            reporter: Principal::new("ST1TEST"),
            report_date: date,
            carbon_update: carbon,
            biodiversity_update: bio,
            water_impact_update: water,
            social_impact_update: social,
            notes: String::new(),
        }
    }

    #[test]
    fn test_apply_accumulates_carbon_and_replaces_scores() {
        let base = ProjectImpact::zeroed(100);
        let first = base.apply(&report(5000, 80, 75, 60, 101));
        let second = first.apply(&report(7000, 85, 80, 70, 102));

        assert_eq!(second.total_carbon_sequestered, 12000);
        assert_eq!(second.biodiversity_score, 85);
        assert_eq!(second.water_impact_score, 80);
        assert_eq!(second.social_impact_score, 70);
        assert_eq!(second.last_updated, 102);
    }
}
