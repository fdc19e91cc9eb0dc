use crate::core::{ImpactReport, ProjectId, ProjectImpact, ReportId};
use std::collections::HashMap;

/// Store-owned mutable state behind the ledger.
///
/// Exactly one logical writer exists by construction (the execution
/// environment serializes calls), so plain `HashMap`s without locks.
/// Reads of the counter and the aggregate return explicit zero defaults
/// for unknown projects instead of failing; reports arriving before an
/// initialize call depend on this.
pub struct InMemoryStore {
    impacts: HashMap<ProjectId, ProjectImpact>,
    reports: HashMap<(ProjectId, ReportId), ImpactReport>,
    report_counts: HashMap<ProjectId, u64>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            impacts: HashMap::new(),
            reports: HashMap::new(),
            report_counts: HashMap::new(),
        }
    }

    /// Create or unconditionally overwrite the aggregate for a project.
    pub fn put_impact(&mut self, project: ProjectId, impact: ProjectImpact) {
        self.impacts.insert(project, impact);
    }

    pub fn get_impact(&self, project: ProjectId) -> Option<&ProjectImpact> {
        self.impacts.get(&project)
    }

    /// Aggregate baseline for the fold path: a zeroed record when the
    /// project was never initialized.
    pub fn impact_or_zeroed(&self, project: ProjectId) -> ProjectImpact {
        self.impacts
            .get(&project)
            .copied()
            .unwrap_or_else(|| ProjectImpact::zeroed(0))
    }

    pub fn insert_report(&mut self, project: ProjectId, id: ReportId, report: ImpactReport) {
        self.reports.insert((project, id), report);
    }

    pub fn get_report(&self, project: ProjectId, id: ReportId) -> Option<&ImpactReport> {
        self.reports.get(&(project, id))
    }

    /// Counter read defaults to 0 for projects that never received a report.
    pub fn report_count(&self, project: ProjectId) -> u64 {
        self.report_counts.get(&project).copied().unwrap_or(0)
    }

    pub fn set_report_count(&mut self, project: ProjectId, count: u64) {
        self.report_counts.insert(project, count);
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_project_defaults() {
        let store = InMemoryStore::new();
        let project = ProjectId(42);

        assert!(store.get_impact(project).is_none());
        assert!(store.get_report(project, 1).is_none());
        assert_eq!(store.report_count(project), 0);

        let baseline = store.impact_or_zeroed(project);
        assert_eq!(baseline, ProjectImpact::zeroed(0));
    }

    #[test]
    fn test_put_impact_overwrites() {
        let mut store = InMemoryStore::new();
        let project = ProjectId(1);

        let mut impact = ProjectImpact::zeroed(100);
        impact.total_carbon_sequestered = 5000;
        store.put_impact(project, impact);
        store.put_impact(project, ProjectImpact::zeroed(200));

        assert_eq!(store.get_impact(project).unwrap().total_carbon_sequestered, 0);
        assert_eq!(store.get_impact(project).unwrap().last_updated, 200);
    }
}
