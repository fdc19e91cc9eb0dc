use crate::core::{CallContext, ImpactReport, ProjectId, ProjectImpact, ReportId, Result};
use crate::storage::InMemoryStore;
use tracing::{debug, warn};

/// Per-project impact tracking: a cumulative aggregate fed by immutable,
/// sequence-numbered reports.
///
/// The ledger owns all mutable state and is mutated only through the five
/// operations below. Construct one instance and pass it explicitly to
/// callers; there is no process-wide singleton.
///
/// # Examples
///
/// ```
/// use impact_ledger::{CallContext, ImpactLedger, Principal, ProjectId};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut ledger = ImpactLedger::new();
/// let ctx = CallContext::new(Principal::new("ST1REPORTER"), 100);
///
/// ledger.initialize_impact(&ctx, ProjectId(1))?;
/// let report_id = ledger.add_impact_report(
///     &ctx, ProjectId(1), 5000, 80, 75, 60,
///     "First year assessment shows positive trends in biodiversity.",
/// )?;
/// assert_eq!(report_id, 1);
///
/// let impact = ledger.get_project_impact(ProjectId(1)).unwrap();
/// assert_eq!(impact.total_carbon_sequestered, 5000);
/// # Ok(())
/// # }
/// ```
pub struct ImpactLedger {
    store: InMemoryStore,
}

impl ImpactLedger {
    pub fn new() -> Self {
        Self {
            store: InMemoryStore::new(),
        }
    }

    /// Create or reset the aggregate for a project to all-zero metrics.
    ///
    /// Destructive on re-init: any previously accumulated totals are
    /// discarded while the project's reports and counter survive. The
    /// overwrite is logged at `warn` when reports already exist.
    pub fn initialize_impact(&mut self, ctx: &CallContext, project: ProjectId) -> Result<()> {
        let existing = self.store.report_count(project);
        if existing > 0 {
            warn!(
                project = %project,
                reports = existing,
                "re-initializing a project with existing reports; accumulated totals are reset"
            );
        }

        self.store
            .put_impact(project, ProjectImpact::zeroed(ctx.block_height));
        debug!(project = %project, height = ctx.block_height, "impact tracking initialized");
        Ok(())
    }

    /// Record an immutable report and fold it into the project aggregate.
    ///
    /// Succeeds even when the project was never initialized: the fold then
    /// starts from a zeroed baseline. Returns the report's 1-based
    /// sequence number.
    #[allow(clippy::too_many_arguments)]
    pub fn add_impact_report(
        &mut self,
        ctx: &CallContext,
        project: ProjectId,
        carbon_update: i64,
        biodiversity_update: i64,
        water_impact_update: i64,
        social_impact_update: i64,
        notes: &str,
    ) -> Result<ReportId> {
        let report_id = self.store.report_count(project) + 1;
        self.store.set_report_count(project, report_id);

        let report = ImpactReport {
            reporter: ctx.sender.clone(),
            report_date: ctx.block_height,
            carbon_update,
            biodiversity_update,
            water_impact_update,
            social_impact_update,
            notes: notes.to_string(),
        };

        let updated = self.store.impact_or_zeroed(project).apply(&report);
        self.store.insert_report(project, report_id, report);
        self.store.put_impact(project, updated);

        debug!(
            project = %project,
            report_id,
            height = ctx.block_height,
            reporter = %ctx.sender,
            "impact report recorded"
        );
        Ok(report_id)
    }

    /// Current aggregate, or `None` if the project was never initialized
    /// and never reported on.
    pub fn get_project_impact(&self, project: ProjectId) -> Option<ProjectImpact> {
        self.store.get_impact(project).copied()
    }

    /// The immutable report at (project, id), if it exists.
    pub fn get_impact_report(&self, project: ProjectId, id: ReportId) -> Option<&ImpactReport> {
        self.store.get_report(project, id)
    }

    /// Number of reports accepted for a project; 0 if it never received one.
    pub fn get_report_count(&self, project: ProjectId) -> u64 {
        self.store.report_count(project)
    }
}

impl Default for ImpactLedger {
    fn default() -> Self {
        Self::new()
    }
}
