// ============================================================================
// Impact Ledger Library
// ============================================================================

pub mod core;
pub mod dispatch;
pub mod facade;
pub mod result;
pub mod storage;

// Re-export main types for convenience
pub use crate::core::{
    BlockHeight, CallContext, ImpactReport, LedgerError, Principal, ProjectId, ProjectImpact,
    ReportId, Result,
};
pub use crate::dispatch::call_public;
pub use crate::facade::ImpactLedger;
pub use crate::result::CallResult;

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(height: BlockHeight) -> CallContext {
        CallContext::new(Principal::new("ST1REPORTER"), height)
    }

    #[test]
    fn test_ledger_smoke() {
        let mut ledger = ImpactLedger::new();

        ledger.initialize_impact(&ctx(100), ProjectId(1)).unwrap();
        let id = ledger
            .add_impact_report(&ctx(101), ProjectId(1), 5000, 80, 75, 60, "first")
            .unwrap();
        assert_eq!(id, 1);

        let impact = ledger.get_project_impact(ProjectId(1)).unwrap();
        assert_eq!(impact.total_carbon_sequestered, 5000);
        assert_eq!(ledger.get_report_count(ProjectId(1)), 1);
    }

    #[test]
    fn test_dispatch_smoke() {
        let mut ledger = ImpactLedger::new();
        let result = call_public(
            &mut ledger,
            &ctx(100),
            "initialize-impact",
            &[serde_json::json!(1)],
        );
        assert!(result.is_success());
    }
}
