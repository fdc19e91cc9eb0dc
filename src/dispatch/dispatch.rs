use crate::core::{CallContext, LedgerError, ProjectId, Result};
use crate::facade::ImpactLedger;
use crate::result::CallResult;
use serde_json::{Value, json};

/// Public operation names of the contract surface.
pub const OP_INITIALIZE_IMPACT: &str = "initialize-impact";
pub const OP_ADD_IMPACT_REPORT: &str = "add-impact-report";
pub const OP_GET_PROJECT_IMPACT: &str = "get-project-impact";
pub const OP_GET_IMPACT_REPORT: &str = "get-impact-report";
pub const OP_GET_REPORT_COUNT: &str = "get-report-count";

/// Invoke a public operation by name with JSON-encoded arguments.
///
/// The marshalling layer is the only place argument errors exist; the
/// typed facade beneath it models none. Unknown operation names come back
/// as failed results carrying [`LedgerError::NotImplemented`].
pub fn call_public(
    ledger: &mut ImpactLedger,
    ctx: &CallContext,
    operation: &str,
    args: &[Value],
) -> CallResult {
    match dispatch(ledger, ctx, operation, args) {
        Ok(Some(value)) => CallResult::ok_with(value),
        Ok(None) => CallResult::ok(),
        Err(err) => CallResult::err(&err),
    }
}

fn dispatch(
    ledger: &mut ImpactLedger,
    ctx: &CallContext,
    operation: &str,
    args: &[Value],
) -> Result<Option<Value>> {
    match operation {
        OP_INITIALIZE_IMPACT => {
            let project = project_arg(args, 0)?;
            ledger.initialize_impact(ctx, project)?;
            Ok(None)
        }

        OP_ADD_IMPACT_REPORT => {
            let project = project_arg(args, 0)?;
            let carbon = int_arg(args, 1)?;
            let biodiversity = int_arg(args, 2)?;
            let water = int_arg(args, 3)?;
            let social = int_arg(args, 4)?;
            let notes = str_arg(args, 5)?;

            let report_id = ledger
                .add_impact_report(ctx, project, carbon, biodiversity, water, social, notes)?;
            Ok(Some(json!(report_id)))
        }

        OP_GET_PROJECT_IMPACT => {
            let project = project_arg(args, 0)?;
            Ok(Some(serde_json::to_value(
                ledger.get_project_impact(project),
            )?))
        }

        OP_GET_IMPACT_REPORT => {
            let project = project_arg(args, 0)?;
            let report_id = uint_arg(args, 1)?;
            Ok(Some(serde_json::to_value(
                ledger.get_impact_report(project, report_id),
            )?))
        }

        OP_GET_REPORT_COUNT => {
            let project = project_arg(args, 0)?;
            Ok(Some(json!(ledger.get_report_count(project))))
        }

        other => Err(LedgerError::NotImplemented(other.to_string())),
    }
}

fn project_arg(args: &[Value], index: usize) -> Result<ProjectId> {
    uint_arg(args, index).map(ProjectId)
}

fn int_arg(args: &[Value], index: usize) -> Result<i64> {
    args.get(index).and_then(Value::as_i64).ok_or_else(|| {
        LedgerError::InvalidArgument(format!("expected an integer at position {index}"))
    })
}

fn uint_arg(args: &[Value], index: usize) -> Result<u64> {
    args.get(index).and_then(Value::as_u64).ok_or_else(|| {
        LedgerError::InvalidArgument(format!("expected an unsigned integer at position {index}"))
    })
}

fn str_arg(args: &[Value], index: usize) -> Result<&str> {
    args.get(index).and_then(Value::as_str).ok_or_else(|| {
        LedgerError::InvalidArgument(format!("expected a string at position {index}"))
    })
}
