pub mod context;
pub mod error;
pub mod types;

pub use context::CallContext;
pub use error::{LedgerError, Result};
pub use types::{BlockHeight, ImpactReport, Principal, ProjectId, ProjectImpact, ReportId};
