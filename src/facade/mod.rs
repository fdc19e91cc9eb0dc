pub mod ledger;

pub use ledger::ImpactLedger;
