use super::{BlockHeight, Principal};

/// Ambient per-call context supplied by the embedding environment.
///
/// The original design threads an implicit "current sender" and "current
/// block height" through every call; here they are explicit so the ledger
/// stays deterministic and testable.
#[derive(Debug, Clone)]
pub struct CallContext {
    pub sender: Principal,
    pub block_height: BlockHeight,
}

impl CallContext {
    pub fn new(sender: Principal, block_height: BlockHeight) -> Self {
        Self {
            sender,
            block_height,
        }
    }
}
