pub mod dispatch;

pub use dispatch::{
    OP_ADD_IMPACT_REPORT, OP_GET_IMPACT_REPORT, OP_GET_PROJECT_IMPACT, OP_GET_REPORT_COUNT,
    OP_INITIALIZE_IMPACT, call_public,
};
