pub mod result;

pub use result::CallResult;
