pub mod analysis;
pub mod direction;
pub mod flag;
pub mod metrics;

pub use analysis::{AnalysisResult, Confirmations};
pub use direction::Direction;
pub use flag::{ConfirmationRecord, FlagValue};
pub use metrics::*;
