pub mod confirmations;
pub mod evaluator;
pub mod normalize;
pub mod risk;

pub use confirmations::{aggregate, ConfirmationAggregator};
pub use evaluator::{EvaluationError, SignalEvaluator};
pub use normalize::{normalize_flag, parse_amount};
pub use risk::{compute_risk, PriceLevels, UndeterminedPolicy};
