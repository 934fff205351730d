use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::Write;

use crate::models::{Evaluation, Metric};

/// An evaluation tagged with the moment it was produced, for JSON output.
#[derive(Debug, Serialize)]
pub struct StampedEvaluation<'a> {
    pub evaluated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub evaluation: &'a Evaluation,
}

fn price(v: Option<f64>) -> String {
    v.map(|p| p.to_string()).unwrap_or_else(|| "-".to_string())
}

fn percent(m: Metric) -> String {
    match m {
        Metric::Value(v) => format!("{:.1}%", v),
        Metric::Unavailable => "-".to_string(),
    }
}

/// Plain-text rendering of an evaluation, one section per concern.
pub fn render(eval: &Evaluation, evaluated_at: DateTime<Utc>) -> String {
    let mut out = String::new();
    let rule = "=".repeat(60);

    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(
        out,
        "  SIGNAL: {}  ({})",
        eval.final_signal.as_deref().unwrap_or("-"),
        eval.symbol.as_deref().unwrap_or("-")
    );
    let _ = writeln!(out, "  Evaluated:   {}", evaluated_at.to_rfc3339());
    let _ = writeln!(out, "{}", rule);

    if eval.low_reward_warning {
        let _ = writeln!(out, "  !! Risk-reward below minimum. Entry not recommended.");
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "  LEVELS");
    let _ = writeln!(out, "  ───────────────────────────────────");
    let _ = writeln!(out, "  Entry:       {}", price(eval.entry));
    let _ = writeln!(out, "  Take Profit: {}", price(eval.take_profit));
    let _ = writeln!(out, "  Stop Loss:   {}", price(eval.stop_loss));
    let _ = writeln!(out);
    let _ = writeln!(out, "  PROJECTION");
    let _ = writeln!(out, "  ───────────────────────────────────");
    let _ = writeln!(out, "  Gain:        ${}", eval.risk.gain);
    let _ = writeln!(out, "  Loss:        ${}", eval.risk.loss);
    let _ = writeln!(out, "  R:R:         {}:1", eval.risk.ratio);

    if !eval.checklist.is_empty() {
        for (title, pct, pick) in [
            ("BUY CONFIRMATIONS", eval.aggregate.long_percent, true),
            ("SELL CONFIRMATIONS", eval.aggregate.short_percent, false),
        ] {
            let _ = writeln!(out);
            let _ = writeln!(out, "  {}", title);
            let _ = writeln!(out, "  ───────────────────────────────────");
            for check in &eval.checklist {
                let confirmed = if pick { check.buy } else { check.sell };
                let mark = if confirmed { "[x]" } else { "[ ]" };
                let note = if check.counted { "" } else { " (not counted)" };
                let _ = writeln!(out, "  {} {}{}", mark, check.name, note);
            }
            let _ = writeln!(out, "  Agreement:   {}", percent(pct));
        }
    }

    let _ = writeln!(out, "{}", rule);
    out
}

pub fn print_summary(eval: &Evaluation, evaluated_at: DateTime<Utc>) {
    print!("{}", render(eval, evaluated_at));
}
