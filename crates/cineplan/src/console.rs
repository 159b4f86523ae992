//! Colorful console output for solver events.
//!
//! Provides a `tracing` layer that renders the structured events emitted by
//! the solvers as one line each on stderr, leaving stdout to the caller.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (solve start/end, interrupted search)
//! - **DEBUG**: Every published plan
//! - **TRACE**: Annealing cycle restarts

use std::io::{self, Write};
use std::sync::OnceLock;

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

const DEFAULT_FILTER: &str = "cineplan_solver=info,cineplan=info";

/// Initializes console output.
///
/// Safe to call multiple times; only the first call has effect. `RUST_LOG`
/// overrides the default filter.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(PlanConsoleLayer)
            .try_init();
    });
}

/// A tracing layer that formats solver events with colors.
pub struct PlanConsoleLayer;

impl<S: Subscriber> Layer<S> for PlanConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if !event.metadata().target().starts_with("cineplan") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stderr(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    solver: Option<String>,
    path: Option<String>,
    error: Option<String>,
    films: Option<u64>,
    restrictions: Option<u64>,
    cinemas: Option<u64>,
    lower_bound_days: Option<u64>,
    seed: Option<u64>,
    days: Option<u64>,
    best_days: Option<u64>,
    steps: Option<u64>,
    cycles: Option<u64>,
    nodes: Option<u64>,
    speed: Option<u64>,
    duration_ms: Option<u64>,
    elapsed_ms: Option<u64>,
    proven_optimal: Option<bool>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        let s = s.trim_matches('"').to_string();
        match field.name() {
            "event" => self.event = Some(s),
            "solver" => self.solver = Some(s),
            "path" => self.path = Some(s),
            "error" => self.error = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "films" => self.films = Some(value),
            "restrictions" => self.restrictions = Some(value),
            "cinemas" => self.cinemas = Some(value),
            "lower_bound_days" => self.lower_bound_days = Some(value),
            "seed" => self.seed = Some(value),
            "days" => self.days = Some(value),
            "best_days" => self.best_days = Some(value),
            "steps" => self.steps = Some(value),
            "cycles" => self.cycles = Some(value),
            "nodes" => self.nodes = Some(value),
            "speed" => self.speed = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "elapsed_ms" => self.elapsed_ms = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value as u64);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "proven_optimal" {
            self.proven_optimal = Some(value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "solver" => self.solver = Some(value.to_string()),
            "path" => self.path = Some(value.to_string()),
            "error" => self.error = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor) -> String {
    match v.event.as_deref().unwrap_or("") {
        "solve_start" => format_solve_start(v),
        "solve_end" => format_solve_end(v),
        "new_best" => format_new_best(v),
        "search_stopped" => format_search_stopped(v),
        "plan_write_failed" => format_write_failed(v),
        _ => String::new(),
    }
}

fn count(value: Option<u64>) -> String {
    value.unwrap_or(0).to_formatted_string(&Locale::en)
}

fn format_solve_start(v: &EventVisitor) -> String {
    format!(
        "{} {} │ {} films │ {} restrictions │ {} cinemas │ ≥ {} days │ seed {}",
        "▶".bright_green().bold(),
        v.solver.as_deref().unwrap_or("Solver").white().bold(),
        count(v.films).bright_yellow(),
        count(v.restrictions).bright_yellow(),
        count(v.cinemas).bright_yellow(),
        count(v.lower_bound_days).bright_magenta(),
        v.seed.unwrap_or(0).bright_black(),
    )
}

fn format_new_best(v: &EventVisitor) -> String {
    format!(
        "{} {} days │ {} steps │ {}",
        "★".bright_cyan(),
        count(v.days).bright_green().bold(),
        count(v.steps).white(),
        format_duration_ms(v.elapsed_ms.unwrap_or(0)).yellow(),
    )
}

fn format_search_stopped(v: &EventVisitor) -> String {
    format!(
        "{} search stopped │ {} nodes │ best {} days",
        "◆".bright_yellow(),
        count(v.nodes).white(),
        count(v.best_days).bright_green(),
    )
}

fn format_solve_end(v: &EventVisitor) -> String {
    let status = if v.proven_optimal.unwrap_or(false) {
        "OPTIMAL".bright_green().bold().to_string()
    } else {
        "BEST FOUND".bright_yellow().bold().to_string()
    };

    let mut output = format!(
        "{} {} complete │ {} days │ {} │ {} steps │ {} steps/s",
        "■".bright_cyan().bold(),
        v.solver.as_deref().unwrap_or("Solver").white().bold(),
        count(v.days).bright_green().bold(),
        status,
        count(v.steps).white(),
        count(v.speed).bright_magenta(),
    );
    if let Some(cycles) = v.cycles.filter(|&c| c > 0) {
        output.push_str(&format!(" │ {} cycles", cycles.to_formatted_string(&Locale::en)));
    }
    output.push_str(&format!(
        " │ {}",
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow()
    ));
    output
}

fn format_write_failed(v: &EventVisitor) -> String {
    format!(
        "{} cannot write {}: {}",
        "✗".bright_red().bold(),
        v.path.as_deref().unwrap_or("?"),
        v.error.as_deref().unwrap_or("unknown error").red(),
    )
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        format!("{}m {}s", ms / 60_000, (ms % 60_000) / 1000)
    }
}
