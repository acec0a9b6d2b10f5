//! Colorful console output for siting runs.
//!
//! Provides a custom `tracing` layer that formats solver events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (solving/phase start/end)
//! - **DEBUG**: Field generation
//! - **TRACE**: Individual step evaluations

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
pub use tracing::level_filters::LevelFilter;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static SOLVE_START_NANOS: AtomicU64 = AtomicU64::new(0);

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initializes the console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the banner and sets up tracing at INFO. `RUST_LOG` overrides
/// the default level.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();
        install(LevelFilter::INFO);
    });
}

/// Sets up tracing without the banner, at the given default level.
///
/// Safe to call multiple times - only the first call has effect.
pub fn init_quiet(level: LevelFilter) {
    INIT.get_or_init(|| install(level));
}

fn install(level: LevelFilter) {
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(SolverConsoleLayer)
        .try_init();
}

// Marks the start of solving for elapsed time tracking.
fn mark_solve_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    let nanos = epoch.elapsed().as_nanos() as u64;
    SOLVE_START_NANOS.store(nanos, Ordering::Relaxed);
}

// Returns elapsed time since solve start.
fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start_nanos = SOLVE_START_NANOS.load(Ordering::Relaxed);
    let now_nanos = epoch.elapsed().as_nanos() as u64;
    now_nanos.saturating_sub(start_nanos) as f64 / 1_000_000_000.0
}

fn print_banner() {
    let banner = r#"
     _ _   _
 ___(_) |_(_)_ __   __ _
/ __| | __| | '_ \ / _` |
\__ \ | |_| | | | | (_| |
|___/_|\__|_|_| |_|\__, |
                   |___/
"#;

    let version_line = format!("   v{} - Hill-Climbing Hospital Placement\n", VERSION);

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats solver events with colors.
pub struct SolverConsoleLayer;

impl<S: Subscriber> Layer<S> for SolverConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("siting_solver") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Debug, Default)]
struct EventVisitor {
    event: Option<String>,
    phase: Option<String>,
    domain: Option<String>,
    improvement: Option<String>,
    acceptance_rate: Option<String>,
    steps: Option<u64>,
    step: Option<u64>,
    entity: Option<u64>,
    accepted_count: Option<u64>,
    not_doable: Option<u64>,
    moves_speed: Option<u64>,
    duration_ms: Option<u64>,
    house_count: Option<u64>,
    hospital_count: Option<u64>,
    step_limit: Option<u64>,
    cost: Option<f64>,
    initial_cost: Option<f64>,
    accepted: Option<bool>,
    doable: Option<bool>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        let s = s.trim_matches('"').to_string();
        match field.name() {
            "event" => self.event = Some(s),
            "phase" => self.phase = Some(s),
            "domain" => self.domain = Some(s),
            "improvement" => self.improvement = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "steps" => self.steps = Some(value),
            "step" => self.step = Some(value),
            "entity" => self.entity = Some(value),
            "accepted" => self.accepted_count = Some(value),
            "not_doable" => self.not_doable = Some(value),
            "moves_speed" => self.moves_speed = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "house_count" => self.house_count = Some(value),
            "hospital_count" => self.hospital_count = Some(value),
            "step_limit" => self.step_limit = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        match field.name() {
            "cost" => self.cost = Some(value),
            "initial_cost" => self.initial_cost = Some(value),
            _ => {}
        }
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        match field.name() {
            "accepted" => self.accepted = Some(value),
            "doable" => self.doable = Some(value),
            _ => {}
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "phase" => self.phase = Some(value.to_string()),
            "domain" => self.domain = Some(value.to_string()),
            "improvement" => self.improvement = Some(value.to_string()),
            "acceptance_rate" => self.acceptance_rate = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    let event = v.event.as_deref().unwrap_or("");

    match event {
        "solve_start" => format_solve_start(v),
        "solve_end" => format_solve_end(v),
        "phase_start" => format_phase_start(v),
        "phase_end" => format_phase_end(v),
        "step" => format_step(v, level),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_count(n: u64) -> String {
    n.to_formatted_string(&Locale::en)
}

fn format_cost(cost: Option<f64>) -> String {
    match cost {
        Some(c) => format!("{:.2}", c).bright_green().to_string(),
        None => "N/A".white().to_string(),
    }
}

fn format_solve_start(v: &EventVisitor) -> String {
    mark_solve_start();

    let mut output = format!(
        "{} {} Solving │ {} houses │ {} hospitals",
        format_elapsed(),
        "▶".bright_green().bold(),
        format_count(v.house_count.unwrap_or(0)).bright_yellow(),
        format_count(v.hospital_count.unwrap_or(0)).bright_yellow(),
    );

    if let Some(domain) = &v.domain {
        output.push_str(&format!(" │ {}", domain.bright_magenta()));
    }

    if let Some(limit) = v.step_limit {
        output.push_str(&format!(
            " │ {} steps limit",
            format_count(limit).bright_yellow()
        ));
    }

    output
}

fn format_solve_end(v: &EventVisitor) -> String {
    let improvement = v.improvement.as_deref().unwrap_or("N/A");

    let mut output = format!(
        "{} {} Solving complete │ {} │ {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        format_cost(v.cost),
        improvement.bright_yellow()
    );

    // Summary box
    let inner_width: usize = 58;
    let rule = "═".repeat(inner_width);
    let row = |label: &str, value: String| {
        format!(
            "{}  {:<18}{:>36}  {}\n",
            "║".bright_cyan(),
            label,
            value,
            "║".bright_cyan()
        )
    };
    let cost_text = |c: Option<f64>| c.map_or_else(|| "N/A".to_string(), |c| format!("{:.2}", c));

    output.push_str("\n\n");
    output.push_str(&format!("╔{}╗", rule).bright_cyan().to_string());
    output.push('\n');
    output.push_str(&row("Initial cost:", cost_text(v.initial_cost)));
    output.push_str(&row("Final cost:", cost_text(v.cost)));
    output.push_str(&row("Improvement:", improvement.to_string()));
    output.push_str(&format!("╚{}╝", rule).bright_cyan().to_string());
    output.push('\n');

    output
}

fn format_phase_start(v: &EventVisitor) -> String {
    let phase = v.phase.as_deref().unwrap_or("Unknown");

    format!(
        "{} {} {} started │ {}",
        format_elapsed(),
        "▶".bright_blue(),
        phase.white().bold(),
        format_cost(v.cost)
    )
}

fn format_phase_end(v: &EventVisitor) -> String {
    let phase = v.phase.as_deref().unwrap_or("Unknown");
    let duration = v.duration_ms.unwrap_or(0);

    let mut output = format!(
        "{} {} {} ended │ {} │ {} steps │ {} moves/s",
        format_elapsed(),
        "◀".bright_blue(),
        phase.white().bold(),
        format_duration_ms(duration).yellow(),
        format_count(v.steps.unwrap_or(0)).white(),
        format_count(v.moves_speed.unwrap_or(0))
            .bright_magenta()
            .bold(),
    );

    if let Some(not_doable) = v.not_doable {
        if not_doable > 0 {
            output.push_str(&format!(
                " │ {} blocked",
                format_count(not_doable).bright_black()
            ));
        }
    }

    match (v.accepted_count, &v.acceptance_rate) {
        (Some(count), Some(rate)) => output.push_str(&format!(
            " │ {} accepted ({})",
            format_count(count).white(),
            rate.bright_yellow()
        )),
        (None, Some(rate)) => output.push_str(&format!(" │ {} accepted", rate.bright_yellow())),
        _ => {}
    }

    output.push_str(&format!(" │ {}", format_cost(v.cost)));

    output
}

fn format_step(v: &EventVisitor, level: Level) -> String {
    if level != Level::TRACE {
        return String::new();
    }

    let step = v.step.unwrap_or(0);
    let entity = v.entity.unwrap_or(0);
    let accepted = v.accepted.unwrap_or(false);

    let icon = if accepted {
        "✓".bright_green().to_string()
    } else if v.doable == Some(false) {
        "·".bright_black().to_string()
    } else {
        "✗".bright_red().to_string()
    };

    format!(
        "{} {} Step {:>10} │ Hospital {:>6} │ {}",
        format_elapsed(),
        icon,
        format_count(step).bright_black(),
        format_count(entity).bright_black(),
        format_cost(v.cost)
    )
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_ms() {
        assert_eq!(format_duration_ms(250), "250ms");
        assert_eq!(format_duration_ms(1500), "1.50s");
        assert_eq!(format_duration_ms(125_000), "2m 5s");
    }

    #[test]
    fn test_unknown_event_is_silent() {
        let visitor = EventVisitor {
            event: Some("field_generated".to_string()),
            ..Default::default()
        };
        assert!(format_event(&visitor, Level::DEBUG).is_empty());
    }

    #[test]
    fn test_step_only_at_trace() {
        let visitor = EventVisitor {
            event: Some("step".to_string()),
            step: Some(3),
            accepted: Some(true),
            cost: Some(12.5),
            ..Default::default()
        };
        assert!(format_event(&visitor, Level::DEBUG).is_empty());
        assert!(format_event(&visitor, Level::TRACE).contains("Step"));
    }

    #[test]
    fn test_solve_end_reports_costs() {
        let visitor = EventVisitor {
            event: Some("solve_end".to_string()),
            initial_cost: Some(200.0),
            cost: Some(150.0),
            improvement: Some("25.00%".to_string()),
            ..Default::default()
        };
        let output = format_event(&visitor, Level::INFO);
        assert!(output.contains("200.00"));
        assert!(output.contains("150.00"));
        assert!(output.contains("25.00%"));
    }
}
