//! Terminal control panel for a signal session.
//!
//! Lower-case keys decrease a parameter, upper-case keys increase it:
//!   A amplitude  F frequency  P phase  M noise mean  V noise variance
//!   C cutoff  O order
//! TAB switches filter, W toggles the moving-average window, D cycles the
//! display, N toggles the noisy trace, R resets, Q or ESC quits.

use anyhow::Result;
use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    terminal::{
        Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};
use quietline::{
    DisplayMode, FilterKind, FilterSpec, MovingAverage, SessionConfig, SignalParameters,
    SignalSession, SignalTriple, TraceVisibility, metrics,
};
use std::f64::consts::TAU;
use std::io::{Write, stdout};
use std::panic;
use std::time::Duration;

const COLUMNS: usize = 72;
const LEVELS: [char; 9] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

struct Panel {
    session: SignalSession,
    params: SignalParameters,
    kind: FilterKind,
    cutoff: f64,
    order: usize,
    window: usize,
    display: DisplayMode,
    visibility: TraceVisibility,
    triple: SignalTriple,
    status: String,
}

impl Panel {
    fn new() -> Result<Self> {
        let mut session = SignalSession::new(SessionConfig::default())?;
        let triple = session.evaluate_current()?;
        let mut panel = Self {
            params: session.parameters(),
            session,
            kind: FilterKind::Butterworth,
            cutoff: 5.0,
            order: 4,
            window: MovingAverage::DEFAULT_WINDOW,
            display: DisplayMode::AllInOne,
            visibility: TraceVisibility::default(),
            triple,
            status: String::new(),
        };
        panel.sync_filter_controls();
        Ok(panel)
    }

    fn filter_spec(&self) -> FilterSpec {
        FilterSpec::from_kind(self.kind, self.cutoff, self.order, self.window)
    }

    fn sync_filter_controls(&mut self) {
        match self.session.filter_spec() {
            FilterSpec::Butterworth {
                cutoff_frequency,
                order,
            } => {
                self.kind = FilterKind::Butterworth;
                self.cutoff = cutoff_frequency;
                self.order = order;
            }
            FilterSpec::MovingAverage { window_size } => {
                self.kind = FilterKind::MovingAverage;
                self.window = window_size;
            }
        }
    }

    fn refresh(&mut self) {
        match self.session.evaluate(self.params, self.filter_spec()) {
            Ok(triple) => {
                self.triple = triple;
                self.status.clear();
            }
            Err(err) => self.status = err.to_string(),
        }
    }

    fn reset(&mut self) {
        self.session.reset();
        self.params = self.session.parameters();
        self.sync_filter_controls();
        self.refresh();
    }

    /// Returns false when the panel should close.
    fn handle(&mut self, code: KeyCode) -> bool {
        let p = &mut self.params;
        match code {
            KeyCode::Char('a') => p.amplitude = step(p.amplitude, -0.1, 0.1, 2.0),
            KeyCode::Char('A') => p.amplitude = step(p.amplitude, 0.1, 0.1, 2.0),
            KeyCode::Char('f') => p.frequency = step(p.frequency, -0.1, 0.1, 1.5),
            KeyCode::Char('F') => p.frequency = step(p.frequency, 0.1, 0.1, 1.5),
            KeyCode::Char('p') => p.phase = step(p.phase, -0.1, 0.0, TAU),
            KeyCode::Char('P') => p.phase = step(p.phase, 0.1, 0.0, TAU),
            KeyCode::Char('m') => p.noise_mean = step(p.noise_mean, -0.05, -1.0, 1.0),
            KeyCode::Char('M') => p.noise_mean = step(p.noise_mean, 0.05, -1.0, 1.0),
            KeyCode::Char('v') => p.noise_variance = step(p.noise_variance, -0.05, 0.0, 1.0),
            KeyCode::Char('V') => p.noise_variance = step(p.noise_variance, 0.05, 0.0, 1.0),
            KeyCode::Char('c') => self.cutoff = step(self.cutoff, -0.5, 0.5, 20.0),
            KeyCode::Char('C') => self.cutoff = step(self.cutoff, 0.5, 0.5, 20.0),
            KeyCode::Char('o') => self.order = self.order.saturating_sub(1).max(1),
            KeyCode::Char('O') => self.order = (self.order + 1).min(10),
            KeyCode::Tab => {
                self.kind = match self.kind {
                    FilterKind::Butterworth => FilterKind::MovingAverage,
                    FilterKind::MovingAverage => FilterKind::Butterworth,
                }
            }
            KeyCode::Char('w') | KeyCode::Char('W') => {
                self.window = if self.window == MovingAverage::DEFAULT_WINDOW {
                    MovingAverage::WIDE_WINDOW
                } else {
                    MovingAverage::DEFAULT_WINDOW
                }
            }
            KeyCode::Char('d') | KeyCode::Char('D') => {
                let modes = DisplayMode::ALL;
                let index = modes.iter().position(|m| *m == self.display).unwrap_or(0);
                self.display = modes[(index + 1) % modes.len()];
                return true;
            }
            KeyCode::Char('n') | KeyCode::Char('N') => {
                self.visibility.show_noisy = !self.visibility.show_noisy;
                return true;
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.reset();
                return true;
            }
            code if is_quit_key(code) => return false,
            _ => return true,
        }
        self.refresh();
        true
    }

    fn draw(&self) -> Result<()> {
        let mut out = stdout();
        out.execute(Clear(ClearType::All))?;
        out.execute(crossterm::cursor::MoveTo(0, 0))?;

        let p = &self.params;
        let mut lines = vec![
            format!(
                "amplitude {:.2}  frequency {:.2}  phase {:.2}",
                p.amplitude, p.frequency, p.phase
            ),
            format!(
                "noise mean {:.2}  variance {:.2}  ({:?})",
                p.noise_mean,
                p.noise_variance,
                self.session.noise_mode()
            ),
            match self.kind {
                FilterKind::Butterworth => {
                    format!("filter {}  cutoff {:.1} Hz  order {}", self.kind, self.cutoff, self.order)
                }
                FilterKind::MovingAverage => format!("filter {}  window {}", self.kind, self.window),
            },
            format!("display {}", self.display),
            String::new(),
        ];

        let shown = self.triple.masked(self.visibility);
        let traces = shown.traces(self.display);
        let (low, high) = value_range(traces.iter().flat_map(|t| t.values.iter().copied()));
        for trace in &traces {
            lines.push(format!(
                "[{}] {:<8} {}",
                trace.panel,
                trace.name,
                sparkline(trace.values, low, high)
            ));
        }

        lines.push(String::new());
        if let Ok(mae) = metrics::mean_absolute_error(&self.triple.filtered, &self.triple.clean) {
            lines.push(format!("filtered vs clean MAE {:.4}", mae));
        }
        if !self.status.is_empty() {
            lines.push(format!("error: {}", self.status));
        }
        lines.push("a/A f/F p/P m/M v/V c/C o/O  TAB W D N R  Q=quit".to_string());

        // Raw mode needs explicit carriage returns.
        write!(out, "{}", lines.join("\r\n"))?;
        out.flush()?;
        Ok(())
    }
}

fn step(value: f64, delta: f64, min: f64, max: f64) -> f64 {
    (value + delta).clamp(min, max)
}

fn value_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (low, high) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if low < high { (low, high) } else { (-1.0, 1.0) }
}

/// Downsamples `values` to `COLUMNS` block characters scaled to `[low, high]`.
fn sparkline(values: &[f64], low: f64, high: f64) -> String {
    if values.is_empty() {
        return String::new();
    }
    (0..COLUMNS)
        .map(|col| {
            let v = values[col * values.len() / COLUMNS];
            if !v.is_finite() {
                return ' ';
            }
            let level = ((v - low) / (high - low) * (LEVELS.len() - 1) as f64).round() as usize;
            LEVELS[level.min(LEVELS.len() - 1)]
        })
        .collect()
}

fn is_quit_key(code: KeyCode) -> bool {
    matches!(code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
}

fn cleanup_terminal() {
    let _ = stdout().execute(crossterm::cursor::Show);
    let _ = stdout().execute(LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

fn main() -> Result<()> {
    let mut panel = Panel::new()?;

    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(crossterm::cursor::Hide)?;

    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        cleanup_terminal();
        original_hook(panic_info);
    }));

    panel.draw()?;
    loop {
        if event::poll(Duration::from_millis(50))?
            && let Event::Key(KeyEvent { code, kind, .. }) = event::read()?
        {
            if kind != KeyEventKind::Press {
                continue;
            }
            if !panel.handle(code) {
                break;
            }
            panel.draw()?;
        }
    }

    cleanup_terminal();
    Ok(())
}
