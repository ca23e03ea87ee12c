//! `lexireel`: watch a word spin through its translations and settle on one.
//!
//! Press `m` for the backend's vocabulary metrics.  The settled label is
//! printed to stdout on exit.

use std::io::{self, stderr, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use ratatui::{
    backend::CrosstermBackend,
    widgets::{Block, Borders, Paragraph},
    Terminal,
};

use lexireel::app::{
    event::{spawn_event_reader, AppEvent},
    handler,
    metrics::{self, MetricsAction, MetricsClient},
    scheduler::TokioScheduler,
    state::{ActiveView, AppState},
};
use lexireel::config::AppConfig;
use lexireel::core::{
    easing::SpeedCurve,
    language::{LabelEntry, LanguageTag},
    layout::{Justify, SizeVariant},
    reel::{Direction, ReelOptions, TextReel},
};
use lexireel::ui::{
    layout::AppLayout,
    popup::{MetricsPopup, SettingsPopup},
    reel_widget::{self, ReelWidget, TooltipLine, DEFAULT_VISIBLE_ROWS},
    theme::Theme,
};

/// Frame interval while something is animating (~60 fps).
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Spin a word through its translations")]
struct Cli {
    /// JSON file with `[{"language": "en", "label": "House"}, ...]`.
    #[arg(long)]
    entries: Option<PathBuf>,

    /// Active languages, comma separated (e.g. `en,es,fr`).
    #[arg(long, value_delimiter = ',')]
    langs: Vec<LanguageTag>,

    /// Language whose label is treated as canonical for the tooltip.
    #[arg(long)]
    primary: Option<LanguageTag>,

    /// Size variant (h1–h6, subtitle1/2, body1/2, caption).
    #[arg(long)]
    size: Option<SizeVariant>,

    /// Spin direction (`up` or `down`).
    #[arg(long)]
    direction: Option<Direction>,

    /// Horizontal justification (`left`, `center`, `right`).
    #[arg(long)]
    justify: Option<Justify>,

    /// Shorten the entrance transition.
    #[arg(long)]
    fast: bool,

    /// Number of ticks before the reel settles.
    #[arg(long)]
    spins: Option<u32>,

    /// Explicit container width in pixels.
    #[arg(long)]
    width: Option<u32>,

    /// Seed for the shuffle (random when omitted).
    #[arg(long)]
    seed: Option<u64>,

    /// Open the metrics popup on start.
    #[arg(long)]
    metrics: bool,
}

// ───────────────────────────────────────── setup ─────────────

fn demo_entries() -> Vec<LabelEntry> {
    [
        ("en", "House"),
        ("es", "Casa"),
        ("fr", "Maison"),
        ("de", "Haus"),
        ("it", "Casa"),
        ("pt", "Casa"),
        ("nl", "Huis"),
        ("sv", "Hus"),
    ]
    .into_iter()
    .filter_map(|(lang, label)| Some(LabelEntry::new(lang.parse().ok()?, label)))
    .collect()
}

fn load_entries(path: &Path) -> Result<Vec<LabelEntry>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("reading entries from {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("parsing entries in {}", path.display()))
}

/// Fold CLI overrides into the loaded config.
fn apply_cli(config: &mut AppConfig, cli: &Cli) {
    if !cli.langs.is_empty() {
        config.active_languages = cli.langs.clone();
    }
    if let Some(primary) = &cli.primary {
        config.primary_language = Some(primary.clone());
    }
    if let Some(size) = cli.size {
        config.size_variant = size;
    }
    if let Some(direction) = cli.direction {
        config.direction = direction;
    }
    if let Some(justify) = cli.justify {
        config.justify = justify;
    }
    if cli.fast {
        config.fast_display = true;
    }
    if let Some(spins) = cli.spins {
        config.reel_spins = spins;
    }
}

fn reel_options(config: &AppConfig, width: Option<u32>) -> ReelOptions {
    ReelOptions {
        size: config.size_variant,
        direction: config.direction,
        speed: SpeedCurve::Default,
        fast_display: config.fast_display,
        width,
        justify: config.justify,
        reel_spins: config.reel_spins,
    }
}

/// Framed reel size in cells for the current options.
fn reel_frame_size(reel: &TextReel) -> (u16, u16) {
    let char_width = reel.options().size.metrics().char_width;
    let inner = reel_widget::cell_width(reel.container(), char_width);
    (inner.saturating_add(2), DEFAULT_VISIBLE_ROWS + 2)
}

fn draw(frame: &mut ratatui::Frame, state: &AppState) {
    let (w, h) = reel_frame_size(&state.reel);
    let layout = AppLayout::from_area(frame.area(), w, h);

    let block = Block::default()
        .title(format!(" {} ", state.reel.options().size))
        .title_style(Theme::title_style())
        .borders(Borders::ALL)
        .border_style(Theme::border_style());
    frame.render_widget(
        ReelWidget::new(&state.reel)
            .entrance(&state.entrance)
            .block(block),
        layout.reel_area,
    );
    frame.render_widget(
        TooltipLine {
            text: state.reel.tooltip(),
        },
        layout.tooltip_area,
    );

    let hint = state.config.status_bar_hint();
    let status_text = state.status_message.as_deref().unwrap_or(&hint);
    frame.render_widget(
        Paragraph::new(status_text).style(Theme::status_bar_style()),
        layout.status_area,
    );

    match state.active_view {
        ActiveView::SettingsMenu => {
            frame.render_widget(SettingsPopup { state }, frame.area());
        }
        ActiveView::Metrics => {
            frame.render_widget(
                MetricsPopup {
                    metrics: &state.metrics,
                    tick: state.idle_ticks,
                },
                frame.area(),
            );
        }
        ActiveView::Reel => {}
    }
}

/// Raw mode plus alternate screen, undone on drop so an early `?` or a
/// panic unwinding through `main` still hands back a usable terminal.
struct TerminalSession<W: Write> {
    out: W,
}

impl<W: Write> TerminalSession<W> {
    fn enter(out: W) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut session = Self { out };
        execute!(session.out, EnterAlternateScreen)?;
        Ok(session)
    }
}

impl<W: Write> Drop for TerminalSession<W> {
    fn drop(&mut self) {
        let _ = execute!(self.out, LeaveAlternateScreen, Show);
        let _ = disable_raw_mode();
    }
}

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing (only when RUST_LOG is set).
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr) // never pollute stdout
        .init();

    let cli = Cli::parse();

    let entries = match &cli.entries {
        Some(path) => load_entries(path)?,
        None => demo_entries(),
    };
    let mut config = AppConfig::load();
    apply_cli(&mut config, &cli);

    let mut rng = match cli.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };
    let reel = TextReel::new(
        entries,
        config.language_prefs(),
        reel_options(&config, cli.width),
        &mut rng,
    );

    // ── async channels ────────────────────────────────────────
    let (tx, mut events) = tokio::sync::mpsc::unbounded_channel::<AppEvent>();
    spawn_event_reader(tx.clone(), Duration::from_millis(100));

    let metrics_client = MetricsClient::new(config.api_base_url.clone(), config.resolved_token());
    let mut state = AppState::new(
        reel,
        Box::new(TokioScheduler::new(tx.clone())),
        rng,
        config,
    );
    state.config_path = Some(lexireel::config::config_path());
    state.metrics_client = Some(metrics_client);
    if cli.metrics {
        state.request_metrics();
    }

    // ── terminal setup ────────────────────────────────────────
    let session = TerminalSession::enter(stderr())?;
    let backend = CrosstermBackend::new(stderr());
    let mut terminal = Terminal::new(backend)?;

    state.mount_reel();
    let mut frames = tokio::time::interval(FRAME_INTERVAL);
    frames.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    let mut last_frame = Instant::now();

    // ── event loop ────────────────────────────────────────────
    loop {
        terminal.draw(|frame| draw(frame, &state))?;

        if state.needs_metrics_fetch {
            state.needs_metrics_fetch = false;
            if let Some(client) = state.metrics_client.clone() {
                metrics::spawn_fetch(client, tx.clone());
            }
        }

        let animating = state.needs_frames();
        if !animating {
            last_frame = Instant::now();
        }

        tokio::select! {
            biased;

            Some(event) = events.recv() => {
                match event {
                    AppEvent::Key(k) => handler::handle_key(&mut state, k),
                    AppEvent::Resize(cols, rows) => {
                        tracing::debug!(cols, rows, "terminal resized");
                    }
                    AppEvent::Tick => state.idle_ticks = state.idle_ticks.wrapping_add(1),
                    AppEvent::ReelTimer(token) => state.on_timer(token),
                    AppEvent::Metrics(result) => {
                        if let Err(e) = &result {
                            tracing::warn!(error = %e, "metrics fetch failed");
                        }
                        state.metrics.apply(MetricsAction::from(result));
                    }
                }
            }

            _ = frames.tick(), if animating => {
                let now = Instant::now();
                state.on_frame(now - last_frame);
                last_frame = now;
            }
        }

        if state.should_quit {
            break;
        }
    }

    // ── teardown ──────────────────────────────────────────────
    state.unmount_reel();
    drop(terminal);
    drop(session);

    // The label the reel landed on goes to stdout for shell use.
    println!("{}", state.reel.centered_label());

    Ok(())
}
