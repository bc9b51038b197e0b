mod ui;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use mosaic::achievements::data::DEMO_ACHIEVEMENTS;
use mosaic::achievements::{demo_catalog, AchievementCatalog, AchievementProgress, UnlockedRecord};
use mosaic::build_info;
use mosaic::config::{config_path, load_config, MosaicConfig};
use mosaic::core::presenter::{PresenterEvent, UnlockPresenter};
use mosaic::diagnostics::{DiagnosticSink, LogSink, RecordingSink};
use mosaic::grid::{resolve_grid, AchievementGridState, GridLayoutEngine, ProgressMap, UnlockedMap};
use mosaic::unlock::{FeedbackSink, ImpactIntensity, Millis};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};
use ui::mosaic_scene::{CellMetrics, UNITS_PER_COLUMN};
use ui::STATUS_PANEL_WIDTH;

/// Status lines kept for the side panel.
const MAX_NOTES: usize = 32;

/// How many achievements `b` unlocks at once.
const BATCH_SIZE: usize = 3;

/// Feedback shown as status lines, since a terminal has no haptics.
#[derive(Default)]
struct StatusFeedback {
    messages: Vec<String>,
}

impl FeedbackSink for StatusFeedback {
    fn play(&mut self, effect: &str) {
        self.messages.push(format!("♪ {}", effect));
    }

    fn play_impact(&mut self, intensity: ImpactIntensity) {
        self.messages.push(format!("~ {:?} impact", intensity));
    }

    fn play_success_notification(&mut self) {
        self.messages.push("✓ success".to_string());
    }
}

struct App {
    catalog: AchievementCatalog,
    progress: ProgressMap,
    /// Every unlock recorded so far.
    unlocked: UnlockedMap,
    /// Unlocks whose reveal has been committed; drives what the mosaic shows.
    revealed: UnlockedMap,
    live_grid: AchievementGridState,
    shown_grid: AchievementGridState,
    presenter: UnlockPresenter,
    layout: GridLayoutEngine,
    feedback: StatusFeedback,
    diagnostics: RecordingSink,
    notes: Vec<String>,
}

impl App {
    fn new(config: &MosaicConfig) -> Result<Self, mosaic::GridConfigError> {
        let catalog = demo_catalog(config.grid_size)?;
        let layout = config.layout_engine()?;
        let diagnostics = RecordingSink::new();

        let progress: ProgressMap = catalog
            .definitions()
            .into_iter()
            .map(|def| {
                (
                    def.id.clone(),
                    AchievementProgress::new(def.target / 2, def.target),
                )
            })
            .collect();

        let unlocked = UnlockedMap::new();
        let live_grid = resolve_grid(&catalog, &unlocked, &progress, &diagnostics);
        let shown_grid = live_grid.clone();

        Ok(Self {
            catalog,
            progress,
            revealed: unlocked.clone(),
            unlocked,
            live_grid,
            shown_grid,
            presenter: UnlockPresenter::new(config.celebration_ms),
            layout,
            feedback: StatusFeedback::default(),
            diagnostics,
            notes: Vec::new(),
        })
    }

    /// Records unlocks for the next `count` demo achievements.
    fn unlock_next(&mut self, count: usize) {
        let next: Vec<&str> = DEMO_ACHIEVEMENTS
            .iter()
            .map(|entry| entry.0)
            .filter(|id| self.catalog.contains(id) && !self.unlocked.contains_key(*id))
            .take(count)
            .collect();

        if next.is_empty() {
            self.note("All achievements unlocked".to_string());
            return;
        }

        let previous = self.unlocked.clone();
        for id in next {
            self.unlocked
                .insert(id.to_string(), UnlockedRecord::now(id));
        }
        self.presenter
            .sync_unlocks(&previous, &self.unlocked, &self.catalog, &self.diagnostics);
        self.live_grid = resolve_grid(&self.catalog, &self.unlocked, &self.progress, &self.diagnostics);
    }

    fn reveal(&mut self, id: &str) {
        if let Some(record) = self.unlocked.get(id) {
            self.revealed.insert(id.to_string(), record.clone());
            self.shown_grid =
                resolve_grid(&self.catalog, &self.revealed, &self.progress, &self.diagnostics);
        }
    }

    fn cell_metrics(&mut self, terminal_width: u16, terminal_height: u16) -> CellMetrics {
        let cols = terminal_width
            .saturating_sub(STATUS_PANEL_WIDTH)
            .min(terminal_height.saturating_mul(2));
        let container = cols as f64 * UNITS_PER_COLUMN;
        let layout = self.layout.layout(container, &self.diagnostics);
        CellMetrics::from_cell_size(layout.cell_size)
    }

    fn tick(&mut self, now: Millis, cell_size: f64) {
        let events = self.presenter.tick(
            now,
            &self.live_grid,
            cell_size,
            &mut self.feedback,
            &self.diagnostics,
        );
        self.handle_events(events);
    }

    fn handle_events(&mut self, events: Vec<PresenterEvent>) {
        for event in events {
            match event {
                PresenterEvent::RevealCommitted { id } => self.reveal(&id),
                PresenterEvent::CelebrationStarted { id } => {
                    self.reveal(&id);
                    if let Some(def) = self.catalog.get(&id) {
                        self.note(format!("Unlocked: {}", def.name));
                    }
                }
                PresenterEvent::Started { id } => log::debug!("presenting {}", id),
                _ => {}
            }
        }
    }

    /// Moves pending feedback and diagnostics into the status panel.
    fn collect_notes(&mut self) {
        let messages = std::mem::take(&mut self.feedback.messages);
        for message in messages {
            self.note(message);
        }
        for diagnostic in self.diagnostics.take() {
            let text = diagnostic.to_string();
            LogSink.report(diagnostic);
            self.note(text);
        }
    }

    fn note(&mut self, text: String) {
        self.notes.push(text);
        if self.notes.len() > MAX_NOTES {
            let excess = self.notes.len() - MAX_NOTES;
            self.notes.drain(..excess);
        }
    }
}

fn load_settings() -> MosaicConfig {
    let path = match config_path() {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Warning: {}. Using default settings.", e);
            return MosaicConfig::default();
        }
    };
    match load_config(&path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: could not load {}: {}. Using default settings.",
                path.display(),
                e
            );
            MosaicConfig::default()
        }
    }
}

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Mosaic - Achievement Mosaic Preview\n");
                println!("Usage: mosaic [option]\n");
                println!("Options:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message\n");
                println!("Keys:");
                println!("  u          Unlock the next achievement");
                println!("  b          Unlock the next {} achievements", BATCH_SIZE);
                println!("  c          Skip the running animation");
                println!("  Enter      Dismiss the detail card");
                println!("  q          Quit");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'mosaic --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    let config = load_settings();
    let mut app = match App::new(&config) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Invalid mosaic configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let started = Instant::now();
    let result = run(&mut terminal, &mut app, started);

    // Restore terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    started: Instant,
) -> io::Result<()> {
    loop {
        let now = started.elapsed().as_millis() as Millis;
        let size = terminal.size()?;
        let metrics = app.cell_metrics(size.width, size.height);
        let cell_size = app.layout.current().cell_size;

        app.tick(now, cell_size);
        app.collect_notes();

        terminal.draw(|f| {
            ui::draw_ui(f, &app.shown_grid, &app.presenter, metrics, now, &app.notes);
        })?;

        if event::poll(Duration::from_millis(16))? {
            if let Event::Key(key_event) = event::read()? {
                if key_event.kind != KeyEventKind::Press {
                    continue;
                }
                match key_event.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Char('u') => app.unlock_next(1),
                    KeyCode::Char('b') => app.unlock_next(BATCH_SIZE),
                    KeyCode::Char('c') => {
                        let events = app.presenter.skip_animation(now);
                        app.handle_events(events);
                    }
                    KeyCode::Char(' ') | KeyCode::Enter => {
                        if let Some(PresenterEvent::Finished { id }) = app.presenter.dismiss_detail()
                        {
                            log::debug!("finished {}", id);
                        }
                    }
                    _ => {}
                }
            }
        }
    }
    Ok(())
}
