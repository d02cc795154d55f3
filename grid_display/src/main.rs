// main.rs - Desktop viewer that steps a board interactively

use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use conway::{Grid, Simulator, Symbols, patterns};
use eframe::egui;
use egui::Color32;
use log::{info, warn};

mod ui;

/// View and step a Game of Life board.
#[derive(Debug, Parser)]
#[command(name = "grid_display", version)]
struct Args {
    /// Board in the `height width steps` + rows format
    file: Option<PathBuf>,

    /// Rows of the blank board used when no file is given
    #[arg(long, default_value_t = 50)]
    height: usize,

    /// Columns of the blank board used when no file is given
    #[arg(long, default_value_t = 50)]
    width: usize,

    /// Named pattern to center on the blank board, e.g. "glider"
    #[arg(long, conflicts_with = "file")]
    pattern: Option<String>,
}

fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    let app = LifeViewer::from_args(&args);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 950.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(|_cc| Box::new(app)),
    )
}

pub struct LifeViewer {
    sim: Simulator,
    initial: Grid,               // Restored by Reset
    pub target_steps: Option<u64>,
    pub is_running: bool,
    pub last_update: Instant,
    pub update_interval: Duration,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub selected_pattern: usize,
    pub status: String,
    random_seed: u64,
}

impl LifeViewer {
    fn new(initial: Grid, target_steps: Option<u64>, status: String) -> Self {
        Self {
            sim: Simulator::new(initial.clone()),
            initial,
            target_steps,
            is_running: false,
            last_update: Instant::now(),
            update_interval: Duration::from_millis(200),
            live_color: Color32::from_rgb(0, 200, 0),
            dead_color: Color32::from_rgb(40, 40, 40),
            selected_pattern: 0,
            status,
            random_seed: 0,
        }
    }

    fn from_args(args: &Args) -> Self {
        let blank = || Grid::new(args.height, args.width);
        let Some(path) = &args.file else {
            return match args.pattern.as_deref() {
                None => Self::new(blank(), None, "Blank board".to_string()),
                Some(name) => match patterns::find(name) {
                    Some(pattern) => {
                        let grid = pattern.place(args.height, args.width);
                        let mut viewer = Self::new(grid, None, format!("Placed {}", pattern.name));
                        viewer.selected_pattern = patterns::PATTERNS
                            .iter()
                            .position(|p| p.name == pattern.name)
                            .unwrap_or(0);
                        viewer
                    }
                    None => {
                        warn!("unknown pattern {name:?}");
                        Self::new(blank(), None, format!("Unknown pattern {name:?}"))
                    }
                },
            };
        };

        let loaded = fs::read(path)
            .map_err(conway::LifeError::from)
            .and_then(|bytes| conway::parse_input(&conway::decode(bytes), &Symbols::default()));
        match loaded {
            Ok(input) => {
                info!("loaded {} ({}x{})", path.display(), input.grid.height(), input.grid.width());
                // A negative step count has no target to run to
                let target = u64::try_from(input.steps).ok();
                Self::new(input.grid, target, format!("Loaded {}", path.display()))
            }
            Err(e) => {
                warn!("could not load {}: {e}", path.display());
                Self::new(blank(), None, format!("Could not load {}: {e}", path.display()))
            }
        }
    }

    pub fn grid(&self) -> &Grid {
        self.sim.grid()
    }

    pub fn generation(&self) -> u64 {
        self.sim.generation()
    }

    pub fn update_generation(&mut self) {
        self.sim.step();
        if self.sim.is_still() {
            self.is_running = false;
            self.status = format!("Still life at generation {}", self.sim.generation());
        } else if let Some(period) = self.sim.cycle_period() {
            self.is_running = false;
            self.status = format!("Period {period} cycle at generation {}", self.sim.generation());
        }
    }

    pub fn run_to_target(&mut self) {
        if let Some(target) = self.target_steps {
            self.sim.run_to(target);
            self.status = format!("Ran to generation {}", self.sim.generation());
        }
    }

    pub fn reset(&mut self) {
        self.sim.reset(self.initial.clone());
        self.status = "Reset to initial board".to_string();
    }

    pub fn clear_grid(&mut self) {
        let (h, w) = (self.grid().height(), self.grid().width());
        self.sim.reset(Grid::new(h, w));
    }

    pub fn apply_selected_pattern(&mut self) {
        if let Some(pattern) = patterns::PATTERNS.get(self.selected_pattern) {
            let (h, w) = (self.grid().height(), self.grid().width());
            self.sim.reset(pattern.place(h, w));
            self.status = format!("Placed {}", pattern.name);
        }
    }

    pub fn apply_random_pattern(&mut self) {
        let (h, w) = (self.grid().height(), self.grid().width());
        self.random_seed = self.random_seed.wrapping_add(1);
        self.sim.reset(patterns::random_grid(h, w, self.random_seed));
    }

    pub fn toggle_cell(&mut self, row: usize, col: usize) {
        if self.grid().contains(row, col) {
            self.sim.toggle(row, col);
        }
    }
}
