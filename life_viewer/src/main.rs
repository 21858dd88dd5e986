// main.rs - Windowed viewer for the walled Game of Life board

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use eframe::egui;
use egui::Color32;
use rand::SeedableRng;
use rand::rngs::StdRng;

use life::patterns::{self, PATTERNS};
use life::seed::{seed_from_file, seed_random};
use life::{Board, Stepper};

mod ui;

/// Watch a board evolve in a window.
#[derive(Parser, Debug)]
#[command(name = "life-viewer", version, about)]
struct Args {
    /// Seed file to start from; a random board is used when omitted.
    file: Option<PathBuf>,

    /// Board size including the wall.
    #[arg(long, default_value_t = 52)]
    size: usize,

    /// Seed for random boards.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut board = Board::new(args.size)?;
    let mut seed = args.seed.unwrap_or_else(rand::random);
    match &args.file {
        Some(path) => seed_from_file(&mut board, path)
            .with_context(|| format!("cannot seed from {}", path.display()))?,
        None => seed_random(&mut board, &mut StdRng::seed_from_u64(seed)),
    }
    seed = seed.wrapping_add(1);
    tracing::info!(size = args.size, file = ?args.file, "opening viewer");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 950.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |_cc| Box::new(LifeViewer::new(board, seed))),
    )
    .map_err(|err| anyhow::anyhow!("viewer failed: {err}"))
}

pub struct LifeViewer {
    stepper: Stepper,
    initial: Board,

    pub is_running: bool,
    pub last_update: Instant,
    pub update_interval: Duration,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub wall_color: Color32,
    pub other_color: Color32,
    pub selected_pattern: usize,

    next_seed: u64,
}

impl LifeViewer {
    pub fn new(board: Board, next_seed: u64) -> Self {
        Self {
            initial: board.clone(),
            stepper: Stepper::new(board),
            is_running: false,
            last_update: Instant::now(),
            update_interval: Duration::from_millis(200),
            live_color: Color32::from_rgb(0, 200, 0),
            dead_color: Color32::from_rgb(40, 40, 40),
            wall_color: Color32::from_rgb(110, 80, 50),
            other_color: Color32::from_rgb(180, 180, 60),
            selected_pattern: 0,
            next_seed,
        }
    }

    pub fn board(&self) -> &Board {
        self.stepper.board()
    }

    pub fn generation(&self) -> u64 {
        self.stepper.generation()
    }

    pub fn update_generation(&mut self) {
        self.stepper.advance();
    }

    pub fn clear_grid(&mut self) {
        let mut board = self.stepper.board().clone();
        board.clear();
        self.stepper.reset(board);
    }

    pub fn restart(&mut self) {
        self.stepper.reset(self.initial.clone());
    }

    pub fn apply_random(&mut self) {
        let mut board = self.stepper.board().clone();
        seed_random(&mut board, &mut StdRng::seed_from_u64(self.next_seed));
        self.next_seed = self.next_seed.wrapping_add(1);
        self.stepper.reset(board);
    }

    pub fn apply_selected_pattern(&mut self) {
        if let Some(pattern) = PATTERNS.get(self.selected_pattern) {
            let mut board = self.stepper.board().clone();
            patterns::apply_centered(&mut board, pattern);
            self.stepper.reset(board);
        }
    }

    /// Flips an interior cell between alive and dead. Walls and other symbols are left alone.
    pub fn toggle_cell(&mut self, row: usize, col: usize) {
        let board = self.stepper.board_mut();
        let cell = match board.get(row, col) {
            life::Cell::Alive => life::Cell::Dead,
            life::Cell::Dead => life::Cell::Alive,
            _ => return,
        };
        board.set(row, col, cell);
    }
}
