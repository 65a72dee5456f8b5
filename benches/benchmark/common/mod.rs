use criterion::Criterion;
use std::sync::OnceLock;
use std::time::Duration;
use terminus_outcome::types::{StatusCode, StatusOutcome};
use terminus_outcome::AccessPolicy;

// ============================================================================
// Test Data
// ============================================================================

#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct Tile {
    pub row: u32,
    pub col: u32,
    pub bytes: Vec<u8>,
}

impl Tile {
    pub fn new(index: u32) -> Self {
        Self { row: index / 64, col: index % 64, bytes: vec![(index % 251) as u8; 256] }
    }
}

pub fn tile_indices() -> &'static Vec<u32> {
    static INSTANCE: OnceLock<Vec<u32>> = OnceLock::new();
    INSTANCE.get_or_init(|| (0..1000).collect())
}

// ============================================================================
// Simulation Functions
// ============================================================================

pub fn simulate_lookup<P: AccessPolicy>(index: u32) -> StatusOutcome<Tile, P> {
    if index % 100 == 0 {
        StatusOutcome::failure(StatusCode::NotFound)
    } else {
        StatusOutcome::success(Tile::new(index))
    }
}

pub fn simulate_decode<P: AccessPolicy>(tile: Tile) -> StatusOutcome<Tile, P> {
    if tile.col % 50 == 0 {
        StatusOutcome::failure(StatusCode::ParsingError)
    } else {
        StatusOutcome::success(tile)
    }
}

pub fn simulate_checksum<P: AccessPolicy>(tile: Tile) -> StatusOutcome<u64, P> {
    if tile.row % 25 == 24 {
        StatusOutcome::failure(StatusCode::IncorrectSize)
    } else {
        StatusOutcome::success(tile.bytes.iter().map(|&b| u64::from(b)).sum())
    }
}

// ============================================================================
// Criterion Configuration
// ============================================================================

pub fn configure_criterion() -> Criterion {
    Criterion::default()
        .sample_size(100)
        .warm_up_time(Duration::from_secs(3))
        .measurement_time(Duration::from_secs(5))
        .noise_threshold(0.05)
}
