//! Per-series color selection.
//!
//! - **Single package**: versions walk the palette in order. Identical input
//!   always yields identical colors, so re-renders of one package are stable.
//! - **Several packages**: each package owns the palette color at its index and
//!   every version gets a random saturation/lightness jitter around it. Lines of
//!   one package stay recognizably related, but the exact shades change from
//!   one render to the next. Pass a seeded [`RngDraws`] when reproducible
//!   output matters.

use crate::color::{Color, Palette};
use crate::models::HistoricalDataset;
use log::debug;
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Relative adjustment steps for the multi-package jitter.
pub const INCREMENTS: [f64; 5] = [0.1, 0.2, 0.3, 0.4, 0.5];

/// Source of uniform samples for the jitter.
pub trait DrawSource {
    /// Next sample, nominally in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

impl<D: DrawSource + ?Sized> DrawSource for &mut D {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// Adapter from any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngDraws<R>(pub R);

impl RngDraws<ThreadRng> {
    pub fn thread() -> Self {
        Self(rand::rng())
    }
}

impl RngDraws<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> DrawSource for RngDraws<R> {
    fn next_unit(&mut self) -> f64 {
        self.0.random::<f64>()
    }
}

/// Replays a fixed cycle of samples. An empty cycle always yields `0.0`.
#[derive(Debug, Clone, Default)]
pub struct FixedDraws {
    values: Vec<f64>,
    pos: usize,
}

impl FixedDraws {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            pos: 0,
        }
    }

    /// How many samples have been taken so far.
    pub fn taken(&self) -> usize {
        self.pos
    }
}

impl DrawSource for FixedDraws {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let v = self.values[self.pos % self.values.len()];
        self.pos += 1;
        v
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// Deterministic palette walk over the versions of the only package.
    SinglePackage,
    /// Palette color per package, randomly jittered per version.
    MultiPackage,
}

impl ColorMode {
    pub fn for_dataset(dataset: &HistoricalDataset) -> Self {
        if dataset.len() > 1 {
            ColorMode::MultiPackage
        } else {
            ColorMode::SinglePackage
        }
    }
}

/// Picks colors for the series of one render call.
pub struct ColorAssigner<'a, D> {
    dataset: &'a HistoricalDataset,
    palette: &'a Palette,
    draws: D,
    mode: ColorMode,
    assigned: usize,
}

impl<'a, D: DrawSource> ColorAssigner<'a, D> {
    pub fn new(dataset: &'a HistoricalDataset, palette: &'a Palette, draws: D) -> Self {
        let mode = ColorMode::for_dataset(dataset);
        debug!(
            "color mode {:?} for {} package(s), palette of {}",
            mode,
            dataset.len(),
            palette.len()
        );
        Self {
            dataset,
            palette,
            draws,
            mode,
            assigned: 0,
        }
    }

    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    /// Number of colors handed out so far.
    pub fn assigned(&self) -> usize {
        self.assigned
    }

    /// Color for one series. In multi-package mode every call draws fresh
    /// randomness, so callers keep the returned value instead of asking again.
    ///
    /// Names missing from the dataset fall back to index 0.
    pub fn color_for(&mut self, package: &str, version: &str) -> Color {
        self.assigned += 1;
        match self.mode {
            ColorMode::SinglePackage => {
                let i = self
                    .dataset
                    .get(package)
                    .and_then(|versions| versions.get_index_of(version))
                    .unwrap_or(0);
                self.palette.pick(i)
            }
            ColorMode::MultiPackage => {
                let i = self.dataset.get_index_of(package).unwrap_or(0);
                jitter(self.palette.pick(i), &mut self.draws)
            }
        }
    }
}

/// Randomly saturate or desaturate, then lighten or darken, by one of [`INCREMENTS`].
///
/// Each of the two draws is scaled to `[0, 5)`; its floor picks the step and the
/// lower half picks the increasing direction.
pub fn jitter<D: DrawSource + ?Sized>(base: Color, draws: &mut D) -> Color {
    let r1 = scaled_draw(draws);
    let r2 = scaled_draw(draws);

    let color = if r1 < HALF {
        base.saturate(increment(r1))
    } else {
        base.desaturate(increment(r1))
    };
    if r2 < HALF {
        color.lighten(increment(r2))
    } else {
        color.darken(increment(r2))
    }
}

const HALF: f64 = INCREMENTS.len() as f64 / 2.0;

fn scaled_draw<D: DrawSource + ?Sized>(draws: &mut D) -> f64 {
    draws.next_unit() * INCREMENTS.len() as f64
}

/// Step for a scaled draw; out-of-range draws wrap (negative and NaN map to 0).
fn increment(r: f64) -> f64 {
    INCREMENTS[(r.floor() as usize) % INCREMENTS.len()]
}
