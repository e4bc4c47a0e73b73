use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use rayon::prelude::*;
use tracing::{debug, info, warn};

use fractalview_core::{EscapeTime, RenderConfig, ViewWindow};

use crate::band::{build_bands, Band, BAND_HEIGHT};
use crate::buffer::PixelBuffer;
use crate::error::RenderError;
use crate::iteration_buffer::IterationBuffer;
use crate::palette::ColorMapper;

// ---------------------------------------------------------------------------
// Cancellation
// ---------------------------------------------------------------------------

/// Cooperative cancellation and progress for in-flight renders.
///
/// Each render records the generation it started under; calling
/// [`cancel`](Self::cancel) advances the generation, and bands that have not
/// started yet are skipped. Share it between threads behind an `Arc`.
#[derive(Debug)]
pub struct RenderCancel {
    generation: AtomicU64,
    progress_done: AtomicUsize,
    progress_total: AtomicUsize,
}

impl RenderCancel {
    pub fn new() -> Self {
        Self {
            generation: AtomicU64::new(0),
            progress_done: AtomicUsize::new(0),
            progress_total: AtomicUsize::new(0),
        }
    }

    /// Cancel every render started before this call.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Read the current generation.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    fn reset_progress(&self, total: usize) {
        self.progress_total.store(total, Ordering::Relaxed);
        self.progress_done.store(0, Ordering::Relaxed);
    }

    fn inc_progress(&self) {
        self.progress_done.fetch_add(1, Ordering::Relaxed);
    }

    /// Completed bands out of the total, for the most recent render.
    pub fn progress(&self) -> (usize, usize) {
        (
            self.progress_done.load(Ordering::Relaxed),
            self.progress_total.load(Ordering::Relaxed),
        )
    }
}

impl Default for RenderCancel {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Result
// ---------------------------------------------------------------------------

/// Raw iteration data for a complete frame, plus timing.
#[derive(Debug, Clone)]
pub struct RenderResult {
    pub iterations: IterationBuffer,
    pub elapsed: Duration,
    pub bands: usize,
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Render `config` to a full RGBA image.
///
/// Blocks until every pixel is written. Invalid configs are rejected before
/// any work starts.
pub fn render(config: RenderConfig) -> crate::Result<PixelBuffer> {
    render_with_cancel(config, &RenderCancel::new())
}

/// [`render`] with a cancellation handle. A cancelled render returns
/// [`RenderError::Cancelled`], never a partial image.
pub fn render_with_cancel(
    config: RenderConfig,
    cancel: &RenderCancel,
) -> crate::Result<PixelBuffer> {
    let result = render_iterations(config, cancel)?;
    Ok(colorize(&result.iterations, &config))
}

/// Color previously computed iterations with `config`'s color scheme.
///
/// Gives the same image as [`render`] for the same config, without
/// iterating again. Only the color fields of `config` are read.
pub fn colorize(iterations: &IterationBuffer, config: &RenderConfig) -> PixelBuffer {
    ColorMapper::new(config.colors, iterations.max_iterations).colorize(iterations)
}

/// Compute escape-time counts for every pixel of `config`.
///
/// The grid is split into [`BAND_HEIGHT`]-row bands that run in parallel on
/// the rayon pool; each band owns its rows of the output, and `cancel` is
/// checked before each band starts.
pub fn render_iterations(
    config: RenderConfig,
    cancel: &RenderCancel,
) -> crate::Result<RenderResult> {
    let view = config.view().map_err(|e| {
        warn!(error = %e, "Rejected render config");
        RenderError::from(e)
    })?;

    let start = Instant::now();
    let gen = cancel.generation();
    let escape = config.escape_time();
    let bands = build_bands(view.size);
    cancel.reset_progress(bands.len());
    debug!(
        size = view.size,
        kind = config.kind.label(),
        max_iterations = config.max_iterations,
        bands = bands.len(),
        "Starting render"
    );

    let mut iterations = IterationBuffer::new(view.size, config.max_iterations);
    let band_len = BAND_HEIGHT as usize * view.size as usize;
    iterations
        .data
        .par_chunks_mut(band_len)
        .zip(bands.par_iter())
        .for_each(|(rows, band)| {
            if cancel.generation() != gen {
                return;
            }
            render_band(&escape, &view, band, rows);
            cancel.inc_progress();
        });

    let cancelled = cancel.generation() != gen;
    let elapsed = start.elapsed();
    info!(
        elapsed_ms = elapsed.as_millis(),
        bands = bands.len(),
        cancelled,
        "Render complete"
    );
    if cancelled {
        return Err(RenderError::Cancelled);
    }

    Ok(RenderResult {
        iterations,
        elapsed,
        bands: bands.len(),
    })
}

/// Fill one band's rows of the count buffer.
fn render_band(escape: &EscapeTime, view: &ViewWindow, band: &Band, out: &mut [u32]) {
    debug_assert_eq!(out.len(), band.pixel_count());
    for (row, py) in out.chunks_exact_mut(band.width as usize).zip(band.rows()) {
        for (px, slot) in (0..band.width).zip(row.iter_mut()) {
            *slot = escape.evaluate(view.pixel_to_complex(px, py));
        }
    }
}
