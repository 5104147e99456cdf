//! Palette editing session.
//!
//! A [`Session`] owns everything the editor works on: the palette with its
//! lock mask, the harmony mode, the brightness slider, and the saved list. The
//! saved-palettes backend and the random source are injected, so the same
//! handlers drive the interactive shell, one-shot CLI commands and tests.
//!
//! Every handler that fails leaves the palette untouched.

use anyhow::Result;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::error::{PaletteError, PaletteResult};
use crate::export::{render_stylesheet, StyleFormat};
use crate::models::{HarmonyMode, Palette, RgbColor};
use crate::services::harmony::{self, DEFAULT_PALETTE_SIZE, MAX_BRIGHTNESS_DELTA};
use crate::services::{codec, AccessibilityReport, RandomSource, SavedPaletteStore};

/// Editor state plus its injected store and random source.
#[derive(Debug)]
pub struct Session<S: SavedPaletteStore, R: RandomSource> {
    palette: Palette,
    mode: HarmonyMode,
    /// Current slider position in `[-100, 100]`.
    brightness: i16,
    /// Colors the slider is applied to. Refreshed by every other mutation.
    baseline: Vec<RgbColor>,
    saved: Vec<Vec<RgbColor>>,
    store: S,
    rng: R,
}

impl<S: SavedPaletteStore, R: RandomSource> Session<S, R> {
    /// Starts a session with five random colors, all unlocked.
    pub fn new(store: S, rng: R) -> Self {
        Self::with_size(store, rng, DEFAULT_PALETTE_SIZE)
    }

    /// Starts a session with `size` random colors, all unlocked.
    pub fn with_size(store: S, mut rng: R, size: usize) -> Self {
        let colors = harmony::random_colors(size, &mut rng);
        Self::with_colors(store, rng, colors)
    }

    /// Starts a session on the given colors, all unlocked.
    pub fn with_colors(store: S, rng: R, colors: Vec<RgbColor>) -> Self {
        let saved = store.load();
        debug!(colors = colors.len(), saved = saved.len(), "Session started");
        Self {
            baseline: colors.clone(),
            palette: Palette::from_colors(colors),
            mode: HarmonyMode::default(),
            brightness: 0,
            saved,
            store,
            rng,
        }
    }

    /// The palette with its lock mask.
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Current colors.
    pub fn colors(&self) -> &[RgbColor] {
        self.palette.colors()
    }

    /// Selected harmony mode.
    pub const fn mode(&self) -> HarmonyMode {
        self.mode
    }

    /// Current brightness slider value.
    pub const fn brightness(&self) -> i16 {
        self.brightness
    }

    /// Saved palettes, oldest first.
    pub fn saved(&self) -> &[Vec<RgbColor>] {
        &self.saved
    }

    /// The saved-palettes backend.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Records the current colors as the new slider baseline.
    fn rebase(&mut self) {
        self.baseline = self.palette.colors().to_vec();
        self.brightness = 0;
    }

    /// Selects the harmony used by the next [`Session::regenerate`].
    pub fn set_mode(&mut self, mode: HarmonyMode) {
        debug!(%mode, "Harmony mode selected");
        self.mode = mode;
    }

    /// Regenerates every unlocked color with the current mode.
    pub fn regenerate(&mut self) -> &[RgbColor] {
        let colors = harmony::generate(self.mode, &self.palette, &mut self.rng);
        self.palette.refill(colors);
        self.rebase();
        info!(mode = %self.mode, locked = self.palette.locked_count(), "Palette regenerated");
        self.palette.colors()
    }

    /// Replaces the color at `index`.
    pub fn set_color(&mut self, index: usize, color: RgbColor) -> PaletteResult<()> {
        self.palette.set_color(index, color)?;
        self.rebase();
        Ok(())
    }

    /// Replaces the color at `index` from hex text such as `#1A2B3C`.
    pub fn set_color_hex(&mut self, index: usize, hex: &str) -> PaletteResult<()> {
        let color = RgbColor::from_hex(hex)?;
        self.set_color(index, color)
    }

    /// Appends a random unlocked color and returns it.
    pub fn add_color(&mut self) -> RgbColor {
        let color = self.rng.color();
        self.palette.push(color);
        self.rebase();
        color
    }

    /// Removes the color at `index` together with its lock.
    pub fn delete_color(&mut self, index: usize) -> PaletteResult<RgbColor> {
        let removed = self.palette.remove(index)?;
        self.rebase();
        Ok(removed)
    }

    /// Flips the lock at `index` and returns the new state.
    pub fn toggle_lock(&mut self, index: usize) -> PaletteResult<bool> {
        self.palette.toggle_lock(index)
    }

    /// Moves the brightness slider to `value` and returns the clamped value.
    ///
    /// The offset is applied to the colors as they were before the slider
    /// started moving, so sliding back to 0 restores them exactly. Locked
    /// colors are shifted too.
    pub fn set_brightness(&mut self, value: i16) -> i16 {
        let value = value.clamp(-MAX_BRIGHTNESS_DELTA, MAX_BRIGHTNESS_DELTA);
        self.brightness = value;
        self.palette
            .refill(harmony::adjust_brightness(&self.baseline, value));
        debug!(brightness = value, "Brightness adjusted");
        value
    }

    /// Appends a snapshot of the colors to the saved list and persists it.
    ///
    /// Returns the 0-based position of the new entry. If the store cannot be
    /// written the entry is dropped again.
    pub fn save(&mut self) -> Result<usize> {
        self.saved.push(self.palette.colors().to_vec());
        if let Err(e) = self.store.persist(&self.saved) {
            self.saved.pop();
            return Err(e);
        }
        info!(count = self.saved.len(), "Palette saved");
        Ok(self.saved.len() - 1)
    }

    /// Replaces the palette with saved entry `index`. All locks are cleared.
    pub fn load_saved(&mut self, index: usize) -> PaletteResult<()> {
        let colors = self
            .saved
            .get(index)
            .cloned()
            .ok_or(PaletteError::IndexOutOfRange {
                index,
                len: self.saved.len(),
            })?;
        self.replace(colors);
        Ok(())
    }

    /// Removes saved entry `index` and persists the shorter list.
    pub fn delete_saved(&mut self, index: usize) -> Result<Vec<RgbColor>> {
        if index >= self.saved.len() {
            return Err(PaletteError::IndexOutOfRange {
                index,
                len: self.saved.len(),
            }
            .into());
        }

        let removed = self.saved.remove(index);
        if let Err(e) = self.store.persist(&self.saved) {
            self.saved.insert(index, removed);
            return Err(e);
        }
        info!(index, remaining = self.saved.len(), "Saved palette deleted");
        Ok(removed)
    }

    /// Link that carries the current colors. `base_url` must be an http(s) URL.
    pub fn share_url(&self, base_url: &str) -> PaletteResult<String> {
        codec::share_url(base_url, self.palette.colors())
    }

    /// Loads a palette from a share link.
    ///
    /// Returns `Ok(None)` when the link carries no palette, and otherwise the
    /// link with the share parameter stripped.
    pub fn apply_shared_url(&mut self, url: &str) -> PaletteResult<Option<String>> {
        let Some((token, stripped)) = codec::split_shared_link(url) else {
            return Ok(None);
        };
        self.apply_share_token(&token)?;
        Ok(Some(stripped))
    }

    /// Loads a palette from a bare share token. All locks are cleared.
    pub fn apply_share_token(&mut self, token: &str) -> PaletteResult<()> {
        let colors = codec::decode_share_token(token).inspect_err(|e| {
            warn!(error = %e, "Ignoring shared palette");
        })?;
        self.replace(colors);
        info!(count = self.palette.len(), "Shared palette loaded");
        Ok(())
    }

    /// Export document for the current colors.
    pub fn export_json(&self) -> String {
        codec::export_json(self.palette.colors())
    }

    /// Writes the export document to `path`.
    pub fn export_to_file(&self, path: &Path) -> Result<()> {
        codec::export_to_file(path, self.palette.colors())
    }

    /// Replaces the palette from an import document and returns the new length.
    pub fn import_json(&mut self, text: &str) -> PaletteResult<usize> {
        let colors = codec::import_json(text)?;
        self.replace(colors);
        Ok(self.palette.len())
    }

    /// Replaces the palette from an import file and returns the new length.
    pub fn import_from_file(&mut self, path: &Path) -> PaletteResult<usize> {
        let colors = codec::import_from_file(path)?;
        self.replace(colors);
        Ok(self.palette.len())
    }

    /// Contrast report for the current colors.
    pub fn accessibility_report(&self) -> AccessibilityReport {
        AccessibilityReport::build(self.palette.colors())
    }

    /// Style sheet for the current colors.
    pub fn stylesheet(&self, format: StyleFormat) -> String {
        render_stylesheet(self.palette.colors(), format)
    }

    fn replace(&mut self, colors: Vec<RgbColor>) {
        self.palette.replace(colors);
        self.rebase();
    }
}
