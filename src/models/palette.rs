//! Ordered color palette with a parallel lock mask.
//!
//! Every mutation goes through [`Palette`] methods so the lock mask always has
//! exactly one entry per color.

use crate::error::{PaletteError, PaletteResult};

use super::RgbColor;

/// An ordered list of colors plus per-position lock flags.
///
/// Locked positions are protected from regeneration. Edits, deletions and
/// brightness shifts still apply to them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<RgbColor>,
    locked: Vec<bool>,
}

impl Palette {
    /// Creates an empty palette.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            colors: Vec::new(),
            locked: Vec::new(),
        }
    }

    /// Creates a palette with every position unlocked.
    #[must_use]
    pub fn from_colors(colors: Vec<RgbColor>) -> Self {
        let locked = vec![false; colors.len()];
        Self { colors, locked }
    }

    /// Colors in display order.
    #[must_use]
    pub fn colors(&self) -> &[RgbColor] {
        &self.colors
    }

    /// Lock flags, parallel to [`Palette::colors`].
    #[must_use]
    pub fn locks(&self) -> &[bool] {
        &self.locked
    }

    /// Number of colors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true if the palette has no colors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color at `index`, if present.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<RgbColor> {
        self.colors.get(index).copied()
    }

    /// Whether the color at `index` is locked. Out-of-range positions are unlocked.
    #[must_use]
    pub fn is_locked(&self, index: usize) -> bool {
        self.locked.get(index).copied().unwrap_or(false)
    }

    /// Number of locked positions.
    #[must_use]
    pub fn locked_count(&self) -> usize {
        self.locked.iter().filter(|&&l| l).count()
    }

    /// Iterates over `(color, locked)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (RgbColor, bool)> + '_ {
        self.colors.iter().copied().zip(self.locked.iter().copied())
    }

    fn check_index(&self, index: usize) -> PaletteResult<()> {
        if index < self.colors.len() {
            Ok(())
        } else {
            Err(PaletteError::IndexOutOfRange {
                index,
                len: self.colors.len(),
            })
        }
    }

    /// Replaces the color at `index`. The lock flag is left as is.
    pub fn set_color(&mut self, index: usize, color: RgbColor) -> PaletteResult<()> {
        self.check_index(index)?;
        self.colors[index] = color;
        Ok(())
    }

    /// Appends an unlocked color.
    pub fn push(&mut self, color: RgbColor) {
        self.colors.push(color);
        self.locked.push(false);
    }

    /// Removes the color and its lock flag at `index`.
    pub fn remove(&mut self, index: usize) -> PaletteResult<RgbColor> {
        self.check_index(index)?;
        self.locked.remove(index);
        Ok(self.colors.remove(index))
    }

    /// Flips the lock at `index` and returns the new state.
    pub fn toggle_lock(&mut self, index: usize) -> PaletteResult<bool> {
        self.check_index(index)?;
        self.locked[index] = !self.locked[index];
        Ok(self.locked[index])
    }

    /// Sets the lock at `index`.
    pub fn set_locked(&mut self, index: usize, locked: bool) -> PaletteResult<()> {
        self.check_index(index)?;
        self.locked[index] = locked;
        Ok(())
    }

    /// Replaces every color and clears all locks.
    ///
    /// Used for wholesale loads (import, shared link, saved palette).
    pub fn replace(&mut self, colors: Vec<RgbColor>) {
        self.locked = vec![false; colors.len()];
        self.colors = colors;
    }

    /// Replaces every color while keeping the existing lock flags.
    ///
    /// If the new list has a different length the mask is truncated or padded
    /// with unlocked entries.
    pub fn refill(&mut self, colors: Vec<RgbColor>) {
        self.colors = colors;
        self.locked.resize(self.colors.len(), false);
    }
}

impl FromIterator<RgbColor> for Palette {
    fn from_iter<I: IntoIterator<Item = RgbColor>>(iter: I) -> Self {
        Self::from_colors(iter.into_iter().collect())
    }
}
