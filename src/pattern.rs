use core::iter;
use crate::tables::symbol_pattern;

/// Bar/space widths of one symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern(&'static [u8]);

impl Pattern {
    /// Looks up the pattern of a symbol value. Panics on values above 106.
    #[inline]
    pub fn of(value: u8) -> Self {
        Self(symbol_pattern(value))
    }

    #[inline]
    pub const fn widths(&self) -> &'static [u8] {
        self.0
    }

    /// Number of modules covered by the pattern.
    pub fn modules(&self) -> usize {
        self.0.iter().map(|&w| w as usize).sum()
    }
}

impl iter::IntoIterator for Pattern {
    type Item = bool;
    type IntoIter = Modules;

    fn into_iter(self) -> Self::IntoIter {
        Modules { widths: self.0, run: 0, left: self.0.first().copied().unwrap_or(0), remaining: self.modules() }
    }
}

/// Expands a [Pattern] into module flags, `true` for a space (white) module.
pub struct Modules {
    widths: &'static [u8],
    run: usize,
    left: u8,
    remaining: usize,
}

impl iter::Iterator for Modules {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        while self.left == 0 {
            self.run += 1;
            self.left = *self.widths.get(self.run)?;
        }

        self.left -= 1;
        self.remaining -= 1;
        // even runs are bars
        Some(self.run % 2 == 1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl iter::ExactSizeIterator for Modules {}
impl iter::FusedIterator for Modules {}
