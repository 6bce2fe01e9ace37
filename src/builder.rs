use crate::pattern::Pattern;
use crate::tables::STOP;

/// Width (in modules) of the quiet zone on each side of the barcode.
pub const QUIET_ZONE: usize = 10;

/// Grows the module sequence of a barcode, `true` standing for a space
/// (white) module and `false` for a bar (black) module.
#[derive(Debug, Clone, Default)]
pub struct ModuleBuilder {
    modules: Vec<bool>,
}

impl ModuleBuilder {
    pub const fn new() -> Self {
        Self { modules: Vec::new() }
    }

    /// Reserves room for two quiet zones and `symbols` symbols, the last one
    /// being the stop pattern.
    pub fn with_capacity(symbols: usize) -> Self {
        let capacity = 2 * QUIET_ZONE + symbols * Pattern::of(0).modules() + 2;
        Self { modules: Vec::with_capacity(capacity) }
    }

    /// Number of modules appended so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn append_quiet_zone(&mut self, width: usize) {
        self.modules.extend(core::iter::repeat(true).take(width));
    }

    /// Appends the bar/space runs of a symbol. Panics on values above 106.
    pub fn append_symbol(&mut self, value: u8) {
        self.modules.extend(Pattern::of(value));
    }

    pub fn finish(self) -> Vec<bool> {
        self.modules
    }
}

/// A fully encoded GS1-128 barcode: its module sequence, quiet zones
/// included, and the symbol values it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Barcode {
    modules: Vec<bool>,
    symbols: Vec<u8>,
}

impl Barcode {
    pub(crate) fn new(modules: Vec<bool>, symbols: Vec<u8>) -> Self {
        debug_assert!(symbols.len() >= 2 && symbols[symbols.len() - 1] == STOP,
            "a barcode must end with a check symbol and the stop pattern");
        Self { modules, symbols }
    }

    /// Number of modules, both quiet zones included.
    #[inline]
    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    /// Returns whether the module at `index` is a space. Panics if `index`
    /// is not below [Barcode::module_count].
    #[inline]
    pub fn is_white_module(&self, index: usize) -> bool {
        self.modules[index]
    }

    /// Module flags from left to right, `true` for a space.
    pub fn modules(&self) -> impl Iterator<Item = bool> + '_ {
        self.modules.iter().copied()
    }

    /// Emitted symbol values, from the start symbol to the stop pattern.
    #[inline]
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    /// The modulo 103 check symbol, emitted right before the stop pattern.
    #[inline]
    pub fn check_symbol(&self) -> u8 {
        self.symbols[self.symbols.len() - 2]
    }
}
