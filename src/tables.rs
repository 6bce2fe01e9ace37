//! Code 128 symbol value to bar/space width table.

/// Number of symbol values in the table (0 to 106 inclusive).
pub const SYMBOL_COUNT: usize = 107;

/// Shift from Code Set C to Code Set B (value 100 in subset C).
pub const CODE_B: u8 = 100;
/// Shift from Code Set B back to Code Set C (value 99 in subset B).
pub const CODE_C: u8 = 99;
/// Function code 1, used both as the GS1 flag and as a field separator.
pub const FNC1: u8 = 102;
/// Start in Code Set C.
pub const START_C: u8 = 105;
/// Stop pattern, the only 7-element (13 modules) entry.
pub const STOP: u8 = 106;

/// Modules covered by every symbol except [STOP].
pub const SYMBOL_MODULES: usize = 11;
/// Modules covered by [STOP].
pub const STOP_MODULES: usize = 13;

/// Value of `'0'` in Code Set B.
pub const CODE_B_DIGIT_OFFSET: u8 = 16;

// Widths alternate bar/space starting with a bar. Six-element patterns are
// stored with a trailing zero-width run.
const PATTERNS: [[u8; 7]; SYMBOL_COUNT] = [
    [2, 1, 2, 2, 2, 2, 0], [2, 2, 2, 1, 2, 2, 0], [2, 2, 2, 2, 2, 1, 0], [1, 2, 1, 2, 2, 3, 0], // 0
    [1, 2, 1, 3, 2, 2, 0], [1, 3, 1, 2, 2, 2, 0], [1, 2, 2, 2, 1, 3, 0], [1, 2, 2, 3, 1, 2, 0],
    [1, 3, 2, 2, 1, 2, 0], [2, 2, 1, 2, 1, 3, 0], [2, 2, 1, 3, 1, 2, 0], [2, 3, 1, 2, 1, 2, 0], // 8
    [1, 1, 2, 2, 3, 2, 0], [1, 2, 2, 1, 3, 2, 0], [1, 2, 2, 2, 3, 1, 0], [1, 1, 3, 2, 2, 2, 0],
    [1, 2, 3, 1, 2, 2, 0], [1, 2, 3, 2, 2, 1, 0], [2, 2, 3, 2, 1, 1, 0], [2, 2, 1, 1, 3, 2, 0], // 16
    [2, 2, 1, 2, 3, 1, 0], [2, 1, 3, 2, 1, 2, 0], [2, 2, 3, 1, 1, 2, 0], [3, 1, 2, 1, 3, 1, 0],
    [3, 1, 1, 2, 2, 2, 0], [3, 2, 1, 1, 2, 2, 0], [3, 2, 1, 2, 2, 1, 0], [3, 1, 2, 2, 1, 2, 0], // 24
    [3, 2, 2, 1, 1, 2, 0], [3, 2, 2, 2, 1, 1, 0], [2, 1, 2, 1, 2, 3, 0], [2, 1, 2, 3, 2, 1, 0],
    [2, 3, 2, 1, 2, 1, 0], [1, 1, 1, 3, 2, 3, 0], [1, 3, 1, 1, 2, 3, 0], [1, 3, 1, 3, 2, 1, 0], // 32
    [1, 1, 2, 3, 1, 3, 0], [1, 3, 2, 1, 1, 3, 0], [1, 3, 2, 3, 1, 1, 0], [2, 1, 1, 3, 1, 3, 0],
    [2, 3, 1, 1, 1, 3, 0], [2, 3, 1, 3, 1, 1, 0], [1, 1, 2, 1, 3, 3, 0], [1, 1, 2, 3, 3, 1, 0], // 40
    [1, 3, 2, 1, 3, 1, 0], [1, 1, 3, 1, 2, 3, 0], [1, 1, 3, 3, 2, 1, 0], [1, 3, 3, 1, 2, 1, 0],
    [3, 1, 3, 1, 2, 1, 0], [2, 1, 1, 3, 3, 1, 0], [2, 3, 1, 1, 3, 1, 0], [2, 1, 3, 1, 1, 3, 0], // 48
    [2, 1, 3, 3, 1, 1, 0], [2, 1, 3, 1, 3, 1, 0], [3, 1, 1, 1, 2, 3, 0], [3, 1, 1, 3, 2, 1, 0],
    [3, 3, 1, 1, 2, 1, 0], [3, 1, 2, 1, 1, 3, 0], [3, 1, 2, 3, 1, 1, 0], [3, 3, 2, 1, 1, 1, 0], // 56
    [3, 1, 4, 1, 1, 1, 0], [2, 2, 1, 4, 1, 1, 0], [4, 3, 1, 1, 1, 1, 0], [1, 1, 1, 2, 2, 4, 0],
    [1, 1, 1, 4, 2, 2, 0], [1, 2, 1, 1, 2, 4, 0], [1, 2, 1, 4, 2, 1, 0], [1, 4, 1, 1, 2, 2, 0], // 64
    [1, 4, 1, 2, 2, 1, 0], [1, 1, 2, 2, 1, 4, 0], [1, 1, 2, 4, 1, 2, 0], [1, 2, 2, 1, 1, 4, 0],
    [1, 2, 2, 4, 1, 1, 0], [1, 4, 2, 1, 1, 2, 0], [1, 4, 2, 2, 1, 1, 0], [2, 4, 1, 2, 1, 1, 0], // 72
    [2, 2, 1, 1, 1, 4, 0], [4, 1, 3, 1, 1, 1, 0], [2, 4, 1, 1, 1, 2, 0], [1, 3, 4, 1, 1, 1, 0],
    [1, 1, 1, 2, 4, 2, 0], [1, 2, 1, 1, 4, 2, 0], [1, 2, 1, 2, 4, 1, 0], [1, 1, 4, 2, 1, 2, 0], // 80
    [1, 2, 4, 1, 1, 2, 0], [1, 2, 4, 2, 1, 1, 0], [4, 1, 1, 2, 1, 2, 0], [4, 2, 1, 1, 1, 2, 0],
    [4, 2, 1, 2, 1, 1, 0], [2, 1, 2, 1, 4, 1, 0], [2, 1, 4, 1, 2, 1, 0], [4, 1, 2, 1, 2, 1, 0], // 88
    [1, 1, 1, 1, 4, 3, 0], [1, 1, 1, 3, 4, 1, 0], [1, 3, 1, 1, 4, 1, 0], [1, 1, 4, 1, 1, 3, 0],
    [1, 1, 4, 3, 1, 1, 0], [4, 1, 1, 1, 1, 3, 0], [4, 1, 1, 3, 1, 1, 0], [1, 1, 3, 1, 4, 1, 0], // 96
    [1, 1, 4, 1, 3, 1, 0], [3, 1, 1, 1, 4, 1, 0], [4, 1, 1, 1, 3, 1, 0], [2, 1, 1, 4, 1, 2, 0],
    [2, 1, 1, 2, 1, 4, 0], [2, 1, 1, 2, 3, 2, 0], [2, 3, 3, 1, 1, 1, 2],                         // 104
];

const fn check_table() {
    let mut value = 0;
    while value < SYMBOL_COUNT {
        let widths = &PATTERNS[value];
        let mut sum = 0;
        let mut run = 0;
        while run < widths.len() {
            // the first six runs must all be present
            assert!(run == 6 || widths[run] > 0, "zero-width run inside a symbol pattern");
            sum += widths[run] as usize;
            run += 1;
        }

        if value == STOP as usize {
            assert!(sum == STOP_MODULES, "stop pattern must cover 13 modules");
        } else {
            assert!(widths[6] == 0, "only the stop pattern has a seventh run");
            assert!(sum == SYMBOL_MODULES, "symbol pattern must cover 11 modules");
        }
        value += 1;
    }
}

const _: () = check_table();

/// Returns the bar/space widths of `value`, starting with a bar.
///
/// Panics if `value` is not a Code 128 symbol value (0-106): the encoder
/// never produces one, so reaching this is a bug rather than bad input.
#[inline]
pub fn symbol_pattern(value: u8) -> &'static [u8] {
    assert!((value as usize) < SYMBOL_COUNT, "symbol value {value} is out of range (0-106)");
    let widths = &PATTERNS[value as usize];
    if widths[6] == 0 { &widths[..6] } else { &widths[..] }
}
