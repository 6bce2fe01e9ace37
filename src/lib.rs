//! GS1-128 barcode encoder.
//!
//! Turns an `(AI)value` string such as `(01)09501101530003(10)12345` into
//! the module sequence of a Code 128 barcode: Start C, FNC1, the digit pairs
//! of every application identifier and value, FNC1 separators after
//! variable length fields, a modulo 103 check symbol and the stop pattern,
//! between two quiet zones.
//!
//! ```
//! let barcode = gs1_128::encode("(01)09501101530003(10)12345").unwrap();
//! assert_eq!(barcode.symbols()[..2], [gs1_128::START_C, gs1_128::FNC1]);
//!
//! let render = barcode.render(barcode.module_count() as u32 * 2, 40).unwrap();
//! let mut pixels = vec![false; (render.width() * render.height()) as usize];
//! render.fill_bits(&mut pixels);
//! ```

mod builder;
mod checksum;
mod error;
mod high_level;
mod pattern;
mod render;
mod segment;
mod tables;

pub use builder::{Barcode, ModuleBuilder, QUIET_ZONE};
pub use checksum::{Checksum, MODULUS};
pub use error::{Error, Result};
pub use high_level::{Gs1Encoder, GS1_VARIABLE_LENGTH_AIS};
pub use pattern::{Modules, Pattern};
pub use render::BarcodeRender;
pub use segment::{parse, Segment};
pub use tables::{
    symbol_pattern, CODE_B, CODE_B_DIGIT_OFFSET, CODE_C, FNC1, START_C, STOP,
    STOP_MODULES, SYMBOL_COUNT, SYMBOL_MODULES
};

/// Encodes `input` with the default [Gs1Encoder], where only AI 10 is
/// variable length.
pub fn encode(input: &str) -> Result<Barcode> {
    Gs1Encoder::new().encode_str(input)
}
