//! Segments to Code 128 symbol encoding.

use tracing::{debug, trace};

use crate::builder::{Barcode, ModuleBuilder, QUIET_ZONE};
use crate::checksum::Checksum;
use crate::error::{Error, Result};
use crate::segment::{parse, Segment};
use crate::tables::{CODE_B, CODE_B_DIGIT_OFFSET, CODE_C, FNC1, START_C, STOP};

/// Two digit application identifiers with a variable length value in the
/// GS1 General Specifications.
pub const GS1_VARIABLE_LENGTH_AIS: [u8; 15] = [10, 21, 22, 30, 37, 90, 91, 92, 93, 94, 95, 96, 97, 98, 99];

/// Where the encoder is within the value of the current segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    AwaitingSegment,
    EmittingFixedPair,
    EmittingOddTail,
}

impl State {
    const fn after(remaining: usize) -> Self {
        match remaining {
            0 => State::AwaitingSegment,
            1 => State::EmittingOddTail,
            _ => State::EmittingFixedPair,
        }
    }
}

/// Emits symbols into the module sequence and the checksum in one step, so
/// the two can never disagree on the symbol order.
struct Emitter {
    modules: ModuleBuilder,
    checksum: Checksum,
    symbols: Vec<u8>,
}

impl Emitter {
    fn new(capacity: usize) -> Self {
        let mut modules = ModuleBuilder::with_capacity(capacity);
        modules.append_quiet_zone(QUIET_ZONE);
        Self { modules, checksum: Checksum::new(), symbols: Vec::with_capacity(capacity) }
    }

    fn emit(&mut self, value: u8) {
        let weight = self.checksum.push(value);
        trace!(value, weight, "emit symbol");
        self.modules.append_symbol(value);
        self.symbols.push(value);
    }

    fn finish(self) -> Barcode {
        let Self { mut modules, checksum, mut symbols } = self;
        let check = checksum.finish();
        for value in [check, STOP] {
            modules.append_symbol(value);
            symbols.push(value);
        }
        modules.append_quiet_zone(QUIET_ZONE);

        let modules = modules.finish();
        debug!(symbols = symbols.len(), modules = modules.len(), check, "encoded barcode");
        Barcode::new(modules, symbols)
    }
}

/// GS1-128 encoder. Holds the set of application identifiers whose value
/// is variable length: such a field is closed with FNC1 when another
/// segment follows it, and is never padded to an even digit count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gs1Encoder {
    // bit n set = AI n is variable length
    variable_length: u128,
}

impl Default for Gs1Encoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Gs1Encoder {
    /// Encoder where only AI 10 (batch or lot number) is variable length.
    pub const fn new() -> Self {
        Self { variable_length: 1 << 10 }
    }

    /// Encoder using every two digit variable length AI of
    /// [GS1_VARIABLE_LENGTH_AIS].
    pub const fn gs1() -> Self {
        let mut encoder = Self { variable_length: 0 };
        let mut i = 0;
        while i < GS1_VARIABLE_LENGTH_AIS.len() {
            encoder = encoder.variable_length(GS1_VARIABLE_LENGTH_AIS[i]);
            i += 1;
        }
        encoder
    }

    /// Marks `ai` as variable length. Panics if `ai` is above 99.
    pub const fn variable_length(mut self, ai: u8) -> Self {
        assert!(ai < 100, "application identifier must be between 0 and 99");
        self.variable_length |= 1u128 << ai;
        self
    }

    /// Marks `ai` as fixed length. Panics if `ai` is above 99.
    pub const fn fixed_length(mut self, ai: u8) -> Self {
        assert!(ai < 100, "application identifier must be between 0 and 99");
        self.variable_length &= !(1u128 << ai);
        self
    }

    #[inline]
    pub const fn is_variable_length(&self, ai: u8) -> bool {
        ai < 100 && self.variable_length & (1u128 << ai) != 0
    }

    /// Parses `input` (see [parse]) and encodes the resulting segments.
    pub fn encode_str(&self, input: &str) -> Result<Barcode> {
        self.encode(&parse(input)?)
    }

    /// Encodes `segments` in order.
    ///
    /// The symbol stream is Start C, FNC1, then per segment its identifier
    /// and value digit pairs, a check symbol and the stop pattern. A lone
    /// trailing digit of a variable length value goes through Code Set B.
    pub fn encode(&self, segments: &[Segment]) -> Result<Barcode> {
        if segments.is_empty() {
            return Err(Error::format("nothing to encode"));
        }

        let capacity = 4 + segments.iter().map(|s| 2 + s.value().len()).sum::<usize>();
        let mut out = Emitter::new(capacity);
        out.emit(START_C);
        out.emit(FNC1);

        let mut open_field = false;
        for segment in segments {
            if open_field {
                out.emit(FNC1);
            }
            out.emit(segment.ai());

            let variable = self.is_variable_length(segment.ai());
            open_field = variable;

            let mut digits = digits(segment)?;
            if !variable && digits.len() % 2 == 1 {
                digits.insert(0, 0);
            }
            emit_digits(&mut out, &digits);
        }

        Ok(out.finish())
    }
}

fn digits(segment: &Segment) -> Result<Vec<u8>> {
    segment.value()
        .chars()
        .map(|c| c.to_digit(10).map(|d| d as u8).ok_or_else(|| Error::encode(
            format!("({:02}) value {:?} contains non-digit {c:?}", segment.ai(), segment.value())
        )))
        .collect()
}

fn emit_digits(out: &mut Emitter, mut digits: &[u8]) {
    loop {
        match State::after(digits.len()) {
            State::AwaitingSegment => break,
            State::EmittingFixedPair => {
                out.emit(digits[0] * 10 + digits[1]);
                digits = &digits[2..];
            },
            State::EmittingOddTail => {
                out.emit(CODE_B);
                out.emit(CODE_B_DIGIT_OFFSET + digits[0]);
                out.emit(CODE_C);
                digits = &digits[1..];
            },
        }
    }
}
