use gs1_128::*;

/// Digit count of the fixed length AIs used below.
fn fixed_length(ai: u8) -> usize {
    match ai {
        0 => 18,
        1 | 2 => 14,
        11 | 13 | 15 | 17 => 6,
        20 => 2,
        _ => panic!("no fixed length known for AI {ai}"),
    }
}

/// Reads back `(AI)value` groups from the emitted symbols.
fn decode(symbols: &[u8], encoder: &Gs1Encoder) -> String {
    assert_eq!(&symbols[..2], &[START_C, FNC1]);
    assert_eq!(symbols[symbols.len() - 1], STOP);
    let mut data = &symbols[2..symbols.len() - 2];
    let mut out = String::new();

    while let Some((&ai, rest)) = data.split_first() {
        out.push_str(&format!("({ai:02})"));
        data = rest;

        if encoder.is_variable_length(ai) {
            while let Some((&value, rest)) = data.split_first() {
                data = rest;
                match value {
                    FNC1 => break,
                    CODE_B => {
                        out.push(char::from(b'0' + data[0] - CODE_B_DIGIT_OFFSET));
                        assert_eq!(data[1], CODE_C);
                        data = &data[2..];
                    },
                    pair => out.push_str(&format!("{pair:02}")),
                }
            }
        } else {
            let pairs = fixed_length(ai) / 2;
            for &pair in &data[..pairs] {
                out.push_str(&format!("{pair:02}"));
            }
            data = &data[pairs..];
        }
    }

    out
}

fn checksum(symbols: &[u8]) -> u8 {
    let mut checksum = Checksum::new();
    for &value in &symbols[..symbols.len() - 2] {
        checksum.push(value);
    }
    checksum.finish()
}

#[test]
fn module_count_adds_up() {
    for input in ["(01)09501101530003", "(10)123", "(01)09501101530003(17)250101(10)1"] {
        let barcode = encode(input).unwrap();
        let symbols = barcode.symbols().len();
        assert_eq!(
            barcode.module_count(),
            2 * QUIET_ZONE + (symbols - 1) * SYMBOL_MODULES + STOP_MODULES,
            "{input}"
        );
    }
}

#[test]
fn quiet_zones_are_white() {
    let barcode = encode("(01)09501101530003").unwrap();
    let count = barcode.module_count();
    for i in (0..QUIET_ZONE).chain(count - QUIET_ZONE..count) {
        assert!(barcode.is_white_module(i), "module {i}");
    }
    assert!(!barcode.is_white_module(QUIET_ZONE));
    assert!(!barcode.is_white_module(count - QUIET_ZONE - 1));
}

#[test]
fn modules_match_symbol_patterns() {
    let barcode = encode("(01)09501101530003(10)12345").unwrap();
    let mut expected = vec![true; QUIET_ZONE];
    for &value in barcode.symbols() {
        expected.extend(Pattern::of(value));
    }
    expected.extend([true; QUIET_ZONE]);
    assert_eq!(barcode.modules().collect::<Vec<_>>(), expected);
}

#[test]
fn encoding_is_deterministic() {
    let input = "(01)09501101530003(10)12345(21)42";
    assert_eq!(encode(input).unwrap(), encode(input).unwrap());
}

#[test]
fn check_symbol_matches_weights() {
    for input in ["(01)09501101530003", "(10)1(10)22(10)333", "(01)09501101530003(17)250101(10)7"] {
        let barcode = encode(input).unwrap();
        assert_eq!(barcode.check_symbol(), checksum(barcode.symbols()), "{input}");
        assert!((barcode.check_symbol() as u32) < MODULUS);
    }
}

#[test]
fn round_trip_default() {
    let encoder = Gs1Encoder::new();
    for input in [
        "(01)09501101530003",
        "(01)09501101530003(17)250101(10)12345",
        "(10)123(01)09501101530003",
        "(10)1(10)22(10)333",
        "(00)123456789012345675(20)01",
    ] {
        let barcode = encoder.encode_str(input).unwrap();
        assert_eq!(decode(barcode.symbols(), &encoder), input);
    }
}

#[test]
fn round_trip_gs1_preset() {
    let encoder = Gs1Encoder::gs1();
    let input = "(01)09501101530003(21)12345(10)9(30)42";
    let barcode = encoder.encode_str(input).unwrap();
    assert_eq!(decode(barcode.symbols(), &encoder), input);
}

#[test]
fn fixed_length_padding() {
    let barcode = encode("(01)1234567890123").unwrap();
    // start, fnc1, ai, 7 pairs, check, stop
    let pairs = &barcode.symbols()[3..barcode.symbols().len() - 2];
    assert_eq!(pairs.len(), 7);
    assert_eq!(pairs[0], 1);
}

#[test]
fn variable_length_closing() {
    let barcode = encode("(10)12(21)34").unwrap();
    assert_eq!(&barcode.symbols()[2..7], &[10, 12, FNC1, 21, 34]);

    let barcode = encode("(10)12").unwrap();
    let symbols = barcode.symbols();
    assert_eq!(symbols.iter().filter(|&&s| s == FNC1).count(), 1);
}

#[test]
fn variable_odd_tail() {
    let barcode = encode("(10)123").unwrap();
    assert_eq!(&barcode.symbols()[2..7], &[10, 12, CODE_B, 19, CODE_C]);
}

#[test]
fn errors() {
    assert!(matches!(encode("(10)AB(21)CD"), Err(Error::Format { .. })));
    assert!(matches!(encode("no groups"), Err(Error::Format { .. })));

    let segments = [Segment::new("01", "12x4").unwrap()];
    let err = Gs1Encoder::new().encode(&segments).unwrap_err();
    assert!(matches!(err, Error::Encode { .. }));
    assert!(err.to_string().starts_with("Encode error"));
}

#[test]
fn render_resolution() {
    let barcode = encode("(01)09501101530003").unwrap();
    let modules = barcode.module_count() as u32;
    assert!(matches!(barcode.render(modules / 2, 10), Err(Error::Render { .. })));
    assert!(barcode.render(modules, 10).is_ok());
}
