//! Integration tests for the full codec pipeline.
//!
//! These tests verify end-to-end behavior: values -> encode -> pack ->
//! channel -> unpack -> decode, with verification that output matches input
//! or that corruption is reported.

use line8b10b_core::{
    bitio::{pack_symbols, unpack_symbols, BitOrder},
    channel::{NoiseConfig, NoisyChannel},
    sample::{generate_bytes, generate_values},
    CodeTable, CodeValue, DecodeError, DecodeStats, Decoder, Disparity, Encoder, Symbol,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn table() -> CodeTable {
    CodeTable::build().expect("standard table must build")
}

/// Encode `values` one at a time, recording the disparity before each symbol.
fn encode_with_checkpoints(table: &CodeTable, values: &[CodeValue]) -> (Vec<Symbol>, Vec<Disparity>) {
    let mut encoder = Encoder::new(table);
    let mut symbols = Vec::with_capacity(values.len());
    let mut checkpoints = Vec::with_capacity(values.len());

    for &value in values {
        checkpoints.push(encoder.disparity());
        symbols.push(encoder.encode_value(value).expect("encode failed"));
    }
    (symbols, checkpoints)
}

/// Test a simple round-trip: encode, pack, unpack, decode.
#[test]
fn test_full_pipeline() {
    let table = table();
    let mut values = vec![CodeValue::K28_5];
    values.extend(b"hello world! aaaaaaaaaa".iter().map(|&b| CodeValue::Data(b)));
    values.push(CodeValue::K28_1);

    let symbols = Encoder::new(&table).encode_all(values.iter().copied()).unwrap();

    for order in [BitOrder::Transmission, BitOrder::Reversed] {
        let bytes = pack_symbols(&symbols, order);
        assert_eq!(bytes.len(), (symbols.len() * 10 + 7) / 8);

        let received = unpack_symbols(&bytes, symbols.len(), order).expect("unpack failed");
        let mut decoder = Decoder::new(&table);
        let decoded: Vec<CodeValue> = decoder
            .decode(received)
            .collect::<Result<_, _>>()
            .expect("decode failed");

        assert_eq!(decoded, values, "output doesn't match input");
        assert_eq!(decoder.stats().control, 2);
    }
}

/// Test round trips over large generated streams from both starting disparities.
#[test]
fn test_round_trip_both_disparities() {
    let table = table();
    let values = generate_values(7, 50_000);

    for start in Disparity::ALL {
        let mut encoder = Encoder::with_disparity(&table, start);
        let symbols = encoder.encode_all(values.iter().copied()).unwrap();

        let mut decoder = Decoder::with_disparity(&table, start);
        let decoded = decoder.decode_all(symbols);

        assert!(decoded.iter().all(Result::is_ok), "errors from {start}");
        assert!(decoded.into_iter().map(Result::unwrap).eq(values.iter().copied()));
        assert_eq!(decoder.disparity(), encoder.disparity());
    }
}

/// Test encoding raw bytes and decoding with a joined-late receiver.
#[test]
fn test_late_join() {
    let table = table();
    let payload = generate_bytes(3, 4096);
    let symbols = Encoder::new(&table).encode_bytes(&payload).unwrap();

    // join mid-stream, disparity unknown
    let mut decoder = Decoder::unsynchronized(&table);
    let decoded = decoder.decode_all(symbols[1000..].iter().copied());

    assert!(decoder.is_synchronized());
    assert_eq!(decoder.stats().errors(), 0);
    assert!(decoded
        .into_iter()
        .map(Result::unwrap)
        .eq(payload[1000..].iter().map(|&b| CodeValue::Data(b))));
}

/// The running sum of symbol disparities never leaves {0, +2}.
#[test]
fn test_disparity_closure() {
    let table = table();
    let mut encoder = Encoder::new(&table);
    let mut running: i32 = 0;

    for _ in 0..2 {
        for byte in 0..=255u8 {
            let symbol = encoder.encode_value(CodeValue::Data(byte)).unwrap();
            running += symbol.disparity() as i32;
            assert!(running == 0 || running == 2, "running sum {running} after D{byte:#04x}");
        }
    }

    assert_eq!(encoder.disparity(), Disparity::Neg);
    assert_eq!(running, 0);
}

/// Replacing one symbol with an unassigned pattern only affects that symbol.
#[test]
fn test_resync_after_invalid_symbol() {
    let table = table();
    let scenarios: [[CodeValue; 5]; 3] = [
        [0x00, 0x01, 0x02, 0x03, 0x04].map(CodeValue::Data),
        [0x00, 0x01, 0x25, 0x02, 0x03].map(CodeValue::Data),
        [
            CodeValue::K28_5,
            CodeValue::Data(0x4A),
            CodeValue::Data(0x00),
            CodeValue::Data(0xFF),
            CodeValue::K28_5,
        ],
    ];

    for values in scenarios {
        let mut symbols = Encoder::new(&table).encode_all(values).unwrap();
        let garbage = Symbol::new(0x000).unwrap();
        symbols[2] = garbage;

        let decoded = Decoder::new(&table).decode_all(symbols);
        assert_eq!(decoded[0], Ok(values[0]));
        assert_eq!(decoded[1], Ok(values[1]));
        assert_eq!(decoded[2], Err(DecodeError::InvalidSymbol { symbol: garbage }));
        assert_eq!(decoded[3], Ok(values[3]));
        assert_eq!(decoded[4], Ok(values[4]));
    }
}

/// A single flipped bit never decodes silently to the original value.
#[test]
fn test_single_bit_flips_never_silent() {
    let table = table();
    let mut trials = 0u32;
    let mut detected = 0u32;

    for entry in table.entries() {
        for disparity in Disparity::ALL {
            for bit in 0..10 {
                let corrupted = entry.symbol(disparity).with_bit_flipped(bit);
                let mut decoder = Decoder::with_disparity(&table, disparity);

                match decoder.decode_symbol(corrupted) {
                    Ok(value) => assert_ne!(value, entry.value(), "{corrupted} silently decoded"),
                    Err(_) => detected += 1,
                }
                trials += 1;
            }
        }
    }

    assert_eq!(trials, 268 * 2 * 10);
    // roughly two thirds are caught at the flipped symbol itself
    assert!(detected as f64 / trials as f64 >= 0.6);
}

/// Over a random stream, nearly every single-bit flip is reported at the
/// flipped symbol or within the two symbols after it.
#[test]
fn test_single_bit_flips_detected_within_window() {
    const WINDOW: usize = 3;

    let table = table();
    let values = generate_values(2024, 5_000);
    let (symbols, checkpoints) = encode_with_checkpoints(&table, &values);
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    let trials = 20_000;
    let mut detected = 0;
    for _ in 0..trials {
        let position = rng.gen_range(0..symbols.len() - WINDOW);
        let bit = rng.gen_range(0..10);

        let mut window = symbols[position..position + WINDOW].to_vec();
        window[0] = window[0].with_bit_flipped(bit);

        let mut decoder = Decoder::with_disparity(&table, checkpoints[position]);
        if decoder.decode(window).any(|outcome| outcome.is_err()) {
            detected += 1;
        }
    }

    let rate = detected as f64 / trials as f64;
    assert!(rate >= 0.9, "detection rate {rate:.3}");
}

/// Test a noisy channel end to end: every corrupted symbol is accounted for.
#[test]
fn test_noisy_channel_pipeline() {
    let table = table();
    let values = generate_values(11, 20_000);
    let symbols = Encoder::new(&table).encode_all(values.iter().copied()).unwrap();

    let config = NoiseConfig {
        bit_error_rate: 1e-3,
        seed: 77,
    };
    let mut channel = NoisyChannel::new(config).unwrap();
    let received = channel.transmit_all(&symbols);

    let mut decoder = Decoder::new(&table);
    let decoded = decoder.decode_all(received.iter().copied());

    let channel_stats = channel.stats();
    let stats = decoder.stats();
    assert!(channel_stats.symbols_corrupted > 0);
    assert!(stats.errors() > 0);
    assert_eq!(stats.symbols, values.len() as u64);

    // a clean unbalanced symbol pins the disparity, so a clean symbol after it decodes
    for i in 1..symbols.len() {
        let pinned = received[i - 1] == symbols[i - 1] && !symbols[i - 1].is_neutral();
        if pinned && received[i] == symbols[i] {
            assert_eq!(decoded[i], Ok(values[i]), "clean symbol {i} misdecoded");
        }
    }

    println!("channel: {:?}", channel_stats);
    println!("decoder: {stats}");
}

/// Independent streams share one table across threads.
#[test]
fn test_concurrent_streams() {
    let table = table();

    let totals: Vec<DecodeStats> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4u64)
            .map(|seed| {
                let table = &table;
                scope.spawn(move || {
                    let values = generate_values(seed, 10_000);
                    let symbols = Encoder::new(table).encode_all(values.iter().copied()).unwrap();

                    let mut decoder = Decoder::new(table);
                    let decoded = decoder.decode_all(symbols);
                    assert!(decoded.into_iter().map(Result::unwrap).eq(values));
                    decoder.stats().clone()
                })
            })
            .collect();

        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let mut merged = DecodeStats::new();
    for stats in &totals {
        merged.merge(stats);
    }
    assert_eq!(merged.symbols, 40_000);
    assert_eq!(merged.errors(), 0);
}

/// Parsed value names encode to the expected symbols.
#[test]
fn test_named_values() {
    let table = table();
    let comma: CodeValue = "K28.5".parse().unwrap();
    let d10_2: CodeValue = "D10.2".parse().unwrap();

    let symbols = Encoder::new(&table).encode_all([comma, d10_2, comma]).unwrap();
    let bits: Vec<u16> = symbols.iter().map(|s| s.bits()).collect();
    assert_eq!(bits, vec![0b001111_1010, 0b010101_0101, 0b110000_0101]);
}
