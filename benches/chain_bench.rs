//! Chain Dispatch Benchmarks — Local Hot Paths
//!
//! Benchmarks the work `MultiChain` does before any network call:
//! chain-type parsing, adapter construction, address validation
//! and balance formatting.
//!
//! Run with: cargo bench --bench chain_bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use multichain_client::adapters::chain::solana::parse_pubkey;
use multichain_client::domain::{trim_decimal, ChainKind, SignedTransaction};
use multichain_client::MultiChain;

/// Benchmark case-insensitive chain-type parsing.
fn bench_parse_chain_kind(c: &mut Criterion) {
    c.bench_function("parse_chain_kind_mixed_case", |b| {
        b.iter(|| {
            let _kind = black_box("AvAlAnChE").parse::<ChainKind>();
        });
    });
}

/// Benchmark facade construction (no network I/O).
fn bench_construct_facade(c: &mut Criterion) {
    c.bench_function("multichain_new_solana", |b| {
        b.iter(|| {
            let _mc = MultiChain::new(black_box("solana"), black_box("http://127.0.0.1:9"));
        });
    });
}

/// Benchmark Solana public-key validation.
fn bench_parse_pubkey(c: &mut Criterion) {
    c.bench_function("solana_parse_pubkey", |b| {
        b.iter(|| {
            let _key = parse_pubkey(black_box("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA"));
        });
    });
}

/// Benchmark trimming an 18-decimal formatted balance.
fn bench_trim_decimal(c: &mut Criterion) {
    c.bench_function("trim_decimal_18", |b| {
        b.iter(|| {
            let _s = trim_decimal(black_box("1234.500000000000000000"));
        });
    });
}

/// Benchmark decoding a hex raw transaction.
fn bench_signed_tx_from_hex(c: &mut Criterion) {
    let raw = format!("0x{}", "ab".repeat(110));
    c.bench_function("signed_tx_from_hex_110b", |b| {
        b.iter(|| {
            let _tx = SignedTransaction::from_hex(black_box(&raw));
        });
    });
}

criterion_group!(
    benches,
    bench_parse_chain_kind,
    bench_construct_facade,
    bench_parse_pubkey,
    bench_trim_decimal,
    bench_signed_tx_from_hex,
);
criterion_main!(benches);
