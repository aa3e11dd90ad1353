//! # ABCI Subsystem Benchmarks
//!
//! | Subsystem | Operation | Expected cost |
//! |-----------|-----------|---------------|
//! | shared-merkle | proof verification | O(log n) |
//! | qc-01 Result Commitment | encode + root + proofs | O(n log n) |
//! | qc-02 Proposal Validation | edit set check | O(n) |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use qc_01_result_commitment::{canonicalize, commit, verify};
use qc_02_proposal_validation::validate;
use rand::Rng;
use shared_types::{Event, ExecTxResult, ProposalEditSet, Tx, TxAction, TxRecord};
use std::time::Duration;

const SIZES: [usize; 4] = [10, 100, 1_000, 5_000];

fn random_result(rng: &mut impl Rng) -> ExecTxResult {
    let data: Vec<u8> = (0..rng.gen_range(0..128)).map(|_| rng.gen()).collect();
    ExecTxResult {
        code: rng.gen_range(0..3),
        data: Some(data),
        log: "benchmark log line".into(),
        gas_wanted: rng.gen_range(0..1_000_000),
        gas_used: rng.gen_range(0..1_000_000),
        events: vec![Event::new("transfer")
            .with_attribute("sender", "alice", true)
            .with_attribute("amount", rng.gen::<u32>().to_string(), false)],
        ..Default::default()
    }
}

fn random_txs(rng: &mut impl Rng, count: usize) -> Vec<Tx> {
    (0..count)
        .map(|i| {
            let mut tx = (i as u64).to_le_bytes().to_vec();
            tx.extend((0..rng.gen_range(16..256)).map(|_| rng.gen::<u8>()));
            tx
        })
        .collect()
}

// ============================================================================
// QC-01: Result Commitment
// ============================================================================

fn bench_result_commitment(c: &mut Criterion) {
    let mut group = c.benchmark_group("qc-01-result-commitment");
    group.measurement_time(Duration::from_secs(5));
    let mut rng = rand::thread_rng();

    for size in SIZES {
        let results: Vec<ExecTxResult> = (0..size).map(|_| random_result(&mut rng)).collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("commit", size), &results, |b, results| {
            b.iter(|| black_box(commit(results).map(|c| c.root())))
        });
    }

    group.finish();
}

fn bench_proof_verification(c: &mut Criterion) {
    let mut group = c.benchmark_group("qc-01-proof-verification");
    let mut rng = rand::thread_rng();

    for size in SIZES {
        let results: Vec<ExecTxResult> = (0..size).map(|_| random_result(&mut rng)).collect();
        let Ok(commitment) = commit(&results) else {
            continue;
        };
        let index = size / 2;
        let Ok(canonical) = canonicalize(&results[index]) else {
            continue;
        };
        let Some(proof) = commitment.proof(index) else {
            continue;
        };
        let root = commitment.root();

        group.bench_with_input(BenchmarkId::new("verify", size), &size, |b, _| {
            b.iter(|| black_box(verify(&root, proof, &canonical)))
        });
    }

    group.finish();
}

// ============================================================================
// QC-02: Proposal Validation
// ============================================================================

fn bench_proposal_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("qc-02-proposal-validation");
    let mut rng = rand::thread_rng();

    for size in SIZES {
        let original = random_txs(&mut rng, size);
        let mut records: Vec<TxRecord> = original
            .iter()
            .enumerate()
            .map(|(i, tx)| {
                let action = if i % 4 == 0 {
                    TxAction::Removed
                } else {
                    TxAction::Unmodified
                };
                TxRecord::new(action, tx.clone())
            })
            .collect();
        records.extend(
            random_txs(&mut rng, size / 4)
                .into_iter()
                .map(|mut tx| {
                    tx.push(0xFF);
                    TxRecord::new(TxAction::Added, tx)
                }),
        );
        let edits = ProposalEditSet::new(true, records);

        group.throughput(Throughput::Elements(edits.tx_records.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("validate", size),
            &(original, edits),
            |b, (original, edits)| b.iter(|| black_box(validate(u64::MAX, original, edits).is_ok())),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_result_commitment,
    bench_proof_verification,
    bench_proposal_validation
);
criterion_main!(benches);
