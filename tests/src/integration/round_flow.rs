//! # Consensus Round Flow
//!
//! Drives one height through both subsystems the way the engine does:
//!
//! ```text
//! mempool txs ──→ Application::prepare_proposal ──→ qc-02 validate
//!                                                      │
//!                                  reject → fall back to unmodified list
//!                                                      ↓
//!                        block txs ──→ Application::execute ──→ qc-01 commit
//!                                                                  │
//!                                          every validator: same root, proofs verify
//! ```
//!
//! Two validators run different application builds whose diagnostic output
//! differs; they must still agree on the results root.

#[cfg(test)]
mod tests {
    use qc_01_result_commitment::{
        canonicalize, ResultCommitmentApi, ResultCommitmentService, ResultsCommitment,
    };
    use qc_02_proposal_validation::{
        ProposalValidationApi, ProposalValidationService, ValidationConfig, ValidationErrorKind,
    };
    use shared_types::{Event, ExecTxResult, ProposalEditSet, Tx, TxAction, TxRecord};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    /// The external application as seen from the engine.
    trait Application {
        fn prepare_proposal(&self, txs: &[Tx]) -> ProposalEditSet;
        fn execute(&self, txs: &[&[u8]]) -> Vec<ExecTxResult>;
    }

    /// Drops the first transaction and appends one of its own.
    struct HonestApp {
        build: &'static str,
    }

    impl Application for HonestApp {
        fn prepare_proposal(&self, txs: &[Tx]) -> ProposalEditSet {
            let mut records: Vec<TxRecord> = txs
                .iter()
                .enumerate()
                .map(|(i, tx)| {
                    let action = if i == 0 {
                        TxAction::Removed
                    } else {
                        TxAction::Unmodified
                    };
                    TxRecord::new(action, tx.clone())
                })
                .collect();
            records.push(TxRecord::new(TxAction::Added, b"app-injected".to_vec()));
            ProposalEditSet::new(true, records)
        }

        fn execute(&self, txs: &[&[u8]]) -> Vec<ExecTxResult> {
            txs.iter()
                .map(|tx| ExecTxResult {
                    code: if tx.starts_with(b"bad") { 5 } else { 0 },
                    data: if tx.is_empty() { None } else { Some(tx.to_vec()) },
                    log: format!("{} executed {} bytes", self.build, tx.len()),
                    info: format!("build={}", self.build),
                    gas_wanted: 100,
                    gas_used: tx.len() as i64 * 10,
                    events: vec![Event::new("tx").with_attribute(
                        "size",
                        tx.len().to_string(),
                        self.build == "v1",
                    )],
                    codespace: format!("{}-space", self.build),
                })
                .collect()
        }
    }

    /// Re-adds an original transaction to double its inclusion.
    struct DuplicatingApp;

    impl Application for DuplicatingApp {
        fn prepare_proposal(&self, txs: &[Tx]) -> ProposalEditSet {
            let mut edits = ProposalEditSet::unmodified(txs);
            edits.modified_tx = true;
            if let Some(first) = txs.first() {
                edits
                    .tx_records
                    .push(TxRecord::new(TxAction::Unmodified, first.clone()));
            }
            edits
        }

        fn execute(&self, txs: &[&[u8]]) -> Vec<ExecTxResult> {
            HonestApp { build: "dup" }.execute(txs)
        }
    }

    fn mempool_txs() -> Vec<Tx> {
        vec![
            b"transfer alice bob 10".to_vec(),
            b"bad signature".to_vec(),
            b"stake carol 5".to_vec(),
        ]
    }

    /// Validate the application's answer, falling back to the original list.
    fn build_block<A: Application>(
        app: &A,
        validator: &ProposalValidationService,
        txs: &[Tx],
    ) -> Vec<Tx> {
        let edits = app.prepare_proposal(txs);
        match validator.validate(txs, &edits) {
            Ok(()) => edits.included_txs().into_iter().map(<[u8]>::to_vec).collect(),
            Err(_) => txs.to_vec(),
        }
    }

    fn run_validator_node<A: Application>(
        app: &A,
        block: &[Tx],
    ) -> (Vec<ExecTxResult>, ResultsCommitment) {
        let committer = ResultCommitmentService::default();
        let refs: Vec<&[u8]> = block.iter().map(Vec::as_slice).collect();
        let results = app.execute(&refs);
        let commitment = committer.commit(&results).expect("results encode");
        (results, commitment)
    }

    // =============================================================================
    // FLOWS
    // =============================================================================

    #[test]
    fn test_honest_round_agrees_across_builds() {
        init_tracing();
        let validator = ProposalValidationService::default();
        let txs = mempool_txs();

        let block = build_block(&HonestApp { build: "v1" }, &validator, &txs);
        assert_eq!(block.len(), 3);
        assert_eq!(block[0], txs[1]);
        assert_eq!(block[2], b"app-injected".to_vec());

        let (results_a, commit_a) = run_validator_node(&HonestApp { build: "v1" }, &block);
        let (_, commit_b) = run_validator_node(&HonestApp { build: "v2" }, &block);

        assert_eq!(commit_a.root(), commit_b.root());

        // Node B checks node A's results against its own root.
        let service = ResultCommitmentService::default();
        for (i, result) in results_a.iter().enumerate() {
            assert!(service.verify_result(&commit_b.root(), commit_a.proof(i).unwrap(), result));
        }
    }

    #[test]
    fn test_malicious_proposal_falls_back() {
        init_tracing();
        let validator = ProposalValidationService::default();
        let txs = mempool_txs();

        let edits = DuplicatingApp.prepare_proposal(&txs);
        let err = validator.validate(&txs, &edits).unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::DuplicateTransaction);

        let block = build_block(&DuplicatingApp, &validator, &txs);
        assert_eq!(block, txs);
    }

    #[test]
    fn test_oversized_proposal_falls_back() {
        init_tracing();
        let txs = mempool_txs();
        let budget: u64 = txs.iter().map(|tx| tx.len() as u64).sum();
        let validator = ProposalValidationService::new(ValidationConfig {
            max_proposal_bytes: budget,
        });

        // Honest app removes 21 bytes but adds 12: still within budget.
        let block = build_block(&HonestApp { build: "v1" }, &validator, &txs);
        assert_ne!(block, txs);

        let tight = ProposalValidationService::new(ValidationConfig {
            max_proposal_bytes: 10,
        });
        let block = build_block(&HonestApp { build: "v1" }, &tight, &txs);
        assert_eq!(block, txs);
    }

    #[test]
    fn test_diverging_execution_changes_root() {
        let block = mempool_txs();
        let (mut results, honest) = run_validator_node(&HonestApp { build: "v1" }, &block);

        results[1].code = 0;
        let service = ResultCommitmentService::default();
        let diverged = service.commit(&results).unwrap();

        assert_ne!(honest.root(), diverged.root());
        let bytes = canonicalize(&results[1]).unwrap();
        assert!(!service.verify(&honest.root(), honest.proof(1).unwrap(), &bytes));
    }

    #[test]
    fn test_services_shared_across_threads() {
        use std::sync::Arc;
        use std::thread;

        let validator = Arc::new(ProposalValidationService::default());
        let committer = Arc::new(ResultCommitmentService::default());
        let txs = Arc::new(mempool_txs());

        let handles: Vec<_> = ["v1", "v2", "v3", "v4"]
            .into_iter()
            .map(|build| {
                let validator = Arc::clone(&validator);
                let committer = Arc::clone(&committer);
                let txs = Arc::clone(&txs);
                thread::spawn(move || {
                    let app = HonestApp { build };
                    let block = build_block(&app, &validator, &txs);
                    let refs: Vec<&[u8]> = block.iter().map(Vec::as_slice).collect();
                    committer.tx_results_hash(&app.execute(&refs)).unwrap()
                })
            })
            .collect();

        let roots: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(roots.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_empty_round() {
        let validator = ProposalValidationService::default();
        let block = build_block(&HonestApp { build: "v1" }, &validator, &[]);
        assert_eq!(block, vec![b"app-injected".to_vec()]);

        let (_, commitment) = run_validator_node(&HonestApp { build: "v1" }, &[]);
        assert!(commitment.is_empty());
        assert_eq!(commitment.root(), shared_merkle::empty_hash());
    }
}
