//! End-to-end verification against mainnet blocks

use block_integrity::*;

const BLOCKS_JSON: &str = include_str!("data/blocks.json");

fn mainnet() -> MemoryBlockSource {
    MemoryBlockSource::from_json_str(BLOCKS_JSON).unwrap()
}

#[test]
fn test_mainnet_blocks_verify() {
    let verifier = BlockVerifier::new();
    let source = mainnet();
    assert_eq!(source.len(), 4);

    for block in source.blocks() {
        let result = verifier.verify(block).unwrap();
        assert!(result.merkle_root, "merkle root of {}", block);
        assert!(result.block_hash, "block hash of {}", block);
    }
}

#[test]
fn test_single_transaction_merkle() {
    // Single transaction: the txid is the merkle root
    let genesis = mainnet().fetch_by_height(0).unwrap();
    assert_eq!(genesis.tx, vec![genesis.merkle_root.clone()]);
    assert!(BlockVerifier::new().check_merkle(&genesis).unwrap());
}

#[test]
fn test_two_transaction_merkle() {
    let verifier = BlockVerifier::new();
    let mut block = mainnet().fetch_by_height(170).unwrap();

    assert_eq!(verifier.merkle_root(&block.tx).unwrap(), block.merkle_root);
    assert!(verifier.check_merkle(&block).unwrap());

    // Mutate one character of the claimed root
    block.merkle_root.replace_range(0..1, "8");
    let result = verifier.verify(&block).unwrap();
    assert!(!result.merkle_root);
    assert!(!result.block_hash);
}

#[test]
fn test_four_transaction_merkle_two_levels() {
    let block = mainnet().fetch_by_height(100000).unwrap();
    let config = MerkleConfig::sequential();

    let levels = merkle::merkle_levels(&block.tx, &config).unwrap();
    let widths: Vec<usize> = levels.iter().map(|l| l.len()).collect();
    assert_eq!(widths, vec![4, 2, 1]);
    assert_eq!(
        levels[1],
        vec![
            "ccdafb73d8dcd0173d5d5c3c9a0770d0b3953db889dab99ef05b1907518cb815",
            "8e30899078ca1813be036a073bbf80b86cdddde1c96e9e9c99e9e3782df4ae49",
        ]
    );
    assert_eq!(levels[2][0], block.merkle_root);

    let result = BlockVerifier::new().verify(&block).unwrap();
    assert!(result.is_valid());
}

#[test]
fn test_odd_level_duplicates_last_mainnet_hash() {
    // First three transactions of block 100000: the lone third hash pairs
    // with itself on the first level
    let block = mainnet().fetch_by_height(100000).unwrap();
    let verifier = BlockVerifier::new();
    let three = &block.tx[..3];

    let root = verifier.merkle_root(three).unwrap();
    assert_eq!(
        root,
        "fa435470825de273081dcc706b25514c936fa6dc80ab965ce6970d68ddd0b553"
    );

    let mut padded = three.to_vec();
    padded.push(three[2].clone());
    assert_eq!(verifier.merkle_root(&padded).unwrap(), root);
}

#[test]
fn test_header_nonce_digit_flip() {
    let verifier = BlockVerifier::new();
    let mut block = mainnet().fetch_by_height(1).unwrap();
    assert!(verifier.check_header(&block).unwrap());

    block.nonce ^= 0x1;
    let result = verifier.verify(&block).unwrap();
    assert!(!result.block_hash);
    assert!(result.merkle_root);
}

#[test]
fn test_swapped_transactions_fail_merkle() {
    let verifier = BlockVerifier::new();
    let mut block = mainnet().fetch_by_height(170).unwrap();
    block.tx.reverse();

    let result = verifier.verify(&block).unwrap();
    assert!(!result.merkle_root);
    // The header does not depend on the transaction list
    assert!(result.block_hash);
}

#[test]
fn test_block_hash_recomputed() {
    let verifier = BlockVerifier::new();
    for block in mainnet().blocks() {
        assert_eq!(verifier.block_hash(block).unwrap(), block.hash);
        assert_eq!(verifier.header_bytes(block).unwrap().len(), HEADER_SIZE);
    }
}

#[test]
fn test_claimed_hashes_case_insensitive() {
    let verifier = BlockVerifier::new();
    let mut block = mainnet().fetch_by_height(170).unwrap();
    block.hash = block.hash.to_uppercase();
    block.merkle_root = block.merkle_root.to_uppercase();

    let result = verifier.verify(&block).unwrap();
    assert!(result.is_valid());
}

#[test]
fn test_verify_lookup_by_hash_and_height() {
    let verifier = BlockVerifier::new();
    let source = mainnet();

    let by_height = BlockLookup::parse("170").unwrap();
    let (block, result) = verifier.verify_lookup(&source, &by_height).unwrap();
    assert_eq!(block.height, 170);
    assert!(result.is_valid());

    let by_hash = BlockLookup::parse(&block.hash).unwrap();
    let (same, _) = verifier.verify_lookup(&source, &by_hash).unwrap();
    assert_eq!(same, block);
}

#[test]
fn test_parallel_config_same_results() {
    let config = VerifierConfig {
        merkle: MerkleConfig {
            enable_parallel: true,
            parallel_threshold: 2,
        },
    };
    let parallel = BlockVerifier::with_config(config);
    let sequential = BlockVerifier::with_config(VerifierConfig {
        merkle: MerkleConfig::sequential(),
    });

    let block = mainnet().fetch_by_height(170).unwrap();
    assert_eq!(
        parallel.verify(&block).unwrap(),
        sequential.verify(&block).unwrap()
    );

    let hashes: Vec<String> = (0..=200u8).map(|i| hex::encode([i; 32])).collect();
    assert_eq!(
        parallel.merkle_root(&hashes).unwrap(),
        sequential.merkle_root(&hashes).unwrap()
    );
}
