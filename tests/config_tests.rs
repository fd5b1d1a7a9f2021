//! Configuration loading from the environment
//!
//! Kept in a single test so no other test observes the variables.

use block_integrity::*;

#[test]
fn test_config_from_env() {
    std::env::set_var("BLOCK_INTEGRITY_MERKLE_ENABLE_PARALLEL", "false");
    std::env::set_var("BLOCK_INTEGRITY_MERKLE_PARALLEL_THRESHOLD", "512");

    let config = VerifierConfig::from_env();
    assert!(!config.merkle.enable_parallel);
    assert_eq!(config.merkle.parallel_threshold, 512);
    assert_eq!(VerifierConfig::try_from_env().unwrap(), config);

    std::env::set_var("BLOCK_INTEGRITY_MERKLE_PARALLEL_THRESHOLD", "lots");
    let lenient = VerifierConfig::from_env();
    assert_eq!(lenient.merkle.parallel_threshold, DEFAULT_PARALLEL_THRESHOLD);
    assert!(matches!(
        VerifierConfig::try_from_env(),
        Err(VerifyError::Config(_))
    ));

    std::env::remove_var("BLOCK_INTEGRITY_MERKLE_ENABLE_PARALLEL");
    std::env::remove_var("BLOCK_INTEGRITY_MERKLE_PARALLEL_THRESHOLD");
    assert_eq!(VerifierConfig::from_env(), VerifierConfig::default());
}
