//! Cancellation and deadline behaviour of the long-running engines.

use std::time::{Duration, Instant};

use vanilla_core::types::{CancellationToken, OptionContract, OptionKind, PricingError};
use vanilla_engines::pricer::{Model, ModelConfig, Pricer};

fn contract() -> OptionContract {
    OptionContract::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionKind::Call).unwrap()
}

#[test]
fn test_pre_cancelled_token_aborts_monte_carlo_and_tree() {
    let token = CancellationToken::new();
    token.cancel();
    let config = ModelConfig::default().with_seed(1);

    for model in [Model::MonteCarlo, Model::BinomialTree] {
        let result = Pricer::new().price_with_cancel(model, &contract(), &config, &token);
        assert_eq!(result, Err(PricingError::Cancelled), "{model}");
    }
}

#[test]
fn test_expired_deadline_aborts_monte_carlo_and_tree() {
    let token = CancellationToken::with_deadline(Instant::now());
    let config = ModelConfig::default().with_seed(1);

    for model in [Model::MonteCarlo, Model::BinomialTree] {
        let result = Pricer::new().price_with_cancel(model, &contract(), &config, &token);
        assert_eq!(result, Err(PricingError::Cancelled), "{model}");
    }
}

#[test]
fn test_generous_deadline_does_not_interfere() {
    let token = CancellationToken::with_timeout(Duration::from_secs(3600));
    let config = ModelConfig::default().with_simulations(20_000).with_seed(1);

    for model in Model::ALL {
        let with_deadline = Pricer::new()
            .price_with_cancel(model, &contract(), &config, &token)
            .unwrap();
        let plain = Pricer::new().price(model, &contract(), &config).unwrap();
        assert_eq!(with_deadline.to_bits(), plain.to_bits(), "{model}");
    }
}

#[test]
fn test_cancel_from_another_thread() {
    let token = CancellationToken::new();
    let handle = token.clone();
    // Large tree so the roll-back is still running when cancel lands
    let config = ModelConfig::default().with_steps(100_000);

    let worker = std::thread::spawn(move || {
        Pricer::new().price_with_cancel(Model::BinomialTree, &contract(), &config, &token)
    });
    handle.cancel();

    let result = worker.join().unwrap();
    assert_eq!(result, Err(PricingError::Cancelled));
}

#[test]
fn test_black_scholes_ignores_cancellation() {
    let token = CancellationToken::new();
    token.cancel();
    let result = Pricer::new().price_with_cancel(
        Model::BlackScholes,
        &contract(),
        &ModelConfig::default(),
        &token,
    );
    assert!(result.is_ok());
}
