//! End-to-end produce flow
//!
//! Exercises the public API the way a host harness does: build a
//! producer, await it, compare the result against the expected value.

use std::time::{Duration, Instant};

use pretty_assertions::assert_eq;

use delayed_value::{DelayedValueProducer, ProduceError, ProducerConfig};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(true)
        .try_init();
}

#[tokio::test]
async fn test_default_producer_yields_42() {
    init_tracing();

    let producer = DelayedValueProducer::default();
    let started = Instant::now();
    let result = producer.produce().await;

    assert_eq!(result, 42);
    // Default delay is one second; the value must not arrive early.
    assert!(started.elapsed() >= Duration::from_millis(1_000));
}

#[tokio::test]
async fn test_configured_producer_yields_configured_value() {
    init_tracing();

    let config = ProducerConfig::new().with_delay_ms(25).with_value(-3);
    let producer = DelayedValueProducer::new(config);

    assert_eq!(producer.produce().await, -3);
    assert_eq!(producer.value(), -3);
    assert_eq!(producer.delay(), Duration::from_millis(25));
}

#[tokio::test]
async fn test_deadline_shorter_than_delay_fails() {
    init_tracing();

    let producer = DelayedValueProducer::new(ProducerConfig::new().with_delay_ms(500));
    let result = producer.produce_within(Duration::from_millis(50)).await;

    assert_eq!(
        result,
        Err(ProduceError::DeadlineExceeded {
            deadline_ms: 50,
            delay_ms: 500
        })
    );
}
