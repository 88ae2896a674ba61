//! Behaviour of the polling loop across cycles

use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Duration;

use prober::{PollOrchestrator, Prober};

use crate::support::{FixedStatus, SlowChecker, init_tracing};

#[tokio::test]
async fn test_slow_cycles_do_not_overlap() {
    init_tracing();

    // Every probe outlasts the interval several times over
    let checker = SlowChecker::new(Duration::from_millis(120));
    let prober = Prober::with_checkers(checker.clone(), Arc::new(FixedStatus(1)));
    let targets: Vec<String> = (0..4).map(|i| format!("http://slow-{i}.example")).collect();
    let orchestrator = PollOrchestrator::new(Arc::new(prober), targets, Duration::from_millis(20));
    let mut snapshots = orchestrator.subscribe();

    let handle = tokio::spawn(orchestrator.run());

    let mut cycles = Vec::new();
    for _ in 0..3 {
        let snapshot = tokio::time::timeout(Duration::from_secs(5), snapshots.recv())
            .await
            .expect("Timeout waiting for snapshot")
            .expect("Snapshot channel closed");
        assert_eq!(snapshot.len(), 4);
        cycles.push(snapshot.cycle);
    }
    handle.abort();

    assert_eq!(cycles, vec![1, 2, 3]);
    assert!(checker.max_in_flight.load(Ordering::SeqCst) <= 4);
    assert!(checker.calls.load(Ordering::SeqCst) >= 12);
}

#[tokio::test]
async fn test_interval_paces_fast_cycles() {
    let prober = Prober::with_checkers(Arc::new(FixedStatus(200)), Arc::new(FixedStatus(1)));
    let orchestrator = PollOrchestrator::new(
        Arc::new(prober),
        vec!["http://fast.example".to_string()],
        Duration::from_millis(100),
    );
    let reader = orchestrator.reader();
    let mut snapshots = orchestrator.subscribe();

    let handle = tokio::spawn(orchestrator.run());

    let first = snapshots.recv().await.unwrap();
    let second = snapshots.recv().await.unwrap();
    handle.abort();

    let gap = second.completed_at.unwrap() - first.completed_at.unwrap();
    assert!(gap >= chrono::Duration::milliseconds(50), "cycles ran {gap} apart");
    assert!(reader.snapshot().await.cycle >= 2);
}
