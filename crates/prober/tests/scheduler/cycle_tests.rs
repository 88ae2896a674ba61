//! Single-cycle behaviour of the poll orchestrator

use std::sync::Arc;
use std::time::Duration;

use prober::{PollOrchestrator, ProbeError, Prober, Protocol};

use crate::support::{
    FailMatching, FixedStatus, SlowChecker, init_tracing, local_prober, spawn_tcp_listener,
};

fn stub_orchestrator(targets: Vec<String>) -> PollOrchestrator {
    let prober = Prober::with_checkers(Arc::new(FixedStatus(200)), Arc::new(FixedStatus(1)));
    PollOrchestrator::new(Arc::new(prober), targets, Duration::from_secs(1))
}

#[tokio::test]
async fn test_one_entry_per_target() {
    init_tracing();

    for n in [0usize, 1, 10] {
        let targets: Vec<String> = (0..n).map(|i| format!("http://host-{i}.example")).collect();
        let mut orchestrator = stub_orchestrator(targets.clone());

        let snapshot = orchestrator.run_cycle().await;

        assert_eq!(snapshot.len(), n);
        for target in &targets {
            assert!(snapshot.get(target).is_some(), "missing {target}");
        }
        assert!(snapshot.entries.keys().all(|k| targets.contains(k)));
    }
}

#[tokio::test]
async fn test_second_cycle_replaces_every_entry() {
    let targets: Vec<String> = (0..5).map(|i| format!("tcp://node-{i}:7000")).collect();
    let mut orchestrator = stub_orchestrator(targets.clone());

    let first = orchestrator.run_cycle().await;
    tokio::time::sleep(Duration::from_millis(5)).await;
    let second = orchestrator.run_cycle().await;

    assert_eq!(second.len(), targets.len());
    for target in &targets {
        let before = first.get(target).unwrap();
        let after = second.get(target).unwrap();
        assert!(after.observed_at > before.observed_at, "stale entry for {target}");
    }
    assert!(second.completed_at > first.completed_at);
}

#[tokio::test]
async fn test_results_are_merged_as_they_arrive() {
    // TCP answers at once, HTTP holds the cycle open
    let slow = SlowChecker::new(Duration::from_millis(400));
    let prober = Prober::with_checkers(slow, Arc::new(FixedStatus(1)));
    let targets = vec!["tcp://fast.example:22".to_string(), "http://slow.example".to_string()];
    let mut orchestrator = PollOrchestrator::new(Arc::new(prober), targets, Duration::from_secs(1));
    let reader = orchestrator.reader();

    let cycle = tokio::spawn(async move { orchestrator.run_cycle().await });
    tokio::time::sleep(Duration::from_millis(150)).await;

    let mid_cycle = reader.snapshot().await;
    assert_eq!(mid_cycle.cycle, 0);
    assert_eq!(mid_cycle.len(), 1);
    assert!(mid_cycle.get("tcp://fast.example:22").is_some_and(|r| r.is_up()));
    assert!(mid_cycle.get("http://slow.example").is_none());

    let snapshot = cycle.await.unwrap();
    assert_eq!(snapshot.cycle, 1);
    assert_eq!(snapshot.len(), 2);
    assert_eq!(reader.snapshot().await, snapshot);
}

#[tokio::test]
async fn test_failures_are_kept_per_target() {
    let prober = Prober::with_checkers(Arc::new(FailMatching("down")), Arc::new(FixedStatus(1)));
    let targets = vec![
        "http://up.example".to_string(),
        "http://down.example".to_string(),
        "ftp://files.example".to_string(),
        "not a url".to_string(),
        String::new(),
    ];
    let mut orchestrator = PollOrchestrator::new(Arc::new(prober), targets.clone(), Duration::from_secs(1));

    let snapshot = orchestrator.run_cycle().await;
    assert_eq!(snapshot.len(), targets.len());

    assert!(snapshot.get("http://up.example").unwrap().is_up());
    assert!(matches!(
        snapshot.get("http://down.example").unwrap().error,
        Some(ProbeError::Network(_))
    ));
    assert_eq!(
        snapshot.get("ftp://files.example").unwrap().error,
        Some(ProbeError::UnsupportedProtocol("ftp".into()))
    );
    assert!(matches!(snapshot.get("not a url").unwrap().error, Some(ProbeError::Parse(_))));
    assert!(matches!(snapshot.get("").unwrap().error, Some(ProbeError::Parse(_))));
    assert_eq!(snapshot.tally(), (1, 4));
}

#[tokio::test]
async fn test_unsupported_target_survives_every_cycle() {
    let mut orchestrator = stub_orchestrator(vec!["ftp://host".to_string()]);

    for _ in 0..3 {
        let snapshot = orchestrator.run_cycle().await;
        let entry = snapshot.get("ftp://host").expect("unsupported target dropped");
        assert_eq!(entry.error, Some(ProbeError::UnsupportedProtocol("ftp".into())));
    }
}

#[tokio::test]
async fn test_cycle_against_real_sockets() {
    let addr = spawn_tcp_listener().await;
    let target = format!("tcp://{addr}");
    let mut orchestrator =
        PollOrchestrator::new(Arc::new(local_prober()), vec![target.clone()], Duration::from_secs(1));
    let reader = orchestrator.reader();

    assert!(reader.get(&target).await.is_none());
    orchestrator.run_cycle().await;

    let entry = reader.get(&target).await.unwrap();
    assert_eq!(entry.protocol, Some(Protocol::Tcp));
    assert!(entry.is_up());
}
