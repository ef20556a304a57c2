//! Integration tests for reassignment planning against fixture documents.
//!
//! Every fixture is planned with replicas moving from broker 4 to broker 6.

use std::path::PathBuf;

use kafka_reassign_core::assignment::{BrokerId, PartitionAssignment};
use kafka_reassign_core::planner::{generate_plans, PlanStage, ReassignmentPlanner};

const FROM: BrokerId = 4;
const TO: BrokerId = 6;

fn fixture(name: &str) -> PartitionAssignment {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata").join(name);
    PartitionAssignment::from_file(&path).unwrap()
}

fn replicas(assignment: &PartitionAssignment) -> Vec<Vec<BrokerId>> {
    assignment.partitions.iter().map(|p| p.replicas.clone()).collect()
}

/// The single-partition example moves [4, 5] to [6, 5] in three steps.
#[test]
fn test_basic_fixture() {
    let (plan1, plan2, plan3) = generate_plans(&fixture("test-input.json"), FROM, TO);

    assert_eq!(replicas(&plan1), vec![vec![4, 5, 6]]);
    assert_eq!(replicas(&plan2), vec![vec![6, 4, 5]]);
    assert_eq!(replicas(&plan3), vec![vec![6, 5]]);
    assert_eq!(plan3.partitions[0].topic, "test-topic");
    assert_eq!(plan3.partitions[0].partition, 0);
}

/// Partitions already on the target, or not on the source, are skipped.
#[test]
fn test_edge_case_fixture() {
    let plan = ReassignmentPlanner::new(FROM, TO).plan(&fixture("test-edge-case.json"));

    assert_eq!(plan.affected_partitions(), 1);
    assert_eq!(plan.add_replica.partitions[0].topic, "single-replica");
    assert_eq!(replicas(&plan.add_replica), vec![vec![4, 6]]);
    assert_eq!(replicas(&plan.elect_leader), vec![vec![6, 4]]);
    assert_eq!(replicas(&plan.remove_replica), vec![vec![6]]);
}

/// Affected partitions keep their input order in every stage.
#[test]
fn test_mixed_fixture() {
    let plan = ReassignmentPlanner::new(FROM, TO).plan(&fixture("test-mixed.json"));

    let ids: Vec<String> = plan
        .elect_leader
        .partitions
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(ids, vec!["orders-0", "orders-2", "payments-1"]);

    assert_eq!(
        replicas(&plan.add_replica),
        vec![vec![4, 5, 1, 6], vec![1, 4, 5, 6], vec![2, 3, 4, 6]]
    );
    assert_eq!(
        replicas(&plan.elect_leader),
        vec![vec![6, 4, 5, 1], vec![6, 1, 4, 5], vec![6, 2, 3, 4]]
    );
    assert_eq!(
        replicas(&plan.remove_replica),
        vec![vec![6, 5, 1], vec![6, 1, 5], vec![6, 2, 3]]
    );
}

/// Every fixture produces well-formed plans that keep the input version.
#[test]
fn test_all_fixtures_produce_valid_plans() {
    for name in ["test-input.json", "test-edge-case.json", "test-mixed.json"] {
        let assignment = fixture(name);
        let plan = ReassignmentPlanner::new(FROM, TO).plan(&assignment);

        for (stage, planned) in plan.stages() {
            assert_eq!(planned.version, assignment.version, "{name} {stage}");
            for p in &planned.partitions {
                assert!(!p.topic.is_empty(), "{name} {stage}: empty topic");
                assert!(p.partition >= 0, "{name} {stage}: negative partition");
                assert!(!p.replicas.is_empty(), "{name} {stage}: no replicas");
            }
        }

        for p in &plan.stage(PlanStage::ElectLeader).partitions {
            assert_eq!(p.leader(), Some(TO), "{name}: {p} not led by target");
        }
    }
}

/// Moving a broker onto itself yields empty plans rather than an error.
#[test]
fn test_same_broker_yields_empty_plans() {
    let plan = ReassignmentPlanner::new(FROM, FROM).plan(&fixture("test-mixed.json"));
    assert!(plan.is_empty());
    for (_, planned) in plan.stages() {
        assert!(planned.is_empty());
        assert_eq!(planned.version, 1);
    }
}

/// Planning independent inputs from several threads gives the same result
/// as planning them sequentially.
#[test]
fn test_concurrent_planning() {
    let assignment = fixture("test-mixed.json");
    let expected = ReassignmentPlanner::new(FROM, TO).plan(&assignment);

    let assignment = &assignment;
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(move || ReassignmentPlanner::new(FROM, TO).plan(assignment)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
