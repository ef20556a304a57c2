//! Partition assignment documents.
//!
//! The document format is the one consumed by Kafka's
//! `kafka-reassign-partitions` tool:
//!
//! ```json
//! {
//!   "version": 1,
//!   "partitions": [
//!     { "topic": "orders", "partition": 0, "replicas": [4, 5] }
//!   ]
//! }
//! ```
//!
//! Field order on output is `version`, `partitions`, and within each
//! partition `topic`, `partition`, `replicas`.

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{AssignmentError, AssignmentResult};

/// Broker (node) identifier as used in replica lists.
pub type BrokerId = i32;

/// An ordered set of partition replica layouts.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct PartitionAssignment {
    /// Reassignment document format version, carried through unchanged.
    #[serde(default)]
    pub version: i32,

    /// Partitions in document order.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub partitions: Vec<Partition>,
}

/// Replica layout of a single topic partition.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Partition {
    /// Topic name.
    #[serde(default)]
    pub topic: String,

    /// Partition number within the topic.
    #[serde(default)]
    pub partition: i32,

    /// Replica broker IDs. The first entry is the preferred leader.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub replicas: Vec<BrokerId>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

impl PartitionAssignment {
    /// Create an empty assignment with the given format version.
    #[must_use]
    pub fn new(version: i32) -> Self {
        Self {
            version,
            partitions: Vec::new(),
        }
    }

    /// Load an assignment from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid
    /// assignment document.
    pub fn from_file<P: AsRef<Path>>(path: P) -> AssignmentResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| AssignmentError::Io {
            path: path.display().to_string(),
            source: e,
        })?;

        let assignment = Self::from_json(&content)?;
        tracing::debug!(
            path = %path.display(),
            version = assignment.version,
            partitions = assignment.len(),
            "loaded partition assignment"
        );
        Ok(assignment)
    }

    /// Parse an assignment from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid assignment document.
    pub fn from_json(content: &str) -> AssignmentResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Number of partitions in the assignment.
    #[must_use]
    pub fn len(&self) -> usize {
        self.partitions.len()
    }

    /// Whether the assignment lists no partitions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.partitions.is_empty()
    }

    /// All distinct broker IDs referenced by any replica list, ascending.
    #[must_use]
    pub fn brokers(&self) -> BTreeSet<BrokerId> {
        self.partitions
            .iter()
            .flat_map(|p| p.replicas.iter().copied())
            .collect()
    }
}

impl Partition {
    /// Create a partition with the given replica list.
    pub fn new(topic: impl Into<String>, partition: i32, replicas: Vec<BrokerId>) -> Self {
        Self {
            topic: topic.into(),
            partition,
            replicas,
        }
    }

    /// The preferred leader, if the partition has any replica.
    #[must_use]
    pub fn leader(&self) -> Option<BrokerId> {
        self.replicas.first().copied()
    }

    /// Whether `broker` holds a replica of this partition.
    #[must_use]
    pub fn has_replica(&self, broker: BrokerId) -> bool {
        self.replicas.contains(&broker)
    }

    /// Copy of this partition's identity with a new replica list.
    #[must_use]
    pub fn with_replicas(&self, replicas: Vec<BrokerId>) -> Self {
        Self {
            topic: self.topic.clone(),
            partition: self.partition,
            replicas,
        }
    }
}

impl std::fmt::Display for Partition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.topic, self.partition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = r#"{
        "version": 1,
        "partitions": [
            {"topic": "test-topic", "partition": 0, "replicas": [4, 5]},
            {"topic": "test-topic", "partition": 1, "replicas": [5, 6]}
        ]
    }"#;

    #[test]
    fn test_from_json() {
        let assignment = PartitionAssignment::from_json(SAMPLE).unwrap();
        assert_eq!(assignment.version, 1);
        assert_eq!(assignment.len(), 2);
        assert_eq!(assignment.partitions[0], Partition::new("test-topic", 0, vec![4, 5]));
        assert_eq!(assignment.partitions[1].replicas, vec![5, 6]);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let json = r#"{
            "version": 1,
            "partitions": [
                {"topic": "t", "partition": 0, "replicas": [1], "log_dirs": ["any"]}
            ]
        }"#;
        let assignment = PartitionAssignment::from_json(json).unwrap();
        assert_eq!(assignment.partitions[0].replicas, vec![1]);
    }

    #[test]
    fn test_missing_or_null_partitions_load_as_empty() {
        let missing = PartitionAssignment::from_json(r#"{"version": 1}"#).unwrap();
        assert!(missing.is_empty());

        let null = PartitionAssignment::from_json(r#"{"version": 1, "partitions": null}"#).unwrap();
        assert!(null.is_empty());
    }

    #[test]
    fn test_missing_scalar_fields_default_to_zero() {
        let assignment =
            PartitionAssignment::from_json(r#"{"partitions":[{"topic":"t","partition":0,"replicas":[4,5]}]}"#)
                .unwrap();
        assert_eq!(assignment.version, 0);
        assert_eq!(assignment.partitions[0].replicas, vec![4, 5]);

        let assignment = PartitionAssignment::from_json(r#"{"version":1,"partitions":[{"replicas":[4]}]}"#).unwrap();
        assert_eq!(assignment.partitions[0], Partition::new("", 0, vec![4]));
    }

    #[test]
    fn test_malformed_document_is_rejected() {
        let result = PartitionAssignment::from_json(r#"{"version": "one"}"#);
        assert!(matches!(result, Err(AssignmentError::Parse(_))));

        let result = PartitionAssignment::from_json("not json");
        assert!(matches!(result, Err(AssignmentError::Parse(_))));
    }

    #[test]
    fn test_loader_does_not_validate_semantics() {
        let json = r#"{"version": 1, "partitions": [{"topic": "", "partition": -3, "replicas": []}]}"#;
        let assignment = PartitionAssignment::from_json(json).unwrap();
        assert_eq!(assignment.partitions[0].partition, -3);
        assert!(assignment.partitions[0].topic.is_empty());
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let assignment = PartitionAssignment::from_file(file.path()).unwrap();
        assert_eq!(assignment.len(), 2);
    }

    #[test]
    fn test_from_missing_file() {
        let result = PartitionAssignment::from_file("/nonexistent/assignment.json");
        assert!(matches!(result, Err(AssignmentError::Io { .. })));
    }

    #[test]
    fn test_serialized_field_order() {
        let mut assignment = PartitionAssignment::new(1);
        assignment.partitions.push(Partition::new("t", 3, vec![1, 2]));

        let json = serde_json::to_string(&assignment).unwrap();
        assert_eq!(
            json,
            r#"{"version":1,"partitions":[{"topic":"t","partition":3,"replicas":[1,2]}]}"#
        );
    }

    #[test]
    fn test_brokers_are_distinct_and_sorted() {
        let assignment = PartitionAssignment::from_json(SAMPLE).unwrap();
        let brokers: Vec<_> = assignment.brokers().into_iter().collect();
        assert_eq!(brokers, vec![4, 5, 6]);
    }

    #[test]
    fn test_partition_helpers() {
        let p = Partition::new("orders", 7, vec![3, 1, 2]);
        assert_eq!(p.leader(), Some(3));
        assert!(p.has_replica(1));
        assert!(!p.has_replica(9));
        assert_eq!(p.to_string(), "orders-7");

        let moved = p.with_replicas(vec![9]);
        assert_eq!(moved.topic, "orders");
        assert_eq!(moved.partition, 7);
        assert_eq!(moved.replicas, vec![9]);

        assert_eq!(Partition::new("empty", 0, vec![]).leader(), None);
    }
}
