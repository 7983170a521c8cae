//! Wire model of the tracking server's run payload
//!
//! Shape of `GET /api/2.0/mlflow/runs/get`:
//! an `info` block (timestamps, status, user, experiment, artifact
//! location) and a `data` block whose `params`/`metrics`/`tags` arrive
//! either as key→value objects or as `[{key, value}]` lists. Both shapes
//! collapse through the mapper's normalizer. Timestamps may arrive as
//! integers or numeric strings; metric values as numbers or the strings
//! "NaN"/"Infinity"/"-Infinity".

use aimbridge_core::{Error, Result, RunRecord};
use aimbridge_mapper::normalize::{normalize, EpochMillis, KvPayload, MetricValue};
use serde::Deserialize;

/// Top-level response envelope
#[derive(Debug, Clone, Deserialize)]
pub struct RunEnvelope {
    /// The requested run
    pub run: RunWire,
}

/// One run as found on the wire
#[derive(Debug, Clone, Deserialize)]
pub struct RunWire {
    /// Lifecycle and ownership info
    pub info: RunInfoWire,
    /// The three key/value bags; absent means all empty
    #[serde(default)]
    pub data: RunDataWire,
}

/// The `info` block
#[derive(Debug, Clone, Deserialize)]
pub struct RunInfoWire {
    /// Run identifier; servers may emit `run_uuid` alongside or instead
    #[serde(default)]
    pub run_id: Option<String>,
    /// Legacy run identifier
    #[serde(default)]
    pub run_uuid: Option<String>,
    /// Start, epoch milliseconds
    #[serde(default)]
    pub start_time: Option<EpochMillis>,
    /// End, epoch milliseconds; absent while the run is active
    #[serde(default)]
    pub end_time: Option<EpochMillis>,
    /// Lifecycle status string
    #[serde(default)]
    pub status: Option<String>,
    /// Owning user
    #[serde(default)]
    pub user_id: Option<String>,
    /// Experiment the run belongs to
    #[serde(default)]
    pub experiment_id: Option<String>,
    /// Artifact storage location
    #[serde(default)]
    pub artifact_uri: Option<String>,
}

/// The `data` block
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RunDataWire {
    /// Recorded parameters
    #[serde(default)]
    pub params: Option<KvPayload<String>>,
    /// Recorded metrics (latest value per key)
    #[serde(default)]
    pub metrics: Option<KvPayload<MetricValue>>,
    /// Recorded tags
    #[serde(default)]
    pub tags: Option<KvPayload<String>>,
}

impl RunEnvelope {
    /// Normalize the wire shape into a [`RunRecord`]
    ///
    /// # Errors
    ///
    /// Fails when the info block carries no run identifier under either
    /// `run_id` or `run_uuid`.
    pub fn into_record(self) -> Result<RunRecord> {
        let RunWire { info, data } = self.run;
        let run_id = info
            .run_id
            .or(info.run_uuid)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| {
                Error::MalformedResponse("run info carries no run identifier".to_string())
            })?;
        Ok(RunRecord {
            run_id,
            start_time: info.start_time.as_ref().and_then(EpochMillis::to_millis),
            end_time: info.end_time.as_ref().and_then(EpochMillis::to_millis),
            status: info.status,
            user_id: info.user_id,
            experiment_id: info.experiment_id,
            artifact_uri: info.artifact_uri,
            params: normalize(data.params),
            metrics: normalize(data.metrics)
                .into_iter()
                .map(|(key, value)| (key, value.to_f64()))
                .collect(),
            tags: normalize(data.tags),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_shaped_response() {
        let body = r#"{
            "run": {
                "info": {
                    "run_id": "run-1",
                    "start_time": 1700000000000,
                    "end_time": "1700000100000",
                    "status": "FINISHED",
                    "user_id": "alice",
                    "experiment_id": "7",
                    "artifact_uri": "s3://bucket/artifacts"
                },
                "data": {
                    "params": [
                        {"key": "alpha", "value": "0.1"},
                        {"key": "alpha", "value": "0.2"}
                    ],
                    "metrics": [
                        {"key": "accuracy", "value": 0.97},
                        {"key": "loss", "value": "NaN"}
                    ],
                    "tags": [{"key": "mlflow.runName", "value": "iris"}]
                }
            }
        }"#;

        let envelope: RunEnvelope = serde_json::from_str(body).unwrap();
        let record = envelope.into_record().unwrap();

        assert_eq!(record.run_id, "run-1");
        assert_eq!(record.start_time, Some(1_700_000_000_000));
        assert_eq!(record.end_time, Some(1_700_000_100_000));
        assert_eq!(record.params["alpha"], "0.2");
        assert_eq!(record.metrics["accuracy"], 0.97);
        assert!(record.metrics["loss"].is_nan());
        assert_eq!(record.tags["mlflow.runName"], "iris");
    }

    #[test]
    fn test_map_shaped_response() {
        let body = r#"{
            "run": {
                "info": {"run_id": "run-2"},
                "data": {
                    "params": {"alpha": "0.1"},
                    "metrics": {"accuracy": 0.5},
                    "tags": {"description": "a model"}
                }
            }
        }"#;

        let envelope: RunEnvelope = serde_json::from_str(body).unwrap();
        let record = envelope.into_record().unwrap();

        assert_eq!(record.params["alpha"], "0.1");
        assert_eq!(record.metrics["accuracy"], 0.5);
        assert_eq!(record.tags["description"], "a model");
        assert_eq!(record.start_time, None);
    }

    #[test]
    fn test_missing_data_block_means_empty_bags() {
        let body = r#"{"run": {"info": {"run_uuid": "legacy-run"}}}"#;
        let envelope: RunEnvelope = serde_json::from_str(body).unwrap();
        let record = envelope.into_record().unwrap();

        assert_eq!(record.run_id, "legacy-run");
        assert!(record.params.is_empty());
        assert!(record.metrics.is_empty());
        assert!(record.tags.is_empty());
    }

    #[test]
    fn test_duplicate_identifiers_prefer_run_id() {
        let body = r#"{"run": {"info": {"run_uuid": "legacy", "run_id": "modern"}}}"#;
        let envelope: RunEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.into_record().unwrap().run_id, "modern");
    }

    #[test]
    fn test_missing_identifier_is_malformed() {
        let body = r#"{"run": {"info": {"status": "FINISHED"}}}"#;
        let envelope: RunEnvelope = serde_json::from_str(body).unwrap();
        let err = envelope.into_record().unwrap_err();
        assert!(err.to_string().contains("run identifier"));
    }

    #[test]
    fn test_missing_run_block_is_an_error() {
        let body = r#"{"error_code": "RESOURCE_DOES_NOT_EXIST"}"#;
        assert!(serde_json::from_str::<RunEnvelope>(body).is_err());
    }
}
