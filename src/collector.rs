//! The collection pass: sample each enabled fact, insert what succeeds,
//! and account for what fails.

use log::{debug, info, warn};

use crate::error::{Error, Result};
use crate::facts::{Fact, Sampler};
use crate::store::FactSink;

/// Samples `facts` in order and inserts one row per successful reading.
///
/// A sampling failure is recorded by name and the pass continues, unless
/// `raise_on_error` is set, in which case it propagates immediately. After
/// the pass, any recorded failures fail the run as one aggregated error.
/// Insert failures are database errors and abort the run in either mode.
pub async fn collect(
    facts: &[Fact],
    sampler: &dyn Sampler,
    sink: &dyn FactSink,
    raise_on_error: bool,
) -> Result<()> {
    let mut failed: Vec<&'static str> = Vec::new();

    for &fact in facts {
        match sampler.sample(fact).await {
            Ok(value) => {
                sink.insert(fact, value).await?;
                debug!("recorded {fact} = {value}");
            }
            Err(err) if raise_on_error => return Err(err),
            Err(err) => {
                warn!("sampling {fact} failed: {err}");
                failed.push(fact.name());
            }
        }
    }

    info!("recorded {} of {} facts", facts.len() - failed.len(), facts.len());
    if failed.is_empty() {
        Ok(())
    } else {
        Err(Error::FactsFailed(failed))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;

    /// Succeeds with a fixed value except for the facts told to fail.
    struct ScriptedSampler {
        failing: HashSet<Fact>,
    }

    impl ScriptedSampler {
        fn failing(facts: &[Fact]) -> Self {
            Self {
                failing: facts.iter().copied().collect(),
            }
        }
    }

    #[async_trait]
    impl Sampler for ScriptedSampler {
        async fn sample(&self, fact: Fact) -> Result<f64> {
            if self.failing.contains(&fact) {
                Err(Error::Sensor(format!("{fact} is down")))
            } else {
                Ok(0.5)
            }
        }
    }

    #[derive(Default)]
    struct MemorySink {
        rows: Mutex<Vec<(Fact, f64)>>,
    }

    impl MemorySink {
        fn rows(&self) -> Vec<(Fact, f64)> {
            self.rows.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl FactSink for MemorySink {
        async fn insert(&self, fact: Fact, value: f64) -> Result<()> {
            self.rows.lock().unwrap().push((fact, value));
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_clean_pass() {
        let facts = Fact::enabled(false);
        let sink = MemorySink::default();

        collect(&facts, &ScriptedSampler::failing(&[]), &sink, false)
            .await
            .unwrap();

        let rows = sink.rows();
        assert_eq!(rows.len(), 5);
        for (row, fact) in rows.iter().zip(&facts) {
            assert_eq!(row.0, *fact);
        }
    }

    #[tokio::test]
    async fn test_failures_aggregated() {
        let facts = Fact::enabled(false);
        let sampler =
            ScriptedSampler::failing(&[Fact::GpuTemperature, Fact::CpuTemperature]);
        let sink = MemorySink::default();

        let err = collect(&facts, &sampler, &sink, false).await.unwrap_err();

        match err {
            Error::FactsFailed(names) => assert_eq!(names, ["gpu_temp_f", "cpu_temp_f"]),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(sink.rows().len(), 3);
    }

    #[tokio::test]
    async fn test_raise_mode_aborts() {
        let facts = Fact::enabled(false);
        let sampler = ScriptedSampler::failing(&[Fact::DiskUsage]);
        let sink = MemorySink::default();

        let err = collect(&facts, &sampler, &sink, true).await.unwrap_err();

        assert!(matches!(err, Error::Sensor(_)));
        assert!(sink.rows().is_empty());
    }

    #[tokio::test]
    async fn test_raise_mode_keeps_prior_rows() {
        let facts = Fact::enabled(false);
        let sampler = ScriptedSampler::failing(&[Fact::MemoryUsage]);
        let sink = MemorySink::default();

        collect(&facts, &sampler, &sink, true).await.unwrap_err();

        let inserted: Vec<Fact> = sink.rows().iter().map(|r| r.0).collect();
        assert_eq!(inserted, [Fact::DiskUsage, Fact::CpuUsage]);
    }

    #[tokio::test]
    async fn test_remote_fact_enabled() {
        let facts = Fact::enabled(true);
        let sampler = ScriptedSampler::failing(&[Fact::RemoteTemperature]);
        let sink = MemorySink::default();

        let err = collect(&facts, &sampler, &sink, false).await.unwrap_err();

        match err {
            Error::FactsFailed(names) => assert_eq!(names, ["rpi_temp_f"]),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(sink.rows().len(), 5);
    }
}
