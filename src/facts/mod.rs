//! The fixed set of machine health facts and how each is sampled.
//!
//! A fact is one named scalar metric about the host. The set is closed and
//! ordered; the names are part of the stored data format and must stay
//! stable across releases.

pub mod remote;
pub mod sensors;
pub mod system;

use std::fmt;

use async_trait::async_trait;

use crate::error::{Error, Result};
use self::remote::RemoteProbe;

/// One named machine health metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fact {
    DiskUsage,
    CpuUsage,
    MemoryUsage,
    GpuTemperature,
    CpuTemperature,
    RemoteTemperature,
}

impl Fact {
    /// Facts sampled from the local host, in collection order.
    pub const HOST: [Fact; 5] = [
        Fact::DiskUsage,
        Fact::CpuUsage,
        Fact::MemoryUsage,
        Fact::GpuTemperature,
        Fact::CpuTemperature,
    ];

    /// The facts enabled for a run. The remote temperature probe is appended
    /// only when a connection command is configured.
    pub fn enabled(with_remote: bool) -> Vec<Fact> {
        let mut facts = Self::HOST.to_vec();
        if with_remote {
            facts.push(Fact::RemoteTemperature);
        }
        facts
    }

    /// Name stored in the `fact_name` column.
    pub fn name(self) -> &'static str {
        match self {
            Fact::DiskUsage => "hd_use_pct",
            Fact::CpuUsage => "cpu_use_pct",
            Fact::MemoryUsage => "memory_use_pct",
            Fact::GpuTemperature => "gpu_temp_f",
            Fact::CpuTemperature => "cpu_temp_f",
            Fact::RemoteTemperature => "rpi_temp_f",
        }
    }
}

impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Source of fact values. The production implementation reads host sensors;
/// tests substitute scripted values.
#[async_trait]
pub trait Sampler: Send + Sync {
    async fn sample(&self, fact: Fact) -> Result<f64>;
}

/// Samples facts from the local host, plus the remote probe when configured.
pub struct HostSampler {
    remote: Option<RemoteProbe>,
}

impl HostSampler {
    pub fn new(remote: Option<RemoteProbe>) -> Self {
        Self { remote }
    }
}

#[async_trait]
impl Sampler for HostSampler {
    async fn sample(&self, fact: Fact) -> Result<f64> {
        match fact {
            Fact::DiskUsage => system::disk_usage(),
            Fact::CpuUsage => system::cpu_usage().await,
            Fact::MemoryUsage => system::memory_usage(),
            Fact::GpuTemperature => sensors::gpu_temperature(),
            Fact::CpuTemperature => sensors::cpu_temperature(),
            Fact::RemoteTemperature => match &self.remote {
                Some(probe) => probe.temperature().await,
                None => Err(Error::Config(format!(
                    "{} is not set",
                    crate::config::RPI_SSH_COMMAND
                ))),
            },
        }
    }
}

/// Sensor readings arrive in Celsius; stored temperatures are Fahrenheit.
pub(crate) fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 1.8 + 32.0
}
