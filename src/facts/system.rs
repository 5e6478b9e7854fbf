//! Disk, CPU and memory usage fractions via `sysinfo`.

use std::path::Path;
use std::time::Duration;

use sysinfo::{CpuExt, DiskExt, System, SystemExt};

use crate::error::{Error, Result};

const ROOT_MOUNT: &str = "/";

/// CPU load is a delta between two refreshes; this is the gap between them.
const CPU_SAMPLE_INTERVAL: Duration = Duration::from_millis(200);

/// Used fraction of the root filesystem, in `[0, 1]`.
pub fn disk_usage() -> Result<f64> {
    let mut sys = System::new();
    sys.refresh_disks_list();
    sys.refresh_disks();

    let disk = sys
        .disks()
        .iter()
        .find(|d| d.mount_point() == Path::new(ROOT_MOUNT))
        .ok_or_else(|| Error::Sensor(format!("no disk mounted at {ROOT_MOUNT}")))?;

    let total = disk.total_space();
    if total == 0 {
        return Err(Error::Sensor(format!("{ROOT_MOUNT} reports zero capacity")));
    }
    let used = total - disk.available_space();
    Ok(used as f64 / total as f64)
}

/// Global CPU utilization, normalized from percent to `[0, 1]`.
pub async fn cpu_usage() -> Result<f64> {
    let mut sys = System::new();
    sys.refresh_cpu();
    tokio::time::sleep(CPU_SAMPLE_INTERVAL).await;
    sys.refresh_cpu();

    Ok(f64::from(sys.global_cpu_info().cpu_usage()) / 100.0)
}

/// Used fraction of system memory, in `[0, 1]`.
pub fn memory_usage() -> Result<f64> {
    let mut sys = System::new();
    sys.refresh_memory();

    let total = sys.total_memory();
    if total == 0 {
        return Err(Error::Sensor("total memory reported as zero".into()));
    }
    Ok(sys.used_memory() as f64 / total as f64)
}
