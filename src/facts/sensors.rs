//! GPU and CPU die temperatures from the hardware monitor component table.
//!
//! On Linux, `sysinfo` labels each reading `"<chip> <sensor>"`, e.g.
//! `"amdgpu edge"` or `"k10temp Tdie"`.

use sysinfo::{ComponentExt, System, SystemExt};

use crate::error::{Error, Result};
use crate::facts::celsius_to_fahrenheit;

const GPU_SENSOR_GROUP: &str = "amdgpu";
const CPU_SENSOR_GROUP: &str = "k10temp";
const CPU_DIE_LABEL: &str = "Tdie";

/// First reading of the GPU sensor group, in Fahrenheit.
pub fn gpu_temperature() -> Result<f64> {
    let celsius = first_in_group(&component_readings(), GPU_SENSOR_GROUP).ok_or_else(|| {
        Error::Sensor(format!("no {GPU_SENSOR_GROUP} temperature readings"))
    })?;
    Ok(celsius_to_fahrenheit(f64::from(celsius)))
}

/// The package die reading of the CPU sensor group, in Fahrenheit.
pub fn cpu_temperature() -> Result<f64> {
    let celsius = labeled_in_group(&component_readings(), CPU_SENSOR_GROUP, CPU_DIE_LABEL)
        .ok_or_else(|| {
            Error::Sensor(format!(
                "no {CPU_DIE_LABEL} reading among {CPU_SENSOR_GROUP} sensors"
            ))
        })?;
    Ok(celsius_to_fahrenheit(f64::from(celsius)))
}

fn component_readings() -> Vec<(String, f32)> {
    let mut sys = System::new();
    sys.refresh_components_list();
    sys.components()
        .iter()
        .map(|c| (c.label().to_string(), c.temperature()))
        .collect()
}

fn first_in_group(readings: &[(String, f32)], group: &str) -> Option<f32> {
    readings
        .iter()
        .find(|(label, _)| label.starts_with(group))
        .map(|(_, celsius)| *celsius)
}

fn labeled_in_group(readings: &[(String, f32)], group: &str, label: &str) -> Option<f32> {
    readings
        .iter()
        .find(|(l, _)| l.starts_with(group) && l.ends_with(label))
        .map(|(_, celsius)| *celsius)
}
