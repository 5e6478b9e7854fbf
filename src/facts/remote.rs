//! Remote Raspberry Pi SoC temperature, queried over a configured
//! connection command (typically ssh) running the VideoCore tool.

use tokio::process::Command;

use crate::error::{Error, Result};
use crate::facts::celsius_to_fahrenheit;

const VCGENCMD: &str = "/opt/vc/bin/vcgencmd";
const MEASURE_TEMP: &str = "measure_temp";

const TEMP_PREFIX: &str = "temp=";
const TEMP_SUFFIX: &str = "'C";

/// Connection command for the remote device, split into argv form.
#[derive(Debug, Clone)]
pub struct RemoteProbe {
    command: Vec<String>,
}

impl RemoteProbe {
    /// Builds a probe from a whitespace-separated connection command.
    /// A blank command yields no probe.
    pub fn new(connect_command: &str) -> Option<Self> {
        let command: Vec<String> = connect_command
            .split_whitespace()
            .map(str::to_string)
            .collect();
        if command.is_empty() {
            None
        } else {
            Some(Self { command })
        }
    }

    /// Runs `vcgencmd measure_temp` on the remote device and converts the
    /// reported Celsius value to Fahrenheit.
    pub async fn temperature(&self) -> Result<f64> {
        let output = Command::new(&self.command[0])
            .args(&self.command[1..])
            .arg(VCGENCMD)
            .arg(MEASURE_TEMP)
            .output()
            .await
            .map_err(|e| Error::Remote(format!("{}: {e}", self.command[0])))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Remote(format!(
                "{} exited with {}: {}",
                self.command[0],
                output.status,
                stderr.trim()
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let celsius = parse_measure_temp(stdout.trim())?;
        Ok(celsius_to_fahrenheit(celsius))
    }
}

/// Parses the exact `temp=<float>'C` response format.
fn parse_measure_temp(response: &str) -> Result<f64> {
    let body = response
        .strip_prefix(TEMP_PREFIX)
        .ok_or_else(|| Error::Parse(format!("missing {TEMP_PREFIX:?} prefix: {response:?}")))?;
    let value = body
        .strip_suffix(TEMP_SUFFIX)
        .ok_or_else(|| Error::Parse(format!("missing {TEMP_SUFFIX:?} suffix: {response:?}")))?;
    value
        .parse()
        .map_err(|_| Error::Parse(format!("not a temperature: {response:?}")))
}
