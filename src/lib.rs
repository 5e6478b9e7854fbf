//! hostfacts - scheduled machine health logging
//!
//! Samples a fixed set of host facts (disk, CPU and memory usage fractions,
//! GPU and CPU die temperatures, optionally a remote device temperature) and
//! appends each as a timestamped row in PostgreSQL. One pass per invocation;
//! scheduling is left to cron or a systemd timer.

pub mod collector;
pub mod config;
pub mod error;
pub mod facts;
pub mod store;

pub use collector::collect;
pub use config::Config;
pub use error::{Error, Result};
pub use facts::{Fact, HostSampler, Sampler};
pub use store::{FactSink, FactStore};
