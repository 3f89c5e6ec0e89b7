//! pulsar: a triangle whose color pulses through a per-frame uniform write.
//!
//! Press Escape to quit.

mod app;
mod triangle;

use anyhow::Result;
use winit::dpi::LogicalSize;

use pulsar_engine::device::GpuInit;
use pulsar_engine::logging::{init_logging, LoggingConfig};
use pulsar_engine::window::{Runtime, RuntimeConfig};

use crate::app::PulseApp;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title: "pulsar".to_string(),
        initial_size: LogicalSize::new(800.0, 600.0),
    };

    Runtime::run(config, GpuInit::default(), PulseApp::new())
}
