//! Per-device orchestration and batch fan-out

pub mod device;
pub mod orchestrator;
pub mod result;

pub use device::DeviceConfiguration;
pub use orchestrator::{lower_batch, lower_device, LoweringPipeline};
pub use result::{DeviceOutcome, LoweredDevice};
