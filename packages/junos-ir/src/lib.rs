/*
 * junos-ir - Junos configuration IR and lowering engine
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Leaf value types (prefixes, ranges, protocols), diagnostics
 * - target/      : Vendor-independent output IR
 * - features/    : Vertical slices (applications → firewall, policy, nat, ...)
 * - config/      : Presets, sections, YAML
 * - pipeline/    : Per-device orchestration and batch fan-out
 *
 * Lowering is deterministic: the same snapshot always yields the same
 * output, in the same order.
 */

// Crate-level lint configuration
#![allow(clippy::too_many_arguments)] // Lowering entry points carry registry + config + sink
#![allow(clippy::should_implement_trait)] // Preset::from_str naming intentional
#![allow(clippy::new_without_default)] // Default impl not always needed
#![allow(clippy::large_enum_variant)] // IR variants are built once per device
#![allow(clippy::let_and_return)] // cfg-gated collection in the pipeline

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models and diagnostics
pub mod shared;

/// Vendor-independent lowering target
pub mod target;

/// Feature slices (one per IR category)
pub mod features;

/// Pipeline orchestration
pub mod pipeline;

/// Configuration system
pub mod config;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use errors::{LoweringError, Result};
pub use features::resolution::{ConfigurationRegistry, Registry, RegistryBuilder};
pub use pipeline::{lower_batch, lower_device, DeviceConfiguration, LoweredDevice, LoweringPipeline};
pub use shared::diagnostics::{Diagnostic, Severity, Warnings};
