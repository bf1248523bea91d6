//! File loaders for gauge inputs.
//!
//! The host normally hands snapshots over in memory. These loaders cover the
//! offline paths: evaluating an exported combat snapshot, replaying a recorded
//! sequence of host events, and reading gauge settings.
//!
//! Snapshots may be RON, TOML or JSON (chosen by file extension); settings
//! are always TOML. All loaders deserialize `gauge-core` types directly.

pub mod loaders;

pub use loaders::{DataFormat, EncounterLoader, LoadResult, SettingsLoader, load_document};
