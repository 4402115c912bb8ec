//! Home Lights State
//!
//! Snapshot tracking and change detection for lights exposed by the home
//! lights REST API.
//!
//! # Architecture
//!
//! ```text
//! LightSource ──fetch_all──▶ Snapshot ──enrich (fetch_one per light)──┐
//!                                                                     ▼
//!                     SnapshotStore { current, incoming } ──reconcile──▶ ChangeQueue
//!                                                             │
//!                                                             └──▶ removal notices
//! ```
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use light_state::LightMonitor;
//! use lights_client::LightsClient;
//!
//! let mut monitor = LightMonitor::new(LightsClient::new("localhost", 8080));
//! loop {
//!     monitor.poll(|removed| println!("{}", removed))?;
//!     while let Some(change) = monitor.next_change() {
//!         println!("{}", serde_json::to_string_pretty(&change)?);
//!     }
//!     std::thread::sleep(std::time::Duration::from_millis(100));
//! }
//! ```

pub mod brightness;
pub mod enrich;
pub mod error;
pub mod logging;
pub mod model;
pub mod monitor;
pub mod queue;
pub mod reconcile;
pub mod store;

pub use enrich::{enrich, EnrichReport};
pub use error::{Result, StateError};
pub use model::{ChangeEvent, FieldChange, Light, LightField, LightId, Removed, Snapshot};
pub use monitor::{LightMonitor, PollOutcome};
pub use queue::ChangeQueue;
pub use reconcile::{diff, ReconcileSummary};
pub use store::SnapshotStore;
