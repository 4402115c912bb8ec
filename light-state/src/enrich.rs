//! Per-light detail enrichment
//!
//! The bulk listing does not reliably carry `on` or `brightness`, so each
//! light is fetched individually and those two fields are filled in from the
//! detail record. Fetches run one after another; a failure for one light is
//! logged and the rest are still processed.

use lights_client::{LightDetail, LightSource};
use tracing::{debug, warn};

use crate::brightness;
use crate::model::{Light, LightField, Snapshot};

/// Counts from one enrichment pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnrichReport {
    /// Lights whose detail fetch succeeded
    pub enriched: usize,
    /// Lights whose detail fetch failed
    pub failed: usize,
    /// Expected fields absent from successful detail records
    pub missing_fields: usize,
}

/// Fill `on`/`brightness` for every light in `snapshot`
///
/// When a light ends up without a value (failed fetch and nothing in the
/// listing), the value from `previous` is kept if that snapshot knows the
/// light. Nothing is ever defaulted.
pub fn enrich<S>(snapshot: &mut Snapshot, source: &S, previous: Option<&Snapshot>) -> EnrichReport
where
    S: LightSource + ?Sized,
{
    let mut report = EnrichReport::default();

    for light in snapshot.iter_mut() {
        match source.fetch_one(light.id.as_str()) {
            Ok(detail) => {
                report.missing_fields += apply_detail(light, &detail);
                report.enriched += 1;
            }
            Err(e) => {
                warn!("Single light state query for light {} failed: {}", light.id, e);
                report.failed += 1;
            }
        }

        if let Some(prior) = previous.and_then(|p| p.get(&light.id)) {
            light.carry_over(prior);
        }
    }

    debug!(
        "Enriched {} light(s), {} failed, {} missing field(s)",
        report.enriched, report.failed, report.missing_fields
    );
    report
}

/// Copy the detail values onto `light`, returning how many were missing
pub fn apply_detail(light: &mut Light, detail: &LightDetail) -> usize {
    let mut missing = 0;

    match detail.on {
        Some(on) => light.on = Some(on),
        None => {
            warn!("Light {} detail has no '{}' key", light.id, LightField::On);
            missing += 1;
        }
    }

    match detail.brightness {
        Some(native) => light.brightness = Some(brightness::to_percentage(native)),
        None => {
            warn!("Light {} detail has no '{}' key", light.id, LightField::Brightness);
            missing += 1;
        }
    }

    missing
}
