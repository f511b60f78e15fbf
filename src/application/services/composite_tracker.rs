//! # Composite Tracker
//!
//! Tracks a shipment across every configured carrier at once.
//!
//! A tracking number rarely says which carrier owns it, so the composite
//! asks all of them concurrently and settles every call before selecting a
//! result. One slow or failing carrier never blocks or poisons the answers
//! from the others.
//!
//! # Result Selection
//!
//! Fulfilled per-carrier result lists form the candidate pool, kept in
//! carrier-configuration order. The first `Success`-status result wins,
//! scanning pool order then within-list order. When no carrier reports
//! success, the first result in the flattened pool is returned even though
//! it is an error — the composite always answers with something. When the
//! pool is empty, the designated
//! [`TrackingResult::not_found`] outcome is returned.
//!
//! Failed carrier calls are dropped from the pool entirely and surface only
//! as warn-level log events; callers that need per-carrier diagnostics must
//! call the carriers directly.

use crate::domain::entities::{TrackingOptions, TrackingResult};
use crate::infrastructure::carriers::CarrierService;
use futures::future::join_all;
use std::sync::Arc;
use tracing::{debug, warn};

/// Fans tracking queries out to every configured carrier.
///
/// Holds an ordered sequence of carrier references fixed at construction
/// and no carrier-specific state.
#[derive(Debug, Clone)]
pub struct CompositeTracker {
    carriers: Vec<Arc<dyn CarrierService>>,
}

impl CompositeTracker {
    /// Creates a tracker over the given carriers.
    ///
    /// The order given here is the selection-scan order.
    #[must_use]
    pub fn new(carriers: Vec<Arc<dyn CarrierService>>) -> Self {
        Self { carriers }
    }

    /// Returns the configured carriers in order.
    #[inline]
    #[must_use]
    pub fn carriers(&self) -> &[Arc<dyn CarrierService>] {
        &self.carriers
    }

    /// Tracks one number across all configured carriers.
    ///
    /// Issues one concurrent call per carrier, waits for every call to
    /// reach a terminal state, and selects a result per the policy
    /// described at the module level. Never returns an error: total
    /// failure yields [`TrackingResult::not_found`].
    pub async fn get_tracking_status(
        &self,
        tracking_number: &str,
        options: &TrackingOptions,
    ) -> TrackingResult {
        debug!(
            tracking_number,
            carriers = self.carriers.len(),
            "fanning out tracking query"
        );

        let mut handles = Vec::with_capacity(self.carriers.len());
        for carrier in &self.carriers {
            let carrier = Arc::clone(carrier);
            let numbers = vec![tracking_number.to_owned()];
            let options = options.clone();
            handles.push(tokio::spawn(async move {
                carrier.get_tracking_status(&numbers, &options).await
            }));
        }

        // Settle all: join_all waits for every task, so a failing carrier
        // never cancels its siblings.
        let mut pool: Vec<Vec<TrackingResult>> = Vec::with_capacity(self.carriers.len());
        for (outcome, carrier) in join_all(handles).await.into_iter().zip(&self.carriers) {
            match outcome {
                Ok(Ok(results)) => pool.push(results),
                Ok(Err(error)) => warn!(
                    vendor = %carrier.vendor(),
                    %error,
                    "carrier tracking call failed, dropped from candidate pool"
                ),
                Err(error) => warn!(
                    vendor = %carrier.vendor(),
                    %error,
                    "carrier tracking task failed, dropped from candidate pool"
                ),
            }
        }

        for results in &pool {
            if let Some(result) = results.iter().find(|r| r.is_success()) {
                return result.clone();
            }
        }

        // No success anywhere: hand back the first result regardless of
        // its status, or the designated empty outcome for an empty pool.
        pool.iter()
            .flat_map(|results| results.iter())
            .next()
            .cloned()
            .unwrap_or_else(|| TrackingResult::not_found(tracking_number))
    }
}
