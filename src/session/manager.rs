// ABOUTME: Session store and submission orchestration over the enrichment client
// ABOUTME: DashMap session table, spawned producer batch, single reducer task per submission
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Solstice Life Stats

use std::sync::Arc;

use chrono::Utc;
use dashmap::DashMap;
use tokio::sync::{mpsc, RwLock};
use tracing::{debug, info, warn};
use uuid::Uuid;

use solstice_core::errors::{AppError, AppResult};
use solstice_core::geo::GeoPosition;
use solstice_core::models::{NearbySite, UserProfile};

use crate::enrichment::EnrichmentService;
use crate::llm::ChatMessage;
use crate::session::report::{EnrichmentUpdate, LifeReport, TaggedUpdate};

/// Buffer size for the reducer channel; four primary producers plus slack
const UPDATE_CHANNEL_CAPACITY: usize = 8;

/// Session store and orchestrator
///
/// Holds one [`LifeReport`] per session behind a shared lock. The lock object
/// lives as long as the session, so producer batches started before a
/// resubmission still reach it; their updates are then dropped by the
/// submission-id check rather than merged.
pub struct SessionManager {
    sessions: DashMap<Uuid, Arc<RwLock<LifeReport>>>,
    enrichment: Arc<EnrichmentService>,
}

impl SessionManager {
    /// Create a manager over an enrichment service
    #[must_use]
    pub fn new(enrichment: Arc<EnrichmentService>) -> Self {
        Self {
            sessions: DashMap::new(),
            enrichment,
        }
    }

    /// Submit a profile, creating or replacing the session's report
    ///
    /// Validates the profile, computes the deterministic parts synchronously,
    /// stores the initial snapshot, and spawns the four primary producers.
    /// Returns the session id and the immediately-displayable snapshot; the
    /// narrative fields fill in as the producers resolve.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a future birthdate, an empty country,
    /// or non-positive measurements. Enrichment failures never surface here.
    pub async fn submit(
        &self,
        session_id: Option<Uuid>,
        profile: UserProfile,
    ) -> AppResult<(Uuid, LifeReport)> {
        let now = Utc::now();
        profile.validate(now)?;

        let report = LifeReport::new(profile, now);
        let snapshot = report.clone();
        let session_id = session_id.unwrap_or_else(Uuid::new_v4);

        let shared = if let Some(existing) = self.sessions.get(&session_id) {
            let shared = Arc::clone(existing.value());
            drop(existing);
            // Replace in place; in-flight batches for the old submission keep
            // their stale id and fall through the reducer's guard.
            *shared.write().await = report;
            shared
        } else {
            let shared = Arc::new(RwLock::new(report));
            self.sessions.insert(session_id, Arc::clone(&shared));
            shared
        };

        info!(
            %session_id,
            submission_id = %snapshot.submission_id,
            days_lived = snapshot.metrics.days_lived,
            "profile submitted, starting enrichment batch"
        );

        Self::spawn_primary_batch(Arc::clone(&self.enrichment), shared, &snapshot);

        Ok((session_id, snapshot))
    }

    /// Current snapshot for a session
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` for an unknown session id.
    pub async fn snapshot(&self, session_id: Uuid) -> AppResult<LifeReport> {
        let shared = self.shared(session_id)?;
        let report = shared.read().await.clone();
        Ok(report)
    }

    /// Run a nearby-sites lookup and merge the result into the session
    ///
    /// Each invocation replaces the previous list. The merge is dropped if
    /// the session was resubmitted while the lookup was in flight.
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` for an unknown session id or
    /// `INVALID_INPUT` for out-of-bounds coordinates. Producer failures
    /// resolve to the fallback site list, not an error.
    pub async fn find_nearby(
        &self,
        session_id: Uuid,
        position: GeoPosition,
    ) -> AppResult<Vec<NearbySite>> {
        if !position.is_valid() {
            return Err(AppError::invalid_input(format!(
                "Coordinates ({}, {}) are outside valid bounds",
                position.latitude, position.longitude
            )));
        }

        let shared = self.shared(session_id)?;
        let submission_id = shared.read().await.submission_id;

        let sites = self.enrichment.nearby_sites(position).await;

        let mut report = shared.write().await;
        if report.submission_id == submission_id {
            report.apply(EnrichmentUpdate::NearbySites(sites.clone()));
        } else {
            debug!(
                %session_id,
                stale_submission = %submission_id,
                "dropping nearby sites for superseded submission"
            );
        }
        drop(report);

        Ok(sites)
    }

    /// Single chat completion primed with the session's report
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` for an unknown session id, or the
    /// provider's error if the completion fails.
    pub async fn chat(
        &self,
        session_id: Uuid,
        history: Vec<ChatMessage>,
        message: String,
    ) -> AppResult<String> {
        let shared = self.shared(session_id)?;
        let (profile, metrics) = {
            let report = shared.read().await;
            (report.profile.clone(), report.metrics.clone())
        };

        self.enrichment
            .chat(&profile, &metrics, history, message)
            .await
    }

    /// Number of live sessions
    #[must_use]
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    fn shared(&self, session_id: Uuid) -> AppResult<Arc<RwLock<LifeReport>>> {
        self.sessions
            .get(&session_id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| AppError::not_found(format!("session {session_id}")))
    }

    /// Spawn the four primary producers and the reducer merging their results
    ///
    /// Producers send tagged updates over a channel; the reducer is the only
    /// writer. When every sender has finished the channel closes and the
    /// completion flag is set, unless the submission was superseded
    /// meanwhile.
    fn spawn_primary_batch(
        enrichment: Arc<EnrichmentService>,
        shared: Arc<RwLock<LifeReport>>,
        snapshot: &LifeReport,
    ) {
        let (tx, mut rx) = mpsc::channel::<TaggedUpdate>(UPDATE_CHANNEL_CAPACITY);
        let submission_id = snapshot.submission_id;

        let birth_year = snapshot.profile.birth_year();
        let birthdate = snapshot.profile.birthdate;
        let country = snapshot.profile.country.clone();
        let diet = snapshot.profile.diet;
        let age_years = snapshot.age_years();

        {
            let enrichment = Arc::clone(&enrichment);
            let tx = tx.clone();
            tokio::spawn(async move {
                let payload = enrichment.earth_changes(birth_year).await;
                let _ = tx
                    .send(TaggedUpdate {
                        submission_id,
                        update: EnrichmentUpdate::EarthChanges(payload),
                    })
                    .await;
            });
        }

        {
            let enrichment = Arc::clone(&enrichment);
            let tx = tx.clone();
            let country = country.clone();
            tokio::spawn(async move {
                let payload = enrichment
                    .environmental_impact(&country, age_years, diet)
                    .await;
                let _ = tx
                    .send(TaggedUpdate {
                        submission_id,
                        update: EnrichmentUpdate::EnvironmentalImpact(payload),
                    })
                    .await;
            });
        }

        {
            let enrichment = Arc::clone(&enrichment);
            let tx = tx.clone();
            tokio::spawn(async move {
                let payload = enrichment.cosmic_perspective(birthdate).await;
                let _ = tx
                    .send(TaggedUpdate {
                        submission_id,
                        update: EnrichmentUpdate::CosmicPerspective(payload),
                    })
                    .await;
            });
        }

        {
            let enrichment = Arc::clone(&enrichment);
            tokio::spawn(async move {
                let payload = enrichment.fun_facts(age_years, &country).await;
                let _ = tx
                    .send(TaggedUpdate {
                        submission_id,
                        update: EnrichmentUpdate::FunFacts(payload),
                    })
                    .await;
            });
        }

        tokio::spawn(async move {
            while let Some(tagged) = rx.recv().await {
                let mut report = shared.write().await;
                if report.submission_id == tagged.submission_id {
                    debug!(
                        field = tagged.update.field_name(),
                        submission_id = %tagged.submission_id,
                        "merging enrichment update"
                    );
                    report.apply(tagged.update);
                } else {
                    warn!(
                        field = tagged.update.field_name(),
                        stale_submission = %tagged.submission_id,
                        "dropping enrichment update for superseded submission"
                    );
                }
            }

            let mut report = shared.write().await;
            if report.submission_id == submission_id && report.primary_fields_resolved() {
                report.enrichment_complete = true;
                info!(submission_id = %submission_id, "primary enrichment batch complete");
            }
        });
    }
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("sessions", &self.sessions.len())
            .finish_non_exhaustive()
    }
}
