//! # Connectivity Tool
//!
//! Owns the candidate list, the status map and the sticky state, and
//! answers "online?" with a cheap race:
//!
//! ```text
//! shuffle(candidates) ─► drop sticky ─► take 2 ─► + sticky ─► race
//!                                                             │
//!                              first success ─► online=true ◄─┘
//!                              all failed    ─► online=false
//! ```
//!
//! Probes of a race run as their own tasks. When the race is decided the
//! remaining join handles are dropped, which detaches the tasks: they run to
//! completion and still record their Status, but cannot touch the settled
//! result.
//!
//! Locks are `parking_lot` and are never held across an `.await`.

use crate::adapters::TokioTcpConnector;
use crate::domain::{
    BlacklistPolicy, CustomKind, Customization, HostCatalog, LocaleTable, NetCheckConfig,
    ProbeFailure, Status, StatusMap,
};
use crate::ports::{ConnectivityApi, TcpConnector};
use crate::service::probe::ProbeEngine;
use async_trait::async_trait;
use futures::future::join_all;
use futures::stream::{FuturesUnordered, StreamExt};
use parking_lot::{Mutex, RwLock};
use rand::seq::SliceRandom;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Fresh random candidates sampled per online check.
const RACE_SAMPLE_SIZE: usize = 2;

/// Result of the previous online check.
#[derive(Debug, Default)]
struct Sticky {
    last_online: bool,
    last_connected: Option<String>,
}

struct Inner {
    engine: ProbeEngine,
    policy: BlacklistPolicy,
    catalog: RwLock<HostCatalog>,
    statuses: Mutex<StatusMap>,
    sticky: Mutex<Sticky>,
}

impl Inner {
    async fn check(&self, source: &str) -> Result<Status, ProbeFailure> {
        self.statuses
            .lock()
            .entry(source.to_string())
            .or_insert_with(|| Status::new(source));
        debug!("[netcheck] Probing {}", source);

        let outcome = self.engine.probe(source).await;

        let snapshot = {
            let mut statuses = self.statuses.lock();
            let status = statuses
                .entry(source.to_string())
                .or_insert_with(|| Status::new(source));
            match &outcome {
                Ok(latency) => status.record_success(latency.as_millis() as i64),
                Err(error) => status.record_failure(error.to_string()),
            }
            status.clone()
        };

        match outcome {
            Ok(_) => {
                debug!("[netcheck] {} reachable in {}ms", source, snapshot.time);
                Ok(snapshot)
            }
            Err(error) => {
                debug!("[netcheck] {} unreachable: {}", source, error);
                self.suggest_blacklist(&snapshot);
                Err(ProbeFailure {
                    error,
                    status: snapshot,
                })
            }
        }
    }

    fn suggest_blacklist(&self, status: &Status) {
        if !self.policy.should_blacklist(status) {
            return;
        }
        let mut catalog = self.catalog.write();
        if catalog.is_blacklisted(&status.source) {
            return;
        }
        catalog.add_one(CustomKind::Black, &status.source);
        info!(
            "[netcheck] Blacklisted {} after {} failures without a success",
            status.source, status.failed
        );
    }

    /// Probe set for one online check: up to two shuffled candidates plus
    /// the sticky endpoint, if it is still a candidate.
    fn sample(&self) -> Vec<String> {
        let mut list = self.catalog.read().candidates().to_vec();

        let (last_online, last_connected) = {
            let sticky = self.sticky.lock();
            (sticky.last_online, sticky.last_connected.clone())
        };
        // A sticky endpoint that has since been blacklisted is not probed.
        let sticky = last_connected.filter(|s| last_online && list.contains(s));

        list.shuffle(&mut rand::thread_rng());
        if let Some(sticky) = &sticky {
            list.retain(|c| c != sticky);
        }
        list.truncate(RACE_SAMPLE_SIZE);
        list.extend(sticky);
        list
    }
}

/// Connectivity checker.
///
/// Each instance owns its candidate list, status map and sticky state;
/// two instances never share anything.
pub struct ConnectivityTool {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for ConnectivityTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectivityTool")
            .field("engine", &self.inner.engine)
            .field("catalog", &*self.inner.catalog.read())
            .field("statuses", &self.inner.statuses.lock().len())
            .finish()
    }
}

impl Default for ConnectivityTool {
    fn default() -> Self {
        Self::new(NetCheckConfig::default())
    }
}

impl ConnectivityTool {
    /// Create a tool probing over real TCP with the built-in locale table.
    pub fn new(config: NetCheckConfig) -> Self {
        Self::with_connector(config, Arc::new(TokioTcpConnector::new()))
    }

    /// Create a tool over a custom connector.
    pub fn with_connector(config: NetCheckConfig, connector: Arc<dyn TcpConnector>) -> Self {
        Self::with_parts(config, connector, LocaleTable::builtin())
    }

    /// Create a tool over a custom connector and locale table.
    pub fn with_parts(
        config: NetCheckConfig,
        connector: Arc<dyn TcpConnector>,
        locales: LocaleTable,
    ) -> Self {
        let tool = Self {
            inner: Arc::new(Inner {
                engine: ProbeEngine::new(connector, config.timeout()),
                policy: config.blacklist_policy(),
                catalog: RwLock::new(HostCatalog::new(locales)),
                statuses: Mutex::new(StatusMap::new()),
                sticky: Mutex::new(Sticky::default()),
            }),
        };
        tool.apply_config(&config);
        tool
    }

    /// Apply language, special and black options. Empty values are ignored.
    ///
    /// Timeout and blacklist threshold are fixed at construction.
    pub fn apply_config(&self, config: &NetCheckConfig) {
        if let Some(language) = config.language.as_deref().filter(|l| !l.is_empty()) {
            self.set_language(language);
        }
        self.add_custom_many(CustomKind::Special, &config.special);
        self.add_custom_many(CustomKind::Black, &config.black);
    }

    /// Select a locale profile; recomputes the candidate list if it changed.
    pub fn set_language(&self, tag: &str) {
        self.inner.catalog.write().set_language(tag);
    }

    /// Append one endpoint to a customization list.
    pub fn add_custom(&self, kind: CustomKind, endpoint: &str) {
        self.inner.catalog.write().add_one(kind, endpoint);
    }

    /// Append a batch of endpoints to a customization list.
    pub fn add_custom_many(&self, kind: CustomKind, endpoints: &[String]) {
        self.inner
            .catalog
            .write()
            .add_many(kind, endpoints.iter().cloned());
    }

    /// Active locale tag.
    pub fn language(&self) -> String {
        self.inner.catalog.read().language().to_string()
    }

    /// Current candidate list.
    pub fn candidates(&self) -> Vec<String> {
        self.inner.catalog.read().candidates().to_vec()
    }

    /// Runtime customization, including auto-blacklisted endpoints.
    pub fn customization(&self) -> Customization {
        self.inner.catalog.read().customization().clone()
    }

    /// Result of the previous online check.
    pub fn last_online(&self) -> bool {
        self.inner.sticky.lock().last_online
    }

    /// Endpoint that won the most recent successful online check.
    pub fn last_connected(&self) -> Option<String> {
        self.inner.sticky.lock().last_connected.clone()
    }

    /// Probe timeout.
    pub fn timeout(&self) -> Duration {
        self.inner.engine.timeout()
    }

    /// Status of one endpoint, if it was ever probed.
    pub fn status_of(&self, endpoint: &str) -> Option<Status> {
        self.inner.statuses.lock().get(endpoint).cloned()
    }

    /// Probe a single endpoint reference and record the outcome.
    ///
    /// A failure also runs the auto-blacklist policy.
    pub async fn check(&self, endpoint: &str) -> Result<Status, ProbeFailure> {
        self.inner.check(endpoint).await
    }

    /// Race a sample of candidates; true as soon as any connects.
    pub async fn is_online(&self) -> bool {
        let probe_set = self.inner.sample();
        debug!("[netcheck] Online check racing {:?}", probe_set);

        let mut race: FuturesUnordered<_> = probe_set
            .into_iter()
            .map(|source| {
                let inner = Arc::clone(&self.inner);
                tokio::spawn(async move { inner.check(&source).await })
            })
            .collect();

        let mut winner = None;
        while let Some(joined) = race.next().await {
            match joined {
                Ok(Ok(status)) => {
                    winner = Some(status.source);
                    break;
                }
                Ok(Err(_)) => {}
                Err(e) => warn!("[netcheck] Probe task did not complete: {}", e),
            }
        }
        // Detach the losers; they keep recording Status.
        drop(race);

        let online = winner.is_some();
        let mut sticky = self.inner.sticky.lock();
        if online != sticky.last_online {
            info!(
                "[netcheck] Connectivity changed: {}",
                if online { "online" } else { "offline" }
            );
        }
        if let Some(winner) = winner {
            sticky.last_connected = Some(winner);
        }
        sticky.last_online = online;
        online
    }

    /// Status of every candidate.
    ///
    /// Returns the existing map if it already holds at least as many entries
    /// as there are candidates; otherwise probes all candidates concurrently
    /// and waits for every probe to finish.
    pub async fn get_status(&self) -> StatusMap {
        let candidates = self.candidates();
        let known = self.inner.statuses.lock().len();

        if known < candidates.len() {
            let results = join_all(candidates.iter().map(|c| self.inner.check(c))).await;
            let reachable = results.iter().filter(|r| r.is_ok()).count();
            debug!(
                "[netcheck] Status sweep: {}/{} candidates reachable",
                reachable,
                results.len()
            );
        }

        self.inner.statuses.lock().clone()
    }
}

#[async_trait]
impl ConnectivityApi for ConnectivityTool {
    fn set_language(&self, tag: &str) {
        ConnectivityTool::set_language(self, tag)
    }

    fn add_custom(&self, kind: CustomKind, endpoint: &str) {
        ConnectivityTool::add_custom(self, kind, endpoint)
    }

    fn add_custom_many(&self, kind: CustomKind, endpoints: &[String]) {
        ConnectivityTool::add_custom_many(self, kind, endpoints)
    }

    async fn check(&self, endpoint: &str) -> Result<Status, ProbeFailure> {
        ConnectivityTool::check(self, endpoint).await
    }

    async fn is_online(&self) -> bool {
        ConnectivityTool::is_online(self).await
    }

    async fn get_status(&self) -> StatusMap {
        ConnectivityTool::get_status(self).await
    }
}
