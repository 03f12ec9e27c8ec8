//! Throttled, ordered ephemeris refresh.
//!
//! Requests are numbered when issued. A result is applied only if its
//! number is newer than the last one applied, so a slow, older answer can
//! never overwrite a newer one.

use sphere_chart::Body;
use sphere_time::Instant;
use tracing::debug;

use crate::config::DEFAULT_EPHEMERIS_INTERVAL_MS;
use crate::ephemeris::{
    BodyPosition, BodyPositions, EphemerisProvider, RefreshReport, compute_positions,
};
use crate::error::EphemerisError;

/// An issued refresh request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTicket {
    pub sequence: u64,
    pub instant: Instant,
}

/// Provider answers for one ticket.
#[derive(Debug, Clone, PartialEq)]
pub struct RefreshResult {
    pub ticket: RefreshTicket,
    pub results: Vec<(Body, Result<BodyPosition, EphemerisError>)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EphemerisScheduler {
    interval_ms: i64,
    last_issue_ms: Option<i64>,
    next_sequence: u64,
    applied_sequence: Option<u64>,
    stale_rejected: u64,
}

impl Default for EphemerisScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_EPHEMERIS_INTERVAL_MS)
    }
}

impl EphemerisScheduler {
    pub fn new(interval_ms: i64) -> Self {
        Self {
            interval_ms: interval_ms.max(0),
            last_issue_ms: None,
            next_sequence: 0,
            applied_sequence: None,
            stale_rejected: 0,
        }
    }

    /// True once `interval_ms` of wall-clock time has passed since the
    /// last request, or if none was issued yet.
    pub fn should_refresh(&self, now_ms: i64) -> bool {
        match self.last_issue_ms {
            None => true,
            Some(last) => now_ms.saturating_sub(last) >= self.interval_ms,
        }
    }

    /// Issue a request if the throttle allows it.
    pub fn begin(&mut self, now_ms: i64, instant: Instant) -> Option<RefreshTicket> {
        self.should_refresh(now_ms).then(|| self.begin_now(now_ms, instant))
    }

    /// Issue a request regardless of the throttle, e.g. after the user
    /// sets a new date.
    pub fn begin_now(&mut self, now_ms: i64, instant: Instant) -> RefreshTicket {
        self.last_issue_ms = Some(now_ms);
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        RefreshTicket { sequence, instant }
    }

    /// Run the provider for a ticket.
    pub fn compute<P: EphemerisProvider + ?Sized>(
        ticket: RefreshTicket,
        provider: &P,
        bodies: &[Body],
    ) -> RefreshResult {
        RefreshResult {
            ticket,
            results: compute_positions(provider, bodies, ticket.instant),
        }
    }

    /// Apply a result unless a newer one has already been applied.
    pub fn apply(&mut self, result: RefreshResult, positions: &mut BodyPositions) -> Option<RefreshReport> {
        let seq = result.ticket.sequence;
        if self.applied_sequence.is_some_and(|applied| seq <= applied) {
            self.stale_rejected += 1;
            debug!(sequence = seq, applied = ?self.applied_sequence, "dropping stale ephemeris result");
            return None;
        }
        self.applied_sequence = Some(seq);
        let report = positions.apply(result.results);
        debug!(sequence = seq, instant = %result.ticket.instant, updated = report.updated, "ephemeris applied");
        Some(report)
    }

    /// Throttled refresh in one call.
    pub fn tick<P: EphemerisProvider + ?Sized>(
        &mut self,
        now_ms: i64,
        instant: Instant,
        provider: &P,
        bodies: &[Body],
        positions: &mut BodyPositions,
    ) -> Option<RefreshReport> {
        let ticket = self.begin(now_ms, instant)?;
        self.apply(Self::compute(ticket, provider, bodies), positions)
    }

    pub fn applied_sequence(&self) -> Option<u64> {
        self.applied_sequence
    }

    pub fn stale_rejected(&self) -> u64 {
        self.stale_rejected
    }
}
