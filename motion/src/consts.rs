//! Shared numeric constants for the motion crate.

// ── Flair ───────────────────────────────────────────────────────

/// Upper bound of the normalized pointer coordinate space.
pub const NORMALIZED_MAX: f64 = 100.0;

/// Below this normalized coordinate the pointer is leaving through the near edge.
pub const EXIT_EDGE_LOW: f64 = 10.0;

/// Above this normalized coordinate the pointer is leaving through the far edge.
pub const EXIT_EDGE_HIGH: f64 = 90.0;

/// How far past the edge the flair travels while shrinking out.
pub const EXIT_OVERSHOOT: f64 = 20.0;

/// Fraction of the background crossfade after which the big flair starts.
pub const BIG_FLAIR_OVERLAP: f64 = 0.7;

// ── Ticker ──────────────────────────────────────────────────────

/// Largest frame delta (seconds) fed to the animator; longer gaps (a
/// backgrounded tab) are treated as one ordinary frame.
pub const MAX_FRAME_DELTA: f64 = 0.1;

// ── Elastic ─────────────────────────────────────────────────────

/// Period used by `elastic.out` when none is given.
pub const ELASTIC_DEFAULT_PERIOD: f64 = 0.3;

// ── Marquee ─────────────────────────────────────────────────────

/// Seconds for the hero logo strip to travel one loop.
pub const HERO_MARQUEE_CYCLE: f64 = 100.0;

/// Seconds for the clients logo strip to travel one loop.
pub const CLIENTS_MARQUEE_CYCLE: f64 = 60.0;
