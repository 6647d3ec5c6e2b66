//! Contract for the external text normalizer.
//!
//! Normalization (lowercasing, replacing `-` and `/` with spaces,
//! lemmatizing tokens to dictionary base forms, rejoining with single
//! spaces) happens outside this crate. The engine only requires that
//! whatever the caller plugs in honors that contract; missing input is
//! turned into the empty string at the engine boundary and never reaches
//! the normalizer.

/// Produces normalized text from a raw title or description.
pub trait Normalizer: Send + Sync {
    fn normalize(&self, raw: &str) -> String;
}

impl<F> Normalizer for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn normalize(&self, raw: &str) -> String {
        self(raw)
    }
}

/// No-op adapter for callers whose text was already normalized upstream.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl Normalizer for Passthrough {
    fn normalize(&self, raw: &str) -> String {
        raw.to_string()
    }
}

// ── Tests ──
