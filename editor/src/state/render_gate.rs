//! Ordering guard for page renders.
//!
//! Renders complete asynchronously (HTTP, then image decode) and can finish
//! out of issue order. Each request takes a token from the gate and a result
//! is only kept while its token is still the latest one issued.

use common::page_render::RenderPageRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RenderToken(u64);

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderGate {
    latest: u64,
    /// Latest token that was painted or failed.
    settled: u64,
}

impl RenderGate {
    pub fn issue(&mut self) -> RenderToken {
        self.latest += 1;
        RenderToken(self.latest)
    }

    pub fn is_current(&self, token: RenderToken) -> bool {
        token.0 == self.latest
    }

    /// Ends the wait for `token`, if it is still the latest.
    pub fn settle(&mut self, token: RenderToken) {
        if self.is_current(token) {
            self.settled = token.0;
        }
    }

    pub fn is_pending(&self) -> bool {
        self.settled != self.latest
    }
}

/// A render request bound to the token it was issued with.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderTicket {
    pub token: RenderToken,
    pub request: RenderPageRequest,
}

/// Server image accepted for the latest request, waiting to be decoded and painted.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPage {
    pub token: RenderToken,
    pub page: usize,
    pub zoom: f64,
    pub image_data: String,
}

/// What is currently on the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintedPage {
    pub token: RenderToken,
    pub page: usize,
    pub zoom: f64,
    pub width: u32,
    pub height: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_latest_token_is_current() {
        let mut gate = RenderGate::default();
        let first = gate.issue();
        assert!(gate.is_current(first));
        let second = gate.issue();
        assert!(!gate.is_current(first));
        assert!(gate.is_current(second));
        assert!(second > first);
    }

    #[test]
    fn only_the_latest_token_settles() {
        let mut gate = RenderGate::default();
        assert!(!gate.is_pending());
        let first = gate.issue();
        let second = gate.issue();
        gate.settle(first);
        assert!(gate.is_pending());
        gate.settle(second);
        assert!(!gate.is_pending());
    }
}
