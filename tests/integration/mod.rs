//! Integration tests for the Courier relay
//!
//! These tests drive the real router against wiremock upstreams and
//! verify the relay's contract per route: credential resolution, outbound
//! payload shape, status passthrough, response normalization, and the
//! per-route error envelopes.

mod perplexity;
