//! Classification-and-reply pipeline.
//!
//! Every inbound email flows through:
//! 1. `SenderGate` — automated-sender short-circuit (no NLP, no LLM)
//! 2. Normalization + keyword extraction
//! 3. Primary LLM classification, with the rule-based fallback on failure
//! 4. Primary LLM reply generation, with a canned template on failure
//! 5. Reply cleanup and result assembly
//!
//! The pipeline never surfaces an error: a primary-service outage only
//! changes which path produced the answer, recorded in `Source`.

pub mod fallback;
pub mod gate;
pub mod processor;
pub mod types;
