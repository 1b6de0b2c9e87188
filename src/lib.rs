//! Email Triage — classification and suggested-reply pipeline.
//!
//! Classifies an inbound email as Productive or Unproductive and drafts a
//! suggested reply. A generative LLM is the primary classifier/responder;
//! a deterministic rule-based path takes over whenever it fails, so the
//! pipeline always produces a complete result.

pub mod config;
pub mod error;
pub mod llm;
pub mod nlp;
pub mod pipeline;
pub mod server;
