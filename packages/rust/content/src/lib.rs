//! Article generation and publishing for pending keyword patterns.
//!
//! Generation stands in for an LLM call and publishing for a CMS REST call;
//! both narrate their work and produce deterministic placeholder output.

mod generator;
mod publisher;

pub use generator::{Article, build_prompt, fetch_pending_pattern, generate_article};
pub use publisher::{PublishedArticle, publish_article, slugify};
