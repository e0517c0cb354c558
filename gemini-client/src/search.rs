//! Web search through Gemini's `google_search` tool: one request per query, the
//! synthesized answers and grounded references concatenated into a text blob the
//! handlers embed in a follow-up prompt.

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::client::{candidate_text, GeminiClient};
use crate::error::GeminiError;
use crate::types::{Content, Tool};
use crate::SearchProvider;

/// A grounded source attached to a search answer.
#[derive(Debug, Clone)]
struct Reference {
    title: String,
    url: String,
}

#[async_trait]
impl SearchProvider for GeminiClient {
    #[instrument(skip(self, queries), fields(model = %self.model(), query_count = queries.len()))]
    async fn search(&self, queries: &[String]) -> Result<String, GeminiError> {
        let mut sections = Vec::new();
        for query in queries {
            let query = query.trim();
            if query.is_empty() {
                continue;
            }
            debug!(query = %query, "Submitting search query");
            let response = self
                .request(vec![Content::user(query)], vec![Tool::default()])
                .await?;
            let answer = candidate_text(&response.candidates)
                .unwrap_or_else(|_| "No answer returned.".to_string());
            let references = extract_references(&response.candidates);
            sections.push(format_section(query, &answer, &references));
        }
        if sections.is_empty() {
            return Err(GeminiError::EmptyResponse);
        }
        Ok(sections.join("\n\n"))
    }
}

fn format_section(query: &str, answer: &str, references: &[Reference]) -> String {
    let mut out = format!("Search: {}\n{}", query, answer);
    if !references.is_empty() {
        out.push_str("\nSources:");
        for r in references {
            out.push_str(&format!("\n- {} ({})", r.title, r.url));
        }
    }
    out
}

/// Pulls (title, url) pairs out of groundingMetadata, deduplicating by url.
/// The metadata shape has varied across API revisions, so this reads it loosely.
fn extract_references(candidates: &[crate::types::Candidate]) -> Vec<Reference> {
    let mut seen = std::collections::HashSet::new();
    let mut references = Vec::new();

    for candidate in candidates {
        let Some(metadata) = &candidate.grounding_metadata else {
            continue;
        };
        let Some(chunks) = metadata.get("groundingChunks").and_then(|c| c.as_array()) else {
            continue;
        };
        for chunk in chunks {
            let Some(web) = chunk.get("web").or_else(|| chunk.get("retrievedContext")) else {
                continue;
            };
            let Some(url) = web
                .get("uri")
                .or_else(|| web.get("url"))
                .and_then(|v| v.as_str())
            else {
                continue;
            };
            if !seen.insert(url.to_string()) {
                continue;
            }
            let title = web
                .get("title")
                .and_then(|v| v.as_str())
                .unwrap_or(url)
                .to_string();
            references.push(Reference {
                title,
                url: url.to_string(),
            });
        }
    }

    references
}
