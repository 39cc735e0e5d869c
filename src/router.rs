//! Short-circuit routing of junk queries
//!
//! Runs before any network access. A query containing a reserved trigger
//! or a user mention is answered with canned text and never searched.

use std::collections::HashMap;

use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};

/// Canned reply replacing a search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CannedResponse {
    /// Text to show the requester
    pub text: String,
}

/// Configuration for [`QueryRouter`]
#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// Trigger string and the reply it produces
    pub triggers: Vec<(String, String)>,

    /// Pattern matching a mention token, anchored at the token start
    pub mention_pattern: String,
}

impl Default for RouterConfig {
    fn default() -> Self {
        let triggers = [
            ("@everyone", "Nice try. Nobody is getting pinged today."),
            ("@here", "Still no. Try searching for a processor instead."),
            (
                ":(){ :|: & };: -",
                "This searches a processor catalog, not a shell.",
            ),
        ];
        Self {
            triggers: triggers
                .iter()
                .map(|(t, r)| (t.to_string(), r.to_string()))
                .collect(),
            mention_pattern: "^<@!?[0-9]{17,20}>".to_string(),
        }
    }
}

/// Matches queries that should never reach the catalog
#[derive(Debug, Clone)]
pub struct QueryRouter {
    triggers: HashMap<String, String>,
    mention: Regex,
}

impl QueryRouter {
    /// Build a router, compiling the mention pattern
    pub fn new(config: &RouterConfig) -> Result<Self> {
        let mention = Regex::new(&config.mention_pattern)
            .map_err(|e| Error::Config(format!("invalid mention pattern: {}", e)))?;
        Ok(Self {
            triggers: config.triggers.iter().cloned().collect(),
            mention,
        })
    }

    /// Canned response for `query`, or `None` to proceed with a search
    pub fn route(&self, query: &str, requester: &str) -> Option<CannedResponse> {
        if let Some(reply) = self.triggers.get(query.trim()) {
            debug!("Query matched trigger as a whole");
            return Some(CannedResponse {
                text: reply.clone(),
            });
        }

        for token in query.split_whitespace() {
            if let Some(reply) = self.triggers.get(token) {
                debug!(token, "Query matched trigger");
                return Some(CannedResponse {
                    text: reply.clone(),
                });
            }
            if self.mention.is_match(token) {
                debug!(token, "Query contains a mention");
                return Some(CannedResponse {
                    text: format!("<@{}> pong!", requester),
                });
            }
        }
        None
    }
}
