/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v5::errors::PinterestError;
use crate::v5::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Terms related to each of the requested terms
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct RelatedTerms {
    /// The first of the requested terms
    pub id: String,

    #[serde(default)]
    pub related_term_count: u64,

    #[serde(default)]
    pub related_terms_list: Vec<RelatedTermsEntry>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct RelatedTermsEntry {
    pub term: String,

    // Plain strings, or objects with the term and its score
    #[serde(default)]
    pub related_terms: Vec<Value>,
}

/// Terms suggested to complete a partial term
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(transparent)]
pub struct SuggestedTerms(pub Vec<String>);

/// Looks up terms used in searches
#[derive(Debug, Clone)]
pub struct Terms {
    client: Client,
}

impl Terms {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Terms related to one or more comma separated terms
    pub async fn related(&self, terms: &str) -> Result<RelatedTerms, PinterestError> {
        self.client
            .get::<RelatedTerms>("/v5/terms/related", Some(&[("terms", terms)][..]))
            .await
    }

    /// Terms that complete a partial term, at most `limit` when given
    pub async fn suggested(
        &self,
        term: &str,
        limit: Option<u32>,
    ) -> Result<SuggestedTerms, PinterestError> {
        let limit = limit.map(|l| l.to_string());
        let mut params = vec![("term", term)];
        if let Some(limit) = &limit {
            params.push(("limit", limit.as_str()));
        }
        self.client
            .get::<SuggestedTerms>("/v5/terms/suggested", Some(params.as_slice()))
            .await
    }
}

fn term_text(term: &Value) -> String {
    match term {
        Value::String(s) => s.clone(),
        Value::Object(o) => match o.get("term").and_then(Value::as_str) {
            Some(s) => s.to_string(),
            None => term.to_string(),
        },
        other => other.to_string(),
    }
}

impl fmt::Display for RelatedTerms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Related Terms ---")?;
        writeln!(f, "First Input Term: {}", self.id)?;
        writeln!(f, "Count: {}", self.related_term_count)?;
        for entry in &self.related_terms_list {
            writeln!(f, "Term: {}", entry.term)?;
            for related in &entry.related_terms {
                writeln!(f, "  Related Term: {}", term_text(related))?;
            }
        }
        write!(f, "---------------------")
    }
}

impl fmt::Display for SuggestedTerms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Suggested Terms ---")?;
        for term in &self.0 {
            writeln!(f, "Term: {}", term)?;
        }
        write!(f, "-----------------------")
    }
}
