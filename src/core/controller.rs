use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use log::{debug, error};

use crate::core::client::SearchTransport;
use crate::core::render;
use crate::error::search::SearchError;

/// The replaceable results subtree: the current rendered markup and the
/// submission generation that produced it.
struct ResultsRegion {
    html: String,
    generation: u64,
}

#[derive(Debug)]
pub enum SubmitOutcome {
    /// The region now holds this submission's render.
    Rendered { courses: usize },

    /// A later submission committed first; this render was discarded.
    Stale,
}

/// Orchestrates one query/render cycle per submission: validate, fetch,
/// decode, render, and commit into the results region.
///
/// Stateless between submissions apart from the region itself, which each
/// successful submission replaces wholesale.
pub struct SearchController {
    transport: Arc<dyn SearchTransport>,
    region: Mutex<ResultsRegion>,
    submits: AtomicU64,
}

impl SearchController {
    pub fn new(transport: Arc<dyn SearchTransport>) -> Self {
        SearchController {
            transport,
            region: Mutex::new(ResultsRegion {
                html: String::new(),
                generation: 0,
            }),
            submits: AtomicU64::new(0),
        }
    }

    /// Runs one search. On success the previous region content is fully
    /// replaced; on any failure the region is left as it was, so the last
    /// valid result stays visible.
    pub async fn submit(&self, raw_query: &str) -> Result<SubmitOutcome, SearchError> {
        let query = raw_query.trim();
        if query.is_empty() {
            // Validation stops here; the transport is never invoked.
            return Err(SearchError::EmptyQuery);
        }

        let generation = self.submits.fetch_add(1, Ordering::SeqCst) + 1;
        debug!("search #{}: {:?}", generation, query);

        let response = match self.transport.search(query).await {
            Ok(response) => response,
            Err(err) => {
                error!("search #{} failed: {}", generation, err);
                return Err(err);
            }
        };

        let entries = response.into_entries();
        if entries.is_empty() {
            debug!("search #{}: no matching course", generation);
            return Err(SearchError::NotFound);
        }

        let html = render::render_entries(&entries);

        // Commit under the lock. A submission that resolved after a newer
        // one already committed must not clobber the newer render.
        let mut region = self.region.lock().unwrap();
        if generation < region.generation {
            debug!(
                "search #{}: stale, region keeps render #{}",
                generation, region.generation
            );
            return Ok(SubmitOutcome::Stale);
        }
        region.generation = generation;
        region.html = html;

        Ok(SubmitOutcome::Rendered {
            courses: entries.len(),
        })
    }

    /// Snapshot of the region's current markup.
    pub fn results_html(&self) -> String {
        self.region.lock().unwrap().html.clone()
    }
}
