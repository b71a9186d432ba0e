use anyhow::Result;
use tracing::{error, info};

use crate::api::{CityDirectory, SearchClient};
use crate::models::{SearchCriteria, SearchResults};

/// Which of the two mutually exclusive panels is currently shown.
///
/// A single enum instead of a pair of booleans so the two panels cannot
/// desynchronize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Form,
    Results,
}

/// One user's search interaction: the fetched city catalog, the last
/// successful result set, and the current view state.
///
/// All state is instance-local and discarded with the session. Transitions:
/// a successful submit moves `Form` to `Results`; `go_back` moves back to
/// `Form`; a failed submit leaves the state where it was.
pub struct SearchSession {
    search: SearchClient,
    cities: Vec<String>,
    results: Option<SearchResults>,
    view: ViewState,
}

impl SearchSession {
    pub fn new(search: SearchClient) -> Self {
        Self {
            search,
            cities: Vec::new(),
            results: None,
            view: ViewState::Form,
        }
    }

    /// Fetch the city catalog used to populate the city selection.
    ///
    /// A catalog failure propagates to the caller rather than silently
    /// leaving an empty list behind.
    pub async fn initialize(&mut self, directory: &dyn CityDirectory) -> Result<()> {
        self.cities = directory.fetch_cities().await?;
        Ok(())
    }

    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    /// The last successful result set, retained across `go_back`
    pub fn results(&self) -> Option<&SearchResults> {
        self.results.as_ref()
    }

    /// Validate the criteria and, if they pass, issue one search request.
    ///
    /// Validation failure makes no network call. Either kind of failure is
    /// logged and returned with the view state and any prior results left
    /// untouched; only a successful response stores its results and moves
    /// the view to `Results`.
    pub async fn submit(&mut self, criteria: &SearchCriteria) -> Result<()> {
        if let Err(err) = criteria.validate(&self.cities) {
            error!("Search criteria rejected: {}", err);
            return Err(err.into());
        }

        match self.search.search(criteria).await {
            Ok(results) => {
                info!("Search succeeded with {} listings", results.len());
                self.results = Some(results);
                self.view = ViewState::Results;
                Ok(())
            }
            Err(err) => {
                error!("Search request failed: {:#}", err);
                Err(err)
            }
        }
    }

    /// Return to the form. Criteria and previously fetched results are
    /// kept, merely hidden until overwritten by the next successful search.
    pub fn go_back(&mut self) {
        self.view = ViewState::Form;
    }
}
