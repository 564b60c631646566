use std::sync::Arc;

use anyhow::Context;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use url::Url;

use course_search::core::client::HttpSearchClient;
use course_search::core::controller::{SearchController, SubmitOutcome};
use course_search::core::render;
use course_search::error::search::SearchError;
use course_search::utils::input::input;

const RESULTS_PATH: &str = "results.html";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let base_url = std::env::var("SEARCH_BASE_URL")
        .unwrap_or_else(|_| "http://localhost:8080".to_string());
    let base_url = Url::parse(&base_url).context("invalid SEARCH_BASE_URL")?;
    let api_key = std::env::var("SEARCH_API_KEY").ok();

    let client = HttpSearchClient::new(base_url, api_key);
    let controller = SearchController::new(Arc::new(client));

    while let Some(course_name) = input("Course name:") {
        match controller.submit(&course_name).await {
            Ok(SubmitOutcome::Rendered { courses }) => {
                let page = render::render_document(&controller.results_html());
                let mut file = File::create(RESULTS_PATH)
                    .await
                    .context("creating results file")?;
                file.write_all(page.as_bytes())
                    .await
                    .context("writing results file")?;
                println!("{} course(s) written to {}", courses, RESULTS_PATH);
            }
            Ok(SubmitOutcome::Stale) => {}
            Err(err @ SearchError::Transport { .. }) => {
                eprintln!("An error occurred while fetching the data: {}", err);
            }
            Err(err) => eprintln!("{}", err),
        }
    }

    Ok(())
}
