use clap::Parser;
use retail_search::client::SearchClient;
use retail_search::config::Config;
use retail_search::credentials::Credentials;
use retail_search::data_models::SearchRequest;

/// Run one query against the retail search service and print what comes back.
#[derive(Parser, Debug)]
#[command(name = "retail-search")]
struct Cli {
    /// Query phrase to search for.
    #[arg(default_value = "tshirts")]
    query: String,

    /// Identifier correlating this request with a visitor session.
    #[arg(long, default_value = "123456")]
    visitor_id: String,

    /// Maximum number of results per page.
    #[arg(long)]
    page_size: Option<i32>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber (handles both tracing and log crate)
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(true)
        .init();

    let cli = Cli::parse();

    // Credential resolution stays outside the library. Export
    // RETAIL_ACCESS_TOKEN (e.g. from `gcloud auth print-access-token`);
    // handling a GOOGLE_APPLICATION_CREDENTIALS key file is up to the caller.
    let config = Config::from_env();
    let credentials = Credentials::from_env()?;

    let mut request = SearchRequest::new(&config, &cli.query, &cli.visitor_id);
    if let Some(page_size) = cli.page_size {
        request = request.with_page_size(page_size);
    }

    println!("---search request:---");
    println!("{}", serde_json::to_string_pretty(&request)?);

    let client = SearchClient::new(&config, credentials);
    let response = client.search(&request).await?;

    println!("---search response---");
    if response.results.is_empty() {
        println!("The search operation returned no matching results.");
    } else {
        println!("{}", serde_json::to_string_pretty(&response)?);
    }

    Ok(())
}
