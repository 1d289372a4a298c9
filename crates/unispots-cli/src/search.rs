//! `unispots search`: one model-backed search, printed as cards.

use clap::Args;
use tokio::sync::Mutex;
use unispots_core::{AppConfig, Category, Coordinates, Features, Radius, SearchParams, Vibe};
use unispots_discovery::{locate, run_search, FixedLocator, ViewState};
use unispots_gemini::{GeminiClient, SearchExecutor};
use unispots_store::FileStore;

use crate::output;

#[derive(Debug, Args)]
pub(crate) struct SearchArgs {
    /// What you're looking for (defaults to "recommended spots")
    pub query: Option<String>,
    /// Desired vibe, by name or label (see `unispots vibes`)
    #[arg(long)]
    pub vibe: Option<Vibe>,
    /// Kind of place (see `unispots categories`)
    #[arg(long)]
    pub category: Option<Category>,
    /// Search radius: 1km, 5km, 10km or 25km
    #[arg(long)]
    pub radius: Option<Radius>,
    /// Only places open late
    #[arg(long)]
    pub open_late: bool,
    /// Only places with good wifi
    #[arg(long)]
    pub wifi: bool,
    /// Only student-friendly prices
    #[arg(long)]
    pub cheap_eats: bool,
    /// Only places with power outlets
    #[arg(long)]
    pub power_outlets: bool,
    /// Your latitude, to bias results toward you
    #[arg(long, requires = "lng", allow_negative_numbers = true)]
    pub lat: Option<f64>,
    /// Your longitude
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    pub lng: Option<f64>,
    /// Show the detail view for result N
    #[arg(long, value_name = "N")]
    pub details: Option<usize>,
    /// Save (or unsave) result N
    #[arg(long, value_name = "N")]
    pub save: Option<usize>,
}

impl SearchArgs {
    pub(crate) fn params(&self, default_radius: Radius) -> SearchParams {
        SearchParams {
            query: self.query.clone().unwrap_or_default(),
            vibe: self.vibe.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            radius: self.radius.unwrap_or(default_radius),
            features: Features {
                open_late: self.open_late,
                wifi: self.wifi,
                cheap_eats: self.cheap_eats,
                power_outlets: self.power_outlets,
            },
        }
    }

    pub(crate) fn location(&self) -> Option<Coordinates> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some(Coordinates::new(lat, lng)),
            _ => None,
        }
    }
}

/// Run a search and print the results, then apply `--save` and `--details`.
///
/// # Errors
///
/// Returns an error if the client cannot be built, an index is out of range,
/// or saving fails.
pub(crate) async fn run_search_command(
    config: &AppConfig,
    args: &SearchArgs,
) -> anyhow::Result<()> {
    let client = GeminiClient::with_base_url(
        &config.gemini_api_key,
        &config.gemini_model,
        config.gemini_timeout_secs,
        &config.gemini_base_url,
    )?;
    let executor = SearchExecutor::new(client);
    let state = Mutex::new(ViewState::new(FileStore::open(&config.store_path)));

    locate(&state, &FixedLocator(args.location())).await;

    let params = args.params(config.default_radius);
    println!("{}", params.summary_line());
    println!();

    run_search(&executor, &state, &params).await;
    let mut state = state.into_inner();

    if let Some(summary) = state.summary().filter(|s| !s.is_empty()) {
        println!("{summary}");
        println!();
    }
    if state.results().is_empty() {
        println!("No spots to show. Adjust your filters and try again.");
        return Ok(());
    }
    let results = state.results().to_vec();
    println!("Top Picks");
    println!();
    output::print_cards(&state, &results);
    output::print_citations(state.citations());

    if let Some(n) = args.save {
        let index = output::to_index(n)?;
        let place = results.get(index).ok_or_else(|| no_result(n, results.len()))?;
        let now_saved = state.toggle_save(place)?;
        println!(
            "{} {}",
            if now_saved { "Saved" } else { "Unsaved" },
            place.name
        );
    }

    if let Some(n) = args.details {
        let index = output::to_index(n)?;
        let place = state
            .select_result(index)
            .cloned()
            .ok_or_else(|| no_result(n, results.len()))?;
        println!();
        output::print_details(&state, &place);
    }

    Ok(())
}

fn no_result(n: usize, len: usize) -> anyhow::Error {
    anyhow::anyhow!("no result #{n}; this search returned {len}")
}
