//! Async operations for the TUI
//!
//! Uses channels to communicate between the sync TUI loop and async tasks.

use image::DynamicImage;
use tokio::sync::mpsc;

use crate::api::RestCountriesClient;
use crate::images;
use crate::models::Country;

/// Commands sent from the TUI to the async worker
#[derive(Debug, Clone)]
pub enum AsyncCommand {
    /// Fetch the full country collection
    FetchAll,
    /// Fetch a single country by name (detail view)
    FetchCountry {
        /// Exact common name
        name: String,
    },
    /// Download a flag or coat-of-arms image
    LoadImage {
        /// Image URL
        url: String,
    },
    /// Shutdown the worker
    Shutdown,
}

/// Results sent back from the async worker to the TUI
#[derive(Debug)]
pub enum AsyncResult {
    /// Full collection fetched, pre-sorted by common name
    CountriesFetched {
        /// The sorted collection
        countries: Vec<Country>,
    },
    /// Collection fetch failed
    CountriesFailed {
        /// Error description for the user
        message: String,
    },
    /// Single country fetched
    CountryFetched {
        /// The fetched record
        country: Box<Country>,
    },
    /// Single-country fetch failed
    CountryFailed {
        /// The requested name
        name: String,
        /// Error description for the user
        message: String,
    },
    /// Image downloaded and decoded
    ImageLoaded {
        /// Image URL
        url: String,
        /// Decoded image
        image: DynamicImage,
    },
    /// Image download failed
    ImageFailed {
        /// Image URL
        url: String,
        /// Error description
        error: String,
    },
    /// Status message (for progress updates)
    Status {
        /// Text for the status bar
        message: String,
    },
}

/// Channel handles for communicating with the async worker
pub struct AsyncHandle {
    /// Send commands to the worker
    pub cmd_tx: mpsc::Sender<AsyncCommand>,
    /// Receive results from the worker
    pub result_rx: mpsc::Receiver<AsyncResult>,
}

/// Spawn the async worker and return handles
pub fn spawn_worker(base_url: &str) -> AsyncHandle {
    let (cmd_tx, mut cmd_rx) = mpsc::channel::<AsyncCommand>(32);
    let (result_tx, result_rx) = mpsc::channel::<AsyncResult>(32);

    let api = RestCountriesClient::new(base_url);

    // Spawn the worker task
    tokio::spawn(async move {
        let image_client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        while let Some(cmd) = cmd_rx.recv().await {
            match cmd {
                AsyncCommand::Shutdown => break,
                AsyncCommand::FetchAll => {
                    handle_fetch_all(&result_tx, &api).await;
                }
                AsyncCommand::FetchCountry { name } => {
                    handle_fetch_country(&result_tx, &api, name).await;
                }
                AsyncCommand::LoadImage { url } => {
                    handle_load_image(&result_tx, &image_client, url).await;
                }
            }
        }
    });

    AsyncHandle { cmd_tx, result_rx }
}

async fn handle_fetch_all(result_tx: &mpsc::Sender<AsyncResult>, api: &RestCountriesClient) {
    let _ = result_tx
        .send(AsyncResult::Status {
            message: "Loading countries...".to_string(),
        })
        .await;

    match api.all().await {
        Ok(countries) => {
            let _ = result_tx
                .send(AsyncResult::CountriesFetched { countries })
                .await;
        }
        Err(e) => {
            let _ = result_tx
                .send(AsyncResult::CountriesFailed {
                    message: format!("Failed to fetch countries: {e}"),
                })
                .await;
        }
    }
}

async fn handle_fetch_country(
    result_tx: &mpsc::Sender<AsyncResult>,
    api: &RestCountriesClient,
    name: String,
) {
    match api.by_name(&name).await {
        Ok(country) => {
            let _ = result_tx
                .send(AsyncResult::CountryFetched {
                    country: Box::new(country),
                })
                .await;
        }
        Err(e) => {
            let _ = result_tx
                .send(AsyncResult::CountryFailed {
                    name,
                    message: format!("Failed to fetch country details: {e}"),
                })
                .await;
        }
    }
}

async fn handle_load_image(
    result_tx: &mpsc::Sender<AsyncResult>,
    client: &reqwest::Client,
    url: String,
) {
    match images::download_and_decode(client, &url).await {
        Ok(image) => {
            let _ = result_tx.send(AsyncResult::ImageLoaded { url, image }).await;
        }
        Err(e) => {
            let _ = result_tx
                .send(AsyncResult::ImageFailed {
                    url,
                    error: e.to_string(),
                })
                .await;
        }
    }
}
