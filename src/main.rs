//! Demo binary: signs in against a running backend and prints the timeline.

use std::error::Error;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use veripost::adapters::auth::ApiTokenRefresher;
use veripost::adapters::http::ReqwestTransport;
use veripost::application::{AccountService, AuthenticatedClient, FeedReader};
use veripost::config::AppConfig;
use veripost::domain::foundation::AuthSession;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::load()?;
    config.validate()?;
    tracing::info!(base_url = %config.api.base_url, "starting veripost client");

    let transport: Arc<ReqwestTransport> = Arc::new(ReqwestTransport::new(&config.api)?);
    let session = Arc::new(AuthSession::new());
    let accounts = AccountService::new(transport.clone(), session.clone());

    let email = std::env::var("VERIPOST_EMAIL")?;
    let password = std::env::var("VERIPOST_PASSWORD")?;
    let profile = accounts.login(&email, &password).await?;
    println!("signed in as {}", profile.username);

    let client = Arc::new(AuthenticatedClient::new(
        transport.clone(),
        Arc::new(ApiTokenRefresher::new(transport)),
        session,
    ));
    let feed = FeedReader::new(client);

    for post in feed.timeline().await? {
        let verified = if post.verified { "verified" } else { "unverified" };
        println!(
            "[{verified}] {}: {}",
            post.username,
            post.description.unwrap_or_default()
        );
    }

    Ok(())
}
