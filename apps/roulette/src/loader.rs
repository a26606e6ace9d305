use roster::RosterProvider;
use roulette_core::Session;
use tracing::{error, info};

/// Fetches the roster into `session`. A failed fetch marks the session's
/// roster as failed instead of returning an error, so the caller decides
/// whether that is fatal.
pub async fn refresh_roster(session: &mut Session, provider: &dyn RosterProvider) {
    info!(source = %provider.describe(), "loading roster");
    match provider.fetch().await {
        Ok(members) => session.roster_loaded(members),
        Err(err) => {
            error!(source = %provider.describe(), error = %err, "failed to load roster");
            session.roster_failed(err.to_string());
        }
    }
}
