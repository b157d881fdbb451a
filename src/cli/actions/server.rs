use crate::{api, auth::TokenService};
use anyhow::Result;
use secrecy::SecretString;

#[derive(Debug)]
pub struct Args {
    pub port: u16,
    pub dsn: String,
    pub jwt_secret: SecretString,
    pub token_ttl_minutes: i64,
    pub cors_origins: Option<String>,
}

/// Execute the server action.
///
/// # Errors
/// Returns an error if the database is unreachable or the server fails to
/// start.
pub async fn execute(args: Args) -> Result<()> {
    let tokens = TokenService::new(args.jwt_secret, args.token_ttl_minutes);

    api::new(args.port, args.dsn, tokens, args.cors_origins.as_deref()).await
}
