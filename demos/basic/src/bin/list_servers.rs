use right_api::prelude::*;

/// Lists the servers of the account configured in the environment
///
/// Reads `RIGHTSCALE_ACCOUNT`, `RIGHTSCALE_USER` and `RIGHTSCALE_PASSWORD`
/// (a `.env` file works too). Set `RIGHTSCALE_LOG=1` to get a `rest.log`.
///
/// Run with: cargo run --bin list_servers
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let config = ClientConfig::from_env().with_error_policy(ErrorPolicy::strict());
    let mut api = RightApi::new(config);
    api.login(LoginOptions::from_env())?;
    info!("{}", api.show_connection());

    if let Some(response) = api.send("servers", "get", &Params::new()).await? {
        info!("Status: {}", response.status);
        info!("Took {:.3}s", api.time());
        info!("{}", response.body);
    }

    Ok(())
}
