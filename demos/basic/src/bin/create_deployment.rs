use right_api::prelude::*;

/// Creates a deployment and prints the id RightScale assigned to it
///
/// Errors are only logged (the default policy): the outcome is read back
/// through `code()` and `resource_id()`.
///
/// Run with: cargo run --bin create_deployment -- my_deployment_name
#[tokio::main]
async fn main() {
    setup_logger();

    let nickname = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "my_deployment_name".to_string());

    let mut api = RightApi::new(ClientConfig::from_env());
    if !matches!(api.login(LoginOptions::from_env()), Ok(true)) {
        error!("Login failed");
        return;
    }

    let mut params = Params::new();
    params.insert("deployment[nickname]".to_string(), nickname);
    params.insert(
        "deployment[description]".to_string(),
        "created by right-api".to_string(),
    );

    if let Err(e) = api.post("deployments", &params).await {
        error!("Create failed: {}", e);
        return;
    }

    match (api.code(), api.resource_id()) {
        (Some(e), _) => error!("Create failed: {}", e),
        (None, Some(id)) => info!("Created deployment {} in {:.3}s", id, api.time()),
        (None, None) => warn!("Created, but no id in the Location header"),
    }
    if let Some(location) = api.headers().get("location") {
        info!("Location: {:?}", location);
    }
}
