use lambda_http::{service_fn, Error};
use hola_lambda::handler::handle_lambda;
use hola_shared::utilities::config;

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    std::panic::set_hook(Box::new(|info| {
        log::error!("Application panicked: {}", info);
    }));

    config::init();
    log::info!(
        "Starting {} version {}",
        config::get_function_name(),
        config::get_function_version()
    );

    lambda_http::run(service_fn(handle_lambda)).await?;
    Ok(())
}
