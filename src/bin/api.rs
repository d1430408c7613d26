pub use user_platform::api::handler;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    user_platform::setup_logging();
    lambda_runtime::run(lambda_runtime::service_fn(handler)).await
}
