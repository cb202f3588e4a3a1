pub use moood::worker::asent::handler;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    moood::setup_logging();
    lambda_runtime::run(lambda_runtime::service_fn(handler)).await
}
