use passworkshop::cli::run;
use pws_cli_helpers::messages::fail;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        fail(e.to_string());
        std::process::exit(1);
    }
}
