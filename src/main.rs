#[tokio::main]
async fn main() {
    if let Err(e) = super_staker_checkup::cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
