#[tokio::main]
async fn main() -> eyre::Result<()> {
    userapi::run().await
}
