#[tokio::main]
async fn main() -> anyhow::Result<()> {
    emojifier_server::start().await
}
