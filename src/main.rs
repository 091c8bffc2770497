use anyhow::Context;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    moodcast::app::run().await.context("moodcast exited with an error")
}
