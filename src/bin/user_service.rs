use sample_services::{server, Users};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    server::run::<Users>().await
}
