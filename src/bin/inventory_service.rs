use sample_services::{server, Inventory};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    server::run::<Inventory>().await
}
