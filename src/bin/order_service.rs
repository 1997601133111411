use sample_services::{server, Orders};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    server::run::<Orders>().await
}
