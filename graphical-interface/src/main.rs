use anyhow::anyhow;
use api_client::ServiceAreaClient;
use clap::Parser;
use graphical_interface::args::Args;
use tracing::info;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init(&args.log_target())?;

    let config = args.map_config()?;
    let client = ServiceAreaClient::new(&args.api_url, args.timeout())?;
    info!("Using service area API at {}", client.base_url());

    if let Some(path) = &args.export_svg {
        let state = graphical_interface::export_svg(client, config, path)?;
        info!("Wrote {} ({:?})", path.display(), state);
        return Ok(());
    }

    graphical_interface::run(client, config).map_err(|e| anyhow!("{e}"))
}
