use std::{path::PathBuf, time::Duration};

use clap::{ArgGroup, Parser};
use logger::LogTarget;
use service_area::{map, ContractorId, MapConfig, Palette, Target};

#[derive(Parser, Debug, Clone)]
#[command(name = "service-area-map", about = "Draws contractors' service areas")]
#[command(group(ArgGroup::new("target").required(true).args(["contractor", "contractors"])))]
pub struct Args {
    /// Base URL of the service area API.
    #[arg(long, env = "SERVICE_AREA_API_URL", default_value = "http://localhost:3000")]
    pub api_url: String,

    /// Show a single contractor.
    #[arg(long)]
    pub contractor: Option<ContractorId>,

    /// Show several contractors, comma separated.
    #[arg(long, value_delimiter = ',')]
    pub contractors: Vec<ContractorId>,

    #[arg(long, default_value_t = map::DEFAULT_WIDTH)]
    pub width: f64,

    #[arg(long, default_value_t = map::DEFAULT_HEIGHT)]
    pub height: f64,

    #[arg(long)]
    pub hide_zip_codes: bool,

    #[arg(long)]
    pub hide_radius: bool,

    /// Palette as comma separated `#rrggbb` colors.
    #[arg(long, value_delimiter = ',')]
    pub colors: Vec<String>,

    /// Append logs to this file instead of the console.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    #[arg(long, default_value_t = 10)]
    pub timeout_secs: u64,

    /// Render once to an SVG file and exit without opening a window.
    #[arg(long)]
    pub export_svg: Option<PathBuf>,
}

impl Args {
    pub fn target(&self) -> Target {
        match self.contractor {
            Some(id) => Target::Single(id),
            None => Target::Multiple(self.contractors.clone()),
        }
    }

    pub fn map_config(&self) -> Result<MapConfig, service_area::MapError> {
        let mut config = MapConfig::new(self.target())
            .with_size(self.width, self.height)
            .with_zip_codes(!self.hide_zip_codes)
            .with_radius(!self.hide_radius);

        if !self.colors.is_empty() {
            config = config.with_colors(Palette::from_hex_list(&self.colors)?);
        }
        Ok(config)
    }

    pub fn log_target(&self) -> LogTarget {
        match &self.log_file {
            Some(path) => LogTarget::File(path.clone()),
            None => LogTarget::Console,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
