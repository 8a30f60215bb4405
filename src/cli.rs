// cli.rs - Command-line interface configuration
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use crate::config::SceneConfig;
use crate::logging::LoggingConfig;

#[derive(Parser, Debug, Clone)]
#[command(name = "bouncing-shadow")]
#[command(about = "Bouncing sphere with a faked contact shadow", long_about = None)]
pub struct Cli {
    /// Disable the debug panel
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,

    /// Initial window width in logical pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Initial window height in logical pixels
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// JSON scene configuration; missing fields use built-in defaults
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Shadow alpha map, overrides the configured texture
    #[arg(long)]
    pub texture: Option<PathBuf>,

    /// Stop the animation after this many seconds
    #[arg(long, value_name = "SECONDS")]
    pub run_for: Option<f64>,

    /// Log filter, e.g. "debug" or "bouncing_shadow=trace"
    #[arg(long)]
    pub log: Option<String>,
}

impl Cli {
    /// Scene configuration with command-line overrides applied
    pub fn scene_config(&self) -> Result<SceneConfig> {
        let mut config = match &self.config {
            Some(path) => SceneConfig::load(path)?,
            None => SceneConfig::default(),
        };
        if let Some(texture) = &self.texture {
            config.shadow.texture = texture.clone();
        }
        Ok(config)
    }

    pub fn logging(&self) -> LoggingConfig {
        LoggingConfig {
            filter: self.log.clone(),
            ..LoggingConfig::default()
        }
    }

    /// How long to run before stopping; non-positive or NaN values mean forever
    pub fn run_duration(&self) -> Option<Duration> {
        self.run_for
            .filter(|secs| secs.is_finite() && *secs > 0.0)
            .map(Duration::from_secs_f64)
    }
}
