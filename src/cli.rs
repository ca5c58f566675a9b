// cli.rs - Command-line interface configuration
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "camera-viewer")]
#[command(about = "Interactive look-at camera demo", long_about = None)]
pub struct Cli {
    /// Initial window width in logical pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Initial window height in logical pixels
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Disable the status text overlay
    #[arg(long = "no-overlay", default_value = "false")]
    pub no_overlay: bool,
}
