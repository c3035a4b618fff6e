use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use rotation::domain::Rect;
use std::path::{Path, PathBuf};

/// Wallrot: wallpaper rotation across several displays
///
/// Wallrot picks a wallpaper for every display on a timer, avoiding the ones
/// shown recently, and reports the assignment. Send SIGUSR1 to cycle right
/// away, SIGUSR2 to pause or resume, SIGHUP to reload the configuration and
/// rescan the wallpapers.
#[derive(Debug, Parser, Clone)]
#[command(about, long_about, version)]
pub struct Cli {
    /// Path to configuration file.
    #[arg(short, long, value_parser = validate_file)]
    pub conffile: Option<PathBuf>,

    /// Glob pattern of wallpapers to rotate. May be repeated.
    #[arg(short, long = "images", required = true)]
    pub images: Vec<String>,

    /// Display rectangle as `WIDTHxHEIGHT+X+Y`, in enumeration order. May be
    /// repeated. Overrides the displays of the configuration file.
    #[arg(short, long = "display", value_parser = parse_display)]
    pub displays: Vec<Rect>,

    /// Path to log file.
    ///
    /// Logs go to stderr when not set.
    #[arg(short, long)]
    pub logfile: Option<PathBuf>,

    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,
}

impl Cli {
    /// Displays from the command line, or from the configuration otherwise.
    pub fn displays(&self, config: &config::Config) -> Vec<Rect> {
        if self.displays.is_empty() {
            config.displays.iter().copied().map(Rect::from).collect()
        } else {
            self.displays.clone()
        }
    }
}

/// Check if the file exists.
#[inline(always)]
fn validate_file(file: &str) -> Result<PathBuf, String> {
    let path = Path::new(file);
    if path.exists() {
        Ok(path.to_owned())
    } else {
        Err(format!("File not found: {:?}", path))
    }
}

/// Parse `1920x1080+0+0`. Offsets may be negative: `1280x1024+-1280+0`.
pub fn parse_display(input: &str) -> Result<Rect, String> {
    let invalid = || format!("`{input}` is not a display, expected WIDTHxHEIGHT+X+Y");

    let (size, offset) = input.split_once('+').ok_or_else(invalid)?;
    let (width, height) = size.split_once('x').ok_or_else(invalid)?;
    let (x, y) = offset.split_once('+').ok_or_else(invalid)?;

    let number = |s: &str| s.trim().parse::<i32>().map_err(|_| invalid());
    let rect = Rect::new(number(x)?, number(y)?, number(width)?, number(height)?);
    if !rect.has_area() {
        return Err(format!("`{input}` has no area"));
    }
    Ok(rect)
}
