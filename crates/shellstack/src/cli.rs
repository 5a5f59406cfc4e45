//! Command-line arguments for the `shellstack` binary.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use shellstack::{Result, ShapeConfig};

/// Single-dash multi-letter flags and the long flags they stand for.
const SHORT_ALIASES: &[(&str, &str)] = &[
    ("-sx", "--width"),
    ("-sy", "--height"),
    ("-sz", "--depth"),
    ("-sv", "--sphere_value"),
    ("-co1v", "--cone1_value"),
    ("-co2v", "--cone2_value"),
    ("-cyv", "--cylinder_value"),
    ("-ds", "--data_scale"),
    ("-nf", "--no_fade"),
];

/// Synthesizes a sphere, two cones and a cylinder as thin shells in a voxel
/// grid and writes it as a multi-page 16-bit grayscale TIFF.
#[derive(Debug, Parser)]
#[command(name = "shellstack", author, version, long_about = None)]
pub struct Args {
    /// Volume width [default: 512] (alias -sx)
    #[arg(long = "width", value_name = "N")]
    pub width: Option<u32>,

    /// Volume height [default: 512] (alias -sy)
    #[arg(long = "height", value_name = "N")]
    pub height: Option<u32>,

    /// Volume depth [default: 512] (alias -sz)
    #[arg(long = "depth", value_name = "N")]
    pub depth: Option<u32>,

    /// Surface thickness [default: 3]
    #[arg(short = 't', long = "thickness", value_name = "N")]
    pub thickness: Option<u32>,

    /// Sphere data value, 0-255 [default: 64] (alias -sv)
    #[arg(long = "sphere_value", alias = "sphere-value", value_name = "V")]
    pub sphere_value: Option<u32>,

    /// Cone 1 data value, 0-255 [default: 96] (alias -co1v)
    #[arg(long = "cone1_value", alias = "cone1-value", value_name = "V")]
    pub cone1_value: Option<u32>,

    /// Cone 2 data value, 0-255 [default: 128] (alias -co2v)
    #[arg(long = "cone2_value", alias = "cone2-value", value_name = "V")]
    pub cone2_value: Option<u32>,

    /// Cylinder data value, 0-255 [default: 160] (alias -cyv)
    #[arg(long = "cylinder_value", alias = "cylinder-value", value_name = "V")]
    pub cylinder_value: Option<u32>,

    /// Data scale [default: 16] (alias -ds)
    #[arg(long = "data_scale", alias = "data-scale", value_name = "S")]
    pub data_scale: Option<u32>,

    /// No fading over thickness (alias -nf)
    #[arg(long = "no_fade", alias = "no-fade")]
    pub no_fade: bool,

    /// JSON shape configuration used as the base; flags override its fields
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory the stack is written into
    #[arg(
        long = "output_dir",
        alias = "output-dir",
        value_name = "DIR",
        default_value = "."
    )]
    pub output_dir: PathBuf,

    /// Print the effective configuration as JSON before generating
    #[arg(long = "print_config", alias = "print-config")]
    pub print_config: bool,
}

impl Args {
    /// Parses the process arguments, accepting the single-dash aliases.
    pub fn parse_normalized() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    /// Builds the shape configuration: the `--config` file (or defaults),
    /// then every flag given on the command line.
    pub fn resolve(&self) -> Result<ShapeConfig> {
        let mut config = match &self.config {
            Some(path) => {
                log::debug!("loading shape configuration from {}", path.display());
                ShapeConfig::from_json_file(path)?
            }
            None => ShapeConfig::default(),
        };

        let overrides = [
            (self.width, &mut config.width),
            (self.height, &mut config.height),
            (self.depth, &mut config.depth),
            (self.thickness, &mut config.thickness),
            (self.sphere_value, &mut config.sphere_value),
            (self.cone1_value, &mut config.cone1_value),
            (self.cone2_value, &mut config.cone2_value),
            (self.cylinder_value, &mut config.cylinder_value),
            (self.data_scale, &mut config.data_scale),
        ];
        for (flag, field) in overrides {
            if let Some(value) = flag {
                *field = value;
            }
        }
        if self.no_fade {
            config.fade = false;
        }

        Ok(config)
    }
}

/// Rewrites single-dash multi-letter flags (`-sx 64`, `-sx=64`) into their
/// long forms so clap can parse them. Arguments after `--` are left alone.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut out = Vec::new();
    let mut passthrough = false;
    for arg in args {
        if passthrough {
            out.push(arg);
            continue;
        }
        let Some(text) = arg.to_str() else {
            out.push(arg);
            continue;
        };
        if text == "--" {
            passthrough = true;
            out.push(arg);
            continue;
        }
        let (flag, value) = match text.split_once('=') {
            Some((flag, value)) => (flag, Some(value)),
            None => (text, None),
        };
        match SHORT_ALIASES.iter().find(|(short, _)| *short == flag) {
            Some((_, long)) => match value {
                Some(value) => out.push(format!("{long}={value}").into()),
                None => out.push((*long).into()),
            },
            None => out.push(arg),
        }
    }
    out
}
