use clap::Parser;
use std::path::PathBuf;

use tobitmap::{Channel, ConvertParams, DEFAULT_LEVEL, ResizeBox};

use super::errors::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "tobitmap",
    version,
    about = "Convert an image into a MONO_VLSB framebuf literal and a two-tone preview PNG"
)]
pub struct CliArgs {
    /// Input image (format detected from content)
    pub input: PathBuf,

    /// Maximum width of the resized image
    pub max_width: Option<u32>,

    /// Maximum height of the resized image
    pub max_height: Option<u32>,

    /// Keep the original size (no MAX_WIDTH/MAX_HEIGHT needed)
    #[arg(long, default_value_t = false)]
    pub noresize: bool,

    /// Gray level to set monochrome, on the 0..=65535 channel scale
    #[arg(long, default_value_t = DEFAULT_LEVEL)]
    pub level: u32,

    /// Channel compared against the level
    #[arg(long, value_enum, default_value_t = Channel::Alpha)]
    pub channel: Channel,

    /// Alternate box width; 0 means no resize
    #[arg(long, default_value_t = 0)]
    pub width: u32,

    /// Alternate box height; 0 means no resize
    #[arg(long, default_value_t = 0)]
    pub height: u32,

    /// Preview PNG path
    #[arg(short, long, default_value = "out.png")]
    pub output: PathBuf,

    /// Enable logging (stderr)
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

impl CliArgs {
    /// Resize box selected by the flags: `--noresize`, then the positional
    /// pair, then `--width/--height`.
    pub fn resize_box(&self) -> Result<Option<ResizeBox>, AppError> {
        if self.noresize {
            return Ok(None);
        }

        match (self.max_width, self.max_height) {
            (Some(w), Some(h)) => {
                for size in [w, h] {
                    if size == 0 {
                        return Err(AppError::ZeroSize { size });
                    }
                }
                return Ok(Some(ResizeBox {
                    max_width: w,
                    max_height: h,
                }));
            }
            (Some(_), None) => {
                return Err(AppError::MissingArgument {
                    arg: "<MAX_HEIGHT>".to_string(),
                });
            }
            (None, Some(_)) => {
                return Err(AppError::MissingArgument {
                    arg: "<MAX_WIDTH>".to_string(),
                });
            }
            (None, None) => {}
        }

        // Only a box with both sides set resizes
        match (self.width, self.height) {
            (0, _) | (_, 0) => Ok(None),
            (w, h) => Ok(Some(ResizeBox {
                max_width: w,
                max_height: h,
            })),
        }
    }

    pub fn to_params(&self) -> Result<ConvertParams, AppError> {
        Ok(ConvertParams {
            channel: self.channel,
            level: self.level,
            resize: self.resize_box()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(std::iter::once("tobitmap").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults() {
        let params = parse(&["logo.png", "--noresize"]).to_params().unwrap();
        assert_eq!(params, ConvertParams::default());
    }

    #[test]
    fn positional_box() {
        let args = parse(&["logo.png", "128", "64", "--channel", "r", "--level", "100"]);
        let params = args.to_params().unwrap();
        assert_eq!(params.channel, Channel::Red);
        assert_eq!(params.level, 100);
        assert_eq!(
            params.resize,
            Some(ResizeBox {
                max_width: 128,
                max_height: 64
            })
        );
        assert_eq!(args.output, PathBuf::from("out.png"));
    }

    #[test]
    fn noresize_overrides_box() {
        let args = parse(&["logo.png", "128", "64", "--noresize"]);
        assert_eq!(args.resize_box(), Ok(None));
    }

    #[test]
    fn flag_box_with_zero_means_no_resize() {
        assert_eq!(
            parse(&["logo.png", "--width", "0", "--height", "0"]).resize_box(),
            Ok(None)
        );
        assert_eq!(
            parse(&["logo.png", "--width", "32", "--height", "16"]).resize_box(),
            Ok(Some(ResizeBox {
                max_width: 32,
                max_height: 16
            }))
        );
    }

    #[test]
    fn half_positional_box_is_a_usage_error() {
        let err = parse(&["logo.png", "128"]).resize_box().unwrap_err();
        assert_eq!(
            err,
            AppError::MissingArgument {
                arg: "<MAX_HEIGHT>".to_string()
            }
        );
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn single_flag_side_keeps_original_size() {
        assert_eq!(parse(&["logo.png"]).resize_box(), Ok(None));
        assert_eq!(parse(&["logo.png", "--width", "10"]).resize_box(), Ok(None));
        assert_eq!(parse(&["logo.png", "--height", "10"]).resize_box(), Ok(None));
    }

    #[test]
    fn zero_positional_size_is_rejected() {
        let err = parse(&["logo.png", "0", "64"]).resize_box().unwrap_err();
        assert_eq!(err, AppError::ZeroSize { size: 0 });
    }

    #[test]
    fn unknown_channel_is_rejected_by_clap() {
        let result = CliArgs::try_parse_from(["tobitmap", "logo.png", "--channel", "x"]);
        assert!(result.is_err());
    }

    #[test]
    fn missing_input_is_rejected_by_clap() {
        let err = CliArgs::try_parse_from(["tobitmap"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }
}
