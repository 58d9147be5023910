//! Options shared by the demo programs.

use std::path::PathBuf;
use clap::Parser;
use crate::Output;

/// Draw a figure and show it, or save it with `--output`.
#[derive(Parser, Debug)]
#[command(author, version, long_about = None)]
pub struct Cli {
    /// Save the figure to FILE (format from its extension) instead of
    /// opening a window.
    #[arg(short, long, value_name = "FILE", env = "MPLOT_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Resolution, in dots per inch, of the saved figure.
    #[arg(long, env = "MPLOT_DPI")]
    pub dpi: Option<f64>,
}

impl Cli {
    pub fn output(&self) -> Output {
        match &self.output {
            Some(path) => Output::File { path: path.clone(), dpi: self.dpi },
            None => Output::Screen,
        }
    }
}

/// Log to stderr, at level "info" unless `RUST_LOG` says otherwise.
pub fn init_logging() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")).init();
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Tests touching MPLOT_* variables must not interleave.
    static ENV: Mutex<()> = Mutex::new(());

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(args)
    }

    #[test]
    fn no_arguments_shows_on_screen() {
        let _env = ENV.lock().unwrap_or_else(|e| e.into_inner());
        let cli = parse(&["surface3d"]).unwrap();
        assert_eq!(cli.output(), Output::Screen);
    }

    #[test]
    fn output_file_with_dpi() {
        let _env = ENV.lock().unwrap_or_else(|e| e.into_inner());
        let cli = parse(
            &["contour", "-o", "target/contour.svg", "--dpi", "150"]).unwrap();
        assert_eq!(cli.output(),
                   Output::File { path: "target/contour.svg".into(),
                                  dpi: Some(150.) });
        let cli = parse(&["contour", "--output", "c.png"]).unwrap();
        assert_eq!(cli.output(), Output::file("c.png"));
    }

    #[test]
    fn output_from_environment() {
        let _env = ENV.lock().unwrap_or_else(|e| e.into_inner());
        std::env::set_var("MPLOT_OUTPUT", "target/env.pdf");
        std::env::set_var("MPLOT_DPI", "80");
        let from_env = parse(&["multiple"]);
        // Flags take precedence over the environment.
        let from_flags = parse(&["multiple", "-o", "flag.svg", "--dpi", "200"]);
        std::env::remove_var("MPLOT_OUTPUT");
        std::env::remove_var("MPLOT_DPI");
        assert_eq!(from_env.unwrap().output(),
                   Output::File { path: "target/env.pdf".into(),
                                  dpi: Some(80.) });
        assert_eq!(from_flags.unwrap().output(),
                   Output::File { path: "flag.svg".into(), dpi: Some(200.) });
    }

    #[test]
    fn dpi_must_be_a_number() {
        let _env = ENV.lock().unwrap_or_else(|e| e.into_inner());
        assert!(parse(&["simple", "--dpi", "high"]).is_err());
    }
}
