use anyhow::{Context, bail};
use clap::{Parser, Subcommand, ValueEnum};
use flake::Flake;

/// Command-line arguments for the `flake` binary.
///
/// Options fall back to environment variables (and a `.env` file) when not
/// given on the command line.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "flake",
    version,
    about = "Generate and inspect 192-bit sortable Flake IDs"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Upper bound on `--count`.
    ///
    /// Environment variable: `FLAKE_MAX_COUNT`
    #[arg(long, global = true, env = "FLAKE_MAX_COUNT", default_value_t = 10_000_000)]
    pub max_count: usize,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print fresh Flakes, one per line, in generation order.
    Generate {
        /// Number of Flakes to print.
        ///
        /// Environment variable: `FLAKE_COUNT`
        #[arg(short = 'n', long, env = "FLAKE_COUNT", default_value_t = 1)]
        count: usize,

        /// Output encoding.
        ///
        /// Environment variable: `FLAKE_FORMAT`
        #[arg(short, long, env = "FLAKE_FORMAT", value_enum, default_value_t = Format::Base64)]
        format: Format,
    },
    /// Decode a base64 Flake and print its fields.
    Inspect {
        /// The 32-character base64 Flake.
        // `-` is the lowest symbol, so Flakes may start with it.
        #[arg(allow_hyphen_values = true)]
        flake: String,
    },
    /// Print the current nanosecond clock reading.
    Now,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Base64,
    Hex,
}

/// What the binary will do, after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Generate { count: usize, format: Format },
    Inspect(Flake),
    Now,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub action: Action,
}

impl TryFrom<CliArgs> for CliConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        let action = match args.command {
            Command::Generate { count, format } => {
                if count == 0 {
                    bail!("FLAKE_COUNT must be greater than 0");
                }
                if count > args.max_count {
                    bail!(
                        "FLAKE_COUNT ({}) exceeds FLAKE_MAX_COUNT ({})",
                        count,
                        args.max_count
                    );
                }
                Action::Generate { count, format }
            }
            Command::Inspect { flake } => {
                let id = Flake::decode(&flake)
                    .with_context(|| format!("`{flake}` is not a base64 Flake"))?;
                Action::Inspect(id)
            }
            Command::Now => Action::Now,
        };

        Ok(Self { action })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(argv: &[&str]) -> anyhow::Result<CliConfig> {
        let args = CliArgs::try_parse_from(argv)?;
        CliConfig::try_from(args)
    }

    #[test]
    fn generate_defaults() {
        let cfg = config(&["flake", "generate"]).unwrap();
        // FLAKE_COUNT / FLAKE_FORMAT may be set in the environment running the
        // tests, so only check the shape here.
        assert!(matches!(cfg.action, Action::Generate { .. }));
    }

    #[test]
    fn generate_with_flags() {
        let cfg = config(&["flake", "generate", "-n", "5", "-f", "hex"]).unwrap();
        assert_eq!(
            cfg.action,
            Action::Generate {
                count: 5,
                format: Format::Hex
            }
        );
    }

    #[test]
    fn generate_rejects_zero_count() {
        let err = config(&["flake", "generate", "-n", "0"]).unwrap_err();
        assert!(err.to_string().contains("greater than 0"), "{err}");
    }

    #[test]
    fn generate_rejects_count_over_max() {
        let err = config(&["flake", "--max-count", "10", "generate", "-n", "11"]).unwrap_err();
        assert!(err.to_string().contains("exceeds"), "{err}");

        let cfg = config(&["flake", "generate", "-n", "10", "--max-count", "10"]).unwrap();
        assert!(matches!(cfg.action, Action::Generate { count: 10, .. }));
    }

    #[test]
    fn generate_rejects_unknown_format() {
        assert!(CliArgs::try_parse_from(["flake", "generate", "-f", "base32"]).is_err());
    }

    #[test]
    fn inspect_decodes() {
        let s = "-0123456789ABCDE------------Z_ab";
        let cfg = config(&["flake", "inspect", s]).unwrap();
        assert_eq!(cfg.action, Action::Inspect(Flake::decode(s).unwrap()));
    }

    #[test]
    fn inspect_accepts_min_flake() {
        let s = "-".repeat(32);
        let cfg = config(&["flake", "inspect", "--", &s]).unwrap();
        assert_eq!(cfg.action, Action::Inspect(Flake::MIN));
    }

    #[test]
    fn inspect_rejects_invalid() {
        let err = config(&["flake", "inspect", "nope"]).unwrap_err();
        assert!(err.to_string().contains("not a base64 Flake"), "{err}");
        assert!(format!("{err:#}").contains("invalid length: 4"), "{err:#}");
    }

    #[test]
    fn now_parses() {
        assert_eq!(config(&["flake", "now"]).unwrap().action, Action::Now);
    }

    #[test]
    fn subcommand_is_required() {
        assert!(CliArgs::try_parse_from(["flake"]).is_err());
    }
}
