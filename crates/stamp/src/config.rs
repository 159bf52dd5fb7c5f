//! Resolved, immutable run configuration.
//!
//! [`Config`] is built once from [`Cli`] and passed by reference to the map
//! parser, the dispatcher, and the preview server. All validation happens
//! here, before any template is loaded or file touched.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use stamp_render::{default_output_name, LoadOptions, TemplateSpec};

use crate::cli::Cli;
use crate::error::AppError;

/// Address the preview server always binds to.
pub const DEFAULT_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 8080);

/// Where rendered output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Stdout,
    File(PathBuf),
    Server(ServerConfig),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    /// Directory served under `/include/`.
    pub asset_root: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub template: TemplateSpec,
    pub load_options: LoadOptions,
    pub map: Option<PathBuf>,
    pub separator: String,
    /// Extra map lines from `--set`, applied after the map file.
    pub inline: Vec<String>,
    pub mode: Mode,
}

impl Config {
    /// Resolves the configuration for `cli`, using the process working
    /// directory as the default asset root.
    pub fn from_cli(cli: &Cli) -> Result<Self, AppError> {
        Self::resolve(cli, std::env::current_dir)
    }

    /// Like [`from_cli`](Self::from_cli) with an explicit working-directory source.
    pub fn resolve(
        cli: &Cli,
        current_dir: impl FnOnce() -> std::io::Result<PathBuf>,
    ) -> Result<Self, AppError> {
        if cli.separator.is_empty() {
            return Err(AppError::Usage("separator must not be empty".to_string()));
        }

        let mode = match (cli.stdout, cli.httpd) {
            (true, true) => {
                return Err(AppError::Usage(
                    "--stdout and --httpd cannot be used together".to_string(),
                ))
            }
            (true, false) => Mode::Stdout,
            (false, true) => {
                let asset_root = match &cli.path {
                    Some(path) => path.clone(),
                    None => current_dir().map_err(AppError::WorkingDir)?,
                };
                Mode::Server(ServerConfig {
                    addr: DEFAULT_ADDR,
                    asset_root,
                })
            }
            (false, false) => {
                let output = cli
                    .output
                    .clone()
                    .unwrap_or_else(|| default_output_name(&cli.file));
                let clobbered = std::iter::once(&cli.file)
                    .chain(cli.inner.as_ref())
                    .find(|source| same_file(&output, source));
                if let Some(source) = clobbered {
                    return Err(AppError::Usage(format!(
                        "output file {} would overwrite template {}",
                        output.display(),
                        source.display()
                    )));
                }
                Mode::File(output)
            }
        };

        let mut template = TemplateSpec::new(&cli.file);
        if let Some(inner) = &cli.inner {
            template = template.with_inner(inner);
        }

        Ok(Self {
            template,
            load_options: LoadOptions {
                strict: cli.strict,
                ..LoadOptions::default()
            },
            map: cli.map.clone(),
            separator: cli.separator.clone(),
            inline: cli.set.clone(),
            mode,
        })
    }
}

/// True when both paths exist and resolve to the same file.
fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
