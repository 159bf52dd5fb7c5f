//! Routing a render to exactly one sink.

use std::sync::Arc;

use stamp_map::{DataMapping, MapBuilder};
use stamp_render::{OutputDestination, TemplateLoader};
use tracing::{info, warn};

use crate::config::{Config, Mode};
use crate::error::AppError;
use crate::server::PreviewServer;

/// Builds the template data: the map file first, then `--set` entries.
pub fn build_data(config: &Config) -> Result<DataMapping, AppError> {
    let mut builder = MapBuilder::new(config.separator.as_str())?;
    if let Some(map) = &config.map {
        builder.read_file(map)?;
    }
    for entry in &config.inline {
        if !builder.push_line(entry) {
            warn!(entry = %entry, "ignoring --set entry without a key and value");
        }
    }
    Ok(builder.finish())
}

/// Selects the sink for a [`Config`] and performs the render.
pub struct OutputDispatcher {
    loader: Arc<dyn TemplateLoader>,
}

impl OutputDispatcher {
    pub fn new(loader: Arc<dyn TemplateLoader>) -> Self {
        Self { loader }
    }

    /// Renders once to stdout or a file, or runs the preview server until
    /// the process is stopped.
    ///
    /// For one-shot modes the template is loaded before the map file is
    /// read. Server mode defers loading to each request.
    pub fn dispatch(&self, config: &Config) -> Result<(), AppError> {
        let destination = match &config.mode {
            Mode::Server(server) => {
                let data = build_data(config)?;
                return PreviewServer::new(
                    server.clone(),
                    Arc::clone(&self.loader),
                    config.template.clone(),
                    data,
                )
                .run();
            }
            Mode::Stdout => OutputDestination::Stdout,
            Mode::File(path) => OutputDestination::File(path.clone()),
        };

        let template = self.loader.load(&config.template).map_err(AppError::Load)?;
        let data = build_data(config)?;
        destination
            .render(template.as_ref(), &data)
            .map_err(AppError::Render)?;

        if let OutputDestination::File(path) = &destination {
            info!(path = %path.display(), "rendered {}", config.template.main.display());
        }
        Ok(())
    }
}
