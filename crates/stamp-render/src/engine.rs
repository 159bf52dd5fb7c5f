//! Template loading abstraction.
//!
//! [`TemplateLoader`] turns a [`TemplateSpec`] (main file plus optional inner
//! file) into a ready-to-run [`Template`]. Loading always reads from disk;
//! nothing is cached between calls, so callers that load per request see the
//! current file contents every time.
//!
//! The default implementation is [`MiniJinjaLoader`].
//!
//! # Layout and Inner Templates
//!
//! The main template is registered under its file name and under the alias
//! [`LAYOUT_NAME`]. When an inner template is given it becomes the entry
//! point and usually extends the layout:
//!
//! ```jinja
//! {% extends "layout" %}
//! {% block body %}Hello {{ name }}{% endblock %}
//! ```
//!
//! Any other name (`{% include "nav.j2" %}`) is resolved relative to the
//! main template's directory.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use minijinja::{path_loader, Environment, UndefinedBehavior};
use stamp_map::DataMapping;
use tracing::debug;

use crate::context::bind;
use crate::error::RenderError;

/// Alias under which the main template is always registered.
pub const LAYOUT_NAME: &str = "layout";

/// Recognized template file extensions, stripped when deriving output names.
pub const TEMPLATE_EXTENSIONS: &[&str] = &[".jinja", ".jinja2", ".j2", ".txt"];

/// Which files make up a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSpec {
    pub main: PathBuf,
    pub inner: Option<PathBuf>,
}

impl TemplateSpec {
    pub fn new(main: impl Into<PathBuf>) -> Self {
        Self {
            main: main.into(),
            inner: None,
        }
    }

    pub fn with_inner(mut self, inner: impl Into<PathBuf>) -> Self {
        self.inner = Some(inner.into());
        self
    }
}

/// Engine settings applied on every load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Fail on any use of an undefined value, including printing it.
    pub strict: bool,
    /// Keep the final newline of template sources in the output.
    pub keep_trailing_newline: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            strict: false,
            keep_trailing_newline: true,
        }
    }
}

/// A loaded template that can be executed any number of times.
pub trait Template: Send {
    /// Renders against `data`, writing into `out`.
    fn execute(&self, out: &mut dyn Write, data: &DataMapping) -> Result<(), RenderError>;

    /// Renders into a fresh buffer. Nothing is returned on failure, so a
    /// partial render never leaks to the caller.
    fn render_bytes(&self, data: &DataMapping) -> Result<Vec<u8>, RenderError> {
        let mut buf = Vec::new();
        self.execute(&mut buf, data)?;
        Ok(buf)
    }
}

/// Produces templates from files.
///
/// Implementations must read the sources on every call.
pub trait TemplateLoader: Send + Sync {
    fn load(&self, spec: &TemplateSpec) -> Result<Box<dyn Template>, RenderError>;
}

/// MiniJinja-based loader.
///
/// # Example
///
/// ```rust,no_run
/// use stamp_render::{MiniJinjaLoader, TemplateLoader, TemplateSpec};
/// use stamp_map::DataMapping;
///
/// let loader = MiniJinjaLoader::new();
/// let template = loader.load(&TemplateSpec::new("index.html.j2"))?;
/// let html = template.render_bytes(&DataMapping::new())?;
/// # Ok::<(), stamp_render::RenderError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct MiniJinjaLoader {
    options: LoadOptions,
}

impl MiniJinjaLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: LoadOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> LoadOptions {
        self.options
    }

    fn environment(&self, base_dir: &Path) -> Environment<'static> {
        let mut env = Environment::new();
        env.set_loader(path_loader(base_dir));
        env.set_keep_trailing_newline(self.options.keep_trailing_newline);
        if self.options.strict {
            env.set_undefined_behavior(UndefinedBehavior::Strict);
        }
        env
    }
}

impl TemplateLoader for MiniJinjaLoader {
    fn load(&self, spec: &TemplateSpec) -> Result<Box<dyn Template>, RenderError> {
        let base_dir = match spec.main.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let mut env = self.environment(&base_dir);

        let main_name = template_name(&spec.main);
        let main_source = read_source(&spec.main)?;
        env.add_template_owned(main_name.clone(), main_source.clone())?;
        env.add_template_owned(LAYOUT_NAME, main_source)?;

        let entry = match &spec.inner {
            Some(inner) => {
                let inner_name = template_name(inner);
                env.add_template_owned(inner_name.clone(), read_source(inner)?)?;
                inner_name
            }
            None => main_name,
        };

        debug!(main = %spec.main.display(), entry = %entry, "loaded template");
        Ok(Box::new(MiniJinjaTemplate { env, entry }))
    }
}

struct MiniJinjaTemplate {
    env: Environment<'static>,
    entry: String,
}

impl Template for MiniJinjaTemplate {
    fn execute(&self, out: &mut dyn Write, data: &DataMapping) -> Result<(), RenderError> {
        let tmpl = self.env.get_template(&self.entry)?;
        tmpl.render_to_write(bind(data), &mut *out)?;
        Ok(())
    }
}

fn read_source(path: &Path) -> Result<String, RenderError> {
    fs::read_to_string(path).map_err(|e| RenderError::ReadError(path.to_path_buf(), e))
}

fn template_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// Derives the default output file name for a template.
///
/// The directory is dropped, a recognized template extension is stripped,
/// and `.html` is always appended: `pages/index.j2` → `index.html`,
/// `page.html` → `page.html.html`.
pub fn default_output_name(template: &Path) -> PathBuf {
    let name = template_name(template);
    let stem = TEMPLATE_EXTENSIONS
        .iter()
        .find_map(|ext| name.strip_suffix(*ext))
        .filter(|stem| !stem.is_empty())
        .unwrap_or(name.as_str());

    PathBuf::from(format!("{}.html", stem))
}
