//! # Stamp Render - Template Loading and Output
//!
//! `stamp-render` loads MiniJinja templates from disk, binds a
//! [`DataMapping`](stamp_map::DataMapping) into their context, and writes the
//! result to standard output, a file, or an in-memory buffer.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use stamp_map::parse_file;
//! use stamp_render::{MiniJinjaLoader, OutputDestination, TemplateLoader, TemplateSpec};
//!
//! let data = parse_file("site.map", stamp_map::DEFAULT_SEPARATOR).unwrap();
//! let template = MiniJinjaLoader::new()
//!     .load(&TemplateSpec::new("index.html.j2"))
//!     .unwrap();
//! OutputDestination::Stdout.render(template.as_ref(), &data).unwrap();
//! ```
//!
//! ## Key Types
//!
//! - [`TemplateLoader`]: Loads a [`Template`] from a [`TemplateSpec`], fresh on every call
//! - [`MiniJinjaLoader`]: The default loader
//! - [`OutputDestination`]: Stdout or file sink
//! - [`RenderError`]: Every failure from loading to writing

pub mod context;
mod engine;
mod error;
mod output;

pub use engine::{
    default_output_name, LoadOptions, MiniJinjaLoader, Template, TemplateLoader, TemplateSpec,
    LAYOUT_NAME, TEMPLATE_EXTENSIONS,
};
pub use error::RenderError;
pub use output::OutputDestination;
