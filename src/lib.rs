//! doxmd — render [dox](https://github.com/tj/dox) documentation comments as
//! markdown.
//!
//! Input is the JSON array dox produces for a source file; output is a
//! markdown API reference, optionally wrapped in a README scaffold built from
//! the package's `package.json`.
//!
//! ```no_run
//! # fn main() -> anyhow::Result<()> {
//! let dox_json = std::fs::read_to_string("docs.json")?;
//! let entries = doxmd::parse_entries(&dox_json)?;
//! let markdown = doxmd::render(&entries, &doxmd::RenderOptions::default())?;
//! print!("{}", markdown);
//! # Ok(())
//! # }
//! ```

pub mod model;
pub mod render;
pub mod table;
pub mod tags;
pub mod text;

pub use model::{parse_entries, DocEntry, PackageDescriptor, Tag, Visibility};
pub use render::{render, MissingApi, RenderOptions};
