//! Markdown rendering of a whole dox document, optionally as a README.

pub mod markdown;
pub mod readme;

use crate::model::*;
use crate::tags;
use anyhow::{bail, Context, Result};

/// What to do with an entry that has no `@api` tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingApi {
    /// Refuse to render.
    #[default]
    Fail,
    /// Treat the entry as public.
    AssumePublic,
}

/// Render configuration.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Wrap the API docs in a README: title, description, installation.
    pub readme: bool,
    /// Add a Travis CI badge to the README header. Requires `readme`.
    pub travis: bool,
    /// Package metadata; required when `readme` is set.
    pub package: Option<PackageDescriptor>,
    /// Handling of entries without `@api`; see [`MissingApi`].
    pub missing_api: MissingApi,
}

/// Render `entries` as a single markdown document.
///
/// Public entries come first, then a `## Private members` heading followed
/// by private entries; both groups keep their input order. Entries without a
/// resolvable name are skipped.
pub fn render(entries: &[DocEntry], options: &RenderOptions) -> Result<String> {
    let package = if options.readme {
        Some(
            options
                .package
                .as_ref()
                .context("a package descriptor is required to render a README")?,
        )
    } else {
        None
    };

    let mut public = Vec::new();
    let mut private = Vec::new();
    for (index, entry) in entries.iter().enumerate() {
        let name = tags::display_name(entry);
        match classify(index, entry, name.as_deref(), options.missing_api)? {
            Visibility::Public => public.push((name, entry)),
            Visibility::Private => private.push((name, entry)),
        }
    }

    tracing::debug!(
        public = public.len(),
        private = private.len(),
        readme = options.readme,
        "partitioned entries"
    );

    let mut output = String::new();

    if let Some(pkg) = package {
        readme::render_header(&mut output, pkg, options.travis)?;
    }

    render_group(&mut output, &public);
    output.push_str("## Private members\n\n");
    render_group(&mut output, &private);

    if let Some(pkg) = package {
        readme::render_footer(&mut output, pkg);
    }

    Ok(output)
}

fn classify(
    index: usize,
    entry: &DocEntry,
    name: Option<&str>,
    policy: MissingApi,
) -> Result<Visibility> {
    match (tags::visibility(entry), policy) {
        (Some(visibility), _) => Ok(visibility),
        (None, MissingApi::AssumePublic) => {
            tracing::warn!(index, name, "entry has no @api tag, assuming public");
            Ok(Visibility::Public)
        }
        (None, MissingApi::Fail) => bail!(
            "entry {} ({}) has no @api tag",
            index,
            name.unwrap_or("<unnamed>")
        ),
    }
}

fn render_group(output: &mut String, group: &[(Option<String>, &DocEntry)]) {
    for (name, entry) in group {
        match name {
            Some(name) => {
                tracing::debug!(name = name.as_str(), "rendering entry");
                markdown::render_entry(output, name, entry)
            }
            None => tracing::debug!("skipping entry without a name"),
        }
    }
}
