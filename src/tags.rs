//! Tag lookup over a comment's ordered tag list.
//!
//! Every query is either first-match or all-matches; tag order is preserved.

use crate::model::*;

/// First tag `select` maps to `Some`.
pub fn find_tag<'a, T>(tags: &'a [Tag], select: impl Fn(&'a Tag) -> Option<T>) -> Option<T> {
    tags.iter().find_map(select)
}

/// Every tag `select` maps to `Some`, in tag order.
pub fn find_tags<'a, T>(tags: &'a [Tag], select: impl Fn(&'a Tag) -> Option<T>) -> Vec<T> {
    tags.iter().filter_map(select).collect()
}

/// The `@api` visibility, if the entry carries an `@api` tag.
pub fn visibility(entry: &DocEntry) -> Option<Visibility> {
    find_tag(&entry.tags, |tag| match tag {
        Tag::Api { visibility } => Some(*visibility),
        _ => None,
    })
}

pub fn alias(tags: &[Tag]) -> Option<&str> {
    find_tag(tags, |tag| match tag {
        Tag::Alias { string } => Some(string.as_str()),
        _ => None,
    })
}

pub fn module(tags: &[Tag]) -> Option<&str> {
    find_tag(tags, |tag| match tag {
        Tag::Module { string } => Some(string.as_str()),
        _ => None,
    })
}

pub fn returns(tags: &[Tag]) -> Option<&ReturnsTag> {
    find_tag(tags, |tag| match tag {
        Tag::Returns(ret) => Some(ret),
        _ => None,
    })
}

pub fn params(tags: &[Tag]) -> Vec<&FieldTag> {
    find_tags(tags, |tag| match tag {
        Tag::Param(field) => Some(field),
        _ => None,
    })
}

pub fn properties(tags: &[Tag]) -> Vec<&FieldTag> {
    find_tags(tags, |tag| match tag {
        Tag::Property(field) => Some(field),
        _ => None,
    })
}

pub fn examples(tags: &[Tag]) -> Vec<&str> {
    find_tags(tags, |tag| match tag {
        Tag::Example { string } => Some(string.as_str()),
        _ => None,
    })
}

/// Resolve the heading name for an entry.
///
/// `@alias` wins, then `@module` (first `/` becomes `.`), then the name
/// inferred from the code. Returns `None` when all of them are empty.
pub fn display_name(entry: &DocEntry) -> Option<String> {
    let name = if let Some(alias) = alias(&entry.tags) {
        alias.to_string()
    } else if let Some(module) = module(&entry.tags) {
        module.replacen('/', ".", 1)
    } else {
        entry
            .context
            .as_ref()
            .map(|ctx| ctx.name.clone())
            .unwrap_or_default()
    };

    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}
