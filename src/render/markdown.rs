//! Markdown for a single documented entry.

use crate::model::*;
use crate::table::render_table;
use crate::tags;
use crate::text::reformat;

/// Append the documentation block for `entry` under the heading `name`.
///
/// Sections, in order: heading, description, parameters, properties,
/// examples, return value. Empty sections are left out.
pub fn render_entry(output: &mut String, name: &str, entry: &DocEntry) {
    let params = tags::params(&entry.tags);

    if params.is_empty() {
        output.push_str(&format!("### {}\n\n", name));
    } else {
        let args: Vec<&str> = params.iter().map(|p| p.name.as_str()).collect();
        output.push_str(&format!("### {}({})\n\n", name, args.join(", ")));
    }

    if let Some(ref desc) = entry.description {
        let text = reformat(&desc.full);
        if !text.is_empty() {
            output.push_str(&text);
            output.push_str("\n\n");
        }
    }

    render_fields(output, &params, "param", "Parameters");
    render_fields(output, &tags::properties(&entry.tags), "property", "Properties");

    let examples = tags::examples(&entry.tags);
    if !examples.is_empty() {
        output.push_str("### Example\n\n");
        for example in examples {
            output.push_str(&format!("```js\n{}\n```\n\n", example));
        }
    }

    if let Some(ret) = tags::returns(&entry.tags) {
        let line = format!(
            "**Returns** `{}`, {}",
            ret.types.join(","),
            reformat(&ret.description)
        );
        output.push_str(line.trim_end());
        output.push_str("\n\n");
    }
}

/// `### <title>` followed by a `<column> | type | description` table.
fn render_fields(output: &mut String, fields: &[&FieldTag], column: &str, title: &str) {
    if fields.is_empty() {
        return;
    }

    let mut rows = vec![vec![
        column.to_string(),
        "type".to_string(),
        "description".to_string(),
    ]];
    for field in fields {
        let optional = if field.optional { "_optional:_ " } else { "" };
        rows.push(vec![
            field.name.clone(),
            type_cell(field),
            format!("{}{}", optional, reformat(&field.description)),
        ]);
    }

    output.push_str(&format!("### {}\n\n", title));
    output.push_str(&render_table(&rows));
    output.push_str("\n\n");
}

/// Braced type expressions (`{String|Array}`) are shown as written with `|`
/// swapped for `/` so they survive the table; otherwise the parsed types.
fn type_cell(field: &FieldTag) -> String {
    if field.types_description.starts_with('{') {
        field.types_description.replace('|', "/")
    } else {
        field.types.join(",")
    }
}
