use std::convert::Infallible;

use indexmap::IndexMap;

use super::{NamedFields, TemplateError};

/// Block name every frame template uses for its generated body.
pub const PLACEHOLDER: &str = "Placeholder";

const FIELD_OPEN: &str = "[";
const BLOCK_OPEN: &str = "//[";

/// The sentinel text marking block `name` (e.g. `//[Placeholder]`).
pub fn placeholder_name(name: &str) -> String {
    format!("{}{}]", BLOCK_OPEN, name)
}

/// Replace every `[Field]` token whose name is one of `source`'s fields.
///
/// Tokens naming no field are left untouched. A field without a value
/// fails only when its token actually occurs.
pub fn fill_fields(template: &str, source: &impl NamedFields) -> Result<String, TemplateError> {
    let fields = source.named_fields();
    scan(template, FIELD_OPEN, |name| match fields.get(name) {
        None => Ok(None),
        Some(None) => Err(TemplateError::MissingFieldValue {
            field: name.to_string(),
        }),
        Some(Some(value)) => Ok(Some(value)),
    })
}

/// Replace every `//[Block]` sentinel with its mapped text.
///
/// Repeated sentinels all receive the same text; unknown ones are left
/// untouched.
pub fn fill_blocks(template: &str, blocks: &IndexMap<&str, &str>) -> String {
    match scan::<Infallible, _>(template, BLOCK_OPEN, |name| Ok(blocks.get(name).copied())) {
        Ok(filled) => filled,
        Err(never) => match never {},
    }
}

/// Fill the `//[Placeholder]` block of a frame template.
pub fn fill_placeholder(frame: &str, body: &str) -> String {
    fill_blocks(frame, &IndexMap::from([(PLACEHOLDER, body)]))
}

/// Single pass over `template`, resolving every `<open>Name]` marker.
///
/// `resolve` returns `Ok(None)` to leave a marker as written.
fn scan<'v, E, F>(template: &str, open: &str, mut resolve: F) -> Result<String, E>
where
    F: FnMut(&str) -> Result<Option<&'v str>, E>,
{
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(open) {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + open.len()..];

        let replacement = match marker_name(after_open) {
            Some(name) => resolve(name)?.map(|value| (value, name.len() + 1)),
            None => None,
        };

        match replacement {
            Some((value, consumed)) => {
                out.push_str(value);
                rest = &after_open[consumed..];
            }
            None => {
                out.push_str(open);
                rest = after_open;
            }
        }
    }

    out.push_str(rest);
    Ok(out)
}

/// Name of a marker starting right after its opening bracket.
fn marker_name(s: &str) -> Option<&str> {
    let end = s.find(']')?;
    let name = &s[..end];
    let valid = !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    valid.then_some(name)
}
