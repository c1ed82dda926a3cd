use super::model::Conditional;

/// `coordinator_string() + condition_string()`, e.g. `and 'Country' is 'England'`.
pub fn to_presentation_string<C: Conditional + ?Sized>(condition: &C) -> String {
    format!(
        "{}{}",
        condition.coordinator_string(),
        condition.condition_string()
    )
}

/// HTML variant of [`to_presentation_string`] with a bold coordinator.
pub fn to_presentation_html<C: Conditional + ?Sized>(condition: &C) -> String {
    format!(
        "{}{}",
        condition.coordinator_html(),
        condition.condition_html()
    )
}

pub fn to_expression<C: Conditional + ?Sized>(condition: &C) -> String {
    format!(
        "{}{}",
        condition.coordinator_string(),
        condition.condition_expression()
    )
}

pub(crate) fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
