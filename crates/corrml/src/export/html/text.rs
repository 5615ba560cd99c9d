//! Text transforms shared by items and non-items.

use std::sync::LazyLock;

use regex::Regex;

use corrml_core::options::TextOptions;

/// Either a tag (`<` up to and including `>`, or to the end of input when
/// unclosed) or a run of text outside any tag.
static TAGS_AND_TEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([<][^>]*[>]?)|([^<]+)").expect("tag pattern is valid"));

/// One piece of HTML source as split by [`split_tags_and_text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment<'a> {
    Tag(&'a str),
    Text(&'a str),
}

/// Splits HTML source into tags and the text between them.
///
/// Concatenating the fragments gives back `html` unchanged.
pub fn split_tags_and_text(html: &str) -> impl Iterator<Item = Fragment<'_>> {
    TAGS_AND_TEXT.captures_iter(html).filter_map(|captures| {
        captures
            .get(1)
            .map(|tag| Fragment::Tag(tag.as_str()))
            .or_else(|| captures.get(2).map(|text| Fragment::Text(text.as_str())))
    })
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Converts item or non-item text to HTML.
///
/// The transforms run in a fixed order: `escaped`, then `br`, then `nbsp`.
/// With `escaped` off the text may carry its own markup, and `nbsp` leaves
/// spaces inside that markup's tags alone.
///
/// # Examples
///
/// ```
/// # use corrml::export::html::text_to_html;
/// # use corrml_core::options::TextOptions;
/// let options = TextOptions::new().with_nbsp(true);
/// assert_eq!(
///     text_to_html("<b class=\"x y\">a b</b>", options),
///     "<b class=\"x y\">a&nbsp;b</b>"
/// );
/// ```
pub fn text_to_html(text: &str, options: TextOptions) -> String {
    let mut html = if options.escaped() {
        escape_html(text)
    } else {
        text.to_string()
    };

    if options.br() {
        html = html.replace('\n', "<br/>");
    }

    if options.nbsp() {
        html = split_tags_and_text(&html)
            .map(|fragment| match fragment {
                Fragment::Tag(tag) => tag.to_string(),
                Fragment::Text(text) => text.replace(' ', "&nbsp;"),
            })
            .collect();
    }

    html
}
