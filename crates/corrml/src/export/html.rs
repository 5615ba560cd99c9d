//! HTML rendering of Correspondence Markup nodes.
//!
//! The markup produced here is what the correspondence viewer's scripts and
//! stylesheets expect: items are `<span data-id>` elements, lines, blocks and
//! translations are nested `<div>`s with two-space indentation per level.
//!
//! ```text
//! <div class="translation">
//!   <div class="block english-block">
//!     <div class="language">English</div>
//!     <div class="line" data-line-id="A">
//!       <span data-id="A1">Hello</span>, <span data-id="A2">world</span>
//!     </div>
//!   </div>
//! </div>
//! ```

mod text;

pub use text::{Fragment, split_tags_and_text, text_to_html};

use log::trace;

use corrml_core::{
    ast::{Block, Content, Item, Line, NonItem, Translation},
    options::{RenderOptions, TextOptions},
};

use super::Render;

/// Drops one trailing newline and indents every remaining line break.
fn indent_children(children: &str) -> String {
    children
        .strip_suffix('\n')
        .unwrap_or(children)
        .replace('\n', "\n  ")
}

/// A `<div>` wrapping indented children, with an optional heading `<div>`
/// before them.
fn container(class: &str, heading_class: &str, heading: Option<&str>, children: &str) -> String {
    let heading = heading
        .map(|heading| format!("<div class=\"{heading_class}\">{heading}</div>\n  "))
        .unwrap_or_default();

    format!(
        "<div class=\"{class}\">\n  {heading}{children}\n</div>\n",
        children = indent_children(children)
    )
}

impl Render for Item {
    type Options = TextOptions;

    fn render(&self, options: &TextOptions) -> String {
        format!(
            "<span data-id=\"{}\">{}</span>",
            self.id(),
            text_to_html(self.text(), *options)
        )
    }
}

impl Render for NonItem {
    type Options = TextOptions;

    fn render(&self, options: &TextOptions) -> String {
        text_to_html(self.text(), *options)
    }
}

impl Render for Content {
    type Options = TextOptions;

    fn render(&self, options: &TextOptions) -> String {
        match self {
            Content::Item(item) => item.render(options),
            Content::NonItem(non_item) => non_item.render(options),
        }
    }
}

impl Render for Line {
    type Options = TextOptions;

    fn render(&self, options: &TextOptions) -> String {
        let content: String = self
            .content()
            .iter()
            .map(|content| content.render(options))
            .collect();

        format!(
            "<div class=\"line\" data-line-id=\"{}\">\n  {content}\n</div>\n",
            self.id()
        )
    }
}

impl Render for Block {
    type Options = TextOptions;

    fn render(&self, options: &TextOptions) -> String {
        let lines: String = self.lines().iter().map(|line| line.render(options)).collect();

        container(&self.css_class_names(), "language", self.title(), &lines)
    }
}

impl Render for Translation {
    type Options = RenderOptions;

    fn render(&self, options: &RenderOptions) -> String {
        trace!(blocks = self.blocks().len(), title:? = self.title(); "Rendering translation");

        let per_block = options.for_blocks(self.blocks().len());
        let blocks: String = self
            .blocks()
            .iter()
            .zip(&per_block)
            .map(|(block, block_options)| block.render(block_options))
            .collect();

        container("translation", "description", self.title(), &blocks)
    }
}

/// A whole document: each translation rendered with the same options,
/// separated by blank lines.
impl Render for [Translation] {
    type Options = RenderOptions;

    fn render(&self, options: &RenderOptions) -> String {
        self.iter()
            .map(|translation| translation.render(options))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn greeting_line() -> Line {
        Line::new(
            "A",
            vec![
                Item::new("A1", "Hello").into(),
                NonItem::new(", ").into(),
                Item::new("A2", "world").into(),
            ],
        )
    }

    #[test]
    fn test_render_item() {
        let item = Item::new("A1,B2", "x < y");

        assert_eq!(
            item.render(&TextOptions::new()),
            "<span data-id=\"A1,B2\">x < y</span>"
        );
        assert_eq!(
            item.render(&TextOptions::new().with_escaped(true)),
            "<span data-id=\"A1,B2\">x &lt; y</span>"
        );
    }

    #[test]
    fn test_render_line() {
        assert_eq!(
            greeting_line().render(&TextOptions::new()),
            "<div class=\"line\" data-line-id=\"A\">\n  \
             <span data-id=\"A1\">Hello</span>, <span data-id=\"A2\">world</span>\n\
             </div>\n"
        );
    }

    #[test]
    fn test_render_block_with_header() {
        let block = Block::new(
            Some("english".to_string()),
            Some("English".to_string()),
            vec![greeting_line()],
        );

        assert_eq!(
            block.render(&TextOptions::new()),
            "<div class=\"block english-block\">\n  \
             <div class=\"language\">English</div>\n  \
             <div class=\"line\" data-line-id=\"A\">\n    \
             <span data-id=\"A1\">Hello</span>, <span data-id=\"A2\">world</span>\n  \
             </div>\n\
             </div>\n"
        );
    }

    #[test]
    fn test_render_empty_block() {
        assert_eq!(
            Block::untagged(Vec::new()).render(&TextOptions::new()),
            "<div class=\"block\">\n  \n</div>\n"
        );
    }

    #[test]
    fn test_render_empty_type_tag_uses_base_class() {
        let block = Block::new(Some(String::new()), None, Vec::new());
        assert!(block.render(&TextOptions::new()).starts_with("<div class=\"block\">"));
    }

    #[test]
    fn test_render_translation() {
        let translation = Translation::new(
            Some("Greeting".to_string()),
            vec![Block::untagged(Vec::new())],
        );

        assert_eq!(
            translation.render(&RenderOptions::default()),
            "<div class=\"translation\">\n  \
             <div class=\"description\">Greeting</div>\n  \
             <div class=\"block\">\n    \n  </div>\n\
             </div>\n"
        );
    }

    #[test]
    fn test_render_empty_translation() {
        assert_eq!(
            Translation::new(None, Vec::new()).render(&RenderOptions::default()),
            "<div class=\"translation\">\n  \n</div>\n"
        );
    }

    #[test]
    fn test_per_block_options() {
        let block = || {
            Block::untagged(vec![Line::new("", vec![NonItem::new("a\nb").into()])])
        };
        let translation = Translation::new(None, vec![block(), block(), block()]);
        let options = RenderOptions::default().with_br(vec![true, false]);

        let html = translation.render(&options);

        assert_eq!(html.matches("<br/>").count(), 1);
        let first_block_end = html.find("</div>").expect("block should close");
        assert!(html[..first_block_end].contains("a<br/>b"));
    }

    #[test]
    fn test_scalar_option_applies_to_every_block() {
        let block = |text: &str| {
            Block::untagged(vec![Line::new("", vec![NonItem::new(text).into()])])
        };
        let translation = Translation::new(None, vec![block("x y"), block("u v")]);
        let options = RenderOptions::default().with_nbsp(true);

        let html = translation.render(&options);

        assert!(html.contains("x&nbsp;y"));
        assert!(html.contains("u&nbsp;v"));
    }

    #[test]
    fn test_render_document() {
        let translations = vec![
            Translation::new(None, Vec::new()),
            Translation::new(None, Vec::new()),
        ];
        let single = translations[0].render(&RenderOptions::default());

        assert_eq!(
            translations.as_slice().render(&RenderOptions::default()),
            format!("{single}\n{single}")
        );
    }

    #[test]
    fn test_render_is_deterministic() {
        let block = Block::new(Some("ruby".to_string()), None, vec![greeting_line()]);
        let options = TextOptions::new().with_nbsp(true);

        assert_eq!(block.render(&options), block.render(&options));
    }
}
