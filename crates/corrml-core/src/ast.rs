//! Document model for Correspondence Markup.
//!
//! A document is an ordered sequence of [`Translation`]s. Each translation
//! holds [`Block`]s (one per "language" version of the same content), each
//! block holds [`Line`]s, and each line holds [`Content`]: either an
//! [`Item`] carrying a correlation id or a plain [`NonItem`].
//!
//! ```text
//! Translation
//!   └── Block (type tag, title)
//!         └── Line (id)
//!               └── Item (id, text) | NonItem (text)
//! ```
//!
//! All nodes are immutable once built. Equality is structural and exists
//! mostly so tests can compare whole trees.

/// Text with a correlation id.
///
/// Items with the same id in sibling blocks of a [`Translation`] are shown as
/// corresponding to each other. Items sharing an id within one block are
/// parts of a single virtual item (e.g. the two halves of a phrasal verb).
///
/// The id is stored in its resolved string form and may be a comma-separated
/// list (e.g. `"A1,B3"`) for partial, many-to-one correspondence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id: String,
    text: String,
}

impl Item {
    /// Creates an item from an already resolved id and its text.
    ///
    /// # Examples
    ///
    /// ```
    /// use corrml_core::ast::Item;
    ///
    /// let item = Item::new("A1", "hello");
    /// assert_eq!(item.id(), "A1");
    /// assert_eq!(item.text(), "hello");
    /// ```
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }

    /// Returns the resolved id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the item text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Text that is not correlated with anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonItem {
    text: String,
}

impl NonItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// A single piece of line content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Item(Item),
    NonItem(NonItem),
}

impl Content {
    /// Returns the correlation id for items, `None` for non-items.
    pub fn id(&self) -> Option<&str> {
        match self {
            Content::Item(item) => Some(item.id()),
            Content::NonItem(_) => None,
        }
    }
}

impl From<Item> for Content {
    fn from(item: Item) -> Self {
        Content::Item(item)
    }
}

impl From<NonItem> for Content {
    fn from(non_item: NonItem) -> Self {
        Content::NonItem(non_item)
    }
}

/// An ordered group of items and non-items forming one row of a block.
///
/// The id doubles as the scope prefix used when resolving bare item ids and
/// as the key relating lines across blocks of the same translation. It may
/// be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    id: String,
    content: Vec<Content>,
}

impl Line {
    pub fn new(id: impl Into<String>, content: Vec<Content>) -> Self {
        Self {
            id: id.into(),
            content,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn content(&self) -> &[Content] {
        &self.content
    }

    /// Iterates over the items of this line, skipping non-items.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.content.iter().filter_map(|content| match content {
            Content::Item(item) => Some(item),
            Content::NonItem(_) => None,
        })
    }
}

/// One version of the content inside a [`Translation`].
///
/// The optional type tag (typically a language, e.g. `english`) determines
/// the CSS class of the rendered block; the optional title is displayed
/// above it (e.g. `English`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    type_tag: Option<String>,
    title: Option<String>,
    lines: Vec<Line>,
}

impl Block {
    pub fn new(type_tag: Option<String>, title: Option<String>, lines: Vec<Line>) -> Self {
        Self {
            type_tag,
            title,
            lines,
        }
    }

    /// Creates a block with neither type tag nor title.
    pub fn untagged(lines: Vec<Line>) -> Self {
        Self::new(None, None, lines)
    }

    pub fn type_tag(&self) -> Option<&str> {
        self.type_tag.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Returns the CSS class list for this block.
    ///
    /// Always contains the base class `block`; a non-empty type tag adds
    /// `<type_tag>-block`.
    ///
    /// # Examples
    ///
    /// ```
    /// use corrml_core::ast::Block;
    ///
    /// let block = Block::new(Some("english".to_string()), None, vec![]);
    /// assert_eq!(block.css_class_names(), "block english-block");
    /// assert_eq!(Block::untagged(vec![]).css_class_names(), "block");
    /// ```
    pub fn css_class_names(&self) -> String {
        match self.type_tag() {
            Some(tag) if !tag.is_empty() => format!("block {tag}-block"),
            _ => "block".to_string(),
        }
    }
}

/// A group of blocks representing the same content in different forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    title: Option<String>,
    blocks: Vec<Block>,
}

impl Translation {
    pub fn new(title: Option<String>, blocks: Vec<Block>) -> Self {
        Self { title, blocks }
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }
}
