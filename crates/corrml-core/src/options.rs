//! Render options and per-block broadcasting.
//!
//! Two levels of options exist:
//!
//! - [`TextOptions`] - the resolved on/off switches applied to the text of a
//!   single block (and everything inside it).
//! - [`RenderOptions`] - translation-level options where each key is either a
//!   single flag for every block or a sequence with one flag per block.
//!
//! [`RenderOptions::for_blocks`] turns the latter into the former.
//!
//! # Example
//!
//! ```
//! # use corrml_core::options::{RenderOptions, TextOptions};
//! let options = RenderOptions::default()
//!     .with_escaped(true)
//!     .with_br(vec![true, false]);
//!
//! let per_block = options.for_blocks(3);
//! assert_eq!(per_block[0], TextOptions::new().with_escaped(true).with_br(true));
//! assert_eq!(per_block[1], TextOptions::new().with_escaped(true));
//! assert_eq!(per_block[2], TextOptions::new().with_escaped(true));
//! ```

use log::trace;
use serde::Deserialize;

/// Text transform switches for one block.
///
/// The transforms are applied in a fixed order: `escaped`, then `br`, then
/// `nbsp`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TextOptions {
    /// HTML-escape `&`, `<`, `>` and quotes.
    escaped: bool,

    /// Replace each line feed with `<br/>`.
    br: bool,

    /// Replace each space outside `<...>` tags with `&nbsp;`.
    nbsp: bool,
}

impl TextOptions {
    /// Creates options with every transform disabled.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_escaped(mut self, escaped: bool) -> Self {
        self.escaped = escaped;
        self
    }

    pub fn with_br(mut self, br: bool) -> Self {
        self.br = br;
        self
    }

    pub fn with_nbsp(mut self, nbsp: bool) -> Self {
        self.nbsp = nbsp;
        self
    }

    pub fn escaped(&self) -> bool {
        self.escaped
    }

    pub fn br(&self) -> bool {
        self.br
    }

    pub fn nbsp(&self) -> bool {
        self.nbsp
    }
}

/// The value of one translation-level option key.
///
/// Deserializes from either a boolean or an array of booleans:
///
/// ```
/// # use corrml_core::options::RenderOptions;
/// let options: RenderOptions = toml::from_str("escaped = true\nbr = [true, false]").unwrap();
/// assert!(!options.for_blocks(2)[1].br());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    /// Applies to every block.
    Flag(bool),

    /// Element `i` applies to block `i`; blocks past the end get `false`.
    PerBlock(Vec<bool>),
}

impl OptionValue {
    /// Returns the effective flag for the block at `index`.
    pub fn for_block(&self, index: usize) -> bool {
        match self {
            OptionValue::Flag(value) => *value,
            OptionValue::PerBlock(values) => values.get(index).copied().unwrap_or(false),
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Flag(value)
    }
}

impl From<Vec<bool>> for OptionValue {
    fn from(values: Vec<bool>) -> Self {
        OptionValue::PerBlock(values)
    }
}

/// Translation-level render options.
///
/// A key that is absent behaves like `false` for every block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    escaped: Option<OptionValue>,
    br: Option<OptionValue>,
    nbsp: Option<OptionValue>,
}

impl RenderOptions {
    pub fn with_escaped(mut self, value: impl Into<OptionValue>) -> Self {
        self.escaped = Some(value.into());
        self
    }

    pub fn with_br(mut self, value: impl Into<OptionValue>) -> Self {
        self.br = Some(value.into());
        self
    }

    pub fn with_nbsp(mut self, value: impl Into<OptionValue>) -> Self {
        self.nbsp = Some(value.into());
        self
    }

    pub fn escaped(&self) -> Option<&OptionValue> {
        self.escaped.as_ref()
    }

    pub fn br(&self) -> Option<&OptionValue> {
        self.br.as_ref()
    }

    pub fn nbsp(&self) -> Option<&OptionValue> {
        self.nbsp.as_ref()
    }

    /// Resolves the options of each of `block_count` blocks.
    ///
    /// Scalar values are broadcast to every block. A sequence value gives
    /// block `i` its element `i`; blocks beyond the sequence get `false` for
    /// that key, regardless of the other keys.
    pub fn for_blocks(&self, block_count: usize) -> Vec<TextOptions> {
        let flag = |value: &Option<OptionValue>, index: usize| {
            value.as_ref().is_some_and(|value| value.for_block(index))
        };

        let per_block: Vec<TextOptions> = (0..block_count)
            .map(|index| {
                TextOptions::new()
                    .with_escaped(flag(&self.escaped, index))
                    .with_br(flag(&self.br, index))
                    .with_nbsp(flag(&self.nbsp, index))
            })
            .collect();

        trace!(block_count, options:? = self; "Broadcast render options to blocks");
        per_block
    }
}

impl From<TextOptions> for RenderOptions {
    fn from(options: TextOptions) -> Self {
        Self::default()
            .with_escaped(options.escaped())
            .with_br(options.br())
            .with_nbsp(options.nbsp())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_options_default_is_off() {
        let options = TextOptions::default();

        assert!(!options.escaped());
        assert!(!options.br());
        assert!(!options.nbsp());
    }

    #[test]
    fn test_scalar_broadcast() {
        let options = RenderOptions::default().with_nbsp(true);

        for block in options.for_blocks(3) {
            assert_eq!(block, TextOptions::new().with_nbsp(true));
        }
    }

    #[test]
    fn test_sequence_shorter_than_blocks() {
        let options = RenderOptions::default().with_br(vec![true, false]);
        let per_block = options.for_blocks(3);

        assert_eq!(per_block.len(), 3);
        assert!(per_block[0].br());
        assert!(!per_block[1].br());
        assert!(!per_block[2].br());
    }

    #[test]
    fn test_sequence_longer_than_blocks() {
        let options = RenderOptions::default().with_escaped(vec![false, true, true, true]);
        let per_block = options.for_blocks(2);

        assert_eq!(per_block.len(), 2);
        assert!(!per_block[0].escaped());
        assert!(per_block[1].escaped());
    }

    #[test]
    fn test_mixed_scalar_and_sequence() {
        let options = RenderOptions::default()
            .with_escaped(true)
            .with_br(vec![true]);
        let per_block = options.for_blocks(2);

        assert_eq!(per_block[0], TextOptions::new().with_escaped(true).with_br(true));
        assert_eq!(per_block[1], TextOptions::new().with_escaped(true));
    }

    #[test]
    fn test_no_blocks() {
        let options = RenderOptions::default().with_br(true);
        assert!(options.for_blocks(0).is_empty());
    }

    #[test]
    fn test_from_text_options() {
        let options: RenderOptions = TextOptions::new().with_br(true).into();

        assert_eq!(options.br(), Some(&OptionValue::Flag(true)));
        assert_eq!(options.escaped(), Some(&OptionValue::Flag(false)));
        assert_eq!(options.for_blocks(2)[1], TextOptions::new().with_br(true));
    }

    #[test]
    fn test_deserialize_scalar_and_sequence() {
        let options: RenderOptions =
            toml::from_str("escaped = true\nbr = [true, false]\n").expect("valid options");

        assert_eq!(options.escaped(), Some(&OptionValue::Flag(true)));
        assert_eq!(options.br(), Some(&OptionValue::PerBlock(vec![true, false])));
        assert_eq!(options.nbsp(), None);
    }

    #[test]
    fn test_deserialize_empty() {
        let options: RenderOptions = toml::from_str("").expect("empty options");
        assert_eq!(options, RenderOptions::default());
    }
}
