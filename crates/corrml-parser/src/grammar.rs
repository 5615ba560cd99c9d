//! Grammar for Correspondence Markup source text.
//!
//! The grammar is a PEG built from winnow combinators working directly on
//! characters. Each rule builds its AST node as soon as it succeeds; a rule
//! that fails backtracks without leaving anything behind.
//!
//! ```text
//! s             ::= ws*
//! S             ::= ws+
//! number        ::= digit+
//! item_id       ::= [A-Z]? digit+
//! item_ids      ::= item_id ("," item_id)*
//! text          ::= (escape | [^\[\]\\] | "\")*
//! escape        ::= "\" ("[" | "]" | "\")
//! item          ::= "[" item_ids S text "]"
//! non_item      ::= text                          (non-empty)
//! line          ::= ([A-Z]+ ":" s)? (item | non_item)*
//! type_tag      ::= [A-Za-z] [A-Za-z0-9_-]*
//! block_header  ::= type_tag (":" [ \t]+ title)? [ \t\r]* "\n"
//! block         ::= (block_header s)? "[" s ("[" line "]" s)* "]"
//! translation   ::= ("#" title "\n" s)? "{" s (block s)* "}"
//! translations  ::= s ("(" s (translation s)* ")" s)*
//! ```
//!
//! Failures are reported the way PEG tools usually do: every terminal that
//! fails records what it expected at its position, and the error points at
//! the furthest such position with every expectation recorded there.

use std::cell::{Cell, RefCell};

use winnow::{
    Parser as _,
    combinator::{alt, delimited, opt, preceded, repeat, separated, terminated},
    error::{ContextError, ErrMode, ModalResult},
    stream::{LocatingSlice, Location, Stateful},
    token::{none_of, one_of, take_while},
};

use corrml_core::{
    ast::{Block, Content, Item, Line, NonItem, Translation},
    identifier,
};

use crate::{
    error::{Diagnostic, ErrorCode, ParseError},
    span::Span,
};

/// Grammar production used as the root of a parse.
///
/// Whole documents are parsed with [`Rule::Translations`]; the other rules
/// exist so that single productions can be matched in isolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Zero or more whitespace characters (`s`).
    OptionalSpace,
    /// One or more whitespace characters (`S`).
    Space,
    /// Unsigned decimal integer.
    Number,
    /// A single raw item id, e.g. `31` or `A31`.
    ItemId,
    /// Comma-separated raw item ids, e.g. `1,B3`.
    ItemIds,
    /// Text with bracket escapes decoded.
    Text,
    /// `[ids text]`.
    Item,
    /// Non-empty text outside an item.
    NonItem,
    /// Optional `A:` scope prefix followed by items and non-items.
    Line,
    /// The type tag of a block header, e.g. `english`.
    TypeTag,
    /// Optional header followed by `[` bracketed lines `]`.
    Block,
    /// Optional `#title` followed by `{` blocks `}`.
    Translation,
    /// Any number of `(` translations `)` groups.
    Translations,
}

/// The value built by a successful parse, one variant per [`Rule`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Space,
    Number(u64),
    ItemId(String),
    ItemIds(Vec<String>),
    Text(String),
    Item(Item),
    NonItem(NonItem),
    Line(Line),
    TypeTag(String),
    Block(Block),
    Translation(Translation),
    Translations(Vec<Translation>),
}

impl Node {
    /// Returns the document if this node was built by [`Rule::Translations`].
    pub fn into_translations(self) -> Option<Vec<Translation>> {
        match self {
            Node::Translations(translations) => Some(translations),
            _ => None,
        }
    }
}

/// Records the furthest position at which a terminal failed, and what the
/// terminals failing there expected.
#[derive(Debug, Default)]
struct FailureTracker {
    furthest: Cell<usize>,
    expected: RefCell<Vec<&'static str>>,
}

impl FailureTracker {
    fn record(&self, position: usize, expectation: &'static str) {
        let furthest = self.furthest.get();
        let mut expected = self.expected.borrow_mut();

        if position > furthest {
            self.furthest.set(position);
            expected.clear();
            expected.push(expectation);
        } else if position == furthest && !expected.contains(&expectation) {
            expected.push(expectation);
        }
    }

    fn reason(&self) -> String {
        match self.expected.borrow().as_slice() {
            [] => "unexpected input".to_string(),
            [single] => format!("expected {single}"),
            many => format!("expected one of {}", many.join(", ")),
        }
    }
}

type Input<'i> = Stateful<LocatingSlice<&'i str>, &'i FailureTracker>;
type IResult<O> = ModalResult<O>;

/// An item before its ids are resolved against the enclosing line's scope.
struct RawItem<'i> {
    ids: Vec<&'i str>,
    text: String,
}

impl RawItem<'_> {
    fn resolve(self, scope_prefix: &str) -> Item {
        Item::new(identifier::resolve(scope_prefix, self.ids.as_slice()), self.text)
    }
}

/// Wraps a terminal so that its failure is recorded as `expectation`.
fn expected<'i, O, P>(
    expectation: &'static str,
    mut parser: P,
) -> impl FnMut(&mut Input<'i>) -> IResult<O>
where
    P: winnow::Parser<Input<'i>, O, ErrMode<ContextError>>,
{
    move |input: &mut Input<'i>| {
        let position = input.current_token_start();
        parser
            .parse_next(input)
            .inspect_err(|_| input.state.record(position, expectation))
    }
}

fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_uppercase(c: char) -> bool {
    c.is_ascii_uppercase()
}

/// `s`: optional whitespace
fn optional_space(input: &mut Input<'_>) -> IResult<()> {
    take_while(0.., is_space).void().parse_next(input)
}

/// `S`: required whitespace
fn space(input: &mut Input<'_>) -> IResult<()> {
    expected("whitespace", take_while(1.., is_space))
        .void()
        .parse_next(input)
}

/// Unsigned decimal integer; values beyond `u64` do not match.
fn number(input: &mut Input<'_>) -> IResult<u64> {
    expected(
        "number",
        take_while(1.., is_digit).verify_map(|digits: &str| digits.parse::<u64>().ok()),
    )
    .parse_next(input)
}

/// Raw item id: optional uppercase scope letter, then digits
fn item_id<'i>(input: &mut Input<'i>) -> IResult<&'i str> {
    (
        opt(expected("scope letter", one_of(is_uppercase))),
        expected("digit", take_while(1.., is_digit)),
    )
        .take()
        .parse_next(input)
}

/// Comma-separated raw item ids with no whitespace around the commas
fn item_ids<'i>(input: &mut Input<'i>) -> IResult<Vec<&'i str>> {
    separated(1.., item_id, expected("`,`", ',')).parse_next(input)
}

/// `\[`, `\]` or `\\`, decoded to the escaped character
fn escape(input: &mut Input<'_>) -> IResult<char> {
    preceded('\\', one_of(['[', ']', '\\'])).parse_next(input)
}

/// One character of text. A backslash that does not start an escape is
/// taken literally.
fn text_char(input: &mut Input<'_>) -> IResult<char> {
    alt((escape, none_of(['[', ']', '\\']), '\\')).parse_next(input)
}

/// Text up to the next unescaped bracket, possibly empty
fn text(input: &mut Input<'_>) -> IResult<String> {
    repeat(0.., text_char)
        .fold(String::new, |mut acc, ch| {
            acc.push(ch);
            acc
        })
        .parse_next(input)
}

/// `[ids text]`
fn item<'i>(input: &mut Input<'i>) -> IResult<RawItem<'i>> {
    delimited(
        expected("`[`", '['),
        (terminated(item_ids, space), text),
        expected("`]`", ']'),
    )
    .map(|(ids, text)| RawItem { ids, text })
    .parse_next(input)
}

fn non_item(input: &mut Input<'_>) -> IResult<NonItem> {
    expected("text", text.verify(|text: &str| !text.is_empty()))
        .map(NonItem::new)
        .parse_next(input)
}

/// `A:` line header, with any whitespace after the colon
fn scope_prefix<'i>(input: &mut Input<'i>) -> IResult<&'i str> {
    terminated(take_while(1.., is_uppercase), (':', optional_space)).parse_next(input)
}

/// Items and non-items sharing a scope prefix.
///
/// Item ids are resolved against the prefix as each item is built.
fn line(input: &mut Input<'_>) -> IResult<Line> {
    let id = opt(scope_prefix).parse_next(input)?.unwrap_or_default();

    let content: Vec<Content> = repeat(
        0..,
        alt((
            item.map(|raw| Content::Item(raw.resolve(id))),
            non_item.map(Content::NonItem),
        )),
    )
    .parse_next(input)?;

    Ok(Line::new(id, content))
}

fn type_tag<'i>(input: &mut Input<'i>) -> IResult<&'i str> {
    (
        expected("block type", one_of(|c: char| c.is_ascii_alphabetic())),
        take_while(0.., |c: char| c.is_ascii_alphanumeric() || c == '_' || c == '-'),
    )
        .take()
        .parse_next(input)
}

/// Rest of the line, without trailing whitespace
fn title<'i>(input: &mut Input<'i>) -> IResult<&'i str> {
    expected("title", take_while(1.., |c: char| c != '\n'))
        .map(str::trim_end)
        .parse_next(input)
}

/// `type_tag[: title]` on its own line
fn block_header<'i>(input: &mut Input<'i>) -> IResult<(&'i str, Option<&'i str>)> {
    terminated(
        (
            type_tag,
            opt(preceded((':', take_while(1.., [' ', '\t'])), title)),
        ),
        (
            take_while(0.., [' ', '\t', '\r']),
            expected("newline", '\n'),
        ),
    )
    .parse_next(input)
}

/// `[line]` inside a block
fn bracketed_line(input: &mut Input<'_>) -> IResult<Line> {
    delimited(expected("`[`", '['), line, expected("`]`", ']')).parse_next(input)
}

fn block(input: &mut Input<'_>) -> IResult<Block> {
    let header = opt(terminated(block_header, optional_space)).parse_next(input)?;

    let lines: Vec<Line> = delimited(
        (expected("`[`", '['), optional_space),
        repeat(0.., terminated(bracketed_line, optional_space)),
        expected("`]`", ']'),
    )
    .parse_next(input)?;

    let (tag, heading) = match header {
        Some((tag, heading)) => (Some(tag.to_string()), heading.map(str::to_string)),
        None => (None, None),
    };

    Ok(Block::new(tag, heading, lines))
}

fn translation(input: &mut Input<'_>) -> IResult<Translation> {
    let heading = opt(delimited(
        expected("`#`", '#'),
        title,
        (expected("newline", '\n'), optional_space),
    ))
    .parse_next(input)?;

    let blocks: Vec<Block> = delimited(
        (expected("`{`", '{'), optional_space),
        repeat(0.., terminated(block, optional_space)),
        expected("`}`", '}'),
    )
    .parse_next(input)?;

    Ok(Translation::new(heading.map(str::to_string), blocks))
}

/// `( translation* )`
fn translation_group(input: &mut Input<'_>) -> IResult<Vec<Translation>> {
    delimited(
        (expected("`(`", '('), optional_space),
        repeat(0.., terminated(translation, optional_space)),
        expected("`)`", ')'),
    )
    .parse_next(input)
}

/// All parenthesised groups, flattened into one document
fn translations(input: &mut Input<'_>) -> IResult<Vec<Translation>> {
    optional_space.parse_next(input)?;

    let groups: Vec<Vec<Translation>> =
        repeat(0.., terminated(translation_group, optional_space)).parse_next(input)?;

    Ok(groups.into_iter().flatten().collect())
}

fn root(rule: Rule, input: &mut Input<'_>) -> IResult<Node> {
    match rule {
        Rule::OptionalSpace => optional_space(input).map(|()| Node::Space),
        Rule::Space => space(input).map(|()| Node::Space),
        Rule::Number => number(input).map(Node::Number),
        Rule::ItemId => item_id(input).map(|id| Node::ItemId(id.to_string())),
        Rule::ItemIds => item_ids(input)
            .map(|ids| Node::ItemIds(ids.into_iter().map(str::to_string).collect())),
        Rule::Text => text(input).map(Node::Text),
        Rule::Item => item(input).map(|raw| Node::Item(raw.resolve(""))),
        Rule::NonItem => non_item(input).map(Node::NonItem),
        Rule::Line => line(input).map(Node::Line),
        Rule::TypeTag => type_tag(input).map(|tag| Node::TypeTag(tag.to_string())),
        Rule::Block => block(input).map(Node::Block),
        Rule::Translation => translation(input).map(Node::Translation),
        Rule::Translations => translations(input).map(Node::Translations),
    }
}

/// Builds the error for a failed parse from the furthest recorded failure.
fn convert_failure(source: &str, tracker: &FailureTracker) -> ParseError {
    let position = tracker.furthest.get();
    let reason = tracker.reason();

    let diagnostic = match source.get(position..).and_then(|rest| rest.chars().next()) {
        Some(ch) => Diagnostic::error(format!(
            "unexpected character `{}`: {reason}",
            ch.escape_debug()
        ))
        .with_code(ErrorCode::E100)
        .with_label(
            Span::new(position..position + ch.len_utf8()),
            ErrorCode::E100.description(),
        ),
        None => Diagnostic::error(format!("unexpected end of input: {reason}"))
            .with_code(ErrorCode::E101)
            .with_label(Span::new(position..position), ErrorCode::E101.description()),
    }
    .with_help("check that every `[`, `{` and `(` is closed, and write literal brackets as `\\[` and `\\]`");

    ParseError::new(position, reason, diagnostic)
}

/// Match `rule` at the start of `source`.
///
/// Returns the built node and the span it matched. With `consume_all`, a
/// match that leaves input behind is a failure.
pub(crate) fn parse_rule(
    source: &str,
    rule: Rule,
    consume_all: bool,
) -> Result<(Node, Span), ParseError> {
    run(source, consume_all, |input| root(rule, input))
}

/// Parse a whole document into its flattened translations.
pub(crate) fn parse_document(source: &str) -> Result<Vec<Translation>, ParseError> {
    run(source, true, translations).map(|(translations, _)| translations)
}

fn run<O>(
    source: &str,
    consume_all: bool,
    mut parser: impl FnMut(&mut Input<'_>) -> IResult<O>,
) -> Result<(O, Span), ParseError> {
    let tracker = FailureTracker::default();
    let mut input = Stateful {
        input: LocatingSlice::new(source),
        state: &tracker,
    };

    let Ok(output) = parser(&mut input) else {
        return Err(convert_failure(source, &tracker));
    };

    let end = input.current_token_start();
    if consume_all && end < source.len() {
        tracker.record(end, "end of input");
        return Err(convert_failure(source, &tracker));
    }

    Ok((output, Span::new(0..end)))
}
