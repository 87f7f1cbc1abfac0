//! Delimited rendering of sequences, sets and mappings.
//!
//! All entry points share one joining rule: `before`, a space, the elements
//! separated by `separator`, a space, then `after`. An empty collection renders
//! as `before` immediately followed by `after`, so `[1, 2]` becomes `"[ 1, 2 ]"`
//! and an empty list becomes `"[]"`. The separator is inserted verbatim.
//!
//! Three families of functions exist for each shape:
//! * `format_*` uses the default delimiters for the shape;
//! * `format_*_with` takes every delimiter explicitly;
//! * `try_format_*` takes every argument as an `Option` and reports the first
//!   absent one as a [`FormatError`](crate::error::FormatError).
//!
//! [`format_collection`] picks the shape itself by asking the value for its
//! [`CollectionView`] through the [`PrettyCollection`] trait.


use crate::error::{require_collection, require_delimiter, Result};
use std::cell::Cell;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt::{self, Display, Write};
use tracing::trace;

pub const SEQUENCE_BEFORE: &str = "[";
pub const SEQUENCE_AFTER: &str = "]";
pub const SET_BEFORE: &str = "{";
pub const SET_AFTER: &str = "}";
pub const MAPPING_BEFORE: &str = "{";
pub const MAPPING_AFTER: &str = "}";
pub const DEFAULT_SEPARATOR: &str = ", ";
pub const DEFAULT_KEY_VALUE_JOINER: &str = ": ";

// --- Joining Core ---

/// Writes `before`, the items (each through `write_item`), and `after`,
/// applying the single-space padding rule around a non-empty body.
fn write_joined<W, I, F>(
    out: &mut W,
    items: I,
    before: &str,
    separator: &str,
    after: &str,
    mut write_item: F,
) -> fmt::Result
where
    W: Write + ?Sized,
    I: IntoIterator,
    F: FnMut(&mut W, I::Item) -> fmt::Result,
{
    out.write_str(before)?;
    let mut first_written = false;
    for item in items {
        out.write_str(if first_written { separator } else { " " })?;
        write_item(out, item)?;
        first_written = true;
    }
    if first_written {
        out.write_char(' ')?;
    }
    out.write_str(after)
}

fn write_elements<W, I>(out: &mut W, items: I, before: &str, separator: &str, after: &str) -> fmt::Result
where
    W: Write + ?Sized,
    I: IntoIterator,
    I::Item: Display,
{
    write_joined(out, items, before, separator, after, |out, item| write!(out, "{item}"))
}

fn write_pairs<W, I, K, V>(
    out: &mut W,
    pairs: I,
    before: &str,
    key_value_joiner: &str,
    pair_separator: &str,
    after: &str,
) -> fmt::Result
where
    W: Write + ?Sized,
    I: IntoIterator<Item = (K, V)>,
    K: Display,
    V: Display,
{
    write_joined(out, pairs, before, pair_separator, after, |out, (key, value)| {
        write!(out, "{key}{key_value_joiner}{value}")
    })
}

/// Runs a one-shot writer as a `Display` impl, so strings are built through
/// `ToString` and any formatting error surfaces there.
struct Deferred<F>(Cell<Option<F>>);

impl<F> Display for Deferred<F>
where
    F: FnOnce(&mut fmt::Formatter<'_>) -> fmt::Result,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.take() {
            Some(write) => write(f),
            None => Ok(()),
        }
    }
}

fn render(write: impl FnOnce(&mut fmt::Formatter<'_>) -> fmt::Result) -> String {
    Deferred(Cell::new(Some(write))).to_string()
}

// --- Sequences ---

/// Formats elements as `[ a, b, c ]`.
pub fn format_sequence<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    format_sequence_with(items, SEQUENCE_BEFORE, DEFAULT_SEPARATOR, SEQUENCE_AFTER)
}

/// Formats elements with explicit delimiters.
pub fn format_sequence_with<I>(items: I, before: &str, separator: &str, after: &str) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    render(|out| write_elements(out, items, before, separator, after))
}

/// Like [`format_sequence_with`], but every argument may be absent.
///
/// The collection is checked first, then the delimiters in parameter order.
pub fn try_format_sequence<I>(
    items: Option<I>,
    before: Option<&str>,
    separator: Option<&str>,
    after: Option<&str>,
) -> Result<String>
where
    I: IntoIterator,
    I::Item: Display,
{
    let items = require_collection(items, "items")?;
    let before = require_delimiter(before, "before")?;
    let separator = require_delimiter(separator, "separator")?;
    let after = require_delimiter(after, "after")?;
    Ok(format_sequence_with(items, before, separator, after))
}

// --- Sets ---

/// Formats elements as `{ a, b, c }`.
pub fn format_set<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    format_sequence_with(items, SET_BEFORE, DEFAULT_SEPARATOR, SET_AFTER)
}

/// Formats set elements with explicit delimiters.
pub fn format_set_with<I>(items: I, before: &str, separator: &str, after: &str) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    format_sequence_with(items, before, separator, after)
}

/// Like [`format_set_with`], but every argument may be absent.
pub fn try_format_set<I>(
    items: Option<I>,
    before: Option<&str>,
    separator: Option<&str>,
    after: Option<&str>,
) -> Result<String>
where
    I: IntoIterator,
    I::Item: Display,
{
    try_format_sequence(items, before, separator, after)
}

// --- Mappings ---

/// Formats key/value pairs as `{ k1: v1, k2: v2 }`.
pub fn format_mapping<I, K, V>(pairs: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: Display,
    V: Display,
{
    format_mapping_with(
        pairs,
        MAPPING_BEFORE,
        DEFAULT_KEY_VALUE_JOINER,
        DEFAULT_SEPARATOR,
        MAPPING_AFTER,
    )
}

/// Formats key/value pairs with explicit delimiters.
pub fn format_mapping_with<I, K, V>(
    pairs: I,
    before: &str,
    key_value_joiner: &str,
    pair_separator: &str,
    after: &str,
) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: Display,
    V: Display,
{
    render(|out| write_pairs(out, pairs, before, key_value_joiner, pair_separator, after))
}

/// Like [`format_mapping_with`], but every argument may be absent.
pub fn try_format_mapping<I, K, V>(
    pairs: Option<I>,
    before: Option<&str>,
    key_value_joiner: Option<&str>,
    pair_separator: Option<&str>,
    after: Option<&str>,
) -> Result<String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Display,
    V: Display,
{
    let pairs = require_collection(pairs, "pairs")?;
    let before = require_delimiter(before, "before")?;
    let key_value_joiner = require_delimiter(key_value_joiner, "key_value_joiner")?;
    let pair_separator = require_delimiter(pair_separator, "pair_separator")?;
    let after = require_delimiter(after, "after")?;
    Ok(format_mapping_with(pairs, before, key_value_joiner, pair_separator, after))
}

// --- Shape Dispatch ---

pub type Elements<'a> = Box<dyn Iterator<Item = &'a dyn Display> + 'a>;
pub type Pairs<'a> = Box<dyn Iterator<Item = (&'a dyn Display, &'a dyn Display)> + 'a>;

/// What a collection offers to the formatter.
pub enum CollectionView<'a> {
    /// Ordered elements, duplicates allowed.
    Sequence(Elements<'a>),
    /// Elements with unique-element semantics.
    Set(Elements<'a>),
    /// Key/value pairs.
    Mapping(Pairs<'a>),
    /// Key/value pairs without mapping semantics; rendered with sequence brackets.
    PairSequence(Pairs<'a>),
}

impl CollectionView<'_> {
    /// Name of the shape, for logging.
    pub fn shape(&self) -> &'static str {
        match self {
            CollectionView::Sequence(_) => "sequence",
            CollectionView::Set(_) => "set",
            CollectionView::Mapping(_) => "mapping",
            CollectionView::PairSequence(_) => "pair sequence",
        }
    }
}

/// Collections that can describe their own shape to [`format_collection`].
///
/// Implement this for your own collection types to have them picked up by the
/// dispatcher; the view decides the brackets.
pub trait PrettyCollection {
    fn view(&self) -> CollectionView<'_>;
}

fn elements<'a, I, T>(items: I) -> Elements<'a>
where
    I: Iterator<Item = &'a T> + 'a,
    T: Display + 'a,
{
    Box::new(items.map(|item| item as &dyn Display))
}

fn pairs<'a, I, K, V>(items: I) -> Pairs<'a>
where
    I: Iterator<Item = (&'a K, &'a V)> + 'a,
    K: Display + 'a,
    V: Display + 'a,
{
    Box::new(items.map(|(key, value)| (key as &dyn Display, value as &dyn Display)))
}

impl<T: Display> PrettyCollection for [T] {
    fn view(&self) -> CollectionView<'_> {
        CollectionView::Sequence(elements(self.iter()))
    }
}

impl<T: Display, const N: usize> PrettyCollection for [T; N] {
    fn view(&self) -> CollectionView<'_> {
        CollectionView::Sequence(elements(self.iter()))
    }
}

impl<T: Display> PrettyCollection for Vec<T> {
    fn view(&self) -> CollectionView<'_> {
        CollectionView::Sequence(elements(self.iter()))
    }
}

impl<T: Display> PrettyCollection for VecDeque<T> {
    fn view(&self) -> CollectionView<'_> {
        CollectionView::Sequence(elements(self.iter()))
    }
}

impl<T: Display, S> PrettyCollection for HashSet<T, S> {
    fn view(&self) -> CollectionView<'_> {
        CollectionView::Set(elements(self.iter()))
    }
}

impl<T: Display> PrettyCollection for BTreeSet<T> {
    fn view(&self) -> CollectionView<'_> {
        CollectionView::Set(elements(self.iter()))
    }
}

impl<K: Display, V: Display, S> PrettyCollection for HashMap<K, V, S> {
    fn view(&self) -> CollectionView<'_> {
        CollectionView::Mapping(pairs(self.iter()))
    }
}

impl<K: Display, V: Display> PrettyCollection for BTreeMap<K, V> {
    fn view(&self) -> CollectionView<'_> {
        CollectionView::Mapping(pairs(self.iter()))
    }
}

/// A borrowed list of pairs that is not a mapping: keys may repeat and order
/// is kept. Displays as `[ k1: v1, k2: v2 ]`.
#[derive(Debug, Clone, Copy)]
pub struct PairList<'a, K, V>(pub &'a [(K, V)]);

impl<K: Display, V: Display> PrettyCollection for PairList<'_, K, V> {
    fn view(&self) -> CollectionView<'_> {
        CollectionView::PairSequence(pairs(self.0.iter().map(|(key, value)| (key, value))))
    }
}

impl<C: PrettyCollection + ?Sized> PrettyCollection for &C {
    fn view(&self) -> CollectionView<'_> {
        (**self).view()
    }
}

fn write_collection<W, C>(out: &mut W, items: &C) -> fmt::Result
where
    W: Write + ?Sized,
    C: PrettyCollection + ?Sized,
{
    // Probe the mapping capability first, then uniqueness, else plain sequence.
    let view = items.view();
    trace!(shape = view.shape(), "dispatching collection");
    match view {
        CollectionView::Mapping(pairs) => write_pairs(
            out,
            pairs,
            MAPPING_BEFORE,
            DEFAULT_KEY_VALUE_JOINER,
            DEFAULT_SEPARATOR,
            MAPPING_AFTER,
        ),
        CollectionView::PairSequence(pairs) => write_pairs(
            out,
            pairs,
            SEQUENCE_BEFORE,
            DEFAULT_KEY_VALUE_JOINER,
            DEFAULT_SEPARATOR,
            SEQUENCE_AFTER,
        ),
        CollectionView::Set(unique) => {
            write_elements(out, unique, SET_BEFORE, DEFAULT_SEPARATOR, SET_AFTER)
        }
        CollectionView::Sequence(items) => {
            write_elements(out, items, SEQUENCE_BEFORE, DEFAULT_SEPARATOR, SEQUENCE_AFTER)
        }
    }
}

/// Formats a collection with the default delimiters for its shape: mappings
/// as `{ k: v }`, sets as `{ a }`, anything else as `[ a ]`.
///
/// ```
/// use std::collections::{BTreeMap, BTreeSet};
/// use pretty_string::collection::format_collection;
///
/// assert_eq!(format_collection(&vec![1, 2, 3]), "[ 1, 2, 3 ]");
/// assert_eq!(format_collection(&BTreeSet::from([1, 2, 3])), "{ 1, 2, 3 }");
/// assert_eq!(format_collection(&BTreeMap::from([(3, "three")])), "{ 3: three }");
/// ```
pub fn format_collection<C: PrettyCollection + ?Sized>(items: &C) -> String {
    render(|out| write_collection(out, items))
}

/// Like [`format_collection`], but the collection may be absent.
pub fn try_format_collection<C: PrettyCollection + ?Sized>(items: Option<&C>) -> Result<String> {
    let items = require_collection(items, "items")?;
    Ok(format_collection(items))
}

/// `Display` adapter returned by [`pretty`].
pub struct Pretty<'a, C: ?Sized>(&'a C);

impl<C: PrettyCollection + ?Sized> Display for Pretty<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_collection(f, self.0)
    }
}

impl<C: PrettyCollection + ?Sized> fmt::Debug for Pretty<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}

/// Wraps a collection so it displays in its bracketed form, which lets nested
/// collections render recursively.
pub fn pretty<C: PrettyCollection + ?Sized>(items: &C) -> Pretty<'_, C> {
    Pretty(items)
}
