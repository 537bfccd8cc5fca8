//! Sequence display helpers.
//!
//! - [`format_braced`] / [`write_braced`] / [`Braced`]: `{a, b, c}` listings
//! - [`reversed`] / [`for_each_reversed`]: last-to-first traversal
//! - [`write_spaced`]: space-prefixed element output
//! - [`CharView`]: contiguous display of a character buffer
//! - [`full_name`]: first and last name joined by a space

use std::fmt::{self, Display, Write as _};
use std::io;

/// Renders items as `{item1, item2, ..., itemN}`.
///
/// Separators are placed by position, so repeated items are listed
/// normally. An empty sequence renders as `{}`.
///
/// # Examples
/// ```
/// use valuekit_core::format::format_braced;
///
/// assert_eq!(
///     format_braced(["The Flash", "Super Man", "Iron Man"]),
///     "{The Flash, Super Man, Iron Man}"
/// );
/// assert_eq!(format_braced(Vec::<i32>::new()), "{}");
/// ```
pub fn format_braced<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut out = String::new();
    write_braced(&mut out, items)
        .expect("a Display implementation returned an error unexpectedly");
    out
}

/// Writes `{item1, item2, ..., itemN}` to any formatting sink.
///
/// # Arguments
///
/// * `out` - Destination; a `String` or a `fmt::Formatter`
/// * `items` - Items rendered with their `Display` impl
///
/// # Errors
///
/// Propagates the first error from `out` or from an item's `Display` impl.
pub fn write_braced<W, I>(out: &mut W, items: I) -> fmt::Result
where
    W: fmt::Write + ?Sized,
    I: IntoIterator,
    I::Item: Display,
{
    out.write_char('{')?;
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.write_str(", ")?;
        }
        write!(out, "{}", item)?;
    }
    out.write_char('}')
}

/// Borrowed slice that displays as a braced listing.
///
/// Same output as [`format_braced`] without building an intermediate string.
///
/// # Examples
/// ```
/// use valuekit_core::format::Braced;
///
/// let numbers = [3, 1, 4];
/// assert_eq!(format!("{}", Braced(&numbers)), "{3, 1, 4}");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Braced<'a, T>(pub &'a [T]);

impl<T: Display> Display for Braced<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_braced(f, self.0)
    }
}

/// Lazy last-to-first traversal.
///
/// The returned iterator is finite and consumed as it is walked.
///
/// # Examples
/// ```
/// use valuekit_core::format::reversed;
///
/// let items = ["a", "b", "c"];
/// let back: Vec<_> = reversed(&items).collect();
/// assert_eq!(back, [&"c", &"b", &"a"]);
/// ```
pub fn reversed<I>(items: I) -> std::iter::Rev<I::IntoIter>
where
    I: IntoIterator,
    I::IntoIter: DoubleEndedIterator,
{
    items.into_iter().rev()
}

/// Applies `action` to every item from last to first.
///
/// No separators are inserted; the action decides how each item appears.
///
/// # Examples
/// ```
/// use valuekit_core::format::for_each_reversed;
///
/// let mut seen = Vec::new();
/// for_each_reversed([1, 2, 3], |n| seen.push(n));
/// assert_eq!(seen, [3, 2, 1]);
/// ```
pub fn for_each_reversed<I, F>(items: I, action: F)
where
    I: IntoIterator,
    I::IntoIter: DoubleEndedIterator,
    F: FnMut(I::Item),
{
    reversed(items).for_each(action);
}

/// Writes each item preceded by a single space, with no trailing newline.
///
/// # Errors
///
/// Propagates any error from the underlying writer.
///
/// # Examples
/// ```
/// use valuekit_core::format::write_spaced;
///
/// let mut out = Vec::new();
/// write_spaced(&mut out, [7, 0, 3]).unwrap();
/// assert_eq!(out, b" 7 0 3");
/// ```
pub fn write_spaced<W, I>(out: &mut W, items: I) -> io::Result<()>
where
    W: io::Write + ?Sized,
    I: IntoIterator,
    I::Item: Display,
{
    for item in items {
        write!(out, " {}", item)?;
    }
    Ok(())
}

/// Borrowed view over a character buffer, displayed without separators.
///
/// # Examples
/// ```
/// use valuekit_core::format::CharView;
///
/// let letters = ['a', 'b', 'c'];
/// let view = CharView::new(&letters);
/// assert_eq!(view.len(), 3);
/// assert_eq!(view.to_string(), "abc");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharView<'a> {
    chars: &'a [char],
}

impl<'a> CharView<'a> {
    /// Creates a view over `chars`.
    pub fn new(chars: &'a [char]) -> Self {
        Self { chars }
    }

    /// Number of characters in the view.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Whether the view is empty.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The viewed characters.
    pub fn as_slice(&self) -> &'a [char] {
        self.chars
    }
}

impl Display for CharView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars.iter().try_for_each(|&c| f.write_char(c))
    }
}

/// Joins a first and last name with a single space.
///
/// # Examples
/// ```
/// use valuekit_core::format::full_name;
///
/// assert_eq!(full_name("Bob", "Danger"), "Bob Danger");
/// ```
pub fn full_name(first: &str, last: &str) -> String {
    let mut name = String::with_capacity(first.len() + 1 + last.len());
    name.push_str(first);
    name.push(' ');
    name.push_str(last);
    name
}
