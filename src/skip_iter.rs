use std::collections::HashMap;
use std::hash::Hash;
use std::iter::FusedIterator;

use crate::Error;

/// Wraps an iterator so that specific values can be dropped before they are yielded.
///
/// The next value to yield is always buffered with every pending skip already applied,
/// so `has_next` is exact.
///
/// ```
/// use skipfeed::SkipIterator;
///
/// let mut it = SkipIterator::new([1, 2, 1, 3, 1]);
/// it.skip_value(1);
/// assert_eq!(it.collect::<Vec<_>>(), vec![2, 1, 3, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct SkipIterator<I: Iterator> {
    source: I,
    /// Counts are always positive; an entry is removed when it reaches zero.
    pending: HashMap<I::Item, usize>,
    cached: Option<I::Item>,
}

impl<I> SkipIterator<I>
where
    I: Iterator,
    I::Item: Eq + Hash,
{
    pub fn new(source: impl IntoIterator<IntoIter = I>) -> Self {
        let mut iter = SkipIterator {
            source: source.into_iter(),
            pending: HashMap::new(),
            cached: None,
        };
        iter.advance();
        iter
    }

    pub fn has_next(&self) -> bool {
        self.cached.is_some()
    }

    pub fn peek(&self) -> Option<&I::Item> {
        self.cached.as_ref()
    }

    /// Returns the next value, or `Error::Exhausted` once nothing is left.
    pub fn try_next(&mut self) -> Result<I::Item, Error> {
        if self.cached.is_none() {
            return Err(Error::Exhausted);
        }
        self.advance().ok_or(Error::Exhausted)
    }

    /// Drops the next occurrence of `value`. If it is the buffered value it is consumed
    /// right away, otherwise the request waits until a matching value is pulled.
    pub fn skip_value(&mut self, value: I::Item) {
        if self.cached.as_ref() == Some(&value) {
            self.advance();
        } else {
            *self.pending.entry(value).or_insert(0) += 1;
        }
    }

    pub fn pending_skips(&self, value: &I::Item) -> usize {
        self.pending.get(value).copied().unwrap_or(0)
    }

    /// Refills the buffer with the first pulled value that has no pending skip and
    /// returns what was buffered before.
    fn advance(&mut self) -> Option<I::Item> {
        let next = loop {
            let Some(candidate) = self.source.next() else {
                break None;
            };
            match self.pending.get_mut(&candidate) {
                Some(count) => {
                    *count -= 1;
                    if *count == 0 {
                        self.pending.remove(&candidate);
                    }
                }
                None => break Some(candidate),
            }
        };
        std::mem::replace(&mut self.cached, next)
    }
}

impl<I> Iterator for SkipIterator<I>
where
    I: Iterator,
    I::Item: Eq + Hash,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let buffered = usize::from(self.cached.is_some());
        let (_, upper) = self.source.size_hint();
        (buffered, upper.and_then(|upper| upper.checked_add(buffered)))
    }
}

// `advance` never runs again once the buffer is empty, so the source is not polled past its end.
impl<I> FusedIterator for SkipIterator<I>
where
    I: Iterator,
    I::Item: Eq + Hash,
{
}
