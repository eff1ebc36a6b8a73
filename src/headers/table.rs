use super::HeaderKind;

/// Header values indexed by [`HeaderKind`].
///
/// Values are views into the parsed buffer. Inserting a kind that is already present replaces its
/// value, so the last occurrence of a duplicated header wins.
#[derive(Clone, PartialEq, Eq)]
pub struct FieldTable<'a> {
    values: [Option<&'a [u8]>; HeaderKind::COUNT],
}

impl<'a> FieldTable<'a> {
    /// Create new empty [`FieldTable`].
    #[inline]
    pub const fn new() -> Self {
        Self {
            values: [None; HeaderKind::COUNT],
        }
    }

    /// Store `value` for `kind`, returning the previous value.
    #[inline]
    pub fn insert(&mut self, kind: HeaderKind, value: &'a [u8]) -> Option<&'a [u8]> {
        self.values[kind.index()].replace(value)
    }

    /// Returns the value of `kind` if present.
    #[inline]
    pub fn get(&self, kind: HeaderKind) -> Option<&'a [u8]> {
        self.values[kind.index()]
    }

    /// Returns `true` if the table contains a value for `kind`.
    #[inline]
    pub fn contains(&self, kind: HeaderKind) -> bool {
        self.values[kind.index()].is_some()
    }

    /// Returns the number of present kinds.
    pub fn len(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }

    /// Remove every value.
    #[inline]
    pub fn clear(&mut self) {
        self.values = [None; HeaderKind::COUNT];
    }

    /// Iterate over present values in [`HeaderKind`] declaration order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, 'a> {
        Iter {
            inner: HeaderKind::ALL.iter().zip(self.values.iter()),
        }
    }
}

impl Default for FieldTable<'_> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FieldTable<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for (kind, value) in self {
            map.entry(&kind.as_str(), &String::from_utf8_lossy(value));
        }
        map.finish()
    }
}

// ===== Iter =====

/// Iterator returned from [`FieldTable::iter`].
#[derive(Debug)]
pub struct Iter<'t, 'a> {
    inner: std::iter::Zip<std::slice::Iter<'static, HeaderKind>, std::slice::Iter<'t, Option<&'a [u8]>>>,
}

impl<'a> Iterator for Iter<'_, 'a> {
    type Item = (HeaderKind, &'a [u8]);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.by_ref().find_map(|(kind, value)| Some((*kind, (*value)?)))
    }
}

impl<'t, 'a> IntoIterator for &'t FieldTable<'a> {
    type Item = (HeaderKind, &'a [u8]);
    type IntoIter = Iter<'t, 'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
