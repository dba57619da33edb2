use derive_new::new;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiffKind {
    Equal,
    Delete,
    Insert,
}

impl DiffKind {
    pub fn label(&self) -> &'static str {
        match self {
            DiffKind::Equal => "Equal",
            DiffKind::Delete => "Delete",
            DiffKind::Insert => "Insert",
        }
    }

    /// The kind seen from the other side of the diff
    pub fn inverse(&self) -> Self {
        match self {
            DiffKind::Equal => DiffKind::Equal,
            DiffKind::Delete => DiffKind::Insert,
            DiffKind::Insert => DiffKind::Delete,
        }
    }
}

/// One segment of an edit script
///
/// The kind is fixed at construction; the content is owned by the segment and may
/// grow when neighbouring segments of the same kind are merged into it.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Difference {
    kind: DiffKind,
    content: String,
}

impl Difference {
    pub fn equal(content: impl Into<String>) -> Self {
        Self::new(DiffKind::Equal, content.into())
    }

    pub fn delete(content: impl Into<String>) -> Self {
        Self::new(DiffKind::Delete, content.into())
    }

    pub fn insert(content: impl Into<String>) -> Self {
        Self::new(DiffKind::Insert, content.into())
    }

    pub fn from_chars(kind: DiffKind, content: &[char]) -> Self {
        Self::new(kind, content.iter().collect())
    }

    pub fn kind(&self) -> DiffKind {
        self.kind
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_equal(&self) -> bool {
        self.kind == DiffKind::Equal
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    pub fn push_str(&mut self, content: &str) {
        self.content.push_str(content);
    }

    pub fn set_content(&mut self, content: String) {
        self.content = content;
    }

    pub fn into_content(self) -> String {
        self.content
    }
}

impl Display for Difference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: `{}`", self.kind.label(), self.content)
    }
}

/// Ordered edit script produced by a single diff call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffScript(Vec<Difference>);

impl DiffScript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Difference> {
        self.0.iter()
    }

    /// Append a segment, skipping it when it carries no content
    pub fn push(&mut self, difference: Difference) {
        if !difference.is_empty() {
            self.0.push(difference);
        }
    }

    pub fn push_chars(&mut self, kind: DiffKind, content: &[char]) {
        if !content.is_empty() {
            self.0.push(Difference::from_chars(kind, content));
        }
    }

    pub fn extend(&mut self, other: DiffScript) {
        self.0.extend(other.0);
    }

    /// Concatenation of every `Equal` and `Delete` segment in order
    ///
    /// This is the original text whenever the two texts differ. Identical texts
    /// produce no segments, so this is then empty.
    pub fn source_text(&self) -> String {
        self.text_without(DiffKind::Insert)
    }

    /// Concatenation of every `Equal` and `Insert` segment in order
    ///
    /// Empty for the script of two identical texts, like [`DiffScript::source_text`].
    pub fn target_text(&self) -> String {
        self.text_without(DiffKind::Delete)
    }

    /// Number of code points deleted plus inserted
    pub fn changed_chars(&self) -> usize {
        self.deleted_chars() + self.inserted_chars()
    }

    pub fn deleted_chars(&self) -> usize {
        self.chars_of(DiffKind::Delete)
    }

    pub fn inserted_chars(&self) -> usize {
        self.chars_of(DiffKind::Insert)
    }

    /// The same script read from the destination's point of view
    pub fn inverted(&self) -> Self {
        self.0
            .iter()
            .map(|difference| Difference::new(difference.kind().inverse(), difference.content.clone()))
            .collect()
    }

    fn text_without(&self, skipped: DiffKind) -> String {
        self.0
            .iter()
            .filter(|difference| difference.kind() != skipped)
            .map(Difference::content)
            .collect()
    }

    fn chars_of(&self, kind: DiffKind) -> usize {
        self.0
            .iter()
            .filter(|difference| difference.kind() == kind)
            .map(Difference::char_count)
            .sum()
    }
}

impl From<Vec<Difference>> for DiffScript {
    fn from(differences: Vec<Difference>) -> Self {
        Self(differences)
    }
}

impl From<DiffScript> for Vec<Difference> {
    fn from(script: DiffScript) -> Self {
        script.0
    }
}

impl FromIterator<Difference> for DiffScript {
    fn from_iter<I: IntoIterator<Item = Difference>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for DiffScript {
    type Item = Difference;
    type IntoIter = std::vec::IntoIter<Difference>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a DiffScript {
    type Item = &'a Difference;
    type IntoIter = std::slice::Iter<'a, Difference>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl AsRef<[Difference]> for DiffScript {
    fn as_ref(&self) -> &[Difference] {
        &self.0
    }
}

impl Display for DiffScript {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let formatted = self
            .0
            .iter()
            .map(|difference| difference.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        write!(f, "{formatted}")
    }
}
