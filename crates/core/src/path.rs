//! Human-readable location of a field inside a content tree.

use std::fmt;

/// One step of a [`FieldPath`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
	/// Component display name or field label.
	Label(String),
	/// Zero-based array index.
	Index(usize),
}

impl fmt::Display for PathSegment {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			PathSegment::Label(label) => f.write_str(label),
			PathSegment::Index(index) => write!(f, "{index}"),
		}
	}
}

/// Ordered labels and indices leading to a rendered field.
///
/// Extending a path returns a new value; recursion frames never share
/// their extensions with siblings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath {
	segments: Vec<PathSegment>,
}

impl FieldPath {
	pub const SEPARATOR: &'static str = " > ";

	pub fn root() -> Self {
		Self::default()
	}

	pub fn is_empty(&self) -> bool {
		self.segments.is_empty()
	}

	pub fn len(&self) -> usize {
		self.segments.len()
	}

	pub fn segments(&self) -> &[PathSegment] {
		&self.segments
	}

	/// Returns a copy extended by a label segment.
	pub fn with_label(&self, label: impl Into<String>) -> Self {
		self.with(PathSegment::Label(label.into()))
	}

	/// Returns a copy extended by an index segment.
	pub fn with_index(&self, index: usize) -> Self {
		self.with(PathSegment::Index(index))
	}

	fn with(&self, segment: PathSegment) -> Self {
		let mut segments = Vec::with_capacity(self.segments.len() + 1);
		segments.extend_from_slice(&self.segments);
		segments.push(segment);
		Self { segments }
	}
}

impl fmt::Display for FieldPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (i, segment) in self.segments.iter().enumerate() {
			if i > 0 {
				f.write_str(Self::SEPARATOR)?;
			}
			write!(f, "{segment}")?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn renders_labels_and_indices() {
		let path = FieldPath::root().with_label("Body").with_index(0).with_label("Teaser").with_label("Headline");
		assert_eq!(path.to_string(), "Body > 0 > Teaser > Headline");
		assert_eq!(path.len(), 4);
	}

	#[test]
	fn extension_leaves_original_untouched() {
		let parent = FieldPath::root().with_label("Body");
		let first = parent.with_index(0);
		let second = parent.with_index(1);

		assert_eq!(parent.to_string(), "Body");
		assert_eq!(first.to_string(), "Body > 0");
		assert_eq!(second.to_string(), "Body > 1");
	}

	#[test]
	fn empty_path_renders_empty() {
		assert!(FieldPath::root().is_empty());
		assert_eq!(FieldPath::root().to_string(), "");
	}
}
