//! JSON Pointer utilities
//!
//! Pointers address fields of the app configuration, e.g.
//! `/user_profile/standard_attributes`. Segments are taken verbatim: the
//! configuration format never needs `~0` / `~1` escapes, so none are applied.
//!
//! A pointer is either the root (`""`) or starts with `/`. Anything else is
//! rejected with [`Error::InvalidPointer`].

use regex::Regex;
use std::fmt;
use std::str::FromStr;

use crate::prelude::*;

/// Parsed JSON pointer: an ordered list of segments, empty for the root
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct JsonPointer(Vec<String>);

impl JsonPointer {
	pub fn root() -> Self {
		Self(Vec::new())
	}

	pub fn from_segments<I, S>(segments: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self(segments.into_iter().map(Into::into).collect())
	}

	pub fn segments(&self) -> &[String] {
		&self.0
	}

	pub fn into_segments(self) -> Vec<String> {
		self.0
	}

	pub fn is_root(&self) -> bool {
		self.0.is_empty()
	}

	/// First segment, used as the field name of top level attributes
	pub fn first_segment(&self) -> Option<&str> {
		self.0.first().map(String::as_str)
	}

	pub fn last_segment(&self) -> Option<&str> {
		self.0.last().map(String::as_str)
	}

	pub fn push(&mut self, segment: impl Into<String>) {
		self.0.push(segment.into());
	}

	/// Returns a new pointer one level deeper
	pub fn join(&self, segment: impl Into<String>) -> Self {
		let mut ptr = self.clone();
		ptr.push(segment);
		ptr
	}

	/// Splits into the parent pointer and the last segment.
	///
	/// The root has no parent and yields `None`.
	pub fn parent_child(&self) -> Option<(JsonPointer, &str)> {
		let (child, parent) = self.0.split_last()?;
		Some((JsonPointer(parent.to_vec()), child.as_str()))
	}
}

impl FromStr for JsonPointer {
	type Err = Error;

	fn from_str(s: &str) -> PtResult<Self> {
		parse_json_pointer(s).map(JsonPointer)
	}
}

impl fmt::Display for JsonPointer {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for segment in &self.0 {
			write!(f, "/{}", segment)?;
		}
		Ok(())
	}
}

/// Parse a pointer string into its segments
///
/// - `""` → `[]`
/// - `"/"` → `[""]`
/// - `"//"` → `["", ""]`
/// - `"/a"` → `["a"]`
pub fn parse_json_pointer(s: &str) -> PtResult<Vec<String>> {
	if s.is_empty() {
		return Ok(Vec::new());
	}
	let Some(rest) = s.strip_prefix('/') else {
		return Err(Error::InvalidPointer(s.to_string()));
	};
	Ok(rest.split('/').map(String::from).collect())
}

/// Inverse of [`parse_json_pointer`]
pub fn json_pointer_to_string<S: AsRef<str>>(segments: &[S]) -> String {
	let mut out = String::with_capacity(segments.iter().map(|s| s.as_ref().len() + 1).sum());
	for segment in segments {
		out.push('/');
		out.push_str(segment.as_ref());
	}
	out
}

/// Split a pointer string into `(parent, child)`
///
/// Returns `None` for the root pointer and for malformed input.
///
/// - `"/"` → `("", "")`
/// - `"/a"` → `("", "a")`
/// - `"/a/b"` → `("/a", "b")`
pub fn parse_json_pointer_into_parent_child(s: &str) -> Option<(String, String)> {
	let mut segments = match parse_json_pointer(s) {
		Ok(segments) => segments,
		Err(err) => {
			debug!("Cannot split pointer: {}", err);
			return None;
		}
	};
	let child = segments.pop()?;
	Some((json_pointer_to_string(&segments), child))
}

/// Compose a parent pointer and a child segment
pub fn parent_child_to_json_pointer(parent: &str, child: &str) -> String {
	format!("{}/{}", parent, child)
}

/// Regular expression over parent pointer strings
///
/// Keeps the source text for joining and an anchored compilation for
/// full-string matching. Two patterns are equal when their sources are.
#[derive(Debug, Clone)]
pub struct PointerPattern {
	source: String,
	anchored: Regex,
}

impl PointerPattern {
	pub fn new(source: impl Into<String>) -> PtResult<Self> {
		let source = source.into();
		let anchored = Regex::new(&format!("^(?:{})$", source))?;
		Ok(Self { source, anchored })
	}

	pub fn source(&self) -> &str {
		&self.source
	}

	/// Whether the whole of `s` matches the pattern
	pub fn is_full_match(&self, s: &str) -> bool {
		self.anchored.is_match(s)
	}
}

impl PartialEq for PointerPattern {
	fn eq(&self, other: &Self) -> bool {
		self.source == other.source
	}
}

impl Eq for PointerPattern {}

/// Specifies the parent part of a pointer, exactly or by pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParentMatcher {
	Exact(String),
	Pattern(PointerPattern),
}

impl ParentMatcher {
	pub fn exact(parent: impl Into<String>) -> Self {
		ParentMatcher::Exact(parent.into())
	}

	pub fn pattern(source: impl Into<String>) -> PtResult<Self> {
		Ok(ParentMatcher::Pattern(PointerPattern::new(source)?))
	}

	pub fn matches(&self, parent: &str) -> bool {
		match self {
			ParentMatcher::Exact(expected) => expected == parent,
			ParentMatcher::Pattern(pattern) => pattern.is_full_match(parent),
		}
	}
}

impl From<&str> for ParentMatcher {
	fn from(parent: &str) -> Self {
		ParentMatcher::Exact(parent.to_string())
	}
}

impl From<String> for ParentMatcher {
	fn from(parent: String) -> Self {
		ParentMatcher::Exact(parent)
	}
}

impl From<PointerPattern> for ParentMatcher {
	fn from(pattern: PointerPattern) -> Self {
		ParentMatcher::Pattern(pattern)
	}
}

/// Whether `pointer` addresses field `child` under a parent accepted by `parent`
pub fn match_parent_child(pointer: &str, parent: &ParentMatcher, child: &str) -> bool {
	let Some((actual_parent, actual_child)) = parse_json_pointer_into_parent_child(pointer) else {
		return false;
	};
	actual_child == child && parent.matches(&actual_parent)
}

/// Build the matcher for `child` one level below `parent`
///
/// A pattern is extended textually: the child is appended as literal
/// source, it is not escaped.
pub fn join_parent_child(parent: &ParentMatcher, child: &str) -> PtResult<ParentMatcher> {
	match parent {
		ParentMatcher::Exact(p) => Ok(ParentMatcher::Exact(parent_child_to_json_pointer(p, child))),
		ParentMatcher::Pattern(pattern) => {
			Ok(ParentMatcher::Pattern(PointerPattern::new(format!("{}/{}", pattern.source, child))?))
		}
	}
}


// vim: ts=4
