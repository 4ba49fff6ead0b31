//! Constants for the DOT writer.

/// Opening of the graph
pub(crate) const DOT_HEADER: &str = "digraph G {\n";

/// Closing of the graph
pub(crate) const DOT_FOOTER: &str = "}\n";

/// Edge operator of directed graphs
pub(crate) const DOT_EDGE: &str = " -> ";

/// Attribute marking persons on the ancestry spine
pub(crate) const HIGHLIGHT_ATTRIBUTE: &str = "color=\"blue\"";
