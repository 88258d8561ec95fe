use std::fmt;
use std::hash::{Hash, Hasher};

/// A vertex identified by its label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LabeledVertex {
    label: String,
}

impl LabeledVertex {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for LabeledVertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// An edge carrying a weight, identified by its label alone.
///
/// Two edges with the same label are the same edge, whatever their weights.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LabeledWeightedEdge<W> {
    label: String,
    weight: W,
}

impl<W> LabeledWeightedEdge<W> {
    pub fn new(label: impl Into<String>, weight: W) -> Self {
        Self {
            label: label.into(),
            weight,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn weight(&self) -> &W {
        &self.weight
    }
}

impl<W> PartialEq for LabeledWeightedEdge<W> {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label
    }
}

impl<W> Eq for LabeledWeightedEdge<W> {}

impl<W> Hash for LabeledWeightedEdge<W> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.label.hash(state);
    }
}

impl<W: fmt::Display> fmt::Display for LabeledWeightedEdge<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.label, self.weight)
    }
}

/// Weight extractor for labeled edges, for use with
/// [`where_edges_have_weights`](crate::solve::builder::SpanningWeightedEdgeMapperBuilder::where_edges_have_weights).
pub fn weight_of<W: Clone>(edge: &LabeledWeightedEdge<W>) -> W {
    edge.weight.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn edge_identity_is_label() {
        let a = LabeledWeightedEdge::new("a <-> b", 7.0);
        let b = LabeledWeightedEdge::new("a <-> b", 9.0);
        assert_eq!(a, b);

        let set: HashSet<_> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn weight_of_clones_weight() {
        let e = LabeledWeightedEdge::new("x", 3.5);
        assert_eq!(weight_of(&e), 3.5);
    }

    #[test]
    fn display() {
        assert_eq!(LabeledVertex::new("A").to_string(), "A");
        assert_eq!(LabeledWeightedEdge::new("a <-> b", 7).to_string(), "a <-> b:7");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_keeps_label_and_weight() {
        let e = LabeledWeightedEdge::new("a <-> b", 7_i64);
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["label"], "a <-> b");
        assert_eq!(json["weight"], 7);

        let back: LabeledWeightedEdge<i64> = serde_json::from_value(json).unwrap();
        assert_eq!(back.label(), "a <-> b");
        assert_eq!(*back.weight(), 7);

        let v: LabeledVertex = serde_json::from_str(r#"{"label":"A"}"#).unwrap();
        assert_eq!(v, LabeledVertex::new("A"));
    }
}
