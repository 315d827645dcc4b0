//! Query cursor
//!
//! A [`Query`] holds a single working set, the [`Selection`]. Seeding calls
//! (`find_vertices`, `find_edges`) replace it with a label scan, hops
//! (`over`, `to`) replace it with the entities one step further along the
//! graph, and terminal calls (`get_first`, `get_all`, `count`) hand the
//! result out and reset the cursor to empty.
//!
//! ```text
//! Empty --find_vertices--> Vertices --over--> Edges --to--> Vertices ...
//!       --find_edges-----> Edges
//! ```
//!
//! A hop applied to the wrong kind of set degrades to an empty set of the
//! kind the hop produces. Hops carry no memory beyond the previous set:
//! there is no cycle detection and no deduplication across sources.

use super::filter::Filter;
use crate::graph::{Edge, EntityKind, EntityRef, Graph, GraphEntity, Label, Vertex};
use tracing::trace;

/// Working set of a query, homogeneous in kind
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Selection<'g> {
    #[default]
    Empty,
    Vertices(Vec<&'g Vertex>),
    Edges(Vec<&'g Edge>),
}

impl<'g> Selection<'g> {
    /// Kind of the entities held, `None` before seeding
    pub fn kind(&self) -> Option<EntityKind> {
        match self {
            Selection::Empty => None,
            Selection::Vertices(_) => Some(EntityKind::Vertex),
            Selection::Edges(_) => Some(EntityKind::Edge),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Selection::Empty => 0,
            Selection::Vertices(v) => v.len(),
            Selection::Edges(e) => e.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// First entity in discovery order
    pub fn first(&self) -> Option<EntityRef<'g>> {
        match self {
            Selection::Empty => None,
            Selection::Vertices(v) => v.first().copied().map(EntityRef::Vertex),
            Selection::Edges(e) => e.first().copied().map(EntityRef::Edge),
        }
    }

    /// Iterate the selection as entity references
    pub fn iter(&self) -> impl Iterator<Item = EntityRef<'g>> + '_ {
        let vertices: &[&'g Vertex] = match self {
            Selection::Vertices(v) => v.as_slice(),
            _ => &[],
        };
        let edges: &[&'g Edge] = match self {
            Selection::Edges(e) => e.as_slice(),
            _ => &[],
        };
        vertices
            .iter()
            .copied()
            .map(EntityRef::Vertex)
            .chain(edges.iter().copied().map(EntityRef::Edge))
    }

    /// Selected vertices, empty if the selection holds edges
    pub fn into_vertices(self) -> Vec<&'g Vertex> {
        match self {
            Selection::Vertices(v) => v,
            _ => Vec::new(),
        }
    }

    /// Selected edges, empty if the selection holds vertices
    pub fn into_edges(self) -> Vec<&'g Edge> {
        match self {
            Selection::Edges(e) => e,
            _ => Vec::new(),
        }
    }
}

/// Chainable traversal over a read-only graph
#[derive(Debug, Clone)]
pub struct Query<'g> {
    graph: &'g Graph,
    selected: Selection<'g>,
}

impl<'g> Query<'g> {
    /// Create an empty cursor bound to `graph`
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            selected: Selection::Empty,
        }
    }

    /// Current working set, without consuming it
    pub fn selection(&self) -> &Selection<'g> {
        &self.selected
    }

    /// Seed with every vertex carrying `label` that satisfies `filter`
    pub fn find_vertices(&mut self, label: impl Into<Label>, filter: impl Into<Filter>) -> &mut Self {
        let graph = self.graph;
        let found = scan(graph.vertices(), &label.into(), &filter.into());
        self.selected = Selection::Vertices(found);
        self
    }

    /// Seed with every edge carrying `label` that satisfies `filter`
    pub fn find_edges(&mut self, label: impl Into<Label>, filter: impl Into<Filter>) -> &mut Self {
        let graph = self.graph;
        let found = scan(graph.edges(), &label.into(), &filter.into());
        self.selected = Selection::Edges(found);
        self
    }

    /// Hop from the selected vertices over their outgoing edges
    pub fn over(&mut self, label: impl Into<Label>, filter: impl Into<Filter>) -> &mut Self {
        let label = label.into();
        let filter = filter.into();
        let (label, filter) = (&label, &filter);
        let graph = self.graph;

        let next: Vec<&'g Edge> = match &self.selected {
            Selection::Vertices(sources) => sources
                .iter()
                .flat_map(|vertex| {
                    graph.edges().iter().filter(move |edge| {
                        edge.starts_from(&vertex.id) && &edge.label == label && filter.matches(*edge)
                    })
                })
                .collect(),
            _ => Vec::new(),
        };

        trace!(label = %label, from = self.selected.len(), to = next.len(), "over");
        self.selected = Selection::Edges(next);
        self
    }

    /// Hop from the selected edges to the vertices they point at
    pub fn to(&mut self, label: impl Into<Label>, filter: impl Into<Filter>) -> &mut Self {
        let label = label.into();
        let filter = filter.into();
        let (label, filter) = (&label, &filter);
        let graph = self.graph;

        let next: Vec<&'g Vertex> = match &self.selected {
            Selection::Edges(edges) => edges
                .iter()
                .flat_map(|edge| {
                    graph.vertices().iter().filter(move |vertex| {
                        edge.ends_at(&vertex.id) && &vertex.label == label && filter.matches(*vertex)
                    })
                })
                .collect(),
            _ => Vec::new(),
        };

        trace!(label = %label, from = self.selected.len(), to = next.len(), "to");
        self.selected = Selection::Vertices(next);
        self
    }

    /// Take the first selected entity and reset the cursor
    pub fn get_first(&mut self) -> Option<EntityRef<'g>> {
        std::mem::take(&mut self.selected).first()
    }

    /// Take the whole selection and reset the cursor
    pub fn get_all(&mut self) -> Selection<'g> {
        std::mem::take(&mut self.selected)
    }

    /// Take the size of the selection and reset the cursor
    pub fn count(&mut self) -> usize {
        std::mem::take(&mut self.selected).len()
    }
}

fn scan<'g, E: GraphEntity>(items: &'g [E], label: &Label, filter: &Filter) -> Vec<&'g E> {
    let found: Vec<&'g E> = items
        .iter()
        .filter(|item| item.has_label(label) && filter.matches(*item))
        .collect();
    trace!(kind = %E::KIND, label = %label, matched = found.len(), "seed");
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::EntityId;
    use crate::props;
    use crate::query::PropertyFilter;

    /// John -MARRIED-> Jane, John -CHILDOF-> James, John -CHILDOF-> Martha
    fn build_family() -> (Graph, Vec<EntityId>) {
        let mut graph = Graph::new();
        let john = graph.create_vertex("PERSON", Some(props! { "name" => "John", "gender" => "m" })).unwrap();
        let jane = graph.create_vertex("PERSON", Some(props! { "name" => "Jane", "gender" => "f" })).unwrap();
        let james = graph.create_vertex("PERSON", Some(props! { "name" => "James", "gender" => "m" })).unwrap();
        let martha = graph.create_vertex("PERSON", Some(props! { "name" => "Martha", "gender" => "f" })).unwrap();
        graph
            .create_edge("MARRIED", &john, &jane, Some(props! { "year" => 2014i64 }))
            .unwrap();
        graph.create_edge("CHILDOF", &john, &james, None).unwrap();
        graph.create_edge("CHILDOF", &john, &martha, None).unwrap();
        (graph, vec![john, jane, james, martha])
    }

    #[test]
    fn test_find_vertices_by_label() {
        let (graph, _) = build_family();
        let mut query = Query::new(&graph);

        assert_eq!(query.find_vertices("PERSON", Filter::Any).count(), 4);
        assert_eq!(query.find_vertices("ANIMAL", Filter::Any).count(), 0);
    }

    #[test]
    fn test_find_edges_by_property() {
        let (graph, _) = build_family();
        let edges = Query::new(&graph)
            .find_edges("MARRIED", Filter::property("year", 2014i64))
            .get_all()
            .into_edges();

        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].label.as_str(), "MARRIED");
    }

    #[test]
    fn test_over_then_to() {
        let (graph, ids) = build_family();
        let children = Query::new(&graph)
            .find_vertices("PERSON", Filter::property("name", "John"))
            .over("CHILDOF", Filter::Any)
            .to("PERSON", Filter::Any)
            .get_all()
            .into_vertices();

        let found: Vec<&EntityId> = children.iter().map(|v| &v.id).collect();
        assert_eq!(found, vec![&ids[2], &ids[3]]);
    }

    #[test]
    fn test_to_applies_filter() {
        let (graph, ids) = build_family();
        let first = Query::new(&graph)
            .find_vertices("PERSON", Filter::id(&ids[0]))
            .over("CHILDOF", Filter::Any)
            .to("PERSON", PropertyFilter::new().equals("gender", "f"))
            .get_first()
            .unwrap();

        assert_eq!(first.id(), &ids[3]);
    }

    #[test]
    fn test_hop_on_wrong_kind_is_empty() {
        let (graph, _) = build_family();
        let mut query = Query::new(&graph);

        let selection = query.find_edges("MARRIED", Filter::Any).over("MARRIED", Filter::Any).get_all();
        assert_eq!(selection.kind(), Some(EntityKind::Edge));
        assert!(selection.is_empty());

        let selection = query.find_vertices("PERSON", Filter::Any).to("PERSON", Filter::Any).get_all();
        assert_eq!(selection.kind(), Some(EntityKind::Vertex));
        assert!(selection.is_empty());

        assert_eq!(query.over("MARRIED", Filter::Any).count(), 0);
    }

    #[test]
    fn test_terminal_resets_cursor() {
        let (graph, _) = build_family();
        let mut query = Query::new(&graph);

        query.find_vertices("PERSON", Filter::Any);
        assert!(query.get_first().is_some());
        assert_eq!(query.selection(), &Selection::Empty);
        assert!(query.get_first().is_none());
        assert!(query.get_all().is_empty());
    }

    #[test]
    fn test_no_dedup_across_sources() {
        let mut graph = Graph::new();
        let a = graph.create_vertex("NODE", None).unwrap();
        let b = graph.create_vertex("NODE", None).unwrap();
        let hub = graph.create_vertex("NODE", None).unwrap();
        graph.create_edge("LINK", &a, &hub, None).unwrap();
        graph.create_edge("LINK", &b, &hub, None).unwrap();

        let reached = Query::new(&graph)
            .find_vertices("NODE", Filter::Any)
            .over("LINK", Filter::Any)
            .to("NODE", Filter::Any)
            .get_all()
            .into_vertices();

        assert_eq!(reached.len(), 2);
        assert!(reached.iter().all(|v| v.id == hub));
    }

    #[test]
    fn test_cycles_are_revisited() {
        let mut graph = Graph::new();
        let a = graph.create_vertex("NODE", None).unwrap();
        let b = graph.create_vertex("NODE", None).unwrap();
        graph.create_edge("NEXT", &a, &b, None).unwrap();
        graph.create_edge("NEXT", &b, &a, None).unwrap();

        let back = Query::new(&graph)
            .find_vertices("NODE", Filter::id(&a))
            .over("NEXT", Filter::Any)
            .to("NODE", Filter::Any)
            .over("NEXT", Filter::Any)
            .to("NODE", Filter::Any)
            .get_first()
            .and_then(|e| e.as_vertex());

        assert_eq!(back.map(|v| &v.id), Some(&a));
    }

    #[test]
    fn test_selection_iter() {
        let (graph, _) = build_family();
        let selection = Query::new(&graph).find_edges("CHILDOF", Filter::Any).get_all();

        assert_eq!(selection.iter().count(), 2);
        assert!(selection.iter().all(|e| e.kind() == EntityKind::Edge));
        assert!(selection.clone().into_vertices().is_empty());
    }
}
