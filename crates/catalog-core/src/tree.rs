//! Catalog Tree
//!
//! Tagged view over the catalog hierarchy and its flattening into
//! sidebar rows (depth-first, server order, collapsed by default).

use std::collections::HashSet;

use crate::models::{Answer, Catalog, CatalogAsk, CatalogLesson, CatalogModule};
use crate::routes::EntityRoute;

/// Title of the pseudo-node grouping a module's questions
pub const ASK_GROUP_TITLE: &str = "Testing";

/// Closed set of tree node kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Catalog,
    Module,
    Lesson,
    AskGroup,
    Ask,
    Answer,
}

impl NodeKind {
    pub fn icon(&self) -> &'static str {
        match self {
            NodeKind::Catalog => "📁",
            NodeKind::Module => "📦",
            NodeKind::Lesson => "📝",
            NodeKind::AskGroup | NodeKind::Ask => "✅",
            NodeKind::Answer => "❔",
        }
    }

    /// CSS modifier used for the icon color
    pub fn css_class(&self) -> &'static str {
        match self {
            NodeKind::Catalog => "node-catalog",
            NodeKind::Module => "node-module",
            NodeKind::Lesson => "node-lesson",
            NodeKind::AskGroup => "node-ask-group",
            NodeKind::Ask => "node-ask",
            NodeKind::Answer => "node-answer",
        }
    }

    /// Whether rows of this kind carry an expand toggle
    pub fn is_expandable(&self) -> bool {
        !matches!(self, NodeKind::Lesson | NodeKind::Answer)
    }
}

/// Stable identity of a tree node. Ask groups borrow their module's id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeKey {
    pub kind: NodeKind,
    pub id: String,
}

impl NodeKey {
    pub fn new(kind: NodeKind, id: impl Into<String>) -> Self {
        Self { kind, id: id.into() }
    }
}

/// Borrowed tree node, discriminated by its position in the typed tree
#[derive(Debug, Clone, Copy)]
pub enum CatalogNode<'a> {
    Catalog(&'a Catalog),
    Module(&'a CatalogModule),
    Lesson(&'a CatalogLesson),
    AskGroup(&'a CatalogModule),
    Ask(&'a CatalogAsk),
    Answer(&'a Answer),
}

impl<'a> CatalogNode<'a> {
    pub fn kind(&self) -> NodeKind {
        match *self {
            CatalogNode::Catalog(_) => NodeKind::Catalog,
            CatalogNode::Module(_) => NodeKind::Module,
            CatalogNode::Lesson(_) => NodeKind::Lesson,
            CatalogNode::AskGroup(_) => NodeKind::AskGroup,
            CatalogNode::Ask(_) => NodeKind::Ask,
            CatalogNode::Answer(_) => NodeKind::Answer,
        }
    }

    pub fn id(&self) -> &'a str {
        match *self {
            CatalogNode::Catalog(c) => &c.item_id,
            CatalogNode::Module(m) | CatalogNode::AskGroup(m) => &m.item_id,
            CatalogNode::Lesson(l) => &l.item_id,
            CatalogNode::Ask(a) => &a.item_id,
            CatalogNode::Answer(a) => &a.item_id,
        }
    }

    pub fn title(&self) -> &'a str {
        match *self {
            CatalogNode::Catalog(c) => &c.title,
            CatalogNode::Module(m) => &m.title,
            CatalogNode::Lesson(l) => &l.title,
            CatalogNode::AskGroup(_) => ASK_GROUP_TITLE,
            CatalogNode::Ask(a) => &a.title,
            CatalogNode::Answer(a) => &a.title,
        }
    }

    pub fn key(&self) -> NodeKey {
        NodeKey::new(self.kind(), self.id())
    }

    /// Children in server order
    pub fn children(&self) -> Vec<CatalogNode<'a>> {
        match *self {
            CatalogNode::Catalog(c) => c.modules.iter().map(CatalogNode::Module).collect(),
            CatalogNode::Module(m) => {
                let mut children: Vec<CatalogNode<'a>> =
                    m.lessons.iter().map(CatalogNode::Lesson).collect();
                if !m.asks.is_empty() {
                    children.push(CatalogNode::AskGroup(m));
                }
                children
            }
            CatalogNode::AskGroup(m) => m.asks.iter().map(CatalogNode::Ask).collect(),
            CatalogNode::Ask(a) => a.answers.iter().map(CatalogNode::Answer).collect(),
            CatalogNode::Lesson(_) | CatalogNode::Answer(_) => Vec::new(),
        }
    }

    /// Page this node links to, if it has one
    pub fn route(&self) -> Option<EntityRoute> {
        match *self {
            CatalogNode::Catalog(c) => Some(EntityRoute::Course(c.item_id.clone())),
            CatalogNode::Module(m) => Some(EntityRoute::Module(m.item_id.clone())),
            CatalogNode::Lesson(l) => Some(EntityRoute::Lesson(l.item_id.clone())),
            CatalogNode::Ask(a) => Some(EntityRoute::Ask(a.item_id.clone())),
            CatalogNode::AskGroup(_) | CatalogNode::Answer(_) => None,
        }
    }
}

/// One visible row of the rendered tree
#[derive(Debug, Clone, PartialEq)]
pub struct TreeRow {
    pub key: NodeKey,
    pub title: String,
    pub depth: usize,
    pub expandable: bool,
    pub expanded: bool,
    pub route: Option<EntityRoute>,
}

/// Rows visible given the set of expanded nodes
pub fn flatten_catalog(catalogs: &[Catalog], expanded: &HashSet<NodeKey>) -> Vec<TreeRow> {
    let mut result = Vec::new();
    for catalog in catalogs {
        collect(CatalogNode::Catalog(catalog), 0, &|key| expanded.contains(key), &mut result);
    }
    result
}

/// Every node of the tree, as if fully expanded
pub fn walk_catalog(catalogs: &[Catalog]) -> Vec<TreeRow> {
    let mut result = Vec::new();
    for catalog in catalogs {
        collect(CatalogNode::Catalog(catalog), 0, &|_| true, &mut result);
    }
    result
}

pub fn find_course<'a>(catalogs: &'a [Catalog], course_id: &str) -> Option<&'a Catalog> {
    catalogs.iter().find(|c| c.item_id == course_id)
}

/// A module together with the course holding it
pub fn find_module<'a>(catalogs: &'a [Catalog], module_id: &str) -> Option<(&'a Catalog, &'a CatalogModule)> {
    catalogs
        .iter()
        .find_map(|c| c.modules.iter().find(|m| m.item_id == module_id).map(|m| (c, m)))
}

fn collect(
    node: CatalogNode<'_>,
    depth: usize,
    is_open: &dyn Fn(&NodeKey) -> bool,
    result: &mut Vec<TreeRow>,
) {
    let key = node.key();
    let expandable = node.kind().is_expandable();
    let expanded = expandable && is_open(&key);
    result.push(TreeRow {
        key,
        title: node.title().to_string(),
        depth,
        expandable,
        expanded,
        route: node.route(),
    });
    if expanded {
        for child in node.children() {
            collect(child, depth + 1, is_open, result);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Answer;

    fn answer(id: &str, title: &str) -> Answer {
        Answer { item_id: id.into(), title: title.into(), is_input: false, is_true: false }
    }

    fn sample() -> Vec<Catalog> {
        vec![
            Catalog {
                item_id: "c1".into(),
                title: "Math".into(),
                modules: vec![CatalogModule {
                    item_id: "m1".into(),
                    title: "Intro".into(),
                    course_id: "c1".into(),
                    lessons: vec![
                        CatalogLesson { item_id: "l1".into(), title: "Numbers".into(), module_id: "m1".into() },
                        CatalogLesson { item_id: "l2".into(), title: "Sets".into(), module_id: "m1".into() },
                    ],
                    asks: vec![CatalogAsk {
                        item_id: "a1".into(),
                        title: "2+2?".into(),
                        module_id: "m1".into(),
                        is_input: false,
                        answers: vec![answer("x1", "4"), answer("x2", "5")],
                    }],
                }],
            },
            Catalog { item_id: "c2".into(), title: "Physics".into(), modules: vec![] },
        ]
    }

    #[test]
    fn test_find_module_and_course() {
        let catalogs = sample();
        let (course, module) = find_module(&catalogs, "m1").unwrap();
        assert_eq!(course.title, "Math");
        assert_eq!(module.title, "Intro");
        assert!(find_module(&catalogs, "m9").is_none());
        assert_eq!(find_course(&catalogs, "c2").map(|c| c.title.as_str()), Some("Physics"));
    }

    #[test]
    fn test_single_empty_catalog_renders_one_collapsed_row() {
        let catalogs = vec![Catalog { item_id: "c1".into(), title: "Math".into(), modules: vec![] }];
        let rows = flatten_catalog(&catalogs, &HashSet::new());

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "Math");
        assert_eq!(rows[0].key.kind, NodeKind::Catalog);
        assert_eq!(rows[0].key.kind.icon(), "📁");
        assert!(rows[0].expandable);
        assert!(!rows[0].expanded);
    }

    #[test]
    fn test_collapsed_by_default() {
        let rows = flatten_catalog(&sample(), &HashSet::new());
        let titles: Vec<&str> = rows.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Math", "Physics"]);
    }

    #[test]
    fn test_expansion_follows_server_order() {
        let expanded: HashSet<NodeKey> = [
            NodeKey::new(NodeKind::Catalog, "c1"),
            NodeKey::new(NodeKind::Module, "m1"),
        ]
        .into_iter()
        .collect();
        let rows = flatten_catalog(&sample(), &expanded);

        let shape: Vec<(&str, usize)> = rows.iter().map(|r| (r.title.as_str(), r.depth)).collect();
        assert_eq!(
            shape,
            vec![
                ("Math", 0),
                ("Intro", 1),
                ("Numbers", 2),
                ("Sets", 2),
                (ASK_GROUP_TITLE, 2),
                ("Physics", 0),
            ]
        );
    }

    #[test]
    fn test_walk_renders_each_entity_once_at_its_depth() {
        let rows = walk_catalog(&sample());

        // 2 catalogs + 1 module + 2 lessons + 1 group + 1 ask + 2 answers
        assert_eq!(rows.len(), 9);
        let keys: HashSet<&NodeKey> = rows.iter().map(|r| &r.key).collect();
        assert_eq!(keys.len(), rows.len());

        for row in &rows {
            let expected = match row.key.kind {
                NodeKind::Catalog => 0,
                NodeKind::Module => 1,
                NodeKind::Lesson | NodeKind::AskGroup => 2,
                NodeKind::Ask => 3,
                NodeKind::Answer => 4,
            };
            assert_eq!(row.depth, expected, "{:?}", row.key);
        }
    }

    #[test]
    fn test_module_without_asks_has_no_group() {
        let mut catalogs = sample();
        catalogs[0].modules[0].asks.clear();
        let rows = walk_catalog(&catalogs);
        assert!(rows.iter().all(|r| r.key.kind != NodeKind::AskGroup));
    }

    #[test]
    fn test_leaves_are_not_expandable_and_link_to_pages() {
        let rows = walk_catalog(&sample());
        let lesson = rows.iter().find(|r| r.key.id == "l1").unwrap();
        assert!(!lesson.expandable);
        assert_eq!(lesson.route, Some(EntityRoute::Lesson("l1".into())));

        let answer = rows.iter().find(|r| r.key.id == "x1").unwrap();
        assert_eq!(answer.key.kind, NodeKind::Answer);
        assert_eq!(answer.route, None);
    }
}
