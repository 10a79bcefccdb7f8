//! DOT reader
//!
//! Covers the subset found in build-system dependency dumps: `[strict]
//! (di)graph`, node/edge/attribute statements, `->`/`--` chains with
//! subgraph operands, ports, and nested `subgraph { }` blocks. Nodes are
//! created in first-appearance order; the label is the node id unless the
//! node statement sets a `label` attribute.

use rustc_hash::FxHashMap;
use tracing::debug;

use archgraph_core::{Graph, VertexId};

use super::lexer::{tokenize, Spanned, Token};
use crate::error::{Result, StorageError};

struct Parser {
    tokens: Vec<Spanned>,
    pos: usize,
    graph: Graph,
    nodes: FxHashMap<String, VertexId>,
}

impl Parser {
    fn line(&self) -> usize {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .map_or(1, |s| s.line)
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|s| &s.token)
    }

    fn peek_at(&self, offset: usize) -> Option<&Token> {
        self.tokens.get(self.pos + offset).map(|s| &s.token)
    }

    fn bump(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).map(|s| s.token.clone());
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn error(&self, message: impl Into<String>) -> StorageError {
        StorageError::parse(self.line(), message)
    }

    fn expect(&mut self, expected: Token, what: &str) -> Result<()> {
        match self.bump() {
            Some(token) if token == expected => Ok(()),
            Some(_) => {
                self.pos -= 1;
                Err(self.error(format!("expected {}", what)))
            }
            None => Err(self.error(format!("expected {}, found end of input", what))),
        }
    }

    fn eat(&mut self, token: &Token) -> bool {
        if self.peek() == Some(token) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn eat_keyword(&mut self, keyword: &str) -> bool {
        if self.peek().map_or(false, |t| t.is_keyword(keyword)) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn id(&mut self) -> Result<String> {
        match self.bump() {
            Some(Token::Id { text, .. }) => Ok(text),
            Some(_) => {
                self.pos -= 1;
                Err(self.error("expected an identifier"))
            }
            None => Err(self.error("expected an identifier, found end of input")),
        }
    }

    fn node(&mut self, name: &str) -> VertexId {
        if let Some(&id) = self.nodes.get(name) {
            return id;
        }
        let id = self.graph.add_vertex(name);
        self.nodes.insert(name.to_string(), id);
        id
    }

    fn graph(&mut self) -> Result<()> {
        self.eat_keyword("strict");
        if !self.eat_keyword("digraph") && !self.eat_keyword("graph") {
            return Err(self.error("expected 'digraph' or 'graph'"));
        }
        if matches!(self.peek(), Some(Token::Id { .. })) {
            self.id()?;
        }
        self.expect(Token::LBrace, "'{'")?;
        self.statements()?;
        self.expect(Token::RBrace, "'}'")?;
        if self.peek().is_some() {
            return Err(self.error("unexpected content after the closing '}'"));
        }
        Ok(())
    }

    /// Statements up to (not including) the closing brace.
    /// Returns every node mentioned, for subgraph edge operands.
    fn statements(&mut self) -> Result<Vec<VertexId>> {
        let mut mentioned = Vec::new();
        while !matches!(self.peek(), Some(Token::RBrace) | None) {
            let nodes = self.statement()?;
            for n in nodes {
                if !mentioned.contains(&n) {
                    mentioned.push(n);
                }
            }
            self.eat(&Token::Semicolon);
        }
        Ok(mentioned)
    }

    fn statement(&mut self) -> Result<Vec<VertexId>> {
        let is_attr_stmt = ["graph", "node", "edge"]
            .iter()
            .any(|k| self.peek().map_or(false, |t| t.is_keyword(k)))
            && self.peek_at(1) == Some(&Token::LBracket);
        if is_attr_stmt {
            self.pos += 1;
            self.attributes()?;
            return Ok(Vec::new());
        }

        // graph attribute `id = id`
        if matches!(self.peek(), Some(Token::Id { .. })) && self.peek_at(1) == Some(&Token::Equals) {
            self.id()?;
            self.pos += 1;
            self.id()?;
            return Ok(Vec::new());
        }

        let (first, single) = self.operand()?;
        if matches!(self.peek(), Some(Token::Arrow) | Some(Token::Line)) {
            return self.edge_chain(first);
        }

        let attributes = self.attributes()?;
        if let (Some(node), Some(label)) = (single, attributes.get("label")) {
            self.graph
                .set_label(node, label.as_str())
                .map_err(|e| StorageError::parse(self.line(), e.to_string()))?;
        }
        Ok(first)
    }

    /// Node id or subgraph; the second value is set for a single node id
    fn operand(&mut self) -> Result<(Vec<VertexId>, Option<VertexId>)> {
        let is_subgraph = self.peek().map_or(false, |t| t.is_keyword("subgraph"))
            || self.peek() == Some(&Token::LBrace);
        if is_subgraph {
            if self.eat_keyword("subgraph") && matches!(self.peek(), Some(Token::Id { .. })) {
                self.id()?;
            }
            self.expect(Token::LBrace, "'{' after subgraph")?;
            let nodes = self.statements()?;
            self.expect(Token::RBrace, "'}' closing subgraph")?;
            return Ok((nodes, None));
        }

        let name = self.id()?;
        // port: `:port[:compass]`
        if self.eat(&Token::Colon) {
            self.id()?;
            if self.eat(&Token::Colon) {
                self.id()?;
            }
        }
        let node = self.node(&name);
        Ok((vec![node], Some(node)))
    }

    fn edge_chain(&mut self, first: Vec<VertexId>) -> Result<Vec<VertexId>> {
        let mut mentioned = first.clone();
        let mut left = first;
        while self.eat(&Token::Arrow) || self.eat(&Token::Line) {
            let (right, _) = self.operand()?;
            for &s in &left {
                for &t in &right {
                    self.graph
                        .add_edge(s, t)
                        .map_err(|e| StorageError::parse(self.line(), e.to_string()))?;
                }
            }
            for &n in &right {
                if !mentioned.contains(&n) {
                    mentioned.push(n);
                }
            }
            left = right;
        }
        self.attributes()?;
        Ok(mentioned)
    }

    /// Zero or more `[ a = b, c ]` lists
    fn attributes(&mut self) -> Result<FxHashMap<String, String>> {
        let mut attributes = FxHashMap::default();
        while self.eat(&Token::LBracket) {
            while !self.eat(&Token::RBracket) {
                let key = self.id()?;
                let value = if self.eat(&Token::Equals) {
                    self.id()?
                } else {
                    "true".to_string()
                };
                attributes.insert(key, value);
                if !self.eat(&Token::Comma) {
                    self.eat(&Token::Semicolon);
                }
            }
        }
        Ok(attributes)
    }
}

/// Parse DOT text into a graph
pub fn parse_dot(text: &str) -> Result<Graph> {
    let mut parser = Parser {
        tokens: tokenize(text)?,
        pos: 0,
        graph: Graph::new(),
        nodes: FxHashMap::default(),
    };
    parser.graph()?;
    debug!(
        "Parsed DOT graph: {} vertices, {} edges",
        parser.graph.vertex_count(),
        parser.graph.edge_count()
    );
    Ok(parser.graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use archgraph_core::GraphAccess;
    use pretty_assertions::assert_eq;

    fn labelled_edges(graph: &Graph) -> Vec<(String, String)> {
        graph
            .edges()
            .map(|e| {
                (
                    graph.label(e.source).unwrap().to_string(),
                    graph.label(e.target).unwrap().to_string(),
                )
            })
            .collect()
    }

    fn labels(graph: &Graph) -> Vec<String> {
        graph
            .vertices()
            .map(|v| graph.label(v).unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_build_dump() {
        let graph = parse_dot(
            r#"digraph "deps" {
                 node [shape=box];
                 "app" -> "libA" [color=red];
                 "app" -> libB;
                 libA -> libB -> "libC";
                 lonely;
               }"#,
        )
        .unwrap();

        assert_eq!(labels(&graph), vec!["app", "libA", "libB", "libC", "lonely"]);
        assert_eq!(
            labelled_edges(&graph),
            vec![
                ("app".into(), "libA".into()),
                ("app".into(), "libB".into()),
                ("libA".into(), "libB".into()),
                ("libB".into(), "libC".into()),
            ]
        );
    }

    #[test]
    fn test_subgraph_operands_and_blocks() {
        let graph = parse_dot(
            "strict digraph { rankdir = LR; subgraph cluster_x { a; b } a -> { c d }; }",
        )
        .unwrap();
        assert_eq!(labels(&graph), vec!["a", "b", "c", "d"]);
        assert_eq!(
            labelled_edges(&graph),
            vec![("a".into(), "c".into()), ("a".into(), "d".into())]
        );
    }

    #[test]
    fn test_ports_and_label_attribute() {
        let graph = parse_dot(
            r#"digraph { "node0" [ label = "foo", shape = egg ]; "node1" [label="bar"]; "node0":p1:n -> "node1"; }"#,
        )
        .unwrap();
        assert_eq!(labels(&graph), vec!["foo", "bar"]);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_parallel_edges_and_self_loops_are_kept() {
        let graph = parse_dot("digraph { a -> b; a -> b; b -> b }").unwrap();
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_errors() {
        assert!(parse_dot("digraph { a -> }").is_err());
        assert!(parse_dot("digraph { a").is_err());
        assert!(parse_dot("flowchart { a }").is_err());
        assert!(parse_dot("digraph { a } trailing").is_err());
    }
}
