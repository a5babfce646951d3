use crate::errors::LoadError;
use crate::graph::{Graph, Minutes};

use std::{fs, path::Path};
use log::debug;


/// A parsed route description: the query pair and the graph it runs on
#[derive(Clone, Debug)]
pub struct RouteRequest {
    pub source: String,
    pub target: String,
    pub graph: Graph<Minutes>,
}


/// Read and parse a route description from disk
pub fn load_file(path: impl AsRef<Path>) -> Result<RouteRequest, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    debug!("read {} bytes from {}", text.len(), path.display());

    parse_input(&text)
}


/// Parse a route description
///
/// The first non-blank line is the query `source,target`, every following
/// non-blank line an undirected edge `from,to,minutes`. Fields are trimmed.
/// The whole graph is built before returning, any bad edge aborts loading.
pub fn parse_input(text: &str) -> Result<RouteRequest, LoadError> {
    let mut lines = text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (line, query) = lines.next().ok_or(LoadError::MissingQuery)?;
    let (source, target) = match split_fields(query).as_slice() {
        &[source, target] if !source.is_empty() && !target.is_empty() => (source, target),
        _ => return Err(LoadError::MalformedQuery { line, content: query.to_string() }),
    };

    let mut graph = Graph::new();
    for (line, content) in lines {
        let (from, to, weight) = match split_fields(content).as_slice() {
            &[from, to, weight] => (from, to, weight),
            _ => return Err(LoadError::MalformedEdge { line, content: content.to_string() }),
        };

        let weight: Minutes = weight.parse()
            .map_err(|_| LoadError::InvalidWeight { line, value: weight.to_string() })?;

        graph.add_edge(from, to, weight)?;
    }

    debug!("loaded query {source} -> {target} over {} nodes, {} edges", graph.node_count(), graph.edge_count());

    Ok(RouteRequest {
        source: source.to_string(),
        target: target.to_string(),
        graph,
    })
}


fn split_fields(line: &str) -> Vec<&str> {
    line.split(',').map(str::trim).collect()
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::RouteError;

    #[test]
    fn test_parse_input() {
        let request = parse_input("A,C\nA,B,5\nB,C,3\nA,C,10\n").unwrap();

        assert_eq!(request.source, "A");
        assert_eq!(request.target, "C");
        assert_eq!(request.graph.node_count(), 3);
        assert_eq!(request.graph.edge_count(), 3);
    }

    #[test]
    fn test_whitespace_and_blank_lines() {
        let request = parse_input("\r\n Moscow , Tver \r\nMoscow, Klin ,60\r\n\r\nKlin,Tver, 45\r\n").unwrap();

        assert_eq!(request.source, "Moscow");
        assert_eq!(request.target, "Tver");
        let nodes: Vec<_> = request.graph.nodes().collect();
        assert_eq!(nodes, vec!["Moscow", "Klin", "Tver"]);
    }

    #[test]
    fn test_query_without_edges() {
        let request = parse_input("A,A").unwrap();
        assert_eq!(request.graph.node_count(), 0);
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(parse_input(""), Err(LoadError::MissingQuery)));
        assert!(matches!(parse_input("\n  \n"), Err(LoadError::MissingQuery)));
    }

    #[test]
    fn test_malformed_query() {
        assert!(matches!(
            parse_input("A,B,C\n"),
            Err(LoadError::MalformedQuery { line: 1, .. })
        ));
        assert!(matches!(
            parse_input("\nA,\n"),
            Err(LoadError::MalformedQuery { line: 2, .. })
        ));
    }

    #[test]
    fn test_malformed_edge_reports_line() {
        let result = parse_input("A,B\nA,B,1\nB,C\n");
        assert!(matches!(result, Err(LoadError::MalformedEdge { line: 3, ref content }) if content == "B,C"));
    }

    #[test]
    fn test_non_integer_weight() {
        let result = parse_input("A,B\nA,B,fast\n");
        assert!(matches!(result, Err(LoadError::InvalidWeight { line: 2, ref value }) if value == "fast"));
    }

    #[test]
    fn test_negative_weight_aborts_loading() {
        let result = parse_input("A,B\nA,B,1\nB,C,-4\n");
        assert!(matches!(result, Err(LoadError::Graph(RouteError::InvalidEdge { .. }))));
    }

    #[test]
    fn test_missing_file() {
        let result = load_file("/nonexistent/route/description.txt");
        assert!(matches!(result, Err(LoadError::Io(_))));
    }
}
