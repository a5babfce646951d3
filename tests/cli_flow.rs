use quickest_route::{loader, report, ShortestPathSolver};


fn solve_text(input: &str) -> String {
    let request = loader::parse_input(input).unwrap();
    let route = ShortestPathSolver.solve(&request.graph, &request.source, &request.target).unwrap();
    report::render(&route)
}

#[test]
fn test_detour_beats_direct_edge() {
    assert_eq!(solve_text("A,C\nA,B,5\nB,C,3\nA,C,10\n"), "A,B,C\n8");
}

#[test]
fn test_unreachable_report() {
    assert_eq!(solve_text("A,C\nA,B,2\nC,D,1\n"), "\nunreachable");
}

#[test]
fn test_lighter_duplicate_report() {
    assert_eq!(solve_text("A,B\nA,B,4\nA,B,1\n"), "A,B\n1");
}

#[test]
fn test_same_endpoint_report() {
    assert_eq!(solve_text("B,B\nA,B,4\n"), "B\n0");
}

#[test]
fn test_max_weight_input_does_not_overflow() {
    assert_eq!(solve_text("A,C\nA,B,9223372036854775807\nB,C,1\nA,D,5\n"), "\nunreachable");
    assert_eq!(solve_text("A,C\nA,B,9223372036854775807\nB,C,1\nA,C,9\n"), "A,C\n9");
}

#[test]
fn test_unknown_endpoint() {
    let request = loader::parse_input("A,Z\nA,B,4\n").unwrap();
    let err = ShortestPathSolver.solve(&request.graph, &request.source, &request.target).unwrap_err();
    assert_eq!(err.to_string(), "unknown node: Z");
}

#[test]
fn test_input_file_to_report_file() {
    let dir = std::env::temp_dir();
    let input = dir.join(format!("quickest_route_input_{}.txt", std::process::id()));
    let output = dir.join(format!("quickest_route_output_{}.out", std::process::id()));
    std::fs::write(&input, "Moscow,Tver\nMoscow,Klin,60\nKlin,Tver,45\nMoscow,Tver,120\n").unwrap();

    let request = loader::load_file(&input).unwrap();
    let route = ShortestPathSolver.solve(&request.graph, &request.source, &request.target).unwrap();
    report::write_report(&output, &route).unwrap();

    assert_eq!(std::fs::read_to_string(&output).unwrap(), "Moscow,Klin,Tver\n105");

    std::fs::remove_file(&input).unwrap();
    std::fs::remove_file(&output).unwrap();
}
