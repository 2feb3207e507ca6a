mod common;

use gridpath_lib::{
    backtrack, build_graph, find_graph_path, find_path, load_map, plan_path, resolve_algorithm,
    select_pathfinder, AStarPathfinder, CharacterKeys, DijkstraPathfinder, Error, PathAlgorithm,
    Pathfinder, Point, Settings,
};

use common::{blocked_map, fixtures_dir, open_map};

#[test]
fn run_scrubs_every_node_after_success() {
    for algorithm in PathAlgorithm::ALL {
        let mut graph = build_graph(&blocked_map(6, (0, 0), (5, 5), &[(2, 2), (3, 2)]));
        find_graph_path(algorithm, &mut graph).expect("route exists");
        assert!(graph.nodes.is_clean(), "{algorithm} left search state behind");
    }
}

#[test]
fn run_scrubs_every_node_after_failure() {
    for algorithm in PathAlgorithm::ALL {
        let mut graph = build_graph(&blocked_map(4, (0, 0), (3, 3), &[(2, 3), (3, 2)]));
        find_graph_path(algorithm, &mut graph).expect_err("goal walled in");
        assert!(graph.nodes.is_clean(), "{algorithm} left search state behind");
    }
}

#[test]
fn second_run_reproduces_the_first() {
    let mut graph = build_graph(&blocked_map(7, (0, 3), (6, 3), &[(3, 2), (3, 3), (3, 4)]));
    for algorithm in PathAlgorithm::ALL {
        let first = plan_path(&mut graph, algorithm).expect("route exists");
        let second = plan_path(&mut graph, algorithm).expect("route exists");
        assert_eq!(first, second);
    }
}

#[test]
fn graph_is_reusable_across_algorithms() {
    let mut graph = build_graph(&open_map(9, (0, 0), (8, 5)));
    let a_star = plan_path(&mut graph, PathAlgorithm::AStar).expect("route exists");
    let dijkstra = plan_path(&mut graph, PathAlgorithm::Dijkstra).expect("route exists");
    let a_star_again = plan_path(&mut graph, PathAlgorithm::AStar).expect("route exists");

    assert_eq!(a_star.hop_count(), 13);
    assert_eq!(dijkstra.hop_count(), 13);
    assert_eq!(a_star, a_star_again);
}

#[test]
fn raw_pathfinder_leaves_state_for_backtracking() {
    let mut graph = build_graph(&open_map(4, (0, 0), (3, 0)));
    let (start, end) = (graph.start, graph.end);

    let path = DijkstraPathfinder
        .find_path(&mut graph.nodes, start, end)
        .expect("route exists");
    assert!(!graph.nodes.is_clean());
    assert_eq!(backtrack(&graph.nodes, start, end), path);
    assert_eq!(graph.nodes[end].g_score, 3.0);
}

#[test]
fn find_path_accepts_a_selected_pathfinder() {
    let mut graph = build_graph(&open_map(5, (4, 4), (0, 0)));
    let (start, end) = (graph.start, graph.end);

    let pathfinder = resolve_algorithm("AStar").expect("known algorithm");
    assert_eq!(pathfinder.algorithm(), PathAlgorithm::AStar);

    let path = find_path(pathfinder.as_ref(), &mut graph.nodes, start, end).expect("route");
    assert_eq!(path.len(), 9);
    assert_eq!(path.first(), Some(&start));
    assert_eq!(path.last(), Some(&end));
    assert!(graph.nodes.is_clean());

    let path = find_path(&AStarPathfinder, &mut graph.nodes, start, end).expect("route");
    assert_eq!(path.len(), 9);
}

#[test]
fn invalid_selector_is_rejected() {
    let error = resolve_algorithm("breadth-first").err().expect("unknown algorithm");
    assert!(matches!(error, Error::InvalidAlgorithm { .. }));
    assert_eq!(
        select_pathfinder(PathAlgorithm::Dijkstra).algorithm(),
        PathAlgorithm::Dijkstra
    );
}

#[test]
fn sample_map_route_has_expected_length() {
    let map = load_map(&fixtures_dir().join("map_15x15.txt"), &CharacterKeys::default())
        .expect("fixture parses");
    assert_eq!(map.size, 15);
    assert_eq!(map.start, Point::new(1, 1));
    assert_eq!(map.end, Point::new(10, 8));

    let mut graph = build_graph(&map);
    assert_eq!(graph.nodes.len(), 225);
    assert_eq!(graph.start_node().position(), map.start);
    assert_eq!(graph.end_node().position(), map.end);

    for algorithm in PathAlgorithm::ALL {
        let plan = plan_path(&mut graph, algorithm).expect("route exists");
        assert_eq!(plan.steps.len(), 21, "{algorithm}");
    }
}

#[test]
fn settings_fixture_drives_a_search() {
    let settings = Settings::load(&fixtures_dir().join("settings_15x15.json")).expect("settings");
    assert_eq!(settings.pathfinding.algorithm, PathAlgorithm::AStar);
    assert_eq!(settings.map.printer.empty_key, '.');

    let map = settings.load_map().expect("map loads");
    let mut graph = build_graph(&map);
    let plan = plan_path(&mut graph, settings.pathfinding.algorithm).expect("route exists");
    assert_eq!(plan.hop_count(), 20);
}
