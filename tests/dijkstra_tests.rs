use aoc_search::algorithm::bfs::{bfs_all, bfs_distance};
use aoc_search::algorithm::dijkstra::{dijkstra, dijkstra_all, dijkstra_path, Dijkstra};
use ordered_float::OrderedFloat;
use std::collections::HashMap;

fn letters(node: &char) -> Vec<(char, u32)> {
    match node {
        'A' => vec![('B', 1), ('C', 4)],
        'B' => vec![('C', 2), ('D', 5)],
        'C' => vec![('D', 1)],
        _ => vec![],
    }
}

#[test]
fn test_weighted_example() {
    assert_eq!(dijkstra(&'A', &'D', letters), Some(4));

    let (path, cost) = dijkstra_path(&'A', &'D', letters).unwrap();
    assert_eq!(path, vec!['A', 'B', 'C', 'D']);
    assert_eq!(cost, 4);

    let all = dijkstra_all(&'A', letters);
    let expected = HashMap::from([('A', 0), ('B', 1), ('C', 3), ('D', 4)]);
    assert_eq!(all, expected);
}

#[test]
fn test_start_equals_goal() {
    assert_eq!(dijkstra(&'C', &'C', letters), Some(0));
    assert_eq!(dijkstra_path(&'C', &'C', letters), Some((vec!['C'], 0)));
}

#[test]
fn test_unreachable_goal() {
    assert_eq!(dijkstra(&'D', &'A', letters), None);
    assert_eq!(dijkstra_path(&'D', &'A', letters), None);

    let isolated = dijkstra_all(&'Z', letters);
    assert_eq!(isolated.len(), 1);
    assert_eq!(isolated[&'Z'], 0);
}

#[test]
fn test_unit_costs_match_bfs() {
    let moves = |&(x, y): &(i32, i32)| -> Vec<(i32, i32)> {
        [(0, -1), (1, 0), (0, 1), (-1, 0)]
            .iter()
            .map(|(dx, dy)| (x + dx, y + dy))
            .filter(|&(nx, ny)| (0..7).contains(&nx) && (0..5).contains(&ny) && !(nx == 3 && ny < 4))
            .collect()
    };
    let weighted = |p: &(i32, i32)| moves(p).into_iter().map(|q| (q, 1usize)).collect::<Vec<_>>();

    let unweighted_all = bfs_all(&(0, 0), moves);
    let weighted_all = dijkstra_all(&(0, 0), weighted);
    assert_eq!(unweighted_all, weighted_all);

    for target in [(6, 0), (2, 3), (3, 4), (6, 4)] {
        assert_eq!(bfs_distance(&(0, 0), &target, moves), dijkstra(&(0, 0), &target, weighted));
    }
}

#[test]
fn test_cycles_do_not_regress_distances() {
    // 0 -> 1 -> 2 -> 0 cycle plus a zero-cost self loop on 1
    let edges = |n: &u8| match n {
        0 => vec![(1, 2), (3, 10)],
        1 => vec![(1, 0), (2, 3)],
        2 => vec![(0, 1), (3, 1)],
        _ => vec![],
    };

    let all = dijkstra_all(&0u8, edges);
    assert_eq!(all, HashMap::from([(0, 0), (1, 2), (2, 5), (3, 6)]));
    assert_eq!(dijkstra(&0, &3, edges), Some(6));
}

#[test]
fn test_stale_entries_are_skipped() {
    // The expensive direct edge to 'T' is pushed first and later improved
    let mut expansions: HashMap<char, usize> = HashMap::new();
    let edges = |n: &char| {
        *expansions.entry(*n).or_default() += 1;
        match n {
            'S' => vec![('T', 10), ('a', 1)],
            'a' => vec![('b', 1)],
            'b' => vec![('T', 1)],
            'T' => vec![('U', 1)],
            _ => vec![],
        }
    };

    let all = dijkstra_all(&'S', edges);
    assert_eq!(all[&'T'], 3);
    assert_eq!(all[&'U'], 4);
    assert!(expansions.values().all(|&count| count == 1), "each node settles once");
}

#[test]
fn test_float_weights() {
    let diagonal = OrderedFloat(std::f64::consts::SQRT_2);
    let moves = |&(x, y): &(i64, i64)| {
        let mut out = Vec::new();
        for (dx, dy) in [(1, 0), (0, 1), (1, 1)] {
            let (nx, ny) = (x + dx, y + dy);
            if nx <= 3 && ny <= 3 {
                let cost = if dx != 0 && dy != 0 { diagonal } else { OrderedFloat(1.0) };
                out.push(((nx, ny), cost));
            }
        }
        out
    };

    let cost = dijkstra(&(0, 0), &(3, 3), moves).unwrap();
    assert!((cost.into_inner() - 3.0 * std::f64::consts::SQRT_2).abs() < 1e-9);

    // Plain f64 works too: only a partial order is needed
    let plain = |n: &u8| if *n < 3 { vec![(n + 1, 0.5f64)] } else { vec![] };
    assert_eq!(dijkstra(&0, &3, plain), Some(1.5));
}

#[test]
fn test_max_cost() {
    let line = |n: &u32| vec![(n + 1, 2u32)];
    let bounded = Dijkstra::new().with_max_cost(7);

    let all = bounded.all_distances_by_key(&0, line, |n| *n);
    assert_eq!(all.len(), 4);
    assert!(all.values().all(|&cost| cost <= 7));

    assert_eq!(bounded.distance_by_key(&0, &3, line, |n| *n), Some(6));
    assert_eq!(bounded.distance_by_key(&0, &4, line, |n| *n), None);
}

#[test]
fn test_goal_predicate_and_key() {
    // Walking costs 1 per step; state remembers how it got there
    #[derive(Clone, Debug)]
    struct Walker {
        at: i32,
        trail: Vec<i32>,
    }

    let step = |w: &Walker| {
        [-1, 1, 3]
            .iter()
            .map(|d| {
                let mut trail = w.trail.clone();
                trail.push(w.at + d);
                (Walker { at: w.at + d, trail }, 1u32)
            })
            .collect::<Vec<_>>()
    };
    let start = Walker { at: 0, trail: vec![0] };
    let goal = Walker { at: 8, trail: vec![] };

    let search = Dijkstra::new();
    let (path, cost) = search.path_by_key(&start, &goal, step, |w| w.at).unwrap();
    assert_eq!(cost, 4);
    assert_eq!(path.len(), 5);
    assert_eq!(path.last().unwrap().trail.len(), 5);
    assert_eq!(search.distance_by_key(&start, &goal, step, |w| w.at), Some(4));

    let plain = |n: &i32| vec![(n + 1, 1u32), (n * 3, 2u32)];
    let search = Dijkstra::new();
    assert_eq!(search.distance_until(&1, plain, |n| *n >= 9), Some(4));
    let (path, cost) = search.path_until(&1, plain, |n| *n >= 9).unwrap();
    assert_eq!(cost, 4);
    assert_eq!(path.first(), Some(&1));
    assert!(*path.last().unwrap() >= 9);
}

#[test]
fn test_wide_cost_type_holds_long_paths() {
    // Edge weights fit in a byte but the accumulated cost does not
    let chain = |n: &u8| {
        if *n < 4 {
            vec![(n + 1, u32::from(200u8))]
        } else {
            vec![]
        }
    };

    assert_eq!(dijkstra(&0u8, &4u8, chain), Some(800));
    assert_eq!(dijkstra_all(&0u8, chain)[&2], 400);
}
