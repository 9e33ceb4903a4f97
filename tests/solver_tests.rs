use std::collections::HashSet;

use sokosolve::solver::try_move;
use sokosolve::{parse_level, solve_text, Dir, Outcome, SearchOptions};

fn solve(text: &str) -> (Outcome, sokosolve::SearchResult) {
    solve_text(text, SearchOptions::default()).expect("solve")
}

fn moves_of(outcome: &Outcome) -> &str {
    match outcome {
        Outcome::Solved { moves } => moves,
        Outcome::Unsolvable => panic!("expected a solution"),
    }
}

/// Independent replay of a move string against the raw puzzle text.
/// Panics on any illegal step; asserts every box ends on a goal.
fn replay(text: &str, moves: &str) {
    let lines: Vec<&str> = text.lines().collect();
    let mut walls = HashSet::new();
    let mut goals = HashSet::new();
    let mut boxes = HashSet::new();
    let mut player = None;
    for (r, line) in lines.iter().enumerate() {
        for (c, ch) in line.chars().enumerate() {
            let pos = (r as i32, c as i32);
            match ch {
                '#' => {
                    walls.insert(pos);
                }
                '.' => {
                    goals.insert(pos);
                }
                '@' => player = Some(pos),
                '+' => {
                    goals.insert(pos);
                    player = Some(pos);
                }
                '$' => {
                    boxes.insert(pos);
                }
                '*' => {
                    goals.insert(pos);
                    boxes.insert(pos);
                }
                _ => {}
            }
        }
    }
    let mut player = player.expect("replay: no player");

    for ch in moves.chars() {
        let (dr, dc) = match ch.to_ascii_lowercase() {
            'u' => (-1, 0),
            'd' => (1, 0),
            'l' => (0, -1),
            'r' => (0, 1),
            other => panic!("replay: bad move letter {other:?}"),
        };
        let dest = (player.0 + dr, player.1 + dc);
        assert!(!walls.contains(&dest), "replay: walked into a wall at {dest:?}");
        if boxes.contains(&dest) {
            assert!(ch.is_ascii_uppercase(), "replay: push written as a walk");
            let beyond = (dest.0 + dr, dest.1 + dc);
            assert!(!walls.contains(&beyond), "replay: pushed into a wall");
            assert!(!boxes.contains(&beyond), "replay: pushed into a box");
            boxes.remove(&dest);
            boxes.insert(beyond);
        } else {
            assert!(ch.is_ascii_lowercase(), "replay: walk written as a push");
        }
        player = dest;
    }

    assert!(
        boxes.iter().all(|b| goals.contains(b)),
        "replay: boxes left off-goal"
    );
}

#[test]
fn single_push_corridor() {
    let text = "#####\n#@$.#\n#####";
    let (outcome, result) = solve(text);
    assert_eq!(moves_of(&outcome), "R");
    assert_eq!(result.depth, 1);
    replay(text, "R");
}

#[test]
fn bfs_finds_the_shortest_solution() {
    // Two walks then one push; no shorter sequence exists.
    let text = "#######\n#@  $.#\n#######";
    let (outcome, result) = solve(text);
    let moves = moves_of(&outcome);
    assert_eq!(moves.len(), 3, "optimal length is 3, got {moves:?}");
    assert_eq!(result.depth, 3);
    replay(text, moves);
}

#[test]
fn already_solved_puzzle_yields_empty_moves() {
    let (outcome, result) = solve("####\n#@*#\n####");
    assert_eq!(moves_of(&outcome), "");
    assert_eq!(result.depth, 0);
}

#[test]
fn cornered_box_is_unsolvable() {
    let (outcome, _) = solve("#####\n#@ .#\n##$ #\n#####");
    assert_eq!(outcome, Outcome::Unsolvable);
}

#[test]
fn two_boxes_in_one_corridor() {
    let text = "#######\n#.$@$.#\n#######";
    let (outcome, _) = solve(text);
    let moves = moves_of(&outcome);
    assert_eq!(moves.len(), 3, "optimal length is 3, got {moves:?}");
    replay(text, moves);
}

#[test]
fn two_boxes_force_a_push_order() {
    // Pushing the lower box first costs an extra detour, so the optimal
    // solution must clear the upper box before walking around.
    let text = "#####\n#.$@#\n#.$ #\n#####";
    let (outcome, result) = solve(text);
    let moves = moves_of(&outcome);
    assert_eq!(moves.len(), 4, "optimal length is 4, got {moves:?}");
    assert_eq!(result.depth, 4);
    replay(text, moves);
}

#[test]
fn push_onto_a_dead_cell_is_rejected() {
    // Goal at 9; cell 10 is floor but dead (no push can ever leave it
    // toward a goal). A push that would land there must be refused.
    let (board, _) = parse_level("######\n#@$. #\n######").expect("parse");
    assert!(!board.is_live(10));

    // Player at 8 facing the box at 9: push right would land on 10.
    assert!(try_move(&board, &[8, 9], Dir::Right).is_none());
    // The same push one cell earlier lands on the live goal cell.
    assert!(try_move(&board, &[7, 8], Dir::Right).is_some());
}

#[test]
fn accepted_states_never_hold_a_box_on_a_dead_cell() {
    let text = "#####\n#.$@#\n#.$ #\n#####";
    let (board, _) = parse_level(text).expect("parse");
    let (outcome, result) = solve(text);
    let goal = result.goal.expect("solved");
    assert!(matches!(outcome, Outcome::Solved { .. }));

    // Every state on the solution chain keeps all boxes on live cells.
    let mut cursor = Some(goal);
    while let Some(id) = cursor {
        let s = result.arena.get(id);
        for &b in s.boxes() {
            assert!(board.is_live(b), "box on dead cell {b} in accepted state");
        }
        cursor = s.prev;
    }
}
