//! Collapsing revisit loops and boundary markers out of raw walks.

use std::collections::HashMap;

use labyrinth_core::Coord;

/// Normalize a raw walk in one left-to-right pass.
///
/// Whenever a coordinate re-appears, the output is cut back to its earlier
/// occurrence, dropping the whole loop in between. Afterwards a leading `start`
/// and a trailing `end` are stripped, so the result never repeats the segment
/// markers. Walks of at most two coordinates are returned unchanged.
///
/// This never fails: every input, however degenerate, has a defined result.
pub fn prune(raw: &[Coord], start: Coord, end: Coord) -> Vec<Coord> {
    if raw.len() <= 2 {
        return raw.to_vec();
    }

    let mut out: Vec<Coord> = Vec::with_capacity(raw.len());
    // Output position of every coordinate currently in `out`.
    let mut placed: HashMap<Coord, usize> = HashMap::with_capacity(raw.len());

    for &c in raw {
        match placed.get(&c).copied() {
            Some(i) => {
                for dropped in out.drain(i + 1..) {
                    placed.remove(&dropped);
                }
            }
            None => {
                placed.insert(c, out.len());
                out.push(c);
            }
        }
    }

    if out.first() == Some(&start) {
        out.remove(0);
    }
    if out.last() == Some(&end) {
        out.pop();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cs(v: &[(i32, i32)]) -> Vec<Coord> {
        v.iter().copied().map(Coord::from).collect()
    }

    const START: Coord = Coord::new(0, 1);
    const END: Coord = Coord::new(0, 5);

    fn expected() -> Vec<Coord> {
        cs(&[(1, 1), (1, 2), (1, 3), (1, 4), (1, 5)])
    }

    fn repeat(v: &[Coord], times: usize) -> Vec<Coord> {
        v.iter().copied().cycle().take(v.len() * times).collect()
    }

    #[test]
    fn clean_walk_untouched() {
        assert_eq!(prune(&expected(), START, END), expected());
    }

    #[test]
    fn single_loop_collapsed() {
        let raw = cs(&[(1, 1), (1, 2), (1, 3), (1, 4), (2, 4), (3, 4), (2, 4), (1, 4), (1, 5)]);
        assert_eq!(prune(&raw, START, END), expected());
    }

    #[test]
    fn double_loop_collapsed() {
        let raw = cs(&[
            (1, 1),
            (1, 2),
            (1, 3),
            (1, 4),
            (2, 4),
            (3, 4),
            (2, 4),
            (1, 4),
            (2, 4),
            (3, 4),
            (2, 4),
            (1, 4),
            (1, 5),
        ]);
        assert_eq!(prune(&raw, START, END), expected());
    }

    #[test]
    fn boundary_markers_stripped() {
        let with_end = cs(&[(1, 1), (1, 2), (1, 3), (1, 4), (1, 5), (0, 5)]);
        assert_eq!(prune(&with_end, START, END), expected());

        let with_start = cs(&[(0, 1), (1, 1), (1, 2), (1, 3), (1, 4), (1, 5)]);
        assert_eq!(prune(&with_start, START, END), expected());

        let both = cs(&[(0, 1), (1, 1), (1, 2), (1, 3), (1, 4), (1, 5), (0, 5)]);
        assert_eq!(prune(&both, START, END), expected());
    }

    #[test]
    fn repeated_boundary_markers_stripped() {
        let raw = cs(&[(0, 1), (0, 1), (1, 1), (1, 2), (1, 3), (1, 4), (1, 5), (0, 5), (0, 5)]);
        assert_eq!(prune(&raw, START, END), expected());

        let raw = cs(&[
            (0, 1),
            (0, 1),
            (0, 1),
            (1, 1),
            (1, 2),
            (1, 3),
            (1, 4),
            (1, 5),
            (0, 5),
            (0, 5),
        ]);
        assert_eq!(prune(&raw, START, END), expected());
    }

    #[test]
    fn messy_walk_repeated_many_times() {
        let messy = cs(&[
            (0, 1),
            (0, 1),
            (0, 1),
            (1, 1),
            (1, 2),
            (1, 3),
            (1, 4),
            (2, 4),
            (3, 4),
            (2, 4),
            (1, 4),
            (1, 5),
            (0, 5),
            (0, 5),
        ]);
        assert_eq!(messy.len(), 14);
        assert_eq!(prune(&messy, START, END), expected());
        assert_eq!(prune(&repeat(&messy, 100), START, END), expected());
    }

    #[test]
    fn degenerate_inputs() {
        assert_eq!(prune(&[], START, END), Vec::<Coord>::new());

        let one = cs(&[(1, 1)]);
        assert_eq!(prune(&one, START, END), one);

        let two = cs(&[(1, 1), (1, 2)]);
        assert_eq!(prune(&two, START, END), two);
        assert_eq!(prune(&repeat(&two, 100), START, END), two);

        // Short inputs are returned as-is, markers included.
        let markers = vec![START, END];
        assert_eq!(prune(&markers, START, END), markers);
    }

    #[test]
    fn idempotent() {
        let raw = cs(&[
            (0, 1),
            (1, 1),
            (2, 1),
            (2, 2),
            (1, 2),
            (1, 1),
            (1, 2),
            (1, 3),
            (2, 3),
            (1, 3),
            (1, 4),
            (1, 5),
            (0, 5),
        ]);
        let once = prune(&raw, START, END);
        assert_eq!(once, expected());
        assert_eq!(prune(&once, START, END), once);
    }

    #[test]
    fn duplication_invariant() {
        let walks = [
            cs(&[(1, 1), (1, 2), (2, 2), (1, 2), (1, 3)]),
            cs(&[(0, 1), (1, 1), (2, 1), (1, 1), (1, 2), (0, 5)]),
            cs(&[(3, 3), (3, 4), (3, 5), (4, 5), (3, 5), (3, 4), (2, 4)]),
        ];
        for walk in &walks {
            let base = prune(walk, START, END);
            for k in 1..=5 {
                assert_eq!(prune(&repeat(walk, k), START, END), base, "k = {k}");
            }
        }
    }
}
