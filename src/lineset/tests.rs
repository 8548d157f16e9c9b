// src/lineset/tests.rs

use super::*;

const ALL_MASKS: std::ops::RangeInclusive<u8> = 0..=15;

#[test]
fn complement_swaps_opposite_edges() {
    assert_eq!(complement(Direction::RIGHT), Direction::LEFT);
    assert_eq!(complement(Direction::LEFT), Direction::RIGHT);
    assert_eq!(complement(Direction::TOP), Direction::BOTTOM);
    assert_eq!(complement(Direction::BOTTOM), Direction::TOP);
    for edge in Direction::EDGES {
        assert_eq!(complement(complement(edge)), edge);
    }
}

#[test]
fn complement_is_not_the_bitwise_not() {
    // The flags type's own `complement` flips every other edge.
    assert_eq!(
        Direction::RIGHT.complement(),
        Direction::TOP | Direction::LEFT | Direction::BOTTOM
    );
    assert_eq!(complement(Direction::RIGHT | Direction::TOP), Direction::LEFT | Direction::BOTTOM);
}

#[test]
fn rotate_swaps_axes() {
    assert_eq!(Direction::RIGHT.rotate(), Direction::TOP);
    assert_eq!(Direction::TOP.rotate(), Direction::RIGHT);
    assert_eq!(Direction::LEFT.rotate(), Direction::BOTTOM);
    assert_eq!(Direction::BOTTOM.rotate(), Direction::LEFT);
    for edge in Direction::EDGES {
        assert_eq!(edge.rotate().rotate(), edge);
    }
}

#[test]
fn single_set_best_fit_scenario() {
    let set = get_line_set(218).expect("218 is a single-line corner");
    assert_eq!(set.family(), LineFamily::Single);
    assert_eq!(set.get_id(Direction::TOP | Direction::LEFT), 217);
    assert_eq!(set.get_id(Direction::empty()), 196);
}

#[test]
fn every_glyph_belongs_to_exactly_one_set() {
    for glyph in 0..=255u32 {
        let owners = LineFamily::ALL
            .iter()
            .filter(|family| family.line_set().contains(glyph))
            .count();
        assert!(owners <= 1, "glyph {} owned by {} sets", glyph, owners);
    }
    assert_eq!(get_line_set(205).map(LineSet::family), Some(LineFamily::Double));
    assert_eq!(get_line_set(216).map(LineSet::family), Some(LineFamily::DoubleHorizontal));
    assert_eq!(get_line_set(215).map(LineSet::family), Some(LineFamily::DoubleVertical));
    assert!(get_line_set('A' as u32).is_none());
}

#[test]
fn best_fit_covers_required_edges_for_corners_and_junctions() {
    for family in LineFamily::ALL {
        let set = family.line_set();
        for bits in ALL_MASKS {
            let required = Direction::from_bits_truncate(bits);
            // Straight runs and dead ends may borrow glyphs from the plain families.
            if required.bits().count_ones() < 2 || required == Direction::RIGHT | Direction::LEFT
                || required == Direction::TOP | Direction::BOTTOM
            {
                continue;
            }
            let glyph = set.get_id(required);
            assert_eq!(
                set.connectivity(glyph),
                Some(required),
                "{:?} best fit for {:?} is {}",
                family,
                required,
                glyph
            );
        }
    }
}

#[test]
fn has_attractor_matches_connectivity_mask() {
    for glyph in 0..=255u32 {
        let mask = get_line_set(glyph).and_then(|set| set.connectivity(glyph));
        for edge in Direction::EDGES {
            let expected = mask.is_some_and(|m| m.contains(edge));
            assert_eq!(has_attractor(glyph, edge), expected, "glyph {} edge {:?}", glyph, edge);
        }
    }
    assert!(has_attractor(196, Direction::LEFT));
    assert!(!has_attractor(196, Direction::TOP));
    assert!(!has_attractor('x' as u32, Direction::RIGHT));
}

#[test]
fn interpolate_returns_none_for_unknown_neighbor() {
    assert!(interpolate_line_set(&SINGLE, Direction::TOP, 'x' as u32).is_none());
    assert!(interpolate_line_set(&SINGLE, Direction::RIGHT, 0).is_none());
}

#[test]
fn interpolate_returns_none_for_non_axis_direction() {
    assert!(interpolate_line_set(&SINGLE, Direction::empty(), 196).is_none());
    assert!(interpolate_line_set(&SINGLE, Direction::TOP | Direction::RIGHT, 196).is_none());
}

#[test]
fn interpolate_keeps_current_family_when_neighbor_is_equivalent() {
    // Vertically, single and double-horizontal share single vertical strokes.
    let result = interpolate_line_set(&SINGLE, Direction::BOTTOM, 216).unwrap();
    assert_eq!(result.family(), LineFamily::Single);
    let result = interpolate_line_set(&DOUBLE_HORIZONTAL, Direction::TOP, 179).unwrap();
    assert_eq!(result.family(), LineFamily::DoubleHorizontal);

    // Horizontally, double and double-horizontal share double strokes.
    let result = interpolate_line_set(&DOUBLE, Direction::LEFT, 216).unwrap();
    assert_eq!(result.family(), LineFamily::Double);
}

#[test]
fn interpolate_takes_neighbor_stroke_along_connecting_axis() {
    // Single glyph meeting a double line from below: double vertical strokes.
    let result = interpolate_line_set(&SINGLE, Direction::BOTTOM, 186).unwrap();
    assert_eq!(result.family(), LineFamily::DoubleVertical);

    // Single glyph meeting a double line to the right: double horizontal strokes.
    let result = interpolate_line_set(&SINGLE, Direction::RIGHT, 205).unwrap();
    assert_eq!(result.family(), LineFamily::DoubleHorizontal);

    // Double glyph meeting a single line above: single vertical strokes.
    let result = interpolate_line_set(&DOUBLE, Direction::TOP, 179).unwrap();
    assert_eq!(result.family(), LineFamily::DoubleHorizontal);
}

#[test]
fn interpolation_tables_follow_stroke_composition() {
    // (horizontal stroke is double, vertical stroke is double)
    fn strokes(family: LineFamily) -> (bool, bool) {
        match family {
            LineFamily::Single => (false, false),
            LineFamily::Double => (true, true),
            LineFamily::DoubleHorizontal => (true, false),
            LineFamily::DoubleVertical => (false, true),
        }
    }
    fn from_strokes(strokes: (bool, bool)) -> LineFamily {
        match strokes {
            (false, false) => LineFamily::Single,
            (true, true) => LineFamily::Double,
            (true, false) => LineFamily::DoubleHorizontal,
            (false, true) => LineFamily::DoubleVertical,
        }
    }
    let representative = |family: LineFamily| family.line_set().get_id(Direction::all());

    for current in LineFamily::ALL {
        for neighbor in LineFamily::ALL {
            let (ch, cv) = strokes(current);
            let (nh, nv) = strokes(neighbor);
            let glyph = representative(neighbor);

            let vertical = interpolate_line_set(current.line_set(), Direction::TOP, glyph).unwrap();
            assert_eq!(vertical.family(), from_strokes((ch, nv)));

            let horizontal = interpolate_line_set(current.line_set(), Direction::LEFT, glyph).unwrap();
            assert_eq!(horizontal.family(), from_strokes((nh, cv)));
        }
    }
}
