//! Integration tests for weft-grid.

use proptest::prelude::*;
use weft_grid::{BoundaryClass, ClothParams, Neighbor, ParticleGrid, SpringFamily};
use weft_types::{GridCoord, ParticleId, WeftError};

fn grid(rows: usize, cols: usize) -> ParticleGrid {
    ParticleGrid::new(rows, cols, &ClothParams::default()).unwrap()
}

// ─── Construction ─────────────────────────────────────────────

#[test]
fn construct_counts_and_spacing() {
    let g = grid(4, 5);
    assert_eq!(g.rows(), 4);
    assert_eq!(g.cols(), 5);
    assert_eq!(g.len(), 20);
    assert!(!g.is_empty());
    let (dx, dy) = g.spacing();
    assert!((dx - 0.25).abs() < 1e-12);
    assert!((dy - 1.0 / 3.0).abs() < 1e-12);
}

#[test]
fn rest_positions_from_uv() {
    let params = ClothParams {
        real_width: 2.0,
        real_height: 3.0,
        ..Default::default()
    };
    let g = ParticleGrid::new(3, 5, &params).unwrap();
    let p = g.particle(4, 2).unwrap();
    assert_eq!(p.uv(), (1.0, 1.0));
    assert_eq!(p.position.to_array(), [2.0, 3.0, 0.0]);

    let mid = g.particle(2, 1).unwrap();
    assert_eq!(mid.uv(), (0.5, 0.5));
    assert!((mid.position.x - 1.0).abs() < 1e-12);
    assert!((mid.position.y - 1.5).abs() < 1e-12);
    assert_eq!(mid.position.z, 0.0);
}

#[test]
fn starts_at_rest_and_unfixed() {
    let g = grid(3, 3);
    for p in g.particles() {
        assert_eq!(p.velocity.length(), 0.0);
        assert_eq!(p.half_velocity.length(), 0.0);
        assert!(!p.is_fixed());
    }
}

#[test]
fn rejects_degenerate_dimensions() {
    for (rows, cols) in [(1, 5), (5, 1), (0, 0), (1, 1)] {
        let err = ParticleGrid::new(rows, cols, &ClothParams::default()).unwrap_err();
        assert!(matches!(err, WeftError::InvalidConfig(_)), "{rows}x{cols}");
    }
}

#[test]
fn rejects_overflowing_dimensions() {
    for (rows, cols) in [(usize::MAX, 2), (2, usize::MAX), (1usize << 20, 1usize << 20)] {
        let err = ParticleGrid::new(rows, cols, &ClothParams::default()).unwrap_err();
        assert!(matches!(err, WeftError::InvalidConfig(_)), "{rows}x{cols}");
    }
}

#[test]
fn rejects_invalid_params() {
    let params = ClothParams {
        friction_coeff: 1.5,
        ..Default::default()
    };
    assert!(ParticleGrid::new(3, 3, &params).is_err());
}

// ─── Mass ─────────────────────────────────────────────────────

#[test]
fn mass_by_boundary_class() {
    let params = ClothParams::default();
    let g = ParticleGrid::new(3, 3, &params).unwrap();
    let cell_area = 0.5 * 0.5;
    let base = params.surface_density * cell_area;

    let corner = g.particle(0, 0).unwrap();
    let edge = g.particle(1, 0).unwrap();
    let interior = g.particle(1, 1).unwrap();
    assert_eq!(corner.class(), BoundaryClass::Corner);
    assert_eq!(edge.class(), BoundaryClass::Edge);
    assert_eq!(interior.class(), BoundaryClass::Interior);

    assert!((corner.mass() - base * 0.9).abs() < 1e-12);
    assert!((edge.mass() - base * 0.95).abs() < 1e-12);
    assert!((interior.mass() - base).abs() < 1e-12);
}

#[test]
fn light_border_preset_masses() {
    let params = ClothParams::light_border();
    let g = ParticleGrid::new(3, 3, &params).unwrap();
    let base = params.surface_density * 0.25;
    assert!((g.particle(2, 2).unwrap().mass() - base * 0.25).abs() < 1e-12);
    assert!((g.particle(0, 1).unwrap().mass() - base * 0.5).abs() < 1e-12);
}

#[test]
fn total_mass_sums_particles() {
    let g = grid(2, 2);
    // Four corners of a single cell
    let expected = 4.0 * 4.0 * 1.0 * 0.9;
    assert!((g.total_mass() - expected).abs() < 1e-12);
}

// ─── Queries & mutators ───────────────────────────────────────

#[test]
fn id_and_coord_agree() {
    let g = grid(3, 4);
    for y in 0..3 {
        for x in 0..4 {
            let id = g.id(x, y).unwrap();
            assert_eq!(id, ParticleId((y * 4 + x) as u32));
            assert_eq!(g.get(id).coord(), GridCoord::new(x, y));
        }
    }
    assert!(g.id(4, 0).is_none());
    assert!(g.particle(0, 3).is_none());
}

#[test]
fn set_fixed_in_and_out_of_range() {
    let mut g = grid(3, 3);
    g.set_fixed(2, 2, true);
    assert!(g.particle(2, 2).unwrap().is_fixed());
    g.set_fixed(2, 2, false);
    assert!(!g.particle(2, 2).unwrap().is_fixed());

    let before = g.snapshot();
    g.set_fixed(3, 0, true);
    g.set_fixed(0, 99, true);
    assert_eq!(g.snapshot(), before);
}

#[test]
fn positions_are_row_major() {
    let g = grid(2, 3);
    let positions = g.positions();
    assert_eq!(positions.len(), 6);
    // Second element is (x=1, y=0)
    assert!((positions[1].x - 0.5).abs() < 1e-12);
    assert_eq!(positions[1].y, 0.0);
    // Fourth element starts the second row
    assert_eq!(positions[3].x, 0.0);
    assert!((positions[3].y - 1.0).abs() < 1e-12);

    let snapshot = g.snapshot();
    assert_eq!(snapshot[4].coord, GridCoord::new(1, 1));
}

#[test]
fn snapshot_serializes() {
    let g = grid(2, 2);
    let json = serde_json::to_string(&g.snapshot()).unwrap();
    assert!(json.contains("position"));
}

// ─── Topology ─────────────────────────────────────────────────

#[test]
fn corner_has_only_inward_neighbors() {
    let g = grid(4, 4);
    let topo = g.topology();
    let id = g.id(0, 0).unwrap();
    let present: Vec<Neighbor> = Neighbor::ALL
        .into_iter()
        .filter(|&n| topo.neighbor(id, n).is_some())
        .collect();
    assert_eq!(
        present,
        vec![Neighbor::Right, Neighbor::Up, Neighbor::UpRight, Neighbor::Right2, Neighbor::Up2]
    );
}

#[test]
fn interior_of_large_grid_has_all_slots() {
    let g = grid(5, 5);
    let id = g.id(2, 2).unwrap();
    assert!(g.topology().neighbors(id).iter().all(Option::is_some));
    assert_eq!(g.topology().neighbor(id, Neighbor::Left2), g.id(0, 2));
    assert_eq!(g.topology().neighbor(id, Neighbor::DownRight), g.id(3, 1));
}

#[test]
fn edge_counts_per_family() {
    let (rows, cols) = (4, 5);
    let g = grid(rows, cols);
    let topo = g.topology();
    assert_eq!(topo.family_count(SpringFamily::Structural), rows * (cols - 1) + cols * (rows - 1));
    assert_eq!(topo.family_count(SpringFamily::Shear), 2 * (rows - 1) * (cols - 1));
    assert_eq!(topo.family_count(SpringFamily::Bend), rows * (cols - 2) + cols * (rows - 2));
}

#[test]
fn two_by_two_has_no_bend_springs() {
    let g = grid(2, 2);
    assert_eq!(g.edges().len(), 6);
    assert_eq!(g.topology().family_count(SpringFamily::Bend), 0);
}

#[test]
fn edges_are_unique_and_ordered() {
    let g = grid(4, 3);
    let mut seen = std::collections::HashSet::new();
    for e in g.edges() {
        assert!(e.a < e.b);
        assert!(seen.insert((e.a, e.b)), "duplicate edge {:?}", e);
    }
    // Emitted in ascending `a` order
    assert!(g.edges().windows(2).all(|w| w[0].a <= w[1].a));
}

#[test]
fn rest_lengths_per_family() {
    let params = ClothParams {
        real_width: 3.0,
        real_height: 4.0,
        ..Default::default()
    };
    let g = ParticleGrid::new(3, 4, &params).unwrap();
    let (dx, dy) = g.spacing();
    for e in g.edges() {
        let expected = match e.kind {
            Neighbor::Left | Neighbor::Right => dx,
            Neighbor::Down | Neighbor::Up => dy,
            Neighbor::Left2 | Neighbor::Right2 => 2.0 * dx,
            Neighbor::Down2 | Neighbor::Up2 => 2.0 * dy,
            _ => (dx * dx + dy * dy).sqrt(),
        };
        assert!((e.rest_length - expected).abs() < 1e-12);
        // Rest lengths match the undeformed configuration
        let actual = (g.get(e.b).position - g.get(e.a).position).length();
        assert!((actual - e.rest_length).abs() < 1e-12);
    }
}

#[test]
fn mirror_is_involution_and_negates_offset() {
    for n in Neighbor::ALL {
        assert_eq!(n.mirror().mirror(), n);
        let (ox, oy) = n.offset();
        assert_eq!(n.mirror().offset(), (-ox, -oy));
        assert_eq!(n.mirror().family(), n.family());
    }
}

// ─── Params ───────────────────────────────────────────────────

#[test]
fn params_defaults() {
    let p = ClothParams::default();
    assert_eq!(p.spring_k, 150.0);
    assert_eq!(p.stretch_limit, 1.5);
    assert_eq!(p.gravity, [0.0, 0.0, -9.81]);
    assert!(p.validate().is_ok());
    assert!(ClothParams::light_border().validate().is_ok());
}

#[test]
fn params_validation_rejects_out_of_range() {
    let cases = [
        ClothParams { real_width: 0.0, ..Default::default() },
        ClothParams { surface_density: -1.0, ..Default::default() },
        ClothParams { spring_k: -5.0, ..Default::default() },
        ClothParams { corner_k: -1.0, ..Default::default() },
        ClothParams { stretch_limit: 0.5, ..Default::default() },
        ClothParams { friction_coeff: -0.1, ..Default::default() },
        ClothParams { corner_mass: 0.0, ..Default::default() },
        ClothParams { gravity: [0.0, f64::NAN, 0.0], ..Default::default() },
    ];
    for p in cases {
        assert!(p.validate().is_err(), "{p:?} should be rejected");
    }
}

#[test]
fn params_toml_roundtrip_and_partial() {
    let p = ClothParams::light_border();
    let text = toml::to_string(&p).unwrap();
    let recovered: ClothParams = toml::from_str(&text).unwrap();
    assert_eq!(recovered, p);

    let partial: ClothParams = toml::from_str("spring_k = 400.0").unwrap();
    assert_eq!(partial.spring_k, 400.0);
    assert_eq!(partial.edge_k, 3.0);
}

// ─── Properties ───────────────────────────────────────────────

proptest! {
    #[test]
    fn topology_is_symmetric(rows in 2usize..9, cols in 2usize..9) {
        let g = grid(rows, cols);
        let topo = g.topology();
        for i in 0..g.len() {
            let id = ParticleId(i as u32);
            for n in Neighbor::ALL {
                if let Some(q) = topo.neighbor(id, n) {
                    prop_assert_eq!(topo.neighbor(q, n.mirror()), Some(id));
                }
            }
        }
    }

    #[test]
    fn every_neighbor_pair_has_one_edge(rows in 2usize..8, cols in 2usize..8) {
        let g = grid(rows, cols);
        let links: usize = (0..g.len())
            .map(|i| g.topology().neighbors(ParticleId(i as u32)).iter().flatten().count())
            .sum();
        prop_assert_eq!(links, 2 * g.edges().len());
    }

    #[test]
    fn mass_is_positive(
        rows in 2usize..12,
        cols in 2usize..12,
        density in 0.01f64..50.0,
        width in 0.01f64..10.0,
        height in 0.01f64..10.0,
    ) {
        let params = ClothParams {
            surface_density: density,
            real_width: width,
            real_height: height,
            ..Default::default()
        };
        let g = ParticleGrid::new(rows, cols, &params).unwrap();
        prop_assert!(g.particles().iter().all(|p| p.mass() > 0.0 && p.mass().is_finite()));
    }
}
