//! Integration tests for weft-contact.

use weft_contact::{Collider, ContactResult, NullCollider, SphereCollider};
use weft_grid::{ClothParams, ParticleGrid};
use weft_math::Vec3;

/// 3×3 unit cloth; its center particle (1,1) sits at (0.5, 0.5, 0).
fn cloth() -> ParticleGrid {
    ParticleGrid::new(3, 3, &ClothParams::default()).unwrap()
}

/// Sphere that swallows only the center particle, 0.1 deep.
fn sphere_under_center() -> SphereCollider {
    SphereCollider::new(Vec3::new(0.5, 0.5, -0.3), 0.4)
}

const CENTER: usize = 4;

// ─── Geometry queries ─────────────────────────────────────────

#[test]
fn contains_is_strict() {
    let s = SphereCollider::new(Vec3::ZERO, 1.0);
    assert!(s.contains(Vec3::new(0.5, 0.0, 0.0)));
    assert!(!s.contains(Vec3::new(1.0, 0.0, 0.0)));
    assert!(!s.contains(Vec3::new(0.0, 2.0, 0.0)));
}

#[test]
fn project_onto_surface() {
    let s = SphereCollider::new(Vec3::new(1.0, 0.0, 0.0), 2.0);
    let inside = s.project(Vec3::new(1.0, 0.5, 0.0));
    assert!((inside - Vec3::new(1.0, 2.0, 0.0)).length() < 1e-12);
    let outside = s.project(Vec3::new(1.0, 0.0, -5.0));
    assert!((outside - Vec3::new(1.0, 0.0, -2.0)).length() < 1e-12);
}

#[test]
fn projection_never_lands_inside() {
    let s = SphereCollider::new(Vec3::new(0.5, 0.5, -0.4), 0.4);
    for i in 0..40 {
        for j in 0..40 {
            let p = Vec3::new(i as f64 / 39.0, j as f64 / 39.0, -0.1 - 0.003 * j as f64);
            let q = s.project(p);
            assert!(!s.contains(q), "{p} projected to {q}");
            assert!(((q - s.center).length() - s.radius).abs() < 1e-12);
        }
    }
}

#[test]
fn project_center_uses_up_axis() {
    let s = SphereCollider::new(Vec3::new(0.0, 0.0, 1.0), 0.5);
    assert_eq!(s.project(s.center), Vec3::new(0.0, 0.0, 1.5));
}

#[test]
fn validate_radius() {
    assert!(sphere_under_center().validate().is_ok());
    assert!(SphereCollider::new(Vec3::ZERO, 0.0).validate().is_err());
    assert!(SphereCollider::new(Vec3::ZERO, -1.0).validate().is_err());
    assert!(SphereCollider::new(Vec3::new(f64::NAN, 0.0, 0.0), 1.0).validate().is_err());
}

#[test]
fn sphere_serialization() {
    let s = sphere_under_center();
    let json = serde_json::to_string(&s).unwrap();
    let recovered: SphereCollider = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, s);
}

// ─── Response ─────────────────────────────────────────────────

#[test]
fn pushes_penetrating_particle_to_surface() {
    let mut g = cloth();
    let s = sphere_under_center();
    let result = s.resolve(g.particles_mut(), 0.2);

    assert_eq!(result.resolved_count, 1);
    assert!((result.max_penetration - 0.1).abs() < 1e-12);
    assert!((result.total_penetration - 0.1).abs() < 1e-12);

    let p = &g.particles()[CENTER];
    assert!((p.position - Vec3::new(0.5, 0.5, 0.1)).length() < 1e-12);
    for p in g.particles() {
        assert!((p.position - s.center).length() >= s.radius - 1e-12);
    }
}

#[test]
fn cancels_inward_normal_velocity() {
    let mut g = cloth();
    g.particles_mut()[CENTER].half_velocity = Vec3::new(0.0, 0.0, -1.0);
    sphere_under_center().resolve(g.particles_mut(), 0.2);
    assert!(g.particles()[CENTER].half_velocity.length() < 1e-12);
}

#[test]
fn keeps_outward_normal_velocity() {
    let mut g = cloth();
    g.particles_mut()[CENTER].half_velocity = Vec3::new(0.0, 0.0, 2.0);
    sphere_under_center().resolve(g.particles_mut(), 0.2);
    assert!((g.particles()[CENTER].half_velocity - Vec3::new(0.0, 0.0, 2.0)).length() < 1e-12);
}

#[test]
fn friction_scales_tangential_velocity() {
    let mut g = cloth();
    g.particles_mut()[CENTER].half_velocity = Vec3::new(1.0, 0.0, -1.0);
    sphere_under_center().resolve(g.particles_mut(), 0.2);
    let v = g.particles()[CENTER].half_velocity;
    assert!((v - Vec3::new(0.8, 0.0, 0.0)).length() < 1e-12, "v = {v}");
}

#[test]
fn zero_friction_keeps_tangent() {
    let mut g = cloth();
    g.particles_mut()[CENTER].half_velocity = Vec3::new(0.0, 3.0, 0.0);
    sphere_under_center().resolve(g.particles_mut(), 0.0);
    assert!((g.particles()[CENTER].half_velocity - Vec3::new(0.0, 3.0, 0.0)).length() < 1e-12);
}

#[test]
fn fixed_particles_are_skipped() {
    let mut g = cloth();
    g.set_fixed(1, 1, true);
    let before = g.particles()[CENTER].clone();
    let result = sphere_under_center().resolve(g.particles_mut(), 0.2);
    assert_eq!(result.resolved_count, 0);
    assert_eq!(g.particles()[CENTER], before);
}

#[test]
fn null_collider_returns_default() {
    let mut g = cloth();
    let before = g.snapshot();
    let result = NullCollider.resolve(g.particles_mut(), 0.5);
    assert_eq!(result, ContactResult::default());
    assert_eq!(g.snapshot(), before);
    assert_eq!(NullCollider.name(), "null_collider");
    assert_eq!(sphere_under_center().name(), "sphere");
}
