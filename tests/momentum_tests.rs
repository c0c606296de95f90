use grapple::momentum::apply;
use grapple::{MomentumInjector, Vec, Vec3};

#[test]
fn pull_toward_anchor_scenario_b() {
    let injector = MomentumInjector::new(10.0f32, 20.0);
    let force = injector.apply(
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(15.0, 0.0, 0.0),
        Vec3::new(0.0, 10.0, 0.0),
    );
    assert!((force.x - 0.0).abs() < 1e-6);
    assert!((force.y - 10.0).abs() < 1e-6);
    assert!((force.z - 0.0).abs() < 1e-6);
}

#[test]
fn over_cap_is_zero_scenario_c() {
    let injector = MomentumInjector::new(10.0f32, 20.0);
    let force = injector.apply(
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(0.0, 25.0, 0.0),
        Vec3::new(0.0, 10.0, 0.0),
    );
    assert_eq!(force, Vec3::zero());
}

#[test]
fn gate_holds_regardless_of_direction() {
    let anchors = [
        Vec3::new(0.0f32, 10.0, 0.0),
        Vec3::new(-3.0, -4.0, 12.0),
        Vec3::new(100.0, 0.0, -1.0),
    ];
    let velocities = [
        Vec3::new(20.0f32, 0.0, 0.0),
        Vec3::new(0.0, -30.0, 0.0),
        Vec3::new(12.0, 12.0, 12.0),
    ];
    for anchor in anchors {
        for velocity in velocities {
            let f = apply(Vec3::new(1.0, 1.0, 1.0), velocity, anchor, 10.0, 20.0);
            assert_eq!(f, Vec3::zero(), "anchor {:?} velocity {:?}", anchor, velocity);
        }
    }
}

#[test]
fn magnitude_is_exactly_force_under_cap() {
    let position = Vec3::new(2.0f32, -1.0, 5.0);
    let anchors = [
        Vec3::new(2.0f32, 30.0, 5.0),
        Vec3::new(-7.0, 3.0, 1.0),
        Vec3::new(50.0, 50.0, -50.0),
    ];
    for anchor in anchors {
        let f = apply(position, Vec3::new(1.0, 2.0, 3.0), anchor, 7.5, 20.0);
        assert!((f.length() - 7.5).abs() < 1e-4, "magnitude {}", f.length());
        let expected = (anchor - position).normalize();
        let dir = f.normalize();
        assert!((dir - expected).length() < 1e-5, "direction {:?}", dir);
    }
}

#[test]
fn coincident_anchor_yields_zero() {
    let p = Vec3::new(4.0f32, 4.0, 4.0);
    assert_eq!(apply(p, Vec3::zero(), p, 10.0, 20.0), Vec3::zero());
}

#[test]
fn at_rest_still_pulls() {
    let f = apply(
        Vec3::new(0.0f32, 0.0, 0.0),
        Vec3::zero(),
        Vec3::new(0.0, 0.0, -3.0),
        10.0,
        20.0,
    );
    assert!((f.z + 10.0).abs() < 1e-6);
}

#[test]
fn works_in_f64() {
    let f = apply(
        Vec3::new(0.0f64, 0.0, 0.0),
        Vec3::new(15.0, 0.0, 0.0),
        Vec3::new(0.0, 10.0, 0.0),
        10.0,
        20.0,
    );
    assert!((f.y - 10.0).abs() < 1e-12);
}
