//! End-to-end scenarios driven through the public `Session` API.

use approx::assert_relative_eq;
use celestial_sizes::catalog::CatalogStore;
use celestial_sizes::config::ComparatorConfig;
use celestial_sizes::renderer::build_scene;
use celestial_sizes::session::Session;
use celestial_sizes::ComparatorError;

fn start() -> Session {
    Session::start(CatalogStore::builtin(), ComparatorConfig::default()).unwrap()
}

#[test]
fn earth_then_sun_at_700_pixels() {
    let mut session = start();
    let gap = session.config().horizontal_gap;

    let layout = session.frame(700.0).unwrap();
    assert_relative_eq!(layout.bodies[0].pixel_radius, 245.0, epsilon = 1e-9);
    assert_relative_eq!(layout.canvas_width, gap + 490.0 + gap, epsilon = 1e-9);

    let sun = session.add("sun").unwrap();
    assert_eq!(sun.sequence_id, 1);

    let layout = session.frame(700.0).unwrap();
    let earth = layout.find(0).unwrap();
    let sun = layout.find(1).unwrap();
    assert_relative_eq!(sun.pixel_radius, 245.0, epsilon = 1e-9);
    assert_relative_eq!(earth.pixel_radius, 245.0 * 12742.0 / 1392700.0, epsilon = 1e-9);
    assert_relative_eq!(
        layout.canvas_width,
        gap + 2.0 * earth.pixel_radius + gap + 490.0 + gap,
        epsilon = 1e-9
    );
}

#[test]
fn empty_selection_is_rejected_without_side_effects() {
    let mut session = start();
    session.add("moon").unwrap();

    let err = session.add("").unwrap_err();
    assert!(matches!(err, ComparatorError::NoSelection));
    assert_eq!(err.to_string(), "no celestial body selected");
    assert_eq!(session.count(), 2);
}

#[test]
fn unknown_key_is_rejected_without_side_effects() {
    let mut session = start();
    let err = session.add("death-star").unwrap_err();
    assert!(matches!(err, ComparatorError::UnknownCatalogKey(_)));
    assert_eq!(session.count(), 1);
}

#[test]
fn added_body_is_centered_after_one_pass() {
    let mut session = start();
    for key in ["jupiter", "saturn", "moon"] {
        session.add(key).unwrap();
    }
    let layout = session.frame(600.0).unwrap();

    let viewport = session.viewport_mut();
    let id = viewport.render_pass_completed().unwrap();
    assert_eq!(id, 3);

    let target = layout.find(id).unwrap();
    let visible_width = 800.0;
    viewport.focus_on(target.center_x, visible_width, layout.canvas_width);
    let mut offset = 0.0;
    while let Some(next) = viewport.tick(1.0 / 60.0) {
        offset = next;
    }
    let expected = (target.center_x - visible_width / 2.0).clamp(0.0, layout.canvas_width - visible_width);
    assert_relative_eq!(offset, expected, epsilon = 1e-9);
}

#[test]
fn repeated_bodies_render_separately() {
    let mut session = start();
    session.add("mars").unwrap();
    session.add("mars").unwrap();
    let layout = session.frame(500.0).unwrap();

    let scene = build_scene(&layout, session.instances(), &session.config().label, |text, size| {
        text.len() as f32 * size * 0.6
    });
    assert_eq!(scene.discs.len(), 3);
    assert_eq!(scene.labels.len(), 3);
    assert_eq!(scene.guides.len(), 2);
    assert_eq!(scene.labels[1].lines[0].text, "Mars");
    assert_eq!(scene.labels[2].lines[0].text, "Mars");
    assert!(scene.discs[2].center.x > scene.discs[1].center.x);
}

#[test]
fn reset_returns_to_home_body() {
    let mut session = start();
    session.add("betelgeuse").unwrap();
    session.reset().unwrap();
    session.reset().unwrap();

    assert_eq!(session.count(), 1);
    assert_eq!(session.instances()[0].sequence_id, 0);
    assert_eq!(session.instances()[0].catalog_key, "earth");
    assert_eq!(session.add("sun").unwrap().sequence_id, 1);
}
