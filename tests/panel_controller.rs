mod common;

use common::*;
use stylepanel::panel::{Area, PanelRegion, Point, PointerEvent, PointerKind};
use stylepanel::style::{StyleField, StyleState};
use stylepanel::ui::visibility::Visibility;

fn panel_region() -> PanelRegion {
    // panel body plus its toggle button
    PanelRegion::new([Area::new(0, 0, 38, 37), Area::new(38, 0, 5, 3)])
}

#[test]
fn starts_closed_without_watcher() {
    let (controller, hub, commits) = make_controller();
    assert_eq!(controller.visibility(), Visibility::Closed);
    assert!(!controller.is_watching());
    assert_eq!(hub.active_listeners(), 0);
    assert_eq!(controller.draft(), StyleState::default());
    assert!(commits.lock().is_empty());
}

// -- Scenarios ----------------------------------------------------------------

#[test]
fn update_then_apply_commits_draft() {
    let (mut controller, _hub, commits) = make_controller();
    controller.toggle();
    assert!(controller.is_open());

    controller.update(StyleField::FontSize, option(StyleField::FontSize, "24"));
    assert_eq!(controller.draft().font_size.id, "24");
    assert!(commits.lock().is_empty(), "update must not commit");

    controller.apply();
    let committed = last_commit(&commits).expect("apply publishes");
    assert_eq!(committed.font_size.id, "24");
    assert_eq!(committed.font_family.label, "Open Sans");
    assert_eq!(committed.font_color.id, "black");
    assert_eq!(committed.background_color.id, "white");
    assert_eq!(committed.content_width.id, "800px");
    assert!(controller.is_open(), "apply keeps the panel open");
}

#[test]
fn reset_restores_defaults_in_draft_and_committed() {
    let (mut controller, _hub, commits) = make_controller();
    controller.toggle();
    controller.update(StyleField::FontSize, option(StyleField::FontSize, "24"));
    controller.apply();

    controller.reset();
    assert_eq!(controller.draft(), StyleState::default());
    assert_eq!(last_commit(&commits), Some(StyleState::default()));
    assert_eq!(controller.draft().font_size.id, "18");
    assert!(controller.is_open(), "reset keeps the panel open");
}

#[test]
fn outside_press_keeps_unapplied_draft() {
    let (mut controller, _hub, commits) = make_controller();
    controller.set_region(panel_region());
    controller.toggle();
    controller.update(StyleField::FontColor, option(StyleField::FontColor, "red"));

    controller.on_pointer(&PointerEvent::press(80, 10));
    assert_eq!(controller.visibility(), Visibility::Closed);
    assert!(commits.lock().is_empty(), "dismissal must not commit");

    controller.toggle();
    assert!(controller.is_open());
    assert_eq!(controller.draft().font_color.id, "red");
}

// -- Properties ---------------------------------------------------------------

#[test]
fn reset_is_idempotent() {
    let (mut controller, _hub, commits) = make_controller();
    controller.update(StyleField::ContentWidth, option(StyleField::ContentWidth, "1394px"));
    controller.reset();
    let once = (controller.draft(), last_commit(&commits));
    controller.reset();
    let twice = (controller.draft(), last_commit(&commits));
    assert_eq!(once, twice);
    assert_eq!(twice.0, StyleState::default());
    assert_eq!(commits.lock().len(), 2);
}

#[test]
fn apply_publishes_exact_snapshot() {
    let (mut controller, _hub, commits) = make_controller();
    let edits = [
        (StyleField::FontFamily, "merriweather"),
        (StyleField::FontColor, "blue"),
        (StyleField::FontFamily, "days-one"),
        (StyleField::BackgroundColor, "beige"),
        (StyleField::ContentWidth, "548px"),
        (StyleField::FontSize, "38"),
    ];
    for (field, id) in edits {
        controller.update(field, option(field, id));
    }
    let snapshot = controller.draft();
    controller.apply();
    assert_eq!(last_commit(&commits), Some(snapshot));
    assert_eq!(snapshot.font_family.id, "days-one");
    assert!(snapshot.is_well_formed());
}

#[test]
fn apply_republishes_unchanged_draft() {
    let (mut controller, _hub, commits) = make_controller();
    controller.apply();
    controller.apply();
    assert_eq!(*commits.lock(), vec![StyleState::default(); 2]);
}

#[test]
fn toggle_twice_is_observably_a_no_op() {
    let (mut controller, hub, commits) = make_controller();
    controller.update(StyleField::FontSize, option(StyleField::FontSize, "38"));
    let draft = controller.draft();

    controller.toggle();
    controller.toggle();
    assert_eq!(controller.visibility(), Visibility::Closed);
    assert_eq!(controller.draft(), draft);
    assert!(commits.lock().is_empty());
    assert_eq!(hub.active_listeners(), 0);
}

#[test]
fn watcher_tracks_visibility_under_rapid_toggling() {
    let (mut controller, hub, _commits) = make_controller();
    controller.set_region(panel_region());
    let outside = PointerEvent::press(100, 20);

    // mixed toggles and outside presses, checked after every step
    let steps = "ttttotottoootttott";
    for step in steps.chars() {
        match step {
            't' => controller.toggle(),
            _ => controller.on_pointer(&outside),
        }
        let active = hub.active_listeners();
        assert!(active <= 1, "double subscription after '{}'", step);
        assert_eq!(active == 1, controller.is_open());
        assert_eq!(controller.is_watching(), controller.is_open());
    }
}

#[test]
fn outside_press_while_closed_does_nothing() {
    let (mut controller, hub, _commits) = make_controller();
    controller.set_region(panel_region());
    controller.on_pointer(&PointerEvent::press(100, 20));
    assert_eq!(controller.visibility(), Visibility::Closed);
    assert_eq!(hub.active_listeners(), 0);
}

#[test]
fn press_inside_region_keeps_panel_open() {
    let (mut controller, _hub, _commits) = make_controller();
    controller.set_region(panel_region());
    controller.toggle();

    controller.on_pointer(&PointerEvent::press(10, 10));
    assert!(controller.is_open());
    // the toggle button counts as inside
    controller.on_pointer(&PointerEvent::press(40, 1));
    assert!(controller.is_open());
}

#[test]
fn non_press_activity_outside_is_ignored() {
    let (mut controller, _hub, _commits) = make_controller();
    controller.set_region(panel_region());
    controller.toggle();

    for kind in [
        PointerKind::Release,
        PointerKind::Drag,
        PointerKind::Move,
        PointerKind::Scroll,
    ] {
        controller.on_pointer(&PointerEvent::new(kind, Point::new(100, 20)));
        assert!(controller.is_open(), "{:?} should not dismiss", kind);
    }
}

#[test]
fn empty_region_treats_every_press_as_outside() {
    let (mut controller, _hub, _commits) = make_controller();
    controller.toggle();
    controller.on_pointer(&PointerEvent::press(0, 0));
    assert!(!controller.is_open());
}

#[test]
fn teardown_while_open_releases_watcher() {
    let (mut controller, hub, _commits) = make_controller();
    controller.toggle();
    assert_eq!(hub.active_listeners(), 1);
    controller.teardown();
    assert_eq!(hub.active_listeners(), 0);
}

#[test]
fn dropping_open_controller_releases_watcher() {
    let (mut controller, hub, _commits) = make_controller();
    controller.toggle();
    drop(controller);
    assert_eq!(hub.active_listeners(), 0);
}

#[test]
fn out_of_domain_update_is_ignored() {
    let (mut controller, _hub, _commits) = make_controller();
    let red = option(StyleField::FontColor, "red");
    controller.update(StyleField::BackgroundColor, red);
    assert_eq!(controller.draft(), StyleState::default());
}

#[test]
fn configured_defaults_drive_reset() {
    let defaults =
        StyleState::default().with(StyleField::FontFamily, option(StyleField::FontFamily, "ubuntu"));
    let (mut controller, _hub, commits) = make_controller_with(defaults);
    assert_eq!(controller.draft().font_family.id, "ubuntu");

    controller.update(StyleField::FontFamily, option(StyleField::FontFamily, "open-sans"));
    controller.reset();
    assert_eq!(controller.draft(), defaults);
    assert_eq!(last_commit(&commits), Some(defaults));
}

#[test]
fn committed_style_can_serve_as_sink() {
    use stylepanel::panel::{CommittedStyle, PanelController, PointerHub};

    let committed = CommittedStyle::new(StyleState::default());
    let mut controller =
        PanelController::new(StyleState::default(), PointerHub::new(), committed.clone());
    controller.update(StyleField::FontColor, option(StyleField::FontColor, "green"));
    assert_eq!(committed.get().font_color.id, "black");
    controller.apply();
    assert_eq!(committed.get().font_color.id, "green");
}

#[test]
fn draft_is_not_read_back_from_committed() {
    use stylepanel::panel::{CommittedStyle, PanelController, PointerHub};

    let committed = CommittedStyle::new(StyleState::default());
    let mut controller =
        PanelController::new(StyleState::default(), PointerHub::new(), committed.clone());
    // consumer changes its style behind the panel's back
    committed.replace(
        StyleState::default().with(StyleField::FontSize, option(StyleField::FontSize, "38")),
    );
    controller.toggle();
    controller.toggle();
    controller.toggle();
    assert_eq!(controller.draft().font_size.id, "18");
}
