// Host-side tests for the scroll-reveal catalogue.

use portfolio_core::reveal::*;

fn find(target: Target) -> Reveal {
    page_reveals()
        .into_iter()
        .find(|r| r.target == target)
        .unwrap_or_else(|| panic!("no reveal for {target:?}"))
}

#[test]
fn catalogue_covers_every_animated_section() {
    let reveals = page_reveals();
    assert_eq!(reveals.len(), 17);
    assert_eq!(
        reveals.iter().filter(|r| r.kind == TweenKind::To).count(),
        3,
        "three parallax orbs"
    );
}

#[test]
fn entrance_reveals_play_once_and_parallax_scrubs() {
    for r in page_reveals() {
        match r.kind {
            TweenKind::From => {
                assert_eq!(r.scroll.toggle_actions(), Some(TOGGLE_ACTIONS));
                assert!(r.scroll.end.is_none());
                assert!(r.tween.duration.is_some(), "{:?} has no duration", r.target);
            }
            TweenKind::To => {
                assert_eq!(r.scroll.toggle_actions(), None);
                assert_eq!(r.scroll.scrub, Some(1.0));
                assert_eq!(r.scroll.trigger, Trigger::Selector(".hero"));
                assert_eq!(r.scroll.end, Some("bottom top"));
            }
        }
    }
}

#[test]
fn skill_cards_alternate_direction_and_tilt() {
    let r = find(Target::Each(".skill-category"));
    let even = r.tween_for(0);
    let odd = r.tween_for(1);
    assert_eq!(even.x, Some(-100.0));
    assert_eq!(even.rotation, Some(-5.0));
    assert_eq!(odd.x, Some(100.0));
    assert_eq!(odd.rotation, Some(5.0));
    assert_eq!(r.tween_for(2), even);
}

#[test]
fn timeline_items_alternate_without_rotation() {
    let r = find(Target::Each(".timeline-item"));
    assert_eq!(r.tween_for(3).x, Some(100.0));
    assert_eq!(r.tween_for(3).rotation, None);
}

#[test]
fn project_cards_cascade_delay_by_index() {
    let r = find(Target::Each(".project-card"));
    assert_eq!(r.tween_for(0).delay, Some(0.0));
    assert!((r.tween_for(3).delay.unwrap() - 0.6).abs() < 1e-6);
    assert_eq!(r.tween_for(3).rotation_y, Some(90.0));
}

#[test]
fn certificate_icons_trail_their_cards() {
    let card = find(Target::Each(".certificate-card"));
    let icon = find(Target::ChildOfEach {
        parent: ".certificate-card",
        child: ".certificate-icon",
    });
    for i in 0..4 {
        let c = card.tween_for(i).delay.unwrap();
        let d = icon.tween_for(i).delay.unwrap();
        assert!((d - c - 0.2).abs() < 1e-6);
    }
    assert_eq!(icon.tween.rotation, Some(360.0));
}

#[test]
fn static_reveal_is_unchanged_by_index() {
    let r = find(Target::All(".about-text"));
    assert_eq!(r.tween_for(0), r.tween);
    assert_eq!(r.tween_for(7), r.tween);
    assert_eq!(
        r.scroll.trigger,
        Trigger::Selector(".section-about")
    );
    assert_eq!(r.scroll.start, "top 70%");
}

#[test]
fn numeric_props_use_gsap_names_and_skip_unset() {
    let r = find(Target::Each(".project-card"));
    let props = r.tween_for(1).numeric_props();
    let names: Vec<&str> = props.iter().map(|(k, _)| *k).collect();
    assert_eq!(names, ["rotationY", "opacity", "duration", "delay"]);
    assert!(!props.spilled());
}
