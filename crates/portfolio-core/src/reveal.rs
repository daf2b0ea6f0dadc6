//! Declarative catalogue of the page's scroll-triggered entrance animations.
//!
//! Tweening itself is GSAP's job; this module only describes *what* animates,
//! *when* and *from where*, so the catalogue can be checked on the host and
//! the web frontend stays a thin translation layer.

use smallvec::SmallVec;

/// GSAP `toggleActions` used by every non-scrubbed reveal: play once on enter.
pub const TOGGLE_ACTIONS: &str = "play none none none";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TweenKind {
    /// Animate from the given values to the element's natural state.
    From,
    /// Animate from the natural state to the given values.
    To,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    /// All matches in a single tween; `stagger` spreads them out.
    All(&'static str),
    /// One tween per match, each triggered by its own element.
    Each(&'static str),
    /// One tween for the first `child` inside each `parent`, triggered by the parent.
    ChildOfEach {
        parent: &'static str,
        child: &'static str,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    Selector(&'static str),
    /// The element the tween belongs to (the parent for `ChildOfEach`).
    Element,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollTrigger {
    pub trigger: Trigger,
    pub start: &'static str,
    pub end: Option<&'static str>,
    pub scrub: Option<f32>,
}

impl ScrollTrigger {
    const fn on_enter(trigger: Trigger, start: &'static str) -> Self {
        Self {
            trigger,
            start,
            end: None,
            scrub: None,
        }
    }

    /// `toggleActions` applies only to play-once triggers; scrubbed ones follow the scrollbar.
    pub fn toggle_actions(&self) -> Option<&'static str> {
        self.scrub.is_none().then_some(TOGGLE_ACTIONS)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tween {
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub scale: Option<f32>,
    pub rotation: Option<f32>,
    pub rotation_y: Option<f32>,
    pub opacity: Option<f32>,
    pub duration: Option<f32>,
    pub delay: Option<f32>,
    pub stagger: Option<f32>,
    pub ease: Option<&'static str>,
}

impl Tween {
    /// Numeric properties keyed by their GSAP names, in a stable order.
    pub fn numeric_props(&self) -> SmallVec<[(&'static str, f32); 10]> {
        [
            ("x", self.x),
            ("y", self.y),
            ("scale", self.scale),
            ("rotation", self.rotation),
            ("rotationY", self.rotation_y),
            ("opacity", self.opacity),
            ("duration", self.duration),
            ("delay", self.delay),
            ("stagger", self.stagger),
        ]
        .into_iter()
        .filter_map(|(k, v)| v.map(|v| (k, v)))
        .collect()
    }
}

/// Variation applied per element index for `Each`/`ChildOfEach` targets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum IndexRule {
    /// Even indices enter from the left (negative), odd from the right.
    Alternate { x: f32, rotation: Option<f32> },
    /// `delay = base + step * index`.
    Cascade { base: f32, step: f32 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reveal {
    pub kind: TweenKind,
    pub target: Target,
    pub scroll: ScrollTrigger,
    pub tween: Tween,
    pub per_index: Option<IndexRule>,
}

impl Reveal {
    /// Tween for the element at `index` among its target's matches.
    pub fn tween_for(&self, index: usize) -> Tween {
        let mut tween = self.tween;
        match self.per_index {
            Some(IndexRule::Alternate { x, rotation }) => {
                let sign = if index % 2 == 0 { -1.0 } else { 1.0 };
                tween.x = Some(sign * x);
                if let Some(r) = rotation {
                    tween.rotation = Some(sign * r);
                }
            }
            Some(IndexRule::Cascade { base, step }) => {
                tween.delay = Some(base + step * index as f32);
            }
            None => {}
        }
        tween
    }
}

const BACK_OUT: &str = "back.out(1.7)";
const BACK_OUT_STRONG: &str = "back.out(2)";
const POWER2_OUT: &str = "power2.out";
const POWER3_OUT: &str = "power3.out";

fn from(target: Target, scroll: ScrollTrigger, tween: Tween) -> Reveal {
    Reveal {
        kind: TweenKind::From,
        target,
        scroll,
        tween,
        per_index: None,
    }
}

fn indexed(target: Target, scroll: ScrollTrigger, tween: Tween, rule: IndexRule) -> Reveal {
    Reveal {
        per_index: Some(rule),
        ..from(target, scroll, tween)
    }
}

fn parallax(selector: &'static str, tween: Tween) -> Reveal {
    Reveal {
        kind: TweenKind::To,
        target: Target::All(selector),
        scroll: ScrollTrigger {
            trigger: Trigger::Selector(".hero"),
            start: "top top",
            end: Some("bottom top"),
            scrub: Some(1.0),
        },
        tween,
        per_index: None,
    }
}

/// Every entrance animation on the page, in declaration order.
pub fn page_reveals() -> Vec<Reveal> {
    use Target::*;
    use Trigger::*;

    let about = ScrollTrigger::on_enter(Selector(".section-about"), "top 70%");
    let own_85 = ScrollTrigger::on_enter(Element, "top 85%");
    let own_80 = ScrollTrigger::on_enter(Element, "top 80%");

    vec![
        from(
            All(".about-image-wrapper"),
            about,
            Tween {
                scale: Some(0.8),
                opacity: Some(0.0),
                rotation: Some(-10.0),
                duration: Some(1.0),
                ease: Some(BACK_OUT),
                ..Tween::default()
            },
        ),
        from(
            All(".about-text"),
            about,
            Tween {
                x: Some(100.0),
                opacity: Some(0.0),
                duration: Some(1.0),
                ease: Some(POWER3_OUT),
                ..Tween::default()
            },
        ),
        from(
            All(".info-card"),
            ScrollTrigger::on_enter(Selector(".about-info-grid"), "top 80%"),
            Tween {
                y: Some(50.0),
                opacity: Some(0.0),
                duration: Some(0.6),
                stagger: Some(0.15),
                ease: Some(POWER2_OUT),
                ..Tween::default()
            },
        ),
        indexed(
            Each(".skill-category"),
            own_85,
            Tween {
                opacity: Some(0.0),
                duration: Some(0.8),
                ease: Some(POWER3_OUT),
                ..Tween::default()
            },
            IndexRule::Alternate {
                x: 100.0,
                rotation: Some(5.0),
            },
        ),
        indexed(
            Each(".project-card"),
            own_85,
            Tween {
                rotation_y: Some(90.0),
                opacity: Some(0.0),
                duration: Some(1.0),
                ease: Some(POWER2_OUT),
                ..Tween::default()
            },
            IndexRule::Cascade {
                base: 0.0,
                step: 0.2,
            },
        ),
        indexed(
            Each(".timeline-item"),
            own_80,
            Tween {
                opacity: Some(0.0),
                duration: Some(0.8),
                ease: Some(POWER3_OUT),
                ..Tween::default()
            },
            IndexRule::Alternate {
                x: 100.0,
                rotation: None,
            },
        ),
        from(
            ChildOfEach {
                parent: ".timeline-item",
                child: ".timeline-marker",
            },
            own_80,
            Tween {
                scale: Some(0.0),
                opacity: Some(0.0),
                duration: Some(0.5),
                delay: Some(0.3),
                ease: Some(BACK_OUT_STRONG),
                ..Tween::default()
            },
        ),
        from(
            All(".education-card"),
            ScrollTrigger::on_enter(Selector(".section-education"), "top 70%"),
            Tween {
                scale: Some(0.5),
                opacity: Some(0.0),
                rotation: Some(-10.0),
                duration: Some(1.0),
                ease: Some(BACK_OUT),
                ..Tween::default()
            },
        ),
        indexed(
            Each(".certificate-card"),
            own_85,
            Tween {
                y: Some(100.0),
                opacity: Some(0.0),
                duration: Some(0.8),
                ease: Some(POWER3_OUT),
                ..Tween::default()
            },
            IndexRule::Cascade {
                base: 0.0,
                step: 0.1,
            },
        ),
        indexed(
            ChildOfEach {
                parent: ".certificate-card",
                child: ".certificate-icon",
            },
            own_85,
            Tween {
                rotation: Some(360.0),
                scale: Some(0.0),
                duration: Some(0.8),
                ease: Some(BACK_OUT),
                ..Tween::default()
            },
            IndexRule::Cascade {
                base: 0.2,
                step: 0.1,
            },
        ),
        indexed(
            Each(".contact-method"),
            own_85,
            Tween {
                opacity: Some(0.0),
                duration: Some(0.8),
                ease: Some(POWER3_OUT),
                ..Tween::default()
            },
            IndexRule::Alternate {
                x: 100.0,
                rotation: None,
            },
        ),
        from(
            All(".contact-social .social-icon"),
            ScrollTrigger::on_enter(Selector(".contact-social"), "top 85%"),
            Tween {
                y: Some(50.0),
                opacity: Some(0.0),
                duration: Some(0.6),
                stagger: Some(0.1),
                ease: Some(BACK_OUT),
                ..Tween::default()
            },
        ),
        from(
            ChildOfEach {
                parent: ".section-header",
                child: ".section-label",
            },
            own_80,
            Tween {
                scale: Some(0.0),
                opacity: Some(0.0),
                duration: Some(0.5),
                ease: Some(BACK_OUT_STRONG),
                ..Tween::default()
            },
        ),
        from(
            ChildOfEach {
                parent: ".section-header",
                child: ".section-title",
            },
            own_80,
            Tween {
                y: Some(50.0),
                opacity: Some(0.0),
                duration: Some(0.8),
                delay: Some(0.2),
                ease: Some(POWER3_OUT),
                ..Tween::default()
            },
        ),
        parallax(
            ".orb-1",
            Tween {
                y: Some(200.0),
                rotation: Some(90.0),
                ..Tween::default()
            },
        ),
        parallax(
            ".orb-2",
            Tween {
                y: Some(-150.0),
                rotation: Some(-90.0),
                ..Tween::default()
            },
        ),
        parallax(
            ".orb-3",
            Tween {
                x: Some(-100.0),
                y: Some(100.0),
                rotation: Some(45.0),
                ..Tween::default()
            },
        ),
    ]
}
