//! Ambient motion field: a fixed population of soft glowing particles that
//! drift over a bounded surface and get pushed around by the pointer.
//!
//! There is no real fluid solver here. Each particle is independent: it feels
//! a linear-falloff pull toward the pointer, integrates, loses 5% of its
//! velocity per frame, and wraps toroidally once it is a full radius past an
//! edge. The whole state is owned by [`MotionField`] so several fields can run
//! side by side and the update can be exercised without a browser.

use crate::config::{FieldConfig, FieldConfigError};
use crate::constants::*;
use crate::paint::{ColorStop, FieldCanvas, GlowGradient, Paint, Rect};
use glam::Vec2;
use rand::Rng;
use std::time::Duration;

/// Drawing area size in pixels. May be zero when the host has no layout yet.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Surface {
    pub width: f32,
    pub height: f32,
}

impl Surface {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect {
            x: 0.0,
            y: 0.0,
            width: self.width,
            height: self.height,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    radius: f32,
    hue: f32,
    opacity: f32,
}

impl Particle {
    /// A particle at rest. Radius, hue and opacity are fixed from here on.
    pub fn new(position: Vec2, radius: f32, hue: f32, opacity: f32) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            radius,
            hue,
            opacity,
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R, surface: Surface, config: &FieldConfig) -> Self {
        let position = Vec2::new(
            rng.gen::<f32>() * surface.width,
            rng.gen::<f32>() * surface.height,
        );
        Self::new(
            position,
            sample(rng, config.radius_range),
            sample(rng, config.hue_range),
            sample(rng, config.opacity_range),
        )
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn hue(&self) -> f32 {
        self.hue
    }

    #[inline]
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Soft glow: full color at the center, a shifted half-strength ring at
    /// half radius, transparent at the rim.
    pub fn glow(&self) -> GlowGradient {
        GlowGradient {
            center: self.position,
            radius: self.radius,
            stops: [
                ColorStop {
                    offset: 0.0,
                    paint: Paint::Hsla {
                        h: self.hue,
                        s: GLOW_SATURATION,
                        l: GLOW_CORE_LIGHTNESS,
                        a: self.opacity,
                    },
                },
                ColorStop {
                    offset: GLOW_MID_STOP,
                    paint: Paint::Hsla {
                        h: self.hue + GLOW_MID_HUE_SHIFT,
                        s: GLOW_SATURATION,
                        l: GLOW_MID_LIGHTNESS,
                        a: self.opacity * 0.5,
                    },
                },
                ColorStop {
                    offset: 1.0,
                    paint: Paint::TRANSPARENT,
                },
            ],
        }
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::centered_square(self.position, self.radius)
    }

    /// Toroidal wrap that keeps the particle in `[-r, size + r]` on both axes.
    fn wrap(&mut self, surface: Surface) {
        let r = self.radius;
        if self.position.x < -r {
            self.position.x = surface.width + r;
        }
        if self.position.x > surface.width + r {
            self.position.x = -r;
        }
        if self.position.y < -r {
            self.position.y = surface.height + r;
        }
        if self.position.y > surface.height + r {
            self.position.y = -r;
        }
    }
}

#[inline]
fn sample<R: Rng + ?Sized>(rng: &mut R, [min, max]: [f32; 2]) -> f32 {
    min + rng.gen::<f32>() * (max - min)
}

/// Last observed pointer sample and its damped first-order velocity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub position: Vec2,
    pub velocity: Vec2,
    pub previous: Vec2,
}

impl PointerState {
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            previous: position,
        }
    }

    /// Record a new sample. Velocity is `scale * (new - previous)` with no
    /// time normalization.
    pub fn track(&mut self, position: Vec2, scale: f32) {
        self.velocity = (position - self.previous) * scale;
        self.position = position;
        self.previous = position;
    }
}

/// Per-frame velocity change a pointer at `pointer` imparts on a particle at
/// `particle`. Zero outside the influence radius and at exactly zero distance.
pub fn pointer_impulse(
    particle: Vec2,
    pointer: Vec2,
    influence_radius: f32,
    force_scale: f32,
) -> Vec2 {
    let delta = pointer - particle;
    let dist = delta.length();
    if !(dist > 0.0 && dist < influence_radius) {
        return Vec2::ZERO;
    }
    let force = (influence_radius - dist) / influence_radius;
    delta / dist * force * force_scale
}

pub struct MotionField {
    particles: Vec<Particle>,
    pointer: PointerState,
    surface: Surface,
    config: FieldConfig,
}

impl MotionField {
    pub fn new<R: Rng + ?Sized>(
        surface: Surface,
        config: FieldConfig,
        rng: &mut R,
    ) -> Result<Self, FieldConfigError> {
        config.validate()?;
        Ok(Self::build(surface, config, rng))
    }

    pub fn with_default_config<R: Rng + ?Sized>(surface: Surface, rng: &mut R) -> Self {
        Self::build(surface, FieldConfig::default(), rng)
    }

    fn build<R: Rng + ?Sized>(surface: Surface, config: FieldConfig, rng: &mut R) -> Self {
        let particles = (0..config.particle_count)
            .map(|_| Particle::random(&mut *rng, surface, &config))
            .collect::<Vec<_>>();
        log::debug!(
            "[field] {} particles on {}x{}",
            particles.len(),
            surface.width,
            surface.height
        );
        Self {
            particles,
            pointer: PointerState::at(surface.center()),
            surface,
            config,
        }
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Mutable access to particle motion. The slice keeps the population size
    /// fixed; appearance stays read-only through the private fields.
    #[inline]
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    #[inline]
    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    #[inline]
    pub fn surface(&self) -> Surface {
        self.surface
    }

    #[inline]
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Pointer moved to `(x, y)` in host-relative pixels.
    pub fn track_pointer(&mut self, x: f32, y: f32) {
        self.pointer
            .track(Vec2::new(x, y), self.config.pointer_velocity_scale);
    }

    /// Host changed size. Particles keep their absolute coordinates and wrap
    /// against the new bounds from the next update on.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.surface = Surface::new(width, height);
    }

    /// Advance every particle by one step. `frame_scale` is 1 for a nominal
    /// frame; see [`crate::FrameTiming`].
    pub fn update(&mut self, frame_scale: f32) {
        let pointer = self.pointer.position;
        let friction = if frame_scale == 1.0 {
            self.config.friction
        } else {
            self.config.friction.powf(frame_scale)
        };
        for p in &mut self.particles {
            p.velocity += pointer_impulse(
                p.position,
                pointer,
                self.config.influence_radius,
                self.config.force_scale,
            ) * frame_scale;
            p.position += p.velocity * frame_scale;
            p.velocity *= friction;
            p.wrap(self.surface);
        }
    }

    /// Paint the trail fade followed by every particle's glow.
    pub fn draw<C: FieldCanvas + ?Sized>(&self, canvas: &mut C) {
        let [r, g, b] = FADE_RGB;
        canvas.fill_rect(
            self.surface.rect(),
            Paint::Rgba {
                r,
                g,
                b,
                a: FADE_ALPHA,
            },
        );
        for p in &self.particles {
            canvas.fill_rect_with_gradient(p.bounds(), &p.glow());
        }
    }

    /// One animation frame: update with the configured timing, then draw.
    pub fn frame<C: FieldCanvas + ?Sized>(&mut self, canvas: &mut C, dt: Duration) {
        let scale = self.config.timing.frame_scale(dt);
        self.update(scale);
        self.draw(canvas);
    }
}
