use crate::constants::*;
use std::time::Duration;

/// How a frame callback converts wall-clock time into simulation steps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FrameTiming {
    /// One step per animation frame regardless of elapsed time. Motion speed
    /// follows the display refresh rate, which is what the site has always done.
    #[default]
    Fixed,
    /// Scale every per-frame quantity by `dt / REFERENCE_FRAME_SEC`. Motion is
    /// refresh-rate independent but no longer matches the fixed-step look on
    /// displays that are not ~60 Hz.
    Normalized,
}

impl FrameTiming {
    /// Step scale for a frame that took `dt`. `Fixed` always yields 1.
    pub fn frame_scale(self, dt: Duration) -> f32 {
        match self {
            FrameTiming::Fixed => 1.0,
            FrameTiming::Normalized => {
                (dt.as_secs_f32() / REFERENCE_FRAME_SEC).clamp(0.0, MAX_FRAME_SCALE)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FieldConfigError {
    #[error("particle count must be at least 1")]
    EmptyPopulation,
    #[error("{name} must be finite")]
    NonFinite { name: &'static str },
    #[error("{name} range is inverted: {min} > {max}")]
    InvertedRange {
        name: &'static str,
        min: f32,
        max: f32,
    },
    #[error("particle radius must not be negative, got {0}")]
    NegativeRadius(f32),
    #[error("opacity range must lie within [0, 1], got [{min}, {max}]")]
    OpacityOutOfRange { min: f32, max: f32 },
    #[error("influence radius must be positive, got {0}")]
    InfluenceRadius(f32),
    #[error("friction must be within (0, 1], got {0}")]
    Friction(f32),
}

/// Parameters of the ambient motion field.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub particle_count: usize,
    pub radius_range: [f32; 2],
    pub hue_range: [f32; 2],
    pub opacity_range: [f32; 2],
    pub influence_radius: f32,
    pub force_scale: f32,
    pub friction: f32,
    pub pointer_velocity_scale: f32,
    pub timing: FrameTiming,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            radius_range: [PARTICLE_RADIUS_MIN, PARTICLE_RADIUS_MAX],
            hue_range: [PARTICLE_HUE_MIN, PARTICLE_HUE_MAX],
            opacity_range: [PARTICLE_OPACITY_MIN, PARTICLE_OPACITY_MAX],
            influence_radius: INFLUENCE_RADIUS,
            force_scale: FORCE_SCALE,
            friction: FRICTION,
            pointer_velocity_scale: POINTER_VELOCITY_SCALE,
            timing: FrameTiming::Fixed,
        }
    }
}

impl FieldConfig {
    pub fn validate(&self) -> Result<(), FieldConfigError> {
        if self.particle_count == 0 {
            return Err(FieldConfigError::EmptyPopulation);
        }
        for (name, [min, max]) in [
            ("radius", self.radius_range),
            ("hue", self.hue_range),
            ("opacity", self.opacity_range),
        ] {
            if !(min.is_finite() && max.is_finite()) {
                return Err(FieldConfigError::NonFinite { name });
            }
            if min > max {
                return Err(FieldConfigError::InvertedRange { name, min, max });
            }
        }
        let [min, _] = self.radius_range;
        if min < 0.0 {
            return Err(FieldConfigError::NegativeRadius(min));
        }
        let [min, max] = self.opacity_range;
        if min < 0.0 || max > 1.0 {
            return Err(FieldConfigError::OpacityOutOfRange { min, max });
        }
        for (name, value) in [
            ("force scale", self.force_scale),
            ("pointer velocity scale", self.pointer_velocity_scale),
        ] {
            if !value.is_finite() {
                return Err(FieldConfigError::NonFinite { name });
            }
        }
        if !(self.influence_radius > 0.0 && self.influence_radius.is_finite()) {
            return Err(FieldConfigError::InfluenceRadius(self.influence_radius));
        }
        if !(self.friction > 0.0 && self.friction <= 1.0) {
            return Err(FieldConfigError::Friction(self.friction));
        }
        Ok(())
    }
}
