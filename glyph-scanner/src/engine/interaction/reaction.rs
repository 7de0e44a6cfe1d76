use constants::interaction::{
    FLASH_DECAY_BLEND, REST_SCALE, SCALE_SPRING_BLEND, TAP_BOUNCE_SCALE, TAP_FLASH_INTENSITY,
};

/// Bounce and flash triggered by a tap. Both relax toward rest every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TapReaction {
    pub current_scale: f32,
    pub target_scale: f32,
    pub flash: f32,
}

impl Default for TapReaction {
    fn default() -> Self {
        Self {
            current_scale: REST_SCALE,
            target_scale: REST_SCALE,
            flash: 0.0,
        }
    }
}

impl TapReaction {
    pub fn trigger(&mut self) {
        self.current_scale = TAP_BOUNCE_SCALE;
        self.target_scale = REST_SCALE;
        self.flash = TAP_FLASH_INTENSITY;
    }

    pub fn step(&mut self) {
        self.current_scale += (self.target_scale - self.current_scale) * SCALE_SPRING_BLEND;
        self.flash += (0.0 - self.flash) * FLASH_DECAY_BLEND;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_bounces_and_flashes() {
        let mut reaction = TapReaction::default();
        reaction.trigger();
        assert_eq!(reaction.current_scale, 1.1);
        assert_eq!(reaction.target_scale, 1.0);
        assert_eq!(reaction.flash, 0.5);

        reaction.step();
        assert!((reaction.current_scale - 1.09).abs() < 1e-6);
        assert!((reaction.flash - 0.475).abs() < 1e-6);
    }

    #[test]
    fn relaxes_monotonically_toward_rest() {
        let mut reaction = TapReaction::default();
        reaction.trigger();
        let mut previous = reaction;
        for _ in 0..300 {
            reaction.step();
            assert!(reaction.current_scale <= previous.current_scale);
            assert!(reaction.flash <= previous.flash);
            assert!(reaction.current_scale >= 1.0 && reaction.flash >= 0.0);
            previous = reaction;
        }
        assert!((reaction.current_scale - 1.0).abs() < 1e-4);
        assert!(reaction.flash < 1e-4);
    }

    #[test]
    fn rest_state_is_stable() {
        let mut reaction = TapReaction::default();
        for _ in 0..100 {
            reaction.step();
        }
        assert_eq!(reaction, TapReaction::default());
    }
}
