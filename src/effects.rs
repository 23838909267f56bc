use crate::constants::*;
use rand::Rng;

// ---------------- Typing ----------------

/// Reveals a string one character at a time.
#[derive(Clone, Debug)]
pub struct Typewriter {
    chars: Vec<char>,
    shown: usize,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            shown: 0,
        }
    }

    pub fn is_done(&self) -> bool {
        self.shown >= self.chars.len()
    }

    /// Next character to append, or `None` once the full text is shown.
    pub fn next_char(&mut self) -> Option<char> {
        let c = self.chars.get(self.shown).copied()?;
        self.shown += 1;
        Some(c)
    }
}

// ---------------- Particles ----------------

#[derive(Clone, Debug)]
pub struct ParticleParams {
    pub size_min_px: f32,
    pub size_span_px: f32,
    pub hue_min: f32,
    pub hue_span: f32,
    pub opacity_min: f32,
    pub opacity_span: f32,
    pub float_min_s: f32,
    pub float_span_s: f32,
}

impl Default for ParticleParams {
    fn default() -> Self {
        Self {
            size_min_px: PARTICLE_SIZE_MIN_PX,
            size_span_px: PARTICLE_SIZE_SPAN_PX,
            hue_min: PARTICLE_HUE_MIN,
            hue_span: PARTICLE_HUE_SPAN,
            opacity_min: PARTICLE_OPACITY_MIN,
            opacity_span: PARTICLE_OPACITY_SPAN,
            float_min_s: PARTICLE_FLOAT_MIN_S,
            float_span_s: PARTICLE_FLOAT_SPAN_S,
        }
    }
}

/// Randomised look of one floating particle.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleSpec {
    pub size_px: f32,
    pub hue: f32,
    pub left_pct: f32,
    pub opacity: f32,
    pub float_s: f32,
}

impl ParticleSpec {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, p: &ParticleParams) -> Self {
        Self {
            size_px: p.size_min_px + rng.gen::<f32>() * p.size_span_px,
            hue: p.hue_min + rng.gen::<f32>() * p.hue_span,
            left_pct: rng.gen::<f32>() * 100.0,
            opacity: p.opacity_min + rng.gen::<f32>() * p.opacity_span,
            float_s: p.float_min_s + rng.gen::<f32>() * p.float_span_s,
        }
    }

    /// Inline style for the particle element; it starts below the fold.
    pub fn css(&self) -> String {
        format!(
            "position:absolute;width:{s}px;height:{s}px;background:hsl({h}, 100%, 50%);\
             border-radius:50%;left:{l}%;top:100%;opacity:{o};pointer-events:none;\
             animation:float {d}s linear infinite",
            s = self.size_px,
            h = self.hue,
            l = self.left_pct,
            o = self.opacity,
            d = self.float_s,
        )
    }
}

// ---------------- Reveal ----------------

/// Hidden starting transform for a card revealed on scroll.
#[inline]
pub fn card_hidden_transform() -> String {
    format!("translateY({}px)", CARD_REVEAL_OFFSET_PX)
}

/// Timeline items slide in from alternating sides: even from the left.
#[inline]
pub fn timeline_hidden_transform(index: usize) -> String {
    let dx = if index % 2 == 0 {
        -TIMELINE_REVEAL_OFFSET_PX
    } else {
        TIMELINE_REVEAL_OFFSET_PX
    };
    format!("translateX({}px)", dx)
}

#[inline]
pub fn glow_filter(hovered: bool) -> String {
    let b = if hovered { GLOW_BRIGHTNESS } else { 1.0 };
    format!("brightness({})", b)
}
