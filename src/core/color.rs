use rand::Rng;
use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0.0);

    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_rgb(rgb: [u8; 3], a: f32) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2], a)
    }

    #[inline]
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// CSS `rgba()` string accepted by canvas fill/stroke styles.
    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Pick one palette entry uniformly; an empty palette yields transparent.
pub fn pick<R: Rng + ?Sized>(palette: &[[u8; 3]], rng: &mut R) -> Rgba {
    if palette.is_empty() {
        return Rgba::TRANSPARENT;
    }
    Rgba::from_rgb(palette[rng.gen_range(0..palette.len())], 1.0)
}

/// How a bubble's gradient colors are chosen on each draw.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorMode {
    /// Every stop derives from the bubble's own color.
    #[default]
    PerBubble,
    /// Every stop re-picks a palette entry on every frame.
    PerFrameRandom,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StopAlphas {
    pub center: f32,
    pub mid: f32,
    pub edge: f32,
    pub stroke: f32,
}

/// Draw colors for one bubble: three radial gradient stops and the outline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BubbleStyle {
    pub center: Rgba,
    pub mid: Rgba,
    pub edge: Rgba,
    pub stroke: Rgba,
}

impl BubbleStyle {
    pub const TRANSPARENT: BubbleStyle = BubbleStyle {
        center: Rgba::TRANSPARENT,
        mid: Rgba::TRANSPARENT,
        edge: Rgba::TRANSPARENT,
        stroke: Rgba::TRANSPARENT,
    };

    pub fn uniform(base: Rgba, alphas: StopAlphas) -> Self {
        Self {
            center: base.with_alpha(alphas.center),
            mid: base.with_alpha(alphas.mid),
            edge: base.with_alpha(alphas.edge),
            stroke: base.with_alpha(alphas.stroke),
        }
    }

    /// Each stop drawn independently from `palette`. An empty palette draws
    /// nothing at all.
    pub fn shuffled<R: Rng + ?Sized>(palette: &[[u8; 3]], alphas: StopAlphas, rng: &mut R) -> Self {
        if palette.is_empty() {
            return Self::TRANSPARENT;
        }
        Self {
            center: pick(palette, rng).with_alpha(alphas.center),
            mid: pick(palette, rng).with_alpha(alphas.mid),
            edge: pick(palette, rng).with_alpha(alphas.edge),
            stroke: pick(palette, rng).with_alpha(alphas.stroke),
        }
    }

    pub fn resolve<R: Rng + ?Sized>(
        mode: ColorMode,
        base: Rgba,
        palette: &[[u8; 3]],
        alphas: StopAlphas,
        rng: &mut R,
    ) -> Self {
        match mode {
            ColorMode::PerBubble => Self::uniform(base, alphas),
            ColorMode::PerFrameRandom => Self::shuffled(palette, alphas, rng),
        }
    }
}
