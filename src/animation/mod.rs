//! Timed attribute interpolation for data-driven scene layers.
//!
//! The host drives the clock through [`TransitionSet::advance`]; nothing here
//! spawns timers. Retargeting a running layer starts the new transition from
//! whatever is currently displayed, so the last call wins.

use serde::{Deserialize, Serialize};

use crate::render::{ChartLayer, LayerPrimitives, LayeredRenderFrame, lerp};

pub const DEFAULT_TRANSITION_MS: f64 = 300.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Easing {
    Linear,
    #[default]
    CubicInOut,
}

impl Easing {
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::CubicInOut => {
                let t2 = t * 2.0;
                if t2 <= 1.0 {
                    t2 * t2 * t2 / 2.0
                } else {
                    let t2 = t2 - 2.0;
                    (t2 * t2 * t2 + 2.0) / 2.0
                }
            }
        }
    }
}

/// One layer moving from `from` to `to`.
///
/// Both sides hold the same number of lines and rects; texts are not
/// interpolated and always show the target.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerTransition {
    from: LayerPrimitives,
    to: LayerPrimitives,
    started_at_ms: f64,
    duration_ms: f64,
    easing: Easing,
}

impl LayerTransition {
    /// Pairs `from` with `to` by position.
    ///
    /// Elements missing from `from` start at the matching `enter` element,
    /// elements beyond `to` are dropped.
    #[must_use]
    pub fn new(
        from: &LayerPrimitives,
        to: LayerPrimitives,
        enter: &LayerPrimitives,
        started_at_ms: f64,
        duration_ms: f64,
        easing: Easing,
    ) -> Self {
        let lines = to
            .lines
            .iter()
            .enumerate()
            .map(|(i, target)| {
                from.lines
                    .get(i)
                    .or_else(|| enter.lines.get(i))
                    .copied()
                    .unwrap_or(*target)
            })
            .collect();
        let rects = to
            .rects
            .iter()
            .enumerate()
            .map(|(i, target)| {
                from.rects
                    .get(i)
                    .or_else(|| enter.rects.get(i))
                    .copied()
                    .unwrap_or(*target)
            })
            .collect();

        Self {
            from: LayerPrimitives {
                kind: to.kind,
                lines,
                rects,
                texts: to.texts.clone(),
            },
            to,
            started_at_ms,
            duration_ms: duration_ms.max(0.0),
            easing,
        }
    }

    #[must_use]
    pub fn kind(&self) -> ChartLayer {
        self.to.kind
    }

    #[must_use]
    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.started_at_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn is_finished(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }

    #[must_use]
    pub fn sample(&self, now_ms: f64) -> LayerPrimitives {
        let progress = self.progress(now_ms);
        if progress >= 1.0 {
            return self.to.clone();
        }
        let t = self.easing.apply(progress);
        LayerPrimitives {
            kind: self.to.kind,
            lines: self
                .from
                .lines
                .iter()
                .zip(&self.to.lines)
                .map(|(from, to)| from.lerp(*to, t))
                .collect(),
            rects: self
                .from
                .rects
                .iter()
                .zip(&self.to.rects)
                .map(|(from, to)| from.lerp(*to, t))
                .collect(),
            texts: self.to.texts.clone(),
        }
    }
}

/// Running transitions of one chart, keyed by layer.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionSet {
    clock_ms: f64,
    duration_ms: f64,
    easing: Easing,
    transitions: Vec<LayerTransition>,
}

impl Default for TransitionSet {
    fn default() -> Self {
        Self::new(DEFAULT_TRANSITION_MS, Easing::default())
    }
}

impl TransitionSet {
    #[must_use]
    pub fn new(duration_ms: f64, easing: Easing) -> Self {
        Self {
            clock_ms: 0.0,
            duration_ms,
            easing,
            transitions: Vec::new(),
        }
    }

    #[must_use]
    pub fn clock_ms(&self) -> f64 {
        self.clock_ms
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.transitions.is_empty()
    }

    #[must_use]
    pub fn is_animating_layer(&self, kind: ChartLayer) -> bool {
        self.transitions.iter().any(|t| t.kind() == kind)
    }

    /// Starts (or retargets) the transition of `to.kind`.
    pub fn start(&mut self, from: &LayerPrimitives, to: LayerPrimitives, enter: &LayerPrimitives) {
        let transition = LayerTransition::new(
            from,
            to,
            enter,
            self.clock_ms,
            self.duration_ms,
            self.easing,
        );
        self.transitions.retain(|t| t.kind() != transition.kind());
        self.transitions.push(transition);
    }

    /// Moves the clock forward and drops finished transitions.
    ///
    /// Returns whether anything is still animating.
    pub fn advance(&mut self, elapsed_ms: f64) -> bool {
        if elapsed_ms.is_finite() && elapsed_ms > 0.0 {
            self.clock_ms += elapsed_ms;
        }
        let now = self.clock_ms;
        self.transitions.retain(|t| !t.is_finished(now));
        self.is_animating()
    }

    /// Displayed state of `kind`: the sampled transition, or `settled` when idle.
    #[must_use]
    pub fn displayed(&self, settled: &LayerPrimitives) -> LayerPrimitives {
        self.transitions
            .iter()
            .find(|t| t.kind() == settled.kind)
            .map_or_else(|| settled.clone(), |t| t.sample(self.clock_ms))
    }

    /// Overlays every running transition onto `frame`.
    pub fn sample_into(&self, frame: &mut LayeredRenderFrame) {
        for transition in &self.transitions {
            frame.replace_layer(transition.sample(self.clock_ms));
        }
    }

    pub fn clear(&mut self) {
        self.transitions.clear();
    }
}

/// Interpolated scalar, exposed for hosts animating their own overlays.
#[must_use]
pub fn interpolate(from: f64, to: f64, easing: Easing, progress: f64) -> f64 {
    lerp(from, to, easing.apply(progress))
}
