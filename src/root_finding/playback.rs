//! Render-agnostic data for replaying a solve.
//!
//! Nothing here draws. These helpers turn a finished [`IterateHistory`] into 
//! what an animation layer needs to replay it.
//!
//! ┌ [`color_gradient`] : per-iterate colors, green early to red late  
//! ├ [`view_window`]    : iterate bounds padded by half their span  
//! └ [`frame_plan`]     : per-frame anchor/visibility schedule per [`Algorithm`]

use super::algorithms::Algorithm; 
use super::history::IterateHistory; 
use super::report::RootFindingReport; 


/// RGB triple with channels in `[0, 1]`. 
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb { 
    pub r: f64, 
    pub g: f64, 
    pub b: f64, 
}


/// Colors for `n` iterates. 
///
/// A ramp `s` rises linearly from 0 to 1 over the first `round(n / 2)` 
/// iterates (ties to even) and stays at 1 afterwards; iterate `i` gets 
/// `(s[i], s[n - 1 - i], 0)`. Early iterates are green, the middle yellow, 
/// late ones red. 
pub fn color_gradient(n: usize) -> Vec<Rgb> { 
    let ramp_len = ((n as f64) / 2.0).round_ties_even() as usize; 
    let ramp_len = ramp_len.min(n); 

    let s: Vec<f64> = (0..n)
        .map(|i| match i { 
            i if i >= ramp_len => 1.0, 
            _ if ramp_len == 1 => 0.0, 
            i                  => i as f64 / (ramp_len - 1) as f64, 
        })
        .collect(); 

    (0..n)
        .map(|i| Rgb { r: s[i], g: s[n - 1 - i], b: 0.0 })
        .collect()
}


/// `[lo - gap, hi + gap]` with `gap = (hi - lo) / 2` over all iterates. 
///
/// A history that never moved gives a zero-width window; `None` if empty. 
pub fn view_window(history: &IterateHistory) -> Option<(f64, f64)> { 
    let (lo, hi) = history.bounds()?; 
    let gap = (hi - lo) * 0.5; 
    Some((lo - gap, hi + gap))
}


/// One animation frame. 
///
/// - `index`         : frame number  
/// - `visible`       : leading history entries drawn in their gradient color  
/// - `anchor`        : iterate the local model is built at, if any  
///     - Newton : tangent at `history[anchor]`  
///     - Secant : line through `history[anchor - 1]` and `history[anchor]`  
/// - `show_crossing` : draw where the model crosses zero  
/// - `complete`      : last frame of the replay 
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame { 
    pub index         : usize, 
    pub visible       : usize, 
    pub anchor        : Option<usize>, 
    pub show_crossing : bool, 
    pub complete      : bool, 
}


/// Frame schedule for replaying `history`. 
///
/// # Newton 
/// `len + 1` frames. Frame `k > 0` shows iterates `0..=k` (capped at `len`) 
/// and the tangent at iterate `k - 1`; the extra final frame marks 
/// rendering as complete. 
///
/// # Secant 
/// `2 * len` frames, two per step. Frame `t` focuses step `k = (t + 1) / 2`: 
/// frame 0 shows only `w_init`, frame `t` with `0 < k < len` shows the 
/// secant through iterates `k - 1` and `k`, and even `t` additionally 
/// shows its zero crossing. 
pub fn frame_plan(algorithm: Algorithm, history: &IterateHistory) -> Vec<Frame> { 
    let len = history.len(); 
    if len == 0 { 
        return Vec::new(); 
    }

    match algorithm { 
        Algorithm::Newton => (0..=len)
            .map(|k| { 
                let anchor = (k > 0).then(|| k - 1); 
                Frame { 
                    index         : k, 
                    visible       : if k == 0 { 0 } else { (k + 1).min(len) }, 
                    anchor, 
                    show_crossing : anchor.is_some(), 
                    complete      : k == len, 
                }
            })
            .collect(), 

        Algorithm::Secant => (0..2 * len)
            .map(|t| { 
                let k = (t + 1) / 2; 
                let anchor = (k > 0 && k < len).then_some(k); 
                Frame { 
                    index         : t, 
                    visible       : if k == 0 { 1 } else { (k - 1).min(len) }, 
                    anchor, 
                    show_crossing : anchor.is_some() && t % 2 == 0, 
                    complete      : t + 1 == 2 * len, 
                }
            })
            .collect(), 
    }
}


/// Everything a renderer needs from one solve. 
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Playback { 
    pub algorithm : Algorithm, 
    pub history   : IterateHistory, 
    pub colors    : Vec<Rgb>, 
    pub window    : Option<(f64, f64)>, 
    pub frames    : Vec<Frame>, 
}

impl Playback { 
    pub fn new(algorithm: Algorithm, history: IterateHistory) -> Self { 
        let colors = color_gradient(history.len()); 
        let window = view_window(&history); 
        let frames = frame_plan(algorithm, &history); 
        log::debug!(
            "{algorithm} playback: {} iterates, {} frames", 
            history.len(), frames.len()
        ); 

        Self { algorithm, history, colors, window, frames }
    }
}

impl From<RootFindingReport> for Playback { 
    fn from(report: RootFindingReport) -> Self { 
        Playback::new(report.algorithm, report.history)
    }
}
