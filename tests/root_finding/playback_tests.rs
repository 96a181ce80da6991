use zerotrace::root_finding::algorithms::Algorithm;
use zerotrace::root_finding::newton::{newton, NewtonCfg, NewtonError};
use zerotrace::root_finding::playback::{color_gradient, frame_plan, view_window, Playback};
use zerotrace::root_finding::secant::{secant, SecantCfg, SecantError};

#[test]
fn newton_playback_covers_every_iterate() -> Result<(), NewtonError> {
    let res = newton(|w: f64| w * w - 4.0, Some(|w: f64| 2.0 * w), 3.0, NewtonCfg::new())?;
    let len = res.history.len();
    let playback = Playback::from(res);

    assert_eq!(playback.algorithm, Algorithm::Newton);
    assert_eq!(playback.colors.len(), len);
    assert_eq!(playback.frames.len(), len + 1);
    assert!(playback.frames.last().is_some_and(|f| f.complete));

    let (lo, hi) = playback.window.unwrap_or((f64::NAN, f64::NAN));
    assert!(playback.history.iter().all(|w| lo <= w && w <= hi));
    Ok(())
}

#[test]
fn secant_playback_has_two_frames_per_iterate() -> Result<(), SecantError> {
    let res = secant(|w: f64| w * w - 4.0, 3.0, SecantCfg::new())?;
    let playback = Playback::new(res.algorithm, res.history);

    assert_eq!(playback.frames.len(), 2 * playback.history.len());
    // every secant anchor has a predecessor to draw the line from 
    assert!(playback.frames.iter().filter_map(|f| f.anchor).all(|k| k >= 1));
    Ok(())
}

#[test]
fn gradient_runs_green_to_red() {
    let colors = color_gradient(21);
    let first  = colors[0];
    let last   = colors[20];

    assert_eq!((first.r, first.g), (0.0, 1.0));
    assert_eq!((last.r, last.g), (1.0, 0.0));
    assert!(colors.windows(2).all(|p| p[0].r <= p[1].r && p[0].g >= p[1].g));
}

#[test]
fn window_and_frames_from_free_functions() -> Result<(), NewtonError> {
    let res = newton(|_w: f64| 5.0, Some(|_w: f64| 0.0), -3.0, NewtonCfg::new())?;

    let (lo, hi) = view_window(&res.history).unwrap_or((0.0, 0.0));
    assert!(lo < -3.0 - 20.0 * 5e4 && hi > -3.0);
    assert_eq!(frame_plan(Algorithm::Newton, &res.history).len(), 22);
    Ok(())
}
