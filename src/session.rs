use anyhow::Result;

/// Runs `body` once `enter` succeeds, then always runs `leave`.
///
/// `leave` also runs when `enter` fails, so a half-initialized terminal is
/// restored before the error propagates.
pub fn run_guarded<T>(
    enter: impl FnOnce() -> Result<()>,
    body: impl FnOnce() -> Result<T>,
    leave: impl FnOnce(),
) -> Result<T> {
    let result = enter().and_then(|()| body());
    leave();
    result
}
