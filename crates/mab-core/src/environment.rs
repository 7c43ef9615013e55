//! # Host Environment
//!
//! Some event fields default to values that only the running host knows at
//! the moment an event arrives, such as the current window width of the
//! embedded browser. The engine never reads these from global state: the
//! caller hands it an [`Environment`] for every parse.
//!
//! ## Invariant
//!
//! Environment values are read at call time and never memoized. A window
//! resize between two parses must be visible to the second one.

/// Read-only view of host state consulted while parsing.
///
/// Implementations are queried lazily, only when a rule actually needs an
/// environment-dependent default.
pub trait Environment {
    /// Current inner width of the host window, in CSS pixels.
    fn window_width(&self) -> u32;
}

/// A fixed environment captured immediately before a parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EnvironmentSnapshot {
    /// Inner window width at capture time.
    pub window_width: u32,
}

impl EnvironmentSnapshot {
    /// Capture a snapshot with the given window width.
    pub fn new(window_width: u32) -> Self {
        Self { window_width }
    }

    /// Capture a snapshot from any environment provider.
    pub fn capture(env: &impl Environment) -> Self {
        Self {
            window_width: env.window_width(),
        }
    }
}

impl Environment for EnvironmentSnapshot {
    fn window_width(&self) -> u32 {
        self.window_width
    }
}

/// Environment backed by a callback that is invoked on every read.
///
/// Use this to bridge a live host reading (e.g. a webview's `innerWidth`)
/// into the engine without caching it.
pub struct LiveEnvironment<F>
where
    F: Fn() -> u32,
{
    window_width: F,
}

impl<F> LiveEnvironment<F>
where
    F: Fn() -> u32,
{
    /// Wrap a window-width reader.
    pub fn new(window_width: F) -> Self {
        Self { window_width }
    }
}

impl<F> Environment for LiveEnvironment<F>
where
    F: Fn() -> u32,
{
    fn window_width(&self) -> u32 {
        (self.window_width)()
    }
}

impl<F> std::fmt::Debug for LiveEnvironment<F>
where
    F: Fn() -> u32,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LiveEnvironment").finish_non_exhaustive()
    }
}

impl<E: Environment + ?Sized> Environment for &E {
    fn window_width(&self) -> u32 {
        (**self).window_width()
    }
}
