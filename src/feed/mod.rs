pub mod fallback;
pub mod loader;
pub mod rank;

/// Where the loader writes: a live grid it always replaces, and a fallback
/// region it drops once live cards are on screen.
pub trait ProjectSink {
    fn replace_grid(&mut self, markup: String);

    /// Must be a no-op when the region is already gone.
    fn remove_fallback(&mut self);
}
