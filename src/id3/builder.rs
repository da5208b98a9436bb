use crate::LogStyle;
use super::id3_tree::Id3;


/// A struct that builds [`Id3`].
/// `Id3Builder` keeps parameters for constructing `Id3`.
///
/// # Example
///
/// ```no_run
/// use id3tree::{Id3Builder, LogStyle};
///
/// let id3 = Id3Builder::new()
///     .log_style(LogStyle::Compact)
///     .verbose(true)
///     .build();
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Id3Builder {
    style: LogStyle,
    verbose: bool,
}


impl Id3Builder {
    /// Construct a new instance of [`Id3Builder`].
    /// By default, [`Id3Builder`] sets the parameters as follows;
    /// ```text
    /// log_style: LogStyle::Detailed,
    /// verbose: false,
    /// ```
    pub fn new() -> Self {
        Self::default()
    }


    /// Set the verbosity of the derivation log.
    /// Default value is `LogStyle::Detailed`.
    #[inline]
    pub fn log_style(mut self, style: LogStyle) -> Self {
        self.style = style;
        self
    }


    /// Shorthand for `log_style(LogStyle::from_compact(flag))`.
    #[inline]
    pub fn compact(self, flag: bool) -> Self {
        self.log_style(LogStyle::from_compact(flag))
    }


    /// If `true`, `Id3::fit` prints a summary to stdout.
    /// Default is `false`.
    #[inline]
    pub fn verbose(mut self, flag: bool) -> Self {
        self.verbose = flag;
        self
    }


    /// Build an `Id3`.
    /// This method consumes `self`.
    pub fn build(self) -> Id3 {
        Id3::from_components(self.style, self.verbose)
    }
}
