#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Suppresses the blank line written after each demonstration.
    ///
    /// Only affects the separators; the product lines are always printed.
    pub no_separator: bool,
}
