#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    /// Evaluate the form against today's date and present the outcome.
    Submit,
    Quit,
}
