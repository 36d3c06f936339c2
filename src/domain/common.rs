/// Provides access to a human-friendly entity name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Supplies a presentation-ready label for the console or logs.
pub trait Displayable {
    fn display_label(&self) -> String;
}
