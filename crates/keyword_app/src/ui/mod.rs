pub mod input;
pub mod render;

/// Which text field receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    Email,
    #[default]
    Topic,
}

impl Focus {
    pub fn toggled(self) -> Self {
        match self {
            Focus::Email => Focus::Topic,
            Focus::Topic => Focus::Email,
        }
    }
}
