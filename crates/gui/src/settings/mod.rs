use strum::EnumString;

pub mod keymap;

#[derive(Debug, Default, EnumString, Clone, Copy, PartialEq, Eq)]
pub enum ThemeChoice {
    #[default]
    Dark,
    Light,
}

impl ThemeChoice {
    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeChoice::Dark)
    }
}
