/// A named configuration value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub value: T,
}

impl<T> ConfigOption<T> {
    /// Replaces the value of the option, returning the previous value.
    pub fn set(&mut self, value: T) -> T {
        std::mem::replace(&mut self.value, value)
    }
}

impl<T: std::fmt::Display> std::fmt::Display for ConfigOption<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}
