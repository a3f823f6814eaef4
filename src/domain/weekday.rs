use {
    serde::{Deserialize, Serialize},
    strum_macros::{Display, EnumIter},
};

/// The x-axis categories of the chart, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    pub fn label(&self) -> String {
        self.to_string()
    }
}
