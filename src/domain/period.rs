use {
    clap::ValueEnum,
    serde::{Deserialize, Serialize},
    strum_macros::{Display, EnumIter},
};

/// Which half of a `CashFlowSeries` is on screen.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    ValueEnum,
)]
pub enum ReportPeriod {
    #[default]
    #[strum(to_string = "Week to Date")]
    Week,
    #[strum(to_string = "Month to Date")]
    Month,
}

/// Legend entries for the two bars drawn per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
pub enum CashFlowType {
    #[strum(to_string = "Money In")]
    MoneyIn,
    #[strum(to_string = "Money Out")]
    MoneyOut,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legend_names() {
        assert_eq!(CashFlowType::MoneyIn.to_string(), "Money In");
        assert_eq!(CashFlowType::MoneyOut.to_string(), "Money Out");
        assert_eq!(ReportPeriod::default(), ReportPeriod::Week);
        assert_eq!(ReportPeriod::Month.to_string(), "Month to Date");
    }
}
