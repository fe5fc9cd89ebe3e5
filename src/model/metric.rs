use serde::Serialize;

/// Environmental-impact measure reported as a mean/sd column pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Ghgs,
    GhgsCh4,
    GhgsN2o,
    Land,
    WatUse,
    WatScar,
    Eut,
    Bio,
    Acid,
}

impl Metric {
    /// Canonical axis order
    pub const ALL: [Metric; 9] = [
        Metric::Ghgs,
        Metric::GhgsCh4,
        Metric::GhgsN2o,
        Metric::Land,
        Metric::WatUse,
        Metric::WatScar,
        Metric::Eut,
        Metric::Bio,
        Metric::Acid,
    ];

    /// Order in which the sd columns appear in the reshaped table
    pub const SD_COLUMN_ORDER: [Metric; 9] = [
        Metric::Ghgs,
        Metric::Land,
        Metric::WatScar,
        Metric::Eut,
        Metric::GhgsCh4,
        Metric::GhgsN2o,
        Metric::Bio,
        Metric::WatUse,
        Metric::Acid,
    ];

    /// Shared column suffix, e.g. `land` for `mean_land` / `sd_land`
    pub fn suffix(&self) -> &'static str {
        match self {
            Metric::Ghgs => "ghgs",
            Metric::GhgsCh4 => "ghgs_ch4",
            Metric::GhgsN2o => "ghgs_n2o",
            Metric::Land => "land",
            Metric::WatUse => "watuse",
            Metric::WatScar => "watscar",
            Metric::Eut => "eut",
            Metric::Bio => "bio",
            Metric::Acid => "acid",
        }
    }

    pub fn mean_column(&self) -> String {
        format!("mean_{}", self.suffix())
    }

    pub fn sd_column(&self) -> String {
        format!("sd_{}", self.suffix())
    }

    /// Axis label shown on the chart
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Ghgs => "GHG Emissions (kg)",
            Metric::GhgsCh4 => "Methane (kg)",
            Metric::GhgsN2o => "Nitrous Oxide (kg)",
            Metric::Land => "Land Use (m²)",
            Metric::WatUse => "Water Use (m³)",
            Metric::WatScar => "Water Scarcity",
            Metric::Eut => "Eutrophication (g PO₄e)",
            Metric::Bio => "Biodiversity Impact",
            Metric::Acid => "Acidification",
        }
    }

    /// Position of this metric in `ALL`
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Mean and standard deviation of one metric for one row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricValue {
    pub mean: f64,
    pub sd: f64,
}

impl MetricValue {
    pub fn lower(&self) -> f64 {
        self.mean - self.sd
    }

    pub fn upper(&self) -> f64 {
        self.mean + self.sd
    }
}
