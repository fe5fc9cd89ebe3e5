/// Dietary pattern a row of the summary table belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DietGroup {
    Vegan,
    Veggie,
    Fish,
    Meat,
    Meat50,
    Meat100,
}

impl DietGroup {
    /// Legend order
    pub const ALL: [DietGroup; 6] = [
        DietGroup::Vegan,
        DietGroup::Veggie,
        DietGroup::Fish,
        DietGroup::Meat,
        DietGroup::Meat50,
        DietGroup::Meat100,
    ];

    pub fn from_label(s: &str) -> Option<Self> {
        match s {
            "vegan" => Some(DietGroup::Vegan),
            "veggie" => Some(DietGroup::Veggie),
            "fish" => Some(DietGroup::Fish),
            "meat" => Some(DietGroup::Meat),
            "meat50" => Some(DietGroup::Meat50),
            "meat100" => Some(DietGroup::Meat100),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DietGroup::Vegan => "vegan",
            DietGroup::Veggie => "veggie",
            DietGroup::Fish => "fish",
            DietGroup::Meat => "meat",
            DietGroup::Meat50 => "meat50",
            DietGroup::Meat100 => "meat100",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            DietGroup::Vegan => "#98FB98",   // pale green
            DietGroup::Veggie => "#3CB371",  // medium sea green
            DietGroup::Fish => "#4682B4",    // steel blue
            DietGroup::Meat => "#FF8C00",    // dark orange
            DietGroup::Meat50 => "#FF4500",  // orange red
            DietGroup::Meat100 => "#FF0000", // red
        }
    }
}

/// Line color for a raw diet-group label. Unknown labels have no color.
pub fn color_for_label(label: &str) -> Option<&'static str> {
    DietGroup::from_label(label).map(|g| g.color())
}
