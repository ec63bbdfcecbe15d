use serde::{Deserialize, Serialize};

/// Fractions of the budget assigned to each spending category
///
/// The default split is a placeholder policy: 30/25/15/20/10.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetShares {
    pub rent: f64,
    pub equipment: f64,
    pub marketing: f64,
    pub salaries: f64,
    pub miscellaneous: f64,
}

impl Default for BudgetShares {
    fn default() -> Self {
        Self {
            rent: 0.30,
            equipment: 0.25,
            marketing: 0.15,
            salaries: 0.20,
            miscellaneous: 0.10,
        }
    }
}

impl BudgetShares {
    pub fn total(&self) -> f64 {
        self.rent + self.equipment + self.marketing + self.salaries + self.miscellaneous
    }
}

/// Budget split into the five spending categories
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetDistribution {
    pub rent: f64,
    pub equipment: f64,
    pub marketing: f64,
    pub salaries: f64,
    pub miscellaneous: f64,
}

/// One category line of a distribution, as shown to the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetLine {
    pub category: String,
    pub amount: f64,
}

impl BudgetDistribution {
    pub const RENT: &'static str = "Rent/Space";
    pub const EQUIPMENT: &'static str = "Equipment/Tools";
    pub const MARKETING: &'static str = "Marketing";
    pub const SALARIES: &'static str = "Salaries";
    pub const MISCELLANEOUS: &'static str = "Miscellaneous";

    /// Category label and amount pairs in display order
    pub fn entries(&self) -> [(&'static str, f64); 5] {
        [
            (Self::RENT, self.rent),
            (Self::EQUIPMENT, self.equipment),
            (Self::MARKETING, self.marketing),
            (Self::SALARIES, self.salaries),
            (Self::MISCELLANEOUS, self.miscellaneous),
        ]
    }

    pub fn total(&self) -> f64 {
        self.entries().iter().map(|(_, amount)| amount).sum()
    }

    pub fn to_lines(&self) -> Vec<BudgetLine> {
        self.entries()
            .iter()
            .map(|(category, amount)| BudgetLine {
                category: category.to_string(),
                amount: *amount,
            })
            .collect()
    }
}

/// Split a budget using the given shares
#[inline]
pub fn allocate(budget: f64, shares: &BudgetShares) -> BudgetDistribution {
    BudgetDistribution {
        rent: budget * shares.rent,
        equipment: budget * shares.equipment,
        marketing: budget * shares.marketing,
        salaries: budget * shares.salaries,
        miscellaneous: budget * shares.miscellaneous,
    }
}

/// Split a budget using the default 30/25/15/20/10 policy
pub fn calculate_budget_distribution(budget: f64) -> BudgetDistribution {
    allocate(budget, &BudgetShares::default())
}
