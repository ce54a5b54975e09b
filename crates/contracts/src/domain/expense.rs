use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Per-function expense sheet kept by staff. One record per function date,
/// with a fixed cost breakdown and a stored total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub function_date: NaiveDate,
    #[serde(deserialize_with = "de_money")]
    pub advance: f64,
    #[serde(deserialize_with = "de_money")]
    pub balance: f64,
    #[serde(deserialize_with = "de_money")]
    pub damage_recovery: f64,
    #[serde(deserialize_with = "de_money")]
    pub gens: f64,
    #[serde(deserialize_with = "de_money")]
    pub ladies: f64,
    #[serde(deserialize_with = "de_money")]
    pub flag: f64,
    #[serde(deserialize_with = "de_money")]
    pub waste_room_cleaning: f64,
    #[serde(deserialize_with = "de_money")]
    pub electrician: f64,
    #[serde(deserialize_with = "de_money")]
    pub radio: f64,
    #[serde(deserialize_with = "de_money")]
    pub light: f64,
    #[serde(deserialize_with = "de_money")]
    pub total: f64,
}

/// Create/update body for `POST /expenses/` and `PUT /expenses/:id/`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpenseDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub function_date: NaiveDate,
    pub advance: f64,
    pub balance: f64,
    pub damage_recovery: f64,
    pub gens: f64,
    pub ladies: f64,
    pub flag: f64,
    pub waste_room_cleaning: f64,
    pub electrician: f64,
    pub radio: f64,
    pub light: f64,
    pub total: f64,
}

impl ExpenseDto {
    /// Sum of the cost breakdown columns. Advance, balance and damage
    /// recovery are money movements, not costs, so they stay out.
    pub fn computed_total(&self) -> f64 {
        self.gens
            + self.ladies
            + self.flag
            + self.waste_room_cleaning
            + self.electrician
            + self.radio
            + self.light
    }
}

impl From<&Expense> for ExpenseDto {
    fn from(e: &Expense) -> Self {
        Self {
            id: Some(e.id),
            function_date: e.function_date,
            advance: e.advance,
            balance: e.balance,
            damage_recovery: e.damage_recovery,
            gens: e.gens,
            ladies: e.ladies,
            flag: e.flag,
            waste_room_cleaning: e.waste_room_cleaning,
            electrician: e.electrician,
            radio: e.radio,
            light: e.light,
            total: e.total,
        }
    }
}

/// DRF serializes DecimalField as a quoted string by default, so money
/// columns arrive as either `"120.00"` or `120.0` depending on deployment.
fn de_money<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s.trim().parse::<f64>().map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_decimal_strings_and_numbers() {
        let json = r#"{
            "id": 3,
            "function_date": "2025-11-20",
            "advance": "5000.00",
            "balance": 1500,
            "damage_recovery": "0.00",
            "gens": "800.00",
            "ladies": "600.00",
            "flag": 0,
            "waste_room_cleaning": "400.00",
            "electrician": "350.00",
            "radio": 0,
            "light": "250.00",
            "total": "2400.00"
        }"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.advance, 5000.0);
        assert_eq!(expense.balance, 1500.0);
        assert_eq!(expense.total, 2400.0);
    }

    #[test]
    fn computed_total_sums_cost_columns_only() {
        let dto = ExpenseDto {
            function_date: NaiveDate::from_ymd_opt(2025, 11, 20).unwrap(),
            advance: 5000.0,
            balance: 1500.0,
            damage_recovery: 200.0,
            gens: 800.0,
            ladies: 600.0,
            flag: 100.0,
            waste_room_cleaning: 400.0,
            electrician: 350.0,
            radio: 150.0,
            light: 250.0,
            ..Default::default()
        };
        assert_eq!(dto.computed_total(), 2650.0);
    }

    #[test]
    fn create_body_omits_id() {
        let dto = ExpenseDto {
            function_date: NaiveDate::from_ymd_opt(2025, 11, 20).unwrap(),
            ..Default::default()
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert!(!json.as_object().unwrap().contains_key("id"));
    }
}
