//! Text-field state for the expense modal form.

use chrono::NaiveDate;
use contracts::domain::booking::FieldErrors;
use contracts::domain::expense::{Expense, ExpenseDto};

/// Names and labels of the money columns, in form/table order.
pub const MONEY_FIELDS: [(&str, &str); 10] = [
    ("advance", "Advance"),
    ("balance", "Balance"),
    ("damage_recovery", "Damage Recovery"),
    ("gens", "Gents"),
    ("ladies", "Ladies"),
    ("flag", "Flag"),
    ("waste_room_cleaning", "Waste Room Cleaning"),
    ("electrician", "Electrician"),
    ("radio", "Radio"),
    ("light", "Light"),
];

/// The cost columns that make up the stored total.
pub const COST_FIELDS: [&str; 7] = [
    "gens",
    "ladies",
    "flag",
    "waste_room_cleaning",
    "electrician",
    "radio",
    "light",
];

/// Raw text state of the expense form. Empty money fields count as zero; the
/// total is never entered by hand, it is recomputed from the cost columns on
/// every save.
#[derive(Debug, Clone, Default)]
pub struct ExpenseForm {
    pub id: Option<i64>,
    pub function_date: String,
    pub advance: String,
    pub balance: String,
    pub damage_recovery: String,
    pub gens: String,
    pub ladies: String,
    pub flag: String,
    pub waste_room_cleaning: String,
    pub electrician: String,
    pub radio: String,
    pub light: String,
}

impl ExpenseForm {
    pub fn from_expense(e: &Expense) -> Self {
        Self {
            id: Some(e.id),
            function_date: e.function_date.format("%Y-%m-%d").to_string(),
            advance: format_money(e.advance),
            balance: format_money(e.balance),
            damage_recovery: format_money(e.damage_recovery),
            gens: format_money(e.gens),
            ladies: format_money(e.ladies),
            flag: format_money(e.flag),
            waste_room_cleaning: format_money(e.waste_room_cleaning),
            electrician: format_money(e.electrician),
            radio: format_money(e.radio),
            light: format_money(e.light),
        }
    }

    pub fn get(&self, field: &str) -> String {
        match field {
            "advance" => self.advance.clone(),
            "balance" => self.balance.clone(),
            "damage_recovery" => self.damage_recovery.clone(),
            "gens" => self.gens.clone(),
            "ladies" => self.ladies.clone(),
            "flag" => self.flag.clone(),
            "waste_room_cleaning" => self.waste_room_cleaning.clone(),
            "electrician" => self.electrician.clone(),
            "radio" => self.radio.clone(),
            "light" => self.light.clone(),
            _ => String::new(),
        }
    }

    pub fn set(&mut self, field: &str, value: String) {
        match field {
            "advance" => self.advance = value,
            "balance" => self.balance = value,
            "damage_recovery" => self.damage_recovery = value,
            "gens" => self.gens = value,
            "ladies" => self.ladies = value,
            "flag" => self.flag = value,
            "waste_room_cleaning" => self.waste_room_cleaning = value,
            "electrician" => self.electrician = value,
            "radio" => self.radio = value,
            "light" => self.light = value,
            _ => {}
        }
    }

    /// Lenient running total for display while the form is being edited.
    /// Unparseable cells count as zero.
    pub fn cost_total(&self) -> f64 {
        COST_FIELDS
            .iter()
            .map(|f| self.get(f).trim().parse::<f64>().unwrap_or(0.0))
            .sum()
    }

    /// Parse into an API body. The stored total is the sum of the cost
    /// columns; advance/balance/damage recovery are money movements and do
    /// not contribute.
    pub fn to_dto(&self) -> Result<ExpenseDto, FieldErrors> {
        let mut errors = FieldErrors::new();

        let function_date = if self.function_date.trim().is_empty() {
            errors.insert("function_date".into(), "Function date is required.".into());
            None
        } else {
            match NaiveDate::parse_from_str(self.function_date.trim(), "%Y-%m-%d") {
                Ok(d) => Some(d),
                Err(_) => {
                    errors.insert("function_date".into(), "Enter a valid date.".into());
                    None
                }
            }
        };

        let mut parse = |field: &str, label: &str| -> f64 {
            let raw = self.get(field);
            let raw = raw.trim();
            if raw.is_empty() {
                return 0.0;
            }
            match raw.parse::<f64>() {
                Ok(v) if v >= 0.0 => v,
                Ok(_) => {
                    errors.insert(field.into(), format!("{label} cannot be negative."));
                    0.0
                }
                Err(_) => {
                    errors.insert(field.into(), format!("{label} must be a number."));
                    0.0
                }
            }
        };

        let mut dto = ExpenseDto {
            id: self.id,
            function_date: function_date.unwrap_or_default(),
            advance: parse("advance", "Advance"),
            balance: parse("balance", "Balance"),
            damage_recovery: parse("damage_recovery", "Damage Recovery"),
            gens: parse("gens", "Gents"),
            ladies: parse("ladies", "Ladies"),
            flag: parse("flag", "Flag"),
            waste_room_cleaning: parse("waste_room_cleaning", "Waste Room Cleaning"),
            electrician: parse("electrician", "Electrician"),
            radio: parse("radio", "Radio"),
            light: parse("light", "Light"),
            total: 0.0,
        };
        dto.total = dto.computed_total();

        if errors.is_empty() {
            Ok(dto)
        } else {
            Err(errors)
        }
    }
}

fn format_money(value: f64) -> String {
    if value == 0.0 {
        String::new()
    } else if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ExpenseForm {
        ExpenseForm {
            function_date: "2025-11-20".into(),
            advance: "5000".into(),
            balance: "1500".into(),
            gens: "800".into(),
            ladies: "600".into(),
            waste_room_cleaning: "400".into(),
            electrician: "350".into(),
            light: "250".into(),
            ..Default::default()
        }
    }

    #[test]
    fn total_is_recomputed_from_cost_columns() {
        let dto = filled_form().to_dto().unwrap();
        assert_eq!(dto.total, 2400.0);
        assert_eq!(dto.advance, 5000.0);
    }

    #[test]
    fn empty_money_fields_default_to_zero() {
        let mut form = ExpenseForm::default();
        form.function_date = "2025-11-20".into();
        let dto = form.to_dto().unwrap();
        assert_eq!(dto.total, 0.0);
        assert_eq!(dto.flag, 0.0);
    }

    #[test]
    fn cost_total_ignores_unparseable_cells() {
        let mut form = filled_form();
        form.gens = "oops".into();
        assert_eq!(form.cost_total(), 1600.0);
    }

    #[test]
    fn missing_date_is_rejected() {
        let errors = ExpenseForm::default().to_dto().unwrap_err();
        assert!(errors.contains_key("function_date"));
    }

    #[test]
    fn non_numeric_and_negative_money_are_rejected() {
        let mut form = filled_form();
        form.advance = "lots".into();
        form.radio = "-5".into();
        let errors = form.to_dto().unwrap_err();
        assert!(errors.contains_key("advance"));
        assert!(errors.contains_key("radio"));
    }

    #[test]
    fn round_trips_an_existing_record() {
        let expense = Expense {
            id: 9,
            function_date: NaiveDate::from_ymd_opt(2025, 11, 20).unwrap(),
            advance: 5000.0,
            balance: 1500.0,
            damage_recovery: 0.0,
            gens: 800.0,
            ladies: 600.0,
            flag: 0.0,
            waste_room_cleaning: 400.0,
            electrician: 350.0,
            radio: 0.0,
            light: 250.0,
            total: 2400.0,
        };
        let form = ExpenseForm::from_expense(&expense);
        assert_eq!(form.id, Some(9));
        assert_eq!(form.advance, "5000");
        assert_eq!(form.flag, "");
        let dto = form.to_dto().unwrap();
        assert_eq!(dto.id, Some(9));
        assert_eq!(dto.total, 2400.0);
    }
}
