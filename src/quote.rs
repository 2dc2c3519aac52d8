//! Travel-combo quote calculator.
//!
//! Pure derived state over three static priced catalogs. Lodging is
//! charged per person; dining and transport are flat. The total only
//! changes when `calculate` runs, never reactively.

use thiserror::Error;

/// An entry of one of the static catalogs.
#[derive(Debug, Clone, PartialEq)]
pub struct PricedOption {
    pub name: &'static str,
    pub price: f64,
}

pub const HOTELS: &[PricedOption] = &[
    PricedOption { name: "Hotel Mirador", price: 50.0 },
    PricedOption { name: "Hostal del Puerto", price: 35.0 },
    PricedOption { name: "Gran Hotel Colonial", price: 80.0 },
];

pub const RESTAURANTS: &[PricedOption] = &[
    PricedOption { name: "La Terraza", price: 30.0 },
    PricedOption { name: "Casa Marisco", price: 45.0 },
    PricedOption { name: "Fonda Criolla", price: 20.0 },
];

pub const FLIGHTS: &[PricedOption] = &[
    PricedOption { name: "Vuelo Económico", price: 200.0 },
    PricedOption { name: "Vuelo Directo", price: 320.0 },
    PricedOption { name: "Vuelo Premium", price: 450.0 },
];

/// Shown alongside a computed total.
pub const CONFIRMATION_TEXT: &str = "¡Reserva confirmada! ¡Que disfrutes tu viaje!";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuoteError {
    #[error("unknown option: {name}")]
    UnknownOption { name: String },
}

/// Price of the named option in `catalog`.
pub fn price_of(catalog: &[PricedOption], name: &str) -> Result<f64, QuoteError> {
    catalog
        .iter()
        .find(|o| o.name == name)
        .map(|o| o.price)
        .ok_or_else(|| QuoteError::UnknownOption {
            name: name.to_string(),
        })
}

/// Total price of a combo: lodging per person, dining and transport flat.
pub fn combo_total(adults: u32, children: u32, lodging: f64, dining: f64, transport: f64) -> f64 {
    f64::from(adults + children) * lodging + dining + transport
}

/// The quote form: current selections plus headcounts, and the last
/// explicitly computed total.
#[derive(Debug, Clone)]
pub struct QuoteForm {
    pub adults: u32,
    pub children: u32,
    pub hotel: String,
    pub restaurant: String,
    pub flight: String,
    total: Option<f64>,
}

impl Default for QuoteForm {
    fn default() -> Self {
        Self {
            adults: 1,
            children: 0,
            hotel: HOTELS[0].name.to_string(),
            restaurant: RESTAURANTS[0].name.to_string(),
            flight: FLIGHTS[0].name.to_string(),
            total: None,
        }
    }
}

impl QuoteForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute the total from the current selections.
    pub fn calculate(&mut self) -> Result<f64, QuoteError> {
        let total = combo_total(
            self.adults,
            self.children,
            price_of(HOTELS, &self.hotel)?,
            price_of(RESTAURANTS, &self.restaurant)?,
            price_of(FLIGHTS, &self.flight)?,
        );
        self.total = Some(total);
        Ok(total)
    }

    /// The last computed total, untouched by later input changes.
    pub fn total(&self) -> Option<f64> {
        self.total
    }

    /// Display text for the last computed total ("Costo Total: $380.00").
    pub fn result_message(&self) -> Option<String> {
        self.total.map(|t| format!("Costo Total: ${t:.2}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combo_total_charges_lodging_per_person() {
        assert_eq!(combo_total(2, 1, 50.0, 30.0, 200.0), 380.0);
        assert_eq!(combo_total(0, 0, 50.0, 30.0, 200.0), 230.0);
    }

    #[test]
    fn form_defaults_to_the_first_option_of_each_catalog() {
        let form = QuoteForm::new();
        assert_eq!(form.hotel, "Hotel Mirador");
        assert_eq!(form.restaurant, "La Terraza");
        assert_eq!(form.flight, "Vuelo Económico");
        assert!(form.total().is_none());
    }

    #[test]
    fn total_only_changes_on_explicit_calculation() {
        let mut form = QuoteForm::new();
        form.adults = 2;
        form.children = 1;
        form.flight = "Vuelo Económico".to_string();

        let total = form.calculate().unwrap();
        assert_eq!(total, 3.0 * 50.0 + 30.0 + 200.0);
        assert_eq!(form.result_message().as_deref(), Some("Costo Total: $380.00"));

        // Editing inputs does not recompute anything.
        form.adults = 9;
        assert_eq!(form.total(), Some(380.0));

        assert_eq!(form.calculate().unwrap(), 10.0 * 50.0 + 30.0 + 200.0);
    }

    #[test]
    fn unknown_selection_is_an_error() {
        let mut form = QuoteForm::new();
        form.hotel = "Hotel Inexistente".to_string();

        assert_eq!(
            form.calculate().unwrap_err(),
            QuoteError::UnknownOption {
                name: "Hotel Inexistente".to_string()
            }
        );
        assert!(form.total().is_none(), "a failed calculation leaves no total");
    }

    #[test]
    fn price_lookup_finds_catalog_entries() {
        assert_eq!(price_of(FLIGHTS, "Vuelo Premium").unwrap(), 450.0);
        assert!(price_of(HOTELS, "").is_err());
    }
}
