use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixed catalog of amenities the search form offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Amenity {
    Pool,
    Gym,
    Parking,
    WiFi,
    Kitchen,
    Washer,
}

impl Amenity {
    /// The full catalog, in display order
    pub const ALL: [Amenity; 6] = [
        Amenity::Pool,
        Amenity::Gym,
        Amenity::Parking,
        Amenity::WiFi,
        Amenity::Kitchen,
        Amenity::Washer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Amenity::Pool => "Pool",
            Amenity::Gym => "Gym",
            Amenity::Parking => "Parking",
            Amenity::WiFi => "WiFi",
            Amenity::Kitchen => "Kitchen",
            Amenity::Washer => "Washer",
        }
    }
}

impl fmt::Display for Amenity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a set of search criteria was rejected before any request was made
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("required field `{0}` is missing")]
    MissingField(&'static str),
    #[error("city `{0}` is not in the city catalog")]
    UnknownCity(String),
    #[error("{field} must not be negative (got {value})")]
    NegativePrice { field: &'static str, value: f64 },
    #[error("{field} must be between {min} and {max} (got {value})")]
    OutOfRange {
        field: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },
    #[error("priceMin ({min}) must not exceed priceMax ({max})")]
    PriceRange { min: f64, max: f64 },
}

/// Search filters a user supplies through the form.
///
/// `Default` is the all-empty form state. Required fields are still
/// `Option` here so an untouched form can be represented; `validate`
/// is what decides whether the criteria can be submitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchCriteria {
    pub name: Option<String>,
    pub city: String,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub bedrooms: Option<u32>,
    pub people: Option<u32>,
    pub amenities: Vec<Amenity>,
    pub rating: Option<u32>,
    pub neighborhood: Option<String>,
}

impl SearchCriteria {
    /// Whole-form validation, run once at submit time.
    ///
    /// Field bounds are checked first, then the cross-field price rule,
    /// since that one depends on two fields jointly. The city must be one
    /// of the catalog entries fetched at session start.
    pub fn validate(&self, cities: &[String]) -> Result<(), ValidationError> {
        if self.city.is_empty() {
            return Err(ValidationError::MissingField("city"));
        }
        if !cities.iter().any(|c| c == &self.city) {
            return Err(ValidationError::UnknownCity(self.city.clone()));
        }

        let min = self
            .price_min
            .ok_or(ValidationError::MissingField("priceMin"))?;
        let max = self
            .price_max
            .ok_or(ValidationError::MissingField("priceMax"))?;
        if min < 0.0 {
            return Err(ValidationError::NegativePrice {
                field: "priceMin",
                value: min,
            });
        }
        if max < 0.0 {
            return Err(ValidationError::NegativePrice {
                field: "priceMax",
                value: max,
            });
        }

        for (field, value) in [("bedrooms", self.bedrooms), ("people", self.people)] {
            if let Some(value) = value {
                if !(1..=30).contains(&value) {
                    return Err(ValidationError::OutOfRange {
                        field,
                        value,
                        min: 1,
                        max: 30,
                    });
                }
            }
        }
        if let Some(rating) = self.rating {
            if !(1..=10).contains(&rating) {
                return Err(ValidationError::OutOfRange {
                    field: "rating",
                    value: rating,
                    min: 1,
                    max: 10,
                });
            }
        }

        if min > max {
            return Err(ValidationError::PriceRange { min, max });
        }

        Ok(())
    }

    /// Serialize the full field set into query pairs for the search endpoint.
    ///
    /// Every scalar key is always present, empty when the field is unset;
    /// amenities serialize as one repeated `amenities` key per selection and
    /// are absent when nothing is selected. The backend expects exactly
    /// these key names.
    pub fn to_query(&self) -> Vec<(String, String)> {
        fn opt_num<T: ToString>(value: Option<T>) -> String {
            value.map(|v| v.to_string()).unwrap_or_default()
        }

        let mut query = vec![
            ("name".to_string(), self.name.clone().unwrap_or_default()),
            ("city".to_string(), self.city.clone()),
            ("priceMin".to_string(), opt_num(self.price_min)),
            ("priceMax".to_string(), opt_num(self.price_max)),
            ("bedrooms".to_string(), opt_num(self.bedrooms)),
            ("people".to_string(), opt_num(self.people)),
        ];
        for amenity in &self.amenities {
            query.push(("amenities".to_string(), amenity.as_str().to_string()));
        }
        query.push(("rating".to_string(), opt_num(self.rating)));
        query.push((
            "neighborhood".to_string(),
            self.neighborhood.clone().unwrap_or_default(),
        ));
        query
    }
}

/// Listings returned by the search endpoint.
///
/// The payload is held only for re-display, so beyond "it is a JSON array"
/// the shape is left unvalidated and each listing stays an opaque value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchResults(pub Vec<serde_json::Value>);

impl SearchResults {
    pub fn listings(&self) -> &[serde_json::Value] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A single review, shape unvalidated
pub type ReviewRecord = serde_json::Value;

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<String> {
        vec!["Paris".to_string(), "Rome".to_string()]
    }

    fn valid_criteria() -> SearchCriteria {
        SearchCriteria {
            city: "Paris".to_string(),
            price_min: Some(50.0),
            price_max: Some(200.0),
            bedrooms: Some(2),
            ..Default::default()
        }
    }

    #[test]
    fn valid_criteria_pass() {
        assert_eq!(valid_criteria().validate(&catalog()), Ok(()));
    }

    #[test]
    fn inverted_price_range_is_rejected() {
        let criteria = SearchCriteria {
            price_min: Some(300.0),
            price_max: Some(200.0),
            ..valid_criteria()
        };
        assert_eq!(
            criteria.validate(&catalog()),
            Err(ValidationError::PriceRange {
                min: 300.0,
                max: 200.0
            })
        );
    }

    #[test]
    fn equal_min_and_max_price_is_accepted() {
        let criteria = SearchCriteria {
            price_min: Some(200.0),
            price_max: Some(200.0),
            ..valid_criteria()
        };
        assert_eq!(criteria.validate(&catalog()), Ok(()));
    }

    #[test]
    fn missing_required_fields_are_rejected() {
        let no_city = SearchCriteria {
            city: String::new(),
            ..valid_criteria()
        };
        assert_eq!(
            no_city.validate(&catalog()),
            Err(ValidationError::MissingField("city"))
        );

        let no_min = SearchCriteria {
            price_min: None,
            ..valid_criteria()
        };
        assert_eq!(
            no_min.validate(&catalog()),
            Err(ValidationError::MissingField("priceMin"))
        );

        let no_max = SearchCriteria {
            price_max: None,
            ..valid_criteria()
        };
        assert_eq!(
            no_max.validate(&catalog()),
            Err(ValidationError::MissingField("priceMax"))
        );
    }

    #[test]
    fn city_must_be_in_catalog() {
        let criteria = SearchCriteria {
            city: "Atlantis".to_string(),
            ..valid_criteria()
        };
        assert_eq!(
            criteria.validate(&catalog()),
            Err(ValidationError::UnknownCity("Atlantis".to_string()))
        );
    }

    #[test]
    fn negative_prices_are_rejected() {
        let criteria = SearchCriteria {
            price_min: Some(-1.0),
            ..valid_criteria()
        };
        assert_eq!(
            criteria.validate(&catalog()),
            Err(ValidationError::NegativePrice {
                field: "priceMin",
                value: -1.0
            })
        );
    }

    #[test]
    fn occupancy_bounds_are_enforced() {
        for (bedrooms, people, rating, ok) in [
            (Some(1), None, None, true),
            (Some(30), None, None, true),
            (Some(0), None, None, false),
            (Some(31), None, None, false),
            (None, Some(31), None, false),
            (None, None, Some(10), true),
            (None, None, Some(11), false),
            (None, None, Some(0), false),
        ] {
            let criteria = SearchCriteria {
                bedrooms,
                people,
                rating,
                ..valid_criteria()
            };
            assert_eq!(
                criteria.validate(&catalog()).is_ok(),
                ok,
                "bedrooms={bedrooms:?} people={people:?} rating={rating:?}"
            );
        }
    }

    #[test]
    fn query_always_carries_every_scalar_key() {
        let query = valid_criteria().to_query();
        let keys: Vec<&str> = query.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            keys,
            [
                "name",
                "city",
                "priceMin",
                "priceMax",
                "bedrooms",
                "people",
                "rating",
                "neighborhood"
            ]
        );

        let get = |key: &str| {
            query
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
                .unwrap()
        };
        assert_eq!(get("city"), "Paris");
        assert_eq!(get("priceMin"), "50");
        assert_eq!(get("priceMax"), "200");
        assert_eq!(get("bedrooms"), "2");
        assert_eq!(get("name"), "");
        assert_eq!(get("people"), "");
        assert_eq!(get("rating"), "");
        assert_eq!(get("neighborhood"), "");
    }

    #[test]
    fn amenities_serialize_as_repeated_keys() {
        let criteria = SearchCriteria {
            amenities: vec![Amenity::Pool, Amenity::WiFi],
            ..valid_criteria()
        };
        let query = criteria.to_query();
        let amenities: Vec<&str> = query
            .iter()
            .filter(|(k, _)| k == "amenities")
            .map(|(_, v)| v.as_str())
            .collect();
        assert_eq!(amenities, ["Pool", "WiFi"]);
    }

    #[test]
    fn amenity_catalog_matches_form_options() {
        let names: Vec<&str> = Amenity::ALL.iter().map(|a| a.as_str()).collect();
        assert_eq!(names, ["Pool", "Gym", "Parking", "WiFi", "Kitchen", "Washer"]);
    }
}
