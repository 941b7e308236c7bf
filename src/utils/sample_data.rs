//! Sample listings used to seed an empty database.

use crate::domain::entities::NewListing;

/// Returns the seed listings inserted by `admin seed`.
pub fn sample_listings() -> Vec<NewListing> {
    [
        (
            "My New Villa",
            "By the Beach",
            1200.0,
            "Goa",
            "India",
        ),
        (
            "Cozy Beachfront Cottage",
            "Escape to this charming beachfront cottage for a relaxing getaway.",
            1500.0,
            "Malibu",
            "United States",
        ),
        (
            "Modern Loft in Downtown",
            "Stay in the heart of the city in this stylish loft apartment.",
            1200.0,
            "New York City",
            "United States",
        ),
        (
            "Mountain Retreat",
            "Unplug and unwind in this peaceful mountain cabin.",
            1000.0,
            "Aspen",
            "United States",
        ),
        (
            "Historic Canal House",
            "Stay in a piece of history in this beautifully preserved canal-side house.",
            1800.0,
            "Amsterdam",
            "Netherlands",
        ),
        (
            "Secluded Treehouse Getaway",
            "Live among the treetops in this unique treehouse retreat.",
            800.0,
            "Portland",
            "United States",
        ),
    ]
    .into_iter()
    .map(|(title, description, price, location, country)| NewListing {
        title: title.to_string(),
        description: description.to_string(),
        price,
        location: location.to_string(),
        country: country.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_listings_are_valid() {
        let listings = sample_listings();
        assert!(!listings.is_empty());
        for listing in &listings {
            assert!(!listing.title.is_empty());
            assert!(listing.price >= 0.0);
        }
    }
}
