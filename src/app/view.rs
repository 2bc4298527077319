//! Derived-view computation over the inventory.
//!
//! This module is the pure heart of the plugin: given the full car list and
//! the current filter state, it computes the visible page of results plus the
//! facet option lists. It has no side effects and is total over well-formed
//! input; malformed records are the data source's problem, not validated
//! here.
//!
//! The computation order is fixed, because ties and edge cases are
//! observable:
//!
//! 1. Facet options from the *entire unfiltered* list (options must not
//!    shrink while other filters are applied)
//! 2. Case-insensitive substring search over name or brand
//! 3. Exact fuel facet equality
//! 4. Exact body facet equality
//! 5. Stable price sort (or dataset order when unsorted)
//! 6. `total_pages = ceil(filtered / page_size)`
//! 7. Page slice; an out-of-range page yields an empty slice and is never
//!    corrected here (the shell resets the page on filter changes, and only
//!    on filter changes)

use crate::domain::CarRecord;
use std::collections::HashSet;

/// Sort order applied to the filtered list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortMode {
    /// Preserve dataset order.
    #[default]
    Unsorted,
    /// Price non-decreasing.
    PriceLowToHigh,
    /// Price non-increasing.
    PriceHighToLow,
}

impl SortMode {
    /// Returns the next mode in the cycle unsorted → low-to-high →
    /// high-to-low → unsorted.
    #[must_use]
    pub const fn cycled(self) -> Self {
        match self {
            Self::Unsorted => Self::PriceLowToHigh,
            Self::PriceLowToHigh => Self::PriceHighToLow,
            Self::PriceHighToLow => Self::Unsorted,
        }
    }

    /// Short label for the header line.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unsorted => "unsorted",
            Self::PriceLowToHigh => "price \u{2191}",
            Self::PriceHighToLow => "price \u{2193}",
        }
    }
}

/// Current search, facet, sort, and page selections.
///
/// Owned by the app state and mutated only by explicit user intents; the
/// engine reads it and never writes it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Search text matched case-insensitively against name or brand.
    /// Empty matches everything.
    pub search: String,

    /// Selected fuel facet value; `None` means any.
    pub fuel: Option<String>,

    /// Selected body facet value; `None` means any.
    pub body: Option<String>,

    /// Sort order for the filtered list.
    pub sort: SortMode,

    /// Requested page, 1-based.
    pub page: usize,
}

impl FilterState {
    /// Session-start defaults: empty search, no facet selections, unsorted,
    /// page 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            page: 1,
            ..Self::default()
        }
    }
}

/// Result of one derived-view computation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DerivedView {
    /// The records on the requested page, in final display order.
    pub visible: Vec<CarRecord>,

    /// `ceil(filtered / page_size)`; 0 when nothing matched.
    pub total_pages: usize,

    /// Distinct fuel values over the full dataset, first-occurrence order.
    pub fuel_types: Vec<String>,

    /// Distinct body values over the full dataset, first-occurrence order.
    pub body_types: Vec<String>,
}

/// Collects the distinct values of one field, preserving first-occurrence
/// order.
fn distinct_values<'a>(cars: &'a [CarRecord], field: impl Fn(&'a CarRecord) -> &'a str) -> Vec<String> {
    let mut seen = HashSet::new();
    cars.iter()
        .map(field)
        .filter(|value| seen.insert(*value))
        .map(str::to_string)
        .collect()
}

/// Computes the visible page and facet options for the given filter state.
///
/// Pure function of its inputs; see the module docs for the fixed step
/// order. `page_size` of 0 is treated as an empty page with 0 total pages.
#[must_use]
pub fn compute_view(all_cars: &[CarRecord], filters: &FilterState, page_size: usize) -> DerivedView {
    let _span = tracing::debug_span!(
        "compute_view",
        car_count = all_cars.len(),
        query_len = filters.search.len(),
        page = filters.page,
    )
    .entered();

    // Facet options always reflect the full dataset, not the filtered one.
    let fuel_types = distinct_values(all_cars, |car| car.fuel.as_str());
    let body_types = distinct_values(all_cars, |car| car.body.as_str());

    let query = filters.search.to_lowercase();

    let mut filtered: Vec<&CarRecord> = all_cars
        .iter()
        .filter(|car| {
            query.is_empty()
                || car.name.to_lowercase().contains(&query)
                || car.brand.to_lowercase().contains(&query)
        })
        .filter(|car| filters.fuel.as_ref().map_or(true, |fuel| &car.fuel == fuel))
        .filter(|car| filters.body.as_ref().map_or(true, |body| &car.body == body))
        .collect();

    // slice::sort_by is stable, so equal prices keep their dataset order in
    // both directions.
    match filters.sort {
        SortMode::Unsorted => {}
        SortMode::PriceLowToHigh => filtered.sort_by(|a, b| a.price.cmp(&b.price)),
        SortMode::PriceHighToLow => filtered.sort_by(|a, b| b.price.cmp(&a.price)),
    }

    let total_pages = if page_size == 0 {
        0
    } else {
        (filtered.len() + page_size - 1) / page_size
    };

    let start = filters.page.saturating_sub(1).saturating_mul(page_size);
    let visible: Vec<CarRecord> = if start >= filtered.len() || page_size == 0 {
        vec![]
    } else {
        let end = (start + page_size).min(filtered.len());
        filtered[start..end].iter().map(|car| (*car).clone()).collect()
    };

    tracing::debug!(
        filtered_count = filtered.len(),
        visible_count = visible.len(),
        total_pages = total_pages,
        "derived view computed"
    );

    DerivedView {
        visible,
        total_pages,
        fuel_types,
        body_types,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn car(id: u64, name: &str, brand: &str, fuel: &str, body: &str, price: u64) -> CarRecord {
        CarRecord {
            id,
            name: name.to_string(),
            brand: brand.to_string(),
            fuel: fuel.to_string(),
            body: body.to_string(),
            seats: 5,
            price,
            image: String::new(),
            description: None,
        }
    }

    fn sample() -> Vec<CarRecord> {
        vec![
            car(1, "Alto", "Maruti", "petrol", "hatchback", 500_000),
            car(2, "Nexon", "Tata", "diesel", "SUV", 900_000),
            car(3, "Nexon EV", "Tata", "electric", "SUV", 1_500_000),
        ]
    }

    fn filters() -> FilterState {
        FilterState::new()
    }

    #[test]
    fn search_plus_sort_example() {
        // Worked example: search "nexon", price low to high, page 1 of 10.
        let mut f = filters();
        f.search = "nexon".to_string();
        f.sort = SortMode::PriceLowToHigh;

        let view = compute_view(&sample(), &f, 10);
        let names: Vec<&str> = view.visible.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Nexon", "Nexon EV"]);
        assert_eq!(view.visible[0].price, 900_000);
        assert_eq!(view.visible[1].price, 1_500_000);
        assert_eq!(view.total_pages, 1);
    }

    #[test]
    fn facet_filter_leaves_facet_options_untouched() {
        // Worked example: fuel=electric narrows the page but not the options.
        let mut f = filters();
        f.fuel = Some("electric".to_string());

        let view = compute_view(&sample(), &f, 10);
        let names: Vec<&str> = view.visible.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Nexon EV"]);
        assert_eq!(view.fuel_types, vec!["petrol", "diesel", "electric"]);
        assert_eq!(view.body_types, vec!["hatchback", "SUV"]);
    }

    #[test]
    fn facet_options_invariant_under_search_and_facets() {
        let baseline = compute_view(&sample(), &filters(), 10);

        let mut searched = filters();
        searched.search = "zzz-no-match".to_string();
        let mut fueled = filters();
        fueled.fuel = Some("diesel".to_string());
        let mut bodied = filters();
        bodied.body = Some("SUV".to_string());

        for f in [&searched, &fueled, &bodied] {
            let view = compute_view(&sample(), f, 10);
            assert_eq!(view.fuel_types, baseline.fuel_types);
            assert_eq!(view.body_types, baseline.body_types);
        }
    }

    #[test]
    fn search_matches_brand_case_insensitively() {
        let mut f = filters();
        f.search = "TATA".to_string();

        let view = compute_view(&sample(), &f, 10);
        assert_eq!(view.visible.len(), 2);
    }

    #[test]
    fn empty_search_matches_all() {
        let view = compute_view(&sample(), &filters(), 10);
        assert_eq!(view.visible.len(), 3);
        assert_eq!(view.total_pages, 1);
    }

    #[test]
    fn facet_equality_is_case_sensitive() {
        let mut f = filters();
        f.body = Some("suv".to_string());

        let view = compute_view(&sample(), &f, 10);
        assert!(view.visible.is_empty());
        assert_eq!(view.total_pages, 0);
    }

    #[test]
    fn price_sort_is_stable_for_ties() {
        let cars = vec![
            car(1, "A", "X", "petrol", "sedan", 100),
            car(2, "B", "X", "petrol", "sedan", 100),
            car(3, "C", "X", "petrol", "sedan", 50),
            car(4, "D", "X", "petrol", "sedan", 100),
        ];

        let mut f = filters();
        f.sort = SortMode::PriceLowToHigh;
        let asc = compute_view(&cars, &f, 10);
        let asc_ids: Vec<u64> = asc.visible.iter().map(|c| c.id).collect();
        assert_eq!(asc_ids, vec![3, 1, 2, 4]);

        f.sort = SortMode::PriceHighToLow;
        let desc = compute_view(&cars, &f, 10);
        let desc_ids: Vec<u64> = desc.visible.iter().map(|c| c.id).collect();
        assert_eq!(desc_ids, vec![1, 2, 4, 3]);
    }

    #[test]
    fn unsorted_preserves_dataset_order() {
        let view = compute_view(&sample(), &filters(), 10);
        let ids: Vec<u64> = view.visible.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn page_slicing_and_total_pages() {
        let cars: Vec<CarRecord> = (0..7)
            .map(|i| car(i, &format!("Car{i}"), "X", "petrol", "sedan", 100 + i))
            .collect();

        let mut f = filters();
        for page in 1..=3 {
            f.page = page;
            let view = compute_view(&cars, &f, 3);
            assert_eq!(view.total_pages, 3);
            assert!(view.visible.len() <= 3);
            assert!(!view.visible.is_empty());
        }

        f.page = 3;
        let last = compute_view(&cars, &f, 3);
        assert_eq!(last.visible.len(), 1);
    }

    #[test]
    fn out_of_range_page_yields_empty_not_error() {
        let mut f = filters();
        f.page = 99;

        let view = compute_view(&sample(), &f, 10);
        assert!(view.visible.is_empty());
        // total_pages still reflects the filtered set; the engine does not
        // auto-correct the page.
        assert_eq!(view.total_pages, 1);
    }

    #[test]
    fn visible_never_exceeds_page_size() {
        let cars: Vec<CarRecord> = (0..25)
            .map(|i| car(i, &format!("Car{i}"), "X", "petrol", "sedan", 100))
            .collect();

        let mut f = filters();
        for page in 1..=6 {
            f.page = page;
            let view = compute_view(&cars, &f, 4);
            assert!(view.visible.len() <= 4);
        }
    }

    #[test]
    fn empty_dataset_yields_zero_pages() {
        let view = compute_view(&[], &filters(), 10);
        assert!(view.visible.is_empty());
        assert_eq!(view.total_pages, 0);
        assert!(view.fuel_types.is_empty());
        assert!(view.body_types.is_empty());
    }

    #[test]
    fn sort_mode_cycle() {
        let mut mode = SortMode::Unsorted;
        mode = mode.cycled();
        assert_eq!(mode, SortMode::PriceLowToHigh);
        mode = mode.cycled();
        assert_eq!(mode, SortMode::PriceHighToLow);
        mode = mode.cycled();
        assert_eq!(mode, SortMode::Unsorted);
    }
}
