//! Aggregations the dashboard derives from single lookups
//!
//! Totals across regions, per-scenario series over the years and "does this
//! sector have any data" checks. All of them treat the sentinel as "skip", never
//! as zero.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::common::ValueLookup;
use crate::models::{ALL_YEARS, QueryParams, Scenario};

/// One point of a series
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YearValue {
    pub year: u16,
    pub value: f64,
}

/// Absolute values per scenario, in year order
pub type Series = BTreeMap<Scenario, Vec<YearValue>>;

/// Sum of absolute values over `regions`.
///
/// Regions without a valid number are left out of the sum; `None` when no
/// region had one.
pub fn sum_abs<'a, L, I>(lookup: &L, params: &QueryParams, regions: I) -> Option<f64>
where
    L: ValueLookup + ?Sized,
    I: IntoIterator<Item = &'a str>,
{
    regions
        .into_iter()
        .filter_map(|region| lookup.numeric(&params.for_region(region)).ok())
        .map(f64::abs)
        .reduce(|total, value| total + value)
}

/// Whether any of `regions` has a valid number for `params`
pub fn any_region_has_data<'a, L, I>(lookup: &L, params: &QueryParams, regions: I) -> bool
where
    L: ValueLookup + ?Sized,
    I: IntoIterator<Item = &'a str>,
{
    regions
        .into_iter()
        .any(|region| lookup.numeric(&params.for_region(region)).is_ok())
}

/// Values of one region for every scenario and year.
///
/// `params` supplies carrier, metric type, region, flow type and sector; its
/// scenario and year are ignored. Scenarios without any value are omitted.
pub fn series_over_years<L>(lookup: &L, params: &QueryParams) -> Series
where
    L: ValueLookup + ?Sized,
{
    Scenario::ALL
        .into_iter()
        .filter_map(|scenario| {
            let points: Vec<YearValue> = ALL_YEARS
                .into_iter()
                .filter_map(|year| {
                    let query = params.clone().scenario(scenario).year(year);
                    lookup.numeric(&query).ok().map(|value| YearValue {
                        year,
                        value: value.abs(),
                    })
                })
                .collect();
            (!points.is_empty()).then_some((scenario, points))
        })
        .collect()
}
