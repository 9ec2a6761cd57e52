//! Dry content and bone-dry equivalent calculation
//!
//! A replicate whose air dry mass is zero, missing or not a number has no
//! dry content. Such replicates are skipped when averaging; they never count
//! as 0 %.

use log::debug;
use recyclab_types::{Error, Result};
use serde::{Deserialize, Serialize};

use super::validation::{ensure_mass, ensure_reference};
use crate::model::{MassPair, MoistureComponent};

/// Dry content of one set of replicates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoistureResult {
    /// Dry content (%) per replicate, `None` where undefined
    pub per_replicate_pct: Vec<Option<f64>>,
    /// Mean of the defined replicate percentages
    pub average_pct: Option<f64>,
    /// Mean oven/air ratio scaled to the reference mass (g)
    pub bone_dry_equivalent_g: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentMoisture {
    pub name: String,
    pub result: MoistureResult,
}

/// Dry content of a multi-component moisture table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoistureTableResult {
    pub components: Vec<ComponentMoisture>,
    pub average_pct: Option<f64>,
    pub bone_dry_equivalent_g: Option<f64>,
}

/// Dry content (%) of one replicate
pub fn dry_content_pct(pair: &MassPair) -> Option<f64> {
    pair.dry_ratio().map(|ratio| ratio * 100.0)
}

/// Arithmetic mean of the defined values, `None` when there are none
pub fn mean_defined<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = Option<f64>>,
{
    let (sum, count) = values
        .into_iter()
        .flatten()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

fn validate_replicates(prefix: &str, replicates: &[MassPair]) -> Result<()> {
    if replicates.is_empty() {
        return Err(Error::invalid_input(
            prefix,
            "at least one replicate is required",
        ));
    }
    for (idx, pair) in replicates.iter().enumerate() {
        ensure_mass(&format!("{}[{}].air_dry_mass", prefix, idx), pair.air_dry_mass)?;
        ensure_mass(&format!("{}[{}].oven_dry_mass", prefix, idx), pair.oven_dry_mass)?;
    }
    Ok(())
}

/// Dry content per replicate, their average, and the bone-dry equivalent.
///
/// The bone-dry equivalent averages the raw oven/air ratios (not the
/// percentages) and scales by `reference_mass_g`.
pub fn compute_moisture(replicates: &[MassPair], reference_mass_g: f64) -> Result<MoistureResult> {
    ensure_reference("bone_dry_reference_g", reference_mass_g)?;
    validate_replicates("replicates", replicates)?;
    Ok(moisture_of(replicates, reference_mass_g))
}

fn moisture_of(replicates: &[MassPair], reference_mass_g: f64) -> MoistureResult {
    let per_replicate_pct: Vec<Option<f64>> = replicates.iter().map(dry_content_pct).collect();
    for (idx, pct) in per_replicate_pct.iter().enumerate() {
        if pct.is_none() {
            debug!("moisture replicate {} has no usable air dry mass", idx + 1);
        }
    }
    let average_pct = mean_defined(per_replicate_pct.iter().copied());
    let bone_dry_equivalent_g =
        mean_defined(replicates.iter().map(MassPair::dry_ratio)).map(|r| r * reference_mass_g);

    MoistureResult {
        per_replicate_pct,
        average_pct,
        bone_dry_equivalent_g,
    }
}

/// Dry content of every component plus the table-wide summary.
///
/// The overall average is the mean of the components' averages. The overall
/// bone-dry equivalent first averages each replicate slot's ratio across
/// components, then averages the slots.
pub fn compute_moisture_table(
    components: &[MoistureComponent],
    reference_mass_g: f64,
) -> Result<MoistureTableResult> {
    ensure_reference("bone_dry_reference_g", reference_mass_g)?;
    for component in components {
        validate_replicates(&format!("moisture.{}", component.name), &component.replicates)?;
    }

    let results: Vec<ComponentMoisture> = components
        .iter()
        .map(|c| ComponentMoisture {
            name: c.name.clone(),
            result: moisture_of(&c.replicates, reference_mass_g),
        })
        .collect();

    let average_pct = mean_defined(results.iter().map(|c| c.result.average_pct));

    let slots = components
        .iter()
        .map(|c| c.replicates.len())
        .max()
        .unwrap_or(0);
    let slot_ratios = (0..slots).map(|slot| {
        mean_defined(
            components
                .iter()
                .map(|c| c.replicates.get(slot).and_then(MassPair::dry_ratio)),
        )
    });
    let bone_dry_equivalent_g = mean_defined(slot_ratios).map(|r| r * reference_mass_g);

    Ok(MoistureTableResult {
        components: results,
        average_pct,
        bone_dry_equivalent_g,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::settings::BONE_DRY_REFERENCE_G;

    #[test]
    fn test_single_replicate_exact() {
        let result = compute_moisture(&[MassPair::new(80.0, 36.0)], BONE_DRY_REFERENCE_G).unwrap();
        assert!((result.per_replicate_pct[0].unwrap() - 36.0 / 80.0 * 100.0).abs() < 1e-9);
        assert!((result.average_pct.unwrap() - 45.0).abs() < 1e-9);
        assert!((result.bone_dry_equivalent_g.unwrap() - 22.5).abs() < 1e-9);
    }

    #[test]
    fn test_zero_air_mass_is_undefined_not_zero() {
        let result = compute_moisture(&[MassPair::new(0.0, 10.0)], BONE_DRY_REFERENCE_G).unwrap();
        assert_eq!(result.per_replicate_pct, vec![None]);
        assert!(result.average_pct.is_none());
        assert!(result.bone_dry_equivalent_g.is_none());
    }

    #[test]
    fn test_skip_undefined_keeps_defined_value() {
        let result = compute_moisture(
            &[MassPair::new(0.0, 0.0), MassPair::new(40.0, 38.0)],
            BONE_DRY_REFERENCE_G,
        )
        .unwrap();
        assert!(result.per_replicate_pct[0].is_none());
        assert!((result.average_pct.unwrap() - 95.0).abs() < 1e-9);
    }

    #[test]
    fn test_two_undefined_replicates() {
        let result = compute_moisture(
            &[MassPair::new(0.0, 0.0), MassPair::new(f64::NAN, 3.0)],
            BONE_DRY_REFERENCE_G,
        )
        .unwrap();
        assert!(result.per_replicate_pct.iter().all(Option::is_none));
        assert!(result.average_pct.is_none());
        assert!(result.bone_dry_equivalent_g.is_none());
    }

    #[test]
    fn test_end_to_end_replicates() {
        let result = compute_moisture(
            &[MassPair::new(100.0, 45.0), MassPair::new(0.0, 0.0)],
            BONE_DRY_REFERENCE_G,
        )
        .unwrap();
        assert!((result.per_replicate_pct[0].unwrap() - 45.0).abs() < 1e-9);
        assert!(result.per_replicate_pct[1].is_none());
        assert!((result.average_pct.unwrap() - 45.0).abs() < 1e-9);
        assert!((result.bone_dry_equivalent_g.unwrap() - 22.5).abs() < 1e-9);
    }

    #[test]
    fn test_many_replicates() {
        let replicates = [
            MassPair::new(10.0, 9.0),
            MassPair::new(10.0, 8.0),
            MassPair::new(10.0, 7.0),
        ];
        let result = compute_moisture(&replicates, 100.0).unwrap();
        assert_eq!(result.per_replicate_pct.len(), 3);
        assert!((result.average_pct.unwrap() - 80.0).abs() < 1e-9);
        assert!((result.bone_dry_equivalent_g.unwrap() - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_negative_mass_rejected() {
        let err = compute_moisture(&[MassPair::new(-1.0, 0.5)], BONE_DRY_REFERENCE_G).unwrap_err();
        assert!(matches!(err, Error::InvalidInput { .. }));
    }

    #[test]
    fn test_no_replicates_rejected() {
        assert!(compute_moisture(&[], BONE_DRY_REFERENCE_G).is_err());
    }

    #[test]
    fn test_table_single_component_matches_flat() {
        let replicates = vec![MassPair::new(100.0, 45.0), MassPair::new(0.0, 0.0)];
        let flat = compute_moisture(&replicates, BONE_DRY_REFERENCE_G).unwrap();
        let table = compute_moisture_table(
            &[MoistureComponent::new("Main", replicates)],
            BONE_DRY_REFERENCE_G,
        )
        .unwrap();
        assert_eq!(table.components[0].result, flat);
        assert_eq!(table.average_pct, flat.average_pct);
        assert_eq!(table.bone_dry_equivalent_g, flat.bone_dry_equivalent_g);
    }

    #[test]
    fn test_table_averages_components() {
        let components = [
            MoistureComponent::new(
                "Main",
                vec![MassPair::new(100.0, 90.0), MassPair::new(100.0, 92.0)],
            ),
            MoistureComponent::new(
                "Lid",
                vec![MassPair::new(50.0, 40.0), MassPair::new(0.0, 0.0)],
            ),
        ];
        let table = compute_moisture_table(&components, BONE_DRY_REFERENCE_G).unwrap();
        // Main 91 %, Lid 80 %
        assert!((table.average_pct.unwrap() - 85.5).abs() < 1e-9);
        // slot 1: (0.90 + 0.80) / 2 = 0.85, slot 2: 0.92
        let expected = (0.85 + 0.92) / 2.0 * 50.0;
        assert!((table.bone_dry_equivalent_g.unwrap() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_table_all_blank() {
        let table = compute_moisture_table(&[MoistureComponent::blank("Main")], BONE_DRY_REFERENCE_G)
            .unwrap();
        assert!(table.average_pct.is_none());
        assert!(table.bone_dry_equivalent_g.is_none());
    }

    #[test]
    fn test_mean_defined() {
        assert_eq!(mean_defined(vec![None, None]), None);
        assert_eq!(mean_defined(vec![Some(2.0), None, Some(4.0)]), Some(3.0));
    }
}
