//! Quantity-to-material resolution and inventory deduction.
//!
//! Every process screen used to carry its own copy of this arithmetic;
//! it is consolidated here and parameterized by the stage's rounding rule.

use crate::domain::inventario::InventoryEntry;
use crate::domain::pendientes::MaterialLine;
use std::fmt;

/// Per-stage rounding rule for material consumption.
///
/// Encolado/Pegado/Calado consume whole placas and round up; Trozado and
/// the generic stages keep fractional consumption at two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rounding {
    CeilUnits,
    TwoDecimals,
}

/// Material required for `desired` produced units at `multiplier` placas
/// per unit, under the stage's rounding rule.
pub fn required_quantity(desired: f64, multiplier: f64, rounding: Rounding) -> f64 {
    let raw = desired * multiplier;
    match rounding {
        Rounding::CeilUnits => raw.ceil(),
        Rounding::TwoDecimals => (raw * 100.0).round() / 100.0,
    }
}

/// Parse the desired-quantity field at confirmation time. Empty, unparseable,
/// zero and negative inputs are all rejected, so they never queue a row.
pub fn parse_desired(raw: &str) -> Option<f64> {
    let value = raw.trim().parse::<f64>().ok()?;
    (value > 0.0).then_some(value)
}

/// Render a resolved quantity the way the stage's input fields show it.
pub fn format_quantity(value: f64, rounding: Rounding) -> String {
    match rounding {
        Rounding::CeilUnits => format!("{:.0}", value),
        Rounding::TwoDecimals => format!("{:.2}", value),
    }
}

/// Recompute the per-material usage fields after a desired-quantity edit.
///
/// A field the operator already filled keeps its value (ceil stages
/// re-round it up to whole placas); empty fields take the recomputed
/// requirement. `manual` may be shorter than `lines` when the operator
/// added extra placa rows.
pub fn fill_usage_fields(
    desired: f64,
    lines: &[MaterialLine],
    manual: &[String],
    rounding: Rounding,
) -> Vec<String> {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let current = manual.get(i).map(String::as_str).unwrap_or("");
            if current.is_empty() {
                format_quantity(required_quantity(desired, line.cant_mat, rounding), rounding)
            } else if rounding == Rounding::CeilUnits {
                match current.parse::<f64>() {
                    Ok(v) => format!("{:.0}", v.ceil()),
                    Err(_) => current.to_string(),
                }
            } else {
                current.to_string()
            }
        })
        .collect()
}

/// Final numeric usage per material at confirmation time: the manual
/// field when parseable, otherwise the recomputed requirement.
pub fn resolve_usage(
    desired: f64,
    lines: &[MaterialLine],
    manual: &[String],
    rounding: Rounding,
) -> Vec<f64> {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let value = manual
                .get(i)
                .and_then(|raw| raw.parse::<f64>().ok())
                .unwrap_or_else(|| required_quantity(desired, line.cant_mat, rounding));
            match rounding {
                Rounding::CeilUnits => value.ceil(),
                Rounding::TwoDecimals => (value * 100.0).round() / 100.0,
            }
        })
        .collect()
}

/// Raised when one material of a batch cannot be covered by the cached
/// snapshot. Nothing has been deducted when this is returned.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryShortage {
    pub placa: String,
    pub requerido: f64,
    pub disponible: f64,
}

impl fmt::Display for InventoryShortage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "No hay suficiente inventario para la placa \"{}\". Requerido: {}, Disponible: {}",
            self.placa, self.requerido, self.disponible
        )
    }
}

/// Deduct a batch of requirements from the snapshot, all-or-nothing.
///
/// Lookup is by exact placa name. Every pair is validated before any
/// entry is touched; a missing entry reports as 0 available. The caller
/// persists the whole snapshot in a single cache write afterwards.
pub fn deduct(
    entries: &mut [InventoryEntry],
    requirements: &[(String, f64)],
) -> Result<(), InventoryShortage> {
    for (placa, requerido) in requirements {
        let disponible = entries
            .iter()
            .find(|e| &e.placa == placa)
            .map(|e| e.cantidad)
            .unwrap_or(0.0);
        if disponible < *requerido {
            return Err(InventoryShortage {
                placa: placa.clone(),
                requerido: *requerido,
                disponible,
            });
        }
    }

    for (placa, requerido) in requirements {
        if let Some(entry) = entries.iter_mut().find(|e| &e.placa == placa) {
            entry.cantidad -= requerido;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(multipliers: &[f64]) -> Vec<MaterialLine> {
        multipliers
            .iter()
            .enumerate()
            .map(|(i, m)| MaterialLine {
                des_prod: format!("PLACA-{}", i + 1),
                cant_mat: *m,
            })
            .collect()
    }

    fn snapshot(pairs: &[(&str, f64)]) -> Vec<InventoryEntry> {
        pairs
            .iter()
            .map(|(placa, cantidad)| InventoryEntry {
                placa: placa.to_string(),
                cantidad: *cantidad,
            })
            .collect()
    }

    #[test]
    fn ceil_stage_rounds_up() {
        assert_eq!(required_quantity(4.0, 2.0, Rounding::CeilUnits), 8.0);
        assert_eq!(required_quantity(3.0, 0.4, Rounding::CeilUnits), 2.0);
        assert_eq!(required_quantity(0.0, 2.0, Rounding::CeilUnits), 0.0);
        assert_eq!(required_quantity(5.0, 0.0, Rounding::CeilUnits), 0.0);
    }

    #[test]
    fn cutting_stage_keeps_two_decimals() {
        assert_eq!(required_quantity(3.0, 0.333, Rounding::TwoDecimals), 1.0);
        assert_eq!(required_quantity(7.0, 0.15, Rounding::TwoDecimals), 1.05);
        assert_eq!(required_quantity(0.0, 9.9, Rounding::TwoDecimals), 0.0);
    }

    #[test]
    fn desired_quantity_must_be_positive() {
        assert_eq!(parse_desired("4"), Some(4.0));
        assert_eq!(parse_desired(" 2.5 "), Some(2.5));
        assert_eq!(parse_desired("0"), None);
        assert_eq!(parse_desired("-3"), None);
        assert_eq!(parse_desired(""), None);
        assert_eq!(parse_desired("doce"), None);
    }

    #[test]
    fn untouched_fields_are_recomputed_and_manual_fields_win() {
        let filled = fill_usage_fields(
            4.0,
            &lines(&[2.0, 1.5]),
            &["".to_string(), "9.2".to_string()],
            Rounding::CeilUnits,
        );
        assert_eq!(filled, vec!["8", "10"]);

        let filled = fill_usage_fields(
            4.0,
            &lines(&[2.0, 1.5]),
            &["".to_string(), "9.25".to_string()],
            Rounding::TwoDecimals,
        );
        assert_eq!(filled, vec!["8.00", "9.25"]);
    }

    #[test]
    fn manual_length_mismatches_are_tolerated() {
        // Operator added a row past the bill of materials: the helper
        // only produces values for known lines, so the extra manual
        // value is left for the caller to keep as-is.
        let filled = fill_usage_fields(
            4.0,
            &lines(&[2.0]),
            &["".to_string(), "7".to_string()],
            Rounding::CeilUnits,
        );
        assert_eq!(filled, vec!["8"]);

        // Manual shorter than the lines: the missing tail is recomputed.
        let filled = fill_usage_fields(
            4.0,
            &lines(&[2.0, 1.5]),
            &["3".to_string()],
            Rounding::TwoDecimals,
        );
        assert_eq!(filled, vec!["3", "6.00"]);
    }

    #[test]
    fn resolve_prefers_manual_values() {
        let usage = resolve_usage(
            4.0,
            &lines(&[2.0, 1.5]),
            &["".to_string(), "9.2".to_string()],
            Rounding::CeilUnits,
        );
        assert_eq!(usage, vec![8.0, 10.0]);
    }

    #[test]
    fn deduct_updates_every_entry_on_success() {
        let mut inventario = snapshot(&[("PLACA-1", 10.0), ("PLACA-2", 5.0)]);
        deduct(
            &mut inventario,
            &[("PLACA-1".to_string(), 8.0), ("PLACA-2".to_string(), 5.0)],
        )
        .unwrap();
        assert_eq!(inventario[0].cantidad, 2.0);
        assert_eq!(inventario[1].cantidad, 0.0);
    }

    #[test]
    fn deduct_is_all_or_nothing() {
        let mut inventario = snapshot(&[("PLACA-1", 10.0), ("PLACA-2", 5.0)]);
        let err = deduct(
            &mut inventario,
            &[("PLACA-1".to_string(), 8.0), ("PLACA-2".to_string(), 6.0)],
        )
        .unwrap_err();
        assert_eq!(err.placa, "PLACA-2");
        assert_eq!(err.requerido, 6.0);
        assert_eq!(err.disponible, 5.0);
        // First pair passed validation but must not have been applied.
        assert_eq!(inventario[0].cantidad, 10.0);
    }

    #[test]
    fn missing_entry_reports_zero_available() {
        let mut inventario = snapshot(&[("PLACA-1", 10.0)]);
        let err = deduct(&mut inventario, &[("PLACA-9".to_string(), 1.0)]).unwrap_err();
        assert_eq!(err.disponible, 0.0);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        // Some source screens matched names case-insensitively; the
        // unified rule is exact match, so a case mismatch is a shortage.
        let mut inventario = snapshot(&[("Placa-1", 10.0)]);
        let err = deduct(&mut inventario, &[("PLACA-1".to_string(), 1.0)]).unwrap_err();
        assert_eq!(err.disponible, 0.0);
    }

    #[test]
    fn successive_deductions_drain_the_snapshot() {
        let mut inventario = snapshot(&[("PLACA-1", 10.0)]);
        deduct(
            &mut inventario,
            &[(
                "PLACA-1".to_string(),
                required_quantity(4.0, 2.0, Rounding::CeilUnits),
            )],
        )
        .unwrap();
        assert_eq!(inventario[0].cantidad, 2.0);

        let err = deduct(
            &mut inventario,
            &[(
                "PLACA-1".to_string(),
                required_quantity(6.0, 2.0, Rounding::CeilUnits),
            )],
        )
        .unwrap_err();
        assert_eq!(err.requerido, 12.0);
        assert_eq!(err.disponible, 2.0);
    }
}
