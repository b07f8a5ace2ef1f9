use crate::data::KpiTable;
use crate::errors::LookupError;
use crate::models::kpi::KpiView;

/// First KPI row for `identifier`, as a read-only view.
/// No aggregation across repeated rows.
pub fn resolve(identifier: &str, kpis: &KpiTable) -> Result<KpiView, LookupError> {
    kpis.iter()
        .find(|k| k.identifier == identifier)
        .cloned()
        .map(KpiView::new)
        .ok_or(LookupError::NoKpiData)
}
