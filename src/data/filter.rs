use super::model::AppCatalog;

// ---------------------------------------------------------------------------
// Filter selection: one optional equality constraint per dimension
// ---------------------------------------------------------------------------

/// The sidebar's two selections. `None` is the "All" choice — no constraint
/// on that dimension. Both constraints compose with logical AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub category: Option<String>,
    pub app_type: Option<String>,
}

impl Selection {
    /// Whether both dimensions are at "All".
    pub fn is_all(&self) -> bool {
        self.category.is_none() && self.app_type.is_none()
    }
}

/// Return indices of records passing both filters, in catalog order.
///
/// Comparison is exact string equality against the stored values (category
/// verbatim, type already normalized at load time), so the combo-box options
/// taken from [`AppCatalog::categories`]/[`AppCatalog::types`] always match.
pub fn filtered_indices(catalog: &AppCatalog, selection: &Selection) -> Vec<usize> {
    catalog
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| {
            if let Some(cat) = &selection.category {
                if rec.category != *cat {
                    return false;
                }
            }
            if let Some(ty) = &selection.app_type {
                if rec.app_type != *ty {
                    return false;
                }
            }
            true
        })
        .map(|(i, _)| i)
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
