//! Fixed catalogs for agreement and selection-criteria codes.
//!
//! Records snapshot the display label at creation time; old records keep the
//! label they were created with even if this catalog changes later.

use chrono::Utc;
use rand::Rng;

/// A selectable code/label pair.
#[derive(Clone, Copy, Debug)]
pub struct CatalogOption {
    pub value: &'static str,
    pub label: &'static str,
}

pub const AGREEMENT_OPTIONS: [CatalogOption; 5] = [
    CatalogOption {
        value: "benefit-contract-export",
        label: "Benefit Contract Export",
    },
    CatalogOption {
        value: "provider-import",
        label: "Provider Import",
    },
    CatalogOption {
        value: "member-enrollment",
        label: "Member Enrollment",
    },
    CatalogOption {
        value: "claims-processing",
        label: "Claims Processing",
    },
    CatalogOption {
        value: "fee-schedule-sync",
        label: "Fee Schedule Sync",
    },
];

pub const SELECTION_QUERY_OPTIONS: [CatalogOption; 6] = [
    CatalogOption {
        value: "all-records",
        label: "All Records",
    },
    CatalogOption {
        value: "by-contract",
        label: "Select by Contract ID",
    },
    CatalogOption {
        value: "by-date",
        label: "Select by Date Range",
    },
    CatalogOption {
        value: "by-provider",
        label: "Select by Provider ID",
    },
    CatalogOption {
        value: "incremental",
        label: "Incremental Changes Only",
    },
    CatalogOption {
        value: "custom-query",
        label: "Custom SQL Query",
    },
];

/// Display label for an agreement code; unknown codes fall back to the code.
pub fn agreement_label(agreement: &str) -> String {
    AGREEMENT_OPTIONS
        .iter()
        .find(|option| option.value == agreement)
        .map(|option| option.label.to_string())
        .unwrap_or_else(|| agreement.to_string())
}

/// Display label for a criteria code; unknown codes fall back to the code.
pub fn criteria_label(criteria: &str) -> String {
    SELECTION_QUERY_OPTIONS
        .iter()
        .find(|option| option.value == criteria)
        .map(|option| option.label.to_string())
        .unwrap_or_else(|| criteria.to_string())
}

/// Presentation and requirement of the selection-parameter sub-field for one
/// criteria code.
#[derive(Clone, Copy, Debug)]
pub struct CriteriaFieldDescriptor {
    pub label: &'static str,
    pub placeholder: &'static str,
    pub help_text: &'static str,
    pub required: bool,
}

/// Descriptor of the selection-parameter sub-field keyed by criteria code.
///
/// `all-records` (and any unknown code) has no descriptor: the sub-field is
/// not shown and never required.
pub fn criteria_field(criteria: &str) -> Option<&'static CriteriaFieldDescriptor> {
    match criteria {
        "by-contract" => Some(&CriteriaFieldDescriptor {
            label: "Contract ID(s)",
            placeholder: "CONTRACT001, CONTRACT002, CONTRACT003",
            help_text: "Filter data to include only records associated with specific \
                        contract identifiers. Enter one or more contract IDs separated \
                        by commas.",
            required: true,
        }),
        "by-date" => Some(&CriteriaFieldDescriptor {
            label: "Date Range",
            placeholder: "2024-01-01 to 2024-12-31",
            help_text: "Filter data based on creation, modification, or effective dates. \
                        Specify dates in YYYY-MM-DD format or use \"to\" for ranges.",
            required: true,
        }),
        "by-provider" => Some(&CriteriaFieldDescriptor {
            label: "Provider ID(s)",
            placeholder: "PROV001, PROV002, PROV003",
            help_text: "Filter data to include only records for specific providers or \
                        network participants. Enter one or more provider IDs separated \
                        by commas.",
            required: true,
        }),
        "incremental" => Some(&CriteriaFieldDescriptor {
            label: "Cutoff Date (Optional)",
            placeholder: "2024-01-01 (or leave blank)",
            help_text: "Migrate only records modified since the last migration run. \
                        Optionally specify a cutoff date or leave blank to use system \
                        defaults.",
            required: false,
        }),
        "custom-query" => Some(&CriteriaFieldDescriptor {
            label: "SQL Conditions",
            placeholder: "status = 'ACTIVE' AND last_modified > '2024-01-01'",
            help_text: "Define precise selection criteria using SQL WHERE conditions, \
                        entered without the WHERE keyword.",
            required: true,
        }),
        _ => None,
    }
}

/// Derive a package file name from an agreement code, the current date, and a
/// random 3-digit sequence, e.g. `ProviderImport_20260801_042.dtsx`.
pub fn generate_file_name(agreement: &str) -> String {
    let prefix: String = agreement
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect();
    let date = Utc::now().format("%Y%m%d");
    let sequence = rand::rng().random_range(1..=999);

    format!("{}_{}_{:03}.dtsx", prefix, date, sequence)
}
