use derive_more::{Display, Error};

/// Failure kinds surfaced by the record model and the ethnicity engine.
///
/// Functions in the workspace return `eyre::Result`; the kinds below travel inside the report
/// and can be recovered with `report.downcast_ref::<Error>()`.
#[derive(Clone, PartialEq, Eq, Debug, Display, Error)]
pub enum Error {
    /// Malformed or unreadable source data. Row indices are 0-based positions in the input.
    #[display("Malformed {field} in input row {row}: {value:?}")]
    Ingestion {
        row: usize,
        field: &'static str,
        value: String,
    },
    /// A joined record lost its counterpart, i.e. the ingestion contract was violated.
    #[display("Match {name:?} has no counterpart in the {dataset} dataset")]
    Consistency { name: String, dataset: &'static str },
    /// Zero bins were resolved, percentages can't be computed.
    #[display("No bins were resolved, country percentages are undefined")]
    DivisionUndefined,
}
