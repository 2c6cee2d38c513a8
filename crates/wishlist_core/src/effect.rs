use crate::SheetRow;

/// IO requested by `update`; the app executes these and feeds the outcome back as a `Msg`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Append one row at the end of the worksheet.
    AppendRow(SheetRow),
    /// Read every row of the worksheet.
    LoadRows,
}
