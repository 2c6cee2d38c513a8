use crate::SheetRow;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// A page render was requested; refreshes the sheet snapshot.
    PageRequested,
    /// The page for the current state was rendered; one-shot messages are dropped.
    PageRendered,
    /// User submitted the add form.
    AddSubmitted {
        url: String,
        submitter: String,
        category: String,
    },
    /// The sheet accepted the appended row.
    RowAppended,
    /// The sheet rejected or never received the appended row.
    RowAppendFailed { reason: String },
    /// Full sheet contents in sheet order.
    RowsLoaded(Vec<SheetRow>),
    /// Reading the sheet failed.
    RowsLoadFailed(String),
    /// User changed the result filters. Values are raw choice labels.
    FilterChanged { submitter: String, category: String },
    /// User toggled the favorite button of the 1-based `position`.
    FavoriteToggled { position: usize },
    /// User opened the delete confirmation of the 1-based `position`.
    DeleteRequested { position: usize },
    /// User clicked "yes" in the delete confirmation.
    DeleteConfirmed { position: usize },
    /// User dismissed the delete confirmation.
    DeleteCancelled,
    /// User clicked "clear list".
    ClearClicked,
    /// User clicked "copy list".
    CopyClicked,
}
